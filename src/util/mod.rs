//! Utility modules: configuration, localisation, logging

pub mod config;
pub mod i18n;
pub mod logger;
