pub mod config;
pub mod logging;

pub mod downloader;
pub mod error;
pub mod install;
pub mod paths;
pub mod storage;
pub mod url_model;

pub use error::FetchError;
pub use install::{install, Installed, PluginSource, NETWORK_ALERTS};
