pub mod browser;
pub mod config;
pub mod navigate;
pub mod session;
