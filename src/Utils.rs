//! different utility modules used throughout the project
/// TOML configuration of the CLI
pub mod config;
/// tiny module to set up terminal and file logging
pub mod logger;
/// locate, load and render document files
pub mod files;
