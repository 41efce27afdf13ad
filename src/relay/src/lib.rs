pub mod cli;
pub mod config;
pub mod constants;
pub mod envelope;
pub mod exporters;
pub mod logging;
pub mod server;
pub mod utils;
