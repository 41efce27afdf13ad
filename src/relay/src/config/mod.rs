mod config_loader;
mod defaults;
mod tests;

pub use config_loader::{Config, ConfigLoader, ENV_OVERRIDES};
