pub mod env;
mod loader;

pub use env::{AppConfig, DirectoryConfig, NotifyConfig, SearchConfig};
pub use loader::load_config;
