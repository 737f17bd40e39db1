pub mod config;
pub mod plugin;
pub mod validation;

pub use config::ConfigParser;
pub use plugin::{
    ExecuteRequest, ExecuteResponse, Hook, PluginInfo, ReleaseContext, UnknownHookError,
};
pub use validation::{ValidateResponse, ValidationBuilder, ValidationError};
