//! Command implementations

pub mod execute;
pub mod info;
pub mod validate;
pub mod version;
