pub mod env_keys;
pub mod detector;
pub mod service;
pub mod utilities;
