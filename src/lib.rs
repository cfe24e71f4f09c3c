pub mod config;
pub mod endpoint;
pub mod error;
pub mod handler;

pub use error::{Error, Result};
