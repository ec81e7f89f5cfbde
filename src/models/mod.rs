//! Data models for cn-hub

mod hub;
mod error;

pub use hub::*;
pub use error::*;
