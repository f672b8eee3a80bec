//! Application layer: services and use cases
//!
//! This layer drives the domain rule tree from line-oriented input.

pub mod error;
pub mod error_ext;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
