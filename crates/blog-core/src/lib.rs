//! # Blog Core
//!
//! The domain layer of the blog posts service.
//! This crate contains the post schema, its external projection and the
//! repository ports, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
