//! Domain Port Interfaces
//!
//! Ports define the contracts that the infrastructure layer implements:
//! - High-level code depends on these traits
//! - Concrete primitives live in saltbox-infrastructure

/// External service provider ports
pub mod providers;

pub use providers::{CipherProvider, PasswordHasher, RandomSource};
