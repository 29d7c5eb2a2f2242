//! # Saltbox Domain Layer
//!
//! Core types shared by every Saltbox crate:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error enum and `Result` alias |
//! | [`constants`] | Record sizes and KDF parameters |
//! | [`value_objects`] | Hash scheme, text encoding, hasher configuration |
//! | [`ports`] | Hasher, cipher and random source traits |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use constants::*;
pub use error::{Error, Result};
pub use ports::{CipherProvider, PasswordHasher, RandomSource};
pub use value_objects::{HashScheme, HasherConfig, TextEncoding};
