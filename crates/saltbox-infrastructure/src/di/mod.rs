//! Dependency wiring
//!
//! All services are handed out as `Arc<dyn Trait>` using the ports defined
//! in `saltbox-domain`. [`init_app`] is the composition root; the factories
//! build individual services from their configuration sections.
//!
//! ```text
//! AppConfig → factory → Arc<dyn PasswordHasher>
//!                     → Arc<dyn CipherProvider>
//!           → AppContext (shared RandomSource)
//! ```

pub mod bootstrap;
pub mod factory;

pub use bootstrap::{AppContext, init_app, init_test_app};
pub use factory::{create_cipher, create_password_hasher};
