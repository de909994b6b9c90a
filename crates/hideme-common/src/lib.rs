//! # HideMe Common
//!
//! Shared types, errors, and constants used across HideMe components.
//!
//! ## Modules
//! - `types` - Core data structures (ConcealMode, CaptchaDifficulty, etc.)
//! - `error` - User-facing validation errors
//! - `constants` - Shared defaults

pub mod constants;
pub mod error;
pub mod types;

pub use error::AgeVerificationError;
pub use types::*;
