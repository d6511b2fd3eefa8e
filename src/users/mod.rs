//! User records subsystem.
//!
//! # Data Flow
//! ```text
//! Write payload (untrusted JSON)
//!     → validator.rs (trim, required, alphabet, lengths)
//!     → NewUser (normalized triple)
//!     → store.rs (uniqueness check, id assignment, mutation)
//!     → User (stored record)
//! ```
//!
//! # Design Decisions
//! - Validation is a pure function returning a typed error, no side effects
//! - The store is an owned value shared via Arc, never a global
//! - One mutex guards the whole collection; check-then-append is atomic

pub mod model;
pub mod store;
pub mod validator;

pub use model::{NewUser, User, UserPayload};
pub use store::{IdStrategy, StoreError, UserStore};
pub use validator::{validate_user, ValidationError};
