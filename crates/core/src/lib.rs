//! Core business logic for pkucat.
//!
//! Services validate input, check ownership and keep the keyword index in
//! step with post text. Storage is delegated to `pkucat-db`.

pub mod services;

pub use services::*;
