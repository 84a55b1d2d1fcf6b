//! Shared utilities for the ReferralBoard backend.
//!
//! This crate provides leaf functionality used by the other crates:
//! - E-mail syntax validation
//! - Password hashing with Argon2id

pub mod password;
pub mod validation;
