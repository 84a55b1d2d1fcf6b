//! Domain layer for the ReferralBoard backend.
//!
//! This crate contains:
//! - Domain models (CandidateUser, FinalizedUser, Company, YearsOfExperience)
//! - The persistence gateway contract and an in-memory implementation
//! - Registration reconciliation services

pub mod models;
pub mod services;
