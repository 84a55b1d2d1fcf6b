//! Persistence layer for the ReferralBoard backend.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - Repository implementations
//! - The PostgreSQL registration gateway
//! - Startup seeding of reference and demo data

pub mod db;
pub mod entities;
pub mod gateway;
pub mod metrics;
pub mod repositories;
pub mod seed;
