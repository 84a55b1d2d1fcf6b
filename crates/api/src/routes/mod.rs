//! HTTP route handlers.

pub mod health;
pub mod reference;
pub mod users;
