//! HTTP route handlers.

pub mod health;
pub mod recipes;
