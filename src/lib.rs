// src/lib.rs
pub mod client;
pub mod config;
pub mod health;

pub use client::{ClientError, StatusClient};
pub use health::{Status, StatusChecker, StatusCheckerConfig, UnhealthyReason};
