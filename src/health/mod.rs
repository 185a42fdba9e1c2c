// src/health/mod.rs
mod checker;
mod memory;
mod status;

pub use checker::{StatusChecker, StatusCheckerConfig};
pub use memory::parse_used_memory;
pub use status::{Status, UnhealthyReason};
