//! Domain models for subnet calculations.
//!
//! This module contains the core data structures used throughout the application:
//! - [`NetworkPrefix`] - IPv4 network in slash notation, plus the address codec
//! - [`SubnettingPlan`] - how a network is divided
//! - [`SubnetRecord`] - address range of a single subnet

mod ipv4;
mod plan;

// Re-export public types
pub use ipv4::{
    broadcast_addr, format_address, get_cidr_mask, invert_mask, parse_address, parse_cidr,
    NetworkPrefix, MAX_LENGTH,
};
pub use plan::{SubnetRecord, SubnettingPlan};
