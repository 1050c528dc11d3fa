//! Subnet calculation logic.
//!
//! - [`planner`] - Plan computation and per-subnet address ranges
//! - [`selection`] - Which subnets a table shows

mod planner;
mod selection;

// Re-export public functions
pub use planner::{compute_plan, detect_stray_bits, subnet_at, Subnets};
pub use selection::{selected_indices, SelectedIndices, ALL_RESULTS, DEFAULT_NUM_RESULTS};
