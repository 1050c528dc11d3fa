//! Output formatting for subnetting plans.
//!
//! - [`terminal`] - Summary block and tab delimited table

mod terminal;

pub use terminal::{
    elision_row, format_row, write_stray_warning, write_summary, write_table, ELISION_INDEX,
    HEADER,
};
