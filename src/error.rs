//! Error types for subnet calculations.

use std::io;
use thiserror::Error;

/// Error returned while reading input or building a subnetting plan.
#[derive(Error, Debug)]
pub enum CalcError {
    /// Malformed CIDR text, octet, prefix width or integer argument.
    #[error("invalid input: {0}")]
    Format(String),

    /// The requested subnets do not fit in 32 bits of address space.
    #[error("{}", format_range(.prefix, .subnet_bits))]
    Range {
        /// Prefix width of the network being divided.
        prefix: u8,
        /// Number of bits needed to number the subnets.
        subnet_bits: u32,
    },

    /// Unrecognised or ill-formed command line usage.
    #[error("bad flag or argument: {0}")]
    Flag(String),

    /// Reading the prompts or writing the results failed.
    #[error("i/o error: {0}")]
    Io(
        #[from]
        #[source]
        io::Error,
    ),
}

fn format_range(prefix: &u8, subnet_bits: &u32) -> String {
    format!(
        "cannot borrow {subnet_bits} subnet bits from a /{prefix} network ({} > 32)",
        *prefix as u32 + subnet_bits
    )
}

impl CalcError {
    /// Creates a Format error from anything printable.
    pub fn format(message: impl Into<String>) -> Self {
        CalcError::Format(message.into())
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CalcError::Flag(_) => 1,
            CalcError::Format(_) => 2,
            CalcError::Range { .. } => 3,
            CalcError::Io(_) => 4,
        }
    }
}
