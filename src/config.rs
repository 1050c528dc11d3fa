//! Run configuration, built once at startup.

use crate::error::CalcError;
use crate::models::{format_address, NetworkPrefix};
use crate::processing::DEFAULT_NUM_RESULTS;
use std::num::IntErrorKind;

/// Everything one run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Network to divide.
    pub network: NetworkPrefix,
    /// Base address as it was typed, echoed back in the summary.
    pub network_text: String,
    /// Requested number of subnets, rounded up when planning.
    pub desired_subnets: i64,
    /// Leading and trailing subnets to list, `-1` for all.
    pub num_results: i64,
    /// Print only the table rows.
    pub quiet: bool,
}

impl Config {
    /// Config with the default table size and the summary enabled.
    pub fn new(network: NetworkPrefix, desired_subnets: i64) -> Self {
        Config {
            network,
            network_text: format_address(network.addr),
            desired_subnets,
            num_results: DEFAULT_NUM_RESULTS,
            quiet: false,
        }
    }

    /// Build from the raw network and subnet count text.
    pub fn from_text(cidr: &str, subnets: &str) -> Result<Self, CalcError> {
        let network = NetworkPrefix::new(cidr)?;
        let desired_subnets = parse_subnet_count(subnets)?;
        let cidr = cidr.trim();
        let network_text = cidr.split_once('/').map_or(cidr, |(addr, _)| addr);
        Ok(Config {
            network_text: network_text.to_string(),
            ..Config::new(network, desired_subnets)
        })
    }
}

/// Parse a decimal subnet count. Zero and negative values are allowed.
///
/// Counts beyond the `i64` range saturate; no plan can hold them anyway.
pub fn parse_subnet_count(text: &str) -> Result<i64, CalcError> {
    let text = text.trim();
    match text.parse::<i64>() {
        Ok(n) => Ok(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(CalcError::format(format!(
                "Invalid number of subnets '{text}'"
            ))),
        },
    }
}
