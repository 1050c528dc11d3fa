//! Divide an IPv4 network into a power of two equal subnets and list their
//! address ranges.
//!
//! # Modules
//!
//! - [`models`] - Address codec, masks, plan and record types
//! - [`processing`] - Plan computation and row selection
//! - [`output`] - Summary and table formatting
//! - [`cli`] / [`config`] - Turning arguments or prompts into a [`Config`]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use std::io::Write;

pub use config::Config;
pub use error::CalcError;

/// Plan the subnets for `config` and write the results to `out`.
///
/// Nothing is written unless the plan is feasible.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<(), CalcError> {
    log::info!(
        "#Start run() network={} desired_subnets={}",
        config.network,
        config.desired_subnets
    );
    let plan = processing::compute_plan(config.network, config.desired_subnets)?;

    if processing::detect_stray_bits(config.network.addr, config.network.width) {
        log::debug!("{} has bits past /{}", config.network.addr, config.network.width);
        output::write_stray_warning(out)?;
    }
    if !config.quiet {
        output::write_summary(out, &plan, &config.network_text)?;
    }
    output::write_table(out, &plan, config.num_results)?;
    out.flush()?;
    Ok(())
}
