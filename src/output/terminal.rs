//! Plain text output of a subnetting plan.
//!
//! Everything goes through a `Write` so the same code prints to stdout and
//! into buffers under test.

use crate::models::{format_address, SubnetRecord, SubnettingPlan};
use crate::processing::{selected_indices, subnet_at, ALL_RESULTS};
use std::io::{self, Write};

/// Table rows are elided right after this subnet index, whatever `num_results` is.
pub const ELISION_INDEX: u64 = 10;

const DIVIDER_WIDTH: usize = 80;

/// Tab delimited column titles.
pub const HEADER: &str = "Subnet Number\tNetwork Address\tFirst Usable Address\tLast Usable Address\tBroadcast Address";

/// Advisory for a base address with bits past its prefix.
pub fn write_stray_warning<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Input network address contains more bits than the subnet mask.\nThis may cause errors in the calculation."
    )
}

/// Summary block followed by the column header.
///
/// `network_text` is the base address as the user wrote it.
pub fn write_summary<W: Write>(
    out: &mut W,
    plan: &SubnettingPlan,
    network_text: &str,
) -> io::Result<()> {
    let divider = "-".repeat(DIVIDER_WIDTH);
    writeln!(out, "{divider}")?;
    writeln!(
        out,
        "Divide the network {network_text} into {} subnets.",
        plan.desired_subnets
    )?;
    writeln!(out, "Desired Subnets: {}", plan.desired_subnets)?;
    writeln!(out, "Actual Subnets: {}", plan.actual_subnets)?;
    writeln!(out, "Hosts per Subnet: {}", plan.hosts_per_subnet())?;
    writeln!(out, "Total Hosts: {}", plan.total_hosts())?;
    writeln!(out, "{divider}")?;
    writeln!(out, "{HEADER}")
}

/// One table row, numbering subnets from 1.
pub fn format_row(record: &SubnetRecord) -> String {
    format!(
        "{j}\t{cidr}\t{first}\t{last}\t{broadcast}",
        j = record.index + 1,
        cidr = record.cidr(),
        first = format_address(record.first_usable),
        last = format_address(record.last_usable),
        broadcast = format_address(record.broadcast),
    )
}

/// Separator row standing in for the skipped subnets.
pub fn elision_row() -> String {
    "...\t".repeat(5)
}

/// Write the selected rows in ascending order.
///
/// The elision row goes where subnet [`ELISION_INDEX`] sits in the sequence,
/// whether or not that subnet is itself selected. It is left out when every
/// subnet is requested or the plan has no subnet at that index.
pub fn write_table<W: Write>(
    out: &mut W,
    plan: &SubnettingPlan,
    num_results: i64,
) -> io::Result<()> {
    let mut elision_pending = num_results != ALL_RESULTS && plan.actual_subnets > ELISION_INDEX;
    let mut rows = 0u64;

    for index in selected_indices(plan.actual_subnets, num_results) {
        if elision_pending && index > ELISION_INDEX {
            writeln!(out, "{}", elision_row())?;
            elision_pending = false;
        }
        writeln!(out, "{}", format_row(&subnet_at(plan, index)))?;
        rows += 1;
        if elision_pending && index == ELISION_INDEX {
            writeln!(out, "{}", elision_row())?;
            elision_pending = false;
        }
    }
    if elision_pending {
        writeln!(out, "{}", elision_row())?;
    }

    log::info!("# Wrote {rows} of {} subnets", plan.actual_subnets);
    Ok(())
}
