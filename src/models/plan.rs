//! Subnetting plan and per-subnet record.

use super::NetworkPrefix;
use std::net::Ipv4Addr;

/// How a network is divided into equal subnets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnettingPlan {
    /// The network being divided, base address as supplied.
    pub network: NetworkPrefix,
    /// Subnet count that was asked for.
    pub desired_subnets: i64,
    /// Bits borrowed from the host part to number the subnets.
    pub subnet_id_width: u32,
    /// Always `2^subnet_id_width`.
    pub actual_subnets: u64,
    /// Prefix width of every subnet.
    pub new_prefix_width: u8,
    /// Bits left for hosts inside each subnet.
    pub host_id_width: u32,
}

impl SubnettingPlan {
    /// Usable hosts per subnet, `2^host_id_width - 2`.
    ///
    /// Not clamped: a /32 plan reports -1 and a /31 plan reports 0.
    pub fn hosts_per_subnet(&self) -> i64 {
        (1i64 << self.host_id_width) - 2
    }

    /// `hosts_per_subnet * actual_subnets`.
    pub fn total_hosts(&self) -> i64 {
        self.hosts_per_subnet() * self.actual_subnets as i64
    }
}

/// Address range of one subnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetRecord {
    /// Zero based position in the plan.
    pub index: u64,
    pub network: Ipv4Addr,
    pub prefix_width: u8,
    pub first_usable: Ipv4Addr,
    pub last_usable: Ipv4Addr,
    pub broadcast: Ipv4Addr,
}

impl SubnetRecord {
    /// The subnet in slash notation.
    pub fn cidr(&self) -> NetworkPrefix {
        NetworkPrefix {
            addr: self.network,
            width: self.prefix_width,
        }
    }
}
