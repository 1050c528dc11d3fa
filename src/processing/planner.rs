//! Divide a network into a power of two equal subnets.

use crate::error::CalcError;
use crate::models::{
    broadcast_addr, NetworkPrefix, SubnetRecord, SubnettingPlan, MAX_LENGTH,
};
use std::net::Ipv4Addr;

/// Work out how many bits to borrow for `desired_subnets` subnets.
///
/// The subnet count is rounded up to the next power of two. Counts of zero or
/// below need no bits at all and leave the network whole.
pub fn compute_plan(
    network: NetworkPrefix,
    desired_subnets: i64,
) -> Result<SubnettingPlan, CalcError> {
    let mut actual_subnets: u64 = 1;
    let mut subnet_id_width: u32 = 0;
    while (actual_subnets as i128) < desired_subnets as i128 {
        actual_subnets *= 2;
        subnet_id_width += 1;
    }

    let new_prefix_width = network.width as u32 + subnet_id_width;
    if new_prefix_width > MAX_LENGTH as u32 {
        log::debug!(
            "{} subnets of {} need /{}",
            desired_subnets,
            network,
            new_prefix_width
        );
        return Err(CalcError::Range {
            prefix: network.width,
            subnet_bits: subnet_id_width,
        });
    }

    let plan = SubnettingPlan {
        network,
        desired_subnets,
        subnet_id_width,
        actual_subnets,
        new_prefix_width: new_prefix_width as u8,
        host_id_width: MAX_LENGTH as u32 - new_prefix_width,
    };
    log::debug!("plan for {network}: {plan:?}");
    Ok(plan)
}

/// True when the base address has bits set past the prefix width.
pub fn detect_stray_bits(base: Ipv4Addr, width: u8) -> bool {
    NetworkPrefix { addr: base, width }.stray_bits() != 0
}

/// Address range of subnet `index`.
///
/// The subnet number is OR-ed into the base address at the host boundary, so
/// stray base bits carry through. `index` must be below `plan.actual_subnets`.
pub fn subnet_at(plan: &SubnettingPlan, index: u64) -> SubnetRecord {
    debug_assert!(
        index < plan.actual_subnets,
        "subnet index {index} out of range for {} subnets",
        plan.actual_subnets
    );
    let base = u32::from(plan.network.addr);
    let subnet_bits = (index << plan.host_id_width) as u32;
    let network = Ipv4Addr::from(base | subnet_bits);
    let broadcast = broadcast_addr(network, plan.new_prefix_width);

    SubnetRecord {
        index,
        network,
        prefix_width: plan.new_prefix_width,
        first_usable: Ipv4Addr::from(u32::from(network).wrapping_add(1)),
        last_usable: Ipv4Addr::from(u32::from(broadcast).wrapping_sub(1)),
        broadcast,
    }
}

/// Lazily walks every subnet of a plan in ascending order.
pub struct Subnets<'a> {
    plan: &'a SubnettingPlan,
    next: u64,
}

impl<'a> Subnets<'a> {
    pub fn new(plan: &'a SubnettingPlan) -> Self {
        Subnets { plan, next: 0 }
    }
}

impl Iterator for Subnets<'_> {
    type Item = SubnetRecord;

    fn next(&mut self) -> Option<SubnetRecord> {
        if self.next >= self.plan.actual_subnets {
            return None;
        }
        let record = subnet_at(self.plan, self.next);
        self.next += 1;
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.plan.actual_subnets - self.next) as usize;
        (left, Some(left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(text: &str) -> NetworkPrefix {
        NetworkPrefix::new(text).unwrap()
    }

    #[test]
    fn test_compute_plan_class_a() {
        let plan = compute_plan(net("25.0.0.0/8"), 32).unwrap();
        assert_eq!(plan.subnet_id_width, 5);
        assert_eq!(plan.actual_subnets, 32);
        assert_eq!(plan.new_prefix_width, 13);
        assert_eq!(plan.host_id_width, 19);
        assert_eq!(plan.hosts_per_subnet(), 524286);
    }

    #[test]
    fn test_compute_plan_class_b() {
        let plan = compute_plan(net("172.16.0.0/16"), 64).unwrap();
        assert_eq!(plan.subnet_id_width, 6);
        assert_eq!(plan.actual_subnets, 64);
        assert_eq!(plan.new_prefix_width, 22);
        assert_eq!(plan.host_id_width, 10);
        assert_eq!(plan.hosts_per_subnet(), 1022);
    }

    #[test]
    fn test_compute_plan_single_subnet() {
        let plan = compute_plan(net("192.168.0.0/24"), 1).unwrap();
        assert_eq!(plan.subnet_id_width, 0);
        assert_eq!(plan.actual_subnets, 1);
        assert_eq!(plan.new_prefix_width, 24);
        assert_eq!(plan.host_id_width, 8);
    }

    #[test]
    fn test_compute_plan_zero_or_negative() {
        for desired in [0, -1, -500] {
            let plan = compute_plan(net("10.0.0.0/8"), desired).unwrap();
            assert_eq!(plan.subnet_id_width, 0);
            assert_eq!(plan.actual_subnets, 1);
            assert_eq!(plan.desired_subnets, desired);
        }
    }

    #[test]
    fn test_compute_plan_rounds_up_to_power_of_two() {
        let mut last_width = 0;
        for desired in 1..=1025i64 {
            let plan = compute_plan(net("0.0.0.0/0"), desired).unwrap();
            assert!(plan.actual_subnets.is_power_of_two());
            assert!(plan.actual_subnets as i64 >= desired);
            assert!(plan.actual_subnets == 1 || ((plan.actual_subnets / 2) as i64) < desired);
            assert_eq!(plan.actual_subnets, 1u64 << plan.subnet_id_width);
            assert!(plan.subnet_id_width >= last_width);
            last_width = plan.subnet_id_width;
        }
    }

    #[test]
    fn test_compute_plan_infeasible() {
        let err = compute_plan(net("10.0.0.0/30"), 8).unwrap_err();
        match err {
            CalcError::Range {
                prefix,
                subnet_bits,
            } => {
                assert_eq!(prefix, 30);
                assert_eq!(subnet_bits, 3);
            }
            other => panic!("expected range error, got {other:?}"),
        }
        assert!(compute_plan(net("10.0.0.0/30"), 4).is_ok());
        assert!(compute_plan(net("0.0.0.0/0"), i64::MAX).is_err());
        assert!(compute_plan(net("0.0.0.0/0"), 1 << 32).is_ok());
    }

    #[test]
    fn test_detect_stray_bits() {
        assert!(!detect_stray_bits(Ipv4Addr::new(25, 0, 0, 0), 8));
        assert!(detect_stray_bits(Ipv4Addr::new(25, 0, 0, 1), 8));
        assert!(detect_stray_bits(Ipv4Addr::new(10, 0, 1, 0), 16));
        assert!(!detect_stray_bits(Ipv4Addr::new(255, 255, 255, 255), 32));
        assert!(detect_stray_bits(Ipv4Addr::new(0, 0, 0, 1), 0));
    }

    #[test]
    fn test_subnet_at_first() {
        let plan = compute_plan(net("25.0.0.0/8"), 32).unwrap();
        let first = subnet_at(&plan, 0);
        assert_eq!(first.cidr().to_string(), "25.0.0.0/13");
        assert_eq!(first.first_usable, Ipv4Addr::new(25, 0, 0, 1));
        assert_eq!(first.last_usable, Ipv4Addr::new(25, 7, 255, 254));
        assert_eq!(first.broadcast, Ipv4Addr::new(25, 7, 255, 255));
    }

    #[test]
    fn test_subnet_at_last() {
        let plan = compute_plan(net("172.16.0.0/16"), 64).unwrap();
        let last = subnet_at(&plan, 63);
        assert_eq!(last.network, Ipv4Addr::new(172, 16, 252, 0));
        assert_eq!(last.first_usable, Ipv4Addr::new(172, 16, 252, 1));
        assert_eq!(last.last_usable, Ipv4Addr::new(172, 16, 255, 254));
        assert_eq!(last.broadcast, Ipv4Addr::new(172, 16, 255, 255));
    }

    #[test]
    fn test_subnet_ranges_are_consistent() {
        for (text, desired) in [("25.0.0.0/8", 32), ("192.168.0.0/24", 5), ("10.0.0.0/29", 2)] {
            let plan = compute_plan(net(text), desired).unwrap();
            let span = (1u64 << plan.host_id_width) - 1;
            for record in Subnets::new(&plan) {
                let network = u32::from(record.network);
                let broadcast = u32::from(record.broadcast);
                assert!(network < broadcast);
                assert_eq!((broadcast - network) as u64, span);
                assert_eq!(u32::from(record.first_usable), network + 1);
                assert_eq!(u32::from(record.last_usable), broadcast - 1);
            }
        }
    }

    #[test]
    fn test_subnet_at_whole_address_space() {
        let plan = compute_plan(net("0.0.0.0/0"), 1).unwrap();
        assert_eq!(plan.host_id_width, 32);
        let record = subnet_at(&plan, 0);
        assert_eq!(record.network, Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(record.broadcast, Ipv4Addr::new(255, 255, 255, 255));
        assert_eq!(record.last_usable, Ipv4Addr::new(255, 255, 255, 254));
    }

    #[test]
    fn test_subnet_at_host_routes() {
        let plan = compute_plan(net("10.0.0.0/30"), 4).unwrap();
        assert_eq!(plan.host_id_width, 0);
        let record = subnet_at(&plan, 3);
        assert_eq!(record.network, Ipv4Addr::new(10, 0, 0, 3));
        assert_eq!(record.broadcast, Ipv4Addr::new(10, 0, 0, 3));
        assert_eq!(record.first_usable, Ipv4Addr::new(10, 0, 0, 4));
        assert_eq!(record.last_usable, Ipv4Addr::new(10, 0, 0, 2));
    }

    #[test]
    fn test_subnet_at_keeps_stray_bits() {
        let plan = compute_plan(net("10.0.0.5/24"), 2).unwrap();
        let second = subnet_at(&plan, 1);
        assert_eq!(second.network, Ipv4Addr::new(10, 0, 0, 133));
        assert_eq!(second.broadcast, Ipv4Addr::new(10, 0, 0, 255));
    }

    #[test]
    fn test_subnets_iterator() {
        let plan = compute_plan(net("192.168.0.0/24"), 4).unwrap();
        let subnets = Subnets::new(&plan);
        assert_eq!(subnets.size_hint(), (4, Some(4)));
        let networks: Vec<String> = subnets.map(|r| r.cidr().to_string()).collect();
        assert_eq!(
            networks,
            vec![
                "192.168.0.0/26",
                "192.168.0.64/26",
                "192.168.0.128/26",
                "192.168.0.192/26"
            ]
        );
    }
}
