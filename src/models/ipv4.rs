//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`NetworkPrefix`] for a network in slash notation, the text codec
//! for dotted decimal addresses, and the mask helpers the planner builds on.

use crate::error::CalcError;
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

lazy_static! {
    static ref OCTETS_RE: Regex =
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$").expect("Invalid Regex?");
}

/// Parse a dotted decimal address such as `"10.1.2.3"`.
///
/// Exactly four decimal components are required, each in `0..=255`.
///
/// # Examples
/// ```
/// use subnet_calc::models::parse_address;
/// assert_eq!(u32::from(parse_address("25.0.0.1").unwrap()), 0x19000001);
/// ```
pub fn parse_address(text: &str) -> Result<Ipv4Addr, CalcError> {
    let text = text.trim();
    let caps = OCTETS_RE
        .captures(text)
        .ok_or_else(|| CalcError::format(format!("Invalid address {text}")))?;

    let mut bits: u32 = 0;
    for i in 1..=4 {
        let octet: u8 = caps[i]
            .parse()
            .map_err(|_| CalcError::format(format!("Octet {} out of range in {text}", &caps[i])))?;
        bits = (bits << 8) | octet as u32;
    }
    Ok(Ipv4Addr::from(bits))
}

/// Render an address as four unsigned decimal octets without leading zeros.
pub fn format_address(addr: Ipv4Addr) -> String {
    addr.to_string()
}

/// Parse `address/width` into its base address and prefix width.
pub fn parse_cidr(text: &str) -> Result<(Ipv4Addr, u8), CalcError> {
    let text = text.trim();
    let (addr, width) = text
        .split_once('/')
        .ok_or_else(|| CalcError::format(format!("Missing '/' in {text}")))?;
    let addr = parse_address(addr)?;
    let width = width.trim();
    if width.is_empty() || !width.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalcError::format(format!("Invalid prefix width '{width}'")));
    }
    let width: u8 = width
        .parse()
        .map_err(|_| CalcError::format(format!("Invalid prefix width '{width}'")))?;
    if width > MAX_LENGTH {
        return Err(CalcError::format(format!(
            "Prefix width /{width} is longer than {MAX_LENGTH}"
        )));
    }
    Ok((addr, width))
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// Widths above 32 saturate to an all ones mask.
///
/// # Examples
/// ```
/// use subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len.min(MAX_LENGTH);
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    mask as u32
}

/// Flip a mask, turning network bits into host bits.
pub fn invert_mask(mask: u32) -> u32 {
    !mask
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Ipv4Addr {
    let mask = get_cidr_mask(len);
    let addr_bits = u32::from(addr);
    Ipv4Addr::from(addr_bits | invert_mask(mask))
}

/// IPv4 network in slash notation.
///
/// The base address is kept exactly as given, so it may carry bits beyond
/// `width`.
#[derive(Eq, Debug, Copy, Clone, Hash, PartialEq)]
pub struct NetworkPrefix {
    /// The base address.
    pub addr: Ipv4Addr,
    /// Number of leading network bits (0-32).
    pub width: u8,
}

impl NetworkPrefix {
    /// Create a new [`NetworkPrefix`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<NetworkPrefix, CalcError> {
        let (addr, width) = parse_cidr(addr_cidr)?;
        Ok(NetworkPrefix { addr, width })
    }

    /// Mask covering the network bits.
    pub fn mask(&self) -> u32 {
        get_cidr_mask(self.width)
    }

    /// Bits of the base address that fall outside the prefix.
    pub fn stray_bits(&self) -> u32 {
        u32::from(self.addr) & invert_mask(self.mask())
    }
}

impl FromStr for NetworkPrefix {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NetworkPrefix::new(s)
    }
}

impl std::fmt::Display for NetworkPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", format_address(self.addr), self.width)
    }
}
