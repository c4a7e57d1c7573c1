//! IPv4 prefix (CIDR block) and address arithmetic.
//!
//! Provides [`Prefix`] for aligned CIDR blocks, along with the bit helpers the
//! formatter and the set operations are built on.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Number of addresses in the whole IPv4 space.
pub const SPACE_SIZE: u64 = 1 << MAX_LENGTH;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use prettyip::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err(format!("Prefix length /{len} is too long").into())
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Number of addresses in a block of the given prefix length.
pub fn block_size(len: u8) -> u64 {
    debug_assert!(len <= MAX_LENGTH);
    1u64 << (MAX_LENGTH - len.min(MAX_LENGTH))
}

/// Shortest prefix length `addr` is aligned to, based on trailing zeros.
///
/// `0.0.0.0` is aligned to every length and returns 0.
pub fn lo_mask(addr: u32) -> u8 {
    if addr == 0 {
        return 0;
    }
    MAX_LENGTH - addr.trailing_zeros() as u8
}

/// Prefix length of a block holding exactly `size` addresses, if `size` is a
/// power of two that fits in the address space.
pub fn len_for_size(size: u64) -> Option<u8> {
    if size == 0 || size > SPACE_SIZE || !size.is_power_of_two() {
        return None;
    }
    Some(MAX_LENGTH - size.trailing_zeros() as u8)
}

/// An aligned IPv4 CIDR block.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Prefix {
    /// The network (first) address of the block.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub len: u8,
}

impl Serialize for Prefix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Prefix {
    fn deserialize<D>(deserializer: D) -> Result<Prefix, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Prefix::from_str(&s).map_err(|e| de::Error::custom(format!("invalid prefix {s}: {e}")))
    }
}

impl Prefix {
    /// Create a [`Prefix`] from a network address and length.
    ///
    /// Fails when `len` exceeds 32 or `addr` has host bits set.
    pub fn new(addr: Ipv4Addr, len: u8) -> Result<Prefix, Box<dyn Error>> {
        let network = cut_addr(addr, len)?;
        if network != addr {
            return Err(format!("{addr}/{len} has host bits set (network is {network}/{len})").into());
        }
        Ok(Prefix { addr, len })
    }

    /// A single address as a `/32`.
    pub fn host(addr: Ipv4Addr) -> Prefix {
        Prefix {
            addr,
            len: MAX_LENGTH,
        }
    }

    /// Lowest address in the block.
    pub fn lo(&self) -> Ipv4Addr {
        self.addr
    }

    /// Highest (broadcast) address in the block.
    pub fn hi(&self) -> Ipv4Addr {
        let bits = u32::from(self.addr) as u64 + self.size() - 1;
        Ipv4Addr::from(bits as u32)
    }

    /// Number of addresses covered.
    pub fn size(&self) -> u64 {
        block_size(self.len)
    }

    /// Whether `addr` falls inside this block.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.lo() <= addr && addr <= self.hi()
    }

    /// Whether `other` lies wholly inside this block.
    pub fn contains_prefix(&self, other: &Prefix) -> bool {
        self.contains(other.lo()) && self.contains(other.hi())
    }
}

impl FromStr for Prefix {
    type Err = Box<dyn Error>;

    /// Parse `a.b.c.d/len`, or a bare address as a `/32`.
    fn from_str(addr_cidr: &str) -> Result<Prefix, Self::Err> {
        let addr_cidr = addr_cidr.trim();
        let (addr, len) = match addr_cidr.split_once('/') {
            Some((addr, len)) => {
                let len: u8 = len
                    .parse()
                    .map_err(|_| format!("Invalid prefix length '{len}' in '{addr_cidr}'"))?;
                (addr, len)
            }
            None => (addr_cidr, MAX_LENGTH),
        };
        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| format!("Invalid address '{addr}' in '{addr_cidr}'"))?;
        Prefix::new(addr, len)
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.len == MAX_LENGTH {
            write!(f, "{}", self.addr)
        } else {
            write!(f, "{}/{}", self.addr, self.len)
        }
    }
}
