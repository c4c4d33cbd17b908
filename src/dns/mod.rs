//! DNS resolution capability shared by every stage of a check.
//!
//! Stages talk to DNS only through [`DnsLookup`], so they can be driven by the
//! blocking trust-dns [`Resolver`](trust_dns_resolver::Resolver) in production
//! and by a scripted stub in tests.

mod error;
mod resolver;
mod settings;

pub use error::DnsError;
pub use resolver::build_resolver;
pub use settings::{PUBLIC_RESOLVERS, ResolverSettings};

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Record lookups needed by the checker.
///
/// Implementations must be safe to share between the workers of one round.
pub trait DnsLookup: Sync {
    /// Exchange host names, normalized with [`normalize_name`].
    fn lookup_mx(&self, name: &str) -> Result<Vec<String>, DnsError>;
    fn lookup_ipv4(&self, name: &str) -> Result<Vec<Ipv4Addr>, DnsError>;
    fn lookup_ipv6(&self, name: &str) -> Result<Vec<Ipv6Addr>, DnsError>;
    /// PTR targets for the reverse name of `address`.
    fn lookup_ptr(&self, address: IpAddr) -> Result<Vec<String>, DnsError>;
    /// One string per TXT record, character-strings concatenated.
    fn lookup_txt(&self, name: &str) -> Result<Vec<String>, DnsError>;
}

/// Lower-case and drop the trailing root label.
pub fn normalize_name(name: &str) -> String {
    name.trim().trim_end_matches('.').to_ascii_lowercase()
}

/// Standard reverse-DNS owner name of `address`, without the trailing root label.
///
/// `192.0.2.1` becomes `1.2.0.192.in-addr.arpa`; IPv6 addresses are expanded to
/// 32 nibbles under `ip6.arpa`.
pub fn reverse_name(address: IpAddr) -> String {
    match address {
        IpAddr::V4(v4) => {
            let [a, b, c, d] = v4.octets();
            format!("{d}.{c}.{b}.{a}.in-addr.arpa")
        }
        IpAddr::V6(v6) => {
            let mut labels = Vec::with_capacity(34);
            for byte in v6.octets().iter().rev() {
                labels.push(format!("{:x}", byte & 0x0f));
                labels.push(format!("{:x}", byte >> 4));
            }
            labels.push("ip6".to_string());
            labels.push("arpa".to_string());
            labels.join(".")
        }
    }
}
