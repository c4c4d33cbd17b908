use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use tracing::debug;
use trust_dns_resolver::{
    Resolver,
    config::{NameServerConfigGroup, ResolverConfig},
    error::{ResolveError, ResolveErrorKind},
    proto::{error::ProtoErrorKind, op::ResponseCode},
    system_conf,
};

use super::{DnsError, DnsLookup, ResolverSettings, normalize_name};

/// Builds the single blocking resolver used for a whole run.
///
/// Without explicit nameservers the system configuration is read; the
/// timeout and attempt count from `settings` apply in both cases.
pub fn build_resolver(settings: &ResolverSettings) -> Result<Resolver, DnsError> {
    let (config, mut opts) = if settings.nameservers().is_empty() {
        system_conf::read_system_conf().map_err(DnsError::init)?
    } else {
        let group = NameServerConfigGroup::from_ips_clear(settings.nameservers(), 53, true);
        let config = ResolverConfig::from_parts(None, Vec::new(), group);
        (config, Default::default())
    };
    opts.timeout = settings.timeout();
    opts.attempts = settings.attempts();

    debug!(
        nameservers = ?settings.nameservers(),
        timeout = ?settings.timeout(),
        "building resolver"
    );
    Resolver::new(config, opts).map_err(DnsError::init)
}

pub(crate) fn classify(name: &str, err: &ResolveError) -> DnsError {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            if *response_code == ResponseCode::NXDomain {
                DnsError::nxdomain(name)
            } else {
                DnsError::no_answer(name)
            }
        }
        ResolveErrorKind::Timeout => DnsError::timeout(name),
        ResolveErrorKind::Proto(proto) if matches!(proto.kind(), ProtoErrorKind::Timeout) => {
            DnsError::timeout(name)
        }
        ResolveErrorKind::NoConnections => DnsError::NoNameservers {
            name: name.to_string(),
        },
        _ => DnsError::other(name, err.to_string()),
    }
}

impl DnsLookup for Resolver {
    fn lookup_mx(&self, name: &str) -> Result<Vec<String>, DnsError> {
        let lookup = Resolver::mx_lookup(self, name).map_err(|err| classify(name, &err))?;
        Ok(lookup
            .iter()
            .map(|mx| normalize_name(&mx.exchange().to_utf8()))
            .collect())
    }

    fn lookup_ipv4(&self, name: &str) -> Result<Vec<Ipv4Addr>, DnsError> {
        let lookup = Resolver::ipv4_lookup(self, name).map_err(|err| classify(name, &err))?;
        Ok(lookup.iter().map(|a| a.0).collect())
    }

    fn lookup_ipv6(&self, name: &str) -> Result<Vec<Ipv6Addr>, DnsError> {
        let lookup = Resolver::ipv6_lookup(self, name).map_err(|err| classify(name, &err))?;
        Ok(lookup.iter().map(|aaaa| aaaa.0).collect())
    }

    fn lookup_ptr(&self, address: IpAddr) -> Result<Vec<String>, DnsError> {
        let lookup = Resolver::reverse_lookup(self, address)
            .map_err(|err| classify(&address.to_string(), &err))?;
        Ok(lookup
            .iter()
            .map(|ptr| normalize_name(&ptr.to_utf8()))
            .collect())
    }

    fn lookup_txt(&self, name: &str) -> Result<Vec<String>, DnsError> {
        let lookup = Resolver::txt_lookup(self, name).map_err(|err| classify(name, &err))?;
        Ok(lookup
            .iter()
            .map(|txt| {
                txt.txt_data()
                    .iter()
                    .map(|piece| String::from_utf8_lossy(piece).into_owned())
                    .collect::<String>()
            })
            .collect())
    }
}
