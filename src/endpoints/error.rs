use thiserror::Error;

use crate::dns::DnsError;

/// Errors that abort the processing of one destination.
#[derive(Debug, Clone, Error)]
pub enum EndpointError {
    #[error("destination is empty")]
    EmptyDestination,
    #[error("'{token}' looks like an IP address but does not parse as one")]
    InvalidAddress { token: String },
    #[error("destination '{destination}' IDNA conversion failed")]
    IdnaConversion { destination: String },
    #[error("there isn't any A/AAAA DNS record for {destination}")]
    NoAddressRecords { destination: String },
    #[error("resolving {destination} failed: {source}")]
    Lookup {
        destination: String,
        #[source]
        source: DnsError,
    },
}

impl EndpointError {
    pub(crate) fn lookup(destination: impl Into<String>, source: DnsError) -> Self {
        Self::Lookup {
            destination: destination.into(),
            source,
        }
    }
}
