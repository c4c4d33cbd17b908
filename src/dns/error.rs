use thiserror::Error;

/// Failure kinds of a single DNS lookup.
///
/// Callers only branch on the kind; the name is kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DnsError {
    #[error("resolver initialization failed: {message}")]
    Init { message: String },
    #[error("unknown public resolver set '{name}'")]
    UnknownPreset { name: String },
    #[error("{}", not_found_message(.name, .nxdomain))]
    NotFound { name: String, nxdomain: bool },
    #[error("lookup of {name} timed out")]
    Timeout { name: String },
    #[error("no nameserver answered for {name}")]
    NoNameservers { name: String },
    #[error("lookup of {name} failed: {message}")]
    Other { name: String, message: String },
}

fn not_found_message(name: &str, nxdomain: &bool) -> String {
    if *nxdomain {
        format!("{name} does not exist")
    } else {
        format!("no such record for {name}")
    }
}

impl DnsError {
    pub(crate) fn init(source: std::io::Error) -> Self {
        Self::Init {
            message: source.to_string(),
        }
    }

    pub(crate) fn no_answer(name: impl Into<String>) -> Self {
        Self::NotFound {
            name: name.into(),
            nxdomain: false,
        }
    }

    pub(crate) fn nxdomain(name: impl Into<String>) -> Self {
        Self::NotFound {
            name: name.into(),
            nxdomain: true,
        }
    }

    pub(crate) fn timeout(name: impl Into<String>) -> Self {
        Self::Timeout { name: name.into() }
    }

    pub(crate) fn other(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Other {
            name: name.into(),
            message: message.into(),
        }
    }

    /// "no such record": the name exists but has no data of the requested type.
    pub fn is_no_answer(&self) -> bool {
        matches!(self, Self::NotFound { nxdomain: false, .. })
    }

    /// Either "no such record" or "name does not exist".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
