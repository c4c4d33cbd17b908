use thiserror::Error;

/// Errors raised while building the set of blacklists to query.
#[derive(Debug, Error)]
pub enum BlacklistError {
    #[error("blacklist zone is empty (line {line})")]
    EmptyZone { line: u64 },
    #[error("blacklist zone '{zone}' IDNA conversion failed")]
    IdnaConversion {
        zone: String,
        #[source]
        source: idna::Errors,
    },
    #[error("cannot read blacklist file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed blacklist file: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },
}

impl BlacklistError {
    pub(crate) fn idna(zone: impl Into<String>, source: idna::Errors) -> Self {
        Self::IdnaConversion {
            zone: zone.into(),
            source,
        }
    }

    pub(crate) fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(source: csv::Error) -> Self {
        Self::Csv { source }
    }
}
