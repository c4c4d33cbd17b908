use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use super::{BlacklistEntry, BlacklistError, types::normalize_zone};

/// Reads `zone,description` rows from a CSV file.
pub fn load_blacklist_file(path: impl AsRef<Path>) -> Result<Vec<BlacklistEntry>, BlacklistError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| BlacklistError::io(path.display().to_string(), err))?;
    let entries = parse_blacklists(file)?;
    debug!(
        path = %path.display(),
        count = entries.len(),
        "loaded blacklist definitions"
    );
    Ok(entries)
}

/// Parses blacklist definitions. Rows whose first field starts with `#` are
/// comments; the description column is optional.
pub fn parse_blacklists<R: Read>(input: R) -> Result<Vec<BlacklistEntry>, BlacklistError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);

    let mut entries = Vec::new();
    for row in reader.records() {
        let row = row.map_err(BlacklistError::csv)?;
        let line = row.position().map(|pos| pos.line()).unwrap_or(0);
        let Some(first) = row.get(0) else {
            continue;
        };
        if first.starts_with('#') {
            continue;
        }
        if row.len() == 1 && first.is_empty() {
            continue;
        }
        let zone = normalize_zone(first, line)?;
        let description = row.get(1).unwrap_or("").to_string();
        entries.push(BlacklistEntry { zone, description });
    }
    Ok(entries)
}
