use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Prefix of the lines in a 3did flat file that describe one domain-domain interaction.
pub const RECORD_MARKER: &str = "#=ID";

/// Source tag appended to each identifier in 3did records, e.g. `PF10417.4@Pfam`.
pub const SOURCE_SUFFIX: &str = "@Pfam";

/// One known interacting pair. Identifiers are kept verbatim, version suffix included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencePair {
    pub first: String,
    pub second: String,
}

/// Known domain-domain structural interactions, loaded once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceDatabase {
    pairs: Vec<ReferencePair>,
}

#[derive(Debug, Error)]
pub enum ReferenceLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

impl ReferenceDatabase {
    pub fn from_pairs(pairs: Vec<ReferencePair>) -> Self {
        Self { pairs }
    }

    pub fn load(path: &Path) -> Result<Self, ReferenceLoadError> {
        let io_error = |e| ReferenceLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        };
        let file = File::open(path).map_err(io_error)?;
        let database = Self::read_from(BufReader::new(file)).map_err(io_error)?;
        debug!(
            path = %path.display(),
            pairs = database.len(),
            "Reference database loaded."
        );
        Ok(database)
    }

    /// Parses `#=ID` records; every other line is ignored.
    ///
    /// ```text
    /// #=ID	1-cysPrx_C	1-cysPrx_C	 (PF10417.4@Pfam	PF10417.4@Pfam)
    /// ```
    pub fn read_from(reader: impl BufRead) -> std::io::Result<Self> {
        let mut pairs = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if !line.starts_with(RECORD_MARKER) {
                continue;
            }
            match parse_record(&line) {
                Some(pair) => pairs.push(pair),
                None => warn!(
                    line = i + 1,
                    "Skipping 3did record without a parenthesized identifier pair."
                ),
            }
        }
        Ok(Self { pairs })
    }

    pub fn pairs(&self) -> &[ReferencePair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Order-insensitive membership by substring containment, so that `PF10417` matches the
    /// versioned reference identifier `PF10417.4`.
    pub fn contains_pair(&self, a: &str, b: &str) -> bool {
        self.pairs.iter().any(|pair| {
            (pair.first.contains(a) && pair.second.contains(b))
                || (pair.second.contains(a) && pair.first.contains(b))
        })
    }
}

fn parse_record(line: &str) -> Option<ReferencePair> {
    let line = line.replace(SOURCE_SUFFIX, "");
    let start = line.find('(')?;
    let inner = line[start..].replace(['(', ')'], "");
    let mut ids = inner.split_whitespace();
    let first = ids.next()?.to_string();
    let second = ids.next()?.to_string();
    Some(ReferencePair { first, second })
}
