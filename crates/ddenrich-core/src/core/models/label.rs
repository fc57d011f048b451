use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier families recognised for domain labels.
///
/// Both families use fixed-width codes, so a label's scheme fully determines where a
/// `label-label` combination string can be split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdScheme {
    /// Pfam family accessions, e.g. `PF00072`.
    Pfam,
    /// InterPro entry accessions, e.g. `IPR000719`.
    InterPro,
}

static SCHEME_PREFIXES: Map<&'static str, IdScheme> = phf_map! {
    "PF" => IdScheme::Pfam,
    "IPR" => IdScheme::InterPro,
};

impl IdScheme {
    /// Resolves the scheme of a raw identifier from its prefix.
    pub fn detect(raw: &str) -> Option<Self> {
        SCHEME_PREFIXES
            .entries()
            .find(|(prefix, _)| raw.starts_with(*prefix))
            .map(|(_, scheme)| *scheme)
    }

    /// Total length of a label in this scheme, prefix included.
    pub fn width(&self) -> usize {
        match self {
            IdScheme::Pfam => 7,
            IdScheme::InterPro => 9,
        }
    }
}

impl fmt::Display for IdScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                IdScheme::Pfam => "Pfam",
                IdScheme::InterPro => "InterPro",
            }
        )
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LabelError {
    #[error("Domain label '{0}' does not start with a recognised prefix ('PF' or 'IPR')")]
    UnknownScheme(String),

    #[error("{scheme} label '{label}' must be {expected} characters long, found {found}")]
    InvalidWidth {
        label: String,
        scheme: IdScheme,
        expected: usize,
        found: usize,
    },

    #[error("Domain label '{0}' contains characters other than ASCII letters and digits")]
    InvalidCharacter(String),
}

/// A validated domain identifier.
///
/// The scheme is resolved once when the label is parsed; every later operation uses the
/// stored scheme instead of re-inspecting the prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainLabel {
    code: String,
    scheme: IdScheme,
}

impl DomainLabel {
    pub fn parse(raw: &str) -> Result<Self, LabelError> {
        let scheme =
            IdScheme::detect(raw).ok_or_else(|| LabelError::UnknownScheme(raw.to_string()))?;

        if !raw.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(LabelError::InvalidCharacter(raw.to_string()));
        }
        if raw.len() != scheme.width() {
            return Err(LabelError::InvalidWidth {
                label: raw.to_string(),
                scheme,
                expected: scheme.width(),
                found: raw.len(),
            });
        }

        Ok(Self {
            code: raw.to_string(),
            scheme,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.code
    }

    pub fn scheme(&self) -> IdScheme {
        self.scheme
    }
}

impl FromStr for DomainLabel {
    type Err = LabelError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DomainLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl AsRef<str> for DomainLabel {
    fn as_ref(&self) -> &str {
        &self.code
    }
}
