use super::label::{DomainLabel, IdScheme, LabelError};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A pair of domain labels co-occurring across one interaction, rendered as `first-second`.
///
/// `A-B` and `B-A` describe the same unordered pair. The struct keeps the orientation it was
/// built with; canonicalisation happens in the counting stage, which keeps whichever
/// orientation it meets first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Combination {
    first: DomainLabel,
    second: DomainLabel,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseCombinationError {
    #[error("Malformed combination '{0}': expected two fixed-width labels joined by '-'")]
    Malformed(String),

    #[error("Invalid label in combination: {0}")]
    Label(#[from] LabelError),
}

impl Combination {
    pub fn new(first: DomainLabel, second: DomainLabel) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> &DomainLabel {
        &self.first
    }

    pub fn second(&self) -> &DomainLabel {
        &self.second
    }

    /// A combination of a domain with itself, e.g. `PF00072-PF00072`.
    pub fn is_self_pair(&self) -> bool {
        self.first == self.second
    }

    pub fn reversed(&self) -> Self {
        Self {
            first: self.second.clone(),
            second: self.first.clone(),
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}

/// Splits `label-label` at the fixed offset given by the leading label's scheme.
impl FromStr for Combination {
    type Err = ParseCombinationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseCombinationError::Malformed(s.to_string());

        if !s.is_ascii() {
            return Err(malformed());
        }
        let scheme = IdScheme::detect(s)
            .ok_or_else(|| ParseCombinationError::Label(LabelError::UnknownScheme(s.to_string())))?;
        let width = scheme.width();

        if s.len() != 2 * width + 1 || s.as_bytes()[width] != b'-' {
            return Err(malformed());
        }

        let first = DomainLabel::parse(&s[..width])?;
        let second = DomainLabel::parse(&s[width + 1..])?;
        Ok(Self::new(first, second))
    }
}
