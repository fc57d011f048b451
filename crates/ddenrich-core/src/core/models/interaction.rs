use super::label::{DomainLabel, IdScheme};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The ordered domain labels of one protein in one interaction.
pub type DomainSet = Vec<DomainLabel>;

/// One of the two interactant columns of an interaction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    X,
    Y,
}

impl Side {
    pub fn other(&self) -> Self {
        match self {
            Side::X => Side::Y,
            Side::Y => Side::X,
        }
    }
}

#[derive(Debug, Error)]
#[error("Invalid interaction side '{0}', expected 'X' or 'Y'")]
pub struct ParseSideError(String);

impl FromStr for Side {
    type Err = ParseSideError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "X" => Ok(Side::X),
            "Y" => Ok(Side::Y),
            _ => Err(ParseSideError(s.to_string())),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Side::X => "X",
                Side::Y => "Y",
            }
        )
    }
}

/// A single protein-protein interaction: the domain set of protein X and of protein Y.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionRow {
    pub x: DomainSet,
    pub y: DomainSet,
}

impl InteractionRow {
    pub fn new(x: DomainSet, y: DomainSet) -> Self {
        Self { x, y }
    }

    pub fn side(&self, side: Side) -> &[DomainLabel] {
        match side {
            Side::X => &self.x,
            Side::Y => &self.y,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(
    "Mixed identifier schemes: row {row} uses {found} label '{label}' but the table uses {expected}"
)]
pub struct MixedSchemeError {
    pub row: usize,
    pub label: String,
    pub expected: IdScheme,
    pub found: IdScheme,
}

/// All interactions of a dataset, in input order.
///
/// Every label in the table belongs to the same [`IdScheme`]; the constructor rejects tables
/// that mix Pfam and InterPro identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionTable {
    rows: Vec<InteractionRow>,
    scheme: Option<IdScheme>,
}

impl InteractionTable {
    pub fn new(rows: Vec<InteractionRow>) -> Result<Self, MixedSchemeError> {
        let mut scheme = None;
        for (i, row) in rows.iter().enumerate() {
            for label in row.x.iter().chain(row.y.iter()) {
                match scheme {
                    None => scheme = Some(label.scheme()),
                    Some(expected) if expected != label.scheme() => {
                        return Err(MixedSchemeError {
                            row: i + 1,
                            label: label.to_string(),
                            expected,
                            found: label.scheme(),
                        });
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(Self { rows, scheme })
    }

    pub fn rows(&self) -> &[InteractionRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The identifier scheme shared by all labels, or `None` when the table holds no labels.
    pub fn scheme(&self) -> Option<IdScheme> {
        self.scheme
    }

    /// The domain sets of one column, row-aligned with the other column.
    pub fn domain_sets(&self, side: Side) -> Vec<&[DomainLabel]> {
        self.rows.iter().map(|row| row.side(side)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(labels: &[&str]) -> DomainSet {
        labels.iter().map(|l| l.parse().unwrap()).collect()
    }

    #[test]
    fn side_parses_and_displays() {
        assert_eq!("x".parse::<Side>().unwrap(), Side::X);
        assert_eq!("Y".parse::<Side>().unwrap(), Side::Y);
        assert!("Z".parse::<Side>().is_err());
        assert_eq!(Side::X.to_string(), "X");
        assert_eq!(Side::X.other(), Side::Y);
    }

    #[test]
    fn new_table_records_shared_scheme() {
        let table = InteractionTable::new(vec![
            InteractionRow::new(set(&["PF02810", "PF07517"]), set(&["PF01553"])),
            InteractionRow::new(set(&["PF00849"]), set(&[])),
        ])
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.scheme(), Some(IdScheme::Pfam));
    }

    #[test]
    fn new_table_rejects_mixed_schemes() {
        let err = InteractionTable::new(vec![
            InteractionRow::new(set(&["PF02810"]), set(&["PF01553"])),
            InteractionRow::new(set(&["PF00849"]), set(&["IPR000719"])),
        ])
        .unwrap_err();
        assert_eq!(err.row, 2);
        assert_eq!(err.label, "IPR000719");
        assert_eq!(err.expected, IdScheme::Pfam);
        assert_eq!(err.found, IdScheme::InterPro);
    }

    #[test]
    fn table_without_labels_has_no_scheme() {
        let table = InteractionTable::new(vec![InteractionRow::default()]).unwrap();
        assert_eq!(table.scheme(), None);
    }

    #[test]
    fn domain_sets_stay_row_aligned() {
        let table = InteractionTable::new(vec![
            InteractionRow::new(set(&["PF00001"]), set(&["PF00002", "PF00003"])),
            InteractionRow::new(set(&["PF00004"]), set(&["PF00005"])),
        ])
        .unwrap();

        let xs = table.domain_sets(Side::X);
        let ys = table.domain_sets(Side::Y);
        assert_eq!(xs.len(), ys.len());
        assert_eq!(xs[1][0].as_str(), "PF00004");
        assert_eq!(ys[0].len(), 2);
    }
}
