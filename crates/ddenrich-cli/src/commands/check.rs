use crate::cli::CheckArgs;
use crate::config::{DefaultsConfig, FileInputConfig, resolve_table_format};
use crate::error::{CliError, Result};
use ddenrich::core::counting::canonical_counts;
use ddenrich::core::counting::counter::CountTable;
use ddenrich::core::io::reference::ReferenceDatabase;
use ddenrich::core::models::interaction::{InteractionTable, Side};
use ddenrich::engine::error::EngineError;
use std::fmt;
use tracing::info;

/// Shape of an interaction table and its observed combination counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSummary {
    pub rows: usize,
    pub scheme: Option<String>,
    pub empty_x: usize,
    pub empty_y: usize,
    pub combinations: usize,
    pub self_pairs: usize,
    pub occurrences: u64,
    pub known: Option<usize>,
}

impl TableSummary {
    pub fn new(table: &InteractionTable, observed: &CountTable) -> Self {
        let empty = |side| {
            table
                .domain_sets(side)
                .iter()
                .filter(|set| set.is_empty())
                .count()
        };
        Self {
            rows: table.len(),
            scheme: table.scheme().map(|s| s.to_string()),
            empty_x: empty(Side::X),
            empty_y: empty(Side::Y),
            combinations: observed.len(),
            self_pairs: observed.keys().filter(|c| c.is_self_pair()).count(),
            occurrences: observed.iter().map(|(_, &count)| count).sum(),
            known: None,
        }
    }

    pub fn with_reference(mut self, observed: &CountTable, reference: &ReferenceDatabase) -> Self {
        let known = observed
            .keys()
            .filter(|c| reference.contains_pair(c.first().as_str(), c.second().as_str()))
            .count();
        self.known = Some(known);
        self
    }
}

impl fmt::Display for TableSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rows:                    {}", self.rows)?;
        writeln!(
            f,
            "Identifier scheme:       {}",
            self.scheme.as_deref().unwrap_or("none")
        )?;
        writeln!(f, "Rows with empty X:       {}", self.empty_x)?;
        writeln!(f, "Rows with empty Y:       {}", self.empty_y)?;
        writeln!(f, "Distinct combinations:   {}", self.combinations)?;
        writeln!(f, "Self pairs:              {}", self.self_pairs)?;
        write!(f, "Total occurrences:       {}", self.occurrences)?;
        if let Some(known) = self.known {
            write!(f, "\nListed in 3did:          {}", known)?;
        }
        Ok(())
    }
}

pub fn run(args: CheckArgs) -> Result<()> {
    let defaults = DefaultsConfig::default();
    let format = resolve_table_format(&args.table, FileInputConfig::default(), &defaults)?;

    info!("Loading interaction table from {:?}", &args.input);
    let table = InteractionTable::load(&args.input, &format).map_err(|e| CliError::FileParsing {
        path: args.input.clone(),
        source: e.into(),
    })?;

    let observed = canonical_counts(
        table
            .domain_sets(Side::X)
            .into_iter()
            .zip(table.domain_sets(Side::Y)),
    );
    let mut summary = TableSummary::new(&table, &observed);

    if let Some(reference_path) = &args.reference {
        info!("Loading reference database from {:?}", reference_path);
        let reference = ReferenceDatabase::load(reference_path).map_err(EngineError::from)?;
        println!("Reference pairs:         {}", reference.len());
        summary = summary.with_reference(&observed, &reference);
    }

    println!("{}", summary);
    Ok(())
}
