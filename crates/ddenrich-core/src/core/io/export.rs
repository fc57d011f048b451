use crate::core::models::interaction::Side;
use crate::core::models::record::EnrichmentRecord;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Serialize)]
struct ResultRow<'a> {
    combination: String,
    original_count: u64,
    shuffled_count: String,
    log_ratio: String,
    in_reference: &'a str,
}

/// `<species>_<side>results.csv`, e.g. `ecoli_Xresults.csv`.
pub fn results_file_name(species: &str, side: Side) -> String {
    format!("{}_{}results.csv", species, side)
}

pub fn header(side: Side) -> [String; 5] {
    [
        "Combination".to_string(),
        "Original Count".to_string(),
        format!("Shuffled {} Count", side),
        format!("Log(original/shuffled{})", side),
        "Domain in 3did".to_string(),
    ]
}

/// Writes the header and one row per record, in record order.
pub fn write_records<W: Write>(
    writer: W,
    side: Side,
    records: &[EnrichmentRecord],
) -> Result<(), ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(header(side))?;
    for record in records {
        writer.serialize(ResultRow {
            combination: record.combination.to_string(),
            original_count: record.observed,
            shuffled_count: format_float(record.null_mean),
            log_ratio: format_float(record.log_ratio),
            in_reference: record.reference_flag(),
        })?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes one results file per entry of `reports` into `dir`, all or nothing.
///
/// Every file is rendered in memory before anything touches the disk. If a write fails, the
/// files already written by this call are removed again before the error is returned.
pub fn write_all_results(
    dir: &Path,
    species: &str,
    reports: &[(Side, &[EnrichmentRecord])],
) -> Result<Vec<PathBuf>, ExportError> {
    let rendered = reports
        .iter()
        .map(|&(side, records)| {
            let mut contents = Vec::new();
            write_records(&mut contents, side, records)?;
            Ok((dir.join(results_file_name(species, side)), contents, records.len()))
        })
        .collect::<Result<Vec<_>, ExportError>>()?;

    let mut written: Vec<PathBuf> = Vec::with_capacity(rendered.len());
    for (path, contents, records) in rendered {
        if let Err(source) = fs::write(&path, &contents) {
            remove_written(&written);
            return Err(ExportError::Io {
                path: path.to_string_lossy().to_string(),
                source,
            });
        }
        info!(path = %path.display(), records, "Results written.");
        written.push(path);
    }
    Ok(written)
}

fn remove_written(paths: &[PathBuf]) {
    for path in paths {
        match fs::remove_file(path) {
            Ok(()) => debug!(path = %path.display(), "Removed partial result file."),
            Err(e) => warn!(path = %path.display(), error = %e, "Could not remove partial result file."),
        }
    }
}

/// Renders integral values with a trailing `.0` so that every float column reads as a float.
fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn record(raw: &str, observed: u64, null_mean: f64, known: bool) -> EnrichmentRecord {
        EnrichmentRecord {
            combination: raw.parse().unwrap(),
            observed,
            null_mean,
            log_ratio: if null_mean > 0.0 {
                (observed as f64 / null_mean).log10()
            } else {
                0.0
            },
            known_interaction: known,
        }
    }

    #[test]
    fn results_file_name_includes_species_and_side() {
        assert_eq!(results_file_name("ecoli", Side::X), "ecoli_Xresults.csv");
        assert_eq!(results_file_name("yeast", Side::Y), "yeast_Yresults.csv");
    }

    #[test]
    fn header_names_the_shuffled_side() {
        assert_eq!(
            header(Side::Y).join(","),
            "Combination,Original Count,Shuffled Y Count,Log(original/shuffledY),Domain in 3did"
        );
    }

    #[test]
    fn format_float_always_shows_a_decimal_part() {
        assert_eq!(format_float(3.0), "3.0");
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(2.5), "2.5");
        assert_eq!(format_float(0.6020599913279624), "0.6020599913279624");
    }

    #[test]
    fn write_records_emits_header_and_rows_in_order() {
        let records = vec![
            record("PF00072-PF00486", 20, 5.0, true),
            record("PF00001-PF00002", 1, 0.5, false),
        ];
        let mut buffer = Vec::new();
        write_records(&mut buffer, Side::X, &records).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Combination,Original Count,Shuffled X Count,Log(original/shuffledX),Domain in 3did",
                "PF00072-PF00486,20,5.0,0.6020599913279624,Yes",
                "PF00001-PF00002,1,0.5,0.3010299956639812,No",
            ]
        );
    }

    #[test]
    fn write_all_results_creates_one_named_file_per_side() {
        let dir = tempdir().unwrap();
        let x = vec![record("PF00072-PF00486", 20, 5.0, true)];
        let reports: [(Side, &[EnrichmentRecord]); 2] = [(Side::X, &x), (Side::Y, &[])];
        let paths = write_all_results(dir.path(), "ecoli", &reports).unwrap();

        assert_eq!(
            paths,
            vec![
                dir.path().join("ecoli_Xresults.csv"),
                dir.path().join("ecoli_Yresults.csv"),
            ]
        );
        let y = fs::read_to_string(&paths[1]).unwrap();
        assert!(y.starts_with("Combination,Original Count,Shuffled Y Count"));
        assert_eq!(y.lines().count(), 1);
        assert_eq!(fs::read_to_string(&paths[0]).unwrap().lines().count(), 2);
    }

    #[test]
    fn write_all_results_fails_for_missing_directory() {
        let dir = tempdir().unwrap();
        let reports: [(Side, &[EnrichmentRecord]); 1] = [(Side::X, &[])];
        let result = write_all_results(&dir.path().join("missing"), "ecoli", &reports);
        assert!(matches!(result, Err(ExportError::Io { .. })));
    }

    #[test]
    fn failed_second_write_removes_the_first_file() {
        let dir = tempdir().unwrap();
        // A directory in place of the Y file makes its write fail.
        fs::create_dir(dir.path().join("ecoli_Yresults.csv")).unwrap();

        let reports: [(Side, &[EnrichmentRecord]); 2] = [(Side::X, &[]), (Side::Y, &[])];
        let result = write_all_results(dir.path(), "ecoli", &reports);

        assert!(matches!(result, Err(ExportError::Io { .. })));
        assert!(!dir.path().join("ecoli_Xresults.csv").exists());
    }
}
