// Module for reading and writing matchup tables.
// It reads the csv file, checks row widths, and skips malformed rows.
use std::fs::File;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// One past matchup. Columns beyond these six are ignored on read.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MatchupRecord {
    #[serde(rename = "Index")]    pub index: usize,
    #[serde(rename = "Hp_1")]     pub hp_1: f64,
    #[serde(rename = "Attack_1")] pub attack_1: f64,
    #[serde(rename = "Hp_2")]     pub hp_2: f64,
    #[serde(rename = "Attack_2")] pub attack_2: f64,
    #[serde(rename = "Winner")]   pub winner: f64,
}

impl MatchupRecord {
    /// Feature columns in model order: Hp_1, Attack_1, Hp_2, Attack_2.
    pub fn features(&self) -> [f64; 4] {
        [self.hp_1, self.attack_1, self.hp_2, self.attack_2]
    }
}

pub fn load_csv(path: &str) -> Result<Vec<MatchupRecord>, DataError> {
    load_csv_counted(path).map(|(records, _)| records)
}

/// Like `load_csv`, but also returns how many non-empty data rows the file has,
/// skipped rows included.
pub fn load_csv_counted(path: &str) -> Result<(Vec<MatchupRecord>, usize), DataError> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_string(),
        source,
    })?;
    let mut rdr = ReaderBuilder::new()
        .delimiter(b',')
        .flexible(true)
        .has_headers(true)
        .from_reader(file);

    let headers = rdr.headers()?.clone();
    let expected_len = headers.len();

    let mut out = Vec::new();
    let mut rows_seen = 0;
    for result in rdr.records() {
        let raw: StringRecord = result?;
        let line = raw.position().map(|p| p.line()).unwrap_or(0);

        if raw.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        rows_seen += 1;

        if raw.len() != expected_len {
            warn!(
                "skipping line {}: expected {} fields, found {}",
                line,
                expected_len,
                raw.len()
            );
            continue;
        }

        match raw.deserialize::<MatchupRecord>(Some(&headers)) {
            Ok(rec) => out.push(rec),
            Err(e) => warn!("skipping malformed record at line {}: {}", line, e),
        }
    }

    Ok((out, rows_seen))
}

pub fn write_csv(path: &str, records: &[MatchupRecord]) -> Result<(), DataError> {
    let file = File::create(path).map_err(|source| DataError::Io {
        path: path.to_string(),
        source,
    })?;
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(file);
    for rec in records {
        wtr.serialize(rec)?;
    }
    wtr.flush().map_err(|source| DataError::Io {
        path: path.to_string(),
        source,
    })?;
    Ok(())
}
