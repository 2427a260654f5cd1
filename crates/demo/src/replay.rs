// File: crates/demo/src/replay.rs
// Summary: CSV replay data source: one (time, value) row per tick.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_tile::{DataSource, Reading};
use chrono::{NaiveDate, NaiveDateTime};

const TIME_COLUMNS: [&str; 6] = ["time", "timestamp", "open_time", "date", "datetime", "t"];
const VALUE_COLUMNS: [&str; 6] = ["value", "level", "close", "price", "y", "v"];

/// Rows that fail to parse replay as empty ticks.
pub struct CsvReplay {
    rows: std::vec::IntoIter<Option<(f64, f64)>>,
    ordinal: u64,
    window_len: usize,
}

impl CsvReplay {
    pub fn open(path: &Path, window_len: usize) -> Result<Self> {
        let path = resolve_path(path)?;
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(&path)
            .with_context(|| format!("opening {}", path.display()))?;

        let headers = rdr.headers()?.iter().map(str::to_lowercase).collect::<Vec<_>>();
        let find = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
        let i_time = find(&TIME_COLUMNS);
        let i_value = find(&VALUE_COLUMNS)
            .with_context(|| format!("no value column in {} (headers: {headers:?})", path.display()))?;

        let mut rows = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            let time = i_time.and_then(|ix| rec.get(ix)).and_then(parse_time_ms);
            let value = rec.get(i_value).and_then(|s| s.parse::<f64>().ok());
            rows.push(time.zip(value));
        }
        tracing::info!(rows = rows.len(), path = %path.display(), "csv replay loaded");
        if rows.is_empty() {
            anyhow::bail!("no rows in {}", path.display());
        }
        Ok(Self { rows: rows.into_iter(), ordinal: 0, window_len })
    }
}

impl DataSource for CsvReplay {
    fn window_len(&self) -> usize {
        self.window_len
    }

    fn next_reading(&mut self) -> Option<Reading> {
        let (time, value) = self.rows.next()??;
        self.ordinal += 1;
        Some(Reading::new(self.ordinal, time, value))
    }
}

/// Epoch seconds or milliseconds, RFC 3339, or a plain calendar date.
fn parse_time_ms(s: &str) -> Option<f64> {
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        return Some(if n > 10_i64.pow(11) { n as f64 } else { n as f64 * 1_000.0 });
    }
    if let Ok(at) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(at.timestamp_millis() as f64);
    }
    if let Ok(at) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(at.and_utc().timestamp_millis() as f64);
    }
    ["%Y-%m-%d", "%Y/%m/%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|at| at.and_utc().timestamp_millis() as f64)
}

/// Accepts the path as given, or with its .csv/.cvs extension swapped.
fn resolve_path(p: &Path) -> Result<PathBuf> {
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    let ext = p.extension().map(|e| e.to_string_lossy().to_lowercase());
    let alt = match ext.as_deref() {
        Some("cvs") => Some(p.with_extension("csv")),
        Some("csv") => Some(p.with_extension("cvs")),
        _ => None,
    };
    match alt {
        Some(alt) if alt.exists() => {
            tracing::warn!(path = %alt.display(), "using file with swapped extension");
            Ok(alt)
        }
        _ => anyhow::bail!("file not found: {}", p.display()),
    }
}
