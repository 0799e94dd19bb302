use std::path::Path;

use chrono::{DateTime, Utc};

use crate::input::{InputError, read_text};

/// Unix seconds of the previous run, or `0.0` when no stamp was written yet.
pub fn load_timestamp(path: &Path) -> Result<f64, InputError> {
    if !path.is_file() {
        tracing::info!("no timestamp at {}; every candidate is new", path.display());
        return Ok(0.0);
    }
    let text = read_text(path)?;
    text.trim().parse::<f64>().map_err(|_| {
        InputError::Parse(format!(
            "{}: {:?} is not a unix timestamp",
            path.display(),
            text.trim()
        ))
    })
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    format!("{}", at.timestamp_micros() as f64 / 1_000_000.0)
}
