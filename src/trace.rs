//! Trace ingestion: CSV of raw IMU samples into an in-memory sample sequence.
//!
//! The expected table carries six channel columns plus a free-form label
//! column. Column presence is checked once, before any windowing; rows with
//! missing or non-finite channel values are dropped silently.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Required CSV columns, in canonical channel order.
pub const CHANNEL_COLUMNS: [&str; 6] = ["xAcc", "yAcc", "zAcc", "xGyro", "yGyro", "zGyro"];

/// Name of the ground-truth label column.
pub const LABEL_COLUMN: &str = "label";

/// One 6-axis inertial measurement with its ground-truth label.
///
/// Samples carry no timestamp; acquisition order is the order of the rows
/// in the input trace and is preserved throughout the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    /// Acceleration, m/s^2
    pub acc: [f64; 3],
    /// Angular rate, deg/s
    pub gyro: [f64; 3],
    /// Free-form activity label (case preserved; compared case-insensitively)
    pub label: String,
}

impl Sample {
    /// Channel values in canonical order: acc x,y,z then gyro x,y,z.
    pub fn channels(&self) -> [f64; 6] {
        [
            self.acc[0], self.acc[1], self.acc[2], self.gyro[0], self.gyro[1], self.gyro[2],
        ]
    }
}

/// A full, order-preserving sample sequence.
pub type Trace = Vec<Sample>;

/// Load a trace from a CSV file.
///
/// Fails with [`TraceError::MissingColumn`] before reading any data row if
/// a required column is absent, and with [`TraceError::EmptyTrace`] if no
/// row survives the missing-value filter.
pub fn load_csv(path: &Path) -> Result<Trace, TraceError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| TraceError::Io(e.to_string()))?;

    let headers = reader
        .headers()
        .map_err(|e| TraceError::Io(e.to_string()))?
        .clone();

    let mut column_index = Vec::with_capacity(CHANNEL_COLUMNS.len());
    for name in CHANNEL_COLUMNS {
        let idx = headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| TraceError::MissingColumn(name.to_string()))?;
        column_index.push(idx);
    }
    let label_index = headers
        .iter()
        .position(|h| h == LABEL_COLUMN)
        .ok_or_else(|| TraceError::MissingColumn(LABEL_COLUMN.to_string()))?;

    let mut trace = Trace::new();
    for record in reader.records() {
        let record = record.map_err(|e| TraceError::Io(e.to_string()))?;

        let mut channels = [0.0f64; 6];
        let mut valid = true;
        for (slot, &idx) in channels.iter_mut().zip(&column_index) {
            match record.get(idx).map(str::trim).and_then(|v| {
                if v.is_empty() {
                    None
                } else {
                    v.parse::<f64>().ok()
                }
            }) {
                Some(v) if v.is_finite() => *slot = v,
                _ => {
                    valid = false;
                    break;
                }
            }
        }

        let label = record.get(label_index).map(str::trim).unwrap_or("");
        if !valid || label.is_empty() {
            continue;
        }

        trace.push(Sample {
            acc: [channels[0], channels[1], channels[2]],
            gyro: [channels[3], channels[4], channels[5]],
            label: label.to_string(),
        });
    }

    if trace.is_empty() {
        return Err(TraceError::EmptyTrace);
    }

    Ok(trace)
}

/// Trace ingestion errors.
#[derive(Debug)]
pub enum TraceError {
    /// A required channel or label column is absent from the header
    MissingColumn(String),
    /// No row survived the missing-value filter
    EmptyTrace,
    /// Underlying file or CSV error
    Io(String),
}

impl std::fmt::Display for TraceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceError::MissingColumn(c) => write!(f, "Missing required column: {c}"),
            TraceError::EmptyTrace => write!(f, "Trace contains no usable rows"),
            TraceError::Io(e) => write!(f, "Trace read error: {e}"),
        }
    }
}

impl std::error::Error for TraceError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write");
        file
    }

    #[test]
    fn test_load_valid_trace() {
        let file = write_csv(
            "xAcc,yAcc,zAcc,xGyro,yGyro,zGyro,label\n\
             0.1,0.2,9.8,1.0,2.0,3.0,normal\n\
             4.0,5.0,6.0,7.0,8.0,9.0,Fall\n",
        );
        let trace = load_csv(file.path()).expect("load");
        assert_eq!(trace.len(), 2);
        assert_eq!(trace[0].channels(), [0.1, 0.2, 9.8, 1.0, 2.0, 3.0]);
        assert_eq!(trace[1].label, "Fall");
    }

    #[test]
    fn test_missing_column_is_config_error() {
        let file = write_csv("xAcc,yAcc,zAcc,xGyro,yGyro,label\n0,0,0,0,0,normal\n");
        match load_csv(file.path()) {
            Err(TraceError::MissingColumn(c)) => assert_eq!(c, "zGyro"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_rows_with_missing_values_are_dropped() {
        let file = write_csv(
            "xAcc,yAcc,zAcc,xGyro,yGyro,zGyro,label\n\
             0.1,0.2,9.8,1.0,2.0,3.0,normal\n\
             ,0.2,9.8,1.0,2.0,3.0,normal\n\
             0.1,0.2,9.8,1.0,2.0,NaN,normal\n\
             0.1,0.2,9.8,1.0,2.0,3.0,\n",
        );
        let trace = load_csv(file.path()).expect("load");
        assert_eq!(trace.len(), 1);
    }

    #[test]
    fn test_all_invalid_rows_is_empty_trace() {
        let file = write_csv("xAcc,yAcc,zAcc,xGyro,yGyro,zGyro,label\n,,,,,,\n");
        assert!(matches!(load_csv(file.path()), Err(TraceError::EmptyTrace)));
    }
}
