//! Artifact export for the serving collaborator and the external trainer.
//!
//! The serving side reproduces training-time behavior from exactly two
//! things: the frozen scaler parameters and the calibrated decision
//! threshold. Both travel together in one JSON record. The trainer side
//! receives each split as plain (features, labels) JSON.

use crate::core::dataset::Dataset;
use crate::core::normalize::ScalerParams;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The deployable record consumed verbatim by the serving collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployArtifact {
    /// Per-feature mean, in feature-vector order
    pub mean: Vec<f64>,
    /// Per-feature scale, in feature-vector order
    pub scale: Vec<f64>,
    /// Calibrated fall-probability cutoff
    pub threshold: f64,
}

impl DeployArtifact {
    pub fn new(scaler: &ScalerParams, threshold: f64) -> Self {
        Self {
            mean: scaler.mean.clone(),
            scale: scaler.scale.clone(),
            threshold,
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ExportError> {
        write_json(path, self)
    }

    pub fn load(path: &Path) -> Result<Self, ExportError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ExportError::IoError(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| ExportError::ParseError(e.to_string()))
    }
}

/// One dataset split as handed to the external trainer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitExport {
    /// Names of the features, in vector order
    pub feature_names: Vec<String>,
    /// One feature vector per window
    pub features: Vec<Vec<f64>>,
    /// One binary label per window
    pub labels: Vec<u8>,
}

impl SplitExport {
    pub fn new(feature_names: Vec<String>, dataset: &Dataset) -> Self {
        Self {
            feature_names,
            features: dataset.features.clone(),
            labels: dataset.labels.clone(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ExportError> {
        write_json(path, self)
    }
}

/// Read the external trainer's validation predictions: a CSV with `label`
/// and `probability` columns, one row per validation window.
pub fn read_predictions(path: &Path) -> Result<(Vec<u8>, Vec<f64>), ExportError> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|e| ExportError::IoError(e.to_string()))?;

    let headers = reader
        .headers()
        .map_err(|e| ExportError::IoError(e.to_string()))?
        .clone();
    let label_index = headers
        .iter()
        .position(|h| h == "label")
        .ok_or_else(|| ExportError::MissingColumn("label".to_string()))?;
    let probability_index = headers
        .iter()
        .position(|h| h == "probability")
        .ok_or_else(|| ExportError::MissingColumn("probability".to_string()))?;

    let mut labels = Vec::new();
    let mut probabilities = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ExportError::IoError(e.to_string()))?;
        let label: u8 = record
            .get(label_index)
            .and_then(|v| v.trim().parse().ok())
            .ok_or_else(|| ExportError::ParseError("bad label value".to_string()))?;
        let probability: f64 = record
            .get(probability_index)
            .and_then(|v| v.trim().parse().ok())
            .ok_or_else(|| ExportError::ParseError("bad probability value".to_string()))?;
        labels.push(label);
        probabilities.push(probability);
    }

    Ok((labels, probabilities))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ExportError::IoError(e.to_string()))?;
    }
    let json =
        serde_json::to_string_pretty(value).map_err(|e| ExportError::SerializeError(e.to_string()))?;
    std::fs::write(path, json).map_err(|e| ExportError::IoError(e.to_string()))
}

/// Artifact I/O errors.
#[derive(Debug)]
pub enum ExportError {
    IoError(String),
    SerializeError(String),
    ParseError(String),
    MissingColumn(String),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::IoError(e) => write!(f, "IO error: {e}"),
            ExportError::SerializeError(e) => write!(f, "Serialize error: {e}"),
            ExportError::ParseError(e) => write!(f, "Parse error: {e}"),
            ExportError::MissingColumn(c) => write!(f, "Missing required column: {c}"),
        }
    }
}

impl std::error::Error for ExportError {}
