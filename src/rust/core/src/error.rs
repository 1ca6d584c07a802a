// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors surfaced by the ageing model boundary (parsing, validation, JSON).
///
/// The arithmetic itself never fails: degenerate inputs propagate as
/// `NaN`/`Infinity` unless the guard rejects them first.
#[derive(Error, Debug)]
pub enum AgeingError {
    #[error("Unsupported {kind} unit: {unit}")]
    UnsupportedUnit { kind: &'static str, unit: String },
    #[error("Unsupported chemistry: {0}")]
    UnsupportedChemistry(String),
    #[error("Invalid input: {}", .0.join("; "))]
    InvalidInput(Vec<String>),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<AgeingError> for JsValue {
    fn from(err: AgeingError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
