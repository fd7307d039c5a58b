//! Column validation and projection on in-memory tables.

use std::collections::HashSet;

use polars::prelude::DataFrame;

use crate::error::{ExtractError, Result};

/// Required columns absent from `df`, in `required` order, each listed once.
pub fn missing_columns<'a>(df: &DataFrame, required: &[&'a str]) -> Vec<&'a str> {
    let available: HashSet<&str> = df
        .get_column_names()
        .into_iter()
        .map(|name| name.as_str())
        .collect();
    let mut missing: Vec<&'a str> = Vec::new();
    for column in required {
        if !available.contains(column) && !missing.contains(column) {
            missing.push(*column);
        }
    }
    missing
}

/// Fail with [`ExtractError::MissingColumns`] unless every required column
/// is present.
pub fn validate_columns(df: &DataFrame, required: &[&str]) -> Result<()> {
    let missing = missing_columns(df, required);
    if missing.is_empty() {
        return Ok(());
    }
    Err(ExtractError::MissingColumns {
        columns: missing.into_iter().map(String::from).collect(),
    })
}

/// Build a new table holding exactly `required`, in that order, with every
/// row of `df`. A repeated name is taken once, at its first position.
pub fn project(df: &DataFrame, required: &[&str]) -> Result<DataFrame> {
    validate_columns(df, required)?;
    let mut selection: Vec<&str> = Vec::with_capacity(required.len());
    for column in required {
        if !selection.contains(column) {
            selection.push(*column);
        }
    }
    Ok(df.select(selection)?)
}
