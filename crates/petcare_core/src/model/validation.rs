//! Boundary validation helpers for care model input.
//!
//! # Responsibility
//! - Normalize identity names and reject blank values.
//! - Check physical attribute ranges at construction time.
//! - Parse calendar dates from strict `YYYY-MM-DD` strings.

use crate::error::{CareError, CareResult};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Exclusive upper bound for pet weight in kilograms.
pub const MAX_WEIGHT_KG: f64 = 200.0;

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid iso date regex"));

/// Trims `value` and rejects it when blank.
///
/// `field` names the rejected input in the error message.
pub fn normalize_name(field: &str, value: &str) -> CareResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CareError::invalid(format!("{field} must not be blank")));
    }
    Ok(trimmed.to_string())
}

/// Accepts finite ages strictly greater than zero.
pub fn validate_age(age_years: f64) -> CareResult<f64> {
    if !age_years.is_finite() || age_years <= 0.0 {
        return Err(CareError::invalid(format!(
            "age must be a positive number of years, got {age_years}"
        )));
    }
    Ok(age_years)
}

/// Accepts weights in the open interval `(0, MAX_WEIGHT_KG)`.
pub fn validate_weight(weight_kg: f64) -> CareResult<f64> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 || weight_kg >= MAX_WEIGHT_KG {
        return Err(CareError::invalid(format!(
            "weight must be within (0, {MAX_WEIGHT_KG}) kg, got {weight_kg}"
        )));
    }
    Ok(weight_kg)
}

/// Parses a zero-padded `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> CareResult<NaiveDate> {
    let trimmed = value.trim();
    if !ISO_DATE_RE.is_match(trimmed) {
        return Err(CareError::invalid(format!(
            "date must use YYYY-MM-DD, got `{trimmed}`"
        )));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|err| CareError::invalid(format!("invalid calendar date `{trimmed}`: {err}")))
}
