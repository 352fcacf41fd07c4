//! Type-specific checkers for prompt input.
//!
//! Each checker takes the raw line and either produces the typed value or
//! the rejection the engine reports to the operator. Range bounds are
//! normalized (`min > max` swapped) before checking.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::{Error, NumberKind};

fn normalize<T: PartialOrd>(min: T, max: T) -> (T, T) {
    if min > max { (max, min) } else { (min, max) }
}

/// Parse a base-10 integer of the target width and enforce `[min, max]`.
pub(crate) fn integer<T>(line: &str, min: T, max: T) -> Result<T, Error>
where
    T: FromStr + PartialOrd + Copy + Display,
{
    let (min, max) = normalize(min, max);
    let value: T = line
        .trim()
        .parse()
        .map_err(|_| Error::ParseFailure(NumberKind::Integer))?;
    if value < min || value > max {
        return Err(Error::range(min, max));
    }
    Ok(value)
}

/// Parse a base-10 decimal and enforce `[min, max]`. Rejects NaN and
/// trailing garbage (`str::parse` consumes the whole input).
pub(crate) fn decimal(line: &str, min: f64, max: f64) -> Result<f64, Error> {
    let (min, max) = normalize(min, max);
    let value: f64 = line
        .trim()
        .parse()
        .map_err(|_| Error::ParseFailure(NumberKind::Decimal))?;
    if value.is_nan() {
        return Err(Error::ParseFailure(NumberKind::Decimal));
    }
    if value < min || value > max {
        return Err(Error::range(min, max));
    }
    Ok(value)
}

/// Accept any line whose length (in characters) lies in
/// `[min_len, max_len]`. The caller resolves `max_len == 0` to the line
/// buffer capacity before getting here.
pub(crate) fn string_length(line: &str, min_len: usize, max_len: usize) -> Result<String, Error> {
    let (min_len, max_len) = normalize(min_len, max_len);
    let len = line.chars().count();
    if len < min_len || len > max_len {
        return Err(Error::LengthViolation {
            min: min_len,
            max: max_len,
        });
    }
    Ok(line.to_string())
}

/// Case-insensitive yes/no.
pub(crate) fn yes_no(line: &str) -> Result<bool, Error> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "1" | "true" => Ok(true),
        "n" | "no" | "0" | "false" => Ok(false),
        _ => Err(Error::InvalidChoice),
    }
}
