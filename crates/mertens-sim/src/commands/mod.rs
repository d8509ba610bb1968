pub mod arith;
pub mod series;
pub mod sweep;
pub mod version;

use std::error::Error;

use mertens_arith::Method;
use mertens_core::{to_canonical_json_bytes, MertensError};
use serde::Serialize;

/// Narrows a signed CLI argument to the positive domain, rejecting n <= 0.
pub fn positive(argument: &str, value: i64) -> Result<u64, MertensError> {
    u64::try_from(value)
        .ok()
        .filter(|&v| v >= 1)
        .ok_or_else(|| MertensError::invalid_input(argument, value))
}

pub fn parse_method(value: Option<&str>) -> Result<Option<Method>, MertensError> {
    value.map(str::parse::<Method>).transpose()
}

pub fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    let bytes = to_canonical_json_bytes(value)?;
    println!("{}", String::from_utf8(bytes)?);
    Ok(())
}
