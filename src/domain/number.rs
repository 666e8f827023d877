//! Validated positive integer input
//!
//! The checker is only defined for `n >= 1`. Zero and negative values are
//! rejected here, before any iteration starts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum NumberError {
    #[error("Invalid argument: expected a positive integer, got {0}")]
    InvalidArgument(i128),

    #[error("Invalid number: '{0}' is not an integer")]
    Parse(String),
}

/// An integer `n >= 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct PositiveNumber(u64);

impl PositiveNumber {
    pub const ONE: PositiveNumber = PositiveNumber(1);

    /// Returns `None` for zero
    pub fn new(value: u64) -> Option<Self> {
        (value >= 1).then_some(Self(value))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PositiveNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for PositiveNumber {
    type Error = NumberError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(NumberError::InvalidArgument(i128::from(value)))
    }
}

impl TryFrom<i64> for PositiveNumber {
    type Error = NumberError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(NumberError::InvalidArgument(i128::from(value)))
    }
}

impl FromStr for PositiveNumber {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // Parse wide so "-5" and "0" report as invalid arguments, not parse failures
        let value: i128 = s.parse().map_err(|_| NumberError::Parse(s.to_string()))?;

        u64::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(NumberError::InvalidArgument(value))
    }
}

impl From<PositiveNumber> for u64 {
    fn from(n: PositiveNumber) -> Self {
        n.0
    }
}
