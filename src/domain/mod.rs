//! Domain models for happy-cli
//!
//! Contains the happy-number algorithm without any I/O concerns.

mod happy;
mod number;

pub use happy::{check, digit_square_sum, happy_numbers, is_happy, trace, Outcome, Trajectory};
pub use number::{NumberError, PositiveNumber};
