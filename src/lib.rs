//! happy-cli - Happy number checker
//!
//! A number is happy when repeatedly summing the squares of its digits
//! reaches 1. The [`domain`] module holds the pure algorithm, [`timing`]
//! offers a wrapper for measuring any call, and [`cli`] exposes both
//! through the `happy` binary.

pub mod domain;
pub mod timing;
pub mod config;
pub mod cli;

pub use domain::{is_happy, trace, NumberError, PositiveNumber, Trajectory};
