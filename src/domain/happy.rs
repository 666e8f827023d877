//! Happy number detection
//!
//! A number is happy when repeatedly replacing it by the sum of the squares
//! of its decimal digits eventually reaches 1. Every other number falls into
//! a cycle that never contains 1; a visited set detects that cycle.
//!
//! The digit-square-sum of any `u64` is at most `20 * 81 = 1620`, so after a
//! single step every sequence lives in a small range and terminates quickly.

use serde::Serialize;
use std::collections::HashSet;

use super::number::{NumberError, PositiveNumber};

/// Sum of the squares of the base-10 digits of `n`
pub fn digit_square_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        let digit = n % 10;
        sum += digit * digit;
        n /= 10;
    }
    sum
}

/// Returns true if iterating [`digit_square_sum`] from `n` reaches 1
pub fn is_happy(n: PositiveNumber) -> bool {
    let mut visited = HashSet::new();
    let mut current = n.get();

    loop {
        if current == 1 {
            return true;
        }
        if !visited.insert(current) {
            return false;
        }
        current = digit_square_sum(current);
    }
}

/// Validates a raw integer and checks it
pub fn check(n: i64) -> Result<bool, NumberError> {
    PositiveNumber::try_from(n).map(is_happy)
}

/// How a trajectory ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// The sequence reached 1
    Happy,
    /// The sequence came back to `repeated` without reaching 1
    Cycle { repeated: u64 },
}

/// The full sequence of values visited while checking a number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trajectory {
    start: PositiveNumber,
    /// Every value visited, starting at `start` and ending at 1 or at the
    /// first repeated value
    values: Vec<u64>,
    outcome: Outcome,
}

impl Trajectory {
    pub fn start(&self) -> PositiveNumber {
        self.start
    }

    pub fn values(&self) -> &[u64] {
        &self.values
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_happy(&self) -> bool {
        self.outcome == Outcome::Happy
    }

    /// Number of digit-square-sum applications performed
    pub fn steps(&self) -> usize {
        self.values.len() - 1
    }

    /// Renders the sequence as `19 -> 82 -> 68 -> 100 -> 1`
    pub fn display_path(&self) -> String {
        self.values
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

/// Runs the same walk as [`is_happy`], recording every value visited
pub fn trace(n: PositiveNumber) -> Trajectory {
    let mut visited = HashSet::new();
    let mut current = n.get();
    let mut values = vec![current];

    let outcome = loop {
        if current == 1 {
            break Outcome::Happy;
        }
        if !visited.insert(current) {
            break Outcome::Cycle { repeated: current };
        }
        current = digit_square_sum(current);
        values.push(current);
    };

    Trajectory {
        start: n,
        values,
        outcome,
    }
}

/// Happy numbers in the inclusive range `start..=end`, in ascending order
pub fn happy_numbers(
    start: PositiveNumber,
    end: PositiveNumber,
) -> impl Iterator<Item = PositiveNumber> {
    (start.get()..=end.get())
        .filter_map(PositiveNumber::new)
        .filter(|n| is_happy(*n))
}
