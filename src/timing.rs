//! Wall-clock timing around arbitrary calls
//!
//! [`timed`] wraps a callable and returns one with the same signature that
//! records start and end timestamps around each call, reports them to a
//! [`TimingSink`], and returns the inner result unchanged.
//!
//! ```
//! use happy_cli::domain::{is_happy, PositiveNumber};
//! use happy_cli::timing::{timed, Timing, TimingSink};
//!
//! struct Discard;
//! impl TimingSink for Discard {
//!     fn record(&self, _label: &str, _timing: &Timing) {}
//! }
//!
//! let check = timed("is_happy", &Discard, is_happy);
//! assert!(check(PositiveNumber::ONE));
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::{Duration, Instant};

/// One measured call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timing {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Measured with a monotonic clock, independent of wall-clock jumps
    #[serde(serialize_with = "as_secs_f64")]
    pub elapsed: Duration,
}

impl Timing {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

fn as_secs_f64<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

/// Receives timing reports from [`timed`]
pub trait TimingSink {
    fn record(&self, label: &str, timing: &Timing);
}

/// Runs `f` once and returns its result with the measured timing
pub fn measure<R>(f: impl FnOnce() -> R) -> (R, Timing) {
    let started_at = Utc::now();
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    let finished_at = Utc::now();

    (
        result,
        Timing {
            started_at,
            finished_at,
            elapsed,
        },
    )
}

/// Wraps `f` so every call is measured and reported to `sink` under `label`
pub fn timed<'a, A, R>(
    label: &'a str,
    sink: &'a dyn TimingSink,
    f: impl Fn(A) -> R + 'a,
) -> impl Fn(A) -> R + 'a {
    move |arg| {
        let (result, timing) = measure(|| f(arg));
        sink.record(label, &timing);
        result
    }
}
