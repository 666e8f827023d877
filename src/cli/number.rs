//! Number commands (check, trace, range)

use anyhow::{bail, Context, Result};
use serde::Serialize;

use super::output::Output;
use crate::domain::{self, Outcome, PositiveNumber, Trajectory};
use crate::timing::timed;

/// Flags shared by checks
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    pub trace: bool,
    pub timing: bool,
}

#[derive(Serialize)]
struct CheckReport {
    number: PositiveNumber,
    happy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    trajectory: Option<Trajectory>,
}

fn parse_number(input: &str) -> Result<PositiveNumber> {
    input
        .parse()
        .with_context(|| format!("Cannot check '{}'", input))
}

/// Wraps `f` with timing reports when enabled
fn instrument<'a, T: 'a>(
    output: &'a Output,
    label: &'a str,
    enabled: bool,
    f: fn(PositiveNumber) -> T,
) -> Box<dyn Fn(PositiveNumber) -> T + 'a> {
    if enabled {
        Box::new(timed(label, output, f))
    } else {
        Box::new(f)
    }
}

/// Check whether each input is happy
pub fn check(output: &Output, inputs: &[String], options: CheckOptions) -> Result<()> {
    // Reject the whole batch before doing any work
    let numbers = inputs
        .iter()
        .map(|s| parse_number(s))
        .collect::<Result<Vec<_>>>()?;

    let reports: Vec<CheckReport> = if options.trace {
        let run = instrument(output, "trace", options.timing, domain::trace);
        numbers
            .into_iter()
            .map(|number| {
                let trajectory = run(number);
                CheckReport {
                    number,
                    happy: trajectory.is_happy(),
                    trajectory: Some(trajectory),
                }
            })
            .collect()
    } else {
        let run = instrument(output, "is_happy", options.timing, domain::is_happy);
        numbers
            .into_iter()
            .map(|number| CheckReport {
                number,
                happy: run(number),
                trajectory: None,
            })
            .collect()
    };

    output.verbose_ctx("check", &format!("Checked {} number(s)", reports.len()));

    if output.is_json() {
        output.data(&reports);
    } else {
        for report in &reports {
            let verdict = if report.happy { "happy" } else { "not happy" };
            println!("{} is {}", report.number, verdict);
            if let Some(trajectory) = &report.trajectory {
                println!("  {}", trajectory.display_path());
            }
        }
    }

    Ok(())
}

/// Show the full sequence for one number
pub fn trace(output: &Output, input: &str, timing: bool) -> Result<()> {
    let number = parse_number(input)?;
    let run = instrument(output, "trace", timing, domain::trace);
    let trajectory = run(number);

    output.verbose_ctx(
        "trace",
        &format!("{} took {} step(s)", number, trajectory.steps()),
    );

    if output.is_json() {
        output.data(&serde_json::json!({
            "number": number,
            "happy": trajectory.is_happy(),
            "steps": trajectory.steps(),
            "trajectory": trajectory,
        }));
    } else {
        println!("{}", trajectory.display_path());
        match trajectory.outcome() {
            Outcome::Happy => println!(
                "{} is happy: reached 1 after {} step(s)",
                number,
                trajectory.steps()
            ),
            Outcome::Cycle { repeated } => println!(
                "{} is not happy: returned to {} after {} step(s)",
                number,
                repeated,
                trajectory.steps()
            ),
        }
    }

    Ok(())
}

/// List happy numbers in `start..=end`
pub fn range(output: &Output, start: &str, end: &str, limit: u64) -> Result<()> {
    let first = parse_number(start)?;
    let last = parse_number(end)?;

    if first > last {
        bail!("Invalid range: start {} is greater than end {}", first, last);
    }

    let span = last.get() - first.get();
    if span >= limit {
        bail!(
            "Range {}..={} spans {} numbers, above the limit of {} (raise check.range_limit in the config)",
            first,
            last,
            u128::from(span) + 1,
            limit
        );
    }

    let happy: Vec<PositiveNumber> = domain::happy_numbers(first, last).collect();
    output.verbose_ctx(
        "range",
        &format!("Found {} happy number(s) in {}..={}", happy.len(), first, last),
    );

    if output.is_json() {
        output.data(&serde_json::json!({
            "start": first,
            "end": last,
            "count": happy.len(),
            "happy": happy,
        }));
    } else if happy.is_empty() {
        println!("No happy numbers in {}..={}", first, last);
    } else {
        println!("Happy numbers in {}..={} ({}):", first, last, happy.len());
        for n in &happy {
            println!("{}", n);
        }
    }

    Ok(())
}
