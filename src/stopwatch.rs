//! Elapsed-time measurement

use std::fmt;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::errors::{CookbookError, CookbookResult};

/// Accumulates elapsed time across start/stop cycles.
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    elapsed: Duration,
    started_at: Option<Instant>,
}

impl Stopwatch {
    pub fn create_unstarted() -> Self {
        Self::default()
    }

    pub fn create_started() -> Self {
        Self {
            elapsed: Duration::ZERO,
            started_at: Some(Instant::now()),
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn start(&mut self) -> CookbookResult<&mut Self> {
        if self.is_running() {
            return Err(CookbookError::IllegalState(
                "stopwatch is already running".to_string(),
            ));
        }
        self.started_at = Some(Instant::now());
        Ok(self)
    }

    pub fn stop(&mut self) -> CookbookResult<&mut Self> {
        if !self.is_running() {
            return Err(CookbookError::IllegalState(
                "stopwatch is already stopped".to_string(),
            ));
        }
        self.halt();
        Ok(self)
    }

    fn halt(&mut self) {
        if let Some(started_at) = self.started_at.take() {
            self.elapsed += started_at.elapsed();
        }
    }

    /// Zero the elapsed time and leave the stopwatch stopped.
    pub fn reset(&mut self) -> &mut Self {
        self.elapsed = Duration::ZERO;
        self.started_at = None;
        self
    }

    pub fn elapsed(&self) -> Duration {
        match self.started_at {
            Some(started_at) => self.elapsed + started_at.elapsed(),
            None => self.elapsed,
        }
    }
}

const UNITS: [(u128, &str); 7] = [
    (86_400_000_000_000, "d"),
    (3_600_000_000_000, "h"),
    (60_000_000_000, "min"),
    (1_000_000_000, "s"),
    (1_000_000, "ms"),
    (1_000, "\u{03bc}s"),
    (1, "ns"),
];

/// Render a duration in its largest non-zero unit with four significant digits.
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    let (unit_nanos, abbreviation) = UNITS
        .iter()
        .copied()
        .find(|(unit, _)| nanos >= *unit)
        .unwrap_or((1, "ns"));
    let value = nanos as f64 / unit_nanos as f64;
    format!("{} {}", format_four_significant(value), abbreviation)
}

/// Same output as C's `%.4g` for non-negative values, e.g. `4.200`, `38.12`, `2.000e+04`.
fn format_four_significant(value: f64) -> String {
    if value == 0.0 {
        return "0.000".to_string();
    }
    let decimals = (3 - value.abs().log10().floor() as i32).max(0) as usize;
    let rendered = format!("{:.*}", decimals, value);
    // rounding can carry into a new integer digit (9.9996 -> 10.000)
    let int_digits = rendered.split('.').next().map_or(0, str::len);
    if int_digits + decimals <= 4 {
        rendered
    } else if decimals > 0 {
        format!("{:.*}", decimals - 1, value)
    } else {
        format_scientific(value)
    }
}

/// `2.000e+04` style: three fractional mantissa digits, signed two-digit exponent.
fn format_scientific(value: f64) -> String {
    let rendered = format!("{:.3e}", value);
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => rendered,
    }
}

impl fmt::Display for Stopwatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_duration(self.elapsed()))
    }
}

/// Block the calling thread for `duration`.
pub fn do_something(duration: Duration) {
    debug!("sleeping for {:?}", duration);
    thread::sleep(duration);
}

/// Run `f` under a started stopwatch and log how long it took.
pub fn time<T>(label: &str, f: impl FnOnce() -> T) -> (T, Stopwatch) {
    let mut stopwatch = Stopwatch::create_started();
    let result = f();
    stopwatch.halt();
    info!("{} took {}", label, stopwatch);
    (result, stopwatch)
}
