//! Checked integer arithmetic and rounding division

use std::fmt;
use std::str::FromStr;

use crate::errors::{CookbookError, CookbookResult};

/// How `divide` resolves a non-zero remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    Up,
    Down,
    Ceiling,
    Floor,
    HalfUp,
    HalfDown,
    HalfEven,
    Unnecessary,
}

impl RoundingMode {
    pub const ALL: [RoundingMode; 8] = [
        RoundingMode::Up,
        RoundingMode::Down,
        RoundingMode::Ceiling,
        RoundingMode::Floor,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
        RoundingMode::Unnecessary,
    ];

    /// Constant name, e.g. `HALF_UP`.
    pub fn name(self) -> &'static str {
        match self {
            RoundingMode::Up => "UP",
            RoundingMode::Down => "DOWN",
            RoundingMode::Ceiling => "CEILING",
            RoundingMode::Floor => "FLOOR",
            RoundingMode::HalfUp => "HALF_UP",
            RoundingMode::HalfDown => "HALF_DOWN",
            RoundingMode::HalfEven => "HALF_EVEN",
            RoundingMode::Unnecessary => "UNNECESSARY",
        }
    }

    /// Look up a mode by its exact, case-sensitive constant name.
    pub fn get_if_present(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoundingMode {
    type Err = CookbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::get_if_present(s).ok_or_else(|| CookbookError::UnknownVariant(s.to_string()))
    }
}

pub fn checked_pow(base: i32, exp: u32) -> CookbookResult<i32> {
    base.checked_pow(exp)
        .ok_or_else(|| CookbookError::Overflow(format!("{}^{}", base, exp)))
}

/// `p / q` rounded with `mode`.
pub fn divide(p: i32, q: i32, mode: RoundingMode) -> CookbookResult<i32> {
    if q == 0 {
        return Err(CookbookError::DivisionByZero);
    }
    let div = p
        .checked_div(q)
        .ok_or_else(|| CookbookError::Overflow(format!("{} / {}", p, q)))?;
    let rem = p - q * div;
    if rem == 0 {
        return Ok(div);
    }

    // sign of the exact quotient
    let signum = if (p ^ q) < 0 { -1 } else { 1 };
    let increment = match mode {
        RoundingMode::Unnecessary => return Err(CookbookError::RoundingNecessary { p, q }),
        RoundingMode::Down => false,
        RoundingMode::Up => true,
        RoundingMode::Ceiling => signum > 0,
        RoundingMode::Floor => signum < 0,
        RoundingMode::HalfUp | RoundingMode::HalfDown | RoundingMode::HalfEven => {
            let abs_rem = i64::from(rem).abs();
            let cmp_rem_to_half = abs_rem - (i64::from(q).abs() - abs_rem);
            if cmp_rem_to_half == 0 {
                match mode {
                    RoundingMode::HalfUp => true,
                    RoundingMode::HalfDown => false,
                    _ => div & 1 != 0,
                }
            } else {
                cmp_rem_to_half > 0
            }
        }
    };
    Ok(if increment { div + signum } else { div })
}

pub fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

pub fn is_power_of_two(x: i32) -> bool {
    x > 0 && x & (x - 1) == 0
}
