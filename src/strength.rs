use crate::charset::{CharsetSpec, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
use std::fmt;

pub const WEAK_THRESHOLD: f64 = 30.0;
pub const MODERATE_THRESHOLD: f64 = 50.0;
pub const STRONG_THRESHOLD: f64 = 70.0;
pub const VERY_STRONG_THRESHOLD: f64 = 90.0;

/// Discrete strength categories, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn label(&self) -> &'static str {
        match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }

    fn classify(entropy_bits: f64) -> Self {
        if entropy_bits < WEAK_THRESHOLD {
            Strength::VeryWeak
        } else if entropy_bits < MODERATE_THRESHOLD {
            Strength::Weak
        } else if entropy_bits < STRONG_THRESHOLD {
            Strength::Moderate
        } else if entropy_bits < VERY_STRONG_THRESHOLD {
            Strength::Strong
        } else {
            Strength::VeryStrong
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How hard a password of the given shape is to brute-force.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthReport {
    pub length: usize,
    pub pool_size: usize,
    pub entropy_bits: f64,
    pub strength: Strength,
}

/// Entropy in bits for a password of `password_length` characters drawn
/// uniformly from a pool of `pool_size` characters.
pub fn estimate(password_length: usize, pool_size: usize) -> StrengthReport {
    let entropy_bits = if pool_size == 0 {
        0.0
    } else {
        password_length as f64 * (pool_size as f64).log2()
    };

    StrengthReport {
        length: password_length,
        pool_size,
        entropy_bits,
        strength: Strength::classify(entropy_bits),
    }
}

/// Which canonical character classes actually occur in a password.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PasswordAnalysis {
    pub classes: CharsetSpec,
    pub report: StrengthReport,
}

/// Inspects a concrete password: detects the character classes it uses,
/// sums their canonical sizes into an effective pool size, and estimates
/// strength from that.
pub fn analyze(password: &str) -> PasswordAnalysis {
    let classes = CharsetSpec {
        lowercase: password.bytes().any(|b| LOWERCASE.contains(&b)),
        uppercase: password.bytes().any(|b| UPPERCASE.contains(&b)),
        digits: password.bytes().any(|b| DIGITS.contains(&b)),
        symbols: password.bytes().any(|b| SYMBOLS.contains(&b)),
    };

    let mut pool_size = 0;
    if classes.lowercase {
        pool_size += LOWERCASE.len();
    }
    if classes.uppercase {
        pool_size += UPPERCASE.len();
    }
    if classes.digits {
        pool_size += DIGITS.len();
    }
    if classes.symbols {
        pool_size += SYMBOLS.len();
    }

    PasswordAnalysis {
        classes,
        report: estimate(password.chars().count(), pool_size),
    }
}
