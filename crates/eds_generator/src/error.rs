use std::fmt;

use crate::MAX_DISTRIBUTION_VALUE;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Conflict(&'static str, &'static str),    // both options given
    MissingOneOf(&'static str, &'static str), // neither option given
    Probability(&'static str, f64),
    Mean(&'static str, f64),
    Stdev(&'static str, f64),
    ZeroCap(&'static str),
    TooLarge(&'static str, f64), // mean + 6 stdev of an uncapped distribution
    ZeroTarget,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Conflict(a, b) => {
                write!(f, "Cannot specify {} and {} at the same time", a, b)
            }
            ConfigError::MissingOneOf(a, b) => {
                write!(f, "Must specify one of {} or {}", a, b)
            }
            ConfigError::Probability(name, p) => {
                write!(f, "{} must be in the interval [0, 1], got {}", name, p)
            }
            ConfigError::Mean(name, m) => {
                write!(f, "{} mean must be a finite number >= 0, got {}", name, m)
            }
            ConfigError::Stdev(name, s) => {
                write!(f, "{} standard deviation must be finite, got {}", name, s)
            }
            ConfigError::ZeroCap(name) => {
                write!(f, "{} maximum must be at least 1", name)
            }
            ConfigError::TooLarge(name, v) => {
                write!(f, "{} distribution reaches {:e}, set a maximum or use values below {}",
                    name, v, MAX_DISTRIBUTION_VALUE)
            }
            ConfigError::ZeroTarget => write!(f, "EDS length/size target must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}
