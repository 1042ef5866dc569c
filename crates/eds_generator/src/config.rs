use std::fmt;
use serde::Serialize;

use crate::ConfigError;
use crate::DistributionSampler;
use crate::DistributionSettings;

/// Upper bound for `mean + 6 * |stdev|` of a distribution without a cap.
pub const MAX_DISTRIBUTION_VALUE: f64 = u32::MAX as f64;

/// When to stop generating.
///
/// A literal symbol adds one to both counters. A degenerate segment adds
/// its longest alternative to the length and all of its alternatives to
/// the size (see [`Segment::max_span`](crate::Segment::max_span) and
/// [`Segment::sum_span`](crate::Segment::sum_span)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Length(usize),
    Size(usize),
}

impl Target {
    /// Exactly one of the two options must be given.
    pub fn from_options(length: Option<usize>, size: Option<usize>) -> Result<Self, ConfigError> {
        match (length, size) {
            (Some(_), Some(_)) => Err(ConfigError::Conflict("EDS length", "EDS size")),
            (Some(n), None) => Ok(Target::Length(n)),
            (None, Some(n)) => Ok(Target::Size(n)),
            (None, None) => Err(ConfigError::MissingOneOf("EDS length", "EDS size")),
        }
    }

    pub fn value(&self) -> usize {
        match self {
            Target::Length(n) | Target::Size(n) => *n,
        }
    }

    pub fn is_reached(&self, length: usize, size: usize) -> bool {
        match self {
            Target::Length(n) => length >= *n,
            Target::Size(n) => size >= *n,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Length(n) => write!(f, "length {}", n),
            Target::Size(n) => write!(f, "size {}", n),
        }
    }
}

/// Everything that shapes a generated EDS, apart from the alphabet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratorConfig {
    pub target: Target,
    /// Chance to open a degenerate segment at a top-level position.
    pub degenerate_probability: f64,
    /// Chance to open a nested segment at a position inside an alternative.
    pub recursive_probability: f64,
    pub max_depth: usize,
    /// Degenerate segments get at least two alternatives.
    pub force_min_size: bool,
    pub settings: DistributionSettings,
}

impl GeneratorConfig {
    pub fn new(target: Target) -> Self {
        GeneratorConfig {
            target,
            degenerate_probability: 0.15,
            recursive_probability: 0.0,
            max_depth: 5,
            force_min_size: true,
            settings: DistributionSettings::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target.value() == 0 {
            return Err(ConfigError::ZeroTarget);
        }
        check_probability("Degenerate segment probability", self.degenerate_probability)?;
        check_probability("Recursive segment probability", self.recursive_probability)?;
        check_distribution("Element length", &self.settings.element_length)?;
        check_distribution("Segment size", &self.settings.cardinality)?;
        Ok(())
    }
}

fn check_probability(name: &'static str, p: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(ConfigError::Probability(name, p))
    }
}

fn check_distribution(name: &'static str, d: &DistributionSampler) -> Result<(), ConfigError> {
    if !d.mean().is_finite() || d.mean() < 0. {
        return Err(ConfigError::Mean(name, d.mean()));
    }
    if !d.stdev().is_finite() {
        return Err(ConfigError::Stdev(name, d.stdev()));
    }
    match d.cap() {
        Some(0) => return Err(ConfigError::ZeroCap(name)),
        Some(_) => (),
        None => {
            let reach = d.mean() + 6. * d.stdev().abs();
            if reach > MAX_DISTRIBUTION_VALUE {
                return Err(ConfigError::TooLarge(name, reach));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_from_options() {
        assert_eq!(Target::from_options(Some(10), None), Ok(Target::Length(10)));
        assert_eq!(Target::from_options(None, Some(7)), Ok(Target::Size(7)));
        assert!(matches!(Target::from_options(Some(1), Some(1)), Err(ConfigError::Conflict(..))));
        assert!(matches!(Target::from_options(None, None), Err(ConfigError::MissingOneOf(..))));
    }

    #[test]
    fn test_target_is_reached() {
        assert!(!Target::Length(5).is_reached(4, 100));
        assert!(Target::Length(5).is_reached(5, 0));
        assert!(!Target::Size(5).is_reached(100, 4));
        assert!(Target::Size(5).is_reached(0, 6));
        assert_eq!(Target::Size(5).to_string(), "size 5");
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(GeneratorConfig::new(Target::Length(100)).validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let base = GeneratorConfig::new(Target::Length(100));

        let config = GeneratorConfig { degenerate_probability: 1.5, ..base.clone() };
        assert!(matches!(config.validate(), Err(ConfigError::Probability(_, p)) if p == 1.5));

        let config = GeneratorConfig { recursive_probability: -0.1, ..base.clone() };
        assert!(matches!(config.validate(), Err(ConfigError::Probability(..))));

        let config = GeneratorConfig { degenerate_probability: f64::NAN, ..base.clone() };
        assert!(matches!(config.validate(), Err(ConfigError::Probability(..))));

        let config = GeneratorConfig { target: Target::Size(0), ..base.clone() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTarget));

        let mut config = base.clone();
        config.settings.cardinality = DistributionSampler::new(-1., 1.);
        assert!(matches!(config.validate(), Err(ConfigError::Mean("Segment size", _))));

        let mut config = base.clone();
        config.settings.element_length = DistributionSampler::new(3., f64::INFINITY);
        assert!(matches!(config.validate(), Err(ConfigError::Stdev("Element length", _))));

        let mut config = base;
        config.settings.element_length = DistributionSampler::new(3., 1.).with_cap(Some(0));
        assert_eq!(config.validate(), Err(ConfigError::ZeroCap("Element length")));
    }

    #[test]
    fn test_validate_rejects_huge_distributions() {
        let mut config = GeneratorConfig::new(Target::Length(100));
        config.settings.element_length = DistributionSampler::new(5., 1e300);
        assert!(matches!(config.validate(), Err(ConfigError::TooLarge("Element length", _))));

        config.settings.element_length = DistributionSampler::new(1e19, 0.);
        assert!(matches!(config.validate(), Err(ConfigError::TooLarge("Element length", _))));

        config.settings.element_length = DistributionSampler::new(5., 2.5);
        config.settings.cardinality = DistributionSampler::new(1e10, 1.);
        assert!(matches!(config.validate(), Err(ConfigError::TooLarge("Segment size", _))));

        // a cap bounds every draw
        config.settings.cardinality = DistributionSampler::new(1e10, 1.).with_cap(Some(4));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validate_accepts_edge_values() {
        let mut config = GeneratorConfig::new(Target::Size(1));
        config.degenerate_probability = 1.0;
        config.recursive_probability = 0.0;
        config.max_depth = 0;
        config.settings.cardinality = DistributionSampler::new(0., -2.);
        assert_eq!(config.validate(), Ok(()));
    }
}
