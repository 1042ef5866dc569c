use clap::Args;
use clap::ArgAction;
use anyhow::Result;

use eds_generator::Target;
use eds_generator::GeneratorConfig;
use eds_generator::DistributionSampler;
use eds_generator::DistributionSettings;

/// Exactly one of the two determines when generation stops.
#[derive(Debug, Args)]
pub struct TargetArguments {
    /// Length of EDS - degenerate segments add to length with their longest element
    #[arg(short, long, value_name = "NUMBER")]
    pub length: Option<usize>,

    /// Size of EDS - degenerate segments add to size with the sum of all element lengths
    #[arg(short, long, value_name = "NUMBER")]
    pub size: Option<usize>,
}

#[derive(Debug, Args)]
pub struct StructureArguments {
    /// Probability of a degenerate segment on each position
    #[arg(short = 'p', long, value_name = "NUMBER", default_value_t = 0.15)]
    pub deg_prob: f64,

    /// Probability of starting a recursive segment inside an element
    #[arg(short = 'r', long, value_name = "NUMBER", default_value_t = 0.0)]
    pub rec_prob: f64,

    /// Maximum depth of recursive segments
    #[arg(short = 'b', long, value_name = "NUMBER", default_value_t = 5)]
    pub rec_max_depth: usize,
}

#[derive(Debug, Args)]
pub struct SegmentSizeArguments {
    /// Gaussian mean of the number of strings in a degenerate segment
    #[arg(short = 'n', long, value_name = "NUMBER", default_value_t = 5.0)]
    pub segment_size_avg: f64,

    /// Gaussian standard deviation of the number of strings in a degenerate segment
    #[arg(short = 'm', long, value_name = "NUMBER", default_value_t = 2.5)]
    pub segment_size_stdev: f64,

    /// Maximum number of strings in a degenerate segment
    #[arg(long, value_name = "NUMBER")]
    pub segment_size_max: Option<usize>,

    /// Disable the forced minimum segment size of 2 elements. Segments of
    /// size 1 are then embedded into the parent string, effectively
    /// reducing the degenerate probability.
    #[arg(long, action = ArgAction::SetTrue)]
    pub segment_size_no_force_min: bool,
}

#[derive(Debug, Args)]
pub struct ElementLengthArguments {
    /// Gaussian mean of the length of a degenerate element
    #[arg(short = 'e', long, value_name = "NUMBER", default_value_t = 5.0)]
    pub element_len_avg: f64,

    /// Gaussian standard deviation of the length of a degenerate element
    #[arg(short = 'd', long, value_name = "NUMBER", default_value_t = 2.5)]
    pub element_len_stdev: f64,

    /// Maximum length of a degenerate element
    #[arg(long, value_name = "NUMBER")]
    pub element_len_max: Option<usize>,
}

#[derive(Debug, Args)]
pub struct GeneratorArguments {
    #[command(flatten)]
    pub target: TargetArguments,

    #[command(flatten, next_help_heading = "Structural parameters")]
    pub structure: StructureArguments,

    #[command(flatten, next_help_heading = "Segment size parameters")]
    pub segment_size: SegmentSizeArguments,

    #[command(flatten, next_help_heading = "Element length parameters")]
    pub element_length: ElementLengthArguments,
}

impl GeneratorArguments {
    /// Resolve and validate the generator configuration.
    pub fn build_config(&self) -> Result<GeneratorConfig> {
        let target = Target::from_options(self.target.length, self.target.size)?;
        let element_length = DistributionSampler::new(
            self.element_length.element_len_avg,
            self.element_length.element_len_stdev,
        ).with_cap(self.element_length.element_len_max);
        let cardinality = DistributionSampler::new(
            self.segment_size.segment_size_avg,
            self.segment_size.segment_size_stdev,
        ).with_cap(self.segment_size.segment_size_max);

        let config = GeneratorConfig {
            target,
            degenerate_probability: self.structure.deg_prob,
            recursive_probability: self.structure.rec_prob,
            max_depth: self.structure.rec_max_depth,
            force_min_size: !self.segment_size.segment_size_no_force_min,
            settings: DistributionSettings::new(element_length, cardinality),
        };
        config.validate()?;
        Ok(config)
    }
}
