use rand::Rng;
use log::debug;
use eds_alphabet::Alphabet;

use crate::ConfigError;
use crate::GeneratorConfig;
use crate::RecursionContext;
use crate::Segment;
use crate::SegmentGenerator;

/// A generated EDS and its measured extent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedEds {
    pub text: String,
    /// Literal symbols plus the longest alternative of every segment.
    pub length: usize,
    /// Literal symbols plus all alternatives of every segment.
    pub size: usize,
    /// Top-level segments written in braces; nested groups are not counted.
    pub degenerate_segments: usize,
}

impl GeneratedEds {
    fn push_symbol(&mut self, c: char) {
        self.text.push(c);
        self.length += 1;
        self.size += 1;
    }

    fn push_segment(&mut self, segment: &Segment) {
        self.text.push_str(&segment.to_string());
        self.length += segment.max_span();
        self.size += segment.sum_span();
        if segment.is_degenerate() {
            self.degenerate_segments += 1;
        }
    }
}

/// Produces whole EDS texts, position by position, until the configured
/// target is reached.
#[derive(Debug, Clone)]
pub struct EdsGenerator<'a> {
    alphabet: &'a Alphabet,
    config: &'a GeneratorConfig,
    segments: SegmentGenerator<'a>,
}

impl<'a> EdsGenerator<'a> {
    pub fn new(alphabet: &'a Alphabet, config: &'a GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let segments = SegmentGenerator::new(
            alphabet,
            config.recursive_probability,
            config.max_depth,
            config.force_min_size,
        );
        Ok(EdsGenerator { alphabet, config, segments })
    }

    pub fn generate<R: Rng>(&self, rng: &mut R) -> GeneratedEds {
        let mut eds = GeneratedEds::default();
        while !self.config.target.is_reached(eds.length, eds.size) {
            if rng.random::<f64>() < self.config.degenerate_probability {
                let ctx = RecursionContext::root(self.config.settings);
                let segment = self.segments.generate_segment(rng, &ctx);
                eds.push_segment(&segment);
            } else {
                eds.push_symbol(self.alphabet.sample(rng));
            }
        }
        debug!("Generated EDS of length {} and size {} ({} bytes, {} degenerate segments)",
            eds.length, eds.size, eds.text.len(), eds.degenerate_segments);
        eds
    }
}
