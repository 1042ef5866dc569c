use rand::Rng;
use log::trace;
use eds_alphabet::Alphabet;

use crate::Alternative;
use crate::Segment;
use crate::DistributionSettings;

/// State handed from a segment to its nested segments.
#[derive(Debug, Clone, PartialEq)]
pub struct RecursionContext {
    depth: usize,
    /// Positions left in the enclosing alternative, `None` at the top.
    budget: Option<usize>,
    settings: DistributionSettings,
}

impl RecursionContext {
    pub fn root(settings: DistributionSettings) -> Self {
        RecursionContext { depth: 0, budget: None, settings }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn budget(&self) -> Option<usize> {
        self.budget
    }

    pub fn settings(&self) -> &DistributionSettings {
        &self.settings
    }

    pub fn can_recurse(&self, max_depth: usize) -> bool {
        self.depth < max_depth
    }

    /// Context of a segment nested at a position with `remaining`
    /// positions left in the current alternative.
    pub fn child(&self, remaining: usize) -> Self {
        RecursionContext {
            depth: self.depth + 1,
            budget: Some(remaining),
            settings: self.settings.reduce(),
        }
    }
}

/// Builds degenerate segments whose alternatives may nest further
/// segments, up to a maximum depth.
#[derive(Debug, Clone)]
pub struct SegmentGenerator<'a> {
    alphabet: &'a Alphabet,
    recursive_probability: f64,
    max_depth: usize,
    min_size: usize,
}

impl<'a> SegmentGenerator<'a> {
    pub fn new(
        alphabet: &'a Alphabet,
        recursive_probability: f64,
        max_depth: usize,
        force_min_size: bool,
    ) -> Self {
        SegmentGenerator {
            alphabet,
            recursive_probability,
            max_depth,
            min_size: if force_min_size { 2 } else { 1 },
        }
    }

    /// Smallest number of alternatives per segment. The forced minimum
    /// takes precedence over a segment size cap.
    pub fn min_size(&self) -> usize {
        self.min_size
    }

    /// Generate one segment. Random numbers are consumed depth-first,
    /// alternative by alternative.
    pub fn generate_segment<R: Rng>(&self, rng: &mut R, ctx: &RecursionContext) -> Segment {
        let size = self.min_size.max(ctx.settings.sample_cardinality(rng));
        trace!("segment of size {} at depth {} (budget {:?})", size, ctx.depth, ctx.budget);

        let mut segment = Segment::from(self.generate_alternative(rng, ctx));
        for _ in 1..size {
            segment.push(self.generate_alternative(rng, ctx));
        }
        segment
    }

    fn generate_alternative<R: Rng>(&self, rng: &mut R, ctx: &RecursionContext) -> Alternative {
        let length = ctx.settings.sample_element_length(rng, ctx.budget);
        let mut text = String::new();

        if self.recursive_probability <= 0. || !ctx.can_recurse(self.max_depth) {
            self.alphabet.extend(rng, &mut text, length);
            return Alternative { text, span: length };
        }

        let mut cursor = 0;
        while cursor < length {
            if rng.random::<f64>() < self.recursive_probability {
                let nested = self.generate_segment(rng, &ctx.child(length - cursor));
                text.push_str(&nested.to_string());
                cursor += nested.first_span();
            } else {
                text.push(self.alphabet.sample(rng));
                cursor += 1;
            }
        }
        debug_assert_eq!(cursor, length, "nested span overshoots its budget");
        Alternative { text, span: cursor }
    }
}
