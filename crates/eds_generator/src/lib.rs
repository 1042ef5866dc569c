//! # eds_generator
//!
//! Random elastic degenerate strings (EDS). An EDS interleaves literal
//! symbols with degenerate segments `{alt1,alt2,...}`, and every
//! alternative may again contain degenerate segments:
//!
//! ```text
//! Element     := Literal | '{' Alternative (',' Alternative)* '}'
//! Alternative := (Literal | Element)*
//! ```
//!
//! Segment cardinalities and element lengths follow folded normal
//! distributions whose means shrink logarithmically with nesting depth.
//! All randomness comes from a caller-supplied [`rand::Rng`], so a seeded
//! generator reproduces the exact same text.

mod error;
mod config;
mod distribution;
mod segment;
mod generator;
mod eds;

#[cfg(test)]
mod grammar;

pub use error::*;
pub use config::*;
pub use distribution::*;
pub use segment::*;
pub use generator::*;
pub use eds::*;
