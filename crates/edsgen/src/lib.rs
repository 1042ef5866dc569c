//! # edsgen
//!
//! Random elastic degenerate strings from the command line.
//!
//! This crate re-exports the alphabet and generator crates and provides
//! the argument parsers, input adapters and output helpers of the
//! `eds-random` binary.

pub mod input_parsers;
pub mod alphabet_parsers;
pub mod generator_parsers;
pub mod output;

pub mod alphabet {
    pub use ::eds_alphabet::*;
}

pub mod generator {
    pub use ::eds_generator::*;
}
