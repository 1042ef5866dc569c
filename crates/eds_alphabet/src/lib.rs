//! # eds_alphabet
//!
//! Symbol alphabets for random elastic degenerate strings: the built-in
//! nucleotide and protein sets, arbitrary weighted alphabets and a reader
//! for `<count> <symbol>` frequency tables.

mod error;
mod alphabet;
mod frequencies;

pub use error::*;
pub use alphabet::*;
pub use frequencies::*;
