use clap::Args;
use anyhow::Context;
use anyhow::Result;
use log::debug;

use eds_alphabet::Alphabet;
use eds_generator::ConfigError;

use crate::input_parsers::read_frequencies_input;

/// Alphabet selection: a built-in alphabet or a frequency file.
#[derive(Debug, Args)]
pub struct AlphabetArguments {
    /// Alphabet type (D for DNA, R for RNA, P for protein) [default: D]
    #[arg(short, long, value_name = "CODE")]
    pub alphabet: Option<char>,

    /// Frequency file of the alphabet symbols ("<count> <symbol>" per line), or "-" for stdin
    #[arg(short, long, value_name = "FILE")]
    pub freq_file: Option<String>,
}

impl AlphabetArguments {
    pub fn build_alphabet(&self) -> Result<Alphabet> {
        match (self.alphabet, &self.freq_file) {
            (Some(_), Some(_)) => {
                Err(ConfigError::Conflict("alphabet", "frequency file").into())
            }
            (Some(code), None) => Ok(Alphabet::from_code(code)?),
            (None, Some(path)) => {
                debug!("Reading symbol frequencies from: {}", path);
                read_frequencies_input(path)
                    .with_context(|| format!("Failed to read frequency file '{}'", path))
            }
            (None, None) => Ok(Alphabet::dna()),
        }
    }
}
