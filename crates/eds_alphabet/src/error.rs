use std::fmt;

#[derive(Debug)]
pub enum AlphabetError {
    Io(std::io::Error),
    Parse { line: usize, message: String }, // 1-based line of a frequency table
    UnknownCode(char),
    Empty,
    ReservedSymbol(char),
    DuplicateSymbol(char),
    WeightCount { symbols: usize, weights: usize },
    InvalidWeight(char, f64),
    ZeroWeights,
    Weights(String),
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlphabetError::Io(e) => write!(f, "I/O error: {}", e),
            AlphabetError::Parse { line, message } => {
                write!(f, "Malformed frequency table at line {}: {}", line, message)
            }
            AlphabetError::UnknownCode(c) => {
                write!(f, "Unknown alphabet '{}' (valid values: D for DNA, R for RNA, P for protein)", c)
            }
            AlphabetError::Empty => write!(f, "Alphabet contains no symbols"),
            AlphabetError::ReservedSymbol(c) => {
                write!(f, "Symbol {:?} is reserved by the EDS format", c)
            }
            AlphabetError::DuplicateSymbol(c) => {
                write!(f, "Symbol '{}' occurs more than once", c)
            }
            AlphabetError::WeightCount { symbols, weights } => {
                write!(f, "Got {} weights for {} symbols", weights, symbols)
            }
            AlphabetError::InvalidWeight(c, w) => {
                write!(f, "Invalid weight {} for symbol '{}'", w, c)
            }
            AlphabetError::ZeroWeights => write!(f, "Symbol weights sum to zero"),
            AlphabetError::Weights(msg) => write!(f, "Invalid weights: {}", msg),
        }
    }
}

impl std::error::Error for AlphabetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AlphabetError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AlphabetError {
    fn from(e: std::io::Error) -> Self {
        AlphabetError::Io(e)
    }
}
