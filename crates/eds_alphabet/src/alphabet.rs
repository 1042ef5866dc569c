use std::fmt;
use log::debug;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use crate::AlphabetError;

pub const DNA_ALPHABET: &str = "ACGT";
pub const RNA_ALPHABET: &str = "ACGU";
pub const PROTEIN_ALPHABET: &str = "ACDEFGHIKLMNPQRSTVWY";

/// Characters with a meaning in the EDS grammar.
pub const RESERVED_SYMBOLS: [char; 3] = ['{', ',', '}'];

/// An ordered set of symbols, sampled uniformly or by normalized weight.
///
/// Construction checks everything that could make the generated text
/// ambiguous (reserved or duplicate symbols) or the weighted draw
/// impossible (wrong weight count, negative weights, zero total).
/// An `Alphabet` is immutable once built.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Vec<char>,
    weights: Option<Vec<f64>>,
    index: Option<WeightedIndex<f64>>,
}

fn check_symbols(symbols: &[char]) -> Result<(), AlphabetError> {
    if symbols.is_empty() {
        return Err(AlphabetError::Empty);
    }
    for (i, &c) in symbols.iter().enumerate() {
        if RESERVED_SYMBOLS.contains(&c) || c.is_whitespace() {
            return Err(AlphabetError::ReservedSymbol(c));
        }
        if symbols[..i].contains(&c) {
            return Err(AlphabetError::DuplicateSymbol(c));
        }
    }
    Ok(())
}

impl Alphabet {
    /// Every symbol is drawn with the same probability.
    pub fn uniform(symbols: &[char]) -> Result<Self, AlphabetError> {
        check_symbols(symbols)?;
        Ok(Alphabet {
            symbols: symbols.to_vec(),
            weights: None,
            index: None,
        })
    }

    /// Symbols are drawn proportional to `weights`, which are normalized
    /// to sum up to one.
    pub fn weighted(symbols: &[char], weights: &[f64]) -> Result<Self, AlphabetError> {
        check_symbols(symbols)?;
        if symbols.len() != weights.len() {
            return Err(AlphabetError::WeightCount {
                symbols: symbols.len(),
                weights: weights.len(),
            });
        }
        for (&c, &w) in symbols.iter().zip(weights) {
            if !w.is_finite() || w < 0. {
                return Err(AlphabetError::InvalidWeight(c, w));
            }
        }
        let total: f64 = weights.iter().sum();
        if total <= 0. {
            return Err(AlphabetError::ZeroWeights);
        }

        let normalized: Vec<f64> = weights.iter().map(|w| w / total).collect();
        let index = WeightedIndex::new(&normalized)
            .map_err(|e| AlphabetError::Weights(e.to_string()))?;
        debug!("Weighted alphabet {:?} with weights {:?}", symbols, normalized);

        Ok(Alphabet {
            symbols: symbols.to_vec(),
            weights: Some(normalized),
            index: Some(index),
        })
    }

    /// One of the built-in alphabets: `D` (DNA), `R` (RNA) or `P` (protein).
    pub fn from_code(code: char) -> Result<Self, AlphabetError> {
        let symbols = match code.to_ascii_uppercase() {
            'D' => DNA_ALPHABET,
            'R' => RNA_ALPHABET,
            'P' => PROTEIN_ALPHABET,
            _ => return Err(AlphabetError::UnknownCode(code)),
        };
        Alphabet::uniform(&symbols.chars().collect::<Vec<_>>())
    }

    pub fn dna() -> Self {
        Alphabet {
            symbols: DNA_ALPHABET.chars().collect(),
            weights: None,
            index: None,
        }
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Normalized weights, `None` for uniform sampling.
    pub fn weights(&self) -> Option<&[f64]> {
        self.weights.as_deref()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    /// Draw one symbol.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> char {
        match &self.index {
            Some(index) => self.symbols[index.sample(rng)],
            None => self.symbols[rng.random_range(0..self.symbols.len())],
        }
    }

    /// Append `n` independently drawn symbols to `buf`.
    pub fn extend<R: Rng>(&self, rng: &mut R, buf: &mut String, n: usize) {
        for _ in 0..n {
            buf.push(self.sample(rng));
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::dna()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.symbols {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_builtin_alphabets() {
        assert_eq!(Alphabet::from_code('D').unwrap().to_string(), "ACGT");
        assert_eq!(Alphabet::from_code('r').unwrap().to_string(), "ACGU");
        assert_eq!(Alphabet::from_code('P').unwrap().len(), 20);
        assert!(Alphabet::from_code('P').unwrap().weights().is_none());
        assert!(matches!(Alphabet::from_code('X'), Err(AlphabetError::UnknownCode('X'))));
    }

    #[test]
    fn test_default_is_dna() {
        assert_eq!(Alphabet::default().symbols(), &['A', 'C', 'G', 'T']);
    }

    #[test]
    fn test_rejects_bad_symbols() {
        assert!(matches!(Alphabet::uniform(&[]), Err(AlphabetError::Empty)));
        assert!(matches!(Alphabet::uniform(&['A', '{']), Err(AlphabetError::ReservedSymbol('{'))));
        assert!(matches!(Alphabet::uniform(&['A', ',']), Err(AlphabetError::ReservedSymbol(','))));
        assert!(matches!(Alphabet::uniform(&['A', ' ']), Err(AlphabetError::ReservedSymbol(' '))));
        assert!(matches!(Alphabet::uniform(&['A', 'C', 'A']), Err(AlphabetError::DuplicateSymbol('A'))));
    }

    #[test]
    fn test_rejects_bad_weights() {
        assert!(matches!(
            Alphabet::weighted(&['A', 'C'], &[1.0]),
            Err(AlphabetError::WeightCount { symbols: 2, weights: 1 })
        ));
        assert!(matches!(
            Alphabet::weighted(&['A', 'C'], &[1.0, -1.0]),
            Err(AlphabetError::InvalidWeight('C', _))
        ));
        assert!(matches!(
            Alphabet::weighted(&['A', 'C'], &[1.0, f64::NAN]),
            Err(AlphabetError::InvalidWeight('C', _))
        ));
        assert!(matches!(
            Alphabet::weighted(&['A', 'C'], &[0.0, 0.0]),
            Err(AlphabetError::ZeroWeights)
        ));
    }

    #[test]
    fn test_weights_are_normalized() {
        let alphabet = Alphabet::weighted(&['A', 'C', 'G'], &[2.0, 1.0, 1.0]).unwrap();
        let w = alphabet.weights().unwrap();
        assert!((w[0] - 0.5).abs() < 1e-12);
        assert!((w[1] - 0.25).abs() < 1e-12);
        assert!((w.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_weight_is_never_drawn() {
        let alphabet = Alphabet::weighted(&['A', 'C', 'G'], &[1.0, 0.0, 3.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = String::new();
        alphabet.extend(&mut rng, &mut seen, 2000);
        assert_eq!(seen.len(), 2000);
        assert!(!seen.contains('C'));
        let a = seen.chars().filter(|&c| c == 'A').count();
        let g = seen.chars().filter(|&c| c == 'G').count();
        assert!(g > 2 * a, "expected G to dominate: A={} G={}", a, g);
    }

    #[test]
    fn test_uniform_draws_every_symbol() {
        let alphabet = Alphabet::from_code('D').unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = String::new();
        alphabet.extend(&mut rng, &mut seen, 400);
        for c in alphabet.symbols() {
            assert!(seen.contains(*c));
        }
        assert!(seen.chars().all(|c| alphabet.contains(c)));
    }

    #[test]
    fn test_sampling_is_deterministic_under_seed() {
        let alphabet = Alphabet::from_code('P').unwrap();
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut s = String::new();
            alphabet.extend(&mut rng, &mut s, 64);
            s
        };
        assert_eq!(draw(3), draw(3));
        assert_ne!(draw(3), draw(4));
    }
}
