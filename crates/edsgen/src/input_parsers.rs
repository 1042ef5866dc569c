use std::fs::File;
use std::io::{stdin, BufReader, Cursor};
use std::path::Path;

use paste::paste;
use eds_alphabet::Alphabet;
use eds_alphabet::AlphabetError;
use eds_alphabet::read_frequencies;

/// Wrap a reader-based parser `fn base<R: BufRead>(R) -> Result<T, E>`
/// (with `E: From<std::io::Error>`) into `base_string`, `base_file`,
/// `base_stdin` and `base_input`, where the latter reads stdin for "-".
macro_rules! define_input_variants {
    ($base:ident, $ret:ty) => {
        paste! {
            pub fn [<$base _string>](s: &str) -> $ret {
                $base(Cursor::new(s))
            }

            pub fn [<$base _file>]<P: AsRef<Path>>(path: P) -> $ret {
                let reader = BufReader::new(File::open(path)?);
                $base(reader)
            }

            pub fn [<$base _stdin>]() -> $ret {
                $base(BufReader::new(stdin()))
            }

            /// A path, or "-" for stdin.
            pub fn [<$base _input>](s: &str) -> $ret {
                match s {
                    "-" => [<$base _stdin>](),
                    path => [<$base _file>](path),
                }
            }
        }
    };
}

type AlphabetResult = Result<Alphabet, AlphabetError>;

define_input_variants!(read_frequencies, AlphabetResult);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_frequencies_string() {
        let alphabet = read_frequencies_string("1 A\n3 C\n").unwrap();
        assert_eq!(alphabet.to_string(), "AC");
        assert_eq!(alphabet.weights().unwrap(), &[0.25, 0.75]);
    }

    #[test]
    fn test_read_frequencies_file() {
        let path = std::env::temp_dir().join(format!("edsgen_freq_{}.freq", std::process::id()));
        std::fs::write(&path, "10 L\n5 K\n5 W\n").unwrap();
        let alphabet = read_frequencies_input(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(alphabet.symbols(), &['L', 'K', 'W']);
    }

    #[test]
    fn test_read_frequencies_missing_file() {
        let err = read_frequencies_file("/nonexistent/edsgen/protein.freq").unwrap_err();
        assert!(matches!(err, AlphabetError::Io(_)));
    }
}
