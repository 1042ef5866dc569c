use std::io::BufRead;
use log::debug;

use crate::Alphabet;
use crate::AlphabetError;

/// Read an alphabet from a frequency table.
///
/// Every non-empty line holds `<integer count> <symbol>`, separated by
/// spaces or tabs. Rows repeating a symbol add to its count. The weight
/// of a symbol is its count divided by the total count.
pub fn read_frequencies<R: BufRead>(reader: R) -> Result<Alphabet, AlphabetError> {
    let mut counts: Vec<(char, u64)> = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        let parse_error = |message: String| AlphabetError::Parse { line: i + 1, message };

        if fields.len() != 2 {
            return Err(parse_error(format!(
                "expected '<count> <symbol>', found {} columns", fields.len())));
        }
        let count: u64 = fields[0].parse()
            .map_err(|_| parse_error(format!("count '{}' is not a non-negative integer", fields[0])))?;

        let mut chars = fields[1].chars();
        let symbol = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(parse_error(format!("symbol '{}' is not a single character", fields[1]))),
        };

        match counts.iter_mut().find(|(c, _)| *c == symbol) {
            Some((_, n)) => *n += count,
            None => counts.push((symbol, count)),
        }
    }
    debug!("Read symbol counts {:?}", counts);

    let symbols: Vec<char> = counts.iter().map(|&(c, _)| c).collect();
    let weights: Vec<f64> = counts.iter().map(|&(_, n)| n as f64).collect();
    Alphabet::weighted(&symbols, &weights)
}
