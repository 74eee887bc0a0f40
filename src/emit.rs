use std::io::{self, Write};

use crate::sieve::PrimeTable;

/// Writes a sequence as one decimal integer per line. No headers, no
/// separators, so the default run stays byte-compatible with piping
/// into other tools.
pub fn write_sequence<W: Write>(out: &mut W, seq: impl Iterator<Item = usize>) -> io::Result<()> {
    for n in seq {
        writeln!(out, "{}", n)?;
    }
    Ok(())
}

/// The full report: the preview block of small primes, immediately
/// followed by the Blum candidate block.
pub fn write_report<W: Write>(out: &mut W, table: &PrimeTable, preview: usize) -> io::Result<()> {
    write_sequence(out, table.primes_below(preview))?;
    write_sequence(out, table.blum_candidates())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sieve::{DEFAULT_LIMIT, DEFAULT_PREVIEW};
    use pretty_assertions::assert_eq;

    fn render(table: &PrimeTable, preview: usize) -> Vec<u8> {
        let mut out = Vec::new();
        write_report(&mut out, table, preview).unwrap();
        out
    }

    fn parse_lines(bytes: &[u8]) -> Vec<usize> {
        std::str::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|l| l.parse().unwrap())
            .collect()
    }

    #[test]
    fn sequence_format() {
        let mut out = Vec::new();
        write_sequence(&mut out, [2, 3, 5].into_iter()).unwrap();
        assert_eq!(out, b"2\n3\n5\n");
    }

    #[test]
    fn empty_sequence_writes_nothing() {
        let mut out = Vec::new();
        write_sequence(&mut out, std::iter::empty()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn report_is_both_blocks_in_order() {
        let table = PrimeTable::build(DEFAULT_LIMIT);
        let lines = parse_lines(&render(&table, DEFAULT_PREVIEW));

        let preview_len = table.primes_below(DEFAULT_PREVIEW).count();
        assert_eq!(preview_len, 25);

        let expected: Vec<usize> = table
            .primes_below(DEFAULT_PREVIEW)
            .chain(table.blum_candidates())
            .collect();
        assert_eq!(lines, expected);

        // every reported value is in range
        assert!(lines.iter().all(|&n| n >= 2 && n < DEFAULT_LIMIT));
    }

    #[test]
    fn report_is_deterministic() {
        let table = PrimeTable::build(DEFAULT_LIMIT);
        let first = render(&table, DEFAULT_PREVIEW);
        let second = render(&table, DEFAULT_PREVIEW);
        assert_eq!(first, second);
    }

    #[test]
    fn preview_values_cross_check_candidates() {
        let table = PrimeTable::build(DEFAULT_LIMIT);
        let candidates: Vec<_> = table.blum_candidates().collect();

        for p in table.primes_below(DEFAULT_PREVIEW) {
            assert_eq!(candidates.contains(&p), p % 4 == 3, "p = {}", p);
        }
    }
}
