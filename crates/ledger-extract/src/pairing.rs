//! Pair assembler.
//!
//! Tokens are paired strictly by position: every even-indexed token opens a
//! pair and the following odd-indexed token closes it. A trailing token
//! without a partner is dropped. Pairing never looks at token kinds; a pair
//! that is not (identifier, average) is still emitted and counted as
//! misaligned.

use serde::Serialize;
use std::fmt;

use crate::scanner::{Token, TokenKind};

/// Two adjacent tokens from the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricPair<'t> {
    /// Even-indexed token; an identifier in well-formed input.
    pub identifier: Token<'t>,
    /// Odd-indexed token; an average in well-formed input.
    pub average: Token<'t>,
}

impl<'t> MetricPair<'t> {
    /// True if the pair is an identifier followed by an average.
    pub fn is_aligned(&self) -> bool {
        self.identifier.kind == TokenKind::Identifier && self.average.kind == TokenKind::Average
    }

    /// Numeric literal of the average, if the pair is aligned.
    pub fn value(&self) -> Option<&'t str> {
        if self.is_aligned() {
            self.average.value()
        } else {
            None
        }
    }
}

/// Renders the ledger form `bz2.test1 average: 1.234`.
impl fmt::Display for MetricPair<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier.text)?;
        f.write_str(self.average.text)
    }
}

/// Counters for one assembly pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PairStats {
    /// Completed pairs.
    pub pairs: usize,
    /// Completed pairs whose kinds were not (identifier, average).
    pub misaligned: usize,
    /// Whether a final unpaired token was discarded.
    pub dropped_trailing: bool,
}

/// Iterator adaptor turning a token stream into [`MetricPair`]s.
pub struct PairAssembler<'t, I> {
    tokens: I,
    pending: Option<Token<'t>>,
    stats: PairStats,
}

impl<'t, I> PairAssembler<'t, I>
where
    I: Iterator<Item = Token<'t>>,
{
    pub fn new(tokens: I) -> Self {
        Self {
            tokens,
            pending: None,
            stats: PairStats::default(),
        }
    }

    /// Counters so far. Final once the iterator has returned `None`.
    pub fn stats(&self) -> PairStats {
        self.stats
    }
}

impl<'t, I> Iterator for PairAssembler<'t, I>
where
    I: Iterator<Item = Token<'t>>,
{
    type Item = MetricPair<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(token) = self.tokens.next() else {
                if self.pending.take().is_some() {
                    self.stats.dropped_trailing = true;
                }
                return None;
            };

            match self.pending.take() {
                None => self.pending = Some(token),
                Some(identifier) => {
                    let pair = MetricPair {
                        identifier,
                        average: token,
                    };
                    self.stats.pairs += 1;
                    if !pair.is_aligned() {
                        self.stats.misaligned += 1;
                    }
                    return Some(pair);
                }
            }
        }
    }
}

/// Render pairs one per line, each line terminated by `\n`.
pub fn render_ledger<'t>(pairs: impl IntoIterator<Item = MetricPair<'t>>) -> String {
    let mut out = String::new();
    for pair in pairs {
        out.push_str(pair.identifier.text);
        out.push_str(pair.average.text);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{IdentifierWidth, TokenScanner};

    fn assemble(text: &str) -> (Vec<String>, PairStats) {
        let scanner = TokenScanner::new(IdentifierWidth::WIDE).unwrap();
        let mut assembler = PairAssembler::new(scanner.scan(text));
        let pairs = assembler.by_ref().map(|p| p.to_string()).collect();
        (pairs, assembler.stats())
    }

    #[test]
    fn test_single_pair() {
        let (pairs, stats) = assemble("bz2.test1 average: 1.234");

        assert_eq!(pairs, vec!["bz2.test1 average: 1.234"]);
        assert_eq!(stats.pairs, 1);
        assert_eq!(stats.misaligned, 0);
        assert!(!stats.dropped_trailing);
    }

    #[test]
    fn test_lone_identifier_is_dropped() {
        let (pairs, stats) = assemble("bz2.test1");

        assert!(pairs.is_empty());
        assert_eq!(stats.pairs, 0);
        assert!(stats.dropped_trailing);
    }

    #[test]
    fn test_trailing_identifier_is_dropped() {
        let (pairs, stats) = assemble("gz.test1 average: 0.250 gz.test2 build interrupted");

        assert_eq!(pairs, vec!["gz.test1 average: 0.250"]);
        assert!(stats.dropped_trailing);
    }

    #[test]
    fn test_pairing_is_positional() {
        // Two identifiers in a row shift every later pair; nothing is repaired.
        let (pairs, stats) = assemble("xz.test1 xz.test2 average: 1.500 xz.test3 average: 2.500");

        assert_eq!(pairs, vec!["xz.test1xz.test2", " average: 1.500xz.test3"]);
        assert_eq!(stats.misaligned, 2);
        assert!(stats.dropped_trailing);
    }

    #[test]
    fn test_pair_value_only_when_aligned() {
        let scanner = TokenScanner::new(IdentifierWidth::WIDE).unwrap();
        let pairs: Vec<MetricPair> =
            PairAssembler::new(scanner.scan("xz.test1 average: 9.000 xz.test2 xz.test3")).collect();

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].value(), Some("9.000"));
        assert!(!pairs[1].is_aligned());
        assert_eq!(pairs[1].value(), None);
    }

    #[test]
    fn test_render_ledger_one_line_per_pair() {
        let scanner = TokenScanner::new(IdentifierWidth::WIDE).unwrap();
        let text = "noise bz2.test1 average: 1.234 more noise\nbz2.test2 average: 2.345 bz2.test3";
        let ledger = render_ledger(PairAssembler::new(scanner.scan(text)));

        assert_eq!(ledger, "bz2.test1 average: 1.234\nbz2.test2 average: 2.345\n");
    }

    #[test]
    fn test_render_ledger_empty_input() {
        let scanner = TokenScanner::new(IdentifierWidth::COMPACT).unwrap();
        assert_eq!(render_ledger(PairAssembler::new(scanner.scan("nothing here"))), "");
    }
}
