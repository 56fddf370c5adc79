use anneal_core::PrimerPair;
use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Raw sequences recovered from a saved primer report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimerReport {
    pub forward: String,
    pub reverse: String,
}

/// Serialize a primer pair to the labeled two-sequence report layout.
pub fn serialize(pair: &PrimerPair) -> String {
    format!(
        "Forward:\n{}\nReverse:\n{}\n",
        pair.forward.sequence, pair.reverse.sequence
    )
}

/// Parse a report back into its two raw sequences.
///
/// Each label must be followed by the sequence on its own line. Sequences
/// are trimmed and uppercased; nothing else is checked.
pub fn parse(input: &str) -> Result<PrimerReport, ParseError> {
    let mut lines = input.lines().map(str::trim).filter(|l| !l.is_empty());

    let forward = section(&mut lines, "Forward:")?;
    let reverse = section(&mut lines, "Reverse:")?;

    Ok(PrimerReport { forward, reverse })
}

fn section<'a, I>(lines: &mut I, label: &str) -> Result<String, ParseError>
where
    I: Iterator<Item = &'a str>,
{
    match lines.next() {
        Some(line) if line == label => {}
        Some(line) => {
            return Err(ParseError::InvalidFormat(format!(
                "Expected \"{}\", found \"{}\"",
                label, line
            )))
        }
        None => {
            return Err(ParseError::InvalidFormat(format!(
                "Missing \"{}\" section",
                label
            )))
        }
    }

    lines
        .next()
        .map(str::to_uppercase)
        .ok_or(ParseError::UnexpectedEnd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anneal_core::{assemble_pair, PrimerRequest};

    #[test]
    fn test_serialize_layout() {
        let pair = assemble_pair(
            &PrimerRequest::new("ATGAAA", "NdeI"),
            &PrimerRequest::new("TTACTT", "XhoI"),
        )
        .unwrap();
        assert_eq!(
            serialize(&pair),
            "Forward:\nTGCATCCATATGAAA\nReverse:\nTGCATCCTCGAGTTACTT\n"
        );
    }

    #[test]
    fn test_parse_basic() {
        let report = parse("Forward:\nTGCATCAAGCTTACGT\nReverse:\nTGCATCGGTACCTTTT\n").unwrap();
        assert_eq!(report.forward, "TGCATCAAGCTTACGT");
        assert_eq!(report.reverse, "TGCATCGGTACCTTTT");
    }

    #[test]
    fn test_parse_normalizes_sequences() {
        let report = parse("Forward:\n  tgcatcacgt \nReverse:\ntgca\n").unwrap();
        assert_eq!(report.forward, "TGCATCACGT");
        assert_eq!(report.reverse, "TGCA");
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let report = parse("\nForward:\n\nACGT\n\nReverse:\n\nTTTT\n").unwrap();
        assert_eq!(report.forward, "ACGT");
        assert_eq!(report.reverse, "TTTT");
    }

    #[test]
    fn test_parse_rejects_missing_label() {
        assert!(matches!(
            parse("ACGT\nTTTT\n"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse("Forward:\nACGT\n"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(parse(""), Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_rejects_truncated_input() {
        assert!(matches!(parse("Forward:\n"), Err(ParseError::UnexpectedEnd)));
        assert!(matches!(
            parse("Forward:\nACGT\nReverse:\n"),
            Err(ParseError::UnexpectedEnd)
        ));
    }
}
