//! Response parsing for completions and judge rankings.
//!
//! Pure text processing — no I/O, no session state. Two extractors:
//!
//! | Function | Input | Output |
//! |----------|-------|--------|
//! | [`extract_completion`] | raw model response | text inside `<completion>` tags, or trimmed fallback |
//! | [`parse_ranking`] | raw judge response | permutation of 1..=n from a `<ranking>` block |
//!
//! The ranking grammar is strict: one `ordinal. choice` pair per line
//! inside the delimited block, values forming a permutation of their
//! own length. Any deviation is a parse failure, never a partial list.

use thiserror::Error;

const COMPLETION_OPEN: &str = "<completion>";
const COMPLETION_CLOSE: &str = "</completion>";
const RANKING_OPEN: &str = "<ranking>";
const RANKING_CLOSE: &str = "</ranking>";

/// A completion pulled out of a raw model response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedCompletion {
    /// The usable completion text, trimmed
    pub text: String,
    /// Whether the expected `<completion>` delimiter was present
    pub delimited: bool,
}

/// Extract the text wrapped in `<completion></completion>` tags.
///
/// Falls back to the trimmed raw response when the delimiter is
/// missing; the caller decides whether that is worth a warning
/// (it is for continuation calls, not for originals or rankings).
pub fn extract_completion(raw: &str) -> ExtractedCompletion {
    if let Some(start) = raw.find(COMPLETION_OPEN) {
        let after = &raw[start + COMPLETION_OPEN.len()..];
        if let Some(end) = after.find(COMPLETION_CLOSE) {
            return ExtractedCompletion {
                text: after[..end].trim().to_string(),
                delimited: true,
            };
        }
    }
    ExtractedCompletion {
        text: raw.trim().to_string(),
        delimited: false,
    }
}

/// Why a judge response could not be parsed into a ranking
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankingParseError {
    #[error("No <ranking> block found in response")]
    MissingBlock,

    #[error("Ranking block is empty")]
    Empty,

    #[error("Malformed ranking line: {0:?}")]
    MalformedLine(String),

    #[error("Ranking values are not a permutation of 1..={0}")]
    NotAPermutation(usize),
}

/// Parse a judge response into an ordered list of choice numbers.
///
/// The expected format is a `<ranking>` block of numbered lines:
///
/// ```text
/// <ranking>
/// 1. 3
/// 2. 1
/// 3. 2
/// </ranking>
/// ```
///
/// Each line is `ordinal. choice`; the integer after the first `.`
/// is the choice. The parsed values must form a permutation of
/// `1..=len`, rejecting duplicates and out-of-range entries outright.
pub fn parse_ranking(response: &str) -> Result<Vec<usize>, RankingParseError> {
    let start = response
        .find(RANKING_OPEN)
        .ok_or(RankingParseError::MissingBlock)?;
    let after = &response[start + RANKING_OPEN.len()..];
    let end = after
        .find(RANKING_CLOSE)
        .ok_or(RankingParseError::MissingBlock)?;
    let block = after[..end].trim();

    let mut ranking = Vec::new();
    for line in block.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (_, choice) = line
            .split_once('.')
            .ok_or_else(|| RankingParseError::MalformedLine(line.to_string()))?;
        let value: usize = choice
            .trim()
            .parse()
            .map_err(|_| RankingParseError::MalformedLine(line.to_string()))?;
        ranking.push(value);
    }

    if ranking.is_empty() {
        return Err(RankingParseError::Empty);
    }

    let mut sorted = ranking.clone();
    sorted.sort_unstable();
    if sorted.iter().enumerate().any(|(i, &v)| v != i + 1) {
        return Err(RankingParseError::NotAPermutation(ranking.len()));
    }

    Ok(ranking)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== extract_completion Tests ====================

    #[test]
    fn test_extract_delimited() {
        let raw = "Sure, here it is:\n<completion>\n  the story text  \n</completion>\nDone.";
        let got = extract_completion(raw);
        assert!(got.delimited);
        assert_eq!(got.text, "the story text");
    }

    #[test]
    fn test_extract_missing_delimiter_falls_back() {
        let got = extract_completion("  just plain text  ");
        assert!(!got.delimited);
        assert_eq!(got.text, "just plain text");
    }

    #[test]
    fn test_extract_unclosed_tag_falls_back() {
        let got = extract_completion("<completion> never closed");
        assert!(!got.delimited);
        assert_eq!(got.text, "<completion> never closed");
    }

    #[test]
    fn test_extract_empty_input() {
        let got = extract_completion("");
        assert!(!got.delimited);
        assert_eq!(got.text, "");
    }

    // ==================== parse_ranking Tests ====================

    #[test]
    fn test_parse_ranking_basic() {
        let response = "My reasoning...\n<ranking>\n1. 3\n2. 1\n3. 2\n</ranking>";
        assert_eq!(parse_ranking(response).unwrap(), vec![3, 1, 2]);
    }

    #[test]
    fn test_parse_ranking_blank_lines_and_whitespace() {
        let response = "<ranking>\n\n  1.  2 \n\n  2. 1  \n</ranking>";
        assert_eq!(parse_ranking(response).unwrap(), vec![2, 1]);
    }

    #[test]
    fn test_parse_ranking_missing_block() {
        assert_eq!(
            parse_ranking("no block here"),
            Err(RankingParseError::MissingBlock)
        );
        assert_eq!(
            parse_ranking("<ranking>1. 1"),
            Err(RankingParseError::MissingBlock)
        );
    }

    #[test]
    fn test_parse_ranking_empty_block() {
        assert_eq!(
            parse_ranking("<ranking>\n\n</ranking>"),
            Err(RankingParseError::Empty)
        );
    }

    #[test]
    fn test_parse_ranking_malformed_line() {
        let response = "<ranking>\n1. 2\nnot a line\n</ranking>";
        assert!(matches!(
            parse_ranking(response),
            Err(RankingParseError::MalformedLine(_))
        ));
    }

    #[test]
    fn test_parse_ranking_rejects_duplicates() {
        let response = "<ranking>\n1. 2\n2. 2\n</ranking>";
        assert_eq!(
            parse_ranking(response),
            Err(RankingParseError::NotAPermutation(2))
        );
    }

    #[test]
    fn test_parse_ranking_rejects_out_of_range() {
        let response = "<ranking>\n1. 1\n2. 5\n</ranking>";
        assert_eq!(
            parse_ranking(response),
            Err(RankingParseError::NotAPermutation(2))
        );
    }

    #[test]
    fn test_parse_ranking_never_partial() {
        // First lines are fine, a later one is not: whole parse fails
        let response = "<ranking>\n1. 1\n2. 2\n3. oops\n</ranking>";
        assert!(parse_ranking(response).is_err());
    }
}
