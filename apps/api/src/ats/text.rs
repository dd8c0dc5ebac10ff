//! Text heuristics shared by the section scorers. Pure functions, no I/O.

use once_cell::sync::Lazy;
use regex::Regex;

/// Sentence boundaries: one or more terminal punctuation marks.
static SENTENCE_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Bullet delimiters inside an experience description. The `- ` form only
/// delimits when followed by a word character; that check happens after the
/// match since this engine has no lookahead.
static BULLET_DELIMITER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n|•|\*|■|- ").unwrap());

/// Percentage-change evidence: "% increase", "% decrease", "% improvement",
/// or a bare "40%".
static PERCENT_EVIDENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)%\s*increase|%\s*decrease|%\s*improvement|\d+%").unwrap());

/// Money evidence: currency symbols/codes or shorthand magnitudes (10k, 2M).
static MONEY_EVIDENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$|USD|EUR|GBP|\d+[kKmMbB]").unwrap());

/// Number of whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// First whitespace-separated word, lowercased.
pub fn first_word_lower(text: &str) -> Option<String> {
    text.split_whitespace().next().map(|w| w.to_lowercase())
}

/// Splits text into sentences on runs of `.`/`!`/`?`, discarding empties.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_SPLIT
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Segments an experience description into bullet points.
///
/// Delimiters: newline, `•`, `*`, `■`, and `- ` when the dash is followed by
/// a word character (so "state-of-the-art" and trailing dashes survive).
/// Segments are trimmed and empties discarded.
pub fn split_bullets(description: &str) -> Vec<String> {
    let mut bullets = Vec::new();
    let mut start = 0;

    for m in BULLET_DELIMITER.find_iter(description) {
        if m.as_str() == "- " {
            let next = description[m.end()..].chars().next();
            let followed_by_word = matches!(next, Some(c) if c.is_ascii_alphanumeric() || c == '_');
            if !followed_by_word {
                continue;
            }
        }
        bullets.push(&description[start..m.start()]);
        start = m.end();
    }
    bullets.push(&description[start..]);

    bullets
        .into_iter()
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn contains_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

pub fn has_percentage_evidence(text: &str) -> bool {
    PERCENT_EVIDENCE.is_match(text)
}

pub fn has_money_evidence(text: &str) -> bool {
    MONEY_EVIDENCE.is_match(text)
}

/// Order-preserving dedup by exact string equality, truncated to `cap`.
pub fn dedup_capped(items: Vec<String>, cap: usize) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen.truncate(cap);
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_collapses_whitespace_runs() {
        assert_eq!(word_count("led  a   team\nof five"), 5);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_split_sentences_discards_empty_segments() {
        let sentences = split_sentences("First. Second!  Third?");
        assert_eq!(sentences, vec!["First", "Second", "Third"]);
        assert!(split_sentences("...").is_empty());
    }

    #[test]
    fn test_split_bullets_on_newline_and_glyphs() {
        let bullets = split_bullets("Led team\n• Shipped product * Cut costs ■ Hired five");
        assert_eq!(
            bullets,
            vec!["Led team", "Shipped product", "Cut costs", "Hired five"]
        );
    }

    #[test]
    fn test_split_bullets_dash_requires_following_word() {
        let bullets = split_bullets("- Improved uptime - Reduced spend");
        assert_eq!(bullets, vec!["Improved uptime", "Reduced spend"]);
        // A dash not followed by a word character is content, not a delimiter.
        let kept = split_bullets("Managed rollout - ");
        assert_eq!(kept, vec!["Managed rollout -"]);
    }

    #[test]
    fn test_split_bullets_empty_description() {
        assert!(split_bullets("").is_empty());
        assert!(split_bullets("   \n  ").is_empty());
    }

    #[test]
    fn test_percent_evidence_variants() {
        assert!(has_percentage_evidence("grew revenue 40%"));
        assert!(has_percentage_evidence("20 % increase in signups"));
        assert!(!has_percentage_evidence("substantial growth"));
    }

    #[test]
    fn test_money_evidence_variants() {
        assert!(has_money_evidence("saved $2M annually"));
        assert!(has_money_evidence("budget of 500k"));
        assert!(has_money_evidence("priced in EUR"));
        assert!(!has_money_evidence("large budget"));
    }

    #[test]
    fn test_dedup_capped_preserves_first_occurrence_order() {
        let items = vec![
            "a".to_string(),
            "b".to_string(),
            "a".to_string(),
            "c".to_string(),
        ];
        assert_eq!(dedup_capped(items, 2), vec!["a", "b"]);
    }
}
