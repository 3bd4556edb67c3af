//! Keyword normalization and term-frequency relevance scoring

/// Minimum keyword length; shorter tokens are noise words
const MIN_KEYWORD_CHARS: usize = 2;

/// Normalize a query into its keyword set
///
/// Lower-cased whitespace tokens longer than two characters, de-duplicated
/// with first-seen order preserved. An empty result means the query is
/// degenerate and matches nothing.
pub fn query_keywords(query: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for token in query.to_lowercase().split_whitespace() {
        if token.chars().count() > MIN_KEYWORD_CHARS && !keywords.iter().any(|k| k == token) {
            keywords.push(token.to_string());
        }
    }
    keywords
}

/// Score a document against a keyword set
///
/// The score is the sum over keywords of literal substring occurrence counts
/// in the lower-cased text. Matching is containment, not token-boundary
/// aware: "cat" matches inside "category". A zero score means the document
/// is not retrieved at all.
pub fn score_document(text: &str, keywords: &[String]) -> usize {
    if keywords.is_empty() {
        return 0;
    }
    let text = text.to_lowercase();
    keywords.iter().map(|k| text.matches(k.as_str()).count()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_normalized() {
        let keywords = query_keywords("Evacuation DRILLS at the site");
        assert_eq!(keywords, vec!["evacuation", "drills", "the", "site"]);
    }

    #[test]
    fn test_short_tokens_dropped() {
        assert!(query_keywords("a an to of").is_empty());
    }

    #[test]
    fn test_duplicate_keywords_counted_once() {
        let keywords = query_keywords("fire fire FIRE");
        assert_eq!(keywords, vec!["fire"]);
    }

    #[test]
    fn test_score_sums_occurrence_counts() {
        let text = "Fire safety requires evacuation drills every month.";
        let keywords = query_keywords("evacuation drills");
        assert_eq!(score_document(text, &keywords), 2);
    }

    #[test]
    fn test_score_counts_repeated_occurrences() {
        let text = "drill practice: drill once, then drill again";
        let keywords = query_keywords("drill");
        assert_eq!(score_document(text, &keywords), 3);
    }

    #[test]
    fn test_adding_keyword_increases_score_by_its_count() {
        let text = "safety first, safety always, with monthly drills";
        let base = score_document(text, &query_keywords("drills"));
        let more = score_document(text, &query_keywords("drills safety"));
        assert_eq!(more, base + 2);
    }

    #[test]
    fn test_substring_containment_matches_inside_words() {
        // containment scoring is deliberate: "cat" matches inside "category"
        let text = "the category of felines";
        let keywords = query_keywords("cat");
        assert_eq!(score_document(text, &keywords), 1);
    }

    #[test]
    fn test_empty_keywords_score_zero() {
        assert_eq!(score_document("any text at all", &[]), 0);
    }
}
