//! Keyword-dense snippet extraction

const ELLIPSIS: &str = "...";

/// A unit shorter than this (trimmed) does not close at a terminator;
/// prevents degenerate one-character "sentences"
const MIN_UNIT_CHARS: usize = 10;

const SENTENCE_TERMINATORS: [char; 4] = ['.', '!', '?', '\n'];

/// Extract a bounded excerpt maximizing distinct-keyword density
///
/// The text is split into sentence-like units; each unit is scored by how
/// many distinct keywords it contains (case-insensitive substring match),
/// and units are concatenated in descending match order while the snippet
/// stays within `max_length`. When nothing matches, the head of the raw
/// text is returned instead.
pub fn extract_snippet(text: &str, keywords: &[String], max_length: usize) -> String {
    let units = split_sentence_units(text);

    let mut scored: Vec<(usize, &str)> = units
        .into_iter()
        .filter_map(|unit| {
            let lower = unit.to_lowercase();
            let matched = keywords.iter().filter(|k| lower.contains(k.as_str())).count();
            (matched > 0).then_some((matched, unit))
        })
        .collect();

    if scored.is_empty() {
        return truncate_with_ellipsis(text.trim(), max_length);
    }

    // stable sort: ties keep document order
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    let mut snippet = String::new();
    for &(_, unit) in &scored {
        let needed = if snippet.is_empty() { unit.len() } else { unit.len() + 1 };
        if snippet.len() + needed > max_length {
            break;
        }
        if !snippet.is_empty() {
            snippet.push(' ');
        }
        snippet.push_str(unit);
    }

    if snippet.is_empty() {
        // densest unit alone exceeds the budget
        return truncate_with_ellipsis(scored[0].1, max_length);
    }
    snippet
}

/// Split text into sentence-like units
///
/// A unit closes when a terminating character is seen and the accumulated
/// unit, trimmed, exceeds `MIN_UNIT_CHARS`; short fragments keep
/// accumulating into the next unit. Trailing text without a terminator
/// forms a final unit.
fn split_sentence_units(text: &str) -> Vec<&str> {
    let mut units = Vec::new();
    let mut unit_start = 0usize;

    for (i, c) in text.char_indices() {
        if SENTENCE_TERMINATORS.contains(&c) {
            let end = i + c.len_utf8();
            let unit = text[unit_start..end].trim();
            if unit.chars().count() > MIN_UNIT_CHARS {
                units.push(unit);
                unit_start = end;
            }
        }
    }

    let tail = text[unit_start..].trim();
    if !tail.is_empty() {
        units.push(tail);
    }
    units
}

/// Truncate to at most `max_len` bytes (at a character boundary) plus an
/// ellipsis marker when truncation occurred
pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if text.len() <= max_len {
        return text.to_string();
    }
    let mut end = max_len;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}{}", &text[..end], ELLIPSIS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retrieval::scorer::query_keywords;

    #[test]
    fn test_single_matching_sentence_returned_whole() {
        let text = "Fire safety requires evacuation drills every month.";
        let keywords = query_keywords("evacuation drills");
        let snippet = extract_snippet(text, &keywords, 500);
        assert_eq!(snippet, text);
    }

    #[test]
    fn test_densest_sentence_comes_first() {
        let text = "The cafeteria menu changes weekly.\n\
                    Evacuation drills are mandatory.\n\
                    Evacuation routes and drills are posted on every floor.\n";
        let keywords = query_keywords("evacuation drills");
        let snippet = extract_snippet(text, &keywords, 500);
        assert!(snippet.starts_with("Evacuation drills are mandatory."));
        assert!(snippet.contains("posted on every floor"));
        assert!(!snippet.contains("cafeteria"));
    }

    #[test]
    fn test_budget_stops_accumulation() {
        let text = "Evacuation drills happen monthly and are logged. \
                    Evacuation procedures cover drills for every building wing.";
        let keywords = query_keywords("evacuation drills");
        let snippet = extract_snippet(text, &keywords, 60);
        assert!(snippet.len() <= 63);
    }

    #[test]
    fn test_no_match_falls_back_to_head_of_text() {
        let text = "Quarterly budget figures and revenue projections for the year.";
        let keywords = query_keywords("evacuation");
        let snippet = extract_snippet(text, &keywords, 20);
        assert!(snippet.starts_with("Quarterly budget"));
        assert!(snippet.ends_with("..."));
        assert!(snippet.len() <= 23);
    }

    #[test]
    fn test_no_match_short_text_not_truncated() {
        let text = "Short note.";
        let keywords = query_keywords("evacuation");
        assert_eq!(extract_snippet(text, &keywords, 500), "Short note.");
    }

    #[test]
    fn test_short_fragments_merge_into_next_unit() {
        // "No." alone is under the minimum unit length, so it rides along
        // with the following sentence
        let units = split_sentence_units("No. Evacuation drills are monthly.");
        assert_eq!(units, vec!["No. Evacuation drills are monthly."]);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "café résumé naïve crème brûlée and more text";
        let truncated = truncate_with_ellipsis(text, 10);
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= 13);
    }
}
