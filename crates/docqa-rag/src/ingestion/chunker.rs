//! Deterministic text chunking with sentence-aware boundaries

/// How far back from a forced cut to look for a sentence end
const SENTENCE_SCAN_WINDOW: usize = 200;

const SENTENCE_TERMINATORS: [char; 4] = ['.', '!', '?', '\n'];

/// Split text into overlapping segments of up to `chunk_size` characters
///
/// Pure function of its inputs. When a segment would end mid-document, the
/// cut is moved back to the nearest sentence-terminating character within
/// `chunk_size - SENTENCE_SCAN_WINDOW` characters, so chunks avoid splitting
/// mid-sentence. Consecutive chunks overlap by `overlap` characters; overlap
/// is clamped below `chunk_size` so every iteration makes strict forward
/// progress.
pub fn chunk_text(text: &str, chunk_size: usize, overlap: usize) -> Vec<String> {
    if text.is_empty() || chunk_size == 0 {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let overlap = overlap.min(chunk_size.saturating_sub(1));

    let mut chunks = Vec::new();
    let mut start = 0usize;

    while start < len {
        let mut end = start + chunk_size;
        let reached_end = end >= len;

        if reached_end {
            end = len;
        } else {
            let floor = (start + chunk_size.saturating_sub(SENTENCE_SCAN_WINDOW)).max(start);
            for i in (floor..end).rev() {
                if SENTENCE_TERMINATORS.contains(&chars[i]) {
                    end = i + 1;
                    break;
                }
            }
        }

        let segment: String = chars[start..end].iter().collect();
        let segment = segment.trim();
        if !segment.is_empty() {
            chunks.push(segment.to_string());
        }

        if reached_end {
            break;
        }
        start = end.saturating_sub(overlap).max(start + 1);
    }

    chunks
}
