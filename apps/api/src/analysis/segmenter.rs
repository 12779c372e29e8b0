//! Requirement Segmenter — splits a job description into candidate requirement lines.

/// Characters that start a new segment: line breaks and common bullet markers.
const SEGMENT_BREAKS: &[char] = &['\n', '*', '•', '-'];

/// Segments shorter than this (after trimming) are headings or noise.
const MIN_SEGMENT_CHARS: usize = 5;

/// Splits `text` into trimmed requirement lines, keeping document order.
///
/// Only segments longer than five characters survive. Empty or whitespace-only input
/// yields no segments, which callers treat as "no requirements".
pub fn segment_requirements(text: &str) -> Vec<String> {
    text.split(SEGMENT_BREAKS)
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SEGMENT_CHARS)
        .map(String::from)
        .collect()
}
