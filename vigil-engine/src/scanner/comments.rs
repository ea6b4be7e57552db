//! Block-comment span tracking.
//!
//! Text-heuristic only: `/* … */` pairs are found by token scanning, with
//! `//`-to-end-of-line stretches ignored so a commented-out opener does not
//! start a span. String literals are not tracked; an opener inside a string
//! is a known imprecision of the heuristic layer.

use std::ops::Range;

/// Byte ranges of block comments. An unterminated opener produces a span
/// reaching the end of the content, so everything after it is dropped.
pub fn comment_spans(content: &str) -> Vec<Range<usize>> {
    let bytes = content.as_bytes();
    let mut spans = Vec::new();
    let mut i = 0;
    let mut open: Option<usize> = None;

    while i + 1 < bytes.len() {
        match open {
            None => {
                if bytes[i] == b'/' && bytes[i + 1] == b'/' {
                    // Line comment: skip to end of line.
                    while i < bytes.len() && bytes[i] != b'\n' {
                        i += 1;
                    }
                } else if bytes[i] == b'/' && bytes[i + 1] == b'*' {
                    open = Some(i);
                    i += 2;
                } else {
                    i += 1;
                }
            }
            Some(start) => {
                if bytes[i] == b'*' && bytes[i + 1] == b'/' {
                    spans.push(start..i + 2);
                    open = None;
                    i += 2;
                } else {
                    i += 1;
                }
            }
        }
    }

    if let Some(start) = open {
        spans.push(start..content.len());
    }
    spans
}

/// Whether a byte offset falls inside any of the given spans.
pub fn in_span(spans: &[Range<usize>], offset: usize) -> bool {
    spans.iter().any(|span| span.contains(&offset))
}
