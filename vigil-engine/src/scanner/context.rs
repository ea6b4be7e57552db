//! Shared per-file scan context.
//!
//! Built once per event from the single file read, then shared immutably by
//! every scanner-based check so no check re-reads or re-derives file state.

use std::ops::Range;

use vigil_core::config::Thresholds;
use vigil_core::types::FileClassification;

use crate::classify::LayerDirs;

use super::comments;

pub struct ScanContext {
    pub path: String,
    pub content: String,
    pub classification: FileClassification,
    pub thresholds: Thresholds,
    pub dirs: LayerDirs,
    /// Byte range of each line, newline excluded.
    line_ranges: Vec<Range<usize>>,
    comment_spans: Vec<Range<usize>>,
}

impl ScanContext {
    pub fn new(
        path: impl Into<String>,
        content: String,
        classification: FileClassification,
        thresholds: Thresholds,
        dirs: LayerDirs,
    ) -> Self {
        let line_ranges = line_ranges(&content);
        let comment_spans = comments::comment_spans(&content);
        Self {
            path: path.into(),
            content,
            classification,
            thresholds,
            dirs,
            line_ranges,
            comment_spans,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_ranges.len()
    }

    /// Line text by 0-based index.
    pub fn line(&self, idx: usize) -> &str {
        let range = &self.line_ranges[idx];
        &self.content[range.clone()]
    }

    /// All lines, for suppression checks and whole-file passes.
    pub fn lines(&self) -> Vec<&str> {
        self.line_ranges
            .iter()
            .map(|r| &self.content[r.clone()])
            .collect()
    }

    /// 1-based line number of a byte offset, by counting line breaks up to
    /// the match offset.
    pub fn line_of_offset(&self, offset: usize) -> u32 {
        let idx = self
            .line_ranges
            .partition_point(|range| range.start <= offset);
        idx.max(1) as u32
    }

    /// Whether a byte offset falls inside a block comment (including an
    /// unterminated one).
    pub fn in_comment(&self, offset: usize) -> bool {
        comments::in_span(&self.comment_spans, offset)
    }

    /// Byte offset of the start of a 0-based line.
    pub fn line_offset(&self, idx: usize) -> usize {
        self.line_ranges[idx].start
    }

    /// Excerpt of `line ± window`, clamped to file bounds.
    pub fn excerpt(&self, line: u32, window: usize) -> String {
        if self.line_ranges.is_empty() || line == 0 {
            return String::new();
        }
        let idx = (line - 1) as usize;
        let start = idx.saturating_sub(window);
        let end = (idx + window + 1).min(self.line_ranges.len());
        (start..end)
            .map(|i| self.line(i))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn line_ranges(content: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;
    for (i, b) in content.bytes().enumerate() {
        if b == b'\n' {
            ranges.push(start..i);
            start = i + 1;
        }
    }
    if start < content.len() {
        ranges.push(start..content.len());
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use vigil_core::types::{FxHashSet, Layer};

    fn ctx(content: &str) -> ScanContext {
        let classification = FileClassification::new(
            "test.ts".to_string(),
            Layer::Unknown,
            FxHashSet::default(),
            Vec::new(),
        );
        ScanContext::new(
            "test.ts",
            content.to_string(),
            classification,
            Thresholds::default(),
            LayerDirs::from_config(&vigil_core::config::ClassifyConfig::default()),
        )
    }

    #[test]
    fn line_of_offset_counts_breaks() {
        let c = ctx("first\nsecond\nthird");
        assert_eq!(c.line_of_offset(0), 1);
        assert_eq!(c.line_of_offset(6), 2);
        assert_eq!(c.line_of_offset(13), 3);
        assert_eq!(c.line_count(), 3);
    }

    #[test]
    fn excerpt_clamps_to_file_bounds() {
        let c = ctx("a\nb\nc\nd");
        assert_eq!(c.excerpt(1, 1), "a\nb");
        assert_eq!(c.excerpt(4, 2), "b\nc\nd");
        assert_eq!(c.excerpt(2, 0), "b");
    }

    #[test]
    fn trailing_newline_yields_no_phantom_line() {
        let c = ctx("a\nb\n");
        assert_eq!(c.line_count(), 2);
        assert_eq!(c.line(1), "b");
    }
}
