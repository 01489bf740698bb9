//! Query highlighting inside suggestion labels
//!
//! Every case-insensitive occurrence of the query is reported as a matched
//! segment. The query is escaped before it is compiled, so characters such
//! as `(`, `+` or `\` match literally.

use regex::{Regex, RegexBuilder};

/// A run of label text, either matching the query or not
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

impl<'a> Segment<'a> {
    fn plain(text: &'a str) -> Self {
        Self {
            text,
            matched: false,
        }
    }
}

/// Compiled matcher for one query, reused across all rows of a render
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    pub fn new(query: &str) -> Self {
        if query.is_empty() {
            return Self { pattern: None };
        }

        let pattern = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
            .map_err(|e| log::debug!("Highlight disabled for {:?}: {}", query, e))
            .ok();

        Self { pattern }
    }

    /// Split `label` into matched and unmatched runs
    ///
    /// Concatenating the segment texts always yields `label` again.
    pub fn segments<'a>(&self, label: &'a str) -> Vec<Segment<'a>> {
        let Some(pattern) = &self.pattern else {
            return vec![Segment::plain(label)];
        };

        let mut segments = Vec::new();
        let mut last_end = 0;

        for found in pattern.find_iter(label) {
            if found.start() > last_end {
                segments.push(Segment::plain(&label[last_end..found.start()]));
            }
            segments.push(Segment {
                text: found.as_str(),
                matched: true,
            });
            last_end = found.end();
        }

        if last_end < label.len() || segments.is_empty() {
            segments.push(Segment::plain(&label[last_end..]));
        }

        segments
    }
}

#[cfg(test)]
#[path = "highlight_tests.rs"]
mod highlight_tests;
