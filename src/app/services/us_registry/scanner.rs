//! Anchor scanner for fixed-width registry lines
//!
//! Works in character positions rather than byte offsets so that accented
//! city or licensee names never split a window mid-character. Every window is
//! clamped to the line bounds: asking for text past the end yields a shorter
//! (possibly empty) string instead of failing.

/// Character-indexed view over one source line
#[derive(Debug, Clone)]
pub struct LineScanner {
    chars: Vec<char>,
}

impl LineScanner {
    pub fn new(line: &str) -> Self {
        Self {
            chars: line.chars().collect(),
        }
    }

    /// Line length in characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Check whether the line contains a marker anywhere
    pub fn contains(&self, marker: &str) -> bool {
        self.find_from(marker, 0).is_some()
    }

    /// Find the first occurrence of `anchor` starting at or after `from`
    ///
    /// Returns the character position where the anchor begins.
    pub fn find_from(&self, anchor: &str, from: usize) -> Option<usize> {
        let needle: Vec<char> = anchor.chars().collect();
        if needle.is_empty() {
            return (from <= self.chars.len()).then_some(from);
        }
        if from >= self.chars.len() || needle.len() > self.chars.len() - from {
            return None;
        }

        self.chars[from..]
            .windows(needle.len())
            .position(|candidate| candidate == needle.as_slice())
            .map(|offset| from + offset)
    }

    /// Text in the character range `[start, end)`, clamped to the line
    pub fn window(&self, start: usize, end: usize) -> String {
        let end = end.min(self.chars.len());
        if start >= end {
            return String::new();
        }
        self.chars[start..end].iter().collect()
    }

    /// `width` characters ending just before `position`
    pub fn window_before(&self, position: usize, width: usize) -> String {
        self.window(position.saturating_sub(width), position)
    }

    /// `width` characters starting at `position`
    pub fn window_after(&self, position: usize, width: usize) -> String {
        self.window(position, position.saturating_add(width))
    }

    /// Everything from `position` to the end of the line
    pub fn rest_from(&self, position: usize) -> String {
        self.window(position, self.chars.len())
    }
}
