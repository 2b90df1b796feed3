//! Fenced code tracking for the source scanner.
//!
//! Extension syntax inside fenced code must stay literal, so the scanner
//! feeds every line through [`FenceTracker`] before looking for matches.

use super::container_prefix;

/// Tracks whether the current line is inside a fenced code block.
///
/// Fences use three or more backticks or tildes and may sit inside list
/// items or blockquotes. The closing fence uses the same character and is at
/// least as long as the opening one.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    /// Character of the open fence.
    fence_char: Option<char>,
    /// Minimum closing length.
    fence_len: usize,
}

impl FenceTracker {
    pub(crate) fn in_fence(&self) -> bool {
        self.fence_char.is_some()
    }

    /// Feed one line. Returns `true` if the line opens or closes a fence.
    pub(crate) fn update(&mut self, line: &str) -> bool {
        let (_, body) = container_prefix(line);

        if let Some(fence_char) = self.fence_char {
            if closes_fence(body, fence_char, self.fence_len) {
                self.fence_char = None;
                self.fence_len = 0;
                return true;
            }
            return false;
        }

        if let Some((ch, len)) = opening_fence(body) {
            self.fence_char = Some(ch);
            self.fence_len = len;
            return true;
        }
        false
    }
}

fn opening_fence(body: &str) -> Option<(char, usize)> {
    let first = body.chars().next().filter(|c| matches!(c, '`' | '~'))?;
    let count = body.chars().take_while(|&c| c == first).count();
    if count < 3 {
        return None;
    }
    // A backtick fence's info string cannot contain backticks
    if first == '`' && body[count..].contains('`') {
        return None;
    }
    Some((first, count))
}

fn closes_fence(body: &str, fence_char: char, min_len: usize) -> bool {
    let count = body.chars().take_while(|&c| c == fence_char).count();
    count >= min_len && body[count..].trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fence_open_and_close() {
        let mut tracker = FenceTracker::default();
        assert!(tracker.update("```tex\n"));
        assert!(tracker.in_fence());
        assert!(!tracker.update("$$x$$\n"));
        assert!(tracker.in_fence());
        assert!(tracker.update("```\n"));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_fence_inside_blockquote() {
        let mut tracker = FenceTracker::default();
        assert!(tracker.update("> ~~~~\n"));
        assert!(!tracker.update("> ~~~\n"));
        assert!(tracker.in_fence());
        assert!(tracker.update(">   ~~~~~\n"));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_other_char_does_not_close() {
        let mut tracker = FenceTracker::default();
        tracker.update("```");
        assert!(!tracker.update("~~~"));
        assert!(tracker.in_fence());
    }

    #[test]
    fn test_closing_fence_takes_no_info() {
        let mut tracker = FenceTracker::default();
        tracker.update("```");
        assert!(!tracker.update("``` rust"));
        assert!(tracker.in_fence());
    }

    #[test]
    fn test_inline_code_is_not_a_fence() {
        let mut tracker = FenceTracker::default();
        assert!(!tracker.update("```code``` in a sentence"));
        assert!(!tracker.update("``two``"));
        assert!(!tracker.in_fence());
    }
}
