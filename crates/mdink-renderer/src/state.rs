//! State tracked while walking the event stream.

use pulldown_cmark::Alignment;

/// Code block being collected.
#[derive(Default)]
pub(crate) struct CodeBlockState {
    active: bool,
    /// Fence info string (e.g. `rust`, `mermaid graph`).
    info: String,
    buffer: String,
}

impl CodeBlockState {
    pub(crate) fn start(&mut self, info: &str) {
        self.active = true;
        info.clone_into(&mut self.info);
        self.buffer.clear();
    }

    /// End the current code block and return (info, content).
    pub(crate) fn end(&mut self) -> (String, String) {
        self.active = false;
        (
            std::mem::take(&mut self.info),
            std::mem::take(&mut self.buffer),
        )
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}

/// Table column alignments and the cursor within the current row.
#[derive(Default)]
pub(crate) struct TableState {
    alignments: Vec<Alignment>,
    cell_index: usize,
    /// Rendered header cells, emitted when the table closes.
    head: String,
}

impl TableState {
    pub(crate) fn start(&mut self, alignments: Vec<Alignment>) {
        self.alignments = alignments;
        self.cell_index = 0;
        self.head.clear();
    }

    pub(crate) fn start_head(&mut self) {
        self.cell_index = 0;
    }

    pub(crate) fn end_head(&mut self, cells: String) {
        self.head = cells;
    }

    pub(crate) fn take_head(&mut self) -> String {
        std::mem::take(&mut self.head)
    }

    pub(crate) fn start_row(&mut self) {
        self.cell_index = 0;
    }

    pub(crate) fn next_cell(&mut self) {
        self.cell_index += 1;
    }

    /// CSS declaration for the current cell's alignment.
    pub(crate) fn current_alignment(&self) -> &'static str {
        match self.alignments.get(self.cell_index) {
            Some(Alignment::Left) => "text-align:left",
            Some(Alignment::Center) => "text-align:center",
            Some(Alignment::Right) => "text-align:right",
            Some(Alignment::None) | None => "",
        }
    }
}

/// Nesting state of lists.
///
/// Two parallel stacks: whether each level is ordered, and the next item
/// number at that level.
#[derive(Debug, Default)]
pub(crate) struct ListState {
    ordered: Vec<bool>,
    counters: Vec<u64>,
}

impl ListState {
    /// Enter a list. `start` is `Some` for ordered lists.
    pub(crate) fn push(&mut self, start: Option<u64>) {
        self.ordered.push(start.is_some());
        self.counters.push(start.unwrap_or(1));
    }

    /// Leave the innermost list.
    pub(crate) fn pop(&mut self) {
        self.ordered.pop();
        self.counters.pop();
    }

    /// Prefix for the next item of the innermost list; advances its counter.
    pub(crate) fn next_prefix(&mut self) -> String {
        let ordered = self.ordered.last().copied().unwrap_or(false);
        let Some(counter) = self.counters.last_mut() else {
            return "• ".to_owned();
        };
        let index = *counter;
        *counter += 1;
        if ordered {
            format!("{index}. ")
        } else {
            "• ".to_owned()
        }
    }

    pub(crate) fn clear(&mut self) {
        self.ordered.clear();
        self.counters.clear();
    }
}

/// A citation collected from a link in citation mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Footnote {
    /// 1-based number, in first-seen order.
    pub index: usize,
    /// Display title (link title, falling back to link text).
    pub title: String,
    /// Link target.
    pub link: String,
}

/// Citations collected during rendering, numbered in first-seen order.
#[derive(Debug, Default)]
pub(crate) struct FootnoteList {
    entries: Vec<Footnote>,
}

impl FootnoteList {
    /// Append a citation and return its number.
    pub(crate) fn push(&mut self, title: String, link: String) -> usize {
        let index = self.entries.len() + 1;
        self.entries.push(Footnote { index, title, link });
        index
    }

    pub(crate) fn entries(&self) -> &[Footnote] {
        &self.entries
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_code_block_state() {
        let mut state = CodeBlockState::default();
        assert!(!state.is_active());

        state.start("rust ignore");
        assert!(state.is_active());

        state.push_str("fn main() {}");
        let (info, content) = state.end();
        assert_eq!(info, "rust ignore");
        assert_eq!(content, "fn main() {}");
        assert!(!state.is_active());
    }

    #[test]
    fn test_table_state() {
        let mut state = TableState::default();
        state.start(vec![Alignment::Left, Alignment::None, Alignment::Right]);

        state.start_head();
        assert_eq!(state.current_alignment(), "text-align:left");
        state.next_cell();
        assert_eq!(state.current_alignment(), "");
        state.next_cell();
        assert_eq!(state.current_alignment(), "text-align:right");
        state.end_head("<td>a</td>".to_owned());

        state.start_row();
        assert_eq!(state.current_alignment(), "text-align:left");
        assert_eq!(state.take_head(), "<td>a</td>");
        assert_eq!(state.take_head(), "");
    }

    #[test]
    fn test_list_state_ordered() {
        let mut lists = ListState::default();
        lists.push(Some(3));
        assert_eq!(lists.next_prefix(), "3. ");
        assert_eq!(lists.next_prefix(), "4. ");
    }

    #[test]
    fn test_list_state_nested_counters_independent() {
        let mut lists = ListState::default();
        lists.push(Some(1));
        assert_eq!(lists.next_prefix(), "1. ");

        lists.push(None);
        assert_eq!(lists.next_prefix(), "• ");
        assert_eq!(lists.next_prefix(), "• ");
        lists.pop();

        assert_eq!(lists.next_prefix(), "2. ");
        lists.pop();
    }

    #[test]
    fn test_footnote_list() {
        let mut notes = FootnoteList::default();
        assert_eq!(notes.push("A".to_owned(), "https://a".to_owned()), 1);
        assert_eq!(notes.push("B".to_owned(), "https://b".to_owned()), 2);
        assert_eq!(notes.entries()[1].title, "B");

        notes.clear();
        assert!(notes.entries().is_empty());
        assert_eq!(notes.push("C".to_owned(), "https://c".to_owned()), 1);
    }
}
