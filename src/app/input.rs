//! Input tracker: the text field, its counter, and the target selector.
//!
//! The tracker owns the input surface exclusively. It never validates: empty
//! or whitespace-only text is the orchestrator's concern. Every edit
//! republishes the counter label so the counter cannot drift from the buffer.

use crate::domain::Target;

/// Live state of the input surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputTracker {
    text: String,
    max_length: usize,
    targets: Vec<Target>,
    selected: Option<usize>,
    counter: String,
}

impl InputTracker {
    /// Creates an empty tracker with no target selected.
    #[must_use]
    pub fn new(max_length: usize, targets: Vec<Target>) -> Self {
        let mut tracker = Self {
            text: String::new(),
            max_length,
            targets,
            selected: None,
            counter: String::new(),
        };
        tracker.on_input_changed();
        tracker
    }

    /// The live text value, untrimmed.
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn trimmed_input(&self) -> &str {
        self.text.trim()
    }

    /// The selected target, or `None` when nothing is chosen yet.
    #[must_use]
    pub fn selected_target(&self) -> Option<&Target> {
        self.selected.and_then(|i| self.targets.get(i))
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    /// Length in characters, as shown by the counter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The `"<length> / <max>"` label last published.
    #[must_use]
    pub fn counter_label(&self) -> &str {
        &self.counter
    }

    /// Recomputes and republishes the counter label.
    pub fn on_input_changed(&mut self) {
        self.counter = format!("{} / {}", self.len(), self.max_length);
        tracing::trace!(counter = %self.counter, "input changed");
    }

    /// Appends `c` unless the field is already at `max_length`.
    ///
    /// Returns `true` if the buffer changed.
    pub fn insert_char(&mut self, c: char) -> bool {
        if self.len() >= self.max_length {
            tracing::trace!(max_length = self.max_length, "input at capacity, dropping char");
            return false;
        }
        self.text.push(c);
        self.on_input_changed();
        true
    }

    /// Removes the last character. Returns `true` if the buffer changed.
    pub fn backspace(&mut self) -> bool {
        if self.text.pop().is_none() {
            return false;
        }
        self.on_input_changed();
        true
    }

    /// Empties the buffer. Returns `true` if the buffer changed.
    pub fn clear(&mut self) -> bool {
        if self.text.is_empty() {
            return false;
        }
        self.text.clear();
        self.on_input_changed();
        true
    }

    /// Selects the next target, wrapping; selects the first if none is chosen.
    pub fn select_next_target(&mut self) -> bool {
        if self.targets.is_empty() {
            return false;
        }
        let next = self.selected.map_or(0, |i| (i + 1) % self.targets.len());
        self.selected = Some(next);
        true
    }

    /// Selects the previous target, wrapping; selects the last if none is chosen.
    pub fn select_previous_target(&mut self) -> bool {
        if self.targets.is_empty() {
            return false;
        }
        let last = self.targets.len() - 1;
        let prev = match self.selected {
            None | Some(0) => last,
            Some(i) => i - 1,
        };
        self.selected = Some(prev);
        true
    }

    /// Selects the target at `index`. Out-of-range indices change nothing.
    pub fn select_target(&mut self, index: usize) -> bool {
        if index >= self.targets.len() || self.selected == Some(index) {
            return false;
        }
        self.selected = Some(index);
        true
    }
}
