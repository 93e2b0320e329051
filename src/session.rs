use crate::servers::{count_states, ServerEntry};

/// User intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    Toggle,
    EnableAll,
    DisableAll,
    Confirm,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Running,
    Save,
    Cancelled,
}

/// Mutable state of one interactive run: the entries and the cursor.
#[derive(Debug, Clone)]
pub struct Session {
    entries: Vec<ServerEntry>,
    cursor: usize,
}

impl Session {
    pub const fn new(entries: Vec<ServerEntry>) -> Self {
        Self { entries, cursor: 0 }
    }

    pub fn entries(&self) -> &[ServerEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<ServerEntry> {
        self.entries
    }

    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns `(enabled, disabled)` counts.
    pub fn counts(&self) -> (usize, usize) {
        count_states(&self.entries)
    }

    pub fn apply(&mut self, action: Action) -> Outcome {
        let len = self.entries.len();
        match action {
            Action::MoveUp if len > 0 => {
                self.cursor = (self.cursor + len - 1) % len;
            },
            Action::MoveDown if len > 0 => {
                self.cursor = (self.cursor + 1) % len;
            },
            Action::Toggle => {
                if let Some(entry) = self.entries.get_mut(self.cursor) {
                    entry.enabled = !entry.enabled;
                }
            },
            Action::EnableAll => self.set_all(true),
            Action::DisableAll => self.set_all(false),
            Action::Confirm => return Outcome::Save,
            Action::Cancel => return Outcome::Cancelled,
            Action::MoveUp | Action::MoveDown => {},
        }
        Outcome::Running
    }

    fn set_all(&mut self, enabled: bool) {
        for entry in &mut self.entries {
            entry.enabled = enabled;
        }
    }
}
