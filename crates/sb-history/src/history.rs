//! The replay log.

use sb_agent::{AgentState, Simulation};
use sb_control::Action;

use crate::{HistoryError, HistoryResult};

/// One recorded tick.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryEntry {
    /// Agent state when the tick began.
    pub snapshot: AgentState,
    /// Action issued from `snapshot`.
    pub action: Action,
}

impl HistoryEntry {
    pub fn new(snapshot: AgentState, action: Action) -> Self {
        Self { snapshot, action }
    }
}

/// Append-only sequence of [`HistoryEntry`].
///
/// Only the action of the last entry may be rewritten, which is how a
/// solved window's winning action replaces the placeholder recorded when
/// the window started.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: AgentState, action: Action) {
        self.entries.push(HistoryEntry::new(snapshot, action));
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Overwrite the action of the most recent entry.
    pub fn replace_last_action(&mut self, action: Action) -> HistoryResult<()> {
        let last = self.entries.last_mut().ok_or(HistoryError::Empty)?;
        last.action = action;
        Ok(())
    }

    /// Rewind `sim` to the snapshot of entry `index`.
    pub fn restore<S: Simulation + ?Sized>(&self, index: usize, sim: &mut S) -> HistoryResult<&HistoryEntry> {
        let entry = self
            .entries
            .get(index)
            .ok_or(HistoryError::IndexOutOfRange { index, len: self.entries.len() })?;
        sim.restore(&entry.snapshot);
        Ok(entry)
    }

    /// Rewind `sim` to the most recently confirmed state.
    pub fn restore_last<S: Simulation + ?Sized>(&self, sim: &mut S) -> HistoryResult<&HistoryEntry> {
        let entry = self.entries.last().ok_or(HistoryError::Empty)?;
        sim.restore(&entry.snapshot);
        Ok(entry)
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
