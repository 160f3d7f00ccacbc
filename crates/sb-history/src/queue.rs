//! Actions waiting to be issued on upcoming ticks.

use std::collections::VecDeque;

use sb_control::Action;

/// FIFO of pending actions.  One is popped per tick while non-empty.
#[derive(Clone, Debug, Default)]
pub struct ActionQueue {
    inner: VecDeque<Action>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_back(&mut self, action: Action) {
        self.inner.push_back(action);
    }

    /// Put `action` back at the head, ahead of everything queued.
    pub fn push_front(&mut self, action: Action) {
        self.inner.push_front(action);
    }

    /// Queue `n` copies of `action`.
    pub fn push_repeated(&mut self, action: Action, n: usize) {
        self.inner.extend(std::iter::repeat_n(action, n));
    }

    pub fn pop_front(&mut self) -> Option<Action> {
        self.inner.pop_front()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl Extend<Action> for ActionQueue {
    fn extend<I: IntoIterator<Item = Action>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}
