use serde::{Deserialize, Serialize};

use crate::action::Action;

/// An action scheduled for a specific frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptedAction<S> {
    pub frame: u64,
    #[serde(flatten)]
    pub action: Action<S>,
}

/// Recorded input replayed by headless runs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputScript<S> {
    events: Vec<ScriptedAction<S>>,
}

impl<S: Copy> InputScript<S> {
    pub fn new(mut events: Vec<ScriptedAction<S>>) -> Self {
        events.sort_by_key(|e| e.frame);
        Self { events }
    }

    /// Actions scheduled for `frame`, in script order.
    pub fn actions_at(&self, frame: u64) -> impl Iterator<Item = Action<S>> + '_ {
        self.events
            .iter()
            .filter(move |e| e.frame == frame)
            .map(|e| e.action)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last_frame(&self) -> Option<u64> {
        self.events.iter().map(|e| e.frame).max()
    }
}
