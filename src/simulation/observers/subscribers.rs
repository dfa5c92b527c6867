//! Change listeners
//!
//! Listeners are plain boxed closures kept in subscription order and called
//! synchronously: once after every applied configuration change and once
//! after every step. They receive borrowed data only, so they cannot reach
//! back into the engine while it is mid-update.

use crate::domain::config::SimulationConfig;

/// What just happened to the engine.
#[derive(Debug, Clone, Copy)]
pub enum EngineEvent<'a> {
    /// A configuration update was applied.
    Configured {
        current: &'a SimulationConfig,
        previous: &'a SimulationConfig,
    },
    /// A step finished; `frame` is the new frame counter.
    Stepped { frame: u64 },
}

pub type Listener = Box<dyn FnMut(&EngineEvent<'_>)>;

/// Handle returned by `subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

impl SubscriptionId {
    pub fn from_raw(raw: u32) -> Self {
        SubscriptionId(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

#[derive(Default)]
pub(super) struct Subscribers {
    next_id: u32,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl Subscribers {
    pub(super) fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.listeners.push((id, listener));
        id
    }

    pub(super) fn unsubscribe(&mut self, id: SubscriptionId) -> Option<Listener> {
        let pos = self.listeners.iter().position(|(sid, _)| *sid == id)?;
        Some(self.listeners.remove(pos).1)
    }

    pub(super) fn emit(&mut self, event: &EngineEvent<'_>) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }

    #[cfg(test)]
    pub(super) fn len(&self) -> usize {
        self.listeners.len()
    }
}
