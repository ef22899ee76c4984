//! Observer registration for tracked values.

use smallvec::SmallVec;
use std::rc::Rc;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<T> = Rc<dyn Fn(&T)>;

/// Listeners captured at notification time.
///
/// Owners take a snapshot while their state is borrowed, release the borrow,
/// then call [`ListenerSnapshot::notify`]. Listeners are therefore free to
/// read the value, add listeners or remove themselves while being notified.
pub struct ListenerSnapshot<T> {
    listeners: SmallVec<[Listener<T>; 2]>,
}

impl<T> ListenerSnapshot<T> {
    pub fn notify(&self, value: &T) {
        for listener in &self.listeners {
            listener(value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

pub struct ListenerRegistry<T> {
    next_id: u64,
    listeners: SmallVec<[(ListenerId, Listener<T>); 2]>,
}

impl<T> Default for ListenerRegistry<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            listeners: SmallVec::new(),
        }
    }
}

impl<T> ListenerRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, listener: impl Fn(&T) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Returns `false` if `id` was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn snapshot(&self) -> ListenerSnapshot<T> {
        ListenerSnapshot {
            listeners: self
                .listeners
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "tests/listeners_tests.rs"]
mod tests;
