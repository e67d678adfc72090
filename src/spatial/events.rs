//! Observer registry for cell value changes

use std::fmt;

/// Handle returned by [`ChangeNotifier::subscribe`] for later removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Observer<T> = Box<dyn FnMut(&T)>;

/// Ordered list of callbacks invoked with each newly stored value
///
/// Observers run synchronously in subscription order. Identifiers are never
/// reused, so a stale handle cannot remove a later subscription.
pub struct ChangeNotifier<T> {
    observers: Vec<(SubscriptionId, Observer<T>)>,
    next_id: u64,
}

impl<T> Default for ChangeNotifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ChangeNotifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("observers", &self.observers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl<T> ChangeNotifier<T> {
    /// Create an empty notifier
    pub const fn new() -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Register an observer and return its handle
    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: FnMut(&T) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer, returning whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Invoke every observer with `value`
    pub fn notify(&mut self, value: &T) {
        for (_, observer) in &mut self.observers {
            observer(value);
        }
    }

    /// Number of registered observers
    pub const fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether no observers are registered
    pub const fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Remove all observers
    pub fn clear(&mut self) {
        self.observers.clear();
    }
}
