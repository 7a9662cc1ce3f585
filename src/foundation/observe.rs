/// Handle returned by [`Observers::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Single-writer, many-reader change notification.
///
/// Callbacks run synchronously inside [`Observers::notify`], in subscription order.
pub struct Observers<T> {
    next_id: u64,
    subscribers: Vec<(Subscription, Box<dyn FnMut(&T)>)>,
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            subscribers: Vec::new(),
        }
    }
}

impl<T> std::fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<T> Observers<T> {
    /// Register a callback; it runs on every later [`Observers::notify`].
    pub fn subscribe(&mut self, callback: impl FnMut(&T) + 'static) -> Subscription {
        let id = Subscription(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns false if the subscription was already removed.
    pub fn unsubscribe(&mut self, id: Subscription) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Call every subscriber with `value`.
    pub fn notify(&mut self, value: &T) {
        for (_, cb) in &mut self.subscribers {
            cb(value);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/observe.rs"]
mod tests;
