//! Change notification primitives.
//!
//! An [`EventBus`] fans events out to crossbeam channels, one per
//! [`Subscription`]. An [`ObservableVec`] is an ordered sequence that
//! publishes a [`CollectionChange`] for every structural edit.
//!
//! Everything here is single-threaded and synchronous: emitting never
//! blocks, subscribers drain their receiver whenever they choose to.

use crossbeam::channel::{Receiver, Sender};

/// Identifies one subscription on one bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Receiving end of a bus subscription.
pub struct Subscription<E> {
    id: SubscriptionId,
    rx: Receiver<E>,
}

impl<E> Subscription<E> {
    /// Identifier to pass back to the bus when unsubscribing.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Take the next pending event, if any.
    pub fn try_recv(&self) -> Option<E> {
        self.rx.try_recv().ok()
    }

    /// Take every pending event.
    pub fn drain(&self) -> Vec<E> {
        self.rx.try_iter().collect()
    }
}

impl<E> std::fmt::Debug for Subscription<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("pending", &self.rx.len())
            .finish()
    }
}

/// Publishes events to every live subscription.
pub struct EventBus<E> {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Sender<E>)>,
}

impl<E: Clone> EventBus<E> {
    /// Create a bus with no subscribers.
    pub fn new() -> Self {
        Self {
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    /// Open a new subscription.
    pub fn subscribe(&mut self) -> Subscription<E> {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        let (tx, rx) = crossbeam::channel::unbounded();
        self.subscribers.push((id, tx));

        Subscription { id, rx }
    }

    /// Close a subscription. Returns `false` if it was not open on this bus.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Send an event to every subscriber, dropping those whose receiver is gone.
    pub fn emit(&mut self, event: E) {
        self.subscribers
            .retain(|(_, tx)| tx.send(event.clone()).is_ok());
    }

    /// Whether the given subscription is still open.
    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.subscribers.iter().any(|(sub_id, _)| *sub_id == id)
    }

    /// Number of open subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<E: Clone> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// Structural change to an [`ObservableVec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionChange {
    /// An element was inserted at `index`
    Insert { index: usize },
    /// The element at `index` was removed
    Remove { index: usize },
    /// The element at `index` was swapped for another
    Replace { index: usize },
    /// The sequence was emptied
    Reset,
}

impl CollectionChange {
    /// Whether this change can alter the length of the sequence.
    pub fn changes_count(&self) -> bool {
        !matches!(self, CollectionChange::Replace { .. })
    }
}

/// Ordered sequence that publishes its structural changes.
///
/// In-place mutation of an element through [`get_mut`](Self::get_mut) or
/// [`iter_mut`](Self::iter_mut) is not structural and publishes nothing.
pub struct ObservableVec<T> {
    items: Vec<T>,
    events: EventBus<CollectionChange>,
}

impl<T> ObservableVec<T> {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            events: EventBus::new(),
        }
    }

    /// Append an element.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.events.emit(CollectionChange::Insert {
            index: self.items.len() - 1,
        });
    }

    /// Insert an element at `index`, shifting later elements.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, item: T) {
        self.items.insert(index, item);
        self.events.emit(CollectionChange::Insert { index });
    }

    /// Remove and return the element at `index`. Out of range is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        self.events.emit(CollectionChange::Remove { index });
        Some(item)
    }

    /// Swap the element at `index` for `item`, returning the old element.
    /// Out of range is a no-op and drops `item`.
    pub fn replace(&mut self, index: usize, item: T) -> Option<T> {
        let slot = self.items.get_mut(index)?;
        let old = std::mem::replace(slot, item);
        self.events.emit(CollectionChange::Replace { index });
        Some(old)
    }

    /// Remove every element, returning them in order.
    ///
    /// Always publishes [`CollectionChange::Reset`], even when already empty.
    pub fn clear(&mut self) -> Vec<T> {
        let items = std::mem::take(&mut self.items);
        self.events.emit(CollectionChange::Reset);
        items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Subscribe to structural changes.
    pub fn subscribe(&mut self) -> Subscription<CollectionChange> {
        self.events.subscribe()
    }

    /// Close a structural change subscription.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Whether the given subscription is still open.
    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.events.is_subscribed(id)
    }

    /// Number of open structural change subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.events.subscriber_count()
    }
}

impl<T> Default for ObservableVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ObservableVec<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items,
            events: EventBus::new(),
        }
    }
}

impl<T> FromIterator<T> for ObservableVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<'a, T> IntoIterator for &'a ObservableVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ObservableVec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
