// File: crates/chart-tile/src/signal.rs
// Summary: Single-threaded observable value cells and event channels with RAII subscriptions.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

type Callback<T> = Box<dyn FnMut(&T)>;

struct Registry<T> {
    entries: Vec<(u64, Callback<T>)>,
    next_id: u64,
    dispatching: bool,
    /// Ids removed while their callbacks were checked out for a dispatch.
    cancelled: Vec<u64>,
    /// Values emitted from inside a callback, delivered once the current pass ends.
    pending: VecDeque<T>,
}

impl<T> Registry<T> {
    fn remove(&mut self, id: u64) {
        if let Some(pos) = self.entries.iter().position(|(entry, _)| *entry == id) {
            self.entries.remove(pos);
        } else if self.dispatching {
            self.cancelled.push(id);
        }
    }
}

/// Cancels its registration when dropped or explicitly unsubscribed.
#[must_use = "dropping a Subscription unsubscribes it immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Event stream: every `emit` reaches every current subscriber, in
/// subscription order. A subscriber cancelled during a dispatch is skipped
/// for the rest of it. An `emit` from inside a callback is queued and
/// dispatched after the current pass, so events arrive in emission order.
pub struct Channel<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T> Clone for Channel<T> {
    fn clone(&self) -> Self {
        Self { registry: Rc::clone(&self.registry) }
    }
}

impl<T: 'static> Default for Channel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Channel<T> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                entries: Vec::new(),
                next_id: 0,
                dispatching: false,
                cancelled: Vec::new(),
                pending: VecDeque::new(),
            })),
        }
    }

    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.entries.push((id, Box::new(callback)));
            id
        };
        let weak: Weak<RefCell<Registry<T>>> = Rc::downgrade(&self.registry);
        Subscription::new(move || {
            if let Some(registry) = weak.upgrade() {
                registry.borrow_mut().remove(id);
            }
        })
    }

    pub fn subscriber_count(&self) -> usize {
        let registry = self.registry.borrow();
        registry.entries.len()
    }

    /// Registrations added during a pass first see the next queued value.
    fn dispatch_pass(&self, value: &T) {
        let mut active = std::mem::take(&mut self.registry.borrow_mut().entries);

        for (id, callback) in active.iter_mut() {
            if self.registry.borrow().cancelled.contains(id) {
                continue;
            }
            callback(value);
        }

        let mut registry = self.registry.borrow_mut();
        let cancelled = std::mem::take(&mut registry.cancelled);
        active.retain(|(id, _)| !cancelled.contains(id));
        // subscriptions made during the pass were pushed to the empty list
        active.append(&mut registry.entries);
        registry.entries = active;
    }
}

impl<T: Clone + 'static> Channel<T> {
    pub fn emit(&self, value: &T) {
        {
            let mut registry = self.registry.borrow_mut();
            if registry.dispatching {
                registry.pending.push_back(value.clone());
                tracing::trace!(queued = registry.pending.len(), "nested emit queued");
                return;
            }
            registry.dispatching = true;
        }

        self.dispatch_pass(value);
        loop {
            let next = {
                let mut registry = self.registry.borrow_mut();
                match registry.pending.pop_front() {
                    Some(next) => next,
                    None => {
                        registry.dispatching = false;
                        break;
                    }
                }
            };
            self.dispatch_pass(&next);
        }
    }
}

/// Value cell that notifies subscribers when it changes. Setting an equal
/// value is silent.
pub struct Signal<T> {
    value: Rc<RefCell<T>>,
    changes: Channel<T>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self { value: Rc::clone(&self.value), changes: self.changes.clone() }
    }
}

impl<T: Clone + PartialEq + 'static> Signal<T> {
    pub fn new(initial: T) -> Self {
        Self { value: Rc::new(RefCell::new(initial)), changes: Channel::new() }
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Store `value`; returns whether subscribers were notified.
    pub fn set(&self, value: T) -> bool {
        if *self.value.borrow() == value {
            return false;
        }
        *self.value.borrow_mut() = value.clone();
        self.changes.emit(&value);
        true
    }

    /// Observe future changes. The current value is not replayed.
    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> Subscription {
        self.changes.subscribe(callback)
    }

    pub fn subscriber_count(&self) -> usize {
        self.changes.subscriber_count()
    }
}
