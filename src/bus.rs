use std::cell::RefCell;
use std::rc::Rc;

/// Lifecycle transition broadcast to the rest of the application.
/// Identifiers match the host event namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    Foreground = 500,
    Background = 501,
}

impl LifecycleEvent {
    pub fn id(self) -> u32 {
        self as u32
    }

    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            500 => Some(Self::Foreground),
            501 => Some(Self::Background),
            _ => None,
        }
    }
}

/// Handle for a registered bus subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberId(u64);

type Subscriber = Rc<dyn Fn(LifecycleEvent)>;

#[derive(Default)]
struct BusInner {
    next_id: u64,
    subscribers: Vec<(SubscriberId, Subscriber)>,
}

/// Fire-and-forget publish/subscribe bus.
///
/// At-most-once delivery per publish, fan-out to the subscribers registered
/// at publish time only. No persistence, no replay for late subscribers,
/// no backpressure. Clones share the same subscriber list.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Rc<RefCell<BusInner>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn(LifecycleEvent) + 'static) -> SubscriberId {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = SubscriberId(inner.next_id);
        inner.subscribers.push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriberId) {
        self.inner
            .borrow_mut()
            .subscribers
            .retain(|(sub_id, _)| *sub_id != id);
    }

    /// Deliver the event to every current subscriber, in registration order.
    ///
    /// Delivery runs on a snapshot, so a subscriber may subscribe or
    /// unsubscribe during its callback without observing this publish twice.
    pub fn publish(&self, event: LifecycleEvent) {
        let snapshot: Vec<Subscriber> = self
            .inner
            .borrow()
            .subscribers
            .iter()
            .map(|(_, sub)| sub.clone())
            .collect();

        for subscriber in snapshot {
            subscriber(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}
