//! Publish/subscribe fan-out for lifecycle events.
//!
//! [`EventBus`] maps an [`EventKind`] to an ordered list of zero-argument
//! callbacks. Publishing calls every subscriber of that kind synchronously, in
//! subscription order, on the calling thread. There is no queue: an event
//! published while nobody listens is lost.
//!
//! A subscriber must not publish the kind it is handling; nothing guards
//! against that reentrancy.
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use tilegame::events::bus::{EventBus, Subscriber};
//! use tilegame::events::lifecycle::EventKind;
//!
//! let mut bus = EventBus::new();
//! let hits = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&hits);
//! let subscriber: Subscriber = Rc::new(move || {
//!     counter.set(counter.get() + 1);
//!     Ok(())
//! });
//! assert!(bus.subscribe(EventKind::NewGame, Rc::clone(&subscriber)));
//! assert!(!bus.subscribe(EventKind::NewGame, subscriber));
//! assert!(bus.publish(EventKind::NewGame).unwrap());
//! assert_eq!(hits.get(), 1);
//! ```

use log::{debug, error};
use rustc_hash::FxHashMap;
use std::rc::Rc;

use crate::error::GameResult;
use crate::events::lifecycle::EventKind;

/// A bus callback. Identity is the `Rc` allocation, so keep a clone around
/// to unsubscribe later.
pub type Subscriber = Rc<dyn Fn() -> GameResult<()>>;

#[derive(Default)]
pub struct EventBus {
    subscribers: FxHashMap<EventKind, Vec<Subscriber>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `subscriber` to `kind`. Returns `false` if that same callback is
    /// already subscribed to `kind`.
    pub fn subscribe(&mut self, kind: EventKind, subscriber: Subscriber) -> bool {
        let list = self.subscribers.entry(kind).or_default();
        if list.iter().any(|s| Rc::ptr_eq(s, &subscriber)) {
            return false;
        }
        list.push(subscriber);
        true
    }

    /// Remove `subscriber` from `kind`. Returns `false` if it was not there.
    pub fn unsubscribe(&mut self, kind: EventKind, subscriber: &Subscriber) -> bool {
        let Some(list) = self.subscribers.get_mut(&kind) else {
            return false;
        };
        let Some(index) = list.iter().position(|s| Rc::ptr_eq(s, subscriber)) else {
            return false;
        };
        list.remove(index);
        true
    }

    /// Invoke every subscriber of `kind` in subscription order.
    ///
    /// Returns `Ok(false)` when nobody is subscribed. A failing subscriber
    /// does not stop the dispatch: the remaining ones still run, every
    /// failure is logged, and the first one is returned afterwards.
    pub fn publish(&self, kind: EventKind) -> GameResult<bool> {
        let list = match self.subscribers.get(&kind) {
            Some(list) if !list.is_empty() => list,
            _ => {
                debug!("No subscribers for {}", kind);
                return Ok(false);
            }
        };

        debug!("Publishing {} to {} subscriber(s)", kind, list.len());

        let mut first_failure = None;
        for subscriber in list {
            if let Err(e) = subscriber() {
                error!("{} subscriber failed: {}", kind, e);
                first_failure.get_or_insert(e);
            }
        }
        match first_failure {
            Some(e) => Err(e),
            None => Ok(true),
        }
    }

    /// Number of subscribers for `kind`.
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.subscribers.get(&kind).map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use std::cell::RefCell;

    fn recorder(log: &Rc<RefCell<Vec<&'static str>>>, tag: &'static str) -> Subscriber {
        let log = Rc::clone(log);
        Rc::new(move || {
            log.borrow_mut().push(tag);
            Ok(())
        })
    }

    #[test]
    fn test_publish_without_subscribers_is_noop() {
        let bus = EventBus::new();
        assert_eq!(bus.publish(EventKind::NewGame), Ok(false));
    }

    #[test]
    fn test_publish_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();
        bus.subscribe(EventKind::WindowResized, recorder(&log, "a"));
        bus.subscribe(EventKind::WindowResized, recorder(&log, "b"));
        bus.subscribe(EventKind::WindowResized, recorder(&log, "c"));
        bus.subscribe(EventKind::NewGame, recorder(&log, "other"));

        assert_eq!(bus.publish(EventKind::WindowResized), Ok(true));
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_duplicate_subscribe_keeps_one_registration() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();
        let s = recorder(&log, "once");
        assert!(bus.subscribe(EventKind::NewGame, Rc::clone(&s)));
        assert!(!bus.subscribe(EventKind::NewGame, Rc::clone(&s)));
        assert_eq!(bus.subscriber_count(EventKind::NewGame), 1);

        bus.publish(EventKind::NewGame).unwrap();
        assert_eq!(*log.borrow(), vec!["once"]);
    }

    #[test]
    fn test_same_callback_on_two_kinds() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();
        let s = recorder(&log, "x");
        assert!(bus.subscribe(EventKind::NewGame, Rc::clone(&s)));
        assert!(bus.subscribe(EventKind::LoadGame, s));
        bus.publish(EventKind::NewGame).unwrap();
        bus.publish(EventKind::LoadGame).unwrap();
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_unsubscribe() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();
        let a = recorder(&log, "a");
        let b = recorder(&log, "b");
        bus.subscribe(EventKind::NewGame, Rc::clone(&a));
        bus.subscribe(EventKind::NewGame, Rc::clone(&b));

        assert!(bus.unsubscribe(EventKind::NewGame, &a));
        assert!(!bus.unsubscribe(EventKind::NewGame, &a));
        assert!(!bus.unsubscribe(EventKind::Settings, &b));

        bus.publish(EventKind::NewGame).unwrap();
        assert_eq!(*log.borrow(), vec!["b"]);

        assert!(bus.unsubscribe(EventKind::NewGame, &b));
        assert_eq!(bus.publish(EventKind::NewGame), Ok(false));
    }

    #[test]
    fn test_failing_subscriber_does_not_stop_dispatch() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();
        bus.subscribe(EventKind::NewGame, recorder(&log, "before"));
        bus.subscribe(
            EventKind::NewGame,
            Rc::new(|| Err(GameError::EmptyMapFile("main.txt".into()))),
        );
        bus.subscribe(
            EventKind::NewGame,
            Rc::new(|| Err(GameError::UnrecognizedMapElement("x".into()))),
        );
        bus.subscribe(EventKind::NewGame, recorder(&log, "after"));

        let result = bus.publish(EventKind::NewGame);
        assert_eq!(result, Err(GameError::EmptyMapFile("main.txt".into())));
        assert_eq!(*log.borrow(), vec!["before", "after"]);
    }
}
