//! Ownership of everything a mounted component registers with the browser.
//!
//! Listener, animation-frame and observer handles all release themselves on
//! drop, so a component keeps them in one [`Subscriptions`] bag and drops the
//! bag from its effect teardown. The per-thread counter makes leaks visible.

use std::any::Any;
use std::cell::Cell;

thread_local! {
    static LIVE: Cell<usize> = const { Cell::new(0) };
}

/// Handles currently held by any [`Subscriptions`] on this thread.
pub fn live_subscriptions() -> usize {
    LIVE.with(Cell::get)
}

struct Held {
    _handle: Box<dyn Any>,
}

impl Drop for Held {
    fn drop(&mut self) {
        LIVE.with(|live| live.set(live.get().saturating_sub(1)));
    }
}

#[derive(Default)]
pub struct Subscriptions {
    held: Vec<Held>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hold(&mut self, handle: impl Any) {
        LIVE.with(|live| live.set(live.get() + 1));
        self.held.push(Held {
            _handle: Box::new(handle),
        });
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    #[cfg(test)]
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    struct Probe(Rc<Cell<usize>>);

    impl Drop for Probe {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn dropping_the_bag_releases_every_handle() {
        let released = Rc::new(Cell::new(0));
        let baseline = live_subscriptions();

        let mut subscriptions = Subscriptions::new();
        subscriptions.hold(Probe(released.clone()));
        subscriptions.hold(Probe(released.clone()));
        subscriptions.hold(Probe(released.clone()));
        assert_eq!(subscriptions.len(), 3);
        assert_eq!(live_subscriptions(), baseline + 3);

        drop(subscriptions);

        assert_eq!(released.get(), 3);
        assert_eq!(live_subscriptions(), baseline);
    }

    #[test]
    fn clear_releases_and_allows_reuse() {
        let released = Rc::new(Cell::new(0));
        let baseline = live_subscriptions();

        let mut subscriptions = Subscriptions::new();
        subscriptions.hold(Probe(released.clone()));
        subscriptions.clear();
        assert!(subscriptions.is_empty());
        assert_eq!(released.get(), 1);

        subscriptions.hold(Probe(released.clone()));
        assert_eq!(live_subscriptions(), baseline + 1);
        drop(subscriptions);
        assert_eq!(live_subscriptions(), baseline);
    }

    #[test]
    fn remount_cycles_do_not_accumulate() {
        let baseline = live_subscriptions();
        for _ in 0..5 {
            let mut subscriptions = Subscriptions::new();
            subscriptions.hold(Probe(Rc::new(Cell::new(0))));
            subscriptions.hold(());
        }
        assert_eq!(live_subscriptions(), baseline);
    }
}
