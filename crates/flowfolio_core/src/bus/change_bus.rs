//! In-process publish/subscribe channel for catalog changes.
//!
//! # Responsibility
//! - Register handlers and invoke every one of them per published tick.
//! - Decouple publishers from handler execution time.
//!
//! # Invariants
//! - `publish` only enqueues; handlers run on the dispatcher thread.
//! - Dropping a `Subscription` stops all future delivery to its handler.
//! - Dropping the bus drains the queue and joins the dispatcher.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, PoisonError, Weak};
use std::thread::{self, JoinHandle};

type Handler = Arc<dyn Fn() + Send + Sync>;

struct Registered {
    id: u64,
    handler: Handler,
}

/// Payload-free change notification channel.
pub struct ChangeBus {
    subscribers: Arc<Mutex<Vec<Registered>>>,
    next_id: AtomicU64,
    sender: Option<Sender<()>>,
    dispatcher: Option<JoinHandle<()>>,
}

impl ChangeBus {
    /// Creates a bus with a running dispatcher thread.
    pub fn new() -> Self {
        let subscribers: Arc<Mutex<Vec<Registered>>> = Arc::new(Mutex::new(Vec::new()));
        let (sender, receiver) = mpsc::channel();

        let dispatcher = thread::spawn({
            let subscribers = Arc::clone(&subscribers);
            move || dispatch_loop(&receiver, &subscribers)
        });

        Self {
            subscribers,
            next_id: AtomicU64::new(1),
            sender: Some(sender),
            dispatcher: Some(dispatcher),
        }
    }

    /// Enqueues one change tick for fan-out to current subscribers.
    ///
    /// Fire-and-forget: returns immediately, before any handler ran.
    pub fn publish(&self) {
        if let Some(sender) = &self.sender {
            let _ = sender.send(());
        }
    }

    /// Registers `handler` for every future publish.
    ///
    /// The returned guard unsubscribes on drop; hold it for as long as the
    /// subscriber observes the catalog.
    #[must_use = "dropping the subscription immediately unsubscribes the handler"]
    pub fn subscribe(&self, handler: impl Fn() + Send + Sync + 'static) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        lock_subscribers(&self.subscribers).push(Registered {
            id,
            handler: Arc::new(handler),
        });
        Subscription {
            id,
            subscribers: Arc::downgrade(&self.subscribers),
        }
    }

    /// Number of currently registered handlers.
    pub fn subscriber_count(&self) -> usize {
        lock_subscribers(&self.subscribers).len()
    }
}

impl Default for ChangeBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ChangeBus {
    fn drop(&mut self) {
        // Closing the channel ends the dispatch loop after pending ticks.
        self.sender.take();
        if let Some(dispatcher) = self.dispatcher.take() {
            let _ = dispatcher.join();
        }
    }
}

fn dispatch_loop(receiver: &Receiver<()>, subscribers: &Mutex<Vec<Registered>>) {
    while receiver.recv().is_ok() {
        // Snapshot handlers outside the lock so one can subscribe or drop a
        // subscription without deadlocking the dispatcher.
        let handlers: Vec<Handler> = lock_subscribers(subscribers)
            .iter()
            .map(|registered| Arc::clone(&registered.handler))
            .collect();
        for handler in handlers {
            handler();
        }
    }
}

fn lock_subscribers(
    subscribers: &Mutex<Vec<Registered>>,
) -> std::sync::MutexGuard<'_, Vec<Registered>> {
    subscribers.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Scoped subscription handle. Dropping it unsubscribes the handler.
pub struct Subscription {
    id: u64,
    subscribers: Weak<Mutex<Vec<Registered>>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            lock_subscribers(&subscribers).retain(|registered| registered.id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ChangeBus;
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn publish_reaches_every_current_subscriber() {
        let bus = ChangeBus::new();
        let (tx_a, rx_a) = mpsc::channel();
        let (tx_b, rx_b) = mpsc::channel();

        let _sub_a = bus.subscribe(move || tx_a.send(()).expect("receiver should be alive"));
        let _sub_b = bus.subscribe(move || tx_b.send(()).expect("receiver should be alive"));
        assert_eq!(bus.subscriber_count(), 2);

        bus.publish();

        rx_a.recv_timeout(Duration::from_secs(2))
            .expect("first subscriber should be notified");
        rx_b.recv_timeout(Duration::from_secs(2))
            .expect("second subscriber should be notified");
    }

    #[test]
    fn dropped_subscription_stops_delivery() {
        let bus = ChangeBus::new();
        let (tx, rx) = mpsc::channel();

        let sub = bus.subscribe(move || {
            let _ = tx.send(());
        });
        bus.publish();
        rx.recv_timeout(Duration::from_secs(2))
            .expect("subscriber should be notified while registered");

        drop(sub);
        assert_eq!(bus.subscriber_count(), 0);

        bus.publish();
        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
    }

    #[test]
    fn publish_without_subscribers_is_harmless() {
        let bus = ChangeBus::new();
        bus.publish();
        bus.publish();
    }

    #[test]
    fn subscription_outliving_the_bus_drops_cleanly() {
        let bus = ChangeBus::new();
        let sub = bus.subscribe(|| {});
        drop(bus);
        drop(sub);
    }
}
