//! Catalog change notification fan-out.
//!
//! # Responsibility
//! - Deliver payload-free "catalog changed" ticks to current subscribers.
//! - Funnel both transports (in-process publish, cross-connection storage
//!   polling) into one subscribe contract.
//!
//! # Invariants
//! - A notification carries no data; consumers must re-read the store.
//! - Delivery is at-least-once for current subscribers and never reaches
//!   late subscribers; the bus is not a durable log.
//! - Publishing never blocks on handler execution.

mod change_bus;
mod storage_watcher;

pub use change_bus::{ChangeBus, Subscription};
pub use storage_watcher::StorageWatcher;
