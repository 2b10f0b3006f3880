//! # triage-collections
//!
//! Single-threaded collection primitives for a queue-simulation domain:
//! patients arrive, wait in lines with different capacity semantics, are
//! indexed by an opaque string identifier, and are periodically re-ranked
//! by urgency.
//!
//! ## Structures
//!
//! - [`Node`] - single-owner forward link, the primitive under every chain
//! - [`LinkedStack`] - LIFO event log (most recent entry first)
//! - [`LinkedQueue`] - unbounded FIFO waiting line
//! - [`RingBuffer`] - fixed-capacity FIFO that rejects excess insertions
//! - [`ChainedMap`] - separate-chaining string-keyed map with amortized growth
//! - [`merge_sort`] - stable O(n log n) sort over any `Ord` element
//!
//! ## Design Goals
//!
//! - O(1) push/pop/enqueue/dequeue, no element shifting anywhere
//! - Explicit failure signaling: underflow is `None`, capacity rejection
//!   hands the value back, only invalid construction is an error
//! - Exclusive ownership of backing storage, no internal locking
//!
//! ## Example
//!
//! ```
//! use triage_collections::{ChainedMap, LinkedQueue, RingBuffer};
//!
//! // Unbounded waiting line.
//! let mut waiting = LinkedQueue::new();
//! waiting.enqueue("9001");
//! waiting.enqueue("9002");
//!
//! // Bounded processing stage: the third sample is rejected, not queued.
//! let mut lab: RingBuffer<&str> = RingBuffer::new(2).unwrap();
//! lab.enqueue("9001").unwrap();
//! lab.enqueue("9002").unwrap();
//! assert!(lab.enqueue("9003").is_err());
//!
//! // Identifier-keyed registry.
//! let mut registry = ChainedMap::new();
//! registry.put("9001", "triage bay 3");
//! assert_eq!(registry.get("9001"), Some(&"triage bay 3"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod map;
pub mod node;
pub mod queue;
pub mod ring;
pub mod sort;
pub mod stack;

pub use map::ChainedMap;
pub use node::Node;
pub use queue::LinkedQueue;
pub use ring::{Full, InvalidCapacity, RingBuffer};
pub use sort::merge_sort;
pub use stack::LinkedStack;
