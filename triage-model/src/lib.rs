//! # triage-model
//!
//! The domain layer of the queue simulation: patient records with a
//! built-in audit trail, a deterministic demographic generator, and the
//! factory that assembles complete records from both.
//!
//! The record is the entity the collection primitives consume - it hashes
//! by its NHS number and orders by medical urgency with an arrival
//! tie-break, so a [`triage_collections::merge_sort`] over records yields
//! the triage order directly.
//!
//! All randomness flows through explicitly seeded generator values passed
//! at construction; there is no ambient generator state anywhere, which
//! makes every simulation run reproducible.
//!
//! ## Example
//!
//! ```
//! use triage_model::RecordFactory;
//!
//! let mut factory = RecordFactory::from_seed(12345);
//! let record = factory.create();
//!
//! assert_eq!(record.nhs_number(), "1");
//! assert!((1..=5).contains(&record.priority()));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod factory;
pub mod generator;
pub mod record;

pub use factory::RecordFactory;
pub use generator::{Demographics, Lcg};
pub use record::{InvalidPriority, PatientRecord};
