//! Queue suppliers for the buffers that sit between a producer stage and a consumer stage of a
//! reactive pipeline.
//!
//! A pipeline assembler asks [`Queues`] for a supplier matching the nominal buffer size a stage
//! needs, and every call to [`QueueSupplier::get`] builds a fresh, independent queue:
//!
//! ```rust
//! use nexus_queues_rs::{capacity_of, Queue, Queues, QueuesConfig};
//!
//! let queues = Queues::new(QueuesConfig::default());
//! let queue = queues.supplier_for::<i32>(64).get();
//! assert!(queue.offer(1).is_ok());
//! assert_eq!(queue.poll(), Some(1));
//! assert_eq!(capacity_of(queue.as_ref()), 64);
//! ```

pub mod bit_math;
pub mod collections;
mod config;
mod config_option;
mod error;
pub mod supplier;

pub use self::{
  bit_math::{ceiling_next_power_of_two, is_power_of_two},
  collections::*,
  config::*,
  config_option::*,
  error::*,
  supplier::*,
};
