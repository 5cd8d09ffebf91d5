//! Per-step records.
//!
//! Environments and wrappers return a [`Record`] alongside every observation they
//! produce. A record is a flat map from keys to [`RecordValue`]s; wrappers stacked on
//! top of each other merge their records into the one returned by the outermost
//! environment.
//!
//! ```rust
//! use gym_doom_core::record::{Record, RecordValue};
//!
//! let obs = vec![0f32, 0.5, 1.0];
//!
//! let mut record = Record::from_scalar("reward", 1.0);
//! record.insert("obs", RecordValue::Array1(obs));
//! assert_eq!(record.get_scalar("reward").unwrap(), 1.0);
//! ```
mod base;
pub use base::{Record, RecordValue};
