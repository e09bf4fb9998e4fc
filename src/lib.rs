//! Job identifiers as assigned by a cluster jobtracker.
//!
//! A jobtracker names every job `job_<epoch>_<sequence>`: the epoch is the tracker start time and
//! the sequence a counter that restarts with the tracker. [`JobId`] parses that text, keeps the
//! two numbers, renders them back in canonical form (`job_201206010000_0007`) and orders ids by
//! epoch, then sequence.
//!
//! With the default `serde` feature, a [`JobId`] is (de)serialized as `{"jobIdString": "..."}`.

pub mod error;
pub mod job_id;

pub use error::{JobIdError, JobIdResult};
pub use job_id::{cmp_nulls_last, JobId};
