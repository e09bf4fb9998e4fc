mod bytes;
#[cfg(feature = "serde")]
mod serde_impl;
mod start_time;
mod utils;

use crate::error::{JobIdError, JobIdResult};
use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::str::FromStr;

/// Job identifier with the individual elements of the jobtracker assigned id parsed apart.
///
/// The jobtracker id has the form `job_<epoch>_<sequence>`. Neither component is unique on
/// its own, the pair is.
///
/// Values are immutable and `Copy`, ordering is lexicographic on `(epoch, sequence)`.
///
/// # Example
///
/// ```
/// use tracker_job_id::JobId;
///
/// let job_id: JobId = "job_201206010000_7".parse().unwrap();
/// assert_eq!(job_id.epoch(), 201206010000);
/// assert_eq!(job_id.sequence(), 7);
/// assert_eq!(job_id.to_string(), "job_201206010000_0007");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct JobId {
    epoch: i64,
    sequence: i64,
}

impl JobId {
    /// Create a job id from its numeric components. No range checks are made.
    pub const fn new(epoch: i64, sequence: i64) -> Self {
        Self { epoch, sequence }
    }

    /// Parse a job id from its textual form
    ///
    /// Absent input is not an error, it gives the zero id (`job_0_0000`), which callers use
    /// as the "no id" sentinel.
    ///
    /// # Arguments
    ///
    /// * `job_id` - Text in the form `<prefix>_<epoch>_<sequence>`. Surrounding whitespace is
    ///              ignored, the sequence does not need to be zero padded.
    ///
    /// # Returns
    ///
    /// The parsed id, or [`JobIdError::InvalidFormat`] naming the rejected input
    pub fn parse(job_id: Option<&str>) -> JobIdResult<Self> {
        match job_id {
            Some(job_id) => job_id.parse(),
            None => Ok(Self::default()),
        }
    }

    /// Copy another job id, falling back to the zero id when there is none
    pub fn copy_of(other: Option<&JobId>) -> Self {
        other.copied().unwrap_or_default()
    }

    /// The jobtracker start time, taken from the middle component of the id.
    ///
    /// This is the date formatted start time read as a plain number, see
    /// [`JobId::tracker_start_time`] for decoding it.
    pub fn epoch(&self) -> i64 {
        self.epoch
    }

    /// The jobtracker assigned sequence number, taken from the last component of the id.
    ///
    /// The counter is reset on every jobtracker restart, so sequence values overlap within a
    /// cluster. Only the combination with the epoch is unique.
    pub fn sequence(&self) -> i64 {
        self.sequence
    }

    /// Render as `job_<epoch>_<sequence>`, with the sequence zero padded to at least 4 digits
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }

    /// Compare against a possibly absent id. Absent ids sort last.
    pub fn compare_to(&self, other: Option<&JobId>) -> Ordering {
        match other {
            Some(other) => self.cmp(other),
            None => Ordering::Less,
        }
    }

    /// Deterministic 32 bit hash of both components.
    ///
    /// Unlike [`std::hash::Hash`] with a randomly seeded hasher, the value is the same in every
    /// process, so it can be used for partitioning.
    pub fn hash_code(&self) -> i32 {
        utils::combine_hash(&[self.epoch, self.sequence])
    }
}

/// Total order over optional job ids in which absent ids sort after every present one.
///
/// This is the reverse of the [`Ord`] impl of [`Option`], which puts `None` first.
///
/// # Example
///
/// ```
/// use tracker_job_id::{cmp_nulls_last, JobId};
///
/// let mut ids = vec![None, Some(JobId::new(2, 0)), Some(JobId::new(1, 5))];
/// ids.sort_by(|a, b| cmp_nulls_last(a.as_ref(), b.as_ref()));
/// assert_eq!(ids, vec![Some(JobId::new(1, 5)), Some(JobId::new(2, 0)), None]);
/// ```
pub fn cmp_nulls_last(a: Option<&JobId>, b: Option<&JobId>) -> Ordering {
    match (a, b) {
        (Some(a), b) => a.compare_to(b),
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl Ord for JobId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.epoch
            .cmp(&other.epoch)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for JobId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for JobId {
    type Err = JobIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (epoch, sequence) = utils::parse_components(s)?;
        Ok(Self::new(epoch, sequence))
    }
}

impl TryFrom<&str> for JobId {
    type Error = JobIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for JobId {
    type Error = JobIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<(i64, i64)> for JobId {
    fn from((epoch, sequence): (i64, i64)) -> Self {
        Self::new(epoch, sequence)
    }
}

impl From<JobId> for String {
    fn from(job_id: JobId) -> Self {
        job_id.to_string()
    }
}

impl Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "job{}{}{}{:04}",
            utils::SEPARATOR,
            self.epoch,
            utils::SEPARATOR,
            self.sequence
        )
    }
}

impl Debug for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
