use super::JobId;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::ops::Range;

// yyyyMMddHHmm, as written by classic jobtrackers
const TRACKER_TIMESTAMP_RANGE: Range<i64> = 100_000_000_000..1_000_000_000_000;
// unix millis, as written by resource manager clusters
const CLUSTER_TIMESTAMP_RANGE: Range<i64> = 1_000_000_000_000..10_000_000_000_000;

impl JobId {
    /// Decode the epoch component as the start time of the tracker that assigned this id.
    ///
    /// A 12 digit epoch is read as a `yyyyMMddHHmm` UTC timestamp, a 13 digit epoch as unix
    /// milliseconds. Any other epoch, including one that is not a valid calendar date, has no
    /// start time.
    ///
    /// # Example
    ///
    /// ```
    /// use tracker_job_id::JobId;
    ///
    /// let job_id: JobId = "job_201206010930_0001".parse().unwrap();
    /// let start = job_id.tracker_start_time().unwrap();
    /// assert_eq!(start.to_rfc3339(), "2012-06-01T09:30:00+00:00");
    /// ```
    pub fn tracker_start_time(&self) -> Option<DateTime<Utc>> {
        if TRACKER_TIMESTAMP_RANGE.contains(&self.epoch) {
            from_tracker_timestamp(self.epoch)
        } else if CLUSTER_TIMESTAMP_RANGE.contains(&self.epoch) {
            Utc.timestamp_millis_opt(self.epoch).single()
        } else {
            None
        }
    }
}

fn from_tracker_timestamp(timestamp: i64) -> Option<DateTime<Utc>> {
    let field = |divisor: i64| ((timestamp / divisor) % 100) as u32;

    let year = (timestamp / 100_000_000) as i32;
    let naive = NaiveDate::from_ymd_opt(year, field(1_000_000), field(10_000))?
        .and_hms_opt(field(100), field(1), 0)?;

    Some(Utc.from_utc_datetime(&naive))
}
