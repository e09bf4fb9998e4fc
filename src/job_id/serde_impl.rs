//! `jobIdString` object form of [`JobId`]
//!
//! Job ids are exchanged as single field objects, `{"jobIdString": "job_100_0007"}`. Reading
//! goes through the string parser, so a null or missing field gives the zero id and malformed
//! text surfaces the parse error message.

use super::JobId;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize)]
struct JobIdFields<'a> {
    #[serde(rename = "jobIdString")]
    job_id_string: &'a str,
}

#[derive(Deserialize)]
struct OptionalJobIdFields {
    #[serde(rename = "jobIdString", default)]
    job_id_string: Option<String>,
}

impl Serialize for JobId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        JobIdFields {
            job_id_string: &self.to_canonical_string(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for JobId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = OptionalJobIdFields::deserialize(deserializer)?;
        JobId::parse(fields.job_id_string.as_deref()).map_err(D::Error::custom)
    }
}
