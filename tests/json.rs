#![cfg(feature = "serde")]

use serde_json::json;
use tracker_job_id::JobId;

#[test]
fn serializes_as_job_id_string_object() {
    let value = serde_json::to_value(JobId::new(100, 7)).unwrap();
    assert_eq!(value, json!({ "jobIdString": "job_100_0007" }));
}

#[test]
fn deserializes_through_string_parser() {
    let job_id: JobId = serde_json::from_str(r#"{"jobIdString": " job_100_7 "}"#).unwrap();
    assert_eq!(job_id, JobId::new(100, 7));
}

#[test]
fn null_or_missing_field_gives_zero_id() {
    let from_null: JobId = serde_json::from_str(r#"{"jobIdString": null}"#).unwrap();
    let from_missing: JobId = serde_json::from_str("{}").unwrap();
    assert_eq!(from_null, JobId::default());
    assert_eq!(from_missing, JobId::default());
}

#[test]
fn malformed_string_reports_parse_error() {
    let err = serde_json::from_str::<JobId>(r#"{"jobIdString": "job_abc_7"}"#).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Invalid job ID 'job_abc_7'"), "{}", message);
    assert!(message.contains("job_[0-9]+_[0-9]+"), "{}", message);
}

#[test]
fn bare_string_is_not_accepted() {
    assert!(serde_json::from_str::<JobId>(r#""job_100_7""#).is_err());
}

#[test]
fn nested_ids_round_trip_in_canonical_form() {
    #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
    struct JobRecord {
        cluster: String,
        job_id: JobId,
        parent: Option<JobId>,
    }

    let record = JobRecord {
        cluster: "cluster1@dc1".to_string(),
        job_id: "job_201206010000_7".parse().unwrap(),
        parent: None,
    };

    let text = serde_json::to_string(&record).unwrap();
    assert!(text.contains(r#""job_id":{"jobIdString":"job_201206010000_0007"}"#));

    let decoded: JobRecord = serde_json::from_str(&text).unwrap();
    assert_eq!(decoded, record);
}
