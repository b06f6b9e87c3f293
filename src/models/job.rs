//! Job (skill category) model and operations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::FreelancerClient;
use crate::envelope::Envelope;
use crate::error::{ApiFailure, FreelancerError, Result};

const JOBS_PATH: &str = "api/projects/0.1/jobs/";

/// A job/skill category that projects and contests can be tagged with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Job {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_url: Option<String>,

    /// Response fields outside the declared set.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Extract the job list from a `result` payload.
///
/// The jobs endpoint answers with either a bare array or a wrapper holding
/// a `jobs` array.
fn jobs_from_result(result: Value) -> core::result::Result<Vec<Job>, ApiFailure> {
    let value = match result {
        Value::Object(mut map) if map.contains_key("jobs") => {
            map.remove("jobs").unwrap_or(Value::Array(vec![]))
        }
        other => other,
    };
    serde_json::from_value(value).map_err(ApiFailure::decode)
}

/// List jobs matching the given filters, passed through verbatim.
#[tracing::instrument(skip(client, query))]
pub async fn get_jobs<Q: Serialize + ?Sized>(
    client: &FreelancerClient,
    query: &Q,
) -> Result<Vec<Job>> {
    let result = client
        .get_with_query(JOBS_PATH, query)
        .await
        .and_then(Envelope::into_result)
        .map_err(FreelancerError::JobsNotFound)?;

    jobs_from_result(result).map_err(FreelancerError::JobsNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_jobs_from_bare_array() {
        let jobs = jobs_from_result(json!([
            {"id": 3, "name": "PHP"},
            {"id": 7, "name": "Rust"}
        ]))
        .unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[1].name.as_deref(), Some("Rust"));
    }

    #[test]
    fn test_jobs_from_wrapped_result() {
        let jobs = jobs_from_result(json!({"jobs": [{"id": 3, "name": "PHP"}]})).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].id, Some(3));
    }
}
