//! Milestone payment models and operations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::FreelancerClient;
use crate::envelope::Envelope;
use crate::error::{FreelancerError, Result};

const MILESTONES_PATH: &str = "api/projects/0.1/milestones/";
const MILESTONE_REQUESTS_PATH: &str = "api/projects/0.1/milestone_requests/";

/// A payment milestone held in escrow for a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Milestone {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,

    /// Freelancer the milestone is assigned to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bidder_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Milestone reason category, e.g. "partial_payment".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Response fields outside the declared set.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A freelancer's request for a milestone to be created or released.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MilestoneRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Response fields outside the declared set.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Parameters for creating a milestone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MilestoneParams {
    pub project_id: u64,
    pub bidder_id: u64,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parameters for requesting a milestone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MilestoneRequestParams {
    pub project_id: u64,
    pub bid_id: u64,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Create a milestone payment for a project.
#[tracing::instrument(skip(client, params))]
pub async fn create_milestone(
    client: &FreelancerClient,
    params: &MilestoneParams,
) -> Result<Milestone> {
    let result = client
        .post_json(MILESTONES_PATH, params)
        .await
        .and_then(Envelope::into_result)
        .map_err(FreelancerError::MilestoneNotCreated)?;

    super::from_result(result).map_err(FreelancerError::MilestoneNotCreated)
}

/// Request a milestone from the employer.
#[tracing::instrument(skip(client, params))]
pub async fn create_milestone_request(
    client: &FreelancerClient,
    params: &MilestoneRequestParams,
) -> Result<MilestoneRequest> {
    let result = client
        .post_json(MILESTONE_REQUESTS_PATH, params)
        .await
        .and_then(Envelope::into_result)
        .map_err(FreelancerError::MilestoneRequestNotCreated)?;

    super::from_result(result).map_err(FreelancerError::MilestoneRequestNotCreated)
}

/// Release a milestone, in full or for the given partial amount.
///
/// Returns `true` on success; there is no model payload.
#[tracing::instrument(skip(client))]
pub async fn release_milestone(
    client: &FreelancerClient,
    milestone_id: u64,
    amount: Option<f64>,
) -> Result<bool> {
    #[derive(Serialize)]
    struct ReleaseBody {
        action: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        amount: Option<f64>,
    }

    let path = format!("{MILESTONES_PATH}{milestone_id}");
    let body = ReleaseBody {
        action: "release",
        amount,
    };

    client
        .put_json(&path, &body)
        .await
        .and_then(Envelope::into_ack)
        .map_err(FreelancerError::MilestoneNotReleased)?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_milestone_status_round_trip() {
        let milestone: Milestone = serde_json::from_value(json!({
            "id": 9,
            "project_id": 1,
            "amount": 50.0,
            "status": "frozen",
            "transaction_id": 777
        }))
        .unwrap();

        assert_eq!(milestone.status.as_deref(), Some("frozen"));
        assert_eq!(milestone.extra.get("transaction_id"), Some(&json!(777)));
    }

    #[test]
    fn test_milestone_params_omit_unset_reason() {
        let params = MilestoneParams {
            project_id: 1,
            bidder_id: 2,
            amount: 50.0,
            ..Default::default()
        };
        let value = serde_json::to_value(&params).unwrap();
        assert!(!value.as_object().unwrap().contains_key("reason"));
    }
}
