//! Contest model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::FreelancerClient;
use crate::envelope::Envelope;
use crate::error::{FreelancerError, Result};
use crate::traits::Create;

const CONTESTS_PATH: &str = "api/contests/0.1/contests/";

/// A contest listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Contest type, e.g. "freemium".
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub contest_type: Option<String>,

    /// Duration in days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prize: Option<f64>,

    /// Response fields outside the declared set.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Parameters for creating a contest.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContestParams {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub contest_type: String,
    pub duration: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub job_ids: Vec<u64>,
    pub currency_id: u64,
    pub prize: f64,
}

#[async_trait]
impl Create for Contest {
    type Params = ContestParams;

    #[tracing::instrument(skip(client, params))]
    async fn create(client: &FreelancerClient, params: ContestParams) -> Result<Self> {
        let result = client
            .post_json(CONTESTS_PATH, &params)
            .await
            .and_then(Envelope::into_result)
            .map_err(FreelancerError::ContestNotCreated)?;

        super::from_result(result).map_err(FreelancerError::ContestNotCreated)
    }
}
