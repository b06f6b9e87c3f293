//! Bid model and operations.
//!
//! Bid placement and update inject the project ID into the request body,
//! so these operations are free functions rather than trait impls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::FreelancerClient;
use crate::envelope::Envelope;
use crate::error::{FreelancerError, Result};

const BIDS_PATH: &str = "api/projects/0.1/bids/";

/// A bid placed on a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bid {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// ID of the freelancer who placed the bid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bidder_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,

    /// Bid amount in the project's currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    /// Delivery period in days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retracted: Option<bool>,

    /// Share of the bid paid out on milestone completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone_percentage: Option<f64>,

    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_submitted: Option<DateTime<Utc>>,

    /// Response fields outside the declared set.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Parameters for placing a bid.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BidParams {
    pub bidder_id: u64,
    pub amount: f64,
    pub period: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parameters for updating an existing bid.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BidUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// `result` shape for the bid list endpoint.
#[derive(Debug, Deserialize)]
struct BidListResult {
    #[serde(default)]
    bids: Vec<Bid>,
}

/// Place a bid on a project.
///
/// `project_id` is injected into the bid payload before posting.
#[tracing::instrument(skip(client, bid))]
pub async fn place_bid(
    client: &FreelancerClient,
    project_id: u64,
    bid: &BidParams,
) -> Result<Bid> {
    #[derive(Serialize)]
    struct BidBody<'a> {
        project_id: u64,
        #[serde(flatten)]
        bid: &'a BidParams,
    }

    let body = BidBody { project_id, bid };

    let result = client
        .post_json(BIDS_PATH, &body)
        .await
        .and_then(Envelope::into_result)
        .map_err(FreelancerError::BidNotPlaced)?;

    super::from_result(result).map_err(FreelancerError::BidNotPlaced)
}

/// List bids matching the given filters.
///
/// Filter parameters are passed through verbatim; the nested `result.bids`
/// list is unwrapped into model instances.
#[tracing::instrument(skip(client, query))]
pub async fn get_bids<Q: Serialize + ?Sized>(
    client: &FreelancerClient,
    query: &Q,
) -> Result<Vec<Bid>> {
    let result = client
        .get_with_query(BIDS_PATH, query)
        .await
        .and_then(Envelope::into_result)
        .map_err(FreelancerError::BidsNotFound)?;

    let list: BidListResult = super::from_result(result).map_err(FreelancerError::BidsNotFound)?;
    Ok(list.bids)
}

/// Update an existing bid.
///
/// As with [`place_bid`], `project_id` is injected into the payload.
#[tracing::instrument(skip(client, params))]
pub async fn update_bid(
    client: &FreelancerClient,
    bid_id: u64,
    project_id: u64,
    params: &BidUpdateParams,
) -> Result<Bid> {
    #[derive(Serialize)]
    struct UpdateBody<'a> {
        project_id: u64,
        #[serde(flatten)]
        params: &'a BidUpdateParams,
    }

    let path = format!("{BIDS_PATH}{bid_id}");
    let body = UpdateBody { project_id, params };

    let result = client
        .put_json(&path, &body)
        .await
        .and_then(Envelope::into_result)
        .map_err(FreelancerError::BidNotUpdated)?;

    super::from_result(result).map_err(FreelancerError::BidNotUpdated)
}

/// Retract a bid. Returns `true` on success; there is no model payload.
#[tracing::instrument(skip(client))]
pub async fn retract_bid(client: &FreelancerClient, bid_id: u64) -> Result<bool> {
    let path = format!("{BIDS_PATH}{bid_id}");

    client
        .delete(&path)
        .await
        .and_then(Envelope::into_ack)
        .map_err(FreelancerError::BidNotRetracted)?;

    Ok(true)
}
