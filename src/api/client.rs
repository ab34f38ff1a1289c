// src/api/client.rs
//! Typed client for the people-search backend.
//!
//! Four operations, each a single HTTP call: no retries, no caching, no
//! side effects beyond the request itself. Non-2xx responses are
//! normalized into [`ApiError`] values carrying the message the UI shows.

use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{error, info};
use url::Url;

use crate::api::error::ApiError;
use crate::config::AppConfig;
use crate::types::{
    ErrorBody, PersonDetailsResponse, SearchResponse, SkillCompensationResponse,
    SkillDistributionResponse,
};

const SEARCH_ENDPOINT: &[&str] = &["search", "people"];
const PROFILE_ENDPOINT: &[&str] = &["profile"];
const COMPENSATION_ENDPOINT: &[&str] = &["analyze", "skill-compensation"];
const DISTRIBUTION_ENDPOINT: &[&str] = &["analyze", "skill-distribution"];

#[derive(Debug, Clone, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    limit: usize,
}

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.backend_url.clone(),
        })
    }

    /// `POST /search/people` with `{query, limit}`. Error messages prefer
    /// the backend body's `message` field over a generic status line.
    pub async fn search_people(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<SearchResponse, ApiError> {
        let url = self.endpoint(SEARCH_ENDPOINT, &[])?;
        info!("Searching people: query={:?}, limit={}", query, limit);

        let response = self
            .client
            .post(url)
            .json(&SearchRequest { query, limit })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
            error!("Search failed with status {}: {}", status, message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }

    /// `GET /profile/{username}`, username percent-encoded as one path
    /// segment. 404 carries a message naming the username.
    pub async fn get_person_details(
        &self,
        username: &str,
    ) -> Result<PersonDetailsResponse, ApiError> {
        let url = self.endpoint(PROFILE_ENDPOINT, &[username])?;
        info!("Fetching profile for {}", username);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                username: username.to_string(),
            });
        }
        if !status.is_success() {
            error!("Profile fetch for {} failed with status {}", username, status);
            return Err(status_error("Failed to fetch profile", status));
        }

        Ok(response.json().await?)
    }

    /// `GET /analyze/skill-compensation?skill=…[&proficiency=…]`.
    pub async fn analyze_skill_compensation(
        &self,
        skill: &str,
        proficiency: Option<&str>,
    ) -> Result<SkillCompensationResponse, ApiError> {
        let url = self.endpoint(COMPENSATION_ENDPOINT, &[])?;
        info!("Analyzing compensation for skill {:?}", skill);

        let mut request = self.client.get(url).query(&[("skill", skill)]);
        if let Some(level) = proficiency {
            request = request.query(&[("proficiency", level)]);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            error!("Compensation analysis failed with status {}", status);
            return Err(status_error("Failed to analyze skill compensation", status));
        }

        Ok(response.json().await?)
    }

    /// `GET /analyze/skill-distribution?skill=…`.
    pub async fn get_skill_distribution(
        &self,
        skill: &str,
    ) -> Result<SkillDistributionResponse, ApiError> {
        let url = self.endpoint(DISTRIBUTION_ENDPOINT, &[])?;
        info!("Fetching proficiency distribution for skill {:?}", skill);

        let response = self.client.get(url).query(&[("skill", skill)]).send().await?;

        let status = response.status();
        if !status.is_success() {
            error!("Distribution fetch failed with status {}", status);
            return Err(status_error("Failed to fetch skill distribution", status));
        }

        Ok(response.json().await?)
    }

    fn endpoint(&self, path: &[&str], extra: &[&str]) -> Result<Url, ApiError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.clone()))?
            .extend(path)
            .extend(extra);
        Ok(url)
    }
}

fn status_error(operation: &str, status: StatusCode) -> ApiError {
    let reason = status.canonical_reason().unwrap_or("Unknown");
    ApiError::Status {
        status: status.as_u16(),
        message: format!("{}: {} {}", operation, status.as_u16(), reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> ApiClient {
        ApiClient::new(&AppConfig::default()).unwrap()
    }

    #[test]
    fn endpoint_joins_base_and_path() {
        let client = test_client();
        let url = client.endpoint(SEARCH_ENDPOINT, &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/search/people");
    }

    #[test]
    fn endpoint_percent_encodes_path_segments() {
        let client = test_client();
        let url = client
            .endpoint(PROFILE_ENDPOINT, &["user name/odd"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/profile/user%20name%2Fodd"
        );
    }

    #[test]
    fn status_error_uses_the_canonical_reason() {
        let err = status_error("Failed to fetch profile", StatusCode::BAD_GATEWAY);
        assert_eq!(
            err.to_string(),
            "Failed to fetch profile: 502 Bad Gateway"
        );
    }

    #[test]
    fn search_request_serializes_to_the_wire_shape() {
        let body = serde_json::to_value(SearchRequest {
            query: "ada",
            limit: 100,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"query": "ada", "limit": 100}));
    }
}
