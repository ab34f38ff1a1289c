// src/types/person.rs
//! Wire models for the search and profile endpoints

use serde::{Deserialize, Serialize};

/// One search hit. `username` is the routing key for the profile endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonResult {
    pub id: String,
    pub name: String,
    pub professional_headline: Option<String>,
    pub picture: Option<String>,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub results: Vec<PersonResult>,
    pub pagination: Option<PaginationInfo>,
}

/// Derived client-side from the in-memory result set; the backend value,
/// when present, is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub total: usize,
    pub current_page: usize,
    pub page_size: usize,
    pub total_results: usize,
}

/// Aggregate profile document returned by `GET /profile/{username}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDetailsResponse {
    pub person: PersonDetails,
    #[serde(default)]
    pub strengths: Vec<Skill>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDetails {
    pub id: String,
    pub name: String,
    pub professional_headline: Option<String>,
    pub picture: Option<String>,
    pub summary_of_bio: Option<String>,
    pub public_id: String,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub name: String,
    pub short_name: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
    pub place_id: Option<String>,
}

/// A strength on the profile. `proficiency` is a free-form string on the
/// wire; see [`crate::proficiency::Proficiency`] for the ordinal model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub experience: Option<String>,
    pub proficiency: Option<String>,
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub organizations: Vec<Organization>,
    pub from_month: Option<String>,
    pub from_year: Option<String>,
    pub to_month: Option<String>,
    pub to_year: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub organizations: Vec<Organization>,
    pub from_month: Option<String>,
    pub from_year: Option<String>,
    pub to_month: Option<String>,
    pub to_year: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub picture: Option<String>,
}

/// Shape of backend error payloads; only `message` is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_response_parses_camel_case() {
        let json = r#"{
            "results": [
                {
                    "id": "ggid-1",
                    "name": "Ada Lovelace",
                    "professionalHeadline": "Analyst",
                    "picture": null,
                    "username": "adalovelace"
                }
            ],
            "pagination": null
        }"#;

        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.results.len(), 1);
        assert_eq!(parsed.results[0].username, "adalovelace");
        assert_eq!(
            parsed.results[0].professional_headline.as_deref(),
            Some("Analyst")
        );
    }

    #[test]
    fn profile_collections_default_when_absent() {
        let json = r#"{
            "person": {
                "id": "ggid-2",
                "name": "Grace Hopper",
                "professionalHeadline": null,
                "picture": null,
                "summaryOfBio": null,
                "publicId": "gracehopper",
                "location": {"name": "Arlington, VA", "shortName": null,
                             "country": "United States", "countryCode": "US",
                             "latitude": null, "longitude": null,
                             "timezone": null, "placeId": null}
            }
        }"#;

        let parsed: PersonDetailsResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.strengths.is_empty());
        assert!(parsed.experiences.is_empty());
        assert!(parsed.education.is_empty());
        assert_eq!(parsed.person.public_id, "gracehopper");
    }

    #[test]
    fn experience_dates_tolerate_nulls() {
        let json = r#"{
            "id": "e1",
            "name": "Engineer",
            "organizations": [{"id": "o1", "name": "Acme", "picture": null}],
            "fromMonth": "Jan",
            "fromYear": "2020",
            "toMonth": null,
            "toYear": null
        }"#;

        let parsed: Experience = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.organizations[0].name, "Acme");
        assert!(parsed.to_year.is_none());
    }
}
