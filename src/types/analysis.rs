// src/types/analysis.rs
//! Wire models for the skill analytics endpoints

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCompensationResponse {
    pub source: String,
    pub skill: String,
    pub average_compensation: f64,
    pub median_compensation: f64,
    pub min_compensation: f64,
    pub max_compensation: f64,
    pub currency: String,
    pub periodicity: String,
    pub data_points: u64,
}

impl SkillCompensationResponse {
    /// The panel only shows the compensation block when there is at least
    /// one positive figure to display.
    pub fn has_positive_figure(&self) -> bool {
        [
            self.average_compensation,
            self.median_compensation,
            self.min_compensation,
            self.max_compensation,
        ]
        .iter()
        .any(|v| *v > 0.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDistributionResponse {
    pub source: String,
    pub skill: String,
    #[serde(default)]
    pub distribution: Vec<ProficiencyLevel>,
    pub total_profiles: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProficiencyLevel {
    pub level: String,
    pub percentage: f64,
    pub count: u64,
    pub average_experience: Option<String>,
}
