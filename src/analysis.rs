// src/analysis.rs
//! Skill analysis: two independent analytics fetches joined into one view.
//!
//! The compensation and distribution calls run concurrently and degrade
//! independently: one branch failing never blanks the other. Aggregation
//! is a pure function over the two outcomes so the isolation contract is
//! testable without a network.

use tokio::join;
use tracing::{info, warn};

use crate::api::{ApiClient, ApiError};
use crate::types::{ProficiencyLevel, SkillCompensationResponse, SkillDistributionResponse};

/// Aggregated view model for the analysis panel.
#[derive(Debug, Clone, Default)]
pub struct SkillInsight {
    pub compensation: Option<SkillCompensationResponse>,
    pub distribution: Option<Vec<ProficiencyLevel>>,
    pub is_loading: bool,
    /// Reserved for aggregation-level failure; a single fetch failing
    /// degrades its own section instead of setting this.
    pub error: Option<String>,
}

impl SkillInsight {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    /// Join the two fetch outcomes. Each failure is swallowed into an
    /// absent section; the caller logs it.
    pub fn from_parts(
        compensation: Result<SkillCompensationResponse, ApiError>,
        distribution: Result<SkillDistributionResponse, ApiError>,
    ) -> Self {
        Self {
            compensation: compensation.ok(),
            distribution: distribution.ok().map(|d| d.distribution),
            is_loading: false,
            error: None,
        }
    }

    /// Compensation section, shown only when at least one monetary figure
    /// is positive.
    pub fn compensation_block(&self) -> Option<&SkillCompensationResponse> {
        self.compensation.as_ref().filter(|c| c.has_positive_figure())
    }

    /// Distribution rows for display: zero-count levels dropped, sorted
    /// descending by percentage.
    pub fn distribution_rows(&self) -> Vec<&ProficiencyLevel> {
        let Some(levels) = &self.distribution else {
            return Vec::new();
        };

        let mut rows: Vec<&ProficiencyLevel> =
            levels.iter().filter(|l| l.count > 0).collect();
        rows.sort_by(|a, b| {
            b.percentage
                .partial_cmp(&a.percentage)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        rows
    }

    /// True when neither section has anything to show.
    pub fn has_no_data(&self) -> bool {
        !self.is_loading
            && self.compensation_block().is_none()
            && self.distribution_rows().is_empty()
    }
}

/// Drives the analysis panel: re-invoked fresh on every open, no caching.
pub struct SkillAnalysisController {
    skill: Option<String>,
    proficiency: Option<String>,
    insight: SkillInsight,
}

impl Default for SkillAnalysisController {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillAnalysisController {
    pub fn new() -> Self {
        Self {
            skill: None,
            proficiency: None,
            insight: SkillInsight::default(),
        }
    }

    /// Open the panel for a skill and fetch both analytics concurrently.
    /// Both requests start before either is awaited.
    pub async fn load(&mut self, client: &ApiClient, skill: &str, proficiency: Option<&str>) {
        self.skill = Some(skill.to_string());
        self.proficiency = proficiency.map(String::from);
        self.insight = SkillInsight::loading();

        info!("Loading skill analysis for {:?}", skill);
        let (compensation, distribution) = join!(
            client.analyze_skill_compensation(skill, proficiency),
            client.get_skill_distribution(skill),
        );

        if let Err(err) = &compensation {
            warn!("Compensation analysis for {:?} unavailable: {}", skill, err);
        }
        if let Err(err) = &distribution {
            warn!("Distribution analysis for {:?} unavailable: {}", skill, err);
        }

        self.insight = SkillInsight::from_parts(compensation, distribution);
    }

    pub fn close(&mut self) {
        self.skill = None;
        self.proficiency = None;
        self.insight = SkillInsight::default();
    }

    pub fn skill(&self) -> Option<&str> {
        self.skill.as_deref()
    }

    pub fn proficiency(&self) -> Option<&str> {
        self.proficiency.as_deref()
    }

    pub fn insight(&self) -> &SkillInsight {
        &self.insight
    }
}
