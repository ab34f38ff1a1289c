// src/profile.rs
//! Profile view controller: one fetch per identifier, derived skill views.

use tracing::{debug, error, info};

use crate::api::{ApiClient, ApiError};
use crate::proficiency::Proficiency;
use crate::types::{PersonDetailsResponse, Skill};
use crate::Phase;

/// Skills shown before the "show all" toggle is switched on.
pub const SKILL_PREVIEW_LIMIT: usize = 20;

pub const MISSING_USERNAME_MESSAGE: &str = "Username not provided";

pub struct ProfileController {
    username: String,
    profile: Option<PersonDetailsResponse>,
    phase: Phase,
    error: Option<String>,
    show_all_skills: bool,
    selected_skill: Option<String>,
    generation: u64,
}

impl Default for ProfileController {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileController {
    pub fn new() -> Self {
        Self {
            username: String::new(),
            profile: None,
            phase: Phase::Idle,
            error: None,
            show_all_skills: false,
            selected_skill: None,
            generation: 0,
        }
    }

    /// Start loading a profile. A missing identifier fails straight into
    /// the error-display path without touching the network; `None` means
    /// there is nothing to fetch.
    pub fn begin_load(&mut self, username: &str) -> Option<u64> {
        let username = username.trim();
        if username.is_empty() {
            self.username.clear();
            self.profile = None;
            self.phase = Phase::Failed;
            self.error = Some(MISSING_USERNAME_MESSAGE.to_string());
            return None;
        }

        self.username = username.to_string();
        self.profile = None;
        self.error = None;
        self.show_all_skills = false;
        self.selected_skill = None;
        self.phase = Phase::Loading;
        self.generation += 1;
        Some(self.generation)
    }

    /// Apply a completed fetch; stale generations are discarded.
    pub fn finish_load(
        &mut self,
        generation: u64,
        outcome: Result<PersonDetailsResponse, ApiError>,
    ) {
        if generation != self.generation {
            debug!(
                "Discarding stale profile response (generation {} < {})",
                generation, self.generation
            );
            return;
        }

        match outcome {
            Ok(profile) => {
                info!(
                    "Loaded profile for {} ({} strengths)",
                    self.username,
                    profile.strengths.len()
                );
                self.profile = Some(profile);
                self.phase = Phase::Loaded;
                self.error = None;
            }
            Err(err) => {
                error!("Profile load for {} failed: {}", self.username, err);
                self.profile = None;
                self.phase = Phase::Failed;
                self.error = Some(err.to_string());
            }
        }
    }

    pub async fn run_load(&mut self, client: &ApiClient, username: &str) {
        if let Some(generation) = self.begin_load(username) {
            let outcome = client.get_person_details(self.username.as_str()).await;
            self.finish_load(generation, outcome);
        }
    }

    /// Strengths in display order: stable descending sort by proficiency
    /// rank (ties keep backend order), truncated to the preview limit
    /// unless the "show all" toggle is on.
    pub fn sorted_skills(&self) -> Vec<&Skill> {
        let Some(profile) = &self.profile else {
            return Vec::new();
        };

        let mut skills: Vec<&Skill> = profile.strengths.iter().collect();
        skills.sort_by_key(|s| std::cmp::Reverse(Proficiency::parse(s.proficiency.as_deref()).rank()));

        if !self.show_all_skills {
            skills.truncate(SKILL_PREVIEW_LIMIT);
        }
        skills
    }

    /// How many skills the preview truncation currently hides.
    pub fn hidden_skill_count(&self) -> usize {
        if self.show_all_skills {
            return 0;
        }
        self.skill_count().saturating_sub(SKILL_PREVIEW_LIMIT)
    }

    pub fn skill_count(&self) -> usize {
        self.profile.as_ref().map_or(0, |p| p.strengths.len())
    }

    pub fn toggle_show_all_skills(&mut self) {
        self.show_all_skills = !self.show_all_skills;
    }

    /// Select a skill by name; this both opens the analysis panel and is
    /// used to resolve the person's own proficiency from the loaded
    /// profile (no extra fetch).
    pub fn select_skill(&mut self, name: &str) {
        self.selected_skill = Some(name.to_string());
    }

    pub fn close_analysis(&mut self) {
        self.selected_skill = None;
    }

    pub fn selected_skill(&self) -> Option<&str> {
        self.selected_skill.as_deref()
    }

    pub fn selected_skill_proficiency(&self) -> Option<&str> {
        let selected = self.selected_skill.as_deref()?;
        let profile = self.profile.as_ref()?;
        profile
            .strengths
            .iter()
            .find(|s| s.name == selected)
            .and_then(|s| s.proficiency.as_deref())
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn profile(&self) -> Option<&PersonDetailsResponse> {
        self.profile.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn show_all_skills(&self) -> bool {
        self.show_all_skills
    }
}

/// `"{from} - {to}"`; a missing end year reads "Present" and a missing
/// start year collapses the range to the end side alone.
pub fn format_date_range(
    from_month: Option<&str>,
    from_year: Option<&str>,
    to_month: Option<&str>,
    to_year: Option<&str>,
) -> String {
    let join = |month: Option<&str>, year: &str| match month {
        Some(m) if !m.is_empty() => format!("{} {}", m, year),
        _ => year.to_string(),
    };

    let from = from_year.map(|y| join(from_month, y));
    let to = to_year.map_or_else(|| "Present".to_string(), |y| join(to_month, y));

    match from {
        Some(from) => format!("{} - {}", from, to),
        None => to,
    }
}
