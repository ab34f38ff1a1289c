// src/render.rs
//! Pure text renderers over controller state. No I/O here: every function
//! returns a `String`, so rendering policy is unit-testable.

use crate::analysis::SkillInsight;
use crate::pagination::result_range;
use crate::proficiency::{Proficiency, Tier};
use crate::profile::{format_date_range, ProfileController};
use crate::search::SearchController;
use crate::types::{PaginationInfo, PersonResult};
use crate::Phase;

pub const IDLE_NOTICE: &str = "Your search results will appear here.";
pub const LOADING_NOTICE: &str = "Searching...";
pub const PROFILE_LOADING_NOTICE: &str = "Loading profile...";
pub const ANALYSIS_LOADING_NOTICE: &str = "Analyzing skill data...";
pub const NO_ANALYSIS_DATA_NOTICE: &str = "No analysis data available for this skill.";

/// The whole search page for the controller's current phase.
pub fn render_search_page(controller: &SearchController) -> String {
    match controller.phase() {
        Phase::Idle => IDLE_NOTICE.to_string(),
        Phase::Loading => LOADING_NOTICE.to_string(),
        Phase::Failed => controller
            .error()
            .unwrap_or("Search failed.")
            .to_string(),
        Phase::Loaded => {
            if controller.is_empty_result() {
                return format!("No results found for \"{}\".", controller.query());
            }
            let mut out = render_result_list(controller.current_page_results());
            if let Some(info) = controller.pagination() {
                out.push('\n');
                out.push_str(&render_pagination_strip(info));
            }
            out
        }
    }
}

pub fn render_result_list(results: &[PersonResult]) -> String {
    results
        .iter()
        .enumerate()
        .map(|(index, person)| {
            let headline = person
                .professional_headline
                .as_deref()
                .unwrap_or("No headline");
            format!(
                "{:>3}. {} - {} (@{})",
                index + 1,
                person.name,
                headline,
                person.username
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_pagination_strip(info: &PaginationInfo) -> String {
    let (start, end) = result_range(info.current_page, info.page_size, info.total_results);
    format!(
        "{} - {} results of approximately {}  |  Page {} of {}",
        start, end, info.total_results, info.current_page, info.total
    )
}

/// The profile document: header, skills, experience, education.
pub fn render_profile_page(controller: &ProfileController) -> String {
    match controller.phase() {
        Phase::Idle => String::new(),
        Phase::Loading => PROFILE_LOADING_NOTICE.to_string(),
        Phase::Failed => format!(
            "Profile Not Found\n{}",
            controller.error().unwrap_or("Failed to load profile")
        ),
        Phase::Loaded => {
            let Some(profile) = controller.profile() else {
                return "No profile data available".to_string();
            };

            let mut out = String::new();
            let person = &profile.person;
            out.push_str(&format!("# {}\n", person.name));
            if let Some(headline) = &person.professional_headline {
                out.push_str(&format!("{}\n", headline));
            }
            if let Some(location) = &person.location {
                out.push_str(&format!("Location: {}\n", location.name));
            }
            if let Some(bio) = &person.summary_of_bio {
                out.push_str(&format!("\n{}\n", bio));
            }

            let skills = controller.sorted_skills();
            if !skills.is_empty() {
                out.push_str(&format!(
                    "\nSkills & Strengths ({})\n",
                    controller.skill_count()
                ));
                for skill in &skills {
                    let level = Proficiency::parse(skill.proficiency.as_deref());
                    let marker = level.star_marker();
                    if marker.is_empty() {
                        out.push_str(&format!("  - {}\n", skill.name));
                    } else {
                        out.push_str(&format!("  - {} {}\n", skill.name, marker));
                    }
                }
                let hidden = controller.hidden_skill_count();
                if hidden > 0 {
                    out.push_str(&format!(
                        "  ... {} additional skills (use `skills` to show all)\n",
                        hidden
                    ));
                }
            }

            if !profile.experiences.is_empty() {
                out.push_str("\nProfessional Experience\n");
                for exp in &profile.experiences {
                    out.push_str(&render_timeline_entry(
                        &exp.name,
                        exp.organizations.iter().map(|o| o.name.as_str()),
                        format_date_range(
                            exp.from_month.as_deref(),
                            exp.from_year.as_deref(),
                            exp.to_month.as_deref(),
                            exp.to_year.as_deref(),
                        ),
                    ));
                }
            }

            if !profile.education.is_empty() {
                out.push_str("\nEducation\n");
                for edu in &profile.education {
                    out.push_str(&render_timeline_entry(
                        &edu.name,
                        edu.organizations.iter().map(|o| o.name.as_str()),
                        format_date_range(
                            edu.from_month.as_deref(),
                            edu.from_year.as_deref(),
                            edu.to_month.as_deref(),
                            edu.to_year.as_deref(),
                        ),
                    ));
                }
            }

            out
        }
    }
}

fn render_timeline_entry<'a>(
    name: &str,
    organizations: impl Iterator<Item = &'a str>,
    dates: String,
) -> String {
    let orgs: Vec<&str> = organizations.collect();
    if orgs.is_empty() {
        format!("  - {} ({})\n", name, dates)
    } else {
        format!("  - {} at {} ({})\n", name, orgs.join(", "), dates)
    }
}

/// The analysis panel for a skill, honoring the display policies: each
/// monetary figure only when positive, distribution already filtered and
/// sorted by the insight, an explicit notice when nothing is available.
pub fn render_analysis_panel(
    skill: &str,
    user_proficiency: Option<&str>,
    insight: &SkillInsight,
) -> String {
    let mut out = format!("Skill Analysis: {}\n", skill);
    if let Some(level) = user_proficiency {
        out.push_str(&format!("Your level: {}\n", level));
    }

    if insight.is_loading {
        out.push_str(ANALYSIS_LOADING_NOTICE);
        return out;
    }
    if let Some(error) = &insight.error {
        out.push_str(&format!("Analysis Unavailable\n{}", error));
        return out;
    }

    let mut any = false;

    if let Some(comp) = insight.compensation_block() {
        any = true;
        out.push_str("\nCompensation Insights\n");
        if comp.median_compensation > 0.0 {
            out.push_str(&format!(
                "  Suggested: {} ({})\n",
                format_currency(comp.median_compensation, &comp.currency),
                comp.periodicity
            ));
        }
        if comp.average_compensation > 0.0 {
            out.push_str(&format!(
                "  Average:   {} ({})\n",
                format_currency(comp.average_compensation, &comp.currency),
                comp.periodicity
            ));
        }
        if comp.min_compensation > 0.0 || comp.max_compensation > 0.0 {
            out.push_str(&format!(
                "  Range:     {} - {}\n",
                format_currency(comp.min_compensation, &comp.currency),
                format_currency(comp.max_compensation, &comp.currency)
            ));
        }
        if comp.data_points > 0 {
            out.push_str(&format!("  Based on {} data points\n", comp.data_points));
        }
    }

    let rows = insight.distribution_rows();
    if !rows.is_empty() {
        any = true;
        out.push_str("\nProficiency Distribution\n");
        for row in rows {
            let level = Proficiency::parse(Some(&row.level));
            out.push_str(&format!(
                "  {:<12} {:>5.1}%  {} ({} profiles)\n",
                level.label(),
                row.percentage,
                percentage_bar(row.percentage, level.tier()),
                row.count
            ));
        }
    }

    if !any {
        out.push('\n');
        out.push_str(NO_ANALYSIS_DATA_NOTICE);
    }

    out
}

/// Whole units with thousands separators and the currency code,
/// e.g. `95,000 USD`.
pub fn format_currency(value: f64, currency: &str) -> String {
    let whole = value.round().abs() as u64;
    let mut digits = whole.to_string();
    let mut grouped = String::new();
    while digits.len() > 3 {
        let tail = digits.split_off(digits.len() - 3);
        grouped = if grouped.is_empty() {
            tail
        } else {
            format!("{},{}", tail, grouped)
        };
    }
    grouped = if grouped.is_empty() {
        digits
    } else {
        format!("{},{}", digits, grouped)
    };
    let sign = if value < -0.5 { "-" } else { "" };
    format!("{}{} {}", sign, grouped, currency)
}

/// One bar glyph per 5%, with the glyph carrying the tier the way the
/// original carried it in the badge color.
fn percentage_bar(percentage: f64, tier: Tier) -> String {
    let glyph = match tier {
        Tier::Top => '#',
        Tier::Mid => '=',
        Tier::Low => '-',
        Tier::Default => '.',
    };
    let filled = (percentage.clamp(0.0, 100.0) / 5.0).round() as usize;
    glyph.to_string().repeat(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SkillInsight;
    use crate::types::{ProficiencyLevel, SkillCompensationResponse};

    fn person(name: &str, username: &str) -> PersonResult {
        PersonResult {
            id: format!("id-{}", username),
            name: name.to_string(),
            professional_headline: Some("Engineer".to_string()),
            picture: None,
            username: username.to_string(),
        }
    }

    #[test]
    fn result_list_shows_name_headline_and_username() {
        let rendered = render_result_list(&[person("Ada Lovelace", "adalovelace")]);
        assert!(rendered.contains("Ada Lovelace"));
        assert!(rendered.contains("Engineer"));
        assert!(rendered.contains("@adalovelace"));
    }

    #[test]
    fn pagination_strip_shows_range_and_page() {
        let info = PaginationInfo::derive(100, 5, 21);
        let strip = render_pagination_strip(&info);
        assert!(strip.contains("85 - 100 results of approximately 100"));
        assert!(strip.contains("Page 5 of 5"));
    }

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(95000.0, "USD"), "95,000 USD");
        assert_eq!(format_currency(1234567.0, "EUR"), "1,234,567 EUR");
        assert_eq!(format_currency(950.0, "USD"), "950 USD");
    }

    #[test]
    fn analysis_panel_reports_no_data_when_both_sections_absent() {
        let insight = SkillInsight::default();
        let rendered = render_analysis_panel("rust", None, &insight);
        assert!(rendered.contains(NO_ANALYSIS_DATA_NOTICE));
    }

    #[test]
    fn analysis_panel_hides_non_positive_figures() {
        let insight = SkillInsight {
            compensation: Some(SkillCompensationResponse {
                source: "people-api".into(),
                skill: "rust".into(),
                average_compensation: 0.0,
                median_compensation: 90000.0,
                min_compensation: 0.0,
                max_compensation: 0.0,
                currency: "USD".into(),
                periodicity: "yearly".into(),
                data_points: 12,
            }),
            distribution: None,
            is_loading: false,
            error: None,
        };

        let rendered = render_analysis_panel("rust", Some("expert"), &insight);
        assert!(rendered.contains("Suggested: 90,000 USD"));
        assert!(!rendered.contains("Average:"));
        assert!(!rendered.contains("Range:"));
        assert!(rendered.contains("Your level: expert"));
    }

    #[test]
    fn analysis_panel_labels_distribution_levels() {
        let insight = SkillInsight {
            compensation: None,
            distribution: Some(vec![ProficiencyLevel {
                level: "no-experience-interested".into(),
                percentage: 40.0,
                count: 8,
                average_experience: None,
            }]),
            is_loading: false,
            error: None,
        };

        let rendered = render_analysis_panel("rust", None, &insight);
        assert!(rendered.contains("Interested"));
        assert!(rendered.contains("40.0%"));
        assert!(rendered.contains("8 profiles"));
    }
}
