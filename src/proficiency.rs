// src/proficiency.rs
//! Closed ordinal model for self-reported proficiency strings.
//!
//! The backend sends free-form proficiency labels. Sorting, star display
//! and styling all consult this one table instead of matching strings ad
//! hoc at each call site.

/// Style bucket for a proficiency level, consumed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Top,
    Mid,
    Low,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proficiency {
    Master,
    Expert,
    Proficient,
    Advanced,
    Novice,
    Beginner,
    /// The wire value `no-experience-interested`.
    Interested,
    Unknown,
}

impl Proficiency {
    /// Total parse: unrecognized or absent labels map to `Unknown`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("master") => Self::Master,
            Some("expert") => Self::Expert,
            Some("proficient") => Self::Proficient,
            Some("advanced") => Self::Advanced,
            Some("novice") => Self::Novice,
            Some("beginner") => Self::Beginner,
            Some("no-experience-interested") => Self::Interested,
            _ => Self::Unknown,
        }
    }

    /// Sort key in half-star units, descending with seniority.
    pub fn rank(self) -> u8 {
        match self {
            Self::Master | Self::Expert => 6,
            Self::Proficient | Self::Advanced => 4,
            Self::Novice | Self::Beginner => 2,
            Self::Interested => 1,
            Self::Unknown => 0,
        }
    }

    /// Star count shown next to a skill: 3 / 2 / 1 / 0.5 / 0.
    pub fn stars(self) -> f32 {
        f32::from(self.rank()) / 2.0
    }

    pub fn tier(self) -> Tier {
        match self {
            Self::Master | Self::Expert => Tier::Top,
            Self::Proficient | Self::Advanced => Tier::Mid,
            Self::Novice | Self::Beginner => Tier::Low,
            Self::Interested | Self::Unknown => Tier::Default,
        }
    }

    /// Display name. `no-experience-interested` reads poorly verbatim, and
    /// unknown levels render as "Unspecified".
    pub fn label(self) -> &'static str {
        match self {
            Self::Master => "Master",
            Self::Expert => "Expert",
            Self::Proficient => "Proficient",
            Self::Advanced => "Advanced",
            Self::Novice => "Novice",
            Self::Beginner => "Beginner",
            Self::Interested => "Interested",
            Self::Unknown => "Unspecified",
        }
    }

    /// Star marker string: filled stars per whole star, a hollow star for
    /// the half level, nothing for unknown.
    pub fn star_marker(self) -> &'static str {
        match self.rank() {
            6 => "***",
            4 => "**",
            2 => "*",
            1 => "(*)",
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive_and_total() {
        assert_eq!(Proficiency::parse(Some("Expert")), Proficiency::Expert);
        assert_eq!(Proficiency::parse(Some("MASTER")), Proficiency::Master);
        assert_eq!(
            Proficiency::parse(Some("no-experience-interested")),
            Proficiency::Interested
        );
        assert_eq!(Proficiency::parse(Some("wizard")), Proficiency::Unknown);
        assert_eq!(Proficiency::parse(None), Proficiency::Unknown);
    }

    #[test]
    fn rank_orders_the_scale() {
        let order = [
            Proficiency::Master,
            Proficiency::Proficient,
            Proficiency::Novice,
            Proficiency::Interested,
            Proficiency::Unknown,
        ];
        for pair in order.windows(2) {
            assert!(pair[0].rank() > pair[1].rank());
        }
        assert_eq!(Proficiency::Expert.rank(), Proficiency::Master.rank());
        assert_eq!(Proficiency::Advanced.rank(), Proficiency::Proficient.rank());
        assert_eq!(Proficiency::Beginner.rank(), Proficiency::Novice.rank());
    }

    #[test]
    fn stars_match_the_display_scale() {
        assert_eq!(Proficiency::Expert.stars(), 3.0);
        assert_eq!(Proficiency::Advanced.stars(), 2.0);
        assert_eq!(Proficiency::Beginner.stars(), 1.0);
        assert_eq!(Proficiency::Interested.stars(), 0.5);
        assert_eq!(Proficiency::Unknown.stars(), 0.0);
    }

    #[test]
    fn tiers_group_paired_levels() {
        assert_eq!(Proficiency::Master.tier(), Proficiency::Expert.tier());
        assert_eq!(Proficiency::Proficient.tier(), Proficiency::Advanced.tier());
        assert_eq!(Proficiency::Novice.tier(), Proficiency::Beginner.tier());
        assert_eq!(Proficiency::Unknown.tier(), Tier::Default);
    }

    #[test]
    fn labels_humanize_awkward_wire_values() {
        assert_eq!(Proficiency::Interested.label(), "Interested");
        assert_eq!(Proficiency::Unknown.label(), "Unspecified");
        assert_eq!(Proficiency::Expert.label(), "Expert");
    }
}
