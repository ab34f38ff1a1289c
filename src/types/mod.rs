// src/types/mod.rs

pub mod analysis;
pub mod person;

pub use analysis::{ProficiencyLevel, SkillCompensationResponse, SkillDistributionResponse};
pub use person::{
    Education, ErrorBody, Experience, Location, Organization, PaginationInfo, PersonDetails,
    PersonDetailsResponse, PersonResult, SearchResponse, Skill,
};
