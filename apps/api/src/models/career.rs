use serde::{Deserialize, Serialize};

use crate::generation::career::CareerRoadmap;
use crate::models::record::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DreamJob {
    pub job_title: String,
    pub industry: String,
    /// What draws the user to this role.
    pub appeal: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentProfile {
    pub current_job: String,
    pub top_skills: String,
    pub years_experience: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// How long the user is willing to take to reach the goal.
    #[serde(rename = "timeline")]
    pub timeline_horizon: String,
    pub learning_preference: String,
}

/// Request body for `POST /api/career`, after validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerInput {
    pub title: String,
    pub dream_job: DreamJob,
    pub current_profile: CurrentProfile,
    pub preferences: Preferences,
}

pub const CAREER_REQUIRED_FIELDS: &[(&str, &str)] = &[
    ("title", "Title is required"),
    ("dreamJob.jobTitle", "Dream job title is required"),
    ("dreamJob.industry", "Industry is required"),
    ("dreamJob.appeal", "Job appeal is required"),
    ("currentProfile.currentJob", "Current job is required"),
    ("currentProfile.topSkills", "Top skills are required"),
    ("currentProfile.yearsExperience", "Years of experience is required"),
    ("preferences.timeline", "Timeline is required"),
    ("preferences.learningPreference", "Learning preference is required"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerBody {
    pub dream_job: DreamJob,
    pub current_profile: CurrentProfile,
    pub preferences: Preferences,
    pub roadmap: CareerRoadmap,
}

pub type CareerRecord = Record<CareerBody>;
