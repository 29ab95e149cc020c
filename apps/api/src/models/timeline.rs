use serde::{Deserialize, Serialize};

use crate::generation::timeline::TimelinePrediction;
use crate::models::record::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub age: String,
    /// Highest education level reached.
    #[serde(rename = "education")]
    pub education_level: String,
    pub current_field: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goals {
    pub career_goals: String,
    pub financial_goals: String,
    pub personal_goals: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habits {
    pub learning_habits: String,
    pub health_habits: String,
    pub financial_habits: String,
}

/// Request body for `POST /api/timeline`, after validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineInput {
    pub title: String,
    pub personal_info: PersonalInfo,
    pub goals: Goals,
    pub habits: Habits,
}

/// Required string fields of a timeline request, with the message shown
/// when one is missing or blank.
pub const TIMELINE_REQUIRED_FIELDS: &[(&str, &str)] = &[
    ("title", "Title is required"),
    ("personalInfo.age", "Age is required"),
    ("personalInfo.education", "Education level is required"),
    ("personalInfo.currentField", "Current field is required"),
    ("goals.careerGoals", "Career goals are required"),
    ("goals.financialGoals", "Financial goals are required"),
    ("goals.personalGoals", "Personal goals are required"),
    ("habits.learningHabits", "Learning habits are required"),
    ("habits.healthHabits", "Health habits are required"),
    ("habits.financialHabits", "Financial habits are required"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineBody {
    pub personal_info: PersonalInfo,
    pub goals: Goals,
    pub habits: Habits,
    pub prediction: TimelinePrediction,
}

pub type TimelineRecord = Record<TimelineBody>;
