//! Life timeline generation: profile + goals + habits in, four-horizon prediction out.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::LIFE_TIMELINE_PROMPT_TEMPLATE;
use crate::llm_client::prompts::{fill_template, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{complete_json, TextGenerator};
use crate::models::timeline::{Goals, Habits, PersonalInfo};

/// One point on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizonEntry {
    pub age: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub career: String,
    pub financial: String,
    pub health: String,
}

/// Full structured output of a life timeline generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePrediction {
    pub present: HorizonEntry,
    #[serde(alias = "plusFiveYears")]
    pub five_years: HorizonEntry,
    #[serde(alias = "plusTenYears")]
    pub ten_years: HorizonEntry,
    #[serde(alias = "plusTwentyYears")]
    pub twenty_years: HorizonEntry,
    pub insights: Insights,
}

/// Renders the life timeline prompt. Field values go in verbatim.
pub fn build_timeline_prompt(
    personal_info: &PersonalInfo,
    goals: &Goals,
    habits: &Habits,
) -> String {
    fill_template(
        LIFE_TIMELINE_PROMPT_TEMPLATE,
        &[
            ("age", personal_info.age.as_str()),
            ("education", personal_info.education_level.as_str()),
            ("current_field", personal_info.current_field.as_str()),
            ("career_goals", goals.career_goals.as_str()),
            ("financial_goals", goals.financial_goals.as_str()),
            ("personal_goals", goals.personal_goals.as_str()),
            ("learning_habits", habits.learning_habits.as_str()),
            ("health_habits", habits.health_habits.as_str()),
            ("financial_habits", habits.financial_habits.as_str()),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    )
}

/// Asks the LLM for a life timeline and parses it into a `TimelinePrediction`.
pub async fn generate_life_timeline(
    generator: &dyn TextGenerator,
    personal_info: &PersonalInfo,
    goals: &Goals,
    habits: &Habits,
) -> Result<TimelinePrediction, AppError> {
    let prompt = build_timeline_prompt(personal_info, goals, habits);

    let prediction = complete_json::<TimelinePrediction>(generator, &prompt)
        .await
        .map_err(|e| AppError::from_llm("Life timeline generation failed", e))?;

    info!(
        "Life timeline generated via {} (present age {})",
        generator.provider(),
        prediction.present.age
    );
    Ok(prediction)
}
