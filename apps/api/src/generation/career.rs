//! Career roadmap generation: dream job + current profile in, staged roadmap out.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::CAREER_ROADMAP_PROMPT_TEMPLATE;
use crate::llm_client::prompts::{fill_template, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{complete_json, TextGenerator};
use crate::models::career::{CurrentProfile, DreamJob, Preferences};

/// One role on the way to the target position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerStage {
    pub title: String,
    pub timeframe: String,
    pub description: String,
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_current: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_target: Option<bool>,
}

/// `icon` is a Font Awesome name the client renders next to the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub icon: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub education: Vec<Recommendation>,
    pub experience: Vec<Recommendation>,
    pub network: Vec<Recommendation>,
}

/// Full structured output of a career roadmap generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRoadmap {
    pub target_position: String,
    pub timeframe: String,
    pub stages: Vec<CareerStage>,
    pub recommendations: Recommendations,
}

impl CareerRoadmap {
    /// The stage flagged as the user's current role, if the model marked one.
    pub fn current_stage(&self) -> Option<&CareerStage> {
        self.stages.iter().find(|s| s.is_current == Some(true))
    }
}

/// Renders the career roadmap prompt. Field values go in verbatim.
pub fn build_roadmap_prompt(
    dream_job: &DreamJob,
    current_profile: &CurrentProfile,
    preferences: &Preferences,
) -> String {
    fill_template(
        CAREER_ROADMAP_PROMPT_TEMPLATE,
        &[
            ("job_title", dream_job.job_title.as_str()),
            ("industry", dream_job.industry.as_str()),
            ("appeal", dream_job.appeal.as_str()),
            ("current_job", current_profile.current_job.as_str()),
            ("top_skills", current_profile.top_skills.as_str()),
            ("years_experience", current_profile.years_experience.as_str()),
            ("timeline", preferences.timeline_horizon.as_str()),
            ("learning_preference", preferences.learning_preference.as_str()),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    )
}

/// Asks the LLM for a career roadmap and parses it into a `CareerRoadmap`.
pub async fn generate_career_roadmap(
    generator: &dyn TextGenerator,
    dream_job: &DreamJob,
    current_profile: &CurrentProfile,
    preferences: &Preferences,
) -> Result<CareerRoadmap, AppError> {
    let prompt = build_roadmap_prompt(dream_job, current_profile, preferences);

    let roadmap = complete_json::<CareerRoadmap>(generator, &prompt)
        .await
        .map_err(|e| AppError::from_llm("Career roadmap generation failed", e))?;

    info!(
        "Career roadmap to '{}' generated via {} with {} stages (current: {:?})",
        roadmap.target_position,
        generator.provider(),
        roadmap.stages.len(),
        roadmap.current_stage().map(|s| s.title.as_str())
    );
    Ok(roadmap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::StubGenerator;
    use serde_json::{json, Value};

    fn sample_inputs() -> (DreamJob, CurrentProfile, Preferences) {
        (
            DreamJob {
                job_title: "Chief Technology Officer".to_string(),
                industry: "Fintech".to_string(),
                appeal: "Shaping product strategy".to_string(),
            },
            CurrentProfile {
                current_job: "Backend Engineer".to_string(),
                top_skills: "Rust, Postgres, system design".to_string(),
                years_experience: "4".to_string(),
            },
            Preferences {
                timeline_horizon: "10 years".to_string(),
                learning_preference: "Hands-on projects".to_string(),
            },
        )
    }

    fn roadmap_json() -> Value {
        json!({
            "targetPosition": "Chief Technology Officer",
            "timeframe": "8-10 years",
            "stages": [
                {
                    "title": "Backend Engineer",
                    "timeframe": "Now",
                    "description": "Building core services",
                    "skills": ["Rust", "Postgres"],
                    "isCurrent": true,
                    "isTarget": false
                },
                {
                    "title": "Engineering Manager",
                    "timeframe": "3-5 years",
                    "description": "Leading a team",
                    "skills": ["Hiring", "Planning"]
                },
                {
                    "title": "Chief Technology Officer",
                    "timeframe": "8-10 years",
                    "description": "Owning technology strategy",
                    "skills": ["Strategy", "Board communication"],
                    "isTarget": true
                }
            ],
            "recommendations": {
                "education": [{"icon": "graduation-cap", "text": "Executive leadership course"}],
                "experience": [{"icon": "project-diagram", "text": "Lead a platform migration"}],
                "network": [{"icon": "handshake", "text": "Join a CTO roundtable"}]
            }
        })
    }

    #[test]
    fn test_prompt_embeds_every_field_verbatim() {
        let (dream_job, profile, prefs) = sample_inputs();
        let prompt = build_roadmap_prompt(&dream_job, &profile, &prefs);

        for value in [
            "- Job title: Chief Technology Officer",
            "- Industry: Fintech",
            "Shaping product strategy",
            "- Current role: Backend Engineer",
            "Rust, Postgres, system design",
            "- Years of experience: 4",
            "- Time frame to reach the goal: 10 years",
            "Hands-on projects",
        ] {
            assert!(prompt.contains(value), "prompt is missing {value:?}");
        }
    }

    #[tokio::test]
    async fn test_generate_round_trips_model_json() {
        let stub = StubGenerator::replying(format!("```json\n{}\n```", roadmap_json()));
        let (dream_job, profile, prefs) = sample_inputs();

        let roadmap = generate_career_roadmap(&stub, &dream_job, &profile, &prefs)
            .await
            .unwrap();
        assert_eq!(serde_json::to_value(&roadmap).unwrap(), roadmap_json());
        assert_eq!(roadmap.stages.len(), 3);
        assert_eq!(roadmap.current_stage().unwrap().title, "Backend Engineer");
    }

    #[tokio::test]
    async fn test_optional_stage_flags_may_be_absent() {
        let stub = StubGenerator::replying(roadmap_json().to_string());
        let (dream_job, profile, prefs) = sample_inputs();

        let roadmap = generate_career_roadmap(&stub, &dream_job, &profile, &prefs)
            .await
            .unwrap();
        assert_eq!(roadmap.stages[1].is_current, None);
        assert_eq!(roadmap.stages[1].is_target, None);
        assert_eq!(roadmap.stages[2].is_target, Some(true));
    }

    #[tokio::test]
    async fn test_missing_recommendations_fails() {
        let mut reply = roadmap_json();
        reply.as_object_mut().unwrap().remove("recommendations");
        let stub = StubGenerator::replying(reply.to_string());
        let (dream_job, profile, prefs) = sample_inputs();

        let err = generate_career_roadmap(&stub, &dream_job, &profile, &prefs)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Generation(ref m) if m.contains("recommendations")));
    }

    #[tokio::test]
    async fn test_skills_must_be_a_list() {
        let mut reply = roadmap_json();
        reply["stages"][0]["skills"] = json!("Rust, Postgres");
        let stub = StubGenerator::replying(reply.to_string());
        let (dream_job, profile, prefs) = sample_inputs();

        let err = generate_career_roadmap(&stub, &dream_job, &profile, &prefs)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Generation(_)));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_generation_error() {
        let stub = StubGenerator::failing(503);
        let (dream_job, profile, prefs) = sample_inputs();

        let err = generate_career_roadmap(&stub, &dream_job, &profile, &prefs)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Generation(ref m) if m.contains("503")));
    }
}
