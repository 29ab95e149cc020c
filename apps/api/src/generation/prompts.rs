// All LLM prompt templates for the Generation module.
// Placeholders are filled with `llm_client::prompts::fill_template`.

/// Life timeline prompt. Placeholders: {age}, {education}, {current_field},
/// {career_goals}, {financial_goals}, {personal_goals}, {learning_habits},
/// {health_habits}, {financial_habits}, {json_only}
pub const LIFE_TIMELINE_PROMPT_TEMPLATE: &str = r#"You are an experienced life coach and career advisor who understands how daily habits and stated goals compound into long-term outcomes.

Predict how this person's life is likely to unfold, using the profile below.

PERSONAL INFORMATION
- Age: {age}
- Highest education: {education}
- Current field: {current_field}

GOALS
- Career goals: {career_goals}
- Financial goals: {financial_goals}
- Personal goals: {personal_goals}

CURRENT HABITS
- Learning habits: {learning_habits}
- Health habits: {health_habits}
- Financial habits: {financial_habits}

Describe their situation now, in 5 years, in 10 years and in 20 years. Then give one specific insight each on their career trajectory, their financial outlook, and their health and wellbeing.

Return a JSON object with this EXACT schema:
{
  "present": {"age": "current age", "description": "where they stand today"},
  "fiveYears": {"age": "age in 5 years", "description": "prediction for 5 years from now"},
  "tenYears": {"age": "age in 10 years", "description": "prediction for 10 years from now"},
  "twentyYears": {"age": "age in 20 years", "description": "prediction for 20 years from now"},
  "insights": {
    "career": "insight about career trajectory",
    "financial": "insight about financial outlook",
    "health": "insight about health and wellbeing"
  }
}

Keep predictions realistic and balanced, grounded in typical outcomes for someone with this profile.

{json_only}"#;

/// Career roadmap prompt. Placeholders: {job_title}, {industry}, {appeal},
/// {current_job}, {top_skills}, {years_experience}, {timeline},
/// {learning_preference}, {json_only}
pub const CAREER_ROADMAP_PROMPT_TEMPLATE: &str = r#"You are an experienced career advisor and professional development coach who knows how people actually progress into senior roles.

Build a step-by-step roadmap that takes this person from where they are to their dream job.

DREAM JOB
- Job title: {job_title}
- Industry: {industry}
- What appeals about the role: {appeal}

CURRENT PROFILE
- Current role: {current_job}
- Top skills: {top_skills}
- Years of experience: {years_experience}

PREFERENCES
- Time frame to reach the goal: {timeline}
- Preferred way of learning: {learning_preference}

List the roles they should move through in order, the skills to build at each stage, and concrete recommendations for education, experience and networking. Mark the stage matching their current role with "isCurrent": true and the dream job stage with "isTarget": true.

Return a JSON object with this EXACT schema:
{
  "targetPosition": "the dream job title",
  "timeframe": "overall time to reach the goal",
  "stages": [
    {
      "title": "role title",
      "timeframe": "time to reach or spend in this role",
      "description": "what this stage involves",
      "skills": ["skill 1", "skill 2", "skill 3"],
      "isCurrent": false,
      "isTarget": false
    }
  ],
  "recommendations": {
    "education": [{"icon": "graduation-cap", "text": "education recommendation"}],
    "experience": [{"icon": "project-diagram", "text": "experience recommendation"}],
    "network": [{"icon": "handshake", "text": "networking recommendation"}]
  }
}

Give three recommendations in each category. Keep the roadmap realistic for career paths in this industry.

{json_only}"#;
