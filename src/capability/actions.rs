//! Action string constants shared by the registry, the bridge rule table,
//! and the handler wiring. Keeping them in one place means a typo is caught
//! by the startup coverage check instead of a silent validation failure.

pub const GENERATE_SUGGESTION: &str = "generate_suggestion";
pub const GENERATE_SUPPORT_MESSAGE: &str = "generate_support_message";
pub const AWARD_POINTS: &str = "award_points";
pub const GET_PROGRESS: &str = "get_progress";
pub const SUGGEST_CHALLENGE: &str = "suggest_challenge";
pub const JOIN_CHALLENGE: &str = "join_challenge";
pub const SUGGEST_BREATHING: &str = "suggest_breathing";
pub const SUGGEST_MEDITATION: &str = "suggest_meditation";
pub const SUGGEST_HYDRATION: &str = "suggest_hydration";
pub const SUMMARIZE: &str = "summarize";
pub const PATTERN_INSIGHTS: &str = "pattern_insights";
pub const SCHEDULE_REMINDER: &str = "schedule_reminder";

/// Parameter names carrying registry-enforced numeric bounds.
pub mod params {
    pub const CALORIES_BUDGET: &str = "calories_budget";
    pub const DURATION_MINUTES: &str = "duration_minutes";
    pub const POINTS: &str = "points";
    pub const STRESS_LEVEL: &str = "stress_level";
    pub const HOUR: &str = "hour";
    pub const DAYS: &str = "days";
}
