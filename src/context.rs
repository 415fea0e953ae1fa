use serde::{Deserialize, Serialize};

/// Coarse time-of-day bucket used to derive meal types and suggestion tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Midday,
    Afternoon,
    Evening,
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeeklyTrend {
    Improving,
    Stable,
    Declining,
}

impl Default for WeeklyTrend {
    fn default() -> Self {
        Self::Stable
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MacroTargets {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Current-day macro intake relative to targets, in grams remaining.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MacroBalance {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionState {
    pub calories_remaining: i64,
    pub calories_target: i64,
    #[serde(default)]
    pub macro_targets: MacroTargets,
    #[serde(default)]
    pub macro_balance: MacroBalance,
    #[serde(default)]
    pub weekly_trend: WeeklyTrend,
    #[serde(default)]
    pub seven_day_average: f64,
    #[serde(default)]
    pub hours_since_last_meal: Option<f64>,
}

impl Default for NutritionState {
    fn default() -> Self {
        Self {
            calories_remaining: 0,
            calories_target: 2000,
            macro_targets: MacroTargets::default(),
            macro_balance: MacroBalance::default(),
            weekly_trend: WeeklyTrend::Stable,
            seven_day_average: 0.0,
            hours_since_last_meal: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalState {
    pub time_of_day: TimeOfDay,
}

impl Default for TemporalState {
    fn default() -> Self {
        Self {
            time_of_day: TimeOfDay::Midday,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GamificationState {
    pub streak_days: u32,
    pub level: u32,
    pub xp: u64,
    pub xp_to_next_level: u64,
    #[serde(default)]
    pub recent_achievements: Vec<String>,
    #[serde(default)]
    pub active_challenge: Option<String>,
}

/// Past correlation episodes the upstream detector has observed. Read-only
/// here; rules may use episode counts to shape suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CorrelationHistory {
    pub stress_eating_episodes: u32,
    pub sleep_nutrition_episodes: u32,
}

/// Read-only view of the user's state, supplied by the caller on every
/// invocation. No component mutates or retains it across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ContextSnapshot {
    pub is_premium: bool,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub nutrition: NutritionState,
    #[serde(default)]
    pub temporal: TemporalState,
    #[serde(default)]
    pub gamification: GamificationState,
    #[serde(default)]
    pub correlations: CorrelationHistory,
}

impl ContextSnapshot {
    /// Calorie budget a meal suggestion may spend, never negative.
    pub fn calories_budget(&self) -> i64 {
        self.nutrition.calories_remaining.max(0)
    }
}
