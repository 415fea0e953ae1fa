use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

/// Execution priority for a decision request. Lower rank runs first and wins
/// deduplication when two requests target the same `(agent, action)` route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn rank(self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

/// The seven collaborator capability surfaces the core is allowed to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentId {
    MealPlanAgent,
    CoachProactive,
    GamificationService,
    ChallengesService,
    WellnessProgram,
    ProgressAnalytics,
    NotificationsService,
}

impl AgentId {
    pub const ALL: [AgentId; 7] = [
        AgentId::MealPlanAgent,
        AgentId::CoachProactive,
        AgentId::GamificationService,
        AgentId::ChallengesService,
        AgentId::WellnessProgram,
        AgentId::ProgressAnalytics,
        AgentId::NotificationsService,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MealPlanAgent => "meal_plan_agent",
            Self::CoachProactive => "coach_proactive",
            Self::GamificationService => "gamification_service",
            Self::ChallengesService => "challenges_service",
            Self::WellnessProgram => "wellness_program",
            Self::ProgressAnalytics => "progress_analytics",
            Self::NotificationsService => "notifications_service",
        }
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scalar request parameter. Numeric variants are subject to the registry's
/// name-keyed bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl ParamValue {
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            Self::Boolean(_) | Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// What a nutritional-need signal is reacting to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutritionalReason {
    Hunger,
    LowHydration,
    MacroImbalance,
}

/// Concrete aid a support-needed signal may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportAid {
    Breathing,
    Meditation,
}

/// Typed per-kind payload of a signal. One variant per signal kind; the
/// bridge's rule table matches on this enum, so an unhandled variant is a
/// compile error rather than silent fallthrough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SignalPayload {
    NutritionalNeed {
        reason: NutritionalReason,
        #[serde(default)]
        hours_since_last_meal: Option<f64>,
    },
    EmotionalState {
        #[serde(default)]
        mood: Option<String>,
        /// 0-10 scale as reported by the upstream detector.
        #[serde(default)]
        stress_level: Option<f64>,
    },
    MotivationLevel {
        /// 0.0 (none) to 1.0 (fully motivated).
        score: f64,
    },
    KnowledgeGap {
        topic: String,
    },
    DecisionPoint {
        decision: String,
    },
    HabitDeviation {
        pattern: String,
        #[serde(default)]
        streak_at_risk: bool,
    },
    GoalAlignment {
        /// Positive drift means ahead of target, negative behind.
        #[serde(default)]
        drift: f64,
    },
    CelebrationMoment {
        milestone: String,
        /// Relative size of the achievement, 1 (minor) to 10 (major).
        magnitude: u32,
    },
    SupportNeeded {
        #[serde(default)]
        requested_aid: Option<SupportAid>,
    },
}

impl SignalPayload {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::NutritionalNeed { .. } => "nutritional_need",
            Self::EmotionalState { .. } => "emotional_state",
            Self::MotivationLevel { .. } => "motivation_level",
            Self::KnowledgeGap { .. } => "knowledge_gap",
            Self::DecisionPoint { .. } => "decision_point",
            Self::HabitDeviation { .. } => "habit_deviation",
            Self::GoalAlignment { .. } => "goal_alignment",
            Self::CelebrationMoment { .. } => "celebration_moment",
            Self::SupportNeeded { .. } => "support_needed",
        }
    }
}

/// A typed inference about the user's current state, produced upstream once
/// per conversational turn. Never persisted by this core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    /// Detector confidence-weighted strength, clamped to [0, 1].
    pub intensity: f64,
    pub priority: Priority,
    pub actionable: bool,
    pub payload: SignalPayload,
}

/// A proposed call into a named collaborator. Produced by the bridge,
/// validated by the capability registry, dispatched by the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRequest {
    pub agent: AgentId,
    pub action: String,
    #[serde(default)]
    pub params: BTreeMap<String, ParamValue>,
    pub priority: Priority,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl DecisionRequest {
    pub fn new(agent: AgentId, action: impl Into<String>, priority: Priority) -> Self {
        Self {
            agent,
            action: action.into(),
            params: BTreeMap::new(),
            priority,
            timeout_ms: None,
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn param(&self, name: &str) -> Option<&ParamValue> {
        self.params.get(name)
    }

    pub fn param_text(&self, name: &str) -> Option<&str> {
        self.param(name).and_then(ParamValue::as_text)
    }

    pub fn param_integer(&self, name: &str) -> Option<i64> {
        self.param(name).and_then(ParamValue::as_integer)
    }

    pub fn param_boolean(&self, name: &str) -> Option<bool> {
        self.param(name).and_then(ParamValue::as_boolean)
    }

    /// Dedup key within one batch.
    pub fn route(&self) -> (AgentId, &str) {
        (self.agent, self.action.as_str())
    }
}
