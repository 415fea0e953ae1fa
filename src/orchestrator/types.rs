use serde::{Deserialize, Serialize};

use crate::{
    capability::ValidationError,
    collaborators::types::{
        Advice, Challenge, CoachTone, GamificationProgress, JoinAck, Meal, PatternInsight,
        ProgressData, ReminderAck,
    },
    types::{AgentId, DecisionRequest},
};

/// Typed payload of a successful decision. One variant per collaborator
/// outcome shape; the aggregator matches on this instead of re-parsing JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DecisionData {
    MealSuggestion {
        #[serde(default)]
        meal: Option<Meal>,
    },
    SupportMessage {
        tone: CoachTone,
        text: String,
    },
    PointsAwarded {
        points: u64,
        reason: String,
    },
    GamificationProgress(GamificationProgress),
    ChallengeSuggestion {
        #[serde(default)]
        challenge: Option<Challenge>,
    },
    ChallengeJoined(JoinAck),
    Advice(Advice),
    ProgressSummary(ProgressData),
    PatternInsight(PatternInsight),
    ReminderScheduled(ReminderAck),
}

/// One per dispatched or rejected request, in the same order as the input
/// batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResult {
    pub request_id: String,
    pub agent: AgentId,
    pub action: String,
    pub success: bool,
    #[serde(default)]
    pub data: Option<DecisionData>,
    #[serde(default)]
    pub error: Option<String>,
    pub processing_time_ms: u64,
}

impl DecisionResult {
    pub fn succeeded(
        request_id: String,
        request: &DecisionRequest,
        data: DecisionData,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            request_id,
            agent: request.agent,
            action: request.action.clone(),
            success: true,
            data: Some(data),
            error: None,
            processing_time_ms,
        }
    }

    pub fn rejected(request_id: String, request: &DecisionRequest, error: &ValidationError) -> Self {
        Self {
            request_id,
            agent: request.agent,
            action: request.action.clone(),
            success: false,
            data: None,
            error: Some(error.message.clone()),
            processing_time_ms: 0,
        }
    }

    pub fn failed(
        request_id: String,
        request: &DecisionRequest,
        error: impl Into<String>,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            request_id,
            agent: request.agent,
            action: request.action.clone(),
            success: false,
            data: None,
            error: Some(error.into()),
            processing_time_ms,
        }
    }
}

/// Aggregated outcome of one orchestration call. `results` preserves batch
/// order; the convenience fields hold the first successful result of each
/// kind in that same order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrchestratorResult {
    pub success: bool,
    pub results: Vec<DecisionResult>,
    pub summary: String,
    #[serde(default)]
    pub suggested_meal: Option<Meal>,
    #[serde(default)]
    pub suggested_challenge: Option<Challenge>,
    #[serde(default)]
    pub progress_data: Option<ProgressData>,
    #[serde(default)]
    pub support_message: Option<String>,
}
