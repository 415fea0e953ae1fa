use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    capability::actions,
    collaborators::{
        ports::{
            ChallengeCatalogPort, CoachMessagePort, GamificationLedgerPort, MealGeneratorPort,
            NotificationSchedulerPort, ProgressAnalyticsPort, WellnessAdvisorPort,
        },
        types::{
            AdviceKind, AdviceParams, ChallengeDifficulty, ChallengeFilter, CoachPrompt,
            CoachTone, MealPreferences, MealType, ProgressPeriod, ReminderRequest,
        },
    },
    context::ContextSnapshot,
    orchestrator::{
        dispatch::DecisionHandler,
        error::{OrchestratorError, internal_error, missing_param},
        types::DecisionData,
    },
    types::{DecisionRequest, ParamValue},
};

pub struct MealPlanHandler {
    port: Arc<dyn MealGeneratorPort>,
}

impl MealPlanHandler {
    pub fn new(port: Arc<dyn MealGeneratorPort>) -> Self {
        Self { port }
    }
}

#[async_trait]
impl DecisionHandler for MealPlanHandler {
    async fn handle(
        &self,
        request: &DecisionRequest,
        context: &ContextSnapshot,
    ) -> Result<DecisionData, OrchestratorError> {
        let meal_type = match request.param_text("meal_type") {
            Some("breakfast") => MealType::Breakfast,
            Some("lunch") => MealType::Lunch,
            Some("snack") => MealType::Snack,
            Some("dinner") => MealType::Dinner,
            Some(other) => {
                return Err(missing_param(format!("unrecognized meal_type '{other}'")));
            }
            None => return Err(missing_param("meal_type parameter is required")),
        };

        let preferences = MealPreferences {
            calories_budget: request
                .param_integer(actions::params::CALORIES_BUDGET)
                .or(Some(context.calories_budget())),
            tags: request
                .param_text("tags")
                .map(|tags| tags.split(',').map(str::to_string).collect())
                .unwrap_or_default(),
            quick_prep: request.param_boolean("quick_prep").unwrap_or(false),
        };

        let meal = self.port.generate(preferences, meal_type).await?;
        Ok(DecisionData::MealSuggestion { meal })
    }
}

pub struct CoachHandler {
    port: Arc<dyn CoachMessagePort>,
}

impl CoachHandler {
    pub fn new(port: Arc<dyn CoachMessagePort>) -> Self {
        Self { port }
    }
}

#[async_trait]
impl DecisionHandler for CoachHandler {
    async fn handle(
        &self,
        request: &DecisionRequest,
        context: &ContextSnapshot,
    ) -> Result<DecisionData, OrchestratorError> {
        let tone = match request.param_text("tone") {
            Some("encouragement") => CoachTone::Encouragement,
            Some("educational") => CoachTone::Educational,
            Some("celebration") => CoachTone::Celebration,
            Some("empathetic") => CoachTone::Empathetic,
            _ => CoachTone::Supportive,
        };

        let prompt = CoachPrompt {
            first_name: context.first_name.clone(),
            topic: request.param_text("topic").map(str::to_string),
            stress_level: request
                .param(actions::params::STRESS_LEVEL)
                .and_then(ParamValue::as_numeric),
            streak_days: Some(context.gamification.streak_days),
        };

        let text = self.port.generate(tone, prompt).await?;
        Ok(DecisionData::SupportMessage { tone, text })
    }
}

pub struct GamificationHandler {
    port: Arc<dyn GamificationLedgerPort>,
}

impl GamificationHandler {
    pub fn new(port: Arc<dyn GamificationLedgerPort>) -> Self {
        Self { port }
    }
}

#[async_trait]
impl DecisionHandler for GamificationHandler {
    async fn handle(
        &self,
        request: &DecisionRequest,
        _context: &ContextSnapshot,
    ) -> Result<DecisionData, OrchestratorError> {
        match request.action.as_str() {
            actions::AWARD_POINTS => {
                let points = request
                    .param_integer(actions::params::POINTS)
                    .ok_or_else(|| missing_param("points parameter is required"))?
                    .max(0) as u64;
                let reason = request.param_text("reason").unwrap_or("milestone").to_string();
                self.port.award(points, &reason).await?;
                Ok(DecisionData::PointsAwarded { points, reason })
            }
            actions::GET_PROGRESS => {
                let progress = self.port.progress().await?;
                Ok(DecisionData::GamificationProgress(progress))
            }
            other => Err(internal_error(format!(
                "gamification handler received unregistered action '{other}'",
            ))),
        }
    }
}

pub struct ChallengesHandler {
    port: Arc<dyn ChallengeCatalogPort>,
}

impl ChallengesHandler {
    pub fn new(port: Arc<dyn ChallengeCatalogPort>) -> Self {
        Self { port }
    }
}

#[async_trait]
impl DecisionHandler for ChallengesHandler {
    async fn handle(
        &self,
        request: &DecisionRequest,
        _context: &ContextSnapshot,
    ) -> Result<DecisionData, OrchestratorError> {
        match request.action.as_str() {
            actions::SUGGEST_CHALLENGE => {
                let difficulty = match request.param_text("difficulty") {
                    Some("easy") => Some(ChallengeDifficulty::Easy),
                    Some("medium") => Some(ChallengeDifficulty::Medium),
                    Some("hard") => Some(ChallengeDifficulty::Hard),
                    _ => None,
                };
                let filter = ChallengeFilter {
                    difficulty,
                    max_duration_days: request
                        .param_integer(actions::params::DAYS)
                        .map(|days| days.max(0) as u32),
                };
                let challenge = self.port.list(filter).await?.into_iter().next();
                Ok(DecisionData::ChallengeSuggestion { challenge })
            }
            actions::JOIN_CHALLENGE => {
                let challenge_id = request
                    .param_text("challenge_id")
                    .ok_or_else(|| missing_param("challenge_id parameter is required"))?;
                let ack = self.port.join(challenge_id).await?;
                Ok(DecisionData::ChallengeJoined(ack))
            }
            other => Err(internal_error(format!(
                "challenges handler received unregistered action '{other}'",
            ))),
        }
    }
}

pub struct WellnessHandler {
    port: Arc<dyn WellnessAdvisorPort>,
}

impl WellnessHandler {
    pub fn new(port: Arc<dyn WellnessAdvisorPort>) -> Self {
        Self { port }
    }
}

#[async_trait]
impl DecisionHandler for WellnessHandler {
    async fn handle(
        &self,
        request: &DecisionRequest,
        _context: &ContextSnapshot,
    ) -> Result<DecisionData, OrchestratorError> {
        let kind = match request.action.as_str() {
            actions::SUGGEST_BREATHING => AdviceKind::Breathing,
            actions::SUGGEST_MEDITATION => AdviceKind::Meditation,
            actions::SUGGEST_HYDRATION => AdviceKind::Hydration,
            other => {
                return Err(internal_error(format!(
                    "wellness handler received unregistered action '{other}'",
                )));
            }
        };

        let params = AdviceParams {
            duration_minutes: request
                .param_integer(actions::params::DURATION_MINUTES)
                .map(|minutes| minutes.max(0) as u64),
            stress_level: request
                .param(actions::params::STRESS_LEVEL)
                .and_then(ParamValue::as_numeric),
        };

        let advice = self.port.suggest(kind, params).await?;
        Ok(DecisionData::Advice(advice))
    }
}

pub struct AnalyticsHandler {
    port: Arc<dyn ProgressAnalyticsPort>,
}

impl AnalyticsHandler {
    pub fn new(port: Arc<dyn ProgressAnalyticsPort>) -> Self {
        Self { port }
    }
}

#[async_trait]
impl DecisionHandler for AnalyticsHandler {
    async fn handle(
        &self,
        request: &DecisionRequest,
        _context: &ContextSnapshot,
    ) -> Result<DecisionData, OrchestratorError> {
        match request.action.as_str() {
            actions::SUMMARIZE => {
                let period = match request.param_text("period") {
                    Some("daily") => ProgressPeriod::Daily,
                    Some("monthly") => ProgressPeriod::Monthly,
                    _ => ProgressPeriod::Weekly,
                };
                let data = self.port.summarize(period).await?;
                Ok(DecisionData::ProgressSummary(data))
            }
            actions::PATTERN_INSIGHTS => {
                let pattern = request
                    .param_text("pattern")
                    .ok_or_else(|| missing_param("pattern parameter is required"))?;
                let insight = self.port.pattern_insights(pattern).await?;
                Ok(DecisionData::PatternInsight(insight))
            }
            other => Err(internal_error(format!(
                "analytics handler received unregistered action '{other}'",
            ))),
        }
    }
}

pub struct NotificationsHandler {
    port: Arc<dyn NotificationSchedulerPort>,
}

impl NotificationsHandler {
    pub fn new(port: Arc<dyn NotificationSchedulerPort>) -> Self {
        Self { port }
    }
}

#[async_trait]
impl DecisionHandler for NotificationsHandler {
    async fn handle(
        &self,
        request: &DecisionRequest,
        _context: &ContextSnapshot,
    ) -> Result<DecisionData, OrchestratorError> {
        let kind = request
            .param_text("kind")
            .ok_or_else(|| missing_param("kind parameter is required"))?
            .to_string();
        // Hour bounds are enforced by the registry when the param is present.
        let hour = request
            .param_integer(actions::params::HOUR)
            .unwrap_or(9)
            .clamp(0, 23) as u8;
        let message = request.param_text("message").map(str::to_string);

        let ack = self
            .port
            .schedule_reminder(ReminderRequest { kind, hour, message })
            .await?;
        Ok(DecisionData::ReminderScheduled(ack))
    }
}
