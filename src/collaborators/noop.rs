use async_trait::async_trait;

use crate::collaborators::{
    error::CollaboratorError,
    ports::{
        ChallengeCatalogPort, CoachMessagePort, GamificationLedgerPort, MealGeneratorPort,
        NotificationSchedulerPort, ProgressAnalyticsPort, WellnessAdvisorPort,
    },
    types::{
        Advice, AdviceKind, AdviceParams, Challenge, ChallengeFilter, CoachPrompt, CoachTone,
        GamificationProgress, JoinAck, Meal, MealPreferences, MealType, PatternInsight,
        ProgressData, ProgressPeriod, ReminderAck, ReminderRequest,
    },
};

#[derive(Debug, Clone, Default)]
pub struct NoopMealGenerator;

#[async_trait]
impl MealGeneratorPort for NoopMealGenerator {
    async fn generate(
        &self,
        _preferences: MealPreferences,
        _meal_type: MealType,
    ) -> Result<Option<Meal>, CollaboratorError> {
        Ok(None)
    }
}

#[derive(Debug, Clone, Default)]
pub struct NoopCoachMessenger;

#[async_trait]
impl CoachMessagePort for NoopCoachMessenger {
    async fn generate(
        &self,
        _tone: CoachTone,
        _prompt: CoachPrompt,
    ) -> Result<String, CollaboratorError> {
        Ok(String::new())
    }
}

#[derive(Debug, Clone, Default)]
pub struct NoopGamificationLedger;

#[async_trait]
impl GamificationLedgerPort for NoopGamificationLedger {
    async fn award(&self, _points: u64, _reason: &str) -> Result<(), CollaboratorError> {
        Ok(())
    }

    async fn progress(&self) -> Result<GamificationProgress, CollaboratorError> {
        Ok(GamificationProgress::default())
    }
}

#[derive(Debug, Clone, Default)]
pub struct NoopChallengeCatalog;

#[async_trait]
impl ChallengeCatalogPort for NoopChallengeCatalog {
    async fn list(&self, _filter: ChallengeFilter) -> Result<Vec<Challenge>, CollaboratorError> {
        Ok(Vec::new())
    }

    async fn join(&self, challenge_id: &str) -> Result<JoinAck, CollaboratorError> {
        Ok(JoinAck {
            challenge_id: challenge_id.to_string(),
            joined: false,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct NoopWellnessAdvisor;

#[async_trait]
impl WellnessAdvisorPort for NoopWellnessAdvisor {
    async fn suggest(
        &self,
        kind: AdviceKind,
        params: AdviceParams,
    ) -> Result<Advice, CollaboratorError> {
        Ok(Advice {
            kind,
            title: String::new(),
            body: String::new(),
            duration_minutes: params.duration_minutes,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct NoopProgressAnalytics;

#[async_trait]
impl ProgressAnalyticsPort for NoopProgressAnalytics {
    async fn summarize(&self, period: ProgressPeriod) -> Result<ProgressData, CollaboratorError> {
        Ok(ProgressData {
            period,
            calories_avg: 0.0,
            target_adherence: 0.0,
            streak_days: 0,
            highlights: Vec::new(),
        })
    }

    async fn pattern_insights(
        &self,
        pattern: &str,
    ) -> Result<PatternInsight, CollaboratorError> {
        Ok(PatternInsight {
            pattern: pattern.to_string(),
            insight: String::new(),
            confidence: 0.0,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct NoopNotificationScheduler;

#[async_trait]
impl NotificationSchedulerPort for NoopNotificationScheduler {
    async fn schedule_reminder(
        &self,
        _request: ReminderRequest,
    ) -> Result<ReminderAck, CollaboratorError> {
        Ok(ReminderAck {
            reminder_id: String::new(),
            scheduled: false,
        })
    }
}
