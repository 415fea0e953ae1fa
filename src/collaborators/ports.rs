use async_trait::async_trait;

use crate::collaborators::{
    error::CollaboratorError,
    types::{
        Advice, AdviceKind, AdviceParams, Challenge, ChallengeFilter, CoachPrompt, CoachTone,
        GamificationProgress, JoinAck, Meal, MealPreferences, MealType, PatternInsight,
        ProgressData, ProgressPeriod, ReminderAck, ReminderRequest,
    },
};

#[async_trait]
pub trait MealGeneratorPort: Send + Sync {
    /// Returns `None` when no meal fits the preferences; that is a
    /// successful outcome, not an error.
    async fn generate(
        &self,
        preferences: MealPreferences,
        meal_type: MealType,
    ) -> Result<Option<Meal>, CollaboratorError>;
}

#[async_trait]
pub trait CoachMessagePort: Send + Sync {
    async fn generate(
        &self,
        tone: CoachTone,
        prompt: CoachPrompt,
    ) -> Result<String, CollaboratorError>;
}

#[async_trait]
pub trait GamificationLedgerPort: Send + Sync {
    async fn award(&self, points: u64, reason: &str) -> Result<(), CollaboratorError>;

    async fn progress(&self) -> Result<GamificationProgress, CollaboratorError>;
}

#[async_trait]
pub trait ChallengeCatalogPort: Send + Sync {
    async fn list(&self, filter: ChallengeFilter) -> Result<Vec<Challenge>, CollaboratorError>;

    /// Premium-gated upstream; the registry rejects un-entitled requests
    /// before this is ever reached.
    async fn join(&self, challenge_id: &str) -> Result<JoinAck, CollaboratorError>;
}

#[async_trait]
pub trait WellnessAdvisorPort: Send + Sync {
    async fn suggest(
        &self,
        kind: AdviceKind,
        params: AdviceParams,
    ) -> Result<Advice, CollaboratorError>;
}

#[async_trait]
pub trait ProgressAnalyticsPort: Send + Sync {
    async fn summarize(&self, period: ProgressPeriod) -> Result<ProgressData, CollaboratorError>;

    async fn pattern_insights(&self, pattern: &str)
    -> Result<PatternInsight, CollaboratorError>;
}

#[async_trait]
pub trait NotificationSchedulerPort: Send + Sync {
    async fn schedule_reminder(
        &self,
        request: ReminderRequest,
    ) -> Result<ReminderAck, CollaboratorError>;
}
