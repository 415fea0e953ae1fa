pub mod error;
pub mod noop;
pub mod ports;
pub mod types;

use std::sync::Arc;

pub use error::{CollaboratorError, CollaboratorErrorKind};
use noop::{
    NoopChallengeCatalog, NoopCoachMessenger, NoopGamificationLedger, NoopMealGenerator,
    NoopNotificationScheduler, NoopProgressAnalytics, NoopWellnessAdvisor,
};
use ports::{
    ChallengeCatalogPort, CoachMessagePort, GamificationLedgerPort, MealGeneratorPort,
    NotificationSchedulerPort, ProgressAnalyticsPort, WellnessAdvisorPort,
};

/// The injected collaborator set. All durable state lives behind these
/// ports; the core never holds process-wide singletons.
#[derive(Clone)]
pub struct Collaborators {
    pub meal_generator: Arc<dyn MealGeneratorPort>,
    pub coach: Arc<dyn CoachMessagePort>,
    pub gamification: Arc<dyn GamificationLedgerPort>,
    pub challenges: Arc<dyn ChallengeCatalogPort>,
    pub wellness: Arc<dyn WellnessAdvisorPort>,
    pub analytics: Arc<dyn ProgressAnalyticsPort>,
    pub notifications: Arc<dyn NotificationSchedulerPort>,
}

impl Collaborators {
    /// All-noop wiring, useful for tests and partial deployments.
    pub fn noop() -> Self {
        Self {
            meal_generator: Arc::new(NoopMealGenerator),
            coach: Arc::new(NoopCoachMessenger),
            gamification: Arc::new(NoopGamificationLedger),
            challenges: Arc::new(NoopChallengeCatalog),
            wellness: Arc::new(NoopWellnessAdvisor),
            analytics: Arc::new(NoopProgressAnalytics),
            notifications: Arc::new(NoopNotificationScheduler),
        }
    }
}
