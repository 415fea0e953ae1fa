mod gating;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use nutria::{
    collaborators::{
        Collaborators,
        error::{CollaboratorError, unavailable},
        ports::{
            ChallengeCatalogPort, CoachMessagePort, GamificationLedgerPort, MealGeneratorPort,
        },
        types::{
            Challenge, ChallengeDifficulty, ChallengeFilter, CoachPrompt, CoachTone,
            GamificationProgress, JoinAck, Meal, MealPreferences, MealType,
        },
    },
    config::OrchestratorRuntimeConfig,
    context::ContextSnapshot,
    orchestrator::Orchestrator,
};

pub fn context(is_premium: bool) -> ContextSnapshot {
    let mut context = ContextSnapshot::default();
    context.is_premium = is_premium;
    context.first_name = Some("Camille".to_string());
    context.nutrition.calories_remaining = 800;
    context
}

pub fn orchestrator_with(collaborators: Collaborators) -> Orchestrator {
    Orchestrator::standard(collaborators, OrchestratorRuntimeConfig::default())
        .expect("standard wiring should cover the whitelist")
}

pub fn sample_meal() -> Meal {
    Meal {
        id: "meal-42".to_string(),
        name: "Bowl de quinoa aux legumes".to_string(),
        calories: 520,
        protein_g: 24.0,
        carbs_g: 61.0,
        fat_g: 18.0,
        tags: vec!["equilibre".to_string()],
    }
}

pub fn sample_challenge() -> Challenge {
    Challenge {
        id: "challenge-7".to_string(),
        title: "7 jours sans grignotage".to_string(),
        difficulty: ChallengeDifficulty::Easy,
        duration_days: 7,
        xp_reward: 150,
    }
}

pub struct StaticMealGenerator(pub Meal);

#[async_trait]
impl MealGeneratorPort for StaticMealGenerator {
    async fn generate(
        &self,
        _preferences: MealPreferences,
        _meal_type: MealType,
    ) -> Result<Option<Meal>, CollaboratorError> {
        Ok(Some(self.0.clone()))
    }
}

pub struct FailingCoach;

#[async_trait]
impl CoachMessagePort for FailingCoach {
    async fn generate(
        &self,
        _tone: CoachTone,
        _prompt: CoachPrompt,
    ) -> Result<String, CollaboratorError> {
        Err(unavailable("coach generator is down"))
    }
}

pub struct EchoCoach;

#[async_trait]
impl CoachMessagePort for EchoCoach {
    async fn generate(
        &self,
        tone: CoachTone,
        prompt: CoachPrompt,
    ) -> Result<String, CollaboratorError> {
        Ok(format!(
            "[{tone:?}] pour {}",
            prompt.first_name.unwrap_or_else(|| "toi".to_string()),
        ))
    }
}

pub struct SlowCoach;

#[async_trait]
impl CoachMessagePort for SlowCoach {
    async fn generate(
        &self,
        _tone: CoachTone,
        _prompt: CoachPrompt,
    ) -> Result<String, CollaboratorError> {
        tokio::time::sleep(std::time::Duration::from_secs(60)).await;
        Ok("trop tard".to_string())
    }
}

pub struct StaticChallengeCatalog(pub Vec<Challenge>);

#[async_trait]
impl ChallengeCatalogPort for StaticChallengeCatalog {
    async fn list(&self, _filter: ChallengeFilter) -> Result<Vec<Challenge>, CollaboratorError> {
        Ok(self.0.clone())
    }

    async fn join(&self, challenge_id: &str) -> Result<JoinAck, CollaboratorError> {
        Ok(JoinAck {
            challenge_id: challenge_id.to_string(),
            joined: true,
        })
    }
}

/// Records award calls so tests can assert side-effect ordering.
#[derive(Default)]
pub struct RecordingLedger {
    pub awards: Arc<Mutex<Vec<(u64, String)>>>,
}

#[async_trait]
impl GamificationLedgerPort for RecordingLedger {
    async fn award(&self, points: u64, reason: &str) -> Result<(), CollaboratorError> {
        self.awards
            .lock()
            .expect("awards lock poisoned")
            .push((points, reason.to_string()));
        Ok(())
    }

    async fn progress(&self) -> Result<GamificationProgress, CollaboratorError> {
        Ok(GamificationProgress {
            streak_days: 5,
            level: 3,
            xp: 420,
            xp_to_next_level: 80,
        })
    }
}
