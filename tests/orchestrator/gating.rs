use std::sync::Arc;

use nutria::{
    capability::actions,
    collaborators::Collaborators,
    orchestrator::DecisionData,
    types::{AgentId, DecisionRequest, Priority},
};

use crate::{StaticChallengeCatalog, context, orchestrator_with, sample_challenge};

fn join_request() -> DecisionRequest {
    DecisionRequest::new(
        AgentId::ChallengesService,
        actions::JOIN_CHALLENGE,
        Priority::Medium,
    )
    .with_param("challenge_id", "challenge-7")
}

#[tokio::test]
async fn join_challenge_is_rejected_without_premium() {
    let mut collaborators = Collaborators::noop();
    collaborators.challenges = Arc::new(StaticChallengeCatalog(vec![sample_challenge()]));
    let orchestrator = orchestrator_with(collaborators);

    let outcome = orchestrator
        .execute_decisions(&[join_request()], &context(false))
        .await;

    let result = &outcome.results[0];
    assert!(!result.success);
    assert!(result.data.is_none(), "the catalog must never be reached");
    assert!(
        result
            .error
            .as_deref()
            .expect("rejection should carry an error")
            .contains("premium"),
    );
    assert!(!outcome.success);
}

#[tokio::test]
async fn join_challenge_dispatches_for_premium_users() {
    let mut collaborators = Collaborators::noop();
    collaborators.challenges = Arc::new(StaticChallengeCatalog(vec![sample_challenge()]));
    let orchestrator = orchestrator_with(collaborators);

    let outcome = orchestrator
        .execute_decisions(&[join_request()], &context(true))
        .await;

    let result = &outcome.results[0];
    assert!(result.success);
    match &result.data {
        Some(DecisionData::ChallengeJoined(ack)) => {
            assert_eq!(ack.challenge_id, "challenge-7");
            assert!(ack.joined);
        }
        other => panic!("expected a join acknowledgement, got {other:?}"),
    }
}

#[tokio::test]
async fn numeric_bounds_apply_by_parameter_name_across_agents() {
    let orchestrator = orchestrator_with(Collaborators::noop());

    // duration_minutes is bounded once, globally; a challenges request
    // carrying it is held to the same [1, 120] range as a wellness one.
    let request = DecisionRequest::new(
        AgentId::ChallengesService,
        actions::SUGGEST_CHALLENGE,
        Priority::Medium,
    )
    .with_param(actions::params::DURATION_MINUTES, 300i64);

    let outcome = orchestrator
        .execute_decisions(&[request], &context(false))
        .await;

    let result = &outcome.results[0];
    assert!(!result.success);
    assert!(
        result
            .error
            .as_deref()
            .expect("rejection should carry an error")
            .contains("duration_minutes"),
    );
}

#[tokio::test]
async fn stress_level_above_scale_is_rejected() {
    let orchestrator = orchestrator_with(Collaborators::noop());

    let request = DecisionRequest::new(
        AgentId::CoachProactive,
        actions::GENERATE_SUPPORT_MESSAGE,
        Priority::High,
    )
    .with_param(actions::params::STRESS_LEVEL, 11.0);

    let outcome = orchestrator
        .execute_decisions(&[request], &context(false))
        .await;

    assert!(!outcome.results[0].success);
    assert!(
        outcome.results[0]
            .error
            .as_deref()
            .expect("rejection should carry an error")
            .contains("stress_level"),
    );
}

#[tokio::test]
async fn unbounded_text_params_pass_validation() {
    let orchestrator = orchestrator_with(Collaborators::noop());

    let request = DecisionRequest::new(
        AgentId::ProgressAnalytics,
        actions::PATTERN_INSIGHTS,
        Priority::Low,
    )
    .with_param("pattern", "repas du soir saute");

    let outcome = orchestrator
        .execute_decisions(&[request], &context(false))
        .await;

    assert!(outcome.results[0].success);
}
