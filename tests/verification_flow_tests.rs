use dotgrid_gate::{
    GateController, GateFailure, GateIntent, GateOptions, PatternHash, PointerButton,
    SessionState, VerifyOutcome,
};
use glam::Vec2;

fn painted_session(controller: &mut GateController) -> SessionState {
    let mut state =
        SessionState::new(GateOptions::default()).expect("Standard-Optionen sind gültig");
    controller.handle_intent(
        &mut state,
        GateIntent::PointerPressed {
            button: PointerButton::Primary,
        },
    );
    controller.tick(&mut state, Some(Vec2::new(-1.0, 0.0)));
    controller.tick(&mut state, Some(Vec2::new(1.0, 0.0)));
    controller.handle_intent(
        &mut state,
        GateIntent::PointerReleased {
            button: PointerButton::Primary,
        },
    );
    state
}

#[test]
fn test_submit_queues_hash_of_current_selection() {
    let mut controller = GateController::new();
    let mut state = painted_session(&mut controller);

    controller.handle_intent(&mut state, GateIntent::SubmitRequested);

    assert!(state.is_verifying());
    let pending = state.take_pending_submissions();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].hash, state.selection.pattern_hash());
    assert!(state.take_pending_submissions().is_empty());
}

#[test]
fn test_reply_for_latest_submission_is_applied() {
    let mut controller = GateController::new();
    let mut state = painted_session(&mut controller);

    controller.handle_intent(&mut state, GateIntent::SubmitRequested);
    let token = state.take_pending_submissions()[0].token;
    controller.handle_intent(
        &mut state,
        GateIntent::VerificationFinished {
            token,
            outcome: VerifyOutcome::Accepted,
        },
    );

    assert!(!state.is_verifying());
    assert_eq!(state.verification.last_outcome, Some(VerifyOutcome::Accepted));
    assert!(state.verification.error.is_none());
}

#[test]
fn test_stale_reply_is_discarded() {
    let mut controller = GateController::new();
    let mut state = painted_session(&mut controller);

    controller.handle_intent(&mut state, GateIntent::SubmitRequested);
    controller.handle_intent(&mut state, GateIntent::SubmitRequested);
    let pending = state.take_pending_submissions();
    assert_eq!(pending.len(), 2);

    controller.handle_intent(
        &mut state,
        GateIntent::VerificationFinished {
            token: pending[0].token,
            outcome: VerifyOutcome::Accepted,
        },
    );
    assert!(state.is_verifying());
    assert!(state.verification.last_outcome.is_none());

    controller.handle_intent(
        &mut state,
        GateIntent::VerificationFinished {
            token: pending[1].token,
            outcome: VerifyOutcome::Rejected,
        },
    );
    assert!(!state.is_verifying());
    assert_eq!(state.verification.last_outcome, Some(VerifyOutcome::Rejected));
}

#[test]
fn test_failure_surfaces_generic_message() {
    let mut controller = GateController::new();
    let mut state = painted_session(&mut controller);

    controller.handle_intent(&mut state, GateIntent::SubmitRequested);
    let token = state.take_pending_submissions()[0].token;
    controller.handle_intent(
        &mut state,
        GateIntent::VerificationFinished {
            token,
            outcome: VerifyOutcome::Failed(GateFailure::ServerMisconfigured),
        },
    );

    assert!(!state.is_verifying());
    assert!(state.verification.error.is_some());
}

#[test]
fn test_teardown_ignores_late_reply_and_clears_session() {
    let mut controller = GateController::new();
    let mut state = painted_session(&mut controller);

    controller.handle_intent(&mut state, GateIntent::SubmitRequested);
    let token = state.take_pending_submissions()[0].token;

    controller.handle_intent(&mut state, GateIntent::TeardownRequested);
    assert!(!state.is_verifying());
    assert!(state.selection.is_empty());

    controller.handle_intent(
        &mut state,
        GateIntent::VerificationFinished {
            token,
            outcome: VerifyOutcome::Accepted,
        },
    );
    assert!(state.verification.last_outcome.is_none());
}

#[test]
fn test_reset_keeps_outstanding_submission() {
    let mut controller = GateController::new();
    let mut state = painted_session(&mut controller);

    controller.handle_intent(&mut state, GateIntent::SubmitRequested);
    let token = state.take_pending_submissions()[0].token;
    controller.handle_intent(&mut state, GateIntent::ResetRequested);
    assert!(state.is_verifying());

    controller.handle_intent(
        &mut state,
        GateIntent::VerificationFinished {
            token,
            outcome: VerifyOutcome::Rejected,
        },
    );
    assert_eq!(state.verification.last_outcome, Some(VerifyOutcome::Rejected));
}

#[test]
fn test_empty_selection_submits_offset_basis() {
    let mut controller = GateController::new();
    let mut state =
        SessionState::new(GateOptions::default()).expect("Standard-Optionen sind gültig");

    controller.handle_intent(&mut state, GateIntent::SubmitRequested);

    let pending = state.take_pending_submissions();
    assert_eq!(pending[0].hash, PatternHash(2_166_136_261));
}
