use std::net::SocketAddr;

use dotgrid_gate::{
    router, GateController, GateFailure, GateIntent, GateOptions, HttpVerifier, PatternHash,
    PointerButton, SecretConfig, SessionState, VerifyOutcome,
};
use glam::Vec2;

async fn spawn_server(secret: SecretConfig) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Loopback-Port sollte frei sein");
    let addr = listener.local_addr().expect("lokale Adresse");
    tokio::spawn(async move {
        axum::serve(listener, router(secret))
            .await
            .expect("Server sollte laufen");
    });
    addr
}

fn verifier(addr: SocketAddr) -> HttpVerifier {
    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("HTTP-Client");
    HttpVerifier::with_client(&format!("http://{addr}"), client).expect("gültige URL")
}

#[tokio::test]
async fn test_matching_hash_is_accepted_over_http() {
    let hash = PatternHash::from_indices([3, 1, 2]);
    let addr = spawn_server(SecretConfig::from_raw(Some(&hash.value().to_string()))).await;

    assert_eq!(verifier(addr).verify(hash).await, VerifyOutcome::Accepted);
}

#[tokio::test]
async fn test_wrong_hash_is_rejected_without_error() {
    let addr = spawn_server(SecretConfig::from_raw(Some("1234"))).await;

    let response = verifier(addr)
        .verify_raw(PatternHash(1235))
        .await
        .expect("Anfrage sollte durchgehen");
    assert!(!response.success);
    assert!(response.error.is_none());
}

#[tokio::test]
async fn test_server_configuration_errors_are_classified() {
    let addr = spawn_server(SecretConfig::Missing).await;
    assert_eq!(
        verifier(addr).verify(PatternHash(1)).await,
        VerifyOutcome::Failed(GateFailure::ServerMisconfigured)
    );

    let addr = spawn_server(SecretConfig::from_raw(Some("12abc"))).await;
    assert_eq!(
        verifier(addr).verify(PatternHash(1)).await,
        VerifyOutcome::Failed(GateFailure::ServerConfigCorrupt)
    );
}

#[tokio::test]
async fn test_unreachable_server_is_a_network_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Loopback-Port sollte frei sein");
    let addr = listener.local_addr().expect("lokale Adresse");
    drop(listener);

    let outcome = verifier(addr).verify(PatternHash(1)).await;
    assert!(matches!(
        outcome,
        VerifyOutcome::Failed(GateFailure::NetworkFailure(_))
    ));
    assert!(!outcome.is_success());
}

#[tokio::test]
async fn test_session_round_trip_through_server() {
    let mut controller = GateController::new();
    let mut state =
        SessionState::new(GateOptions::default()).expect("Standard-Optionen sind gültig");

    controller.handle_intent(
        &mut state,
        GateIntent::PointerPressed {
            button: PointerButton::Primary,
        },
    );
    controller.tick(&mut state, Some(Vec2::new(0.0, -2.0)));
    controller.tick(&mut state, Some(Vec2::new(0.0, 2.0)));
    assert_eq!(state.selection.len(), 5);

    let expected = state.selection.pattern_hash();
    let addr = spawn_server(SecretConfig::from_raw(Some(&expected.value().to_string()))).await;

    controller.handle_intent(&mut state, GateIntent::SubmitRequested);
    let replies = verifier(addr)
        .process_submissions(state.take_pending_submissions())
        .await;
    assert_eq!(replies.len(), 1);
    for reply in replies {
        controller.handle_intent(&mut state, reply);
    }

    assert!(!state.is_verifying());
    assert_eq!(state.verification.last_outcome, Some(VerifyOutcome::Accepted));
}
