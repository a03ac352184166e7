//! Scripted walkthrough of two duels: one honest, one with a cheating
//! reveal. Runs entirely in-process against the registry.

use duel_core::{random_salt, AccountId, Choice, Commitment, GameRegistry};
use tracing::info;

fn main() {
    tracing_subscriber::fmt().init();

    let alice = AccountId::from("alice");
    let bob = AccountId::from("bob");
    let mut registry = GameRegistry::new();

    // --- Duel 1: both reveal honestly ---

    let alice_salt = random_salt();
    let bob_salt = random_salt();

    let alice_commitment = Commitment::for_reveal(Choice::Rock, &alice_salt);
    registry
        .initiate_game(&alice, &bob, alice_commitment)
        .expect("initiate");
    info!("alice initiated with commitment {}", alice_commitment);

    let bob_commitment = Commitment::for_reveal(Choice::Scissors, &bob_salt);
    registry
        .respond(&bob, &alice, bob_commitment)
        .expect("respond");
    info!("bob responded with commitment {}", bob_commitment);

    registry
        .add_initiator_choice(&alice, &bob, Choice::Rock.code(), &alice_salt)
        .expect("alice reveal");
    registry
        .add_responder_choice(&bob, &alice, Choice::Scissors.code(), &bob_salt)
        .expect("bob reveal");

    let outcome = registry
        .get_initiator_result(&alice, &bob)
        .expect("result");
    info!(
        "duel 1 settled: winner={:?} phase={} note={:?}",
        outcome.winner, outcome.phase, outcome.note
    );

    // --- Duel 2: bob commits to Scissors but reveals Paper ---

    let alice_salt = random_salt();
    let bob_salt = random_salt();

    registry
        .initiate_game(&alice, &bob, Commitment::for_reveal(Choice::Rock, &alice_salt))
        .expect("initiate");
    registry
        .respond(&bob, &alice, Commitment::for_reveal(Choice::Scissors, &bob_salt))
        .expect("respond");

    registry
        .add_initiator_choice(&alice, &bob, Choice::Rock.code(), &alice_salt)
        .expect("alice reveal");
    registry
        .add_responder_choice(&bob, &alice, Choice::Paper.code(), &bob_salt)
        .expect("bob reveal");

    let outcome = registry
        .get_initiator_result(&alice, &bob)
        .expect("result");
    info!(
        "duel 2 settled: winner={:?} phase={} note={:?}",
        outcome.winner, outcome.phase, outcome.note
    );
}
