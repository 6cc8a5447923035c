//! PIN protocol scenarios for the rating gate, driven by scripted answers.

use std::collections::VecDeque;
use std::sync::Arc;

use dhll_core::enums::RatingCode;
use dhll_core::pin::pin_checksum;
use dhll_state::keys;
use dhll_state::{
    Challenge, GateError, GateOutcome, MemoryStore, OverrideScope, PinPrompt, RatingGate,
    SettingsStore,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[derive(Default)]
struct Scripted {
    pins: VecDeque<&'static str>,
    scope: Option<OverrideScope>,
    asked: Vec<PinPrompt>,
}

impl Scripted {
    fn pins(pins: &[&'static str]) -> Self {
        Self {
            pins: pins.iter().copied().collect(),
            ..Self::default()
        }
    }

    fn with_scope(mut self, scope: OverrideScope) -> Self {
        self.scope = Some(scope);
        self
    }
}

impl Challenge for Scripted {
    fn prompt_pin(&mut self, prompt: PinPrompt) -> Option<String> {
        self.asked.push(prompt);
        self.pins.pop_front().map(str::to_string)
    }

    fn choose_scope(&mut self, _requested: RatingCode) -> Option<OverrideScope> {
        self.scope
    }
}

fn gate_with_pin(pin: &str, cap: RatingCode) -> (Arc<MemoryStore>, RatingGate) {
    let store = Arc::new(MemoryStore::new());
    store.set(keys::PARENTAL_PIN_SET, "true").unwrap();
    store.set(keys::PARENTAL_PIN_HASH, &pin_checksum(pin)).unwrap();
    store.set(keys::PARENTAL_MAX_RATING, cap.as_str()).unwrap();
    let gate = RatingGate::open(store.clone());
    (store, gate)
}

#[test]
fn first_raise_creates_pin_and_cap() {
    let store = Arc::new(MemoryStore::new());
    let mut gate = RatingGate::open(store.clone());
    let mut answers = Scripted::pins(&["4321", "4321"]);

    let outcome = gate
        .request_rating_change(RatingCode::Thirteen, &mut answers)
        .unwrap();

    assert_eq!(
        outcome,
        GateOutcome::PinCreated {
            cap: RatingCode::Thirteen
        }
    );
    let state = gate.state();
    assert_eq!(state.max_rating, RatingCode::Thirteen);
    assert_eq!(state.active, RatingCode::Thirteen);
    assert!(state.pin_set);
    assert_eq!(answers.asked, vec![PinPrompt::Create, PinPrompt::Confirm]);
    assert_eq!(
        store.get(keys::PARENTAL_PIN_HASH).unwrap(),
        Some(pin_checksum("4321"))
    );

    let reopened = RatingGate::open(store);
    assert_eq!(reopened.state(), state);
}

#[rstest]
#[case::too_short(&["123"], GateError::InvalidPinFormat)]
#[case::not_digits(&["12a4"], GateError::InvalidPinFormat)]
#[case::mismatch(&["1234", "1235"], GateError::PinMismatch)]
#[case::confirm_cancelled(&["1234"], GateError::Cancelled)]
fn bad_new_pin_changes_nothing(#[case] pins: &[&'static str], #[case] expected: GateError) {
    let store = Arc::new(MemoryStore::new());
    let mut gate = RatingGate::open(store.clone());
    let before = gate.state();

    let err = gate
        .request_rating_change(RatingCode::Sixteen, &mut Scripted::pins(pins))
        .unwrap_err();

    assert_eq!(err, expected);
    assert_eq!(gate.state(), before);
    assert_eq!(store.get(keys::PARENTAL_PIN_HASH).unwrap(), None);
}

#[test]
fn allow_once_keeps_cap() {
    let (_, mut gate) = gate_with_pin("1234", RatingCode::Thirteen);
    let mut answers = Scripted::pins(&["1234"]).with_scope(OverrideScope::Once);

    let outcome = gate
        .request_rating_change(RatingCode::Eighteen, &mut answers)
        .unwrap();

    assert_eq!(outcome, GateOutcome::AllowedOnce(RatingCode::Eighteen));
    assert_eq!(gate.state().active, RatingCode::Eighteen);
    assert_eq!(gate.state().max_rating, RatingCode::Thirteen);
    assert_eq!(answers.asked, vec![PinPrompt::Raise(RatingCode::Eighteen)]);
}

#[test]
fn raise_cap_moves_both() {
    let (store, mut gate) = gate_with_pin("1234", RatingCode::Ten);
    let mut answers = Scripted::pins(&["1234"]).with_scope(OverrideScope::RaiseCap);

    let outcome = gate
        .request_rating_change(RatingCode::Sixteen, &mut answers)
        .unwrap();

    assert_eq!(outcome, GateOutcome::CapRaised(RatingCode::Sixteen));
    assert_eq!(gate.state().max_rating, RatingCode::Sixteen);
    assert_eq!(gate.state().active, RatingCode::Sixteen);
    assert_eq!(
        store.get(keys::PARENTAL_MAX_RATING).unwrap().as_deref(),
        Some("16+")
    );
}

#[test]
fn scope_cancelled_after_correct_pin_changes_nothing() {
    let (_, mut gate) = gate_with_pin("1234", RatingCode::Ten);
    let before = gate.state();
    let err = gate
        .request_rating_change(RatingCode::Sixteen, &mut Scripted::pins(&["1234"]))
        .unwrap_err();
    assert_eq!(err, GateError::Cancelled);
    assert_eq!(gate.state(), before);
}

#[test]
fn incorrect_pin_leaves_every_operation_unchanged() {
    let (store, mut gate) = gate_with_pin("1234", RatingCode::Thirteen);
    let before = gate.state();

    let raise = gate.request_rating_change(
        RatingCode::Eighteen,
        &mut Scripted::pins(&["9999"]).with_scope(OverrideScope::RaiseCap),
    );
    let toggle = gate.toggle_enabled(&mut Scripted::pins(&["0000"]));
    let max = gate.set_max_rating(RatingCode::G, &mut Scripted::pins(&["4321"]));

    assert_eq!(raise, Err(GateError::IncorrectPin));
    assert_eq!(toggle, Err(GateError::IncorrectPin));
    assert_eq!(max, Err(GateError::IncorrectPin));
    assert_eq!(gate.state(), before);
    assert!(gate.state().enabled);
    assert_eq!(RatingGate::open(store).state(), before);
}

#[test]
fn disable_with_pin() {
    let (_, mut gate) = gate_with_pin("1234", RatingCode::G);
    let outcome = gate.toggle_enabled(&mut Scripted::pins(&["1234"])).unwrap();
    assert_eq!(outcome, GateOutcome::Disabled);

    // Disabled gate lets anything through.
    let outcome = gate
        .request_rating_change(RatingCode::Eighteen, &mut Scripted::default())
        .unwrap();
    assert_eq!(outcome, GateOutcome::RatingSet(RatingCode::Eighteen));
}

#[test]
fn lowering_cap_lowers_active_rating() {
    let (_, mut gate) = gate_with_pin("1234", RatingCode::Eighteen);
    gate.request_rating_change(RatingCode::Sixteen, &mut Scripted::default())
        .unwrap();

    let outcome = gate
        .set_max_rating(RatingCode::Ten, &mut Scripted::pins(&["1234"]))
        .unwrap();

    assert_eq!(
        outcome,
        GateOutcome::CapChanged {
            cap: RatingCode::Ten,
            active: RatingCode::Ten
        }
    );
    assert_eq!(
        gate.locked_ratings(),
        vec![RatingCode::Thirteen, RatingCode::Sixteen, RatingCode::Eighteen]
    );
}

#[test]
fn raising_cap_keeps_lower_active_rating() {
    let (_, mut gate) = gate_with_pin("1234", RatingCode::Ten);
    let outcome = gate
        .set_max_rating(RatingCode::Eighteen, &mut Scripted::pins(&["1234"]))
        .unwrap();
    assert_eq!(
        outcome,
        GateOutcome::CapChanged {
            cap: RatingCode::Eighteen,
            active: RatingCode::G
        }
    );
    assert!(gate.locked_ratings().is_empty());
}

#[test]
fn allow_once_does_not_survive_reopen() {
    let (store, mut gate) = gate_with_pin("1234", RatingCode::G);
    gate.request_rating_change(
        RatingCode::Eighteen,
        &mut Scripted::pins(&["1234"]).with_scope(OverrideScope::Once),
    )
    .unwrap();
    assert_eq!(gate.active(), RatingCode::Eighteen);

    let reopened = RatingGate::open(store);
    let state = reopened.state();
    assert!(state.enabled);
    assert_eq!(state.max_rating, RatingCode::G);
    assert_eq!(state.active, RatingCode::G);
}

#[test]
fn rating_chosen_while_disabled_is_capped_on_enable() {
    let (store, mut gate) = gate_with_pin("1234", RatingCode::Ten);
    gate.toggle_enabled(&mut Scripted::pins(&["1234"])).unwrap();
    gate.request_rating_change(RatingCode::Eighteen, &mut Scripted::default())
        .unwrap();

    // Still disabled: the choice stands across processes.
    assert_eq!(RatingGate::open(store.clone()).active(), RatingCode::Eighteen);

    let outcome = gate.toggle_enabled(&mut Scripted::default()).unwrap();
    assert_eq!(outcome, GateOutcome::Enabled);
    assert_eq!(gate.active(), RatingCode::Ten);
    assert_eq!(
        store.get(keys::ACTIVE_RATING).unwrap().as_deref(),
        Some("10+")
    );
}
