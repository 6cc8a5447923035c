//! Parental-control rating gate.
//!
//! Holds `(enabled, max_rating, pin?, active)` and guards every change of the
//! active rating and of the cap. User interaction goes through a
//! [`Challenge`] supplied by the caller, so the gate itself never touches a
//! terminal.
//!
//! Rules:
//! - With the gate disabled, or a rating at or below the cap, the active
//!   rating changes directly.
//! - Going above the cap with no PIN yet creates one (4 digits, confirmed);
//!   the requested rating becomes the new cap.
//! - Going above the cap with a PIN asks for it, then for a scope: allow once
//!   (cap unchanged) or raise the cap.
//! - Disabling the gate and changing the cap both require the PIN.
//!
//! Any rejected step leaves every field as it was.

use std::fmt;
use std::sync::Arc;

use dhll_core::enums::RatingCode;
use dhll_core::pin::{is_valid_pin, pin_checksum, pin_matches};

use crate::error::GateError;
use crate::keys;
use crate::store::SettingsStore;

/// Snapshot of the gate for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingState {
    pub enabled: bool,
    pub max_rating: RatingCode,
    pub pin_set: bool,
    pub active: RatingCode,
}

/// Which PIN the gate is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinPrompt {
    /// First PIN ever.
    Create,
    /// Repeat of the new PIN.
    Confirm,
    /// Existing PIN, to go above the cap.
    Raise(RatingCode),
    /// Existing PIN, to turn the gate off.
    Disable,
    /// Existing PIN, to change the cap.
    ChangeMax,
}

impl fmt::Display for PinPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => f.write_str("Set a parental control PIN (4 digits)"),
            Self::Confirm => f.write_str("Confirm the new PIN"),
            Self::Raise(code) => write!(f, "Enter parental control PIN to allow {code}"),
            Self::Disable => f.write_str("Enter parental control PIN to disable"),
            Self::ChangeMax => f.write_str("Enter parental control PIN to change maximum rating"),
        }
    }
}

/// How far a PIN-approved override reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideScope {
    /// Set the active rating, leave the cap.
    Once,
    /// Set the active rating and raise the cap to it.
    RaiseCap,
}

/// Source of answers for the PIN protocol. `None` means the user cancelled.
pub trait Challenge {
    fn prompt_pin(&mut self, prompt: PinPrompt) -> Option<String>;
    fn choose_scope(&mut self, requested: RatingCode) -> Option<OverrideScope>;
}

/// Successful result of a gate operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    RatingSet(RatingCode),
    PinCreated { cap: RatingCode },
    AllowedOnce(RatingCode),
    CapRaised(RatingCode),
    Enabled,
    Disabled,
    CapChanged { cap: RatingCode, active: RatingCode },
}

impl fmt::Display for GateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RatingSet(code) => write!(f, "Rating set to {code}."),
            Self::PinCreated { cap } => {
                write!(f, "Parental control enabled. Max rating set to {cap}.")
            }
            Self::AllowedOnce(code) => write!(f, "Rating {code} allowed; maximum unchanged."),
            Self::CapRaised(code) => write!(f, "Maximum rating raised to {code}."),
            Self::Enabled => f.write_str("Parental control enabled."),
            Self::Disabled => f.write_str("Parental control disabled."),
            Self::CapChanged { cap, active } => {
                write!(f, "Maximum rating set to {cap}; active rating {active}.")
            }
        }
    }
}

pub struct RatingGate {
    store: Arc<dyn SettingsStore>,
    enabled: bool,
    max_rating: RatingCode,
    pin_set: bool,
    pin_hash: Option<String>,
    active: RatingCode,
}

impl RatingGate {
    /// Hydrate from the store. Missing values take their defaults: enabled,
    /// cap `G`, no PIN, active `G`.
    ///
    /// An "allow once" override does not outlive the process that granted
    /// it: with the gate enabled, a stored active rating above the cap is
    /// read back as the cap.
    #[must_use]
    pub fn open(store: Arc<dyn SettingsStore>) -> Self {
        let read = |key: &str| match store.get(key) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(error) => {
                tracing::warn!(key, %error, "failed to read parental setting");
                None
            }
        };
        let read_code = |key: &str| {
            read(key).map_or(RatingCode::G, |raw| {
                raw.parse().unwrap_or_else(|_| {
                    tracing::warn!(key, value = %raw, "unknown rating code in settings; using G");
                    RatingCode::G
                })
            })
        };

        let enabled = read(keys::PARENTAL_ENABLED).is_none_or(|v| v == "true");
        let max_rating = read_code(keys::PARENTAL_MAX_RATING);
        let pin_set = read(keys::PARENTAL_PIN_SET).is_some_and(|v| v == "true");
        let pin_hash = read(keys::PARENTAL_PIN_HASH);
        let mut active = read_code(keys::ACTIVE_RATING);
        if enabled && active > max_rating {
            tracing::debug!(%active, cap = %max_rating, "one-time rating override expired");
            active = max_rating;
        }

        Self {
            store,
            enabled,
            max_rating,
            pin_set,
            pin_hash,
            active,
        }
    }

    #[must_use]
    pub const fn state(&self) -> RatingState {
        RatingState {
            enabled: self.enabled,
            max_rating: self.max_rating,
            pin_set: self.pin_set,
            active: self.active,
        }
    }

    #[must_use]
    pub const fn active(&self) -> RatingCode {
        self.active
    }

    /// Codes that cannot be selected without a PIN. Empty while disabled.
    #[must_use]
    pub fn locked_ratings(&self) -> Vec<RatingCode> {
        if self.enabled {
            RatingCode::above(self.max_rating)
        } else {
            Vec::new()
        }
    }

    /// Change the active rating, running the PIN protocol when `requested`
    /// is above the cap.
    ///
    /// # Errors
    ///
    /// Returns [`GateError`] when the user cancels or a PIN step fails. No
    /// state changes in that case.
    pub fn request_rating_change(
        &mut self,
        requested: RatingCode,
        challenge: &mut dyn Challenge,
    ) -> Result<GateOutcome, GateError> {
        if !self.enabled || requested <= self.max_rating {
            self.set_active(requested);
            return Ok(GateOutcome::RatingSet(requested));
        }

        if !self.pin_set {
            let pin = challenge
                .prompt_pin(PinPrompt::Create)
                .ok_or(GateError::Cancelled)?;
            if !is_valid_pin(&pin) {
                return Err(GateError::InvalidPinFormat);
            }
            let confirm = challenge
                .prompt_pin(PinPrompt::Confirm)
                .ok_or(GateError::Cancelled)?;
            if pin != confirm {
                return Err(GateError::PinMismatch);
            }
            self.store_pin(&pin);
            self.set_max(requested);
            self.set_active(requested);
            return Ok(GateOutcome::PinCreated { cap: requested });
        }

        self.verify_pin(challenge, PinPrompt::Raise(requested))?;
        let scope = challenge
            .choose_scope(requested)
            .ok_or(GateError::Cancelled)?;
        match scope {
            OverrideScope::Once => {
                self.set_active(requested);
                Ok(GateOutcome::AllowedOnce(requested))
            }
            OverrideScope::RaiseCap => {
                self.set_max(requested);
                self.set_active(requested);
                Ok(GateOutcome::CapRaised(requested))
            }
        }
    }

    /// Turn the gate on unconditionally, or off after a PIN check when a PIN
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns [`GateError`] when disabling is cancelled or the PIN is wrong;
    /// the gate stays enabled.
    pub fn toggle_enabled(&mut self, challenge: &mut dyn Challenge) -> Result<GateOutcome, GateError> {
        if !self.enabled {
            self.set_enabled(true);
            if self.active > self.max_rating {
                self.set_active(self.max_rating);
            }
            return Ok(GateOutcome::Enabled);
        }
        if self.pin_set {
            self.verify_pin(challenge, PinPrompt::Disable)?;
        }
        self.set_enabled(false);
        Ok(GateOutcome::Disabled)
    }

    /// Replace the cap after a PIN check. An active rating above the new cap
    /// is lowered to it.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::PinNotSet`] before any PIN exists, otherwise the
    /// PIN check's error.
    pub fn set_max_rating(
        &mut self,
        new_cap: RatingCode,
        challenge: &mut dyn Challenge,
    ) -> Result<GateOutcome, GateError> {
        if !self.pin_set {
            return Err(GateError::PinNotSet);
        }
        self.verify_pin(challenge, PinPrompt::ChangeMax)?;
        self.set_max(new_cap);
        if self.active > new_cap {
            self.set_active(new_cap);
        }
        Ok(GateOutcome::CapChanged {
            cap: new_cap,
            active: self.active,
        })
    }

    fn verify_pin(&self, challenge: &mut dyn Challenge, prompt: PinPrompt) -> Result<(), GateError> {
        let entered = challenge.prompt_pin(prompt).ok_or(GateError::Cancelled)?;
        let stored = self.pin_hash.as_deref().unwrap_or_default();
        if pin_matches(&entered, stored) {
            Ok(())
        } else {
            Err(GateError::IncorrectPin)
        }
    }

    fn store_pin(&mut self, pin: &str) {
        let hash = pin_checksum(pin);
        self.persist(keys::PARENTAL_PIN_HASH, &hash);
        self.persist(keys::PARENTAL_PIN_SET, "true");
        self.pin_hash = Some(hash);
        self.pin_set = true;
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.persist(keys::PARENTAL_ENABLED, if enabled { "true" } else { "false" });
    }

    fn set_max(&mut self, cap: RatingCode) {
        self.max_rating = cap;
        self.persist(keys::PARENTAL_MAX_RATING, cap.as_str());
    }

    fn set_active(&mut self, code: RatingCode) {
        self.active = code;
        self.persist(keys::ACTIVE_RATING, code.as_str());
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(error) = self.store.set(key, value) {
            tracing::warn!(key, %error, "failed to persist parental setting");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    struct NoAnswers;

    impl Challenge for NoAnswers {
        fn prompt_pin(&mut self, _prompt: PinPrompt) -> Option<String> {
            None
        }
        fn choose_scope(&mut self, _requested: RatingCode) -> Option<OverrideScope> {
            None
        }
    }

    #[test]
    fn fresh_gate_defaults() {
        let gate = RatingGate::open(Arc::new(MemoryStore::new()));
        assert_eq!(
            gate.state(),
            RatingState {
                enabled: true,
                max_rating: RatingCode::G,
                pin_set: false,
                active: RatingCode::G,
            }
        );
        assert_eq!(gate.locked_ratings().len(), 4);
    }

    #[test]
    fn hydrates_persisted_values() {
        let store = Arc::new(MemoryStore::new());
        store.set(keys::PARENTAL_ENABLED, "false").unwrap();
        store.set(keys::PARENTAL_MAX_RATING, "16+").unwrap();
        store.set(keys::PARENTAL_PIN_SET, "true").unwrap();
        store.set(keys::ACTIVE_RATING, "bogus").unwrap();

        let gate = RatingGate::open(store);
        let state = gate.state();
        assert!(!state.enabled);
        assert_eq!(state.max_rating, RatingCode::Sixteen);
        assert!(state.pin_set);
        assert_eq!(state.active, RatingCode::G);
        assert!(gate.locked_ratings().is_empty());
    }

    #[test]
    fn change_within_cap_needs_no_challenge() {
        let store = Arc::new(MemoryStore::new());
        store.set(keys::PARENTAL_MAX_RATING, "13+").unwrap();
        let mut gate = RatingGate::open(store.clone());

        let outcome = gate
            .request_rating_change(RatingCode::Ten, &mut NoAnswers)
            .unwrap();
        assert_eq!(outcome, GateOutcome::RatingSet(RatingCode::Ten));
        assert_eq!(store.get(keys::ACTIVE_RATING).unwrap().as_deref(), Some("10+"));
    }

    #[test]
    fn cancelled_create_changes_nothing() {
        let mut gate = RatingGate::open(Arc::new(MemoryStore::new()));
        let before = gate.state();
        let err = gate
            .request_rating_change(RatingCode::Eighteen, &mut NoAnswers)
            .unwrap_err();
        assert_eq!(err, GateError::Cancelled);
        assert_eq!(gate.state(), before);
    }

    #[test]
    fn set_max_without_pin_is_rejected() {
        let mut gate = RatingGate::open(Arc::new(MemoryStore::new()));
        let err = gate
            .set_max_rating(RatingCode::Ten, &mut NoAnswers)
            .unwrap_err();
        assert_eq!(err, GateError::PinNotSet);
    }

    #[test]
    fn enabling_is_unconditional() {
        let store = Arc::new(MemoryStore::new());
        store.set(keys::PARENTAL_ENABLED, "false").unwrap();
        store.set(keys::PARENTAL_PIN_SET, "true").unwrap();
        let mut gate = RatingGate::open(store);
        assert_eq!(gate.toggle_enabled(&mut NoAnswers).unwrap(), GateOutcome::Enabled);
        assert!(gate.state().enabled);
    }

    #[test]
    fn disabling_without_pin_needs_no_challenge() {
        let mut gate = RatingGate::open(Arc::new(MemoryStore::new()));
        assert_eq!(gate.toggle_enabled(&mut NoAnswers).unwrap(), GateOutcome::Disabled);
        assert!(gate.locked_ratings().is_empty());
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(
            GateOutcome::PinCreated {
                cap: RatingCode::Thirteen
            }
            .to_string(),
            "Parental control enabled. Max rating set to 13+."
        );
        assert_eq!(
            PinPrompt::Raise(RatingCode::Eighteen).to_string(),
            "Enter parental control PIN to allow 18+"
        );
    }
}
