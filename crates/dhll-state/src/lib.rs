//! # dhll-state
//!
//! Client-side state for DHLL: a string key/value [`SettingsStore`], the
//! session [`AuditLedger`], and the parental-control [`RatingGate`].
//!
//! Both the ledger and the gate own an injected store and persist on every
//! mutation. Storage failures are logged and swallowed; the in-memory state
//! always reflects the intended value.

pub mod error;
pub mod gate;
pub mod keys;
pub mod ledger;
pub mod store;

pub use error::{GateError, StoreError};
pub use gate::{Challenge, GateOutcome, OverrideScope, PinPrompt, RatingGate, RatingState};
pub use ledger::AuditLedger;
pub use store::{FileStore, MemoryStore, SettingsStore};
