use dhll_core::enums::RatingCode;
use dhll_state::{GateOutcome, RatingGate};
use serde::Serialize;

use crate::challenge::TerminalChallenge;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::RatingCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RatingRow {
    code: &'static str,
    label: &'static str,
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct RatingView {
    enabled: bool,
    max_rating: &'static str,
    pin_set: bool,
    active: &'static str,
    ratings: Vec<RatingRow>,
}

#[derive(Debug, Serialize)]
struct ChangeView {
    message: String,
    active: &'static str,
    max_rating: &'static str,
    enabled: bool,
}

/// Handle `dhll rating`.
pub fn handle(action: &RatingCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut gate = ctx.gate();
    let outcome = match action {
        RatingCommands::Show => return output(&rating_view(&gate), flags.format),
        RatingCommands::Set { code, answers } => {
            gate.request_rating_change(*code, &mut TerminalChallenge::new(answers))?
        }
        RatingCommands::Max { code, answers } => {
            gate.set_max_rating(*code, &mut TerminalChallenge::new(answers))?
        }
        RatingCommands::Toggle { answers } => {
            gate.toggle_enabled(&mut TerminalChallenge::new(answers))?
        }
    };
    output(&change_view(&gate, outcome), flags.format)
}

fn rating_view(gate: &RatingGate) -> RatingView {
    let state = gate.state();
    let locked = gate.locked_ratings();
    let ratings = RatingCode::ALL
        .into_iter()
        .map(|code| RatingRow {
            code: code.as_str(),
            label: code.label(),
            status: if code == state.active {
                "active"
            } else if locked.contains(&code) {
                "locked"
            } else {
                "allowed"
            },
        })
        .collect();
    RatingView {
        enabled: state.enabled,
        max_rating: state.max_rating.as_str(),
        pin_set: state.pin_set,
        active: state.active.as_str(),
        ratings,
    }
}

fn change_view(gate: &RatingGate, outcome: GateOutcome) -> ChangeView {
    let state = gate.state();
    ChangeView {
        message: outcome.to_string(),
        active: state.active.as_str(),
        max_rating: state.max_rating.as_str(),
        enabled: state.enabled,
    }
}
