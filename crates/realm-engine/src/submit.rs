//! The action-submission entry point: `submit(state, playerId, action)`.
//!
//! Wires the three pieces together in the order the external interface
//! requires: validate first (so a rejected action never mutates state),
//! then execute, then derive the event stream and the next legal-action
//! set from the resulting state.

use realm_types::event::Event;
use realm_types::ids::PlayerId;
use realm_types::legal_action::{LegalAction, LegalActionSet};
use realm_types::state::GameState;

use crate::action_pipeline::{apply_legal_action, ApplyError};
use crate::events::{derive_events, PreSnapshot};
use crate::legal_actions::enumerate_legal_actions_with_undo;
use crate::undo::UndoStack;
use crate::validate::{validate, ValidationError};

/// Either a validation rejection or a precondition failure surfaced during
/// execution — the two non-`Internal` and `Internal` buckets of the error
/// taxonomy.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result of a successful submission: the event stream caused by the action
/// plus the legal-action set freshly enumerated against the new state.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub events: Vec<Event>,
    pub valid_actions: LegalActionSet,
}

/// Validate, execute, and re-enumerate in one call.
///
/// On success, `state` has been mutated in place. On a validation or
/// internal error, `state` is left untouched.
pub fn submit(
    state: &mut GameState,
    undo_stack: &mut UndoStack,
    player_id: &PlayerId,
    action: &LegalAction,
    expected_epoch: u64,
) -> Result<SubmitOutcome, SubmitError> {
    let player_idx = state
        .players
        .iter()
        .position(|p| &p.id == player_id)
        .ok_or_else(|| SubmitError::Internal(format!("unknown player id {player_id}")))?;

    validate(state, player_idx, undo_stack, action)?;

    let pre = PreSnapshot::capture(state, player_idx);

    let apply_result = apply_legal_action(state, undo_stack, player_idx, action, expected_epoch)
        .map_err(|err| match err {
            ApplyError::StaleActionSet { expected, got } => SubmitError::Invalid(ValidationError {
                code: "stale-epoch",
                message: format!("state is at epoch {expected}, action targeted epoch {got}"),
                predicate: "epoch-matches",
            }),
            ApplyError::InternalError(msg) => SubmitError::Internal(msg),
        })?;

    let events = derive_events(&pre, state, player_idx, action, &apply_result);
    let valid_actions = enumerate_legal_actions_with_undo(state, player_idx, undo_stack);

    Ok(SubmitOutcome {
        events,
        valid_actions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use realm_types::enums::Hero;

    use crate::legal_actions::enumerate_legal_actions_with_undo;
    use crate::setup::{create_solo_game, place_initial_tiles};

    #[test]
    fn submit_rejects_unknown_player() {
        let mut state = create_solo_game(11, Hero::Arythea);
        place_initial_tiles(&mut state);
        let mut undo = UndoStack::new();
        let ghost = PlayerId::from("ghost");
        let err = submit(&mut state, &mut undo, &ghost, &LegalAction::EndTurn, 0).unwrap_err();
        assert!(matches!(err, SubmitError::Internal(_)));
    }

    #[test]
    fn submit_applies_an_enumerated_action_and_returns_fresh_actions() {
        let mut state = create_solo_game(11, Hero::Arythea);
        place_initial_tiles(&mut state);
        let mut undo = UndoStack::new();
        let player_id = state.players[0].id.clone();
        let epoch = state.action_epoch;

        let legal = enumerate_legal_actions_with_undo(&state, 0, &undo);
        let action = legal
            .actions
            .first()
            .cloned()
            .expect("fresh game should offer at least one legal action");

        let outcome = submit(&mut state, &mut undo, &player_id, &action, epoch).unwrap();
        assert_eq!(outcome.valid_actions.epoch, state.action_epoch);
    }
}
