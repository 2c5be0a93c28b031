//! Validator suite — checks an arbitrary, possibly-untrusted action against
//! an ordered list of named predicates before it ever reaches the executor.
//!
//! Two layers run in order:
//! 1. A handful of named turn predicates that can pinpoint *why* an action
//!    is illegal with a specific error code (is-players-turn,
//!    round-phase-matches, no-pending-choice, ...).
//! 2. A membership check against the freshly enumerated legal-action set —
//!    the enumerator and validator are required to mirror each other
//!    exactly, so anything that survives the named predicates but isn't in
//!    the enumerated set is rejected with a generic code.

use realm_types::enums::{GamePhase, RoundPhase};
use realm_types::legal_action::LegalAction;
use realm_types::state::GameState;

use crate::legal_actions::enumerate_legal_actions_with_undo;
use crate::undo::UndoStack;

/// A rejected action, carrying the first failing predicate's code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct ValidationError {
    pub code: &'static str,
    pub message: String,
    pub predicate: &'static str,
}

impl ValidationError {
    fn new(predicate: &'static str, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            predicate,
        }
    }
}

/// Validate `action` for `player_idx` against `state`.
///
/// Does not mutate `state`. On success the action is guaranteed to be
/// accepted by `action_pipeline::apply_legal_action`.
pub fn validate(
    state: &GameState,
    player_idx: usize,
    undo: &UndoStack,
    action: &LegalAction,
) -> Result<(), ValidationError> {
    check_player_exists(state, player_idx)?;
    check_game_active(state)?;
    check_is_players_turn(state, player_idx)?;
    check_no_pending_choice_blocks(state, player_idx, action)?;
    check_combat_phase_matches(state, action)?;

    let legal = enumerate_legal_actions_with_undo(state, player_idx, undo);
    if legal.actions.contains(action) {
        Ok(())
    } else {
        Err(ValidationError::new(
            "enumerated-membership",
            "action-not-legal",
            "action is not in the current legal action set",
        ))
    }
}

fn check_player_exists(state: &GameState, player_idx: usize) -> Result<(), ValidationError> {
    if player_idx >= state.players.len() {
        return Err(ValidationError::new(
            "player-exists",
            "no-such-player",
            format!("no player at index {player_idx}"),
        ));
    }
    Ok(())
}

fn check_game_active(state: &GameState) -> Result<(), ValidationError> {
    if state.game_ended {
        return Err(ValidationError::new(
            "game-active",
            "game-ended",
            "the game has already ended",
        ));
    }
    if state.phase != GamePhase::Round {
        return Err(ValidationError::new(
            "round-phase-matches",
            "wrong-phase",
            format!("game is in phase {:?}, not Round", state.phase),
        ));
    }
    Ok(())
}

fn check_is_players_turn(state: &GameState, player_idx: usize) -> Result<(), ValidationError> {
    let is_active = match state.round_phase {
        RoundPhase::TacticsSelection => state
            .current_tactic_selector
            .as_ref()
            .is_some_and(|selector| *selector == state.players[player_idx].id),
        RoundPhase::PlayerTurns => {
            let current_idx = state.current_player_index as usize;
            current_idx < state.turn_order.len()
                && state.turn_order[current_idx] == state.players[player_idx].id
        }
    };
    if !is_active {
        return Err(ValidationError::new(
            "is-players-turn",
            "not-your-turn",
            "it is not this player's turn",
        ));
    }
    Ok(())
}

fn check_no_pending_choice_blocks(
    state: &GameState,
    player_idx: usize,
    action: &LegalAction,
) -> Result<(), ValidationError> {
    let player = &state.players[player_idx];
    if player.pending.active.is_some() && !matches!(action, LegalAction::ResolveChoice { .. }) {
        return Err(ValidationError::new(
            "no-pending-choice",
            "choice-pending",
            "a pending choice must be resolved before any other action",
        ));
    }
    Ok(())
}

fn check_combat_phase_matches(
    state: &GameState,
    action: &LegalAction,
) -> Result<(), ValidationError> {
    let in_combat = state.combat.is_some();
    let is_combat_action = matches!(
        action,
        LegalAction::DeclareBlock { .. }
            | LegalAction::InitiateAttack { .. }
            | LegalAction::SpendMoveOnCumbersome { .. }
            | LegalAction::AssignDamageToHero { .. }
            | LegalAction::AssignDamageToUnit { .. }
            | LegalAction::ConvertInfluenceToBlock { .. }
            | LegalAction::EndCombatPhase
    );
    if is_combat_action && !in_combat {
        return Err(ValidationError::new(
            "in-combat",
            "in-combat",
            "this action requires an active combat",
        ));
    }
    if matches!(action, LegalAction::Move { .. } | LegalAction::Explore { .. }) && in_combat {
        return Err(ValidationError::new(
            "not-in-combat",
            "in-combat",
            "movement is not legal while combat is active",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use realm_types::enums::Hero;

    use crate::setup::{create_solo_game, place_initial_tiles};

    fn fresh_state() -> GameState {
        let mut state = create_solo_game(7, Hero::Arythea);
        place_initial_tiles(&mut state);
        state
    }

    #[test]
    fn rejects_action_from_inactive_player() {
        let state = fresh_state();
        let undo = UndoStack::new();
        // player 1 does not exist in a solo game.
        let err = validate(
            &state,
            1,
            &undo,
            &LegalAction::EndTurn,
        )
        .unwrap_err();
        assert_eq!(err.code, "no-such-player");
    }

    #[test]
    fn rejects_combat_only_action_outside_combat() {
        let state = fresh_state();
        let undo = UndoStack::new();
        let err = validate(
            &state,
            0,
            &undo,
            &LegalAction::EndCombatPhase,
        )
        .unwrap_err();
        assert_eq!(err.code, "in-combat");
    }

    #[test]
    fn accepts_an_enumerated_action() {
        let state = fresh_state();
        let undo = UndoStack::new();
        let legal = enumerate_legal_actions_with_undo(&state, 0, &undo);
        let action = legal
            .actions
            .first()
            .cloned()
            .expect("fresh game should have at least one legal action");
        assert!(validate(&state, 0, &undo, &action).is_ok());
    }
}
