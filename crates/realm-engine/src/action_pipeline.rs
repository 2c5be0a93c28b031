//! Execution pipeline — `apply_legal_action()` dispatch.
//!
//! Takes a `LegalAction` and applies it to the game state, returning an
//! `ApplyResult` on success or `ApplyError` on failure. Every action from
//! `enumerate_legal_actions()` MUST succeed — the contract is CI-gated.

use realm_data::enemies::{attack_count, get_enemy};
use realm_data::enemy_piles::{discard_enemy_token, draw_enemy_token, enemy_id_from_token};
use realm_data::tactics::tactic_turn_order;
use realm_types::enums::*;
use realm_types::ids::{CardId, CombatInstanceId, EnemyId, EnemyTokenId, PlayerId, SkillId, SourceDieId};
use arrayvec::ArrayVec;
use realm_types::legal_action::{LegalAction, TacticDecisionData};
use realm_types::pending::{
    ActivePending, PendingTacticDecision, SubsetSelectionKind, SubsetSelectionState,
};
use realm_types::state::*;

use crate::card_play;
use crate::combat;
use crate::combat_resolution;
use crate::effect_queue;
use crate::end_turn;
use crate::mana;
use crate::movement;
use crate::undo::UndoStack;

// =============================================================================
// Error & result types
// =============================================================================

/// Error from applying a legal action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplyError {
    /// The action set was computed at a different epoch than the current state.
    #[error("stale action set: expected epoch {expected}, got {got}")]
    StaleActionSet { expected: u64, got: u64 },
    /// Internal error — should never happen for properly enumerated actions.
    #[error("internal error: {0}")]
    InternalError(String),
}

/// Result of applying a legal action.
#[derive(Debug, Clone)]
pub struct ApplyResult {
    /// Whether the caller should re-enumerate legal actions.
    pub needs_reenumeration: bool,
    /// Whether the game has ended.
    pub game_ended: bool,
}

// =============================================================================
// Public API
// =============================================================================

/// Apply a legal action to the game state.
///
/// # Epoch check
/// The `expected_epoch` must match `state.action_epoch`. If they differ,
/// the action set is stale and the caller must re-enumerate.
///
/// # Contract
/// For every action produced by `enumerate_legal_actions()`, this function
/// MUST return `Ok(...)`. A failure is a contract violation (CI-gated test).
pub fn apply_legal_action(
    state: &mut GameState,
    undo_stack: &mut UndoStack,
    player_idx: usize,
    action: &LegalAction,
    expected_epoch: u64,
) -> Result<ApplyResult, ApplyError> {
    // Epoch check
    if state.action_epoch != expected_epoch {
        tracing::debug!(
            expected = state.action_epoch,
            got = expected_epoch,
            "rejected action against stale epoch"
        );
        return Err(ApplyError::StaleActionSet {
            expected: state.action_epoch,
            got: expected_epoch,
        });
    }

    let result = match action {
        LegalAction::SelectTactic { tactic_id } => {
            // Irreversible: set checkpoint
            undo_stack.set_checkpoint();
            apply_select_tactic(state, player_idx, tactic_id)?
        }

        LegalAction::PlayCardBasic { hand_index, .. } => {
            // Reversible: save snapshot
            undo_stack.save(state);
            apply_play_card(state, player_idx, *hand_index, false, None)?
        }

        LegalAction::PlayCardPowered {
            hand_index,
            mana_color,
            ..
        } => {
            // Reversible: save snapshot
            undo_stack.save(state);
            apply_play_card(state, player_idx, *hand_index, true, Some(*mana_color))?
        }

        LegalAction::PlayCardSideways {
            hand_index,
            sideways_as,
            ..
        } => {
            // Reversible: save snapshot
            undo_stack.save(state);
            apply_play_card_sideways(state, player_idx, *hand_index, *sideways_as)?
        }

        LegalAction::Move { target, .. } => {
            // Reversible: save snapshot
            undo_stack.save(state);
            apply_move(state, player_idx, *target)?
        }

        LegalAction::Explore { direction } => {
            // Irreversible: set checkpoint (tile reveal + RNG)
            undo_stack.set_checkpoint();
            apply_explore(state, player_idx, *direction)?
        }

        LegalAction::ChallengeRampaging { hex } => {
            // Reversible: save snapshot
            undo_stack.save(state);
            apply_challenge_rampaging(state, player_idx, *hex)?
        }

        LegalAction::DeclareBlock {
            enemy_instance_id,
            attack_index,
        } => {
            // Irreversible: set checkpoint
            undo_stack.set_checkpoint();
            apply_declare_block(state, player_idx, enemy_instance_id, *attack_index)?
        }

        LegalAction::InitiateAttack { attack_type } => {
            // Reversible: save snapshot (enters SubsetSelection, undo returns to combat)
            undo_stack.save(state);
            apply_initiate_attack(state, player_idx, *attack_type)?
        }

        LegalAction::ResolveChoice { choice_index } => {
            // Reversible: save snapshot
            undo_stack.save(state);
            apply_resolve_choice(state, player_idx, *choice_index)?
        }

        LegalAction::ResolveDiscardForBonus {
            choice_index,
            discard_count,
        } => {
            // Reversible: save snapshot
            undo_stack.save(state);
            apply_resolve_discard_for_bonus(state, player_idx, *choice_index, *discard_count)?
        }

        LegalAction::ResolveDecompose { hand_index } => {
            // Reversible: save snapshot
            undo_stack.save(state);
            apply_resolve_decompose(state, player_idx, *hand_index)?
        }

        LegalAction::ResolveDiscardForCrystal { .. } => {
            // Handled by ChoiceResolution::DiscardForCrystalSelect now
            return Err(ApplyError::InternalError(
                "ResolveDiscardForCrystal should use Choice path".to_string(),
            ));
        }

        LegalAction::SpendMoveOnCumbersome {
            enemy_instance_id,
        } => {
            // Reversible: save snapshot
            undo_stack.save(state);
            apply_spend_move_on_cumbersome(state, player_idx, enemy_instance_id)?
        }

        LegalAction::ConvertInfluenceToBlock { amount } => {
            // Reversible: save snapshot
            undo_stack.save(state);
            apply_convert_influence_to_block(state, player_idx, *amount)?
        }

        LegalAction::ResolveTacticDecision { data } => {
            // Irreversible: uses RNG for shuffles
            undo_stack.set_checkpoint();
            apply_resolve_tactic_decision(state, player_idx, data)?
        }

        LegalAction::ActivateTactic => {
            // Irreversible: changes game state significantly
            undo_stack.set_checkpoint();
            apply_activate_tactic(state, player_idx)?
        }

        LegalAction::InitiateManaSearch => {
            // Reversible: save snapshot (enters SubsetSelection, undo returns to normal turn)
            undo_stack.save(state);
            apply_initiate_mana_search(state, player_idx)?
        }

        LegalAction::EnterSite => {
            // Irreversible: draws enemy tokens (RNG)
            undo_stack.set_checkpoint();
            apply_enter_site(state, player_idx)?
        }

        LegalAction::InteractSite { healing } => {
            // Irreversible: wound removal + influence deduction
            undo_stack.set_checkpoint();
            apply_interact_site(state, player_idx, *healing)?
        }

        LegalAction::PlunderSite => {
            // Irreversible: burns site + reputation loss
            undo_stack.set_checkpoint();
            apply_plunder_site(state, player_idx)?
        }

        LegalAction::DeclinePlunder => {
            // Reversible: just clears pending
            undo_stack.save(state);
            apply_decline_plunder(state, player_idx)?
        }

        LegalAction::ResolveGladeWound { choice } => {
            // Reversible: removes wound from hand or discard
            undo_stack.save(state);
            apply_resolve_glade_wound(state, player_idx, choice)?
        }

        LegalAction::RecruitUnit {
            unit_id,
            offer_index: _,
            influence_cost,
        } => {
            // Reversible: save snapshot
            undo_stack.save(state);
            apply_recruit_unit(state, player_idx, unit_id, *influence_cost)?
        }

        LegalAction::ActivateUnit {
            unit_instance_id,
            ability_index,
        } => {
            // Reversible: save snapshot
            undo_stack.save(state);
            apply_activate_unit(state, player_idx, unit_instance_id, *ability_index)?
        }

        LegalAction::AssignDamageToHero {
            enemy_index,
            attack_index,
        } => {
            // Reversible: save snapshot
            undo_stack.save(state);
            apply_assign_damage_to_hero(state, player_idx, *enemy_index, *attack_index)?
        }

        LegalAction::AssignDamageToUnit {
            enemy_index,
            attack_index,
            unit_instance_id,
        } => {
            // Reversible: save snapshot
            undo_stack.save(state);
            apply_assign_damage_to_unit(state, player_idx, *enemy_index, *attack_index, unit_instance_id)?
        }

        LegalAction::ChooseLevelUpReward {
            skill_index,
            from_common_pool,
            advanced_action_id,
        } => {
            // Irreversible: affects offers and skill pools
            undo_stack.set_checkpoint();
            apply_choose_level_up_reward(
                state,
                player_idx,
                *skill_index,
                *from_common_pool,
                advanced_action_id,
            )?
        }

        LegalAction::ResolveCrystalJoyReclaim { discard_index } => {
            undo_stack.set_checkpoint();
            apply_resolve_crystal_joy_reclaim(state, player_idx, *discard_index)?
        }

        LegalAction::ResolveSteadyTempoDeckPlacement { place } => {
            undo_stack.set_checkpoint();
            apply_resolve_steady_tempo(state, player_idx, *place)?
        }

        LegalAction::ResolveBannerProtection { remove_all } => {
            undo_stack.set_checkpoint();
            apply_resolve_banner_protection(state, player_idx, *remove_all)?
        }

        LegalAction::EndTurn => {
            // Irreversible: set checkpoint
            undo_stack.set_checkpoint();
            apply_end_turn(state, player_idx)?
        }

        LegalAction::DeclareRest => {
            // Reversible: save snapshot
            undo_stack.save(state);
            apply_declare_rest(state, player_idx)
        }

        LegalAction::CompleteRest { discard_hand_index } => {
            // Reversible: save snapshot (no RNG involved).
            undo_stack.save(state);
            apply_complete_rest(state, player_idx, *discard_hand_index)?
        }

        LegalAction::EndCombatPhase => {
            // Irreversible: set checkpoint
            undo_stack.set_checkpoint();
            apply_end_combat_phase(state, player_idx)?
        }

        LegalAction::UseSkill { skill_id } => {
            // Reversible: save snapshot
            undo_stack.save(state);
            apply_use_skill(state, player_idx, skill_id)?
        }

        LegalAction::ReturnInteractiveSkill { skill_id } => {
            // Reversible: save snapshot
            undo_stack.save(state);
            apply_return_interactive_skill(state, player_idx, skill_id)?
        }

        LegalAction::SubsetSelect { index } => {
            // No undo save: only mutates pending.active.selected
            apply_subset_select(state, player_idx, *index)?
        }

        LegalAction::SubsetConfirm => {
            // Irreversible: RNG consumed by shuffle
            undo_stack.set_checkpoint();
            apply_subset_confirm(state, player_idx)?
        }

        LegalAction::AnnounceEndOfRound => {
            // Irreversible: affects game flow for all players
            undo_stack.set_checkpoint();
            apply_announce_end_of_round(state, player_idx)?
        }

        LegalAction::Undo => apply_undo(state, undo_stack)?,

        LegalAction::ResolveSourceOpeningReroll { reroll } => {
            // Irreversible: RNG may be consumed
            undo_stack.set_checkpoint();
            apply_resolve_source_opening_reroll(state, player_idx, *reroll)?
        }

        LegalAction::ResolveTraining { selection_index } => {
            // Reversible: save snapshot
            undo_stack.save(state);
            apply_resolve_training(state, player_idx, *selection_index)?
        }

        LegalAction::ResolveMaximalEffect { hand_index } => {
            // Reversible: save snapshot
            undo_stack.save(state);
            apply_resolve_maximal_effect(state, player_idx, *hand_index)?
        }

        LegalAction::ResolveMeditation {
            selection_index,
            place_on_top,
        } => {
            undo_stack.save(state);
            apply_resolve_meditation(state, player_idx, *selection_index, *place_on_top)?
        }

        LegalAction::MeditationDoneSelecting => {
            undo_stack.save(state);
            apply_meditation_done_selecting(state, player_idx)?
        }

        LegalAction::ProposeCooperativeAssault {
            hex_coord,
            invited_player_idxs,
            distribution,
        } => {
            // Reversible: save snapshot
            undo_stack.save(state);
            crate::cooperative_assault::apply_propose(
                state,
                player_idx,
                *hex_coord,
                invited_player_idxs,
                distribution,
            )?;
            ApplyResult {
                needs_reenumeration: true,
                game_ended: false,
            }
        }

        LegalAction::RespondToCooperativeProposal { accept } => {
            // Irreversible: RNG shuffle on agreement
            undo_stack.set_checkpoint();
            crate::cooperative_assault::apply_respond(state, player_idx, *accept)?;
            ApplyResult {
                needs_reenumeration: true,
                game_ended: false,
            }
        }

        LegalAction::CancelCooperativeProposal => {
            // Reversible: save snapshot
            undo_stack.save(state);
            crate::cooperative_assault::apply_cancel(state, player_idx)?;
            ApplyResult {
                needs_reenumeration: true,
                game_ended: false,
            }
        }
    };

    // Increment epoch after every action
    state.action_epoch += 1;

    metrics::counter!("realm_engine_actions_applied_total").increment(1);
    if result.game_ended {
        metrics::counter!("realm_engine_games_ended_total").increment(1);
    }

    Ok(result)
}

// =============================================================================
// Action implementations
// =============================================================================

fn apply_select_tactic(
    state: &mut GameState,
    player_idx: usize,
    tactic_id: &realm_types::ids::TacticId,
) -> Result<ApplyResult, ApplyError> {
    // Set player's tactic
    state.players[player_idx].selected_tactic = Some(tactic_id.clone());

    // Remove tactic from available list
    state.available_tactics.retain(|t| t != tactic_id);

    // Remove current player from selection order
    let current_player_id = state.players[player_idx].id.clone();
    state
        .tactics_selection_order
        .retain(|pid| *pid != current_player_id);

    // Check if more players need to select (multiplayer sequential selection)
    if !state.tactics_selection_order.is_empty() {
        // More players to pick — stay in TacticsSelection phase
        state.current_tactic_selector = state.tactics_selection_order.first().cloned();

        // On-pick tactic effects (applied immediately even if others haven't picked)
        apply_tactic_on_pick_effects(state, player_idx, tactic_id);

        return Ok(ApplyResult {
            needs_reenumeration: true,
            game_ended: false,
        });
    }

    // All players have selected — transition to PlayerTurns

    // Auto-select dummy tactic if in solo mode
    if state.dummy_player.is_some()
        && state.scenario_config.dummy_tactic_order == DummyTacticOrder::AfterHumans
        && !state.available_tactics.is_empty()
    {
        let idx = state
            .rng
            .random_index(state.available_tactics.len())
            .expect("Available tactics should not be empty");
        let dummy_tactic = state.available_tactics.remove(idx);
        state.dummy_player_tactic = Some(dummy_tactic);
    }

    // Post-selection tactic removal (multiplayer)
    match state.scenario_config.tactic_removal_mode {
        TacticRemovalMode::RemoveTwo => {
            for _ in 0..2.min(state.available_tactics.len()) {
                if let Some(idx) = state.rng.random_index(state.available_tactics.len()) {
                    let removed = state.available_tactics.remove(idx);
                    state.removed_tactics.push(removed);
                }
            }
        }
        TacticRemovalMode::RemoveOne => {
            if let Some(idx) = state.rng.random_index(state.available_tactics.len()) {
                let removed = state.available_tactics.remove(idx);
                state.removed_tactics.push(removed);
            }
        }
        TacticRemovalMode::None | TacticRemovalMode::AllUsed | TacticRemovalMode::VoteOne => {}
    }

    // Advance to PlayerTurns phase
    state.round_phase = RoundPhase::PlayerTurns;
    state.current_tactic_selector = None;

    // Sort turn order by tactic number (lower goes first)
    // Dummy player uses its auto-selected tactic for sorting
    state.turn_order.sort_by_key(|pid| {
        if let Some(p) = state.players.iter().find(|p| p.id == *pid) {
            p.selected_tactic
                .as_ref()
                .and_then(|t| tactic_turn_order(t.as_str()))
                .unwrap_or(99)
        } else if crate::dummy_player::is_dummy_player(pid.as_str()) {
            state
                .dummy_player_tactic
                .as_ref()
                .and_then(|t| tactic_turn_order(t.as_str()))
                .unwrap_or(99)
        } else {
            99
        }
    });
    state.current_player_index = 0;

    // If dummy is first in turn order, auto-execute their first turn
    if crate::dummy_player::is_dummy_player(
        state.turn_order[state.current_player_index as usize].as_str(),
    ) {
        if let Some(ref mut dummy) = state.dummy_player {
            if crate::dummy_player::execute_dummy_turn(dummy).is_none() {
                state.end_of_round_announced_by =
                    Some(PlayerId::from(crate::dummy_player::DUMMY_PLAYER_ID));
                state.players_with_final_turn =
                    state.players.iter().map(|p| p.id.clone()).collect();
            }
        }
        state.current_player_index =
            (state.current_player_index + 1) % state.turn_order.len() as u32;
    }

    // On-pick tactic effects for the final selector
    apply_tactic_on_pick_effects(state, player_idx, tactic_id);

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

/// Apply immediate effects when a tactic is selected (e.g., Great Start draws cards).
fn apply_tactic_on_pick_effects(
    state: &mut GameState,
    player_idx: usize,
    tactic_id: &realm_types::ids::TacticId,
) {
    let tid = tactic_id.as_str();
    match tid {
        "great_start" => {
            // Draw 2 cards immediately
            let player = &mut state.players[player_idx];
            let draw_count = 2.min(player.deck.len());
            for _ in 0..draw_count {
                let card = player.deck.remove(0);
                player.hand.push(card);
            }
        }
        "rethink" => {
            let hand_len = state.players[player_idx].hand.len();
            if hand_len > 0 {
                state.players[player_idx].pending.active =
                    Some(ActivePending::SubsetSelection(SubsetSelectionState {
                        kind: SubsetSelectionKind::Rethink,
                        pool_size: hand_len,
                        max_selections: 3.min(hand_len),
                        min_selections: 0,
                        selected: ArrayVec::new(),
                    }));
            }
        }
        "mana_steal" => {
            let current_player_id = &state.players[player_idx].id;
            // Available: unclaimed basic dice OR basic dice claimed by other players
            let has_available = state.source.dice.iter().any(|d| {
                !d.is_depleted
                    && d.color.is_basic()
                    && (d.taken_by_player_id.is_none()
                        || d.taken_by_player_id.as_ref().is_some_and(|owner| owner != current_player_id))
            });
            if has_available {
                state.players[player_idx].pending.active =
                    Some(ActivePending::TacticDecision(PendingTacticDecision::ManaSteal));
            }
        }
        "preparation" => {
            let deck_snapshot: Vec<CardId> = state.players[player_idx].deck.clone();
            if !deck_snapshot.is_empty() {
                state.players[player_idx].pending.active =
                    Some(ActivePending::TacticDecision(PendingTacticDecision::Preparation {
                        deck_snapshot,
                    }));
            }
        }
        _ => {} // Other tactics: no on-pick effect
    }
}

// =============================================================================
// Tactic decision resolution
// =============================================================================

fn apply_resolve_tactic_decision(
    state: &mut GameState,
    player_idx: usize,
    data: &TacticDecisionData,
) -> Result<ApplyResult, ApplyError> {
    match data {
        TacticDecisionData::ManaSteal { die_index } => {
            if *die_index >= state.source.dice.len() {
                return Err(ApplyError::InternalError("ManaSteal: invalid die index".into()));
            }

            let die = &mut state.source.dice[*die_index];
            let die_id = die.id.clone();
            let color = die.color;

            // If stealing from another player, clear their stored_mana_die
            if let Some(ref prev_owner_id) = die.taken_by_player_id {
                if let Some(prev_owner) = state.players.iter_mut().find(|p| &p.id == prev_owner_id) {
                    prev_owner.tactic_state.stored_mana_die = None;
                }
            }

            die.taken_by_player_id = Some(state.players[player_idx].id.clone());

            // Store the stolen die reference
            state.players[player_idx].tactic_state.stored_mana_die = Some(StoredManaDie {
                die_id,
                color,
            });

            // Clear pending
            state.players[player_idx].pending.active = None;
        }

        TacticDecisionData::Preparation { deck_card_index } => {
            // Validate against actual deck (not snapshot — snapshot was for enumeration)
            let player = &mut state.players[player_idx];

            // Use the pending to get the snapshot card
            let card_id = if let Some(ActivePending::TacticDecision(PendingTacticDecision::Preparation { deck_snapshot })) = &player.pending.active {
                deck_snapshot.get(*deck_card_index).cloned()
            } else {
                None
            };

            let card_id = card_id.ok_or_else(|| {
                ApplyError::InternalError("Preparation: invalid deck card index".into())
            })?;

            // Remove first occurrence from actual deck
            if let Some(pos) = player.deck.iter().position(|c| *c == card_id) {
                player.deck.remove(pos);
                player.hand.push(card_id);
            }

            // Shuffle remaining deck
            let deck = &mut state.players[player_idx].deck;
            state.rng.shuffle(deck);

            // Clear pending
            state.players[player_idx].pending.active = None;
        }

        TacticDecisionData::SparingPowerStash => {
            let player = &mut state.players[player_idx];
            if !player.deck.is_empty() {
                let card = player.deck.remove(0);
                player.tactic_state.sparing_power_stored.push(card);
            }
            player.pending.active = None;
            player.flags.remove(PlayerFlags::BEFORE_TURN_TACTIC_PENDING);
        }

        TacticDecisionData::SparingPowerTake => {
            let player = &mut state.players[player_idx];
            let stored: Vec<CardId> = player.tactic_state.sparing_power_stored.drain(..).collect();
            player.hand.extend(stored);
            player.flags.insert(PlayerFlags::TACTIC_FLIPPED);
            player.pending.active = None;
            player.flags.remove(PlayerFlags::BEFORE_TURN_TACTIC_PENDING);
        }
    }

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

// =============================================================================
// Subset selection (auto-regressive)
// =============================================================================

fn apply_subset_select(
    state: &mut GameState,
    player_idx: usize,
    index: usize,
) -> Result<ApplyResult, ApplyError> {
    let ss = match &mut state.players[player_idx].pending.active {
        Some(ActivePending::SubsetSelection(ss)) => ss,
        _ => {
            return Err(ApplyError::InternalError(
                "SubsetSelect: no active SubsetSelection".into(),
            ))
        }
    };

    if index >= ss.pool_size || ss.selected.contains(&index) {
        return Err(ApplyError::InternalError(format!(
            "SubsetSelect: invalid or duplicate index {index}"
        )));
    }

    ss.selected.push(index);
    ss.selected.sort_unstable();

    // Auto-confirm if we've hit the max — but NOT for AttackTargets (needs sufficiency check)
    let should_auto_confirm = ss.selected.len() >= ss.max_selections
        && !matches!(ss.kind, SubsetSelectionKind::AttackTargets { .. });
    if should_auto_confirm {
        return finalize_subset_selection(state, player_idx);
    }

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

fn apply_subset_confirm(
    state: &mut GameState,
    player_idx: usize,
) -> Result<ApplyResult, ApplyError> {
    let min_ok = match &state.players[player_idx].pending.active {
        Some(ActivePending::SubsetSelection(ss)) => ss.selected.len() >= ss.min_selections,
        _ => false,
    };

    if !min_ok {
        return Err(ApplyError::InternalError(
            "SubsetConfirm: no active SubsetSelection or min not met".into(),
        ));
    }

    finalize_subset_selection(state, player_idx)
}

fn finalize_subset_selection(
    state: &mut GameState,
    player_idx: usize,
) -> Result<ApplyResult, ApplyError> {
    let ss = match state.players[player_idx].pending.active.take() {
        Some(ActivePending::SubsetSelection(ss)) => ss,
        other => {
            // Put it back and error
            state.players[player_idx].pending.active = other;
            return Err(ApplyError::InternalError(
                "finalize_subset_selection: no active SubsetSelection".into(),
            ));
        }
    };

    match ss.kind {
        SubsetSelectionKind::Rethink | SubsetSelectionKind::MidnightMeditation => {
            let player = &mut state.players[player_idx];

            // Remove cards at selected indices (sort descending to preserve indices)
            let mut sorted_indices: Vec<usize> = ss.selected.to_vec();
            sorted_indices.sort_unstable_by(|a, b| b.cmp(a));

            let mut removed: Vec<CardId> = Vec::new();
            for &idx in &sorted_indices {
                if idx < player.hand.len() {
                    removed.push(player.hand.remove(idx));
                }
            }
            let draw_count = removed.len();

            // Pool = removed + deck + discard
            let mut pool: Vec<CardId> = Vec::new();
            pool.extend(removed);
            pool.append(&mut player.deck);
            pool.append(&mut player.discard);

            // Shuffle pool
            state.rng.shuffle(&mut pool);

            // Draw same count back
            let player = &mut state.players[player_idx];
            let actual_draw = draw_count.min(pool.len());
            for _ in 0..actual_draw {
                player.hand.push(pool.remove(0));
            }

            // Remaining → deck
            player.deck = pool;
            player.discard.clear();
        }
        SubsetSelectionKind::ManaSearch {
            rerollable_die_indices,
        } => {
            // Map selected pool indices → actual die indices, then reroll
            let time_of_day = state.time_of_day;
            for &pool_idx in ss.selected.iter() {
                let die_idx = rerollable_die_indices[pool_idx];
                let die_id = state.source.dice[die_idx].id.clone();
                mana::reroll_die(&mut state.source, &die_id, time_of_day, &mut state.rng);
            }
            state.players[player_idx].tactic_state.mana_search_used_this_turn = true;
        }
        SubsetSelectionKind::AttackTargets {
            attack_type,
            eligible_instance_ids,
        } => {
            // Map selected pool indices → actual instance IDs
            let target_ids: Vec<CombatInstanceId> = ss
                .selected
                .iter()
                .map(|&pool_idx| eligible_instance_ids[pool_idx].clone())
                .collect();

            return apply_declare_attack_inner(state, player_idx, &target_ids, attack_type);
        }
        SubsetSelectionKind::RestWoundDiscard { wound_hand_indices } => {
            // Discard selected wounds (reverse order to preserve indices).
            let mut sorted: Vec<usize> = ss
                .selected
                .iter()
                .map(|&pool_idx| wound_hand_indices[pool_idx])
                .collect();
            sorted.sort_unstable_by(|a, b| b.cmp(a));

            let player = &mut state.players[player_idx];
            for &hand_idx in &sorted {
                let wound = player.hand.remove(hand_idx);
                player.discard.push(wound);
            }

            // Finish rest.
            finish_rest(state, player_idx);
        }
    }

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

// =============================================================================
// Activate tactic
// =============================================================================

fn apply_activate_tactic(
    state: &mut GameState,
    player_idx: usize,
) -> Result<ApplyResult, ApplyError> {
    let tactic_id = state.players[player_idx]
        .selected_tactic
        .as_ref()
        .cloned()
        .ok_or_else(|| ApplyError::InternalError("ActivateTactic: no selected tactic".into()))?;

    state.players[player_idx].flags.insert(PlayerFlags::TACTIC_FLIPPED);

    match tactic_id.as_str() {
        "the_right_moment" => {
            state.players[player_idx].tactic_state.extra_turn_pending = true;
        }
        "long_night" => {
            // Shuffle discard pile
            let discard = &mut state.players[player_idx].discard;
            state.rng.shuffle(discard);
            // Move min(3, discard.len()) from discard to deck
            let player = &mut state.players[player_idx];
            let move_count = 3.min(player.discard.len());
            for _ in 0..move_count {
                let card = player.discard.remove(0);
                player.deck.push(card);
            }
        }
        "midnight_meditation" => {
            let hand_len = state.players[player_idx].hand.len();
            if hand_len > 0 {
                state.players[player_idx].pending.active =
                    Some(ActivePending::SubsetSelection(SubsetSelectionState {
                        kind: SubsetSelectionKind::MidnightMeditation,
                        pool_size: hand_len,
                        max_selections: 5.min(hand_len),
                        min_selections: 0,
                        selected: ArrayVec::new(),
                    }));
            }
        }
        other => {
            return Err(ApplyError::InternalError(format!(
                "ActivateTactic: unhandled tactic '{}'", other
            )));
        }
    }

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

// =============================================================================
// Reroll source dice (Mana Search)
// =============================================================================

fn apply_initiate_mana_search(
    state: &mut GameState,
    player_idx: usize,
) -> Result<ApplyResult, ApplyError> {
    use realm_types::pending::{SubsetSelectionKind, SubsetSelectionState, MAX_SUBSET_ITEMS};

    // Compute rerollable die indices
    let rerollable: ArrayVec<usize, MAX_SUBSET_ITEMS> = state
        .source
        .dice
        .iter()
        .enumerate()
        .filter(|(_, d)| d.taken_by_player_id.is_none())
        .map(|(i, _)| i)
        .collect();

    if rerollable.is_empty() {
        return Err(ApplyError::InternalError(
            "InitiateManaSearch: no rerollable dice".into(),
        ));
    }

    let pool_size = rerollable.len();
    let max_selections = 2.min(pool_size); // Mana Search allows 1 or 2

    state.players[player_idx].pending.active =
        Some(ActivePending::SubsetSelection(SubsetSelectionState {
            kind: SubsetSelectionKind::ManaSearch {
                rerollable_die_indices: rerollable,
            },
            pool_size,
            max_selections,
            min_selections: 1,
            selected: ArrayVec::new(),
        }));

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

fn apply_initiate_attack(
    state: &mut GameState,
    player_idx: usize,
    attack_type: CombatType,
) -> Result<ApplyResult, ApplyError> {
    use realm_types::pending::{SubsetSelectionKind, SubsetSelectionState, MAX_SUBSET_ITEMS};

    let combat = state
        .combat
        .as_ref()
        .ok_or_else(|| ApplyError::InternalError("InitiateAttack: no combat".into()))?;

    let player_id_str = state.players[player_idx].id.as_str().to_string();
    let eligible =
        crate::legal_actions::combat::eligible_attack_targets(combat, attack_type, &state.active_modifiers, Some(&player_id_str));

    if eligible.is_empty() {
        return Err(ApplyError::InternalError(
            "InitiateAttack: no eligible enemies".into(),
        ));
    }

    let pool_size = eligible.len();
    let eligible_ids: ArrayVec<CombatInstanceId, MAX_SUBSET_ITEMS> =
        eligible.into_iter().collect();

    state.players[player_idx].pending.active =
        Some(ActivePending::SubsetSelection(SubsetSelectionState {
            kind: SubsetSelectionKind::AttackTargets {
                attack_type,
                eligible_instance_ids: eligible_ids,
            },
            pool_size,
            max_selections: pool_size, // Can target all
            min_selections: 1,
            selected: ArrayVec::new(),
        }));

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

fn apply_play_card(
    state: &mut GameState,
    player_idx: usize,
    hand_index: usize,
    powered: bool,
    override_mana_color: Option<BasicManaColor>,
) -> Result<ApplyResult, ApplyError> {
    card_play::play_card(state, player_idx, hand_index, powered, override_mana_color)
        .map(|_| ApplyResult {
            needs_reenumeration: true,
            game_ended: false,
        })
        .map_err(|e| ApplyError::InternalError(format!("play_card failed: {:?}", e)))
}

fn apply_play_card_sideways(
    state: &mut GameState,
    player_idx: usize,
    hand_index: usize,
    sideways_as: SidewaysAs,
) -> Result<ApplyResult, ApplyError> {
    card_play::play_card_sideways(state, player_idx, hand_index, sideways_as)
        .map(|_| ApplyResult {
            needs_reenumeration: true,
            game_ended: false,
        })
        .map_err(|e| ApplyError::InternalError(format!("play_card_sideways failed: {:?}", e)))
}

fn apply_move(
    state: &mut GameState,
    player_idx: usize,
    target: realm_types::hex::HexCoord,
) -> Result<ApplyResult, ApplyError> {
    movement::execute_move(state, player_idx, target)
        .map(|_| ApplyResult {
            needs_reenumeration: true,
            game_ended: false,
        })
        .map_err(|e| ApplyError::InternalError(format!("execute_move failed: {:?}", e)))
}

fn apply_explore(
    state: &mut GameState,
    player_idx: usize,
    direction: realm_types::hex::HexDirection,
) -> Result<ApplyResult, ApplyError> {
    movement::execute_explore(state, player_idx, direction)
        .map(|_| ApplyResult {
            needs_reenumeration: true,
            game_ended: false,
        })
        .map_err(|e| ApplyError::InternalError(format!("execute_explore failed: {:?}", e)))
}

fn apply_challenge_rampaging(
    state: &mut GameState,
    player_idx: usize,
    hex: realm_types::hex::HexCoord,
) -> Result<ApplyResult, ApplyError> {
    let hex_state = state
        .map
        .hexes
        .get(&hex.key())
        .ok_or_else(|| ApplyError::InternalError("ChallengeRampaging: hex not found".into()))?;

    let enemy_tokens: Vec<realm_types::ids::EnemyTokenId> =
        hex_state.enemies.iter().map(|e| e.token_id.clone()).collect();

    combat::execute_enter_combat(state, player_idx, &enemy_tokens, false, Some(hex), Default::default())
        .map_err(|e| ApplyError::InternalError(format!("enter_combat failed: {:?}", e)))?;

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

fn apply_resolve_choice(
    state: &mut GameState,
    player_idx: usize,
    choice_index: usize,
) -> Result<ApplyResult, ApplyError> {
    // Check if this is a DeepMineChoice (handled separately from standard Choice)
    if let Some(ActivePending::DeepMineChoice { ref colors }) =
        state.players[player_idx].pending.active
    {
        if choice_index >= colors.len() {
            return Err(ApplyError::InternalError(
                "DeepMineChoice: invalid choice index".into(),
            ));
        }
        let color = colors[choice_index];
        state.players[player_idx].pending.active = None;
        mana::gain_crystal(&mut state.players[player_idx], color);
        return Ok(ApplyResult {
            needs_reenumeration: true,
            game_ended: false,
        });
    }

    // Check if this is a UnitAbilityChoice
    if let Some(ActivePending::UnitAbilityChoice { .. }) =
        state.players[player_idx].pending.active
    {
        return apply_resolve_unit_ability_choice(state, player_idx, choice_index);
    }

    // Check if this is a SelectCombatEnemy
    if let Some(ActivePending::SelectCombatEnemy { .. }) =
        state.players[player_idx].pending.active
    {
        return apply_resolve_select_enemy(state, player_idx, choice_index);
    }

    // Capture skill_id before resolving (pending is consumed)
    let skill_id_for_flip = if let Some(ActivePending::Choice(ref pc)) =
        state.players[player_idx].pending.active
    {
        pc.skill_id.clone()
    } else {
        None
    };

    effect_queue::resolve_pending_choice(state, player_idx, choice_index).map_err(|e| {
        ApplyError::InternalError(format!("resolve_pending_choice failed: {:?}", e))
    })?;

    // Battle Frenzy: flip face-down when Attack 4 option (index 1) is chosen
    if let Some(ref sid) = skill_id_for_flip {
        if sid.as_str() == "krang_battle_frenzy" && choice_index == 1 {
            let player = &mut state.players[player_idx];
            if !player.skill_flip_state.flipped_skills.contains(sid) {
                player.skill_flip_state.flipped_skills.push(sid.clone());
            }
        }
    }

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

fn apply_resolve_training(
    state: &mut GameState,
    player_idx: usize,
    selection_index: usize,
) -> Result<ApplyResult, ApplyError> {
    use realm_types::pending::{ActivePending, PendingTraining, BookOfWisdomPhase};

    let pending = match state.players[player_idx].pending.active.take() {
        Some(ActivePending::Training(t)) => t,
        other => {
            state.players[player_idx].pending.active = other;
            return Err(ApplyError::InternalError(
                "ResolveTraining: no active Training pending".to_string(),
            ));
        }
    };

    match pending.phase {
        BookOfWisdomPhase::SelectCard => {
            // Phase 1: Player selects a card from hand to throw away
            let player = &mut state.players[player_idx];
            if selection_index >= player.hand.len() {
                // Restore pending and error
                player.pending.active = Some(ActivePending::Training(pending));
                return Err(ApplyError::InternalError(
                    "ResolveTraining: hand index out of range".to_string(),
                ));
            }

            let card_id = player.hand.remove(selection_index);
            let card_color = realm_data::cards::get_card_color(card_id.as_str());
            player.removed_cards.push(card_id);

            // Find matching-color AAs in offer
            let mut available: arrayvec::ArrayVec<CardId, { realm_types::pending::MAX_OFFER_CARDS }> =
                arrayvec::ArrayVec::new();
            if let Some(color) = card_color {
                for aa_id in &state.offers.advanced_actions {
                    if realm_data::cards::get_card_color(aa_id.as_str()) == Some(color)
                        && available.try_push(aa_id.clone()).is_err() {
                            break;
                    }
                }
            }

            if available.is_empty() {
                // No matching AAs — just clear pending, card was still thrown away
                Ok(ApplyResult {
                    needs_reenumeration: true,
                    game_ended: false,
                })
            } else if available.len() == 1 {
                // Auto-select the only option
                let aa_id = available[0].clone();
                let offer_idx = state.offers.advanced_actions.iter()
                    .position(|id| *id == aa_id)
                    .unwrap();
                state.offers.advanced_actions.remove(offer_idx);
                effect_queue::replenish_aa_offer(state);
                let player = &mut state.players[player_idx];
                match pending.mode {
                    realm_types::pending::EffectMode::Powered => player.hand.push(aa_id),
                    realm_types::pending::EffectMode::Basic => player.discard.push(aa_id),
                }
                Ok(ApplyResult {
                    needs_reenumeration: true,
                    game_ended: false,
                })
            } else {
                // Multiple matching AAs — set phase to SelectFromOffer
                state.players[player_idx].pending.active = Some(ActivePending::Training(PendingTraining {
                    phase: BookOfWisdomPhase::SelectFromOffer,
                    thrown_card_color: card_color,
                    available_offer_cards: available,
                    ..pending
                }));
                Ok(ApplyResult {
                    needs_reenumeration: true,
                    game_ended: false,
                })
            }
        }
        BookOfWisdomPhase::SelectFromOffer => {
            // Phase 2: Player selects an AA from the available offer cards
            if selection_index >= pending.available_offer_cards.len() {
                state.players[player_idx].pending.active = Some(ActivePending::Training(pending));
                return Err(ApplyError::InternalError(
                    "ResolveTraining: offer selection index out of range".to_string(),
                ));
            }

            let aa_id = pending.available_offer_cards[selection_index].clone();
            if let Some(offer_idx) = state.offers.advanced_actions.iter().position(|id| *id == aa_id) {
                state.offers.advanced_actions.remove(offer_idx);
                effect_queue::replenish_aa_offer(state);
            }

            let player = &mut state.players[player_idx];
            match pending.mode {
                realm_types::pending::EffectMode::Powered => player.hand.push(aa_id),
                realm_types::pending::EffectMode::Basic => player.discard.push(aa_id),
            }

            Ok(ApplyResult {
                needs_reenumeration: true,
                game_ended: false,
            })
        }
    }
}

fn apply_resolve_maximal_effect(
    state: &mut GameState,
    player_idx: usize,
    hand_index: usize,
) -> Result<ApplyResult, ApplyError> {
    use realm_types::pending::ActivePending;

    let pending = match state.players[player_idx].pending.active.take() {
        Some(ActivePending::MaximalEffect(m)) => m,
        other => {
            state.players[player_idx].pending.active = other;
            return Err(ApplyError::InternalError(
                "ResolveMaximalEffect: no active MaximalEffect pending".to_string(),
            ));
        }
    };

    let player = &mut state.players[player_idx];
    if hand_index >= player.hand.len() {
        player.pending.active = Some(ActivePending::MaximalEffect(pending));
        return Err(ApplyError::InternalError(
            "ResolveMaximalEffect: hand index out of range".to_string(),
        ));
    }

    // Remove the selected card from hand
    let card_id = player.hand.remove(hand_index);
    player.removed_cards.push(card_id.clone());

    // Get the card's effect
    let card_def = realm_data::cards::get_card(card_id.as_str())
        .ok_or_else(|| ApplyError::InternalError(format!(
            "ResolveMaximalEffect: card {} not found", card_id.as_str()
        )))?;
    let effect = match pending.effect_kind {
        realm_types::pending::EffectMode::Basic => card_def.basic_effect.clone(),
        realm_types::pending::EffectMode::Powered => card_def.powered_effect.clone(),
    };

    // Resolve the effect multiplied times
    let mut queue = effect_queue::EffectQueue::new();
    for _ in 0..pending.multiplier {
        queue.push(effect.clone(), Some(card_id.clone()));
    }

    match queue.drain(state, player_idx) {
        effect_queue::DrainResult::Complete => {
            Ok(ApplyResult {
                needs_reenumeration: true,
                game_ended: false,
            })
        }
        effect_queue::DrainResult::NeedsChoice { options, continuation, resolution } => {
            let cont_entries: Vec<realm_types::pending::ContinuationEntry> = continuation
                .into_iter()
                .map(|qe| realm_types::pending::ContinuationEntry {
                    effect: qe.effect,
                    source_card_id: qe.source_card_id,
                })
                .collect();
            state.players[player_idx].pending.active = Some(ActivePending::Choice(
                realm_types::pending::PendingChoice {
                    card_id: Some(card_id),
                    skill_id: None,
                    unit_instance_id: None,
                    options,
                    continuation: cont_entries,
                    resolution,
                    movement_bonus_applied: false,
                },
            ));
            Ok(ApplyResult {
                needs_reenumeration: true,
                game_ended: false,
            })
        }
        effect_queue::DrainResult::PendingSet => {
            Ok(ApplyResult {
                needs_reenumeration: true,
                game_ended: false,
            })
        }
    }
}

fn apply_resolve_meditation(
    state: &mut GameState,
    player_idx: usize,
    selection_index: usize,
    place_on_top: Option<bool>,
) -> Result<ApplyResult, ApplyError> {
    use realm_types::pending::{ActivePending, MeditationPhase};

    let pending = match state.players[player_idx].pending.active.take() {
        Some(ActivePending::Meditation(m)) => m,
        other => {
            state.players[player_idx].pending.active = other;
            return Err(ApplyError::InternalError(
                "ResolveMeditation: no active Meditation pending".to_string(),
            ));
        }
    };

    match pending.phase {
        MeditationPhase::SelectCards => {
            // Powered: add a card from discard to selection
            let player = &state.players[player_idx];
            if selection_index >= player.discard.len() {
                state.players[player_idx].pending.active =
                    Some(ActivePending::Meditation(pending));
                return Err(ApplyError::InternalError(
                    "ResolveMeditation: discard index out of range".to_string(),
                ));
            }
            let card_id = player.discard[selection_index].clone();
            let mut new_pending = pending;
            new_pending.selected_card_ids.push(card_id);

            // If we've selected 3, auto-transition to PlaceCards
            if new_pending.selected_card_ids.len() >= 3 {
                new_pending.phase = MeditationPhase::PlaceCards;
            }
            state.players[player_idx].pending.active =
                Some(ActivePending::Meditation(new_pending));
        }
        MeditationPhase::PlaceCards => {
            // Place the first selected card on top or bottom of deck
            let on_top = place_on_top.unwrap_or(true);
            let mut new_pending = pending;
            let card_id = new_pending.selected_card_ids.remove(0);

            // Remove from discard
            let player = &mut state.players[player_idx];
            if let Some(pos) = player.discard.iter().position(|c| c == &card_id) {
                player.discard.remove(pos);
            }

            // Place on deck
            if on_top {
                player.deck.push(card_id);
            } else {
                player.deck.insert(0, card_id);
            }

            // If more cards to place, keep pending
            if new_pending.selected_card_ids.is_empty() {
                // All cards placed — apply meditation bonus
                player.meditation_hand_limit_bonus =
                    player.meditation_hand_limit_bonus.saturating_add(1);
                // Clear pending
            } else {
                state.players[player_idx].pending.active =
                    Some(ActivePending::Meditation(new_pending));
            }
        }
    }

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

fn apply_meditation_done_selecting(
    state: &mut GameState,
    player_idx: usize,
) -> Result<ApplyResult, ApplyError> {
    use realm_types::pending::{ActivePending, MeditationPhase};

    let pending = match state.players[player_idx].pending.active.take() {
        Some(ActivePending::Meditation(m)) => m,
        other => {
            state.players[player_idx].pending.active = other;
            return Err(ApplyError::InternalError(
                "MeditationDoneSelecting: no active Meditation pending".to_string(),
            ));
        }
    };

    if pending.selected_card_ids.is_empty() {
        // Nothing selected — clear pending
        return Ok(ApplyResult {
            needs_reenumeration: true,
            game_ended: false,
        });
    }

    // Transition to PlaceCards phase
    let mut new_pending = pending;
    new_pending.phase = MeditationPhase::PlaceCards;
    state.players[player_idx].pending.active =
        Some(ActivePending::Meditation(new_pending));

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

fn apply_resolve_decompose(
    state: &mut GameState,
    player_idx: usize,
    hand_index: usize,
) -> Result<ApplyResult, ApplyError> {
    effect_queue::resolve_decompose(state, player_idx, hand_index).map_err(|e| {
        ApplyError::InternalError(format!("resolve_decompose failed: {:?}", e))
    })?;
    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}


fn apply_resolve_discard_for_bonus(
    state: &mut GameState,
    player_idx: usize,
    choice_index: usize,
    discard_count: usize,
) -> Result<ApplyResult, ApplyError> {
    effect_queue::resolve_discard_for_bonus(state, player_idx, choice_index, discard_count)
        .map_err(|e| {
            ApplyError::InternalError(format!("resolve_discard_for_bonus failed: {:?}", e))
        })?;
    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

fn apply_choose_level_up_reward(
    state: &mut GameState,
    player_idx: usize,
    skill_index: usize,
    from_common_pool: bool,
    advanced_action_id: &CardId,
) -> Result<ApplyResult, ApplyError> {
    // 1. Extract the active PendingLevelUpReward
    let reward = match state.players[player_idx].pending.active.take() {
        Some(realm_types::pending::ActivePending::LevelUpReward(r)) => r,
        other => {
            state.players[player_idx].pending.active = other;
            return Err(ApplyError::InternalError(
                "ChooseLevelUpReward: no active LevelUpReward pending".into(),
            ));
        }
    };

    // 2. Skill selection
    if from_common_pool {
        // Pick from common pool — add BOTH drawn skills back to common pool
        if skill_index >= state.offers.common_skills.len() {
            return Err(ApplyError::InternalError(format!(
                "ChooseLevelUpReward: common pool index {} out of range (len {})",
                skill_index,
                state.offers.common_skills.len()
            )));
        }
        let chosen_skill = state.offers.common_skills.remove(skill_index);
        state.players[player_idx].skills.push(chosen_skill.clone());
        // Push passive modifiers for the newly acquired skill
        push_passive_skill_modifiers(state, player_idx, &chosen_skill);
        // Initialize Master of Chaos wheel position
        init_master_of_chaos_if_needed(state, player_idx, &chosen_skill);
        // Return both drawn skills to common pool
        for skill in reward.drawn_skills.iter() {
            state.offers.common_skills.push(skill.clone());
        }
    } else {
        // Pick from drawn pair — add the OTHER skill to common pool
        if skill_index >= reward.drawn_skills.len() {
            return Err(ApplyError::InternalError(format!(
                "ChooseLevelUpReward: drawn skill index {} out of range (len {})",
                skill_index,
                reward.drawn_skills.len()
            )));
        }
        let chosen_skill = reward.drawn_skills[skill_index].clone();
        state.players[player_idx].skills.push(chosen_skill.clone());
        // Push passive modifiers for the newly acquired skill
        push_passive_skill_modifiers(state, player_idx, &chosen_skill);
        // Initialize Master of Chaos wheel position
        init_master_of_chaos_if_needed(state, player_idx, &chosen_skill);
        // Add unchosen drawn skills to common pool
        for (i, skill) in reward.drawn_skills.iter().enumerate() {
            if i != skill_index {
                state.offers.common_skills.push(skill.clone());
            }
        }
    }

    // 3. AA selection — remove from offer, push to front of player's deck, replenish
    if let Some(offer_idx) = state
        .offers
        .advanced_actions
        .iter()
        .position(|a| a == advanced_action_id)
    {
        let aa = state.offers.advanced_actions.remove(offer_idx);
        state.players[player_idx].deck.insert(0, aa);
        // Replenish offer from deck
        if !state.decks.advanced_action_deck.is_empty() {
            let new_card = state.decks.advanced_action_deck.remove(0);
            state.offers.advanced_actions.insert(0, new_card);
        }
    }

    // 4. Check for more rewards — promote next from deferred
    if end_turn::promote_level_up_reward_pub(state, player_idx) {
        // More rewards to resolve
        return Ok(ApplyResult {
            needs_reenumeration: true,
            game_ended: false,
        });
    }

    // 5. No more rewards — process card flow and advance turn
    end_turn::process_card_flow_pub(state, player_idx);
    let turn_result = end_turn::advance_turn_pub(state, player_idx);

    let game_ended = matches!(turn_result, end_turn::EndTurnResult::GameEnded);
    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended,
    })
}

fn end_turn_result_to_apply(
    result: Result<end_turn::EndTurnResult, end_turn::EndTurnError>,
) -> Result<ApplyResult, ApplyError> {
    match result {
        Ok(end_turn::EndTurnResult::GameEnded) => Ok(ApplyResult {
            needs_reenumeration: true,
            game_ended: true,
        }),
        Ok(_) => Ok(ApplyResult {
            needs_reenumeration: true,
            game_ended: false,
        }),
        Err(e) => Err(ApplyError::InternalError(format!(
            "end_turn failed: {:?}",
            e
        ))),
    }
}

/// Voluntarily announce end of round (multiplayer).
/// All other players get exactly one final turn each.
fn apply_announce_end_of_round(
    state: &mut GameState,
    player_idx: usize,
) -> Result<ApplyResult, ApplyError> {
    let player_id = state.players[player_idx].id.clone();
    state.end_of_round_announced_by = Some(player_id.clone());

    // All OTHER players get one final turn
    state.players_with_final_turn = state
        .players
        .iter()
        .filter(|p| p.id != player_id)
        .map(|p| p.id.clone())
        .collect();

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

fn apply_end_turn(state: &mut GameState, player_idx: usize) -> Result<ApplyResult, ApplyError> {
    end_turn_result_to_apply(end_turn::end_turn(state, player_idx))
}

fn apply_resolve_crystal_joy_reclaim(
    state: &mut GameState,
    player_idx: usize,
    discard_index: Option<usize>,
) -> Result<ApplyResult, ApplyError> {
    // Clear pending
    state.players[player_idx].pending.active = None;

    if let Some(idx) = discard_index {
        // Move the selected card from discard to hand
        if idx < state.players[player_idx].discard.len() {
            let card = state.players[player_idx].discard.remove(idx);
            state.players[player_idx].hand.push(card);
        }
    }
    // Skip: no card moved

    // Resume end_turn flow
    end_turn_result_to_apply(end_turn::end_turn(state, player_idx))
}

fn apply_resolve_steady_tempo(
    state: &mut GameState,
    player_idx: usize,
    place: bool,
) -> Result<ApplyResult, ApplyError> {
    // Extract pending to get version
    let version = match state.players[player_idx].pending.active.take() {
        Some(realm_types::pending::ActivePending::SteadyTempoDeckPlacement(p)) => p.version,
        other => {
            state.players[player_idx].pending.active = other;
            return Err(ApplyError::InternalError(
                "ResolveSteadyTempo: no SteadyTempoDeckPlacement pending".into(),
            ));
        }
    };

    if place {
        // Remove steady_tempo from play_area and place on deck
        if let Some(idx) = state.players[player_idx]
            .play_area
            .iter()
            .position(|c| c.as_str() == "steady_tempo")
        {
            let card = state.players[player_idx].play_area.remove(idx);
            match version {
                realm_types::pending::EffectMode::Basic => {
                    // Bottom of deck
                    state.players[player_idx].deck.push(card);
                }
                realm_types::pending::EffectMode::Powered => {
                    // Top of deck
                    state.players[player_idx].deck.insert(0, card);
                }
            }
        }
    }
    // Skip: card stays in play_area, will be discarded normally in card flow

    // Resume end_turn flow
    end_turn_result_to_apply(end_turn::end_turn(state, player_idx))
}

fn apply_resolve_banner_protection(
    state: &mut GameState,
    player_idx: usize,
    remove_all: bool,
) -> Result<ApplyResult, ApplyError> {
    // Clear pending
    state.players[player_idx].pending.active = None;

    if remove_all {
        let wounds = state.players[player_idx].wounds_received_this_turn;

        // Remove wounds from hand
        for _ in 0..wounds.hand {
            if let Some(idx) = state.players[player_idx]
                .hand
                .iter()
                .position(|c| c.as_str() == "wound")
            {
                state.players[player_idx].hand.remove(idx);
            }
        }

        // Remove wounds from discard
        for _ in 0..wounds.discard {
            if let Some(idx) = state.players[player_idx]
                .discard
                .iter()
                .position(|c| c.as_str() == "wound")
            {
                state.players[player_idx].discard.remove(idx);
            }
        }

        // Banner is destroyed after use — remove from play area
        // (Banner of Protection artifact card goes to removed_cards)
        if let Some(idx) = state.players[player_idx]
            .play_area
            .iter()
            .position(|c| c.as_str() == "banner_of_protection")
        {
            let card = state.players[player_idx].play_area.remove(idx);
            state.players[player_idx].removed_cards.push(card);
        }
    }

    // Resume end_turn flow
    end_turn_result_to_apply(end_turn::end_turn(state, player_idx))
}

fn apply_declare_rest(state: &mut GameState, player_idx: usize) -> ApplyResult {
    let player = &mut state.players[player_idx];
    player.flags.insert(PlayerFlags::IS_RESTING);
    player.flags.insert(PlayerFlags::HAS_TAKEN_ACTION_THIS_TURN);
    ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    }
}

fn apply_complete_rest(
    state: &mut GameState,
    player_idx: usize,
    discard_hand_index: Option<usize>,
) -> Result<ApplyResult, ApplyError> {
    let player = &mut state.players[player_idx];

    if let Some(idx) = discard_hand_index {
        if idx >= player.hand.len() {
            return Err(ApplyError::InternalError(format!(
                "CompleteRest discard index {} out of range (hand len {})",
                idx,
                player.hand.len()
            )));
        }

        let chosen_card = player.hand[idx].clone();
        let is_wound = chosen_card.as_str() == effect_queue::WOUND_CARD_ID;
        let has_non_wound = player
            .hand
            .iter()
            .any(|c| c.as_str() != effect_queue::WOUND_CARD_ID);

        if has_non_wound {
            // Standard rest: discard chosen non-wound card, then let agent choose wounds.
            if is_wound {
                return Err(ApplyError::InternalError(
                    "Standard rest: must discard a non-wound card".into(),
                ));
            }
            // Remove chosen card first (by index).
            player.hand.remove(idx);
            player.discard.push(chosen_card);

            // Check if wounds remain in hand — if so, enter SubsetSelection.
            let wound_hand_indices: ArrayVec<usize, { realm_types::pending::MAX_SUBSET_ITEMS }> =
                player
                    .hand
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| c.as_str() == effect_queue::WOUND_CARD_ID)
                    .map(|(i, _)| i)
                    .collect();

            if !wound_hand_indices.is_empty() {
                let pool_size = wound_hand_indices.len();
                player.pending.active = Some(ActivePending::SubsetSelection(
                    SubsetSelectionState {
                        kind: SubsetSelectionKind::RestWoundDiscard { wound_hand_indices },
                        pool_size,
                        max_selections: pool_size,
                        min_selections: 0,
                        selected: ArrayVec::new(),
                    },
                ));
                return Ok(ApplyResult {
                    needs_reenumeration: true,
                    game_ended: false,
                });
            }
            // No wounds — fall through to finish rest immediately.
        } else {
            // Slow recovery: hand is all wounds — discard only the chosen wound.
            player.hand.remove(idx);
            player.discard.push(chosen_card);
        }
    }
    // else: empty hand — no discard needed.

    finish_rest(state, player_idx);

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

/// Finalize rest: clear IS_RESTING, set HAS_RESTED + PLAYED_CARD flags.
fn finish_rest(state: &mut GameState, player_idx: usize) {
    let player = &mut state.players[player_idx];
    player.flags.remove(PlayerFlags::IS_RESTING);
    player.flags.insert(PlayerFlags::HAS_RESTED_THIS_TURN);
    player
        .flags
        .insert(PlayerFlags::PLAYED_CARD_FROM_HAND_THIS_TURN);
}

fn apply_declare_block(
    state: &mut GameState,
    player_idx: usize,
    enemy_instance_id: &CombatInstanceId,
    attack_index: usize,
) -> Result<ApplyResult, ApplyError> {
    let combat = state
        .combat
        .as_mut()
        .ok_or_else(|| ApplyError::InternalError("DeclareBlock with no combat".into()))?;

    // Find the enemy
    let enemy = combat
        .enemies
        .iter_mut()
        .find(|e| e.instance_id == *enemy_instance_id)
        .ok_or_else(|| ApplyError::InternalError("DeclareBlock: enemy not found".into()))?;

    let def = get_enemy(enemy.enemy_id.as_str())
        .ok_or_else(|| ApplyError::InternalError("DeclareBlock: unknown enemy".into()))?;

    let player = &state.players[player_idx];
    let block_result = combat_resolution::resolve_block(
        &player.combat_accumulator.block_elements,
        def,
        attack_index,
    );

    if block_result.success {
        // Mark attack as blocked
        if attack_index < enemy.attacks_blocked.len() {
            enemy.attacks_blocked[attack_index] = true;
        }

        // Check if all attacks are now blocked
        let num_attacks = attack_count(def);
        let all_blocked = (0..num_attacks).all(|i| {
            enemy.attacks_blocked.get(i).copied().unwrap_or(false)
                || enemy.attacks_cancelled.get(i).copied().unwrap_or(false)
                || {
                    // Zero-damage attacks don't need blocking
                    let (dmg, _, _) = combat_resolution::get_enemy_attack_info(def, i);
                    dmg == 0
                }
        });
        if all_blocked {
            enemy.is_blocked = true;
        }

        // Burning Shield / Exploding Shield: consume modifier on successful block
        apply_burning_shield_on_block(state, player_idx, enemy_instance_id);
    }

    // Block is consumed (all accumulated block used for this declaration)
    let player = &mut state.players[player_idx];
    player.combat_accumulator.block = 0;
    player.combat_accumulator.block_elements = ElementalValues::default();
    player.combat_accumulator.assigned_block = 0;
    player.combat_accumulator.assigned_block_elements = ElementalValues::default();

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

/// Apply Burning Shield / Exploding Shield effects after a successful block.
///
/// - Attack mode: adds fire attack to the player's combat accumulator
/// - Destroy mode: attempts to defeat the blocked enemy (blocked by fire resistance
///   or arcane immunity)
///
/// The modifier is consumed (removed) on any successful block, regardless of mode outcome.
fn apply_burning_shield_on_block(
    state: &mut GameState,
    player_idx: usize,
    blocked_enemy_id: &CombatInstanceId,
) {
    use realm_types::modifier::{BurningShieldMode, ModifierEffect, ModifierSource};

    let pid = state.players[player_idx].id.clone();
    let shield_idx = state.active_modifiers.iter().position(|m| {
        matches!(&m.effect, ModifierEffect::BurningShieldActive { .. })
            && matches!(
                &m.source,
                ModifierSource::Card { player_id, .. } if *player_id == pid
            )
    });
    let Some(idx) = shield_idx else { return };

    let (mode, attack_value) = match &state.active_modifiers[idx].effect {
        ModifierEffect::BurningShieldActive {
            mode, attack_value, ..
        } => (*mode, *attack_value),
        _ => return,
    };
    // Consumed on ANY successful block, regardless of outcome
    state.active_modifiers.remove(idx);

    match mode {
        BurningShieldMode::Attack => {
            // Fire attack added to accumulator for Attack phase
            let acc = &mut state.players[player_idx].combat_accumulator;
            acc.attack.normal += attack_value;
            acc.attack.normal_elements.fire += attack_value;
        }
        BurningShieldMode::Destroy => {
            // Attempt to destroy the blocked enemy
            let combat = state.combat.as_mut().unwrap();
            let enemy = combat
                .enemies
                .iter_mut()
                .find(|e| e.instance_id == *blocked_enemy_id)
                .unwrap();
            let enemy_id_str = enemy.enemy_id.as_str().to_string();
            let is_summoned = enemy.summoned_by_instance_id.is_some();
            let def = get_enemy(&enemy_id_str).unwrap();

            // Destroy fails if fire-resistant or arcane immune
            let has_fire_resist = def.resistances.contains(&ResistanceElement::Fire);
            let has_arcane_immune = def
                .abilities
                .contains(&EnemyAbilityType::ArcaneImmunity);

            if !has_fire_resist && !has_arcane_immune {
                enemy.is_defeated = true;
                if !is_summoned {
                    state.players[player_idx].fame += def.fame;
                    state.combat.as_mut().unwrap().fame_gained += def.fame;
                }
            }
        }
    }
}

fn apply_declare_attack_inner(
    state: &mut GameState,
    player_idx: usize,
    target_instance_ids: &[CombatInstanceId],
    attack_type: CombatType,
) -> Result<ApplyResult, ApplyError> {
    // Phase 1: Collect indices and compute resolution without holding borrows across mutation.
    let (target_indices, result, available, target_count, defend_assignments) = {
        let combat = state
            .combat
            .as_ref()
            .ok_or_else(|| ApplyError::InternalError("DeclareAttack with no combat".into()))?;

        // Find target indices and definitions
        let mut target_indices: Vec<usize> = Vec::new();
        let mut target_pairs: Vec<(CombatEnemy, &realm_data::enemies::EnemyDefinition)> = Vec::new();

        for target_id in target_instance_ids {
            let (idx, enemy) = combat
                .enemies
                .iter()
                .enumerate()
                .find(|(_, e)| e.instance_id == *target_id)
                .ok_or_else(|| {
                    ApplyError::InternalError(format!(
                        "DeclareAttack: enemy {} not found",
                        target_id.as_str()
                    ))
                })?;

            let def = get_enemy(enemy.enemy_id.as_str()).ok_or_else(|| {
                ApplyError::InternalError("DeclareAttack: unknown enemy".into())
            })?;

            target_indices.push(idx);
            target_pairs.push((enemy.clone(), def));
        }

        // Get available attack for this type
        let accumulator = &state.players[player_idx].combat_accumulator;
        let (total_elements, assigned_elements) = match attack_type {
            CombatType::Melee => (
                &accumulator.attack.normal_elements,
                &accumulator.assigned_attack.normal_elements,
            ),
            CombatType::Ranged => (
                &accumulator.attack.ranged_elements,
                &accumulator.assigned_attack.ranged_elements,
            ),
            CombatType::Siege => (
                &accumulator.attack.siege_elements,
                &accumulator.assigned_attack.siege_elements,
            ),
        };

        let available = combat_resolution::subtract_elements(total_elements, assigned_elements);

        // Build ref pairs for resolution
        let ref_pairs: Vec<(&CombatEnemy, &realm_data::enemies::EnemyDefinition)> =
            target_pairs.iter().map(|(e, d)| (e, *d)).collect();

        // Compute bonus armor (vampiric + defend)
        let defend_assignments = combat_resolution::auto_assign_defend(
            &combat.enemies,
            target_instance_ids,
            &combat.used_defend,
        );

        let mut bonus_armor = std::collections::BTreeMap::new();
        for (enemy, def) in &target_pairs {
            let vampiric = combat
                .vampiric_armor_bonus
                .get(enemy.instance_id.as_str())
                .copied()
                .unwrap_or(0);
            let defend = defend_assignments
                .get(enemy.instance_id.as_str())
                .copied()
                .unwrap_or(0);
            let _ = def; // def already used by resolve_attack via ref_pairs
            bonus_armor.insert(enemy.instance_id.as_str().to_string(), vampiric + defend);
        }

        let result = combat_resolution::resolve_attack(
            &available, &ref_pairs, combat.phase, &bonus_armor, &state.active_modifiers,
        );
        let target_count = target_indices.len();

        (target_indices, result, available, target_count, defend_assignments)
    };

    // Phase 2: Apply mutations
    if result.success {
        let combat = state.combat.as_mut().unwrap();
        for &idx in &target_indices {
            combat.enemies[idx].is_defeated = true;
        }
        combat.fame_gained += result.fame_gained;

        // Record defend usage (defender instance_id → protected target instance_id)
        // We need to find which defenders were assigned by matching the auto_assign_defend logic
        // The defend_assignments map tells us target_id → bonus, but we need defender→target
        // Re-derive from the same logic: iterate defenders in order, assign to targets in order
        {
            let mut newly_used: Vec<String> = Vec::new();
            let defenders: Vec<(String, u32)> = combat
                .enemies
                .iter()
                .filter_map(|e| {
                    if e.is_defeated {
                        return None;
                    }
                    let def = get_enemy(e.enemy_id.as_str())?;
                    if !combat_resolution::has_ability(def, EnemyAbilityType::Defend) {
                        return None;
                    }
                    let defend_value = def.defend?;
                    if combat.used_defend.contains_key(e.instance_id.as_str()) {
                        return None;
                    }
                    Some((e.instance_id.as_str().to_string(), defend_value))
                })
                .collect();

            for target_id in target_instance_ids {
                if !defend_assignments.contains_key(target_id.as_str()) {
                    continue;
                }
                // Find first available defender
                if let Some(defender_id) =
                    defenders.iter().find_map(|(did, _)| {
                        if !newly_used.contains(did)
                            && !combat.used_defend.contains_key(did.as_str())
                        {
                            Some(did.clone())
                        } else {
                            None
                        }
                    })
                {
                    combat.used_defend.insert(
                        defender_id.clone(),
                        target_id.as_str().to_string(),
                    );
                    newly_used.push(defender_id);
                }
            }
        }

        let player = &mut state.players[player_idx];
        player.fame += result.fame_gained;
        player.enemies_defeated_this_turn += target_count as u32;
        player.reputation = (player.reputation as i32 + result.reputation_delta)
            .clamp(-7, 7) as i8;
    }

    // Mark used attack as assigned (consumed whether success or failure)
    let accumulator = &mut state.players[player_idx].combat_accumulator;
    let assigned = match attack_type {
        CombatType::Melee => &mut accumulator.assigned_attack.normal_elements,
        CombatType::Ranged => &mut accumulator.assigned_attack.ranged_elements,
        CombatType::Siege => &mut accumulator.assigned_attack.siege_elements,
    };
    *assigned = combat_resolution::add_elements(assigned, &available);

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

fn apply_spend_move_on_cumbersome(
    state: &mut GameState,
    player_idx: usize,
    enemy_instance_id: &CombatInstanceId,
) -> Result<ApplyResult, ApplyError> {
    // Decrement move points
    let player = &mut state.players[player_idx];
    if player.move_points == 0 {
        return Err(ApplyError::InternalError(
            "SpendMoveOnCumbersome: no move points".into(),
        ));
    }
    player.move_points -= 1;

    // Increment cumbersome reduction
    let combat = state
        .combat
        .as_mut()
        .ok_or_else(|| ApplyError::InternalError("SpendMoveOnCumbersome: no combat".into()))?;

    *combat
        .cumbersome_reductions
        .entry(enemy_instance_id.as_str().to_string())
        .or_insert(0) += 1;

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

/// Find the active `InfluenceToBlockConversion` modifier for this player, if any.
fn active_influence_to_block_conversion(
    state: &GameState,
    player_idx: usize,
) -> Option<(u32, Option<Element>)> {
    let player_id = &state.players[player_idx].id;
    state.active_modifiers.iter().find_map(|m| {
        if m.created_by_player_id != *player_id {
            return None;
        }
        match &m.effect {
            realm_types::modifier::ModifierEffect::InfluenceToBlockConversion {
                cost_per_point,
                element,
            } => Some((*cost_per_point, *element)),
            _ => None,
        }
    })
}

/// Convert `amount` points of block from accumulated influence, per an active
/// `InfluenceToBlockConversion` modifier (Diplomacy).
fn apply_convert_influence_to_block(
    state: &mut GameState,
    player_idx: usize,
    amount: u32,
) -> Result<ApplyResult, ApplyError> {
    let (cost_per_point, element) = active_influence_to_block_conversion(state, player_idx)
        .ok_or_else(|| {
            ApplyError::InternalError(
                "ConvertInfluenceToBlock: no active conversion modifier".into(),
            )
        })?;

    let cost = cost_per_point * amount;
    let player = &mut state.players[player_idx];
    if player.influence_points < cost {
        return Err(ApplyError::InternalError(
            "ConvertInfluenceToBlock: insufficient influence".into(),
        ));
    }

    player.influence_points -= cost;
    player.combat_accumulator.block += amount;
    match element {
        Some(Element::Fire) => player.combat_accumulator.block_elements.fire += amount,
        Some(Element::Ice) => player.combat_accumulator.block_elements.ice += amount,
        Some(Element::ColdFire) => {
            player.combat_accumulator.block_elements.cold_fire += amount
        }
        Some(Element::Physical) | None => {
            player.combat_accumulator.block_elements.physical += amount
        }
    }

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

/// Resolve summon abilities at the start of the Block phase.
///
/// For each undefeated enemy with Summon or SummonGreen:
/// - Draw from Brown (Summon) or Green (SummonGreen) pile
/// - Create CombatEnemy with summoned_by_instance_id linking to summoner
/// - Mark summoner as hidden (doesn't deal damage during Block/AssignDamage)
///
/// For enemies with per-attack Summon (like Dragon Summoner), each Summon attack
/// triggers a separate draw.
fn resolve_summons(state: &mut GameState) -> Result<(), ApplyError> {
    let combat = state
        .combat
        .as_ref()
        .ok_or_else(|| ApplyError::InternalError("resolve_summons: no combat".into()))?;

    // Collect summon requests before mutating
    struct SummonRequest {
        summoner_idx: usize,
        summoner_instance_id: String,
        color: EnemyColor,
        count: usize,
    }

    let mut requests: Vec<SummonRequest> = Vec::new();

    for (idx, enemy) in combat.enemies.iter().enumerate() {
        if enemy.is_defeated {
            continue;
        }

        let def = match get_enemy(enemy.enemy_id.as_str()) {
            Some(d) => d,
            None => continue,
        };

        // Check for ability-level Summon/SummonGreen
        let is_summon = combat_resolution::has_ability(def, EnemyAbilityType::Summon);
        let is_summon_green = combat_resolution::has_ability(def, EnemyAbilityType::SummonGreen);

        if is_summon || is_summon_green {
            let color = if is_summon_green {
                EnemyColor::Green
            } else {
                EnemyColor::Brown
            };

            // Count: 1 summon per ability instance, unless multi-attack with per-attack Summon
            let mut count = 1;
            if let Some(attacks) = def.attacks {
                // Count per-attack Summon abilities
                let per_attack_summons = attacks
                    .iter()
                    .filter(|a| a.ability == Some(EnemyAbilityType::Summon))
                    .count();
                if per_attack_summons > 0 {
                    count = per_attack_summons;
                }
            }

            requests.push(SummonRequest {
                summoner_idx: idx,
                summoner_instance_id: enemy.instance_id.as_str().to_string(),
                color,
                count,
            });
            continue;
        }

        // Also check per-attack Summon for enemies that don't have ability-level Summon
        // (shouldn't happen in practice, but defensive)
        if let Some(attacks) = def.attacks {
            let per_attack_summons: Vec<_> = attacks
                .iter()
                .filter(|a| {
                    a.ability == Some(EnemyAbilityType::Summon)
                        || a.ability == Some(EnemyAbilityType::SummonGreen)
                })
                .collect();

            if !per_attack_summons.is_empty() {
                let color = if per_attack_summons
                    .iter()
                    .any(|a| a.ability == Some(EnemyAbilityType::SummonGreen))
                {
                    EnemyColor::Green
                } else {
                    EnemyColor::Brown
                };

                requests.push(SummonRequest {
                    summoner_idx: idx,
                    summoner_instance_id: enemy.instance_id.as_str().to_string(),
                    color,
                    count: per_attack_summons.len(),
                });
            }
        }
    }

    if requests.is_empty() {
        return Ok(());
    }

    // Process summon requests — draw from piles (needs &mut state for rng + enemy_tokens)
    struct SummonedEnemy {
        instance_id: String,
        enemy_id: String,
        num_attacks: usize,
        summoner_instance_id: String,
    }

    let mut summoned_enemies: Vec<SummonedEnemy> = Vec::new();
    let mut summoner_indices_to_hide: Vec<usize> = Vec::new();
    let mut next_id = state.combat.as_ref().unwrap().enemies.len();

    for request in &requests {
        let mut any_summoned = false;

        for _ in 0..request.count {
            let token =
                draw_enemy_token(&mut state.enemy_tokens, request.color, &mut state.rng);

            let token_id = match token {
                Some(t) => t,
                None => continue,
            };

            let enemy_id_str = enemy_id_from_token(&token_id);
            let summoned_def = match get_enemy(&enemy_id_str) {
                Some(d) => d,
                None => continue,
            };

            let num_attacks = attack_count(summoned_def);
            let instance_id = format!("summoned_{}_{}", next_id, enemy_id_str);
            next_id += 1;

            summoned_enemies.push(SummonedEnemy {
                instance_id,
                enemy_id: enemy_id_str,
                num_attacks,
                summoner_instance_id: request.summoner_instance_id.clone(),
            });

            any_summoned = true;
        }

        if any_summoned {
            summoner_indices_to_hide.push(request.summoner_idx);
        }
    }

    // Apply mutations to combat state
    let combat = state.combat.as_mut().unwrap();

    for summoned in summoned_enemies {
        combat.enemies.push(CombatEnemy {
            instance_id: CombatInstanceId::from(summoned.instance_id),
            enemy_id: EnemyId::from(summoned.enemy_id),
            is_blocked: false,
            is_defeated: false,
            damage_assigned: false,
            is_required_for_conquest: false,
            summoned_by_instance_id: Some(CombatInstanceId::from(
                summoned.summoner_instance_id,
            )),
            is_summoner_hidden: false,
            attacks_blocked: vec![false; summoned.num_attacks],
            attacks_damage_assigned: vec![false; summoned.num_attacks],
            attacks_cancelled: vec![false; summoned.num_attacks],
        });
    }

    for &idx in &summoner_indices_to_hide {
        combat.enemies[idx].is_summoner_hidden = true;
    }

    Ok(())
}

fn apply_end_combat_phase(
    state: &mut GameState,
    player_idx: usize,
) -> Result<ApplyResult, ApplyError> {
    let combat = state
        .combat
        .as_mut()
        .ok_or_else(|| ApplyError::InternalError("EndCombatPhase with no combat".into()))?;

    match combat.phase {
        CombatPhase::RangedSiege => {
            // Clear ranged/siege attack pools (consumed by this phase)
            let accumulator = &mut state.players[player_idx].combat_accumulator;
            accumulator.attack.ranged = 0;
            accumulator.attack.siege = 0;
            accumulator.attack.ranged_elements = ElementalValues::default();
            accumulator.attack.siege_elements = ElementalValues::default();
            accumulator.assigned_attack.ranged = 0;
            accumulator.assigned_attack.siege = 0;
            accumulator.assigned_attack.ranged_elements = ElementalValues::default();
            accumulator.assigned_attack.siege_elements = ElementalValues::default();

            state.combat.as_mut().unwrap().phase = CombatPhase::Block;

            // Resolve summons at the start of Block phase
            resolve_summons(state)?;
        }
        CombatPhase::Block => {
            // Check DefeatIfBlocked: enemies with the modifier whose ALL attacks are blocked → defeated
            {
                let combat = state.combat.as_ref().unwrap();
                let mut defeat_indices: Vec<usize> = Vec::new();
                for (idx, enemy) in combat.enemies.iter().enumerate() {
                    if enemy.is_defeated {
                        continue;
                    }
                    if !combat_resolution::has_defeat_if_blocked(
                        &state.active_modifiers,
                        enemy.instance_id.as_str(),
                    ) {
                        continue;
                    }
                    // Check if ALL attacks are blocked
                    let all_blocked = enemy
                        .attacks_blocked
                        .iter()
                        .enumerate()
                        .all(|(i, blocked)| {
                            *blocked || enemy.attacks_cancelled.get(i).copied().unwrap_or(false)
                        });
                    if all_blocked && !enemy.attacks_blocked.is_empty() {
                        defeat_indices.push(idx);
                    }
                }

                // Award fame and mark defeated
                for idx in &defeat_indices {
                    let enemy = &state.combat.as_ref().unwrap().enemies[*idx];
                    let enemy_id_str = enemy.enemy_id.as_str().to_string();
                    let is_summoned = enemy.summoned_by_instance_id.is_some();
                    if let Some(def) = get_enemy(&enemy_id_str) {
                        if !is_summoned {
                            state.players[player_idx].fame += def.fame;
                            state.combat.as_mut().unwrap().fame_gained += def.fame;
                        }
                    }
                    state.combat.as_mut().unwrap().enemies[*idx].is_defeated = true;
                }
            }

            // Clear block accumulator
            let accumulator = &mut state.players[player_idx].combat_accumulator;
            accumulator.block = 0;
            accumulator.block_elements = ElementalValues::default();
            accumulator.swift_block_elements = ElementalValues::default();
            accumulator.assigned_block = 0;
            accumulator.assigned_block_elements = ElementalValues::default();

            // Set all_damage_blocked_this_phase for conditional effects (e.g. BlockedSuccessfully)
            let all_blocked = {
                let combat = state.combat.as_ref().unwrap();
                let undefeated: Vec<&CombatEnemy> =
                    combat.enemies.iter().filter(|e| !e.is_defeated).collect();
                undefeated.is_empty()
                    || undefeated.iter().all(|e| e.is_blocked)
            };
            state.combat.as_mut().unwrap().all_damage_blocked_this_phase = all_blocked;

            // Check if there are units available and unblocked damage exists
            // If units present, enter interactive AssignDamage phase.
            // Otherwise, auto-assign all to hero (existing behavior).
            let has_eligible_units = state.combat.as_ref().unwrap().units_allowed
                && state.players[player_idx]
                    .units
                    .iter()
                    .any(|u| u.state == UnitState::Ready || u.state == UnitState::Spent);

            if has_eligible_units && has_unassigned_damage(state) {
                state.combat.as_mut().unwrap().phase = CombatPhase::AssignDamage;
            } else {
                // Auto-assign all damage to hero (no units to choose)
                apply_auto_damage(state, player_idx)?;
                state.combat.as_mut().unwrap().phase = CombatPhase::AssignDamage;
            }
        }
        CombatPhase::AssignDamage => {
            // Apply paralyze effect: if any unblocked Paralyze attack dealt wounds to hero,
            // discard all non-wound cards from hand
            let combat = state.combat.as_ref().unwrap();
            if combat.has_paralyze_damage_to_hero {
                let player = &mut state.players[player_idx];
                let non_wounds: Vec<CardId> = player
                    .hand
                    .iter()
                    .filter(|c| c.as_str() != "wound")
                    .cloned()
                    .collect();
                player.hand.retain(|c| c.as_str() == "wound");
                player.discard.extend(non_wounds);
            }

            // Remove undefeated summoned enemies (they don't persist to Attack phase)
            let combat = state.combat.as_mut().unwrap();
            combat.enemies.retain(|e| {
                e.summoned_by_instance_id.is_none() || e.is_defeated
            });

            // Unhide summoners
            for enemy in &mut combat.enemies {
                enemy.is_summoner_hidden = false;
            }

            combat.phase = CombatPhase::Attack;

            // Dueling: grant Attack 1 Physical at Block→Attack transition
            apply_dueling_attack_bonus(state, player_idx);
        }
        CombatPhase::Attack => {
            // End combat — remove defeated enemies from map, discard tokens
            end_combat(state, player_idx);
            return Ok(ApplyResult {
                needs_reenumeration: true,
                game_ended: false,
            });
        }
    }

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

/// Auto-process damage from unblocked enemy attacks during Block→AssignDamage transition.
///
/// For each undefeated enemy with unblocked attacks:
/// - Calculate wounds (ceil(damage / hero_armor), Brutal doubles)
/// - Add wound cards to player hand
/// - If Poison: also add wound to discard pile
/// - Mark attacks as damage_assigned
fn apply_auto_damage(
    state: &mut GameState,
    player_idx: usize,
) -> Result<(), ApplyError> {
    let combat = state
        .combat
        .as_ref()
        .ok_or_else(|| ApplyError::InternalError("apply_auto_damage: no combat".into()))?;

    let hero_armor = state.players[player_idx].armor;

    // Collect damage info before mutating
    struct DamageInfo {
        enemy_idx: usize,
        attack_index: usize,
        wounds: u32,
        is_poison: bool,
        is_paralyze: bool,
    }

    let mut damage_entries: Vec<DamageInfo> = Vec::new();

    let active_modifiers = &state.active_modifiers;

    for (enemy_idx, enemy) in combat.enemies.iter().enumerate() {
        if enemy.is_defeated {
            continue;
        }

        // Hidden summoners don't deal damage (their summoned enemies attack instead)
        if enemy.is_summoner_hidden {
            continue;
        }

        // Check if enemy's attacks are skipped (e.g., cancel attack, freeze)
        if combat_resolution::is_enemy_attacks_skipped(active_modifiers, enemy.instance_id.as_str()) {
            continue;
        }

        let def = match get_enemy(enemy.enemy_id.as_str()) {
            Some(d) => d,
            None => continue,
        };

        let num_attacks = attack_count(def);

        // Get attack modifier for this enemy (from weaken, taunt, etc.)
        let (atk_change, atk_minimum) =
            combat_resolution::get_enemy_attack_modifier(active_modifiers, enemy.instance_id.as_str());

        for attack_index in 0..num_attacks {
            // Skip blocked, cancelled, or already-assigned attacks
            if enemy.attacks_blocked.get(attack_index).copied().unwrap_or(false) {
                continue;
            }
            if enemy.attacks_cancelled.get(attack_index).copied().unwrap_or(false) {
                continue;
            }
            if enemy.attacks_damage_assigned.get(attack_index).copied().unwrap_or(false) {
                continue;
            }

            // Apply cumbersome reduction to damage
            let cumbersome_reduction = combat
                .cumbersome_reductions
                .get(enemy.instance_id.as_str())
                .copied()
                .unwrap_or(0);

            let (base_damage, _element, _is_swift) =
                combat_resolution::get_enemy_attack_info(def, attack_index);

            // Apply attack modifier (weaken, taunt, etc.)
            let modified_damage = if atk_change != 0 {
                (base_damage as i32 + atk_change).max(atk_minimum as i32) as u32
            } else {
                base_damage
            };

            let reduced_damage = modified_damage.saturating_sub(cumbersome_reduction);

            // If cumbersome reduces to 0, skip (considered blocked)
            if reduced_damage == 0 && base_damage > 0 {
                // Mark this attack as blocked for Elusive armor calculation
                // (will be handled via is_blocked flag update below)
                continue;
            }

            let (wounds, is_poison) =
                combat_resolution::calculate_hero_wounds_with_damage(
                    def, attack_index, hero_armor, reduced_damage,
                );

            let is_paralyze = combat_resolution::has_ability(def, EnemyAbilityType::Paralyze);

            if wounds > 0 || is_poison {
                damage_entries.push(DamageInfo {
                    enemy_idx,
                    attack_index,
                    wounds,
                    is_poison,
                    is_paralyze,
                });
            }
        }
    }

    // Check if cumbersome reductions make enemies count as fully blocked
    // (important for Elusive: blocked enemies use lower armor)
    {
        let combat = state.combat.as_ref().unwrap();
        let mut cumbersome_blocked: Vec<usize> = Vec::new();

        for (enemy_idx, enemy) in combat.enemies.iter().enumerate() {
            if enemy.is_defeated || enemy.is_blocked {
                continue;
            }
            let cumbersome_reduction = combat
                .cumbersome_reductions
                .get(enemy.instance_id.as_str())
                .copied()
                .unwrap_or(0);
            if cumbersome_reduction == 0 {
                continue;
            }

            let def = match get_enemy(enemy.enemy_id.as_str()) {
                Some(d) => d,
                None => continue,
            };

            let num_attacks = attack_count(def);
            let all_reduced_to_zero = (0..num_attacks).all(|i| {
                if enemy.attacks_blocked.get(i).copied().unwrap_or(false) {
                    return true;
                }
                if enemy.attacks_cancelled.get(i).copied().unwrap_or(false) {
                    return true;
                }
                let (dmg, _, _) = combat_resolution::get_enemy_attack_info(def, i);
                dmg == 0 || dmg.saturating_sub(cumbersome_reduction) == 0
            });

            if all_reduced_to_zero {
                cumbersome_blocked.push(enemy_idx);
            }
        }

        let combat = state.combat.as_mut().unwrap();
        for idx in cumbersome_blocked {
            combat.enemies[idx].is_blocked = true;
        }
    }

    // Apply damage
    let mut total_wounds_to_hand = 0u32;
    let mut total_wounds_to_discard = 0u32;

    for entry in &damage_entries {
        total_wounds_to_hand += entry.wounds;
        if entry.is_poison {
            // Poison: wounds also go to discard (one extra wound per attack)
            total_wounds_to_discard += entry.wounds;
        }
    }

    // Add wound cards to hand
    let player = &mut state.players[player_idx];
    for _ in 0..total_wounds_to_hand {
        player.hand.push(CardId::from("wound"));
    }

    // Poison: add extra wounds to discard
    for _ in 0..total_wounds_to_discard {
        player.discard.push(CardId::from("wound"));
    }

    player.wounds_received_this_turn.hand += total_wounds_to_hand;
    player.wounds_received_this_turn.discard += total_wounds_to_discard;

    // Update combat state
    let combat = state.combat.as_mut().unwrap();
    combat.wounds_this_combat += total_wounds_to_hand + total_wounds_to_discard;
    if total_wounds_to_hand > 0 {
        combat.wounds_added_to_hand_this_combat = true;
    }

    // Update vampiric armor bonus: each Vampiric enemy gains +1 armor per wound to hand
    if total_wounds_to_hand > 0 {
        for enemy in &combat.enemies {
            if enemy.is_defeated {
                continue;
            }
            let def = match get_enemy(enemy.enemy_id.as_str()) {
                Some(d) => d,
                None => continue,
            };
            if combat_resolution::has_ability(def, EnemyAbilityType::Vampiric) {
                let instance_id = enemy.instance_id.as_str().to_string();
                *combat.vampiric_armor_bonus.entry(instance_id).or_insert(0) +=
                    total_wounds_to_hand;
            }
        }
    }

    // Mark attacks as damage assigned
    for entry in &damage_entries {
        if let Some(enemy) = combat.enemies.get_mut(entry.enemy_idx) {
            if entry.attack_index < enemy.attacks_damage_assigned.len() {
                enemy.attacks_damage_assigned[entry.attack_index] = true;
            }
            enemy.damage_assigned = true;
        }
    }

    // Paralyze: if any unblocked Paralyze attack dealt wounds, discard all non-wound cards from hand
    let has_paralyze_damage = damage_entries.iter().any(|e| e.is_paralyze && e.wounds > 0);
    if has_paralyze_damage {
        let player = &mut state.players[player_idx];
        let non_wounds: Vec<CardId> = player
            .hand
            .iter()
            .filter(|c| c.as_str() != "wound")
            .cloned()
            .collect();
        player.hand.retain(|c| c.as_str() == "wound");
        player.discard.extend(non_wounds);
    }

    Ok(())
}

/// Check if there are any unassigned, unblocked, uncancelled attacks with damage > 0.
fn has_unassigned_damage(state: &GameState) -> bool {
    let combat = match state.combat.as_ref() {
        Some(c) => c,
        None => return false,
    };
    for enemy in &combat.enemies {
        if enemy.is_defeated || enemy.is_summoner_hidden {
            continue;
        }
        if combat_resolution::is_enemy_attacks_skipped(
            &state.active_modifiers,
            enemy.instance_id.as_str(),
        ) {
            continue;
        }
        let def = match get_enemy(enemy.enemy_id.as_str()) {
            Some(d) => d,
            None => continue,
        };
        let num_attacks = attack_count(def);
        for i in 0..num_attacks {
            if enemy.attacks_blocked.get(i).copied().unwrap_or(false) {
                continue;
            }
            if enemy.attacks_cancelled.get(i).copied().unwrap_or(false) {
                continue;
            }
            if enemy.attacks_damage_assigned.get(i).copied().unwrap_or(true) {
                continue;
            }
            let (dmg, _, _) = combat_resolution::get_enemy_attack_info(def, i);
            if dmg > 0 {
                return true;
            }
        }
    }
    false
}

/// Assign a specific enemy attack's damage to the hero.
fn apply_assign_damage_to_hero(
    state: &mut GameState,
    player_idx: usize,
    enemy_index: usize,
    attack_index: usize,
) -> Result<ApplyResult, ApplyError> {
    let combat = state.combat.as_ref().ok_or_else(|| {
        ApplyError::InternalError("AssignDamageToHero: no combat".into())
    })?;

    let enemy = combat.enemies.get(enemy_index).ok_or_else(|| {
        ApplyError::InternalError(format!("AssignDamageToHero: enemy_index {} out of range", enemy_index))
    })?;

    let def = get_enemy(enemy.enemy_id.as_str()).ok_or_else(|| {
        ApplyError::InternalError(format!("AssignDamageToHero: unknown enemy '{}'", enemy.enemy_id.as_str()))
    })?;

    let hero_armor = state.players[player_idx].armor;

    // Get attack modifier for this enemy
    let (atk_change, atk_minimum) =
        combat_resolution::get_enemy_attack_modifier(&state.active_modifiers, enemy.instance_id.as_str());

    // Apply cumbersome reduction
    let cumbersome_reduction = combat
        .cumbersome_reductions
        .get(enemy.instance_id.as_str())
        .copied()
        .unwrap_or(0);

    let (base_damage, _element, _is_swift) =
        combat_resolution::get_enemy_attack_info(def, attack_index);

    let modified_damage = if atk_change != 0 {
        (base_damage as i32 + atk_change).max(atk_minimum as i32) as u32
    } else {
        base_damage
    };

    let reduced_damage = modified_damage.saturating_sub(cumbersome_reduction);

    let (wounds, is_poison) =
        combat_resolution::calculate_hero_wounds_with_damage(def, attack_index, hero_armor, reduced_damage);

    let is_paralyze = combat_resolution::has_ability(def, EnemyAbilityType::Paralyze);

    // Apply wounds to hero
    let player = &mut state.players[player_idx];
    for _ in 0..wounds {
        player.hand.push(CardId::from("wound"));
    }
    if is_poison {
        for _ in 0..wounds {
            player.discard.push(CardId::from("wound"));
        }
    }

    player.wounds_received_this_turn.hand += wounds;
    if is_poison {
        player.wounds_received_this_turn.discard += wounds;
    }

    // Update combat state
    let combat = state.combat.as_mut().unwrap();
    combat.wounds_this_combat += wounds + if is_poison { wounds } else { 0 };
    if wounds > 0 {
        combat.wounds_added_to_hand_this_combat = true;
    }

    // Update vampiric armor bonus
    if wounds > 0 {
        for enemy in &combat.enemies {
            if enemy.is_defeated {
                continue;
            }
            let edef = match get_enemy(enemy.enemy_id.as_str()) {
                Some(d) => d,
                None => continue,
            };
            if combat_resolution::has_ability(edef, EnemyAbilityType::Vampiric) {
                let instance_id = enemy.instance_id.as_str().to_string();
                *combat.vampiric_armor_bonus.entry(instance_id).or_insert(0) += wounds;
            }
        }
    }

    // Mark attack as assigned
    combat.enemies[enemy_index].attacks_damage_assigned[attack_index] = true;
    combat.enemies[enemy_index].damage_assigned = true;

    // Track paralyze for end of assignment
    if is_paralyze && wounds > 0 {
        combat.has_paralyze_damage_to_hero = true;
    }

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

/// Assign a specific enemy attack's damage to a unit.
fn apply_assign_damage_to_unit(
    state: &mut GameState,
    player_idx: usize,
    enemy_index: usize,
    attack_index: usize,
    unit_instance_id: &realm_types::ids::UnitInstanceId,
) -> Result<ApplyResult, ApplyError> {
    let combat = state.combat.as_ref().ok_or_else(|| {
        ApplyError::InternalError("AssignDamageToUnit: no combat".into())
    })?;

    let enemy = combat.enemies.get(enemy_index).ok_or_else(|| {
        ApplyError::InternalError(format!("AssignDamageToUnit: enemy_index {} out of range", enemy_index))
    })?;

    let def = get_enemy(enemy.enemy_id.as_str()).ok_or_else(|| {
        ApplyError::InternalError(format!("AssignDamageToUnit: unknown enemy '{}'", enemy.enemy_id.as_str()))
    })?;

    // Get attack modifier for this enemy
    let (atk_change, atk_minimum) =
        combat_resolution::get_enemy_attack_modifier(&state.active_modifiers, enemy.instance_id.as_str());

    // Apply cumbersome reduction
    let cumbersome_reduction = combat
        .cumbersome_reductions
        .get(enemy.instance_id.as_str())
        .copied()
        .unwrap_or(0);

    let (base_damage, attack_element, _is_swift) =
        combat_resolution::get_enemy_attack_info(def, attack_index);

    let modified_damage = if atk_change != 0 {
        (base_damage as i32 + atk_change).max(atk_minimum as i32) as u32
    } else {
        base_damage
    };

    let reduced_damage = modified_damage.saturating_sub(cumbersome_reduction);

    let is_poison = combat_resolution::has_ability(def, EnemyAbilityType::Poison);
    let is_paralyze = combat_resolution::has_ability(def, EnemyAbilityType::Paralyze);
    let is_brutal = combat_resolution::has_ability(def, EnemyAbilityType::Brutal);
    let effective_damage = if is_brutal { reduced_damage * 2 } else { reduced_damage };

    // Find the unit
    let unit_idx = state.players[player_idx]
        .units
        .iter()
        .position(|u| u.instance_id == *unit_instance_id)
        .ok_or_else(|| {
            ApplyError::InternalError(format!(
                "AssignDamageToUnit: unit '{}' not found",
                unit_instance_id.as_str()
            ))
        })?;

    let unit = &state.players[player_idx].units[unit_idx];
    let unit_id = unit.unit_id.clone();
    let _unit_def = realm_data::units::get_unit(unit_id.as_str()).ok_or_else(|| {
        ApplyError::InternalError(format!("AssignDamageToUnit: unknown unit def '{}'", unit_id.as_str()))
    })?;

    // Collect unit's resistances: base from definition + granted by modifiers
    let unit_resistances: Vec<ResistanceElement> = {
        let mut resistances = Vec::new();
        // Check for GrantResistances modifiers (e.g., from Altem Guardians)
        for m in &state.active_modifiers {
            if let realm_types::modifier::ModifierEffect::GrantResistances { resistances: granted } = &m.effect {
                let scope_matches = matches!(&m.scope, realm_types::modifier::ModifierScope::AllUnits)
                    || matches!(&m.scope, realm_types::modifier::ModifierScope::SelfScope);
                if scope_matches {
                    for r in granted {
                        if !resistances.contains(r) {
                            resistances.push(*r);
                        }
                    }
                }
            }
        }
        resistances
    };

    let damage_result = combat_resolution::calculate_unit_damage(
        effective_damage,
        attack_element,
        is_poison,
        is_paralyze,
        unit.level,
        unit.wounded,
        unit.used_resistance_this_combat,
        &unit_resistances,
    );

    // Apply result to unit
    if damage_result.unit_destroyed {
        state.players[player_idx].units.remove(unit_idx);
    } else {
        let unit = &mut state.players[player_idx].units[unit_idx];
        if damage_result.unit_wounded {
            unit.wounded = true;
        }
        if damage_result.resistance_used {
            unit.used_resistance_this_combat = true;
        }
    }

    // Mark attack as assigned
    let combat = state.combat.as_mut().unwrap();
    combat.enemies[enemy_index].attacks_damage_assigned[attack_index] = true;
    combat.enemies[enemy_index].damage_assigned = true;

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

// =============================================================================
// Skill activation
// =============================================================================

fn apply_use_skill(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
) -> Result<ApplyResult, ApplyError> {
    use realm_data::skills::{get_skill, SkillUsageType};

    let def = get_skill(skill_id.as_str()).ok_or_else(|| {
        ApplyError::InternalError(format!("Unknown skill: {}", skill_id.as_str()))
    })?;

    let _effect = def.effect.ok_or_else(|| {
        ApplyError::InternalError(format!("Skill {} has no effect", skill_id.as_str()))
    })?;

    // Mark cooldown
    let player = &mut state.players[player_idx];
    match def.usage_type {
        SkillUsageType::OncePerTurn => {
            player
                .skill_cooldowns
                .used_this_turn
                .push(skill_id.clone());
        }
        SkillUsageType::OncePerRound | SkillUsageType::Interactive => {
            player
                .skill_cooldowns
                .used_this_round
                .push(skill_id.clone());
        }
        _ => {}
    }

    // Motivation cross-hero cooldown: mark all motivation skill IDs as used this round
    // so no other player (or this player) can use any motivation until round end.
    if def.is_motivation {
        // The skill itself is already marked above. The cross-player check happens
        // in enumeration by scanning all players' used_this_round for motivation skills.
        // No extra action needed here.
    }

    // Custom skill handlers
    match skill_id.as_str() {
        "arythea_power_of_pain" => return apply_power_of_pain(state, player_idx, skill_id),
        "tovak_i_dont_give_a_damn" => return apply_i_dont_give_a_damn(state, player_idx, skill_id),
        "tovak_who_needs_magic" => return apply_who_needs_magic(state, player_idx, skill_id),
        "goldyx_universal_power" => return apply_universal_power(state, player_idx, skill_id),
        "braevalar_secret_ways" => return apply_secret_ways(state, player_idx, skill_id),
        "krang_regenerate" => return apply_regenerate(state, player_idx, skill_id, BasicManaColor::Red),
        "braevalar_regenerate" => return apply_regenerate(state, player_idx, skill_id, BasicManaColor::Green),
        "wolfhawk_dueling" => return apply_dueling(state, player_idx, skill_id),
        "arythea_invocation" => return apply_invocation(state, player_idx, skill_id),
        "arythea_polarization" => return apply_polarization(state, player_idx, skill_id),
        "krang_curse" => return apply_curse(state, player_idx, skill_id),
        "braevalar_forked_lightning" => return apply_forked_lightning(state, player_idx, skill_id),
        "wolfhawk_know_your_prey" => return apply_know_your_prey(state, player_idx, skill_id),
        "wolfhawk_wolfs_howl" => return apply_wolfs_howl(state, player_idx, skill_id),
        "krang_puppet_master" => return apply_puppet_master(state, player_idx, skill_id),
        "braevalar_shapeshift" => return apply_shapeshift(state, player_idx, skill_id),
        "norowas_prayer_of_weather" => return apply_prayer_of_weather(state, player_idx, skill_id),
        "arythea_ritual_of_pain" => return apply_ritual_of_pain(state, player_idx, skill_id),
        "braevalar_natures_vengeance" => return apply_natures_vengeance(state, player_idx, skill_id),
        "tovak_mana_overload" => return apply_mana_overload(state, player_idx, skill_id),
        "goldyx_source_opening" => return apply_source_opening(state, player_idx, skill_id),
        "krang_master_of_chaos" => return apply_master_of_chaos(state, player_idx, skill_id),
        _ => {}
    }

    // Create effect queue and resolve
    let mut queue = effect_queue::EffectQueue::new();
    queue.push(_effect, None);
    let drain_result = queue.drain(state, player_idx);

    match drain_result {
        effect_queue::DrainResult::Complete => {}
        effect_queue::DrainResult::NeedsChoice {
            options,
            continuation,
            resolution,
        } => {
            let cont_entries: Vec<realm_types::pending::ContinuationEntry> = continuation
                .into_iter()
                .map(|qe| realm_types::pending::ContinuationEntry {
                    effect: qe.effect,
                    source_card_id: qe.source_card_id,
                })
                .collect();
            state.players[player_idx].pending.active =
                Some(ActivePending::Choice(realm_types::pending::PendingChoice {
                    card_id: None,
                    skill_id: Some(skill_id.clone()),
                    unit_instance_id: None,
                    options,
                    continuation: cont_entries,
                    movement_bonus_applied: false,
                    resolution,
                }));
        }
        effect_queue::DrainResult::PendingSet => {
            // A custom pending was set directly (e.g., SelectCombatEnemy).
        }
    }

    // Note: skills do NOT set HAS_TAKEN_ACTION_THIS_TURN or PLAYED_CARD_FROM_HAND_THIS_TURN

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

// =============================================================================
// Passive + sideways value skill handlers
// =============================================================================

/// Push passive (Permanent) modifiers for a skill when it's acquired.
pub(crate) fn push_passive_skill_modifiers(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
) {
    let passives = realm_data::skills::get_passive_modifiers(skill_id.as_str());
    for effect in passives {
        push_skill_modifier(
            state,
            player_idx,
            skill_id,
            realm_types::modifier::ModifierDuration::Permanent,
            realm_types::modifier::ModifierScope::SelfScope,
            effect,
        );
    }
}

/// Push a modifier with Skill source for the current player.
pub(crate) fn push_skill_modifier(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
    duration: realm_types::modifier::ModifierDuration,
    scope: realm_types::modifier::ModifierScope,
    effect: realm_types::modifier::ModifierEffect,
) {
    use realm_types::ids::ModifierId;
    use realm_types::modifier::{ActiveModifier, ModifierSource};

    let player_id = state.players[player_idx].id.clone();
    let modifier_count = state.active_modifiers.len();
    let modifier_id = format!(
        "mod_{}_r{}_t{}",
        modifier_count, state.round, state.current_player_index
    );
    state.active_modifiers.push(ActiveModifier {
        id: ModifierId::from(modifier_id.as_str()),
        source: ModifierSource::Skill {
            skill_id: skill_id.clone(),
            player_id: player_id.clone(),
        },
        duration,
        scope,
        effect,
        created_at_round: state.round,
        created_by_player_id: player_id,
    });
}

fn apply_power_of_pain(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
) -> Result<ApplyResult, ApplyError> {
    use realm_types::modifier::{ModifierDuration, ModifierEffect, ModifierScope, RuleOverride};

    // Push RuleOverride: WoundsPlayableSideways
    push_skill_modifier(
        state,
        player_idx,
        skill_id,
        ModifierDuration::Turn,
        ModifierScope::SelfScope,
        ModifierEffect::RuleOverride {
            rule: RuleOverride::WoundsPlayableSideways,
        },
    );
    // Push SidewaysValue: wounds get value 2
    push_skill_modifier(
        state,
        player_idx,
        skill_id,
        ModifierDuration::Turn,
        ModifierScope::SelfScope,
        ModifierEffect::SidewaysValue {
            new_value: 2,
            for_wounds: true,
            condition: None,
            mana_color: None,
            for_card_types: vec![],
        },
    );

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

fn apply_i_dont_give_a_damn(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
) -> Result<ApplyResult, ApplyError> {
    use realm_types::modifier::{ModifierDuration, ModifierEffect, ModifierScope};

    // Base: all non-wound cards sideways value +2
    push_skill_modifier(
        state,
        player_idx,
        skill_id,
        ModifierDuration::Turn,
        ModifierScope::SelfScope,
        ModifierEffect::SidewaysValue {
            new_value: 2,
            for_wounds: false,
            condition: None,
            mana_color: None,
            for_card_types: vec![],
        },
    );
    // Bonus: AA, Spell, Artifact get +3
    push_skill_modifier(
        state,
        player_idx,
        skill_id,
        ModifierDuration::Turn,
        ModifierScope::SelfScope,
        ModifierEffect::SidewaysValue {
            new_value: 3,
            for_wounds: false,
            condition: None,
            mana_color: None,
            for_card_types: vec![
                DeedCardType::AdvancedAction,
                DeedCardType::Spell,
                DeedCardType::Artifact,
            ],
        },
    );

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

fn apply_who_needs_magic(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
) -> Result<ApplyResult, ApplyError> {
    use realm_types::modifier::{ModifierDuration, ModifierEffect, ModifierScope, RuleOverride, SidewaysCondition};

    // Base: all non-wound cards sideways value +2
    push_skill_modifier(
        state,
        player_idx,
        skill_id,
        ModifierDuration::Turn,
        ModifierScope::SelfScope,
        ModifierEffect::SidewaysValue {
            new_value: 2,
            for_wounds: false,
            condition: None,
            mana_color: None,
            for_card_types: vec![],
        },
    );
    // Bonus: +3 if no mana source die used
    push_skill_modifier(
        state,
        player_idx,
        skill_id,
        ModifierDuration::Turn,
        ModifierScope::SelfScope,
        ModifierEffect::SidewaysValue {
            new_value: 3,
            for_wounds: false,
            condition: Some(SidewaysCondition::NoManaUsed),
            mana_color: None,
            for_card_types: vec![],
        },
    );
    // If no mana used yet, block Source for the rest of turn
    if !state.players[player_idx]
        .flags
        .contains(PlayerFlags::USED_MANA_FROM_SOURCE)
    {
        push_skill_modifier(
            state,
            player_idx,
            skill_id,
            ModifierDuration::Turn,
            ModifierScope::SelfScope,
            ModifierEffect::RuleOverride {
                rule: RuleOverride::SourceBlocked,
            },
        );
    }

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

fn apply_universal_power(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
) -> Result<ApplyResult, ApplyError> {
    use realm_types::effect::CardEffect;
    use realm_types::pending::{ChoiceResolution, PendingChoice};

    // Collect available basic mana colors from tokens
    let player = &state.players[player_idx];
    let mut available_colors: Vec<BasicManaColor> = Vec::new();
    let mut seen = [false; 4];
    for token in &player.pure_mana {
        let idx = match token.color {
            ManaColor::Red => Some(0),
            ManaColor::Blue => Some(1),
            ManaColor::Green => Some(2),
            ManaColor::White => Some(3),
            _ => None,
        };
        if let Some(i) = idx {
            if !seen[i] {
                seen[i] = true;
                available_colors.push(match i {
                    0 => BasicManaColor::Red,
                    1 => BasicManaColor::Blue,
                    2 => BasicManaColor::Green,
                    _ => BasicManaColor::White,
                });
            }
        }
    }

    if available_colors.is_empty() {
        return Err(ApplyError::InternalError(
            "Universal Power: no basic mana tokens available".into(),
        ));
    }

    if available_colors.len() == 1 {
        // Auto-consume the single option
        let color = available_colors[0];
        let mana_color = ManaColor::from(color);
        let player = &mut state.players[player_idx];
        if let Some(pos) = player.pure_mana.iter().position(|t| t.color == mana_color) {
            player.pure_mana.remove(pos);
        }
        push_universal_power_modifiers(state, player_idx, skill_id, color);
    } else {
        // Multiple options: set pending choice
        let options: Vec<CardEffect> = available_colors
            .iter()
            .map(|_| CardEffect::Noop)
            .collect();
        state.players[player_idx].pending.active =
            Some(ActivePending::Choice(PendingChoice {
                card_id: None,
                skill_id: Some(skill_id.clone()),
                unit_instance_id: None,
                options,
                continuation: vec![],
                movement_bonus_applied: false,
                resolution: ChoiceResolution::UniversalPowerMana {
                    available_colors,
                },
            }));
    }

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

pub(crate) fn push_universal_power_modifiers(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
    color: BasicManaColor,
) {
    use realm_types::modifier::{ModifierDuration, ModifierEffect, ModifierScope, SidewaysCondition};

    // Base: all non-wound cards sideways value +3
    push_skill_modifier(
        state,
        player_idx,
        skill_id,
        ModifierDuration::Turn,
        ModifierScope::SelfScope,
        ModifierEffect::SidewaysValue {
            new_value: 3,
            for_wounds: false,
            condition: None,
            mana_color: None,
            for_card_types: vec![],
        },
    );
    // Bonus: +4 if card color matches spent mana color (BasicAction, AA, Spell)
    push_skill_modifier(
        state,
        player_idx,
        skill_id,
        ModifierDuration::Turn,
        ModifierScope::SelfScope,
        ModifierEffect::SidewaysValue {
            new_value: 4,
            for_wounds: false,
            condition: Some(SidewaysCondition::WithManaMatchingColor),
            mana_color: Some(color),
            for_card_types: vec![
                DeedCardType::BasicAction,
                DeedCardType::AdvancedAction,
                DeedCardType::Spell,
            ],
        },
    );
}

fn apply_wolfs_howl(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
) -> Result<ApplyResult, ApplyError> {
    use realm_types::modifier::{ModifierDuration, ModifierEffect, ModifierScope};

    let player = &state.players[player_idx];
    let level_stats = realm_data::levels::get_level_stats(player.level);
    let units_count = player.units.len() as u32;
    let empty_slots = level_stats.command_slots.saturating_sub(units_count);
    let value = 4 + empty_slots;

    push_skill_modifier(
        state,
        player_idx,
        skill_id,
        ModifierDuration::Turn,
        ModifierScope::SelfScope,
        ModifierEffect::SidewaysValue {
            new_value: value,
            for_wounds: false,
            condition: None,
            mana_color: None,
            for_card_types: vec![],
        },
    );

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

// =============================================================================
// Puppet Master + Shapeshift skill handlers
// =============================================================================

fn apply_puppet_master(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
) -> Result<ApplyResult, ApplyError> {
    let player = &state.players[player_idx];
    if player.kept_enemy_tokens.is_empty() {
        return Err(ApplyError::InternalError(
            "Puppet Master: no kept enemy tokens".into(),
        ));
    }

    if player.kept_enemy_tokens.len() == 1 {
        // Auto-select the only token, go straight to use mode
        setup_puppet_master_use_mode(state, player_idx, skill_id, 0);
    } else {
        // Multiple tokens: present selection
        let token_indices: Vec<usize> = (0..player.kept_enemy_tokens.len()).collect();
        let options: Vec<realm_types::effect::CardEffect> = token_indices
            .iter()
            .map(|_| realm_types::effect::CardEffect::Noop)
            .collect();
        state.players[player_idx].pending.active =
            Some(ActivePending::Choice(realm_types::pending::PendingChoice {
                card_id: None,
                skill_id: Some(skill_id.clone()),
                unit_instance_id: None,
                options,
                continuation: vec![],
                movement_bonus_applied: false,
                resolution: realm_types::pending::ChoiceResolution::PuppetMasterSelectToken {
                    token_indices,
                },
            }));
    }

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

fn setup_puppet_master_use_mode(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
    token_index: usize,
) {
    let player = &state.players[player_idx];
    let token = &player.kept_enemy_tokens[token_index];

    let attack_value = (token.attack + 1) / 2; // ceil(attack/2)
    let attack_element = token.attack_element;
    let block_value = (token.armor + 1) / 2; // ceil(armor/2)

    // Derive block element from enemy resistances
    let block_element = derive_block_element_from_enemy(token.enemy_id.as_str());

    let options = vec![
        realm_types::effect::CardEffect::Noop, // Attack
        realm_types::effect::CardEffect::Noop, // Block
    ];

    state.players[player_idx].pending.active =
        Some(ActivePending::Choice(realm_types::pending::PendingChoice {
            card_id: None,
            skill_id: Some(skill_id.clone()),
            unit_instance_id: None,
            options,
            continuation: vec![],
            movement_bonus_applied: false,
            resolution: realm_types::pending::ChoiceResolution::PuppetMasterUseMode {
                token_index,
                attack_value,
                attack_element,
                block_value,
                block_element,
            },
        }));
}

/// Derive block element from enemy resistances.
fn derive_block_element_from_enemy(enemy_id: &str) -> Element {
    let def = realm_data::enemies::get_enemy(enemy_id);
    let resistances = def.map(|d| d.resistances).unwrap_or(&[]);

    let has_fire = resistances.contains(&ResistanceElement::Fire);
    let has_ice = resistances.contains(&ResistanceElement::Ice);

    match (has_fire, has_ice) {
        (true, true) => Element::ColdFire,
        (true, false) => Element::Ice,
        (false, true) => Element::Fire,
        (false, false) => Element::Physical,
    }
}

pub(crate) fn execute_puppet_master_select_token(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
    token_index: usize,
) {
    setup_puppet_master_use_mode(state, player_idx, skill_id, token_index);
}

pub(crate) fn execute_puppet_master_use_mode(
    state: &mut GameState,
    player_idx: usize,
    token_index: usize,
    choice_index: usize,
    attack_value: u32,
    attack_element: Element,
    block_value: u32,
    block_element: Element,
) {
    // Remove the token from kept_enemy_tokens
    let player = &mut state.players[player_idx];
    if token_index < player.kept_enemy_tokens.len() {
        player.kept_enemy_tokens.remove(token_index);
    }

    if choice_index == 0 {
        // Attack: add melee attack to combat accumulator
        let acc = &mut state.players[player_idx].combat_accumulator.attack;
        acc.normal += attack_value;
        match attack_element {
            Element::Physical => acc.normal_elements.physical += attack_value,
            Element::Fire => acc.normal_elements.fire += attack_value,
            Element::Ice => acc.normal_elements.ice += attack_value,
            Element::ColdFire => acc.normal_elements.cold_fire += attack_value,
        }
    } else {
        // Block: add block value to combat accumulator
        let acc = &mut state.players[player_idx].combat_accumulator;
        acc.block += block_value;
        match block_element {
            Element::Physical => acc.block_elements.physical += block_value,
            Element::Fire => acc.block_elements.fire += block_value,
            Element::Ice => acc.block_elements.ice += block_value,
            Element::ColdFire => acc.block_elements.cold_fire += block_value,
        }
    }
}

fn apply_shapeshift(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
) -> Result<ApplyResult, ApplyError> {
    use realm_types::pending::{ShapeshiftCardOption, ChoiceResolution, PendingChoice};

    let player = &state.players[player_idx];
    let mut options: Vec<ShapeshiftCardOption> = Vec::new();

    for (hand_index, card_id) in player.hand.iter().enumerate() {
        if let Some(opt) = classify_basic_action_for_shapeshift(card_id.as_str()) {
            options.push(ShapeshiftCardOption {
                hand_index,
                card_id: card_id.clone(),
                original_type: opt.0,
                amount: opt.1,
                element: opt.2,
            });
        }
    }

    if options.is_empty() {
        return Err(ApplyError::InternalError(
            "Shapeshift: no eligible basic action cards in hand".into(),
        ));
    }

    if options.len() == 1 {
        // Single card: go straight to type selection
        let opt = options[0].clone();
        setup_shapeshift_type_select(state, player_idx, skill_id, &opt);
    } else {
        let choice_options: Vec<realm_types::effect::CardEffect> = options
            .iter()
            .map(|_| realm_types::effect::CardEffect::Noop)
            .collect();
        state.players[player_idx].pending.active =
            Some(ActivePending::Choice(PendingChoice {
                card_id: None,
                skill_id: Some(skill_id.clone()),
                unit_instance_id: None,
                options: choice_options,
                continuation: vec![],
                movement_bonus_applied: false,
                resolution: ChoiceResolution::ShapeshiftCardSelect { options },
            }));
    }

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

/// Classify a card as a basic action eligible for Shapeshift.
/// Returns (original_type, amount, element) or None if not eligible.
///
/// Eligible: cards whose basic effect is GainMove, GainAttack, GainBlock,
/// or a Choice where the first option is GainAttack/GainBlock (rage, determination).
fn classify_basic_action_for_shapeshift(card_id: &str) -> Option<(realm_types::modifier::ShapeshiftTarget, u32, Option<Element>)> {
    let def = realm_data::cards::get_basic_action_card(card_id)?;
    if def.card_type != DeedCardType::BasicAction {
        return None;
    }

    classify_effect_for_shapeshift(&def.basic_effect)
}

fn classify_effect_for_shapeshift(effect: &realm_types::effect::CardEffect) -> Option<(realm_types::modifier::ShapeshiftTarget, u32, Option<Element>)> {
    use realm_types::modifier::ShapeshiftTarget;

    match effect {
        realm_types::effect::CardEffect::GainMove { amount } => {
            Some((ShapeshiftTarget::Move, *amount, None))
        }
        realm_types::effect::CardEffect::GainAttack { amount, element, .. } => {
            Some((ShapeshiftTarget::Attack, *amount, Some(*element)))
        }
        realm_types::effect::CardEffect::GainBlock { amount, element } => {
            Some((ShapeshiftTarget::Block, *amount, Some(*element)))
        }
        realm_types::effect::CardEffect::Choice { options } => {
            // For Choice cards like Rage (Attack 2 or Block 2), classify by first option
            options.first().and_then(|first| classify_effect_for_shapeshift(first))
        }
        _ => None,
    }
}

fn setup_shapeshift_type_select(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
    card_opt: &realm_types::pending::ShapeshiftCardOption,
) {
    use realm_types::modifier::ShapeshiftTarget;

    // Build 2 options: the two types other than the original
    let all_types = [ShapeshiftTarget::Move, ShapeshiftTarget::Attack, ShapeshiftTarget::Block];
    let target_types: Vec<ShapeshiftTarget> = all_types
        .iter()
        .filter(|t| **t != card_opt.original_type)
        .copied()
        .collect();

    let options: Vec<realm_types::effect::CardEffect> = target_types
        .iter()
        .map(|_| realm_types::effect::CardEffect::Noop)
        .collect();

    state.players[player_idx].pending.active =
        Some(ActivePending::Choice(realm_types::pending::PendingChoice {
            card_id: None,
            skill_id: Some(skill_id.clone()),
            unit_instance_id: None,
            options,
            continuation: vec![],
            movement_bonus_applied: false,
            resolution: realm_types::pending::ChoiceResolution::ShapeshiftTypeSelect {
                card_id: card_opt.card_id.clone(),
                hand_index: card_opt.hand_index,
                original_type: card_opt.original_type,
                amount: card_opt.amount,
                element: card_opt.element,
            },
        }));
}

pub(crate) fn execute_shapeshift_card_select(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
    options: &[realm_types::pending::ShapeshiftCardOption],
    choice_index: usize,
) {
    if choice_index < options.len() {
        let opt = options[choice_index].clone();
        setup_shapeshift_type_select(state, player_idx, skill_id, &opt);
    }
}

pub(crate) fn execute_shapeshift_type_select(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
    card_id: &CardId,
    _hand_index: usize,
    original_type: realm_types::modifier::ShapeshiftTarget,
    _amount: u32,
    element: Option<Element>,
    choice_index: usize,
) {
    use realm_types::modifier::{ModifierDuration, ModifierEffect, ModifierScope, ShapeshiftTarget};

    let all_types = [ShapeshiftTarget::Move, ShapeshiftTarget::Attack, ShapeshiftTarget::Block];
    let target_types: Vec<ShapeshiftTarget> = all_types
        .iter()
        .filter(|t| **t != original_type)
        .copied()
        .collect();

    if choice_index >= target_types.len() {
        return;
    }

    let target_type = target_types[choice_index];

    // Determine combat_type and element for the new type
    let (combat_type, new_element) = match target_type {
        ShapeshiftTarget::Move => (None, None),
        ShapeshiftTarget::Attack => (
            Some(CombatType::Melee),
            Some(element.unwrap_or(Element::Physical)),
        ),
        ShapeshiftTarget::Block => (
            None,
            Some(element.unwrap_or(Element::Physical)),
        ),
    };

    push_skill_modifier(
        state,
        player_idx,
        skill_id,
        ModifierDuration::Turn,
        ModifierScope::SelfScope,
        ModifierEffect::ShapeshiftActive {
            target_card_id: card_id.clone(),
            target_type,
            choice_index: None,
            combat_type,
            element: new_element,
        },
    );
}

/// Check if the player has any basic action card in hand eligible for Shapeshift.
pub(crate) fn has_shapeshift_eligible_cards(state: &GameState, player_idx: usize) -> bool {
    let player = &state.players[player_idx];
    player.hand.iter().any(|card_id| {
        classify_basic_action_for_shapeshift(card_id.as_str()).is_some()
    })
}

// =============================================================================
// Secret Ways, Regenerate, Dueling skill handlers
// =============================================================================

fn apply_secret_ways(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
) -> Result<ApplyResult, ApplyError> {
    use realm_types::effect::CardEffect;
    use realm_types::modifier::{ModifierDuration, ModifierEffect, ModifierScope, TerrainOrAll};
    use realm_types::pending::{ChoiceResolution, PendingChoice};

    // Always grant Move 1
    state.players[player_idx].move_points += 1;

    // Check if player can afford Blue mana (token > crystal > die)
    let player = &state.players[player_idx];
    let has_blue_token = player.pure_mana.iter().any(|t| t.color == ManaColor::Blue);
    let has_blue_crystal = player.crystals.blue > 0;
    let has_blue_die = state
        .source
        .dice
        .iter()
        .any(|d| {
            d.color == ManaColor::Blue
                && !d.is_depleted
                && d.taken_by_player_id.is_none()
        });

    if has_blue_token || has_blue_crystal || has_blue_die {
        // Present choice: Noop (decline) or Lake modifiers (pay blue mana)
        let options = vec![
            CardEffect::Noop,
            CardEffect::Compound {
                effects: vec![
                    CardEffect::ApplyModifier {
                        effect: ModifierEffect::TerrainCost {
                            terrain: TerrainOrAll::Specific(realm_types::enums::Terrain::Lake),
                            amount: 0,
                            minimum: 0,
                            replace_cost: Some(2),
                        },
                        duration: ModifierDuration::Turn,
                        scope: ModifierScope::SelfScope,
                    },
                    CardEffect::ApplyModifier {
                        effect: ModifierEffect::TerrainSafe {
                            terrain: TerrainOrAll::Specific(realm_types::enums::Terrain::Lake),
                        },
                        duration: ModifierDuration::Turn,
                        scope: ModifierScope::SelfScope,
                    },
                ],
            },
        ];

        state.players[player_idx].pending.active =
            Some(ActivePending::Choice(PendingChoice {
                card_id: None,
                skill_id: Some(skill_id.clone()),
                unit_instance_id: None,
                options,
                continuation: vec![],
                movement_bonus_applied: false,
                resolution: ChoiceResolution::SecretWaysLake,
            }));
    }

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

fn apply_regenerate(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
    bonus_color: BasicManaColor,
) -> Result<ApplyResult, ApplyError> {
    use realm_types::effect::CardEffect;
    use realm_types::pending::{ChoiceResolution, PendingChoice};

    // Collect available mana colors the player can spend
    let player = &state.players[player_idx];
    let mut available_colors: Vec<ManaColor> = Vec::new();
    let mut seen = [false; 6]; // R, B, G, W, Gold, Black

    // Check tokens
    for token in &player.pure_mana {
        let idx = mana_color_to_index(token.color);
        if let Some(i) = idx {
            if !seen[i] {
                seen[i] = true;
                available_colors.push(token.color);
            }
        }
    }

    // Check crystals (basic colors only)
    for (color, count) in [
        (BasicManaColor::Red, player.crystals.red),
        (BasicManaColor::Blue, player.crystals.blue),
        (BasicManaColor::Green, player.crystals.green),
        (BasicManaColor::White, player.crystals.white),
    ] {
        if count > 0 {
            let mc = ManaColor::from(color);
            let idx = mana_color_to_index(mc);
            if let Some(i) = idx {
                if !seen[i] {
                    seen[i] = true;
                    available_colors.push(mc);
                }
            }
        }
    }

    // Check source dice (respecting time-of-day restrictions)
    for die in &state.source.dice {
        if !die.is_depleted && die.taken_by_player_id.is_none() {
            let idx = mana_color_to_index(die.color);
            if let Some(i) = idx {
                if !seen[i] {
                    seen[i] = true;
                    available_colors.push(die.color);
                }
            }
        }
    }

    if available_colors.is_empty() {
        return Err(ApplyError::InternalError(
            "Regenerate: no mana available".into(),
        ));
    }

    if available_colors.len() == 1 {
        // Auto-consume the single option
        execute_regenerate(state, player_idx, available_colors[0], bonus_color)?;
    } else {
        // Multiple options: set pending choice
        let options: Vec<CardEffect> = available_colors
            .iter()
            .map(|_| CardEffect::Noop)
            .collect();
        state.players[player_idx].pending.active =
            Some(ActivePending::Choice(PendingChoice {
                card_id: None,
                skill_id: Some(skill_id.clone()),
                unit_instance_id: None,
                options,
                continuation: vec![],
                movement_bonus_applied: false,
                resolution: ChoiceResolution::RegenerateMana {
                    available_colors,
                    bonus_color,
                },
            }));
    }

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

fn mana_color_to_index(color: ManaColor) -> Option<usize> {
    match color {
        ManaColor::Red => Some(0),
        ManaColor::Blue => Some(1),
        ManaColor::Green => Some(2),
        ManaColor::White => Some(3),
        ManaColor::Gold => Some(4),
        ManaColor::Black => Some(5),
    }
}

/// Execute the regenerate effect: consume mana, remove wound, conditionally draw.
pub(crate) fn execute_regenerate(
    state: &mut GameState,
    player_idx: usize,
    mana_color: ManaColor,
    bonus_color: BasicManaColor,
) -> Result<(), ApplyError> {
    // Consume 1 mana of the chosen color (token > crystal > die)
    let player = &mut state.players[player_idx];

    // Try token first
    if let Some(pos) = player.pure_mana.iter().position(|t| t.color == mana_color) {
        player.pure_mana.remove(pos);
    } else if let Some(basic) = mana_color.to_basic() {
        // Try crystal
        let crystal_count = match basic {
            BasicManaColor::Red => &mut player.crystals.red,
            BasicManaColor::Blue => &mut player.crystals.blue,
            BasicManaColor::Green => &mut player.crystals.green,
            BasicManaColor::White => &mut player.crystals.white,
        };
        if *crystal_count > 0 {
            *crystal_count -= 1;
            match basic {
                BasicManaColor::Red => player.spent_crystals_this_turn.red += 1,
                BasicManaColor::Blue => player.spent_crystals_this_turn.blue += 1,
                BasicManaColor::Green => player.spent_crystals_this_turn.green += 1,
                BasicManaColor::White => player.spent_crystals_this_turn.white += 1,
            }
        } else {
            return Err(ApplyError::InternalError(
                "Regenerate: cannot consume mana".into(),
            ));
        }
    } else {
        // Gold/Black — try source die
        if let Some(die) = state.source.dice.iter_mut().find(|d| {
            d.color == mana_color && !d.is_depleted && d.taken_by_player_id.is_none()
        }) {
            die.taken_by_player_id = Some(state.players[player_idx].id.clone());
            die.is_depleted = true;
        } else {
            return Err(ApplyError::InternalError(
                "Regenerate: cannot consume mana".into(),
            ));
        }
    }

    // Remove first wound from hand
    let player = &mut state.players[player_idx];
    if let Some(pos) = player.hand.iter().position(|c| c.as_str() == "wound") {
        player.hand.remove(pos);
        state.wound_pile_count = Some(state.wound_pile_count.unwrap_or(0) + 1);
    }

    // Check bonus draw: mana color matches bonus_color OR strictly lowest fame
    let is_bonus_color = mana_color.to_basic() == Some(bonus_color);
    let is_lowest = has_strictly_lowest_fame(state, player_idx);

    if is_bonus_color || is_lowest {
        let player = &mut state.players[player_idx];
        if !player.deck.is_empty() {
            let card = player.deck.remove(0);
            player.hand.push(card);
        }
    }

    Ok(())
}

/// Check if a player has strictly the lowest fame among all players.
/// In solo (1 player): always false.
fn has_strictly_lowest_fame(state: &GameState, player_idx: usize) -> bool {
    if state.players.len() <= 1 {
        return false;
    }
    let my_fame = state.players[player_idx].fame;
    state.players.iter().enumerate().all(|(i, p)| {
        i == player_idx || p.fame > my_fame
    })
}

fn apply_dueling(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
) -> Result<ApplyResult, ApplyError> {
    use realm_types::effect::CardEffect;
    use realm_types::pending::{ChoiceResolution, PendingChoice};

    let combat = state
        .combat
        .as_ref()
        .ok_or_else(|| ApplyError::InternalError("Dueling: not in combat".into()))?;

    // Filter eligible enemies: alive AND attacks this combat (not skip_attack)
    let eligible: Vec<String> = combat
        .enemies
        .iter()
        .filter(|e| {
            !e.is_defeated
                && !combat_resolution::is_enemy_attacks_skipped(
                    &state.active_modifiers,
                    e.instance_id.as_str(),
                )
        })
        .map(|e| e.instance_id.as_str().to_string())
        .collect();

    if eligible.is_empty() {
        return Err(ApplyError::InternalError(
            "Dueling: no eligible enemies".into(),
        ));
    }

    // Grant Block 1 Physical
    let accumulator = &mut state.players[player_idx].combat_accumulator;
    accumulator.block += 1;
    accumulator.block_elements.physical += 1;

    if eligible.len() == 1 {
        // Auto-target the single enemy
        apply_dueling_target(state, player_idx, skill_id, &eligible[0]);
    } else {
        // Multiple targets: set pending choice
        let options: Vec<CardEffect> = eligible.iter().map(|_| CardEffect::Noop).collect();
        state.players[player_idx].pending.active =
            Some(ActivePending::Choice(PendingChoice {
                card_id: None,
                skill_id: Some(skill_id.clone()),
                unit_instance_id: None,
                options,
                continuation: vec![],
                movement_bonus_applied: false,
                resolution: ChoiceResolution::DuelingTarget {
                    eligible_enemy_ids: eligible,
                },
            }));
    }

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

/// Apply the DuelingTarget modifier for a chosen enemy (public wrapper for effect_queue).
pub(crate) fn apply_dueling_target_pub(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
    enemy_instance_id: &str,
) {
    apply_dueling_target(state, player_idx, skill_id, enemy_instance_id);
}

/// Apply the DuelingTarget modifier for a chosen enemy.
fn apply_dueling_target(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
    enemy_instance_id: &str,
) {
    push_skill_modifier(
        state,
        player_idx,
        skill_id,
        realm_types::modifier::ModifierDuration::Combat,
        realm_types::modifier::ModifierScope::SelfScope,
        realm_types::modifier::ModifierEffect::DuelingTarget {
            enemy_instance_id: enemy_instance_id.to_string(),
            attack_applied: false,
            unit_involved: false,
        },
    );
}

/// Apply the dueling attack bonus at Block→Attack transition.
/// Called from apply_end_combat_phase when transitioning to Attack phase.
pub(crate) fn apply_dueling_attack_bonus(
    state: &mut GameState,
    player_idx: usize,
) {
    // Find active DuelingTarget modifier for this player
    let player_id = &state.players[player_idx].id;
    let modifier_idx = state.active_modifiers.iter().position(|m| {
        m.created_by_player_id == *player_id
            && matches!(&m.effect, realm_types::modifier::ModifierEffect::DuelingTarget { .. })
    });

    let Some(idx) = modifier_idx else { return };

    // Check if already applied
    if let realm_types::modifier::ModifierEffect::DuelingTarget {
        attack_applied: true,
        ..
    } = &state.active_modifiers[idx].effect
    {
        return;
    }

    // Check if target enemy is still alive
    let target_id = if let realm_types::modifier::ModifierEffect::DuelingTarget {
        enemy_instance_id,
        ..
    } = &state.active_modifiers[idx].effect
    {
        enemy_instance_id.clone()
    } else {
        return;
    };

    let target_alive = state
        .combat
        .as_ref()
        .map(|c| {
            c.enemies
                .iter()
                .any(|e| e.instance_id.as_str() == target_id && !e.is_defeated)
        })
        .unwrap_or(false);

    if !target_alive {
        return;
    }

    // Mark attack_applied = true
    if let realm_types::modifier::ModifierEffect::DuelingTarget {
        ref mut attack_applied,
        ..
    } = state.active_modifiers[idx].effect
    {
        *attack_applied = true;
    }

    // Grant Attack 1 Physical
    let accumulator = &mut state.players[player_idx].combat_accumulator;
    accumulator.attack.normal += 1;
    accumulator.attack.normal_elements.physical += 1;
}

/// Resolve dueling fame bonus at combat end.
/// Returns the fame gained (0 or 1).
pub(crate) fn resolve_dueling_fame_bonus(
    state: &mut GameState,
    player_idx: usize,
) -> u32 {
    let player_id = &state.players[player_idx].id;

    // Find DuelingTarget modifier
    let modifier = state.active_modifiers.iter().find(|m| {
        m.created_by_player_id == *player_id
            && matches!(&m.effect, realm_types::modifier::ModifierEffect::DuelingTarget { .. })
    });

    let Some(m) = modifier else { return 0 };

    let (target_id, unit_involved) =
        if let realm_types::modifier::ModifierEffect::DuelingTarget {
            enemy_instance_id,
            unit_involved,
            ..
        } = &m.effect
        {
            (enemy_instance_id.clone(), *unit_involved)
        } else {
            return 0;
        };

    // Target must be defeated
    let target_defeated = state
        .combat
        .as_ref()
        .map(|c| {
            c.enemies
                .iter()
                .any(|e| e.instance_id.as_str() == target_id && e.is_defeated)
        })
        .unwrap_or(false);

    if !target_defeated || unit_involved {
        return 0;
    }

    state.players[player_idx].fame += 1;
    1
}

/// Mark unit involvement on the DuelingTarget modifier.
/// Called when any unit combat ability is activated.
pub(crate) fn mark_dueling_unit_involvement(
    state: &mut GameState,
    player_idx: usize,
) {
    let player_id = &state.players[player_idx].id;
    for m in &mut state.active_modifiers {
        if m.created_by_player_id == *player_id {
            if let realm_types::modifier::ModifierEffect::DuelingTarget {
                ref mut unit_involved,
                ..
            } = m.effect
            {
                *unit_involved = true;
            }
        }
    }
}

// =============================================================================
// Invocation skill handler
// =============================================================================

fn apply_invocation(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
) -> Result<ApplyResult, ApplyError> {
    use realm_types::effect::CardEffect;
    use realm_types::pending::{ChoiceResolution, InvocationOption, PendingChoice};

    let player = &state.players[player_idx];
    if player.hand.is_empty() {
        return Err(ApplyError::InternalError(
            "Invocation: hand is empty".into(),
        ));
    }

    // Build deduplicated options: per unique card_id, 2 color choices
    let mut seen_card_ids = Vec::new();
    let mut options = Vec::new();

    for card_id in &player.hand {
        if seen_card_ids.contains(card_id) {
            continue;
        }
        seen_card_ids.push(card_id.clone());
        let is_wound = card_id.as_str() == "wound";
        if is_wound {
            // Wounds → Red or Black
            options.push(InvocationOption {
                card_id: card_id.clone(),
                is_wound: true,
                mana_color: ManaColor::Red,
            });
            options.push(InvocationOption {
                card_id: card_id.clone(),
                is_wound: true,
                mana_color: ManaColor::Black,
            });
        } else {
            // Non-wounds → White or Green
            options.push(InvocationOption {
                card_id: card_id.clone(),
                is_wound: false,
                mana_color: ManaColor::White,
            });
            options.push(InvocationOption {
                card_id: card_id.clone(),
                is_wound: false,
                mana_color: ManaColor::Green,
            });
        }
    }

    if options.len() == 1 {
        // Auto-resolve single option
        execute_invocation(state, player_idx, &options[0]);
    } else {
        let choice_options: Vec<CardEffect> = options.iter().map(|_| CardEffect::Noop).collect();
        state.players[player_idx].pending.active =
            Some(ActivePending::Choice(PendingChoice {
                card_id: None,
                skill_id: Some(skill_id.clone()),
                unit_instance_id: None,
                options: choice_options,
                continuation: vec![],
                movement_bonus_applied: false,
                resolution: ChoiceResolution::InvocationDiscard { options },
            }));
    }

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

/// Execute invocation: discard card, gain mana token.
pub(crate) fn execute_invocation(
    state: &mut GameState,
    player_idx: usize,
    opt: &realm_types::pending::InvocationOption,
) {
    let player = &mut state.players[player_idx];

    // Remove first matching card from hand
    if let Some(pos) = player.hand.iter().position(|c| *c == opt.card_id) {
        player.hand.remove(pos);
        if opt.is_wound {
            state.wound_pile_count = Some(state.wound_pile_count.unwrap_or(0) + 1);
        } else {
            state.players[player_idx].discard.push(opt.card_id.clone());
        }
    }

    // Gain mana token
    state.players[player_idx].pure_mana.push(ManaToken {
        color: opt.mana_color,
        source: ManaTokenSource::Effect,
        cannot_power_spells: false,
    });
}

// =============================================================================
// Polarization skill handler
// =============================================================================

fn apply_polarization(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
) -> Result<ApplyResult, ApplyError> {
    use realm_types::effect::CardEffect;
    use realm_types::pending::{ChoiceResolution, PendingChoice, PolarizationOption, PolarizationSourceType};

    let is_day = state.time_of_day == TimeOfDay::Day;

    fn opposite_basic(c: ManaColor) -> Option<ManaColor> {
        match c {
            ManaColor::Red => Some(ManaColor::Blue),
            ManaColor::Blue => Some(ManaColor::Red),
            ManaColor::Green => Some(ManaColor::White),
            ManaColor::White => Some(ManaColor::Green),
            _ => None,
        }
    }

    let mut options: Vec<PolarizationOption> = Vec::new();
    let mut seen = std::collections::HashSet::new();

    // 1. Tokens
    let player = &state.players[player_idx];
    for (idx, token) in player.pure_mana.iter().enumerate() {
        // Basic color → opposite
        if let Some(target) = opposite_basic(token.color) {
            let key = (PolarizationSourceType::Token, token.color, target);
            if seen.insert(key) {
                options.push(PolarizationOption {
                    source_type: PolarizationSourceType::Token,
                    source_color: token.color,
                    target_color: target,
                    cannot_power_spells: false,
                    token_index: Some(idx),
                    die_id: None,
                });
            }
        }
        // Black (day) → any basic (cannot_power_spells)
        if token.color == ManaColor::Black && is_day {
            for target in &[ManaColor::Red, ManaColor::Blue, ManaColor::Green, ManaColor::White] {
                let key = (PolarizationSourceType::Token, ManaColor::Black, *target);
                if seen.insert(key) {
                    options.push(PolarizationOption {
                        source_type: PolarizationSourceType::Token,
                        source_color: ManaColor::Black,
                        target_color: *target,
                        cannot_power_spells: true,
                        token_index: Some(idx),
                        die_id: None,
                    });
                }
            }
        }
        // Gold (night) → Black
        if token.color == ManaColor::Gold && !is_day {
            let key = (PolarizationSourceType::Token, ManaColor::Gold, ManaColor::Black);
            if seen.insert(key) {
                options.push(PolarizationOption {
                    source_type: PolarizationSourceType::Token,
                    source_color: ManaColor::Gold,
                    target_color: ManaColor::Black,
                    cannot_power_spells: false,
                    token_index: Some(idx),
                    die_id: None,
                });
            }
        }
    }

    // 2. Crystals
    for (basic, count) in [
        (BasicManaColor::Red, player.crystals.red),
        (BasicManaColor::Blue, player.crystals.blue),
        (BasicManaColor::Green, player.crystals.green),
        (BasicManaColor::White, player.crystals.white),
    ] {
        if count > 0 {
            let src = ManaColor::from(basic);
            if let Some(target) = opposite_basic(src) {
                let key = (PolarizationSourceType::Crystal, src, target);
                if seen.insert(key) {
                    options.push(PolarizationOption {
                        source_type: PolarizationSourceType::Crystal,
                        source_color: src,
                        target_color: target,
                        cannot_power_spells: false,
                        token_index: None,
                        die_id: None,
                    });
                }
            }
        }
    }

    // 3. Source dice
    for die in &state.source.dice {
        if die.is_depleted || die.taken_by_player_id.is_some() {
            continue;
        }
        // Basic → opposite
        if let Some(target) = opposite_basic(die.color) {
            let key = (PolarizationSourceType::Die, die.color, target);
            if seen.insert(key) {
                options.push(PolarizationOption {
                    source_type: PolarizationSourceType::Die,
                    source_color: die.color,
                    target_color: target,
                    cannot_power_spells: false,
                    token_index: None,
                    die_id: Some(die.id.clone()),
                });
            }
        }
        // Black (day) → any basic
        if die.color == ManaColor::Black && is_day {
            for target in &[ManaColor::Red, ManaColor::Blue, ManaColor::Green, ManaColor::White] {
                let key = (PolarizationSourceType::Die, ManaColor::Black, *target);
                if seen.insert(key) {
                    options.push(PolarizationOption {
                        source_type: PolarizationSourceType::Die,
                        source_color: ManaColor::Black,
                        target_color: *target,
                        cannot_power_spells: true,
                        token_index: None,
                        die_id: Some(die.id.clone()),
                    });
                }
            }
        }
        // Gold (night) → Black
        if die.color == ManaColor::Gold && !is_day {
            let key = (PolarizationSourceType::Die, ManaColor::Gold, ManaColor::Black);
            if seen.insert(key) {
                options.push(PolarizationOption {
                    source_type: PolarizationSourceType::Die,
                    source_color: ManaColor::Gold,
                    target_color: ManaColor::Black,
                    cannot_power_spells: false,
                    token_index: None,
                    die_id: Some(die.id.clone()),
                });
            }
        }
    }

    if options.is_empty() {
        return Err(ApplyError::InternalError(
            "Polarization: no conversion options available".into(),
        ));
    }

    if options.len() == 1 {
        execute_polarization(state, player_idx, &options[0]);
    } else {
        let choice_options: Vec<CardEffect> = options.iter().map(|_| CardEffect::Noop).collect();
        state.players[player_idx].pending.active =
            Some(ActivePending::Choice(PendingChoice {
                card_id: None,
                skill_id: Some(skill_id.clone()),
                unit_instance_id: None,
                options: choice_options,
                continuation: vec![],
                movement_bonus_applied: false,
                resolution: ChoiceResolution::PolarizationConvert { options },
            }));
    }

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

/// Execute polarization: consume source mana, gain target mana.
pub(crate) fn execute_polarization(
    state: &mut GameState,
    player_idx: usize,
    opt: &realm_types::pending::PolarizationOption,
) {
    use realm_types::pending::PolarizationSourceType;

    match opt.source_type {
        PolarizationSourceType::Token => {
            // Remove the token at the given index (or first matching color)
            let player = &mut state.players[player_idx];
            if let Some(idx) = opt.token_index {
                if idx < player.pure_mana.len() && player.pure_mana[idx].color == opt.source_color {
                    player.pure_mana.remove(idx);
                } else if let Some(pos) = player.pure_mana.iter().position(|t| t.color == opt.source_color) {
                    player.pure_mana.remove(pos);
                }
            }
        }
        PolarizationSourceType::Crystal => {
            let player = &mut state.players[player_idx];
            if let Some(basic) = opt.source_color.to_basic() {
                let crystal = match basic {
                    BasicManaColor::Red => &mut player.crystals.red,
                    BasicManaColor::Blue => &mut player.crystals.blue,
                    BasicManaColor::Green => &mut player.crystals.green,
                    BasicManaColor::White => &mut player.crystals.white,
                };
                if *crystal > 0 {
                    *crystal -= 1;
                    match basic {
                        BasicManaColor::Red => player.spent_crystals_this_turn.red += 1,
                        BasicManaColor::Blue => player.spent_crystals_this_turn.blue += 1,
                        BasicManaColor::Green => player.spent_crystals_this_turn.green += 1,
                        BasicManaColor::White => player.spent_crystals_this_turn.white += 1,
                    }
                }
            }
            // Gain target crystal (polarization crystal→crystal keeps it as crystal)
            if let Some(target_basic) = opt.target_color.to_basic() {
                let target_crystal = match target_basic {
                    BasicManaColor::Red => &mut state.players[player_idx].crystals.red,
                    BasicManaColor::Blue => &mut state.players[player_idx].crystals.blue,
                    BasicManaColor::Green => &mut state.players[player_idx].crystals.green,
                    BasicManaColor::White => &mut state.players[player_idx].crystals.white,
                };
                if *target_crystal < 3 {
                    *target_crystal += 1;
                }
            }
            return; // Crystal→Crystal, no token added
        }
        PolarizationSourceType::Die => {
            if let Some(ref die_id) = opt.die_id {
                let player_id = state.players[player_idx].id.clone();
                if let Some(die) = state.source.dice.iter_mut().find(|d| d.id == *die_id) {
                    die.taken_by_player_id = Some(player_id);
                    die.is_depleted = true;
                }
            }
        }
    }

    // Gain target mana token (for Token and Die sources)
    state.players[player_idx].pure_mana.push(ManaToken {
        color: opt.target_color,
        source: ManaTokenSource::Effect,
        cannot_power_spells: opt.cannot_power_spells,
    });
}

// =============================================================================
// Curse skill handler (3-step)
// =============================================================================

fn apply_curse(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
) -> Result<ApplyResult, ApplyError> {
    use realm_types::effect::CardEffect;
    use realm_types::pending::{ChoiceResolution, PendingChoice};

    let combat = state
        .combat
        .as_ref()
        .ok_or_else(|| ApplyError::InternalError("Curse: not in combat".into()))?;

    let is_ranged_siege = combat.phase == CombatPhase::RangedSiege;

    let eligible: Vec<String> = combat
        .enemies
        .iter()
        .filter(|e| {
            !e.is_defeated
                && (!is_ranged_siege || !is_enemy_fortified(e.enemy_id.as_str()))
        })
        .map(|e| e.instance_id.as_str().to_string())
        .collect();

    if eligible.is_empty() {
        return Err(ApplyError::InternalError(
            "Curse: no eligible enemies".into(),
        ));
    }

    if eligible.len() == 1 {
        // Auto-target
        setup_curse_mode(state, player_idx, skill_id, &eligible[0]);
    } else {
        let options: Vec<CardEffect> = eligible.iter().map(|_| CardEffect::Noop).collect();
        state.players[player_idx].pending.active =
            Some(ActivePending::Choice(PendingChoice {
                card_id: None,
                skill_id: Some(skill_id.clone()),
                unit_instance_id: None,
                options,
                continuation: vec![],
                movement_bonus_applied: false,
                resolution: ChoiceResolution::CurseTarget {
                    eligible_enemy_ids: eligible,
                },
            }));
    }

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

/// Set up the mode choice for Curse (Attack -2 or Armor -1).
pub(crate) fn setup_curse_mode(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
    enemy_instance_id: &str,
) {
    use realm_types::effect::CardEffect;
    use realm_types::pending::{ChoiceResolution, PendingChoice};

    let combat = state.combat.as_ref().unwrap();
    let enemy = combat
        .enemies
        .iter()
        .find(|e| e.instance_id.as_str() == enemy_instance_id)
        .unwrap();

    let enemy_def = realm_data::enemies::get_enemy(enemy.enemy_id.as_str());
    let has_ai = enemy_def
        .map(|d| d.abilities.contains(&EnemyAbilityType::ArcaneImmunity))
        .unwrap_or(false);
    let num_attacks = enemy_def
        .map(realm_data::enemies::attack_count)
        .unwrap_or(1);
    let has_multi_attack = num_attacks > 1;

    // Build options: always Attack -2, optionally Armor -1 (blocked by AI)
    let mut options = vec![CardEffect::Noop]; // index 0 = Attack -2
    if !has_ai {
        options.push(CardEffect::Noop); // index 1 = Armor -1
    }

    if options.len() == 1 && !has_multi_attack {
        // Only Attack -2, single attack → auto-apply
        push_skill_modifier(
            state,
            player_idx,
            skill_id,
            realm_types::modifier::ModifierDuration::Combat,
            realm_types::modifier::ModifierScope::OneEnemy {
                enemy_id: enemy_instance_id.to_string(),
            },
            realm_types::modifier::ModifierEffect::EnemyStat {
                stat: realm_types::modifier::EnemyStat::Attack,
                amount: -2,
                minimum: 0,
                attack_index: None,
                per_resistance: false,
                fortified_amount: None,
                exclude_resistance: None,
            },
        );
    } else {
        state.players[player_idx].pending.active =
            Some(ActivePending::Choice(PendingChoice {
                card_id: None,
                skill_id: Some(skill_id.clone()),
                unit_instance_id: None,
                options,
                continuation: vec![],
                movement_bonus_applied: false,
                resolution: ChoiceResolution::CurseMode {
                    enemy_instance_id: enemy_instance_id.to_string(),
                    has_arcane_immunity: has_ai,
                    has_multi_attack,
                },
            }));
    }
}

/// Execute curse mode choice.
pub(crate) fn execute_curse_mode(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
    enemy_instance_id: &str,
    has_multi_attack: bool,
    choice_index: usize,
) {
    use realm_types::effect::CardEffect;
    use realm_types::pending::{ChoiceResolution, PendingChoice};

    if choice_index == 0 {
        // Attack -2
        if has_multi_attack {
            // Need to choose which attack index
            let enemy_def = {
                let combat = state.combat.as_ref().unwrap();
                let enemy = combat
                    .enemies
                    .iter()
                    .find(|e| e.instance_id.as_str() == enemy_instance_id)
                    .unwrap();
                realm_data::enemies::get_enemy(enemy.enemy_id.as_str())
            };
            let num_attacks = enemy_def.map(realm_data::enemies::attack_count).unwrap_or(1);
            let options: Vec<CardEffect> = (0..num_attacks).map(|_| CardEffect::Noop).collect();
            state.players[player_idx].pending.active =
                Some(ActivePending::Choice(PendingChoice {
                    card_id: None,
                    skill_id: Some(skill_id.clone()),
                    unit_instance_id: None,
                    options,
                    continuation: vec![],
                    movement_bonus_applied: false,
                    resolution: ChoiceResolution::CurseAttackIndex {
                        enemy_instance_id: enemy_instance_id.to_string(),
                        attack_count: num_attacks,
                    },
                }));
        } else {
            // Single attack: apply directly
            push_skill_modifier(
                state,
                player_idx,
                skill_id,
                realm_types::modifier::ModifierDuration::Combat,
                realm_types::modifier::ModifierScope::OneEnemy {
                    enemy_id: enemy_instance_id.to_string(),
                },
                realm_types::modifier::ModifierEffect::EnemyStat {
                    stat: realm_types::modifier::EnemyStat::Attack,
                    amount: -2,
                    minimum: 0,
                    attack_index: None,
                    per_resistance: false,
                    fortified_amount: None,
                    exclude_resistance: None,
                },
            );
        }
    } else {
        // Armor -1 (choice_index == 1)
        push_skill_modifier(
            state,
            player_idx,
            skill_id,
            realm_types::modifier::ModifierDuration::Combat,
            realm_types::modifier::ModifierScope::OneEnemy {
                enemy_id: enemy_instance_id.to_string(),
            },
            realm_types::modifier::ModifierEffect::EnemyStat {
                stat: realm_types::modifier::EnemyStat::Armor,
                amount: -1,
                minimum: 1,
                attack_index: None,
                per_resistance: false,
                fortified_amount: None,
                exclude_resistance: None,
            },
        );
    }
}

/// Execute curse attack index selection (multi-attack enemy).
pub(crate) fn execute_curse_attack_index(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
    enemy_instance_id: &str,
    choice_index: usize,
) {
    push_skill_modifier(
        state,
        player_idx,
        skill_id,
        realm_types::modifier::ModifierDuration::Combat,
        realm_types::modifier::ModifierScope::OneEnemy {
            enemy_id: enemy_instance_id.to_string(),
        },
        realm_types::modifier::ModifierEffect::EnemyStat {
            stat: realm_types::modifier::EnemyStat::Attack,
            amount: -2,
            minimum: 0,
            attack_index: Some(choice_index as u32),
            per_resistance: false,
            fortified_amount: None,
            exclude_resistance: None,
        },
    );
}

// =============================================================================
// Forked Lightning skill handler (iterative loop)
// =============================================================================

fn apply_forked_lightning(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
) -> Result<ApplyResult, ApplyError> {
    use realm_types::effect::CardEffect;
    use realm_types::pending::{ChoiceResolution, PendingChoice};

    let combat = state
        .combat
        .as_ref()
        .ok_or_else(|| ApplyError::InternalError("Forked Lightning: not in combat".into()))?;

    let eligible: Vec<String> = combat
        .enemies
        .iter()
        .filter(|e| !e.is_defeated)
        .map(|e| e.instance_id.as_str().to_string())
        .collect();

    if eligible.is_empty() {
        return Err(ApplyError::InternalError(
            "Forked Lightning: no alive enemies".into(),
        ));
    }

    if eligible.len() == 1 {
        // Auto-target the single enemy
        apply_forked_lightning_hit(state, player_idx, &eligible[0]);
        // Only 1 enemy, can't pick more
    } else {
        // First pick: no "Done" option
        let options: Vec<CardEffect> = eligible.iter().map(|_| CardEffect::Noop).collect();
        state.players[player_idx].pending.active =
            Some(ActivePending::Choice(PendingChoice {
                card_id: None,
                skill_id: Some(skill_id.clone()),
                unit_instance_id: None,
                options,
                continuation: vec![],
                movement_bonus_applied: false,
                resolution: ChoiceResolution::ForkedLightningTarget {
                    remaining: 3,
                    already_targeted: vec![],
                },
            }));
    }

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

fn apply_forked_lightning_hit(
    state: &mut GameState,
    player_idx: usize,
    _enemy_instance_id: &str,
) {
    // +1 Ranged ColdFire Attack
    let accumulator = &mut state.players[player_idx].combat_accumulator;
    accumulator.attack.ranged += 1;
    accumulator.attack.ranged_elements.cold_fire += 1;
}

/// Execute forked lightning target selection.
pub(crate) fn execute_forked_lightning_target(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
    remaining: u32,
    already_targeted: &[String],
    choice_index: usize,
) {
    use realm_types::effect::CardEffect;
    use realm_types::pending::{ChoiceResolution, PendingChoice};

    // Build eligible list (alive, not already targeted)
    let eligible: Vec<String> = {
        let combat = state.combat.as_ref().unwrap();
        combat
            .enemies
            .iter()
            .filter(|e| !e.is_defeated && !already_targeted.contains(&e.instance_id.as_str().to_string()))
            .map(|e| e.instance_id.as_str().to_string())
            .collect()
    };

    // If not first pick (remaining < 3), last option is "Done"
    let has_done = remaining < 3;

    // Check if "Done" was chosen
    if has_done && choice_index == eligible.len() {
        // "Done" chosen — no more targets
        return;
    }

    if choice_index >= eligible.len() {
        return;
    }

    // Apply the hit
    let target_id = eligible[choice_index].clone();
    apply_forked_lightning_hit(state, player_idx, &target_id);

    let mut new_targeted = already_targeted.to_vec();
    new_targeted.push(target_id);

    let new_remaining = remaining - 1;

    // Check if we can pick more
    let next_eligible: Vec<String> = {
        let combat = state.combat.as_ref().unwrap();
        combat
            .enemies
            .iter()
            .filter(|e| !e.is_defeated && !new_targeted.contains(&e.instance_id.as_str().to_string()))
            .map(|e| e.instance_id.as_str().to_string())
            .collect()
    };

    if new_remaining == 0 || next_eligible.is_empty() {
        // Done
        return;
    }

    // More picks available: present next choice with "Done" option
    let mut options: Vec<CardEffect> = next_eligible.iter().map(|_| CardEffect::Noop).collect();
    options.push(CardEffect::Noop); // "Done" option at the end

    state.players[player_idx].pending.active =
        Some(ActivePending::Choice(PendingChoice {
            card_id: None,
            skill_id: Some(skill_id.clone()),
            unit_instance_id: None,
            options,
            continuation: vec![],
            movement_bonus_applied: false,
            resolution: ChoiceResolution::ForkedLightningTarget {
                remaining: new_remaining,
                already_targeted: new_targeted,
            },
        }));
}

// =============================================================================
// Know Your Prey skill handler (2-step)
// =============================================================================

fn apply_know_your_prey(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
) -> Result<ApplyResult, ApplyError> {
    use realm_types::effect::CardEffect;
    use realm_types::pending::{ChoiceResolution, PendingChoice};

    let combat = state
        .combat
        .as_ref()
        .ok_or_else(|| ApplyError::InternalError("Know Your Prey: not in combat".into()))?;

    let eligible: Vec<String> = combat
        .enemies
        .iter()
        .filter(|e| {
            !e.is_defeated
                && !is_enemy_arcane_immune(e.enemy_id.as_str())
                && has_strippable_attributes(e.enemy_id.as_str())
        })
        .map(|e| e.instance_id.as_str().to_string())
        .collect();

    if eligible.is_empty() {
        return Err(ApplyError::InternalError(
            "Know Your Prey: no eligible enemies".into(),
        ));
    }

    if eligible.len() == 1 {
        setup_know_your_prey_options(state, player_idx, skill_id, &eligible[0]);
    } else {
        let options: Vec<CardEffect> = eligible.iter().map(|_| CardEffect::Noop).collect();
        state.players[player_idx].pending.active =
            Some(ActivePending::Choice(PendingChoice {
                card_id: None,
                skill_id: Some(skill_id.clone()),
                unit_instance_id: None,
                options,
                continuation: vec![],
                movement_bonus_applied: false,
                resolution: ChoiceResolution::KnowYourPreyTarget {
                    eligible_enemy_ids: eligible,
                },
            }));
    }

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

/// Build options for Know Your Prey after target selection.
pub(crate) fn setup_know_your_prey_options(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
    enemy_instance_id: &str,
) {
    use realm_types::effect::CardEffect;
    use realm_types::pending::{ChoiceResolution, KnowYourPreyApplyOption, PendingChoice};

    let combat = state.combat.as_ref().unwrap();
    let enemy = combat
        .enemies
        .iter()
        .find(|e| e.instance_id.as_str() == enemy_instance_id)
        .unwrap();
    let enemy_def = realm_data::enemies::get_enemy(enemy.enemy_id.as_str());

    let mut strip_options: Vec<KnowYourPreyApplyOption> = Vec::new();

    if let Some(def) = enemy_def {
        // Removable abilities
        let removable = [
            EnemyAbilityType::Assassination,
            EnemyAbilityType::Brutal,
            EnemyAbilityType::Paralyze,
            EnemyAbilityType::Poison,
            EnemyAbilityType::Swift,
            EnemyAbilityType::Vampiric,
            EnemyAbilityType::Elusive,
            EnemyAbilityType::Fortified,
        ];
        for ability in &removable {
            if def.abilities.contains(ability) {
                strip_options.push(KnowYourPreyApplyOption::NullifyAbility {
                    ability: *ability,
                });
            }
        }

        // Resistances
        for r in def.resistances {
            strip_options.push(KnowYourPreyApplyOption::RemoveResistance {
                element: *r,
            });
        }

        // Element conversions (attack element)
        let attack_element = def.attack_element;
        add_element_conversions(&mut strip_options, attack_element);

        // Multi-attack element conversions
        if let Some(attacks) = def.attacks {
            for atk in attacks {
                add_element_conversions(&mut strip_options, atk.element);
            }
        }
    }

    // Deduplicate conversions
    strip_options.dedup_by(|a, b| {
        match (a, b) {
            (
                KnowYourPreyApplyOption::ConvertElement { from: f1, to: t1 },
                KnowYourPreyApplyOption::ConvertElement { from: f2, to: t2 },
            ) => *f1 == *f2 && *t1 == *t2,
            _ => false,
        }
    });

    if strip_options.len() == 1 {
        // Auto-apply
        execute_know_your_prey_option(
            state, player_idx, skill_id, enemy_instance_id, &strip_options[0],
        );
    } else if !strip_options.is_empty() {
        let options: Vec<CardEffect> = strip_options.iter().map(|_| CardEffect::Noop).collect();
        state.players[player_idx].pending.active =
            Some(ActivePending::Choice(PendingChoice {
                card_id: None,
                skill_id: Some(skill_id.clone()),
                unit_instance_id: None,
                options,
                continuation: vec![],
                movement_bonus_applied: false,
                resolution: ChoiceResolution::KnowYourPreyOption {
                    enemy_instance_id: enemy_instance_id.to_string(),
                    options: strip_options,
                },
            }));
    }
}

fn add_element_conversions(
    strip_options: &mut Vec<realm_types::pending::KnowYourPreyApplyOption>,
    element: Element,
) {
    use realm_types::pending::KnowYourPreyApplyOption;
    match element {
        Element::Fire => {
            strip_options.push(KnowYourPreyApplyOption::ConvertElement {
                from: Element::Fire,
                to: Element::Physical,
            });
        }
        Element::Ice => {
            strip_options.push(KnowYourPreyApplyOption::ConvertElement {
                from: Element::Ice,
                to: Element::Physical,
            });
        }
        Element::ColdFire => {
            strip_options.push(KnowYourPreyApplyOption::ConvertElement {
                from: Element::ColdFire,
                to: Element::Fire,
            });
            strip_options.push(KnowYourPreyApplyOption::ConvertElement {
                from: Element::ColdFire,
                to: Element::Ice,
            });
        }
        _ => {} // Physical has no conversion
    }
}

/// Execute Know Your Prey option: push modifier.
pub(crate) fn execute_know_your_prey_option(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
    enemy_instance_id: &str,
    opt: &realm_types::pending::KnowYourPreyApplyOption,
) {
    use realm_types::pending::KnowYourPreyApplyOption;

    let effect = match opt {
        KnowYourPreyApplyOption::NullifyAbility { ability } => {
            realm_types::modifier::ModifierEffect::AbilityNullifier {
                ability: Some(*ability),
                ignore_arcane_immunity: false,
            }
        }
        KnowYourPreyApplyOption::RemoveResistance { element } => {
            match element {
                ResistanceElement::Physical => realm_types::modifier::ModifierEffect::RemovePhysicalResistance,
                ResistanceElement::Fire => realm_types::modifier::ModifierEffect::RemoveFireResistance,
                ResistanceElement::Ice => realm_types::modifier::ModifierEffect::RemoveIceResistance,
            }
        }
        KnowYourPreyApplyOption::ConvertElement { from, to } => {
            realm_types::modifier::ModifierEffect::ConvertAttackElement {
                from_element: *from,
                to_element: *to,
            }
        }
    };

    push_skill_modifier(
        state,
        player_idx,
        skill_id,
        realm_types::modifier::ModifierDuration::Combat,
        realm_types::modifier::ModifierScope::OneEnemy {
            enemy_id: enemy_instance_id.to_string(),
        },
        effect,
    );
}

// =============================================================================
// Enemy helpers
// =============================================================================

fn is_enemy_fortified(enemy_id: &str) -> bool {
    realm_data::enemies::get_enemy(enemy_id)
        .map(|d| d.abilities.contains(&EnemyAbilityType::Fortified))
        .unwrap_or(false)
}

fn is_enemy_arcane_immune(enemy_id: &str) -> bool {
    realm_data::enemies::get_enemy(enemy_id)
        .map(|d| d.abilities.contains(&EnemyAbilityType::ArcaneImmunity))
        .unwrap_or(false)
}

fn has_strippable_attributes(enemy_id: &str) -> bool {
    let Some(def) = realm_data::enemies::get_enemy(enemy_id) else {
        return false;
    };

    // Has removable abilities?
    let removable = [
        EnemyAbilityType::Assassination,
        EnemyAbilityType::Brutal,
        EnemyAbilityType::Paralyze,
        EnemyAbilityType::Poison,
        EnemyAbilityType::Swift,
        EnemyAbilityType::Vampiric,
        EnemyAbilityType::Elusive,
        EnemyAbilityType::Fortified,
    ];
    if def.abilities.iter().any(|a| removable.contains(a)) {
        return true;
    }

    // Has resistances?
    if !def.resistances.is_empty() {
        return true;
    }

    // Has non-physical attack element?
    if !matches!(def.attack_element, Element::Physical) {
        return true;
    }

    // Multi-attack non-physical?
    if let Some(attacks) = def.attacks {
        if attacks.iter().any(|a| !matches!(a.element, Element::Physical)) {
            return true;
        }
    }

    false
}

/// Public wrapper for `has_strippable_attributes` (used by enumeration).
pub(crate) fn has_strippable_attributes_pub(enemy_id: &str) -> bool {
    has_strippable_attributes(enemy_id)
}

/// Short-circuit check for polarization options (used by enumeration gate).
pub(crate) fn has_polarization_options(state: &GameState, player_idx: usize) -> bool {
    let player = &state.players[player_idx];
    let is_day = state.time_of_day == TimeOfDay::Day;

    fn is_basic(c: ManaColor) -> bool {
        matches!(c, ManaColor::Red | ManaColor::Blue | ManaColor::Green | ManaColor::White)
    }

    // Check tokens
    for token in &player.pure_mana {
        if is_basic(token.color) { return true; }
        if token.color == ManaColor::Black && is_day { return true; }
        if token.color == ManaColor::Gold && !is_day { return true; }
    }

    // Check crystals
    if player.crystals.red > 0 || player.crystals.blue > 0
        || player.crystals.green > 0 || player.crystals.white > 0
    {
        return true;
    }

    // Check source dice
    for die in &state.source.dice {
        if die.is_depleted || die.taken_by_player_id.is_some() { continue; }
        if is_basic(die.color) { return true; }
        if die.color == ManaColor::Black && is_day { return true; }
        if die.color == ManaColor::Gold && !is_day { return true; }
    }

    false
}

/// End combat: remove defeated enemies from map hex, discard tokens, clean up state.
fn end_combat(state: &mut GameState, player_idx: usize) {
    if let Some(ref combat) = state.combat {
        // If combat has a hex coordinate, remove defeated enemies from that hex
        if let Some(hex_coord) = combat.combat_hex_coord {
            let hex_key = hex_coord.key();

            // Collect defeated enemy IDs to match against hex enemies
            let defeated_enemy_ids: Vec<String> = combat
                .enemies
                .iter()
                .filter(|e| e.is_defeated)
                .map(|e| e.enemy_id.as_str().to_string())
                .collect();

            if let Some(hex) = state.map.hexes.get_mut(&hex_key) {
                // Remove enemies whose base ID matches a defeated enemy
                // and discard their tokens to the appropriate color pile
                let mut to_remove: Vec<(EnemyTokenId, EnemyColor)> = Vec::new();

                for enemy in hex.enemies.iter() {
                    let base_id = enemy_id_from_token(&enemy.token_id);
                    if defeated_enemy_ids.contains(&base_id) {
                        to_remove.push((enemy.token_id.clone(), enemy.color));
                    }
                }

                // Remove from hex
                hex.enemies.retain(|e| {
                    let base_id = enemy_id_from_token(&e.token_id);
                    !defeated_enemy_ids.contains(&base_id)
                });

                // Discard tokens to color piles
                for (token_id, color) in &to_remove {
                    discard_enemy_token(&mut state.enemy_tokens, token_id, *color);
                }
            }
        }
    }

    // Conquest marking: if all required-for-conquest enemies defeated and hex has an unconquered site.
    // Rampaging enemies provoked during an assault have is_required_for_conquest=false,
    // so they don't need to be defeated for the site to be conquered.
    let mut conquered = false;
    if let Some(ref combat) = state.combat {
        let all_required_defeated = combat
            .enemies
            .iter()
            .filter(|e| e.is_required_for_conquest)
            .all(|e| e.is_defeated);
        let has_any_required = combat
            .enemies
            .iter()
            .any(|e| e.is_required_for_conquest);
        let all_defeated = combat.enemies.iter().all(|e| e.is_defeated);
        // Conquest if: (1) all required enemies defeated (when there are required enemies), OR
        // (2) all enemies defeated (fallback for non-assault combats with no required markers)
        if (has_any_required && all_required_defeated) || (!has_any_required && all_defeated) {
            conquered = true;
            if let Some(hex_coord) = combat.combat_hex_coord {
                if let Some(hex) = state.map.hexes.get_mut(&hex_coord.key()) {
                    if let Some(ref mut site) = hex.site {
                        if !site.is_conquered {
                            site.is_conquered = true;
                            site.owner = Some(state.players[player_idx].id.clone());
                        }
                    }
                    // Clear remaining enemies from hex (all defeated)
                    hex.enemies.clear();
                }
            }
        }
    }

    // A failed fortified assault withdraws the player back to the hex they
    // attacked from.
    let withdraw_to = state
        .combat
        .as_ref()
        .filter(|c| c.is_at_fortified_site && !conquered)
        .and_then(|c| c.assault_origin);

    // Dueling: award fame bonus if target defeated without unit involvement
    resolve_dueling_fame_bonus(state, player_idx);

    // Expire combat-duration modifiers
    expire_modifiers_combat(&mut state.active_modifiers);

    // Clear combat state
    state.combat = None;
    let player = &mut state.players[player_idx];
    if let Some(origin) = withdraw_to {
        player.position = Some(origin);
    }
    player.combat_accumulator = Default::default();
    player.flags.insert(PlayerFlags::HAS_TAKEN_ACTION_THIS_TURN);
    player.flags.insert(PlayerFlags::HAS_COMBATTED_THIS_TURN);

    // Reset unit combat-specific state
    for unit in &mut player.units {
        unit.used_resistance_this_combat = false;
    }

    // Clear combat-scoped skill cooldowns
    player.skill_cooldowns.used_this_combat.clear();
}

// =============================================================================
// Modifier expiration
// =============================================================================

/// Expire all modifiers with `Combat` duration.
fn expire_modifiers_combat(modifiers: &mut Vec<realm_types::modifier::ActiveModifier>) {
    modifiers.retain(|m| m.duration != realm_types::modifier::ModifierDuration::Combat);
}

/// Expire `Turn` duration modifiers created by the given player.
pub fn expire_modifiers_turn_end(modifiers: &mut Vec<realm_types::modifier::ActiveModifier>, player_id: &realm_types::ids::PlayerId) {
    modifiers.retain(|m| {
        !(m.duration == realm_types::modifier::ModifierDuration::Turn
            && m.created_by_player_id == *player_id)
    });
}

/// Expire `UntilNextTurn` modifiers created by the given player (at their turn start).
pub fn expire_modifiers_turn_start(modifiers: &mut Vec<realm_types::modifier::ActiveModifier>, player_id: &realm_types::ids::PlayerId) {
    modifiers.retain(|m| {
        !(m.duration == realm_types::modifier::ModifierDuration::UntilNextTurn
            && m.created_by_player_id == *player_id)
    });
}

/// Expire all modifiers with `Round` duration.
pub fn expire_modifiers_round_end(modifiers: &mut Vec<realm_types::modifier::ActiveModifier>) {
    modifiers.retain(|m| m.duration != realm_types::modifier::ModifierDuration::Round);
}

// =============================================================================
// Unit recruitment
// =============================================================================

fn apply_recruit_unit(
    state: &mut GameState,
    player_idx: usize,
    unit_id: &realm_types::ids::UnitId,
    influence_cost: u32,
) -> Result<ApplyResult, ApplyError> {
    let player = &mut state.players[player_idx];

    if player.influence_points < influence_cost {
        return Err(ApplyError::InternalError(
            "RecruitUnit: insufficient influence".into(),
        ));
    }
    player.influence_points -= influence_cost;

    let instance_id =
        realm_types::ids::UnitInstanceId::from(format!("unit_{}", state.next_instance_counter));
    state.next_instance_counter += 1;

    let level = realm_data::units::get_unit(unit_id.as_str())
        .map(|u| u.level)
        .unwrap_or(1);

    let unit = PlayerUnit {
        instance_id,
        unit_id: unit_id.clone(),
        level,
        state: UnitState::Ready,
        wounded: false,
        used_resistance_this_combat: false,
        used_ability_indices: Vec::new(),
        mana_token: None,
    };

    // Push unit — ArrayVec panics if over capacity, but enumeration
    // already checked command_slots so this should always fit.
    state.players[player_idx].units.push(unit);

    // Bonds of Loyalty: track the bonds unit if this fills the extra slot
    if state.players[player_idx].bonds_of_loyalty_unit_instance_id.is_none()
        && state.players[player_idx].skills.iter().any(|s| s.as_str() == "norowas_bonds_of_loyalty")
    {
        let normal_slots = realm_data::levels::get_level_stats(
            state.players[player_idx].level,
        ).command_slots as usize;
        if state.players[player_idx].units.len() > normal_slots {
            let inst_id = state.players[player_idx].units.last().unwrap().instance_id.clone();
            state.players[player_idx].bonds_of_loyalty_unit_instance_id = Some(inst_id);
        }
    }

    state.players[player_idx]
        .units_recruited_this_interaction
        .push(unit_id.clone());
    state.players[player_idx]
        .flags
        .insert(PlayerFlags::HAS_RECRUITED_UNIT_THIS_TURN);
    state.players[player_idx]
        .flags
        .insert(PlayerFlags::HAS_TAKEN_ACTION_THIS_TURN);

    realm_data::unit_offers::take_from_unit_offer(&mut state.offers.units, unit_id.as_str());

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

fn consume_mana_for_unit(
    state: &mut GameState,
    player_idx: usize,
    color: BasicManaColor,
) -> Result<ManaColor, ApplyError> {
    let target_mana = ManaColor::from(color);
    let player = &mut state.players[player_idx];

    // 1. Try matching-color mana token
    if let Some(idx) = player.pure_mana.iter().position(|t| t.color == target_mana) {
        player.pure_mana.remove(idx);
        return Ok(target_mana);
    }

    // 2. Try gold mana token (wild)
    if let Some(idx) = player
        .pure_mana
        .iter()
        .position(|t| t.color == ManaColor::Gold)
    {
        player.pure_mana.remove(idx);
        return Ok(ManaColor::Gold);
    }

    // 3. Try matching-color crystal
    let crystal = match color {
        BasicManaColor::Red => &mut player.crystals.red,
        BasicManaColor::Blue => &mut player.crystals.blue,
        BasicManaColor::Green => &mut player.crystals.green,
        BasicManaColor::White => &mut player.crystals.white,
    };
    if *crystal > 0 {
        *crystal -= 1;
        return Ok(target_mana);
    }

    Err(ApplyError::InternalError(format!(
        "ActivateUnit: cannot afford mana cost {:?}",
        color
    )))
}

fn apply_activate_unit(
    state: &mut GameState,
    player_idx: usize,
    unit_instance_id: &realm_types::ids::UnitInstanceId,
    ability_index: usize,
) -> Result<ApplyResult, ApplyError> {
    // Find the unit
    let unit_idx = state.players[player_idx]
        .units
        .iter()
        .position(|u| u.instance_id == *unit_instance_id)
        .ok_or_else(|| {
            ApplyError::InternalError(format!(
                "ActivateUnit: unit '{}' not found",
                unit_instance_id.as_str()
            ))
        })?;

    let unit_id = state.players[player_idx].units[unit_idx].unit_id.clone();
    let unit_def = realm_data::units::get_unit(unit_id.as_str()).ok_or_else(|| {
        ApplyError::InternalError(format!("ActivateUnit: unknown unit def '{}'", unit_id.as_str()))
    })?;

    if ability_index >= unit_def.abilities.len() {
        return Err(ApplyError::InternalError(format!(
            "ActivateUnit: ability_index {} out of range (unit '{}' has {} abilities)",
            ability_index,
            unit_id.as_str(),
            unit_def.abilities.len()
        )));
    }

    let slot = &unit_def.abilities[ability_index];

    // Consume mana if needed
    if let Some(color) = slot.mana_cost {
        let consumed_color = consume_mana_for_unit(state, player_idx, color)?;
        // Mana Enhancement trigger on mana-powered unit activation
        crate::card_play::check_mana_enhancement_trigger(state, player_idx, consumed_color);
    }

    // Apply the ability effect
    use realm_data::units::UnitAbility;
    match slot.ability {
        UnitAbility::Attack { value, element } => {
            let acc = &mut state.players[player_idx].combat_accumulator.attack;
            acc.normal += value;
            add_to_elemental(&mut acc.normal_elements, element, value);
        }
        UnitAbility::Block { value, element } => {
            let acc = &mut state.players[player_idx].combat_accumulator;
            acc.block += value;
            add_to_elemental(&mut acc.block_elements, element, value);
        }
        UnitAbility::RangedAttack { value, element } => {
            let acc = &mut state.players[player_idx].combat_accumulator.attack;
            acc.ranged += value;
            add_to_elemental(&mut acc.ranged_elements, element, value);
        }
        UnitAbility::SiegeAttack { value, element } => {
            let acc = &mut state.players[player_idx].combat_accumulator.attack;
            acc.siege += value;
            add_to_elemental(&mut acc.siege_elements, element, value);
        }
        UnitAbility::Move { value } => {
            state.players[player_idx].move_points += value;
        }
        UnitAbility::Influence { value } => {
            state.players[player_idx].influence_points += value;
        }
        UnitAbility::Heal { value } => {
            let player = &mut state.players[player_idx];
            let wound_count = player
                .hand
                .iter()
                .filter(|c| c.as_str() == "wound")
                .count() as u32;
            let to_heal = value.min(wound_count);
            let mut healed = 0u32;
            player.hand.retain(|c| {
                if healed < to_heal && c.as_str() == "wound" {
                    healed += 1;
                    false
                } else {
                    true
                }
            });
            player.healing_points += value.saturating_sub(to_heal);
            player.wounds_healed_from_hand_this_turn += healed;
        }
        UnitAbility::GainMana { color } => {
            state.players[player_idx].pure_mana.push(ManaToken {
                color: ManaColor::from(color),
                source: ManaTokenSource::Effect,
                cannot_power_spells: false,
            });
        }
        UnitAbility::GainCrystal { color } => {
            mana::gain_crystal(&mut state.players[player_idx], color);
        }
        UnitAbility::GainManaAndCrystal { color } => {
            state.players[player_idx].pure_mana.push(ManaToken {
                color: ManaColor::from(color),
                source: ManaTokenSource::Effect,
                cannot_power_spells: false,
            });
            mana::gain_crystal(&mut state.players[player_idx], color);
        }
        UnitAbility::AttackWithRepCost { value, element, rep_change } => {
            let acc = &mut state.players[player_idx].combat_accumulator.attack;
            acc.normal += value;
            add_to_elemental(&mut acc.normal_elements, element, value);
            let new_rep = (state.players[player_idx].reputation as i16 + rep_change as i16)
                .clamp(-7, 7) as i8;
            state.players[player_idx].reputation = new_rep;
        }
        UnitAbility::InfluenceWithRepCost { value, rep_change } => {
            state.players[player_idx].influence_points += value;
            let new_rep = (state.players[player_idx].reputation as i16 + rep_change as i16)
                .clamp(-7, 7) as i8;
            state.players[player_idx].reputation = new_rep;
        }
        UnitAbility::MoveOrInfluence { value } => {
            use realm_types::pending::{ActivePending, UnitAbilityChoiceOption};
            // Mark unit spent first, then create pending choice
            state.players[player_idx].units[unit_idx].state = UnitState::Spent;
            state.players[player_idx].pending.active =
                Some(ActivePending::UnitAbilityChoice {
                    unit_instance_id: unit_instance_id.clone(),
                    options: vec![
                        UnitAbilityChoiceOption::GainMove { value },
                        UnitAbilityChoiceOption::GainInfluence { value },
                    ],
                    wound_self: false,
                });
            // Return early — unit already marked spent
            return Ok(ApplyResult {
                needs_reenumeration: true,
                game_ended: false,
            });
        }
        UnitAbility::AttackOrBlockWoundSelf { value, element } => {
            use realm_types::pending::{ActivePending, UnitAbilityChoiceOption};
            // Mark unit spent first, then create pending choice
            state.players[player_idx].units[unit_idx].state = UnitState::Spent;
            state.players[player_idx].pending.active =
                Some(ActivePending::UnitAbilityChoice {
                    unit_instance_id: unit_instance_id.clone(),
                    options: vec![
                        UnitAbilityChoiceOption::GainAttack { value, element },
                        UnitAbilityChoiceOption::GainBlock { value, element },
                    ],
                    wound_self: true,
                });
            // Return early — unit already marked spent
            return Ok(ApplyResult {
                needs_reenumeration: true,
                game_ended: false,
            });
        }
        UnitAbility::ReadyUnit { max_level } => {
            // Find spent units at or below max_level
            let eligible: Vec<usize> = state.players[player_idx]
                .units
                .iter()
                .enumerate()
                .filter(|(_, u)| u.state == UnitState::Spent && u.level <= max_level)
                .map(|(i, _)| i)
                .collect();

            match eligible.len() {
                0 => {
                    // No eligible units — should not reach here due to enumeration guard
                }
                1 => {
                    // Auto-ready the single eligible unit
                    let target_idx = eligible[0];
                    state.players[player_idx].units[target_idx].state = UnitState::Ready;
                }
                _ => {
                    use realm_types::pending::ActivePending;
                    use realm_types::effect::CardEffect;
                    use realm_types::pending::{ChoiceResolution, PendingChoice};
                    // Multiple eligible — present choice via existing ReadyUnitTarget mechanism
                    let options: Vec<CardEffect> =
                        eligible.iter().map(|_| CardEffect::Noop).collect();
                    state.players[player_idx].pending.active =
                        Some(ActivePending::Choice(PendingChoice {
                            card_id: None,
                            skill_id: None,
                            unit_instance_id: Some(unit_instance_id.clone()),
                            options,
                            continuation: vec![],
                            movement_bonus_applied: false,
                            resolution: ChoiceResolution::ReadyUnitTarget {
                                eligible_unit_indices: eligible,
                            },
                        }));
                }
            }
        }
        UnitAbility::SelectCombatEnemy(template) => {
            return apply_select_combat_enemy_activation(
                state, player_idx, unit_idx, unit_instance_id, template,
            );
        }
        UnitAbility::CoordinatedFire { ranged_value, element, unit_attack_bonus } => {
            // Add ranged attack to accumulator
            let acc = &mut state.players[player_idx].combat_accumulator.attack;
            acc.ranged += ranged_value;
            add_to_elemental(&mut acc.ranged_elements, element, ranged_value);

            // Add UnitAttackBonus modifier
            use realm_types::modifier::{
                ActiveModifier, ModifierDuration, ModifierEffect, ModifierScope, ModifierSource,
            };
            use realm_types::ids::ModifierId;
            let player_id = state.players[player_idx].id.clone();
            let modifier_count = state.active_modifiers.len();
            let modifier_id = format!(
                "mod_{}_r{}_t{}",
                modifier_count, state.round, state.current_player_index
            );
            state.active_modifiers.push(ActiveModifier {
                id: ModifierId::from(modifier_id.as_str()),
                source: ModifierSource::Unit {
                    unit_index: unit_idx as u32,
                    player_id: player_id.clone(),
                },
                duration: ModifierDuration::Combat,
                scope: ModifierScope::AllUnits,
                effect: ModifierEffect::UnitAttackBonus {
                    amount: unit_attack_bonus,
                },
                created_at_round: state.round,
                created_by_player_id: player_id,
            });
        }
        UnitAbility::GrantAllResistances => {
            use realm_types::modifier::{
                ActiveModifier, ModifierDuration, ModifierEffect, ModifierScope, ModifierSource,
            };
            use realm_types::ids::ModifierId;
            let player_id = state.players[player_idx].id.clone();
            let modifier_count = state.active_modifiers.len();
            let modifier_id = format!(
                "mod_{}_r{}_t{}",
                modifier_count, state.round, state.current_player_index
            );
            state.active_modifiers.push(ActiveModifier {
                id: ModifierId::from(modifier_id.as_str()),
                source: ModifierSource::Unit {
                    unit_index: unit_idx as u32,
                    player_id: player_id.clone(),
                },
                duration: ModifierDuration::Turn,
                scope: ModifierScope::AllUnits,
                effect: ModifierEffect::GrantResistances {
                    resistances: vec![
                        ResistanceElement::Physical,
                        ResistanceElement::Fire,
                        ResistanceElement::Ice,
                    ],
                },
                created_at_round: state.round,
                created_by_player_id: player_id,
            });
        }
        UnitAbility::MoveWithTerrainReduction { move_value, terrain_reductions } => {
            state.players[player_idx].move_points += move_value;
            // Push terrain cost reduction modifiers
            use realm_types::modifier::{
                ActiveModifier, ModifierDuration, ModifierEffect, ModifierScope, ModifierSource,
                TerrainOrAll,
            };
            use realm_types::ids::ModifierId;
            let player_id = state.players[player_idx].id.clone();
            for &(terrain, amount, minimum) in terrain_reductions {
                let modifier_count = state.active_modifiers.len();
                let modifier_id = format!(
                    "mod_{}_r{}_t{}",
                    modifier_count, state.round, state.current_player_index
                );
                state.active_modifiers.push(ActiveModifier {
                    id: ModifierId::from(modifier_id.as_str()),
                    source: ModifierSource::Unit {
                        unit_index: unit_idx as u32,
                        player_id: player_id.clone(),
                    },
                    duration: ModifierDuration::Turn,
                    scope: ModifierScope::SelfScope,
                    effect: ModifierEffect::TerrainCost {
                        terrain: TerrainOrAll::Specific(terrain),
                        amount,
                        minimum,
                        replace_cost: None,
                    },
                    created_at_round: state.round,
                    created_by_player_id: player_id.clone(),
                });
            }
        }
        UnitAbility::Other { .. } => {
            return Err(ApplyError::InternalError(
                "ActivateUnit: Other abilities not executable".into(),
            ));
        }
    }

    // Mark unit spent
    state.players[player_idx].units[unit_idx].state = UnitState::Spent;

    // Dueling: mark unit involvement if a combat ability was used
    if state.combat.is_some() {
        mark_dueling_unit_involvement(state, player_idx);
    }

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

/// Resolve a UnitAbilityChoice pending (MoveOrInfluence, AttackOrBlockWoundSelf).
fn apply_resolve_unit_ability_choice(
    state: &mut GameState,
    player_idx: usize,
    choice_index: usize,
) -> Result<ApplyResult, ApplyError> {
    // Extract the pending
    let pending = state.players[player_idx]
        .pending
        .active
        .take()
        .ok_or_else(|| ApplyError::InternalError("No active pending".into()))?;

    if let ActivePending::UnitAbilityChoice {
        unit_instance_id,
        options,
        wound_self,
    } = pending
    {
        if choice_index >= options.len() {
            return Err(ApplyError::InternalError(format!(
                "UnitAbilityChoice: invalid choice_index {} (options len {})",
                choice_index,
                options.len()
            )));
        }

        let chosen = options[choice_index];

        // Apply the chosen option
        use realm_types::pending::UnitAbilityChoiceOption;
        match chosen {
            UnitAbilityChoiceOption::GainMove { value } => {
                state.players[player_idx].move_points += value;
            }
            UnitAbilityChoiceOption::GainInfluence { value } => {
                state.players[player_idx].influence_points += value;
            }
            UnitAbilityChoiceOption::GainAttack { value, element } => {
                let acc = &mut state.players[player_idx].combat_accumulator.attack;
                acc.normal += value;
                add_to_elemental(&mut acc.normal_elements, element, value);
            }
            UnitAbilityChoiceOption::GainBlock { value, element } => {
                let acc = &mut state.players[player_idx].combat_accumulator;
                acc.block += value;
                add_to_elemental(&mut acc.block_elements, element, value);
            }
        }

        // Wound the unit if needed (AttackOrBlockWoundSelf)
        if wound_self {
            if let Some(unit) = state.players[player_idx]
                .units
                .iter_mut()
                .find(|u| u.instance_id == unit_instance_id)
            {
                unit.wounded = true;
            }
        }

        Ok(ApplyResult {
            needs_reenumeration: true,
            game_ended: false,
        })
    } else {
        // Put back what we took and error
        state.players[player_idx].pending.active = Some(pending);
        Err(ApplyError::InternalError(
            "Expected UnitAbilityChoice pending".into(),
        ))
    }
}

// =============================================================================
// SelectCombatEnemy activation + resolution
// =============================================================================

/// Activate a SelectCombatEnemy ability: filter eligible enemies, auto-resolve or create pending.
fn apply_select_combat_enemy_activation(
    state: &mut GameState,
    player_idx: usize,
    unit_idx: usize,
    unit_instance_id: &realm_types::ids::UnitInstanceId,
    template: realm_types::pending::SelectEnemyTemplate,
) -> Result<ApplyResult, ApplyError> {
    // Mark unit spent first
    state.players[player_idx].units[unit_idx].state = UnitState::Spent;

    let combat = state
        .combat
        .as_ref()
        .ok_or_else(|| ApplyError::InternalError("SelectCombatEnemy: no combat".into()))?;

    // Filter eligible enemies
    let mut eligible_ids: Vec<String> = Vec::new();
    for enemy in &combat.enemies {
        if enemy.is_defeated || enemy.is_summoner_hidden {
            continue;
        }

        let def = match get_enemy(enemy.enemy_id.as_str()) {
            Some(d) => d,
            None => continue,
        };

        // Apply template filters
        if template.exclude_fortified
            && combat_resolution::is_effectively_fortified(
                def,
                enemy.instance_id.as_str(),
                combat.is_at_fortified_site,
                &state.active_modifiers,
            )
        {
            continue;
        }

        if template.exclude_arcane_immune
            && combat_resolution::has_ability(def, EnemyAbilityType::ArcaneImmunity)
        {
            continue;
        }

        if template.exclude_summoners
            && (combat_resolution::has_ability(def, EnemyAbilityType::Summon)
                || combat_resolution::has_ability(def, EnemyAbilityType::SummonGreen))
        {
            continue;
        }

        if let Some(resist) = template.exclude_resistance {
            if def.resistances.contains(&resist) {
                continue;
            }
        }

        eligible_ids.push(enemy.instance_id.as_str().to_string());
    }

    match eligible_ids.len() {
        0 => {
            // No eligible enemies — ability fizzles (unit still spent)
        }
        1 => {
            // Auto-resolve with the single eligible enemy
            let uid_opt = Some(unit_instance_id.clone());
            apply_select_enemy_effects(state, player_idx, &uid_opt, &eligible_ids[0], &template)?;
        }
        _ => {
            // Multiple eligible — create pending
            state.players[player_idx].pending.active =
                Some(ActivePending::SelectCombatEnemy {
                    unit_instance_id: Some(unit_instance_id.clone()),
                    eligible_enemy_ids: eligible_ids,
                    template,
                    continuation: Vec::new(),
                });
        }
    }

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

/// Resolve a SelectCombatEnemy pending choice.
fn apply_resolve_select_enemy(
    state: &mut GameState,
    player_idx: usize,
    choice_index: usize,
) -> Result<ApplyResult, ApplyError> {
    let pending = state.players[player_idx]
        .pending
        .active
        .take()
        .ok_or_else(|| ApplyError::InternalError("No active pending".into()))?;

    if let ActivePending::SelectCombatEnemy {
        unit_instance_id,
        eligible_enemy_ids,
        template,
        continuation,
    } = pending
    {
        if choice_index >= eligible_enemy_ids.len() {
            return Err(ApplyError::InternalError(format!(
                "SelectCombatEnemy: invalid choice_index {} (eligible len {})",
                choice_index,
                eligible_enemy_ids.len()
            )));
        }

        let enemy_id = &eligible_enemy_ids[choice_index];
        apply_select_enemy_effects(state, player_idx, &unit_instance_id, enemy_id, &template)?;

        // Replay any continuation effects from the effect queue
        if !continuation.is_empty() {
            use crate::effect_queue::{EffectQueue, QueuedEffect, DrainResult};
            use realm_types::pending::{ContinuationEntry, PendingChoice};

            let mut queue = EffectQueue::new();
            queue.push_continuation(
                continuation
                    .into_iter()
                    .map(|c| QueuedEffect {
                        effect: c.effect,
                        source_card_id: c.source_card_id,
                    })
                    .collect(),
            );

            match queue.drain(state, player_idx) {
                DrainResult::Complete => {}
                DrainResult::NeedsChoice {
                    options,
                    continuation: cont,
                    resolution,
                } => {
                    state.players[player_idx].pending.active =
                        Some(ActivePending::Choice(PendingChoice {
                            card_id: None,
                            skill_id: None,
                            unit_instance_id: None,
                            options,
                            continuation: cont
                                .into_iter()
                                .map(|q| ContinuationEntry {
                                    effect: q.effect,
                                    source_card_id: q.source_card_id,
                                })
                                .collect(),
                            movement_bonus_applied: false,
                            resolution,
                        }));
                }
                DrainResult::PendingSet => {}
            }
        }

        Ok(ApplyResult {
            needs_reenumeration: true,
            game_ended: false,
        })
    } else {
        state.players[player_idx].pending.active = Some(pending);
        Err(ApplyError::InternalError(
            "Expected SelectCombatEnemy pending".into(),
        ))
    }
}

/// Public wrapper for apply_select_enemy_effects (used by effect_queue).
pub fn apply_select_enemy_effects_pub(
    state: &mut GameState,
    player_idx: usize,
    unit_instance_id: &Option<realm_types::ids::UnitInstanceId>,
    enemy_instance_id: &str,
    template: &realm_types::pending::SelectEnemyTemplate,
) -> Result<(), ApplyError> {
    apply_select_enemy_effects(state, player_idx, unit_instance_id, enemy_instance_id, template)
}

/// Apply the template effects to a chosen enemy.
fn apply_select_enemy_effects(
    state: &mut GameState,
    player_idx: usize,
    unit_instance_id: &Option<realm_types::ids::UnitInstanceId>,
    enemy_instance_id: &str,
    template: &realm_types::pending::SelectEnemyTemplate,
) -> Result<(), ApplyError> {
    use realm_types::modifier::{
        ActiveModifier, ModifierDuration, ModifierEffect, ModifierScope, ModifierSource,
        EnemyStat as ModEnemyStat,
    };
    use realm_types::ids::ModifierId;

    let player_id = state.players[player_idx].id.clone();

    // Determine source: unit or card
    let source = if let Some(uid) = unit_instance_id {
        let unit_idx = state.players[player_idx]
            .units
            .iter()
            .position(|u| u.instance_id == *uid)
            .unwrap_or(0) as u32;
        ModifierSource::Unit {
            unit_index: unit_idx,
            player_id: player_id.clone(),
        }
    } else {
        ModifierSource::Card {
            card_id: realm_types::ids::CardId::from("select_combat_enemy"),
            player_id: player_id.clone(),
        }
    };

    // Check if target has ArcaneImmunity
    let has_ai = {
        let combat = state.combat.as_ref().ok_or_else(|| {
            ApplyError::InternalError("SelectCombatEnemy: no combat".into())
        })?;
        combat
            .enemies
            .iter()
            .find(|e| e.instance_id.as_str() == enemy_instance_id)
            .and_then(|e| get_enemy(e.enemy_id.as_str()))
            .is_some_and(|def| {
                combat_resolution::has_ability(def, EnemyAbilityType::ArcaneImmunity)
            })
    };

    // Check if target is fortified (for fortified_armor_change)
    let is_fortified = {
        let combat = state.combat.as_ref().unwrap();
        combat
            .enemies
            .iter()
            .find(|e| e.instance_id.as_str() == enemy_instance_id)
            .and_then(|e| get_enemy(e.enemy_id.as_str()))
            .is_some_and(|def| {
                combat_resolution::is_effectively_fortified(
                    def,
                    enemy_instance_id,
                    combat.is_at_fortified_site,
                    &state.active_modifiers,
                )
            })
    };

    let mut push_modifier = |effect: ModifierEffect| {
        let modifier_count = state.active_modifiers.len();
        let modifier_id = format!(
            "mod_{}_r{}_t{}",
            modifier_count, state.round, state.current_player_index
        );
        state.active_modifiers.push(ActiveModifier {
            id: ModifierId::from(modifier_id.as_str()),
            source: source.clone(),
            duration: ModifierDuration::Combat,
            scope: ModifierScope::OneEnemy {
                enemy_id: enemy_instance_id.to_string(),
            },
            effect,
            created_at_round: state.round,
            created_by_player_id: player_id.clone(),
        });
    };

    // skip_attack — blocked by ArcaneImmunity
    if template.skip_attack && !has_ai {
        push_modifier(ModifierEffect::EnemySkipAttack);
    }

    // armor_change — blocked by ArcaneImmunity
    let effective_armor_change = if template.armor_per_resistance {
        // resistance_break: multiply armor_change by number of resistances
        let num_resistances = {
            let combat = state.combat.as_ref().unwrap();
            combat
                .enemies
                .iter()
                .find(|e| e.instance_id.as_str() == enemy_instance_id)
                .and_then(|e| get_enemy(e.enemy_id.as_str()))
                .map_or(0, |def| def.resistances.len() as i32)
        };
        template.armor_change * num_resistances
    } else {
        template.armor_change
    };
    if effective_armor_change != 0 && !has_ai {
        // Use fortified_armor_change when enemy is fortified and template specifies it
        let effective_amount = if is_fortified {
            template.fortified_armor_change.unwrap_or(effective_armor_change)
        } else {
            effective_armor_change
        };
        push_modifier(ModifierEffect::EnemyStat {
            stat: ModEnemyStat::Armor,
            amount: effective_amount,
            minimum: template.armor_minimum,
            attack_index: None,
            per_resistance: template.armor_per_resistance,
            fortified_amount: template.fortified_armor_change,
            exclude_resistance: None,
        });
    }

    // attack_change — NOT blocked by ArcaneImmunity (FAQ S1)
    if template.attack_change != 0 {
        push_modifier(ModifierEffect::EnemyStat {
            stat: ModEnemyStat::Attack,
            amount: template.attack_change,
            minimum: template.attack_minimum,
            attack_index: None,
            per_resistance: false,
            fortified_amount: None,
            exclude_resistance: None,
        });
    }

    // nullify_fortified — blocked by ArcaneImmunity
    if template.nullify_fortified && !has_ai {
        push_modifier(ModifierEffect::AbilityNullifier {
            ability: Some(EnemyAbilityType::Fortified),
            ignore_arcane_immunity: false,
        });
    }

    // remove_resistances — blocked by ArcaneImmunity
    if template.remove_resistances && !has_ai {
        push_modifier(ModifierEffect::RemoveResistances);
    }

    // defeat_if_blocked — blocked by ArcaneImmunity
    if template.defeat_if_blocked && !has_ai {
        push_modifier(ModifierEffect::DefeatIfBlocked);
    }

    // damage_redirect — NOT blocked by ArcaneImmunity (defensive effect)
    if template.damage_redirect_from_unit {
        if let Some(uid) = unit_instance_id {
            let combat = state.combat.as_mut().ok_or_else(|| {
                ApplyError::InternalError("SelectCombatEnemy: no combat for redirect".into())
            })?;
            combat.damage_redirects.insert(
                enemy_instance_id.to_string(),
                uid.as_str().to_string(),
            );
        }
    }

    // bundled_ranged_attack — NOT blocked by ArcaneImmunity (always resolves)
    if template.bundled_ranged_attack > 0 {
        let acc = &mut state.players[player_idx].combat_accumulator.attack;
        acc.ranged += template.bundled_ranged_attack;
        acc.ranged_elements.physical += template.bundled_ranged_attack;
    }

    // remove_fire_resistance — blocked by ArcaneImmunity
    if template.remove_fire_resistance && !has_ai {
        push_modifier(ModifierEffect::RemoveFireResistance);
    }

    // defeat — NOT blocked by ArcaneImmunity (physical destruction)
    if template.defeat {
        // Mark enemy as defeated and grant fame
        let (fame_gain, rep_bonus) = {
            let combat = state.combat.as_ref().unwrap();
            if let Some(enemy) = combat.enemies.iter().find(|e| e.instance_id.as_str() == enemy_instance_id) {
                let is_summoned = enemy.summoned_by_instance_id.is_some();
                if !is_summoned {
                    if let Some(def) = get_enemy(enemy.enemy_id.as_str()) {
                        (def.fame, def.reputation_bonus.map(|b| b as i8).unwrap_or(0))
                    } else {
                        (0, 0)
                    }
                } else {
                    (0, 0)
                }
            } else {
                (0, 0)
            }
        };

        if let Some(combat) = state.combat.as_mut() {
            if let Some(enemy) = combat.enemies.iter_mut().find(|e| e.instance_id.as_str() == enemy_instance_id) {
                enemy.is_defeated = true;
            }
        }

        state.players[player_idx].fame += fame_gain;
        if rep_bonus != 0 {
            state.players[player_idx].reputation = (state.players[player_idx].reputation + rep_bonus)
                .clamp(-7, 7);
        }
    }

    // nullify_all_attack_abilities — bypasses ArcaneImmunity (ignore_arcane_immunity: true)
    if template.nullify_all_attack_abilities {
        use realm_types::enums::EnemyAbilityType as EAT;
        for ability in &[
            EAT::Swift, EAT::Brutal, EAT::Poison, EAT::Paralyze,
            EAT::Vampiric, EAT::Assassination, EAT::Cumbersome,
        ] {
            push_modifier(ModifierEffect::AbilityNullifier {
                ability: Some(*ability),
                ignore_arcane_immunity: true,
            });
        }
    }

    Ok(())
}

/// Helper to add elemental damage values.
fn add_to_elemental(ev: &mut ElementalValues, element: Element, amount: u32) {
    match element {
        Element::Physical => ev.physical += amount,
        Element::Fire => ev.fire += amount,
        Element::Ice => ev.ice += amount,
        Element::ColdFire => ev.cold_fire += amount,
    }
}

fn apply_undo(
    state: &mut GameState,
    undo_stack: &mut UndoStack,
) -> Result<ApplyResult, ApplyError> {
    match undo_stack.undo() {
        Some(restored) => {
            *state = restored;
            // Note: epoch will be incremented by the caller after this returns,
            // which is correct — the restored state gets a new epoch.
            Ok(ApplyResult {
                needs_reenumeration: true,
                game_ended: false,
            })
        }
        None => Err(ApplyError::InternalError("Undo stack empty".to_string())),
    }
}

// =============================================================================
// Site interactions
// =============================================================================

fn apply_enter_site(
    state: &mut GameState,
    player_idx: usize,
) -> Result<ApplyResult, ApplyError> {
    let player_pos = state.players[player_idx]
        .position
        .ok_or_else(|| ApplyError::InternalError("EnterSite: player has no position".into()))?;

    let hex_key = player_pos.key();
    let hex_state = state
        .map
        .hexes
        .get(&hex_key)
        .ok_or_else(|| ApplyError::InternalError("EnterSite: hex not found".into()))?;

    let site = hex_state
        .site
        .as_ref()
        .ok_or_else(|| ApplyError::InternalError("EnterSite: no site on hex".into()))?;

    let site_type = site.site_type;

    // Determine enemy tokens for combat
    let enemy_tokens: Vec<EnemyTokenId>;

    if realm_data::sites::draws_fresh_enemies(site_type) {
        // Dungeon/Tomb: always draw fresh enemies
        let config = realm_data::sites::adventure_site_enemies(site_type)
            .ok_or_else(|| ApplyError::InternalError("EnterSite: not an adventure site".into()))?;

        let mut drawn = Vec::new();
        for _ in 0..config.count {
            let token = draw_enemy_token(&mut state.enemy_tokens, config.color, &mut state.rng)
                .ok_or_else(|| {
                    ApplyError::InternalError("EnterSite: no enemy tokens available".into())
                })?;
            drawn.push(token);
        }

        // Place drawn tokens onto hex
        let hex = state.map.hexes.get_mut(&hex_key).unwrap();
        for token in &drawn {
            let enemy_id_str = enemy_id_from_token(token);
            let def = realm_data::enemies::get_enemy(&enemy_id_str).ok_or_else(|| {
                ApplyError::InternalError(format!("EnterSite: unknown enemy {}", enemy_id_str))
            })?;
            hex.enemies.push(HexEnemy {
                token_id: token.clone(),
                color: def.color,
                is_revealed: true,
            });
        }

        enemy_tokens = drawn;
    } else {
        // MonsterDen/SpawningGrounds: use existing hex enemies, or draw if none
        if !hex_state.enemies.is_empty() {
            enemy_tokens = hex_state.enemies.iter().map(|e| e.token_id.clone()).collect();
        } else {
            let config = realm_data::sites::adventure_site_enemies(site_type).ok_or_else(|| {
                ApplyError::InternalError("EnterSite: not an adventure site".into())
            })?;

            let mut drawn = Vec::new();
            for _ in 0..config.count {
                let token =
                    draw_enemy_token(&mut state.enemy_tokens, config.color, &mut state.rng)
                        .ok_or_else(|| {
                            ApplyError::InternalError(
                                "EnterSite: no enemy tokens available".into(),
                            )
                        })?;
                drawn.push(token);
            }

            // Place drawn tokens onto hex
            let hex = state.map.hexes.get_mut(&hex_key).unwrap();
            for token in &drawn {
                let enemy_id_str = enemy_id_from_token(token);
                let def = realm_data::enemies::get_enemy(&enemy_id_str).ok_or_else(|| {
                    ApplyError::InternalError(format!("EnterSite: unknown enemy {}", enemy_id_str))
                })?;
                hex.enemies.push(HexEnemy {
                    token_id: token.clone(),
                    color: def.color,
                    is_revealed: true,
                });
            }

            enemy_tokens = drawn;
        }
    }

    // Determine combat options based on site type
    let options = match site_type {
        SiteType::Dungeon | SiteType::Tomb => combat::EnterCombatOptions {
            units_allowed: false,
            night_mana_rules: true,
        },
        _ => Default::default(),
    };

    let is_fortified = realm_data::sites::is_fortified(site_type);

    // Enter combat
    combat::execute_enter_combat(
        state,
        player_idx,
        &enemy_tokens,
        is_fortified,
        Some(player_pos),
        options,
    )
    .map_err(|e| ApplyError::InternalError(format!("EnterSite: enter_combat failed: {:?}", e)))?;

    state.players[player_idx]
        .flags
        .insert(PlayerFlags::HAS_TAKEN_ACTION_THIS_TURN);

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

fn apply_interact_site(
    state: &mut GameState,
    player_idx: usize,
    healing: u32,
) -> Result<ApplyResult, ApplyError> {
    let player_pos = state.players[player_idx]
        .position
        .ok_or_else(|| ApplyError::InternalError("InteractSite: no position".into()))?;

    let hex_state = state
        .map
        .hexes
        .get(&player_pos.key())
        .ok_or_else(|| ApplyError::InternalError("InteractSite: hex not found".into()))?;

    let site = hex_state
        .site
        .as_ref()
        .ok_or_else(|| ApplyError::InternalError("InteractSite: no site on hex".into()))?;

    let cost_per_wound = realm_data::sites::healing_cost(site.site_type)
        .ok_or_else(|| ApplyError::InternalError("InteractSite: site has no healing cost".into()))?;

    let total_cost = healing * cost_per_wound;

    let player = &mut state.players[player_idx];

    if player.influence_points < total_cost {
        return Err(ApplyError::InternalError(
            "InteractSite: not enough influence".into(),
        ));
    }

    // Deduct influence
    player.influence_points -= total_cost;

    // Remove wound cards from hand
    let mut healed = 0u32;
    player.hand.retain(|card| {
        if healed < healing && card.as_str() == "wound" {
            healed += 1;
            false
        } else {
            true
        }
    });

    player.flags.insert(PlayerFlags::HAS_TAKEN_ACTION_THIS_TURN);

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

fn apply_plunder_site(
    state: &mut GameState,
    player_idx: usize,
) -> Result<ApplyResult, ApplyError> {
    let player_pos = state.players[player_idx]
        .position
        .ok_or_else(|| ApplyError::InternalError("PlunderSite: no position".into()))?;

    let hex_key = player_pos.key();
    let hex = state
        .map
        .hexes
        .get_mut(&hex_key)
        .ok_or_else(|| ApplyError::InternalError("PlunderSite: hex not found".into()))?;

    let site = hex
        .site
        .as_mut()
        .ok_or_else(|| ApplyError::InternalError("PlunderSite: no site on hex".into()))?;

    site.is_burned = true;

    // Reputation loss (capped at -7)
    let player = &mut state.players[player_idx];
    player.reputation = (player.reputation - 1).max(-7);
    player.flags.insert(PlayerFlags::HAS_PLUNDERED_THIS_TURN);

    // Draw 2 cards from deck
    let cards_to_draw = 2.min(player.deck.len());
    for _ in 0..cards_to_draw {
        let card = player.deck.remove(0);
        player.hand.push(card);
    }

    // Clear pending
    state.players[player_idx].pending.active = None;

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

fn apply_decline_plunder(
    state: &mut GameState,
    player_idx: usize,
) -> Result<ApplyResult, ApplyError> {
    // Clear pending
    state.players[player_idx].pending.active = None;

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

fn apply_resolve_glade_wound(
    state: &mut GameState,
    player_idx: usize,
    choice: &GladeWoundChoice,
) -> Result<ApplyResult, ApplyError> {
    let player = &mut state.players[player_idx];

    match choice {
        GladeWoundChoice::Hand => {
            if let Some(idx) = player.hand.iter().position(|c| c.as_str() == "wound") {
                player.hand.remove(idx);
            }
        }
        GladeWoundChoice::Discard => {
            if let Some(idx) = player.discard.iter().position(|c| c.as_str() == "wound") {
                player.discard.remove(idx);
            }
        }
        GladeWoundChoice::Skip => {
            // Player chose to skip — no wound removed
        }
    }

    // Clear pending
    player.pending.active = None;

    Ok(ApplyResult {
        needs_reenumeration: true,
        game_ended: false,
    })
}

// =============================================================================
// Pub wrappers for testing
// =============================================================================

/// Public wrapper for power_of_pain handler (testing only).
pub fn apply_power_of_pain_pub(state: &mut GameState, player_idx: usize, skill_id: &SkillId) {
    let _ = apply_power_of_pain(state, player_idx, skill_id);
}

/// Public wrapper for i_dont_give_a_damn handler (testing only).
pub fn apply_i_dont_give_a_damn_pub(state: &mut GameState, player_idx: usize, skill_id: &SkillId) {
    let _ = apply_i_dont_give_a_damn(state, player_idx, skill_id);
}

/// Public wrapper for who_needs_magic handler (testing only).
pub fn apply_who_needs_magic_pub(state: &mut GameState, player_idx: usize, skill_id: &SkillId) {
    let _ = apply_who_needs_magic(state, player_idx, skill_id);
}

/// Public wrapper for universal_power handler (testing only).
pub fn apply_universal_power_pub(state: &mut GameState, player_idx: usize, skill_id: &SkillId) {
    let _ = apply_universal_power(state, player_idx, skill_id);
}

// =============================================================================
// Interactive skill handlers
// =============================================================================

/// Public wrapper for `place_skill_in_center` (used by card_play.rs).
pub fn place_skill_in_center_pub(state: &mut GameState, player_idx: usize, skill_id: &SkillId) {
    place_skill_in_center(state, player_idx, skill_id);
}

/// Place an interactive skill in the center (flip + push Round/OtherPlayers markers).
fn place_skill_in_center(state: &mut GameState, player_idx: usize, skill_id: &SkillId) {
    use realm_types::modifier::{ModifierDuration, ModifierEffect, ModifierScope, RuleOverride, TerrainOrAll};

    // Flip skill face-down
    let player = &mut state.players[player_idx];
    if !player.skill_flip_state.flipped_skills.contains(skill_id) {
        player.skill_flip_state.flipped_skills.push(skill_id.clone());
    }

    // Add center marker modifiers (Round duration, OtherPlayers scope)
    match skill_id.as_str() {
        "norowas_prayer_of_weather" => {
            push_skill_modifier(state, player_idx, skill_id,
                ModifierDuration::Round, ModifierScope::OtherPlayers,
                ModifierEffect::TerrainCost {
                    terrain: TerrainOrAll::All, amount: 0, minimum: 0, replace_cost: None,
                });
        }
        "arythea_ritual_of_pain" => {
            push_skill_modifier(state, player_idx, skill_id,
                ModifierDuration::Round, ModifierScope::OtherPlayers,
                ModifierEffect::RuleOverride { rule: RuleOverride::WoundsPlayableSideways });
            push_skill_modifier(state, player_idx, skill_id,
                ModifierDuration::Round, ModifierScope::OtherPlayers,
                ModifierEffect::SidewaysValue {
                    new_value: 3, for_wounds: true, condition: None,
                    mana_color: None, for_card_types: vec![],
                });
        }
        "braevalar_natures_vengeance" => {
            push_skill_modifier(state, player_idx, skill_id,
                ModifierDuration::Round, ModifierScope::OtherPlayers,
                ModifierEffect::NaturesVengeanceAttackBonus { amount: 1 });
        }
        "tovak_mana_overload" => {
            // No OtherPlayers modifier — center state is in state.mana_overload_center.
            // Auto-returns on trigger, not manually returnable.
        }
        "krang_mana_enhancement" => {
            // Dummy marker for returnable_skills detection
            push_skill_modifier(state, player_idx, skill_id,
                ModifierDuration::Round, ModifierScope::OtherPlayers,
                ModifierEffect::TerrainCost {
                    terrain: TerrainOrAll::All, amount: 0, minimum: 0, replace_cost: None,
                });
        }
        "goldyx_source_opening" => {
            // Dummy marker for returnable_skills detection
            push_skill_modifier(state, player_idx, skill_id,
                ModifierDuration::Round, ModifierScope::OtherPlayers,
                ModifierEffect::TerrainCost {
                    terrain: TerrainOrAll::All, amount: 0, minimum: 0, replace_cost: None,
                });
        }
        _ => {}
    }
}

/// Prayer of Weather: terrain cost -2 for owner, place in center.
fn apply_prayer_of_weather(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
) -> Result<ApplyResult, ApplyError> {
    use realm_types::modifier::{ModifierDuration, ModifierEffect, ModifierScope, TerrainOrAll};

    // Owner benefit: all terrain costs -2 (min 1) this turn
    push_skill_modifier(state, player_idx, skill_id,
        ModifierDuration::Turn, ModifierScope::SelfScope,
        ModifierEffect::TerrainCost {
            terrain: TerrainOrAll::All, amount: -2, minimum: 1, replace_cost: None,
        });

    place_skill_in_center(state, player_idx, skill_id);

    Ok(ApplyResult { needs_reenumeration: true, game_ended: false })
}

/// Ritual of Pain: optionally discard 0-2 wounds, place in center.
fn apply_ritual_of_pain(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
) -> Result<ApplyResult, ApplyError> {
    use realm_types::effect::CardEffect;
    use realm_types::pending::ChoiceResolution;

    let wound_count = state.players[player_idx].hand.iter()
        .filter(|c| c.as_str() == "wound")
        .count();

    if wound_count == 0 {
        // No wounds — skip straight to center placement
        place_skill_in_center(state, player_idx, skill_id);
    } else {
        // Build options: "Discard 0", "Discard 1", optionally "Discard 2"
        let max_wounds = wound_count.min(2);
        let mut options = Vec::new();
        for _i in 0..=max_wounds {
            options.push(CardEffect::Noop); // placeholder — choice_index IS the discard count
        }

        state.players[player_idx].pending.active = Some(ActivePending::Choice(
            realm_types::pending::PendingChoice {
                card_id: None,
                skill_id: Some(skill_id.clone()),
                unit_instance_id: None,
                options,
                continuation: vec![],
                movement_bonus_applied: false,
                resolution: ChoiceResolution::RitualOfPainDiscard { max_wounds },
            },
        ));
    }

    Ok(ApplyResult { needs_reenumeration: true, game_ended: false })
}

/// Execute Ritual of Pain discard resolution.
pub(crate) fn execute_ritual_of_pain_discard(
    state: &mut GameState,
    player_idx: usize,
    choice_index: usize,
    _max_wounds: usize,
) {
    let skill_id = SkillId::from("arythea_ritual_of_pain");

    // Discard `choice_index` wounds from hand
    let mut wounds_to_remove = choice_index;
    let player = &mut state.players[player_idx];
    player.hand.retain(|c| {
        if wounds_to_remove > 0 && c.as_str() == "wound" {
            wounds_to_remove -= 1;
            false
        } else {
            true
        }
    });

    place_skill_in_center(state, player_idx, &skill_id);
}

/// Nature's Vengeance: target an enemy for attack -1 + cumbersome.
fn apply_natures_vengeance(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
) -> Result<ApplyResult, ApplyError> {
    use realm_types::effect::CardEffect;
    use realm_types::pending::ChoiceResolution;

    let combat = state.combat.as_ref()
        .ok_or_else(|| ApplyError::InternalError("Nature's Vengeance: no combat".into()))?;

    let eligible: Vec<String> = combat.enemies.iter()
        .filter(|e| {
            !e.is_defeated && !e.is_summoner_hidden
            && realm_data::enemies::get_enemy(e.enemy_id.as_str()).map_or(false, |def| {
                !combat_resolution::has_ability(def, EnemyAbilityType::Summon)
                && !combat_resolution::has_ability(def, EnemyAbilityType::SummonGreen)
            })
        })
        .map(|e| e.instance_id.as_str().to_string())
        .collect();

    match eligible.len() {
        0 => {
            // Fizzle — don't place in center
        }
        1 => {
            apply_natures_vengeance_effects(state, player_idx, &eligible[0]);
            place_skill_in_center(state, player_idx, skill_id);
        }
        _ => {
            let mut options = Vec::new();
            for _ in &eligible {
                options.push(CardEffect::Noop); // placeholder
            }
            state.players[player_idx].pending.active = Some(ActivePending::Choice(
                realm_types::pending::PendingChoice {
                    card_id: None,
                    skill_id: Some(skill_id.clone()),
                    unit_instance_id: None,
                    options,
                    continuation: vec![],
                    movement_bonus_applied: false,
                    resolution: ChoiceResolution::NaturesVengeanceTarget {
                        eligible_enemy_ids: eligible,
                        is_return: false,
                    },
                },
            ));
        }
    }

    Ok(ApplyResult { needs_reenumeration: true, game_ended: false })
}

/// Apply Nature's Vengeance effects to a target enemy: Attack -1 + Cumbersome.
fn apply_natures_vengeance_effects(state: &mut GameState, player_idx: usize, enemy_instance_id: &str) {
    let skill_id = SkillId::from("braevalar_natures_vengeance");

    // Attack -1 modifier
    push_skill_modifier(state, player_idx, &skill_id,
        realm_types::modifier::ModifierDuration::Combat,
        realm_types::modifier::ModifierScope::OneEnemy { enemy_id: enemy_instance_id.to_string() },
        realm_types::modifier::ModifierEffect::EnemyStat {
            stat: realm_types::modifier::EnemyStat::Attack,
            amount: -1,
            minimum: 0,
            attack_index: None,
            per_resistance: false,
            fortified_amount: None,
            exclude_resistance: None,
        });

    // GrantEnemyAbility(Cumbersome) modifier
    push_skill_modifier(state, player_idx, &skill_id,
        realm_types::modifier::ModifierDuration::Combat,
        realm_types::modifier::ModifierScope::OneEnemy { enemy_id: enemy_instance_id.to_string() },
        realm_types::modifier::ModifierEffect::GrantEnemyAbility {
            ability: EnemyAbilityType::Cumbersome,
        });
}

/// Execute Nature's Vengeance target resolution (from choice).
pub(crate) fn execute_natures_vengeance_target(
    state: &mut GameState,
    player_idx: usize,
    eligible_enemy_ids: &[String],
    choice_index: usize,
    is_return: bool,
) {
    if let Some(enemy_id) = eligible_enemy_ids.get(choice_index) {
        apply_natures_vengeance_effects(state, player_idx, enemy_id);
        if !is_return {
            let skill_id = SkillId::from("braevalar_natures_vengeance");
            place_skill_in_center(state, player_idx, &skill_id);
        }
    }
}

/// Return an interactive skill from the center to its owner, giving the returner a benefit.
fn apply_return_interactive_skill(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
) -> Result<ApplyResult, ApplyError> {
    use realm_types::modifier::*;
    use realm_types::pending::ChoiceResolution;

    // Find owner by scanning modifiers
    let owner_id = state.active_modifiers.iter()
        .find_map(|m| {
            if let ModifierSource::Skill { skill_id: sid, player_id: owner } = &m.source {
                if sid.as_str() == skill_id.as_str()
                    && *owner != state.players[player_idx].id
                {
                    return Some(owner.clone());
                }
            }
            None
        })
        .ok_or_else(|| ApplyError::InternalError(
            format!("ReturnInteractiveSkill: no center modifier for {}", skill_id.as_str())
        ))?;

    // Remove ALL center modifiers matching this skill + owner
    let skill_str = skill_id.as_str().to_string();
    let owner_clone = owner_id.clone();
    state.active_modifiers.retain(|m| {
        !matches!(&m.source, ModifierSource::Skill { skill_id: sid, player_id: owner }
            if sid.as_str() == skill_str && *owner == owner_clone)
    });

    // Apply return benefit per skill
    match skill_id.as_str() {
        "norowas_prayer_of_weather" => {
            push_skill_modifier(state, player_idx, skill_id,
                ModifierDuration::Turn, ModifierScope::SelfScope,
                ModifierEffect::TerrainCost {
                    terrain: TerrainOrAll::All, amount: -1, minimum: 1, replace_cost: None,
                });
        }
        "arythea_ritual_of_pain" => {
            push_skill_modifier(state, player_idx, skill_id,
                ModifierDuration::Turn, ModifierScope::SelfScope,
                ModifierEffect::RuleOverride { rule: RuleOverride::WoundsPlayableSideways });
            push_skill_modifier(state, player_idx, skill_id,
                ModifierDuration::Turn, ModifierScope::SelfScope,
                ModifierEffect::SidewaysValue {
                    new_value: 3, for_wounds: true, condition: None,
                    mana_color: None, for_card_types: vec![],
                });
        }
        "braevalar_natures_vengeance" => {
            // Trigger enemy selection for returner
            let combat = state.combat.as_ref()
                .ok_or_else(|| ApplyError::InternalError("ReturnNaturesVengeance: no combat".into()))?;

            let eligible: Vec<String> = combat.enemies.iter()
                .filter(|e| {
                    !e.is_defeated && !e.is_summoner_hidden
                    && realm_data::enemies::get_enemy(e.enemy_id.as_str()).map_or(false, |def| {
                        !combat_resolution::has_ability(def, EnemyAbilityType::Summon)
                        && !combat_resolution::has_ability(def, EnemyAbilityType::SummonGreen)
                    })
                })
                .map(|e| e.instance_id.as_str().to_string())
                .collect();

            match eligible.len() {
                0 => {} // No eligible → benefit fizzles
                1 => {
                    apply_natures_vengeance_effects(state, player_idx, &eligible[0]);
                }
                _ => {
                    let mut options = Vec::new();
                    for _ in &eligible {
                        options.push(realm_types::effect::CardEffect::Noop);
                    }
                    state.players[player_idx].pending.active = Some(ActivePending::Choice(
                        realm_types::pending::PendingChoice {
                            card_id: None,
                            skill_id: Some(skill_id.clone()),
                            unit_instance_id: None,
                            options,
                            continuation: vec![],
                            movement_bonus_applied: false,
                            resolution: ChoiceResolution::NaturesVengeanceTarget {
                                eligible_enemy_ids: eligible,
                                is_return: true,
                            },
                        },
                    ));
                }
            }
        }
        "krang_mana_enhancement" => {
            // Grant returner 1 mana token of marked color
            if let Some(center) = state.mana_enhancement_center.take() {
                let mana_color = ManaColor::from(center.marked_color);
                state.players[player_idx].pure_mana.push(ManaToken {
                    color: mana_color,
                    source: ManaTokenSource::Effect,
                    cannot_power_spells: false,
                });
            }
        }
        "goldyx_source_opening" => {
            // Grant ExtraSourceDie modifier to returner
            push_skill_modifier(state, player_idx, skill_id,
                ModifierDuration::Turn, ModifierScope::SelfScope,
                ModifierEffect::RuleOverride { rule: RuleOverride::ExtraSourceDie });

            // Track returning player for end-of-turn crystal grant
            if let Some(ref mut center) = state.source_opening_center {
                center.returning_player_id = Some(state.players[player_idx].id.clone());
                center.used_die_count_at_return = state.players[player_idx].used_die_ids.len() as u32;
            }
        }
        _ => {}
    }

    Ok(ApplyResult { needs_reenumeration: true, game_ended: false })
}

// =============================================================================
// Batch 3 skills — Mana Overload, Source Opening, Master of Chaos
// =============================================================================

/// Initialize Master of Chaos wheel position when the skill is acquired.
fn init_master_of_chaos_if_needed(state: &mut GameState, player_idx: usize, skill_id: &SkillId) {
    if skill_id.as_str() == "krang_master_of_chaos" {
        let position = roll_master_of_chaos_initial_position(&mut state.rng);
        state.players[player_idx].master_of_chaos_state = Some(MasterOfChaosState {
            position,
            free_rotate_available: false,
        });
    }
}

fn roll_master_of_chaos_initial_position(rng: &mut realm_types::rng::RngState) -> ManaColor {
    const POSITIONS: [ManaColor; 6] = [
        ManaColor::Blue, ManaColor::Green, ManaColor::Black,
        ManaColor::White, ManaColor::Red, ManaColor::Gold,
    ];
    let idx = rng.random_index(POSITIONS.len()).unwrap();
    POSITIONS[idx]
}

const CLOCKWISE: [ManaColor; 6] = [
    ManaColor::Blue, ManaColor::Green, ManaColor::Black,
    ManaColor::White, ManaColor::Red, ManaColor::Gold,
];

fn rotate_clockwise(current: ManaColor) -> ManaColor {
    let idx = CLOCKWISE.iter().position(|&c| c == current).unwrap_or(0);
    CLOCKWISE[(idx + 1) % 6]
}

fn master_of_chaos_effect(position: ManaColor) -> realm_types::effect::CardEffect {
    use realm_types::effect::CardEffect;
    match position {
        ManaColor::Blue => CardEffect::GainBlock { amount: 3, element: Element::Physical },
        ManaColor::Green => CardEffect::GainMove { amount: 1 },
        ManaColor::Black => CardEffect::GainAttack { amount: 1, combat_type: CombatType::Ranged, element: Element::ColdFire },
        ManaColor::White => CardEffect::GainInfluence { amount: 2 },
        ManaColor::Red => CardEffect::GainAttack { amount: 2, combat_type: CombatType::Melee, element: Element::Physical },
        ManaColor::Gold => CardEffect::Choice {
            options: vec![
                CardEffect::GainBlock { amount: 3, element: Element::Physical },
                CardEffect::GainMove { amount: 1 },
                CardEffect::GainAttack { amount: 1, combat_type: CombatType::Ranged, element: Element::ColdFire },
                CardEffect::GainInfluence { amount: 2 },
                CardEffect::GainAttack { amount: 2, combat_type: CombatType::Melee, element: Element::Physical },
            ],
        },
    }
}

/// Mana Overload: choose non-Gold mana color → gain mana → center.
fn apply_mana_overload(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
) -> Result<ApplyResult, ApplyError> {
    use realm_types::effect::CardEffect;
    use realm_types::pending::ChoiceResolution;

    // Build 5 options: GainMana for each non-Gold color
    let options = vec![
        CardEffect::GainMana { color: ManaColor::Red, amount: 1 },
        CardEffect::GainMana { color: ManaColor::Blue, amount: 1 },
        CardEffect::GainMana { color: ManaColor::Green, amount: 1 },
        CardEffect::GainMana { color: ManaColor::White, amount: 1 },
        CardEffect::GainMana { color: ManaColor::Black, amount: 1 },
    ];

    state.players[player_idx].pending.active = Some(ActivePending::Choice(
        realm_types::pending::PendingChoice {
            card_id: None,
            skill_id: Some(skill_id.clone()),
            unit_instance_id: None,
            options,
            continuation: vec![],
            movement_bonus_applied: false,
            resolution: ChoiceResolution::ManaOverloadColorSelect,
        },
    ));

    Ok(ApplyResult { needs_reenumeration: true, game_ended: false })
}

/// Execute Mana Overload color selection.
pub(crate) fn execute_mana_overload_color_select(
    state: &mut GameState,
    player_idx: usize,
    choice_index: usize,
) {
    const COLORS: [ManaColor; 5] = [
        ManaColor::Red, ManaColor::Blue, ManaColor::Green,
        ManaColor::White, ManaColor::Black,
    ];
    let color = COLORS.get(choice_index).copied().unwrap_or(ManaColor::Red);
    let skill_id = SkillId::from("tovak_mana_overload");

    // Set center state
    state.mana_overload_center = Some(ManaOverloadCenter {
        marked_color: color,
        owner_id: state.players[player_idx].id.clone(),
        skill_id: skill_id.clone(),
    });

    place_skill_in_center(state, player_idx, &skill_id);
}

/// Source Opening: choose a die to reroll → center.
fn apply_source_opening(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
) -> Result<ApplyResult, ApplyError> {
    use realm_types::effect::CardEffect;
    use realm_types::pending::ChoiceResolution;

    // Find available dice
    let die_ids: Vec<SourceDieId> = state.source.dice.iter()
        .filter(|d| d.taken_by_player_id.is_none() && !d.is_depleted)
        .map(|d| d.id.clone())
        .collect();

    if die_ids.is_empty() {
        // No dice to reroll — skip straight to center placement
        state.source_opening_center = Some(SourceOpeningCenter {
            owner_id: state.players[player_idx].id.clone(),
            skill_id: skill_id.clone(),
            returning_player_id: None,
            used_die_count_at_return: 0,
        });
        place_skill_in_center(state, player_idx, skill_id);
    } else {
        // Build options: one per die + one "skip" (last index)
        let mut options = Vec::new();
        for _ in &die_ids {
            options.push(CardEffect::Noop);
        }
        options.push(CardEffect::Noop); // skip option

        state.players[player_idx].pending.active = Some(ActivePending::Choice(
            realm_types::pending::PendingChoice {
                card_id: None,
                skill_id: Some(skill_id.clone()),
                unit_instance_id: None,
                options,
                continuation: vec![],
                movement_bonus_applied: false,
                resolution: ChoiceResolution::SourceOpeningDieSelect { die_ids },
            },
        ));
    }

    Ok(ApplyResult { needs_reenumeration: true, game_ended: false })
}

/// Execute Source Opening die selection.
pub(crate) fn execute_source_opening_die_select(
    state: &mut GameState,
    player_idx: usize,
    die_ids: &[SourceDieId],
    choice_index: usize,
) {
    let skill_id = SkillId::from("goldyx_source_opening");

    if choice_index < die_ids.len() {
        // Reroll the chosen die
        crate::mana::reroll_die(&mut state.source, &die_ids[choice_index], state.time_of_day, &mut state.rng);
    }
    // else: skip (no reroll)

    // Set center state
    state.source_opening_center = Some(SourceOpeningCenter {
        owner_id: state.players[player_idx].id.clone(),
        skill_id: skill_id.clone(),
        returning_player_id: None,
        used_die_count_at_return: 0,
    });
    place_skill_in_center(state, player_idx, &skill_id);
}

/// Master of Chaos: rotate wheel 1 step, apply effect.
fn apply_master_of_chaos(
    state: &mut GameState,
    player_idx: usize,
    skill_id: &SkillId,
) -> Result<ApplyResult, ApplyError> {
    use realm_types::pending::ChoiceResolution;

    let current_pos = state.players[player_idx].master_of_chaos_state
        .as_ref()
        .map(|s| s.position)
        .unwrap_or(ManaColor::Blue);

    let new_pos = rotate_clockwise(current_pos);

    state.players[player_idx].master_of_chaos_state = Some(MasterOfChaosState {
        position: new_pos,
        free_rotate_available: false,
    });

    let effect = master_of_chaos_effect(new_pos);

    // Resolve via effect queue
    let mut queue = effect_queue::EffectQueue::new();
    queue.push(effect, None);
    match queue.drain(state, player_idx) {
        effect_queue::DrainResult::Complete => Ok(ApplyResult { needs_reenumeration: true, game_ended: false }),
        effect_queue::DrainResult::NeedsChoice { options, continuation, resolution: _ } => {
            // Gold position → choice
            state.players[player_idx].pending.active = Some(ActivePending::Choice(
                realm_types::pending::PendingChoice {
                    card_id: None,
                    skill_id: Some(skill_id.clone()),
                    unit_instance_id: None,
                    options,
                    continuation: continuation.into_iter().map(|q| realm_types::pending::ContinuationEntry {
                        effect: q.effect,
                        source_card_id: q.source_card_id,
                    }).collect(),
                    movement_bonus_applied: false,
                    resolution: ChoiceResolution::MasterOfChaosGoldChoice,
                },
            ));
            Ok(ApplyResult { needs_reenumeration: true, game_ended: false })
        }
        effect_queue::DrainResult::PendingSet => Ok(ApplyResult { needs_reenumeration: true, game_ended: false }),
    }
}

/// Resolve Source Opening reroll choice at end-of-turn.
pub(crate) fn apply_resolve_source_opening_reroll(
    state: &mut GameState,
    player_idx: usize,
    reroll: bool,
) -> Result<ApplyResult, ApplyError> {
    let pending = state.players[player_idx].pending.active.take();
    let die_id = match pending {
        Some(ActivePending::SourceOpeningReroll { die_id }) => die_id,
        other => {
            state.players[player_idx].pending.active = other;
            return Err(ApplyError::InternalError("No SourceOpeningReroll pending".into()));
        }
    };

    if reroll {
        crate::mana::reroll_die(&mut state.source, &die_id, state.time_of_day, &mut state.rng);
    }

    // Resume end-turn flow
    match crate::end_turn::end_turn(state, player_idx) {
        Ok(_) => Ok(ApplyResult { needs_reenumeration: true, game_ended: false }),
        Err(e) => Err(ApplyError::InternalError(format!("end_turn after source opening reroll: {:?}", e))),
    }
}

// =============================================================================
// Tests
// =============================================================================
