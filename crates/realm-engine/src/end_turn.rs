//! End turn and round management.

use arrayvec::ArrayVec;
use realm_data::levels::{get_level_from_fame, get_level_stats, is_skill_level_up};
use realm_data::tactics::get_tactics_for_time;
use realm_types::enums::*;
use realm_types::ids::*;
use realm_types::modifier::ModifierEffect;
use realm_types::pending::{
    ActivePending, DeferredPending, PendingCrystalJoyReclaim, PendingLevelUpReward,
    PendingSteadyTempoDeckPlacement, MAX_DEEP_MINE_COLORS, MAX_DRAWN_SKILLS,
};
use realm_types::state::*;

use crate::mana;
use crate::mana::return_player_dice;
use crate::setup::create_mana_source;

// =============================================================================
// End turn result
// =============================================================================

/// Result of ending a turn.
#[derive(Debug)]
pub enum EndTurnResult {
    /// Turn ended, next player's turn.
    NextPlayer { next_player_idx: usize },
    /// Turn ended, round ended, new round starting (tactics selection).
    RoundEnded { new_round: u32 },
    /// Turn ended, game is over.
    GameEnded,
    /// Level-up rewards pending — player must resolve before card draw + turn advance.
    AwaitingLevelUpRewards,
    /// End-turn artifact choice pending (Crystal Joy, Steady Tempo, Banner Protection).
    AwaitingEndTurnChoice,
}

/// Errors from end turn.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EndTurnError {
    /// Player hasn't played or discarded any card this turn (minimum turn requirement).
    #[error("minimum turn requirement not met: play or discard a card, or rest")]
    MinimumTurnRequirementNotMet,
    /// Invalid player index.
    #[error("invalid player index")]
    InvalidPlayerIndex,
}

// =============================================================================
// End turn — main entry point
// =============================================================================

/// End the current player's turn.
///
/// Re-entrant: uses `end_turn_step` on the player to track progress through
/// end-turn phases. When an artifact step creates a pending choice, we return
/// `AwaitingEndTurnChoice` and the handler re-calls this function after
/// resolving. Completed steps are skipped on re-entry.
///
/// Steps:
///   0 — Minimum turn requirement (only on first entry)
///   1 — Magical Glade wound + Mine/Deep Mine
///   2 — Crystal Joy reclaim (may create pending)
///   3 — Steady Tempo deck placement (may create pending)
///   4 — Banner of Protection wound removal (may create pending)
///   5+ — Automated: Mysterious Box, Crystal Mastery, Ring fame, level-ups,
///         Mountain Lore, card flow, reset, advance
pub fn end_turn(state: &mut GameState, player_idx: usize) -> Result<EndTurnResult, EndTurnError> {
    if player_idx >= state.players.len() {
        return Err(EndTurnError::InvalidPlayerIndex);
    }

    let step = state.players[player_idx].end_turn_step;

    // Step 0: Minimum turn requirement (only on first entry)
    if step == 0 {
        let player = &state.players[player_idx];
        if !player
            .flags
            .contains(PlayerFlags::PLAYED_CARD_FROM_HAND_THIS_TURN)
            && !player.flags.contains(PlayerFlags::HAS_RESTED_THIS_TURN)
        {
            return Err(EndTurnError::MinimumTurnRequirementNotMet);
        }
    }

    // Step 1: Magical Glade wound + Mine/Deep Mine
    if step < 1 {
        apply_magical_glade_wound(state, player_idx);
        apply_mine_crystal(state, player_idx);
        if apply_deep_mine_choice(state, player_idx) {
            // Deep mine pending — blocks enumeration until resolved
        }
        state.players[player_idx].end_turn_step = 1;
    }

    // Step 2: Crystal Joy reclaim
    if step < 2 {
        if check_crystal_joy_reclaim(state, player_idx) {
            state.players[player_idx].end_turn_step = 2;
            return Ok(EndTurnResult::AwaitingEndTurnChoice);
        }
        state.players[player_idx].end_turn_step = 2;
    }

    // Step 3: Steady Tempo deck placement
    if step < 3 {
        if check_steady_tempo_placement(state, player_idx) {
            state.players[player_idx].end_turn_step = 3;
            return Ok(EndTurnResult::AwaitingEndTurnChoice);
        }
        state.players[player_idx].end_turn_step = 3;
    }

    // Step 4: Banner of Protection wound removal
    if step < 4 {
        if apply_banner_protection_choice(state, player_idx) {
            state.players[player_idx].end_turn_step = 4;
            return Ok(EndTurnResult::AwaitingEndTurnChoice);
        }
        state.players[player_idx].end_turn_step = 4;
    }

    // Step 5+: All automated (no pending)
    apply_mysterious_box_cleanup(state, player_idx);
    apply_crystal_mastery_return(state, player_idx);
    apply_ring_fame_bonus(state, player_idx);

    // Level-ups
    process_level_ups(state, player_idx);
    if promote_level_up_reward(state, player_idx) {
        reset_player_turn(&mut state.players[player_idx]);
        cleanup_end_turn_mana(state, player_idx);
        return Ok(EndTurnResult::AwaitingLevelUpRewards);
    }

    // Mountain Lore hand limit bonus (before card draw)
    apply_mountain_lore_bonus(state, player_idx);

    // Card flow: play area → discard, draw up to hand limit
    process_card_flow(state, player_idx);

    // Reset player turn state
    reset_player_turn(&mut state.players[player_idx]);

    // Mana/dice/modifier cleanup
    cleanup_end_turn_mana(state, player_idx);

    // Determine next player or round end
    let result = advance_turn(state, player_idx);

    Ok(result)
}

// =============================================================================
// Artifact end-turn steps
// =============================================================================

/// Crystal Joy reclaim: offer to reclaim a card from discard to hand.
/// Returns true if a pending choice was created.
fn check_crystal_joy_reclaim(state: &mut GameState, player_idx: usize) -> bool {
    let version = match state.players[player_idx].crystal_joy_reclaim_version.take() {
        Some(v) => v,
        None => return false,
    };
    state.players[player_idx].pending.active =
        Some(ActivePending::CrystalJoyReclaim(PendingCrystalJoyReclaim { version }));
    true
}

/// Steady Tempo deck placement: offer to place the card on deck.
/// Returns true if a pending choice was created.
fn check_steady_tempo_placement(state: &mut GameState, player_idx: usize) -> bool {
    let version = match state.players[player_idx].steady_tempo_version.take() {
        Some(v) => v,
        None => return false,
    };
    state.players[player_idx].pending.active = Some(
        ActivePending::SteadyTempoDeckPlacement(PendingSteadyTempoDeckPlacement { version }),
    );
    true
}

/// Banner of Protection: offer to remove wounds received this turn.
/// Returns true if a pending choice was created.
fn apply_banner_protection_choice(state: &mut GameState, player_idx: usize) -> bool {
    if !state.players[player_idx]
        .flags
        .contains(PlayerFlags::BANNER_OF_PROTECTION_ACTIVE)
    {
        return false;
    }
    let wounds = state.players[player_idx].wounds_received_this_turn;
    if wounds.hand == 0 && wounds.discard == 0 {
        return false;
    }
    state.players[player_idx].pending.active = Some(ActivePending::BannerProtectionChoice);
    true
}

/// Mysterious Box cleanup: return revealed artifact to deck, handle card fate.
fn apply_mysterious_box_cleanup(state: &mut GameState, player_idx: usize) {
    let box_state = match state.players[player_idx].mysterious_box_state.take() {
        Some(bs) => bs,
        None => return,
    };

    // Return revealed artifact to bottom of artifact deck
    state
        .decks
        .artifact_deck
        .push(box_state.revealed_artifact_id);

    // Remove any temporary banner attachment for mysterious_box
    state.players[player_idx]
        .attached_banners
        .retain(|b| b.banner_id.as_str() != "mysterious_box");

    let player = &mut state.players[player_idx];
    match box_state.used_as {
        MysteriousBoxUsage::Unused => {
            // Return mysterious_box from play_area to hand
            if let Some(idx) = player
                .play_area
                .iter()
                .position(|c| c.as_str() == "mysterious_box")
            {
                player.play_area.remove(idx);
                player.hand.push(CardId::from("mysterious_box"));
            }
        }
        MysteriousBoxUsage::Powered => {
            // Remove mysterious_box from play_area to removed_cards
            if let Some(idx) = player
                .play_area
                .iter()
                .position(|c| c.as_str() == "mysterious_box")
            {
                player.play_area.remove(idx);
                player.removed_cards.push(CardId::from("mysterious_box"));
            }
        }
        MysteriousBoxUsage::Banner => {
            // Move mysterious_box from play_area to discard
            if let Some(idx) = player
                .play_area
                .iter()
                .position(|c| c.as_str() == "mysterious_box")
            {
                player.play_area.remove(idx);
                player.discard.push(CardId::from("mysterious_box"));
            }
        }
        MysteriousBoxUsage::Basic => {
            // Basic: stays in play_area, normal card flow moves it to discard
        }
    }
}

/// Crystal Mastery return: return spent crystals if powered was active.
fn apply_crystal_mastery_return(state: &mut GameState, player_idx: usize) {
    let player = &mut state.players[player_idx];
    if !player
        .flags
        .contains(PlayerFlags::CRYSTAL_MASTERY_POWERED_ACTIVE)
    {
        return;
    }
    let spent = player.spent_crystals_this_turn;
    player.crystals.red = (player.crystals.red + spent.red).min(mana::MAX_CRYSTALS_PER_COLOR);
    player.crystals.blue = (player.crystals.blue + spent.blue).min(mana::MAX_CRYSTALS_PER_COLOR);
    player.crystals.green =
        (player.crystals.green + spent.green).min(mana::MAX_CRYSTALS_PER_COLOR);
    player.crystals.white =
        (player.crystals.white + spent.white).min(mana::MAX_CRYSTALS_PER_COLOR);
}

/// Ring artifact fame bonus: +1 fame per spell cast of the ring's color.
fn apply_ring_fame_bonus(state: &mut GameState, player_idx: usize) {
    let player_id = state.players[player_idx].id.clone();
    let mut total_fame: u32 = 0;

    for m in &state.active_modifiers {
        if m.created_by_player_id != player_id {
            continue;
        }
        if !matches!(m.duration, realm_types::modifier::ModifierDuration::Turn) {
            continue;
        }
        if let ModifierEffect::EndlessMana { ref colors } = m.effect {
            // Find the ring's color (first non-Black color)
            let ring_color = colors.iter().find(|c| **c != ManaColor::Black);
            if let Some(color) = ring_color {
                let spell_count = state.players[player_idx]
                    .spells_cast_by_color_this_turn
                    .get(color)
                    .copied()
                    .unwrap_or(0);
                total_fame += spell_count;
            }
        }
    }

    if total_fame > 0 {
        state.players[player_idx].fame += total_fame;
    }
}

/// Mountain Lore hand limit bonus: +1 on hills, +2 on mountains.
fn apply_mountain_lore_bonus(state: &mut GameState, player_idx: usize) {
    let terrain = player_hex(state, player_idx).map(|h| h.terrain);
    let terrain = match terrain {
        Some(t) => t,
        None => return,
    };

    let player_id = state.players[player_idx].id.clone();
    let mut bonus: u32 = 0;

    for m in &state.active_modifiers {
        if m.created_by_player_id != player_id {
            continue;
        }
        if let ModifierEffect::MountainLoreHandLimit {
            hills_bonus,
            mountain_bonus,
        } = m.effect
        {
            match terrain {
                Terrain::Mountain => bonus += mountain_bonus,
                Terrain::Hills => bonus += hills_bonus,
                _ => {}
            }
        }
    }

    if bonus > 0 {
        state.players[player_idx].meditation_hand_limit_bonus += bonus;
    }
}

// =============================================================================
// Level-up processing
// =============================================================================

/// Public wrapper for process_level_ups (used by movement.rs on explore fame).
pub fn process_level_ups_pub(state: &mut GameState, player_idx: usize) {
    process_level_ups(state, player_idx);
}

/// Public wrapper for process_card_flow (used by action_pipeline after level-up rewards).
pub fn process_card_flow_pub(state: &mut GameState, player_idx: usize) {
    process_card_flow(state, player_idx);
}

/// Public wrapper for advance_turn (used by action_pipeline after level-up rewards).
pub fn advance_turn_pub(state: &mut GameState, player_idx: usize) -> EndTurnResult {
    advance_turn(state, player_idx)
}

/// Process any level-ups earned by the player based on current fame.
///
/// Updates level, armor, hand_limit, and command_tokens from the level stats table.
/// For even levels (2, 4, 6, 8, 10), draws hero skills and queues level-up rewards
/// as deferred pending entries.
fn process_level_ups(state: &mut GameState, player_idx: usize) {
    let old_level = state.players[player_idx].level;
    let new_level = get_level_from_fame(state.players[player_idx].fame);

    if new_level <= old_level {
        return;
    }

    // Use the final level's stats
    let stats = get_level_stats(new_level);
    let player = &mut state.players[player_idx];
    player.level = new_level;
    player.armor = stats.armor;
    player.hand_limit = stats.hand_limit;
    player.command_tokens = stats.command_slots;

    // Queue skill choices for each even level crossed
    let mut rewards: Vec<PendingLevelUpReward> = Vec::new();
    for level in (old_level + 1)..=new_level {
        if is_skill_level_up(level) {
            // Shuffle remaining_hero_skills, draw min(2, len)
            let player = &mut state.players[player_idx];
            state.rng.shuffle(&mut player.remaining_hero_skills);
            let draw_count = player.remaining_hero_skills.len().min(MAX_DRAWN_SKILLS);
            let mut drawn: ArrayVec<SkillId, MAX_DRAWN_SKILLS> = ArrayVec::new();
            for _ in 0..draw_count {
                drawn.push(player.remaining_hero_skills.pop().unwrap());
            }
            rewards.push(PendingLevelUpReward {
                level: level as u8,
                drawn_skills: drawn,
            });
        }
    }

    // Add as deferred pending — promoted to active when end_turn flow processes them
    if !rewards.is_empty() {
        state.players[player_idx]
            .pending
            .deferred
            .push(DeferredPending::LevelUpRewards(rewards));
    }
}

/// Promote the first deferred level-up reward to active pending.
/// Returns true if a reward was promoted (caller should defer card draw).
fn promote_level_up_reward(state: &mut GameState, player_idx: usize) -> bool {
    let player = &mut state.players[player_idx];

    // Find the LevelUpRewards entry in deferred
    let deferred_idx = player
        .pending
        .deferred
        .iter()
        .position(|d| matches!(d, DeferredPending::LevelUpRewards(_)));

    let Some(idx) = deferred_idx else {
        return false;
    };

    // Extract the rewards vec
    let DeferredPending::LevelUpRewards(ref mut rewards) =
        player.pending.deferred[idx]
    else {
        return false;
    };

    if rewards.is_empty() {
        player.pending.deferred.remove(idx);
        return false;
    }

    // Pop the first reward and set as active pending
    let reward = rewards.remove(0);
    if rewards.is_empty() {
        player.pending.deferred.remove(idx);
    }

    player.pending.active = Some(ActivePending::LevelUpReward(reward));
    true
}

/// Public wrapper for promote_level_up_reward (used by action_pipeline after final reward).
pub fn promote_level_up_reward_pub(state: &mut GameState, player_idx: usize) -> bool {
    promote_level_up_reward(state, player_idx)
}

/// Mana steal cleanup, return dice, and expire turn-duration modifiers.
/// Extracted to avoid duplication between normal end-turn and level-up-reward path.
fn cleanup_end_turn_mana(state: &mut GameState, player_idx: usize) {
    // Mana Steal cleanup — return stolen die
    if let Some(stolen_die) = state.players[player_idx]
        .tactic_state
        .stored_mana_die
        .take()
    {
        mana::reroll_die(
            &mut state.source,
            &stolen_die.die_id,
            state.time_of_day,
            &mut state.rng,
        );
    }

    // Return mana dice
    return_player_dice(state, player_idx);

    // Expire turn-duration modifiers
    let player_id = state.players[player_idx].id.clone();
    crate::action_pipeline::expire_modifiers_turn_end(&mut state.active_modifiers, &player_id);
}

// =============================================================================
// Card flow
// =============================================================================

/// Move play area to discard, draw up to hand limit.
///
/// No mid-round reshuffle — stops drawing if deck empties.
fn process_card_flow(state: &mut GameState, player_idx: usize) {
    let player = &mut state.players[player_idx];

    // Move play area → discard
    player.discard.append(&mut player.play_area);

    // Draw up to hand limit (base hand_limit from level stats)
    // Planning tactic: +1 hand limit when drawing up (if hand has ≥2 cards)
    let planning_bonus = if player.selected_tactic.as_ref().map(|t| t.as_str()) == Some("planning")
        && player.hand.len() >= 2
    {
        1
    } else {
        0
    };
    // TODO: Keep bonus (adjacent to owned keep)
    let draw_limit =
        (player.hand_limit as usize) + planning_bonus + (player.meditation_hand_limit_bonus as usize);

    while player.hand.len() < draw_limit {
        if player.deck.is_empty() {
            break; // No mid-round reshuffle
        }
        let card = player.deck.remove(0);
        player.hand.push(card);
    }
}

// =============================================================================
// Player turn reset
// =============================================================================

/// Reset all turn-specific state on a player.
///
/// Fields that persist across turns (fame, level, crystals, skills, units, etc.)
/// are left unchanged.
fn reset_player_turn(player: &mut PlayerState) {
    player.move_points = 0;
    player.influence_points = 0;
    player.healing_points = 0;

    // Clear all turn flags (preserve non-turn flags)
    player.flags.remove(PlayerFlags::HAS_MOVED_THIS_TURN);
    player.flags.remove(PlayerFlags::HAS_TAKEN_ACTION_THIS_TURN);
    player.flags.remove(PlayerFlags::HAS_COMBATTED_THIS_TURN);
    player
        .flags
        .remove(PlayerFlags::PLAYED_CARD_FROM_HAND_THIS_TURN);
    player.flags.remove(PlayerFlags::HAS_PLUNDERED_THIS_TURN);
    player
        .flags
        .remove(PlayerFlags::HAS_RECRUITED_UNIT_THIS_TURN);
    player.flags.remove(PlayerFlags::IS_RESTING);
    player.flags.remove(PlayerFlags::HAS_RESTED_THIS_TURN);
    player.flags.remove(PlayerFlags::WOUND_IMMUNITY_ACTIVE);
    player
        .flags
        .remove(PlayerFlags::BANNER_OF_PROTECTION_ACTIVE);
    player
        .flags
        .remove(PlayerFlags::CRYSTAL_MASTERY_POWERED_ACTIVE);

    // Clear mana state (crystals persist, tokens don't)
    player.pure_mana.clear();
    player.used_die_ids.clear();
    player.mana_draw_die_ids.clear();
    player.mana_used_this_turn.clear();

    // Clear combat accumulator
    player.combat_accumulator = CombatAccumulator::default();

    // Clear turn tracking
    player.enemies_defeated_this_turn = 0;
    player.wounds_healed_from_hand_this_turn = 0;
    player.units_healed_this_turn.clear();
    player.units_recruited_this_interaction.clear();
    player.spell_colors_cast_this_turn.clear();
    player.spells_cast_by_color_this_turn.clear();
    player.meditation_hand_limit_bonus = 0;
    player.wounds_received_this_turn = WoundsReceived::default();
    player.spent_crystals_this_turn = Crystals::default();

    // Clear tactic per-turn state (but preserve stored_mana_die across turns)
    player.tactic_state.mana_steal_used_this_turn = false;
    player.tactic_state.mana_search_used_this_turn = false;

    // Clear skill cooldowns (active_until_next_turn expires)
    player.skill_cooldowns.active_until_next_turn.clear();
    player.skill_cooldowns.used_this_turn.clear();

    // TODO: pendingSourceOpeningRerollChoice, pendingMeditation
    player.mysterious_box_state = None;
    player.end_turn_step = 0;
    player.crystal_joy_reclaim_version = None;
    player.steady_tempo_version = None;
}

// =============================================================================
// Turn advancement
// =============================================================================

/// Determine next player or trigger round end.
fn advance_turn(state: &mut GameState, current_player_idx: usize) -> EndTurnResult {
    // Check if round should end
    let should_end_round = check_round_end(state, current_player_idx);

    if should_end_round {
        end_round(state);
        if state.game_ended {
            return EndTurnResult::GameEnded;
        }
        return EndTurnResult::RoundEnded {
            new_round: state.round,
        };
    }

    // Final turns countdown (scenario end was triggered, e.g. city revealed)
    if state.scenario_end_triggered {
        if let Some(ref mut remaining) = state.final_turns_remaining {
            *remaining = remaining.saturating_sub(1);
            if *remaining == 0 {
                finalize_game_end(state);
                return EndTurnResult::GameEnded;
            }
        }
    }

    // Extra turn check (The Right Moment tactic)
    if state.players[current_player_idx].tactic_state.extra_turn_pending {
        state.players[current_player_idx].tactic_state.extra_turn_pending = false;
        return EndTurnResult::NextPlayer {
            next_player_idx: current_player_idx,
        };
    }

    // Advance through turn_order, auto-executing dummy player turns
    let turn_order_len = state.turn_order.len();
    let mut next_turn_idx = (state.current_player_index as usize + 1) % turn_order_len;

    // Auto-execute dummy player turns (skip over them)
    while crate::dummy_player::is_dummy_player(state.turn_order[next_turn_idx].as_str()) {
        if let Some(ref mut dummy) = state.dummy_player {
            if crate::dummy_player::execute_dummy_turn(dummy).is_none() {
                // Dummy deck exhausted → announce end of round
                state.end_of_round_announced_by =
                    Some(PlayerId::from(crate::dummy_player::DUMMY_PLAYER_ID));
                state.players_with_final_turn =
                    state.players.iter().map(|p| p.id.clone()).collect();
            }
        }
        next_turn_idx = (next_turn_idx + 1) % turn_order_len;
    }

    state.current_player_index = next_turn_idx as u32;

    // Find the player index in state.players for this turn_order entry
    let next_player_id = &state.turn_order[next_turn_idx];
    let next_player_idx = state
        .players
        .iter()
        .position(|p| &p.id == next_player_id)
        .expect("Turn order entry not found in players");

    // Expire UntilNextTurn modifiers for the next player (at their turn start)
    {
        let player_id = state.players[next_player_idx].id.clone();
        crate::action_pipeline::expire_modifiers_turn_start(
            &mut state.active_modifiers,
            &player_id,
        );
    }

    // Setup next player: Magical Glade mana
    apply_magical_glade_mana(state, next_player_idx);

    // Setup next player: Plunder decision at unconquered inhabited sites
    apply_plunder_decision(state, next_player_idx);

    // Sparing Power before-turn setup: if next player has sparing_power and hasn't flipped
    {
        let next_player = &state.players[next_player_idx];
        if next_player.selected_tactic.as_ref().map(|t| t.as_str()) == Some("sparing_power")
            && !next_player.flags.contains(PlayerFlags::TACTIC_FLIPPED)
        {
            let player = &mut state.players[next_player_idx];
            player.flags.insert(PlayerFlags::BEFORE_TURN_TACTIC_PENDING);
            player.pending.active = Some(realm_types::pending::ActivePending::TacticDecision(
                realm_types::pending::PendingTacticDecision::SparingPower,
            ));
        }
    }

    EndTurnResult::NextPlayer {
        next_player_idx,
    }
}

/// Check if the round should end after this player's turn.
///
/// In solo mode: round ends when the player's hand AND deck are both empty,
/// or when end_of_round_announced_by is set and all final turns are done.
fn check_round_end(state: &mut GameState, current_player_idx: usize) -> bool {
    let player = &state.players[current_player_idx];

    // Auto-announce if hand and deck are both empty
    if player.hand.is_empty() && player.deck.is_empty() && state.end_of_round_announced_by.is_none()
    {
        state.end_of_round_announced_by = Some(player.id.clone());
        // In solo, all players get final turns — but solo only has 1 player,
        // so the round ends immediately.
        // In multiplayer: other players get their final turns.
    }

    // If announced, check if all final turns are done
    if state.end_of_round_announced_by.is_some() {
        // In solo mode, the round ends immediately after announcement
        if state.players.len() == 1 {
            return true;
        }
        // In multiplayer: check if playersWithFinalTurn is empty
        // Remove current player from final turn list
        let player_id = state.players[current_player_idx].id.clone();
        state.players_with_final_turn.retain(|id| *id != player_id);
        if state.players_with_final_turn.is_empty() {
            return true;
        }
    }

    false
}

// =============================================================================
// Game end finalization
// =============================================================================

/// Finalize game end: set game_ended, phase, winning_player_id, final_score_result.
///
/// Uses the full scoring system (achievements, modules) from the scenario config.
fn finalize_game_end(state: &mut GameState) {
    state.game_ended = true;
    state.phase = GamePhase::End;
    state.final_turns_remaining = Some(0);

    // Calculate full scoring result
    let result = crate::scoring::calculate_final_scores(state);

    // Determine winning player from rankings
    state.winning_player_id = if result.is_tied {
        None
    } else {
        result
            .rankings
            .first()
            .map(|id| PlayerId::from(id.as_str()))
    };

    state.final_score_result = Some(result);
}

// =============================================================================
// End round
// =============================================================================

/// Process end of round: day/night toggle, mana reset, deck reshuffle, new tactics.
///
fn end_round(state: &mut GameState) {
    let reached_round_limit = state.round >= state.scenario_config.total_rounds;

    // Rulebook: "If the Round ends during [final turns], the game ends immediately."
    let should_end_from_final_turns = state.scenario_end_triggered
        && state.final_turns_remaining.is_some_and(|r| r > 0);

    if reached_round_limit || should_end_from_final_turns {
        finalize_game_end(state);
        return;
    }

    // 0. Capture used tactics before player reset clears them
    let mut used_tactics_this_round = Vec::new();
    if let Some(ref t) = state.dummy_player_tactic {
        used_tactics_this_round.push(t.clone());
    }
    for p in &state.players {
        if let Some(ref t) = p.selected_tactic {
            used_tactics_this_round.push(t.clone());
        }
    }

    // 1. Toggle day/night
    state.time_of_day = match state.time_of_day {
        TimeOfDay::Day => TimeOfDay::Night,
        TimeOfDay::Night => TimeOfDay::Day,
    };

    // TODO: Dawn effect — reveal face-down ruins tokens when Night → Day

    // 2. Reset mana source (reroll all dice for new time of day)
    let player_count = state.players.len() as u32;
    state.source = create_mana_source(player_count, state.time_of_day, &mut state.rng);

    // 3. Dummy offer gains (solo mode — before offer refresh)
    if let Some(ref mut dummy) = state.dummy_player {
        crate::dummy_player::process_dummy_offer_gains(
            dummy,
            &mut state.offers.advanced_actions,
            &state.offers.spells,
        );
    }

    // 4. Offer refresh
    realm_data::offers::refresh_offer(
        &mut state.offers.advanced_actions,
        &mut state.decks.advanced_action_deck,
    );
    realm_data::offers::refresh_offer(
        &mut state.offers.spells,
        &mut state.decks.spell_deck,
    );
    // Unit offer: clear and redraw (player_count + 2)
    let unit_offer_size = state.players.len() + 2;
    realm_data::unit_offers::refresh_unit_offer(
        &mut state.offers.units,
        &mut state.decks.unit_deck,
        unit_offer_size,
    );

    // 5. Player round reset (reshuffle + draw)
    for player_idx in 0..state.players.len() {
        reset_player_round(state, player_idx);
    }

    // 5a. Dummy player reset for new round
    if let Some(ref mut dummy) = state.dummy_player {
        crate::dummy_player::reset_dummy_for_new_round(dummy, &mut state.rng);
    }

    // 6. Increment round
    state.round += 1;

    // 7. Clear round-end state
    state.end_of_round_announced_by = None;
    state.players_with_final_turn.clear();

    // 8. Set up tactics selection for new round
    let new_time = state.time_of_day;
    let tactic_ids = get_tactics_for_time(new_time);
    state.available_tactics = tactic_ids.iter().map(|&s| TacticId::from(s)).collect();

    // 8a. Remove used tactics based on scenario config
    match state.scenario_config.tactic_removal_mode {
        TacticRemovalMode::AllUsed => {
            state.removed_tactics.extend(used_tactics_this_round);
            state
                .available_tactics
                .retain(|t| !state.removed_tactics.contains(t));
        }
        TacticRemovalMode::None | TacticRemovalMode::VoteOne => {
            // None: tactics recycled each round
            // VoteOne: cooperative mode, not yet implemented
        }
    }
    state.dummy_player_tactic = None;

    state.round_phase = RoundPhase::TacticsSelection;
    // Tactic selection order: humans only (dummy auto-selects in apply_select_tactic)
    state.tactics_selection_order = state
        .turn_order
        .iter()
        .filter(|pid| !crate::dummy_player::is_dummy_player(pid.as_str()))
        .cloned()
        .collect();
    state.current_tactic_selector = state.tactics_selection_order.first().cloned();

    // Expire round-duration modifiers
    crate::action_pipeline::expire_modifiers_round_end(&mut state.active_modifiers);
}

/// Reset a single player for a new round: reshuffle all cards, draw up to hand limit.
///
fn reset_player_round(state: &mut GameState, player_idx: usize) {
    let player = &mut state.players[player_idx];

    // Collect all cards: hand + discard + play_area + deck (minus removedCards)
    let mut all_cards: Vec<CardId> = Vec::new();
    all_cards.append(&mut player.hand);
    all_cards.append(&mut player.discard);
    all_cards.append(&mut player.play_area);
    all_cards.append(&mut player.deck);
    all_cards.append(&mut player.time_bending_set_aside_cards);

    // Shuffle all cards
    state.rng.shuffle(&mut all_cards);

    // Draw up to effective hand limit
    let hand_limit = player.hand_limit as usize;
    let hand_size = hand_limit.min(all_cards.len());

    player.hand = all_cards.drain(..hand_size).collect();
    player.deck = all_cards; // remaining cards go to deck
    player.discard.clear();
    player.play_area.clear();

    // Ready all units
    for unit in player.units.iter_mut() {
        unit.state = UnitState::Ready;
        // Note: wounded units stay wounded but become ready
    }

    // Reset round-specific state
    player.selected_tactic = None;
    player.flags.remove(PlayerFlags::TACTIC_FLIPPED);
    player.flags.remove(PlayerFlags::BEFORE_TURN_TACTIC_PENDING);
    player.flags.remove(PlayerFlags::ROUND_ORDER_TOKEN_FLIPPED);
    player.flags.remove(PlayerFlags::IS_TIME_BENT_TURN);
    player.tactic_state = TacticState::default();

    // Reset skill cooldowns
    player.skill_cooldowns.used_this_round.clear();
    player.skill_cooldowns.used_this_turn.clear();
    player.skill_cooldowns.used_this_combat.clear();
    player.skill_cooldowns.active_until_next_turn.clear();

    // Reset skill flip state
    player.skill_flip_state.flipped_skills.clear();

    // Reset banner usage
    for banner in player.attached_banners.iter_mut() {
        banner.is_used_this_round = false;
    }

    // TODO: Set pendingUnitMaintenance if Magic Familiars present
}

// =============================================================================
// Site passive effects
// =============================================================================

/// Helper: get the hex state at the player's position.
fn player_hex(state: &GameState, player_idx: usize) -> Option<&HexState> {
    let pos = state.players[player_idx].position?;
    state.map.hexes.get(&pos.key())
}

/// Magical Glade: remove a wound at end of turn.
///
/// Checks both hand and discard pile. If wounds in both, sets GladeWoundChoice
/// pending for the player to choose. If only one has wounds, auto-removes.
/// Returns true if a pending choice was created (caller should block).
fn apply_magical_glade_wound(state: &mut GameState, player_idx: usize) -> bool {
    let on_glade = player_hex(state, player_idx)
        .and_then(|h| h.site.as_ref())
        .is_some_and(|s| s.site_type == SiteType::MagicalGlade && !s.is_burned);

    if !on_glade {
        return false;
    }

    let player = &mut state.players[player_idx];
    let has_hand_wound = player.hand.iter().any(|c| c.as_str() == "wound");
    let has_discard_wound = player.discard.iter().any(|c| c.as_str() == "wound");

    if has_hand_wound && has_discard_wound {
        // Both have wounds — player must choose
        player.pending.active = Some(ActivePending::GladeWoundChoice);
        return true;
    } else if has_hand_wound {
        // Only hand — auto-remove
        if let Some(idx) = player.hand.iter().position(|c| c.as_str() == "wound") {
            player.hand.remove(idx);
        }
    } else if has_discard_wound {
        // Only discard — auto-remove
        if let Some(idx) = player.discard.iter().position(|c| c.as_str() == "wound") {
            player.discard.remove(idx);
        }
    }
    false
}

/// Mine: gain crystal of mine color at end of turn.
fn apply_mine_crystal(state: &mut GameState, player_idx: usize) {
    let mine_color = player_hex(state, player_idx)
        .and_then(|h| h.site.as_ref())
        .and_then(|s| {
            if s.site_type == SiteType::Mine && !s.is_burned {
                s.mine_color
            } else {
                None
            }
        });

    if let Some(color) = mine_color {
        mana::gain_crystal(&mut state.players[player_idx], color);
    }
}

/// Deep Mine: set pending choice if player is on a deep mine.
/// Returns true if a pending choice was created.
fn apply_deep_mine_choice(state: &mut GameState, player_idx: usize) -> bool {
    let colors = player_hex(state, player_idx)
        .and_then(|h| h.site.as_ref())
        .and_then(|s| {
            if s.site_type == SiteType::DeepMine && !s.is_burned {
                s.deep_mine_colors.clone()
            } else {
                None
            }
        });

    if let Some(colors) = colors {
        // Filter out colors where player already has max crystals
        let player = &state.players[player_idx];
        let gainable: ArrayVec<BasicManaColor, MAX_DEEP_MINE_COLORS> = colors
            .iter()
            .filter(|c| {
                let count = match c {
                    BasicManaColor::Red => player.crystals.red,
                    BasicManaColor::Blue => player.crystals.blue,
                    BasicManaColor::Green => player.crystals.green,
                    BasicManaColor::White => player.crystals.white,
                };
                count < mana::MAX_CRYSTALS_PER_COLOR
            })
            .copied()
            .collect();

        if gainable.len() > 1 {
            // Multiple valid colors — player must choose
            state.players[player_idx].pending.active =
                Some(ActivePending::DeepMineChoice { colors: gainable });
            return true;
        } else if gainable.len() == 1 {
            // Single valid color — auto-grant
            mana::gain_crystal(&mut state.players[player_idx], gainable[0]);
        }
        // 0 gainable — all maxed, skip
    }
    false
}

/// Magical Glade: gain gold (day) or black (night) mana token at turn start.
fn apply_magical_glade_mana(state: &mut GameState, player_idx: usize) {
    let on_glade = player_hex(state, player_idx)
        .and_then(|h| h.site.as_ref())
        .is_some_and(|s| s.site_type == SiteType::MagicalGlade && !s.is_burned);

    if !on_glade {
        return;
    }

    let mana_color = match state.time_of_day {
        TimeOfDay::Day => ManaColor::Gold,
        TimeOfDay::Night => ManaColor::Black,
    };

    state.players[player_idx].pure_mana.push(ManaToken {
        color: mana_color,
        source: ManaTokenSource::Effect,
        cannot_power_spells: false,
    });
}

/// Plunder decision: if player starts turn at an unconquered inhabited site.
fn apply_plunder_decision(state: &mut GameState, player_idx: usize) {
    // Don't set plunder if player already has a pending active
    if state.players[player_idx].pending.has_active() {
        return;
    }

    let should_plunder = player_hex(state, player_idx)
        .and_then(|h| h.site.as_ref())
        .is_some_and(|s| {
            realm_data::sites::is_inhabited(s.site_type)
                && !s.is_conquered
                && !s.is_burned
        });

    if should_plunder {
        state.players[player_idx].pending.active = Some(ActivePending::PlunderDecision);
    }
}

// =============================================================================
// Tests
// =============================================================================
