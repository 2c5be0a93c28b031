//! Cooperative assault — proposal, response, cancel, and execution.
//!
//! In multiplayer, players adjacent to a city can jointly assault it. The initiator
//! proposes a distribution of garrison enemies among participants. Invitees accept
//! or decline. On full agreement, all participants' Round Order tokens are flipped,
//! garrison enemies are shuffled and distributed, and each participant enters combat
//! with their assigned enemy subset.

use std::collections::BTreeMap;

use realm_types::enums::*;
use realm_types::hex::HexCoord;
use realm_types::ids::*;
use realm_types::state::*;

use crate::action_pipeline::ApplyError;
use crate::combat;

// =============================================================================
// Proposal
// =============================================================================

/// Apply a cooperative assault proposal.
///
/// Validates that:
/// - The city hex exists and has an unconquered city with garrison enemies
/// - The proposer is adjacent to the city
/// - The proposer hasn't taken an action this turn
/// - The proposer's Round Order token is not flipped
/// - All invitees are valid (adjacent, token not flipped, have non-wound cards)
/// - The distribution is valid (each participant ≥1 enemy, sum = garrison size)
pub fn apply_propose(
    state: &mut GameState,
    player_idx: usize,
    hex_coord: HexCoord,
    invited_player_idxs: &[usize],
    distribution: &[(usize, u32)],
) -> Result<(), ApplyError> {
    // Validate no existing proposal
    if state.pending_cooperative_assault.is_some() {
        return Err(ApplyError::InternalError(
            "CoopAssault: proposal already pending".into(),
        ));
    }

    // Validate city hex exists and has garrison
    let garrison_size = get_garrison_size(state, hex_coord)?;

    // Validate proposer is adjacent
    let proposer_pos = state.players[player_idx]
        .position
        .ok_or_else(|| ApplyError::InternalError("CoopAssault: proposer has no position".into()))?;
    if !is_adjacent(proposer_pos, hex_coord) {
        return Err(ApplyError::InternalError(
            "CoopAssault: proposer not adjacent to city".into(),
        ));
    }

    // Validate proposer hasn't taken action
    if state.players[player_idx]
        .flags
        .contains(PlayerFlags::HAS_TAKEN_ACTION_THIS_TURN)
    {
        return Err(ApplyError::InternalError(
            "CoopAssault: proposer has already taken action".into(),
        ));
    }

    // Validate proposer's token not flipped
    if state.players[player_idx]
        .flags
        .contains(PlayerFlags::ROUND_ORDER_TOKEN_FLIPPED)
    {
        return Err(ApplyError::InternalError(
            "CoopAssault: proposer token is flipped".into(),
        ));
    }

    // Validate end of round not announced
    if state.end_of_round_announced_by.is_some() {
        return Err(ApplyError::InternalError(
            "CoopAssault: end of round announced".into(),
        ));
    }

    // Validate invitees
    for &inv_idx in invited_player_idxs {
        validate_invitee(state, inv_idx, hex_coord)?;
    }

    // Validate distribution
    validate_distribution(player_idx, invited_player_idxs, distribution, garrison_size)?;

    state.pending_cooperative_assault = Some(CooperativeAssaultProposal {
        proposer_idx: player_idx,
        hex_coord,
        invited_player_idxs: invited_player_idxs.to_vec(),
        distribution: distribution.to_vec(),
        accepted_player_idxs: Vec::new(),
    });

    Ok(())
}

// =============================================================================
// Response
// =============================================================================

/// Apply a response to a cooperative assault proposal.
///
/// If declining: clears the proposal.
/// If accepting: adds to accepted list. If all invitees have accepted,
/// executes the agreement (shuffle, distribute, enter combat).
pub fn apply_respond(
    state: &mut GameState,
    player_idx: usize,
    accept: bool,
) -> Result<bool, ApplyError> {
    let proposal = state
        .pending_cooperative_assault
        .as_ref()
        .ok_or_else(|| ApplyError::InternalError("CoopAssault: no pending proposal".into()))?;

    // Validate player is an invited non-respondent
    if !proposal.invited_player_idxs.contains(&player_idx) {
        return Err(ApplyError::InternalError(
            "CoopAssault: player not invited".into(),
        ));
    }
    if proposal.accepted_player_idxs.contains(&player_idx) {
        return Err(ApplyError::InternalError(
            "CoopAssault: player already responded".into(),
        ));
    }

    if !accept {
        // Decline → clear proposal
        state.pending_cooperative_assault = None;
        return Ok(false);
    }

    // Accept
    let proposal = state.pending_cooperative_assault.as_mut().unwrap();
    proposal.accepted_player_idxs.push(player_idx);

    // Check if all invitees have accepted
    let all_accepted = proposal
        .invited_player_idxs
        .iter()
        .all(|idx| proposal.accepted_player_idxs.contains(idx));

    if all_accepted {
        // Extract proposal data before consuming it
        let proposal = state.pending_cooperative_assault.take().unwrap();
        execute_agreement(state, &proposal)?;
        return Ok(true);
    }

    Ok(false)
}

// =============================================================================
// Agreement execution
// =============================================================================

/// Execute the cooperative assault agreement.
///
/// 1. Flip Round Order tokens for all participants
/// 2. Shuffle garrison enemy tokens via RNG
/// 3. Distribute shuffled enemies by counts
/// 4. Enter fortified combat with enemy_assignments on CombatState
fn execute_agreement(
    state: &mut GameState,
    proposal: &CooperativeAssaultProposal,
) -> Result<(), ApplyError> {
    let hex_key = proposal.hex_coord.key();

    // 1. Flip Round Order tokens for all participants
    let mut all_participant_idxs = vec![proposal.proposer_idx];
    all_participant_idxs.extend_from_slice(&proposal.invited_player_idxs);

    for &p_idx in &all_participant_idxs {
        state.players[p_idx]
            .flags
            .insert(PlayerFlags::ROUND_ORDER_TOKEN_FLIPPED);
    }

    // 2. Get garrison enemy tokens and shuffle
    let hex_state = state
        .map
        .hexes
        .get(&hex_key)
        .ok_or_else(|| ApplyError::InternalError("CoopAssault: city hex not found".into()))?;

    let mut enemy_tokens: Vec<EnemyTokenId> =
        hex_state.enemies.iter().map(|e| e.token_id.clone()).collect();

    state.rng.shuffle(&mut enemy_tokens);

    // 3. Distribute shuffled enemies by counts
    // Sort distribution by player index for deterministic assignment
    let mut sorted_dist = proposal.distribution.clone();
    sorted_dist.sort_by_key(|&(idx, _)| idx);

    let mut assignments: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut token_cursor = 0usize;

    for &(p_idx, count) in &sorted_dist {
        let player_id = state.players[p_idx].id.as_str().to_string();
        let mut player_enemies = Vec::new();
        for _ in 0..count {
            if token_cursor < enemy_tokens.len() {
                // Map to instance_id format "enemy_N"
                let instance_id = format!("enemy_{}", token_cursor);
                player_enemies.push(instance_id);
                token_cursor += 1;
            }
        }
        assignments.insert(player_id, player_enemies);
    }

    // 4. Enter fortified combat for the proposer (initiator)
    let all_tokens: Vec<EnemyTokenId> = enemy_tokens;

    combat::execute_enter_combat(
        state,
        proposal.proposer_idx,
        &all_tokens,
        true, // fortified
        Some(proposal.hex_coord),
        Default::default(),
    )
    .map_err(|e| {
        ApplyError::InternalError(format!("CoopAssault: enter_combat failed: {:?}", e))
    })?;

    // Set enemy assignments on combat state
    if let Some(ref mut combat) = state.combat {
        combat.enemy_assignments = Some(assignments);
    }

    // Mark proposer as having taken action
    state.players[proposal.proposer_idx]
        .flags
        .insert(PlayerFlags::HAS_TAKEN_ACTION_THIS_TURN);

    Ok(())
}

// =============================================================================
// Cancel
// =============================================================================

/// Cancel a cooperative assault proposal (initiator only).
pub fn apply_cancel(
    state: &mut GameState,
    player_idx: usize,
) -> Result<(), ApplyError> {
    let proposal = state
        .pending_cooperative_assault
        .as_ref()
        .ok_or_else(|| ApplyError::InternalError("CoopAssault: no pending proposal".into()))?;

    if proposal.proposer_idx != player_idx {
        return Err(ApplyError::InternalError(
            "CoopAssault: only initiator can cancel".into(),
        ));
    }

    state.pending_cooperative_assault = None;
    Ok(())
}

// =============================================================================
// Helpers
// =============================================================================

/// Check if a player is adjacent to a hex.
pub(crate) fn is_adjacent(player_pos: HexCoord, target: HexCoord) -> bool {
    player_pos.neighbors().contains(&target)
}

/// Get the garrison size (number of enemies) for a city hex.
fn get_garrison_size(state: &GameState, hex_coord: HexCoord) -> Result<u32, ApplyError> {
    let hex_key = hex_coord.key();
    let hex_state = state
        .map
        .hexes
        .get(&hex_key)
        .ok_or_else(|| ApplyError::InternalError("CoopAssault: hex not found".into()))?;

    let site = hex_state
        .site
        .as_ref()
        .ok_or_else(|| ApplyError::InternalError("CoopAssault: no site on hex".into()))?;

    if site.site_type != SiteType::City {
        return Err(ApplyError::InternalError(
            "CoopAssault: not a city hex".into(),
        ));
    }

    if site.is_conquered {
        return Err(ApplyError::InternalError(
            "CoopAssault: city already conquered".into(),
        ));
    }

    let enemy_count = hex_state.enemies.len() as u32;
    if enemy_count == 0 {
        return Err(ApplyError::InternalError(
            "CoopAssault: city has no garrison enemies".into(),
        ));
    }

    Ok(enemy_count)
}

/// Validate an invitee for a cooperative assault.
fn validate_invitee(
    state: &GameState,
    inv_idx: usize,
    city_hex: HexCoord,
) -> Result<(), ApplyError> {
    if inv_idx >= state.players.len() {
        return Err(ApplyError::InternalError(
            "CoopAssault: invitee index out of range".into(),
        ));
    }

    let invitee = &state.players[inv_idx];

    // Adjacent to city
    let inv_pos = invitee
        .position
        .ok_or_else(|| ApplyError::InternalError("CoopAssault: invitee has no position".into()))?;
    if !is_adjacent(inv_pos, city_hex) {
        return Err(ApplyError::InternalError(
            "CoopAssault: invitee not adjacent to city".into(),
        ));
    }

    // Token not flipped
    if invitee
        .flags
        .contains(PlayerFlags::ROUND_ORDER_TOKEN_FLIPPED)
    {
        return Err(ApplyError::InternalError(
            "CoopAssault: invitee token is flipped".into(),
        ));
    }

    // Has non-wound cards in hand
    let has_non_wound = invitee.hand.iter().any(|c| c.as_str() != "wound");
    if !has_non_wound {
        return Err(ApplyError::InternalError(
            "CoopAssault: invitee has no non-wound cards".into(),
        ));
    }

    Ok(())
}

/// Validate the enemy distribution.
fn validate_distribution(
    proposer_idx: usize,
    invited_player_idxs: &[usize],
    distribution: &[(usize, u32)],
    garrison_size: u32,
) -> Result<(), ApplyError> {
    // All participants must appear exactly once
    let mut all_participants = vec![proposer_idx];
    all_participants.extend_from_slice(invited_player_idxs);

    if distribution.len() != all_participants.len() {
        return Err(ApplyError::InternalError(
            "CoopAssault: distribution size mismatch".into(),
        ));
    }

    let mut total_count = 0u32;
    for &(p_idx, count) in distribution {
        if !all_participants.contains(&p_idx) {
            return Err(ApplyError::InternalError(
                "CoopAssault: distribution contains unknown participant".into(),
            ));
        }
        if count == 0 {
            return Err(ApplyError::InternalError(
                "CoopAssault: each participant must get ≥1 enemy".into(),
            ));
        }
        total_count += count;
    }

    if total_count != garrison_size {
        return Err(ApplyError::InternalError(format!(
            "CoopAssault: distribution sum {} != garrison size {}",
            total_count, garrison_size
        )));
    }

    Ok(())
}

/// Find eligible invitees for a cooperative assault on a city.
///
/// Returns player indices of other players who are adjacent to the city hex,
/// have their Round Order token unflipped, and have non-wound cards in hand.
pub fn find_eligible_invitees(
    state: &GameState,
    initiator_idx: usize,
    city_hex: HexCoord,
) -> Vec<usize> {
    let mut eligible = Vec::new();
    for (idx, player) in state.players.iter().enumerate() {
        if idx == initiator_idx {
            continue;
        }

        let pos = match player.position {
            Some(p) => p,
            None => continue,
        };

        if !is_adjacent(pos, city_hex) {
            continue;
        }

        if player
            .flags
            .contains(PlayerFlags::ROUND_ORDER_TOKEN_FLIPPED)
        {
            continue;
        }

        let has_non_wound = player.hand.iter().any(|c| c.as_str() != "wound");
        if !has_non_wound {
            continue;
        }

        eligible.push(idx);
    }
    eligible
}

/// Generate all valid distributions of `garrison_size` enemies among participants.
///
/// Each participant must get at least 1 enemy. Returns (invited_player_idxs, distribution) pairs.
pub fn generate_distributions(
    initiator_idx: usize,
    invitees: &[usize],
    garrison_size: u32,
) -> Vec<Vec<(usize, u32)>> {
    let mut all_participants = vec![initiator_idx];
    all_participants.extend_from_slice(invitees);
    let n = all_participants.len();

    if garrison_size < n as u32 {
        return Vec::new(); // Can't give each participant at least 1
    }

    let remaining = garrison_size - n as u32; // After giving 1 each
    let mut results = Vec::new();
    let mut counts = vec![1u32; n]; // Start with 1 each

    // Generate all ways to distribute `remaining` among `n` participants
    distribute_remaining(&all_participants, &mut counts, remaining, 0, &mut results);

    results
}

/// Recursive helper to distribute remaining enemies among participants.
fn distribute_remaining(
    participants: &[usize],
    counts: &mut Vec<u32>,
    remaining: u32,
    start_idx: usize,
    results: &mut Vec<Vec<(usize, u32)>>,
) {
    if remaining == 0 {
        let dist: Vec<(usize, u32)> = participants
            .iter()
            .zip(counts.iter())
            .map(|(&idx, &count)| (idx, count))
            .collect();
        results.push(dist);
        return;
    }

    for i in start_idx..participants.len() {
        counts[i] += 1;
        distribute_remaining(participants, counts, remaining - 1, i, results);
        counts[i] -= 1;
    }
}

/// Check if an enemy instance is assigned to a specific player in cooperative combat.
///
/// Returns true if:
/// - There are no assignments (non-cooperative / solo combat — all enemies visible)
/// - The enemy instance is in the player's assignment list
pub fn is_enemy_assigned_to_player(
    assignments: &Option<BTreeMap<String, Vec<String>>>,
    player_id: &str,
    enemy_instance_id: &str,
) -> bool {
    match assignments {
        None => true, // No assignments = solo/non-cooperative, all enemies visible
        Some(map) => map
            .get(player_id)
            .map(|ids| ids.iter().any(|id| id == enemy_instance_id))
            .unwrap_or(false),
    }
}

// =============================================================================
// Tests
// =============================================================================
