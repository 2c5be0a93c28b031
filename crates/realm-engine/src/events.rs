//! Derives the semantic event stream for a submitted action by diffing
//! state captured immediately before and after `action_pipeline::apply_legal_action`.
//!
//! This is dispatch-level event synthesis: it does not instrument every
//! mutation inside the command executor, only the externally observable
//! deltas on the player, combat, map and round-level fields. Fidelity
//! limitations (e.g. `attack-failed` is never emitted, `enemy-defeated`
//! reports `fame: 0` when more than one enemy dies in a single finalize)
//! are recorded in the grounding ledger rather than hidden.

use realm_types::event::{CombatStartReason, Event};
use realm_types::legal_action::LegalAction;
use realm_types::state::GameState;

use crate::action_pipeline::ApplyResult;

/// The subset of state worth diffing, captured before the action runs.
pub struct PreSnapshot {
    position: Option<realm_types::hex::HexCoord>,
    fame: u32,
    reputation: i8,
    wound_count: usize,
    in_combat: bool,
    combat_enemy_ids: Vec<realm_types::ids::CombatInstanceId>,
    has_pending_choice: bool,
    round: u32,
    unit_count: usize,
    game_ended: bool,
    burned_hexes: std::collections::HashSet<realm_types::hex::HexCoord>,
    shield_tokens: std::collections::HashSet<(realm_types::hex::HexCoord, realm_types::ids::PlayerId)>,
}

impl PreSnapshot {
    pub fn capture(state: &GameState, player_idx: usize) -> Self {
        let player = &state.players[player_idx];
        Self {
            position: player.position,
            fame: player.fame,
            reputation: player.reputation,
            wound_count: player.hand.iter().filter(|c| c.as_str() == "wound").count(),
            in_combat: state.combat.is_some(),
            combat_enemy_ids: state
                .combat
                .as_ref()
                .map(|c| c.enemies.iter().map(|e| e.instance_id.clone()).collect())
                .unwrap_or_default(),
            has_pending_choice: player.pending.active.is_some(),
            round: state.round,
            unit_count: player.units.len(),
            game_ended: state.game_ended,
            burned_hexes: state
                .map
                .hexes
                .values()
                .filter(|hex| hex.site.as_ref().is_some_and(|site| site.is_burned))
                .map(|hex| hex.coord)
                .collect(),
            shield_tokens: state
                .map
                .hexes
                .values()
                .flat_map(|hex| hex.shield_tokens.iter().map(move |pid| (hex.coord, pid.clone())))
                .collect(),
        }
    }
}

/// Compare `pre` (captured before the action ran) against `post` (the state
/// immediately after a successful `apply_legal_action`) and synthesize the
/// ordered event list.
pub fn derive_events(
    pre: &PreSnapshot,
    post: &GameState,
    player_idx: usize,
    action: &LegalAction,
    result: &ApplyResult,
) -> Vec<Event> {
    let mut events = Vec::new();
    let player = &post.players[player_idx];

    if matches!(
        action,
        LegalAction::Move { .. } | LegalAction::ChallengeRampaging { .. }
    ) {
        if let Some(to) = player.position {
            if pre.position != Some(to) {
                events.push(Event::PlayerMoved {
                    player_id: player.id.clone(),
                    from: pre.position,
                    to,
                });
            }
        }
    }

    if !pre.in_combat && post.combat.is_some() {
        let hex = post.combat.as_ref().and_then(|c| c.combat_hex_coord);
        let reason = combat_start_reason(action, post, hex);
        events.push(Event::CombatStarted { reason, hex });
    }

    if pre.in_combat {
        if let Some(combat) = post.combat.as_ref() {
            let post_ids: std::collections::BTreeSet<_> =
                combat.enemies.iter().map(|e| e.instance_id.clone()).collect();
            for defeated_id in pre
                .combat_enemy_ids
                .iter()
                .filter(|id| !post_ids.contains(*id))
            {
                events.push(Event::EnemyDefeated {
                    enemy_instance_id: defeated_id.clone(),
                    fame: 0,
                });
            }
        } else {
            // Combat ended this action; any enemy still on the pre-list and
            // not accounted for above is either defeated or withdrawn from —
            // we cannot distinguish the two from state alone.
            for defeated_id in &pre.combat_enemy_ids {
                events.push(Event::EnemyDefeated {
                    enemy_instance_id: defeated_id.clone(),
                    fame: 0,
                });
            }
        }
    }

    if matches!(
        action,
        LegalAction::InteractSite { .. } | LegalAction::PlunderSite | LegalAction::EnterSite
    ) {
        if let Some(hex) = player.position {
            events.push(Event::InteractionCompleted { hex });
        }
    }

    if let LegalAction::RecruitUnit { unit_id, .. } = action {
        if player.units.len() > pre.unit_count {
            if let Some(newest) = player.units.last() {
                events.push(Event::UnitRecruited {
                    unit_id: unit_id.clone(),
                    unit_instance_id: newest.instance_id.clone(),
                });
            }
        }
    }

    if post.round != pre.round {
        events.push(Event::RoundEnded { round: pre.round });
        events.push(Event::UnitsReadied {
            player_id: player.id.clone(),
        });
        events.push(Event::DecksReshuffled {
            player_id: player.id.clone(),
        });
        events.push(Event::NewRoundStarted { round: post.round });
    }

    if player.reputation != pre.reputation {
        events.push(Event::ReputationChanged {
            player_id: player.id.clone(),
            delta: player.reputation - pre.reputation,
            new_value: player.reputation,
        });
    }

    if player.fame != pre.fame {
        events.push(Event::FameGained {
            player_id: player.id.clone(),
            delta: player.fame - pre.fame,
            new_value: player.fame,
        });
    }

    let post_wound_count = player.hand.iter().filter(|c| c.as_str() == "wound").count();
    if post_wound_count > pre.wound_count {
        events.push(Event::WoundReceived {
            player_id: player.id.clone(),
            count: (post_wound_count - pre.wound_count) as u32,
        });
    }

    for hex in post.map.hexes.values() {
        if let Some(site) = &hex.site {
            if site.is_burned && !pre.burned_hexes.contains(&hex.coord) {
                events.push(Event::MonasteryBurned { hex: hex.coord });
            }
        }
        for pid in &hex.shield_tokens {
            if !pre.shield_tokens.contains(&(hex.coord, pid.clone())) {
                events.push(Event::ShieldTokenPlaced { hex: hex.coord });
            }
        }
    }

    if !pre.has_pending_choice && player.pending.active.is_some() {
        events.push(Event::ChoiceRequired {
            player_id: player.id.clone(),
        });
    }

    if matches!(action, LegalAction::Undo) {
        events.push(Event::MoveUndone {
            player_id: player.id.clone(),
            restored_to: player.position,
        });
    }

    if !pre.game_ended && result.game_ended {
        events.push(Event::GameEnded {
            winning_player_id: post.winning_player_id.clone(),
        });
    }

    events
}

fn combat_start_reason(
    action: &LegalAction,
    post: &GameState,
    hex: Option<realm_types::hex::HexCoord>,
) -> CombatStartReason {
    match action {
        LegalAction::ChallengeRampaging { .. } => CombatStartReason::ChallengedRampaging,
        LegalAction::Move { .. } => {
            // A Move can either provoke rampaging enemies or trigger a fortified
            // assault on the destination hex; tell them apart by site type.
            let is_fortified_site = hex
                .and_then(|h| post.map.hexes.get(&h.key()))
                .and_then(|hex_state| hex_state.site.as_ref())
                .is_some_and(|site| realm_data::sites::is_fortified(site.site_type));
            if is_fortified_site {
                CombatStartReason::FortifiedAssault
            } else {
                CombatStartReason::ProvokedRampaging
            }
        }
        LegalAction::EnterSite => {
            let is_fortified_site = hex
                .and_then(|h| post.map.hexes.get(&h.key()))
                .and_then(|hex_state| hex_state.site.as_ref())
                .is_some_and(|site| realm_data::sites::is_fortified(site.site_type));
            if is_fortified_site {
                CombatStartReason::FortifiedAssault
            } else {
                CombatStartReason::SiteEnter
            }
        }
        LegalAction::RespondToCooperativeProposal { .. } => CombatStartReason::CooperativeAssault,
        _ => CombatStartReason::SiteEnter,
    }
}
