//! Skill activation enumeration.
//!
//! Produces `UseSkill` legal actions for skills the player can currently activate.

use realm_data::skills::{get_skill, is_motivation_skill, SkillPhaseRestriction, SkillUsageType};
use realm_types::enums::CombatPhase;
use realm_types::legal_action::LegalAction;
use realm_types::state::GameState;

/// Enumerate all skill activations available to the player.
pub(super) fn enumerate_skill_activations(
    state: &GameState,
    player_idx: usize,
    actions: &mut Vec<LegalAction>,
) {
    let player = &state.players[player_idx];
    let in_combat = state.combat.is_some();
    let combat_phase = state.combat.as_ref().map(|c| c.phase);

    // Pre-check: has any player already used a motivation this round?
    let motivation_used_this_round = state.players.iter().any(|p| {
        p.skill_cooldowns
            .used_this_round
            .iter()
            .any(|id| is_motivation_skill(id.as_str()))
    });

    for skill_id in &player.skills {
        let Some(def) = get_skill(skill_id.as_str()) else {
            continue;
        };

        // Skip unimplemented skills
        if def.effect.is_none() {
            continue;
        }

        // Skip passive and interactive skills (not manually activated)
        match def.usage_type {
            SkillUsageType::Passive | SkillUsageType::Interactive => continue,
            SkillUsageType::OncePerTurn | SkillUsageType::OncePerRound => {}
        }

        // Skip flipped skills
        if player
            .skill_flip_state
            .flipped_skills
            .contains(skill_id)
        {
            continue;
        }

        // Check cooldowns
        match def.usage_type {
            SkillUsageType::OncePerTurn => {
                if player.skill_cooldowns.used_this_turn.contains(skill_id) {
                    continue;
                }
            }
            SkillUsageType::OncePerRound => {
                if player.skill_cooldowns.used_this_round.contains(skill_id) {
                    continue;
                }
            }
            _ => {}
        }

        // Motivation cross-player cooldown
        if def.is_motivation && motivation_used_this_round {
            continue;
        }

        // Phase restriction check
        if !phase_allows_skill(def.phase_restriction, in_combat, combat_phase) {
            continue;
        }

        actions.push(LegalAction::UseSkill {
            skill_id: skill_id.clone(),
        });
    }
}

/// Check if the current game context allows a skill with the given phase restriction.
fn phase_allows_skill(
    restriction: SkillPhaseRestriction,
    in_combat: bool,
    combat_phase: Option<CombatPhase>,
) -> bool {
    match restriction {
        SkillPhaseRestriction::None => true,
        SkillPhaseRestriction::NoCombat => !in_combat,
        SkillPhaseRestriction::CombatOnly => in_combat,
        SkillPhaseRestriction::MeleeAttackOnly => {
            combat_phase == Some(CombatPhase::Attack)
        }
        SkillPhaseRestriction::RangedSiegeOrAttack => matches!(
            combat_phase,
            Some(CombatPhase::RangedSiege) | Some(CombatPhase::Attack)
        ),
        SkillPhaseRestriction::BlockOnly => {
            combat_phase == Some(CombatPhase::Block)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
