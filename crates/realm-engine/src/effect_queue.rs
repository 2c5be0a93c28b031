//! Queue-based iterative effect resolution.
//!
//! A `VecDeque` processes effects one at a time rather than recursing,
//! avoiding stack overflow risk and making the control flow explicit.
//!
//! ## Key concepts
//!
//! - **Atomic effects** (GainMove, GainAttack, etc.) directly mutate `GameState`.
//! - **Structural effects** (Compound, Conditional, Scaling) decompose into
//!   sub-effects that are pushed to the front of the queue.
//! - **Choice effects** pause the queue and return the options to the caller.
//!   The remaining queue entries become the "continuation" stored alongside
//!   the pending choice in player state.
//!
//! ## Flow
//!
//! ```text
//! PLAY_CARD → push card effect → drain queue
//!   → if NeedsChoice: store options + continuation in player.pending
//!   → if Complete: done
//!
//! RESOLVE_CHOICE → push chosen option + continuation → drain queue
//!   → repeat until complete
//! ```

use std::collections::VecDeque;

use realm_types::effect::*;
use realm_types::enums::*;
use realm_types::ids::{CardId, ModifierId};
use realm_types::modifier::*;
use realm_types::pending::{
    ActivePending, AttackDefeatFameTracker, ChoiceResolution, ContinuationEntry, DeferredPending,
    EffectMode, PendingChoice, PendingDecompose,
};
use realm_types::state::*;

// =============================================================================
// Constants
// =============================================================================

/// Well-known card ID for wound cards.
pub const WOUND_CARD_ID: &str = "wound";

/// Maximum reputation value.
const MAX_REPUTATION: i8 = 7;
/// Minimum reputation value.
const MIN_REPUTATION: i8 = -7;

/// Maximum crystals per color.
const MAX_CRYSTALS_PER_COLOR: u8 = 3;

// =============================================================================
// Queue types
// =============================================================================

/// A single effect waiting to be resolved, with source metadata.
#[derive(Debug, Clone)]
pub struct QueuedEffect {
    pub effect: CardEffect,
    pub source_card_id: Option<CardId>,
}

/// Result of draining the effect queue.
#[derive(Debug)]
pub enum DrainResult {
    /// All effects resolved successfully, queue is empty.
    Complete,
    /// Player must choose from options before resolution can continue.
    /// `continuation` holds the remaining effects to process after the choice.
    NeedsChoice {
        options: Vec<CardEffect>,
        continuation: Vec<QueuedEffect>,
        resolution: ChoiceResolution,
    },
    /// A custom pending (not Choice) was set directly on the player.
    /// The player must resolve this pending before continuing.
    PendingSet,
}

/// Internal result from resolving a single effect.
enum ResolveResult {
    /// Effect applied directly to state.
    Applied,
    /// Effect decomposed into sub-effects to push to queue front.
    Decomposed(Vec<CardEffect>),
    /// Player must choose. Options are the available choices.
    NeedsChoice(Vec<CardEffect>),
    /// Player must choose, with a specific resolution strategy.
    NeedsChoiceWith(Vec<CardEffect>, ChoiceResolution),
    /// Effect was not applicable (e.g., no-op, unresolvable).
    Skipped,
    /// A custom pending was set directly on the player. Queue should stop.
    PendingSet,
    /// SelectCombatEnemy needs player to choose a target. Queue should stop + save continuation.
    NeedsSelectCombatEnemy {
        eligible_enemy_ids: Vec<String>,
        template: realm_types::pending::SelectEnemyTemplate,
    },
}

/// The effect queue. Created per-action, not persisted in game state.
#[derive(Debug, Default)]
pub struct EffectQueue {
    queue: VecDeque<QueuedEffect>,
}

impl EffectQueue {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Push a single effect to the back of the queue.
    pub fn push(&mut self, effect: CardEffect, source_card_id: Option<CardId>) {
        self.queue.push_back(QueuedEffect {
            effect,
            source_card_id,
        });
    }

    /// Push multiple effects to the back of the queue.
    pub fn push_all(
        &mut self,
        effects: impl IntoIterator<Item = CardEffect>,
        source_card_id: Option<CardId>,
    ) {
        for effect in effects {
            self.queue.push_back(QueuedEffect {
                effect,
                source_card_id: source_card_id.clone(),
            });
        }
    }

    /// Push a continuation (previously saved remaining effects) to the back.
    pub fn push_continuation(&mut self, continuation: Vec<QueuedEffect>) {
        for entry in continuation {
            self.queue.push_back(entry);
        }
    }

    /// Drain the queue, resolving effects until it's empty or a choice is needed.
    pub fn drain(&mut self, state: &mut GameState, player_idx: usize) -> DrainResult {
        while let Some(queued) = self.queue.pop_front() {
            let source = queued.source_card_id.clone();
            match resolve_one(state, player_idx, &queued.effect) {
                ResolveResult::Applied => continue,
                ResolveResult::Skipped => continue,
                ResolveResult::Decomposed(sub_effects) => {
                    // Push sub-effects to FRONT of queue (they should resolve next).
                    for effect in sub_effects.into_iter().rev() {
                        self.queue.push_front(QueuedEffect {
                            effect,
                            source_card_id: source.clone(),
                        });
                    }
                }
                ResolveResult::NeedsChoice(options) => {
                    // Remaining queue entries become the continuation.
                    let continuation: Vec<QueuedEffect> = self.queue.drain(..).collect();
                    return DrainResult::NeedsChoice {
                        options,
                        continuation,
                        resolution: ChoiceResolution::Standard,
                    };
                }
                ResolveResult::NeedsChoiceWith(options, resolution) => {
                    let continuation: Vec<QueuedEffect> = self.queue.drain(..).collect();
                    return DrainResult::NeedsChoice {
                        options,
                        continuation,
                        resolution,
                    };
                }
                ResolveResult::PendingSet => {
                    // Custom pending was set directly. Discard remaining queue.
                    // (DiscardForBonus is always the entire card effect.)
                    self.queue.clear();
                    return DrainResult::PendingSet;
                }
                ResolveResult::NeedsSelectCombatEnemy { eligible_enemy_ids, template } => {
                    // Save remaining queue as continuation before setting pending.
                    let continuation: Vec<realm_types::pending::ContinuationEntry> =
                        self.queue.drain(..).map(|q| realm_types::pending::ContinuationEntry {
                            effect: q.effect,
                            source_card_id: q.source_card_id,
                        }).collect();
                    state.players[player_idx].pending.active =
                        Some(ActivePending::SelectCombatEnemy {
                            unit_instance_id: None,
                            eligible_enemy_ids,
                            template,
                            continuation,
                        });
                    return DrainResult::PendingSet;
                }
            }
        }
        DrainResult::Complete
    }

    /// Returns true if the queue has no pending effects.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

// =============================================================================
// Resolve pending choice (public API for RESOLVE_CHOICE action)
// =============================================================================

/// Error from resolving a pending choice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveChoiceError {
    /// No pending choice active for this player.
    #[error("no pending choice for this player")]
    NoPendingChoice,
    /// Choice index out of bounds.
    #[error("choice index out of bounds")]
    InvalidChoiceIndex,
    /// Internal error during resolution.
    #[error("internal error resolving choice: {0}")]
    InternalError(String),
}

/// Resolve a pending choice by picking one of the available options.
///
/// The chosen option is pushed into a new effect queue along with any
/// continuation effects, then drained. If another choice emerges,
/// the pending state is updated again.
pub fn resolve_pending_choice(
    state: &mut GameState,
    player_idx: usize,
    choice_index: usize,
) -> Result<(), ResolveChoiceError> {
    // Extract the pending choice
    let pending = state.players[player_idx]
        .pending
        .active
        .take()
        .ok_or(ResolveChoiceError::NoPendingChoice)?;

    let choice = match pending {
        ActivePending::Choice(c) => c,
        other => {
            // Put it back — wrong pending type
            state.players[player_idx].pending.active = Some(other);
            return Err(ResolveChoiceError::NoPendingChoice);
        }
    };

    if choice_index >= choice.options.len() {
        // Put the choice back
        state.players[player_idx].pending.active = Some(ActivePending::Choice(choice));
        return Err(ResolveChoiceError::InvalidChoiceIndex);
    }

    let chosen_effect = choice.options[choice_index].clone();
    let source_card_id = choice.card_id.clone();
    let resolution = choice.resolution.clone();

    // Apply resolution-specific side-effects before enqueueing the chosen effect
    match &resolution {
        ChoiceResolution::Standard => {}
        ChoiceResolution::CrystallizeConsume => {
            // Consume a mana token matching the chosen crystal color
            if let CardEffect::GainCrystal {
                color: Some(basic_color),
            } = &chosen_effect
            {
                let target = ManaColor::from(*basic_color);
                let player = &mut state.players[player_idx];
                if let Some(idx) = player
                    .pure_mana
                    .iter()
                    .position(|t| to_basic_mana_color(t.color) == Some(*basic_color))
                {
                    player.pure_mana.remove(idx);
                }
                let _ = target; // used for position lookup above
            }
        }
        ChoiceResolution::DiscardThenContinue { eligible_indices } => {
            // Discard the card at the eligible index corresponding to the choice
            if choice_index < eligible_indices.len() {
                let hand_idx = eligible_indices[choice_index];
                let player = &mut state.players[player_idx];
                if hand_idx < player.hand.len() {
                    let discarded = player.hand.remove(hand_idx);
                    player.discard.push(discarded);
                }
            }
        }
        ChoiceResolution::ManaDrawTakeDie {
            die_id,
            tokens_per_die: _,
            remaining_dice: _,
        } => {
            // Mark the die as taken by this player, set its color from the chosen effect
            if let CardEffect::GainMana { color, .. } = &chosen_effect {
                let player_id = state.players[player_idx].id.clone();
                if let Some(die) = state.source.dice.iter_mut().find(|d| d.id == *die_id) {
                    die.taken_by_player_id = Some(player_id);
                    die.color = *color;
                }
                // Track as mana draw die
                state.players[player_idx]
                    .mana_draw_die_ids
                    .push(die_id.clone());
            }
        }
        ChoiceResolution::BoostTarget {
            eligible_hand_indices,
        } => {
            // Move the selected card from hand to play_area
            if choice_index < eligible_hand_indices.len() {
                let hand_idx = eligible_hand_indices[choice_index];
                let player = &mut state.players[player_idx];
                if hand_idx < player.hand.len() {
                    let card = player.hand.remove(hand_idx);
                    player.play_area.push(card);
                }
            }
        }
        ChoiceResolution::ReadyUnitTarget {
            eligible_unit_indices,
        } => {
            // Ready the unit at the selected index
            if choice_index < eligible_unit_indices.len() {
                let unit_idx = eligible_unit_indices[choice_index];
                let player = &mut state.players[player_idx];
                if unit_idx < player.units.len() {
                    player.units[unit_idx].state = UnitState::Ready;
                }
            }
        }
        ChoiceResolution::HealUnitTarget {
            eligible_unit_indices,
        } => {
            // Heal the wounded unit at the selected index
            if choice_index < eligible_unit_indices.len() {
                let unit_idx = eligible_unit_indices[choice_index];
                let player = &mut state.players[player_idx];
                if unit_idx < player.units.len() {
                    player.units[unit_idx].wounded = false;
                }
            }
        }
        ChoiceResolution::PureMagicConsume { token_colors } => {
            // Consume a mana token of the color at token_colors[choice_index]
            if choice_index < token_colors.len() {
                let color = token_colors[choice_index];
                let player = &mut state.players[player_idx];
                if let Some(idx) = player.pure_mana.iter().position(|t| t.color == color) {
                    player.pure_mana.remove(idx);
                }
            }
        }
        ChoiceResolution::UniversalPowerMana { available_colors } => {
            // Consume the basic mana token of the chosen color and push modifiers.
            if choice_index < available_colors.len() {
                let color = available_colors[choice_index];
                let mana_color = ManaColor::from(color);
                let player = &mut state.players[player_idx];
                if let Some(idx) = player.pure_mana.iter().position(|t| t.color == mana_color) {
                    player.pure_mana.remove(idx);
                }
                // Push Universal Power modifiers via the action_pipeline helper
                let skill_id = choice.skill_id.clone().unwrap_or_else(|| {
                    realm_types::ids::SkillId::from("goldyx_universal_power")
                });
                crate::action_pipeline::push_universal_power_modifiers(
                    state, player_idx, &skill_id, color,
                );
            }
        }
        ChoiceResolution::SecretWaysLake => {
            // Choice 1 = pay Blue mana for lake modifiers. Choice 0 = decline (Noop).
            if choice_index == 1 {
                // Consume 1 Blue mana: token > crystal > die
                let player = &mut state.players[player_idx];
                if let Some(idx) = player.pure_mana.iter().position(|t| t.color == ManaColor::Blue) {
                    player.pure_mana.remove(idx);
                } else if player.crystals.blue > 0 {
                    player.crystals.blue -= 1;
                    player.spent_crystals_this_turn.blue += 1;
                } else if let Some(die) = state.source.dice.iter_mut().find(|d| {
                    d.color == ManaColor::Blue && !d.is_depleted && d.taken_by_player_id.is_none()
                }) {
                    die.taken_by_player_id = Some(state.players[player_idx].id.clone());
                    die.is_depleted = true;
                }
            }
        }
        ChoiceResolution::RegenerateMana { available_colors, bonus_color } => {
            // Consume mana of chosen color, remove wound, conditionally draw
            if choice_index < available_colors.len() {
                let color = available_colors[choice_index];
                crate::action_pipeline::execute_regenerate(state, player_idx, color, *bonus_color)
                    .map_err(|e| ResolveChoiceError::InternalError(format!("{:?}", e)))?;
            }
        }
        ChoiceResolution::DuelingTarget { eligible_enemy_ids } => {
            // Target the chosen enemy for dueling
            if choice_index < eligible_enemy_ids.len() {
                let enemy_id = eligible_enemy_ids[choice_index].clone();
                let skill_id = choice.skill_id.clone().unwrap_or_else(|| {
                    realm_types::ids::SkillId::from("wolfhawk_dueling")
                });
                crate::action_pipeline::apply_dueling_target_pub(
                    state, player_idx, &skill_id, &enemy_id,
                );
            }
        }
        ChoiceResolution::InvocationDiscard { ref options } => {
            if choice_index < options.len() {
                let opt = options[choice_index].clone();
                crate::action_pipeline::execute_invocation(state, player_idx, &opt);
            }
        }
        ChoiceResolution::PolarizationConvert { ref options } => {
            if choice_index < options.len() {
                let opt = options[choice_index].clone();
                crate::action_pipeline::execute_polarization(state, player_idx, &opt);
            }
        }
        ChoiceResolution::CurseTarget { ref eligible_enemy_ids } => {
            if choice_index < eligible_enemy_ids.len() {
                let enemy_id = eligible_enemy_ids[choice_index].clone();
                let skill_id = choice.skill_id.clone().unwrap_or_else(|| {
                    realm_types::ids::SkillId::from("krang_curse")
                });
                crate::action_pipeline::setup_curse_mode(state, player_idx, &skill_id, &enemy_id);
            }
        }
        ChoiceResolution::CurseMode { ref enemy_instance_id, has_arcane_immunity: _, has_multi_attack } => {
            let skill_id = choice.skill_id.clone().unwrap_or_else(|| {
                realm_types::ids::SkillId::from("krang_curse")
            });
            let eid = enemy_instance_id.clone();
            crate::action_pipeline::execute_curse_mode(
                state, player_idx, &skill_id, &eid, *has_multi_attack, choice_index,
            );
        }
        ChoiceResolution::CurseAttackIndex { ref enemy_instance_id, .. } => {
            let skill_id = choice.skill_id.clone().unwrap_or_else(|| {
                realm_types::ids::SkillId::from("krang_curse")
            });
            let eid = enemy_instance_id.clone();
            crate::action_pipeline::execute_curse_attack_index(
                state, player_idx, &skill_id, &eid, choice_index,
            );
        }
        ChoiceResolution::ForkedLightningTarget { remaining, ref already_targeted } => {
            let skill_id = choice.skill_id.clone().unwrap_or_else(|| {
                realm_types::ids::SkillId::from("braevalar_forked_lightning")
            });
            let targeted = already_targeted.clone();
            crate::action_pipeline::execute_forked_lightning_target(
                state, player_idx, &skill_id, *remaining, &targeted, choice_index,
            );
        }
        ChoiceResolution::KnowYourPreyTarget { ref eligible_enemy_ids } => {
            if choice_index < eligible_enemy_ids.len() {
                let enemy_id = eligible_enemy_ids[choice_index].clone();
                let skill_id = choice.skill_id.clone().unwrap_or_else(|| {
                    realm_types::ids::SkillId::from("wolfhawk_know_your_prey")
                });
                crate::action_pipeline::setup_know_your_prey_options(
                    state, player_idx, &skill_id, &enemy_id,
                );
            }
        }
        ChoiceResolution::KnowYourPreyOption { ref enemy_instance_id, ref options } => {
            if choice_index < options.len() {
                let skill_id = choice.skill_id.clone().unwrap_or_else(|| {
                    realm_types::ids::SkillId::from("wolfhawk_know_your_prey")
                });
                let eid = enemy_instance_id.clone();
                let opt = options[choice_index].clone();
                crate::action_pipeline::execute_know_your_prey_option(
                    state, player_idx, &skill_id, &eid, &opt,
                );
            }
        }
    }

    // Build a new queue with the chosen option + continuation
    let mut queue = EffectQueue::new();
    queue.push(chosen_effect, source_card_id.clone());
    queue.push_continuation(
        choice
            .continuation
            .into_iter()
            .map(|c| QueuedEffect {
                effect: c.effect,
                source_card_id: c.source_card_id,
            })
            .collect(),
    );

    // Drain the queue
    match queue.drain(state, player_idx) {
        DrainResult::Complete => {
            // Pending is already cleared (we took it above)
            Ok(())
        }
        DrainResult::NeedsChoice {
            options,
            continuation,
            resolution,
        } => {
            // Another choice emerged — set new pending
            state.players[player_idx].pending.active = Some(ActivePending::Choice(PendingChoice {
                card_id: source_card_id,
                skill_id: None,
                unit_instance_id: None,
                options,
                continuation: continuation
                    .into_iter()
                    .map(|q| ContinuationEntry {
                        effect: q.effect,
                        source_card_id: q.source_card_id,
                    })
                    .collect(),
                movement_bonus_applied: false,
                resolution,
            }));
            Ok(())
        }
        DrainResult::PendingSet => {
            // A custom pending was set directly (e.g., DiscardForBonus inside a choice).
            Ok(())
        }
    }
}

// =============================================================================
// Resolve discard-for-bonus (public API for RESOLVE_DISCARD_FOR_BONUS action)
// =============================================================================

/// Resolve a pending discard-for-bonus by picking a base effect and discard count.
///
/// The chosen base effect is scaled by `bonus_per_card * discard_count`, then
/// eligible cards are discarded from hand. The result is drained through the
/// effect queue.
pub fn resolve_discard_for_bonus(
    state: &mut GameState,
    player_idx: usize,
    choice_index: usize,
    discard_count: usize,
) -> Result<(), ResolveChoiceError> {
    // Extract the pending
    let pending = state.players[player_idx]
        .pending
        .active
        .take()
        .ok_or(ResolveChoiceError::NoPendingChoice)?;

    let dfb = match pending {
        ActivePending::DiscardForBonus(d) => d,
        other => {
            state.players[player_idx].pending.active = Some(other);
            return Err(ResolveChoiceError::NoPendingChoice);
        }
    };

    if choice_index >= dfb.choice_options.len() {
        state.players[player_idx].pending.active =
            Some(ActivePending::DiscardForBonus(dfb));
        return Err(ResolveChoiceError::InvalidChoiceIndex);
    }

    let chosen_base = dfb.choice_options[choice_index].clone();
    let bonus = dfb.bonus_per_card * discard_count as u32;

    // Discard eligible cards from hand
    discard_eligible_cards(state, player_idx, discard_count, dfb.discard_filter);

    // Scale the chosen effect by the bonus
    let final_effect = if bonus > 0 {
        scale_effect(&chosen_base, bonus)
    } else {
        chosen_base
    };

    // Drain through the effect queue
    let source_card_id = Some(dfb.source_card_id);
    let mut queue = EffectQueue::new();
    queue.push(final_effect, source_card_id.clone());
    match queue.drain(state, player_idx) {
        DrainResult::Complete => Ok(()),
        DrainResult::NeedsChoice {
            options,
            continuation,
            resolution,
        } => {
            // Another choice emerged — set new pending
            state.players[player_idx].pending.active =
                Some(ActivePending::Choice(PendingChoice {
                    card_id: source_card_id,
                    skill_id: None,
                    unit_instance_id: None,
                    options,
                    continuation: continuation
                        .into_iter()
                        .map(|q| ContinuationEntry {
                            effect: q.effect,
                            source_card_id: q.source_card_id,
                        })
                        .collect(),
                    movement_bonus_applied: false,
                    resolution,
                }));
            Ok(())
        }
        DrainResult::PendingSet => Ok(()),
    }
}

// =============================================================================
// Resolve decompose (public API for RESOLVE_DECOMPOSE action)
// =============================================================================

/// Resolve a pending decompose by picking which hand card to decompose.
///
/// The selected card is removed from hand to `removed_cards` (permanent removal).
/// Based on mode + card color:
/// - Basic: gain 2 crystals of matching color
/// - Powered: gain 1 crystal of each non-matching color
pub fn resolve_decompose(
    state: &mut GameState,
    player_idx: usize,
    hand_index: usize,
) -> Result<(), ResolveChoiceError> {
    // Extract the pending
    let pending = state.players[player_idx]
        .pending
        .active
        .take()
        .ok_or(ResolveChoiceError::NoPendingChoice)?;

    let decompose = match pending {
        ActivePending::Decompose(d) => d,
        other => {
            state.players[player_idx].pending.active = Some(other);
            return Err(ResolveChoiceError::NoPendingChoice);
        }
    };

    // Validate hand_index
    let player = &state.players[player_idx];
    if hand_index >= player.hand.len() {
        state.players[player_idx].pending.active =
            Some(ActivePending::Decompose(decompose));
        return Err(ResolveChoiceError::InvalidChoiceIndex);
    }

    // Validate the card is an action card
    let card_id = &player.hand[hand_index];
    let card_def = realm_data::cards::get_card(card_id.as_str());
    let card_color = card_def.as_ref().and_then(|d| d.color.to_basic_mana_color());

    let is_action = card_def.as_ref().is_some_and(|d| {
        matches!(
            d.card_type,
            DeedCardType::BasicAction | DeedCardType::AdvancedAction
        )
    });

    if !is_action {
        state.players[player_idx].pending.active =
            Some(ActivePending::Decompose(decompose));
        return Err(ResolveChoiceError::InvalidChoiceIndex);
    }

    // Remove card from hand to removed_cards (permanent removal)
    let removed_card = state.players[player_idx].hand.remove(hand_index);
    state.players[player_idx].removed_cards.push(removed_card);

    // Build crystal gain effects based on mode + color
    let mut effects: Vec<CardEffect> = Vec::new();
    if let Some(color) = card_color {
        match decompose.mode {
            EffectMode::Basic => {
                // Gain 2 crystals of matching color
                effects.push(CardEffect::GainCrystal {
                    color: Some(color),
                });
                effects.push(CardEffect::GainCrystal {
                    color: Some(color),
                });
            }
            EffectMode::Powered => {
                // Gain 1 crystal of each non-matching basic color
                for &c in &ALL_BASIC_MANA_COLORS {
                    if c != color {
                        effects.push(CardEffect::GainCrystal { color: Some(c) });
                    }
                }
            }
        }
    }

    // Drain the crystal effects through the queue
    if effects.is_empty() {
        return Ok(());
    }

    let source_card_id = Some(decompose.source_card_id);
    let mut queue = EffectQueue::new();
    queue.push_all(effects, source_card_id.clone());
    match queue.drain(state, player_idx) {
        DrainResult::Complete => Ok(()),
        DrainResult::NeedsChoice {
            options,
            continuation,
            resolution,
        } => {
            state.players[player_idx].pending.active =
                Some(ActivePending::Choice(PendingChoice {
                    card_id: source_card_id,
                    skill_id: None,
                    unit_instance_id: None,
                    options,
                    continuation: continuation
                        .into_iter()
                        .map(|q| ContinuationEntry {
                            effect: q.effect,
                            source_card_id: q.source_card_id,
                        })
                        .collect(),
                    movement_bonus_applied: false,
                    resolution,
                }));
            Ok(())
        }
        DrainResult::PendingSet => Ok(()),
    }
}

/// Discard eligible cards from the player's hand for DiscardForBonus.
fn discard_eligible_cards(
    state: &mut GameState,
    player_idx: usize,
    discard_count: usize,
    filter: DiscardForBonusFilter,
) {
    let player = &mut state.players[player_idx];
    let mut remaining = discard_count;

    match filter {
        DiscardForBonusFilter::WoundOnly => {
            // Discard wounds only
            let mut i = 0;
            while i < player.hand.len() && remaining > 0 {
                if player.hand[i].as_str() == WOUND_CARD_ID {
                    let discarded = player.hand.remove(i);
                    player.discard.push(discarded);
                    remaining -= 1;
                } else {
                    i += 1;
                }
            }
        }
        DiscardForBonusFilter::AnyMaxOneWound => {
            // Discard any cards (up to 1 wound). Prefer non-wounds first.
            // First pass: discard non-wound cards
            let mut i = 0;
            while i < player.hand.len() && remaining > 0 {
                if player.hand[i].as_str() != WOUND_CARD_ID {
                    let discarded = player.hand.remove(i);
                    player.discard.push(discarded);
                    remaining -= 1;
                } else {
                    i += 1;
                }
            }
            // Second pass: discard one wound if still needed
            if remaining > 0 {
                if let Some(wound_idx) = player
                    .hand
                    .iter()
                    .position(|c| c.as_str() == WOUND_CARD_ID)
                {
                    let discarded = player.hand.remove(wound_idx);
                    player.discard.push(discarded);
                }
            }
        }
    }
}

// =============================================================================
// Single effect resolution (dispatch)
// =============================================================================

/// Resolve a single effect. Returns how to proceed.
fn resolve_one(state: &mut GameState, player_idx: usize, effect: &CardEffect) -> ResolveResult {
    match effect {
        // === Atomic effects ===
        CardEffect::GainMove { amount } => {
            state.players[player_idx].move_points += amount;
            ResolveResult::Applied
        }
        CardEffect::GainInfluence { amount } => {
            state.players[player_idx].influence_points += amount;
            ResolveResult::Applied
        }
        CardEffect::GainAttack {
            amount,
            combat_type,
            element,
        } => apply_gain_attack(state, player_idx, *amount, *combat_type, *element),
        CardEffect::GainBlock { amount, element } => {
            apply_gain_block(state, player_idx, *amount, *element)
        }
        CardEffect::GainHealing { amount } => apply_gain_healing(state, player_idx, *amount),
        CardEffect::GainMana { color, amount } => {
            apply_gain_mana(state, player_idx, *color, *amount)
        }
        CardEffect::DrawCards { count } => apply_draw_cards(state, player_idx, *count),
        CardEffect::GainFame { amount } => {
            state.players[player_idx].fame += amount;
            // TODO: level-up threshold check (Phase 3)
            ResolveResult::Applied
        }
        CardEffect::ChangeReputation { amount } => {
            let player = &mut state.players[player_idx];
            let new_rep = (player.reputation as i32 + *amount as i32)
                .clamp(MIN_REPUTATION as i32, MAX_REPUTATION as i32);
            player.reputation = new_rep as i8;
            ResolveResult::Applied
        }
        CardEffect::GainCrystal { color } => apply_gain_crystal(state, player_idx, *color),
        CardEffect::TakeWound => apply_take_wound(state, player_idx),
        CardEffect::Noop => ResolveResult::Skipped,

        // === Multi-step / cost effects ===
        CardEffect::ConvertManaToCrystal => apply_convert_mana_to_crystal(state, player_idx),
        CardEffect::CardBoost { bonus } => apply_card_boost(state, player_idx, *bonus),
        CardEffect::ManaDrawPowered {
            dice_count: _,
            tokens_per_die,
        } => {
            // Simplified: gain one mana token of each basic color per token_per_die.
            // Full implementation would involve die selection from source.
            // For now, offer a color choice for each token gained.
            apply_mana_draw_powered_simplified(state, player_idx, *tokens_per_die)
        }
        CardEffect::DiscardCost {
            count,
            filter_wounds,
            wounds_only,
            then_effect,
        } => apply_discard_cost(state, player_idx, *count, *filter_wounds, *wounds_only, then_effect),
        CardEffect::ApplyModifier {
            effect,
            duration,
            scope,
        } => apply_modifier(state, player_idx, effect, duration, scope),
        CardEffect::GainBlockElement { amount, element } => {
            apply_gain_block(state, player_idx, *amount, *element)
        }
        CardEffect::HandLimitBonus { bonus } => {
            state.players[player_idx].hand_limit += bonus;
            ResolveResult::Applied
        }
        CardEffect::ReadyUnit { max_level } => apply_ready_unit(state, player_idx, *max_level),
        CardEffect::HealUnit { max_level } => apply_heal_unit(state, player_idx, *max_level),
        CardEffect::DiscardForBonus {
            choice_options,
            bonus_per_card,
            max_discards,
            discard_filter,
        } => apply_discard_for_bonus(
            state,
            player_idx,
            choice_options,
            *bonus_per_card,
            *max_discards,
            *discard_filter,
        ),
        CardEffect::Decompose { mode } => apply_decompose(state, player_idx, *mode),
        CardEffect::DiscardForAttack { attacks_by_color } => {
            apply_discard_for_attack(state, player_idx, attacks_by_color)
        }
        CardEffect::PureMagic { amount } => apply_pure_magic(state, player_idx, *amount),
        CardEffect::AttackWithDefeatBonus {
            amount,
            combat_type,
            element,
            reputation_per_defeat,
            fame_per_defeat,
            armor_reduction_per_defeat,
        } => apply_attack_with_defeat_bonus(
            state,
            player_idx,
            *amount,
            *combat_type,
            *element,
            *reputation_per_defeat,
            *fame_per_defeat,
            *armor_reduction_per_defeat,
        ),

        // === Structural effects ===
        CardEffect::Compound { effects } => ResolveResult::Decomposed(effects.clone()),
        CardEffect::Choice { options } => resolve_choice(state, player_idx, options),
        CardEffect::Conditional {
            condition,
            then_effect,
            else_effect,
        } => resolve_conditional(state, player_idx, condition, then_effect, else_effect),
        CardEffect::Scaling {
            factor,
            base_effect,
            bonus_per_count,
            maximum,
        } => resolve_scaling(state, player_idx, factor, base_effect, *bonus_per_count, *maximum),

        // === Combat targeting ===
        CardEffect::SelectCombatEnemy { template } => {
            resolve_select_combat_enemy(state, player_idx, template)
        }

        // === Healing spells ===
        CardEffect::Cure { amount } => resolve_cure(state, player_idx, *amount),
        CardEffect::Disease => resolve_disease(state, player_idx),

        // === Unimplemented complex effects ===
        CardEffect::Other { .. } => ResolveResult::Skipped,
    }
}

// =============================================================================
// Atomic effect handlers
// =============================================================================

fn apply_gain_attack(
    state: &mut GameState,
    player_idx: usize,
    amount: u32,
    combat_type: CombatType,
    element: Element,
) -> ResolveResult {
    // Attack only applies in combat
    if state.combat.is_none() {
        return ResolveResult::Skipped;
    }

    let acc = &mut state.players[player_idx].combat_accumulator.attack;
    match combat_type {
        CombatType::Melee => {
            acc.normal += amount;
            add_to_elemental(&mut acc.normal_elements, element, amount);
        }
        CombatType::Ranged => {
            acc.ranged += amount;
            add_to_elemental(&mut acc.ranged_elements, element, amount);
        }
        CombatType::Siege => {
            acc.siege += amount;
            add_to_elemental(&mut acc.siege_elements, element, amount);
        }
    }
    ResolveResult::Applied
}

fn apply_gain_block(
    state: &mut GameState,
    player_idx: usize,
    amount: u32,
    element: Element,
) -> ResolveResult {
    // Block only applies in combat
    if state.combat.is_none() {
        return ResolveResult::Skipped;
    }

    let acc = &mut state.players[player_idx].combat_accumulator;
    acc.block += amount;
    add_to_elemental(&mut acc.block_elements, element, amount);
    ResolveResult::Applied
}

fn apply_gain_healing(state: &mut GameState, player_idx: usize, amount: u32) -> ResolveResult {
    let player = &mut state.players[player_idx];

    // Count wounds in hand
    let wound_count = player
        .hand
        .iter()
        .filter(|c| c.as_str() == WOUND_CARD_ID)
        .count() as u32;
    let to_heal = amount.min(wound_count);

    // Remove wounds from hand (back to front to preserve indices)
    let mut healed = 0u32;
    player.hand.retain(|c| {
        if healed < to_heal && c.as_str() == WOUND_CARD_ID {
            healed += 1;
            false // remove
        } else {
            true // keep
        }
    });

    player.healing_points += amount.saturating_sub(to_heal);
    player.wounds_healed_from_hand_this_turn += healed;
    ResolveResult::Applied
}

fn apply_gain_mana(
    state: &mut GameState,
    player_idx: usize,
    color: ManaColor,
    amount: u32,
) -> ResolveResult {
    let player = &mut state.players[player_idx];
    for _ in 0..amount {
        player.pure_mana.push(ManaToken {
            color,
            source: ManaTokenSource::Effect,
            cannot_power_spells: false,
        });
    }
    ResolveResult::Applied
}

fn apply_draw_cards(state: &mut GameState, player_idx: usize, count: u32) -> ResolveResult {
    let player = &mut state.players[player_idx];
    let actual_draw = (count as usize).min(player.deck.len());
    let drawn: Vec<CardId> = player.deck.drain(..actual_draw).collect();
    player.hand.extend(drawn);
    ResolveResult::Applied
}

fn apply_gain_crystal(
    state: &mut GameState,
    player_idx: usize,
    color: Option<BasicManaColor>,
) -> ResolveResult {
    match color {
        Some(c) => {
            gain_crystal_color(state, player_idx, c);
            ResolveResult::Applied
        }
        None => {
            // Player must choose which crystal color to gain.
            // Build choice options: one per basic color.
            let options: Vec<CardEffect> = [
                BasicManaColor::Red,
                BasicManaColor::Blue,
                BasicManaColor::Green,
                BasicManaColor::White,
            ]
            .iter()
            .map(|&c| CardEffect::GainCrystal { color: Some(c) })
            .collect();
            ResolveResult::NeedsChoice(options)
        }
    }
}

fn gain_crystal_color(state: &mut GameState, player_idx: usize, color: BasicManaColor) {
    let crystals = &mut state.players[player_idx].crystals;
    let slot = match color {
        BasicManaColor::Red => &mut crystals.red,
        BasicManaColor::Blue => &mut crystals.blue,
        BasicManaColor::Green => &mut crystals.green,
        BasicManaColor::White => &mut crystals.white,
    };
    if *slot < MAX_CRYSTALS_PER_COLOR {
        *slot += 1;
    } else {
        // Overflow: gain mana token instead
        let mana_color = ManaColor::from(color);
        state.players[player_idx].pure_mana.push(ManaToken {
            color: mana_color,
            source: ManaTokenSource::Crystal,
            cannot_power_spells: false,
        });
    }
}

fn apply_take_wound(state: &mut GameState, player_idx: usize) -> ResolveResult {
    let player = &mut state.players[player_idx];
    player.hand.push(CardId::from(WOUND_CARD_ID));
    ResolveResult::Applied
}

// =============================================================================
// Multi-step / cost effect handlers
// =============================================================================

/// Convert one mana token to a crystal of the same color.
/// If no mana tokens, skip. If one color, auto-crystallize. If multiple, offer choice.
fn apply_convert_mana_to_crystal(state: &mut GameState, player_idx: usize) -> ResolveResult {
    let player = &state.players[player_idx];
    if player.pure_mana.is_empty() {
        return ResolveResult::Skipped;
    }

    // Collect unique colors from tokens (only basic colors can crystallize)
    let mut available_colors: Vec<BasicManaColor> = Vec::new();
    for token in &player.pure_mana {
        if let Some(basic) = to_basic_mana_color(token.color) {
            if !available_colors.contains(&basic) {
                available_colors.push(basic);
            }
        }
    }

    if available_colors.is_empty() {
        return ResolveResult::Skipped;
    }

    if available_colors.len() == 1 {
        // Auto-crystallize the only available color
        let color = available_colors[0];
        let player = &mut state.players[player_idx];
        // Remove one token of this color
        if let Some(idx) = player
            .pure_mana
            .iter()
            .position(|t| to_basic_mana_color(t.color) == Some(color))
        {
            player.pure_mana.remove(idx);
        }
        gain_crystal_color(state, player_idx, color);
        ResolveResult::Applied
    } else {
        // Offer choice: one option per available color
        // Token consumption is deferred to ChoiceResolution::CrystallizeConsume
        // which runs when the player picks a color.
        let options: Vec<CardEffect> = available_colors
            .iter()
            .map(|&c| CardEffect::GainCrystal { color: Some(c) })
            .collect();
        ResolveResult::NeedsChoiceWith(options, ChoiceResolution::CrystallizeConsume)
    }
}

/// Helper: convert ManaColor to BasicManaColor if it's a basic color.
fn to_basic_mana_color(color: ManaColor) -> Option<BasicManaColor> {
    match color {
        ManaColor::Red => Some(BasicManaColor::Red),
        ManaColor::Blue => Some(BasicManaColor::Blue),
        ManaColor::Green => Some(BasicManaColor::Green),
        ManaColor::White => Some(BasicManaColor::White),
        _ => None, // Gold and Black are not crystallizable
    }
}

/// Apply CardBoost — find eligible hand cards, present boosted powered effects.
///
/// Eligible cards: BasicAction or AdvancedAction (not wounds, spells, artifacts).
/// - 0 eligible → skip
/// - 1 eligible → auto-select (move to play_area, resolve boosted powered_effect)
/// - N eligible → NeedsChoice with BoostTarget resolution
fn apply_card_boost(state: &mut GameState, player_idx: usize, bonus: u32) -> ResolveResult {
    let player = &state.players[player_idx];

    // Find eligible hand cards: BasicAction or AdvancedAction
    let eligible: Vec<(usize, &CardId)> = player
        .hand
        .iter()
        .enumerate()
        .filter(|(_, card_id)| {
            realm_data::cards::get_card(card_id.as_str()).is_some_and(|def| {
                matches!(
                    def.card_type,
                    DeedCardType::BasicAction | DeedCardType::AdvancedAction
                )
            })
        })
        .collect();

    match eligible.len() {
        0 => ResolveResult::Skipped,
        1 => {
            // Auto-select: move card to play_area, resolve boosted powered_effect
            let (hand_idx, card_id) = eligible[0];
            let boosted_effect = realm_data::cards::get_card(card_id.as_str())
                .map(|def| scale_effect(&def.powered_effect, bonus))
                .unwrap_or(CardEffect::Noop);

            let player = &mut state.players[player_idx];
            let card = player.hand.remove(hand_idx);
            player.play_area.push(card);

            ResolveResult::Decomposed(vec![boosted_effect])
        }
        _ => {
            // Present each eligible card's boosted powered_effect as a choice
            let eligible_hand_indices: Vec<usize> = eligible.iter().map(|(i, _)| *i).collect();
            let options: Vec<CardEffect> = eligible
                .iter()
                .map(|(_, card_id)| {
                    realm_data::cards::get_card(card_id.as_str())
                        .map(|def| scale_effect(&def.powered_effect, bonus))
                        .unwrap_or(CardEffect::Noop)
                })
                .collect();

            ResolveResult::NeedsChoiceWith(
                options,
                ChoiceResolution::BoostTarget {
                    eligible_hand_indices,
                },
            )
        }
    }
}

/// Mana Draw Powered — pick an available source die, then choose a color.
///
/// Finds the first available (not taken, not depleted) die, presents 4 basic
/// color options. The die is marked as taken via ManaDrawTakeDie resolution.
fn apply_mana_draw_powered_simplified(
    state: &mut GameState,
    _player_idx: usize,
    tokens_per_die: u32,
) -> ResolveResult {
    // Find an available die
    let available_die = state
        .source
        .dice
        .iter()
        .find(|d| d.taken_by_player_id.is_none() && !d.is_depleted);

    let die = match available_die {
        Some(d) => d,
        None => return ResolveResult::Skipped,
    };

    let die_id = die.id.clone();

    // Count remaining available dice (excluding the one we're about to take)
    let remaining = state
        .source
        .dice
        .iter()
        .filter(|d| d.taken_by_player_id.is_none() && !d.is_depleted && d.id != die_id)
        .count() as u32;

    // Offer a choice of basic mana colors, each giving `tokens_per_die` tokens
    let options: Vec<CardEffect> = vec![
        CardEffect::GainMana {
            color: ManaColor::Red,
            amount: tokens_per_die,
        },
        CardEffect::GainMana {
            color: ManaColor::Blue,
            amount: tokens_per_die,
        },
        CardEffect::GainMana {
            color: ManaColor::Green,
            amount: tokens_per_die,
        },
        CardEffect::GainMana {
            color: ManaColor::White,
            amount: tokens_per_die,
        },
    ];

    ResolveResult::NeedsChoiceWith(
        options,
        ChoiceResolution::ManaDrawTakeDie {
            die_id,
            tokens_per_die,
            remaining_dice: remaining,
        },
    )
}

/// Apply a discard cost — player must discard a card, then the then_effect resolves.
///
/// For count == 1:
/// - 0 eligible cards → skip
/// - 1 eligible card → auto-discard and resolve then_effect
/// - N eligible cards → present choice with DiscardThenContinue resolution
fn apply_discard_cost(
    state: &mut GameState,
    player_idx: usize,
    count: u32,
    filter_wounds: bool,
    wounds_only: bool,
    then_effect: &CardEffect,
) -> ResolveResult {
    let player = &state.players[player_idx];

    // Build eligible hand indices
    let eligible_indices: Vec<usize> = player
        .hand
        .iter()
        .enumerate()
        .filter(|(_, c)| {
            let is_wound = c.as_str() == WOUND_CARD_ID;
            if wounds_only {
                is_wound
            } else if filter_wounds {
                !is_wound
            } else {
                true
            }
        })
        .map(|(i, _)| i)
        .collect();

    if count == 1 {
        match eligible_indices.len() {
            0 => ResolveResult::Skipped,
            1 => {
                // Auto-discard the only eligible card
                let idx = eligible_indices[0];
                let player = &mut state.players[player_idx];
                let discarded = player.hand.remove(idx);
                player.discard.push(discarded);
                ResolveResult::Decomposed(vec![then_effect.clone()])
            }
            _ => {
                // Present each eligible card as a choice option.
                // Each option leads to the same then_effect; the card is discarded
                // via DiscardThenContinue resolution.
                let options: Vec<CardEffect> = eligible_indices
                    .iter()
                    .map(|_| then_effect.clone())
                    .collect();
                ResolveResult::NeedsChoiceWith(
                    options,
                    ChoiceResolution::DiscardThenContinue { eligible_indices },
                )
            }
        }
    } else {
        // Multi-card discard: not yet implemented, skip for Phase 2
        ResolveResult::Skipped
    }
}

/// Apply any modifier effect (rule overrides, terrain costs, combat bonuses, etc.).
fn apply_modifier(
    state: &mut GameState,
    player_idx: usize,
    effect: &ModifierEffect,
    duration: &ModifierDuration,
    scope: &ModifierScope,
) -> ResolveResult {
    let player_id = state.players[player_idx].id.clone();
    let modifier_count = state.active_modifiers.len();
    let modifier_id = format!(
        "mod_{}_r{}_t{}",
        modifier_count, state.round, state.current_player_index
    );
    // Determine the source card from the last card played (top of play area),
    // falling back to a generic source.
    let source_card_id = state.players[player_idx]
        .play_area
        .last()
        .cloned()
        .unwrap_or_else(|| CardId::from("unknown"));
    state.active_modifiers.push(ActiveModifier {
        id: ModifierId::from(modifier_id.as_str()),
        source: ModifierSource::Card {
            card_id: source_card_id,
            player_id: player_id.clone(),
        },
        duration: *duration,
        scope: scope.clone(),
        effect: effect.clone(),
        created_at_round: state.round,
        created_by_player_id: player_id,
    });
    ResolveResult::Applied
}

// =============================================================================
// Unit effect handlers
// =============================================================================

/// Ready a spent unit at or below the given level.
/// 0 eligible → skip. 1 eligible → auto-ready. N eligible → NeedsChoice.
///
/// The choice options are `GainHealing { amount: 0 }` as a sentinel — the actual
/// side effect (readying the unit) is done via `ReadyUnitTarget` resolution.
/// To avoid a new ChoiceResolution variant, we use a simpler approach:
/// each option is a `Noop` that carries metadata via the `ReadyUnitTarget` resolution.
///
/// Actually, to keep it simple and self-contained, we resolve inline:
/// - Build choice options as `CardEffect::Noop` (one per eligible unit)
/// - Use `ChoiceResolution::ReadyUnitTarget { eligible_unit_indices }` to track which
///   unit to ready when the player picks an option.
fn apply_ready_unit(state: &mut GameState, player_idx: usize, max_level: u8) -> ResolveResult {
    let player = &state.players[player_idx];

    // Find spent units at or below max_level
    let eligible: Vec<usize> = player
        .units
        .iter()
        .enumerate()
        .filter(|(_, u)| u.state == UnitState::Spent && u.level <= max_level)
        .map(|(i, _)| i)
        .collect();

    match eligible.len() {
        0 => ResolveResult::Skipped,
        1 => {
            // Auto-ready the single eligible unit
            let unit_idx = eligible[0];
            state.players[player_idx].units[unit_idx].state = UnitState::Ready;
            ResolveResult::Applied
        }
        _ => {
            // Present choice: one Noop per eligible unit
            // Resolution side-effect readies the selected unit
            let options: Vec<CardEffect> = eligible.iter().map(|_| CardEffect::Noop).collect();
            let eligible_indices = eligible;
            ResolveResult::NeedsChoiceWith(
                options,
                ChoiceResolution::ReadyUnitTarget {
                    eligible_unit_indices: eligible_indices,
                },
            )
        }
    }
}

fn apply_heal_unit(state: &mut GameState, player_idx: usize, max_level: u8) -> ResolveResult {
    let player = &state.players[player_idx];

    // Find wounded units at or below max_level
    let eligible: Vec<usize> = player
        .units
        .iter()
        .enumerate()
        .filter(|(_, u)| u.wounded && u.level <= max_level)
        .map(|(i, _)| i)
        .collect();

    match eligible.len() {
        0 => ResolveResult::Skipped,
        1 => {
            let unit_idx = eligible[0];
            state.players[player_idx].units[unit_idx].wounded = false;
            ResolveResult::Applied
        }
        _ => {
            let options: Vec<CardEffect> = eligible.iter().map(|_| CardEffect::Noop).collect();
            ResolveResult::NeedsChoiceWith(
                options,
                ChoiceResolution::HealUnitTarget {
                    eligible_unit_indices: eligible,
                },
            )
        }
    }
}

fn apply_discard_for_bonus(
    state: &mut GameState,
    player_idx: usize,
    choice_options: &[CardEffect],
    bonus_per_card: u32,
    max_discards: u32,
    discard_filter: DiscardForBonusFilter,
) -> ResolveResult {
    use realm_types::pending::PendingDiscardForBonus;

    // Filter to resolvable options only
    let resolvable: Vec<CardEffect> = choice_options
        .iter()
        .filter(|opt| is_resolvable(state, player_idx, opt))
        .cloned()
        .collect();

    if resolvable.is_empty() {
        return ResolveResult::Skipped;
    }

    // Get the source card from the play area (most recently played)
    let source_card_id = state.players[player_idx]
        .play_area
        .last()
        .cloned()
        .unwrap_or_else(|| CardId::from("unknown"));

    // Set ActivePending::DiscardForBonus directly
    let pending = PendingDiscardForBonus {
        source_card_id,
        choice_options: resolvable,
        bonus_per_card,
        max_discards,
        discard_filter,
    };
    state.players[player_idx].pending.active =
        Some(ActivePending::DiscardForBonus(pending));

    // Return PendingSet to pause the queue
    ResolveResult::PendingSet
}

/// Apply Decompose effect — set pending so player can select which card to decompose.
///
/// Finds eligible hand cards (BasicAction or AdvancedAction), presents as pending.
/// 0 eligible → skip. 1 eligible → auto-select (the player still sees pending).
/// N eligible → pending with all options.
fn apply_decompose(
    state: &mut GameState,
    player_idx: usize,
    mode: EffectMode,
) -> ResolveResult {
    let player = &state.players[player_idx];

    // Find eligible hand cards: BasicAction or AdvancedAction (not wounds, spells, artifacts)
    let has_eligible = player.hand.iter().any(|card_id| {
        realm_data::cards::get_card(card_id.as_str()).is_some_and(|def| {
            matches!(
                def.card_type,
                DeedCardType::BasicAction | DeedCardType::AdvancedAction
            )
        })
    });

    if !has_eligible {
        return ResolveResult::Skipped;
    }

    // Get the source card from the play area
    let source_card_id = state.players[player_idx]
        .play_area
        .last()
        .cloned()
        .unwrap_or_else(|| CardId::from("unknown"));

    // Set ActivePending::Decompose
    state.players[player_idx].pending.active =
        Some(ActivePending::Decompose(PendingDecompose {
            source_card_id,
            mode,
        }));

    ResolveResult::PendingSet
}

/// Apply DiscardForAttack effect — discard an action card, then gain attack based on card color.
///
/// Finds eligible hand cards (BasicAction or AdvancedAction), presents as choice.
/// Each choice option is the attack effect for the card's color.
/// 0 eligible → skip. 1 eligible → auto-discard + resolve. N → NeedsChoice.
fn apply_discard_for_attack(
    state: &mut GameState,
    player_idx: usize,
    attacks_by_color: &[(BasicManaColor, CardEffect)],
) -> ResolveResult {
    if state.combat.is_none() {
        return ResolveResult::Skipped;
    }

    let player = &state.players[player_idx];

    // Find eligible hand cards and their color-based attack effects
    let eligible: Vec<(usize, CardEffect)> = player
        .hand
        .iter()
        .enumerate()
        .filter_map(|(idx, card_id)| {
            let def = realm_data::cards::get_card(card_id.as_str())?;
            if !matches!(
                def.card_type,
                DeedCardType::BasicAction | DeedCardType::AdvancedAction
            ) {
                return None;
            }
            let basic_color = def.color.to_basic_mana_color()?;
            let attack = attacks_by_color
                .iter()
                .find(|(c, _)| *c == basic_color)
                .map(|(_, eff)| eff.clone())?;
            Some((idx, attack))
        })
        .collect();

    match eligible.len() {
        0 => ResolveResult::Skipped,
        1 => {
            // Auto-discard the only eligible card
            let (hand_idx, attack_effect) = eligible.into_iter().next().unwrap();
            let player = &mut state.players[player_idx];
            let discarded = player.hand.remove(hand_idx);
            player.discard.push(discarded);
            ResolveResult::Decomposed(vec![attack_effect])
        }
        _ => {
            // Present each eligible card's attack as a choice
            let eligible_indices: Vec<usize> = eligible.iter().map(|(i, _)| *i).collect();
            let options: Vec<CardEffect> = eligible.into_iter().map(|(_, eff)| eff).collect();
            ResolveResult::NeedsChoiceWith(
                options,
                ChoiceResolution::DiscardThenContinue { eligible_indices },
            )
        }
    }
}

/// Apply Pure Magic effect — pay a mana token, gain effect based on its color.
///
/// Green→Move, White→Influence, Blue→Block(combat), Red→Attack(combat).
/// Gold allows all four choices. Token consumption via PureMagicConsume resolution.
fn apply_pure_magic(
    state: &mut GameState,
    player_idx: usize,
    amount: u32,
) -> ResolveResult {
    let player = &state.players[player_idx];
    let in_combat = state.combat.is_some();

    if player.pure_mana.is_empty() {
        return ResolveResult::Skipped;
    }

    // Collect unique basic colors from tokens
    let mut available_colors: Vec<BasicManaColor> = Vec::new();
    let mut has_gold = false;
    for token in &player.pure_mana {
        match token.color {
            ManaColor::Gold => {
                has_gold = true;
            }
            ManaColor::Red | ManaColor::Blue | ManaColor::Green | ManaColor::White => {
                if let Some(basic) = to_basic_mana_color(token.color) {
                    if !available_colors.contains(&basic) {
                        available_colors.push(basic);
                    }
                }
            }
            _ => {} // Black: not usable for pure magic
        }
    }

    // Build parallel arrays: options (gain effects) + token_colors (which token to consume)
    let mut options: Vec<CardEffect> = Vec::new();
    let mut token_colors: Vec<ManaColor> = Vec::new();

    for &basic_color in &available_colors {
        if let Some(eff) = pure_magic_effect_for_color(basic_color, amount, in_combat) {
            options.push(eff);
            token_colors.push(ManaColor::from(basic_color));
        }
    }

    // Gold: one option per basic color not already covered
    if has_gold {
        for &basic_color in &ALL_BASIC_MANA_COLORS {
            if available_colors.contains(&basic_color) {
                continue;
            }
            if let Some(eff) = pure_magic_effect_for_color(basic_color, amount, in_combat) {
                options.push(eff);
                token_colors.push(ManaColor::Gold);
            }
        }
    }

    match options.len() {
        0 => ResolveResult::Skipped,
        1 => {
            // Auto-select: consume the token and decompose
            let color = token_colors[0];
            let player = &mut state.players[player_idx];
            if let Some(idx) = player.pure_mana.iter().position(|t| t.color == color) {
                player.pure_mana.remove(idx);
            }
            ResolveResult::Decomposed(options)
        }
        _ => ResolveResult::NeedsChoiceWith(
            options,
            ChoiceResolution::PureMagicConsume { token_colors },
        ),
    }
}

/// Get the effect for Pure Magic given a color.
/// Green→Move, White→Influence, Blue→Block(combat only), Red→Attack(combat only).
fn pure_magic_effect_for_color(
    color: BasicManaColor,
    amount: u32,
    in_combat: bool,
) -> Option<CardEffect> {
    match color {
        BasicManaColor::Green => Some(CardEffect::GainMove { amount }),
        BasicManaColor::White => Some(CardEffect::GainInfluence { amount }),
        BasicManaColor::Blue => {
            if in_combat {
                Some(CardEffect::GainBlock {
                    amount,
                    element: Element::Physical,
                })
            } else {
                None
            }
        }
        BasicManaColor::Red => {
            if in_combat {
                Some(CardEffect::GainAttack {
                    amount,
                    combat_type: CombatType::Melee,
                    element: Element::Physical,
                })
            } else {
                None
            }
        }
    }
}

fn apply_attack_with_defeat_bonus(
    state: &mut GameState,
    player_idx: usize,
    amount: u32,
    combat_type: CombatType,
    element: Element,
    reputation_per_defeat: i32,
    fame_per_defeat: u32,
    armor_reduction_per_defeat: u32,
) -> ResolveResult {
    // Step 1: Apply the attack via normal GainAttack logic
    let attack_result = apply_gain_attack(state, player_idx, amount, combat_type, element);
    if matches!(attack_result, ResolveResult::Skipped) {
        return ResolveResult::Skipped;
    }

    // Step 2: Register a tracker for per-enemy-defeated bonuses
    let tracker = AttackDefeatFameTracker {
        source_card_id: None, // Set by the queue's source tracking
        attack_type: combat_type,
        element: AttackElement::Physical,
        amount,
        remaining: amount,
        fame: 0,
        reputation_per_defeat: if reputation_per_defeat != 0 {
            Some(reputation_per_defeat)
        } else {
            None
        },
        fame_per_defeat: if fame_per_defeat != 0 {
            Some(fame_per_defeat)
        } else {
            None
        },
        armor_reduction_per_defeat: if armor_reduction_per_defeat != 0 {
            Some(armor_reduction_per_defeat)
        } else {
            None
        },
    };

    // Add to deferred pending as AttackDefeatFame
    let player = &mut state.players[player_idx];
    let mut found = false;
    for d in player.pending.deferred.iter_mut() {
        if let DeferredPending::AttackDefeatFame(trackers) = d {
            if !trackers.is_full() {
                trackers.push(tracker.clone());
            }
            found = true;
            break;
        }
    }
    if !found && !player.pending.deferred.is_full() {
        let mut trackers = arrayvec::ArrayVec::new();
        trackers.push(tracker);
        player
            .pending
            .deferred
            .push(DeferredPending::AttackDefeatFame(trackers));
    }

    ResolveResult::Applied
}

// =============================================================================
// Structural effect handlers
// =============================================================================

/// Handle a Choice effect by filtering resolvable options.
fn resolve_choice(state: &GameState, player_idx: usize, options: &[CardEffect]) -> ResolveResult {
    let resolvable: Vec<CardEffect> = options
        .iter()
        .filter(|opt| is_resolvable(state, player_idx, opt))
        .cloned()
        .collect();

    match resolvable.len() {
        0 => ResolveResult::Skipped,
        1 => ResolveResult::Decomposed(resolvable),
        _ => ResolveResult::NeedsChoice(resolvable),
    }
}

/// Evaluate a conditional and decompose into the appropriate branch.
fn resolve_conditional(
    state: &GameState,
    player_idx: usize,
    condition: &EffectCondition,
    then_effect: &CardEffect,
    else_effect: &Option<Box<CardEffect>>,
) -> ResolveResult {
    if evaluate_condition(state, player_idx, condition) {
        ResolveResult::Decomposed(vec![then_effect.clone()])
    } else if let Some(else_eff) = else_effect {
        ResolveResult::Decomposed(vec![*else_eff.clone()])
    } else {
        ResolveResult::Skipped
    }
}

/// Evaluate a scaling factor and produce a scaled version of the base effect.
fn resolve_scaling(
    state: &GameState,
    player_idx: usize,
    factor: &ScalingFactor,
    base_effect: &CardEffect,
    bonus_per_count: Option<u32>,
    maximum: Option<u32>,
) -> ResolveResult {
    let count = evaluate_scaling(state, player_idx, factor);
    let per_count = bonus_per_count.unwrap_or(1);
    let bonus = count * per_count;
    let bonus = bonus.min(maximum.unwrap_or(u32::MAX));
    let scaled = scale_effect(base_effect, bonus);
    ResolveResult::Decomposed(vec![scaled])
}

// =============================================================================
// Condition evaluator
// =============================================================================

/// Evaluate a condition against the current game state for a player.
fn evaluate_condition(state: &GameState, player_idx: usize, condition: &EffectCondition) -> bool {
    let player = &state.players[player_idx];

    match condition {
        EffectCondition::TimeOfDay { time } => state.time_of_day == *time,

        EffectCondition::InCombat => state.combat.is_some(),

        EffectCondition::InPhase { phases } => state
            .combat
            .as_ref()
            .is_some_and(|c| phases.contains(&c.phase)),

        EffectCondition::OnTerrain { terrain } => player.position.as_ref().is_some_and(|pos| {
            state
                .map
                .hexes
                .get(&pos.key())
                .is_some_and(|hex| terrain.contains(&hex.terrain))
        }),

        EffectCondition::BlockedSuccessfully => state
            .combat
            .as_ref()
            .is_some_and(|c| c.all_damage_blocked_this_phase),

        EffectCondition::EnemyDefeatedThisCombat => state
            .combat
            .as_ref()
            .is_some_and(|c| c.enemies.iter().any(|e| e.is_defeated)),

        EffectCondition::ManaUsedThisTurn { color } => match color {
            Some(c) => player.mana_used_this_turn.contains(c),
            None => !player.mana_used_this_turn.is_empty(),
        },

        EffectCondition::HasWoundsInHand => player.hand.iter().any(|c| c.as_str() == WOUND_CARD_ID),

        EffectCondition::NoUnitRecruitedThisTurn => !player
            .flags
            .contains(PlayerFlags::HAS_RECRUITED_UNIT_THIS_TURN),

        EffectCondition::LowestFame => {
            let player_fame = player.fame;
            let min_fame = state.players.iter().map(|p| p.fame).min().unwrap_or(0);
            player_fame <= min_fame
        }

        EffectCondition::IsNightOrUnderground => {
            state.time_of_day == TimeOfDay::Night
                || state.combat.as_ref().is_some_and(|c| c.night_mana_rules)
        }

        EffectCondition::InInteraction => {
            // Simplified: check if player is at a site (full check needs site properties)
            player.position.as_ref().is_some_and(|pos| {
                state
                    .map
                    .hexes
                    .get(&pos.key())
                    .and_then(|hex| hex.site.as_ref())
                    .is_some()
            })
        }

        EffectCondition::AtFortifiedSite => {
            // Simplified: check if player is at keep, mage tower, or city
            player.position.as_ref().is_some_and(|pos| {
                state
                    .map
                    .hexes
                    .get(&pos.key())
                    .and_then(|hex| hex.site.as_ref())
                    .is_some_and(|site| {
                        matches!(
                            site.site_type,
                            SiteType::Keep | SiteType::MageTower | SiteType::City
                        )
                    })
            })
        }

        EffectCondition::AtMagicalGlade => player.position.as_ref().is_some_and(|pos| {
            state
                .map
                .hexes
                .get(&pos.key())
                .and_then(|hex| hex.site.as_ref())
                .is_some_and(|site| site.site_type == SiteType::MagicalGlade)
        }),
    }
}

// =============================================================================
// Scaling evaluator
// =============================================================================

/// Evaluate a scaling factor and return the multiplier count.
fn evaluate_scaling(state: &GameState, player_idx: usize, factor: &ScalingFactor) -> u32 {
    let player = &state.players[player_idx];

    match factor {
        ScalingFactor::PerEnemy => state
            .combat
            .as_ref()
            .map(|c| {
                c.enemies
                    .iter()
                    .filter(|e| !e.is_defeated && e.summoned_by_instance_id.is_none())
                    .count() as u32
            })
            .unwrap_or(0),

        ScalingFactor::PerWoundInHand => player
            .hand
            .iter()
            .filter(|c| c.as_str() == WOUND_CARD_ID)
            .count() as u32,

        ScalingFactor::PerWoundThisCombat => state
            .combat
            .as_ref()
            .map(|c| c.wounds_this_combat)
            .unwrap_or(0),

        ScalingFactor::PerUnit { filter } => count_units_with_filter(player, filter.as_ref()),

        ScalingFactor::PerCrystalColor => {
            let c = &player.crystals;
            let mut count = 0u32;
            if c.red > 0 {
                count += 1;
            }
            if c.blue > 0 {
                count += 1;
            }
            if c.green > 0 {
                count += 1;
            }
            if c.white > 0 {
                count += 1;
            }
            count
        }

        ScalingFactor::PerCompleteCrystalSet => {
            let c = &player.crystals;
            c.red.min(c.blue).min(c.green).min(c.white) as u32
        }

        ScalingFactor::PerEmptyCommandToken => {
            let used = player.units.len() as u32;
            player.command_tokens.saturating_sub(used)
        }

        ScalingFactor::PerWoundTotal => {
            let in_hand = player
                .hand
                .iter()
                .filter(|c| c.as_str() == WOUND_CARD_ID)
                .count() as u32;
            let wounded_units = player.units.iter().filter(|u| u.wounded).count() as u32;
            in_hand + wounded_units
        }

        ScalingFactor::PerEnemyBlocked => state
            .combat
            .as_ref()
            .map(|c| {
                c.enemies
                    .iter()
                    .filter(|e| e.is_blocked && e.summoned_by_instance_id.is_none())
                    .count() as u32
            })
            .unwrap_or(0),
    }
}

fn count_units_with_filter(player: &PlayerState, filter: Option<&UnitFilter>) -> u32 {
    match filter {
        None => {
            // Default: count non-wounded units
            player.units.iter().filter(|u| !u.wounded).count() as u32
        }
        Some(f) => player
            .units
            .iter()
            .filter(|u| {
                if let Some(wounded) = f.wounded {
                    if u.wounded != wounded {
                        return false;
                    }
                }
                if let Some(required_state) = &f.state {
                    if u.state != *required_state {
                        return false;
                    }
                }
                true
            })
            .count() as u32,
    }
}

// =============================================================================
// Cure / Disease resolvers
// =============================================================================

/// Cure: remove up to `amount` wounds from hand, draw 1 card per wound removed.
fn resolve_cure(state: &mut GameState, player_idx: usize, amount: u32) -> ResolveResult {
    let player = &mut state.players[player_idx];

    // Remove wounds from hand (up to amount)
    let mut wounds_removed = 0u32;
    let mut i = 0;
    while i < player.hand.len() && wounds_removed < amount {
        if player.hand[i].as_str() == WOUND_CARD_ID {
            player.hand.remove(i);
            wounds_removed += 1;
        } else {
            i += 1;
        }
    }

    if wounds_removed == 0 {
        return ResolveResult::Skipped;
    }

    // Draw 1 card per wound healed
    let actual_draw = (wounds_removed as usize).min(player.deck.len());
    let drawn: Vec<CardId> = player.deck.drain(..actual_draw).collect();
    player.hand.extend(drawn);

    ResolveResult::Applied
}

/// Disease: for each fully-blocked enemy, set armor to 1 for rest of combat.
fn resolve_disease(state: &mut GameState, player_idx: usize) -> ResolveResult {
    use realm_types::modifier::{
        ActiveModifier, EnemyStat as ModEnemyStat, ModifierDuration, ModifierEffect,
        ModifierScope, ModifierSource,
    };
    use realm_types::ids::ModifierId;

    let combat = match state.combat.as_ref() {
        Some(c) => c,
        None => return ResolveResult::Skipped,
    };

    let player_id = state.players[player_idx].id.clone();

    // Find all enemies where ALL attacks are blocked (is_blocked = true)
    let blocked_enemy_ids: Vec<String> = combat
        .enemies
        .iter()
        .filter(|e| !e.is_defeated && !e.is_summoner_hidden && e.is_blocked)
        .map(|e| e.instance_id.as_str().to_string())
        .collect();

    if blocked_enemy_ids.is_empty() {
        return ResolveResult::Skipped;
    }

    // For each blocked enemy, push a modifier that sets armor to minimum 0 with a
    // large negative change (effectively reducing to 1).
    // We model this as EnemyStat Armor with a very large negative amount and minimum 1.
    for enemy_id in &blocked_enemy_ids {
        let modifier_count = state.active_modifiers.len();
        let modifier_id = format!(
            "mod_{}_r{}_t{}",
            modifier_count, state.round, state.current_player_index
        );
        state.active_modifiers.push(ActiveModifier {
            id: ModifierId::from(modifier_id.as_str()),
            source: ModifierSource::Card {
                card_id: CardId::from("cure"),
                player_id: player_id.clone(),
            },
            duration: ModifierDuration::Combat,
            scope: ModifierScope::OneEnemy {
                enemy_id: enemy_id.clone(),
            },
            effect: ModifierEffect::EnemyStat {
                stat: ModEnemyStat::Armor,
                amount: -100, // large enough to reduce any armor to minimum
                minimum: 1,
                attack_index: None,
                per_resistance: false,
                fortified_amount: None,
            },
            created_at_round: state.round,
            created_by_player_id: player_id.clone(),
        });
    }

    ResolveResult::Applied
}

// =============================================================================
// SelectCombatEnemy resolver (card-sourced)
// =============================================================================

/// Resolve a SelectCombatEnemy effect from a card.
/// Filters eligible enemies, auto-resolves if 0 or 1, or signals pending if N.
fn resolve_select_combat_enemy(
    state: &mut GameState,
    player_idx: usize,
    template: &realm_types::pending::SelectEnemyTemplate,
) -> ResolveResult {
    let combat = match state.combat.as_ref() {
        Some(c) => c,
        None => return ResolveResult::Skipped,
    };

    // Filter eligible enemies (same logic as unit-ability version in action_pipeline)
    let mut eligible_ids: Vec<String> = Vec::new();
    for enemy in &combat.enemies {
        if enemy.is_defeated || enemy.is_summoner_hidden {
            continue;
        }

        let def = match realm_data::enemies::get_enemy(enemy.enemy_id.as_str()) {
            Some(d) => d,
            None => continue,
        };

        // Apply template filters
        if template.exclude_fortified
            && crate::combat_resolution::is_effectively_fortified(
                def,
                enemy.instance_id.as_str(),
                combat.is_at_fortified_site,
                &state.active_modifiers,
            )
        {
            continue;
        }

        if template.exclude_arcane_immune
            && crate::combat_resolution::has_ability(def, EnemyAbilityType::ArcaneImmunity)
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
            // No eligible enemies — effect fizzles
            ResolveResult::Skipped
        }
        1 => {
            // Auto-resolve with the single eligible enemy
            let uid: Option<realm_types::ids::UnitInstanceId> = None;
            if let Err(_) = crate::action_pipeline::apply_select_enemy_effects_pub(
                state, player_idx, &uid, &eligible_ids[0], template,
            ) {
                return ResolveResult::Skipped;
            }
            ResolveResult::Applied
        }
        _ => {
            // Multiple eligible — need player to choose
            ResolveResult::NeedsSelectCombatEnemy {
                eligible_enemy_ids: eligible_ids,
                template: *template,
            }
        }
    }
}

// =============================================================================
// Resolvability check
// =============================================================================

/// Check if an effect can currently be resolved (used for Choice filtering).
pub(crate) fn is_resolvable(state: &GameState, player_idx: usize, effect: &CardEffect) -> bool {
    let player = &state.players[player_idx];

    match effect {
        // Always resolvable
        CardEffect::GainMove { .. }
        | CardEffect::GainInfluence { .. }
        | CardEffect::GainFame { .. }
        | CardEffect::ChangeReputation { .. }
        | CardEffect::GainMana { .. }
        | CardEffect::GainCrystal { .. }
        | CardEffect::TakeWound
        | CardEffect::Noop => true,

        // Only in combat
        CardEffect::GainAttack { .. }
        | CardEffect::GainBlock { .. }
        | CardEffect::GainBlockElement { .. }
        | CardEffect::AttackWithDefeatBonus { .. } => state.combat.is_some(),

        // Need wounds in hand
        CardEffect::GainHealing { .. } => {
            player.hand.iter().any(|c| c.as_str() == WOUND_CARD_ID)
                || player.units.iter().any(|u| u.wounded)
        }

        // Need cards in deck
        CardEffect::DrawCards { .. } => !player.deck.is_empty(),

        // Compound: at least one sub-effect resolvable
        CardEffect::Compound { effects } => {
            effects.iter().any(|e| is_resolvable(state, player_idx, e))
        }

        // Choice: at least one option resolvable
        CardEffect::Choice { options } => {
            options.iter().any(|o| is_resolvable(state, player_idx, o))
        }

        // Conditional/Scaling: always resolvable (condition/factor evaluated at resolve time)
        CardEffect::Conditional { .. } | CardEffect::Scaling { .. } => true,

        // Multi-step effects: resolvable by default (will be filtered at resolve time)
        CardEffect::ConvertManaToCrystal
        | CardEffect::CardBoost { .. }
        | CardEffect::ManaDrawPowered { .. }
        | CardEffect::DiscardCost { .. }
        | CardEffect::ApplyModifier { .. }
        | CardEffect::HandLimitBonus { .. }
        | CardEffect::ReadyUnit { .. }
        | CardEffect::HealUnit { .. }
        | CardEffect::DiscardForBonus { .. }
        | CardEffect::Decompose { .. }
        | CardEffect::DiscardForAttack { .. }
        | CardEffect::PureMagic { .. } => true,

        // SelectCombatEnemy: only in combat
        CardEffect::SelectCombatEnemy { .. } => state.combat.is_some(),

        // Cure: need wounds in hand
        CardEffect::Cure { .. } => player.hand.iter().any(|c| c.as_str() == WOUND_CARD_ID),

        // Disease: only in combat (sets armor for blocked enemies)
        CardEffect::Disease => state.combat.is_some(),

        // Unknown: default resolvable
        CardEffect::Other { .. } => true,
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Add amount to the appropriate element field of ElementalValues.
fn add_to_elemental(values: &mut ElementalValues, element: Element, amount: u32) {
    match element {
        Element::Physical => values.physical += amount,
        Element::Fire => values.fire += amount,
        Element::Ice => values.ice += amount,
        Element::ColdFire => values.cold_fire += amount,
    }
}

/// Create a scaled copy of an effect with bonus added to its amount.
fn scale_effect(effect: &CardEffect, bonus: u32) -> CardEffect {
    match effect {
        CardEffect::GainMove { amount } => CardEffect::GainMove {
            amount: amount + bonus,
        },
        CardEffect::GainInfluence { amount } => CardEffect::GainInfluence {
            amount: amount + bonus,
        },
        CardEffect::GainAttack {
            amount,
            combat_type,
            element,
        } => CardEffect::GainAttack {
            amount: amount + bonus,
            combat_type: *combat_type,
            element: *element,
        },
        CardEffect::GainBlock { amount, element } => CardEffect::GainBlock {
            amount: amount + bonus,
            element: *element,
        },
        CardEffect::GainHealing { amount } => CardEffect::GainHealing {
            amount: amount + bonus,
        },
        CardEffect::GainMana { color, amount } => CardEffect::GainMana {
            color: *color,
            amount: amount + bonus,
        },
        CardEffect::DrawCards { count } => CardEffect::DrawCards {
            count: count + bonus,
        },
        CardEffect::GainFame { amount } => CardEffect::GainFame {
            amount: amount + bonus,
        },
        CardEffect::ChangeReputation { amount } => CardEffect::ChangeReputation {
            amount: amount + bonus as i32,
        },
        CardEffect::AttackWithDefeatBonus {
            amount,
            combat_type,
            element,
            reputation_per_defeat,
            fame_per_defeat,
            armor_reduction_per_defeat,
        } => CardEffect::AttackWithDefeatBonus {
            amount: amount + bonus,
            combat_type: *combat_type,
            element: *element,
            reputation_per_defeat: *reputation_per_defeat,
            fame_per_defeat: *fame_per_defeat,
            armor_reduction_per_defeat: *armor_reduction_per_defeat,
        },
        // Recursive structural handling
        CardEffect::Compound { effects } => CardEffect::Compound {
            effects: effects.iter().map(|e| scale_effect(e, bonus)).collect(),
        },
        CardEffect::Choice { options } => CardEffect::Choice {
            options: options.iter().map(|o| scale_effect(o, bonus)).collect(),
        },
        CardEffect::Conditional {
            condition,
            then_effect,
            else_effect,
        } => CardEffect::Conditional {
            condition: condition.clone(),
            then_effect: Box::new(scale_effect(then_effect, bonus)),
            else_effect: else_effect
                .as_ref()
                .map(|e| Box::new(scale_effect(e, bonus))),
        },
        CardEffect::Scaling {
            factor,
            base_effect,
            bonus_per_count,
            maximum,
        } => CardEffect::Scaling {
            factor: factor.clone(),
            base_effect: Box::new(scale_effect(base_effect, bonus)),
            bonus_per_count: *bonus_per_count,
            maximum: *maximum,
        },
        // For effects without a simple "amount", return unchanged.
        other => other.clone(),
    }
}

// =============================================================================
// Tests
// =============================================================================
