//! Pure functions for elemental math and combat resolution.
//!
//! All functions are stateless — they compute results from enemy definitions,
//! accumulated values, and combat phase. No GameState mutation happens here.

use std::collections::BTreeMap;

use realm_data::enemies::{get_enemy, EnemyDefinition};
use realm_types::enums::*;
use realm_types::ids::CombatInstanceId;
use realm_types::state::{CombatEnemy, ElementalValues};

// =============================================================================
// Elemental attack math
// =============================================================================

/// Check if an attack element is resisted by the given resistance set.
///
/// - Physical ← Physical resistance
/// - Fire ← Fire resistance
/// - Ice ← Ice resistance
/// - ColdFire ← BOTH Fire AND Ice resistance present
pub fn is_attack_resisted(element: Element, resistances: &[ResistanceElement]) -> bool {
    match element {
        Element::Physical => resistances.contains(&ResistanceElement::Physical),
        Element::Fire => resistances.contains(&ResistanceElement::Fire),
        Element::Ice => resistances.contains(&ResistanceElement::Ice),
        Element::ColdFire => {
            resistances.contains(&ResistanceElement::Fire)
                && resistances.contains(&ResistanceElement::Ice)
        }
    }
}

/// Calculate effective attack value after resistance halving.
///
/// Each elemental component is checked against the combined resistance set.
/// Resisted elements are halved (floor division). Non-resisted keep full value.
pub fn calculate_effective_attack(
    attack_elements: &ElementalValues,
    resistances: &[ResistanceElement],
) -> u32 {
    let mut total = 0u32;

    if attack_elements.physical > 0 {
        if is_attack_resisted(Element::Physical, resistances) {
            total += attack_elements.physical / 2;
        } else {
            total += attack_elements.physical;
        }
    }

    if attack_elements.fire > 0 {
        if is_attack_resisted(Element::Fire, resistances) {
            total += attack_elements.fire / 2;
        } else {
            total += attack_elements.fire;
        }
    }

    if attack_elements.ice > 0 {
        if is_attack_resisted(Element::Ice, resistances) {
            total += attack_elements.ice / 2;
        } else {
            total += attack_elements.ice;
        }
    }

    if attack_elements.cold_fire > 0 {
        if is_attack_resisted(Element::ColdFire, resistances) {
            total += attack_elements.cold_fire / 2;
        } else {
            total += attack_elements.cold_fire;
        }
    }

    total
}

/// Combine resistances from all target enemies (union).
/// If ANY enemy resists an element, it applies to the whole group.
pub fn combine_resistances(enemy_defs: &[&EnemyDefinition]) -> Vec<ResistanceElement> {
    let mut combined = Vec::new();
    for def in enemy_defs {
        for &res in def.resistances {
            if !combined.contains(&res) {
                combined.push(res);
            }
        }
    }
    combined
}

// =============================================================================
// Block efficiency math
// =============================================================================

/// Check if a block element is efficient against an attack element.
///
/// | Attack     | Efficient Block            |
/// |-----------|----------------------------|
/// | Physical  | Physical, Fire, Ice, ColdFire |
/// | Fire      | Ice, ColdFire              |
/// | Ice       | Fire, ColdFire             |
/// | ColdFire  | ColdFire only              |
pub fn is_block_efficient(block_element: Element, attack_element: Element) -> bool {
    match attack_element {
        Element::Physical => true, // All block types efficient vs physical
        Element::Fire => matches!(block_element, Element::Ice | Element::ColdFire),
        Element::Ice => matches!(block_element, Element::Fire | Element::ColdFire),
        Element::ColdFire => matches!(block_element, Element::ColdFire),
    }
}

/// Calculate effective block value against an attack element.
///
/// efficient_total + floor(inefficient_total / 2)
pub fn calculate_effective_block(
    block_elements: &ElementalValues,
    attack_element: Element,
) -> u32 {
    let mut efficient = 0u32;
    let mut inefficient = 0u32;

    // Physical block
    if is_block_efficient(Element::Physical, attack_element) {
        efficient += block_elements.physical;
    } else {
        inefficient += block_elements.physical;
    }

    // Fire block
    if is_block_efficient(Element::Fire, attack_element) {
        efficient += block_elements.fire;
    } else {
        inefficient += block_elements.fire;
    }

    // Ice block
    if is_block_efficient(Element::Ice, attack_element) {
        efficient += block_elements.ice;
    } else {
        inefficient += block_elements.ice;
    }

    // ColdFire block
    if is_block_efficient(Element::ColdFire, attack_element) {
        efficient += block_elements.cold_fire;
    } else {
        inefficient += block_elements.cold_fire;
    }

    efficient + inefficient / 2
}

// =============================================================================
// Enemy queries
// =============================================================================

/// Get the effective armor for an enemy in the given combat phase.
/// Elusive enemies use `armor_elusive` (higher) in the Attack phase.
pub fn get_enemy_armor_for_phase(def: &EnemyDefinition, phase: CombatPhase) -> u32 {
    if phase == CombatPhase::Attack {
        if let Some(elusive_armor) = def.armor_elusive {
            return elusive_armor;
        }
    }
    def.armor
}

/// Check if an enemy has a specific ability.
pub fn has_ability(def: &EnemyDefinition, ability: EnemyAbilityType) -> bool {
    def.abilities.contains(&ability)
}

/// Get total effective armor including phase, vampiric, and defend bonuses.
pub fn get_effective_armor(
    def: &EnemyDefinition,
    phase: CombatPhase,
    vampiric_bonus: u32,
    defend_bonus: u32,
) -> u32 {
    get_enemy_armor_for_phase(def, phase) + vampiric_bonus + defend_bonus
}

/// Get attack info for a specific attack index.
///
/// Returns `(damage, element, is_swift)`.
/// For single-attack enemies, use attack_index=0.
/// For multi-attack, uses the `attacks` array.
pub fn get_enemy_attack_info(
    def: &EnemyDefinition,
    attack_index: usize,
) -> (u32, Element, bool) {
    let is_swift = has_ability(def, EnemyAbilityType::Swift);

    if let Some(attacks) = def.attacks {
        if attack_index < attacks.len() {
            let atk = &attacks[attack_index];
            let atk_swift = is_swift || atk.ability == Some(EnemyAbilityType::Swift);
            return (atk.damage, atk.element, atk_swift);
        }
    }

    // Single-attack enemy (attack_index=0)
    (def.attack, def.attack_element, is_swift)
}

// =============================================================================
// Block resolution
// =============================================================================

/// Result of a block attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockResult {
    pub success: bool,
    pub required: u32,
    pub effective_block: u32,
}

/// Resolve a block attempt against a specific enemy attack.
///
/// Swift doubles the required block.
pub fn resolve_block(
    block_elements: &ElementalValues,
    enemy_def: &EnemyDefinition,
    attack_index: usize,
) -> BlockResult {
    let (damage, element, is_swift) = get_enemy_attack_info(enemy_def, attack_index);

    let required = if is_swift { damage * 2 } else { damage };
    let effective_block = calculate_effective_block(block_elements, element);

    BlockResult {
        success: effective_block >= required,
        required,
        effective_block,
    }
}

// =============================================================================
// Attack resolution
// =============================================================================

/// Result of an attack attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackResult {
    pub success: bool,
    pub effective_attack: u32,
    pub total_armor: u32,
    pub fame_gained: u32,
    pub reputation_delta: i32,
}

/// Resolve an attack against one or more target enemies.
///
/// Combines target resistances (union), calculates effective attack after
/// resistance halving, sums total armor (Elusive in Attack phase + vampiric/defend
/// bonuses + active `EnemyStat(Armor)` modifiers). All-or-nothing: must meet
/// combined armor to defeat all targets.
///
/// `bonus_armor` provides per-enemy instance armor bonuses (vampiric + defend).
/// `modifiers` supplies the active `EnemyStat(Armor)` adjustments (e.g. weaken)
/// applied before the bonus, mirroring how attack modifiers adjust damage on
/// the defending side.
pub fn resolve_attack(
    available_elements: &ElementalValues,
    targets: &[(&CombatEnemy, &EnemyDefinition)],
    phase: CombatPhase,
    bonus_armor: &BTreeMap<String, u32>,
    modifiers: &[ActiveModifier],
) -> AttackResult {
    // Collect definitions for resistance combination
    let defs: Vec<&EnemyDefinition> = targets.iter().map(|(_, def)| *def).collect();
    let combined_resistances = combine_resistances(&defs);

    let effective_attack = calculate_effective_attack(available_elements, &combined_resistances);

    let total_armor: u32 = targets
        .iter()
        .map(|(enemy, def)| {
            let base_armor = get_enemy_armor_for_phase(def, phase);
            let (armor_change, armor_minimum) =
                get_enemy_armor_modifier(modifiers, enemy.instance_id.as_str());
            let modified_armor = if armor_change != 0 || armor_minimum > 0 {
                (base_armor as i32 + armor_change).max(armor_minimum as i32) as u32
            } else {
                base_armor
            };
            let bonus = bonus_armor
                .get(enemy.instance_id.as_str())
                .copied()
                .unwrap_or(0);
            modified_armor + bonus
        })
        .sum();

    // Skip fame for summoned enemies
    let fame_gained: u32 = targets
        .iter()
        .filter(|(enemy, _)| enemy.summoned_by_instance_id.is_none())
        .map(|(_, def)| def.fame)
        .sum();

    let reputation_delta: i32 = targets
        .iter()
        .filter(|(enemy, _)| enemy.summoned_by_instance_id.is_none())
        .map(|(_, def)| {
            let bonus = def.reputation_bonus.unwrap_or(0) as i32;
            let penalty = -(def.reputation_penalty.unwrap_or(0) as i32);
            bonus + penalty
        })
        .sum();

    let success = effective_attack >= total_armor;

    AttackResult {
        success,
        effective_attack,
        total_armor,
        fame_gained: if success { fame_gained } else { 0 },
        reputation_delta: if success { reputation_delta } else { 0 },
    }
}

// =============================================================================
// Hero damage calculation
// =============================================================================

/// Calculate wounds dealt to the hero from an unblocked enemy attack.
///
/// wounds = ceil(effective_damage / hero_armor)
/// Brutal doubles the damage. Returns (wound_count, is_poison).
pub fn calculate_hero_wounds(
    enemy_def: &EnemyDefinition,
    attack_index: usize,
    hero_armor: u32,
) -> (u32, bool) {
    let (damage, _element, _is_swift) = get_enemy_attack_info(enemy_def, attack_index);

    if damage == 0 || hero_armor == 0 {
        return (0, false);
    }

    let is_brutal = has_ability(enemy_def, EnemyAbilityType::Brutal);
    let effective_damage = if is_brutal { damage * 2 } else { damage };

    let is_poison = has_ability(enemy_def, EnemyAbilityType::Poison);

    let wounds = effective_damage.div_ceil(hero_armor);

    (wounds, is_poison)
}

// =============================================================================
// Defend auto-assignment
// =============================================================================

/// Auto-assign defend bonuses from undefeated Defend enemies to attacked targets.
///
/// Each Defend enemy can protect ONE target per combat (tracked in `used_defend`).
/// Returns a map of target_instance_id → total defend bonus.
///
/// Algorithm (greedy): for each target, find the first available (unused) Defend
/// enemy and assign its defend value. Defend enemies can also defend themselves.
pub fn auto_assign_defend(
    enemies: &[CombatEnemy],
    target_ids: &[CombatInstanceId],
    used_defend: &BTreeMap<String, String>,
) -> BTreeMap<String, u32> {
    let mut assignments: BTreeMap<String, u32> = BTreeMap::new();
    let mut newly_used: Vec<String> = Vec::new();

    // Collect available defenders (undefeated, have Defend, not yet used)
    let mut available_defenders: Vec<(&CombatEnemy, u32)> = Vec::new();
    for enemy in enemies {
        if enemy.is_defeated {
            continue;
        }
        let def = match get_enemy(enemy.enemy_id.as_str()) {
            Some(d) => d,
            None => continue,
        };
        if !has_ability(def, EnemyAbilityType::Defend) {
            continue;
        }
        let defend_value = match def.defend {
            Some(v) => v,
            None => continue,
        };
        // Check if already used (in permanent state)
        if used_defend.contains_key(enemy.instance_id.as_str()) {
            continue;
        }
        available_defenders.push((enemy, defend_value));
    }

    // Assign defenders to targets
    for target_id in target_ids {
        // Find first available defender not yet assigned in this round
        let defender_idx = available_defenders.iter().position(|(defender, _)| {
            !newly_used.contains(&defender.instance_id.as_str().to_string())
        });

        if let Some(idx) = defender_idx {
            let (defender, defend_value) = available_defenders[idx];
            *assignments
                .entry(target_id.as_str().to_string())
                .or_insert(0) += defend_value;
            newly_used.push(defender.instance_id.as_str().to_string());
        }
    }

    assignments
}

/// Calculate wounds from pre-computed damage (after cumbersome reduction).
///
/// Like `calculate_hero_wounds` but uses the provided damage instead of the enemy def's base.
/// Brutal still doubles the provided damage.
pub fn calculate_hero_wounds_with_damage(
    enemy_def: &EnemyDefinition,
    _attack_index: usize,
    hero_armor: u32,
    damage: u32,
) -> (u32, bool) {
    if damage == 0 || hero_armor == 0 {
        return (0, false);
    }

    let is_brutal = has_ability(enemy_def, EnemyAbilityType::Brutal);
    let effective_damage = if is_brutal { damage * 2 } else { damage };

    let is_poison = has_ability(enemy_def, EnemyAbilityType::Poison);

    let wounds = effective_damage.div_ceil(hero_armor);

    (wounds, is_poison)
}

// =============================================================================
// Unit damage calculation
// =============================================================================

/// Result of assigning an attack to a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitDamageResult {
    pub unit_destroyed: bool,
    pub unit_wounded: bool,
    /// Whether a resistance was consumed for this damage calculation.
    pub resistance_used: bool,
}

/// Calculate result of assigning an enemy attack to a unit.
///
/// - Poison → instant destruction
/// - Unit armor = unit level
/// - If unit has matching resistance and hasn't used it: halve damage (ceiling)
/// - If effective_damage <= armor → fully absorbed
/// - If not wounded → becomes wounded
/// - If already wounded → destroyed
pub fn calculate_unit_damage(
    attack_damage: u32,
    attack_element: Element,
    is_poison: bool,
    is_paralyze: bool,
    unit_level: u8,
    unit_wounded: bool,
    used_resistance_this_combat: bool,
    unit_resistances: &[ResistanceElement],
) -> UnitDamageResult {
    if is_poison || is_paralyze {
        return UnitDamageResult {
            unit_destroyed: true,
            unit_wounded: false,
            resistance_used: false,
        };
    }

    let armor = unit_level as u32;

    // Check if unit has matching resistance and can use it
    let can_resist = !used_resistance_this_combat
        && is_attack_resisted(attack_element, unit_resistances);

    let effective_damage = if can_resist {
        attack_damage.div_ceil(2)
    } else {
        attack_damage
    };

    if effective_damage <= armor {
        UnitDamageResult {
            unit_destroyed: false,
            unit_wounded: false,
            resistance_used: can_resist && attack_damage > 0,
        }
    } else if !unit_wounded {
        UnitDamageResult {
            unit_destroyed: false,
            unit_wounded: true,
            resistance_used: can_resist && attack_damage > 0,
        }
    } else {
        UnitDamageResult {
            unit_destroyed: true,
            unit_wounded: false,
            resistance_used: can_resist && attack_damage > 0,
        }
    }
}

/// Subtract element-wise: a - b, clamped to 0.
pub fn subtract_elements(a: &ElementalValues, b: &ElementalValues) -> ElementalValues {
    ElementalValues {
        physical: a.physical.saturating_sub(b.physical),
        fire: a.fire.saturating_sub(b.fire),
        ice: a.ice.saturating_sub(b.ice),
        cold_fire: a.cold_fire.saturating_sub(b.cold_fire),
    }
}

/// Add element-wise.
pub fn add_elements(a: &ElementalValues, b: &ElementalValues) -> ElementalValues {
    ElementalValues {
        physical: a.physical + b.physical,
        fire: a.fire + b.fire,
        ice: a.ice + b.ice,
        cold_fire: a.cold_fire + b.cold_fire,
    }
}

// =============================================================================
// Modifier query helpers (for SelectCombatEnemy abilities)
// =============================================================================

use realm_types::modifier::{ActiveModifier, ModifierEffect, ModifierScope, EnemyStat as ModEnemyStat};

/// Check if an enemy's attacks are skipped via EnemySkipAttack modifier.
pub fn is_enemy_attacks_skipped(modifiers: &[ActiveModifier], enemy_id: &str) -> bool {
    modifiers.iter().any(|m| {
        matches!(&m.effect, ModifierEffect::EnemySkipAttack)
            && matches!(&m.scope, ModifierScope::OneEnemy { enemy_id: id } if id == enemy_id)
    })
}

/// Get armor adjustment from EnemyStat(Armor) modifiers. Returns (total_change, max_minimum).
pub fn get_enemy_armor_modifier(modifiers: &[ActiveModifier], enemy_id: &str) -> (i32, u32) {
    let mut total_change = 0i32;
    let mut max_minimum = 0u32;
    for m in modifiers {
        if let ModifierEffect::EnemyStat { stat: ModEnemyStat::Armor, amount, minimum, .. } = &m.effect {
            if matches!(&m.scope, ModifierScope::OneEnemy { enemy_id: id } if id == enemy_id)
                || matches!(&m.scope, ModifierScope::AllEnemies)
            {
                total_change += amount;
                if *minimum > max_minimum {
                    max_minimum = *minimum;
                }
            }
        }
    }
    (total_change, max_minimum)
}

/// Get attack adjustment from EnemyStat(Attack) modifiers. Returns (total_change, max_minimum).
pub fn get_enemy_attack_modifier(modifiers: &[ActiveModifier], enemy_id: &str) -> (i32, u32) {
    let mut total_change = 0i32;
    let mut max_minimum = 0u32;
    for m in modifiers {
        if let ModifierEffect::EnemyStat { stat: ModEnemyStat::Attack, amount, minimum, .. } = &m.effect {
            if matches!(&m.scope, ModifierScope::OneEnemy { enemy_id: id } if id == enemy_id)
                || matches!(&m.scope, ModifierScope::AllEnemies)
            {
                total_change += amount;
                if *minimum > max_minimum {
                    max_minimum = *minimum;
                }
            }
        }
    }
    (total_change, max_minimum)
}

/// Check if enemy's fortification is nullified (AbilityNullifier).
pub fn is_fortification_nullified(modifiers: &[ActiveModifier], enemy_id: &str) -> bool {
    modifiers.iter().any(|m| {
        if let ModifierEffect::AbilityNullifier { ability, .. } = &m.effect {
            *ability == Some(EnemyAbilityType::Fortified)
                && (matches!(&m.scope, ModifierScope::OneEnemy { enemy_id: id } if id == enemy_id)
                    || matches!(&m.scope, ModifierScope::AllEnemies))
        } else {
            false
        }
    })
}

/// Check if enemy's resistances are removed (RemoveResistances modifier).
pub fn are_resistances_removed(modifiers: &[ActiveModifier], enemy_id: &str) -> bool {
    modifiers.iter().any(|m| {
        matches!(&m.effect, ModifierEffect::RemoveResistances)
            && (matches!(&m.scope, ModifierScope::OneEnemy { enemy_id: id } if id == enemy_id)
                || matches!(&m.scope, ModifierScope::AllEnemies))
    })
}

/// Check if enemy has DefeatIfBlocked modifier.
pub fn has_defeat_if_blocked(modifiers: &[ActiveModifier], enemy_id: &str) -> bool {
    modifiers.iter().any(|m| {
        matches!(&m.effect, ModifierEffect::DefeatIfBlocked)
            && matches!(&m.scope, ModifierScope::OneEnemy { enemy_id: id } if id == enemy_id)
    })
}

/// Check effective fortification: base ability/site + nullifier check.
pub fn is_effectively_fortified(
    def: &EnemyDefinition,
    enemy_id: &str,
    is_at_fortified_site: bool,
    modifiers: &[ActiveModifier],
) -> bool {
    let base_fortified = has_ability(def, EnemyAbilityType::Fortified) || is_at_fortified_site;
    if !base_fortified {
        return false;
    }
    !is_fortification_nullified(modifiers, enemy_id)
}

// =============================================================================
// Tests
// =============================================================================
