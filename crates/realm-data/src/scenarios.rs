//! Scenario definitions — static configuration for each game scenario.

use realm_types::enums::*;
use realm_types::scoring::*;
use realm_types::state::ScenarioConfig;
use std::collections::BTreeMap;

/// First Reconnaissance — solo introductory scenario.
///
/// Map: Wedge shape, 8 countryside + 2 non-city core + 1 city tile.
/// 4 rounds (2 day + 2 night). Game ends when a city tile is revealed.
/// Skills disabled, elite units disabled.
pub fn first_reconnaissance() -> ScenarioConfig {
    ScenarioConfig {
        countryside_tile_count: 8,
        core_tile_count: 2,
        city_tile_count: 1,
        map_shape: MapShape::Wedge,
        day_rounds: 2,
        night_rounds: 2,
        total_rounds: 4,
        min_players: 1,
        max_players: 1,
        starting_fame: 0,
        starting_reputation: 0,
        skills_enabled: false,
        elite_units_enabled: false,
        pvp_enabled: false,
        spells_available: true,
        advanced_actions_available: true,
        enabled_expansions: vec![],
        fame_per_tile_explored: 1,
        cities_can_be_entered: false,
        default_city_level: 1,
        tactic_removal_mode: TacticRemovalMode::AllUsed,
        dummy_tactic_order: DummyTacticOrder::AfterHumans,
        end_trigger: ScenarioEndTrigger::CityRevealed,
        scoring_config: Some(ScenarioScoringConfig {
            base_score_mode: BaseScoreMode::IndividualFame,
            achievements: AchievementsConfig {
                enabled: true,
                mode: AchievementMode::Solo,
                overrides: BTreeMap::new(),
            },
            modules: vec![],
        }),
    }
}

/// First Reconnaissance — 2-player variant.
///
/// Map: Open 3 shape, 6 countryside + 2 core + 1 city tile.
/// 3 rounds (2 day + 1 night). No dummy player.
pub fn first_reconnaissance_2p() -> ScenarioConfig {
    ScenarioConfig {
        countryside_tile_count: 6,
        core_tile_count: 2,
        city_tile_count: 1,
        map_shape: MapShape::Open3,
        day_rounds: 2,
        night_rounds: 1,
        total_rounds: 3,
        min_players: 2,
        max_players: 2,
        starting_fame: 0,
        starting_reputation: 0,
        skills_enabled: false,
        elite_units_enabled: false,
        pvp_enabled: false,
        spells_available: true,
        advanced_actions_available: true,
        enabled_expansions: vec![],
        fame_per_tile_explored: 1,
        cities_can_be_entered: false,
        default_city_level: 1,
        tactic_removal_mode: TacticRemovalMode::AllUsed,
        dummy_tactic_order: DummyTacticOrder::None,
        end_trigger: ScenarioEndTrigger::CityRevealed,
        scoring_config: None,
    }
}

/// First Reconnaissance — 3-player variant.
///
/// Map: Open 4 shape, 8 countryside + 3 core + 1 city tile.
/// 3 rounds (2 day + 1 night). No dummy player.
pub fn first_reconnaissance_3p() -> ScenarioConfig {
    ScenarioConfig {
        countryside_tile_count: 8,
        core_tile_count: 3,
        city_tile_count: 1,
        map_shape: MapShape::Open4,
        day_rounds: 2,
        night_rounds: 1,
        total_rounds: 3,
        min_players: 3,
        max_players: 3,
        starting_fame: 0,
        starting_reputation: 0,
        skills_enabled: false,
        elite_units_enabled: false,
        pvp_enabled: false,
        spells_available: true,
        advanced_actions_available: true,
        enabled_expansions: vec![],
        fame_per_tile_explored: 1,
        cities_can_be_entered: false,
        default_city_level: 1,
        tactic_removal_mode: TacticRemovalMode::AllUsed,
        dummy_tactic_order: DummyTacticOrder::None,
        end_trigger: ScenarioEndTrigger::CityRevealed,
        scoring_config: None,
    }
}

/// First Reconnaissance — 4-player variant.
///
/// Map: Open 5 shape, 10 countryside + 4 core + 1 city tile.
/// 3 rounds (2 day + 1 night). No dummy player.
pub fn first_reconnaissance_4p() -> ScenarioConfig {
    ScenarioConfig {
        countryside_tile_count: 10,
        core_tile_count: 4,
        city_tile_count: 1,
        map_shape: MapShape::Open5,
        day_rounds: 2,
        night_rounds: 1,
        total_rounds: 3,
        min_players: 4,
        max_players: 4,
        starting_fame: 0,
        starting_reputation: 0,
        skills_enabled: false,
        elite_units_enabled: false,
        pvp_enabled: false,
        spells_available: true,
        advanced_actions_available: true,
        enabled_expansions: vec![],
        fame_per_tile_explored: 1,
        cities_can_be_entered: false,
        default_city_level: 1,
        tactic_removal_mode: TacticRemovalMode::AllUsed,
        dummy_tactic_order: DummyTacticOrder::None,
        end_trigger: ScenarioEndTrigger::CityRevealed,
        scoring_config: None,
    }
}

/// Full Conquest — standard scenario (stub).
///
/// Map: Open 5 shape. 6 rounds (3 day + 3 night).
/// Conquer the city to win. All expansions enabled.
pub fn full_conquest() -> ScenarioConfig {
    ScenarioConfig {
        countryside_tile_count: 8,
        core_tile_count: 4,
        city_tile_count: 1,
        map_shape: MapShape::Open5,
        day_rounds: 3,
        night_rounds: 3,
        total_rounds: 6,
        min_players: 1,
        max_players: 4,
        starting_fame: 0,
        starting_reputation: 0,
        skills_enabled: true,
        elite_units_enabled: true,
        pvp_enabled: true,
        spells_available: true,
        advanced_actions_available: true,
        enabled_expansions: vec![
            ExpansionId::LostLegion,
            ExpansionId::Krang,
            ExpansionId::ShadesOfTezla,
        ],
        fame_per_tile_explored: 0,
        cities_can_be_entered: true,
        default_city_level: 5,
        tactic_removal_mode: TacticRemovalMode::AllUsed,
        dummy_tactic_order: DummyTacticOrder::AfterHumans,
        end_trigger: ScenarioEndTrigger::CityConquered,
        scoring_config: Some(ScenarioScoringConfig {
            base_score_mode: BaseScoreMode::IndividualFame,
            achievements: AchievementsConfig {
                enabled: true,
                mode: AchievementMode::Competitive,
                overrides: BTreeMap::new(),
            },
            modules: vec![ScoringModuleConfig::CityConquest(
                CityConquestModuleConfig {
                    leader_points: 7,
                    participant_points: 4,
                    title_name: "Greatest City Conqueror".to_string(),
                    title_bonus: 5,
                    title_tied_bonus: 2,
                },
            )],
        }),
    }
}

/// Look up a scenario by ID string (and optional player count).
pub fn get_scenario(id: &str) -> Option<ScenarioConfig> {
    match id {
        "first_reconnaissance" => Some(first_reconnaissance()),
        "first_reconnaissance_2p" => Some(first_reconnaissance_2p()),
        "first_reconnaissance_3p" => Some(first_reconnaissance_3p()),
        "first_reconnaissance_4p" => Some(first_reconnaissance_4p()),
        "full_conquest" => Some(full_conquest()),
        _ => None,
    }
}
