//! Semantic event stream emitted by every successful action submission.
//!
//! Events carry only stable, serializable fields — no internal object
//! references — so a host can log, replay, or project them without access
//! to the engine's internal types.

use serde::{Deserialize, Serialize};

use crate::hex::HexCoord;
use crate::ids::*;

/// One semantic occurrence caused by applying a single action.
///
/// A submission produces an ordered `Vec<Event>` in causal order (e.g.
/// `PlayerMoved` before `CombatStarted` before `ChoiceRequired`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    PlayerMoved {
        player_id: PlayerId,
        from: Option<HexCoord>,
        to: HexCoord,
    },
    CombatStarted {
        reason: CombatStartReason,
        hex: Option<HexCoord>,
    },
    EnemyDefeated {
        enemy_instance_id: CombatInstanceId,
        fame: u32,
    },
    AttackFailed {
        required_attack: u32,
    },
    InteractionCompleted {
        hex: HexCoord,
    },
    UnitRecruited {
        unit_id: UnitId,
        unit_instance_id: UnitInstanceId,
    },
    UnitsReadied {
        player_id: PlayerId,
    },
    DecksReshuffled {
        player_id: PlayerId,
    },
    RoundEnded {
        round: u32,
    },
    NewRoundStarted {
        round: u32,
    },
    GameEnded {
        winning_player_id: Option<PlayerId>,
    },
    ChoiceRequired {
        player_id: PlayerId,
    },
    ReputationChanged {
        player_id: PlayerId,
        delta: i8,
        new_value: i8,
    },
    MonasteryBurned {
        hex: HexCoord,
    },
    ShieldTokenPlaced {
        hex: HexCoord,
    },
    FameGained {
        player_id: PlayerId,
        delta: u32,
        new_value: u32,
    },
    WoundReceived {
        player_id: PlayerId,
        count: u32,
    },
    MoveUndone {
        player_id: PlayerId,
        restored_to: Option<HexCoord>,
    },
}

/// Why combat sub-state was entered, mirroring §4.D.2's trigger list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatStartReason {
    FortifiedAssault,
    ProvokedRampaging,
    ChallengedRampaging,
    SiteEnter,
    CooperativeAssault,
}
