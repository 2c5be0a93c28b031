//! Static card/enemy/unit/skill data definitions for the realm engine.
//!
//! This crate contains all immutable game data — card effects, enemy stats,
//! unit abilities, hero definitions, site properties, tile layouts, etc.

pub mod cards;
pub mod enemies;
pub mod enemy_piles;
pub mod heroes;
pub mod levels;
pub mod offers;
pub mod sites;
pub mod tactics;
pub mod tiles;
