//! CLI subcommands.

pub mod delivery;
pub mod prices;
