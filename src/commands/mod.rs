//! CLI subcommands

pub mod assets;
pub mod list;
pub mod serve;
