//! CLI subcommand modules.
//!
//! This module contains the implementations for all ancora CLI subcommands.

pub(crate) mod compute;
pub(crate) mod serve;
