//! Command implementations for the Fragmenta CLI

pub mod compile;
pub mod completions;
pub mod deploy;
pub mod helpers;
pub mod tags;
pub mod version;
