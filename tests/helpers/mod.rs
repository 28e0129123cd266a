//! Shared fixtures and assertions for the integration suite.

pub mod assertions;
pub mod fixtures;
