//! Provider registry module.
//!
//! This module provides:
//! - Construction of every provider adapter from resolved credentials
//! - Per-provider configuration status
//! - Lookup of quote providers by id
//! - The snapshot orchestrator wired to its default providers

mod provider_registry;

pub use provider_registry::ProviderRegistry;
