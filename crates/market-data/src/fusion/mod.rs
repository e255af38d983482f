//! Per-symbol data fusion.
//!
//! This module provides:
//! - [`FusionOrchestrator`]: fans out quote, news and fundamentals calls for one symbol
//! - [`FusionPolicy`]: which fields are mandatory and which degrade to unavailable
//! - [`TickerSnapshot`]: the fused record, with [`SourcePayload`] per field
//! - [`SnapshotError`]: the mandatory field that failed, with its cause

mod orchestrator;
mod policy;
mod snapshot;

pub use orchestrator::FusionOrchestrator;
pub use policy::{FieldPolicy, FusionPolicy, ParseFieldError, SnapshotField, DEFAULT_NEWS_LIMIT};
pub use snapshot::{SnapshotError, SourcePayload, TickerSnapshot};
