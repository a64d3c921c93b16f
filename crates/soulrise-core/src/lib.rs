//! soulrise-core
//!
//! Pure domain types and validation rules for SoulRise.
//! No AWS SDK dependency — this is the shared vocabulary between the plan
//! generator, the HTTP surface, and the client-rendered UI (via `ts-rs`).

pub mod error;
pub mod models;
