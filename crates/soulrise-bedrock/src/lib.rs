//! soulrise-bedrock
//!
//! Personalized plan generation: prompt construction, schema-constrained
//! Bedrock invocation, and strict parsing of the model's reply.

pub mod client;
pub mod config;
pub mod converse;
pub mod document;
pub mod error;
pub mod generator;
pub mod prompt;
pub mod schema;
pub mod service;
pub mod tokens;
