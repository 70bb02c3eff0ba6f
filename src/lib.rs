//! Mindspace - youth mental-wellness companion backend
//!
//! Keyword risk screening and cognitive-distortion matching over free text,
//! wrapped by an LLM companion, a record store and a JSON HTTP surface.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
