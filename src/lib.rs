//! rilega binds a story or article into a single self-contained HTML file.
//!
//! The crate is a thin, synchronous pipeline: raw fields are rendered to an
//! HTML fragment, normalized and gated on the mandatory metadata, enriched
//! with a read-time estimate, composed into a themed document with the
//! stylesheet and script embedded inline, and written under a deterministic,
//! filesystem-safe name. Callers drive everything through
//! [`application::save::save`].

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
