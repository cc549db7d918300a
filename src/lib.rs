//! Batch localization of game text.
//!
//! Rows of English strings are read from a semicolon-delimited table, each
//! referenced screenshot is described by a vision model, and one or more text
//! models produce culturally adapted Turkish, French and German versions.

pub mod batch;
pub mod config;
pub mod debug;
pub mod description;
pub mod images;
pub mod language;
pub mod localization;
pub mod openrouter;
pub mod processor;
pub mod prompts;
pub mod table;
