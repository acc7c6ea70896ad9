//! journal-form - Double-entry journal entry form for the terminal
//!
//! This library provides the form controller behind the `journal` binary:
//! account rows that can be added and removed, debit and credit totals that
//! are recomputed on every change, and the checks that keep an unbalanced
//! entry from being submitted.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, identifiers and the submitted entry payload
//! - `form`: The form controller (rows, totals, validation, focus, timers)
//! - `submit`: Submission collaborator and its background worker
//! - `reports`: Session summary over submitted entries
//! - `display`: Plain-text tables for the command line
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal form
//!
//! # Example
//!
//! ```rust,ignore
//! use journal_form::form::{FormConfig, JournalForm};
//! use journal_form::models::EntrySide;
//! use std::time::Instant;
//!
//! let now = Instant::now();
//! let mut form = JournalForm::new(FormConfig::default(), now);
//! let id = form.rows()[0].id;
//! form.set_side(id, EntrySide::Debit);
//! form.set_amount(id, "100");
//! assert!(!form.totals().is_balanced());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod models;
pub mod reports;
pub mod submit;
pub mod tui;

pub use error::JournalError;
