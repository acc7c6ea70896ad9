//! Display formatting for terminal output
//!
//! Plain-text tables for the command line: the rows of a checked form and
//! entries read back from the outbox.

pub mod entry;
pub mod summary;

pub use entry::{format_entry_details, format_entry_list, format_form_table};
pub use summary::format_session_summary;
