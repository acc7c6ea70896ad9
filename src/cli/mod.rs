//! CLI command handlers
//!
//! Non-interactive access to the form: check an entry given on the command
//! line and inspect what has been submitted to the outbox.

pub mod check;
pub mod entries;

pub use check::{handle_check_command, parse_line_spec, CheckArgs, LineSpec};
pub use entries::{handle_list_command, handle_show_command, handle_summary_command};
