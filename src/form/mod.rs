//! Journal entry form
//!
//! Everything the form does without a terminal: the editable rows, running
//! totals, submission checks, keyboard focus order, deferred tasks,
//! autocomplete and notifications. [`JournalForm`] ties them together.

pub mod controller;
pub mod focus;
pub mod input;
pub mod notify;
pub mod row;
pub mod schedule;
pub mod suggest;
pub mod totals;
pub mod validation;

pub use controller::{FormConfig, JournalForm, ResponseOutcome, SubmitState, Submission};
pub use focus::FocusTarget;
pub use input::TextInput;
pub use notify::{Notification, NotificationQueue, NotificationType};
pub use row::AccountRow;
pub use totals::{BalanceStatus, Totals};
pub use validation::FormError;
