//! Journal entry form controller
//!
//! `JournalForm` owns the ordered rows (the authoritative model), the focus,
//! the displayed totals, the submission state machine and the notification
//! queue. The terminal view only reads from it. Every operation that depends
//! on time takes `now` so the event loop and the tests drive it the same way.

use std::time::{Duration, Instant};

use chrono::Local;

use crate::config::Settings;
use crate::models::{EntrySide, JournalEntry, RowId, RowIdSequence, ENTRY_DATE_FORMAT};

use super::focus::{self, FocusTarget};
use super::input::TextInput;
use super::notify::{NotificationQueue, NotificationType};
use super::row::{AccountRow, DepartingRow};
use super::schedule::{FormTask, Scheduler, TaskHandle};
use super::suggest;
use super::totals::Totals;
use super::validation::{self, FormError};

/// Rows present on a fresh form
pub const INITIAL_ROWS: usize = 2;

/// Knobs the controller takes from the settings
#[derive(Debug, Clone)]
pub struct FormConfig {
    pub currency_symbol: String,
    pub submit_timeout: Duration,
    pub notification_duration: Duration,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for FormConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            submit_timeout: settings.submit_timeout(),
            notification_duration: settings.notification_duration(),
        }
    }
}

/// Where the submit control stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    /// Submit is enabled
    Idle,
    /// Waiting on the collaborator; submit is disabled and shows busy
    Submitting { token: u64, timer: TaskHandle },
}

/// An entry that passed both checks and must be handed to the collaborator
#[derive(Debug, Clone)]
pub struct Submission {
    /// Matches the eventual response to this submission
    pub token: u64,
    pub entry: JournalEntry,
}

/// What happened to a collaborator response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseOutcome {
    Accepted,
    Rejected,
    /// Response for an older submission; ignored
    Stale,
}

/// The form controller
#[derive(Debug)]
pub struct JournalForm {
    config: FormConfig,
    sequence: RowIdSequence,
    date: TextInput,
    narration: TextInput,
    rows: Vec<AccountRow>,
    departing: Vec<DepartingRow>,
    focus: FocusTarget,
    totals: Totals,
    submit_state: SubmitState,
    last_token: u64,
    scheduler: Scheduler,
    notifications: NotificationQueue,
    alert: Option<FormError>,
    suggestion_index: usize,
}

impl JournalForm {
    /// Create a form with today's date and two blank rows
    pub fn new(config: FormConfig, now: Instant) -> Self {
        let notifications = NotificationQueue::new(config.notification_duration);
        let mut form = Self {
            config,
            sequence: RowIdSequence::new(),
            date: TextInput::new().placeholder("YYYY-MM-DD"),
            narration: TextInput::new().placeholder("Enter transaction description..."),
            rows: Vec::new(),
            departing: Vec::new(),
            focus: FocusTarget::Date,
            totals: Totals::default(),
            submit_state: SubmitState::Idle,
            last_token: 0,
            scheduler: Scheduler::new(),
            notifications,
            alert: None,
            suggestion_index: 0,
        };
        form.reset(now);
        form
    }

    /// Put date, narration and rows back to a fresh state
    fn reset(&mut self, now: Instant) {
        let today = Local::now().date_naive();
        self.date.set(today.format(ENTRY_DATE_FORMAT).to_string());
        self.narration.clear();
        self.rows.clear();
        self.departing.clear();
        for _ in 0..INITIAL_ROWS {
            let id = self.sequence.allocate();
            self.rows.push(AccountRow::new(id, now));
        }
        self.focus = FocusTarget::Date;
        self.suggestion_index = 0;
        self.recompute();
    }

    // ----- Row manager -----

    /// Append a blank row, focus its name field and recompute
    pub fn add_row(&mut self, now: Instant) -> RowId {
        let id = self.sequence.allocate();
        self.rows.push(AccountRow::new(id, now));
        self.set_focus(FocusTarget::Name(id));
        self.recompute();
        log::debug!("added {}", id);
        id
    }

    /// Remove a row unless it is the last one
    ///
    /// Removing the last row raises the blocking alert and changes nothing.
    pub fn remove_row(&mut self, id: RowId, now: Instant) -> Result<(), FormError> {
        let Some(index) = self.rows.iter().position(|r| r.id == id) else {
            log::warn!("remove requested for unknown {}", id);
            return Ok(());
        };

        if self.rows.len() <= 1 {
            log::info!("refused to remove the last row");
            return Err(self.raise(FormError::LastRow));
        }

        let row = self.rows.remove(index);
        self.departing.push(DepartingRow {
            row,
            index,
            removed_at: now,
        });

        if self.focus.row() == Some(id) {
            let neighbour = self.rows[index.min(self.rows.len() - 1)].id;
            self.set_focus(FocusTarget::Name(neighbour));
        }

        self.recompute();
        log::debug!("removed {}", id);
        Ok(())
    }

    /// Remove the row holding focus
    pub fn remove_focused_row(&mut self, now: Instant) -> Result<(), FormError> {
        match self.focus.row() {
            Some(id) => self.remove_row(id, now),
            None => Ok(()),
        }
    }

    /// Set a row's debit/credit side
    pub fn set_side(&mut self, id: RowId, side: EntrySide) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.id == id) {
            row.side = side;
            self.recompute();
        }
    }

    /// Step the type selector of the focused row
    pub fn cycle_focused_side(&mut self, forward: bool) {
        if let FocusTarget::Side(id) = self.focus {
            if let Some(row) = self.row(id) {
                let side = if forward { row.side.next() } else { row.side.prev() };
                self.set_side(id, side);
            }
        }
    }

    /// Replace a row's account name
    pub fn set_name(&mut self, id: RowId, name: &str) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.id == id) {
            row.name.set(name);
        }
    }

    /// Replace a row's amount text and recompute
    pub fn set_amount(&mut self, id: RowId, amount: &str) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.id == id) {
            row.amount.set(amount);
            self.recompute();
        }
    }

    /// Replace the entry date text
    pub fn set_date(&mut self, date: &str) {
        self.date.set(date);
    }

    /// Replace the narration text
    pub fn set_narration(&mut self, narration: &str) {
        self.narration.set(narration);
    }

    // ----- Totals -----

    /// Recompute the displayed totals from the current rows
    pub fn recompute(&mut self) -> Totals {
        self.totals = Totals::compute(&self.rows);
        log::trace!(
            "totals debit={} credit={} difference={}",
            self.totals.debit,
            self.totals.credit,
            self.totals.difference()
        );
        self.totals
    }

    /// Totals as last displayed
    pub fn totals(&self) -> Totals {
        self.totals
    }

    // ----- Text editing on the focused control -----

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            FocusTarget::Date => Some(&mut self.date),
            FocusTarget::Narration => Some(&mut self.narration),
            FocusTarget::Name(id) => self.rows.iter_mut().find(|r| r.id == id).map(|r| &mut r.name),
            FocusTarget::Amount(id) => {
                self.rows.iter_mut().find(|r| r.id == id).map(|r| &mut r.amount)
            }
            FocusTarget::Side(_) => None,
        }
    }

    /// Apply an edit to the focused text field
    pub fn edit_focused(&mut self, edit: impl FnOnce(&mut TextInput)) {
        let Some(input) = self.focused_input() else {
            return;
        };
        edit(input);
        match self.focus {
            FocusTarget::Amount(_) => {
                self.recompute();
            }
            FocusTarget::Name(_) => self.suggestion_index = 0,
            _ => {}
        }
    }

    /// Type a character into the focused field
    pub fn insert_char(&mut self, c: char) {
        self.edit_focused(|input| input.insert(c));
    }

    // ----- Focus and keyboard navigation -----

    /// Currently focused control
    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    /// Move focus to a control, moving its cursor to the end
    pub fn set_focus(&mut self, target: FocusTarget) {
        self.focus = target;
        self.suggestion_index = 0;
        if let Some(input) = self.focused_input() {
            input.move_end();
        }
    }

    /// Tab: next control, wrapping
    pub fn focus_next(&mut self) {
        let next = focus::next_wrapping(&self.rows, self.focus);
        self.set_focus(next);
    }

    /// Shift+Tab: previous control, wrapping
    pub fn focus_prev(&mut self) {
        let prev = focus::prev_wrapping(&self.rows, self.focus);
        self.set_focus(prev);
    }

    /// Enter: next control, or submit when the last control has focus
    pub fn advance_or_submit(&mut self, now: Instant) -> Option<Submission> {
        match focus::next_after(&self.rows, self.focus) {
            Some(next) => {
                self.set_focus(next);
                None
            }
            None => self.submit(now).ok(),
        }
    }

    // ----- Autocomplete -----

    /// Suggestions for the focused name field
    pub fn suggestions(&self) -> Vec<&'static str> {
        match self.focus {
            FocusTarget::Name(id) => self
                .row(id)
                .map(|r| suggest::suggestions(r.name.value()))
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// Highlighted suggestion index
    pub fn suggestion_index(&self) -> usize {
        self.suggestion_index
    }

    /// Move the suggestion highlight; false when no list is shown
    pub fn move_suggestion(&mut self, down: bool) -> bool {
        let count = self.suggestions().len();
        if count == 0 {
            return false;
        }
        self.suggestion_index = if down {
            (self.suggestion_index + 1).min(count - 1)
        } else {
            self.suggestion_index.saturating_sub(1)
        };
        true
    }

    /// Fill the focused name with the highlighted suggestion
    pub fn accept_suggestion(&mut self) -> bool {
        let FocusTarget::Name(id) = self.focus else {
            return false;
        };
        let Some(choice) = self.suggestions().get(self.suggestion_index).copied() else {
            return false;
        };
        self.set_name(id, choice);
        self.suggestion_index = 0;
        true
    }

    // ----- Submission -----

    /// Run both checks and, if they pass, hand back the entry to dispatch
    ///
    /// A failed check raises the alert and leaves the form untouched.
    pub fn submit(&mut self, now: Instant) -> Result<Submission, FormError> {
        if self.is_submitting() {
            log::debug!("submit ignored while a submission is pending");
            return Err(FormError::SubmissionPending);
        }

        self.recompute();
        let lines = match validation::validate(&self.rows, &self.config.currency_symbol) {
            Ok(lines) => lines,
            Err(err) => {
                log::info!("submission blocked: {}", err.title());
                return Err(self.raise(err));
            }
        };

        self.last_token += 1;
        let token = self.last_token;
        let timer = self.scheduler.schedule(
            now,
            self.config.submit_timeout,
            FormTask::ReenableSubmit { token },
        );
        self.submit_state = SubmitState::Submitting { token, timer };

        let entry = JournalEntry::new(
            self.date.value().trim(),
            self.narration.value().trim(),
            lines,
        );
        log::info!(
            "dispatching entry {} with {} lines (token {})",
            entry.id,
            entry.lines.len(),
            token
        );
        Ok(Submission { token, entry })
    }

    /// Apply the collaborator's response to a submission
    pub fn complete_submission(
        &mut self,
        token: u64,
        result: Result<(), String>,
        now: Instant,
    ) -> ResponseOutcome {
        if token != self.last_token {
            log::warn!("ignoring response for stale submission {}", token);
            return ResponseOutcome::Stale;
        }

        if let SubmitState::Submitting { token: pending, timer } = self.submit_state {
            if pending == token {
                self.scheduler.cancel(timer);
                self.submit_state = SubmitState::Idle;
            }
        }

        match result {
            Ok(()) => {
                log::info!("submission {} accepted", token);
                self.reset(now);
                self.notify("Journal entry added successfully!", NotificationType::Success, now);
                ResponseOutcome::Accepted
            }
            Err(message) => {
                log::warn!("submission {} rejected: {}", token, message);
                self.notify(message, NotificationType::Error, now);
                ResponseOutcome::Rejected
            }
        }
    }

    /// Whether the submit control is disabled and busy
    pub fn is_submitting(&self) -> bool {
        matches!(self.submit_state, SubmitState::Submitting { .. })
    }

    /// Current submission state
    pub fn submit_state(&self) -> SubmitState {
        self.submit_state
    }

    // ----- Clearing, notifications, alerts -----

    /// Reset the whole form and post a notification
    pub fn clear_form(&mut self, now: Instant) {
        if let SubmitState::Submitting { timer, .. } = self.submit_state {
            self.scheduler.cancel(timer);
        }
        self.submit_state = SubmitState::Idle;
        self.alert = None;
        self.reset(now);
        self.notify("Form cleared", NotificationType::Info, now);
        log::info!("form cleared");
    }

    /// Post a transient notification
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        notification_type: NotificationType,
        now: Instant,
    ) -> u64 {
        self.notifications.push(message, notification_type, now)
    }

    /// Close the notification currently shown
    pub fn dismiss_notification(&mut self) -> bool {
        match self.notifications.current().map(|n| n.id) {
            Some(id) => self.notifications.dismiss(id),
            None => false,
        }
    }

    /// Queued notifications
    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    fn raise(&mut self, err: FormError) -> FormError {
        self.alert = Some(err.clone());
        err
    }

    /// Blocking alert waiting to be acknowledged
    pub fn alert(&self) -> Option<&FormError> {
        self.alert.as_ref()
    }

    /// Acknowledge the alert
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    // ----- Time -----

    /// Run due tasks and expire transient state
    pub fn tick(&mut self, now: Instant) {
        for task in self.scheduler.take_due(now) {
            match task {
                FormTask::ReenableSubmit { token } => {
                    if matches!(self.submit_state, SubmitState::Submitting { token: t, .. } if t == token)
                    {
                        log::warn!("no response for submission {}; re-enabling submit", token);
                        self.submit_state = SubmitState::Idle;
                        self.notify(
                            "No response yet. You can submit again.",
                            NotificationType::Info,
                            now,
                        );
                    }
                }
            }
        }
        self.notifications.remove_expired(now);
        self.departing.retain(|d| !d.is_finished(now));
    }

    // ----- Read access -----

    /// Rows in display order
    pub fn rows(&self) -> &[AccountRow] {
        &self.rows
    }

    /// Look up a row
    pub fn row(&self, id: RowId) -> Option<&AccountRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Rows still playing their exit animation
    pub fn departing(&self) -> &[DepartingRow] {
        &self.departing
    }

    /// Entry date field
    pub fn date(&self) -> &TextInput {
        &self.date
    }

    /// Narration field
    pub fn narration(&self) -> &TextInput {
        &self.narration
    }

    /// Configuration in effect
    pub fn config(&self) -> &FormConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> (JournalForm, Instant) {
        let now = Instant::now();
        (JournalForm::new(FormConfig::default(), now), now)
    }

    fn fill(form: &mut JournalForm, index: usize, name: &str, side: EntrySide, amount: &str) {
        let id = form.rows()[index].id;
        form.set_name(id, name);
        form.set_side(id, side);
        form.set_amount(id, amount);
    }

    fn balanced(form: &mut JournalForm) {
        form.set_narration("Owner invests cash");
        fill(form, 0, "Cash", EntrySide::Debit, "100.00");
        fill(form, 1, "Capital", EntrySide::Credit, "100.00");
    }

    #[test]
    fn test_new_form_has_two_rows_and_date() {
        let (form, _) = form();
        assert_eq!(form.rows().len(), INITIAL_ROWS);
        assert_eq!(form.focus(), FocusTarget::Date);
        assert_eq!(form.date().value().len(), 10);
        assert!(form.totals().is_balanced());
    }

    #[test]
    fn test_default_date_is_accepted_by_outbox() {
        let (mut form, now) = form();
        balanced(&mut form);
        let submission = form.submit(now).unwrap();

        assert!(submission.entry.parsed_date().is_some());
        assert!(crate::submit::OutboxSubmitter::check(&submission.entry).is_ok());
    }

    #[test]
    fn test_add_row_ids_increase_and_focus_name() {
        let (mut form, now) = form();
        let before = form.rows().last().unwrap().id;
        let id = form.add_row(now);
        assert!(id > before);
        assert_eq!(form.focus(), FocusTarget::Name(id));
        assert_eq!(form.rows().len(), 3);
    }

    #[test]
    fn test_ids_never_reused() {
        let (mut form, now) = form();
        let id = form.add_row(now);
        form.remove_row(id, now).unwrap();
        let again = form.add_row(now);
        assert!(again > id);
    }

    #[test]
    fn test_remove_last_row_is_blocked() {
        let (mut form, now) = form();
        let first = form.rows()[0].id;
        form.remove_row(first, now).unwrap();
        assert_eq!(form.rows().len(), 1);

        let only = form.rows()[0].id;
        let err = form.remove_row(only, now).unwrap_err();
        assert_eq!(err, FormError::LastRow);
        assert_eq!(form.rows().len(), 1);
        assert_eq!(form.rows()[0].id, only);
        assert_eq!(form.alert(), Some(&FormError::LastRow));
    }

    #[test]
    fn test_add_then_remove_restores_totals() {
        let (mut form, now) = form();
        fill(&mut form, 0, "Cash", EntrySide::Debit, "40");
        let before_totals = form.totals();
        let before_count = form.rows().len();

        let id = form.add_row(now);
        form.set_side(id, EntrySide::Credit);
        form.set_amount(id, "15");
        assert_ne!(form.totals(), before_totals);

        form.remove_row(id, now).unwrap();
        assert_eq!(form.rows().len(), before_count);
        assert_eq!(form.totals(), before_totals);
    }

    #[test]
    fn test_remove_moves_focus_off_removed_row() {
        let (mut form, now) = form();
        let id = form.add_row(now);
        form.remove_focused_row(now).unwrap();
        assert!(form.row(id).is_none());
        assert_ne!(form.focus().row(), Some(id));
        assert!(form.focus().row().is_some());
        assert_eq!(form.departing().len(), 1);

        form.tick(now + Duration::from_secs(1));
        assert!(form.departing().is_empty());
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let (mut form, _) = form();
        fill(&mut form, 0, "Cash", EntrySide::Debit, "12.34");
        let first = form.recompute();
        let second = form.recompute();
        assert_eq!(first, second);
        assert_eq!(format!("{}", second.debit), "12.34");
    }

    #[test]
    fn test_typing_amount_recomputes() {
        let (mut form, _) = form();
        let id = form.rows()[0].id;
        form.set_side(id, EntrySide::Debit);
        form.set_focus(FocusTarget::Amount(id));
        for c in "7.5".chars() {
            form.insert_char(c);
        }
        assert_eq!(form.totals().debit.cents(), 750);
        form.edit_focused(|input| input.backspace());
        form.edit_focused(|input| input.backspace());
        assert_eq!(form.totals().debit.cents(), 700);
        form.insert_char('x');
        assert_eq!(form.totals().debit.cents(), 0);
    }

    #[test]
    fn test_submit_balanced_dispatches_and_disables() {
        let (mut form, now) = form();
        balanced(&mut form);
        let submission = form.submit(now).unwrap();
        assert_eq!(submission.entry.lines.len(), 2);
        assert_eq!(submission.entry.narration, "Owner invests cash");
        assert!(form.is_submitting());

        assert_eq!(form.submit(now).unwrap_err(), FormError::SubmissionPending);
    }

    #[test]
    fn test_submit_unbalanced_blocks_without_mutation() {
        let (mut form, now) = form();
        fill(&mut form, 0, "Cash", EntrySide::Debit, "100.00");
        fill(&mut form, 1, "Capital", EntrySide::Credit, "99.00");
        let rows_before: Vec<_> = form.rows().iter().map(|r| r.amount.value().to_string()).collect();

        let err = form.submit(now).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("₹100.00"));
        assert!(text.contains("₹99.00"));
        assert!(text.contains("₹1.00"));
        assert!(!form.is_submitting());

        let rows_after: Vec<_> = form.rows().iter().map(|r| r.amount.value().to_string()).collect();
        assert_eq!(rows_before, rows_after);
        assert!(form.alert().is_some());
    }

    #[test]
    fn test_submit_without_valid_rows() {
        let (mut form, now) = form();
        fill(&mut form, 0, "Cash", EntrySide::Unset, "100");
        fill(&mut form, 1, "", EntrySide::Credit, "");
        assert_eq!(form.submit(now).unwrap_err(), FormError::NoValidLines);
    }

    #[test]
    fn test_accepted_response_clears_and_cancels_timer() {
        let (mut form, now) = form();
        balanced(&mut form);
        let submission = form.submit(now).unwrap();

        let outcome = form.complete_submission(submission.token, Ok(()), now);
        assert_eq!(outcome, ResponseOutcome::Accepted);
        assert!(!form.is_submitting());
        assert!(form.rows().iter().all(|r| r.name.value().is_empty()));
        assert_eq!(
            form.notifications().current().unwrap().notification_type,
            NotificationType::Success
        );

        // The fallback timer was cancelled: nothing fires later
        form.tick(now + Duration::from_secs(6));
        assert!(form.notifications().is_empty());
    }

    #[test]
    fn test_rejected_response_keeps_form() {
        let (mut form, now) = form();
        balanced(&mut form);
        let submission = form.submit(now).unwrap();

        let outcome =
            form.complete_submission(submission.token, Err("Date is required".into()), now);
        assert_eq!(outcome, ResponseOutcome::Rejected);
        assert!(!form.is_submitting());
        assert_eq!(form.rows()[0].name.value(), "Cash");
    }

    #[test]
    fn test_timeout_reenables_submit() {
        let (mut form, now) = form();
        balanced(&mut form);
        let submission = form.submit(now).unwrap();

        form.tick(now + Duration::from_secs(4));
        assert!(form.is_submitting());

        form.tick(now + Duration::from_secs(5));
        assert!(!form.is_submitting());

        // A late success still lands
        let outcome = form.complete_submission(submission.token, Ok(()), now + Duration::from_secs(7));
        assert_eq!(outcome, ResponseOutcome::Accepted);
    }

    #[test]
    fn test_huge_timeout_waits_for_response() {
        let mut settings = Settings::default();
        settings.submit_timeout_secs = u64::MAX;
        let now = Instant::now();
        let mut form = JournalForm::new(FormConfig::from(&settings), now);
        balanced(&mut form);

        let submission = form.submit(now).unwrap();
        form.tick(now + Duration::from_secs(3600));
        assert!(form.is_submitting());

        let outcome = form.complete_submission(submission.token, Ok(()), now);
        assert_eq!(outcome, ResponseOutcome::Accepted);
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_stale_response_ignored() {
        let (mut form, now) = form();
        balanced(&mut form);
        let first = form.submit(now).unwrap();
        form.tick(now + Duration::from_secs(5));
        let second = form.submit(now + Duration::from_secs(5)).unwrap();

        assert_eq!(
            form.complete_submission(first.token, Ok(()), now),
            ResponseOutcome::Stale
        );
        assert!(form.is_submitting());
        assert_eq!(
            form.complete_submission(second.token, Ok(()), now),
            ResponseOutcome::Accepted
        );
    }

    #[test]
    fn test_enter_walks_then_submits_on_last() {
        let (mut form, now) = form();
        balanced(&mut form);
        let last = FocusTarget::Amount(form.rows()[1].id);

        assert!(form.advance_or_submit(now).is_none());
        assert_eq!(form.focus(), FocusTarget::Narration);

        form.set_focus(last);
        let submission = form.advance_or_submit(now);
        assert!(submission.is_some());
    }

    #[test]
    fn test_clear_form_resets_and_notifies() {
        let (mut form, now) = form();
        balanced(&mut form);
        form.add_row(now);
        let highest = form.rows().last().unwrap().id;
        form.submit(now).unwrap();

        form.clear_form(now);
        assert_eq!(form.rows().len(), INITIAL_ROWS);
        assert!(form.rows().iter().all(|r| r.id > highest));
        assert!(form.narration().value().is_empty());
        assert!(!form.is_submitting());
        assert_eq!(form.focus(), FocusTarget::Date);
        assert_eq!(form.notifications().current().unwrap().message, "Form cleared");
    }

    #[test]
    fn test_notifications_expire_and_dismiss() {
        let (mut form, now) = form();
        form.notify("hello", NotificationType::Info, now);
        assert!(form.dismiss_notification());
        assert!(!form.dismiss_notification());

        form.notify("bye", NotificationType::Info, now);
        form.tick(now + Duration::from_secs(5));
        assert!(form.notifications().is_empty());
    }

    #[test]
    fn test_side_cycling() {
        let (mut form, _) = form();
        let id = form.rows()[0].id;
        form.set_amount(id, "10");
        form.set_focus(FocusTarget::Side(id));
        form.cycle_focused_side(true);
        assert_eq!(form.row(id).unwrap().side, EntrySide::Debit);
        assert_eq!(form.totals().debit.cents(), 1000);
        form.cycle_focused_side(true);
        assert_eq!(form.totals().credit.cents(), 1000);
        form.cycle_focused_side(false);
        assert_eq!(form.row(id).unwrap().side, EntrySide::Debit);
    }

    #[test]
    fn test_autocomplete() {
        let (mut form, _) = form();
        let id = form.rows()[0].id;
        form.set_focus(FocusTarget::Name(id));
        form.insert_char('c');
        assert!(form.suggestions().is_empty());
        form.insert_char('a');
        assert_eq!(form.suggestions(), vec!["Cash", "Capital"]);

        assert!(form.move_suggestion(true));
        assert!(form.move_suggestion(true));
        assert_eq!(form.suggestion_index(), 1);
        assert!(form.accept_suggestion());
        assert_eq!(form.row(id).unwrap().name.value(), "Capital");
        assert!(form.suggestions().is_empty());
    }
}
