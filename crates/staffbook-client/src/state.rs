//! UI state and its transitions.
//!
//! [`AppState`] is a plain value. Every change goes through
//! [`AppState::reduce`], which takes the old state and an [`Action`] and
//! returns the new one without side effects.

use std::fmt;

use staffbook_core::Employee;

/// Message shown when the list cannot be loaded.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch employees";

// ============================================================================
// Notification
// ============================================================================

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// The action worked.
    #[default]
    Success,
    /// The action failed.
    Error,
}

impl Severity {
    /// Lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transient, dismissible outcome message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Notification {
    /// Whether the banner is showing.
    pub open: bool,
    /// Text of the banner.
    pub message: String,
    /// Presentation style.
    pub severity: Severity,
}

impl Notification {
    /// An open success banner.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            open: true,
            message: message.into(),
            severity: Severity::Success,
        }
    }

    /// An open error banner.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            open: true,
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// `[severity] message`, or `None` when closed.
    pub fn render(&self) -> Option<String> {
        self.open
            .then(|| format!("[{}] {}", self.severity, self.message))
    }
}

// ============================================================================
// Form and mutations
// ============================================================================

/// Whether the form creates a new record or edits the selected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    /// New record.
    #[default]
    Add,
    /// Existing record held in [`AppState::selected`].
    Edit,
}

/// Open/closed state of the add/edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormState {
    /// Whether the form is showing.
    pub open: bool,
    /// What submitting the form will do.
    pub mode: FormMode,
}

/// A write the user can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// Create.
    Add,
    /// Update.
    Edit,
    /// Delete.
    Delete,
}

impl Mutation {
    /// Notification text after the server accepted the write.
    pub fn success_message(&self) -> &'static str {
        match self {
            Mutation::Add => "Employee added",
            Mutation::Edit => "Employee updated",
            Mutation::Delete => "Employee deleted",
        }
    }

    /// Notification text after the write failed.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Mutation::Add => "Failed to add employee",
            Mutation::Edit => "Failed to update employee",
            Mutation::Delete => "Failed to delete employee",
        }
    }
}

// ============================================================================
// State and transitions
// ============================================================================

/// Everything a front end needs to draw the employee screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    /// Last successfully fetched list.
    pub employees: Vec<Employee>,
    /// A list fetch is in flight.
    pub loading: bool,
    /// Add/edit form.
    pub form: FormState,
    /// Record being edited or viewed.
    pub selected: Option<Employee>,
    /// Whether the details dialog is showing.
    pub view_open: bool,
    /// Outcome banner.
    pub notification: Notification,
}

/// Something that happened, fed to [`AppState::reduce`].
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A list request was issued.
    FetchStarted,
    /// The list request returned records.
    FetchSucceeded(Vec<Employee>),
    /// The list request failed.
    FetchFailed,
    /// Show an empty form for a new record.
    OpenAddForm,
    /// Show the form pre-filled with this record.
    OpenEditForm(Employee),
    /// Hide the form.
    CloseForm,
    /// Show the details dialog for this record.
    OpenView(Employee),
    /// Hide the details dialog.
    CloseView,
    /// The server accepted a write.
    MutationSucceeded(Mutation),
    /// A write failed.
    MutationFailed(Mutation),
    /// Hide the banner.
    DismissNotification,
}

impl AppState {
    /// Apply `action` and return the resulting state.
    pub fn reduce(mut self, action: Action) -> AppState {
        match action {
            Action::FetchStarted => {
                self.loading = true;
            }
            Action::FetchSucceeded(employees) => {
                self.employees = employees;
                self.loading = false;
            }
            Action::FetchFailed => {
                self.loading = false;
                self.notification = Notification::error(FETCH_FAILED_MESSAGE);
            }
            Action::OpenAddForm => {
                self.selected = None;
                self.form = FormState {
                    open: true,
                    mode: FormMode::Add,
                };
            }
            Action::OpenEditForm(employee) => {
                self.selected = Some(employee);
                self.form = FormState {
                    open: true,
                    mode: FormMode::Edit,
                };
            }
            Action::CloseForm => {
                self.form.open = false;
                self.selected = None;
            }
            Action::OpenView(employee) => {
                self.selected = Some(employee);
                self.view_open = true;
            }
            Action::CloseView => {
                self.view_open = false;
                self.selected = None;
            }
            Action::MutationSucceeded(mutation) => {
                if matches!(mutation, Mutation::Add | Mutation::Edit) {
                    self.form.open = false;
                    self.selected = None;
                }
                self.notification = Notification::success(mutation.success_message());
            }
            Action::MutationFailed(mutation) => {
                self.notification = Notification::error(mutation.failure_message());
            }
            Action::DismissNotification => {
                self.notification.open = false;
            }
        }
        self
    }

    /// Whether the banner currently reports a failure.
    pub fn has_error(&self) -> bool {
        self.notification.open && self.notification.severity == Severity::Error
    }
}
