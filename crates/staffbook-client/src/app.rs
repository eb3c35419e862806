//! Orchestration: user intents in, API calls and state transitions out.

use staffbook_core::{Employee, EmployeeId};

use crate::client::EmployeeApi;
use crate::form::{EmployeeForm, FieldErrors};
use crate::state::{Action, AppState, FormMode, Mutation};
use crate::table::EmployeeTable;
use crate::view::EmployeeViewDialog;

/// Prompt shown before a delete request.
pub const CONFIRM_DELETE_PROMPT: &str = "Are you sure you want to delete this employee?";

/// Asks the user to approve a destructive action.
pub trait Confirm {
    /// Returns `true` to go ahead.
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// The employee screen: an API handle plus the current [`AppState`].
///
/// Each method issues at most one request for the user action itself; a
/// successful write is followed by a list refresh.
pub struct App<A: EmployeeApi> {
    api: A,
    state: AppState,
}

impl<A: EmployeeApi> App<A> {
    /// A fresh screen. Call [`mount`](Self::mount) to load the list.
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: AppState::default(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The API handle.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// The list as a grid on its first page.
    pub fn table(&self) -> EmployeeTable {
        EmployeeTable::new(self.state.employees.clone())
    }

    fn dispatch(&mut self, action: Action) {
        self.state = std::mem::take(&mut self.state).reduce(action);
    }

    fn find(&self, id: EmployeeId) -> Option<Employee> {
        self.state.employees.iter().find(|e| e.id == id).cloned()
    }

    /// First load of the list.
    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    /// Reload the list. On failure the previous list stays.
    pub async fn refresh(&mut self) {
        self.dispatch(Action::FetchStarted);
        match self.api.list().await {
            Ok(employees) => {
                log::debug!("fetched {} employees", employees.len());
                self.dispatch(Action::FetchSucceeded(employees));
            }
            Err(e) => {
                log::warn!("failed to fetch employees: {e}");
                self.dispatch(Action::FetchFailed);
            }
        }
    }

    /// Open an empty add form.
    pub fn open_add_form(&mut self) -> EmployeeForm {
        self.dispatch(Action::OpenAddForm);
        EmployeeForm::blank()
    }

    /// Open the edit form for a listed record, pre-filled.
    ///
    /// Returns `None` if `id` is not in the current list.
    pub fn open_edit_form(&mut self, id: EmployeeId) -> Option<EmployeeForm> {
        let employee = self.find(id)?;
        let form = EmployeeForm::from_employee(&employee);
        self.dispatch(Action::OpenEditForm(employee));
        Some(form)
    }

    /// Close the form without submitting.
    pub fn close_form(&mut self) {
        self.dispatch(Action::CloseForm);
    }

    /// Open the details dialog for a listed record.
    pub fn open_view(&mut self, id: EmployeeId) -> Option<EmployeeViewDialog> {
        let employee = self.find(id)?;
        self.dispatch(Action::OpenView(employee.clone()));
        Some(EmployeeViewDialog::new(employee))
    }

    /// Close the details dialog.
    pub fn close_view(&mut self) {
        self.dispatch(Action::CloseView);
    }

    /// Validate `form` and send it as a create or update, depending on the
    /// open form's mode.
    ///
    /// Field errors block submission and no request is made. A request
    /// failure is reported through the notification, not the return value.
    pub async fn submit(&mut self, form: &EmployeeForm) -> Result<(), FieldErrors> {
        let input = form.validate()?;

        let selected = self.state.selected.as_ref().map(|e| e.id);
        let (mutation, result) = match (self.state.form.mode, selected) {
            (FormMode::Add, _) => (Mutation::Add, self.api.create(&input).await),
            (FormMode::Edit, Some(id)) => (Mutation::Edit, self.api.update(id, &input).await),
            (FormMode::Edit, None) => {
                log::warn!("edit submitted with no record selected");
                self.dispatch(Action::MutationFailed(Mutation::Edit));
                return Ok(());
            }
        };

        match result {
            Ok(employee) => {
                log::info!("{}: {}", mutation.success_message(), employee.id);
                self.dispatch(Action::MutationSucceeded(mutation));
                self.refresh().await;
            }
            Err(e) => {
                log::warn!("{}: {e}", mutation.failure_message());
                self.dispatch(Action::MutationFailed(mutation));
            }
        }
        Ok(())
    }

    /// Delete a record after `confirm` approves; otherwise do nothing.
    ///
    /// Returns `false` if the user declined.
    pub async fn delete(&mut self, id: EmployeeId, confirm: &impl Confirm) -> bool {
        if !confirm.confirm(CONFIRM_DELETE_PROMPT) {
            log::debug!("delete of {id} cancelled");
            return false;
        }

        match self.api.delete(id).await {
            Ok(()) => {
                log::info!("Employee deleted: {id}");
                self.dispatch(Action::MutationSucceeded(Mutation::Delete));
                self.refresh().await;
            }
            Err(e) => {
                log::warn!("failed to delete {id}: {e}");
                self.dispatch(Action::MutationFailed(Mutation::Delete));
            }
        }
        true
    }

    /// Hide the notification banner.
    pub fn dismiss_notification(&mut self) {
        self.dispatch(Action::DismissNotification);
    }
}
