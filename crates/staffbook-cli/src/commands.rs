//! Command execution.
//!
//! Every command mounts the app first, performs its action, then prints the
//! notification and the resulting grid or dialog to `out`.

use std::io::Write;

use staffbook_client::{App, Confirm, EmployeeApi, EmployeeForm};
use staffbook_core::{EmployeeId, Field};

use crate::cli::Command;
use crate::{Error, Result};

/// Run `command` against `app`, writing everything user-facing to `out`.
///
/// Returns an error when the action failed; the notification has already
/// been printed by then.
pub async fn run<A, W, C>(app: &mut App<A>, command: Command, out: &mut W, confirm: &C) -> Result<()>
where
    A: EmployeeApi,
    W: Write,
    C: Confirm,
{
    app.mount().await;
    if app.state().has_error() {
        print_notification(app, out)?;
        return fail_on_error(app);
    }

    match command.clone() {
        Command::List { page, .. } => {
            let mut table = app.table();
            if let Some(order) = command.sort_order() {
                table.sort_by(order);
            }
            table.set_page(usize::try_from(page.saturating_sub(1)).unwrap_or(usize::MAX));
            write!(out, "{table}")?;
        }
        Command::Show { id } => {
            let dialog = app.open_view(id).ok_or_else(|| Error::not_found(id))?;
            write!(out, "{dialog}")?;
            app.close_view();
        }
        Command::Add {
            name,
            email,
            position,
            salary,
        } => {
            let form = app
                .open_add_form()
                .with(Field::Name, name)
                .with(Field::Email, email)
                .with(Field::Position, position)
                .with(Field::Salary, salary);
            submit(app, &form, out).await?;
        }
        Command::Edit {
            id,
            name,
            email,
            position,
            salary,
        } => {
            let mut form = app.open_edit_form(id).ok_or_else(|| Error::not_found(id))?;
            let overrides = [
                (Field::Name, name),
                (Field::Email, email),
                (Field::Position, position),
                (Field::Salary, salary),
            ];
            for (field, value) in overrides {
                if let Some(value) = value {
                    form.set(field, value);
                }
            }
            submit(app, &form, out).await?;
        }
        Command::Delete { id, yes } => {
            delete(app, id, yes, confirm, out).await?;
        }
    }

    fail_on_error(app)
}

async fn submit<A: EmployeeApi, W: Write>(
    app: &mut App<A>,
    form: &EmployeeForm,
    out: &mut W,
) -> Result<()> {
    if let Err(errors) = app.submit(form).await {
        write!(out, "{}", form.render(Some(&errors)))?;
        return Err(errors.into());
    }
    print_notification(app, out)?;
    write!(out, "{}", app.table())?;
    Ok(())
}

async fn delete<A: EmployeeApi, W: Write, C: Confirm>(
    app: &mut App<A>,
    id: EmployeeId,
    yes: bool,
    confirm: &C,
    out: &mut W,
) -> Result<()> {
    let confirmed = if yes {
        app.delete(id, &|_: &str| true).await
    } else {
        app.delete(id, confirm).await
    };
    if !confirmed {
        writeln!(out, "Cancelled")?;
        return Ok(());
    }
    print_notification(app, out)?;
    write!(out, "{}", app.table())?;
    Ok(())
}

fn print_notification<A: EmployeeApi, W: Write>(app: &App<A>, out: &mut W) -> Result<()> {
    if let Some(line) = app.state().notification.render() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn fail_on_error<A: EmployeeApi>(app: &App<A>) -> Result<()> {
    if app.state().has_error() {
        Err(Error::action_failed(app.state().notification.message.clone()))
    } else {
        Ok(())
    }
}
