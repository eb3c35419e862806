//! Commands end to end against a live server.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use staffbook_api::{Server, ServerConfig};
use staffbook_cli::{Command, Error, commands};
use staffbook_client::{App, HttpEmployeeApi};
use staffbook_core::EmployeeId;
use staffbook_storage::MemoryStore;

async fn start_server() -> String {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..ServerConfig::in_memory()
    };
    let server = Server::new(config, Arc::new(MemoryStore::new()));
    let listener = server.bind().await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(server.serve_with_shutdown(listener, std::future::pending()));
    format!("http://{addr}/api/employees")
}

async fn exec(url: &str, command: Command, confirm: bool) -> (Result<(), Error>, String) {
    let mut app = App::new(HttpEmployeeApi::new(url).unwrap());
    let mut out = Vec::new();
    let result = commands::run(&mut app, command, &mut out, &|_: &str| confirm).await;
    (result, String::from_utf8(out).unwrap())
}

fn add(name: &str, email: &str, salary: &str) -> Command {
    Command::Add {
        name: name.to_string(),
        email: email.to_string(),
        position: "Eng".to_string(),
        salary: salary.to_string(),
    }
}

async fn first_id(url: &str) -> EmployeeId {
    let mut app = App::new(HttpEmployeeApi::new(url).unwrap());
    app.mount().await;
    app.state().employees[0].id
}

#[tokio::test]
async fn test_add_then_list() {
    let url = start_server().await;

    let (result, out) = exec(&url, add("Ann", "ann@x.com", "1000"), false).await;
    result.unwrap();
    assert!(out.starts_with("[success] Employee added\n"));
    assert!(out.contains("Ann"));

    exec(&url, add("Bob", "bob@x.com", "10"), false).await.0.unwrap();

    let list = Command::List {
        sort: Some(staffbook_core::Field::Salary),
        desc: false,
        page: 1,
    };
    let (result, out) = exec(&url, list, false).await;
    result.unwrap();
    let bob = out.find("Bob").unwrap();
    let ann = out.find("Ann").unwrap();
    assert!(bob < ann);
    assert!(out.ends_with("Page 1 of 1\n"));
}

#[tokio::test]
async fn test_invalid_add_prints_helper_text_and_fails() {
    let url = start_server().await;
    let (result, out) = exec(&url, add("Ann", "ann", "-1"), false).await;
    assert!(matches!(result, Err(Error::Form(_))));
    assert!(out.contains("Valid email is required"));
    assert!(out.contains("Valid salary is required"));
}

#[tokio::test]
async fn test_duplicate_add_fails_with_notification() {
    let url = start_server().await;
    exec(&url, add("Ann", "ann@x.com", "1"), false).await.0.unwrap();
    let (result, out) = exec(&url, add("Other", "ann@x.com", "1"), false).await;
    assert!(matches!(result, Err(Error::ActionFailed { .. })));
    assert!(out.starts_with("[error] Failed to add employee\n"));
}

#[tokio::test]
async fn test_edit_overrides_only_given_fields() {
    let url = start_server().await;
    exec(&url, add("Ann", "ann@x.com", "1000"), false).await.0.unwrap();
    let id = first_id(&url).await;

    let edit = Command::Edit {
        id,
        name: None,
        email: None,
        position: Some("Lead".to_string()),
        salary: None,
    };
    let (result, out) = exec(&url, edit, false).await;
    result.unwrap();
    assert!(out.starts_with("[success] Employee updated\n"));

    let (result, out) = exec(&url, Command::Show { id }, false).await;
    result.unwrap();
    assert_eq!(
        out,
        "Employee Details\n  Name: Ann\n  Email: ann@x.com\n  Position: Lead\n  Salary: 1000\n"
    );
}

#[tokio::test]
async fn test_show_unknown_id() {
    let url = start_server().await;
    let id = EmployeeId::new();
    let (result, _) = exec(&url, Command::Show { id }, false).await;
    assert!(matches!(result, Err(Error::NotFound { id: missing }) if missing == id));
}

#[tokio::test]
async fn test_delete_declined_then_confirmed() {
    let url = start_server().await;
    exec(&url, add("Ann", "ann@x.com", "1"), false).await.0.unwrap();
    let id = first_id(&url).await;

    let (result, out) = exec(&url, Command::Delete { id, yes: false }, false).await;
    result.unwrap();
    assert_eq!(out, "Cancelled\n");
    assert_eq!(first_id(&url).await, id);

    let (result, out) = exec(&url, Command::Delete { id, yes: true }, false).await;
    result.unwrap();
    assert!(out.starts_with("[success] Employee deleted\n"));
    assert!(out.contains("No employees"));
}

#[tokio::test]
async fn test_unreachable_api_fails() {
    let list = Command::List {
        sort: None,
        desc: false,
        page: 1,
    };
    let (result, out) = exec("http://127.0.0.1:9/api/employees", list, false).await;
    assert!(
        matches!(result, Err(Error::ActionFailed { ref message }) if message == "Failed to fetch employees")
    );
    assert!(out.starts_with("[error] Failed to fetch employees"));
}
