//! Scenario: Deleting a project removes its financial history.
//!
//! The delete confirmation promises that expenses and payments go with the
//! project; the store keeps that promise, and other projects' entries are
//! untouched.

use crate::common::TestEnv;

fn add_expense(env: &TestEnv, project: &str, description: &str, amount: &str) {
    let result = env.run(&[
        "expense",
        "add",
        "--project",
        project,
        "--category",
        "materials",
        "--description",
        description,
        "--amount",
        amount,
        "--date",
        "2026-02-01",
    ]);
    assert!(result.success, "expense add failed: {}", result.stderr);
}

fn add_payment(env: &TestEnv, project: &str, direction: &str, amount: &str) {
    let result = env.run(&[
        "payment",
        "add",
        "--project",
        project,
        "--direction",
        direction,
        "--to",
        "Counterparty",
        "--amount",
        amount,
        "--description",
        "Instalment",
        "--date",
        "2026-02-10",
    ]);
    assert!(result.success, "payment add failed: {}", result.stderr);
}

#[test]
fn scenario_cascade_delete_spares_other_projects() {
    let env = TestEnv::new();
    let doomed = env.create_project("Doomed", "50000");
    let kept = env.create_project("Kept", "80000");

    add_expense(&env, &doomed, "Doomed expense", "1000");
    add_expense(&env, &kept, "Kept expense", "2000");
    add_payment(&env, &doomed, "received", "5000");
    add_payment(&env, &doomed, "given", "500");
    add_payment(&env, &kept, "received", "7000");

    let result = env.run(&["--json", "project", "remove", &doomed, "--yes"]);
    assert!(result.success, "remove failed: {}", result.stderr);
    let json = result.json();
    assert_eq!(json["expensesRemoved"], 1);
    assert_eq!(json["paymentsRemoved"], 2);

    // The project is gone from subsequent loads
    let list = env.run(&["--json", "project", "list"]);
    assert_eq!(list.json()["count"], 1);
    assert_eq!(list.json()["projects"][0]["name"], "Kept");

    let show = env.run(&["show", &doomed]);
    assert!(!show.success);

    // Its entries are gone too, while the other project's survive
    let expenses = env.run(&["--json", "expense", "list"]);
    let expenses = expenses.json();
    assert_eq!(expenses["count"], 1);
    assert_eq!(expenses["expenses"][0]["description"], "Kept expense");

    let payments = env.run(&["--json", "payment", "list"]);
    let payments = payments.json();
    assert_eq!(payments["count"], 1);
    assert_eq!(
        payments["payments"][0]["projectId"],
        serde_json::json!(kept.as_str())
    );
}
