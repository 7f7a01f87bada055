//! Scenario: Running the books for one project.
//!
//! Journey: a contractor creates a project, records an expense and two
//! payments, and reads the financial overview.
//!
//! Success criteria: totals come out exactly and survive a restart (every
//! command is a fresh process over the same data directory).

use crate::common::TestEnv;

#[test]
fn scenario_site_a_financials() {
    let env = TestEnv::new();

    // Step 1: create the project
    let id = env.create_project("Site A", "100000");

    // Step 2: record a materials expense
    let result = env.run(&[
        "expense",
        "add",
        "--project",
        &id,
        "--category",
        "materials",
        "--description",
        "Cement and sand",
        "--amount",
        "20000",
        "--date",
        "2026-02-01",
    ]);
    assert!(result.success, "expense add failed: {}", result.stderr);

    // Step 3: client advance comes in, supplier payment goes out
    let result = env.run(&[
        "payment",
        "add",
        "--project",
        &id,
        "--direction",
        "received",
        "--to",
        "Test Client",
        "--amount",
        "50000",
        "--description",
        "Advance",
        "--date",
        "2026-02-10",
    ]);
    assert!(result.success, "payment add failed: {}", result.stderr);

    let result = env.run(&[
        "payment",
        "add",
        "--project",
        &id,
        "--direction",
        "given",
        "--to",
        "Steel supplier",
        "--amount",
        "10000",
        "--description",
        "Rebar delivery",
        "--date",
        "2026-02-11",
    ]);
    assert!(result.success, "payment add failed: {}", result.stderr);

    // Step 4: the overview derives the expected figures
    let result = env.run(&["--json", "show", &id]);
    assert!(result.success, "show failed: {}", result.stderr);
    let json = result.json();
    let summary = &json["detail"]["summary"];
    assert_eq!(summary["totalExpenses"], 20000);
    assert_eq!(summary["totalReceived"], 50000);
    assert_eq!(summary["totalPaid"], 10000);
    assert_eq!(summary["netBalance"], 20000);

    assert_eq!(json["detail"]["expenseCount"], 1);
    assert_eq!(json["detail"]["paymentCount"], 2);
    // Most recent payment first
    assert_eq!(json["detail"]["recentPayments"][0]["to"], "Steel supplier");

    // Step 5: everything persisted as one JSON array per collection
    for key in ["projects", "expenses", "payments"] {
        let raw = std::fs::read_to_string(env.data_path(&format!("{key}.json"))).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(doc.is_array(), "{key}.json should hold an array");
    }

    // And the rendered view shows the same story
    let result = env.run(&["show", &id]);
    assert!(result.stdout.contains("Net Balance      ₹20,000"));
    assert!(result.stdout.contains("Budget Left      ₹80,000"));
}
