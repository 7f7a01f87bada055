mod common;

use common::TestEnv;

#[test]
fn test_help_lists_commands() {
    let env = TestEnv::new();
    let result = env.run(&["--help"]);
    assert!(result.success);
    for command in ["project", "show", "expense", "payment"] {
        assert!(
            result.stdout.contains(command),
            "help should mention '{command}'.\n{}",
            result.stdout
        );
    }
}

#[test]
fn test_unknown_subcommand_fails_with_usage_error() {
    let env = TestEnv::new();
    let result = env.run(&["frobnicate"]);
    assert!(!result.success);
    assert_eq!(result.exit_code, 2);
}
