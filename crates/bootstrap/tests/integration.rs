#![cfg(unix)]

use bvp_bootstrap::{BootstrapError, InitOutcome, run_init, supervise_server};
use bvp_domain::config::CommandSpec;
use bvp_domain::policy::InitPolicy;

fn sh(script: &str) -> CommandSpec {
    CommandSpec::new("sh", &["-c", script])
}

#[test]
fn init_exit_zero_is_success() {
    let outcome = run_init(&sh("exit 0")).expect("init should spawn");
    assert_eq!(outcome, InitOutcome::Success);
    assert!(outcome.tolerated_by(InitPolicy::Strict));
}

#[test]
fn init_exit_one_is_already_initialized() {
    let outcome = run_init(&sh("exit 1")).expect("init should spawn");
    assert_eq!(outcome, InitOutcome::AlreadyInitialized);
    assert!(outcome.tolerated_by(InitPolicy::Strict));
}

#[test]
fn init_other_codes_are_fatal_under_strict() {
    let outcome = run_init(&sh("exit 2")).expect("init should spawn");
    assert_eq!(outcome, InitOutcome::Fatal(2));
    assert!(!outcome.tolerated_by(InitPolicy::Strict));
    assert!(outcome.tolerated_by(InitPolicy::Lenient));
    assert_eq!(outcome.exit_code(), 2);
}

#[test]
fn missing_init_program_is_a_spawn_error() {
    let err = run_init(&CommandSpec::new("definitely-not-a-real-program-bvp", &[]))
        .expect_err("spawn must fail");
    assert!(matches!(err, BootstrapError::Spawn { what: "init", .. }));
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn supervised_server_exit_code_is_propagated() {
    let code = supervise_server(&sh("exit 7")).await.expect("server should spawn");
    assert_eq!(code, 7);
}

#[tokio::test]
async fn supervised_server_success_is_zero() {
    let code = supervise_server(&sh("exit 0")).await.expect("server should spawn");
    assert_eq!(code, 0);
}

#[tokio::test]
async fn missing_server_program_is_a_spawn_error() {
    let err = supervise_server(&CommandSpec::new("definitely-not-a-real-program-bvp", &[]))
        .await
        .expect_err("spawn must fail");
    assert!(matches!(err, BootstrapError::Spawn { what: "server", .. }));
}
