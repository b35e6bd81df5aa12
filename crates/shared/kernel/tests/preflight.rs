use bvp_domain::config::BootConfig;
use bvp_kernel::preflight::{self, CheckStatus};
use std::path::PathBuf;

fn config_with_data_dir(dir: PathBuf) -> BootConfig {
    let mut cfg = BootConfig::default();
    cfg.storage.data_dir = dir;
    cfg
}

#[test]
fn writable_data_dir_passes() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let cfg = config_with_data_dir(tmp.path().join("data"));

    let report = preflight::run(&cfg);
    assert!(!report.has_failures(), "default config in a writable dir should pass");
    assert!(tmp.path().join("data").exists(), "preflight should create the data directory");
}

#[test]
fn empty_server_command_fails() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let mut cfg = config_with_data_dir(tmp.path().join("data"));
    cfg.server.command.program = String::new();

    let report = preflight::run(&cfg);
    assert!(report.has_failures());
    let check = report
        .checks()
        .iter()
        .find(|c| c.name == "server.command")
        .expect("server.command check present");
    assert_eq!(check.status, CheckStatus::Fail);
}

#[test]
fn zero_port_fails() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let mut cfg = config_with_data_dir(tmp.path().join("data"));
    cfg.server.port = 0;

    let report = preflight::run(&cfg);
    assert!(report.has_failures());
}

#[test]
fn skipped_init_is_a_warning_not_a_failure() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let mut cfg = config_with_data_dir(tmp.path().join("data"));
    cfg.init.skip = true;
    cfg.init.command.program = String::new();

    let report = preflight::run(&cfg);
    assert!(!report.has_failures(), "skipped init must not require an init command");
    let check =
        report.checks().iter().find(|c| c.name == "init.command").expect("init check present");
    assert_eq!(check.status, CheckStatus::Warn);
}

#[cfg(unix)]
#[test]
fn read_only_data_dir_fails() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let tmp = tempfile::tempdir().expect("temp dir");
    let dir = tmp.path().join("data");
    fs::create_dir_all(&dir).expect("create dir");
    fs::set_permissions(&dir, fs::Permissions::from_mode(0o555)).expect("chmod");

    let cfg = config_with_data_dir(dir.clone());
    let report = preflight::run(&cfg);

    // Restore so the tempdir can be cleaned up.
    fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).expect("chmod back");

    assert!(report.has_failures(), "read-only data directory must fail preflight");
}
