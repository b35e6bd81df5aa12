use bvp_domain::config::BootConfig;
use bvp_domain::policy::InitPolicy;
use bvp_kernel::config::load_config;
use std::fs;

#[test]
fn loads_from_explicit_file() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let path = tmp.path().join("entrypoint.toml");
    fs::write(
        &path,
        r#"
[server]
port = 9000

[init]
policy = "lenient"

[storage]
data_dir = "custom-data"
"#,
    )
    .expect("write config");

    let cfg: BootConfig = load_config(Some(&path)).expect("load config");
    assert_eq!(cfg.server.port, 9000);
    assert_eq!(cfg.init.policy, InitPolicy::Lenient);
    assert_eq!(cfg.storage.data_dir, std::path::PathBuf::from("custom-data"));
    // Untouched sections keep their defaults.
    assert_eq!(cfg.server.command.program, "uvicorn");
}

#[test]
fn explicit_missing_file_is_an_error() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let path = tmp.path().join("does-not-exist.toml");
    let result: Result<BootConfig, _> = load_config(Some(&path));
    assert!(result.is_err(), "explicitly named config file must exist");
}
