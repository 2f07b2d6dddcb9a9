use assert_cmd::Command;

#[test]
fn cli_help_smoke() {
    let mut cmd = Command::cargo_bin("signratio").unwrap();
    cmd.arg("--help");
    cmd.assert().success();
}

#[test]
fn cli_version_smoke() {
    let mut cmd = Command::cargo_bin("signratio").unwrap();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(format!("signratio {}\n", env!("CARGO_PKG_VERSION")));
}
