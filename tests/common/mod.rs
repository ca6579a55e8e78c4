use assert_cmd::Command;

pub fn tptags_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tptags").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}
