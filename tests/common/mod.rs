use assert_cmd::Command;
use std::path::Path;

pub fn tagtrail_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tagtrail").unwrap();
    cmd.env_remove("TAGTRAIL_ROOT");
    cmd.env_remove("TAGTRAIL_LOG");
    cmd
}

#[allow(dead_code)]
pub fn init_at(path: &Path) {
    tagtrail_cmd().arg("init").arg(path).assert().success();
}
