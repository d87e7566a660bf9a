//! Runs the compiled cabundle binary and captures its output

use assert_cmd::Command;
use std::collections::HashMap;

/// Captured result of one cabundle invocation
pub struct CmdResult {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

/// Run cabundle with the given arguments
pub fn cabundle(args: &[&str]) -> CmdResult {
    cabundle_with_env(args, HashMap::new())
}

/// Run cabundle with arguments and extra environment variables
pub fn cabundle_with_env(args: &[&str], env: HashMap<String, String>) -> CmdResult {
    let output = Command::cargo_bin("cabundle")
        .expect("cabundle binary should be built")
        .args(args)
        .envs(env)
        .output()
        .expect("failed to run cabundle");

    CmdResult {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        success: output.status.success(),
    }
}
