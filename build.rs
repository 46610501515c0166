//! Stamps the commit the landing page was built from.
//!
//! `LANDING_GIT_SHA` is taken from the environment when CI sets it, then
//! from `GITHUB_SHA` (shortened), then from `git rev-parse`.

use std::env;
use std::process::Command;

const SHORT_SHA_LEN: usize = 7;

fn main() {
    let git_sha = env::var("LANDING_GIT_SHA")
        .or_else(|_| env::var("GITHUB_SHA").map(|sha| short_sha(&sha)))
        .ok()
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".into());
    println!("cargo:rustc-env=LANDING_GIT_SHA={}", git_sha);

    println!("cargo:rerun-if-env-changed=LANDING_GIT_SHA");
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");
}

fn short_sha(sha: &str) -> String {
    sha.chars().take(SHORT_SHA_LEN).collect()
}

fn git_head() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())?;
    let sha = String::from_utf8(output.stdout).ok()?;
    Some(short_sha(sha.trim()))
}
