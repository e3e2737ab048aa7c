//! Canned Lando responses and config files for tests against `mockito`
//!
//! Not every helper is used by every test binary.

#![allow(dead_code)]

use lando_cli::config::Config;
use std::fs;
use std::path::{Path, PathBuf};

pub const TOKEN: &str = "fake_token";
pub const EMAIL: &str = "test@example.com";

/// Config pointing at a mock server
pub fn config_for(url: &str) -> Config {
    Config {
        api_token: TOKEN.to_string(),
        user_email: EMAIL.to_string(),
        lando_url: url.trim_end_matches('/').to_string(),
    }
}

/// Write a `lando.toml` for `url` into `dir`, returning its path
pub fn write_config(dir: &Path, url: &str) -> PathBuf {
    let path = dir.join("lando.toml");
    fs::write(
        &path,
        format!("[auth]\napi_token = \"{TOKEN}\"\nuser_email = \"{EMAIL}\"\nlando_url = \"{url}\"\n"),
    )
    .expect("failed to write config");
    path
}

pub fn repo_info_body() -> &'static str {
    r#"{"repo_name": "test-repo", "branch_name": "main"}"#
}

pub fn job_body(id: u64) -> String {
    format!(r#"{{"job_id": {id}, "status_url": "https://lando.test/api/job/{id}", "message": "queued"}}"#)
}
