use std::{
    env::var,
    path::{Path, PathBuf},
};

use lazy_static::lazy_static;

lazy_static! {
    static ref CONFIG: Config = Config::new();
}

struct Config {
    dev_mode: bool,
    default_project: String,
    static_dir: PathBuf,
    render_errors: bool,
    git_sha: String,
}

impl Config {
    fn new() -> Config {
        let dev_mode = env_is_set("MCP_DEV_MODE");

        Config {
            dev_mode,
            default_project: env_string_default("MCP_DEFAULT_PROJECT", "myproject"),
            static_dir: env_path_default("MCP_STATIC_DIRECTORY", "static"),
            render_errors: env_is_set("RENDER_ERRORS") || dev_mode,
            git_sha: env!("GIT_SHA").to_string(),
        }
    }
}

pub fn dev_mode() -> bool {
    CONFIG.dev_mode
}

pub fn default_project<'a>() -> &'a str {
    &CONFIG.default_project
}

pub fn static_dir<'a>() -> &'a Path {
    &CONFIG.static_dir
}

pub fn render_errors() -> bool {
    CONFIG.render_errors
}

pub fn git_sha<'a>() -> &'a str {
    &CONFIG.git_sha
}

fn env_is_set(name: &str) -> bool {
    var(name).is_ok()
}

fn env_string_default(name: &str, default: &str) -> String {
    match var(name) {
        Ok(value) => value,
        Err(_) => default.to_string(),
    }
}

fn env_path_default(name: &str, default: &str) -> PathBuf {
    match var(name) {
        Ok(value) => PathBuf::from(value),
        Err(_) => PathBuf::from(default),
    }
}
