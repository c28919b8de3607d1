use std::path::{Path, PathBuf};

use anyhow::{Context as _, bail};
use env_flags::env_flags;
use once_cell::sync::OnceCell;

use multiblast_params::config::{UserConfig, expand_home, load_user_config};
use multiblast_params::paramfile::load_param_file;
use multiblast_params::{ParamName, build_create_job_body};

fn init_tracing(home: &Path, user_cfg: Option<&UserConfig>) {
    env_flags! {
        /// Tracing filter, e.g. "info", "debug", or targets format.
        RUST_LOG: &str = "info";
        /// Preferred filter env (alias). If set, overrides RUST_LOG.
        TRACING_FILTER: &str = "";
        /// JSON formatting for logs; compact single-line otherwise.
        TRACING_JSON: bool = false;
        /// If true, also log to file under <MULTIBLAST_HOME>/logs or LOG_DIR
        LOG_TO_FILE: bool = false;
        /// Optional explicit log directory (absolute). Defaults to <MULTIBLAST_HOME>/logs
        LOG_DIR: &str = "";
    }

    use tracing_subscriber::{EnvFilter, prelude::*};

    let env_set = |k: &str| std::env::var_os(k).is_some();

    // TRACING_FILTER first, then RUST_LOG, then user config.
    let mut rust_log = if !(*TRACING_FILTER).is_empty() {
        (*TRACING_FILTER).to_string()
    } else {
        (*RUST_LOG).to_string()
    };
    let mut tracing_json = *TRACING_JSON;
    let mut log_to_file = *LOG_TO_FILE;
    let mut log_dir: Option<PathBuf> = if !(*LOG_DIR).is_empty() {
        Some(PathBuf::from((*LOG_DIR).to_string()))
    } else {
        None
    };

    if let Some(cfg) = user_cfg.and_then(|c| c.logging.as_ref()) {
        if !(env_set("TRACING_FILTER") || env_set("RUST_LOG"))
            && let Some(level) = cfg.level.as_ref()
        {
            rust_log = level.clone();
        }
        if !env_set("TRACING_JSON")
            && let Some(v) = cfg.json
        {
            tracing_json = v;
        }
        if !env_set("LOG_TO_FILE")
            && let Some(v) = cfg.to_file
        {
            log_to_file = v;
        }
        if !env_set("LOG_DIR")
            && let Some(dir) = cfg.dir.as_ref()
        {
            log_dir = Some(expand_home(dir));
        }
    }

    let filter = EnvFilter::try_new(rust_log).unwrap_or_else(|_| EnvFilter::new("info"));

    // stdout carries the job body, so logs always go to stderr.
    let base = tracing_subscriber::fmt::layer()
        .with_file(false)
        .with_line_number(false)
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr);

    static FILE_GUARD: OnceCell<tracing_appender::non_blocking::WorkerGuard> = OnceCell::new();
    let mut dir_error = None;
    let file_writer = if log_to_file {
        let dir = log_dir.unwrap_or_else(|| home.join("logs"));
        match std::fs::create_dir_all(&dir) {
            Ok(()) => {
                let appender = tracing_appender::rolling::daily(dir, "multiblast-params.log");
                let (nb, guard) = tracing_appender::non_blocking(appender);
                let _ = FILE_GUARD.set(guard);
                Some(nb)
            }
            Err(e) => {
                dir_error = Some(format!("failed to create log dir {}: {}", dir.display(), e));
                None
            }
        }
    } else {
        None
    };

    let reg = tracing_subscriber::registry().with(filter);
    let result = if tracing_json {
        let file_layer = file_writer.map(|nb| {
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(nb)
                .json()
        });
        reg.with(base.json()).with(file_layer).try_init()
    } else {
        let file_layer = file_writer.map(|nb| {
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(nb)
                .compact()
        });
        reg.with(base.compact()).with(file_layer).try_init()
    };
    if let Err(e) = result {
        tracing::debug!("tracing already set: {:?}", e);
    }
    if let Some(msg) = dir_error {
        tracing::warn!("{}", msg);
    }
}

/// `MULTIBLAST_HOME`, else `$HOME/.multiblast`, else `./.multiblast`.
fn resolve_home(explicit: &str) -> PathBuf {
    if !explicit.is_empty() {
        return expand_home(explicit);
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".multiblast");
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".multiblast")
}

fn main() -> anyhow::Result<()> {
    env_flags! {
        /// Home directory for config.toml and logs. Defaults to $HOME/.multiblast
        MULTIBLAST_HOME: &str = "";
        /// Parameter file (.json or .toml) with question param values.
        MULTIBLAST_PARAMS_FILE: &str = "";
        /// Site/project id for the job; falls back to [defaults] site in config.toml.
        MULTIBLAST_SITE: &str = "";
        /// Pretty-print the job body.
        MULTIBLAST_PRETTY: bool = true;
    }

    let home = resolve_home(*MULTIBLAST_HOME);
    let user_cfg = match load_user_config(&home) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("ignoring unreadable config in {}: {:#}", home.display(), e);
            None
        }
    };
    init_tracing(&home, user_cfg.as_ref());
    tracing::debug!("multiblast_home={}", home.display());

    if (*MULTIBLAST_PARAMS_FILE).is_empty() {
        bail!("MULTIBLAST_PARAMS_FILE is not set");
    }
    let params_path = expand_home(*MULTIBLAST_PARAMS_FILE);
    let params = load_param_file(&params_path)?;
    tracing::info!(
        "loaded {} params from {}",
        params.len(),
        params_path.display()
    );
    for key in ParamName::unknown_keys(params.keys()) {
        tracing::warn!("ignoring unknown param '{}'", key);
    }

    let site = if !(*MULTIBLAST_SITE).is_empty() {
        (*MULTIBLAST_SITE).to_string()
    } else if let Some(site) = user_cfg.as_ref().and_then(|c| c.default_site()) {
        site.to_string()
    } else {
        bail!("no site given: set MULTIBLAST_SITE or [defaults] site in config.toml");
    };

    let body = build_create_job_body(&site, &params).inspect_err(|e| {
        if e.is_user_error() {
            tracing::warn!("rejected blast request: {}", e);
        } else {
            tracing::error!("malformed blast params: {}", e);
        }
    })?;

    let out = if *MULTIBLAST_PRETTY {
        serde_json::to_string_pretty(&body)
    } else {
        serde_json::to_string(&body)
    }
    .context("failed to serialize job body")?;
    println!("{out}");
    Ok(())
}
