//! Process entry shared by the deployment binaries.

use std::process::ExitCode;

use configs::AppConfig;
use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

use crate::routes::Deployable;
use crate::startup;

fn init_logging(service: &'static str) {
    // .env first so RUST_LOG and LOG_FORMAT take effect
    dotenv().ok();
    common::utils::logging::init_logging_from_env();
    info!(service, event = "logger_init", "tracing subscriber initialized");
}

/// Run one deployment serving `K` until shutdown.
///
/// `default_db_url` is used when neither `config.toml` nor `DATABASE_URL`
/// names a database.
pub fn launch<K: Deployable>(service: &'static str, default_db_url: &str) -> ExitCode {
    init_logging(service);

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(service, event = "panic", %service_id, pid, message = %info, "unhandled panic occurred");
    }));

    let cfg = match AppConfig::load_for(default_db_url) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service, event = "config_invalid", error = %e, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    // config.toml first, then TOKIO_WORKER_THREADS
    let worker_threads = cfg
        .server
        .worker_threads
        .or_else(|| std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()))
        .filter(|w| *w > 0);

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads {
        builder.worker_threads(w);
    }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service, event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service,
        event = "start",
        %service_id,
        pid,
        version,
        resource = K::COLLECTION,
        threads = worker_threads.unwrap_or_default(),
        "service starting"
    );

    match rt.block_on(startup::run::<K>(cfg)) {
        Ok(()) => {
            info!(service, event = "stop", %service_id, pid, "service stopped normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service, event = "run_failed", %service_id, error = %e, "service exited with error");
            ExitCode::FAILURE
        }
    }
}
