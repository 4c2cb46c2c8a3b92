use std::process::ExitCode;

use configs::AppConfig;
use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

/// Identity attached to lifecycle events of this process.
#[derive(Clone, Copy)]
struct Instance {
    id: Uuid,
    pid: u32,
}

fn load_config() -> Option<AppConfig> {
    match AppConfig::load_and_validate() {
        Ok(cfg) => {
            common::utils::logging::init_logging(cfg.logging.format);
            Some(cfg)
        }
        Err(e) => {
            // No config means no chosen format; report in the default one
            common::utils::logging::init_logging_default();
            error!(event = "config_invalid", error = %e, "cannot load configuration");
            None
        }
    }
}

fn install_panic_hook(instance: Instance) {
    std::panic::set_hook(Box::new(move |info| {
        error!(event = "panic", service_id = %instance.id, pid = instance.pid, message = %info, "unhandled panic");
    }));
}

fn build_runtime(worker_threads: Option<usize>) -> std::io::Result<tokio::runtime::Runtime> {
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads {
        builder.worker_threads(w);
    }
    builder.build()
}

fn main() -> ExitCode {
    dotenv().ok();
    let Some(cfg) = load_config() else { return ExitCode::FAILURE };

    let instance = Instance { id: Uuid::new_v4(), pid: std::process::id() };
    install_panic_hook(instance);

    let rt = match build_runtime(cfg.server.worker_threads) {
        Ok(rt) => rt,
        Err(e) => {
            error!(event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        event = "start",
        service_id = %instance.id,
        pid = instance.pid,
        version = env!("CARGO_PKG_VERSION"),
        threads = cfg.server.worker_threads.unwrap_or_default(),
        backend = ?cfg.storage.backend,
        "student registry starting"
    );

    rt.block_on(async move {
        let shutdown = async move {
            server::startup::shutdown_signal().await;
            info!(event = "shutdown_signal", service_id = %instance.id, "draining connections");
        };
        match server::run(cfg, shutdown).await {
            Ok(()) => {
                info!(event = "stop", service_id = %instance.id, "server stopped");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(event = "run_failed", error = %e, "server exited with error");
                ExitCode::FAILURE
            }
        }
    })
}
