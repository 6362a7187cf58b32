use std::sync::Arc;

use greenai_web::config::{AppState, Config};
use greenai_web::logger;
use greenai_web::server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let listener = server::create_listener(addr)?;

    // The static directory existence check happens here, exactly once.
    let state = Arc::new(AppState::new(&cfg));

    logger::log_server_start(&addr, &cfg);
    logger::log_static_mount(state.static_mount.as_ref());

    server::run(listener, state).await
}
