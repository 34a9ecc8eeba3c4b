use std::time::{Duration, Instant};

use actix_cors::Cors;
use actix_web::middleware::{Compress, DefaultHeaders};
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;

use school_admin_backend::config::AppConfig;
use school_admin_backend::routes;
use school_admin_backend::runtime::lifetime;
use school_admin_backend::utils::{json_error_handler, query_error_handler};

/// 开发环境输出带源码位置的文本日志，其余环境输出 JSON
fn init_tracing(config: &AppConfig) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.app.log_level))
        .with_writer(writer);

    if config.is_development() {
        builder.with_file(true).with_line_number(true).init();
    } else {
        builder.json().init();
    }
    guard
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let started = Instant::now();
    dotenv().ok();
    setup_panic!();

    AppConfig::init().expect("Failed to initialize configuration");
    let config = AppConfig::get();
    let _log_guard = init_tracing(config);

    info!(
        "{} {} ({}) starting, uploads in {}",
        config.app.system_name,
        env!("CARGO_PKG_VERSION"),
        config.app.environment,
        config.upload.dir,
    );

    let startup = lifetime::startup::prepare_server_startup().await;
    let storage = startup.storage;
    info!("Storage ready in {} ms", started.elapsed().as_millis());

    let payload_limit = config.server.limits.max_payload_size;
    let bind_address = config.server_bind_address();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(config.cors.max_age),
            )
            .wrap(Compress::default())
            // 成绩、账号等数据不允许被中间层缓存
            .wrap(DefaultHeaders::new().add(("Cache-Control", "no-store")))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(
                web::JsonConfig::default()
                    .limit(payload_limit)
                    .error_handler(json_error_handler),
            )
            .app_data(web::PayloadConfig::new(payload_limit))
            .app_data(web::Data::new(storage.clone()))
            .configure(routes::configure_routes)
    })
    .keep_alive(Duration::from_secs(config.server.timeouts.keep_alive))
    .client_request_timeout(Duration::from_millis(config.server.timeouts.client_request))
    .client_disconnect_timeout(Duration::from_millis(
        config.server.timeouts.client_disconnect,
    ))
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    warn!(
        "Listening on http://{} with {} workers",
        bind_address, config.server.workers
    );

    tokio::select! {
        res = server => res?,
        _ = lifetime::shutdown::listen_for_shutdown() => {
            warn!("Shutdown signal received, stopping server");
        }
    }

    Ok(())
}
