use axum_server::tls_rustls::RustlsConfig;
use clap::Parser;

use app::{AppState, create_app};
use config::Args;
use error::ServeError;
use random::create_shared_rng;

mod app;
mod config;
mod error;
mod forecast;
mod random;
mod weather_routes;

#[tokio::main]
async fn main() -> Result<(), ServeError> {
    env_logger::init();

    let args = Args::parse();
    let addr = args.socket_addr();
    let tls_files = args.tls_files()?;

    let state = AppState {
        rng: create_shared_rng(args.seed),
        max_days: args.max_days,
    };
    if let Some(max_days) = state.max_days {
        log::info!("limiting forecasts to {} days", max_days);
    }
    let app = create_app(state);

    log::info!("listening on {}", addr);
    if let Some(tls_files) = tls_files {
        log::info!(
            "using tls with key file {} and cert file {}",
            tls_files.key_file_path,
            tls_files.cert_file_path
        );
        let tls = RustlsConfig::from_pem_file(tls_files.cert_file_path, tls_files.key_file_path)
            .await
            .map_err(ServeError::Tls)?;
        axum_server::bind_rustls(addr, tls)
            .serve(app.into_make_service())
            .await?;
    } else {
        axum_server::bind(addr)
            .serve(app.into_make_service())
            .await?;
    }
    Ok(())
}
