use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use fitcoach_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LogArgs},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logger(args: &LogArgs) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.filter));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if args.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let app_state = state(args.clone()).await?;
    let router = router(app_state)?;

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port).parse()?;
    info!("fitcoach-api listening on {}", addr);

    axum_server::bind(addr)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
