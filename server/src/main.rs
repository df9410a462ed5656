use anyhow::Result;
use axum::Router;
use checker::config::CheckerConfig;
use checker::SymptomOrder;
use clap::Parser;
use server::build_app;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// JSON symptom table (built-in demonstration data when omitted)
    #[arg(long)]
    table: Option<PathBuf>,
    /// JSON action plans (must contain "Default")
    #[arg(long)]
    plans: Option<PathBuf>,
    /// Order in which symptoms receive primes: "name" or "case-insensitive"
    #[arg(long, default_value = "name")]
    order: SymptomOrder,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let app: Router = build_app(&CheckerConfig::new(args.table, args.plans).with_order(args.order))?;

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_accept_order() {
        let args = Args::try_parse_from(["server", "--order", "case-insensitive", "--port", "9000"]).unwrap();
        assert_eq!(args.order, SymptomOrder::CaseInsensitiveName);
        assert_eq!(args.port, 9000);
        let defaults = Args::try_parse_from(["server"]).unwrap();
        assert_eq!(defaults.order, SymptomOrder::Name);
        assert_eq!(defaults.host, "0.0.0.0");
        assert!(Args::try_parse_from(["server", "--order", "shuffle"]).is_err());
    }
}
