//! Unit Converter API Server binary
//!
//! HTTP REST API exposing the conversion table.

use clap::Parser;
use unit_converter::api::{run_api_server, server::ApiConfig};

#[derive(Parser, Debug)]
#[command(name = "convert-server")]
#[command(version)]
#[command(author)]
#[command(about = "Unit Converter API Server - HTTP REST API for unit conversions")]
#[command(long_about = r#"
Unit Converter API Server - HTTP REST API

Endpoints:
  - POST /api/v1/convert   - Convert a value between two units
  - GET  /api/v1/units     - List units and conversion rules
  - GET  /health           - Health check
  - GET  /version          - Server version info
  - GET  /                 - API documentation

Features:
  - CORS enabled for cross-origin requests
  - Graceful shutdown on SIGINT/SIGTERM
  - JSON response format with request IDs
  - Tracing and structured logging (RUST_LOG)

Example usage:
  convert-server                           # Start on localhost:8080
  convert-server --host 0.0.0.0 --port 3000

  curl -X POST http://localhost:8080/api/v1/convert \
    -H "Content-Type: application/json" \
    -d '{"value": 5, "from": "meter", "to": "kilometer"}'
"#)]
struct Args {
    /// Host address to bind to (use 0.0.0.0 for all interfaces)
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "CONVERT_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "CONVERT_PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ApiConfig {
        host: args.host,
        port: args.port,
    };

    run_api_server(config).await
}
