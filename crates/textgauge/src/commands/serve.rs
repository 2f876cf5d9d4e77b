//! Serve command: MCP server on stdio.

use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::{info, instrument};

use textgauge_core::Engine;

use crate::server::GaugeServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    // No subcommand-specific arguments; logs go to stderr and the log file
}

/// Run the MCP server until the client disconnects.
///
/// Stdout carries the protocol, so nothing else may print to it.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    engine: Engine,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    info!(
        references = engine.corpus().len(),
        max_input_bytes = ?max_input_bytes,
        "starting MCP server on stdio"
    );

    let server = GaugeServer::new(Arc::new(engine), max_input_bytes);
    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;
    service.waiting().await.context("MCP server stopped")?;

    info!("MCP server shut down");
    Ok(())
}
