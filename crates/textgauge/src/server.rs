//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the scoring engine to AI assistants over stdio. The server is a
//! presentation layer: every tool validates its input, hands the text to the
//! shared [`Engine`] and returns the engine's payload as pretty JSON.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use textgauge_core::{AnalysisError, Engine, markdown, parse_checks};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters shared by the single-scorer tools.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TextParams {
    /// The text to score.
    pub text: String,
    /// Whether to strip markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// Parameters for the `analyze_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTextParams {
    /// The text to analyze.
    pub text: String,
    /// Whether to strip markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
    /// Checks to run: readability, tone, similarity, grammar. Omit for all.
    pub checks: Option<Vec<String>>,
}

/// MCP server exposing the scoring engine.
#[derive(Clone)]
pub struct GaugeServer {
    engine: Arc<Engine>,
    max_input_bytes: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for GaugeServer {
    fn default() -> Self {
        Self::new(Arc::new(Engine::new()), None)
    }
}

#[tool_router]
impl GaugeServer {
    /// Create a server around a configured engine.
    ///
    /// Text larger than `max_input_bytes` is rejected before scoring.
    pub fn new(engine: Arc<Engine>, max_input_bytes: Option<usize>) -> Self {
        Self {
            engine,
            max_input_bytes,
            tool_router: Self::tool_router(),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "references": self.engine.corpus().len(),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score readability.
    #[tool(
        description = "Check readability of text. Returns overall readability, education level, sentence complexity and word simplicity labels with eight raw formula scores."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_readability(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "check_readability",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );

        let text = self.prepare(&params.text, params.strip_markdown)?;
        let report = self.engine.readability(&text).map_err(analysis_error)?;

        tracing::info!(
            tool = "check_readability",
            grade = report.raw_scores.average_grade,
            "MCP tool completed"
        );
        json_result(&report)
    }

    /// Score tone.
    #[tool(
        description = "Score the tone of text. Returns the dominant tone label, confidence and polarity between -1 and 1."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_tone(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "check_tone",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );

        let text = self.prepare(&params.text, params.strip_markdown)?;
        let report = self.engine.tone(&text).map_err(analysis_error)?;

        tracing::info!(
            tool = "check_tone",
            tone = report.tone_value,
            "MCP tool completed"
        );
        json_result(&report)
    }

    /// Compare against the reference corpus.
    #[tool(
        description = "Compare text against the reference corpus. Returns the best similarity score as a percentage and a plagiarism verdict."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_plagiarism(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "check_plagiarism",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );

        let text = self.prepare(&params.text, params.strip_markdown)?;
        let report = self.engine.plagiarism(&text).map_err(analysis_error)?;

        tracing::info!(
            tool = "check_plagiarism",
            score = report.similarity_reference,
            "MCP tool completed"
        );
        json_result(&report)
    }

    /// Run several checks at once.
    #[tool(
        description = "Analyze text with any of: readability, tone, similarity, grammar. Returns every requested payload plus the raw metrics and their classification."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_text(
        &self,
        Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "analyze_text",
            strip_md = params.strip_markdown,
            checks = ?params.checks,
            "executing MCP tool"
        );

        let checks =
            parse_checks(params.checks.as_deref().unwrap_or_default()).map_err(analysis_error)?;
        let text = self.prepare(&params.text, params.strip_markdown)?;
        let report = self.engine.analyze(&text, &checks).map_err(analysis_error)?;

        tracing::info!(
            tool = "analyze_text",
            unavailable = report.unavailable.len(),
            "MCP tool completed"
        );
        json_result(&report)
    }

    fn prepare(&self, text: &str, strip_markdown: bool) -> Result<String, McpError> {
        if let Some(max) = self.max_input_bytes
            && text.len() > max
        {
            return Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            ));
        }
        Ok(if strip_markdown {
            markdown::strip_to_prose(text)
        } else {
            text.to_string()
        })
    }
}

/// Analysis errors are caller mistakes (blank text, unknown check names).
fn analysis_error(error: AnalysisError) -> McpError {
    McpError::invalid_params(error.to_string(), None)
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[tool_handler]
impl ServerHandler for GaugeServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use the tools to score readability, tone and similarity of English prose.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
