//! MCP Server implementation for option payoff analysis.

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::schemars::JsonSchema;
use rmcp::serde::{Deserialize, Serialize};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use rust_decimal::prelude::*;

use payoff_core::{evaluate, OptionContract, OptionKind, PayoffError};

use crate::{SERVER_NAME, SERVER_VERSION};

/// MCP Server for option payoff analytics.
///
/// Holds nothing but the tool table, so clones are cheap and concurrent
/// calls share no mutable state.
#[derive(Clone)]
pub struct OptionsMcpServer {
    /// Tool router for MCP tools
    tool_router: ToolRouter<Self>,
}

impl OptionsMcpServer {
    /// Create a new MCP server with every tool registered
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Names of the registered tools
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect()
    }

    /// Create a success result with JSON content
    pub fn json_result<T: serde::Serialize>(value: &T) -> Result<CallToolResult, McpError> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    fn summarize(kind: OptionKind, params: &OptionParams) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = kind.tool_name(),
            strike = params.strike,
            premium = params.premium,
            "evaluating long {}",
            kind.as_str()
        );
        let summary = evaluate(kind, params.strike, params.premium).map_err(invalid_params)?;
        Self::json_result(&summary)
    }
}

impl Default for OptionsMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a calculator rejection onto the MCP `invalid_params` error.
fn invalid_params(err: PayoffError) -> McpError {
    tracing::debug!(field = err.field(), "rejected tool input: {}", err);
    let data = serde_json::json!({ "field": err.field() });
    McpError::invalid_params(err.to_string(), Some(data))
}

fn to_number(name: &str, value: Decimal) -> Result<f64, McpError> {
    value
        .to_f64()
        .ok_or_else(|| McpError::internal_error(format!("{name} {value} has no f64 form"), None))
}

// ============================================================================
// Tool Parameter Types
// ============================================================================

/// Strike and premium of a single long option
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OptionParams {
    /// Strike price of the option (must be greater than zero)
    pub strike: f64,
    /// Premium paid to purchase the option (must not be negative)
    pub premium: f64,
}

/// Expiry profit parameters
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExpiryProfitParams {
    /// Option kind: "call" or "put"
    pub kind: OptionKind,
    /// Strike price of the option (must be greater than zero)
    pub strike: f64,
    /// Premium paid to purchase the option (must not be negative)
    pub premium: f64,
    /// Price of the underlying at expiration (must not be negative)
    pub underlying_price: f64,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl OptionsMcpServer {
    /// Analyse a long call
    #[tool(
        description = "Computes breakeven price and potential payoffs for a long Call option. \
                       Returns breakeven (strike + premium), max_profit (\"unbounded\") and \
                       max_loss (the premium paid)."
    )]
    pub async fn call_option(
        &self,
        Parameters(params): Parameters<OptionParams>,
    ) -> Result<CallToolResult, McpError> {
        Self::summarize(OptionKind::Call, &params)
    }

    /// Analyse a long put
    #[tool(
        description = "Computes breakeven price and potential payoffs for a long Put option. \
                       Returns breakeven (strike - premium), max_profit (strike - premium, \
                       reached if the underlying falls to zero) and max_loss (the premium paid)."
    )]
    pub async fn put_option(
        &self,
        Parameters(params): Parameters<OptionParams>,
    ) -> Result<CallToolResult, McpError> {
        Self::summarize(OptionKind::Put, &params)
    }

    /// Profit of a long option at a given expiry price
    #[tool(
        description = "Computes the intrinsic payoff and net profit (payoff minus premium) of a \
                       long call or put if the underlying settles at underlying_price on expiry."
    )]
    pub async fn option_profit_at_expiry(
        &self,
        Parameters(params): Parameters<ExpiryProfitParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            kind = params.kind.as_str(),
            strike = params.strike,
            premium = params.premium,
            underlying_price = params.underlying_price,
            "evaluating expiry profit"
        );

        let contract =
            OptionContract::new(params.kind, params.strike, params.premium).map_err(invalid_params)?;
        let payoff = contract
            .payoff_at(params.underlying_price)
            .map_err(invalid_params)?;
        let profit = contract
            .profit_at(params.underlying_price)
            .map_err(invalid_params)?;

        let response = serde_json::json!({
            "kind": params.kind,
            "underlying_price": params.underlying_price,
            "payoff": to_number("payoff", payoff)?,
            "profit": to_number("profit", profit)?,
        });

        Self::json_result(&response)
    }
}

#[tool_handler]
impl ServerHandler for OptionsMcpServer {
    fn get_info(&self) -> ServerInfo {
        let instructions = "Options payoff calculator for long positions held to expiry. \
             Use call_option or put_option with a strike and premium to get the breakeven \
             price, maximum profit and maximum loss. Use option_profit_at_expiry to see the \
             result at a specific underlying price.";

        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
                title: Some("Payoff Options Analytics".to_string()),
                icons: None,
                website_url: None,
            },
            instructions: Some(instructions.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::Value;

    fn payload(result: &CallToolResult) -> Value {
        let raw = serde_json::to_value(result).unwrap();
        let text = raw["content"][0]["text"].as_str().unwrap();
        serde_json::from_str(text).unwrap()
    }

    fn error_code(err: &McpError) -> i64 {
        serde_json::to_value(err).unwrap()["code"].as_i64().unwrap()
    }

    fn option(strike: f64, premium: f64) -> Parameters<OptionParams> {
        Parameters(OptionParams { strike, premium })
    }

    #[test]
    fn test_registration_table() {
        let server = OptionsMcpServer::new();
        let mut names = server.tool_names();
        names.sort();
        assert_eq!(
            names,
            vec!["call_option", "option_profit_at_expiry", "put_option"]
        );
        for kind in OptionKind::ALL {
            assert!(server.tool_names().iter().any(|n| n == kind.tool_name()));
        }
    }

    #[test]
    fn test_server_info() {
        let info = OptionsMcpServer::new().get_info();
        assert_eq!(info.server_info.name, "payoff-mcp");
        assert_eq!(
            info.server_info.title.as_deref(),
            Some("Payoff Options Analytics")
        );
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.unwrap().contains("call_option"));
    }

    #[tokio::test]
    async fn test_call_option_tool() {
        let server = OptionsMcpServer::new();
        let result = server.call_option(option(100.0, 5.0)).await.unwrap();
        let json = payload(&result);

        assert_relative_eq!(json["breakeven"].as_f64().unwrap(), 105.0);
        assert_eq!(json["max_profit"], "unbounded");
        assert_relative_eq!(json["max_loss"].as_f64().unwrap(), 5.0);
    }

    #[tokio::test]
    async fn test_put_option_tool() {
        let server = OptionsMcpServer::new();
        let result = server.put_option(option(100.0, 5.0)).await.unwrap();
        let json = payload(&result);

        assert_relative_eq!(json["breakeven"].as_f64().unwrap(), 95.0);
        assert_relative_eq!(json["max_profit"].as_f64().unwrap(), 95.0);
        assert_relative_eq!(json["max_loss"].as_f64().unwrap(), 5.0);
    }

    #[tokio::test]
    async fn test_put_premium_equal_to_strike() {
        let server = OptionsMcpServer::new();
        let json = payload(&server.put_option(option(50.0, 50.0)).await.unwrap());

        assert_relative_eq!(json["breakeven"].as_f64().unwrap(), 0.0);
        assert_relative_eq!(json["max_profit"].as_f64().unwrap(), 0.0);
        assert_relative_eq!(json["max_loss"].as_f64().unwrap(), 50.0);
    }

    #[tokio::test]
    async fn test_invalid_input_is_invalid_params() {
        let server = OptionsMcpServer::new();

        for (strike, premium) in [(0.0, 5.0), (-5.0, 5.0), (100.0, -1.0)] {
            let err = server.call_option(option(strike, premium)).await.unwrap_err();
            assert_eq!(error_code(&err), -32602);

            let err = server.put_option(option(strike, premium)).await.unwrap_err();
            assert_eq!(error_code(&err), -32602);
        }
    }

    #[tokio::test]
    async fn test_invalid_input_names_field() {
        let server = OptionsMcpServer::new();
        let err = server.put_option(option(100.0, -1.0)).await.unwrap_err();
        let raw = serde_json::to_value(&err).unwrap();

        assert_eq!(raw["data"]["field"], "premium");
        assert!(raw["message"].as_str().unwrap().contains("premium"));
    }

    #[tokio::test]
    async fn test_profit_at_expiry_tool() {
        let server = OptionsMcpServer::new();
        let params = Parameters(ExpiryProfitParams {
            kind: OptionKind::Call,
            strike: 100.0,
            premium: 5.0,
            underlying_price: 120.0,
        });
        let json = payload(&server.option_profit_at_expiry(params).await.unwrap());

        assert_eq!(json["kind"], "call");
        assert_relative_eq!(json["underlying_price"].as_f64().unwrap(), 120.0);
        assert_relative_eq!(json["payoff"].as_f64().unwrap(), 20.0);
        assert_relative_eq!(json["profit"].as_f64().unwrap(), 15.0);

        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["kind", "payoff", "profit", "underlying_price"]);
    }

    #[tokio::test]
    async fn test_call_breakeven_overflow_is_invalid_params() {
        let server = OptionsMcpServer::new();
        let err = server.call_option(option(5e28, 5e28)).await.unwrap_err();
        assert_eq!(error_code(&err), -32602);

        let json = payload(&server.put_option(option(5e28, 5e28)).await.unwrap());
        assert_relative_eq!(json["breakeven"].as_f64().unwrap(), 0.0);
    }

    #[tokio::test]
    async fn test_sub_precision_premium_is_invalid_params() {
        let server = OptionsMcpServer::new();
        let err = server.call_option(option(1.0, 1e-30)).await.unwrap_err();
        let raw = serde_json::to_value(&err).unwrap();

        assert_eq!(error_code(&err), -32602);
        assert_eq!(raw["data"]["field"], "premium");
    }

    #[tokio::test]
    async fn test_profit_at_expiry_rejects_negative_underlying() {
        let server = OptionsMcpServer::new();
        let params = Parameters(ExpiryProfitParams {
            kind: OptionKind::Put,
            strike: 100.0,
            premium: 5.0,
            underlying_price: -1.0,
        });
        let err = server.option_profit_at_expiry(params).await.unwrap_err();
        assert_eq!(error_code(&err), -32602);
    }

    #[test]
    fn test_params_deserialize_from_tool_arguments() {
        let params: ExpiryProfitParams = serde_json::from_value(serde_json::json!({
            "kind": "put",
            "strike": 80,
            "premium": 2.5,
            "underlying_price": 70,
        }))
        .unwrap();
        assert_eq!(params.kind, OptionKind::Put);
        assert_relative_eq!(params.strike, 80.0);
    }
}
