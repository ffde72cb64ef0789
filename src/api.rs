//! JSON request/response envelope shared by the command-line tools
//!
//! Matches the wire contract of the original service boundary:
//! `{ "success": bool, "data": ..., "error": "..." }`.

use serde::{Deserialize, Serialize};

use crate::cashflow::CashFlowInput;
use crate::scoring::InvestmentScoreInput;

/// Envelope wrapping every tool response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Combined analysis request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub cash_flow: CashFlowInput,

    /// Optional scoring leg; when absent only the projection runs
    #[serde(default)]
    pub score: Option<InvestmentScoreInput>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope_shape() {
        let response = ApiResponse::ok(42u32);
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"success":true,"data":42}"#);
    }

    #[test]
    fn test_error_envelope_shape() {
        let response: ApiResponse<u32> = ApiResponse::error("invalid input: monthly_rent must be positive, got 0");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.starts_with(r#"{"success":false,"error":"#));
        assert!(!json.contains("data"));
    }

    #[test]
    fn test_analyze_request_score_optional() {
        let request: AnalyzeRequest = serde_json::from_str(
            r#"{"cash_flow": {"purchase_price": 400000, "monthly_rent": 2800}}"#,
        )
        .unwrap();
        assert!(request.score.is_none());
        assert_eq!(request.cash_flow.down_payment_percent, 20.0);
    }
}
