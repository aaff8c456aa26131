//! One-shot dispatcher for the PostgREST `exec_sql` RPC.
//!
//! Builds one authenticated POST carrying the SQL text as JSON and reports
//! whatever comes back. HTTP-level failure is not an error here: the caller
//! gets the status and raw body for any response the server produced. Only
//! transport failures (connect, TLS, body read) surface as [`RpcError`].

use log::debug;
use reqwest::{Client, Request, StatusCode};
use serde_json::json;
use thiserror::Error;

use crate::config::AdminConfig;

/// Dispatch errors
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("RPC request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// What the server said: status and raw body, untouched.
#[derive(Debug, Clone)]
pub struct RpcOutcome {
    pub status: StatusCode,
    pub body: String,
}

/// Client bound to one project URL and service-role key.
pub struct RpcClient {
    http: Client,
    project_url: String,
    service_key: String,
    rpc_function: String,
}

impl RpcClient {
    pub fn new(config: &AdminConfig) -> Self {
        Self {
            http: Client::new(),
            project_url: config.project_url.trim_end_matches('/').to_string(),
            service_key: config.service_key.clone(),
            rpc_function: config.rpc_function.clone(),
        }
    }

    /// Full URL of the RPC endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/rest/v1/rpc/{}", self.project_url, self.rpc_function)
    }

    /// Build the request without sending it. The service key goes out twice,
    /// as the `apikey` header and as the bearer token; PostgREST wants both.
    pub fn build_exec_request(&self, sql: &str) -> Result<Request, RpcError> {
        let request = self
            .http
            .post(self.endpoint())
            .header("apikey", &self.service_key)
            .header("Authorization", format!("Bearer {}", self.service_key))
            .json(&json!({ "sql": sql }))
            .build()?;
        Ok(request)
    }

    /// Send the SQL text to the RPC endpoint. Exactly one request per call,
    /// no retries regardless of what the server answers.
    pub async fn execute_sql(&self, sql: &str) -> Result<RpcOutcome, RpcError> {
        let request = self.build_exec_request(sql)?;
        debug!("POST {}", request.url());

        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("status {} body {} bytes", status, body.len());

        Ok(RpcOutcome { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AdminConfig;
    use serde_json::Value;

    fn test_client(url: &str) -> RpcClient {
        RpcClient::new(&AdminConfig {
            project_url: url.to_string(),
            service_key: "service-role-key".to_string(),
            rpc_function: "exec_sql".to_string(),
        })
    }

    #[test]
    fn test_endpoint_join() {
        let client = test_client("https://abc.supabase.co");
        assert_eq!(
            client.endpoint(),
            "https://abc.supabase.co/rest/v1/rpc/exec_sql"
        );
    }

    #[test]
    fn test_endpoint_join_trailing_slash() {
        let client = test_client("https://abc.supabase.co/");
        assert_eq!(
            client.endpoint(),
            "https://abc.supabase.co/rest/v1/rpc/exec_sql"
        );
    }

    #[test]
    fn test_request_headers() {
        let client = test_client("https://abc.supabase.co");
        let request = client.build_exec_request("SELECT 1").expect("build");

        assert_eq!(request.method().as_str(), "POST");
        assert_eq!(
            request.headers().get("apikey").unwrap(),
            "service-role-key"
        );
        assert_eq!(
            request.headers().get("authorization").unwrap(),
            "Bearer service-role-key"
        );
        assert_eq!(
            request.headers().get("content-type").unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_request_body_carries_sql_unmodified() {
        let sql = "CREATE OR REPLACE FUNCTION public.is_admin()\nRETURNS boolean AS $$ ... $$;";
        let client = test_client("https://abc.supabase.co");
        let request = client.build_exec_request(sql).expect("build");

        let bytes = request.body().and_then(|b| b.as_bytes()).expect("body");
        let parsed: Value = serde_json::from_slice(bytes).expect("json body");
        assert_eq!(parsed["sql"].as_str(), Some(sql));
        assert_eq!(parsed.as_object().map(|o| o.len()), Some(1));
    }
}
