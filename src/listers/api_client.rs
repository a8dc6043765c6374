use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::debug;
use url::Url;

use crate::utils::{
    config::is_default_host,
    error::{ListerError, ListerResult},
};

/// Request body of a GraphQL call
#[derive(Debug, Serialize)]
struct GraphQlRequest<'a, V: Serialize> {
    query: &'a str,
    variables: V,
}

/// Envelope every GraphQL response is wrapped in
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorItem>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorItem {
    message: String,
}

/// Thin GraphQL client over an already-authenticated HTTP client
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    endpoint_override: Option<Url>,
}

impl ApiClient {
    /// Wrap an HTTP client produced by the client factory
    pub fn from_http(http: Client) -> Self {
        Self {
            http,
            endpoint_override: None,
        }
    }

    /// Send every request to `endpoint` instead of the host-derived URL
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint_override = Some(endpoint);
        self
    }

    /// Resolve the GraphQL endpoint used for `hostname`
    pub fn endpoint_for(&self, hostname: &str) -> ListerResult<Url> {
        match &self.endpoint_override {
            Some(endpoint) => Ok(endpoint.clone()),
            None => graphql_url(hostname),
        }
    }

    /// Run `query` against `hostname` and decode its `data` member
    pub async fn graphql<T, V>(&self, hostname: &str, query: &str, variables: V) -> ListerResult<T>
    where
        T: DeserializeOwned,
        V: Serialize + Send,
    {
        let url = self.endpoint_for(hostname)?;
        debug!(%url, "sending GraphQL request");

        let body = GraphQlRequest { query, variables };
        let response = self.http.post(url).json(&body).send().await?;

        let status = response.status().as_u16();
        let text = response.text().await?;
        debug!(status, bytes = text.len(), "received GraphQL response");

        parse_graphql_response(status, &text)
    }
}

/// GraphQL endpoint for a GitHub host
pub fn graphql_url(hostname: &str) -> ListerResult<Url> {
    let host = hostname.trim().to_ascii_lowercase();
    let raw = if is_default_host(&host) {
        "https://api.github.com/graphql".to_string()
    } else if host == "github.localhost" {
        "http://api.github.localhost/graphql".to_string()
    } else {
        format!("https://{}/api/graphql", host)
    };

    Url::parse(&raw)
        .map_err(|e| ListerError::Message(format!("invalid API host '{}': {}", hostname, e)))
}

/// Decode a raw GraphQL HTTP response.
///
/// Non-2xx statuses win over GraphQL errors, which win over `data`.
pub fn parse_graphql_response<T: DeserializeOwned>(status: u16, body: &str) -> ListerResult<T> {
    if !(200..300).contains(&status) {
        return Err(ListerError::Status {
            status,
            message: error_message_from_body(status, body),
        });
    }

    let response: GraphQlResponse<T> =
        serde_json::from_str(body).map_err(|e| ListerError::Decode(e.to_string()))?;

    if !response.errors.is_empty() {
        let messages: Vec<String> = response.errors.into_iter().map(|e| e.message).collect();
        return Err(ListerError::GraphQl(messages.join("; ")));
    }

    response
        .data
        .ok_or_else(|| ListerError::Decode("response contained no data".to_string()))
}

/// The JSON `message` field, or the status reason for any other body
fn error_message_from_body(status: u16, body: &str) -> String {
    serde_json::from_str::<JsonValue>(body)
        .ok()
        .and_then(|json| json.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| {
            reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|code| code.canonical_reason())
                .unwrap_or("request failed")
                .to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Viewer {
        login: String,
    }

    #[test]
    fn test_graphql_url_for_known_hosts() {
        assert_eq!(
            graphql_url("github.com").unwrap().as_str(),
            "https://api.github.com/graphql"
        );
        assert_eq!(
            graphql_url("GitHub.com").unwrap().as_str(),
            "https://api.github.com/graphql"
        );
        assert_eq!(
            graphql_url("github.localhost").unwrap().as_str(),
            "http://api.github.localhost/graphql"
        );
        assert_eq!(
            graphql_url("ghe.example.com").unwrap().as_str(),
            "https://ghe.example.com/api/graphql"
        );
    }

    #[test]
    fn test_graphql_url_rejects_garbage_host() {
        match graphql_url("not a host") {
            Err(ListerError::Message(msg)) => assert!(msg.contains("invalid API host")),
            other => panic!("Expected Message error, got {:?}", other),
        }
    }

    #[test]
    fn test_endpoint_override() {
        let endpoint = Url::parse("http://127.0.0.1:9999/graphql").unwrap();
        let client = ApiClient::from_http(Client::new()).with_endpoint(endpoint.clone());
        assert_eq!(client.endpoint_for("github.com").unwrap(), endpoint);
    }

    #[test]
    fn test_parse_data() {
        let body = json!({ "data": { "login": "octocat" } }).to_string();
        let viewer: Viewer = parse_graphql_response(200, &body).unwrap();
        assert_eq!(viewer.login, "octocat");
    }

    #[test]
    fn test_parse_graphql_errors_are_joined() {
        let body = json!({
            "data": null,
            "errors": [{ "message": "first" }, { "message": "second" }]
        })
        .to_string();

        match parse_graphql_response::<Viewer>(200, &body) {
            Err(ListerError::GraphQl(msg)) => assert_eq!(msg, "first; second"),
            other => panic!("Expected GraphQl error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_status_error_uses_message_field() {
        let body = json!({ "message": "Bad credentials" }).to_string();

        let err = parse_graphql_response::<Viewer>(401, &body).unwrap_err();
        assert_eq!(err.to_string(), "HTTP 401: Bad credentials");
    }

    #[test]
    fn test_parse_status_error_falls_back_to_reason() {
        let err = parse_graphql_response::<Viewer>(503, "").unwrap_err();
        assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");

        let err = parse_graphql_response::<Viewer>(500, "upstream exploded\n").unwrap_err();
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    }

    #[test]
    fn test_parse_status_error_ignores_html_body() {
        let page = "<html><head><title>502</title></head><body><h1>Bad Gateway</h1></body></html>";
        let err = parse_graphql_response::<Viewer>(502, page).unwrap_err();
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");

        let err = parse_graphql_response::<Viewer>(599, "<html>oops</html>").unwrap_err();
        assert_eq!(err.to_string(), "HTTP 599: request failed");
    }

    #[test]
    fn test_parse_invalid_json() {
        match parse_graphql_response::<Viewer>(200, "<html>") {
            Err(ListerError::Decode(_)) => {}
            other => panic!("Expected Decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_missing_data() {
        match parse_graphql_response::<Viewer>(200, "{}") {
            Err(ListerError::Decode(msg)) => assert!(msg.contains("no data")),
            other => panic!("Expected Decode error, got {:?}", other),
        }
    }
}
