use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, COOKIE, SET_COOKIE};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::constants::{
    AUTH_LOGIN_PATH, AUTH_LOGOUT_PATH, AUTH_STATUS_PATH, CODES_GENERATE_PATH,
    REDEEM_CONFIRM_PATH, REDEEM_VERIFY_PATH, SESSION_COOKIE_NAME, TEAMS_IMPORT_PATH,
};
use crate::error::{PanelError, PanelResult};
use crate::models::{AuthStatus, ConfirmResponse, GenerateOutcome, ImportOutcome, VerifyResponse};

pub struct PanelClient {
    client: reqwest::Client,
    base_url: String,
}

impl PanelClient {
    pub fn new(base_url: String, session_token: Option<String>) -> PanelResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = session_token {
            let cookie = format!("{}={}", SESSION_COOKIE_NAME, token);
            let value = HeaderValue::from_str(&cookie)
                .map_err(|_| PanelError::ConfigError("Stored session token is not valid".to_string()))?;
            headers.insert(COOKIE, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Every call goes through here: the body is parsed as JSON regardless of
    /// HTTP status, and non-2xx responses collapse into a ServerError whose
    /// message prefers the body's `error` field, then `detail`, then a
    /// generic fallback. Transport failures surface as NetworkError via `?`.
    async fn request<T: DeserializeOwned>(&self, method: reqwest::Method, path: &str, body: Option<&Value>) -> PanelResult<T> {
        let mut builder = self.client.request(method, self.url(path));
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let payload: Value = response.json().await.unwrap_or(Value::Null);

        let value = normalize_response(status, payload)?;
        Ok(serde_json::from_value(value)?)
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, body: Value) -> PanelResult<T> {
        self.request(reqwest::Method::POST, path, Some(&body)).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> PanelResult<T> {
        self.request(reqwest::Method::GET, path, None).await
    }

    pub async fn verify_code(&self, code: &str) -> PanelResult<VerifyResponse> {
        self.post(REDEEM_VERIFY_PATH, json!({ "code": code })).await
    }

    /// A null team_id asks the backend to pick the soonest-expiring team.
    pub async fn confirm_redemption(
        &self,
        email: &str,
        code: &str,
        team_id: Option<i64>,
    ) -> PanelResult<ConfirmResponse> {
        let body = json!({
            "email": email,
            "code": code,
            "team_id": team_id,
        });
        self.post(REDEEM_CONFIRM_PATH, body).await
    }

    pub async fn auth_status(&self) -> PanelResult<AuthStatus> {
        self.get(AUTH_STATUS_PATH).await
    }

    /// Logs in and returns the session cookie value the backend set, if any.
    pub async fn login(&self, username: &str, password: &str) -> PanelResult<Option<String>> {
        let body = json!({ "username": username, "password": password });
        let response = self
            .client
            .post(self.url(AUTH_LOGIN_PATH))
            .json(&body)
            .send()
            .await?;

        let session = extract_session_cookie(response.headers());
        let status = response.status().as_u16();
        let payload: Value = response.json().await.unwrap_or(Value::Null);
        normalize_response(status, payload)?;

        Ok(session)
    }

    pub async fn logout(&self) -> PanelResult<()> {
        let _: Value = self.post(AUTH_LOGOUT_PATH, json!({})).await?;
        Ok(())
    }

    pub async fn import_team_single(
        &self,
        access_token: &str,
        email: Option<&str>,
        account_id: Option<&str>,
    ) -> PanelResult<ImportOutcome> {
        let mut body = json!({
            "import_type": "single",
            "access_token": access_token,
        });
        // Empty optional fields stay absent, not empty strings
        if let Some(email) = email {
            body["email"] = json!(email);
        }
        if let Some(account_id) = account_id {
            body["account_id"] = json!(account_id);
        }
        self.post(TEAMS_IMPORT_PATH, body).await
    }

    pub async fn import_team_batch(&self, content: &str) -> PanelResult<ImportOutcome> {
        let body = json!({
            "import_type": "batch",
            "content": content,
        });
        self.post(TEAMS_IMPORT_PATH, body).await
    }

    pub async fn generate_code_single(
        &self,
        code: Option<&str>,
        expires_days: Option<u32>,
    ) -> PanelResult<GenerateOutcome> {
        let mut body = json!({ "type": "single" });
        if let Some(code) = code {
            body["code"] = json!(code);
        }
        if let Some(days) = expires_days {
            body["expires_days"] = json!(days);
        }
        self.post(CODES_GENERATE_PATH, body).await
    }

    pub async fn generate_code_batch(
        &self,
        count: u32,
        expires_days: Option<u32>,
    ) -> PanelResult<GenerateOutcome> {
        let mut body = json!({ "type": "batch", "count": count });
        if let Some(days) = expires_days {
            body["expires_days"] = json!(days);
        }
        self.post(CODES_GENERATE_PATH, body).await
    }
}

/// Uniform failure shape: callers never see raw HTTP status codes.
pub fn normalize_response(status: u16, body: Value) -> PanelResult<Value> {
    if (200..300).contains(&status) {
        return Ok(body);
    }
    Err(PanelError::ServerError(extract_error(status, &body)))
}

fn extract_error(status: u16, body: &Value) -> String {
    if let Some(error) = body.get("error").and_then(Value::as_str) {
        return error.to_string();
    }
    if let Some(detail) = body.get("detail").and_then(Value::as_str) {
        return detail.to_string();
    }
    format!("Request failed (HTTP {})", status)
}

fn extract_session_cookie(headers: &HeaderMap) -> Option<String> {
    let prefix = format!("{}=", SESSION_COOKIE_NAME);
    for value in headers.get_all(SET_COOKIE) {
        if let Ok(cookie) = value.to_str() {
            if let Some(rest) = cookie.strip_prefix(&prefix) {
                let token = rest.split(';').next().unwrap_or("");
                if !token.is_empty() {
                    return Some(token.to_string());
                }
            }
        }
    }
    None
}
