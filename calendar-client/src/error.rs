use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalendarClientError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("not found")]
    NotFound,
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("server error: {0}")]
    Server(String),
    #[error("unexpected status: {0}")]
    UnexpectedStatus(u16),
}

impl CalendarClientError {
    pub(crate) async fn from_http_response(resp: reqwest::Response) -> Self {
        let status = resp.status();
        let message = resp
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| body["error"].as_str().map(str::to_owned))
            .unwrap_or_else(|| status.to_string());

        match status.as_u16() {
            404 => CalendarClientError::NotFound,
            400 => CalendarClientError::InvalidRequest(message),
            500..=599 => CalendarClientError::Server(message),
            code => CalendarClientError::UnexpectedStatus(code),
        }
    }
}
