// reqwest adapter for the timer endpoints. Every request carries the bearer token; non-2xx
// answers are turned into `ClientError` using the server's `detail` message.

use crate::client::api::{TimeEntryView, TimerApi, TimerStatsView, TimerStatusView};
use crate::client::errors::ClientError;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;

#[derive(Deserialize)]
struct ErrorDetail {
    detail: String,
}

pub struct HttpTimerApi {
    client: Client,
    base_url: Url,
    token: String,
}

impl HttpTimerApi {
    /// `base_url` includes the API prefix, e.g. `http://localhost:8000/api/v1`.
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
            token: token.into(),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.bearer_auth(&self.token).send().await?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthorized);
        }
        if !status.is_success() {
            let detail = match response.json::<ErrorDetail>().await {
                Ok(body) => body.detail,
                Err(_) => status.canonical_reason().unwrap_or("request failed").to_string(),
            };
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl TimerApi for HttpTimerApi {
    async fn status(&self) -> Result<TimerStatusView, ClientError> {
        let url = self.endpoint(&["timer", "status"])?;
        self.send(self.client.get(url)).await
    }

    async fn start(
        &self,
        task_id: &str,
        description: Option<&str>,
    ) -> Result<TimeEntryView, ClientError> {
        let url = self.endpoint(&["timer", "start"])?;
        let body = json!({ "task_id": task_id, "description": description });
        self.send(self.client.post(url).json(&body)).await
    }

    async fn pause(&self) -> Result<(), ClientError> {
        let url = self.endpoint(&["timer", "pause"])?;
        self.send::<serde_json::Value>(self.client.post(url))
            .await
            .map(|_| ())
    }

    async fn stop(
        &self,
        description: Option<&str>,
        notes: Option<&str>,
    ) -> Result<TimeEntryView, ClientError> {
        let url = self.endpoint(&["timer", "stop"])?;
        let body = json!({ "description": description, "notes": notes });
        self.send(self.client.post(url).json(&body)).await
    }

    async fn update(&self, description: Option<&str>) -> Result<TimeEntryView, ClientError> {
        let url = self.endpoint(&["timer", "update"])?;
        let body = json!({ "description": description });
        self.send(self.client.put(url).json(&body)).await
    }

    async fn switch(
        &self,
        task_id: &str,
        description: Option<&str>,
    ) -> Result<TimeEntryView, ClientError> {
        let url = self.endpoint(&["timer", "switch", task_id])?;
        let mut request = self.client.post(url);
        if let Some(description) = description {
            request = request.query(&[("description", description)]);
        }
        self.send(request).await
    }

    async fn stats(&self) -> Result<TimerStatsView, ClientError> {
        let url = self.endpoint(&["timer", "stats"])?;
        self.send(self.client.get(url)).await
    }
}
