//! HTTP access to the employee API.
//!
//! [`EmployeeApi`] is the seam the UI state machine talks through;
//! [`HttpEmployeeApi`] is the real implementation over `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use staffbook_core::{Employee, EmployeeId, EmployeeInput};

use crate::{Error, Result};

/// Default collection URL of the API.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/employees";

/// Environment variable that overrides [`DEFAULT_API_URL`].
pub const API_URL_ENV: &str = "STAFFBOOK_API_URL";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The five remote operations on employee records.
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// All records.
    async fn list(&self) -> Result<Vec<Employee>>;

    /// One record by id.
    async fn get(&self, id: EmployeeId) -> Result<Employee>;

    /// Create a record from a complete payload.
    async fn create(&self, input: &EmployeeInput) -> Result<Employee>;

    /// Replace all four business fields of a record.
    async fn update(&self, id: EmployeeId, input: &EmployeeInput) -> Result<Employee>;

    /// Remove a record.
    async fn delete(&self, id: EmployeeId) -> Result<()>;
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// [`EmployeeApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpEmployeeApi {
    http: Client,
    base_url: String,
}

impl HttpEmployeeApi {
    /// Client for `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Client for `base_url` with a custom request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::invalid_url(
                base_url,
                "expected an http:// or https:// URL",
            ));
        }

        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    /// The collection URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn record_url(&self, id: EmployeeId) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Turn a non-2xx response into [`Error::Status`].
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
        log::debug!("API returned {status}: {message}");
        Err(Error::status(status.as_u16(), message))
    }
}

#[async_trait]
impl EmployeeApi for HttpEmployeeApi {
    async fn list(&self) -> Result<Vec<Employee>> {
        log::debug!("GET {}", self.base_url);
        let response = self.http.get(&self.base_url).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn get(&self, id: EmployeeId) -> Result<Employee> {
        let url = self.record_url(id);
        log::debug!("GET {url}");
        let response = self.http.get(url).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn create(&self, input: &EmployeeInput) -> Result<Employee> {
        log::debug!("POST {}", self.base_url);
        let response = self.http.post(&self.base_url).json(input).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn update(&self, id: EmployeeId, input: &EmployeeInput) -> Result<Employee> {
        let url = self.record_url(id);
        log::debug!("PUT {url}");
        let response = self.http.put(url).json(input).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn delete(&self, id: EmployeeId) -> Result<()> {
        let url = self.record_url(id);
        log::debug!("DELETE {url}");
        let response = self.http.delete(url).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let api = HttpEmployeeApi::new("http://localhost:5000/api/employees/").unwrap();
        assert_eq!(api.base_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_record_url() {
        let api = HttpEmployeeApi::new(DEFAULT_API_URL).unwrap();
        let id = EmployeeId::new();
        assert_eq!(api.record_url(id), format!("{DEFAULT_API_URL}/{id}"));
    }

    #[test]
    fn test_rejects_non_http_url() {
        let err = HttpEmployeeApi::new("localhost:5000").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }
}
