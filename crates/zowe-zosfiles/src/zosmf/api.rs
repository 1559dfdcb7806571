//! ZosFilesApi trait implementation for ZosmfClient.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use tracing::debug;

use crate::{DataSetEntry, GetOptions, ListOptions, MemberEntry, ZosFilesApi, ZosFilesError};

use super::client::{parse_list_response, ZosmfClient};

impl ZosmfClient {
    /// Issue an authenticated GET and return the body of a 2xx response.
    async fn get_bytes(&self, url: &str, headers: HeaderMap) -> Result<Vec<u8>, ZosFilesError> {
        debug!(%url, "z/OSMF request");

        let response = self
            .http
            .get(url)
            .basic_auth(&self.config.user, Some(&self.config.password))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ZosFilesError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = text.chars().take(200).collect::<String>();
            return Err(ZosFilesError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ZosFilesError::Network(e.to_string()))?;
        Ok(body.to_vec())
    }
}

#[async_trait]
impl ZosFilesApi for ZosmfClient {
    async fn list_data_sets(
        &self,
        pattern: &str,
        options: &ListOptions,
    ) -> Result<Vec<DataSetEntry>, ZosFilesError> {
        if pattern.trim().is_empty() {
            return Err(ZosFilesError::InvalidInput("data set pattern is empty".into()));
        }
        let mut url = self.data_set_list_url(pattern);
        if let Some(volume) = &options.volume {
            url.push_str("&volser=");
            url.push_str(&urlencoding::encode(volume));
        }
        let body = self.get_bytes(&url, self.list_headers(options)?).await?;
        parse_list_response(&body)
    }

    async fn list_members(
        &self,
        dsn: &str,
        options: &ListOptions,
    ) -> Result<Vec<MemberEntry>, ZosFilesError> {
        let url = self.member_list_url(dsn);
        let body = self.get_bytes(&url, self.list_headers(options)?).await?;
        parse_list_response(&body)
    }

    async fn get_content(
        &self,
        target: &str,
        options: &GetOptions,
    ) -> Result<Vec<u8>, ZosFilesError> {
        let url = self.content_url(target, options);
        self.get_bytes(&url, self.content_headers(options)?).await
    }
}
