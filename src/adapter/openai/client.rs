//! OpenAI Client Abstractions
//!
//! クライアントの抽象化と実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Duration;

#[cfg(test)]
use mockall::automock;

use super::error::ApiError;
use super::models::{
    CreateFileBatchRequest, CreateResponseRequest, CreateVectorStoreRequest, FileBatchObject,
    FileObject, ResponseObject, Tool, VectorStoreObject, FILE_PURPOSE,
};
use crate::adapter::config::Config;
use crate::domain::repositories::answer_repository::AnswerRequest;

pub const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Trait for the OpenAI endpoints this tool calls
/// This enables mocking in tests while using the real client in production
#[cfg_attr(test, automock)]
#[async_trait]
pub trait OpenAiApi: Send + Sync {
    /// `POST /files`
    async fn upload_file(&self, path: &Path) -> Result<FileObject>;

    /// `POST /vector_stores`
    async fn create_vector_store(&self, name: &str) -> Result<VectorStoreObject>;

    /// `POST /vector_stores/{store_id}/file_batches`
    async fn create_file_batch(&self, store_id: &str, file_ids: &[String])
        -> Result<FileBatchObject>;

    /// `GET /vector_stores/{store_id}/file_batches/{batch_id}`
    async fn retrieve_file_batch(&self, store_id: &str, batch_id: &str) -> Result<FileBatchObject>;

    /// `POST /responses` with the file search tool bound to one store
    async fn create_response(&self, request: &AnswerRequest) -> Result<ResponseObject>;
}

/// reqwest-based client
pub struct OpenAiClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Full URL for an API path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.endpoint(path))
            .bearer_auth(&self.api_key)
            .header("OpenAI-Beta", "assistants=v2")
    }

    /// Send a request and decode a JSON body, mapping non-2xx to [`ApiError`]
    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder, operation: &str) -> Result<T> {
        let response = builder
            .send()
            .await
            .with_context(|| format!("{} request failed", operation))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read {} response", operation))?;
        debug!("{} -> {}", operation, status);

        if !status.is_success() {
            return Err(ApiError::from_response(status.as_u16(), &body))
                .with_context(|| format!("{} request failed", operation));
        }

        serde_json::from_str(&body).map_err(|e| {
            ApiError::Decode {
                operation: operation.to_string(),
                detail: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl OpenAiApi for OpenAiClient {
    async fn upload_file(&self, path: &Path) -> Result<FileObject> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload".to_string());

        let form = Form::new()
            .text("purpose", FILE_PURPOSE)
            .part("file", Part::bytes(bytes).file_name(file_name));

        self.send(self.request(Method::POST, "files").multipart(form), "File upload")
            .await
    }

    async fn create_vector_store(&self, name: &str) -> Result<VectorStoreObject> {
        let body = CreateVectorStoreRequest { name };
        self.send(
            self.request(Method::POST, "vector_stores").json(&body),
            "Vector store creation",
        )
        .await
    }

    async fn create_file_batch(
        &self,
        store_id: &str,
        file_ids: &[String],
    ) -> Result<FileBatchObject> {
        let body = CreateFileBatchRequest { file_ids };
        let path = format!("vector_stores/{}/file_batches", store_id);
        self.send(self.request(Method::POST, &path).json(&body), "File batch creation")
            .await
    }

    async fn retrieve_file_batch(&self, store_id: &str, batch_id: &str) -> Result<FileBatchObject> {
        let path = format!("vector_stores/{}/file_batches/{}", store_id, batch_id);
        self.send(self.request(Method::GET, &path), "File batch status")
            .await
    }

    async fn create_response(&self, request: &AnswerRequest) -> Result<ResponseObject> {
        let body = CreateResponseRequest {
            model: &request.model,
            instructions: &request.instructions,
            input: &request.question,
            tools: vec![Tool::FileSearch {
                vector_store_ids: vec![&request.vector_store_id],
            }],
        };
        self.send(self.request(Method::POST, "responses").json(&body), "Answer")
            .await
    }
}
