//! OpenAI Answer Repository Implementation
//!
//! AnswerRepositoryの OpenAI Responses API（file_search ツール）実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

use crate::adapter::openai::client::OpenAiApi;
use crate::adapter::openai::error::ApiError;
use crate::adapter::openai::models::ResponseObject;
use crate::domain::entities::answer::Answer;
use crate::domain::repositories::answer_repository::{AnswerRepository, AnswerRequest};

/// OpenAI 回答リポジトリ
pub struct OpenAiAnswerRepository {
    api: Arc<dyn OpenAiApi>,
}

impl OpenAiAnswerRepository {
    /// 新しいリポジトリを作成
    pub fn new(api: Arc<dyn OpenAiApi>) -> Self {
        Self { api }
    }

    /// ResponseObjectをDomain::Answerに変換
    fn to_answer(response: ResponseObject) -> Result<Answer> {
        if let Some(error) = response.error {
            warn!(
                "Response {} failed (status: {}, code: {})",
                response.id,
                response.status.as_deref().unwrap_or("unknown"),
                error.code.as_deref().unwrap_or("none")
            );
            return Err(ApiError::ResponseFailed(error.message).into());
        }

        debug!(
            "Response {} finished with status {}",
            response.id,
            response.status.as_deref().unwrap_or("unknown")
        );
        Ok(Answer::new(response.output_text(), response.cited_files()))
    }
}

#[async_trait]
impl AnswerRepository for OpenAiAnswerRepository {
    async fn ask(&self, request: &AnswerRequest) -> Result<Answer> {
        let response = self
            .api
            .create_response(request)
            .await
            .context("Answer request failed")?;
        Self::to_answer(response)
    }
}
