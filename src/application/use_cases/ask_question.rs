//! # Ask Question Use Case
//!
//! ベクターストアに限定した質問応答ユースケース

use anyhow::Result;
use log::debug;
use std::sync::Arc;

use crate::application::dto::session_config::SessionConfig;
use crate::domain::entities::answer::Answer;
use crate::domain::repositories::answer_repository::{AnswerRepository, AnswerRequest};

/// 質問応答ユースケース
///
/// 質問ごとに独立したリクエストを送る（会話履歴は持たない）
pub struct AskQuestionUseCase<A: AnswerRepository + ?Sized> {
    answer_repository: Arc<A>,
    model: String,
    instructions: String,
    vector_store_id: String,
}

impl<A: AnswerRepository + ?Sized> AskQuestionUseCase<A> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `answer_repository` - 回答リポジトリ
    /// * `config` - セッション設定（モデルとシステム指示）
    /// * `vector_store_id` - 検索対象のベクターストアID
    pub fn new(
        answer_repository: Arc<A>,
        config: &SessionConfig,
        vector_store_id: impl Into<String>,
    ) -> Self {
        Self {
            answer_repository,
            model: config.model.clone(),
            instructions: config.instructions.clone(),
            vector_store_id: vector_store_id.into(),
        }
    }

    /// 質問に回答する
    ///
    /// # Errors
    ///
    /// リモート呼び出しに失敗した場合にエラーを返す（呼び出し側で継続可否を判断する）
    pub async fn execute(&self, question: &str) -> Result<Answer> {
        let request = AnswerRequest {
            model: self.model.clone(),
            instructions: self.instructions.clone(),
            question: question.to_string(),
            vector_store_id: self.vector_store_id.clone(),
        };

        debug!("Asking {} against {}", self.model, self.vector_store_id);
        self.answer_repository.ask(&request).await
    }
}
