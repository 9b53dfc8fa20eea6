//! # Answer Repository Trait
//!
//! ベクターストアに限定した回答生成を抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::answer::Answer;

/// 回答生成リクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRequest {
    /// 使用するモデル名
    pub model: String,
    /// 固定のシステム指示
    pub instructions: String,
    /// ユーザーの質問
    pub question: String,
    /// 検索対象のベクターストアID
    pub vector_store_id: String,
}

/// 回答リポジトリ
///
/// 検索対象を1つのベクターストアに限定して回答を生成する
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// 質問に回答する
    ///
    /// # Errors
    ///
    /// リモート呼び出しに失敗した場合にエラーを返す
    async fn ask(&self, request: &AnswerRequest) -> Result<Answer>;
}
