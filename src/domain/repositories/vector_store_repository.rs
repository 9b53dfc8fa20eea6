//! # Vector Store Repository Trait
//!
//! ベクターストアの作成とバッチジョブの管理を抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::index_batch::IndexBatch;
use crate::domain::entities::vector_store::VectorStore;

/// ベクターストアリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait VectorStoreRepository: Send + Sync {
    /// 表示名を指定してベクターストアを作成
    async fn create_store(&self, name: &str) -> Result<VectorStore>;

    /// アップロード済みファイルをバッチでベクターストアに追加
    ///
    /// # Arguments
    ///
    /// * `store_id` - ベクターストアID
    /// * `file_ids` - 追加するファイルID
    ///
    /// # Returns
    ///
    /// 作成されたバッチジョブ
    async fn create_file_batch(&self, store_id: &str, file_ids: &[String]) -> Result<IndexBatch>;

    /// バッチジョブの現在の状態を取得
    async fn get_file_batch(&self, store_id: &str, batch_id: &str) -> Result<IndexBatch>;
}
