//! OpenAI Vector Store Repository Implementation
//!
//! VectorStoreRepositoryの OpenAI Vector Stores API 実装

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::adapter::openai::client::OpenAiApi;
use crate::adapter::openai::models::FileBatchObject;
use crate::domain::entities::index_batch::{BatchStatus, FileCounts, IndexBatch};
use crate::domain::entities::vector_store::VectorStore;
use crate::domain::repositories::vector_store_repository::VectorStoreRepository;

/// OpenAI ベクターストアリポジトリ
pub struct OpenAiVectorStoreRepository {
    api: Arc<dyn OpenAiApi>,
}

impl OpenAiVectorStoreRepository {
    /// 新しいリポジトリを作成
    pub fn new(api: Arc<dyn OpenAiApi>) -> Self {
        Self { api }
    }

    /// FileBatchObjectをDomain::IndexBatchに変換
    fn to_domain_batch(batch: FileBatchObject) -> IndexBatch {
        let file_counts = batch.file_counts.map(|c| FileCounts {
            total: c.total,
            completed: c.completed,
            in_progress: c.in_progress,
            failed: c.failed,
            cancelled: c.cancelled,
        });

        IndexBatch::new(batch.id, BatchStatus::parse(&batch.status), file_counts)
    }
}

#[async_trait]
impl VectorStoreRepository for OpenAiVectorStoreRepository {
    async fn create_store(&self, name: &str) -> Result<VectorStore> {
        let store = self.api.create_vector_store(name).await?;
        let name = store.name.unwrap_or_else(|| name.to_string());
        Ok(VectorStore::new(store.id, name))
    }

    async fn create_file_batch(&self, store_id: &str, file_ids: &[String]) -> Result<IndexBatch> {
        let batch = self.api.create_file_batch(store_id, file_ids).await?;
        Ok(Self::to_domain_batch(batch))
    }

    async fn get_file_batch(&self, store_id: &str, batch_id: &str) -> Result<IndexBatch> {
        let batch = self.api.retrieve_file_batch(store_id, batch_id).await?;
        Ok(Self::to_domain_batch(batch))
    }
}
