//! # Index Files Use Case
//!
//! ベクターストアを作成し、アップロード済みファイルのインデックス作成完了を待つユースケース

use anyhow::{Context, Result};
use log::{debug, info};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::entities::index_batch::IndexBatch;
use crate::domain::entities::uploaded_file::{file_ids, UploadedFile};
use crate::domain::entities::vector_store::VectorStore;
use crate::domain::errors::DocAskError;
use crate::domain::repositories::vector_store_repository::VectorStoreRepository;

/// インデックス作成結果
#[derive(Debug, Clone)]
pub struct IndexedStore {
    /// 作成されたベクターストア
    pub store: VectorStore,
    /// 終端状態に達したバッチ
    pub batch: IndexBatch,
}

/// インデックス作成ユースケース
///
/// バッチが終端状態になるまで一定間隔でポーリングする（回数の上限なし）
pub struct IndexFilesUseCase<V: VectorStoreRepository + ?Sized> {
    vector_store_repository: Arc<V>,
    poll_interval: Duration,
}

impl<V: VectorStoreRepository + ?Sized> IndexFilesUseCase<V> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `vector_store_repository` - ベクターストアリポジトリ
    /// * `poll_interval` - バッチ状態のポーリング間隔
    pub fn new(vector_store_repository: Arc<V>, poll_interval: Duration) -> Self {
        Self {
            vector_store_repository,
            poll_interval,
        }
    }

    /// ベクターストアを作成してファイルを取り込む
    ///
    /// # Arguments
    ///
    /// * `store_name` - ベクターストアの表示名
    /// * `files` - 取り込むアップロード済みファイル
    /// * `on_progress` - ポーリングのたびに呼ばれるコールバック（エラーでポーリング中断）
    ///
    /// # Errors
    ///
    /// - バッチが `completed` 以外で終了した、または失敗ファイルがある場合は
    ///   [`DocAskError::IndexingFailed`]
    /// - リモート呼び出しに失敗した場合はそのエラー
    pub async fn execute<P>(
        &self,
        store_name: &str,
        files: &[UploadedFile],
        mut on_progress: P,
    ) -> Result<IndexedStore>
    where
        P: FnMut(&IndexBatch) -> Result<()>,
    {
        let store = self
            .vector_store_repository
            .create_store(store_name)
            .await
            .context("Failed to create vector store")?;
        info!("Created vector store {} ({})", store.name, store.id);

        let created = self
            .vector_store_repository
            .create_file_batch(&store.id, &file_ids(files))
            .await
            .context("Failed to attach files to vector store")?;
        info!("Created file batch {} for {} file(s)", created.id, files.len());

        let batch = self.wait_for_batch(&store.id, &created.id, &mut on_progress).await?;

        if !batch.is_successful() {
            return Err(DocAskError::IndexingFailed {
                status: batch.status.clone(),
                failed: batch.failed_count(),
            }
            .into());
        }

        Ok(IndexedStore { store, batch })
    }

    /// バッチが終端状態になるまでポーリングする
    async fn wait_for_batch<P>(
        &self,
        store_id: &str,
        batch_id: &str,
        on_progress: &mut P,
    ) -> Result<IndexBatch>
    where
        P: FnMut(&IndexBatch) -> Result<()>,
    {
        let mut polls: u64 = 0;

        loop {
            let batch = self
                .vector_store_repository
                .get_file_batch(store_id, batch_id)
                .await
                .context("Failed to retrieve file batch status")?;
            polls += 1;

            on_progress(&batch)?;

            if batch.status.is_terminal() {
                debug!("File batch {} reached {} after {} poll(s)", batch_id, batch.status, polls);
                return Ok(batch);
            }

            sleep(self.poll_interval).await;
        }
    }
}
