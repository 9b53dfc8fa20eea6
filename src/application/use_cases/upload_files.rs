//! # Upload Files Use Case
//!
//! ファイルアップロードユースケース

use anyhow::{Context, Result};
use log::{info, warn};
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::entities::uploaded_file::UploadedFile;
use crate::domain::errors::DocAskError;
use crate::domain::repositories::file_repository::FileRepository;

/// ファイルアップロードユースケース
///
/// ファイルを1つずつ順番にアップロードする
pub struct UploadFilesUseCase<F: FileRepository + ?Sized> {
    file_repository: Arc<F>,
}

impl<F: FileRepository + ?Sized> UploadFilesUseCase<F> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `file_repository` - ファイルリポジトリ
    pub fn new(file_repository: Arc<F>) -> Self {
        Self { file_repository }
    }

    /// ファイルをアップロードする
    ///
    /// # Arguments
    ///
    /// * `paths` - アップロードするファイルのパス
    ///
    /// # Returns
    ///
    /// アップロード済みファイル（入力の順）
    ///
    /// # Errors
    ///
    /// - 1つもアップロードできなかった場合は [`DocAskError::NoFilesUploaded`]
    /// - 存在するファイルのアップロードに失敗した場合はそのエラー
    pub async fn execute(&self, paths: &[PathBuf]) -> Result<Vec<UploadedFile>> {
        let mut uploaded = Vec::with_capacity(paths.len());

        for path in paths {
            // 展開後に削除されたファイルもスキップ扱い
            if !path.exists() {
                warn!("File not found: {}", path.display());
                continue;
            }

            let file = self
                .file_repository
                .upload_file(path)
                .await
                .with_context(|| format!("Failed to upload {}", path.display()))?;

            info!("Uploaded {} as {}", file.path().display(), file.file_id());
            uploaded.push(file);
        }

        if uploaded.is_empty() {
            return Err(DocAskError::NoFilesUploaded.into());
        }

        Ok(uploaded)
    }
}
