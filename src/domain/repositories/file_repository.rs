//! # File Repository Trait
//!
//! ローカルファイルのアップロードを抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::uploaded_file::UploadedFile;

/// ファイルリポジトリ
///
/// ローカルファイルをプロバイダのオブジェクトストアにアップロードする
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FileRepository: Send + Sync {
    /// ファイルをアップロード
    ///
    /// # Arguments
    ///
    /// * `path` - 読み取り可能なローカルファイルのパス
    ///
    /// # Returns
    ///
    /// リモートのファイルIDを持つアップロード済みファイル
    ///
    /// # Errors
    ///
    /// 読み込みまたはアップロードに失敗した場合にエラーを返す
    async fn upload_file(&self, path: &Path) -> Result<UploadedFile>;
}
