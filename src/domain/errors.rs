//! # Domain Errors
//!
//! セッションを中断させる致命的エラー

use thiserror::Error;

use super::entities::index_batch::BatchStatus;

/// 処理を継続できないエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocAskError {
    /// 必須の認証情報が設定されていない
    #[error("Please set {0} in .env or as an environment variable")]
    MissingCredential(String),

    /// アップロードに成功したファイルが1つもない
    #[error("No file was uploaded successfully - please check the paths")]
    NoFilesUploaded,

    /// インデックス作成が成功状態で終了しなかった
    #[error("Indexing did not succeed (status: {status}, failed: {failed}) - please check the files")]
    IndexingFailed { status: BatchStatus, failed: u64 },
}
