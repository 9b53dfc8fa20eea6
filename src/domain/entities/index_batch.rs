//! # IndexBatch Entity
//!
//! ファイルをベクターストアに取り込む非同期バッチジョブ

use std::fmt;

/// バッチジョブの状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchStatus {
    /// 待機中または処理中
    InProgress,
    Completed,
    Failed,
    Cancelled,
    /// 未知の状態（終端ではないものとして扱う）
    Unknown(String),
}

impl BatchStatus {
    /// プロバイダが返す状態文字列を解釈する
    ///
    /// `"cancelled"` と `"canceled"` はどちらも [`BatchStatus::Cancelled`] になる
    ///
    /// # 例
    ///
    /// ```
    /// use docask::domain::entities::index_batch::BatchStatus;
    ///
    /// assert_eq!(BatchStatus::parse("queued"), BatchStatus::InProgress);
    /// assert_eq!(BatchStatus::parse("canceled"), BatchStatus::Cancelled);
    /// assert!(BatchStatus::parse("failed").is_terminal());
    /// ```
    pub fn parse(raw: &str) -> Self {
        match raw {
            "queued" | "in_progress" => Self::InProgress,
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            "cancelled" | "canceled" => Self::Cancelled,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// これ以上状態が変化しないかどうか
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Cancelled)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
            Self::Unknown(raw) => raw,
        }
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// バッチ内のファイル数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileCounts {
    pub total: u64,
    pub completed: u64,
    pub in_progress: u64,
    pub failed: u64,
    pub cancelled: u64,
}

impl fmt::Display for FileCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total={}, completed={}, in_progress={}, failed={}",
            self.total, self.completed, self.in_progress, self.failed
        )
    }
}

/// インデックス作成バッチ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexBatch {
    pub id: String,
    pub status: BatchStatus,
    /// プロバイダが返さない場合は `None`
    pub file_counts: Option<FileCounts>,
}

impl IndexBatch {
    pub fn new(id: impl Into<String>, status: BatchStatus, file_counts: Option<FileCounts>) -> Self {
        Self {
            id: id.into(),
            status,
            file_counts,
        }
    }

    /// 失敗したファイル数（不明な場合は0）
    pub fn failed_count(&self) -> u64 {
        self.file_counts.map(|c| c.failed).unwrap_or(0)
    }

    /// バッチが成功で終了したかチェックします。
    ///
    /// 状態が `completed` かつ失敗数が0の場合に `true`
    ///
    /// # 例
    ///
    /// ```
    /// use docask::domain::entities::index_batch::{BatchStatus, FileCounts, IndexBatch};
    ///
    /// let ok = IndexBatch::new("batch-1", BatchStatus::Completed, None);
    /// assert!(ok.is_successful());
    ///
    /// let partial = IndexBatch::new(
    ///     "batch-2",
    ///     BatchStatus::Completed,
    ///     Some(FileCounts { total: 2, completed: 1, failed: 1, ..Default::default() }),
    /// );
    /// assert!(!partial.is_successful());
    /// ```
    pub fn is_successful(&self) -> bool {
        self.status == BatchStatus::Completed && self.failed_count() == 0
    }

    /// 進捗表示用の1行
    pub fn progress_line(&self) -> String {
        match &self.file_counts {
            Some(counts) => format!("Indexing: {} | {}", self.status, counts),
            None => format!("Indexing: {}", self.status),
        }
    }
}
