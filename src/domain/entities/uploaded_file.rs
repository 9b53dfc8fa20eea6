//! # UploadedFile Value Object
//!
//! アップロード済みファイルのバリューオブジェクト

use std::path::{Path, PathBuf};

/// アップロード済みファイル
///
/// ローカルパスとプロバイダが払い出した不透明なIDの組
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    path: PathBuf,
    file_id: String,
}

impl UploadedFile {
    /// 新しいアップロード済みファイルを作成
    pub fn new(path: impl Into<PathBuf>, file_id: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            file_id: file_id.into(),
        }
    }

    /// アップロード元のローカルパス
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// リモートのファイルID
    pub fn file_id(&self) -> &str {
        &self.file_id
    }
}

/// アップロード済みファイルのIDを取り出す
pub fn file_ids(files: &[UploadedFile]) -> Vec<String> {
    files.iter().map(|f| f.file_id.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uploaded_file_accessors() {
        let file = UploadedFile::new("/docs/report.pdf", "file-abc");
        assert_eq!(file.path(), Path::new("/docs/report.pdf"));
        assert_eq!(file.file_id(), "file-abc");
    }

    #[test]
    fn test_file_ids_preserves_order() {
        let files = vec![
            UploadedFile::new("a.txt", "file-1"),
            UploadedFile::new("b.txt", "file-2"),
        ];
        assert_eq!(file_ids(&files), vec!["file-1", "file-2"]);
    }
}
