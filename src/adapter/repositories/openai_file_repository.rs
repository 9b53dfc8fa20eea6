//! OpenAI File Repository Implementation
//!
//! FileRepositoryの OpenAI Files API 実装

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use std::path::Path;
use std::sync::Arc;

use crate::adapter::openai::client::OpenAiApi;
use crate::domain::entities::uploaded_file::UploadedFile;
use crate::domain::repositories::file_repository::FileRepository;

/// OpenAI ファイルリポジトリ
pub struct OpenAiFileRepository {
    api: Arc<dyn OpenAiApi>,
}

impl OpenAiFileRepository {
    /// 新しいリポジトリを作成
    pub fn new(api: Arc<dyn OpenAiApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl FileRepository for OpenAiFileRepository {
    async fn upload_file(&self, path: &Path) -> Result<UploadedFile> {
        let file = self.api.upload_file(path).await?;
        debug!(
            "Uploaded {} ({} bytes) as {}",
            file.filename.as_deref().unwrap_or("?"),
            file.bytes.unwrap_or(0),
            file.id
        );
        Ok(UploadedFile::new(path, file.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::openai::client::MockOpenAiApi;
    use crate::adapter::openai::models::FileObject;

    #[tokio::test]
    async fn test_upload_maps_file_id() {
        let mut api = MockOpenAiApi::new();
        api.expect_upload_file()
            .withf(|path| path == Path::new("/docs/report.pdf"))
            .times(1)
            .returning(|_| {
                Ok(FileObject {
                    id: "file-xyz".to_string(),
                    filename: Some("report.pdf".to_string()),
                    bytes: Some(1024),
                })
            });

        let repo = OpenAiFileRepository::new(Arc::new(api));
        let uploaded = repo.upload_file(Path::new("/docs/report.pdf")).await.unwrap();

        assert_eq!(uploaded, UploadedFile::new("/docs/report.pdf", "file-xyz"));
    }

    #[tokio::test]
    async fn test_upload_error_is_propagated() {
        let mut api = MockOpenAiApi::new();
        api.expect_upload_file()
            .returning(|_| Err(anyhow::anyhow!("HTTP 413: File too large")));

        let repo = OpenAiFileRepository::new(Arc::new(api));
        let err = repo.upload_file(Path::new("big.bin")).await.unwrap_err();

        assert!(err.to_string().contains("413"));
    }
}
