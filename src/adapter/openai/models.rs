//! OpenAI Wire Models
//!
//! リクエスト/レスポンスのJSON表現

use serde::{Deserialize, Serialize};

/// `purpose` sent with every file upload
pub const FILE_PURPOSE: &str = "assistants";

/// `POST /files` response
#[derive(Debug, Clone, Deserialize)]
pub struct FileObject {
    pub id: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub bytes: Option<u64>,
}

/// `POST /vector_stores` body
#[derive(Debug, Serialize)]
pub struct CreateVectorStoreRequest<'a> {
    pub name: &'a str,
}

/// Vector store object
#[derive(Debug, Clone, Deserialize)]
pub struct VectorStoreObject {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// `POST /vector_stores/{id}/file_batches` body
#[derive(Debug, Serialize)]
pub struct CreateFileBatchRequest<'a> {
    pub file_ids: &'a [String],
}

/// Vector store file batch object
#[derive(Debug, Clone, Deserialize)]
pub struct FileBatchObject {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub file_counts: Option<FileCountsObject>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct FileCountsObject {
    pub in_progress: u64,
    pub completed: u64,
    pub failed: u64,
    pub cancelled: u64,
    pub total: u64,
}

/// `POST /responses` body
#[derive(Debug, Serialize)]
pub struct CreateResponseRequest<'a> {
    pub model: &'a str,
    pub instructions: &'a str,
    pub input: &'a str,
    pub tools: Vec<Tool<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Tool<'a> {
    FileSearch { vector_store_ids: Vec<&'a str> },
}

/// Response object
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseObject {
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub output: Vec<OutputItem>,
    #[serde(default)]
    pub error: Option<ResponseErrorObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseErrorObject {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputItem {
    Message {
        #[serde(default)]
        content: Vec<ContentPart>,
    },
    /// file_search_call, reasoning, ...
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    OutputText {
        text: String,
        #[serde(default)]
        annotations: Vec<Annotation>,
    },
    /// refusal, ...
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Annotation {
    FileCitation {
        #[serde(default)]
        file_id: Option<String>,
        #[serde(default)]
        filename: Option<String>,
    },
    #[serde(other)]
    Other,
}

impl ResponseObject {
    /// Concatenated text of every `output_text` part
    pub fn output_text(&self) -> String {
        let mut text = String::new();
        for part in self.content_parts() {
            if let ContentPart::OutputText { text: t, .. } = part {
                text.push_str(t);
            }
        }
        text
    }

    /// Cited file names (file id when the name is absent), first occurrence order
    pub fn cited_files(&self) -> Vec<String> {
        let mut cited: Vec<String> = Vec::new();
        for part in self.content_parts() {
            let ContentPart::OutputText { annotations, .. } = part else {
                continue;
            };
            for annotation in annotations {
                if let Annotation::FileCitation { file_id, filename } = annotation {
                    if let Some(name) = filename.clone().or_else(|| file_id.clone()) {
                        if !cited.contains(&name) {
                            cited.push(name);
                        }
                    }
                }
            }
        }
        cited
    }

    fn content_parts(&self) -> impl Iterator<Item = &ContentPart> {
        self.output
            .iter()
            .filter_map(|item| match item {
                OutputItem::Message { content } => Some(content),
                OutputItem::Other => None,
            })
            .flatten()
    }
}
