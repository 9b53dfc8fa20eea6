//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **UploadedFile**: アップロード済みファイル（ローカルパスとリモートID）
//! - **VectorStore**: リモートのベクターストア
//! - **IndexBatch**: ファイルをベクターストアに取り込むバッチジョブ
//! - **Answer**: 質問に対する回答

pub mod answer;
pub mod index_batch;
pub mod uploaded_file;
pub mod vector_store;
