//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - OpenAI の API や HTTP について何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（UploadedFile, VectorStore, IndexBatch, Answer）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（入力の分類）
//! - **errors**: 致命的エラーの分類

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
