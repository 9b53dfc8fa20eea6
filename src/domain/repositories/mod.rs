//! # Domain Repositories
//!
//! Repository trait（インターフェース）定義
//!
//! ## 特徴
//!
//! - Domain層では実装を持たない（traitの定義のみ）
//! - Adapter層で OpenAI API を使った具体的な実装を提供
//! - 依存性逆転の原則（DIP）を実現

pub mod answer_repository;
pub mod file_repository;
pub mod vector_store_repository;
