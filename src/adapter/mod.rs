//! Adapter Layer
//!
//! 外部システム（OpenAI API, 環境変数, 設定ファイル）との統合

pub mod config;
pub mod openai;
pub mod repositories;
