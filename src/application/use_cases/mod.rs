//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **ResolveInputsUseCase**: 引数のパスをアップロード対象のファイルに展開
//! - **UploadFilesUseCase**: ファイルのアップロード
//! - **IndexFilesUseCase**: ベクターストアの作成とインデックス作成の完了待ち
//! - **AskQuestionUseCase**: ベクターストアに限定した質問応答

pub mod ask_question;
pub mod index_files;
pub mod resolve_inputs;
pub mod upload_files;
