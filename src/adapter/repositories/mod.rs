//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの OpenAI 実装

pub mod openai_answer_repository;
pub mod openai_file_repository;
pub mod openai_vector_store_repository;
