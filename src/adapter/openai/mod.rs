//! OpenAI Adapter Modules
//!
//! OpenAI REST API（Files / Vector Stores / Responses）統合のためのアダプターモジュール

pub mod client;
pub mod error;
pub mod models;
