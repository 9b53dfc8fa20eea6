//! # VectorStore Entity
//!
//! リモートのベクターストア

/// ベクターストア
///
/// 実行ごとに1つ作成され、このプログラムが再利用・削除することはない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorStore {
    pub id: String,
    pub name: String,
}

impl VectorStore {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
