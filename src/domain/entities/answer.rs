//! # Answer Value Object
//!
//! 質問に対する回答

/// 回答
///
/// 会話履歴は持たず、質問ごとに独立している
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answer {
    /// 回答本文（出力テキストの連結）
    pub text: String,
    /// 引用されたファイル名（重複なし、出現順）
    pub citations: Vec<String>,
}

impl Answer {
    pub fn new(text: impl Into<String>, citations: Vec<String>) -> Self {
        Self {
            text: text.into(),
            citations,
        }
    }

    /// 本文が空（空白のみを含む）かどうか
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
