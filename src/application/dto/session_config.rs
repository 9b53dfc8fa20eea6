//! # Session Configuration DTO
//!
//! 1回の実行（アップロードから対話ループまで）に必要な設定

use std::time::Duration;

/// 回答生成のデフォルトモデル
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// ベクターストアのデフォルト表示名
pub const DEFAULT_STORE_NAME: &str = "docask-vs";

/// バッチ状態のデフォルトのポーリング間隔
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// 回答生成に渡す固定のシステム指示
pub const DEFAULT_INSTRUCTIONS: &str = "You are a management consultant. Answer ONLY on the basis of \
the file-search knowledge base. Give concrete recommendations for action, grouped by department, \
with a short justification and source references. For the source reference use the fields from \
the knowledge base: /unternehmen and /jahr. If the information cannot be found in the files: \
answer with 'No source found' and ask a precise follow-up question.";

/// セッション設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// 回答生成モデル
    pub model: String,
    /// 作成するベクターストアの表示名
    pub store_name: String,
    /// システム指示
    pub instructions: String,
    /// バッチ状態のポーリング間隔
    pub poll_interval: Duration,
}

impl SessionConfig {
    /// 新しいセッション設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use std::time::Duration;
    /// use docask::application::dto::session_config::{SessionConfig, DEFAULT_INSTRUCTIONS};
    ///
    /// let config = SessionConfig::new(
    ///     "gpt-4o-mini".to_string(),
    ///     "annual-reports".to_string(),
    ///     DEFAULT_INSTRUCTIONS.to_string(),
    ///     Duration::from_millis(500),
    /// );
    ///
    /// assert_eq!(config.model, "gpt-4o-mini");
    /// assert_eq!(config.poll_interval, Duration::from_millis(500));
    /// ```
    pub fn new(
        model: String,
        store_name: String,
        instructions: String,
        poll_interval: Duration,
    ) -> Self {
        Self {
            model,
            store_name,
            instructions,
            poll_interval,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_MODEL.to_string(),
            DEFAULT_STORE_NAME.to_string(),
            DEFAULT_INSTRUCTIONS.to_string(),
            DEFAULT_POLL_INTERVAL,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_config() {
        let config = SessionConfig::default();

        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.store_name, "docask-vs");
        assert_eq!(config.poll_interval, Duration::from_secs(1));
        assert!(config.instructions.contains("No source found"));
    }
}
