//! # Input Classifier Service
//!
//! 対話ループに入力された1行を分類するドメインサービス

/// セッションを終了する入力（大文字小文字は区別しない）
pub const QUIT_TOKENS: [&str; 3] = [":q", ":quit", "exit"];

/// 入力行の分類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    /// 終了コマンド
    Quit,
    /// 空行（再入力を促す）
    Blank,
    /// 質問（前後の空白を除去済み）
    Question(String),
}

/// 入力分類サービス
pub struct InputClassifier;

impl InputClassifier {
    /// 1行を分類する
    ///
    /// # 例
    ///
    /// ```
    /// use docask::domain::services::input_classifier::{InputClassifier, UserInput};
    ///
    /// assert_eq!(InputClassifier::classify("  :QUIT \n"), UserInput::Quit);
    /// assert_eq!(InputClassifier::classify("   "), UserInput::Blank);
    /// assert_eq!(
    ///     InputClassifier::classify(" What changed in 2023? "),
    ///     UserInput::Question("What changed in 2023?".to_string())
    /// );
    /// ```
    pub fn classify(line: &str) -> UserInput {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return UserInput::Blank;
        }

        if Self::is_quit(trimmed) {
            return UserInput::Quit;
        }

        UserInput::Question(trimmed.to_string())
    }

    /// 終了コマンドかどうか
    pub fn is_quit(text: &str) -> bool {
        let lowered = text.trim().to_lowercase();
        QUIT_TOKENS.contains(&lowered.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_tokens_exact() {
        assert_eq!(InputClassifier::classify(":q"), UserInput::Quit);
        assert_eq!(InputClassifier::classify(":quit"), UserInput::Quit);
        assert_eq!(InputClassifier::classify("exit"), UserInput::Quit);
    }

    #[test]
    fn test_quit_tokens_case_insensitive() {
        assert_eq!(InputClassifier::classify(":Q"), UserInput::Quit);
        assert_eq!(InputClassifier::classify(":QuIt"), UserInput::Quit);
        assert_eq!(InputClassifier::classify("EXIT"), UserInput::Quit);
    }

    #[test]
    fn test_quit_tokens_with_whitespace() {
        assert_eq!(InputClassifier::classify("  exit\n"), UserInput::Quit);
        assert_eq!(InputClassifier::classify("\t:q\r\n"), UserInput::Quit);
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(InputClassifier::classify(""), UserInput::Blank);
        assert_eq!(InputClassifier::classify("\n"), UserInput::Blank);
        assert_eq!(InputClassifier::classify("   \t  "), UserInput::Blank);
    }

    #[test]
    fn test_question_is_trimmed() {
        assert_eq!(
            InputClassifier::classify("  Describe the company \n"),
            UserInput::Question("Describe the company".to_string())
        );
    }

    #[test]
    fn test_near_miss_is_a_question() {
        assert_eq!(
            InputClassifier::classify("exit now"),
            UserInput::Question("exit now".to_string())
        );
        assert_eq!(
            InputClassifier::classify("quit"),
            UserInput::Question("quit".to_string())
        );
    }
}
