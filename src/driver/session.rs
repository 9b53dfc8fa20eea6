//! Interactive Question Loop
//!
//! 1行ずつ質問を読み取り、回答を表示する

use anyhow::{Context, Result};
use log::warn;
use std::io::{BufRead, Write};

use crate::adapter::openai::error::error_chain_to_string;
use crate::application::use_cases::ask_question::AskQuestionUseCase;
use crate::domain::entities::answer::Answer;
use crate::domain::repositories::answer_repository::AnswerRepository;
use crate::domain::services::input_classifier::{InputClassifier, UserInput};

/// 対話ループの結果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// リモートに送った質問の数
    pub asked: usize,
    /// 失敗した質問の数
    pub failed: usize,
}

/// 対話セッション
pub struct InteractiveSession<'a, A: AnswerRepository + ?Sized> {
    ask_use_case: &'a AskQuestionUseCase<A>,
}

impl<'a, A: AnswerRepository + ?Sized> InteractiveSession<'a, A> {
    pub fn new(ask_use_case: &'a AskQuestionUseCase<A>) -> Self {
        Self { ask_use_case }
    }

    /// 終了コマンドか入力の終端まで質問を処理する
    ///
    /// 回答生成のエラーは表示して次の入力へ進む
    pub async fn run<R, W>(&self, mut input: R, output: &mut W) -> Result<SessionSummary>
    where
        R: BufRead,
        W: Write,
    {
        let mut summary = SessionSummary::default();

        loop {
            write!(output, "\n> ")?;
            output.flush()?;

            let mut line = String::new();
            let read = input
                .read_line(&mut line)
                .context("Failed to read question")?;

            // EOF
            if read == 0 {
                writeln!(output)?;
                writeln!(output, "Bye!")?;
                break;
            }

            let question = match InputClassifier::classify(&line) {
                UserInput::Quit => {
                    writeln!(output, "Bye!")?;
                    break;
                }
                UserInput::Blank => continue,
                UserInput::Question(question) => question,
            };

            summary.asked += 1;
            match self.ask_use_case.execute(&question).await {
                Ok(answer) => Self::print_answer(output, &answer)?,
                Err(e) => {
                    summary.failed += 1;
                    let message = error_chain_to_string(&e);
                    warn!("Question failed: {}", message);
                    writeln!(output, "✗ Request failed: {}", message)?;
                }
            }
        }

        Ok(summary)
    }

    fn print_answer<W: Write>(output: &mut W, answer: &Answer) -> Result<()> {
        writeln!(output, "\n— Answer —")?;
        if answer.is_empty() {
            writeln!(output, "(no output)")?;
        } else {
            writeln!(output, "{}", answer.text.trim_end())?;
        }

        if !answer.citations.is_empty() {
            writeln!(output, "\nSources: {}", answer.citations.join(", "))?;
        }

        Ok(())
    }
}
