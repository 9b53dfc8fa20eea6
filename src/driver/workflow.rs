//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::info;
use std::io::{BufRead, Write};
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::openai::client::{OpenAiApi, OpenAiClient};
use crate::adapter::repositories::openai_answer_repository::OpenAiAnswerRepository;
use crate::adapter::repositories::openai_file_repository::OpenAiFileRepository;
use crate::adapter::repositories::openai_vector_store_repository::OpenAiVectorStoreRepository;
use crate::application::dto::session_config::SessionConfig;
use crate::application::use_cases::ask_question::AskQuestionUseCase;
use crate::application::use_cases::index_files::IndexFilesUseCase;
use crate::application::use_cases::resolve_inputs::ResolveInputsUseCase;
use crate::application::use_cases::upload_files::UploadFilesUseCase;
use crate::domain::repositories::answer_repository::AnswerRepository;
use crate::domain::repositories::file_repository::FileRepository;
use crate::domain::repositories::vector_store_repository::VectorStoreRepository;

use super::session::{InteractiveSession, SessionSummary};

/// Upload → index → interactive questions
pub struct DocAskWorkflow {
    session: SessionConfig,
    resolve_use_case: ResolveInputsUseCase,
    upload_use_case: UploadFilesUseCase<dyn FileRepository>,
    index_use_case: IndexFilesUseCase<dyn VectorStoreRepository>,
    answer_repository: Arc<dyn AnswerRepository>,
}

impl DocAskWorkflow {
    /// Create a workflow backed by the OpenAI API
    pub fn new(config: &Config, session: SessionConfig) -> Result<Self> {
        let api: Arc<dyn OpenAiApi> = Arc::new(OpenAiClient::new(config)?);

        Ok(Self::with_repositories(
            session,
            Arc::new(OpenAiFileRepository::new(api.clone())),
            Arc::new(OpenAiVectorStoreRepository::new(api.clone())),
            Arc::new(OpenAiAnswerRepository::new(api)),
        ))
    }

    /// Create a workflow with injected repositories
    pub fn with_repositories(
        session: SessionConfig,
        file_repository: Arc<dyn FileRepository>,
        vector_store_repository: Arc<dyn VectorStoreRepository>,
        answer_repository: Arc<dyn AnswerRepository>,
    ) -> Self {
        let index_use_case = IndexFilesUseCase::new(vector_store_repository, session.poll_interval);

        Self {
            session,
            resolve_use_case: ResolveInputsUseCase::new(),
            upload_use_case: UploadFilesUseCase::new(file_repository),
            index_use_case,
            answer_repository,
        }
    }

    /// Run against the terminal
    pub async fn execute(&self, inputs: &[String]) -> Result<SessionSummary> {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        self.execute_with_io(inputs, stdin.lock(), &mut stdout).await
    }

    /// Run with explicit input and output streams
    pub async fn execute_with_io<R, W>(
        &self,
        inputs: &[String],
        input: R,
        output: &mut W,
    ) -> Result<SessionSummary>
    where
        R: BufRead,
        W: Write,
    {
        info!("Starting docask with model {}", self.session.model);

        // Resolve input paths
        let resolved = self.resolve_use_case.execute(inputs);
        for missing in &resolved.missing {
            writeln!(output, "⚠ File not found: {}", missing.display())?;
        }

        // 1) Upload files
        let uploaded = self.upload_use_case.execute(&resolved.files).await?;
        writeln!(output, "✓ Uploaded: {} file(s)", uploaded.len())?;

        // 2) Create vector store, attach files, wait for indexing
        let indexed = self
            .index_use_case
            .execute(&self.session.store_name, &uploaded, |batch| {
                writeln!(output, "{}", batch.progress_line())?;
                Ok(())
            })
            .await?;
        info!(
            "File batch {} finished: {}",
            indexed.batch.id,
            indexed.batch.progress_line()
        );
        writeln!(
            output,
            "✓ Vector store ready: {} ({})",
            indexed.store.name, indexed.store.id
        )?;

        // 3) Interactive questions
        writeln!(
            output,
            "\nEnter a question (e.g. a company description); quit with :quit"
        )?;
        let ask_use_case = AskQuestionUseCase::new(
            self.answer_repository.clone(),
            &self.session,
            indexed.store.id.as_str(),
        );
        let summary = InteractiveSession::new(&ask_use_case)
            .run(input, output)
            .await?;

        info!(
            "Session finished: {} question(s), {} failed",
            summary.asked, summary.failed
        );

        Ok(summary)
    }
}
