//! docask - Ask questions about your documents
//!
//! ドキュメントを OpenAI のベクターストアに取り込み、対話的に質問する

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use docask::adapter::config::{Config, Settings};
use docask::driver::{Args, DocAskWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // .env may set RUST_LOG, so load it before the logger
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let config = Config::from_env()?.with_model(args.model.clone());
    let settings = Settings::load_optional(args.config.as_deref())?;
    let session = settings.session_config(&config.model, args.store_name.as_deref());

    // Create workflow with injected dependencies
    let workflow = DocAskWorkflow::new(&config, session)?;

    workflow.execute(&args.files).await?;

    Ok(())
}
