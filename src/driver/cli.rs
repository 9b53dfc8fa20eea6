//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// ドキュメントをアップロードし、その内容だけに基づいて質問に答えるCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "docask")]
#[command(
    about = "Upload documents to an OpenAI vector store and ask questions answered only from them",
    long_about = None
)]
pub struct Args {
    /// Files or directories to upload
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<String>,

    /// Settings file path (JSON)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Model override (defaults to $OPENAI_MODEL, then gpt-4o)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Display name of the vector store to create
    #[arg(long)]
    pub store_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_args_files() {
        let args = Args::parse_from(["docask", "a.pdf", "b.md"]);
        assert_eq!(args.files, vec!["a.pdf", "b.md"]);
        assert!(args.config.is_none());
        assert!(args.model.is_none());
        assert!(args.store_name.is_none());
    }

    #[test]
    fn test_args_missing_files() {
        let err = Args::try_parse_from(["docask"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_args_missing_files_with_options() {
        let err = Args::try_parse_from(["docask", "--model", "gpt-4o-mini"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_args_custom_config() {
        let args = Args::parse_from(["docask", "-c", "~/.config/docask.json", "report.pdf"]);
        assert_eq!(args.config.as_deref(), Some("~/.config/docask.json"));
    }

    #[test]
    fn test_args_combined() {
        let args = Args::parse_from([
            "docask",
            "-m",
            "o3-mini",
            "--store-name",
            "reports-2024",
            "docs/",
            "extra.txt",
        ]);
        assert_eq!(args.model.as_deref(), Some("o3-mini"));
        assert_eq!(args.store_name.as_deref(), Some("reports-2024"));
        assert_eq!(args.files, vec!["docs/", "extra.txt"]);
    }
}
