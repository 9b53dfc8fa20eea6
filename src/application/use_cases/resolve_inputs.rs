//! # Resolve Inputs Use Case
//!
//! コマンドライン引数のパスをアップロード対象のファイルに展開するユースケース

use log::{debug, warn};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 展開結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedInputs {
    /// アップロード対象のファイル（重複なし、引数の順）
    pub files: Vec<PathBuf>,
    /// 存在しなかったパス
    pub missing: Vec<PathBuf>,
}

/// 入力パス展開ユースケース
///
/// - 存在しないパスは警告を出してスキップ
/// - ファイルはそのまま対象にする
/// - ディレクトリは再帰的に走査し、配下のファイルを名前順に対象にする
pub struct ResolveInputsUseCase;

impl ResolveInputsUseCase {
    pub fn new() -> Self {
        Self
    }

    /// 引数のパスを展開する
    ///
    /// # Arguments
    ///
    /// * `raw_paths` - コマンドラインで指定されたパス（`~` を含んでもよい）
    pub fn execute(&self, raw_paths: &[String]) -> ResolvedInputs {
        let mut resolved = ResolvedInputs::default();
        let mut seen = HashSet::new();

        for raw in raw_paths {
            let path = PathBuf::from(shellexpand::tilde(raw).as_ref());

            if !path.exists() {
                warn!("File not found: {}", path.display());
                resolved.missing.push(path);
                continue;
            }

            let candidates = if path.is_dir() {
                Self::walk_dir(&path)
            } else {
                vec![path]
            };

            for file in candidates {
                // 表記の異なる同一ファイルは1回だけ（入力された表記を残す）
                let key = fs::canonicalize(&file).unwrap_or_else(|_| file.clone());
                if seen.insert(key) {
                    resolved.files.push(file);
                } else {
                    debug!("Skipping duplicate input: {}", file.display());
                }
            }
        }

        debug!(
            "Resolved {} file(s), {} missing path(s)",
            resolved.files.len(),
            resolved.missing.len()
        );

        resolved
    }

    fn walk_dir(dir: &Path) -> Vec<PathBuf> {
        let files: Vec<PathBuf> = WalkDir::new(dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .map(|e| e.path().to_path_buf())
            .collect();

        if files.is_empty() {
            warn!("Directory contains no files: {}", dir.display());
        }

        files
    }
}

impl Default for ResolveInputsUseCase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn path_string(path: &std::path::Path) -> String {
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_existing_files_are_kept_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let b = temp_dir.path().join("b.txt");
        let a = temp_dir.path().join("a.txt");
        fs::write(&b, "b").unwrap();
        fs::write(&a, "a").unwrap();

        let result = ResolveInputsUseCase::new().execute(&[path_string(&b), path_string(&a)]);

        assert_eq!(result.files, vec![b, a]);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_missing_paths_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let present = temp_dir.path().join("present.md");
        fs::write(&present, "# hi").unwrap();
        let absent = temp_dir.path().join("absent.md");

        let result =
            ResolveInputsUseCase::new().execute(&[path_string(&absent), path_string(&present)]);

        assert_eq!(result.files, vec![present]);
        assert_eq!(result.missing, vec![absent]);
    }

    #[test]
    fn test_all_missing_yields_no_files() {
        let result = ResolveInputsUseCase::new()
            .execute(&["/nonexistent/one.pdf".to_string(), "/nonexistent/two.pdf".to_string()]);

        assert!(result.files.is_empty());
        assert_eq!(result.missing.len(), 2);
    }

    #[test]
    fn test_directory_is_walked_recursively_and_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(temp_dir.path().join("z.txt"), "z").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        fs::write(nested.join("m.txt"), "m").unwrap();

        let result = ResolveInputsUseCase::new().execute(&[path_string(temp_dir.path())]);

        assert_eq!(
            result.files,
            vec![
                temp_dir.path().join("a.txt"),
                nested.join("m.txt"),
                temp_dir.path().join("z.txt"),
            ]
        );
    }

    #[test]
    fn test_duplicates_are_kept_once() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("report.pdf");
        fs::write(&file, "pdf").unwrap();

        let result = ResolveInputsUseCase::new().execute(&[
            path_string(&file),
            path_string(temp_dir.path()),
            path_string(&file),
        ]);

        assert_eq!(result.files, vec![file]);
    }

    #[test]
    fn test_differently_spelled_paths_are_kept_once() {
        let temp_dir = TempDir::new().unwrap();
        let docs = temp_dir.path().join("docs");
        fs::create_dir(&docs).unwrap();
        let file = docs.join("a.txt");
        fs::write(&file, "a").unwrap();

        let result = ResolveInputsUseCase::new().execute(&[
            path_string(&file),
            path_string(&docs.join(".").join("a.txt")),
            path_string(&docs.join("..").join("docs").join("a.txt")),
        ]);

        assert_eq!(result.files, vec![file]);
    }

    #[test]
    fn test_empty_directory_yields_no_files() {
        let temp_dir = TempDir::new().unwrap();

        let result = ResolveInputsUseCase::new().execute(&[path_string(temp_dir.path())]);

        assert!(result.files.is_empty());
        assert!(result.missing.is_empty());
    }
}
