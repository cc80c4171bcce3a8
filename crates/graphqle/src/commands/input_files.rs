use anyhow::Context;
use graphqle_parser::ParseError;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Input selection shared by every command.
#[derive(Debug, clap::Args)]
pub(crate) struct InputFiles {
    #[arg(
        default_values_t=[
            "graphqle".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL Endpoint IDL files or directories \
             containing them.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// The files selected by [`InputFiles::scan()`].
#[derive(Debug)]
pub(crate) struct FileScan {
    pub file_paths: Vec<PathBuf>,
    pub num_skipped_files: usize,
}

impl InputFiles {
    /// Finds all matching files at or under each path argument, in a stable
    /// order.
    pub(crate) fn scan(&self) -> anyhow::Result<FileScan> {
        let file_exts: HashSet<&str> = self
            .file_exts
            .iter()
            .map(|ext| ext.trim_start_matches('.'))
            .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped_files = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry.with_context(|| {
                    format!("failed to scan files at/under {}", path.display())
                })?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }
                let matches_ext = entry_path
                    .extension()
                    .is_some_and(|ext| file_exts.contains(ext.to_string_lossy().as_ref()));
                if matches_ext {
                    log::trace!("Found file at {entry_path:#?}.");
                    file_paths.push(entry_path.to_path_buf());
                } else {
                    num_skipped_files += 1;
                }
            }
        }

        // A single file named explicitly is used whatever its extension.
        if file_paths.is_empty()
            && let [only_path] = self.file_or_dir_paths.as_slice()
            && only_path.is_file()
        {
            log::warn!(
                "Proceeding with {only_path:#?} even though it doesn't match \
                any of the --file-exts ({}).",
                self.file_exts
                    .iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(only_path.clone());
            num_skipped_files = 0;
        }

        if file_paths.is_empty() {
            anyhow::bail!(
                "no files with extension(s) {} found",
                self.file_exts.join(", "),
            );
        }
        log::debug!("Found {} files.", file_paths.len());
        Ok(FileScan {
            file_paths,
            num_skipped_files,
        })
    }
}

pub(crate) fn read_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))
}

/// How parse errors are rendered.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub(crate) enum ErrorFormat {
    /// A source snippet with the error underlined.
    #[default]
    Detailed,

    /// One `file:line:col: error: message` line per error.
    Oneline,
}

impl ErrorFormat {
    pub(crate) fn render(&self, error: &ParseError, source: &str, path: &Path) -> String {
        match self {
            Self::Detailed => error.format_detailed(source, Some(path)),
            Self::Oneline => error.format_oneline(source, Some(path)),
        }
    }
}

/// Runs `process` on every file on the blocking pool, one task per file, and
/// returns the outputs in input order.
pub(crate) async fn process_files<T, F>(
    file_paths: &[PathBuf],
    process: F,
) -> anyhow::Result<Vec<T>>
where
    T: Send + 'static,
    F: Fn(&Path) -> anyhow::Result<T> + Clone + Send + 'static,
{
    let tasks: Vec<_> = file_paths
        .iter()
        .cloned()
        .map(|path| {
            let process = process.clone();
            tokio::task::spawn_blocking(move || process(&path))
        })
        .collect();

    let mut outputs = Vec::with_capacity(tasks.len());
    for task in tasks {
        outputs.push(task.await.context("file processing task failed")??);
    }
    Ok(outputs)
}

/// Prefixes `body` with a `==> path <==` header when several files are
/// printed.
pub(crate) fn with_header(path: &Path, body: String, multiple_files: bool) -> String {
    if multiple_files {
        format!("==> {} <==\n{body}", path.display())
    } else {
        body
    }
}
