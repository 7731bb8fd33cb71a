//! File discovery and per-file processing.

use crate::cli::{Args, Destination, Strategy};
use crate::config;
use crate::output::{FileReport, FileStatus, RunSummary};
use camino::{Utf8Path, Utf8PathBuf};
use classname_support::{FastPath, SupportError};
use classname_transformer::{
    transform_with_sink, AuditSink, ConfigError, FileSink, PrefixConfig, TransformOptions,
};
use globset::{Glob, GlobSet, GlobSetBuilder};
use miette::Diagnostic;
use rayon::prelude::*;
use std::fs;
use thiserror::Error;
use walkdir::WalkDir;

/// Extensions of the files the transform understands.
const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "mjs", "cjs", "ts", "tsx", "mts", "cts"];

/// Directories skipped unless named explicitly.
const DEFAULT_IGNORES: &[&str] = &["**/node_modules/**", "**/dist/**", "**/.git/**"];

/// Errors that stop a run before any file is processed.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(code(classname_prefixer::config), help("check --options, --query and the name flags"))]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(code(classname_prefixer::fast_path))]
    FastPath(#[from] SupportError),

    /// Invalid glob pattern.
    #[error("invalid glob pattern: {0}")]
    #[diagnostic(code(classname_prefixer::glob))]
    InvalidGlob(String),

    /// An input path does not exist.
    #[error("no such file or directory: {0}")]
    #[diagnostic(code(classname_prefixer::missing_path))]
    MissingPath(Utf8PathBuf),

    /// A file could not be written.
    #[error("failed to write {path}: {source}")]
    #[diagnostic(code(classname_prefixer::io))]
    Write {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A source file and its path relative to the input it was found under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: Utf8PathBuf,
    pub relative: Utf8PathBuf,
}

/// The rewrite used for every file of a run.
enum Engine {
    Structural(PrefixConfig),
    Regex(FastPath),
}

/// A transformed file that is ready to be written.
struct Transformed {
    report: FileReport,
    code: Option<String>,
}

/// The outcome of a run.
#[derive(Debug)]
pub struct RunOutcome {
    pub reports: Vec<FileReport>,
    pub summary: RunSummary,
}

/// Transforms every file named by `args`.
pub fn run(args: &Args) -> Result<RunOutcome, CliError> {
    let config = config::resolve(args)?;
    let ignore_set = build_ignore_set(&args.ignore)?;
    let files = discover(&args.paths, &ignore_set)?;
    tracing::debug!(files = files.len(), prefix = %config.prefix, "starting run");

    let engine = match args.strategy {
        Strategy::Structural => Engine::Structural(config.clone()),
        Strategy::Regex => Engine::Regex(FastPath::new(&config)?),
    };
    let sink = FileSink::new(args.debug_log.clone());
    let destination = args.destination();

    let transformed: Vec<Transformed> = files
        .par_iter()
        .map(|file| process(file, &engine, &sink))
        .collect();

    let mut reports = Vec::with_capacity(transformed.len());
    for (file, item) in files.iter().zip(transformed) {
        let unchanged = item.report.status == FileStatus::Unchanged;
        if let Some(code) = item.code {
            if !(unchanged && destination == Destination::InPlace) {
                emit(file, &code, &destination, files.len())?;
            }
        }
        reports.push(item.report);
    }

    let summary = RunSummary::from_reports(&reports);
    Ok(RunOutcome { reports, summary })
}

fn build_ignore_set(patterns: &[String]) -> Result<GlobSet, CliError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns.iter().map(String::as_str).chain(DEFAULT_IGNORES.iter().copied()) {
        let glob = Glob::new(pattern).map_err(|e| CliError::InvalidGlob(e.to_string()))?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| CliError::InvalidGlob(e.to_string()))
}

/// Collects the source files under `paths`, in a stable order.
///
/// A file named directly is always included; files found by walking a
/// directory are filtered by extension and by `ignore_set`.
pub fn discover(paths: &[Utf8PathBuf], ignore_set: &GlobSet) -> Result<Vec<SourceFile>, CliError> {
    let mut files = Vec::new();

    for root in paths {
        if root.is_file() {
            let relative = root
                .file_name()
                .map(Utf8PathBuf::from)
                .unwrap_or_else(|| root.clone());
            files.push(SourceFile {
                path: root.clone(),
                relative,
            });
            continue;
        }
        if !root.is_dir() {
            return Err(CliError::MissingPath(root.clone()));
        }

        let mut found: Vec<SourceFile> = WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| Utf8PathBuf::try_from(e.into_path()).ok())
            .filter(|p| is_source_file(p))
            .filter_map(|path| {
                let relative = path.strip_prefix(root).ok()?.to_path_buf();
                (!ignore_set.is_match(relative.as_str())).then_some(SourceFile { path, relative })
            })
            .collect();
        found.sort_by(|a, b| a.path.cmp(&b.path));
        files.extend(found);
    }

    Ok(files)
}

fn is_source_file(path: &Utf8Path) -> bool {
    path.extension()
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

fn process(file: &SourceFile, engine: &Engine, sink: &dyn AuditSink) -> Transformed {
    let source = match fs::read_to_string(&file.path) {
        Ok(source) => source,
        Err(e) => {
            return Transformed {
                report: FileReport::failed(file.path.clone(), format!("failed to read file: {e}")),
                code: None,
            }
        }
    };

    let (code, rewrites, skipped) = match engine {
        Engine::Structural(config) => {
            let options = TransformOptions::for_file(file.path.as_str());
            match transform_with_sink(&source, config, &options, sink) {
                Ok(result) => (result.code, result.events, result.skipped),
                Err(e) => {
                    tracing::debug!(path = %file.path, error = %e, "transform failed");
                    return Transformed {
                        report: FileReport::failed(file.path.clone(), e),
                        code: None,
                    };
                }
            }
        }
        Engine::Regex(fast) => {
            let result = fast.transform_with_sink(&source, sink);
            (result.code, result.events, Vec::new())
        }
    };

    for event in &rewrites {
        tracing::info!(path = %file.path, line = event.line, "{}", event);
    }
    for shape in &skipped {
        tracing::info!(path = %file.path, line = shape.line, kind = shape.kind, "skipped value");
    }

    let status = if code == source {
        FileStatus::Unchanged
    } else {
        FileStatus::Rewritten
    };
    Transformed {
        report: FileReport {
            path: file.path.clone(),
            status,
            rewrites,
            skipped,
            error: None,
        },
        code: Some(code),
    }
}

fn emit(
    file: &SourceFile,
    code: &str,
    destination: &Destination,
    file_count: usize,
) -> Result<(), CliError> {
    let write = |path: &Utf8Path| {
        fs::write(path, code).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        })
    };

    match destination {
        Destination::Stdout if file_count == 1 => print!("{code}"),
        Destination::Stdout => println!("=== {} ===\n{}", file.path, code),
        Destination::InPlace => write(file.path.as_path())?,
        Destination::Directory(dir) => {
            let target = dir.join(&file.relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|source| CliError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            write(target.as_path())?;
        }
    }
    Ok(())
}
