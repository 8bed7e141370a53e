mod domain;
mod parser;

pub use domain::{epoch, parse_post_date, PostRecord};
pub use parser::FrontMatterError;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

const POST_EXTENSIONS: [&str; 2] = ["md", "mdx"];

#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("failed to read posts from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("posts path {} is not a directory", path.display())]
    NotADirectory { path: PathBuf },
}

/// Loads blog posts from a directory of Markdown/MDX files with YAML front matter.
pub struct PostLoader;

impl PostLoader {
    /// Reads every post under `dir`, recursing into subdirectories in path order.
    /// Symlinked directories are not followed.
    ///
    /// Documents with missing or malformed front matter are skipped and logged;
    /// only failures to read the directory tree itself are returned as errors.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Vec<PostRecord>, ContentLoadError> {
        let root = dir.as_ref();
        if !root.is_dir() {
            return Err(ContentLoadError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let files = collect_post_files(root)?;

        let mut posts = Vec::with_capacity(files.len());
        let mut seen = HashSet::new();
        for path in files {
            let text = fs::read_to_string(&path).map_err(|source| ContentLoadError::Io {
                path: path.clone(),
                source,
            })?;
            let default_slug = slug_for(root, &path);

            match parser::parse_document(&default_slug, &text) {
                Ok(mut post) => {
                    if !seen.insert(post.slug.clone()) {
                        warn!(slug = %post.slug, path = %path.display(), "duplicate post slug");
                    }
                    debug!(slug = %post.slug, draft = post.draft, "loaded post");
                    post.source = Some(path);
                    posts.push(post);
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping post");
                }
            }
        }

        info!(dir = %root.display(), count = posts.len(), "posts loaded");
        Ok(posts)
    }

    /// Parses a single document that did not come from disk.
    pub fn parse_str(slug: &str, text: &str) -> Result<PostRecord, FrontMatterError> {
        parser::parse_document(slug, text)
    }
}

fn collect_post_files(root: &Path) -> Result<Vec<PathBuf>, ContentLoadError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|err| ContentLoadError::Io {
            path: err.path().unwrap_or(root).to_path_buf(),
            source: err.into(),
        })?;
        if entry.file_type().is_file() && is_post_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn is_post_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            POST_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Relative path without extension, joined with `/`.
fn slug_for(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path).with_extension("");
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_uses_relative_path_without_extension() {
        let root = Path::new("/srv/blog");
        assert_eq!(slug_for(root, Path::new("/srv/blog/hello.md")), "hello");
        assert_eq!(
            slug_for(root, Path::new("/srv/blog/notes/lora-tuning.mdx")),
            "notes/lora-tuning"
        );
    }

    #[test]
    fn recognizes_markdown_extensions() {
        assert!(is_post_file(Path::new("a.md")));
        assert!(is_post_file(Path::new("a.MDX")));
        assert!(!is_post_file(Path::new("a.txt")));
        assert!(!is_post_file(Path::new("README")));
    }
}
