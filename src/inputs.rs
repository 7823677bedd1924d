//! Finds the images a collage is built from.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use thiserror::Error;
use walkdir::WalkDir;

/// Extensions that are picked up, matched without regard to case.
const IMAGE_PATTERN: &str = "*.{png,jpg,jpeg}";

fn image_matcher() -> Result<GlobMatcher, InputError> {
    let glob = GlobBuilder::new(IMAGE_PATTERN)
        .case_insensitive(true)
        .literal_separator(true)
        .build()?;

    Ok(glob.compile_matcher())
}

/// Lists the image files directly inside `folder`, sorted by file name.
///
/// Subfolders are not searched.
pub fn discover_images(folder: &Path) -> Result<Vec<PathBuf>, InputError> {
    let matcher = image_matcher()?;
    let mut paths = Vec::new();

    let walker = WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by(|a, b| a.file_name().cmp(b.file_name()));

    for entry in walker {
        let entry = entry.map_err(|source| InputError::WalkDir {
            path: folder.to_owned(),
            source,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        if matcher.is_match(entry.file_name()) {
            log::trace!("Found input {}", entry.path().display());
            paths.push(entry.into_path());
        } else {
            log::trace!("Skipping {}", entry.path().display());
        }
    }

    if paths.is_empty() {
        return Err(InputError::NoImages {
            path: folder.to_owned(),
        });
    }

    log::debug!("Found {} images in {}", paths.len(), folder.display());

    Ok(paths)
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("No .png, .jpg or .jpeg files were found in {}", .path.display())]
    NoImages { path: PathBuf },

    #[error("Couldn't read input folder {}: {source}", .path.display())]
    WalkDir {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error(transparent)]
    Glob {
        #[from]
        source: globset::Error,
    },
}
