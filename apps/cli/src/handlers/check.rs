use annc_kernel::document::{Document, DocumentKind};
use anyhow::{Result, bail};
use std::path::PathBuf;
use tracing::{error, info};

/// Checks every file and fails if any of them does not conform.
pub fn check_documents(kind: DocumentKind, files: &[PathBuf]) -> Result<()> {
    let mut failures = 0usize;

    for path in files {
        match Document::read(kind, path) {
            Ok(document) => {
                info!(path = %path.display(), summary = %document.summary(), "Document conforms");
            },
            Err(err) => {
                failures += 1;
                error!(path = %path.display(), "{err}");
            },
        }
    }

    if failures > 0 {
        bail!("{failures} of {} {kind} documents do not conform", files.len());
    }
    Ok(())
}
