use annc_kernel::codec::Codec;
use annc_kernel::document::{Document, DocumentKind};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

pub fn transcode(kind: DocumentKind, input: &Path, output: &Path) -> Result<()> {
    let document = Document::read(kind, input)?;
    document
        .write(output)
        .with_context(|| format!("Failed to write {} documents", document.kind()))?;

    info!(
        from = %Codec::from_path(input),
        to = %Codec::from_path(output),
        records = document.len(),
        "Document transcoded"
    );
    Ok(())
}
