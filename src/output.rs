//! URL list serialization

use std::io;
use std::path::Path;
use tracing::debug;

/// Writes the URLs newline-joined as UTF-8, one per line, with no trailing
/// newline. An existing file at the path is overwritten without confirmation.
///
/// The file handle lives only for the duration of the single write.
pub async fn write_urls(path: &Path, urls: &[String]) -> io::Result<()> {
    tokio::fs::write(path, urls.join("\n")).await?;
    debug!(path = %path.display(), count = urls.len(), "wrote URL list");
    Ok(())
}
