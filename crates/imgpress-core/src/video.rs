//! Video pass-through stub.

use std::path::{Path, PathBuf};

use crate::options::Options;

/// "Compress" a video by returning its path unchanged.
///
/// The legacy host contract exposes a video compression entry point that
/// performs no work; this stub preserves that surface rather than silently
/// growing real transcoding.
pub fn compress_video(source_path: &Path, _options: &Options) -> PathBuf {
    tracing::debug!(source = %source_path.display(), "video compression is a pass-through");
    source_path.to_path_buf()
}
