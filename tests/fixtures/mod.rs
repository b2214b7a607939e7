//! Test fixtures: directory tree builders and a stub media prober

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use vqc::models::ProbedMedia;
use vqc::services::probe::{MediaProbe, ProbeError, duration_seconds};

/// Create `<root>/<folder>/<filename>` with placeholder contents. Probing in
/// tests never reads the file, only the stub's metadata table.
pub fn add_clip(root: &Path, folder: &str, filename: &str) -> std::io::Result<()> {
    let dir = root.join(folder);
    fs::create_dir_all(&dir)?;
    fs::write(dir.join(filename), b"not a real container")
}

/// Prober answering from a fixed metadata table keyed by filename.
#[derive(Debug, Default)]
pub struct StubProber {
    media: HashMap<String, ProbedMedia>,
    unreadable: HashSet<String>,
}

impl StubProber {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register metadata for a filename. Duration is derived from the frame
    /// count and rate the same way a real probe would.
    pub fn with_media(
        mut self,
        filename: &str,
        width: u32,
        height: u32,
        fps: f64,
        frame_count: u64,
    ) -> Self {
        self.media.insert(
            filename.to_string(),
            ProbedMedia {
                path: filename.to_string(),
                width,
                height,
                fps,
                frame_count,
                duration_seconds: duration_seconds(frame_count, fps),
            },
        );
        self
    }

    /// Make a filename fail probing.
    pub fn with_unreadable(mut self, filename: &str) -> Self {
        self.unreadable.insert(filename.to_string());
        self
    }
}

impl MediaProbe for StubProber {
    fn probe(&self, path: &Path) -> Result<ProbedMedia, ProbeError> {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if self.unreadable.contains(&filename) {
            return Err(ProbeError::Unreadable {
                path: path.to_string_lossy().into_owned(),
                message: "stubbed as unreadable".to_string(),
            });
        }

        match self.media.get(&filename) {
            Some(media) => {
                // Report the on-disk path, not the table key.
                let mut media = media.clone();
                media.path = path.to_string_lossy().into_owned();
                Ok(media)
            }
            None => Err(ProbeError::Unreadable {
                path: path.to_string_lossy().into_owned(),
                message: "no stub metadata registered".to_string(),
            }),
        }
    }
}

/// Default-standard-compliant metadata: 2800x2100 (exact 4:3), 30 fps, 10s.
pub fn compliant_stub(filename: &str) -> StubProber {
    StubProber::new().with_media(filename, 2800, 2100, 30.0, 300)
}
