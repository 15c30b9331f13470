//! File-system output for generated examples.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tracing::{info, warn};

use crate::domain::OutputPort;

/// Writes serialized examples into the configured output folder.
///
/// The folder is not created on demand; writing into a missing folder is
/// reported and the run carries on with the remaining operations.
pub struct FileWriter {
    folder: PathBuf,
}

impl FileWriter {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }
}

#[async_trait]
impl OutputPort for FileWriter {
    async fn write(&self, content: &str, name: &str) -> anyhow::Result<()> {
        let path = self.folder.join(name);
        match fs::write(&path, content).await {
            Ok(()) => {
                info!("Wrote {}", path.display());
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!(
                    "Could not write {}: target directory {} does not exist",
                    name,
                    self.folder.display()
                );
                Err(err.into())
            }
            Err(err) => {
                warn!("Could not write {}: {}", name, err);
                Err(err.into())
            }
        }
    }
}
