use std::{io::Write as _, sync::Arc};

use async_trait::async_trait;
use bytes::Bytes;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::{ArtifactWriter, SaveTrigger, WriteOutcome};
use crate::error::WriteError;

/// Stages the bytes in a temporary file and triggers the host's save of it.
///
/// The staged file is removed on the next scheduler tick after a successful
/// trigger, and immediately when the trigger fails.
pub struct TransientWriter {
  trigger: Arc<dyn SaveTrigger>,
}

impl TransientWriter {
  pub fn new(trigger: Arc<dyn SaveTrigger>) -> Self { Self { trigger } }
}

#[async_trait]
impl ArtifactWriter for TransientWriter {
  fn name(&self) -> &'static str { "transient-link" }

  async fn write(&self, bytes: Bytes, file_name: &str) -> Result<WriteOutcome, WriteError> {
    let staged = tokio::task::spawn_blocking(move || -> std::io::Result<NamedTempFile> {
      let mut file = NamedTempFile::new()?;
      file.write_all(&bytes)?;
      file.flush()?;
      Ok(file)
    })
    .await??;

    let trigger = Arc::clone(&self.trigger);
    let staged_path = staged.path().to_owned();
    let name = file_name.to_owned();
    let triggered =
      tokio::task::spawn_blocking(move || trigger.trigger(&staged_path, &name)).await;

    match triggered {
      Ok(Ok(location)) => {
        schedule_cleanup(staged);
        Ok(WriteOutcome::Saved { location: Some(location) })
      }
      Ok(Err(e)) => {
        discard(staged);
        Err(WriteError::Trigger(e))
      }
      Err(e) => {
        discard(staged);
        Err(WriteError::Join(e))
      }
    }
  }
}

/// Remove the staged file once the current task has yielded.
fn schedule_cleanup(staged: NamedTempFile) {
  tokio::spawn(async move {
    tokio::task::yield_now().await;
    discard(staged);
  });
}

fn discard(staged: NamedTempFile) {
  let path = staged.path().to_owned();
  match staged.close() {
    Ok(()) => debug!(path = %path.display(), "staged artifact removed"),
    Err(e) => warn!(path = %path.display(), error = %e, "could not remove staged artifact"),
  }
}
