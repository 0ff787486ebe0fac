use std::{io, path::Path, sync::Arc};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::{
  fs::File,
  io::{AsyncWrite, AsyncWriteExt},
};
use tracing::{debug, warn};

use super::{ArtifactWriter, SavePrompt, WriteOutcome};
use crate::error::WriteError;

/// Prompts for a target and writes the bytes there.
pub struct DirectWriter {
  prompt: Arc<dyn SavePrompt>,
}

impl DirectWriter {
  pub fn new(prompt: Arc<dyn SavePrompt>) -> Self { Self { prompt } }
}

#[async_trait]
impl ArtifactWriter for DirectWriter {
  fn name(&self) -> &'static str { "direct-write" }

  async fn write(&self, bytes: Bytes, file_name: &str) -> Result<WriteOutcome, WriteError> {
    let Some(target) = self.prompt.choose(file_name).await? else {
      debug!(file_name, "save prompt dismissed");
      return Ok(WriteOutcome::Cancelled);
    };

    let file = File::create(&target).await?;
    write_or_discard(&target, file, &bytes).await?;
    debug!(target = %target.display(), len = bytes.len(), "artifact written");
    Ok(WriteOutcome::Saved { location: Some(target) })
  }
}

/// Write `bytes` into `sink`, which was opened on `target`. On failure the
/// target is removed so a truncated copy is not left behind.
pub(crate) async fn write_or_discard<W>(target: &Path, mut sink: W, bytes: &[u8]) -> io::Result<()>
where
  W: AsyncWrite + Unpin,
{
  let written = match sink.write_all(bytes).await {
    Ok(()) => sink.flush().await,
    Err(e) => Err(e),
  };
  if written.is_err() {
    discard(target).await;
  }
  written
}

async fn discard(target: &Path) {
  match tokio::fs::remove_file(target).await {
    Ok(()) => debug!(target = %target.display(), "removed partial write"),
    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
    Err(e) => warn!(target = %target.display(), error = %e, "failed to remove partial write"),
  }
}
