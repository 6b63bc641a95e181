//! The duplex byte channel bound to a running adapter process.

use tokio::process::Child;
use tokio::sync::mpsc;

use crate::error::LaunchError;

/// A duplex channel over a spawned adapter's standard input/output.
///
/// Writes go to the adapter's stdin through a writer task; output arrives
/// on a receiver that is taken exactly once by whoever binds the channel
/// to a host-visible connection. Disposal force-kills the subprocess and
/// is idempotent.
#[derive(Debug)]
pub struct AdapterChannel {
    writer: mpsc::Sender<Vec<u8>>,
    output: Option<mpsc::Receiver<Vec<u8>>>,
    child: Option<Child>,
    disposed: bool,
}

impl AdapterChannel {
    pub(crate) fn new(
        writer: mpsc::Sender<Vec<u8>>,
        output: mpsc::Receiver<Vec<u8>>,
        child: Option<Child>,
    ) -> Self {
        Self {
            writer,
            output: Some(output),
            child,
            disposed: false,
        }
    }

    /// Send bytes to the adapter's stdin.
    pub async fn write(&self, bytes: Vec<u8>) -> Result<(), LaunchError> {
        self.writer
            .send(bytes)
            .await
            .map_err(|_| LaunchError::ChannelClosed)
    }

    /// A cloneable handle for writing into the adapter.
    pub fn writer(&self) -> mpsc::Sender<Vec<u8>> {
        self.writer.clone()
    }

    /// Take the adapter's output stream. Returns `None` after the first
    /// call; the stream is bound to exactly one consumer.
    pub fn take_output(&mut self) -> Option<mpsc::Receiver<Vec<u8>>> {
        self.output.take()
    }

    /// The adapter's OS process id, while the process handle is held.
    pub fn process_id(&self) -> Option<u32> {
        self.child.as_ref().and_then(|c| c.id())
    }

    /// Forcibly terminate the adapter process.
    ///
    /// Idempotent; never fails, even when the process already exited.
    pub async fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        if let Some(mut child) = self.child.take() {
            if let Err(e) = child.start_kill() {
                // Already exited.
                tracing::debug!("adapter kill skipped: {e}");
            }
            let _ = child.wait().await;
        }
    }
}
