//! Spawning adapter processes from executable descriptors.

use std::process::Stdio;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::Command as TokioCommand;
use tokio::sync::mpsc;

use tether_proto::ExecutableDescriptor;

use crate::channel::AdapterChannel;
use crate::error::LaunchError;

/// Buffered messages per direction before backpressure.
const CHANNEL_CAPACITY: usize = 64;

/// Read chunk size for adapter output.
const READ_BUF_SIZE: usize = 8 * 1024;

/// Launches debug-adapter processes.
///
/// `{command, args}` descriptors spawn the program directly;
/// `{modulePath, args}` descriptors spawn the module under the configured
/// module-runner program. Either way stdin/stdout are piped into the
/// returned channel and stderr stays shared with this process.
#[derive(Debug, Clone)]
pub struct ProcessLauncher {
    module_runner: String,
}

impl Default for ProcessLauncher {
    fn default() -> Self {
        Self {
            module_runner: "node".into(),
        }
    }
}

impl ProcessLauncher {
    /// A launcher using the given module-runner program.
    pub fn new(module_runner: impl Into<String>) -> Self {
        Self {
            module_runner: module_runner.into(),
        }
    }

    /// The module-runner program used for `{modulePath}` descriptors.
    pub fn module_runner(&self) -> &str {
        &self.module_runner
    }

    /// Spawn the adapter described by `descriptor` and wire its stdio
    /// into a duplex channel.
    pub async fn launch(
        &self,
        descriptor: &ExecutableDescriptor,
    ) -> Result<AdapterChannel, LaunchError> {
        let mut command = match descriptor {
            ExecutableDescriptor::Command { command, args } => {
                tracing::debug!(%command, "spawning adapter");
                let mut c = TokioCommand::new(command);
                c.args(args);
                c
            }
            ExecutableDescriptor::Module { module_path, args } => {
                tracing::debug!(runner = %self.module_runner, %module_path, "spawning adapter module");
                let mut c = TokioCommand::new(&self.module_runner);
                c.arg(module_path);
                c.args(args);
                c
            }
        };

        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()?;

        let stdin = child.stdin.take().ok_or(LaunchError::Stdio("stdin"))?;
        let stdout = child.stdout.take().ok_or(LaunchError::Stdio("stdout"))?;

        // Writer task: forwards queued bytes to the adapter's stdin.
        let (writer_tx, mut writer_rx) = mpsc::channel::<Vec<u8>>(CHANNEL_CAPACITY);
        tokio::spawn(async move {
            let mut stdin = stdin;
            while let Some(bytes) = writer_rx.recv().await {
                if stdin.write_all(&bytes).await.is_err() {
                    break;
                }
                if stdin.flush().await.is_err() {
                    break;
                }
            }
        });

        // Reader task: forwards adapter stdout chunks until EOF. EOF is
        // how a crashed or exited adapter becomes visible to the
        // connection bound to this channel.
        let (output_tx, output_rx) = mpsc::channel::<Vec<u8>>(CHANNEL_CAPACITY);
        tokio::spawn(async move {
            let mut stdout = stdout;
            let mut buf = vec![0u8; READ_BUF_SIZE];
            loop {
                match stdout.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => {
                        if output_tx.send(buf[..n].to_vec()).await.is_err() {
                            break;
                        }
                    }
                }
            }
        });

        Ok(AdapterChannel::new(writer_tx, output_rx, Some(child)))
    }
}
