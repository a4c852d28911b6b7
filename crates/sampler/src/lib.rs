pub mod parse;

pub use parse::parse_line;

use netbar_core::{NetbarError, Result, Sample};
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Handle to the spawned OS counter process and its sample stream.
///
/// Spawns the counter tool in one-second totals mode, reads its stdout
/// line by line, and forwards every line that parses as a data row.
/// There is no restart logic: if the child exits, the stream ends and
/// the chart simply stops updating.
pub struct Sampler {
    child: Child,
    rx:    mpsc::Receiver<Sample>,
}

impl Sampler {
    const COMMAND: &'static str = "netstat";
    const ARGS: [&'static str; 2] = ["-w", "1"];

    /// Spawn the counter process and start streaming parsed samples.
    pub fn spawn() -> Result<Self> {
        let mut child = Command::new(Self::COMMAND)
            .args(Self::ARGS)
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                NetbarError::Sampler(format!("cannot spawn {}: {e}", Self::COMMAND))
            })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| NetbarError::Sampler("counter process has no stdout".into()))?;

        let (tx, rx) = mpsc::channel(4);
        tokio::spawn(async move {
            forward_samples(stdout, tx).await;
            warn!("Counter process stopped emitting; chart will no longer update");
        });

        info!("Sampler started ({} {})", Self::COMMAND, Self::ARGS.join(" "));
        Ok(Self { child, rx })
    }

    /// Receive the next sample; `None` once the counter process is gone.
    pub async fn recv(&mut self) -> Option<Sample> {
        self.rx.recv().await
    }

    /// Best-effort termination of the counter process (not awaited).
    pub fn shutdown(&mut self) {
        if let Err(e) = self.child.start_kill() {
            warn!("Could not signal counter process: {e}");
        }
    }
}

/// Read counter output line by line and forward every parsed data row.
/// Returns when the reader is exhausted or all receivers are dropped.
async fn forward_samples<R>(reader: R, tx: mpsc::Sender<Sample>)
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        if let Some(sample) = parse::parse_line(&line) {
            if tx.send(sample).await.is_err() {
                return; // all receivers dropped
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn forwards_data_rows_and_drops_headers() {
        let output = b"\
            input        (Total)           output\n\
   packets  errs      bytes    packets  errs      bytes colls\n\
        76     0      58112         58     0      12677     0\n\
       120     0      99000        100     0      41000     0\n" as &[u8];

        let (tx, mut rx) = mpsc::channel(4);
        forward_samples(output, tx).await;

        assert_eq!(rx.recv().await, Some(Sample::new(58112, 12677)));
        assert_eq!(rx.recv().await, Some(Sample::new(99000, 41000)));
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn empty_stream_sends_nothing() {
        let (tx, mut rx) = mpsc::channel(1);
        forward_samples(&b""[..], tx).await;
        assert_eq!(rx.recv().await, None);
    }
}
