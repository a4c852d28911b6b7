//! The monitoring session for `netbar`.
//!
//! Owns the rolling history and wires together the periodic activities:
//! - Sampler task (one counter line per second → parsed samples)
//! - Persistence timer (best-effort history snapshots every few seconds)
//! - Renderer + tray sink (a fresh bitmap on every ingested sample)

pub mod sink;

pub use sink::{PngFileSink, TraySink};

use netbar_config::{MonitorConfig, RenderErrorPolicy};
use netbar_core::{History, Message, NetbarError, Result};
use netbar_render::{bytes_to_mbps, Color, Renderer};
use netbar_sampler::Sampler;
use netbar_store::HistoryStore;
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};

/// The monitoring session: single owner and single writer of the
/// history, shared by the ingestion path and the persistence timer.
pub struct Session<S> {
    history:  History,
    store:    HistoryStore,
    renderer: Renderer,
    sink:     S,
    policy:   RenderErrorPolicy,
    max_bars: usize,
}

impl<S: TraySink> Session<S> {
    pub fn new(config: &MonitorConfig, sink: S) -> Result<Self> {
        let store = match &config.store.state_path {
            Some(path) => HistoryStore::new(path),
            None       => HistoryStore::at_default_path(),
        };

        let history = store.load().unwrap_or_else(|| {
            info!("No usable state file; starting from a zeroed history");
            History::zeroed()
        });

        let foreground = Color::from_hex(&config.tray.foreground).ok_or_else(|| {
            NetbarError::Config(format!(
                "invalid foreground colour '{}'",
                config.tray.foreground
            ))
        })?;
        let renderer = Renderer::new(config.tray.height, config.chart.max_bars, foreground);

        Ok(Self {
            history,
            store,
            renderer,
            sink,
            policy: config.chart.on_render_error,
            max_bars: config.chart.max_bars,
        })
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Dispatch one session message.  Returns `false` once the loop
    /// should stop.
    pub fn handle(&mut self, message: Message) -> Result<bool> {
        match message {
            Message::Sample(sample) => {
                self.history.push(sample);

                let frame = self
                    .renderer
                    .render(&self.history)
                    .and_then(|frame| self.sink.update(&frame));
                if let Err(e) = frame {
                    match self.policy {
                        RenderErrorPolicy::Skip => warn!("Frame dropped: {e}"),
                        RenderErrorPolicy::Exit => return Err(e),
                    }
                }
            }
            Message::PersistTick => {
                match self.store.persist(&self.history) {
                    Ok(()) => debug!(
                        "Persisted {} samples; down avg {}, up avg {}",
                        self.history.len(),
                        bytes_to_mbps(self.history.avg_input(self.max_bars)),
                        bytes_to_mbps(self.history.avg_output(self.max_bars)),
                    ),
                    // Best-effort: the in-memory history stays authoritative.
                    Err(e) => warn!("History persist failed: {e}"),
                }
            }
            Message::Shutdown => {
                // One final flush attempt before the session ends.
                if let Err(e) = self.store.persist(&self.history) {
                    warn!("Final history persist failed: {e}");
                }
                return Ok(false);
            }
        }

        Ok(true)
    }
}

/// Run the monitoring session until ctrl-c or a fatal render error.
pub async fn run(config: MonitorConfig) -> Result<()> {
    let sink = PngFileSink::new(&config.tray.image_path);
    let mut session = Session::new(&config, sink)?;
    let mut sampler = Sampler::spawn()?;

    let mut persist = time::interval(Duration::from_secs(
        config.store.persist_interval_secs.max(1),
    ));
    persist.set_missed_tick_behavior(MissedTickBehavior::Skip);
    persist.tick().await; // the first tick completes immediately

    let mut sampler_open = true;
    loop {
        let message = tokio::select! {
            maybe = sampler.recv(), if sampler_open => match maybe {
                Some(sample) => Message::Sample(sample),
                None => {
                    // No restart logic: the chart freezes, the session
                    // keeps persisting what it has.
                    sampler_open = false;
                    continue;
                }
            },
            _ = persist.tick() => Message::PersistTick,
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown requested");
                Message::Shutdown
            }
        };

        if !session.handle(message)? {
            break;
        }
    }

    sampler.shutdown();
    info!("Monitor stopped");
    Ok(())
}
