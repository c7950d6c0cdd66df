//! OS signal handling.
//!
//! SIGINT and SIGTERM trigger shutdown. SIGHUP asks for an immediate
//! re-read of the channels file. Off Unix only Ctrl+C is handled.

use std::io;

use tokio::sync::mpsc;

use crate::lifecycle::shutdown::Shutdown;

/// What a received signal asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Shutdown,
    Reload,
}

/// Registered signal streams.
pub struct Signals {
    #[cfg(unix)]
    term: tokio::signal::unix::Signal,
    #[cfg(unix)]
    hup: tokio::signal::unix::Signal,
}

impl Signals {
    /// Register the handlers. Must be called from within a Tokio runtime.
    pub fn new() -> io::Result<Self> {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            Ok(Self {
                term: signal(SignalKind::terminate())?,
                hup: signal(SignalKind::hangup())?,
            })
        }
        #[cfg(not(unix))]
        {
            Ok(Self {})
        }
    }

    /// Wait for the next signal.
    pub async fn recv(&mut self) -> io::Result<Signal> {
        #[cfg(unix)]
        {
            tokio::select! {
                res = tokio::signal::ctrl_c() => res.map(|()| Signal::Shutdown),
                _ = self.term.recv() => Ok(Signal::Shutdown),
                _ = self.hup.recv() => Ok(Signal::Reload),
            }
        }
        #[cfg(not(unix))]
        {
            tokio::signal::ctrl_c().await.map(|()| Signal::Shutdown)
        }
    }
}

/// Translate signals into shutdown triggers and reload requests until a
/// shutdown signal arrives.
pub async fn forward_signals(
    mut signals: Signals,
    shutdown: Shutdown,
    reload_tx: mpsc::UnboundedSender<()>,
) -> io::Result<()> {
    loop {
        match signals.recv().await? {
            Signal::Reload => {
                tracing::info!("Reload signal received");
                let _ = reload_tx.send(());
            }
            Signal::Shutdown => {
                tracing::info!("Shutdown signal received");
                shutdown.trigger();
                return Ok(());
            }
        }
    }
}
