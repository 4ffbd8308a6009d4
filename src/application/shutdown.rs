//! Translates OS termination signals into a driver shutdown request

use derive_more::Display;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::infrastructure::log_messages::diagnostics;
use crate::Result;

#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};

/// Which signal ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ShutdownReason {
    #[display("interrupt")]
    Interrupt,
    #[display("terminate")]
    Terminate,
}

/// Signal handlers registered up front
///
/// Handlers are installed in `install`, not on first poll, so a signal that
/// arrives while the driver is busy writing is still observed.
pub struct ShutdownListener {
    #[cfg(unix)]
    interrupt: Signal,
    #[cfg(unix)]
    terminate: Signal,
}

impl ShutdownListener {
    /// Must be called from within a tokio runtime
    #[cfg(unix)]
    pub fn install() -> Result<Self> {
        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        })
    }

    #[cfg(not(unix))]
    pub fn install() -> Result<Self> {
        Ok(Self {})
    }

    #[cfg(unix)]
    pub async fn recv(&mut self) -> ShutdownReason {
        tokio::select! {
            _ = self.interrupt.recv() => ShutdownReason::Interrupt,
            _ = self.terminate.recv() => ShutdownReason::Terminate,
        }
    }

    #[cfg(not(unix))]
    pub async fn recv(&mut self) -> ShutdownReason {
        match tokio::signal::ctrl_c().await {
            Ok(()) => ShutdownReason::Interrupt,
            Err(e) => {
                warn!("{}: {}", diagnostics::SIGNAL_LISTEN_FAILED, e);
                std::future::pending().await
            }
        }
    }

    /// Waits for a signal, then sends one shutdown request
    pub async fn forward(mut self, shutdown_tx: mpsc::Sender<()>) {
        let reason = self.recv().await;
        info!(%reason, "{}", diagnostics::SIGNAL_RECEIVED);
        if shutdown_tx.send(()).await.is_err() {
            warn!("{}", diagnostics::SIGNAL_FORWARD_FAILED);
        }
    }
}
