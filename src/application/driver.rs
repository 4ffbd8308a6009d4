//! The emission loop: synthesize, emit, sleep, until asked to stop

use rand::Rng;
use tokio::io::AsyncWrite;
use tokio::sync::mpsc::{self, error::TryRecvError};
use tracing::{debug, info, instrument};

use crate::application::pacing::Pacing;
use crate::domain::event::{EventContext, LogEvent, LogLevel};
use crate::domain::messages::lifecycle;
use crate::domain::synthesis::ActivitySynthesizer;
use crate::domain::types::{FieldKey, LoggerName};
use crate::infrastructure::log_messages::diagnostics;
use crate::infrastructure::sink::RecordSink;
use crate::source_location;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Stopped,
}

/// What a finished run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Completed synthesize-and-emit iterations
    pub iterations: u64,
    /// Records written, lifecycle records included
    pub records_emitted: u64,
}

/// Drives synthesis and emission until a shutdown request arrives
///
/// The only writer to the sink. A shutdown request is checked at the top of
/// every iteration and raced against the inter-event sleep; once seen, the
/// driver writes the stop record and returns without synthesizing again.
pub struct Driver<R, W> {
    synthesizer: ActivitySynthesizer<R>,
    sink: RecordSink<W>,
    pacing: Pacing,
    delay_rng: R,
    version: String,
    shutdown_rx: mpsc::Receiver<()>,
    state: DriverState,
}

impl<R, W> Driver<R, W>
where
    R: Rng,
    W: AsyncWrite + Unpin,
{
    /// Creates a driver and the sender that stops it
    pub fn new(
        synthesizer: ActivitySynthesizer<R>,
        sink: RecordSink<W>,
        pacing: Pacing,
        delay_rng: R,
        version: impl Into<String>,
    ) -> (Self, mpsc::Sender<()>) {
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);

        let driver = Self {
            synthesizer,
            sink,
            pacing,
            delay_rng,
            version: version.into(),
            shutdown_rx,
            state: DriverState::Stopped,
        };

        (driver, shutdown_tx)
    }

    #[instrument(skip(self), fields(logger = %self.synthesizer.logger()))]
    pub async fn run(&mut self) -> Result<RunSummary> {
        self.state = DriverState::Running;
        self.emit_started().await?;
        info!("{}", diagnostics::DRIVER_STARTED);

        let mut iterations = 0;
        while self.state == DriverState::Running {
            if self.shutdown_pending() {
                self.state = DriverState::Stopped;
                break;
            }

            let events = self.synthesizer.synthesize();
            for event in events.iter() {
                self.sink.emit(event).await?;
            }
            iterations += 1;

            let delay = self.pacing.next_delay(&mut self.delay_rng);
            debug!(iteration = iterations, delay_secs = delay.as_secs(), "Sleeping");

            tokio::select! {
                request = self.shutdown_rx.recv() => {
                    if request.is_none() {
                        info!("{}", diagnostics::SHUTDOWN_CHANNEL_CLOSED);
                    }
                    self.state = DriverState::Stopped;
                }
                () = tokio::time::sleep(delay) => {}
            }
        }

        info!("{}", diagnostics::SHUTDOWN_REQUESTED);
        self.emit_stopped().await?;
        info!(iterations, "{}", diagnostics::DRIVER_STOPPED);

        Ok(RunSummary {
            iterations,
            records_emitted: self.sink.records_written(),
        })
    }

    /// A pending request or a closed channel both count as shutdown
    fn shutdown_pending(&mut self) -> bool {
        match self.shutdown_rx.try_recv() {
            Ok(()) => true,
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                info!("{}", diagnostics::SHUTDOWN_CHANNEL_CLOSED);
                true
            }
        }
    }

    async fn emit_started(&mut self) -> Result<()> {
        let event = LogEvent::new(
            LogLevel::Info,
            self.logger().clone(),
            lifecycle::STARTED,
            source_location!("emit_started"),
        )
        .with_context(EventContext::new().with_field(FieldKey::VERSION, self.version.as_str()));
        self.sink.emit(&event).await
    }

    async fn emit_stopped(&mut self) -> Result<()> {
        let event = LogEvent::new(
            LogLevel::Info,
            self.logger().clone(),
            lifecycle::STOPPED,
            source_location!("emit_stopped"),
        );
        self.sink.emit(&event).await
    }

    fn logger(&self) -> &LoggerName {
        self.synthesizer.logger()
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn into_sink(self) -> RecordSink<W> {
        self.sink
    }
}
