use crate::application::driver::{Driver, RunSummary};
use crate::application::pacing::Pacing;
use crate::application::shutdown::ShutdownListener;
use crate::config::Settings;
use crate::domain::synthesis::ActivitySynthesizer;
use crate::domain::types::LoggerName;
use crate::infrastructure::sink::RecordSink;
use crate::{Error, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, instrument};

/// Main application struct that wires settings, synthesizer, sink and driver
pub struct Application {
    settings: Settings,
}

impl Application {
    #[instrument]
    pub fn new() -> Result<Self> {
        let settings = Settings::new()?;
        Ok(Self { settings })
    }

    pub fn from_settings(settings: Settings) -> Self {
        Self { settings }
    }

    /// Runs until SIGINT/SIGTERM, writing records to stdout
    #[instrument(skip(self))]
    pub async fn run(self) -> Result<RunSummary> {
        let logger = LoggerName::try_new(self.settings.application.logger_name.clone())
            .map_err(|e| Error::invalid_settings(format!("logger_name: {e}")))?;
        let pacing = Pacing::from_settings(&self.settings.driver)?;
        let synthesizer = ActivitySynthesizer::from_os_rng(logger)?;
        let listener = ShutdownListener::install()?;

        let (mut driver, shutdown_tx) = Driver::new(
            synthesizer,
            RecordSink::stdout(),
            pacing,
            StdRng::from_os_rng(),
            self.settings.application.version.clone(),
        );
        let _forwarder = tokio::spawn(listener.forward(shutdown_tx));

        info!(
            "Emitting records every {}-{}s",
            self.settings.driver.min_delay_secs, self.settings.driver.max_delay_secs
        );
        driver.run().await
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
