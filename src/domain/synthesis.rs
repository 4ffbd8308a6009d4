//! Synthetic user activity
//!
//! Each draw picks an action, user, request, duration and outcome. The
//! resulting `UserActivity` turns into one INFO event, plus a companion ERROR
//! event when the request failed with a server error.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use tracing::trace;

use crate::domain::event::{EventContext, LogEvent, LogLevel};
use crate::domain::messages::{self, activity};
use crate::domain::types::{
    Action, DurationMs, FieldKey, LoggerName, RequestId, StatusCode, UserId,
};
use crate::domain::validation_constants::duration;
use crate::source_location;
use crate::Result;

/// The random choices behind one synthesized request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserActivity {
    pub action: Action,
    pub user_id: UserId,
    pub request_id: RequestId,
    pub duration_ms: DurationMs,
    pub status_code: StatusCode,
}

impl UserActivity {
    /// Builds the events describing this activity, all stamped with `at`
    pub fn into_events(self, logger: &LoggerName, at: DateTime<Utc>) -> SynthesizedEvents {
        let primary = LogEvent::new(
            LogLevel::Info,
            logger.clone(),
            messages::user_action(self.action),
            source_location!("into_events"),
        )
        .at(at)
        .with_context(
            EventContext::new()
                .with_user_id(self.user_id)
                .with_request_id(self.request_id)
                .with_duration_ms(self.duration_ms)
                .with_status_code(self.status_code)
                .with_field(FieldKey::ACTION, self.action.to_string()),
        );

        let companion = self.status_code.is_server_error().then(|| {
            LogEvent::new(
                LogLevel::Error,
                logger.clone(),
                messages::error_processing(self.action),
                source_location!("into_events"),
            )
            .at(at)
            .with_context(
                EventContext::new()
                    .with_user_id(self.user_id)
                    .with_request_id(self.request_id)
                    .with_field(FieldKey::ERROR_TYPE, activity::SERVER_ERROR_TYPE),
            )
        });

        SynthesizedEvents { primary, companion }
    }
}

/// The events produced by one synthesis, in emission order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedEvents {
    primary: LogEvent,
    companion: Option<LogEvent>,
}

impl SynthesizedEvents {
    pub fn primary(&self) -> &LogEvent {
        &self.primary
    }

    pub fn companion(&self) -> Option<&LogEvent> {
        self.companion.as_ref()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEvent> {
        std::iter::once(&self.primary).chain(self.companion.as_ref())
    }
}

/// Draws synthetic activity from an RNG
pub struct ActivitySynthesizer<R> {
    rng: R,
    durations: Normal<f64>,
    logger: LoggerName,
}

impl ActivitySynthesizer<StdRng> {
    /// Synthesizer seeded from the operating system
    pub fn from_os_rng(logger: LoggerName) -> Result<Self> {
        Self::new(StdRng::from_os_rng(), logger)
    }

    /// Reproducible synthesizer
    pub fn seeded(seed: u64, logger: LoggerName) -> Result<Self> {
        Self::new(StdRng::seed_from_u64(seed), logger)
    }
}

impl<R: Rng> ActivitySynthesizer<R> {
    pub fn new(rng: R, logger: LoggerName) -> Result<Self> {
        let durations = Normal::new(duration::MEAN_MS, duration::STD_DEV_MS)?;
        Ok(Self {
            rng,
            durations,
            logger,
        })
    }

    /// Performs the random choices for one request
    pub fn draw(&mut self) -> UserActivity {
        let action = Action::random(&mut self.rng);
        let user_id = UserId::random(&mut self.rng);
        let request_id = RequestId::random(&mut self.rng);
        let duration_ms = DurationMs::from_sample(self.durations.sample(&mut self.rng));
        let status_code = StatusCode::random(&mut self.rng);

        UserActivity {
            action,
            user_id,
            request_id,
            duration_ms,
            status_code,
        }
    }

    /// Draws an activity and turns it into events stamped now
    pub fn synthesize(&mut self) -> SynthesizedEvents {
        let activity = self.draw();
        trace!(
            action = %activity.action,
            status_code = %activity.status_code,
            "Synthesized activity"
        );
        activity.into_events(&self.logger, Utc::now())
    }

    pub fn logger(&self) -> &LoggerName {
        &self.logger
    }
}
