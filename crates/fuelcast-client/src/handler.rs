//! The form submission handler.
//!
//! One call to [`SubmissionHandler::submit`] is one submit event: busy
//! trigger, coerce, POST, then count-up or alert. The trigger's original
//! label and enabled state come back on every path, including when the
//! returned future is dropped midway.
//!
//! Overlapping submissions are not blocked. A submission that starts while
//! another is still waiting for its response logs a warning and proceeds.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use fuelcast_core::config::FuelcastConfig;
use fuelcast_core::errors::SubmitError;
use fuelcast_core::traits::SubmitView;
use fuelcast_core::tracing::events;
use fuelcast_form::{coerce, FormSchema};
use tracing::Instrument;

use crate::animation::{animate, CountUp, FrameClock};
use crate::format::NumberFormat;
use crate::transport::{HttpClientConfig, PredictionClient};

/// What a submission ended up showing.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The prediction was counted up into the result display.
    Displayed(f64),
    /// The server refused; the alert text is carried.
    Rejected(String),
    /// The endpoint could not be reached; the alert text is carried.
    Unreachable(String),
}

impl SubmitOutcome {
    pub fn is_displayed(&self) -> bool {
        matches!(self, SubmitOutcome::Displayed(_))
    }
}

impl From<SubmitError> for SubmitOutcome {
    fn from(err: SubmitError) -> Self {
        let alert = err.alert_text();
        match err {
            SubmitError::ServerRejection { .. } => SubmitOutcome::Rejected(alert),
            SubmitError::TransportFailure { .. } => SubmitOutcome::Unreachable(alert),
        }
    }
}

/// Restores the trigger control when dropped.
struct TriggerGuard<'a, V: SubmitView + ?Sized> {
    view: &'a V,
    original_label: String,
}

impl<'a, V: SubmitView + ?Sized> TriggerGuard<'a, V> {
    fn engage(view: &'a V, busy_label: &str) -> Self {
        let original_label = view.trigger_label();
        view.set_trigger(busy_label, false);
        Self {
            view,
            original_label,
        }
    }
}

impl<V: SubmitView + ?Sized> Drop for TriggerGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_trigger(&self.original_label, true);
    }
}

/// Decrements the in-flight counter when dropped.
struct InFlight<'a>(&'a AtomicUsize);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Handles submit events of the prediction form.
#[derive(Debug)]
pub struct SubmissionHandler {
    client: PredictionClient,
    schema: FormSchema,
    prediction_key: String,
    busy_label: String,
    duration: Duration,
    reveal_delay: Duration,
    format: NumberFormat,
    in_flight: AtomicUsize,
}

impl SubmissionHandler {
    pub fn new(client: PredictionClient, schema: FormSchema, prediction_key: impl Into<String>) -> Self {
        let defaults = FuelcastConfig::default();
        Self {
            client,
            schema,
            prediction_key: prediction_key.into(),
            busy_label: defaults.client.effective_busy_label().to_string(),
            duration: defaults.animation.effective_duration(),
            reveal_delay: defaults.animation.effective_reveal_delay(),
            format: NumberFormat::default(),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Build a handler with every setting taken from `config`.
    pub fn from_config(config: &FuelcastConfig) -> Result<Self, SubmitError> {
        let client = PredictionClient::new(HttpClientConfig::from_config(config))?;
        Ok(Self::new(
            client,
            FormSchema::from_config(&config.form),
            config.contract.effective_prediction_key(),
        )
        .with_busy_label(config.client.effective_busy_label())
        .with_timing(
            config.animation.effective_duration(),
            config.animation.effective_reveal_delay(),
        )
        .with_format(NumberFormat::from_config(&config.locale)))
    }

    pub fn with_busy_label(mut self, label: impl Into<String>) -> Self {
        self.busy_label = label.into();
        self
    }

    /// Count-up duration and the delay before the visibility transition.
    pub fn with_timing(mut self, duration: Duration, reveal_delay: Duration) -> Self {
        self.duration = duration;
        self.reveal_delay = reveal_delay;
        self
    }

    pub fn with_format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    pub fn prediction_key(&self) -> &str {
        &self.prediction_key
    }

    /// Submissions currently waiting for a response.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Run one submit event against `view`, animating with `clock`.
    pub async fn submit<V, C>(&self, view: &V, clock: &mut C) -> SubmitOutcome
    where
        V: SubmitView + ?Sized,
        C: FrameClock,
    {
        let submission_id = uuid::Uuid::new_v4().to_string();
        self.run(view, clock)
            .instrument(events::submission_span(&submission_id))
            .await
    }

    async fn run<V, C>(&self, view: &V, clock: &mut C) -> SubmitOutcome
    where
        V: SubmitView + ?Sized,
        C: FrameClock,
    {
        let trigger = TriggerGuard::engage(view, &self.busy_label);

        let payload = coerce(&view.snapshot(), &self.schema);

        let pending = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        let in_flight = InFlight(&self.in_flight);
        if pending > 1 {
            events::overlapping_submission(pending);
        }
        events::submission_started(payload.len(), pending);

        let result = self
            .client
            .post(&payload)
            .await
            .and_then(|reply| reply.into_prediction(&self.prediction_key));
        drop(in_flight);

        match result {
            Ok(value) => {
                view.show_result();
                drop(trigger);

                let count_up = CountUp::new(0.0, value, self.duration);
                let reveal = async {
                    tokio::time::sleep(self.reveal_delay).await;
                    view.mark_result_visible();
                };
                tokio::join!(reveal, animate(view, &count_up, clock, &self.format));

                events::prediction_displayed(value);
                SubmitOutcome::Displayed(value)
            }
            Err(err) => {
                events::submission_failed(&err);
                view.alert(&err.alert_text());
                drop(trigger);
                SubmitOutcome::from(err)
            }
        }
    }
}
