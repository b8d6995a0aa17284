//! Fluent builder for constructing a [`Sim`].

use aep_arrivals::ArrivalSchedule;
use aep_core::{ApproachConfig, SimClock, SimRng};
use aep_disruption::{StormWindow, WindShear};
use aep_fleet::Fleet;
use aep_sequencing::SequencingQueue;

use crate::sim::Counters;
use crate::{Sim, SimError, SimResult};

/// Child-stream offsets, one per stochastic process.
const ARRIVALS_STREAM: u64 = 1;
const STORM_STREAM:    u64 = 2;
const WIND_STREAM:     u64 = 3;

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`ApproachConfig`] — rate, horizon, thresholds, seed, …
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                                        |
/// |------------------|------------------------------------------------|
/// | `.schedule(s)`   | Poisson arrivals drawn from the config's rate  |
/// | `.storm(w)`      | Window drawn uniformly inside the horizon      |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .schedule(ArrivalSchedule::from_minutes(vec![Minute(0), Minute(7)]))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:   ApproachConfig,
    schedule: Option<ArrivalSchedule>,
    storm:    Option<StormWindow>,
}

impl SimBuilder {
    pub fn new(config: ApproachConfig) -> Self {
        Self { config, schedule: None, storm: None }
    }

    /// Replace the generated arrivals with a fixed schedule.
    ///
    /// Every contact minute must lie inside `[0, horizon)`.
    pub fn schedule(mut self, schedule: ArrivalSchedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    /// Pin the storm window instead of drawing it.  Ignored when the
    /// config disables storms.
    pub fn storm(mut self, window: StormWindow) -> Self {
        self.storm = Some(window);
        self
    }

    /// Validate the config, draw arrivals and the storm window, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let horizon = self.config.horizon_minutes();

        // The three streams are always derived, in this order, so a given
        // seed sees the same draws whichever processes are enabled.
        let mut root = SimRng::new(self.config.seed);
        let mut arrivals_rng = root.child(ARRIVALS_STREAM);
        let mut storm_rng = root.child(STORM_STREAM);
        let wind_rng = root.child(WIND_STREAM);

        let schedule = match self.schedule {
            Some(s) => {
                if let Some(&minute) = s.minutes().iter().find(|m| m.0 < 0 || m.0 >= horizon) {
                    return Err(SimError::ArrivalOutsideHorizon { minute, horizon_minutes: horizon });
                }
                s
            }
            None => ArrivalSchedule::generate(
                self.config.arrival_rate_per_hour,
                self.config.horizon_hours,
                &mut arrivals_rng,
            ),
        };

        let storm = match (self.config.storm_enabled, self.storm) {
            (false, _) => None,
            (true, Some(w)) => {
                if w.start().0 < 0 || w.end().0 > horizon {
                    return Err(SimError::Config(format!(
                        "storm window {w} does not fit inside the {horizon} min horizon"
                    )));
                }
                Some(w)
            }
            (true, None) => Some(StormWindow::draw(horizon, &mut storm_rng)?),
        };

        let wind = self
            .config
            .wind_enabled
            .then(|| WindShear::new(self.config.wind_probability));

        Ok(Sim {
            clock:    SimClock::new(self.config.tick_minutes),
            fleet:    Fleet::with_capacity(schedule.len()),
            queue:    SequencingQueue::new(),
            schedule,
            storm,
            wind,
            wind_rng,
            counters: Counters::default(),
            config:   self.config,
        })
    }
}
