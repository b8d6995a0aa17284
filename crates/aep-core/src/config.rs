//! Run configuration.
//!
//! Every threshold the sequencing logic uses lives in an explicit, immutable
//! [`ApproachConfig`] handed to each component at construction.  Nothing is
//! process-wide, so concurrent Monte Carlo runs with different parameters stay
//! isolated.
//!
//! Typically built from `ApproachConfig::default()` with a few fields
//! overridden, or deserialised from JSON by the application crate (enable the
//! `serde` feature).  Missing JSON fields take their default values.

use crate::{AepError, AepResult, Minute, SpeedBands};

/// Length of the storm closure window in minutes.
pub const STORM_WINDOW_MINUTES: i64 = 30;

// ── SeparationRules ───────────────────────────────────────────────────────────

/// Temporal separation thresholds and the speed steps used to enforce them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SeparationRules {
    /// Hard minimum gap to the leader.  Below it the follower slows or goes
    /// around.  Default: 4 min.
    pub min_gap_minutes: f64,

    /// Gap at or above which the follower may accelerate to band max.
    /// Default: 5 min.
    pub buffer_gap_minutes: f64,

    /// Gap to the new leader a reversing aircraft needs before it is allowed
    /// back into the inbound flow.  Default: 10 min.
    pub reinsertion_gap_minutes: f64,

    /// Speed reduction applied per tick under congestion.  Default: 20 kt.
    pub deceleration_step_kt: f64,

    /// Magnitude of the outbound speed while reversing.  Default: 200 kt.
    pub reverse_speed_kt: f64,
}

impl Default for SeparationRules {
    fn default() -> Self {
        Self {
            min_gap_minutes:         4.0,
            buffer_gap_minutes:      5.0,
            reinsertion_gap_minutes: 10.0,
            deceleration_step_kt:    20.0,
            reverse_speed_kt:        200.0,
        }
    }
}

// ── ApproachConfig ────────────────────────────────────────────────────────────

/// Top-level configuration for one simulated operating day.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ApproachConfig {
    /// Mean arrivals per hour (λ).  Zero produces an empty day.
    pub arrival_rate_per_hour: f64,

    /// Operating horizon in hours.  Must be positive.
    pub horizon_hours: f64,

    /// Range at which aircraft first appear on radar.  Default: 100 nm.
    pub entry_range_nm: f64,

    /// Simulated minutes per tick.  Default: 1.
    pub tick_minutes: u32,

    /// Probability that an aircraft on short final is blown off its
    /// approach in a given tick.  Default: 0.1.
    pub wind_probability: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Draw a storm closure window for this run.
    pub storm_enabled: bool,

    /// Apply short-final wind interruptions.
    pub wind_enabled: bool,

    /// Let reversing aircraft rejoin the inbound flow once the gap to their
    /// new leader reaches `separation.reinsertion_gap_minutes`.
    pub readmission_enabled: bool,

    pub separation: SeparationRules,

    pub speed_bands: SpeedBands,
}

impl Default for ApproachConfig {
    fn default() -> Self {
        Self {
            arrival_rate_per_hour: 20.0,
            horizon_hours:         18.0,
            entry_range_nm:        100.0,
            tick_minutes:          1,
            wind_probability:      0.1,
            seed:                  0,
            storm_enabled:         true,
            wind_enabled:          true,
            readmission_enabled:   true,
            separation:            SeparationRules::default(),
            speed_bands:           SpeedBands::default(),
        }
    }
}

impl ApproachConfig {
    /// Horizon length in whole minutes (fractional minutes are truncated).
    #[inline]
    pub fn horizon_minutes(&self) -> i64 {
        (self.horizon_hours * 60.0) as i64
    }

    /// The minute at which the airport closes (exclusive upper bound).
    #[inline]
    pub fn end_minute(&self) -> Minute {
        Minute(self.horizon_minutes())
    }

    /// Check every precondition a run depends on.
    ///
    /// Called by the simulation builder; fails on the first violation.
    pub fn validate(&self) -> AepResult<()> {
        let rate = self.arrival_rate_per_hour;
        if !rate.is_finite() || rate < 0.0 {
            return Err(AepError::Config(format!(
                "arrival rate must be a finite, non-negative number of aircraft per hour (got {rate})"
            )));
        }
        if !self.horizon_hours.is_finite() || self.horizon_hours <= 0.0 || self.horizon_minutes() < 1 {
            return Err(AepError::Config(format!(
                "horizon must be positive and at least one minute (got {} h)",
                self.horizon_hours
            )));
        }
        if self.storm_enabled && self.horizon_minutes() < STORM_WINDOW_MINUTES {
            return Err(AepError::HorizonTooShort {
                horizon_minutes: self.horizon_minutes(),
                window_minutes:  STORM_WINDOW_MINUTES,
            });
        }
        if !self.entry_range_nm.is_finite() || self.entry_range_nm <= 0.0 {
            return Err(AepError::Config(format!(
                "entry range must be positive (got {} nm)",
                self.entry_range_nm
            )));
        }
        if self.tick_minutes == 0 {
            return Err(AepError::Config("tick size must be at least one minute".into()));
        }
        if !(0.0..=1.0).contains(&self.wind_probability) {
            return Err(AepError::Config(format!(
                "wind probability must lie in [0, 1] (got {})",
                self.wind_probability
            )));
        }

        let sep = &self.separation;
        if !(sep.reverse_speed_kt > 0.0) {
            return Err(AepError::Config("reverse speed must be positive".into()));
        }
        if !(sep.deceleration_step_kt > 0.0) {
            return Err(AepError::Config("deceleration step must be positive".into()));
        }
        if !(sep.min_gap_minutes > 0.0 && sep.min_gap_minutes <= sep.buffer_gap_minutes) {
            return Err(AepError::Config(format!(
                "separation thresholds must satisfy 0 < min ({}) <= buffer ({})",
                sep.min_gap_minutes, sep.buffer_gap_minutes
            )));
        }
        if !(sep.reinsertion_gap_minutes.is_finite()
            && sep.reinsertion_gap_minutes >= sep.buffer_gap_minutes)
        {
            return Err(AepError::Config(format!(
                "re-admission gap ({}) must be finite and at least the buffer gap ({})",
                sep.reinsertion_gap_minutes, sep.buffer_gap_minutes
            )));
        }
        if !self.speed_bands.is_well_formed() {
            return Err(AepError::Config(
                "speed bands must be ordered outermost first with 0 < min <= max".into(),
            ));
        }
        Ok(())
    }
}
