//! The `Sim` struct and its tick loop.

use aep_arrivals::ArrivalSchedule;
use aep_core::{AircraftId, ApproachConfig, Minute, SimClock, SimRng};
use aep_disruption::{StormWindow, WindShear, divert_unreachable};
use aep_fleet::{Fleet, FlightState, StepOutcome};
use aep_sequencing::SequencingQueue;
use tracing::{debug, info, trace};

use crate::summary::mean_delay;
use crate::{RunSummary, SimObserver, SimResult, TickSummary};

// ── Counters ──────────────────────────────────────────────────────────────────

/// Event totals accumulated over a run.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct Counters {
    pub landed:              u32,
    pub diverted:            u32,
    pub congestion_events:   u32,
    pub go_arounds:          u32,
    pub wind_interruptions:  u32,
    pub storm_interruptions: u32,
    pub readmissions:        u32,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim` owns every aircraft of the day in a [`Fleet`] arena and drives the
/// six-phase tick loop described in the crate docs.  The run is
/// single-threaded and fully determined by the config's seed.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run configuration (rate, horizon, thresholds, seed, …).
    pub config: ApproachConfig,

    /// Simulation clock; `clock.current` is the minute of the next tick.
    pub clock: SimClock,

    /// Every aircraft admitted so far, active or retired.
    pub fleet: Fleet,

    /// Aircraft currently flying or reversing, closest first.
    pub queue: SequencingQueue,

    /// Contact minutes for the whole day.
    pub schedule: ArrivalSchedule,

    /// The runway closure, if storms are enabled.
    pub storm: Option<StormWindow>,

    pub(crate) wind:     Option<WindShear>,
    pub(crate) wind_rng: SimRng,
    pub(crate) counters: Counters,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current minute to the end of the horizon, then divert
    /// whatever is still airborne.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        info!(
            seed = self.config.seed,
            arrivals = self.schedule.len(),
            storm = ?self.storm.map(|w| w.to_string()),
            "run started"
        );
        let end = self.config.end_minute();
        while self.clock.current < end {
            self.step(observer)?;
        }
        self.finish(observer)
    }

    /// Run exactly `n` ticks from the current minute (ignores the horizon).
    ///
    /// Useful for tests and incremental stepping.  Does not call
    /// [`finish`](Self::finish).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Close the airport at the current minute: divert every aircraft still
    /// in the sequence, retire it, and report the run summary.
    pub fn finish<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        let now = self.clock.current;
        let stranded: Vec<AircraftId> = self.queue.ids().to_vec();
        for &id in &stranded {
            let aircraft = self.fleet.require_mut(id)?;
            aircraft.divert();
            aircraft.record(now);
            self.counters.diverted += 1;
            debug!(aircraft = %id, minute = now.0, "diverted at closing");
        }
        self.queue.retain(|_| false);
        self.retire(&stranded, observer)?;

        let summary = self.summary();
        info!(
            landed = summary.landed_count,
            diverted = summary.diverted_count,
            congestion = summary.congestion_events,
            "run finished"
        );
        observer.on_sim_end(&summary);
        Ok(summary)
    }

    /// Aggregate counters and mean delay as of now.
    pub fn summary(&self) -> RunSummary {
        let c = &self.counters;
        RunSummary {
            seed:                self.config.seed,
            arrivals:            self.fleet.len(),
            landed_count:        c.landed,
            diverted_count:      c.diverted,
            congestion_events:   c.congestion_events,
            go_arounds:          c.go_arounds,
            wind_interruptions:  c.wind_interruptions,
            storm_interruptions: c.storm_interruptions,
            readmissions:        c.readmissions,
            storm_window:        self.storm,
            mean_delay_minutes:  mean_delay(self.fleet.iter(), &self.config.speed_bands),
        }
    }

    /// `true` while `minute` lies inside the storm window.
    pub fn runway_closed(&self, minute: Minute) -> bool {
        self.storm.is_some_and(|w| w.contains(minute))
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current;
        observer.on_tick_start(now);
        self.process_tick(now, observer)?;
        observer.on_tick_end(now, &self.tick_summary(now));
        self.clock.advance();
        Ok(())
    }

    fn process_tick<O: SimObserver>(&mut self, now: Minute, observer: &mut O) -> SimResult<()> {
        let dt = self.clock.dt();
        let span = self.clock.tick_span();
        // Snapshots carry the last minute the tick covers, so a contact
        // inside the tick always precedes its first recorded step.
        let stamp = Minute(span.end - 1);
        let closing = self.config.end_minute();
        let rules = &self.config.separation;
        let bands = &self.config.speed_bands;

        // ── Phase 1: admit arrivals ───────────────────────────────────────
        for (id, contact) in self.schedule.drain_until(Minute(span.end)) {
            let spawned = self.fleet.spawn(contact, self.config.entry_range_nm, bands);
            debug_assert_eq!(spawned, id);
            self.queue.insert(spawned);
            debug!(aircraft = %spawned, minute = contact.0, "radar contact");
        }

        // ── Phase 2: closing-time feasibility ─────────────────────────────
        let diverted = divert_unreachable(self.queue.ids(), &mut self.fleet, now, closing, bands)?;
        for &id in &diverted {
            self.queue.remove(id);
            self.counters.diverted += 1;
            debug!(aircraft = %id, minute = now.0, "diverted: cannot land before closing");
        }

        // ── Phase 3: order, gaps, re-admission ────────────────────────────
        self.queue.update_gaps(&mut self.fleet)?;
        if self.config.readmission_enabled && !self.runway_closed(now) {
            let ids = self.queue.ids().to_vec();
            for id in ids {
                let aircraft = self.fleet.require_mut(id)?;
                if aircraft.state() != FlightState::Reversing {
                    continue;
                }
                let clear = aircraft
                    .gap_ahead()
                    .is_none_or(|gap| gap >= rules.reinsertion_gap_minutes);
                if clear {
                    let speed = aircraft.band(bands).max_kt;
                    aircraft.resume(speed);
                    self.counters.readmissions += 1;
                    debug!(aircraft = %id, minute = now.0, speed_kt = speed, "re-admitted");
                    // The follower must be judged against the new speed.
                    self.queue.update_gaps(&mut self.fleet)?;
                }
            }
        }

        // ── Phase 4: speed control ────────────────────────────────────────
        let report = self.queue.apply_speed_control(&mut self.fleet, rules, bands)?;
        self.counters.congestion_events += report.congestion_events;
        self.counters.go_arounds += report.go_arounds.len() as u32;
        for id in &report.go_arounds {
            debug!(aircraft = %id, minute = now.0, "go-around: separation lost");
        }

        // ── Phase 5: storm closure, then wind ─────────────────────────────
        if let Some(storm) = self.storm.filter(|w| w.contains(now)) {
            let turned = storm.close_runway(self.queue.ids(), &mut self.fleet, dt, rules.reverse_speed_kt)?;
            self.counters.storm_interruptions += turned.len() as u32;
            for id in &turned {
                debug!(aircraft = %id, minute = now.0, "go-around: runway closed by storm");
            }
        }
        if let Some(wind) = self.wind {
            let hit = wind.apply(
                self.queue.ids(),
                &mut self.fleet,
                dt,
                rules.reverse_speed_kt,
                &mut self.wind_rng,
            )?;
            self.counters.wind_interruptions += hit.len() as u32;
            for id in &hit {
                debug!(aircraft = %id, minute = now.0, "go-around: wind shear on short final");
            }
        }

        // ── Phase 6: kinematics and history ───────────────────────────────
        let mut retiring = diverted;
        for &id in self.queue.ids() {
            match self.fleet.require_mut(id)?.advance(stamp, dt, rules.reverse_speed_kt) {
                StepOutcome::Landed => {
                    self.counters.landed += 1;
                    retiring.push(id);
                    debug!(aircraft = %id, minute = stamp.0, "landed");
                }
                StepOutcome::Diverted => {
                    self.counters.diverted += 1;
                    retiring.push(id);
                    debug!(aircraft = %id, minute = stamp.0, "diverted: passed entry range while reversing");
                }
                StepOutcome::Moving | StepOutcome::Frozen => {}
            }
        }
        // Pre-emptively diverted aircraft get one frozen snapshot for this tick.
        for &id in &retiring {
            let aircraft = self.fleet.require_mut(id)?;
            if aircraft.history().last().is_some_and(|s| s.minute < stamp) {
                aircraft.record(stamp);
            }
        }
        observer.on_snapshot(stamp, &self.fleet, self.queue.ids());

        // ── Retirement ────────────────────────────────────────────────────
        let fleet = &self.fleet;
        self.queue.retain(|&id| fleet.get(id).is_some_and(|a| !a.state().is_terminal()));
        retiring.sort_unstable();
        self.retire(&retiring, observer)?;

        trace!(minute = now.0, active = self.queue.len(), retired = retiring.len(), "tick");
        Ok(())
    }

    fn retire<O: SimObserver>(&self, ids: &[AircraftId], observer: &mut O) -> SimResult<()> {
        for &id in ids {
            observer.on_retired(self.fleet.require(id)?);
        }
        Ok(())
    }

    fn tick_summary(&self, minute: Minute) -> TickSummary {
        TickSummary {
            minute,
            active:            self.queue.len(),
            landed:            self.counters.landed,
            diverted:          self.counters.diverted,
            congestion_events: self.counters.congestion_events,
        }
    }
}
