//! Allowed-speed bands as a step function of range to threshold.
//!
//! The terminal area is cut into concentric rings around the threshold.  Each
//! ring allows a `(min, max)` speed; the defaults are:
//!
//! | Range (nm)    | Min (kt) | Max (kt) |
//! |---------------|----------|----------|
//! | > 100         | 300      | 500      |
//! | (50, 100]     | 250      | 300      |
//! | (15, 50]      | 200      | 250      |
//! | (5, 15]       | 150      | 200      |
//! | [0, 5]        | 120      | 150      |
//!
//! Ring boundaries are exclusive on the outside: an aircraft at exactly
//! 50 nm flies in the 200–250 kt ring.

/// The `(min, max)` allowed speed in knots for one ring.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedBand {
    pub min_kt: f64,
    pub max_kt: f64,
}

impl SpeedBand {
    #[inline]
    pub const fn new(min_kt: f64, max_kt: f64) -> Self {
        Self { min_kt, max_kt }
    }
}

/// One ring: applies to positions strictly greater than `beyond_nm`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedRing {
    pub beyond_nm: f64,
    pub band:      SpeedBand,
}

/// Ordered ring table, outermost first, plus the band for the innermost area.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedBands {
    /// Rings sorted by descending `beyond_nm`.
    pub rings: Vec<SpeedRing>,
    /// Band for positions inside every ring (down to the threshold).
    pub inner: SpeedBand,
}

impl SpeedBands {
    /// Band in effect at `position_nm`.
    pub fn band_at(&self, position_nm: f64) -> SpeedBand {
        self.rings
            .iter()
            .find(|ring| position_nm > ring.beyond_nm)
            .map_or(self.inner, |ring| ring.band)
    }

    /// Maximum allowed speed at `position_nm`.
    #[inline]
    pub fn max_at(&self, position_nm: f64) -> f64 {
        self.band_at(position_nm).max_kt
    }

    /// `true` if rings are strictly descending and every band has
    /// `0 < min <= max`.
    pub fn is_well_formed(&self) -> bool {
        let bands_ok = self
            .rings
            .iter()
            .map(|r| r.band)
            .chain(std::iter::once(self.inner))
            .all(|b| b.min_kt > 0.0 && b.min_kt <= b.max_kt);
        let order_ok = self.rings.windows(2).all(|w| w[0].beyond_nm > w[1].beyond_nm);
        bands_ok && order_ok
    }
}

impl Default for SpeedBands {
    fn default() -> Self {
        let ring = |beyond_nm, min_kt, max_kt| SpeedRing {
            beyond_nm,
            band: SpeedBand::new(min_kt, max_kt),
        };
        Self {
            rings: vec![
                ring(100.0, 300.0, 500.0),
                ring(50.0, 250.0, 300.0),
                ring(15.0, 200.0, 250.0),
                ring(5.0, 150.0, 200.0),
            ],
            inner: SpeedBand::new(120.0, 150.0),
        }
    }
}
