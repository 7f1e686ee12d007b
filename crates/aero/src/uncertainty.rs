//! Uncertainty bounds for derived quantities.
//!
//! Every physical output carries a `{min, nominal, max, confidence}` triple.
//! The relative uncertainty combines a regime-based base value with a penalty
//! for unreliable separation modeling:
//!
//! ```text
//! u = min(base(regime) + (1 − separation_confidence)·0.3, 0.6)
//! ```
//!
//! Bounds always satisfy `min ≤ nominal ≤ max`, including for negative
//! nominals and for efficiency, whose bounds come from interval division.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

pub const SEPARATION_PENALTY_WEIGHT: f64 = 0.3;
pub const MAX_UNCERTAINTY: f64 = 0.6;

/// Combined uncertainty below this is reported as high confidence
pub const HIGH_CONFIDENCE_LIMIT: f64 = 0.15;
/// Combined uncertainty below this is reported as medium confidence
pub const MEDIUM_CONFIDENCE_LIMIT: f64 = 0.35;

/// Drag coefficient floor used whenever cd is a divisor
pub const MIN_DRAG_COEFFICIENT: f64 = 0.001;

/// Ordered from most to least trustworthy, so `High < Medium < Low`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Relative uncertainty attributed to a regime of this confidence
    pub fn base_uncertainty(&self) -> f64 {
        match self {
            Confidence::High => 0.10,
            Confidence::Medium => 0.25,
            Confidence::Low => 0.40,
        }
    }

    /// Confidence tier for a combined relative uncertainty
    pub fn from_uncertainty(uncertainty: f64) -> Self {
        if uncertainty < HIGH_CONFIDENCE_LIMIT {
            Confidence::High
        } else if uncertainty < MEDIUM_CONFIDENCE_LIMIT {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }

    pub fn weaker(self, other: Confidence) -> Confidence {
        self.max(other)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
pub struct UncertaintyBounds {
    pub min: f64,
    pub nominal: f64,
    pub max: f64,
    pub confidence: Confidence,
}

impl UncertaintyBounds {
    /// Multiply every value by `factor`, keeping the bounds ordered
    pub fn scaled(&self, factor: f64) -> Self {
        let a = self.min * factor;
        let b = self.max * factor;
        Self {
            min: a.min(b),
            nominal: self.nominal * factor,
            max: a.max(b),
            confidence: self.confidence,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Width of the band, max − min
    pub fn spread(&self) -> f64 {
        self.max - self.min
    }
}

/// Relative uncertainty for a regime confidence and a separation confidence in 0..1
pub fn combined_uncertainty(regime_confidence: Confidence, separation_confidence: f64) -> f64 {
    let penalty = (1.0 - separation_confidence.clamp(0.0, 1.0)) * SEPARATION_PENALTY_WEIGHT;
    (regime_confidence.base_uncertainty() + penalty).min(MAX_UNCERTAINTY)
}

/// Build symmetric bounds around a nominal value.
///
/// # Arguments
///
/// * `nominal` - Nominal value (may be negative)
/// * `regime_confidence` - Confidence of the flow classification
/// * `separation_confidence` - Separation heuristic confidence, 0..1
///
/// # Examples
///
/// ```
/// use aero::{generate_bounds, Confidence};
///
/// let bounds = generate_bounds(1.0, Confidence::High, 0.9);
/// assert!(bounds.min < 1.0 && bounds.max > 1.0);
/// assert_eq!(bounds.confidence, Confidence::High);
/// ```
pub fn generate_bounds(
    nominal: f64,
    regime_confidence: Confidence,
    separation_confidence: f64,
) -> UncertaintyBounds {
    let uncertainty = combined_uncertainty(regime_confidence, separation_confidence);
    let a = nominal * (1.0 - uncertainty);
    let b = nominal * (1.0 + uncertainty);

    UncertaintyBounds {
        min: a.min(b),
        nominal,
        max: a.max(b),
        confidence: Confidence::from_uncertainty(uncertainty),
    }
}

/// Lift-to-drag ratio bounds from cl and cd bounds.
///
/// The ratio is not propagated from the nominals: the extremes of `cl/cd`
/// over the two intervals are taken instead. For non-negative lift that is
/// exactly `min = cl.min/cd.max` and `max = cl.max/cd.min`. Every cd is
/// floored at [`MIN_DRAG_COEFFICIENT`] before dividing.
pub fn efficiency_bounds(cl: &UncertaintyBounds, cd: &UncertaintyBounds) -> UncertaintyBounds {
    let cd_min = cd.min.max(MIN_DRAG_COEFFICIENT);
    let cd_max = cd.max.max(MIN_DRAG_COEFFICIENT);
    let nominal = cl.nominal / cd.nominal.max(MIN_DRAG_COEFFICIENT);

    let corners = [
        cl.min / cd_max,
        cl.max / cd_min,
        cl.min / cd_min,
        cl.max / cd_max,
    ];
    let min = corners.iter().copied().fold(f64::INFINITY, f64::min);
    let max = corners.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    UncertaintyBounds {
        min: min.min(nominal),
        nominal,
        max: max.max(nominal),
        confidence: cl.confidence.weaker(cd.confidence),
    }
}
