//! Empirical rho line shape: p-wave width, Breit-Wigner form factor,
//! two-body phase space and a thermal (Boltzmann) suppression

use super::LineShape;
use crate::constants::*;

// Grid used to locate the peak of the shape
const PEAK_SEARCH_POINTS: usize = 4000;

/// Line shape of the rho with mass `mass` and width `width`, decaying
/// into leptons of mass `lepton_mass`, given a pion mass `pion_mass`
/// that sets the two-pion threshold.
///
/// The shape is divided by its own maximum (with 1% headroom), so
/// that weights are of order one and peak just below it.
#[derive(Copy, Clone, Debug)]
pub struct RhoShape {
    pub mass: f64,
    pub width: f64,
    pub lepton_mass: f64,
    pub pion_mass: f64,
    norm: f64,
}

impl RhoShape {
    pub fn new(mass: f64, width: f64, lepton_mass: f64, pion_mass: f64) -> Self {
        let mut shape = RhoShape { mass, width, lepton_mass, pion_mass, norm: 1.0 };
        shape.norm = shape.peak().map(|(_, w)| w * 1.01).unwrap_or(RHO_NORMALIZATION);
        shape
    }

    fn threshold(&self) -> f64 {
        2.0 * self.pion_mass
    }

    /// Locates the maximum of the shape on a fine grid between
    /// the two-pion threshold and twice the pole mass, returning
    /// the mass at which it occurs and the weight there.
    pub fn peak(&self) -> Option<(f64, f64)> {
        let lower = self.threshold();
        let upper = 2.0 * self.mass;
        if upper <= lower {
            return None;
        }

        let step = (upper - lower) / (PEAK_SEARCH_POINTS as f64);
        (1..PEAK_SEARCH_POINTS)
            .map(|i| lower + (i as f64) * step)
            .filter_map(|m| self.weight(m).map(|w| (m, w)))
            .filter(|(_, w)| w.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, (m, w)| match acc {
                Some((_, best)) if best >= w => acc,
                _ => Some((m, w)),
            })
    }
}

impl LineShape for RhoShape {
    fn weight(&self, m: f64) -> Option<f64> {
        let threshold = self.threshold();
        if m < threshold {
            return Some(0.0);
        }

        let lepton_phase_space = m * m - 4.0 * self.lepton_mass * self.lepton_mass;
        if lepton_phase_space < 0.0 {
            return None;
        }

        // pion momenta in the rho rest frame, off- and on-shell
        let k = (0.25 * m * m - self.pion_mass * self.pion_mass).sqrt();
        let k0 = (0.25 * self.mass * self.mass - self.pion_mass * self.pion_mass).sqrt();
        let gamma = (k / k0).powi(3) * (self.mass / m).powi(2) * self.width;

        let form_factor = 1.0 / ((m * m - self.mass * self.mass).powi(2) + m * m * gamma * gamma);

        let w = m.powf(1.5)
            * (1.0 - threshold * threshold / (m * m)).powf(1.5)
            * ((m * m + 2.0 * self.lepton_mass * self.lepton_mass) / (m * m))
            * (lepton_phase_space.sqrt() / m)
            * form_factor
            * (-m / RHO_TEMPERATURE).exp()
            / self.norm;

        Some(w)
    }
}
