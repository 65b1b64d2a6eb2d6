//! Gounaris-Sakurai resonance shape, with a width that grows
//! with the two-pion phase space

use super::LineShape;
use crate::constants::*;

/// Line shape of a vector meson with mass `mass` and on-shell
/// width `width` decaying into leptons of mass `lepton_mass`.
#[derive(Copy, Clone, Debug)]
pub struct GounarisSakurai {
    pub mass: f64,
    pub width: f64,
    pub lepton_mass: f64,
}

impl GounarisSakurai {
    pub fn new(mass: f64, width: f64, lepton_mass: f64) -> Self {
        GounarisSakurai { mass, width, lepton_mass }
    }

    /// The mass-dependent width, or `None` between the one- and
    /// two-pion thresholds, where it is imaginary.
    fn running_width(&self, m: f64) -> Option<f64> {
        if m <= CHARGED_PION_MASS {
            return Some(0.0);
        }

        let mpi2 = CHARGED_PION_MASS * CHARGED_PION_MASS;
        let ratio = (m * m / 4.0 - mpi2) / (self.mass * self.mass / 4.0 - mpi2);
        if ratio < 0.0 {
            None
        } else {
            Some(self.width * (self.mass / m) * ratio.powf(1.5))
        }
    }
}

impl LineShape for GounarisSakurai {
    fn weight(&self, m: f64) -> Option<f64> {
        let epsilon = (self.lepton_mass / m).powi(2);
        if 1.0 - 4.0 * epsilon < 0.0 {
            return Some(0.0);
        }

        let gamma = self.running_width(m)?;
        let w = (1.0 - 4.0 * epsilon).sqrt() * (1.0 + 2.0 * epsilon)
            / ((self.mass * self.mass - m * m).powi(2) + (self.mass * gamma).powi(2));

        Some(w)
    }
}
