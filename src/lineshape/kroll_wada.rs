//! Kroll-Wada spectrum of Dalitz decays, P -> l+ l- X

use super::LineShape;
use crate::constants::*;

/// Transition form factor of a Dalitz decay, given as its
/// squared magnitude |F(m)|^2.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FormFactor {
    /// `F = 1 / (1 - slope m^2)`
    Monopole {
        slope: f64,
    },
    /// Vector-meson pole, `|F|^2 = L^4 / ((L^2 - m^2)^2 + G^2 L^2)`
    Pole {
        mass: f64,
        width: f64,
    },
    /// Point-like transition
    Unity,
}

impl FormFactor {
    /// Monopole fit to the pi0 transition form factor
    pub fn pion() -> Self {
        FormFactor::Monopole { slope: PION_FORM_FACTOR_SLOPE }
    }

    /// Monopole fit to the eta transition form factor
    pub fn eta() -> Self {
        FormFactor::Monopole { slope: ETA_FORM_FACTOR_SLOPE }
    }

    /// Pole fit to the omega -> pi0 transition form factor
    pub fn omega() -> Self {
        let (mass, width) = OMEGA_FORM_FACTOR_POLE;
        FormFactor::Pole { mass, width }
    }

    /// Pole fit to the eta' transition form factor
    pub fn eta_prime() -> Self {
        let (mass, width) = ETA_PRIME_FORM_FACTOR_POLE;
        FormFactor::Pole { mass, width }
    }

    /// Returns |F(m)|^2
    pub fn squared(&self, m: f64) -> f64 {
        match self {
            FormFactor::Monopole { slope } => (1.0 / (1.0 - slope * m * m)).powi(2),
            FormFactor::Pole { mass, width } => {
                let l2 = mass * mass;
                l2 * l2 / ((l2 - m * m).powi(2) + width * width * l2)
            },
            FormFactor::Unity => 1.0,
        }
    }
}

/// Lepton-pair mass spectrum of the decay of a meson with mass
/// `parent_mass` into a lepton pair and a particle of mass
/// `recoil_mass`.
#[derive(Copy, Clone, Debug)]
pub struct KrollWada {
    pub parent_mass: f64,
    pub lepton_mass: f64,
    pub recoil_mass: f64,
    pub form_factor: FormFactor,
}

impl KrollWada {
    pub fn new(parent_mass: f64, lepton_mass: f64, recoil_mass: f64, form_factor: FormFactor) -> Self {
        KrollWada { parent_mass, lepton_mass, recoil_mass, form_factor }
    }
}

impl LineShape for KrollWada {
    fn weight(&self, m: f64) -> Option<f64> {
        let q = (m / self.parent_mass).powi(2);
        let epsilon = (self.lepton_mass / self.parent_mass).powi(2);
        let delta = (self.recoil_mass / self.parent_mass).powi(2);

        // below the lepton-pair threshold
        if q <= 4.0 * epsilon {
            return None;
        }

        // vanishes at the kinematic endpoint m = M - m_X
        let h = (1.0 + q / (1.0 - delta)).powi(2) - 4.0 * q / (1.0 - delta).powi(2);
        if h <= 0.0 {
            return None;
        }

        let w = (2.0 / m)
            * h.powf(1.5)
            * (1.0 - 4.0 * epsilon / q).sqrt()
            * (1.0 + 2.0 * epsilon / q)
            * self.form_factor.squared(m);

        Some(w)
    }
}
