//! Particle masses and widths

use std::collections::HashMap;

use super::Species;
use crate::constants::*;

/// Rest mass and natural width of a species, in GeV
#[derive(Copy,Clone,Debug,PartialEq)]
pub struct ParticleProperties {
    pub mass: f64,
    pub width: f64,
}

/// Source of particle masses and widths.
///
/// The decayer reads these once, when its spectra are built, and
/// again for the lepton and recoil masses of every decay.
pub trait ParticleTable {
    /// Returns the mass and width of `species`
    fn properties(&self, species: Species) -> ParticleProperties;

    fn mass(&self, species: Species) -> f64 {
        self.properties(species).mass
    }

    fn width(&self, species: Species) -> f64 {
        self.properties(species).width
    }
}

/// Masses and widths from the Review of Particle Physics.
/// Individual entries can be replaced with
/// [`with_properties`](PdgTable::with_properties).
#[derive(Clone,Debug)]
pub struct PdgTable {
    entries: HashMap<Species, ParticleProperties>,
}

impl PdgTable {
    pub fn new() -> Self {
        let entries = [
            (Species::Electron, ELECTRON_MASS, 0.0),
            (Species::Muon, MUON_MASS, 2.9959837e-19),
            (Species::Photon, 0.0, 0.0),
            (Species::Proton, PROTON_MASS, 0.0),
            (Species::Pion, NEUTRAL_PION_MASS, 7.81e-9),
            (Species::Eta, 0.547862, 1.31e-6),
            (Species::Rho, 0.77526, 0.1474),
            (Species::Omega, 0.78266, 8.68e-3),
            (Species::EtaPrime, 0.95778, 1.88e-4),
            (Species::Phi, 1.019461, 4.249e-3),
            (Species::JPsi, 3.096900, 9.26e-5),
            (Species::Psi2S, 3.686097, 2.94e-4),
            (Species::Upsilon, 9.46030, 5.402e-5),
        ];

        let entries = entries.iter()
            .map(|&(s, mass, width)| (s, ParticleProperties { mass, width }))
            .collect();

        PdgTable { entries }
    }

    /// Replaces the mass and width of `species` (and its antiparticle).
    pub fn with_properties(mut self, species: Species, mass: f64, width: f64) -> Self {
        let species = Self::canonical(species);
        self.entries.insert(species, ParticleProperties { mass, width });
        self
    }

    // Antileptons are stored under their particle
    fn canonical(species: Species) -> Species {
        match species {
            Species::Positron | Species::AntiMuon => species.antiparticle(),
            other => other,
        }
    }
}

impl Default for PdgTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticleTable for PdgTable {
    fn properties(&self, species: Species) -> ParticleProperties {
        // every species has an entry, see PdgTable::new
        self.entries[&Self::canonical(species)]
    }
}
