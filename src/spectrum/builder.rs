//! Construction of the pair-mass spectra of every enabled channel

use std::collections::HashMap;

use log::{debug, info, warn};

use crate::constants::*;
use crate::channel::*;
use crate::lineshape::*;
use crate::particle::*;
use crate::settings::Settings;
use super::{MassSpectrum, SpectrumError};

/// Everything required to tabulate the spectrum of one channel
#[derive(Clone,Debug)]
pub struct ChannelSpec {
    pub channel: Channel,
    pub min: f64,
    pub max: f64,
    pub bins: usize,
    pub shape: Shape,
}

impl ChannelSpec {
    /// Chooses the line shape and mass range of `channel`, given
    /// the lepton flavour and binning of `settings`.
    pub fn new<T: ParticleTable>(channel: Channel, settings: &Settings, table: &T) -> Self {
        let lepton_mass = table.mass(settings.leptons.lepton());

        let (min, max, shape) = match channel {
            Channel::Dalitz(dalitz) => {
                let parent_mass = table.mass(dalitz.parent());
                let recoil_mass = table.mass(dalitz.recoil());
                let shape: Shape = KrollWada::new(parent_mass, lepton_mass, recoil_mass, dalitz.form_factor()).into();
                (2.0 * lepton_mass, parent_mass - recoil_mass, shape)
            },
            Channel::Resonance(resonance) => {
                let parent = resonance.parent();
                let mass = table.mass(parent);
                let width = table.width(parent);
                let width = if width < MIN_WIDTH {
                    debug!("Raising width of {} from {:.3e} to {:.1e} GeV", parent, width, MIN_WIDTH);
                    MIN_WIDTH
                } else {
                    width
                };

                let shape: Shape = match resonance {
                    ResonanceChannel::Rho => {
                        let pion_mass = table.mass(Species::Pion);
                        RhoShape::new(mass, width, lepton_mass, pion_mass).into()
                    },
                    ResonanceChannel::Omega | ResonanceChannel::Phi => {
                        GounarisSakurai::new(mass, width, lepton_mass).into()
                    },
                    ResonanceChannel::Eta | ResonanceChannel::JPsi | ResonanceChannel::Psi2S | ResonanceChannel::Upsilon => {
                        BreitWigner::new(mass, width).into()
                    },
                };

                let (min, max) = settings.mass_range;
                (min, max, shape)
            },
        };

        ChannelSpec { channel, min, max, bins: settings.bins, shape }
    }

    pub fn tabulate(&self) -> Result<MassSpectrum, SpectrumError> {
        MassSpectrum::tabulate(&self.shape, self.min, self.max, self.bins)
    }
}

/// The spectra of all channels enabled for one lepton flavour.
/// Channels whose spectrum could not be built are absent.
#[derive(Clone,Debug)]
pub struct SpectrumTable {
    leptons: Leptons,
    spectra: HashMap<Channel, MassSpectrum>,
}

impl SpectrumTable {
    pub fn build<T: ParticleTable>(settings: &Settings, table: &T) -> Self {
        info!("Building pair-mass spectra for {} decays, {} bins per channel", settings.leptons, settings.bins);

        let spectra: HashMap<Channel, MassSpectrum> = Channel::all(settings.leptons)
            .into_iter()
            .map(|channel| ChannelSpec::new(channel, settings, table))
            .filter_map(|spec| match spec.tabulate() {
                Ok(spectrum) => {
                    if spectrum.invalid_bins() > 0 {
                        warn!(
                            "{}: line shape undefined in {} of {} bins, which are set to zero",
                            spec.channel, spectrum.invalid_bins(), spectrum.bins(),
                        );
                    }
                    debug!("{}: [{:.4e}, {:.4e}] GeV, mean pair mass {:.4e} GeV", spec.channel, spectrum.min(), spectrum.max(), spectrum.mean());
                    Some((spec.channel, spectrum))
                },
                Err(SpectrumError::EmptyRange(min, max)) => {
                    info!("{}: kinematically closed ([{:.4e}, {:.4e}] GeV), not built", spec.channel, min, max);
                    None
                },
                Err(e) => {
                    warn!("{}: spectrum not built: {}", spec.channel, e);
                    None
                },
            })
            .collect();

        SpectrumTable { leptons: settings.leptons, spectra }
    }

    pub fn leptons(&self) -> Leptons {
        self.leptons
    }

    pub fn get(&self, channel: Channel) -> Option<&MassSpectrum> {
        self.spectra.get(&channel)
    }

    /// Channels with a spectrum, in no particular order
    pub fn channels(&self) -> impl Iterator<Item = Channel> + '_ {
        self.spectra.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.spectra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spectra.is_empty()
    }
}
