//! Run-time parameters of the decayer

use crate::constants::*;
use crate::channel::Leptons;
use crate::input::{Config, InputError};

/// Parameters that fix the spectra and the sampling of decays
#[derive(Copy,Clone,Debug,PartialEq)]
pub struct Settings {
    /// Flavour of the lepton pair
    pub leptons: Leptons,
    /// Number of bins in each pair-mass spectrum
    pub bins: usize,
    /// Pair-mass range of the resonance spectra, GeV
    pub mass_range: (f64, f64),
    /// Coefficient `a` in the angular distribution `1 + a cos^2 theta`
    /// of resonance decays, in the Collins-Soper frame
    pub polarization: f64,
    /// Momentum of each of the two (proton) beams that define the
    /// Collins-Soper frame, GeV
    pub beam_energy: f64,
    /// Attempts allowed to each rejection loop
    pub max_attempts: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            leptons: Leptons::Electron,
            bins: DEFAULT_BINS,
            mass_range: (2.0 * CHARGED_PION_MASS, DEFAULT_MAX_RESONANCE_MASS),
            polarization: 0.0,
            beam_energy: DEFAULT_BEAM_ENERGY,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Settings {
    pub fn with_leptons(self, leptons: Leptons) -> Self {
        Settings { leptons, ..self }
    }

    pub fn with_bins(self, bins: usize) -> Self {
        Settings { bins, ..self }
    }

    pub fn with_mass_range(self, min: f64, max: f64) -> Self {
        Settings { mass_range: (min, max), ..self }
    }

    pub fn with_polarization(self, polarization: f64) -> Self {
        Settings { polarization, ..self }
    }

    pub fn with_beam_energy(self, beam_energy: f64) -> Self {
        Settings { beam_energy, ..self }
    }

    pub fn with_max_attempts(self, max_attempts: usize) -> Self {
        Settings { max_attempts, ..self }
    }

    /// Reads the `decayer` section of a configuration file.
    /// Missing keys take their default values; keys that are
    /// present but malformed are errors.
    pub fn from_config(config: &Config) -> Result<Self, InputError> {
        let default = Settings::default();

        let settings = Settings {
            leptons: config.read_opt::<Leptons, _>("decayer:leptons")?.unwrap_or(default.leptons),
            bins: config.read_opt::<usize, _>("decayer:bins")?.unwrap_or(default.bins),
            mass_range: config.read_opt::<[f64; 2], _>("decayer:mass_range")?
                .map(|[min, max]| (min, max))
                .unwrap_or(default.mass_range),
            polarization: config.read_opt::<f64, _>("decayer:polarization")?.unwrap_or(default.polarization),
            beam_energy: config.read_opt::<f64, _>("decayer:beam_energy")?.unwrap_or(default.beam_energy),
            max_attempts: config.read_opt::<usize, _>("decayer:max_attempts")?.unwrap_or(default.max_attempts),
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Checks that the parameters can define a decayer
    pub fn validate(&self) -> Result<(), InputError> {
        let (min, max) = self.mass_range;

        if self.bins == 0 {
            Err(InputError::invalid("decayer:bins", "at least one bin is required"))
        } else if !(min >= 0.0 && max > min) || !max.is_finite() {
            Err(InputError::invalid("decayer:mass_range", "range must satisfy 0 <= min < max"))
        } else if !self.polarization.is_finite() || self.polarization < -1.0 {
            Err(InputError::invalid("decayer:polarization", "1 + a cos^2 theta must be non-negative"))
        } else if !(self.beam_energy > 0.0) || !self.beam_energy.is_finite() {
            Err(InputError::invalid("decayer:beam_energy", "beam energy must be positive"))
        } else if self.max_attempts == 0 {
            Err(InputError::invalid("decayer:max_attempts", "at least one attempt is required"))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputErrorKind;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.leptons, Leptons::Electron);
        assert_eq!(settings.bins, 2000);
        assert_eq!(settings.mass_range, (2.0 * CHARGED_PION_MASS, 10.0));
        assert_eq!(settings.polarization, 0.0);
        assert_eq!(settings.beam_energy, 3500.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn read_from_config() {
        let text = "---
        constants:
          ebeam: 3.5 * TeV
        decayer:
          leptons: muon
          mass_range: [2.0 * m_mu, 5.0 * GeV]
          polarization: 1.0
          beam_energy: ebeam
        ";

        let mut config = Config::from_string(text).unwrap();
        config.with_context("constants").unwrap();
        let settings = Settings::from_config(&config).unwrap();
        println!("{:?}", settings);

        assert_eq!(settings.leptons, Leptons::Muon);
        assert_eq!(settings.mass_range, (2.0 * MUON_MASS, 5.0));
        assert_eq!(settings.polarization, 1.0);
        assert_eq!(settings.beam_energy, 3500.0);
        // not given
        assert_eq!(settings.bins, DEFAULT_BINS);
        assert_eq!(settings.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn missing_section_gives_defaults() {
        let config = Config::from_string("---\nrun:\n  events: 10\n").unwrap();
        let settings = Settings::from_config(&config).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn malformed_values_are_errors() {
        let config = Config::from_string("---\ndecayer:\n  bins: many\n").unwrap();
        let err = Settings::from_config(&config).unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::Conversion);

        let config = Config::from_string("---\ndecayer:\n  leptons: tau\n").unwrap();
        let err = Settings::from_config(&config).unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::Invalid);

        let config = Config::from_string("---\ndecayer:\n  mass_range: [1.0, 0.5]\n").unwrap();
        let err = Settings::from_config(&config).unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::Invalid);
        println!("{}", err);

        let config = Config::from_string("---\ndecayer:\n  mass_range: [1.0, 2.0, 3.0]\n").unwrap();
        let err = Settings::from_config(&config).unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::Invalid);
        assert_eq!(err.path(), "decayer:mass_range");
    }
}
