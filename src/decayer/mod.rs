//! Sampling of lepton-pair decays

use std::fmt;
use std::sync::OnceLock;

use log::warn;
use rand::prelude::*;

use crate::channel::Channel;
use crate::geometry::FourVector;
use crate::input::InputError;
use crate::particle::*;
use crate::settings::Settings;
use crate::spectrum::{ChannelSpec, MassSpectrum, SpectrumTable};

mod angular;
mod dalitz;
mod error;
mod resonance;

pub use error::*;
pub use resonance::collins_soper_axis;

/// The products of a single decay
#[derive(Clone,Debug,PartialEq)]
pub struct DecayEvent {
    pub channel: Channel,
    /// Invariant mass of the lepton pair, GeV
    pub pair_mass: f64,
    /// Lepton, antilepton and, for Dalitz decays, the recoil
    pub products: Vec<Product>,
}

impl DecayEvent {
    pub fn lepton(&self) -> &Product {
        &self.products[0]
    }

    pub fn antilepton(&self) -> &Product {
        &self.products[1]
    }

    /// The third body of a Dalitz decay
    pub fn recoil(&self) -> Option<&Product> {
        self.products.get(2)
    }

    /// Four-momentum of the lepton pair
    pub fn pair_momentum(&self) -> FourVector {
        self.lepton().momentum + self.antilepton().momentum
    }

    /// Sum of the four-momenta of all products
    pub fn total_momentum(&self) -> FourVector {
        self.products.iter().map(|p| p.momentum).sum()
    }
}

impl fmt::Display for DecayEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "# {}, m = {:.6e} GeV", self.channel, self.pair_mass)?;
        for p in self.products.iter() {
            writeln!(f, "{}", p)?;
        }
        Ok(())
    }
}

/// Decays light mesons and quarkonia into lepton pairs.
///
/// The pair-mass spectra of all channels are built once, on the
/// first request (or a call to [`ensure_built`](Decayer::ensure_built)),
/// and shared by all later requests, including those made from
/// other threads.
pub struct Decayer<T: ParticleTable = PdgTable> {
    settings: Settings,
    table: T,
    spectra: OnceLock<SpectrumTable>,
}

impl Decayer<PdgTable> {
    /// Creates a decayer that uses the built-in particle table.
    /// Fails if `settings` do not pass [`Settings::validate`].
    pub fn new(settings: Settings) -> Result<Self, InputError> {
        Self::with_table(settings, PdgTable::new())
    }
}

impl<T: ParticleTable> Decayer<T> {
    /// Creates a decayer that takes masses and widths from `table`.
    /// Fails if `settings` do not pass [`Settings::validate`].
    pub fn with_table(settings: Settings, table: T) -> Result<Self, InputError> {
        settings.validate()?;
        Ok(Decayer {
            settings,
            table,
            spectra: OnceLock::new(),
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    /// Builds the spectra, if that has not already happened,
    /// and returns them.
    pub fn ensure_built(&self) -> &SpectrumTable {
        self.spectra.get_or_init(|| SpectrumTable::build(&self.settings, &self.table))
    }

    pub fn is_built(&self) -> bool {
        self.spectra.get().is_some()
    }

    /// Discards the spectra, which are rebuilt on the next request
    pub fn reset(&mut self) {
        self.spectra = OnceLock::new();
    }

    /// The pair-mass spectrum of `channel`, if it could be built
    pub fn spectrum(&self, channel: Channel) -> Option<&MassSpectrum> {
        self.ensure_built().get(channel)
    }

    /// Every channel enabled for the configured lepton flavour,
    /// whether or not it is kinematically open
    pub fn channels(&self) -> Vec<Channel> {
        Channel::all(self.settings.leptons)
    }

    /// Identifies the channel requested by a combined code
    pub fn classify(&self, code: i32) -> Option<Channel> {
        Channel::classify(code, self.settings.leptons)
    }

    /// Decays a parent with lab-frame four-momentum `parent` (GeV),
    /// in the channel given by the combined code
    /// `1000 * partner + parent`, where partner is zero for
    /// two-body decays.
    pub fn try_decay<R: Rng>(&self, code: i32, parent: FourVector, rng: &mut R) -> Result<DecayEvent, DecayError> {
        let channel = self.classify(code)
            .ok_or(DecayError::UnknownChannel { code })?;

        let spectrum = match self.spectrum(channel) {
            Some(spectrum) => spectrum,
            None => {
                let spec = ChannelSpec::new(channel, &self.settings, &self.table);
                return if spec.max > spec.min {
                    Err(DecayError::UnbuiltSpectrum { channel })
                } else {
                    Err(DecayError::KinematicallyForbidden { channel, parent_mass: parent.mass() })
                };
            }
        };

        match channel {
            Channel::Dalitz(c) => dalitz::decay(c, parent, spectrum, &self.settings, &self.table, rng),
            Channel::Resonance(c) => resonance::decay(c, parent, spectrum, &self.settings, &self.table, rng),
        }
    }

    /// Like [`try_decay`](Decayer::try_decay), but logs the reason
    /// for failure and returns `None`.
    pub fn decay<R: Rng>(&self, code: i32, parent: FourVector, rng: &mut R) -> Option<DecayEvent> {
        match self.try_decay(code, parent, rng) {
            Ok(event) => Some(event),
            Err(e) => {
                warn!("Decay of {} (code {}) rejected: {}", parent, code, e);
                None
            }
        }
    }
}

/// Draws pair masses from `spectrum` until one is accepted,
/// giving up after `max_attempts`.
fn sample_pair_mass<F, R>(spectrum: &MassSpectrum, accept: F, max_attempts: usize, rng: &mut R) -> Option<f64>
where
    F: Fn(f64) -> bool,
    R: Rng,
{
    (0..max_attempts)
        .map(|_| spectrum.sample(rng))
        .find(|&m| accept(m))
}

#[cfg(test)]
mod tests {
    use rand_xoshiro::*;
    use rayon::prelude::*;
    use super::*;
    use crate::channel::*;
    use crate::constants::*;
    use crate::input::InputErrorKind;

    fn at_rest(species: Species) -> FourVector {
        let m = PdgTable::new().mass(species);
        FourVector::new(m, 0.0, 0.0, 0.0)
    }

    #[test]
    fn spectra_are_valid() {
        for &leptons in [Leptons::Electron, Leptons::Muon].iter() {
            let decayer = Decayer::new(Settings::default().with_leptons(leptons)).unwrap();
            for channel in decayer.channels() {
                match decayer.spectrum(channel) {
                    Some(spectrum) => {
                        println!("{} [{}]: total = {:.3e}", channel, leptons, spectrum.total());
                        assert!(spectrum.weights().iter().all(|w| w.is_finite() && *w >= 0.0));
                        assert!(spectrum.total() > 0.0);
                    },
                    None => {
                        // only pi0 -> mu+ mu- gamma is closed
                        assert_eq!(leptons, Leptons::Muon);
                        assert_eq!(channel, Channel::Dalitz(DalitzChannel::Pion));
                    }
                }
            }
        }
    }

    #[test]
    fn pair_mass_within_range() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        let decayer = Decayer::new(Settings::default()).unwrap();

        for channel in decayer.channels() {
            let spectrum = decayer.spectrum(channel).unwrap();
            let parent = at_rest(channel.parent());
            for _ in 0..200 {
                let event = decayer.try_decay(channel.code(), parent, &mut rng).unwrap();
                let m = event.pair_mass;
                assert_eq!(event.channel, channel);
                assert!(m >= spectrum.min() && m <= spectrum.max(), "{}: m = {} outside [{}, {}]", channel, m, spectrum.min(), spectrum.max());
            }
        }
    }

    #[test]
    fn eta_at_rest() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        let decayer = Decayer::new(Settings::default()).unwrap();
        let parent = at_rest(Species::Eta);

        for _ in 0..1000 {
            let event = decayer.decay(221, parent, &mut rng).unwrap();
            assert_eq!(event.products.len(), 2);
            assert_eq!(event.lepton().species, Species::Electron);
            assert_eq!(event.antilepton().species, Species::Positron);
            let total = event.total_momentum();
            assert!(total.momentum() < 1.0e-12);
            assert!((total[0] - event.pair_mass).abs() < 1.0e-12);
            let p1 = event.lepton().momentum.momentum();
            let p2 = event.antilepton().momentum.momentum();
            assert!((p1 - p2).abs() < 1.0e-12);
        }
    }

    #[test]
    fn moving_pion_dalitz() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(2);
        let decayer = Decayer::new(Settings::default()).unwrap();
        let m_pi = PdgTable::new().mass(Species::Pion);
        let parent = FourVector::new(0.0, 0.5, -0.2, 10.0).with_sqr(m_pi * m_pi);
        let scale = parent[0] * parent[0];

        for _ in 0..1000 {
            let event = decayer.decay(22111, parent, &mut rng).unwrap();
            let photon = event.recoil().unwrap();
            assert_eq!(photon.species, Species::Photon);
            assert!(photon.momentum.norm_sqr().abs() < 1.0e-9 * scale);

            let total = event.total_momentum();
            for i in 0..4 {
                assert!((total[i] - parent[i]).abs() < 1.0e-9 * parent[0]);
            }

            let m = event.pair_mass;
            assert!((event.pair_momentum().norm_sqr() - m * m).abs() < 1.0e-9 * scale);
        }
    }

    #[test]
    fn moving_dalitz_conserves_momentum() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(3);
        let decayer = Decayer::new(Settings::default().with_leptons(Leptons::Muon)).unwrap();
        let table = PdgTable::new();

        for &(parent, recoil) in [(Species::Omega, Species::Pion), (Species::EtaPrime, Species::Photon), (Species::Phi, Species::Photon)].iter() {
            let m = table.mass(parent);
            let p = FourVector::new(0.0, -1.0, 0.3, 2.5).with_sqr(m * m);
            let code = decay_code(parent, Some(recoil));
            for _ in 0..200 {
                let event = decayer.try_decay(code, p, &mut rng).unwrap();
                let total = event.total_momentum();
                for i in 0..4 {
                    assert!((total[i] - p[i]).abs() < 1.0e-9 * p[0]);
                }
                assert!((event.pair_momentum().mass() - event.pair_mass).abs() < 1.0e-7);
                assert!(event.pair_mass > 2.0 * MUON_MASS);
            }
        }
    }

    #[test]
    fn unpolarized_decays_are_isotropic() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(4);
        let decayer = Decayer::new(Settings::default()).unwrap();
        // at rest, the Collins-Soper axis is -z
        let parent = at_rest(Species::JPsi);
        let n = 20_000;

        let (sum, sum_sqr) = (0..n)
            .map(|_| {
                let event = decayer.decay(443, parent, &mut rng).unwrap();
                let p = event.lepton().momentum;
                -p[3] / p.momentum()
            })
            .fold((0.0, 0.0), |(s, s2), c| (s + c, s2 + c * c));

        let mean = sum / (n as f64);
        let mean_sqr = sum_sqr / (n as f64);
        println!("<cos theta> = {:.4}, <cos^2 theta> = {:.4}", mean, mean_sqr);
        assert!(mean.abs() < 0.02);
        assert!((mean_sqr - 1.0 / 3.0).abs() < 0.01);
    }

    #[test]
    fn polarized_decays() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(5);
        let decayer = Decayer::new(Settings::default().with_polarization(1.0)).unwrap();
        let parent = at_rest(Species::Upsilon);
        let n = 20_000;

        let sum_sqr: f64 = (0..n)
            .map(|_| {
                let event = decayer.decay(553, parent, &mut rng).unwrap();
                let p = event.antilepton().momentum;
                (p[3] / p.momentum()).powi(2)
            })
            .sum();

        // (1/3 + 1/5) / (1 + 1/3)
        let mean_sqr = sum_sqr / (n as f64);
        println!("<cos^2 theta> = {:.4} [expected 0.4]", mean_sqr);
        assert!((mean_sqr - 0.4).abs() < 0.01);
    }

    #[test]
    fn unsupported_requests() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(6);
        let decayer = Decayer::new(Settings::default()).unwrap();
        let parent = at_rest(Species::Proton);

        for &code in [2212, 111, 22113, 22333, 999_221].iter() {
            assert!(decayer.decay(code, parent, &mut rng).is_none());
            assert_eq!(decayer.try_decay(code, parent, &mut rng), Err(DecayError::UnknownChannel { code }));
        }
    }

    #[test]
    fn forbidden_requests() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);
        let decayer = Decayer::new(Settings::default().with_leptons(Leptons::Muon)).unwrap();

        // closed channel
        let result = decayer.try_decay(22111, at_rest(Species::Pion), &mut rng);
        println!("{:?}", result);
        assert!(matches!(
            result,
            Err(DecayError::KinematicallyForbidden { channel: Channel::Dalitz(DalitzChannel::Pion), .. })
        ));

        // parent too light
        let result = decayer.try_decay(443, FourVector::new(0.1, 0.0, 0.0, 0.0), &mut rng);
        assert!(matches!(result, Err(DecayError::KinematicallyForbidden { .. })));
        assert!(decayer.decay(443, FourVector::new(0.1, 0.0, 0.0, 0.0), &mut rng).is_none());
    }

    #[test]
    fn rejection_is_bounded() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(8);
        let decayer = Decayer::new(Settings::default().with_max_attempts(10)).unwrap();
        // a 'J/psi' of 25 GeV only accepts pair masses above 12.5 GeV,
        // beyond the end of the spectrum
        let parent = FourVector::new(25.0, 0.0, 0.0, 0.0);
        let result = decayer.try_decay(443, parent, &mut rng);
        assert!(matches!(result, Err(DecayError::KinematicallyForbidden { .. })));
    }

    #[test]
    fn invalid_settings_are_refused() {
        // 1 + a cos^2 theta would be negative near the poles
        let err = Decayer::new(Settings::default().with_polarization(-2.0)).err().unwrap();
        println!("{}", err);
        assert_eq!(err.kind(), InputErrorKind::Invalid);
        assert_eq!(err.path(), "decayer:polarization");

        let err = Decayer::new(Settings::default().with_mass_range(5.0, 1.0)).err().unwrap();
        println!("{}", err);
        assert_eq!(err.kind(), InputErrorKind::Invalid);
        assert_eq!(err.path(), "decayer:mass_range");

        let table = PdgTable::new();
        assert!(Decayer::with_table(Settings::default().with_bins(0), table).is_err());
        assert!(Decayer::new(Settings::default().with_polarization(-1.0)).is_ok());
    }

    #[test]
    fn build_is_lazy_and_resettable() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(9);
        let mut decayer = Decayer::new(Settings::default()).unwrap();
        assert!(!decayer.is_built());

        let event = decayer.decay(223, at_rest(Species::Omega), &mut rng);
        assert!(event.is_some());
        assert!(decayer.is_built());

        decayer.reset();
        assert!(!decayer.is_built());
        assert_eq!(decayer.ensure_built().len(), decayer.channels().len());
        assert!(decayer.is_built());
    }

    #[test]
    fn custom_particle_table() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(10);
        // a heavier, broader J/psi
        let table = PdgTable::new().with_properties(Species::JPsi, 3.2, 0.05);
        let decayer = Decayer::with_table(Settings::default(), table).unwrap();
        let parent = FourVector::new(3.2, 0.0, 0.0, 0.0);

        let mean = (0..1000)
            .map(|_| decayer.decay(443, parent, &mut rng).unwrap().pair_mass)
            .sum::<f64>() / 1000.0;
        println!("mean pair mass = {:.4}", mean);
        assert!((mean - 3.2).abs() < 0.05);
    }

    #[test]
    fn concurrent_first_use() {
        let decayer = Decayer::new(Settings::default()).unwrap();
        let parent = FourVector::new(0.0, 0.0, 1.0, 3.0).with_sqr(0.78266f64.powi(2));

        let results: Vec<(bool, usize)> = (0..64u64)
            .into_par_iter()
            .map(|i| {
                let mut rng = Xoshiro256StarStar::seed_from_u64(i);
                let ok = (0..100).all(|_| decayer.decay(223, parent, &mut rng).is_some());
                let table = decayer.ensure_built() as *const SpectrumTable as usize;
                (ok, table)
            })
            .collect();

        assert!(results.iter().all(|(ok, _)| *ok));
        let first = results[0].1;
        assert!(results.iter().all(|(_, table)| *table == first));
    }
}
