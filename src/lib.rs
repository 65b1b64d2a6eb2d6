//! Monte Carlo sampling of the lepton-pair decays of light mesons
//! and quarkonia: Dalitz decays, P -> l+ l- X, with Kroll-Wada
//! pair-mass spectra, and two-body decays of resonances, V -> l+ l-,
//! with Gounaris-Sakurai, empirical rho and Breit-Wigner line shapes.
//!
//! ```no_run
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256StarStar;
//! use dilepton::{Decayer, Settings, FourVector};
//!
//! let decayer = Decayer::new(Settings::default()).unwrap();
//! let mut rng = Xoshiro256StarStar::seed_from_u64(0);
//! // eta -> e+ e- gamma, for an eta at rest
//! let parent = FourVector::new(0.547862, 0.0, 0.0, 0.0);
//! let event = decayer.decay(22221, parent, &mut rng).unwrap();
//! println!("{}", event);
//! ```

pub mod constants;
pub mod geometry;
pub mod particle;
pub mod lineshape;
pub mod spectrum;
pub mod channel;
pub mod settings;
pub mod input;
pub mod decayer;

pub use geometry::{FourVector, ThreeVector};
pub use particle::{Species, Product, ParticleTable, ParticleProperties, PdgTable};
pub use channel::{Channel, DalitzChannel, ResonanceChannel, Leptons, split_code, decay_code};
pub use spectrum::{MassSpectrum, SpectrumTable};
pub use settings::Settings;
pub use decayer::{Decayer, DecayEvent, DecayError};
