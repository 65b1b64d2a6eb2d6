//! Physical constants and model parameters. Masses, widths and
//! energies are in GeV.

/// Charged pion mass, used for the Gounaris-Sakurai width and the
/// default lower edge of the resonance mass range
pub const CHARGED_PION_MASS: f64 = 0.13956995;
/// Neutral pion mass
pub const NEUTRAL_PION_MASS: f64 = 0.1349768;
/// Electron mass
pub const ELECTRON_MASS: f64 = 0.51099895e-3;
/// Muon mass
pub const MUON_MASS: f64 = 0.1056583755;
/// Proton mass
pub const PROTON_MASS: f64 = 0.93827208816;

/// Natural widths are raised to at least this value before a
/// spectrum is built
pub const MIN_WIDTH: f64 = 1.0e-6;

/// Number of bins in each pair-mass spectrum
pub const DEFAULT_BINS: usize = 2000;
/// Upper edge of the resonance pair-mass range
pub const DEFAULT_MAX_RESONANCE_MASS: f64 = 10.0;
/// Momentum of each of the two counter-propagating proton beams that
/// define the Collins-Soper axis
pub const DEFAULT_BEAM_ENERGY: f64 = 3500.0;
/// Attempts allowed to any rejection loop before the request
/// is abandoned
pub const DEFAULT_MAX_ATTEMPTS: usize = 100_000;

/// Recoils lighter than this are treated as real photons, for
/// which the lepton angular distribution is 1 + lambda cos^2 theta
pub const REAL_PHOTON_THRESHOLD: f64 = 0.01;

/// Temperature of the exponential suppression in the rho line shape
pub const RHO_TEMPERATURE: f64 = 0.161;
/// Value of the unnormalized rho line shape at its peak, m = 0.72297,
/// with 1% headroom
pub const RHO_NORMALIZATION: f64 = 0.0744416 * 1.01;

/// Monopole slope of the pi0 transition form factor, GeV^-2
pub const PION_FORM_FACTOR_SLOPE: f64 = 5.5;
/// Monopole slope of the eta transition form factor, GeV^-2
pub const ETA_FORM_FACTOR_SLOPE: f64 = 1.934;
/// Pole mass and width of the omega -> pi0 transition form factor fit
pub const OMEGA_FORM_FACTOR_POLE: (f64, f64) = (0.67070, 0.0534321);
/// Pole mass and width of the eta' transition form factor fit
pub const ETA_PRIME_FORM_FACTOR_POLE: (f64, f64) = (0.764, 0.1020);
