//! Line shapes: relative probabilities of the lepton-pair invariant
//! mass for each kind of decay

use enum_dispatch::enum_dispatch;

mod kroll_wada;
mod gounaris_sakurai;
mod rho;
mod breit_wigner;

pub use kroll_wada::*;
pub use gounaris_sakurai::*;
pub use rho::*;
pub use breit_wigner::*;

/// A line shape maps a lepton-pair mass `m` (GeV) to a
/// relative, unnormalized, probability weight.
#[enum_dispatch]
pub trait LineShape {
    /// Returns the weight at pair mass `mass`, or `None` if a
    /// kinematic factor of the shape is imaginary or negative there,
    /// which indicates that `mass` lies outside the range in which
    /// the shape is defined.
    fn weight(&self, mass: f64) -> Option<f64>;
}

/// The line shapes available to the spectrum builder
#[enum_dispatch(LineShape)]
#[derive(Clone, Debug)]
pub enum Shape {
    KrollWada,
    GounarisSakurai,
    RhoShape,
    BreitWigner,
}
