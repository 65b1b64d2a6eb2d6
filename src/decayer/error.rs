//! Reasons a decay request produces no products

use std::fmt;
use std::error::Error;

use crate::channel::Channel;

/// Why did Decayer::try_decay fail?
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum DecayError {
    /// The code names no decay known for the lepton flavour
    UnknownChannel {
        code: i32,
    },
    /// The parent is too light, the channel's pair-mass range is closed,
    /// or no acceptable pair mass was found in the allowed attempts
    KinematicallyForbidden {
        channel: Channel,
        parent_mass: f64,
    },
    /// The channel is known, but its spectrum could not be built
    UnbuiltSpectrum {
        channel: Channel,
    },
}

impl fmt::Display for DecayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecayError::UnknownChannel { code } =>
                write!(f, "no lepton-pair decay is known for code {}", code),
            DecayError::KinematicallyForbidden { channel, parent_mass } =>
                write!(f, "{} is kinematically impossible for a parent of mass {:.6e} GeV", channel, parent_mass),
            DecayError::UnbuiltSpectrum { channel } =>
                write!(f, "pair-mass spectrum of {} is unavailable", channel),
        }
    }
}

impl Error for DecayError {}
