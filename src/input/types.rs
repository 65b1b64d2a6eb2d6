//! Conversion of YAML fields into configuration values

use std::convert::TryFrom;
use yaml_rust::yaml::Yaml;
use evalexpr::{HashMapContext, eval_number_with_context};

use crate::channel::Leptons;
use crate::particle::Species;

/// Why a field could not be converted
#[derive(Debug,Clone,PartialEq)]
pub enum FieldError {
    /// Wrong YAML type, or an expression that cannot be evaluated
    Type,
    /// The field has the right type, but names no acceptable value
    Value(String),
}

/// Types that can be parsed from a YAML field
pub trait FromYaml: Sized {
    /// Converts `arg`, evaluating any expressions with the named
    /// values in `ctx`.
    fn from_yaml(arg: &Yaml, ctx: &HashMapContext) -> Result<Self, FieldError>;
}

// A number, or an expression that evaluates to one
fn number(arg: &Yaml, ctx: &HashMapContext) -> Result<f64, FieldError> {
    match arg {
        Yaml::Real(s) => s.parse::<f64>().map_err(|_| FieldError::Type),
        Yaml::Integer(i) => Ok(*i as f64),
        Yaml::String(s) => eval_number_with_context(s, ctx).map_err(|_| FieldError::Type),
        _ => Err(FieldError::Type),
    }
}

fn integer<T: TryFrom<i64>>(arg: &Yaml) -> Result<T, FieldError> {
    match arg {
        Yaml::Integer(i) => T::try_from(*i)
            .map_err(|_| FieldError::Value(format!("{} is out of range", i))),
        _ => Err(FieldError::Type),
    }
}

impl FromYaml for f64 {
    fn from_yaml(arg: &Yaml, ctx: &HashMapContext) -> Result<Self, FieldError> {
        number(arg, ctx)
    }
}

impl FromYaml for i32 {
    fn from_yaml(arg: &Yaml, _ctx: &HashMapContext) -> Result<Self, FieldError> {
        integer(arg)
    }
}

impl FromYaml for u64 {
    fn from_yaml(arg: &Yaml, _ctx: &HashMapContext) -> Result<Self, FieldError> {
        integer(arg)
    }
}

impl FromYaml for usize {
    fn from_yaml(arg: &Yaml, _ctx: &HashMapContext) -> Result<Self, FieldError> {
        integer(arg)
    }
}

impl FromYaml for String {
    fn from_yaml(arg: &Yaml, _ctx: &HashMapContext) -> Result<Self, FieldError> {
        match arg {
            Yaml::String(s) | Yaml::Real(s) => Ok(s.clone()),
            Yaml::Integer(i) => Ok(i.to_string()),
            _ => Err(FieldError::Type),
        }
    }
}

/// A fixed number of numbers, e.g. `[min, max]` or `[px, py, pz]`
impl<const N: usize> FromYaml for [f64; N] {
    fn from_yaml(arg: &Yaml, ctx: &HashMapContext) -> Result<Self, FieldError> {
        let array = match arg {
            Yaml::Array(a) => a,
            _ => return Err(FieldError::Type),
        };

        if array.len() != N {
            return Err(FieldError::Value(format!("expected {} numbers, found {}", N, array.len())));
        }

        let mut v = [0.0; N];
        for (x, y) in v.iter_mut().zip(array.iter()) {
            *x = number(y, ctx)?;
        }
        Ok(v)
    }
}

impl FromYaml for Leptons {
    fn from_yaml(arg: &Yaml, _ctx: &HashMapContext) -> Result<Self, FieldError> {
        match arg {
            Yaml::String(s) => s.parse::<Leptons>().map_err(FieldError::Value),
            _ => Err(FieldError::Type),
        }
    }
}

/// A species name, e.g. `eta` or `J/psi`, or its PDG code
impl FromYaml for Species {
    fn from_yaml(arg: &Yaml, _ctx: &HashMapContext) -> Result<Self, FieldError> {
        match arg {
            Yaml::String(s) => s.parse::<Species>().map_err(FieldError::Value),
            Yaml::Integer(i) => i32::try_from(*i).ok()
                .and_then(Species::from_pdg)
                .ok_or_else(|| FieldError::Value(format!("unknown PDG code {}", i))),
            _ => Err(FieldError::Type),
        }
    }
}
