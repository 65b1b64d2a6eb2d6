//! Parse input configuration file

use std::path::Path;
use yaml_rust::{YamlLoader, yaml::Yaml};
use evalexpr::*;

use crate::constants::*;

mod error;
mod types;

pub use error::*;
pub use types::*;

/// Represents the input configuration, which defines values
/// for the decayer and driver parameters, and any named
/// constants those values are written in terms of.
#[derive(Debug)]
pub struct Config {
    input: Yaml,
    ctx: HashMapContext,
}

impl Config {
    /// Loads a configuration file.
    /// Fails if the file cannot be opened or if it is not
    /// YAML-formatted.
    pub fn from_file(path: &Path) -> Result<Self, InputError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| InputError::file(&e.to_string()).in_file(path))?;
        Self::from_string(&contents)
            .map_err(|e| e.in_file(path))
    }

    /// Loads a YAML configuration from a string.
    /// Fails if the string is not formatted correctly.
    pub fn from_string(s: &str) -> Result<Self, InputError> {
        let input = YamlLoader::load_from_str(s)
            .map_err(|e| InputError::file(&format!("not valid YAML: {}", e)))?;
        let input = input.first()
            .ok_or_else(|| InputError::file("no YAML document found"))?;

        Ok(Config {
            input: input.clone(),
            ctx: HashMapContext::new(),
        })
    }

    /// Loads particle masses, unit prefixes and the usual
    /// mathematical functions, so that numeric fields can be
    /// given as expressions.
    /// Also loads and evaluates the named values given in the
    /// specified `section`, in order, so that later entries may
    /// refer to earlier ones.
    pub fn with_context(&mut self, section: &str) -> Result<&mut Self, InputError> {
        use helper::context_function;

        // Energies and masses are in GeV
        let mut ctx = context_map! {
            "m_e" => ELECTRON_MASS,
            "m_mu" => MUON_MASS,
            "m_pi" => CHARGED_PION_MASS,
            "m_pi0" => NEUTRAL_PION_MASS,
            "m_p" => PROTON_MASS,
            "eV" => 1.0e-9,
            "keV" => 1.0e-6,
            "MeV" => 1.0e-3,
            "GeV" => 1.0,
            "TeV" => 1.0e3,
            "pi" => std::f64::consts::PI,
        }.map_err(|_| InputError::conversion(section, "default context"))?;

        context_function!(ctx, "sqrt",   f64::sqrt);
        context_function!(ctx, "cbrt",   f64::cbrt);
        context_function!(ctx, "abs",    f64::abs);
        context_function!(ctx, "exp",    f64::exp);
        context_function!(ctx, "ln",     f64::ln);
        context_function!(ctx, "sin",    f64::sin);
        context_function!(ctx, "cos",    f64::cos);
        context_function!(ctx, "tan",    f64::tan);
        context_function!(ctx, "asin",   f64::asin);
        context_function!(ctx, "acos",   f64::acos);
        context_function!(ctx, "atan",   f64::atan);
        context_function!(ctx, "atan2",  f64::atan2, 2);
        context_function!(ctx, "sinh",   f64::sinh);
        context_function!(ctx, "cosh",   f64::cosh);
        context_function!(ctx, "tanh",   f64::tanh);
        context_function!(ctx, "floor",  f64::floor);
        context_function!(ctx, "ceil",   f64::ceil);
        context_function!(ctx, "round",  f64::round);

        // energy of a particle of mass m and momentum p
        context_function!(ctx, "energy", |m: f64, p: f64| m.hypot(p), 2);

        self.ctx = ctx;

        // Read in from 'constants' block if it exists
        let entries = match &self.input[section] {
            Yaml::BadValue => return Ok(self),
            Yaml::Hash(h) => h.clone(),
            _ => return Err(InputError::conversion(section, section)),
        };

        for (a, b) in entries.iter() {
            let key = match a {
                Yaml::String(k) => k,
                _ => return Err(InputError::conversion(section, "non-string key")),
            };

            let value = match b {
                Yaml::Integer(i) => Some(*i as f64),
                Yaml::Real(s) => s.parse::<f64>().ok(),
                Yaml::String(s) => eval_number_with_context(s, &self.ctx).ok(),
                _ => None,
            };

            // insert it into the context so it's available for the next read
            let value = value.ok_or_else(|| InputError::conversion(section, key))?;
            self.ctx.set_value(key.clone(), Value::from(value))
                .map_err(|_| InputError::conversion(section, key))?;
        }

        Ok(self)
    }

    /// Locates a key-value pair in the configuration file and attempts
    /// to parse the value as the specified type.
    /// The path to the key-value pair is specified by a string of colon-separated
    /// sections, e.g. `'section:subsection:subsubsection:key'`.
    pub fn read<T, S>(&self, path: S) -> Result<T, InputError>
    where
        T: FromYaml,
        S: AsRef<str>,
    {
        let path = path.as_ref();
        let address: Vec<&str> = path.split(':').collect();

        let value = address.iter()
            .try_fold(&self.input, |y, s| {
                if y[*s].is_badvalue() {
                    Err(InputError::location(path, s))
                } else {
                    Ok(&y[*s])
                }
            })?;

        let key = address.last().copied().unwrap_or(path);
        T::from_yaml(value, &self.ctx)
            .map_err(|e| match e {
                FieldError::Type => InputError::conversion(path, key),
                FieldError::Value(cause) => InputError::invalid(path, &cause),
            })
    }

    /// As [`read`](Config::read), but a missing key gives `None`
    /// rather than an error. Keys that are present but malformed
    /// are still errors.
    pub fn read_opt<T, S>(&self, path: S) -> Result<Option<T>, InputError>
    where
        T: FromYaml,
        S: AsRef<str>,
    {
        match self.read(path) {
            Ok(v) => Ok(Some(v)),
            Err(e) if e.kind() == InputErrorKind::Location => Ok(None),
            Err(e) => Err(e),
        }
    }
}

mod helper {
    macro_rules! context_function {
        ($ctx:expr, $name:literal, $func:expr) => {
            $ctx.set_function(
                $name.to_string(),
                Function::new(|arg| {
                    let x = arg.as_number()?;
                    Ok(Value::Float($func(x)))
                })
            ).map_err(|_| InputError::conversion("default context", $name))?
        };
        ($ctx:expr, $name:literal, $func:expr, 2) => {
            $ctx.set_function(
                $name.to_string(),
                Function::new(|arg| {
                    let arg = arg.as_fixed_len_tuple(2)?;
                    let x = arg[0].as_number()?;
                    let y = arg[1].as_number()?;
                    Ok(Value::Float($func(x, y)))
                })
            ).map_err(|_| InputError::conversion("default context", $name))?
        };
    }

    pub(super) use context_function;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Species;

    #[test]
    fn config_parser() {
        let text = "---
        decayer:
          bins: 500
          beam_energy: 3.5 * TeV
          mass_range: [2.0 * m_mu, mmax]

        run:
          momentum: [0.0, 0.0, p]
          energy: energy(m_pi0, p)
          seed: 17
          parent: eta

        constants:
          mmax: 5.0 * GeV
          p: 2.0 * mmax

        deep:
          nested:
            section:
              key: 1.0
        ";

        let mut config = Config::from_string(&text).unwrap();
        config.with_context("constants").unwrap();

        // Plain usize
        let bins: usize = config.read("decayer:bins").unwrap();
        assert_eq!(bins, 500);

        // Evaluates math expr
        let ebeam: f64 = config.read("decayer:beam_energy").unwrap();
        assert_eq!(ebeam, 3500.0);

        // Implicit conversion from integer to f64
        let seed: f64 = config.read("run:seed").unwrap();
        assert_eq!(seed, 17.0);
        let seed: u64 = config.read("run:seed").unwrap();
        assert_eq!(seed, 17);

        // Constants may refer to earlier constants
        let r: [f64; 2] = config.read("decayer:mass_range").unwrap();
        assert_eq!(r, [2.0 * MUON_MASS, 5.0]);
        let p: [f64; 3] = config.read("run:momentum").unwrap();
        assert_eq!(p[2], 10.0);

        let energy: f64 = config.read("run:energy").unwrap();
        assert!((energy - (NEUTRAL_PION_MASS.powi(2) + 100.0).sqrt()).abs() < 1.0e-12);

        let parent: Species = config.read("run:parent").unwrap();
        assert_eq!(parent, Species::Eta);

        let key: f64 = config.read("deep:nested:section:key").unwrap();
        assert_eq!(key, 1.0);

        // Optional fields
        assert_eq!(config.read_opt::<f64, _>("run:pt_spread"), Ok(None));
        assert_eq!(config.read_opt::<u64, _>("run:seed"), Ok(Some(17)));
    }

    #[test]
    fn errors() {
        let text = "---
        run:
          events: ten
        constants:
          a: 2.0
        ";

        let mut config = Config::from_string(&text).unwrap();
        config.with_context("constants").unwrap();

        let err = config.read::<usize, _>("run:events").unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::Conversion);

        let err = config.read::<usize, _>("run:seed").unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::Location);

        let err = config.read::<f64, _>("decayer:bins").unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::Location);
        println!("{}", err);

        // present, but malformed, is not the same as missing
        let err = config.read_opt::<usize, _>("run:events").unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::Conversion);
        assert_eq!(err.path(), "run:events");

        // out of range
        let config = Config::from_string("---\nrun:\n  events: -10\n").unwrap();
        let err = config.read::<usize, _>("run:events").unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::Invalid);

        // undefined name in the constants block
        let mut config = Config::from_string("---\nconstants:\n  b: 2.0 * c\n").unwrap();
        assert!(config.with_context("constants").is_err());

        let err = Config::from_string("key: [unclosed").unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::File);

        let err = Config::from_file(Path::new("no/such/file.yaml")).unwrap_err();
        println!("{}", err);
        assert_eq!(err.kind(), InputErrorKind::File);
        assert_eq!(err.path(), "no/such/file.yaml");
    }
}
