//! Errors raised while reading a configuration

use std::fmt;
use std::error::Error;
use std::path::Path;

/// Why did reading the configuration fail?
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum InputErrorKind {
    /// The file is missing, unreadable or not YAML
    File,
    /// A section or key is absent
    Location,
    /// A field has the wrong type
    Conversion,
    /// A field was read, but its value cannot be used
    Invalid,
}

/// A configuration that could not be read, or whose values
/// cannot define a decayer.
#[derive(Debug,Clone,PartialEq)]
pub struct InputError {
    kind: InputErrorKind,
    // colon-separated path of the field, or the name of the file
    path: String,
    detail: String,
}

impl InputError {
    fn new(kind: InputErrorKind, path: &str, detail: &str) -> Self {
        InputError { kind, path: path.to_owned(), detail: detail.to_owned() }
    }

    /// The configuration itself is unusable
    pub fn file(detail: &str) -> Self {
        Self::new(InputErrorKind::File, "", detail)
    }

    /// `component` of `path` does not exist
    pub fn location(path: &str, component: &str) -> Self {
        Self::new(InputErrorKind::Location, path, component)
    }

    /// The field `field`, at `path`, has the wrong type
    pub fn conversion(path: &str, field: &str) -> Self {
        Self::new(InputErrorKind::Conversion, path, field)
    }

    /// The field at `path` was read, but its value cannot be used
    pub fn invalid(path: &str, cause: &str) -> Self {
        Self::new(InputErrorKind::Invalid, path, cause)
    }

    /// Attributes a file error to the file at `path`
    pub(crate) fn in_file(self, path: &Path) -> Self {
        match self.kind {
            InputErrorKind::File => InputError { path: path.display().to_string(), ..self },
            _ => self,
        }
    }

    pub fn kind(&self) -> InputErrorKind {
        self.kind
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            InputErrorKind::File if self.path.is_empty() => write!(f, "{}", self.detail),
            InputErrorKind::File => write!(f, "cannot load \"{}\": {}", self.path, self.detail),
            InputErrorKind::Location => write!(f, "\"{}\" not found: \"{}\" is missing", self.path, self.detail),
            InputErrorKind::Conversion => write!(f, "\"{}\" (at \"{}\") has the wrong type, or is not a valid expression", self.detail, self.path),
            InputErrorKind::Invalid => write!(f, "invalid value for \"{}\": {}", self.path, self.detail),
        }
    }
}

impl Error for InputError {}
