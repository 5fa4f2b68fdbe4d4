use std::fmt::Formatter;

use crate::ctype::PlatformType;

#[derive(Debug, PartialEq)]
pub enum CompileError {
    /// The type's maximum matches none of the fixed-width maxima.
    UnresolvedWidth(PlatformType, i128),
    UnknownLimit(String),
    MalformedDefine(String),
    BadLiteral(String),
    UnknownTarget(String),
}

#[derive(Debug, PartialEq)]
pub enum CompileWarning {
    LimitRedefined(PlatformType),
}

pub struct ErrorCollector {
    errors: Vec<CompileError>,
    warnings: Vec<CompileWarning>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        ErrorCollector {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn record_error(&mut self, error: CompileError) -> Result<(), ()> {
        self.errors.push(error);
        Err(())
    }

    pub fn record_warning(&mut self, warning: CompileWarning) -> Result<(), ()> {
        self.warnings.push(warning);
        Ok(())
    }

    pub fn get_error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn get_warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn get_first_error(&self) -> Option<&CompileError> {
        self.errors.first()
    }

    pub fn errors(&self) -> &[CompileError] {
        &self.errors
    }

    pub fn print_issues(&self) {
        for warn in &self.warnings {
            println!("warning: {}", warn);
        }
        for err in &self.errors {
            println!("error: {}", err);
        }
    }
}

impl Default for ErrorCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            CompileError::UnresolvedWidth(t, max) => write!(
                f,
                "Cannot determine size of {} ({} = {})",
                t,
                t.limit_macro(),
                max
            ),
            CompileError::UnknownLimit(s) => write!(f, "unknown limit macro `{}'", s),
            CompileError::MalformedDefine(s) => {
                write!(f, "expected NAME=VALUE, got `{}'", s)
            }
            CompileError::BadLiteral(s) => write!(f, "bad integer literal `{}'", s),
            CompileError::UnknownTarget(s) => write!(f, "unknown target `{}'", s),
        }
    }
}

impl std::fmt::Display for CompileWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            CompileWarning::LimitRedefined(t) => {
                write!(f, "{} is defined more than once", t.limit_macro())
            }
        }
    }
}
