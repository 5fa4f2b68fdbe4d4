use std::collections::HashMap;

use core::ffi::{c_int, c_long, c_short};
use num_traits::{AsPrimitive, Bounded, PrimInt};

use crate::ctype::PlatformType;
use crate::error::{CompileError, CompileWarning, ErrorCollector};
use crate::literal::parse_int_literal;

/// Maxima of the signed fixed-width integers, paired with their size in bytes.
/// Resolution tries them in this order.
pub const FIXED_MAXIMA: [(i128, u8); 4] = [
    (i8::MAX as i128, 1),
    (i16::MAX as i128, 2),
    (i32::MAX as i128, 4),
    (i64::MAX as i128, 8),
];

/// Finds the size in bytes of a type whose maximum value is `max`.
pub const fn resolve_width(max: i128) -> Option<u8> {
    let mut i = 0;
    while i < FIXED_MAXIMA.len() {
        if FIXED_MAXIMA[i].0 == max {
            return Some(FIXED_MAXIMA[i].1);
        }
        i += 1;
    }
    None
}

/// Maximum values of the platform built-in types on one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub shrt_max: i128,
    pub int_max: i128,
    pub long_max: i128,
    pub intptr_max: i128,
}

impl Limits {
    pub const HOST: Limits = Limits {
        shrt_max: c_short::MAX as i128,
        int_max: c_int::MAX as i128,
        long_max: c_long::MAX as i128,
        intptr_max: isize::MAX as i128,
    };

    /// Builds a table from Rust integer types standing in for
    /// `short`, `int`, `long` and `intptr_t`.
    pub fn from_types<S, I, L, P>() -> Self
    where
        S: PrimInt + AsPrimitive<i128>,
        I: PrimInt + AsPrimitive<i128>,
        L: PrimInt + AsPrimitive<i128>,
        P: PrimInt + AsPrimitive<i128>,
    {
        Limits {
            shrt_max: max_of::<S>(),
            int_max: max_of::<I>(),
            long_max: max_of::<L>(),
            intptr_max: max_of::<P>(),
        }
    }

    pub fn get(&self, t: PlatformType) -> i128 {
        match t {
            PlatformType::Short => self.shrt_max,
            PlatformType::Int => self.int_max,
            PlatformType::Long => self.long_max,
            PlatformType::Pointer => self.intptr_max,
        }
    }

    pub fn set(&mut self, t: PlatformType, max: i128) {
        match t {
            PlatformType::Short => self.shrt_max = max,
            PlatformType::Int => self.int_max = max,
            PlatformType::Long => self.long_max = max,
            PlatformType::Pointer => self.intptr_max = max,
        }
    }

    /// Applies a `NAME=VALUE` definition, e.g. `INT_MAX=0x7fff`.
    pub fn define(&mut self, def: &str, ec: &mut ErrorCollector) -> Result<PlatformType, ()> {
        let (name, value) = match def.split_once('=') {
            Some((n, v)) => (n.trim(), v.trim()),
            None => {
                ec.record_error(CompileError::MalformedDefine(def.to_string()))?;
                unreachable!()
            }
        };
        let t = match PlatformType::from_limit_macro(name) {
            Some(t) => t,
            None => {
                ec.record_error(CompileError::UnknownLimit(name.to_string()))?;
                unreachable!()
            }
        };
        let max = match parse_int_literal(value) {
            Some(max) => max,
            None => {
                ec.record_error(CompileError::BadLiteral(value.to_string()))?;
                unreachable!()
            }
        };
        self.set(t, max);
        Ok(t)
    }

    /// Applies a list of definitions. A limit defined twice keeps the last
    /// value and produces a warning.
    pub fn define_all(&mut self, defs: &[String], ec: &mut ErrorCollector) -> Result<(), ()> {
        let mut seen = Vec::new();
        let mut failed = false;
        for def in defs {
            match self.define(def, ec) {
                Ok(t) => {
                    if seen.contains(&t) {
                        ec.record_warning(CompileWarning::LimitRedefined(t))?;
                    } else {
                        seen.push(t);
                    }
                }
                Err(()) => failed = true,
            }
        }
        if failed {
            Err(())
        } else {
            Ok(())
        }
    }
}

impl std::fmt::Display for Limits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for t in PlatformType::ALL {
            writeln!(f, "{:<11}{}", t.limit_macro(), self.get(t))?;
        }
        Ok(())
    }
}

fn max_of<T>() -> i128
where
    T: Bounded + AsPrimitive<i128>,
{
    T::max_value().as_()
}

lazy_static! {
    static ref TARGETS: HashMap<&'static str, Limits> = {
        let mut m = HashMap::new();
        m.insert("host", Limits::HOST);
        // 16-bit int and pointers, 32-bit long
        m.insert("ccpu", Limits::from_types::<i16, i16, i32, i16>());
        m.insert("ilp32", Limits::from_types::<i16, i32, i32, i32>());
        m.insert("lp64", Limits::from_types::<i16, i32, i64, i64>());
        m.insert("llp64", Limits::from_types::<i16, i32, i32, i64>());
        m
    };
}

/// Looks up a named target preset.
pub fn target(name: &str) -> Option<Limits> {
    TARGETS.get(name).copied()
}

pub fn target_names() -> Vec<&'static str> {
    let mut names: Vec<_> = TARGETS.keys().copied().collect();
    names.sort();
    names
}
