use serde::Serialize;

use crate::ctype::PlatformType;
use crate::error::{CompileError, ErrorCollector};
use crate::limits::{resolve_width, Limits};

/// Byte widths of the platform built-in types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub short: u8,
    pub int: u8,
    pub long: u8,
    pub pointer: u8,
}

impl Resolution {
    pub fn get(&self, t: PlatformType) -> u8 {
        match t {
            PlatformType::Short => self.short,
            PlatformType::Int => self.int,
            PlatformType::Long => self.long,
            PlatformType::Pointer => self.pointer,
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for t in PlatformType::ALL {
            writeln!(f, "{:<20}{}", t.sizeof_macro(), self.get(t))?;
        }
        Ok(())
    }
}

/// Resolves every type in `limits`.
///
/// Each type is checked on its own, so one call reports all unresolved
/// types. Any failure fails the whole resolution.
pub fn resolve(limits: &Limits, ec: &mut ErrorCollector) -> Result<Resolution, ()> {
    let mut widths = [0u8; 4];
    let mut failed = false;
    for (i, t) in PlatformType::ALL.into_iter().enumerate() {
        match resolve_one(limits, t, ec) {
            Ok(w) => widths[i] = w,
            Err(()) => failed = true,
        }
    }
    if failed {
        return Err(());
    }
    let [short, int, long, pointer] = widths;
    Ok(Resolution {
        short,
        int,
        long,
        pointer,
    })
}

fn resolve_one(limits: &Limits, t: PlatformType, ec: &mut ErrorCollector) -> Result<u8, ()> {
    let max = limits.get(t);
    match resolve_width(max) {
        Some(w) => Ok(w),
        None => {
            ec.record_error(CompileError::UnresolvedWidth(t, max))?;
            unreachable!()
        }
    }
}
