use crate::ctype::PlatformType;
use crate::error::CompileError;
use crate::resolve::Resolution;

use super::util::*;

#[test]
fn test_lp64() {
    let r = resolve_ok(&target("lp64"));
    assert_eq!(
        r,
        Resolution {
            short: 2,
            int: 4,
            long: 8,
            pointer: 8
        }
    );
}

#[test]
fn test_other_targets() {
    let r = resolve_ok(&target("ccpu"));
    assert_eq!((r.short, r.int, r.long, r.pointer), (2, 2, 4, 2));
    let r = resolve_ok(&target("ilp32"));
    assert_eq!((r.short, r.int, r.long, r.pointer), (2, 4, 4, 4));
    let r = resolve_ok(&target("llp64"));
    assert_eq!((r.short, r.int, r.long, r.pointer), (2, 4, 4, 8));
}

#[test]
fn test_all_widths_valid() {
    for name in crate::limits::target_names() {
        let r = resolve_ok(&target(name));
        for t in PlatformType::ALL {
            assert!([1, 2, 4, 8].contains(&r.get(t)), "{} on {}", t, name);
        }
    }
}

#[test]
fn test_single_byte() {
    let (lim, _) = with_defines("lp64", &["SHRT_MAX=127"]);
    assert_eq!(resolve_ok(&lim).short, 1);
}

#[test]
fn test_unresolved_int() {
    let (lim, _) = with_defines("lp64", &["INT_MAX=0x7fffff"]);
    let ec = resolve_err(&lim);
    assert_eq!(ec.get_error_count(), 1);
    assert_eq!(
        ec.get_first_error(),
        Some(&CompileError::UnresolvedWidth(PlatformType::Int, 0x7fffff))
    );
    assert_eq!(
        ec.get_first_error().unwrap().to_string(),
        "Cannot determine size of int (INT_MAX = 8388607)"
    );
}

#[test]
fn test_unresolved_all() {
    let (lim, _) = with_defines(
        "host",
        &[
            "SHRT_MAX=0xff",
            "INT_MAX=0x7ffff",
            "LONG_MAX=0x7ffffffff",
            "INTPTR_MAX=0x7fffffffffffffffffff",
        ],
    );
    let ec = resolve_err(&lim);
    let types: Vec<_> = ec
        .errors()
        .iter()
        .map(|e| match e {
            CompileError::UnresolvedWidth(t, _) => *t,
            _ => panic!("unexpected error {}", e),
        })
        .collect();
    assert_eq!(types, PlatformType::ALL.to_vec());
    assert_eq!(
        ec.errors()[3].to_string(),
        "Cannot determine size of void * (INTPTR_MAX = 604462909807314587353087)"
    );
}

#[test]
fn test_idempotent() {
    let lim = target("llp64");
    assert_eq!(resolve_ok(&lim), resolve_ok(&lim));
}

#[test]
fn test_display() {
    let r = resolve_ok(&target("lp64"));
    assert_eq!(
        r.to_string(),
        "CORK_SIZEOF_SHORT   2\nCORK_SIZEOF_INT     4\nCORK_SIZEOF_LONG    8\nCORK_SIZEOF_POINTER 8\n"
    );
}

#[test]
fn test_json() {
    let r = resolve_ok(&target("ccpu"));
    assert_eq!(
        serde_json::to_string(&r).unwrap(),
        r#"{"short":2,"int":2,"long":4,"pointer":2}"#
    );
}
