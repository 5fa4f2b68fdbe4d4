use crate::error::ErrorCollector;
use crate::limits::{self, Limits};
use crate::resolve::{resolve, Resolution};

pub fn resolve_ok(lim: &Limits) -> Resolution {
    let mut ec = ErrorCollector::new();
    let r = resolve(lim, &mut ec);
    ec.print_issues();
    assert_eq!(ec.get_error_count(), 0);
    r.unwrap()
}

pub fn resolve_err(lim: &Limits) -> ErrorCollector {
    let mut ec = ErrorCollector::new();
    assert!(resolve(lim, &mut ec).is_err());
    assert_ne!(ec.get_error_count(), 0);
    ec
}

pub fn target(name: &str) -> Limits {
    limits::target(name).unwrap()
}

pub fn with_defines(name: &str, defs: &[&str]) -> (Limits, ErrorCollector) {
    let mut lim = target(name);
    let mut ec = ErrorCollector::new();
    let defs: Vec<String> = defs.iter().map(|s| s.to_string()).collect();
    lim.define_all(&defs, &mut ec).unwrap();
    (lim, ec)
}
