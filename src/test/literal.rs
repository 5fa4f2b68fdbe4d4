use crate::literal::parse_int_literal;

#[test]
fn test_decimal() {
    assert_eq!(parse_int_literal("32767"), Some(32767));
    assert_eq!(parse_int_literal("0"), Some(0));
    assert_eq!(parse_int_literal("-128"), Some(-128));
}

#[test]
fn test_radix() {
    assert_eq!(parse_int_literal("0x7fff"), Some(0x7fff));
    assert_eq!(parse_int_literal("0X7FFF"), Some(0x7fff));
    assert_eq!(parse_int_literal("077"), Some(0o77));
    assert_eq!(parse_int_literal("0b1111111"), Some(127));
}

#[test]
fn test_suffixes() {
    assert_eq!(parse_int_literal("0x7fffffffL"), Some(0x7fffffff));
    assert_eq!(parse_int_literal("0x7fffffffffffffffLL"), Some(i64::MAX as i128));
    assert_eq!(parse_int_literal("0xffffffffUL"), Some(0xffffffff));
    assert_eq!(parse_int_literal("0xffffffffffffffffULL"), Some(u64::MAX as i128));
    assert_eq!(parse_int_literal("1llu"), Some(1));
    assert_eq!(parse_int_literal("1u"), Some(1));
}

#[test]
fn test_bad_suffixes() {
    assert_eq!(parse_int_literal("1lL"), None);
    assert_eq!(parse_int_literal("1lul"), None);
    assert_eq!(parse_int_literal("1uu"), None);
    assert_eq!(parse_int_literal("1lll"), None);
}

#[test]
fn test_malformed() {
    assert_eq!(parse_int_literal(""), None);
    assert_eq!(parse_int_literal("-"), None);
    assert_eq!(parse_int_literal("0x"), None);
    assert_eq!(parse_int_literal("08"), None);
    assert_eq!(parse_int_literal("12ab"), None);
    assert_eq!(parse_int_literal("+5"), None);
    assert_eq!(parse_int_literal("L"), None);
}

#[test]
fn test_range() {
    assert_eq!(
        parse_int_literal("-0x80000000000000000000000000000000"),
        Some(i128::MIN)
    );
    assert_eq!(parse_int_literal("0x80000000000000000000000000000000"), None);
    assert_eq!(parse_int_literal("0x1ffffffffffffffffffffffffffffffff"), None);
}
