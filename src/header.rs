use std::fmt::Write;

use crate::ctype::PlatformType;
use crate::resolve::Resolution;

const GUARD: &str = "LIBCORK_CORE_TYPES_H";
const INCLUDES: [&str; 4] = ["limits.h", "inttypes.h", "stddef.h", "stdint.h"];

/// Renders a C header that pulls in the C99 integer types and defines
/// `CORK_SIZEOF_*` for each built-in type.
pub fn render(r: &Resolution) -> String {
    let mut s = String::new();
    write_header(&mut s, r).unwrap();
    s
}

fn write_header(w: &mut impl Write, r: &Resolution) -> std::fmt::Result {
    writeln!(w, "#ifndef {}", GUARD)?;
    writeln!(w, "#define {}", GUARD)?;
    writeln!(w)?;
    for inc in INCLUDES {
        writeln!(w, "#include <{}>", inc)?;
    }
    writeln!(w)?;
    for t in PlatformType::ALL {
        writeln!(w, "/* size in bytes of {} */", t)?;
        writeln!(w, "#define {}  {}", t.sizeof_macro(), r.get(t))?;
    }
    writeln!(w)?;
    writeln!(w, "#endif /* {} */", GUARD)
}
