/// Built-in C types whose width varies between targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlatformType {
    Short,
    Int,
    Long,
    Pointer,
}

impl PlatformType {
    pub const ALL: [PlatformType; 4] = [
        PlatformType::Short,
        PlatformType::Int,
        PlatformType::Long,
        PlatformType::Pointer,
    ];

    /// C spelling of the type, as used in diagnostics.
    pub const fn c_name(self) -> &'static str {
        match self {
            PlatformType::Short => "short",
            PlatformType::Int => "int",
            PlatformType::Long => "long",
            PlatformType::Pointer => "void *",
        }
    }

    /// Name of the macro holding the type's maximum value.
    pub const fn limit_macro(self) -> &'static str {
        match self {
            PlatformType::Short => "SHRT_MAX",
            PlatformType::Int => "INT_MAX",
            PlatformType::Long => "LONG_MAX",
            PlatformType::Pointer => "INTPTR_MAX",
        }
    }

    /// Name of the macro holding the type's size in bytes.
    pub const fn sizeof_macro(self) -> &'static str {
        match self {
            PlatformType::Short => "CORK_SIZEOF_SHORT",
            PlatformType::Int => "CORK_SIZEOF_INT",
            PlatformType::Long => "CORK_SIZEOF_LONG",
            PlatformType::Pointer => "CORK_SIZEOF_POINTER",
        }
    }

    pub fn from_limit_macro(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.limit_macro() == name)
    }
}

impl std::fmt::Display for PlatformType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.c_name())
    }
}
