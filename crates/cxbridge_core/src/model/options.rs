//! Option bitmasks returned by the `default_*_options` queries.
//!
//! Flag names follow the `CXDiagnosticDisplayOptions`,
//! `CXTranslationUnit_Flags` and `CXCodeComplete_Flags` enums. Values are
//! built with `from_bits_retain`, so bits added by newer libclang releases
//! survive untouched.

use bitflags::bitflags;

bitflags! {
    /// Formatting options for rendering a diagnostic.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DiagnosticDisplayOptions: u32 {
        const DISPLAY_SOURCE_LOCATION = 0x01;
        const DISPLAY_COLUMN = 0x02;
        const DISPLAY_SOURCE_RANGES = 0x04;
        const DISPLAY_OPTION = 0x08;
        const DISPLAY_CATEGORY_ID = 0x10;
        const DISPLAY_CATEGORY_NAME = 0x20;
    }
}

bitflags! {
    /// Parse options for a translation unit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TranslationUnitFlags: u32 {
        const DETAILED_PREPROCESSING_RECORD = 0x01;
        const INCOMPLETE = 0x02;
        const PRECOMPILED_PREAMBLE = 0x04;
        const CACHE_COMPLETION_RESULTS = 0x08;
        const FOR_SERIALIZATION = 0x10;
        const CXX_CHAINED_PCH = 0x20;
        const SKIP_FUNCTION_BODIES = 0x40;
        const INCLUDE_BRIEF_COMMENTS_IN_CODE_COMPLETION = 0x80;
        const CREATE_PREAMBLE_ON_FIRST_PARSE = 0x100;
        const KEEP_GOING = 0x200;
        const SINGLE_FILE_PARSE = 0x400;
        const LIMIT_SKIP_FUNCTION_BODIES_TO_PREAMBLE = 0x800;
        const INCLUDE_ATTRIBUTED_TYPES = 0x1000;
        const VISIT_IMPLICIT_ATTRIBUTES = 0x2000;
        const IGNORE_NON_ERRORS_FROM_INCLUDED_FILES = 0x4000;
        const RETAIN_EXCLUDED_CONDITIONAL_BLOCKS = 0x8000;
    }
}

bitflags! {
    /// Code-completion options.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CodeCompleteFlags: u32 {
        const INCLUDE_MACROS = 0x01;
        const INCLUDE_CODE_PATTERNS = 0x02;
        const INCLUDE_BRIEF_COMMENTS = 0x04;
        const SKIP_PREAMBLE = 0x08;
        const INCLUDE_COMPLETIONS_WITH_FIX_ITS = 0x10;
    }
}

/// Renders the names of the known flags set in `flags`, `|`-separated.
///
/// Unknown bits are reported as one trailing hex literal.
pub fn describe_flags<B>(flags: B) -> String
where
    B: bitflags::Flags<Bits = u32> + Copy,
{
    let mut parts = flags
        .iter_names()
        .map(|(name, _)| name.to_string())
        .collect::<Vec<_>>();
    let unknown = flags.bits() & !B::all().bits();
    if unknown != 0 {
        parts.push(format!("{unknown:#x}"));
    }
    if parts.is_empty() {
        "(none)".to_string()
    } else {
        parts.join(" | ")
    }
}
