//! Default option bitmasks.

use crate::library::Libclang;
use crate::model::options::{CodeCompleteFlags, DiagnosticDisplayOptions, TranslationUnitFlags};

impl Libclang {
    /// Display options closest to the clang driver's diagnostic output.
    pub fn default_diagnostic_display_options(&self) -> DiagnosticDisplayOptions {
        // SAFETY: no arguments; returns a plain bitmask.
        let bits = unsafe { (self.api.default_diagnostic_display_options)() };
        DiagnosticDisplayOptions::from_bits_retain(bits)
    }

    /// Parse flags suited to a translation unit that will be reparsed often.
    ///
    /// The returned set enables optimizations such as the precompiled
    /// preamble; which ones may change between libclang releases.
    pub fn default_editing_translation_unit_options(&self) -> TranslationUnitFlags {
        // SAFETY: no arguments; returns a plain bitmask.
        let bits = unsafe { (self.api.default_editing_translation_unit_options)() };
        TranslationUnitFlags::from_bits_retain(bits)
    }

    /// Default flags for `clang_codeCompleteAt`.
    pub fn default_code_complete_options(&self) -> CodeCompleteFlags {
        // SAFETY: no arguments; returns a plain bitmask.
        let bits = unsafe { (self.api.default_code_complete_options)() };
        CodeCompleteFlags::from_bits_retain(bits)
    }
}

#[cfg(test)]
mod tests {
    use crate::library::Libclang;
    use crate::model::options::{DiagnosticDisplayOptions, TranslationUnitFlags};
    use crate::native::fake::{
        fake_api, FAKE_CODE_COMPLETE_OPTIONS, FAKE_DIAGNOSTIC_OPTIONS, FAKE_EDITING_OPTIONS,
    };

    #[test]
    fn bitmasks_pass_through_unchanged() {
        let lib = Libclang::from_api(fake_api());
        assert_eq!(
            lib.default_diagnostic_display_options().bits(),
            FAKE_DIAGNOSTIC_OPTIONS
        );
        assert_eq!(
            lib.default_editing_translation_unit_options().bits(),
            FAKE_EDITING_OPTIONS
        );
        assert_eq!(
            lib.default_code_complete_options().bits(),
            FAKE_CODE_COMPLETE_OPTIONS
        );
    }

    #[test]
    fn known_flags_are_addressable_by_name() {
        let lib = Libclang::from_api(fake_api());
        let display = lib.default_diagnostic_display_options();
        assert!(display.contains(DiagnosticDisplayOptions::DISPLAY_SOURCE_LOCATION));
        assert!(display.contains(DiagnosticDisplayOptions::DISPLAY_OPTION));
        assert!(!display.contains(DiagnosticDisplayOptions::DISPLAY_CATEGORY_NAME));

        let editing = lib.default_editing_translation_unit_options();
        assert!(editing.contains(TranslationUnitFlags::PRECOMPILED_PREAMBLE));
        assert_ne!(editing.bits() & !TranslationUnitFlags::all().bits(), 0);
    }

    #[test]
    fn repeated_queries_agree() {
        let lib = Libclang::from_api(fake_api());
        assert_eq!(
            lib.default_diagnostic_display_options(),
            lib.default_diagnostic_display_options()
        );
    }
}
