//! Queries that return native strings.

use crate::library::Libclang;
use crate::native::CxString;

impl Libclang {
    /// Human-readable libclang version.
    ///
    /// Meant for display; the format is not stable and should not be parsed.
    pub fn clang_version(&self) -> String {
        // SAFETY: no arguments; the returned handle is owned by the guard.
        let raw = unsafe { (self.api.get_clang_version)() };
        CxString::new(raw, &self.api).into_string()
    }

    /// Name of a diagnostic category number, as reported by
    /// `clang_getDiagnosticCategory`.
    ///
    /// Unknown categories yield whatever libclang returns for them, usually
    /// an empty string.
    pub fn diagnostic_category_name(&self, category: u32) -> String {
        // SAFETY: plain integer argument; the returned handle is owned by the guard.
        let raw = unsafe { (self.api.get_diagnostic_category_name)(category) };
        CxString::new(raw, &self.api).into_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::library::Libclang;
    use crate::native::fake::{self, fake_api, FAKE_VERSION};

    #[test]
    fn version_is_copied_and_released() {
        let lib = Libclang::from_api(fake_api());
        fake::reset();
        assert_eq!(lib.clang_version(), FAKE_VERSION);
        assert_eq!(fake::disposed_count(), 1);
    }

    #[test]
    fn null_version_reads_as_empty_and_is_still_released() {
        let lib = Libclang::from_api(fake_api());
        fake::reset();
        fake::return_null_version(true);
        assert_eq!(lib.clang_version(), "");
        assert_eq!(fake::disposed_count(), 1);
    }

    #[test]
    fn category_number_is_forwarded() {
        let lib = Libclang::from_api(fake_api());
        fake::reset();
        assert_eq!(lib.diagnostic_category_name(7), "Category 7");
        assert_eq!(lib.diagnostic_category_name(0), "Category 0");
        assert_eq!(
            fake::calls(),
            vec![
                "get_diagnostic_category_name(7)",
                "get_diagnostic_category_name(0)"
            ]
        );
        assert_eq!(fake::disposed_count(), 2);
    }
}
