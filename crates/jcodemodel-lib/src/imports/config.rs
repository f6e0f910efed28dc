//! Configuration for import listings.

use jcodemodel_core::Colors;

/// Configuration for import listings.
#[derive(Clone, Debug)]
pub struct Config {
    /// Package of the compilation unit; its classes need no import
    pub(crate) package: Option<String>,
    /// Whether `java.lang` classes are imported implicitly
    pub(crate) implicit_java_lang: bool,
    /// Color configuration for output
    pub(crate) colors: Colors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package: None,
            implicit_java_lang: true,
            colors: Colors::OFF,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the package of the compilation unit being generated.
    pub fn package(mut self, name: impl Into<String>) -> Self {
        self.package = Some(name.into());
        self
    }

    /// Set whether `java.lang` classes are left out of the listing.
    pub fn implicit_java_lang(mut self, value: bool) -> Self {
        self.implicit_java_lang = value;
        self
    }

    /// Set whether to use colored output.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    pub(crate) fn skips_package(&self, package: &str) -> bool {
        package.is_empty()
            || (self.implicit_java_lang && package == "java.lang")
            || self.package.as_deref() == Some(package)
    }
}
