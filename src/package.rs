//! Package trait - the unit of composition.
//!
//! A package is a named bundle of contributions. Importing one hands it the
//! target scope and a set of options; everything the package has to offer is
//! registered inside its `configure` implementation, which may itself create
//! child scopes and import further packages.

use std::sync::Arc;

use crate::error::Result;
use crate::scope::ConfigScope;
use crate::Options;

/// A named bundle of contributions applied to a scope on import.
///
/// Implementations register commands, converters, panels and the rest of
/// their surface from `configure`. Errors abort the import at the point of
/// failure; registrations already made stay in place.
pub trait Package: Send + Sync {
    /// Stable package name, used for logging and diagnostics.
    fn name(&self) -> &str;

    /// Register this package's contributions on `scope`.
    fn configure(&self, scope: &Arc<ConfigScope>, options: &Options) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopPackage;

    impl Package for NoopPackage {
        fn name(&self) -> &str {
            "noop"
        }

        fn configure(&self, _scope: &Arc<ConfigScope>, _options: &Options) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_import_runs_configure() {
        let root = ConfigScope::root();
        assert!(root.import(&NoopPackage).is_ok());
    }

    #[test]
    fn test_import_with_passes_options() {
        struct WantsFlag;

        impl Package for WantsFlag {
            fn name(&self) -> &str {
                "wants-flag"
            }

            fn configure(&self, scope: &Arc<ConfigScope>, options: &Options) -> Result<()> {
                let enabled = options
                    .get("enabled")
                    .and_then(|value| value.as_bool())
                    .unwrap_or(false);
                scope.set_value("flag", serde_json::Value::Bool(enabled));
                Ok(())
            }
        }

        let root = ConfigScope::root();
        let mut options = Options::new();
        options.insert("enabled".to_string(), serde_json::Value::Bool(true));
        root.import_with(&WantsFlag, &options).unwrap();
        assert_eq!(
            root.get_value("flag"),
            Some(serde_json::Value::Bool(true))
        );
    }
}
