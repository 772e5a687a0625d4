//! Key-value lookups the bootstrap reads its scan locations from.

use config::Config;
use fxhash::FxHashMap;
use ladmin_domain::config::AdminSettings;
use ladmin_domain::constants::BASE_PACKAGE_PROPERTY;

/// An external key-value settings provider.
///
/// A missing key is `None`, never an error.
pub trait PropertySource {
    fn property(&self, key: &str) -> Option<String>;
}

impl PropertySource for Config {
    fn property(&self, key: &str) -> Option<String> {
        self.get_string(key).ok()
    }
}

impl PropertySource for AdminSettings {
    fn property(&self, key: &str) -> Option<String> {
        match key {
            BASE_PACKAGE_PROPERTY => self.base_package.clone(),
            _ => None,
        }
    }
}

impl<P: PropertySource + ?Sized> PropertySource for &P {
    fn property(&self, key: &str) -> Option<String> {
        (**self).property(key)
    }
}

/// In-memory property source, handy for embedding hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct MapPropertySource {
    values: FxHashMap<String, String>,
}

impl MapPropertySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl PropertySource for MapPropertySource {
    fn property(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_expose_only_the_base_package() {
        let mut settings = AdminSettings::default();
        assert_eq!(settings.property(BASE_PACKAGE_PROPERTY), None);

        settings.base_package = Some("pkg.models".to_owned());
        assert_eq!(settings.property(BASE_PACKAGE_PROPERTY).as_deref(), Some("pkg.models"));
        assert_eq!(settings.property("logging.level"), None);
    }

    #[test]
    fn config_lookup_misses_are_none() {
        let config = Config::builder()
            .set_override(BASE_PACKAGE_PROPERTY, "pkg.models")
            .and_then(|builder| builder.build())
            .expect("config build");

        assert_eq!(config.property(BASE_PACKAGE_PROPERTY).as_deref(), Some("pkg.models"));
        assert_eq!(config.property("missing"), None);
    }

    fn lookup(source: impl PropertySource, key: &str) -> Option<String> {
        source.property(key)
    }

    #[test]
    fn map_source_lookup() {
        let source = MapPropertySource::new().with(BASE_PACKAGE_PROPERTY, "a;b");
        assert_eq!(source.property(BASE_PACKAGE_PROPERTY).as_deref(), Some("a;b"));
        assert_eq!(lookup(&source, "other"), None);
    }
}
