/// Settings key naming the namespaces to scan for administration declarations.
pub const BASE_PACKAGE_PROPERTY: &str = "base_package";

/// Characters separating namespaces inside [`BASE_PACKAGE_PROPERTY`].
pub const CONFIG_LOCATION_DELIMITERS: &[char] = &[',', ';', ' ', '\t', '\n'];

/// Environment prefix for settings overrides (e.g. `LIGHTADMIN__BASE_PACKAGE`).
pub const ENV_PREFIX: &str = "LIGHTADMIN";

pub const LIST_VIEW: &str = "list";
pub const QUICK_VIEW: &str = "quick";
pub const SHOW_VIEW: &str = "show";
pub const FORM_VIEW: &str = "form";
pub const FILTER: &str = "filter";
