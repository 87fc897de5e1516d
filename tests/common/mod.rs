// Common test fixtures shared across test files

use url_template::{HideDefaults, ParameterMap, UrlTemplateConfigData, UrlTemplateResolver};

/// Classic multi-part site family: country and city in the host, language and
/// a free parameter in the path, defaults hidden from urls.
#[allow(dead_code)]
pub fn standard_config_data() -> UrlTemplateConfigData {
    UrlTemplateConfigData::new()
        .with_host_template("{country}.{city}.test.com")
        .with_path_template("/{language}/{param}/some-path-prefix/")
        .with_pattern("country", "(uk|ua|gb|pl)")
        .with_pattern("language", "[a-z]{2}")
        .with_pattern("city", "(kiev|berlin|paris|london)")
        .with_pattern("param", "s+")
        .with_default("city", "berlin")
        .with_default("language", "en")
        .with_hide_defaults(HideDefaults::All)
        .with_default_scheme(None)
}

#[allow(dead_code)]
pub fn standard_resolver() -> UrlTemplateResolver {
    UrlTemplateResolver::new(standard_config_data().build())
}

/// Single-country family with a fully optional path: language and city both
/// carry hidden defaults.
#[allow(dead_code)]
pub fn turkish_resolver() -> UrlTemplateResolver {
    UrlTemplateResolver::new(
        UrlTemplateConfigData::new()
            .with_host_template("{country}.test.com")
            .with_path_template("/{language}/{city}/")
            .with_pattern("country", "(tr)")
            .with_pattern("language", "(en|tr)")
            .with_pattern("city", "(istanbul|ankara)")
            .with_default("language", "tr")
            .with_default("city", "istanbul")
            .with_hide_defaults(HideDefaults::All)
            .with_default_scheme(None)
            .build(),
    )
}

/// Language default derived from the country, for pinning checks on
/// parameter updates.
#[allow(dead_code)]
pub fn computed_language_resolver() -> UrlTemplateResolver {
    UrlTemplateResolver::new(
        UrlTemplateConfigData::new()
            .with_host_template("{country}.test.com")
            .with_path_template("/{language}/")
            .with_pattern("country", "(tr|gb)")
            .with_pattern("language", "(en|tr|de)")
            .with_computed_default("language", |existing: &ParameterMap| {
                match existing.get("country").map(String::as_str) {
                    Some("tr") => Some("tr".to_string()),
                    Some("gb") => Some("en".to_string()),
                    _ => None,
                }
            })
            .with_hide_defaults(HideDefaults::All)
            .with_default_scheme(None)
            .build(),
    )
}

#[allow(dead_code)]
pub fn params(pairs: &[(&str, &str)]) -> ParameterMap {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
