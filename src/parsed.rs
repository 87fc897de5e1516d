// A matched url: template skeletons, known values, leftover url data

use std::sync::Arc;

use crate::config::{ParameterMap, UrlTemplateConfig};
use crate::url_parts::UrlData;

/// The result of matching (or generating) one url against a configuration.
///
/// `patterned_host` and `patterned_path` are the template skeletons actually
/// in effect for this url, still carrying `{name}` tokens; surrounding free
/// text the template did not claim (extra subdomains, trailing path) stays in
/// them verbatim. `own_parameters` holds only explicitly known values; full
/// and hidden views are recomputed on demand so that computed defaults always
/// see the current values.
#[derive(Debug, Clone)]
pub struct ParsedUrlTemplate {
    patterned_host: String,
    patterned_path: String,
    own_parameters: ParameterMap,
    config: Arc<UrlTemplateConfig>,
    additional_url_data: UrlData,
}

impl ParsedUrlTemplate {
    pub fn new(
        patterned_host: impl Into<String>,
        patterned_path: impl Into<String>,
        own_parameters: ParameterMap,
        config: Arc<UrlTemplateConfig>,
        mut additional_url_data: UrlData,
    ) -> Self {
        // host and path live in the patterned fields, not in the extras
        additional_url_data.host = None;
        additional_url_data.path = None;
        Self {
            patterned_host: patterned_host.into(),
            patterned_path: patterned_path.into(),
            own_parameters,
            config,
            additional_url_data,
        }
    }

    pub fn patterned_host(&self) -> &str {
        &self.patterned_host
    }

    pub fn patterned_path(&self) -> &str {
        &self.patterned_path
    }

    pub fn config(&self) -> &Arc<UrlTemplateConfig> {
        &self.config
    }

    /// Scheme, user, port, query and fragment of the original url.
    pub fn additional_url_data(&self) -> &UrlData {
        &self.additional_url_data
    }

    pub fn own_parameters(&self) -> &ParameterMap {
        &self.own_parameters
    }

    /// Live defaults resolved against the current own values.
    pub fn default_parameters(&self) -> ParameterMap {
        self.config.default_values(&self.own_parameters)
    }

    /// Own values overlaid on the defaults, which are resolved against the
    /// own values first.
    pub fn full_parameters(&self) -> ParameterMap {
        let mut full = self.config.default_values(&self.own_parameters);
        for (name, value) in &self.own_parameters {
            full.insert(name.clone(), value.clone());
        }
        full
    }

    pub fn parameter(&self, name: &str) -> Option<String> {
        self.full_parameters().remove(name)
    }

    /// Full values with every decorator's url-side form applied.
    pub fn decorated_full_parameters(&self) -> ParameterMap {
        self.full_parameters()
            .into_iter()
            .map(|(name, value)| {
                let decorated = self.config.decorate_value(&name, &value);
                (name, decorated)
            })
            .collect()
    }

    /// Names marked hidden whose effective value currently equals their
    /// live default. A hidden name with neither a value nor a default also
    /// counts, so its stray token is dropped at compile time.
    pub fn actual_hidden_parameters(&self) -> Vec<String> {
        let full = self.full_parameters();
        let defaults = self.config.default_values(&self.own_parameters);
        let mut hidden: Vec<String> = self
            .config
            .hidden_parameters()
            .iter()
            .filter(|name| full.get(*name) == defaults.get(*name))
            .cloned()
            .collect();
        hidden.sort();
        hidden
    }

    /// Own values that currently equal their live default.
    pub fn own_default_parameters(&self) -> ParameterMap {
        let defaults = self.default_parameters();
        self.own_parameters
            .iter()
            .filter(|(name, value)| defaults.get(*name) == Some(*value))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// Own values that merely repeat the live default of a hidden name; the
    /// url would compile identically without them.
    pub fn excessive_own_parameters(&self) -> ParameterMap {
        self.own_default_parameters()
            .into_iter()
            .filter(|(name, _)| self.config.is_hidden(name))
            .collect()
    }

    /// Sets one value, first freezing every live default into the own
    /// values so the others keep their current meaning even when this
    /// change would shift a computed default.
    pub fn set_parameter(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pin_default_values();
        self.own_parameters.insert(name.into(), value.into());
    }

    /// Replaces the own values wholesale; defaults stay floating.
    pub fn set_parameters(&mut self, parameters: ParameterMap) {
        self.own_parameters = parameters;
    }

    /// Removes one value, pinning live defaults first as in
    /// [`set_parameter`](Self::set_parameter).
    pub fn unset_parameter(&mut self, name: &str) {
        self.pin_default_values();
        self.own_parameters.remove(name);
    }

    fn pin_default_values(&mut self) {
        let defaults = self.config.default_values(&self.own_parameters);
        for (name, value) in defaults {
            self.own_parameters.entry(name).or_insert(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HideDefaults, UrlTemplateConfigData};

    fn config() -> Arc<UrlTemplateConfig> {
        Arc::new(
            UrlTemplateConfigData::new()
                .with_host_template("{country}.test.com")
                .with_path_template("/{language}/")
                .with_pattern("country", "(tr|gb)")
                .with_pattern("language", "(en|tr|de)")
                .with_computed_default("language", |existing| {
                    match existing.get("country").map(String::as_str) {
                        Some("tr") => Some("tr".to_string()),
                        Some("gb") => Some("en".to_string()),
                        _ => None,
                    }
                })
                .with_hide_defaults(HideDefaults::All)
                .build(),
        )
    }

    fn parsed(own: &[(&str, &str)]) -> ParsedUrlTemplate {
        let own = own
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        ParsedUrlTemplate::new(
            "{country}.test.com",
            "/{language}/tt/",
            own,
            config(),
            UrlData::default(),
        )
    }

    #[test]
    fn test_full_parameters_resolve_computed_defaults() {
        let parsed = parsed(&[("country", "tr")]);
        assert_eq!(parsed.parameter("language").as_deref(), Some("tr"));
        assert_eq!(parsed.parameter("country").as_deref(), Some("tr"));
        assert_eq!(parsed.parameter("missing"), None);
    }

    #[test]
    fn test_actual_hidden_tracks_live_default() {
        let parsed = parsed(&[("country", "tr")]);
        assert_eq!(parsed.actual_hidden_parameters(), ["language"]);

        let parsed = self::parsed(&[("country", "tr"), ("language", "de")]);
        assert!(parsed.actual_hidden_parameters().is_empty());
    }

    #[test]
    fn test_set_parameter_pins_defaults_before_the_change() {
        let mut parsed = parsed(&[("country", "tr")]);
        parsed.set_parameter("country", "gb");
        // the language default resolved under tr stays pinned
        assert_eq!(parsed.parameter("language").as_deref(), Some("tr"));
        assert!(parsed.actual_hidden_parameters().is_empty());
    }

    #[test]
    fn test_set_parameters_replaces_wholesale() {
        let mut parsed = parsed(&[("country", "tr"), ("language", "de")]);
        parsed.set_parameters(ParameterMap::from([(
            "country".to_string(),
            "gb".to_string(),
        )]));
        assert_eq!(parsed.parameter("language").as_deref(), Some("en"));
    }

    #[test]
    fn test_unset_parameter_pins_then_removes() {
        let mut parsed = parsed(&[("country", "tr"), ("language", "de")]);
        parsed.unset_parameter("language");
        assert_eq!(parsed.parameter("language").as_deref(), Some("tr"));
        assert_eq!(parsed.own_parameters().get("language"), None);
    }

    #[test]
    fn test_excessive_own_parameters() {
        let parsed = parsed(&[("country", "tr"), ("language", "tr")]);
        let excessive = parsed.excessive_own_parameters();
        assert_eq!(excessive.len(), 1);
        assert_eq!(excessive.get("language").map(String::as_str), Some("tr"));
    }

    #[test]
    fn test_own_default_parameters_track_live_defaults() {
        let parsed = parsed(&[("country", "tr"), ("language", "tr")]);
        let own_defaults = parsed.own_default_parameters();
        assert_eq!(own_defaults.len(), 1);
        assert_eq!(own_defaults.get("language").map(String::as_str), Some("tr"));
        assert_eq!(
            parsed.default_parameters().get("language").map(String::as_str),
            Some("tr")
        );
    }

    #[test]
    fn test_construction_strips_host_and_path_extras() {
        let url_data = UrlData::split("https://tr.test.com/tt/?s=1");
        let parsed = ParsedUrlTemplate::new(
            "{country}.test.com",
            "/tt/",
            ParameterMap::new(),
            config(),
            url_data,
        );
        assert_eq!(parsed.additional_url_data().host, None);
        assert_eq!(parsed.additional_url_data().path, None);
        assert_eq!(parsed.additional_url_data().query.as_deref(), Some("s=1"));
    }
}
