// Editable bag of template settings, built into an immutable config

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::url_template_config::{
    DefaultValue, HideDefaults, ParameterMap, ParameterRequirement, UrlTemplateConfig,
};
use crate::decorator::ParameterDecorator;

/// Mutable counterpart of [`UrlTemplateConfig`].
///
/// Collects settings through chained `with_*` calls and produces a fresh
/// immutable configuration with [`build`]. Cloning the data, editing the
/// clone and rebuilding leaves configurations already handed out untouched.
///
/// [`build`]: UrlTemplateConfigData::build
#[derive(Debug, Clone)]
pub struct UrlTemplateConfigData {
    host_template: Option<String>,
    path_template: Option<String>,
    requirements: HashMap<String, ParameterRequirement>,
    defaults: HashMap<String, DefaultValue>,
    hide_defaults: HideDefaults,
    decorators: HashMap<String, Arc<dyn ParameterDecorator>>,
    default_scheme: Option<String>,
    allow_subdomains: bool,
}

impl Default for UrlTemplateConfigData {
    fn default() -> Self {
        Self {
            host_template: None,
            path_template: None,
            requirements: HashMap::new(),
            defaults: HashMap::new(),
            hide_defaults: HideDefaults::None,
            decorators: HashMap::new(),
            default_scheme: Some("https".to_string()),
            allow_subdomains: true,
        }
    }
}

impl UrlTemplateConfigData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Editable copy of an existing configuration's settings. Rebuilding
    /// produces an independent configuration; resolvers already holding the
    /// old one keep their behavior.
    pub fn from_config(config: &UrlTemplateConfig) -> Self {
        let mut hidden: Vec<String> = config.hidden_parameters().iter().cloned().collect();
        hidden.sort();
        Self {
            host_template: config.host_template().map(str::to_string),
            path_template: Some(config.path_template().to_string()),
            requirements: config.requirements().clone(),
            defaults: config.defaults().clone(),
            hide_defaults: HideDefaults::Named(hidden),
            decorators: config.decorators().clone(),
            default_scheme: config.default_scheme().map(str::to_string),
            allow_subdomains: config.allow_subdomains(),
        }
    }

    pub fn with_host_template(mut self, template: impl Into<String>) -> Self {
        self.host_template = Some(template.into());
        self
    }

    pub fn with_path_template(mut self, template: impl Into<String>) -> Self {
        self.path_template = Some(template.into());
        self
    }

    pub fn with_requirement(
        mut self,
        name: impl Into<String>,
        requirement: ParameterRequirement,
    ) -> Self {
        self.requirements.insert(name.into(), requirement);
        self
    }

    /// Shorthand for a [`ParameterRequirement::Pattern`] requirement.
    pub fn with_pattern(self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.with_requirement(name, ParameterRequirement::Pattern(pattern.into()))
    }

    /// Shorthand for a [`ParameterRequirement::OneOf`] whitelist.
    pub fn with_one_of(self, name: impl Into<String>, values: &[&str]) -> Self {
        self.with_requirement(
            name,
            ParameterRequirement::OneOf(values.iter().map(|value| value.to_string()).collect()),
        )
    }

    pub fn with_default(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults
            .insert(name.into(), DefaultValue::Literal(value.into()));
        self
    }

    pub fn with_computed_default(
        mut self,
        name: impl Into<String>,
        derive: impl Fn(&ParameterMap) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.defaults
            .insert(name.into(), DefaultValue::Computed(Arc::new(derive)));
        self
    }

    pub fn with_hide_defaults(mut self, hide_defaults: HideDefaults) -> Self {
        self.hide_defaults = hide_defaults;
        self
    }

    pub fn with_decorator(
        mut self,
        name: impl Into<String>,
        decorator: impl ParameterDecorator + 'static,
    ) -> Self {
        self.decorators.insert(name.into(), Arc::new(decorator));
        self
    }

    /// `None` disables scheme defaulting; the initial value is `https`.
    pub fn with_default_scheme(mut self, scheme: Option<&str>) -> Self {
        self.default_scheme = scheme.map(str::to_string);
        self
    }

    pub fn with_allow_subdomains(mut self, allow: bool) -> Self {
        self.allow_subdomains = allow;
        self
    }

    pub fn host_template(&self) -> Option<&str> {
        self.host_template.as_deref()
    }

    pub fn path_template(&self) -> Option<&str> {
        self.path_template.as_deref()
    }

    pub fn build(self) -> UrlTemplateConfig {
        UrlTemplateConfig::new(
            self.host_template.as_deref(),
            self.path_template.as_deref(),
            self.requirements,
            self.defaults,
            self.hide_defaults,
        )
        .with_decorators(self.decorators)
        .with_default_scheme(self.default_scheme.as_deref())
        .with_allow_subdomains(self.allow_subdomains)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url_parts::UrlPart;

    #[test]
    fn test_build_carries_every_setting() {
        let config = UrlTemplateConfigData::new()
            .with_host_template("{country}.test.com")
            .with_path_template("/{language}/")
            .with_pattern("country", "(tr|gb)")
            .with_one_of("language", &["en", "tr"])
            .with_default("language", "en")
            .with_hide_defaults(HideDefaults::All)
            .with_default_scheme(Some("http"))
            .with_allow_subdomains(false)
            .build();

        assert_eq!(config.host_template(), Some("{country}.test.com"));
        assert_eq!(config.path_template(), "/{language}/");
        assert_eq!(config.parameters(UrlPart::Host), ["country"]);
        assert!(config.is_hidden("language"));
        assert_eq!(config.default_scheme(), Some("http"));
        assert!(!config.allow_subdomains());
    }

    #[test]
    fn test_defaults_of_the_builder_itself() {
        let config = UrlTemplateConfigData::new().build();
        assert_eq!(config.host_template(), None);
        assert_eq!(config.path_template(), "/");
        assert_eq!(config.default_scheme(), Some("https"));
        assert!(config.allow_subdomains());
    }

    #[test]
    fn test_rebuilding_gets_a_fresh_identity() {
        let data = UrlTemplateConfigData::new().with_path_template("/{x}/");
        let first = data.clone().build();
        let second = data.build();
        assert_ne!(first.id(), second.id());
    }
}
