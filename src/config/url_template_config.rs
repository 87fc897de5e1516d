// Template configuration: host/path templates, requirements, defaults

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::decorator::ParameterDecorator;
use crate::error::{Result, UrlTemplateError};
use crate::text_template;
use crate::url_parts::UrlPart;

/// Parameter name -> value mapping used throughout parsing and compilation.
pub type ParameterMap = HashMap<String, String>;

/// Constraint a parameter value must satisfy inside a url.
#[derive(Debug, Clone)]
pub enum ParameterRequirement {
    /// Raw regular expression fragment, used verbatim.
    Pattern(String),
    /// Closed list of accepted values, matched literally after decoration.
    OneOf(Vec<String>),
}

/// Default value of an optional parameter: fixed text, or derived from the
/// currently known values of the other parameters.
#[derive(Clone)]
pub enum DefaultValue {
    Literal(String),
    Computed(Arc<dyn Fn(&ParameterMap) -> Option<String> + Send + Sync>),
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            DefaultValue::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Which parameters are elided from urls while their value equals their
/// default.
#[derive(Debug, Clone, Default)]
pub enum HideDefaults {
    /// Every parameter that has a default.
    All,
    /// No elision, defaults are always spelled out.
    #[default]
    None,
    /// Exactly the listed names.
    Named(Vec<String>),
}

static NEXT_CONFIG_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of one configuration instance, used to key compiled expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfigId(u64);

impl ConfigId {
    fn next() -> Self {
        ConfigId(NEXT_CONFIG_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Immutable description of how urls of one site family are templated.
///
/// Holds the host and path templates with their placeholder requirements,
/// default values, elision rules and per-parameter decorators. Once built it
/// never changes; edits go through [`UrlTemplateConfigData`] and produce a
/// fresh configuration with a fresh [`ConfigId`].
///
/// [`UrlTemplateConfigData`]: crate::config::UrlTemplateConfigData
#[derive(Debug)]
pub struct UrlTemplateConfig {
    id: ConfigId,
    host_template: Option<String>,
    path_template: String,
    requirements: HashMap<String, ParameterRequirement>,
    defaults: HashMap<String, DefaultValue>,
    hidden: HashSet<String>,
    decorators: HashMap<String, Arc<dyn ParameterDecorator>>,
    default_scheme: Option<String>,
    allow_subdomains: bool,
    host_parameters: Vec<String>,
    path_parameters: Vec<String>,
}

impl UrlTemplateConfig {
    pub fn new(
        host_template: Option<&str>,
        path_template: Option<&str>,
        requirements: HashMap<String, ParameterRequirement>,
        defaults: HashMap<String, DefaultValue>,
        hide_defaults: HideDefaults,
    ) -> Self {
        let host_template = host_template.map(str::to_string);
        let path_template = normalize_path_template(path_template);
        let hidden = match hide_defaults {
            HideDefaults::All => defaults.keys().cloned().collect(),
            HideDefaults::None => HashSet::new(),
            HideDefaults::Named(names) => names.into_iter().collect(),
        };
        let host_parameters = host_template
            .as_deref()
            .map(text_template::parameter_names)
            .unwrap_or_default();
        let path_parameters = text_template::parameter_names(&path_template);
        Self {
            id: ConfigId::next(),
            host_template,
            path_template,
            requirements,
            defaults,
            hidden,
            decorators: HashMap::new(),
            default_scheme: None,
            allow_subdomains: true,
            host_parameters,
            path_parameters,
        }
    }

    pub fn with_decorator(
        mut self,
        name: impl Into<String>,
        decorator: impl ParameterDecorator + 'static,
    ) -> Self {
        self.decorators.insert(name.into(), Arc::new(decorator));
        self
    }

    pub(crate) fn with_decorators(
        mut self,
        decorators: HashMap<String, Arc<dyn ParameterDecorator>>,
    ) -> Self {
        self.decorators = decorators;
        self
    }

    pub fn with_default_scheme(mut self, scheme: Option<&str>) -> Self {
        self.default_scheme = scheme.map(str::to_string);
        self
    }

    /// Whether extra leading subdomains may precede the host template.
    /// Enabled by default; matched prefixes survive into the patterned host.
    pub fn with_allow_subdomains(mut self, allow: bool) -> Self {
        self.allow_subdomains = allow;
        self
    }

    pub fn id(&self) -> ConfigId {
        self.id
    }

    pub fn host_template(&self) -> Option<&str> {
        self.host_template.as_deref()
    }

    /// Path template, normalized to `/segments/` form (at least `/`).
    pub fn path_template(&self) -> &str {
        &self.path_template
    }

    pub fn part_template(&self, part: UrlPart) -> Option<&str> {
        match part {
            UrlPart::Host => self.host_template(),
            UrlPart::Path => Some(self.path_template()),
        }
    }

    /// Placeholder names of one part, in template order.
    pub fn parameters(&self, part: UrlPart) -> &[String] {
        match part {
            UrlPart::Host => &self.host_parameters,
            UrlPart::Path => &self.path_parameters,
        }
    }

    /// Host placeholders followed by path placeholders.
    pub fn all_parameters(&self) -> impl Iterator<Item = &String> {
        self.host_parameters.iter().chain(self.path_parameters.iter())
    }

    /// A parameter without a default value must appear in every url.
    pub fn is_required(&self, name: &str) -> bool {
        !self.defaults.contains_key(name)
    }

    pub fn requirement(&self, name: &str) -> Option<&ParameterRequirement> {
        self.requirements.get(name)
    }

    pub(crate) fn requirements(&self) -> &HashMap<String, ParameterRequirement> {
        &self.requirements
    }

    pub(crate) fn defaults(&self) -> &HashMap<String, DefaultValue> {
        &self.defaults
    }

    pub(crate) fn decorators(&self) -> &HashMap<String, Arc<dyn ParameterDecorator>> {
        &self.decorators
    }

    /// The regex fragment a parameter must match. Whitelists are decorated,
    /// escaped and joined into one alternation.
    pub fn requirement_expression(&self, name: &str) -> Result<String> {
        let requirement = self.requirements.get(name).ok_or_else(|| {
            UrlTemplateError::Configuration(format!(
                "no requirement defined for parameter \"{name}\""
            ))
        })?;
        Ok(match requirement {
            ParameterRequirement::Pattern(pattern) => pattern.clone(),
            ParameterRequirement::OneOf(values) => {
                let decorated: Vec<String> = values
                    .iter()
                    .map(|value| regex::escape(&self.decorate_value(name, value)))
                    .collect();
                format!("({})", decorated.join("|"))
            }
        })
    }

    pub fn has_default(&self, name: &str) -> bool {
        self.defaults.contains_key(name)
    }

    /// All defaults resolved against the currently known values. Computed
    /// defaults that decline to produce a value are left out.
    pub fn default_values(&self, existing: &ParameterMap) -> ParameterMap {
        let mut values = ParameterMap::new();
        for (name, default) in &self.defaults {
            if let Some(value) = resolve_default(default, existing) {
                values.insert(name.clone(), value);
            }
        }
        values
    }

    /// One default resolved against the currently known values.
    pub fn default_value(&self, name: &str, existing: &ParameterMap) -> Result<Option<String>> {
        match self.defaults.get(name) {
            Some(default) => Ok(resolve_default(default, existing)),
            None => Err(UrlTemplateError::InvalidDefaultName(name.to_string())),
        }
    }

    pub fn hidden_parameters(&self) -> &HashSet<String> {
        &self.hidden
    }

    pub fn is_hidden(&self, name: &str) -> bool {
        self.hidden.contains(name)
    }

    pub fn decorator(&self, name: &str) -> Option<&Arc<dyn ParameterDecorator>> {
        self.decorators.get(name)
    }

    /// Stored form -> url form.
    pub fn decorate_value(&self, name: &str, value: &str) -> String {
        match self.decorators.get(name) {
            Some(decorator) => decorator.generate(value),
            None => value.to_string(),
        }
    }

    /// Url form -> stored form.
    pub fn undecorate_value(&self, name: &str, value: &str) -> String {
        match self.decorators.get(name) {
            Some(decorator) => decorator.parse(value),
            None => value.to_string(),
        }
    }

    pub fn default_scheme(&self) -> Option<&str> {
        self.default_scheme.as_deref()
    }

    pub fn allow_subdomains(&self) -> bool {
        self.allow_subdomains
    }
}

fn resolve_default(default: &DefaultValue, existing: &ParameterMap) -> Option<String> {
    match default {
        DefaultValue::Literal(value) => Some(value.clone()),
        DefaultValue::Computed(derive) => derive(existing),
    }
}

fn normalize_path_template(template: Option<&str>) -> String {
    let trimmed = template.unwrap_or("").trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}
