// Yaml file shape of a template configuration

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::config_data::UrlTemplateConfigData;
use crate::config::url_template_config::{HideDefaults, ParameterRequirement};
use crate::decorator::{ValueReplaceDecorator, WrapperDecorator};
use crate::error::{Result, UrlTemplateError};

/// One template configuration as written in a yaml settings file.
///
/// Computed defaults are code, not data, so the file format only carries
/// literal defaults; attach computed ones on the produced
/// [`UrlTemplateConfigData`] afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct YmlTemplateSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub requirements: HashMap<String, YmlRequirement>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub defaults: HashMap<String, String>,
    #[serde(default)]
    pub hide_defaults: YmlHideDefaults,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub decorators: HashMap<String, YmlDecorator>,
    #[serde(default = "default_scheme_https")]
    pub default_scheme: Option<String>,
    #[serde(default = "default_allow_subdomains")]
    pub allow_subdomains: bool,
}

fn default_scheme_https() -> Option<String> {
    Some("https".to_string())
}

fn default_allow_subdomains() -> bool {
    true
}

/// Requirement notation: a bare string is a regex pattern, a sequence is a
/// whitelist of accepted values.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum YmlRequirement {
    Pattern(String),
    OneOf(Vec<String>),
}

/// Elision notation: `true`, `false`, or a list of parameter names.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum YmlHideDefaults {
    All(bool),
    Named(Vec<String>),
}

impl Default for YmlHideDefaults {
    fn default() -> Self {
        YmlHideDefaults::All(false)
    }
}

/// Decorator notation, tagged by kind.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum YmlDecorator {
    Wrapper {
        #[serde(default)]
        prefix: String,
        #[serde(default)]
        postfix: String,
    },
    ValueReplace {
        values: HashMap<String, String>,
    },
}

impl YmlTemplateSettings {
    pub fn from_yml_str(contents: &str) -> Result<Self> {
        serde_yaml::from_str(contents)
            .map_err(|err| UrlTemplateError::Configuration(format!("invalid yml settings: {err}")))
    }

    pub fn from_yml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|err| {
            UrlTemplateError::Configuration(format!(
                "cannot read settings file {}: {err}",
                path.display()
            ))
        })?;
        debug!(path = %path.display(), "loading template settings");
        Self::from_yml_str(&contents)
    }
}

impl From<YmlRequirement> for ParameterRequirement {
    fn from(requirement: YmlRequirement) -> Self {
        match requirement {
            YmlRequirement::Pattern(pattern) => ParameterRequirement::Pattern(pattern),
            YmlRequirement::OneOf(values) => ParameterRequirement::OneOf(values),
        }
    }
}

impl From<YmlHideDefaults> for HideDefaults {
    fn from(hide: YmlHideDefaults) -> Self {
        match hide {
            YmlHideDefaults::All(true) => HideDefaults::All,
            YmlHideDefaults::All(false) => HideDefaults::None,
            YmlHideDefaults::Named(names) => HideDefaults::Named(names),
        }
    }
}

impl From<YmlTemplateSettings> for UrlTemplateConfigData {
    fn from(settings: YmlTemplateSettings) -> Self {
        let mut data = UrlTemplateConfigData::new()
            .with_hide_defaults(settings.hide_defaults.into())
            .with_default_scheme(settings.default_scheme.as_deref())
            .with_allow_subdomains(settings.allow_subdomains);
        if let Some(host) = settings.host {
            data = data.with_host_template(host);
        }
        if let Some(path) = settings.path {
            data = data.with_path_template(path);
        }
        for (name, requirement) in settings.requirements {
            data = data.with_requirement(name, requirement.into());
        }
        for (name, value) in settings.defaults {
            data = data.with_default(name, value);
        }
        for (name, decorator) in settings.decorators {
            data = match decorator {
                YmlDecorator::Wrapper { prefix, postfix } => {
                    data.with_decorator(name, WrapperDecorator::new(prefix, postfix))
                }
                YmlDecorator::ValueReplace { values } => {
                    data.with_decorator(name, ValueReplaceDecorator::new(values))
                }
            };
        }
        data
    }
}
