// Configuration: immutable template config, its editable data form, yml loading

mod config_data;
mod url_template_config;
mod yml_settings;

pub use config_data::UrlTemplateConfigData;
pub use url_template_config::{
    ConfigId, DefaultValue, HideDefaults, ParameterMap, ParameterRequirement, UrlTemplateConfig,
};
pub use yml_settings::{YmlDecorator, YmlHideDefaults, YmlRequirement, YmlTemplateSettings};
