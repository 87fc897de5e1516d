// Bidirectional url templating: match concrete urls against host and path
// templates with optional, default-carrying parameters, then render them back.

mod aliases;
mod combinations;
pub mod config;
pub mod decorator;
mod error;
mod matcher;
mod parsed;
pub mod part_template;
mod resolver;
pub mod text_template;
pub mod url_parts;

pub use config::{
    ConfigId, DefaultValue, HideDefaults, ParameterMap, ParameterRequirement, UrlTemplateConfig,
    UrlTemplateConfigData, YmlTemplateSettings,
};
pub use decorator::{ParameterDecorator, ValueReplaceDecorator, WrapperDecorator};
pub use error::{Result, UrlTemplateError};
pub use matcher::{CompiledExpression, ExpressionCache};
pub use parsed::ParsedUrlTemplate;
pub use resolver::{CompileScope, UrlTemplateResolver};
pub use url_parts::{UrlData, UrlPart};
