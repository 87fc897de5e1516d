// Facade over parsing, compilation, generation, simplification, validation

mod compiler;
mod generator;
mod parser;
mod simplifier;
mod validator;

pub use compiler::CompileScope;

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::{ParameterMap, UrlTemplateConfig};
use crate::error::Result;
use crate::matcher::ExpressionCache;
use crate::parsed::ParsedUrlTemplate;
use crate::url_parts::UrlData;

/// Parses urls of one configured site family and renders them back.
///
/// Owns the compiled-expression cache, so reusing a resolver across many urls
/// amortizes regex synthesis. All methods take `&self`; a resolver can be
/// shared between threads as is.
#[derive(Debug)]
pub struct UrlTemplateResolver {
    config: Arc<UrlTemplateConfig>,
    cache: ExpressionCache,
}

impl UrlTemplateResolver {
    pub fn new(config: UrlTemplateConfig) -> Self {
        Self::with_shared_config(Arc::new(config))
    }

    pub fn with_shared_config(config: Arc<UrlTemplateConfig>) -> Self {
        Self {
            config,
            cache: ExpressionCache::new(),
        }
    }

    pub fn config(&self) -> &Arc<UrlTemplateConfig> {
        &self.config
    }

    /// Matches a compiled url against the configured templates and extracts
    /// its parameter values.
    pub fn parse_compiled_url(&self, compiled_url: &str) -> Result<ParsedUrlTemplate> {
        parser::parse_compiled_url(&self.config, &self.cache, compiled_url)
    }

    /// Renders a parsed template back into a full url.
    pub fn compile_url(&self, parsed: &ParsedUrlTemplate) -> Result<String> {
        compiler::compile_url(parsed, CompileScope::All)
    }

    /// Renders only the requested portion of the url.
    pub fn compile_url_part(&self, parsed: &ParsedUrlTemplate, scope: CompileScope) -> Result<String> {
        compiler::compile_url(parsed, scope)
    }

    /// Grafts the configured template grammar onto a simplified url, trusting
    /// the supplied parameter values as given.
    pub fn generate_parsed_url_template(
        &self,
        simplified_url: &str,
        parameters: ParameterMap,
    ) -> ParsedUrlTemplate {
        generator::generate_parsed_url_template(&self.config, simplified_url, parameters)
    }

    /// Url data with the template text stripped back out of host and path.
    pub fn simplified_url_data(&self, parsed: &ParsedUrlTemplate) -> UrlData {
        simplifier::simplified_url_data(parsed)
    }

    /// Diagnostic re-check of a parsed template against its configuration.
    /// Returns one message per offending parameter, keyed by name.
    pub fn validate_parsed_url_template(
        &self,
        parsed: &ParsedUrlTemplate,
    ) -> HashMap<String, String> {
        validator::validate_parsed_url_template(parsed)
    }
}
