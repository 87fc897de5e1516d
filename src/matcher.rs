// Regex synthesis and caching for host and path templates

use std::collections::HashMap;
use std::ops::Range;
use std::sync::{Arc, RwLock};

use regex::Regex;
use tracing::{debug, trace};

use crate::aliases::AliasAllocator;
use crate::combinations::optionality_combinations;
use crate::config::{ConfigId, UrlTemplateConfig};
use crate::error::Result;
use crate::text_template::{self, TemplatePiece};
use crate::url_parts::UrlPart;

/// A synthesized part expression together with the capture aliases it binds.
///
/// The template is split into namespaces on the part delimiter; every
/// namespace becomes an alternation over its optionality combinations, each
/// present alternative terminated by `(delimiter|$)`. Paths are anchored at
/// the start; hosts are anchored at the end, and additionally at the start
/// when the configuration disallows extra subdomains.
#[derive(Debug)]
pub struct CompiledExpression {
    regex: Regex,
    aliases: AliasAllocator,
    parameter_names: Vec<String>,
}

impl CompiledExpression {
    /// Matches a url part and returns the matched span plus the captured
    /// parameter values, still in their decorated url form.
    pub fn match_part(&self, part_text: &str) -> Option<(Range<usize>, Vec<(String, String)>)> {
        trace!(text = %part_text, expression = %self.regex.as_str(), "matching url part");
        let captures = self.regex.captures(part_text)?;
        let span = captures
            .get(0)
            .map(|full| full.start()..full.end())
            .unwrap_or(0..0);
        let mut values = Vec::new();
        for name in &self.parameter_names {
            if let Some(value) = self.aliases.resolve(name, &captures) {
                values.push((name.clone(), value.to_string()));
            }
        }
        Some((span, values))
    }

    /// The synthesized expression text.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Builds the expression for one part template under one configuration.
pub fn build_expression(
    config: &UrlTemplateConfig,
    part: UrlPart,
    template: &str,
) -> Result<CompiledExpression> {
    let delimiter = part.delimiter();
    let escaped_delimiter = regex::escape(&delimiter.to_string());
    let terminator = format!("({escaped_delimiter}|$)");
    let mut aliases = AliasAllocator::new();

    let mut elements: Vec<String> = Vec::new();
    if part == UrlPart::Path {
        // a path expression always starts at the leading slash
        elements.push(escaped_delimiter.clone());
    }
    for namespace in template.split(delimiter).filter(|chunk| !chunk.is_empty()) {
        elements.push(namespace_expression(
            config,
            namespace,
            &terminator,
            &mut aliases,
        )?);
    }

    let body = elements.concat();
    let expression = match part {
        UrlPart::Path => format!("^{body}"),
        UrlPart::Host if config.allow_subdomains() => format!("{body}$"),
        UrlPart::Host => format!("^{body}$"),
    };
    debug!(?part, %expression, "synthesized part expression");
    let regex = Regex::new(&expression)?;
    let parameter_names = text_template::parameter_names(template);
    Ok(CompiledExpression {
        regex,
        aliases,
        parameter_names,
    })
}

fn namespace_expression(
    config: &UrlTemplateConfig,
    namespace: &str,
    terminator: &str,
    aliases: &mut AliasAllocator,
) -> Result<String> {
    let names: Vec<&str> = text_template::pieces(namespace)
        .filter_map(|piece| match piece {
            TemplatePiece::Parameter(name) => Some(name),
            TemplatePiece::Literal(_) => None,
        })
        .collect();
    if names.is_empty() {
        return Ok(format!("({}{terminator})", regex::escape(namespace)));
    }

    let combinations = optionality_combinations(&names, config.hidden_parameters())?;
    let mut alternatives = Vec::with_capacity(combinations.len());
    for combination in &combinations {
        if combination.is_empty() {
            // a fully omitted namespace matches as nothing at all
            alternatives.push(String::new());
            continue;
        }
        let expression = combination_expression(config, namespace, combination, aliases)?;
        alternatives.push(format!("({expression}{terminator})"));
    }
    if alternatives.len() == 1 {
        Ok(alternatives.pop().unwrap_or_default())
    } else {
        Ok(format!("({})", alternatives.join("|")))
    }
}

fn combination_expression(
    config: &UrlTemplateConfig,
    namespace: &str,
    combination: &[&str],
    aliases: &mut AliasAllocator,
) -> Result<String> {
    let mut expression = String::new();
    for piece in text_template::pieces(namespace) {
        match piece {
            TemplatePiece::Literal(literal) => expression.push_str(&regex::escape(literal)),
            TemplatePiece::Parameter(name) => {
                if !combination.contains(&name) {
                    continue;
                }
                let requirement = config.requirement_expression(name)?;
                let alias = aliases.issue(name);
                expression.push_str("(?P<");
                expression.push_str(&alias);
                expression.push('>');
                expression.push_str(&requirement);
                expression.push(')');
            }
        }
    }
    Ok(expression)
}

type CacheKey = (ConfigId, UrlPart, String);

/// Compile-once cache of part expressions, keyed by configuration identity,
/// part kind and template text. Synthesis is pure, so a racing miss at worst
/// builds the same expression twice and keeps the first.
#[derive(Debug, Default)]
pub struct ExpressionCache {
    expressions: RwLock<HashMap<CacheKey, Arc<CompiledExpression>>>,
}

impl ExpressionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expression(
        &self,
        config: &UrlTemplateConfig,
        part: UrlPart,
        template: &str,
    ) -> Result<Arc<CompiledExpression>> {
        let key = (config.id(), part, template.to_string());
        {
            let expressions = self
                .expressions
                .read()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(expression) = expressions.get(&key) {
                return Ok(Arc::clone(expression));
            }
        }
        let expression = Arc::new(build_expression(config, part, template)?);
        let mut expressions = self
            .expressions
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(Arc::clone(expressions.entry(key).or_insert(expression)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HideDefaults, UrlTemplateConfigData};

    fn host_config(allow_subdomains: bool) -> UrlTemplateConfig {
        UrlTemplateConfigData::new()
            .with_host_template("{country}.{city}.test.com")
            .with_pattern("country", "(uk|ua|gb|pl)")
            .with_pattern("city", "(kiev|berlin|paris|london)")
            .with_default("city", "berlin")
            .with_hide_defaults(HideDefaults::All)
            .with_allow_subdomains(allow_subdomains)
            .build()
    }

    #[test]
    fn test_host_expression_shape() {
        let config = host_config(true);
        let expression =
            build_expression(&config, UrlPart::Host, "{country}.{city}.test.com").unwrap();
        assert_eq!(
            expression.as_str(),
            "((?P<country_0>(uk|ua|gb|pl))(\\.|$))\
             (((?P<city_1>(kiev|berlin|paris|london))(\\.|$))|)\
             (test(\\.|$))(com(\\.|$))$"
        );
    }

    #[test]
    fn test_host_anchoring_follows_subdomain_setting() {
        let allowing = build_expression(&host_config(true), UrlPart::Host, "{country}.test.com");
        assert!(allowing.unwrap().as_str().ends_with('$'));
        let strict =
            build_expression(&host_config(false), UrlPart::Host, "{country}.test.com").unwrap();
        assert!(strict.as_str().starts_with('^'));
        assert!(strict.as_str().ends_with('$'));
    }

    #[test]
    fn test_path_expression_matches_with_omitted_optionals() {
        let config = UrlTemplateConfigData::new()
            .with_path_template("/{language}/{param}/some-path-prefix/")
            .with_pattern("language", "[a-z]{2}")
            .with_pattern("param", "s+")
            .with_default("language", "en")
            .with_hide_defaults(HideDefaults::All)
            .build();
        let expression = build_expression(
            &config,
            UrlPart::Path,
            "/{language}/{param}/some-path-prefix/",
        )
        .unwrap();

        let (span, values) = expression
            .match_part("/ssss/some-path-prefix/what/")
            .unwrap();
        assert_eq!(span, 0.."/ssss/some-path-prefix/".len());
        assert_eq!(
            values,
            vec![("param".to_string(), "ssss".to_string())]
        );

        let (_, values) = expression
            .match_part("/de/ssss/some-path-prefix/")
            .unwrap();
        assert_eq!(values.len(), 2);
        assert!(expression.match_part("/1x/some-path-prefix/").is_none());
    }

    #[test]
    fn test_shared_namespace_combinations_with_static_text() {
        let config = UrlTemplateConfigData::new()
            .with_path_template("/{country}{language}-{param}/")
            .with_pattern("country", "(tr|gb)")
            .with_pattern("language", "(-en|-tr|-de)")
            .with_pattern("param", "[a-z]{2}")
            .with_default("language", "en")
            .with_hide_defaults(HideDefaults::All)
            .build();
        let expression =
            build_expression(&config, UrlPart::Path, "/{country}{language}-{param}/").unwrap();

        let (_, values) = expression.match_part("/gb-de-ss/tt/").unwrap();
        let values: std::collections::HashMap<_, _> = values.into_iter().collect();
        assert_eq!(values.get("language").map(String::as_str), Some("-de"));
        assert_eq!(values.get("param").map(String::as_str), Some("ss"));

        // language omitted, the static dash still separates country and param
        let (_, values) = expression.match_part("/gb-ss/tt/").unwrap();
        let values: std::collections::HashMap<_, _> = values.into_iter().collect();
        assert_eq!(values.get("language"), None);
        assert_eq!(values.get("param").map(String::as_str), Some("ss"));
    }

    #[test]
    fn test_cache_reuses_compiled_expressions() {
        let config = host_config(true);
        let cache = ExpressionCache::new();
        let first = cache
            .expression(&config, UrlPart::Host, "{country}.{city}.test.com")
            .unwrap();
        let second = cache
            .expression(&config, UrlPart::Host, "{country}.{city}.test.com")
            .unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
