// Matching compiled urls against the configured templates

use std::sync::Arc;

use crate::config::{ParameterMap, UrlTemplateConfig};
use crate::error::{Result, UrlTemplateError};
use crate::matcher::ExpressionCache;
use crate::parsed::ParsedUrlTemplate;
use crate::url_parts::{UrlData, UrlPart};

/// Splits a compiled url and matches host and path against their templates,
/// producing the patterned texts and the extracted parameter values.
pub(crate) fn parse_compiled_url(
    config: &Arc<UrlTemplateConfig>,
    cache: &ExpressionCache,
    compiled_url: &str,
) -> Result<ParsedUrlTemplate> {
    let url_data = UrlData::split(compiled_url);

    let (patterned_host, host_values) =
        resolve_part(config, cache, UrlPart::Host, url_data.host.as_deref())?;
    let (patterned_path, path_values) =
        resolve_part(config, cache, UrlPart::Path, url_data.path.as_deref())?;

    // host values win when both parts bind the same name
    let mut parameters = host_values;
    for (name, value) in path_values {
        parameters.entry(name).or_insert(value);
    }

    Ok(ParsedUrlTemplate::new(
        patterned_host,
        patterned_path,
        parameters,
        Arc::clone(config),
        url_data,
    ))
}

/// One part: an absent url part is trivially empty, a placeholder-free
/// template is checked literally, anything else goes through the matcher.
/// The matched span is replaced by the template text, so free prefixes
/// (extra subdomains) and suffixes (trailing path) survive verbatim.
fn resolve_part(
    config: &Arc<UrlTemplateConfig>,
    cache: &ExpressionCache,
    part: UrlPart,
    part_text: Option<&str>,
) -> Result<(String, ParameterMap)> {
    let part_text = match part_text {
        Some(text) if !text.is_empty() => text,
        _ => return Ok((String::new(), ParameterMap::new())),
    };

    if config.parameters(part).is_empty() {
        check_static_template(config, part, part_text)?;
        return Ok((part_text.to_string(), ParameterMap::new()));
    }
    let template = match config.part_template(part) {
        Some(template) => template,
        None => return Ok((part_text.to_string(), ParameterMap::new())),
    };

    let expression = cache.expression(config, part, template)?;
    let (span, raw_values) = expression.match_part(part_text).ok_or_else(|| {
        UrlTemplateError::InvalidUrl(format!(
            "{} \"{part_text}\" does not match template \"{template}\"",
            part_noun(part)
        ))
    })?;

    let mut values = ParameterMap::new();
    for (name, raw_value) in raw_values {
        let value = config.undecorate_value(&name, &raw_value);
        values.insert(name, value);
    }

    let patterned = format!(
        "{}{}{}",
        &part_text[..span.start],
        template,
        &part_text[span.end..]
    );
    Ok((patterned, values))
}

fn check_static_template(config: &UrlTemplateConfig, part: UrlPart, part_text: &str) -> Result<()> {
    match part {
        UrlPart::Host => {
            if let Some(template) = config.host_template() {
                if template != part_text {
                    return Err(UrlTemplateError::InvalidUrl(format!(
                        "host \"{part_text}\" does not match template \"{template}\""
                    )));
                }
            }
        }
        UrlPart::Path => {
            let template = config.path_template();
            if template != "/" && !part_text.starts_with(template) {
                return Err(UrlTemplateError::InvalidUrl(format!(
                    "path \"{part_text}\" does not start with template \"{template}\""
                )));
            }
        }
    }
    Ok(())
}

fn part_noun(part: UrlPart) -> &'static str {
    match part {
        UrlPart::Host => "host",
        UrlPart::Path => "path",
    }
}
