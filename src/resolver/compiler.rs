// Rendering parsed templates back into concrete urls

use crate::config::{ParameterMap, UrlTemplateConfig};
use crate::error::{Result, UrlTemplateError};
use crate::parsed::ParsedUrlTemplate;
use crate::part_template;
use crate::text_template;
use crate::url_parts::UrlPart;

/// How much of the url to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompileScope {
    /// Full url: scheme, authority, path, query and fragment.
    #[default]
    All,
    /// Bare host string, no scheme.
    Host,
    /// Scheme and authority only.
    HostWithScheme,
    /// Path, query and fragment; any scheme is dropped.
    Path,
}

/// Renders a parsed template into url text.
///
/// Parameters sitting on their current defaults and marked hidden are elided
/// from the templates before substitution. A placeholder left in the working
/// text without a value to fill it is an error.
pub(crate) fn compile_url(parsed: &ParsedUrlTemplate, scope: CompileScope) -> Result<String> {
    let config = parsed.config();
    let mut url_data = parsed.additional_url_data().clone();

    let decorated_values = parsed.decorated_full_parameters();
    let hidden_names = parsed.actual_hidden_parameters();

    // a template parsed from an absolute url keeps its patterned host, a
    // relative one falls back to the configured host template
    let host_template = if parsed.patterned_host().is_empty() {
        config.host_template().map(str::to_string)
    } else {
        Some(parsed.patterned_host().to_string())
    };

    if scope != CompileScope::Path {
        if let Some(host_template) = host_template {
            let host = render_part(
                config,
                UrlPart::Host,
                &host_template,
                &hidden_names,
                &decorated_values,
            )?;
            if !host.is_empty() {
                url_data.host = Some(host.clone());
                if url_data.scheme.is_none() {
                    if let Some(scheme) = config.default_scheme() {
                        url_data.scheme = Some(scheme.to_string());
                    }
                }
            }
            if scope == CompileScope::Host {
                return Ok(host);
            }
            if scope == CompileScope::HostWithScheme {
                return Ok(url_data.build_origin());
            }
        }
    }

    if matches!(scope, CompileScope::All | CompileScope::Path) {
        let path_template = parsed.patterned_path();
        if !path_template.is_empty() {
            let path = render_part(
                config,
                UrlPart::Path,
                path_template,
                &hidden_names,
                &decorated_values,
            )?;
            if !path.is_empty() {
                url_data.path = Some(path);
            }
        }
        if scope == CompileScope::Path {
            url_data.scheme = None;
        }
    }

    Ok(url_data.build())
}

fn render_part(
    config: &UrlTemplateConfig,
    part: UrlPart,
    template: &str,
    hidden_names: &[String],
    values: &ParameterMap,
) -> Result<String> {
    let mut text = template.to_string();
    for name in hidden_names {
        text = part_template::remove_name(name, &text, part);
    }
    let text = part_template::collapse_delimiter_runs(&text, part);

    let mut missing = Vec::new();
    for name in text_template::parameter_names(&text) {
        if !values.contains_key(&name) && !missing.contains(&name) {
            missing.push(name);
        }
    }
    if !missing.is_empty() {
        return Err(UrlTemplateError::MissingRequiredParameters(missing));
    }

    Ok(text_template::substitute(&text, |name| {
        values.get(name).cloned()
    }))
}
