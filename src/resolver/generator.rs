// Building parsed templates from simplified urls

use std::sync::Arc;

use crate::config::{ParameterMap, UrlTemplateConfig};
use crate::parsed::ParsedUrlTemplate;
use crate::part_template;
use crate::url_parts::{UrlData, UrlPart};

/// Grafts the configured template grammar onto a simplified url.
///
/// The inverse of simplification: the caller supplies url text without any
/// template placeholders plus explicit parameter values, and gets back a
/// parsed template ready to compile. Values are trusted as given, nothing is
/// matched or validated here.
pub(crate) fn generate_parsed_url_template(
    config: &Arc<UrlTemplateConfig>,
    simplified_url: &str,
    parameters: ParameterMap,
) -> ParsedUrlTemplate {
    let url_data = UrlData::split(simplified_url);

    let patterned_host = patterned_host(config, url_data.host.as_deref());
    let patterned_path = patterned_path(config, url_data.path.as_deref());

    ParsedUrlTemplate::new(
        patterned_host,
        patterned_path,
        parameters,
        Arc::clone(config),
        url_data,
    )
}

fn patterned_host(config: &UrlTemplateConfig, host: Option<&str>) -> String {
    let host = match host {
        Some(host) if !host.is_empty() => host,
        _ => return String::new(),
    };
    let template = match config.host_template() {
        Some(template) => template,
        None => return host.to_string(),
    };

    let stripped = strip_parameters(config, template, UrlPart::Host);
    if stripped.is_empty() || stripped == "." {
        // all-placeholder template, graft it in front of the given host
        format!("{template}.{host}")
    } else {
        host.replace(&stripped, template)
    }
}

fn patterned_path(config: &UrlTemplateConfig, path: Option<&str>) -> String {
    let path = path.unwrap_or("/");
    let template = config.path_template();

    let stripped = strip_parameters(config, template, UrlPart::Path);
    if stripped.is_empty() || stripped == "/" {
        format!("{}{path}", template.trim_end_matches('/'))
    } else {
        path.replace(&stripped, template)
    }
}

/// The template with every placeholder removed, leaving its literal text.
fn strip_parameters(config: &UrlTemplateConfig, template: &str, part: UrlPart) -> String {
    let mut stripped = template.to_string();
    for name in config.parameters(part) {
        stripped = part_template::remove_name(name, &stripped, part);
    }
    stripped
}
