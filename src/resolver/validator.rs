// Diagnostic checks of a parsed template against its configuration

use std::collections::HashMap;

use regex::Regex;

use crate::parsed::ParsedUrlTemplate;

/// Re-checks a parsed template and reports everything wrong with it.
///
/// Unlike parsing this never fails early: the result maps each offending
/// parameter name (or `host` / `path` for the patterned texts) to a
/// description of the problem. An empty map means the template would compile
/// into a url that parses back cleanly.
pub(crate) fn validate_parsed_url_template(parsed: &ParsedUrlTemplate) -> HashMap<String, String> {
    let mut errors = HashMap::new();
    let config = parsed.config();

    if let Some(template) = config.host_template() {
        if !parsed.patterned_host().is_empty() && !parsed.patterned_host().ends_with(template) {
            errors.insert(
                "host".to_string(),
                format!(
                    "patterned host \"{}\" does not end with template \"{template}\"",
                    parsed.patterned_host()
                ),
            );
        }
    }
    let path_template = config.path_template();
    if !parsed.patterned_path().is_empty() && !parsed.patterned_path().starts_with(path_template) {
        errors.insert(
            "path".to_string(),
            format!(
                "patterned path \"{}\" does not start with template \"{path_template}\"",
                parsed.patterned_path()
            ),
        );
    }

    let decorated_values = parsed.decorated_full_parameters();
    for name in config.all_parameters() {
        if errors.contains_key(name) {
            continue;
        }
        let value = match decorated_values.get(name) {
            Some(value) => value,
            None => {
                errors.insert(name.clone(), format!("parameter \"{name}\" has no value"));
                continue;
            }
        };
        let requirement = match config.requirement_expression(name) {
            Ok(requirement) => requirement,
            Err(_) => continue,
        };
        let anchored = format!("^(?:{requirement})$");
        match Regex::new(&anchored) {
            Ok(regex) if regex.is_match(value) => {}
            Ok(_) => {
                errors.insert(
                    name.clone(),
                    format!("value \"{value}\" does not satisfy requirement \"{requirement}\""),
                );
            }
            Err(err) => {
                errors.insert(
                    name.clone(),
                    format!("requirement of parameter \"{name}\" is not a valid expression: {err}"),
                );
            }
        }
    }

    errors
}
