// Stripping template text back out of parsed urls

use crate::parsed::ParsedUrlTemplate;
use crate::url_parts::UrlData;

/// Url data with the configured template text removed from host and path.
///
/// What remains is the free text the url carried beyond its template: extra
/// subdomains and trailing path segments. Both parts keep a leading delimiter
/// so they can be concatenated onto another template later.
pub(crate) fn simplified_url_data(parsed: &ParsedUrlTemplate) -> UrlData {
    let mut url_data = parsed.additional_url_data().clone();
    url_data.host = Some(simplified_host(parsed));
    url_data.path = Some(simplified_path(parsed));
    url_data
}

fn simplified_host(parsed: &ParsedUrlTemplate) -> String {
    let simplified = match parsed.config().host_template() {
        Some(template) => parsed.patterned_host().replacen(template, "", 1),
        None => parsed.patterned_host().to_string(),
    };
    with_leading(simplified, '.')
}

fn simplified_path(parsed: &ParsedUrlTemplate) -> String {
    let template = parsed.config().path_template();
    with_leading(parsed.patterned_path().replacen(template, "", 1), '/')
}

fn with_leading(mut text: String, delimiter: char) -> String {
    if !text.starts_with(delimiter) {
        text.insert(0, delimiter);
    }
    text
}
