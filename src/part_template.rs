// Segment-aware editing of host and path template text

use crate::text_template;
use crate::url_parts::UrlPart;

/// Physically deletes a placeholder token from a template fragment.
///
/// When the token occupies a whole namespace (delimiter or text boundary on
/// both sides) one adjacent delimiter goes with it, so `/{language}/{city}/`
/// minus `language` is `/{city}/`. A token sharing its namespace with other
/// text is deleted bare: `/{country}{language}/` minus `language` is
/// `/{country}/`.
pub fn remove_name(name: &str, template: &str, part: UrlPart) -> String {
    let key = text_template::parameter_key(name);
    let delimiter = part.delimiter();
    let mut text = template.to_string();
    while let Some(idx) = text.find(&key) {
        let end = idx + key.len();
        let left_bounded = idx == 0 || text[..idx].ends_with(delimiter);
        let right_delimited = text[end..].starts_with(delimiter);
        let right_bounded = end == text.len() || right_delimited;
        let range = if left_bounded && right_bounded {
            if right_delimited {
                idx..end + delimiter.len_utf8()
            } else if idx > 0 {
                idx - delimiter.len_utf8()..end
            } else {
                idx..end
            }
        } else {
            idx..end
        };
        text.replace_range(range, "");
    }
    text
}

/// Rewrites a template fragment so the placeholder becomes regex-optional,
/// swallowing one adjacent delimiter into the optional group when the token
/// owns its namespace.
pub fn make_optional(name: &str, template: &str, part: UrlPart) -> String {
    let key = text_template::parameter_key(name);
    let delimiter = part.delimiter();
    let with_trailing = format!("{key}{delimiter}");
    if template.contains(&with_trailing) {
        return template.replace(&with_trailing, &format!("(?:{with_trailing})?"));
    }
    let with_leading = format!("{delimiter}{key}");
    if template.contains(&with_leading) {
        return template.replace(&with_leading, &format!("(?:{with_leading})?"));
    }
    template.replace(&key, &format!("(?:{key})?"))
}

/// Collapses runs of two or more namespace delimiters left behind by
/// adjacent elisions, e.g. `test...com` -> `test.com`.
pub fn collapse_delimiter_runs(text: &str, part: UrlPart) -> String {
    let delimiter = part.delimiter();
    let mut out = String::with_capacity(text.len());
    let mut previous_was_delimiter = false;
    for ch in text.chars() {
        if ch == delimiter {
            if previous_was_delimiter {
                continue;
            }
            previous_was_delimiter = true;
        } else {
            previous_was_delimiter = false;
        }
        out.push(ch);
    }
    out
}
