// Parameter decorators: stored value <-> url-surface value

use std::collections::HashMap;
use std::fmt::Debug;

/// Two-way translation applied to one parameter as it enters and leaves urls.
///
/// `generate` decorates a stored value for placement in a url, `parse` strips
/// the decoration from a matched url value. Both return the input unchanged
/// when it does not fit the decoration.
pub trait ParameterDecorator: Debug + Send + Sync {
    fn parse(&self, decorated_value: &str) -> String;
    fn generate(&self, clear_value: &str) -> String;
}

/// Wraps values with a static prefix and postfix on the url side, so a
/// stored `en` can appear as `-en` inside a shared namespace.
#[derive(Debug, Clone, Default)]
pub struct WrapperDecorator {
    prefix: String,
    postfix: String,
}

impl WrapperDecorator {
    pub fn new(prefix: impl Into<String>, postfix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            postfix: postfix.into(),
        }
    }

    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self::new(prefix, "")
    }
}

impl ParameterDecorator for WrapperDecorator {
    fn parse(&self, decorated_value: &str) -> String {
        let mut inner = decorated_value;
        if !self.prefix.is_empty() {
            match inner.strip_prefix(self.prefix.as_str()) {
                Some(rest) => inner = rest,
                None => return decorated_value.to_string(),
            }
        }
        if !self.postfix.is_empty() {
            match inner.strip_suffix(self.postfix.as_str()) {
                Some(rest) => inner = rest,
                None => return decorated_value.to_string(),
            }
        }
        inner.to_string()
    }

    fn generate(&self, clear_value: &str) -> String {
        format!("{}{}{}", self.prefix, clear_value, self.postfix)
    }
}

/// Swaps whole values between their url form and their stored form through a
/// lookup table, e.g. url `gb` <-> stored `uk`. Unknown values pass through.
#[derive(Debug, Clone)]
pub struct ValueReplaceDecorator {
    url_to_stored: HashMap<String, String>,
    stored_to_url: HashMap<String, String>,
}

impl ValueReplaceDecorator {
    pub fn new(url_to_stored: HashMap<String, String>) -> Self {
        let stored_to_url = url_to_stored
            .iter()
            .map(|(url_value, stored_value)| (stored_value.clone(), url_value.clone()))
            .collect();
        Self {
            url_to_stored,
            stored_to_url,
        }
    }
}

impl ParameterDecorator for ValueReplaceDecorator {
    fn parse(&self, decorated_value: &str) -> String {
        self.url_to_stored
            .get(decorated_value)
            .cloned()
            .unwrap_or_else(|| decorated_value.to_string())
    }

    fn generate(&self, clear_value: &str) -> String {
        self.stored_to_url
            .get(clear_value)
            .cloned()
            .unwrap_or_else(|| clear_value.to_string())
    }
}
