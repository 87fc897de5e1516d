// Capture aliases for parameters appearing in several alternatives

use std::collections::HashMap;

/// Issues regex capture-group aliases and maps captures back to parameters.
///
/// One expression may bind the same parameter name in many alternatives
/// (one per optionality combination), and a regex cannot repeat a group
/// name, so every binding gets a numbered alias. The counter is shared
/// across all names of one expression.
#[derive(Debug, Clone, Default)]
pub struct AliasAllocator {
    next_index: usize,
    aliases: HashMap<String, Vec<String>>,
}

impl AliasAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh alias for the parameter, e.g. `country` -> `country_3`.
    pub fn issue(&mut self, parameter_name: &str) -> String {
        let alias = format!("{}_{}", parameter_name, self.next_index);
        self.next_index += 1;
        self.aliases
            .entry(parameter_name.to_string())
            .or_default()
            .push(alias.clone());
        alias
    }

    /// First non-empty capture among the aliases issued for the name, in
    /// issuance order. Falls back to the bare name for parameters that never
    /// received an alias.
    pub fn resolve<'t>(
        &self,
        parameter_name: &str,
        captures: &regex::Captures<'t>,
    ) -> Option<&'t str> {
        match self.aliases.get(parameter_name) {
            Some(aliases) => aliases
                .iter()
                .filter_map(|alias| captures.name(alias))
                .map(|capture| capture.as_str())
                .find(|value| !value.is_empty()),
            None => captures
                .name(parameter_name)
                .map(|capture| capture.as_str())
                .filter(|value| !value.is_empty()),
        }
    }
}
