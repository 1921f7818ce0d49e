//! Location filter applied by the region-restricted sources.

use regex::Regex;

/// Tokens kept by default: Indian offices and remote roles.
pub const DEFAULT_REGION_TOKENS: [&str; 2] = ["India", "Remote"];

/// Case-sensitive "contains any token" test over a location string.
#[derive(Debug, Clone)]
pub struct RegionFilter {
    // None when no tokens were given; such a filter keeps nothing.
    pattern: Option<Regex>,
}

impl RegionFilter {
    pub fn new<I>(tokens: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let alternatives: Vec<String> = tokens
            .into_iter()
            .filter_map(|t| {
                let token = t.as_ref().trim();
                (!token.is_empty()).then(|| regex::escape(token))
            })
            .collect();

        if alternatives.is_empty() {
            return Ok(Self { pattern: None });
        }

        let pattern = Regex::new(&alternatives.join("|"))?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }

    pub fn matches(&self, location: &str) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(location))
    }
}
