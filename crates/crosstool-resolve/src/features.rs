//! Active feature sets.

use std::collections::BTreeSet;

use crosstool_model::DefaultSetting;
use serde::Serialize;

/// Names of the settings considered "on" for one build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FeatureSet(BTreeSet<String>);

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the release's enabled defaults, then apply requests in
    /// order. `name` enables a setting and `-name` disables it.
    pub fn from_requests<S: AsRef<str>>(defaults: &[DefaultSetting], requests: &[S]) -> Self {
        let mut set: FeatureSet = defaults
            .iter()
            .filter(|s| s.default_value)
            .map(|s| s.name.clone())
            .collect();
        for request in requests {
            let request = request.as_ref().trim();
            match request.strip_prefix('-') {
                Some(name) => set.disable(name),
                None if !request.is_empty() => set.enable(request),
                None => {}
            }
        }
        set
    }

    pub fn enable(&mut self, name: impl Into<String>) {
        self.0.insert(name.into());
    }

    pub fn disable(&mut self, name: &str) {
        self.0.remove(name);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        FeatureSet(iter.into_iter().map(Into::into).collect())
    }
}
