/// Flat, insertion-ordered query parameter mapping.
///
/// Encoding performs NO URL-escaping: values containing `&`, `=`, or
/// non-ASCII characters will corrupt the query string. This mirrors the
/// wire behavior existing integrations depend on, so it is kept as-is
/// rather than fixed here.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    entries: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter
    ///
    /// If the key is already present its value is replaced in place,
    /// keeping the key's original position; otherwise the pair is appended.
    /// Setting a reserved key (`api_key`, `dev_hash`, `timestamp`) after
    /// the authentication fields were merged therefore overrides them.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Builder-style variant of [`set`](Self::set)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Merge another mapping into this one, entry by entry, with the same
    /// replace-or-append semantics as [`set`](Self::set)
    pub fn merge(&mut self, other: QueryParams) {
        for (key, value) in other.entries {
            self.set(key, value);
        }
    }

    /// True when no parameters are set
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrow the entries in insertion order
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Serialize as `key=value` pairs joined with `&`
    pub fn encode(&self) -> String {
        let mut encoded = String::new();
        for (key, value) in &self.entries {
            if !encoded.is_empty() {
                encoded.push('&');
            }
            encoded.push_str(key);
            encoded.push('=');
            encoded.push_str(value);
        }
        encoded
    }
}
