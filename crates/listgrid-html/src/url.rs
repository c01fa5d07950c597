//! URL and query-string assembly.
//!
//! The renderer builds framework-style paths: `/{controller}/{action}/{id}`
//! with extra query parameters. Parameters keep insertion order so emitted
//! URLs are deterministic and testable.

/// Ordered URL parameters for one link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParams {
    /// Target controller.
    pub controller: String,

    /// Target action. `None` while a link is still being assembled (the
    /// current action is always cleared first).
    pub action: Option<String>,

    /// Record id path segment.
    pub id: Option<String>,

    params: Vec<(String, String)>,
}

impl UrlParams {
    /// Start a parameter set for a controller, with the action cleared.
    #[must_use]
    pub fn new(controller: impl Into<String>) -> Self {
        Self {
            controller: controller.into(),
            action: None,
            id: None,
            params: Vec::new(),
        }
    }

    /// Set the target action.
    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Set the record id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Remove and return the record id.
    pub fn take_id(&mut self) -> Option<String> {
        self.id.take()
    }

    /// Set a query parameter, replacing any existing value for the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.params.retain(|(k, _)| *k != key);
        self.params.push((key, value.into()));
    }

    /// Remove a query parameter, returning its value.
    pub fn delete(&mut self, key: &str) -> Option<String> {
        let pos = self.params.iter().position(|(k, _)| k == key)?;
        Some(self.params.remove(pos).1)
    }

    /// Get a query parameter value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Render the path: `/{controller}/{action}/{id}?k=v&…`.
    #[must_use]
    pub fn to_path(&self) -> String {
        let mut path = format!("/{}", self.controller);
        if let Some(action) = &self.action {
            path.push('/');
            path.push_str(action);
        }
        if let Some(id) = &self.id {
            path.push('/');
            path.push_str(&percent_encode(id));
        }
        if !self.params.is_empty() {
            path.push('?');
            for (i, (key, value)) in self.params.iter().enumerate() {
                if i > 0 {
                    path.push('&');
                }
                path.push_str(&percent_encode(key));
                path.push('=');
                path.push_str(&percent_encode(value));
            }
        }
        path
    }
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
