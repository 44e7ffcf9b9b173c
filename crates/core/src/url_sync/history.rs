/// The current location's query string, replaceable in place.
pub trait History: Send + Sync {
    /// Current query string without the leading `?`.
    fn query(&self) -> String;

    /// Replace the current entry's query string. Never pushes a new entry.
    fn replace_query(&mut self, query: &str);
}

/// In-memory [`History`] that records every replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHistory {
    current: String,
    replacements: Vec<String>,
}

impl MemoryHistory {
    pub fn new(query: &str) -> Self {
        Self {
            current: query.trim_start_matches('?').to_string(),
            replacements: Vec::new(),
        }
    }

    pub fn replacements(&self) -> &[String] {
        &self.replacements
    }
}

impl History for MemoryHistory {
    fn query(&self) -> String {
        self.current.clone()
    }

    fn replace_query(&mut self, query: &str) {
        self.current = query.trim_start_matches('?').to_string();
        self.replacements.push(self.current.clone());
    }
}
