//! List search
//!
//! Case-insensitive substring match over the fields a list page displays.
//! An empty query matches every record.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFilter {
    needle: String,
}

impl TextFilter {
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// True when any single field contains the query
    pub fn matches_any<S: AsRef<str>>(&self, fields: &[S]) -> bool {
        self.is_empty()
            || fields
                .iter()
                .any(|f| f.as_ref().to_lowercase().contains(&self.needle))
    }

    /// True when the fields joined by a space contain the query
    ///
    /// Lets one query span adjacent columns ("laptop 2").
    pub fn matches_joined<S: AsRef<str>>(&self, fields: &[S]) -> bool {
        if self.is_empty() {
            return true;
        }
        let blob = fields
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        blob.contains(&self.needle)
    }
}
