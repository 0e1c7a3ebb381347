/// A cleaned field value and the diagnostics produced while cleaning it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized<T> {
    pub value: T,
    pub diagnostics: Vec<String>,
}

impl<T> Sanitized<T> {
    /// A value that needed no diagnostics.
    pub fn clean(value: T) -> Self {
        Self {
            value,
            diagnostics: Vec::new(),
        }
    }

    /// A value accompanied by a single diagnostic.
    pub fn flagged(value: T, diagnostic: impl Into<String>) -> Self {
        Self {
            value,
            diagnostics: vec![diagnostic.into()],
        }
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Appends the diagnostics to `errors` and returns the value.
    pub fn merge_into(self, errors: &mut Vec<String>) -> T {
        errors.extend(self.diagnostics);
        self.value
    }
}
