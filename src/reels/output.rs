use std::sync::{Mutex, MutexGuard};

/// The region results get rendered into. Each `replace` overwrites the
/// whole content.
pub trait OutputArea: Send + Sync {
    fn replace(&self, markup: &str);
}

/// Output area kept in memory. Records every replacement so callers can
/// see what was shown and in which order.
#[derive(Debug, Default)]
pub struct MemoryOutput {
    history: Mutex<Vec<String>>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content, empty if nothing was rendered yet.
    pub fn current(&self) -> String {
        self.lock().last().cloned().unwrap_or_default()
    }

    pub fn history(&self) -> Vec<String> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.history.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl OutputArea for MemoryOutput {
    fn replace(&self, markup: &str) {
        self.lock().push(markup.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_output() {
        let out = MemoryOutput::new();
        assert_eq!(out.current(), "");

        out.replace("Loading...");
        out.replace("<p>done</p>");
        assert_eq!(out.current(), "<p>done</p>");
        assert_eq!(out.history(), vec!["Loading...", "<p>done</p>"]);
    }
}
