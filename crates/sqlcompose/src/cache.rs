//! Lazily rendered text shared by every mutable node.

use crate::error::SqlResult;
use std::cell::OnceCell;

/// Cached SQL text of a mutable node.
///
/// Filled on first read, cleared by every structural mutation. Mutators take
/// `&mut self` on the owning node, so clearing never races a reader.
#[derive(Debug, Clone, Default)]
pub(crate) struct TextCache(OnceCell<String>);

impl TextCache {
    pub(crate) fn new() -> Self {
        Self(OnceCell::new())
    }

    /// Return the cached text, rendering it first on a miss.
    pub(crate) fn get_or_render(&self, render: impl FnOnce() -> String) -> &str {
        self.0.get_or_init(render).as_str()
    }

    /// Fallible variant of [`TextCache::get_or_render`]; errors are not cached.
    pub(crate) fn get_or_try_render(
        &self,
        render: impl FnOnce() -> SqlResult<String>,
    ) -> SqlResult<&str> {
        if let Some(text) = self.0.get() {
            return Ok(text.as_str());
        }
        let text = render()?;
        Ok(self.0.get_or_init(|| text).as_str())
    }

    pub(crate) fn invalidate(&mut self) {
        self.0.take();
    }

    #[cfg(test)]
    pub(crate) fn is_cached(&self) -> bool {
        self.0.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SqlError;

    #[test]
    fn renders_once_until_invalidated() {
        let mut cache = TextCache::new();
        let mut calls = 0;
        assert_eq!(cache.get_or_render(|| {
            calls += 1;
            "a".to_string()
        }), "a");
        assert_eq!(cache.get_or_render(|| "b".to_string()), "a");
        assert_eq!(calls, 1);

        cache.invalidate();
        assert!(!cache.is_cached());
        assert_eq!(cache.get_or_render(|| "b".to_string()), "b");
    }

    #[test]
    fn errors_are_not_cached() {
        let cache = TextCache::new();
        let err = cache
            .get_or_try_render(|| Err(SqlError::invalid_state("not yet")))
            .unwrap_err();
        assert!(err.is_invalid_state());
        assert!(!cache.is_cached());
        assert_eq!(cache.get_or_try_render(|| Ok("ok".to_string())).unwrap(), "ok");
    }
}
