//! Browser location as the shared mutable store of the application.
//!
//! All query-string writes go through [`update_query`], a single
//! read-modify-write step over the current location.

use web_sys::window;

pub trait LocationPort {
    fn pathname(&self) -> String;

    /// Query string including the leading `?`, or empty.
    fn search(&self) -> String;

    /// Заменяет текущую запись истории
    fn replace(&self, url: &str);

    /// Добавляет новую запись истории
    fn push(&self, url: &str);
}

/// `window.location` + `window.history`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocation;

impl LocationPort for BrowserLocation {
    fn pathname(&self) -> String {
        window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn search(&self) -> String {
        window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
    }

    fn replace(&self, url: &str) {
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                if let Err(e) =
                    history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url))
                {
                    log::warn!("history.replaceState failed: {:?}", e);
                }
            }
        }
    }

    fn push(&self, url: &str) {
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                if let Err(e) =
                    history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url))
                {
                    log::warn!("history.pushState failed: {:?}", e);
                }
            }
        }
    }
}

/// Склеивает путь и query string (без `?`, если строка пустая)
pub fn with_query(path: &str, query: &str) -> String {
    let query = query.trim_start_matches('?');
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

/// Splits `/path?query` into `("/path", "query")`.
pub fn split_url(url: &str) -> (&str, &str) {
    match url.split_once('?') {
        Some((path, query)) => (path, query),
        None => (url, ""),
    }
}

/// Read the current query string, compute the next one, write it back
/// (replacing the history entry) when it differs. Returns whether the URL changed.
pub fn update_query<L: LocationPort + ?Sized>(
    location: &L,
    next: impl FnOnce(&str) -> String,
) -> bool {
    let current = location.search();
    let current = current.trim_start_matches('?');
    let next = next(current);
    if next == current {
        return false;
    }
    location.replace(&with_query(&location.pathname(), &next));
    true
}

#[cfg(test)]
pub use memory::MemoryLocation;

#[cfg(test)]
mod memory {
    use super::{split_url, LocationPort};
    use std::cell::{Cell, RefCell};

    /// In-memory history used by tests.
    #[derive(Debug)]
    pub struct MemoryLocation {
        entries: RefCell<Vec<String>>,
        index: Cell<usize>,
        pub replace_count: Cell<usize>,
    }

    impl MemoryLocation {
        pub fn new(url: &str) -> Self {
            Self {
                entries: RefCell::new(vec![url.to_string()]),
                index: Cell::new(0),
                replace_count: Cell::new(0),
            }
        }

        pub fn current(&self) -> String {
            self.entries.borrow()[self.index.get()].clone()
        }

        pub fn back(&self) {
            if self.index.get() > 0 {
                self.index.set(self.index.get() - 1);
            }
        }

        pub fn len(&self) -> usize {
            self.entries.borrow().len()
        }
    }

    impl LocationPort for MemoryLocation {
        fn pathname(&self) -> String {
            split_url(&self.current()).0.to_string()
        }

        fn search(&self) -> String {
            let current = self.current();
            let query = split_url(&current).1;
            if query.is_empty() {
                String::new()
            } else {
                format!("?{}", query)
            }
        }

        fn replace(&self, url: &str) {
            self.entries.borrow_mut()[self.index.get()] = url.to_string();
            self.replace_count.set(self.replace_count.get() + 1);
        }

        fn push(&self, url: &str) {
            let mut entries = self.entries.borrow_mut();
            entries.truncate(self.index.get() + 1);
            entries.push(url.to_string());
            self.index.set(entries.len() - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query_and_split() {
        assert_eq!(with_query("/list", ""), "/list");
        assert_eq!(with_query("/list", "?page=2"), "/list?page=2");
        assert_eq!(split_url("/pokemon/25?page=2"), ("/pokemon/25", "page=2"));
        assert_eq!(split_url("/list"), ("/list", ""));
    }

    #[test]
    fn test_update_query_replaces_only_on_change() {
        let loc = MemoryLocation::new("/list?page=2");

        assert!(!update_query(&loc, |current| current.to_string()));
        assert_eq!(loc.replace_count.get(), 0);

        assert!(update_query(&loc, |_| "page=3".to_string()));
        assert_eq!(loc.current(), "/list?page=3");
        assert_eq!(loc.len(), 1);

        assert!(update_query(&loc, |_| String::new()));
        assert_eq!(loc.current(), "/list");
    }

    #[test]
    fn test_memory_history_push_and_back() {
        let loc = MemoryLocation::new("/list?page=2");
        loc.push("/pokemon/4?page=2");
        assert_eq!(loc.pathname(), "/pokemon/4");
        assert_eq!(loc.search(), "?page=2");
        loc.back();
        assert_eq!(loc.current(), "/list?page=2");
    }
}
