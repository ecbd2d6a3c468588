//! Key/value persistence seam, the equivalent of a browser's localStorage.

use crate::errors::{AppError, AppResult};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn put(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> AppResult<()> {
        (**self).put(key, value)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        (**self).remove(key)
    }
}

/// Process-local store. Clones share the same map, and `set_failing(true)`
/// makes every call return a persistence error.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Rc<RefCell<HashMap<String, String>>>,
    failing: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    pub fn len(&self) -> usize {
        self.data.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.borrow().is_empty()
    }

    fn check(&self) -> AppResult<()> {
        if self.failing.get() {
            return Err(AppError::Persistence("storage unavailable".into()));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.check()?;
        Ok(self.data.borrow().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> AppResult<()> {
        self.check()?;
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.check()?;
        self.data.borrow_mut().remove(key);
        Ok(())
    }
}
