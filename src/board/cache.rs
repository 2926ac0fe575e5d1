use super::ActionSource;
use crate::errors::AppResult;
use crate::models::RawAction;
use std::cell::RefCell;
use std::collections::HashMap;

/// Memoizes per-card actions so several reports over the same cards fetch
/// each history once. Failed fetches are not cached.
pub struct CachedActions<'a> {
    inner: &'a dyn ActionSource,
    cache: RefCell<HashMap<String, Vec<RawAction>>>,
}

impl<'a> CachedActions<'a> {
    pub fn new(inner: &'a dyn ActionSource) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn cached_cards(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl ActionSource for CachedActions<'_> {
    fn card_actions(&self, card_id: &str) -> AppResult<Vec<RawAction>> {
        if let Some(hit) = self.cache.borrow().get(card_id) {
            return Ok(hit.clone());
        }

        let fetched = self.inner.card_actions(card_id)?;
        self.cache
            .borrow_mut()
            .insert(card_id.to_string(), fetched.clone());
        Ok(fetched)
    }
}
