//! Cached GENESYS index with wholesale refresh.
//!
//! Same lifecycle as the banlist store: lazy first load, `Arc` snapshots
//! for readers, wholesale swap on refresh, busy rejection for overlapping
//! refreshes.

use std::cell::{Cell, RefCell};
use std::sync::Arc;

use super::index::GenesysIndex;
use crate::error::{DeckError, Result};

/// Fetches the raw GENESYS reference data.
pub trait GenesysSource {
    /// Raw JSON text of the score table (`name -> points` object).
    fn fetch_scores(&self) -> Result<String>;

    /// Raw JSON text of the name→id resolution table.
    fn fetch_name_ids(&self) -> Result<String>;
}

/// Lazily-loading score index cache.
pub struct GenesysStore {
    source: Box<dyn GenesysSource>,
    cached: RefCell<Option<Arc<GenesysIndex>>>,
    refreshing: Cell<bool>,
}

impl GenesysStore {
    /// Create a store over a source.
    #[must_use]
    pub fn new(source: Box<dyn GenesysSource>) -> Self {
        Self {
            source,
            cached: RefCell::new(None),
            refreshing: Cell::new(false),
        }
    }

    /// Snapshot of the index, building it on first use.
    #[must_use]
    pub fn index(&self) -> Arc<GenesysIndex> {
        if let Some(index) = self.cached.borrow().as_ref() {
            return Arc::clone(index);
        }
        let index = Arc::new(self.load());
        *self.cached.borrow_mut() = Some(Arc::clone(&index));
        index
    }

    fn load(&self) -> GenesysIndex {
        let scores = self.source.fetch_scores().unwrap_or_else(|err| {
            tracing::warn!("GENESYS score fetch failed, using empty table: {}", err);
            "{}".to_string()
        });
        let name_ids = self.source.fetch_name_ids().unwrap_or_else(|err| {
            tracing::warn!("name-id fetch failed, skipping id join: {}", err);
            "{}".to_string()
        });
        GenesysIndex::build(&scores, &name_ids)
    }

    /// Rebuild the index wholesale from the source.
    ///
    /// Rejected with [`DeckError::RefreshBusy`] while another refresh is
    /// outstanding.
    pub fn refresh(&self) -> Result<()> {
        if self.refreshing.get() {
            return Err(DeckError::RefreshBusy);
        }
        self.refreshing.set(true);
        let fresh = Arc::new(self.load());
        self.refreshing.set(false);
        *self.cached.borrow_mut() = Some(fresh);
        Ok(())
    }

    /// Whether a refresh is currently outstanding.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.refreshing.get()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::cards::{Card, CardId};

    struct StaticSource {
        scores: RefCell<String>,
        fetches: Cell<usize>,
    }

    impl GenesysSource for Rc<StaticSource> {
        fn fetch_scores(&self) -> Result<String> {
            self.fetches.set(self.fetches.get() + 1);
            Ok(self.scores.borrow().clone())
        }

        fn fetch_name_ids(&self) -> Result<String> {
            Ok(r#"{"Alpha": {"id": 10}}"#.to_string())
        }
    }

    #[test]
    fn test_lazy_load_and_refresh() {
        let source = Rc::new(StaticSource {
            scores: RefCell::new(r#"{"Alpha": 100}"#.to_string()),
            fetches: Cell::new(0),
        });
        let store = GenesysStore::new(Box::new(Rc::clone(&source)));

        let card = Card::new(CardId::new(10));
        assert_eq!(store.index().score_for(&card), 100);
        assert_eq!(store.index().score_for(&card), 100);
        assert_eq!(source.fetches.get(), 1);

        // Refresh swaps the whole index; old snapshots stay intact.
        let old = store.index();
        *source.scores.borrow_mut() = r#"{"Alpha": 250}"#.to_string();
        store.refresh().unwrap();
        assert_eq!(old.score_for(&card), 100);
        assert_eq!(store.index().score_for(&card), 250);
    }

    struct FailingSource;

    impl GenesysSource for FailingSource {
        fn fetch_scores(&self) -> Result<String> {
            Err(DeckError::Fetch {
                what: "GENESYS scores",
                message: "offline".to_string(),
            })
        }

        fn fetch_name_ids(&self) -> Result<String> {
            Err(DeckError::Fetch {
                what: "name-id table",
                message: "offline".to_string(),
            })
        }
    }

    #[test]
    fn test_fetch_failure_scores_zero() {
        let store = GenesysStore::new(Box::new(FailingSource));
        let card = Card::new(CardId::new(1)).with_name("Anything");
        assert_eq!(store.index().score_for(&card), 0);
    }
}
