//! Cached banlist store with wholesale refresh.
//!
//! Tables load lazily on first use and are replaced wholesale (never
//! merged) on refresh. Readers take [`Arc`] snapshots, so a check that
//! started before a refresh keeps its complete old table and never
//! observes a partially built one.

use std::cell::{Cell, RefCell};
use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::map::{LookupMode, RestrictionMap};
use super::status::RestrictionStatus;
use crate::cards::Card;
use crate::error::{DeckError, Result};
use crate::formats::{Banlist, Format};

/// Fetches raw banlist JSON. Implementations live at the perimeter
/// (HTTP, bundled files); the store never cares which.
pub trait RestrictionSource {
    /// Raw JSON text (a `key -> label` object) for one banlist.
    fn fetch(&self, list: Banlist) -> Result<String>;
}

/// Lazily-loading banlist cache.
///
/// A fetch failure or malformed payload degrades to an empty table:
/// no restrictions are enforced from that list, but the universal copy
/// cap still applies at the admission gate.
pub struct RestrictionStore {
    source: Box<dyn RestrictionSource>,
    cached: RefCell<FxHashMap<Banlist, Arc<RestrictionMap>>>,
    refreshing: Cell<bool>,
    lookup_mode: LookupMode,
}

impl RestrictionStore {
    /// Create a store over a source, with the default lookup mode.
    #[must_use]
    pub fn new(source: Box<dyn RestrictionSource>) -> Self {
        Self {
            source,
            cached: RefCell::new(FxHashMap::default()),
            refreshing: Cell::new(false),
            lookup_mode: LookupMode::default(),
        }
    }

    /// Set the lookup mode (builder pattern).
    #[must_use]
    pub fn with_lookup_mode(mut self, mode: LookupMode) -> Self {
        self.lookup_mode = mode;
        self
    }

    /// The active lookup mode.
    #[must_use]
    pub fn lookup_mode(&self) -> LookupMode {
        self.lookup_mode
    }

    /// Snapshot of one banlist's table, loading it on first use.
    #[must_use]
    pub fn map_for(&self, list: Banlist) -> Arc<RestrictionMap> {
        if let Some(map) = self.cached.borrow().get(&list) {
            return Arc::clone(map);
        }
        let map = Arc::new(self.load(list));
        self.cached.borrow_mut().insert(list, Arc::clone(&map));
        map
    }

    fn load(&self, list: Banlist) -> RestrictionMap {
        match self.source.fetch(list) {
            Ok(json) => RestrictionMap::from_json(list, &json),
            Err(err) => {
                tracing::warn!("{} banlist fetch failed, using empty table: {}", list, err);
                RestrictionMap::new()
            }
        }
    }

    /// Status of a card under the active format.
    ///
    /// Formats without a banlist (GENESYS, NO_FORBIDDEN) always resolve
    /// as unrestricted.
    #[must_use]
    pub fn status_for(&self, card: &Card, format: Format) -> RestrictionStatus {
        match format.banlist() {
            Some(list) => self.map_for(list).status_for(card, self.lookup_mode),
            None => RestrictionStatus::Unrestricted,
        }
    }

    /// Replace every table wholesale from the source.
    ///
    /// Rejected with [`DeckError::RefreshBusy`] while another refresh is
    /// outstanding; requests are not queued. The swap happens only after
    /// all four lists have loaded.
    pub fn refresh(&self) -> Result<()> {
        if self.refreshing.get() {
            return Err(DeckError::RefreshBusy);
        }
        self.refreshing.set(true);
        let mut fresh = FxHashMap::default();
        for list in Banlist::ALL {
            fresh.insert(list, Arc::new(self.load(list)));
        }
        self.refreshing.set(false);
        *self.cached.borrow_mut() = fresh;
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
    use std::rc::{Rc, Weak};

    use super::*;
    use crate::cards::CardId;

    struct StaticSource {
        json: String,
        fetches: Cell<usize>,
    }

    impl StaticSource {
        fn new(json: &str) -> Self {
            Self {
                json: json.to_string(),
                fetches: Cell::new(0),
            }
        }
    }

    impl RestrictionSource for Rc<StaticSource> {
        fn fetch(&self, _list: Banlist) -> Result<String> {
            self.fetches.set(self.fetches.get() + 1);
            Ok(self.json.clone())
        }
    }

    struct FailingSource;

    impl RestrictionSource for FailingSource {
        fn fetch(&self, _list: Banlist) -> Result<String> {
            Err(DeckError::Fetch {
                what: "banlist",
                message: "offline".to_string(),
            })
        }
    }

    #[test]
    fn test_lazy_load_and_cache() {
        let source = Rc::new(StaticSource::new(r#"{"111": "禁止"}"#));
        let store = RestrictionStore::new(Box::new(Rc::clone(&source)));

        assert_eq!(source.fetches.get(), 0);
        let card = Card::new(CardId::new(111));
        assert_eq!(store.status_for(&card, Format::Ocg), RestrictionStatus::Forbidden);
        assert_eq!(source.fetches.get(), 1);

        // Second lookup hits the cache.
        assert_eq!(store.status_for(&card, Format::Ocg), RestrictionStatus::Forbidden);
        assert_eq!(source.fetches.get(), 1);
    }

    #[test]
    fn test_formats_without_banlist() {
        let store = RestrictionStore::new(Box::new(FailingSource));
        let card = Card::new(CardId::new(1));
        assert_eq!(store.status_for(&card, Format::Genesys), RestrictionStatus::Unrestricted);
        assert_eq!(
            store.status_for(&card, Format::NoForbidden),
            RestrictionStatus::Unrestricted
        );
    }

    #[test]
    fn test_fetch_failure_degrades_to_empty() {
        let store = RestrictionStore::new(Box::new(FailingSource));
        let card = Card::new(CardId::new(1)).with_name("Anything");
        assert_eq!(store.status_for(&card, Format::Tcg), RestrictionStatus::Unrestricted);
    }

    #[test]
    fn test_refresh_replaces_wholesale() {
        let source = Rc::new(StaticSource::new(r#"{"111": "禁止"}"#));
        let store = RestrictionStore::new(Box::new(Rc::clone(&source)));
        let card = Card::new(CardId::new(111));
        assert_eq!(store.status_for(&card, Format::Ocg), RestrictionStatus::Forbidden);

        // Old snapshots stay complete after the swap.
        let before = store.map_for(Banlist::Ocg);
        store.refresh().unwrap();
        assert_eq!(before.status_for(&card, LookupMode::Exact), RestrictionStatus::Forbidden);

        // All four lists were reloaded.
        assert_eq!(source.fetches.get(), 1 + 4);
    }

    struct ReentrantSource {
        store: RefCell<Option<Weak<RestrictionStore>>>,
        saw_busy: Cell<bool>,
    }

    impl RestrictionSource for Rc<ReentrantSource> {
        fn fetch(&self, _list: Banlist) -> Result<String> {
            if let Some(weak) = self.store.borrow().as_ref() {
                if let Some(store) = weak.upgrade() {
                    match store.refresh() {
                        Err(DeckError::RefreshBusy) => self.saw_busy.set(true),
                        other => panic!("expected busy rejection, got {:?}", other.err()),
                    }
                }
            }
            Ok("{}".to_string())
        }
    }

    #[test]
    fn test_refresh_while_refreshing_is_busy() {
        let inner = Rc::new(ReentrantSource {
            store: RefCell::new(None),
            saw_busy: Cell::new(false),
        });
        let store = Rc::new(RestrictionStore::new(Box::new(Rc::clone(&inner))));
        *inner.store.borrow_mut() = Some(Rc::downgrade(&store));

        store.refresh().unwrap();
        assert!(inner.saw_busy.get());
        assert!(!store.is_refreshing());
    }
}
