//! Lazily-populated profile store with durable cache backends.
//!
//! A [`ProfileStore`] front-ends the corpus provider: the first `resolve` of
//! a protease fetches its substrate windows, builds the profile, and persists
//! the whole store; every later `resolve` is served from memory. Stored
//! profiles are never recomputed — stale entries are the accepted tradeoff
//! for not re-querying the corpus.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

use scissile_core::{Result, ScissileError};

use crate::corpus::CorpusProvider;
use crate::profile::Profile;

/// Durable storage for the full protease → profile mapping.
///
/// The mapping is small and updates are rare (one per distinct protease ever
/// resolved), so every update rewrites the serialized mapping wholesale.
pub trait ProfileCache: Send + Sync {
    /// Load the persisted mapping; an absent backing store yields an empty map.
    fn load(&self) -> Result<BTreeMap<String, Profile>>;

    /// Replace the persisted mapping with `profiles`.
    fn persist(&self, profiles: &BTreeMap<String, Profile>) -> Result<()>;
}

/// No durable storage: profiles live only as long as the store.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryCache;

impl ProfileCache for MemoryCache {
    fn load(&self) -> Result<BTreeMap<String, Profile>> {
        Ok(BTreeMap::new())
    }

    fn persist(&self, _profiles: &BTreeMap<String, Profile>) -> Result<()> {
        Ok(())
    }
}

/// JSON-file-backed cache: loaded once at store startup, rewritten in full
/// on each update.
#[derive(Debug, Clone)]
pub struct JsonFileCache {
    path: PathBuf,
}

impl JsonFileCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProfileCache for JsonFileCache {
    fn load(&self) -> Result<BTreeMap<String, Profile>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let text = fs::read_to_string(&self.path)?;
        serde_json::from_str(&text)
            .map_err(|e| ScissileError::Parse(format!("{}: {}", self.path.display(), e)))
    }

    fn persist(&self, profiles: &BTreeMap<String, Profile>) -> Result<()> {
        let text = serde_json::to_string(profiles)
            .map_err(|e| ScissileError::Parse(e.to_string()))?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

struct StoreState {
    profiles: BTreeMap<String, Arc<Profile>>,
    /// Proteases currently being fetched/built by some thread.
    in_flight: HashSet<String>,
}

/// In-memory map of protease name → profile, backed by a durable cache.
///
/// Concurrent `resolve` calls for the same protease are single-flighted: one
/// thread fetches and builds while the rest wait, so the corpus is queried
/// and the cache rewritten at most once per protease name.
pub struct ProfileStore {
    corpus: Box<dyn CorpusProvider>,
    cache: Box<dyn ProfileCache>,
    state: Mutex<StoreState>,
    settled: Condvar,
}

impl std::fmt::Debug for ProfileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileStore").finish_non_exhaustive()
    }
}

impl ProfileStore {
    /// Open a store over a corpus provider and cache backend, loading any
    /// previously persisted profiles into memory.
    pub fn open(corpus: Box<dyn CorpusProvider>, cache: Box<dyn ProfileCache>) -> Result<Self> {
        let profiles = cache
            .load()?
            .into_iter()
            .map(|(name, profile)| (name, Arc::new(profile)))
            .collect();
        Ok(Self {
            corpus,
            cache,
            state: Mutex::new(StoreState {
                profiles,
                in_flight: HashSet::new(),
            }),
            settled: Condvar::new(),
        })
    }

    /// Resolve the profile for `protease`, building and persisting it on
    /// first use.
    ///
    /// # Errors
    ///
    /// Propagates [`ScissileError::ProteaseNotFound`] / `EmptyCorpus` from
    /// the corpus and builder, and cache errors from persistence. A failed
    /// resolve leaves the store unchanged.
    pub fn resolve(&self, protease: &str) -> Result<Arc<Profile>> {
        let mut state = self.lock_state();
        loop {
            if let Some(profile) = state.profiles.get(protease) {
                return Ok(Arc::clone(profile));
            }
            if !state.in_flight.contains(protease) {
                break;
            }
            state = self
                .settled
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
        state.in_flight.insert(protease.to_string());
        drop(state);

        // Fetch and build outside the lock so unrelated proteases can
        // resolve concurrently.
        let built = self
            .corpus
            .fetch_windows(protease)
            .and_then(|windows| Profile::from_windows(&windows));

        let mut state = self.lock_state();
        state.in_flight.remove(protease);
        let outcome = match built {
            Ok(profile) => {
                let profile = Arc::new(profile);
                state
                    .profiles
                    .insert(protease.to_string(), Arc::clone(&profile));
                let snapshot: BTreeMap<String, Profile> = state
                    .profiles
                    .iter()
                    .map(|(name, p)| (name.clone(), (**p).clone()))
                    .collect();
                // Persisting under the lock keeps cache writes ordered. The
                // entry stays resolvable in memory even if persistence
                // fails; the error still reaches the caller.
                self.cache.persist(&snapshot).map(|()| profile)
            }
            Err(e) => Err(e),
        };
        drop(state);
        self.settled.notify_all();
        outcome
    }

    /// Whether a profile for `protease` is already resident.
    pub fn contains(&self, protease: &str) -> bool {
        self.lock_state().profiles.contains_key(protease)
    }

    fn lock_state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    use scissile_seq::CleavageWindow;
    use tempfile::TempDir;

    /// Counting provider: one substrate for "trypsin 1", everything else
    /// not found. Optionally sleeps to widen the race window. The fetch
    /// counter is shared so tests can inspect it after handing the provider
    /// to a store.
    struct CountingCorpus {
        fetches: Arc<AtomicUsize>,
        delay: Option<Duration>,
    }

    impl CountingCorpus {
        fn new() -> (Self, Arc<AtomicUsize>) {
            let fetches = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    fetches: Arc::clone(&fetches),
                    delay: None,
                },
                fetches,
            )
        }

        fn slow(delay: Duration) -> (Self, Arc<AtomicUsize>) {
            let (mut corpus, fetches) = Self::new();
            corpus.delay = Some(delay);
            (corpus, fetches)
        }
    }

    impl CorpusProvider for CountingCorpus {
        fn fetch_windows(&self, protease: &str) -> Result<Vec<CleavageWindow>> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                thread::sleep(delay);
            }
            if protease == "trypsin 1" {
                Ok(vec![CleavageWindow::new(*b"VSQRSLRT").unwrap()])
            } else {
                Err(ScissileError::ProteaseNotFound(protease.to_string()))
            }
        }
    }

    #[test]
    fn resolve_builds_once_and_serves_from_memory() {
        let (corpus, fetches) = CountingCorpus::new();
        let store = ProfileStore::open(Box::new(corpus), Box::new(MemoryCache)).unwrap();

        let first = store.resolve("trypsin 1").unwrap();
        let second = store.resolve("trypsin 1").unwrap();
        assert_eq!(*first, *second);
        assert!(store.contains("trypsin 1"));
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failed_resolve_leaves_store_unchanged() {
        let (corpus, _fetches) = CountingCorpus::new();
        let store = ProfileStore::open(Box::new(corpus), Box::new(MemoryCache)).unwrap();
        let err = store.resolve("no such protease").unwrap_err();
        assert!(matches!(err, ScissileError::ProteaseNotFound(_)));
        assert!(!store.contains("no such protease"));
        // A later valid resolve still works.
        assert!(store.resolve("trypsin 1").is_ok());
    }

    #[test]
    fn empty_corpus_propagates_from_the_builder() {
        struct EmptyCorpusProvider;
        impl CorpusProvider for EmptyCorpusProvider {
            fn fetch_windows(&self, _protease: &str) -> Result<Vec<CleavageWindow>> {
                Ok(Vec::new())
            }
        }

        let store =
            ProfileStore::open(Box::new(EmptyCorpusProvider), Box::new(MemoryCache)).unwrap();
        let err = store.resolve("anything").unwrap_err();
        assert!(matches!(err, ScissileError::EmptyCorpus(_)));
        assert!(!store.contains("anything"));
    }

    #[test]
    fn profiles_persist_across_store_instances() {
        let dir = TempDir::new().unwrap();
        let cache_path = dir.path().join("profiles.json");

        {
            let (corpus, _fetches) = CountingCorpus::new();
            let store = ProfileStore::open(
                Box::new(corpus),
                Box::new(JsonFileCache::new(&cache_path)),
            )
            .unwrap();
            store.resolve("trypsin 1").unwrap();
        }
        assert!(cache_path.exists());

        // A fresh store over the same cache never touches the corpus.
        struct PanickingCorpus;
        impl CorpusProvider for PanickingCorpus {
            fn fetch_windows(&self, protease: &str) -> Result<Vec<CleavageWindow>> {
                panic!("corpus queried for '{}' despite cached profile", protease);
            }
        }

        let store = ProfileStore::open(
            Box::new(PanickingCorpus),
            Box::new(JsonFileCache::new(&cache_path)),
        )
        .unwrap();
        assert!(store.contains("trypsin 1"));
        let profile = store.resolve("trypsin 1").unwrap();
        assert_eq!(profile.frequency(b'R', 3).unwrap(), 1.0);
    }

    #[test]
    fn corrupted_cache_file_fails_to_open() {
        let dir = TempDir::new().unwrap();
        let cache_path = dir.path().join("profiles.json");
        fs::write(&cache_path, "not json at all").unwrap();

        let (corpus, _fetches) = CountingCorpus::new();
        let err = ProfileStore::open(
            Box::new(corpus),
            Box::new(JsonFileCache::new(&cache_path)),
        )
        .unwrap_err();
        assert!(matches!(err, ScissileError::Parse(_)));
    }

    #[test]
    fn missing_cache_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let cache = JsonFileCache::new(dir.path().join("absent.json"));
        assert!(cache.load().unwrap().is_empty());
    }

    #[test]
    fn concurrent_resolves_query_the_corpus_once() {
        let (corpus, fetches) = CountingCorpus::slow(Duration::from_millis(50));
        let store = Arc::new(
            ProfileStore::open(Box::new(corpus), Box::new(MemoryCache)).unwrap(),
        );

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.resolve("trypsin 1").map(|p| (*p).clone()))
            })
            .collect();

        let mut profiles = Vec::new();
        for handle in handles {
            profiles.push(handle.join().unwrap().unwrap());
        }
        for p in &profiles[1..] {
            assert_eq!(profiles[0], *p);
        }
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }
}
