use parking_lot::{Condvar, Mutex, MutexGuard};
use std::time::{Duration, Instant};

struct Entry<T> {
    fetched_at: Instant,
    value: T,
}

struct State<T> {
    entry: Option<Entry<T>>,
    fetching: bool,
    // Incremented on every invalidation to discard the
    // results of fetches that started before.
    generation: u64,
}

/// Caches a rarely changing catalog for a limited time.
///
/// Only a single fetch is in flight at any time. Concurrent
/// callers wait for its result instead of fetching again.
pub struct CatalogCache<T> {
    ttl: Duration,
    state: Mutex<State<T>>,
    fetched: Condvar,
}

impl<T: Clone> CatalogCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            state: Mutex::new(State {
                entry: None,
                fetching: false,
                generation: 0,
            }),
            fetched: Condvar::new(),
        }
    }

    /// Returns the cached value or fetches a new one if the
    /// cached value has expired.
    pub fn get<F, E>(&self, fetch: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let mut state = self.state.lock();
        loop {
            if let Some(entry) = &state.entry {
                if entry.fetched_at.elapsed() < self.ttl {
                    return Ok(entry.value.clone());
                }
            }
            if !state.fetching {
                break;
            }
            self.fetched.wait(&mut state);
        }
        self.fetch_and_store(state, fetch)
    }

    /// Discards the cached value.
    pub fn invalidate(&self) {
        let mut state = self.state.lock();
        state.entry = None;
        state.generation += 1;
    }

    /// Replaces the cached value by a freshly fetched one.
    pub fn refetch<F, E>(&self, fetch: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.invalidate();
        self.get(fetch)
    }

    fn fetch_and_store<F, E>(&self, mut state: MutexGuard<State<T>>, fetch: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        state.fetching = true;
        let generation = state.generation;
        let result = MutexGuard::unlocked(&mut state, || {
            let mut guard = FetchGuard {
                cache: self,
                completed: false,
            };
            let result = fetch();
            guard.completed = true;
            result
        });
        state.fetching = false;
        match &result {
            Ok(value) if state.generation == generation => {
                state.entry = Some(Entry {
                    fetched_at: Instant::now(),
                    value: value.clone(),
                });
            }
            Ok(_) => {
                debug!("Discarding catalog that has been invalidated while fetching");
            }
            Err(_) => {
                debug!("Failed to fetch catalog");
            }
        }
        // Waiting callers either find the new value or
        // start the next fetch themselves.
        self.fetched.notify_all();
        result
    }
}

// Clears the fetching flag and wakes up all waiting callers
// if a fetch unwinds. Must be dropped while the mutex is unlocked.
struct FetchGuard<'a, T> {
    cache: &'a CatalogCache<T>,
    completed: bool,
}

impl<T> Drop for FetchGuard<'_, T> {
    fn drop(&mut self) {
        if self.completed {
            return;
        }
        warn!("Fetching the catalog panicked");
        self.cache.state.lock().fetching = false;
        self.cache.fetched.notify_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc, Barrier,
        },
        thread,
    };

    const TTL: Duration = Duration::from_secs(300);

    #[test]
    fn fetch_once_within_ttl() {
        let cache = CatalogCache::new(TTL);
        let fetches = AtomicUsize::new(0);
        let fetch = || -> Result<_, ()> {
            fetches.fetch_add(1, Ordering::SeqCst);
            Ok(vec!["Aula"])
        };
        assert_eq!(vec!["Aula"], cache.get(fetch).unwrap());
        assert_eq!(vec!["Aula"], cache.get(fetch).unwrap());
        assert_eq!(1, fetches.load(Ordering::SeqCst));
    }

    #[test]
    fn fetch_again_after_expiration() {
        let cache = CatalogCache::new(Duration::ZERO);
        let fetches = AtomicUsize::new(0);
        let fetch = || -> Result<_, ()> { Ok(fetches.fetch_add(1, Ordering::SeqCst)) };
        assert_eq!(0, cache.get(fetch).unwrap());
        assert_eq!(1, cache.get(fetch).unwrap());
    }

    #[test]
    fn invalidate_forces_the_next_get_to_fetch() {
        let cache = CatalogCache::new(TTL);
        let fetches = AtomicUsize::new(0);
        let fetch = || -> Result<_, ()> { Ok(fetches.fetch_add(1, Ordering::SeqCst)) };
        assert_eq!(0, cache.get(fetch).unwrap());
        assert_eq!(0, cache.get(fetch).unwrap());
        cache.invalidate();
        assert_eq!(1, cache.get(fetch).unwrap());
        assert_eq!(2, cache.refetch(fetch).unwrap());
        assert_eq!(2, cache.get(fetch).unwrap());
    }

    #[test]
    fn failed_fetch_is_not_cached() {
        let cache = CatalogCache::new(TTL);
        assert_eq!(Err("offline"), cache.get(|| Err("offline")));
        assert_eq!(Ok(7), cache.get(|| Ok::<_, &str>(7)));
    }

    #[test]
    fn recover_from_panicking_fetch() {
        let cache = Arc::new(CatalogCache::new(TTL));
        let panicking = {
            let cache = Arc::clone(&cache);
            thread::spawn(move || cache.get(|| -> Result<u32, ()> { panic!("fetch failed") }))
        };
        assert!(panicking.join().is_err());
        assert_eq!(Ok(7), cache.get(|| Ok::<_, ()>(7)));
    }

    #[test]
    fn concurrent_callers_share_a_single_fetch() {
        const CALLERS: usize = 8;
        let cache = Arc::new(CatalogCache::new(TTL));
        let fetches = Arc::new(AtomicUsize::new(0));
        let barrier = Arc::new(Barrier::new(CALLERS));
        let handles: Vec<_> = (0..CALLERS)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let fetches = Arc::clone(&fetches);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    cache.get(|| -> Result<_, ()> {
                        fetches.fetch_add(1, Ordering::SeqCst);
                        thread::sleep(Duration::from_millis(50));
                        Ok(vec![1, 2, 3])
                    })
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(Ok(vec![1, 2, 3]), handle.join().unwrap());
        }
        assert_eq!(1, fetches.load(Ordering::SeqCst));
    }
}
