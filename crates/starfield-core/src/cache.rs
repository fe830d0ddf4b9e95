//! Bounded least-recently-used cache of generated tiles.
//!
//! Purely an optimization: a cached tile holds exactly what [`stars_for_tile`]
//! returns for the same inputs. The cache remembers the generation parameters
//! it was filled with and empties itself when they change.

use rustc_hash::FxHashMap;

use crate::star::Star;
use crate::tile::{TileKey, stars_for_tile};

#[derive(Clone, Copy, Debug, PartialEq)]
struct TileParams {
    seed: u32,
    count: usize,
    min_size: f64,
    max_size: f64,
}

#[derive(Debug)]
struct CacheEntry {
    stars: Vec<Star>,
    last_used: u64,
}

/// LRU map from tile key to that tile's stars.
#[derive(Debug)]
pub struct TileCache {
    capacity: usize,
    entries: FxHashMap<TileKey, CacheEntry>,
    params: Option<TileParams>,
    clock: u64,
    hits: u64,
    misses: u64,
}

impl TileCache {
    /// A cache holding at most `capacity` tiles (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            params: None,
            clock: 0,
            hits: 0,
            misses: 0,
        }
    }

    /// Stars for `key`, generated on a miss.
    pub fn get_or_generate(
        &mut self,
        seed: u32,
        key: TileKey,
        count: usize,
        min_size: f64,
        max_size: f64,
    ) -> &[Star] {
        let params = TileParams {
            seed,
            count,
            min_size,
            max_size,
        };
        if self.params != Some(params) {
            if !self.entries.is_empty() {
                log::debug!(
                    "Tile parameters changed, dropping {} cached tiles",
                    self.entries.len()
                );
            }
            self.entries.clear();
            self.params = Some(params);
        }

        self.clock += 1;
        let clock = self.clock;

        if self.entries.contains_key(&key) {
            self.hits += 1;
        } else {
            self.misses += 1;
            if self.entries.len() >= self.capacity {
                self.evict_oldest();
            }
        }

        let entry = self.entries.entry(key).or_insert_with(|| CacheEntry {
            stars: stars_for_tile(seed, key, count, min_size, max_size),
            last_used: clock,
        });
        entry.last_used = clock;
        &entry.stars
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(key, _)| *key);
        if let Some(key) = oldest {
            self.entries.remove(&key);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.params = None;
    }

    pub fn contains(&self, key: TileKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cached_tile_matches_fresh_generation() {
        let mut cache = TileCache::new(4);
        let key = TileKey::new(-2, 9);
        let cached = cache.get_or_generate(42, key, 17, 0.5, 2.0).to_vec();
        assert_eq!(cached, stars_for_tile(42, key, 17, 0.5, 2.0));
        let again = cache.get_or_generate(42, key, 17, 0.5, 2.0).to_vec();
        assert_eq!(cached, again);
        assert_eq!((cache.hits(), cache.misses()), (1, 1));
    }

    #[test]
    fn test_evicts_least_recently_used() {
        let mut cache = TileCache::new(2);
        let a = TileKey::new(0, 0);
        let b = TileKey::new(1, 0);
        let c = TileKey::new(2, 0);

        cache.get_or_generate(1, a, 3, 1.0, 2.0);
        cache.get_or_generate(1, b, 3, 1.0, 2.0);
        cache.get_or_generate(1, a, 3, 1.0, 2.0); // a is now most recent
        cache.get_or_generate(1, c, 3, 1.0, 2.0);

        assert_eq!(cache.len(), 2);
        assert!(cache.contains(a));
        assert!(!cache.contains(b), "b was least recently used");
        assert!(cache.contains(c));
    }

    #[test]
    fn test_parameter_change_flushes_entries() {
        let mut cache = TileCache::new(8);
        let key = TileKey::new(3, 3);
        cache.get_or_generate(1, key, 5, 1.0, 2.0);
        cache.get_or_generate(1, TileKey::new(4, 3), 5, 1.0, 2.0);

        let reseeded = cache.get_or_generate(2, key, 5, 1.0, 2.0).to_vec();
        assert_eq!(reseeded, stars_for_tile(2, key, 5, 1.0, 2.0));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_zero_capacity_still_holds_one_tile() {
        let mut cache = TileCache::new(0);
        assert_eq!(cache.capacity(), 1);
        cache.get_or_generate(1, TileKey::new(0, 0), 2, 1.0, 2.0);
        cache.get_or_generate(1, TileKey::new(0, 1), 2, 1.0, 2.0);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cache = TileCache::new(4);
        cache.get_or_generate(1, TileKey::new(0, 0), 2, 1.0, 2.0);
        cache.clear();
        assert!(cache.is_empty());
    }
}
