use std::collections::HashSet;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Pause between items after the first
pub const DEFAULT_DELAY: Duration = Duration::from_secs(10);

/// Random walk over a fixed item list without repeats.
///
/// Every item is picked once before any item is picked again; the visited
/// set is cleared exactly when all items have been used.
pub struct AutoPlay<R = StdRng> {
    items: Vec<String>,
    visited: HashSet<String>,
    active: bool,
    rng: R,
}

impl AutoPlay<StdRng> {
    pub fn new(items: Vec<String>) -> Self {
        Self::with_rng(items, StdRng::from_entropy())
    }
}

impl<R: rand::Rng> AutoPlay<R> {
    pub fn with_rng(mut items: Vec<String>, rng: R) -> Self {
        items.sort();
        items.dedup();
        Self {
            items,
            visited: HashSet::new(),
            active: false,
            rng,
        }
    }

    pub fn start(&mut self) {
        log::info!("Autoplay started over {} items", self.len());
        self.active = true;
    }

    pub fn stop(&mut self) {
        log::info!("Autoplay stopped");
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Pick the next unused item. `None` only when there are no items.
    pub fn next_item(&mut self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        if self.visited.len() >= self.items.len() {
            log::debug!("All {} items used, starting over", self.items.len());
            self.visited.clear();
        }

        let unused: Vec<&String> = self
            .items
            .iter()
            .filter(|item| !self.visited.contains(*item))
            .collect();
        let picked = (*unused.choose(&mut self.rng)?).clone();
        self.visited.insert(picked.clone());
        Some(picked)
    }

    /// Fraction of items used in the current round
    pub fn progress(&self) -> f32 {
        if self.items.is_empty() {
            return 0.0;
        }
        self.visited.len() as f32 / self.items.len() as f32
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn items(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("item{}", i)).collect()
    }

    fn seeded(n: usize, seed: u64) -> AutoPlay<StdRng> {
        AutoPlay::with_rng(items(n), StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_empty_list() {
        let mut play = seeded(0, 1);
        assert!(play.is_empty());
        assert_eq!(play.next_item(), None);
        assert_eq!(play.progress(), 0.0);
    }

    #[test]
    fn test_start_stop() {
        let mut play = seeded(3, 1);
        assert!(!play.is_active());
        play.start();
        assert!(play.is_active());
        play.stop();
        assert!(!play.is_active());
    }

    #[test]
    fn test_progress_tracks_round() {
        let mut play = seeded(4, 7);
        play.next_item();
        play.next_item();
        assert_eq!(play.progress(), 0.5);
        play.next_item();
        play.next_item();
        assert_eq!(play.progress(), 1.0);
        // Reset happens on the next pick, not before
        play.next_item();
        assert_eq!(play.progress(), 0.25);
    }

    #[test]
    fn test_duplicates_collapse() {
        let play = AutoPlay::with_rng(
            vec!["dog".to_string(), "dog".to_string(), "cat".to_string()],
            StdRng::seed_from_u64(3),
        );
        assert_eq!(play.len(), 2);
    }

    #[test]
    fn test_default_delay() {
        assert_eq!(DEFAULT_DELAY, Duration::from_millis(10_000));
    }

    proptest! {
        #[test]
        fn each_round_visits_every_item_once(n in 1usize..40, seed in any::<u64>(), rounds in 1usize..4) {
            let mut play = seeded(n, seed);
            for _ in 0..rounds {
                let mut seen = HashSet::new();
                for _ in 0..n {
                    let item = play.next_item().unwrap();
                    prop_assert!(seen.insert(item), "repeat before round finished");
                }
                prop_assert_eq!(seen.len(), n);
                prop_assert_eq!(play.progress(), 1.0);
            }
        }
    }
}
