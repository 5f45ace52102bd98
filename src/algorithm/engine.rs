//! The backtracking assembly search
//!
//! At each step the engine finds the first open placement site, tries every
//! remaining tile there, and recurses on candidates the border classifier
//! accepts. The first full completion wins; exhausting the candidates at a
//! site reports a dead end one level up, which backtracks. Each branch
//! owns an independent canvas copy and pool bitmask, so a failed placement
//! cannot corrupt a sibling branch.

use crate::algorithm::border::BorderClassifier;
use crate::algorithm::pool::PoolMask;
use crate::io::configuration::DEFAULT_STEP_BUDGET;
use crate::io::error::{Result, SolverError};
use crate::io::progress::SearchProgress;
use crate::spatial::canvas::Canvas;
use crate::spatial::tile::Tile;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Search parameters
#[derive(Clone, Copy, Debug)]
pub struct EngineConfig {
    /// Maximum number of search nodes before the engine gives up
    pub step_budget: usize,
    /// Optional seed shuffling the candidate trial order
    ///
    /// The assembled canvas does not depend on the order, only the time
    /// to find it does.
    pub shuffle_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            step_budget: DEFAULT_STEP_BUDGET,
            shuffle_seed: None,
        }
    }
}

/// Backtracking search over a tile pool against a partially filled canvas
pub struct AssemblyEngine<'a> {
    tiles: &'a [Tile],
    classifier: BorderClassifier,
    order: Option<Vec<usize>>,
    config: EngineConfig,
}

impl<'a> AssemblyEngine<'a> {
    /// Create an engine over a parsed tile slice
    pub fn new(tiles: &'a [Tile], classifier: BorderClassifier, config: EngineConfig) -> Self {
        let order = config.shuffle_seed.map(|seed| {
            let mut order: Vec<usize> = (0..tiles.len()).collect();
            order.shuffle(&mut StdRng::seed_from_u64(seed));
            order
        });
        Self {
            tiles,
            classifier,
            order,
            config,
        }
    }

    /// Assemble the remaining pool onto the canvas
    ///
    /// An empty pool returns the canvas unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::DeadEnd`] when no permutation of the pool
    /// completes the map and [`SolverError::BudgetExhausted`] when the
    /// node budget runs out first.
    pub fn assemble(&self, canvas: &Canvas, pool: &PoolMask) -> Result<Canvas> {
        self.assemble_with_progress(canvas, pool, None)
    }

    /// Assemble with optional progress reporting
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::assemble`].
    pub fn assemble_with_progress(
        &self,
        canvas: &Canvas,
        pool: &PoolMask,
        progress: Option<&SearchProgress>,
    ) -> Result<Canvas> {
        let mut steps = 0;
        let assembled = self.search(canvas, pool, &mut steps, progress)?;
        if let Some(progress) = progress {
            progress.finish(steps);
        }
        Ok(assembled)
    }

    fn search(
        &self,
        canvas: &Canvas,
        pool: &PoolMask,
        steps: &mut usize,
        progress: Option<&SearchProgress>,
    ) -> Result<Canvas> {
        if pool.is_empty() {
            return Ok(canvas.clone());
        }

        *steps += 1;
        if *steps > self.config.step_budget {
            return Err(SolverError::BudgetExhausted { steps: *steps });
        }
        if let Some(progress) = progress {
            progress.record_step(*steps);
        }

        let Some((row, col)) = canvas.next_open_site(self.tile_width()) else {
            // Tiles remain but the canvas is full; the sizing was wrong
            // for this branch
            return Err(self.dead_end(pool));
        };

        let candidates: Vec<usize> = match &self.order {
            Some(order) => order
                .iter()
                .copied()
                .filter(|&index| pool.contains(index))
                .collect(),
            None => pool.indices().collect(),
        };

        for index in candidates {
            let Some(tile) = self.tiles.get(index) else {
                continue;
            };
            let Some(candidate) = canvas.with_tile(tile, row, col) else {
                continue;
            };
            if !self.classifier.is_valid_border_state(&candidate) {
                continue;
            }
            match self.search(&candidate, &pool.without(index), steps, progress) {
                Ok(finished) => return Ok(finished),
                Err(SolverError::DeadEnd { .. }) => {}
                Err(other) => return Err(other),
            }
        }

        Err(self.dead_end(pool))
    }

    fn dead_end(&self, pool: &PoolMask) -> SolverError {
        SolverError::DeadEnd {
            placed: self.tiles.len().saturating_sub(pool.count()),
            pool_remaining: pool.count(),
        }
    }

    fn tile_width(&self) -> usize {
        self.tiles.first().map_or(0, Tile::width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::sizing::size_and_seed;

    fn tile(rows: &[&str]) -> Tile {
        let rows = rows.iter().map(|r| r.as_bytes().to_vec()).collect();
        Tile::from_rows(rows).expect("bad test tile")
    }

    fn corner_tiles() -> Vec<Tile> {
        vec![
            tile(&["╔═", "║abc"]),
            tile(&["═╗", "def║"]),
            tile(&["║ghi", "╚═"]),
            tile(&["jkl║", "═╝"]),
        ]
    }

    fn decoded_rows(canvas: &Canvas) -> Vec<String> {
        (0..canvas.height())
            .filter_map(|row| canvas.row_bytes(row))
            .map(crate::algorithm::border::decode_lenient)
            .collect()
    }

    #[test]
    fn test_empty_pool_returns_canvas_unchanged() {
        let tiles = corner_tiles();
        let engine =
            AssemblyEngine::new(&tiles, BorderClassifier::default(), EngineConfig::default());
        let canvas = Canvas::blank(2, 6);
        let result = engine.assemble(&canvas, &PoolMask::full(0)).unwrap();
        assert_eq!(result, canvas);
    }

    #[test]
    fn test_assembles_four_tile_map() {
        let tiles = corner_tiles();
        let (canvas, pool) = size_and_seed(&tiles).unwrap();
        let engine =
            AssemblyEngine::new(&tiles, BorderClassifier::default(), EngineConfig::default());
        let assembled = engine.assemble(&canvas, &pool).unwrap();
        assert_eq!(
            decoded_rows(&assembled),
            vec!["╔══╗", "║abcdef║", "║ghijkl║", "╚══╝"]
        );
    }

    #[test]
    fn test_corrupted_edge_dead_ends() {
        let mut tiles = corner_tiles();
        // Top-right corner replaced with glyphs outside the top set
        if let Some(slot) = tiles.get_mut(1) {
            *slot = tile(&["═~~~", "def║"]);
        }
        let (canvas, pool) = size_and_seed(&tiles).unwrap();
        let engine =
            AssemblyEngine::new(&tiles, BorderClassifier::default(), EngineConfig::default());
        let err = engine.assemble(&canvas, &pool).unwrap_err();
        assert!(matches!(
            err,
            SolverError::DeadEnd {
                placed: 1,
                pool_remaining: 3,
            }
        ));
    }

    #[test]
    fn test_budget_exhaustion_reported() {
        let tiles = corner_tiles();
        let (canvas, pool) = size_and_seed(&tiles).unwrap();
        let config = EngineConfig {
            step_budget: 1,
            shuffle_seed: None,
        };
        let engine = AssemblyEngine::new(&tiles, BorderClassifier::default(), config);
        let err = engine.assemble(&canvas, &pool).unwrap_err();
        assert!(matches!(err, SolverError::BudgetExhausted { .. }));
    }

    #[test]
    fn test_result_independent_of_trial_order() {
        let tiles = corner_tiles();
        let (canvas, pool) = size_and_seed(&tiles).unwrap();
        let mut canvases = Vec::new();
        for seed in [None, Some(1), Some(7), Some(1234)] {
            let config = EngineConfig {
                step_budget: DEFAULT_STEP_BUDGET,
                shuffle_seed: seed,
            };
            let engine = AssemblyEngine::new(&tiles, BorderClassifier::default(), config);
            let assembled = engine
                .assemble(&canvas, &pool)
                .unwrap_or_else(|err| panic!("assembly failed under seed {seed:?}: {err}"));
            canvases.push(assembled);
        }
        assert!(canvases.windows(2).all(|pair| pair.first() == pair.last()));
    }
}
