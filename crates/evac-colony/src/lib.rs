//! `evac-colony`: stigmergic path discovery.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`explorer`] | `Explorer` - one walker: position, path, visited set       |
//! | [`colony`]   | `ExplorerColony`, `ExplorerSpawn`, `RoundRecord`           |
//!
//! # Round structure
//!
//! 1. **Populate**: `explorer_count` explorers at fresh start cells, each with
//!    its own RNG stream seeded from the round seed and its id.
//! 2. **Walk** (parallel with the `parallel` feature): every explorer takes up
//!    to `move_budget` steps, stopping at the first exit.  Walkers only read
//!    the grid and the trail, so walks are independent.
//! 3. **Deposit** (sequential, ascending id): each successful explorer lays
//!    `deposit_reward / path_len` on every cell of its path.
//! 4. **Evaporate** once, then report a [`RoundRecord`].
//!
//! # Feature flags
//!
//! | Flag       | Effect                                       |
//! |------------|----------------------------------------------|
//! | `parallel` | Runs the walk phase on Rayon's thread pool.  |

pub mod colony;
pub mod explorer;


pub use colony::{ExplorerColony, ExplorerSpawn, RoundRecord};
pub use explorer::Explorer;
