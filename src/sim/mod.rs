//! The core simulation
//!
//! All gameplay logic lives here. The module is pure with respect to the
//! platform: seeded RNG only, no device polling, no rendering, one `tick`
//! per frame driven by the supplied delta time.

pub mod flower;
pub mod particles;
pub mod pool;
pub mod state;
pub mod tick;

pub use particles::{RainDrop, WindParticle};
pub use pool::ParticlePool;
pub use state::{DeathCause, Flower, FrameSnapshot, GamePhase, GameState, Score, Shield, Weather};
pub use tick::{tick, TickInput};
