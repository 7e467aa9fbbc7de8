pub mod beam;
pub mod bird;
pub mod bomb;
pub mod explosion;
pub mod score;

pub use beam::Beam;
pub use bird::{Bird, Direction, HeldKeys, Orientation, Pose};
pub use bomb::Bomb;
pub use explosion::Explosion;
pub use score::Score;
