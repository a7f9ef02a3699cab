pub mod collision;
mod components;
mod player;
mod tic;

pub use collision::{point_hit_index, point_hits_any, rect_intersects_any};
pub use components::{InputIntents, PlayerPose};
pub use player::{MoveResult, Player};
pub use tic::{SIM_FPS, TicRunner};
