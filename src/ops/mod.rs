pub mod board;

pub use board::{BoardError, TaskBoard, TaskCounts};
