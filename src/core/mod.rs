//! 核心模块
//!
//! 提供引擎入口、帧调度器、统一错误类型和核心宏。

pub mod engine;
pub mod error;
pub mod macros;
pub mod scheduler;

pub use engine::Engine;
pub use error::{SceneError, SceneResult};
pub use scheduler::{FrameScheduler, FrameTicker};
