//! 统一错误处理模块
//!
//! 只有启动阶段会产生错误（窗口、事件循环、配置）。稳态更新循环没有
//! 错误路径：纹理解码或文本光栅化失败只会降级为空白画面并记录日志。

use thiserror::Error;

/// 场景启动错误类型
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Initialization error: {0}")]
    Init(String),

    #[error("Window creation failed: {0}")]
    Window(String),

    #[error("Event loop error: {0}")]
    EventLoop(String),

    #[error("Config error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 场景结果类型别名
pub type SceneResult<T> = Result<T, SceneError>;
