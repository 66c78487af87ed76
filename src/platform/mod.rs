//! 平台抽象层
//!
//! 窗口操作以trait形式暴露，核心只依赖尺寸、缩放因子和重绘请求。

pub mod winit;

pub use self::winit::WinitWindow;

/// 平台窗口抽象
pub trait Window {
    /// 窗口内部尺寸（物理像素）
    fn size(&self) -> (u32, u32);
    /// DPI缩放因子
    fn scale_factor(&self) -> f64;
    /// 请求重绘
    fn request_redraw(&self);
}
