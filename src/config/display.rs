use super::{ConfigError, ConfigResult};
use crate::impl_default;
use serde::{Deserialize, Serialize};

/// 显示配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// 初始窗口宽度（逻辑像素）
    pub width: u32,

    /// 初始窗口高度（逻辑像素）
    pub height: u32,

    /// 窗口标题
    pub title: String,

    /// 紧凑布局断点：视口宽度小于该值时使用紧凑设备类
    pub compact_breakpoint: u32,

    /// 目标帧率
    pub target_fps: u32,

    /// 相机配置
    pub camera: CameraConfig,
}

impl_default!(DisplayConfig {
    width: 1280,
    height: 720,
    title: "Wish Drift".to_string(),
    compact_breakpoint: 768,
    target_fps: 60,
    camera: CameraConfig::default(),
});

impl DisplayConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ValidationError(
                "display resolution must be non-zero".to_string(),
            ));
        }
        if self.compact_breakpoint == 0 {
            return Err(ConfigError::ValidationError(
                "compact_breakpoint must be positive".to_string(),
            ));
        }
        if self.target_fps == 0 {
            return Err(ConfigError::ValidationError(
                "target_fps must be positive".to_string(),
            ));
        }
        self.camera.validate()
    }
}

/// 相机配置
///
/// 视场角按设备类区分，其余参数共享。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// 紧凑设备垂直视场角（度）
    pub fov_compact: f32,
    /// 标准设备垂直视场角（度）
    pub fov_standard: f32,
    /// 近裁剪面
    pub near: f32,
    /// 远裁剪面
    pub far: f32,
    /// 相机沿主轴到原点的初始距离
    pub distance: f32,
}

impl_default!(CameraConfig {
    fov_compact: 85.0,
    fov_standard: 75.0,
    near: 0.1,
    far: 1000.0,
    distance: 20.0,
});

impl CameraConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        for fov in [self.fov_compact, self.fov_standard] {
            if fov <= 0.0 || fov >= 180.0 {
                return Err(ConfigError::ValidationError(format!(
                    "camera fov must be in (0, 180), got {}",
                    fov
                )));
            }
        }
        if self.near <= 0.0 || self.far <= self.near {
            return Err(ConfigError::ValidationError(
                "camera planes must satisfy 0 < near < far".to_string(),
            ));
        }
        Ok(())
    }
}

/// 设备类
///
/// 启动时根据视口宽度计算一次，之后不可变。工厂和相机的所有
/// 尺寸分支都以它为依据，不读取任何全局状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceClass {
    /// 移动端紧凑布局
    Compact,
    /// 桌面标准布局
    Standard,
}

impl DeviceClass {
    /// 根据视口宽度（逻辑像素）和断点计算设备类
    pub fn from_viewport_width(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            Self::Compact
        } else {
            Self::Standard
        }
    }

    /// 根据物理像素宽度和DPI缩放因子计算设备类
    ///
    /// 断点以逻辑像素定义，而窗口报告的内部尺寸是物理像素，
    /// 比较前先除以缩放因子。缩放因子非法时按1处理。
    pub fn from_physical_width(physical_width: u32, scale_factor: f64, breakpoint: u32) -> Self {
        let scale = if scale_factor > 0.0 { scale_factor } else { 1.0 };
        let logical_width = (physical_width as f64 / scale).round() as u32;
        Self::from_viewport_width(logical_width, breakpoint)
    }

    pub fn is_compact(&self) -> bool {
        matches!(self, Self::Compact)
    }
}
