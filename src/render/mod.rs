//! 渲染协作者接口
//!
//! 渲染管线本身不属于本系统：场景图、纹理加载和文字光栅化都以trait
//! 形式暴露，核心只通过这些接口注册粒子并每帧请求一次重绘。

pub mod text;
pub mod texture;

pub use text::{CanvasRasterizer, CanvasSpec, TextRasterizer, TextStyle};
pub use texture::{FileTextureLoader, TextureHandle, TextureLoader};

use crate::config::{CameraConfig, DeviceClass};

/// 场景图注册句柄
///
/// 每个粒子在构造时注册一次，句柄在粒子的整个生命周期内不变。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneHandle(pub u32);

/// 面板类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    /// 带纹理的矩形面板
    Image,
    /// 公告板式文字面板
    Text,
}

/// 场景图协作者
///
/// 外部渲染器实现该trait。`insert`在构造期对每个粒子恰好调用一次；
/// `request_redraw`在模拟器完成整批变更后每帧恰好调用一次。
pub trait SceneGraph {
    /// 注册一个新面板，返回其场景句柄
    fn insert(&mut self, kind: PanelKind, texture: TextureHandle) -> SceneHandle;

    /// 请求一次重绘
    fn request_redraw(&mut self, camera: &CameraState);
}

/// 仅记录日志的场景图实现
///
/// 渲染管线在本crate范围之外，默认实现只分配句柄并在trace级别记录
/// 每帧的重绘请求，同时维护供测试断言的计数器。
#[derive(Debug, Default)]
pub struct TraceSceneGraph {
    next_handle: u32,
    redraw_requests: u64,
}

impl TraceSceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已注册的面板数量
    pub fn registered(&self) -> u32 {
        self.next_handle
    }

    /// 已请求的重绘次数
    pub fn redraw_requests(&self) -> u64 {
        self.redraw_requests
    }
}

impl SceneGraph for TraceSceneGraph {
    fn insert(&mut self, kind: PanelKind, texture: TextureHandle) -> SceneHandle {
        let handle = SceneHandle(self.next_handle);
        self.next_handle += 1;
        tracing::debug!(
            target: "render",
            ?kind,
            texture = texture.0,
            handle = handle.0,
            "Panel registered"
        );
        handle
    }

    fn request_redraw(&mut self, camera: &CameraState) {
        self.redraw_requests += 1;
        tracing::trace!(
            target: "render",
            frame = self.redraw_requests,
            fov = camera.fov_y_degrees,
            aspect = camera.aspect,
            "Redraw requested"
        );
    }
}

/// 相机状态
///
/// 投影参数在启动时由设备类决定；窗口尺寸变化只更新宽高比。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// 垂直视场角（度）
    pub fov_y_degrees: f32,
    /// 宽高比
    pub aspect: f32,
    /// 近裁剪面
    pub near: f32,
    /// 远裁剪面
    pub far: f32,
    /// 沿+Z到原点的距离
    pub distance: f32,
}

impl CameraState {
    /// 根据设备类和相机配置创建相机状态
    pub fn new(device_class: DeviceClass, config: &CameraConfig, aspect: f32) -> Self {
        let fov_y_degrees = if device_class.is_compact() {
            config.fov_compact
        } else {
            config.fov_standard
        };
        Self {
            fov_y_degrees,
            aspect,
            near: config.near,
            far: config.far,
            distance: config.distance,
        }
    }

    /// 窗口尺寸变化时更新宽高比
    ///
    /// 对粒子模型没有任何影响。
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_per_device_class() {
        let config = CameraConfig::default();
        let compact = CameraState::new(DeviceClass::Compact, &config, 16.0 / 9.0);
        assert_eq!(compact.fov_y_degrees, 85.0);
        let standard = CameraState::new(DeviceClass::Standard, &config, 16.0 / 9.0);
        assert_eq!(standard.fov_y_degrees, 75.0);
        assert_eq!(standard.near, 0.1);
        assert_eq!(standard.far, 1000.0);
        assert_eq!(standard.distance, 20.0);
    }

    #[test]
    fn test_resize_only_touches_aspect() {
        let config = CameraConfig::default();
        let mut camera = CameraState::new(DeviceClass::Standard, &config, 1.0);
        camera.set_aspect(1920, 1080);
        assert!((camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);
        assert_eq!(camera.fov_y_degrees, 75.0);

        // 高度为0时保持原值
        camera.set_aspect(100, 0);
        assert!((camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    }

    #[test]
    fn test_trace_scene_graph_handles() {
        let mut scene = TraceSceneGraph::new();
        let a = scene.insert(PanelKind::Image, TextureHandle(0));
        let b = scene.insert(PanelKind::Text, TextureHandle(1));
        assert_ne!(a, b);
        assert_eq!(scene.registered(), 2);
        assert_eq!(scene.redraw_requests(), 0);
    }
}
