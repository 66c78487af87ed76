//! 帧调度系统
//!
//! 把模拟从具体的显示刷新API中解耦出来：宿主的帧定时器（winit事件
//! 循环）只负责按目标帧率调用唯一入口`advance_frame`，模拟器本身
//! 从不接触窗口或渲染后端。

use crate::render::{CameraState, FileTextureLoader, SceneGraph};
use crate::scene::ParticleSimulator;
use std::time::{Duration, Instant};

/// 帧调度器
///
/// 持有模拟器、场景图协作者、相机状态和纹理加载器，对外只暴露
/// 一个每帧入口。一次`advance_frame`对粒子池是原子的：重绘请求
/// 严格发生在整批变更之后。
pub struct FrameScheduler {
    simulator: ParticleSimulator,
    scene: Box<dyn SceneGraph>,
    camera: CameraState,
    textures: FileTextureLoader,
}

impl FrameScheduler {
    pub fn new(
        simulator: ParticleSimulator,
        scene: Box<dyn SceneGraph>,
        camera: CameraState,
        textures: FileTextureLoader,
    ) -> Self {
        Self {
            simulator,
            scene,
            camera,
            textures,
        }
    }

    /// 推进一帧
    ///
    /// 每帧最多解码一张待处理纹理（未就绪的面板显示空白），
    /// 然后推进整个粒子池并请求一次重绘。
    pub fn advance_frame(&mut self) {
        self.textures.resolve_next();
        self.simulator.step(self.scene.as_mut(), &self.camera);
    }

    /// 窗口尺寸变化：只更新相机宽高比，不触碰粒子模型
    pub fn handle_resize(&mut self, width: u32, height: u32) {
        self.camera.set_aspect(width, height);
        tracing::debug!(
            target: "engine",
            width,
            height,
            aspect = self.camera.aspect,
            "Viewport resized"
        );
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn simulator(&self) -> &ParticleSimulator {
        &self.simulator
    }
}

/// 目标帧率定时器
///
/// 原始实现依赖显示刷新回调自我重排；这里改为显式的截止时间
/// 序列，宿主在每个截止时间到达后调用一次`tick`。
pub struct FrameTicker {
    interval: Duration,
    next_deadline: Instant,
}

impl FrameTicker {
    pub fn new(target_fps: u32) -> Self {
        let fps = target_fps.max(1);
        Self {
            interval: Duration::from_secs(1) / fps,
            next_deadline: Instant::now(),
        }
    }

    /// 截止时间已到则消费它并返回true
    pub fn tick(&mut self) -> bool {
        let now = Instant::now();
        if now >= self.next_deadline {
            self.next_deadline = now + self.interval;
            true
        } else {
            false
        }
    }

    /// 下一个帧截止时间
    pub fn next_deadline(&self) -> Instant {
        self.next_deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CameraConfig, ContentConfig, DeviceClass};
    use crate::render::{CanvasRasterizer, CanvasSpec, TraceSceneGraph};
    use crate::scene::ObjectFactory;

    fn build_scheduler() -> FrameScheduler {
        let content = ContentConfig::default();
        let factory = ObjectFactory::new(DeviceClass::Standard, content);
        let mut scene = TraceSceneGraph::new();
        let mut textures = FileTextureLoader::new("images");
        let mut rasterizer = CanvasRasterizer::new(CanvasSpec::default());
        let mut simulator = ParticleSimulator::with_seed(7);
        simulator.populate(&factory, &mut textures, &mut rasterizer, &mut scene);
        let camera = CameraState::new(
            DeviceClass::Standard,
            &CameraConfig::default(),
            16.0 / 9.0,
        );
        FrameScheduler::new(simulator, Box::new(scene), camera, textures)
    }

    #[test]
    fn test_advance_frame_steps_simulation() {
        let mut scheduler = build_scheduler();
        assert_eq!(scheduler.simulator().frame(), 0);
        scheduler.advance_frame();
        scheduler.advance_frame();
        assert_eq!(scheduler.simulator().frame(), 2);
    }

    #[test]
    fn test_resize_does_not_touch_pool() {
        let mut scheduler = build_scheduler();
        let before: Vec<_> = scheduler
            .simulator()
            .pool()
            .iter()
            .map(|p| p.position)
            .collect();
        scheduler.handle_resize(640, 480);
        let after: Vec<_> = scheduler
            .simulator()
            .pool()
            .iter()
            .map(|p| p.position)
            .collect();
        assert_eq!(before, after);
        assert!((scheduler.camera().aspect - 640.0 / 480.0).abs() < 1e-6);
    }

    #[test]
    fn test_ticker_fires_immediately_then_waits() {
        // 1fps的间隔足够长，第二次调用必然在截止时间之前
        let mut ticker = FrameTicker::new(1);
        assert!(ticker.tick());
        assert!(!ticker.tick());
        assert!(ticker.next_deadline() > Instant::now());
    }
}
