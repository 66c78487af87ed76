//! 引擎主入口
//!
//! 定义Engine结构和主运行循环

use crate::config::{DeviceClass, LoggingConfig, SceneConfig};
use crate::core::error::{SceneError, SceneResult};
use crate::core::scheduler::{FrameScheduler, FrameTicker};
use crate::platform::winit::WinitWindow;
use crate::platform::Window;
use crate::render::{
    CameraState, CanvasRasterizer, CanvasSpec, FileTextureLoader, TraceSceneGraph,
};
use crate::scene::{ObjectFactory, ParticleSimulator};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};

/// 场景引擎主结构
///
/// `Engine`是进程入口，负责：
/// - 加载并校验配置，初始化日志
/// - 创建窗口和事件循环
/// - 计算设备类并装配工厂、模拟器和帧调度器
/// - 驱动主循环直到窗口关闭
///
/// # 示例
///
/// ```no_run
/// use wish_drift::core::Engine;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     Engine::run()?;
///     Ok(())
/// }
/// ```
pub struct Engine;

impl Engine {
    /// 运行引擎主循环
    pub fn run() -> SceneResult<()> {
        let config = SceneConfig::load_or_default();
        config.validate()?;
        Self::initialize_logging(&config.logging);
        tracing::info!(target: "engine", "Engine starting");

        let (event_loop, window) = Self::initialize_window(&config)?;

        let (width, height) = window.size();
        let scale_factor = window.scale_factor();
        let device_class = DeviceClass::from_physical_width(
            width,
            scale_factor,
            config.display.compact_breakpoint,
        );
        tracing::info!(
            target: "engine",
            ?device_class,
            width,
            height,
            scale_factor,
            "Device class detected"
        );

        let scheduler = Self::initialize_scene(&config, device_class, width, height);

        Self::run_event_loop(event_loop, window, scheduler, config.display.target_fps)?;

        tracing::info!(target: "engine", "Engine shutting down");
        Ok(())
    }

    /// 初始化日志系统
    ///
    /// 配置tracing日志框架。`RUST_LOG`环境变量优先，未设置时使用
    /// 配置文件中的日志级别。
    fn initialize_logging(config: &LoggingConfig) {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.level.as_filter()));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }

    /// 初始化窗口和事件循环
    fn initialize_window(config: &SceneConfig) -> SceneResult<(EventLoop<()>, WinitWindow)> {
        let event_loop = EventLoop::new()
            .map_err(|e| SceneError::EventLoop(format!("Failed to create event loop: {}", e)))?;

        let window = WinitWindow::try_new(
            &event_loop,
            (config.display.width, config.display.height),
            &config.display.title,
        )
        .ok_or_else(|| SceneError::Window("Failed to create window".to_string()))?;

        Ok((event_loop, window))
    }

    /// 装配场景
    ///
    /// 创建相机、协作者和工厂，填充粒子池，返回帧调度器。
    /// 纹理解码失败只会降级为空白面板，不会让装配失败。
    fn initialize_scene(
        config: &SceneConfig,
        device_class: DeviceClass,
        width: u32,
        height: u32,
    ) -> FrameScheduler {
        let aspect = width as f32 / height.max(1) as f32;
        let camera = CameraState::new(device_class, &config.display.camera, aspect);

        let mut scene = TraceSceneGraph::new();
        let mut textures = FileTextureLoader::new(config.content.image_dir.clone());
        let mut rasterizer = CanvasRasterizer::new(CanvasSpec::from_config(&config.content.text));

        let factory = ObjectFactory::new(device_class, config.content.clone());
        let mut simulator = ParticleSimulator::new();
        simulator.populate(&factory, &mut textures, &mut rasterizer, &mut scene);

        FrameScheduler::new(simulator, Box::new(scene), camera, textures)
    }

    /// 运行事件循环
    ///
    /// 宿主定时器按目标帧率触发`advance_frame`；窗口尺寸变化只
    /// 更新相机宽高比。循环一直运行到窗口被关闭。
    fn run_event_loop(
        event_loop: EventLoop<()>,
        window: WinitWindow,
        mut scheduler: FrameScheduler,
        target_fps: u32,
    ) -> SceneResult<()> {
        let mut ticker = FrameTicker::new(target_fps);

        event_loop
            .run(move |event, elwt| {
                match event {
                    Event::WindowEvent { event, .. } => match event {
                        WindowEvent::CloseRequested => {
                            elwt.exit();
                        }
                        WindowEvent::Resized(size) => {
                            scheduler.handle_resize(size.width, size.height);
                        }
                        _ => {}
                    },
                    Event::AboutToWait => {
                        if ticker.tick() {
                            scheduler.advance_frame();
                            window.request_redraw();
                        }
                    }
                    _ => {}
                }
                elwt.set_control_flow(ControlFlow::WaitUntil(ticker.next_deadline()));
            })
            .map_err(|e| SceneError::EventLoop(format!("Event loop error: {}", e)))?;

        Ok(())
    }
}
