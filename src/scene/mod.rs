//! 场景粒子模型
//!
//! 粒子是唯一的实体：位置、旋转加上一个可显示的载荷。模拟器对载荷
//! 完全不透明，只读写它的不透明度。
//!
//! ## 架构设计
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              Particle Lifecycle               │
//! ├──────────────────────────────────────────────┤
//! │  1. Construction (ObjectFactory)              │
//! │     - 构建载荷（图片面板 / 文字面板）           │
//! │     - 注册到场景图（每个粒子恰好一次）           │
//! │     - 随机重置初始位置，不透明度为0              │
//! │                                               │
//! │  2. Simulation (ParticleSimulator)            │
//! │     - 每帧沿+Z推进，远处淡入，近处淡出           │
//! │     - 越过相机平面后原地回收                    │
//! │                                               │
//! │  3. Recycle                                   │
//! │     - 位置重新随机，不透明度归零                 │
//! │     - 身份与载荷保持不变，永不销毁               │
//! └──────────────────────────────────────────────┘
//! ```

pub mod factory;
pub mod simulator;

pub use factory::ObjectFactory;
pub use simulator::ParticleSimulator;

use crate::render::{PanelKind, SceneHandle, TextureHandle};
use glam::{Vec2, Vec3};

/// 带纹理的矩形图片面板
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePanel {
    /// 纹理句柄（惰性解码，未就绪时显示空白）
    pub texture: TextureHandle,
    /// 世界单位的面板尺寸
    pub size: Vec2,
    /// 不透明度 [0,1]
    pub opacity: f32,
}

/// 公告板式文字面板
#[derive(Debug, Clone, PartialEq)]
pub struct TextPanel {
    /// 光栅化文字的纹理句柄
    pub texture: TextureHandle,
    /// 公告板缩放
    pub scale: Vec2,
    /// 不透明度 [0,1]
    pub opacity: f32,
}

/// 粒子的可显示载荷
///
/// 模拟器只通过不透明度访问器接触载荷，从不关心其内容。
#[derive(Debug, Clone, PartialEq)]
pub enum VisualPayload {
    Image(ImagePanel),
    Text(TextPanel),
}

impl VisualPayload {
    pub fn kind(&self) -> PanelKind {
        match self {
            Self::Image(_) => PanelKind::Image,
            Self::Text(_) => PanelKind::Text,
        }
    }

    pub fn texture(&self) -> TextureHandle {
        match self {
            Self::Image(panel) => panel.texture,
            Self::Text(panel) => panel.texture,
        }
    }

    pub fn opacity(&self) -> f32 {
        match self {
            Self::Image(panel) => panel.opacity,
            Self::Text(panel) => panel.opacity,
        }
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        match self {
            Self::Image(panel) => panel.opacity = opacity,
            Self::Text(panel) => panel.opacity = opacity,
        }
    }
}

/// 池化的可回收视觉实体
///
/// 构造后永不销毁：回收只是原地重置位置和不透明度，身份（场景句柄）
/// 和载荷保持不变。
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// 观察体内的位置
    pub position: Vec3,
    /// 绕Z轴的累积旋转（弧度），单调递增，永不回绕
    pub rotation_z: f32,
    /// 可显示载荷
    pub payload: VisualPayload,
    /// 场景图注册句柄，构造时分配一次
    pub handle: SceneHandle,
}

impl Particle {
    pub fn new(payload: VisualPayload, handle: SceneHandle) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation_z: 0.0,
            payload,
            handle,
        }
    }

    pub fn opacity(&self) -> f32 {
        self.payload.opacity()
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.payload.set_opacity(opacity);
    }
}
