//! 粒子工厂
//!
//! 生产完全初始化、尚不可见的粒子：载荷构建、场景注册、随机初始
//! 位置、不透明度为0。构造之后工厂不再接触粒子。

use crate::config::{ContentConfig, DeviceClass};
use crate::render::{SceneGraph, TextRasterizer, TextStyle, TextureLoader};
use crate::scene::{ImagePanel, Particle, ParticleSimulator, TextPanel, VisualPayload};
use glam::Vec2;
use rand::Rng;

/// 粒子工厂
///
/// 设备类在启动时计算一次并显式传入，所有尺寸分支都以它为依据。
pub struct ObjectFactory {
    device_class: DeviceClass,
    content: ContentConfig,
}

impl ObjectFactory {
    pub fn new(device_class: DeviceClass, content: ContentConfig) -> Self {
        Self {
            device_class,
            content,
        }
    }

    pub fn device_class(&self) -> DeviceClass {
        self.device_class
    }

    pub fn content(&self) -> &ContentConfig {
        &self.content
    }

    /// 创建图片面板粒子
    ///
    /// 面板尺寸按设备类选择，纹理由加载协作者惰性解析（解析失败
    /// 降级为空白，不属于本系统的错误）。粒子在此处向场景图注册
    /// 恰好一次。除随机重置外，给定输入结果是确定的。
    pub fn create_image_panel(
        &self,
        image_ref: &str,
        textures: &mut dyn TextureLoader,
        scene: &mut dyn SceneGraph,
        rng: &mut impl Rng,
    ) -> Particle {
        let size = if self.device_class.is_compact() {
            self.content.panel.image_size_compact
        } else {
            self.content.panel.image_size_standard
        };

        let texture = textures.load(image_ref);
        let payload = VisualPayload::Image(ImagePanel {
            texture,
            size: Vec2::from_array(size),
            opacity: 0.0,
        });

        let handle = scene.insert(payload.kind(), texture);
        let mut particle = Particle::new(payload, handle);
        ParticleSimulator::reset_particle(&mut particle, rng);
        particle
    }

    /// 创建文字面板粒子
    ///
    /// 消息经光栅化协作者按固定画布分辨率转为纹理，包装成按设备类
    /// 缩放的公告板。注册与重置同图片面板。
    pub fn create_text_panel(
        &self,
        message: &str,
        rasterizer: &mut dyn TextRasterizer,
        scene: &mut dyn SceneGraph,
        rng: &mut impl Rng,
    ) -> Particle {
        let scale = if self.device_class.is_compact() {
            self.content.panel.text_scale_compact
        } else {
            self.content.panel.text_scale_standard
        };

        let style = TextStyle::from_config(&self.content.text, self.device_class);
        let texture = rasterizer.rasterize(message, &style);
        let payload = VisualPayload::Text(TextPanel {
            texture,
            scale: Vec2::from_array(scale),
            opacity: 0.0,
        });

        let handle = scene.insert(payload.kind(), texture);
        let mut particle = Particle::new(payload, handle);
        ParticleSimulator::reset_particle(&mut particle, rng);
        particle
    }
}
