//! 文字光栅化协作者
//!
//! 把一条消息按固定画布分辨率光栅化为纹理。光栅化本身由外部
//! 协作者完成，这里只定义样式参数和trait接口。

use crate::config::{DeviceClass, TextConfig};
use crate::impl_default;
use crate::render::texture::TextureHandle;

/// 文本样式
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// 字体大小 (像素)
    pub font_size: f32,
    /// 填充颜色
    pub fill_color: [f32; 4],
    /// 阴影颜色
    pub shadow_color: [f32; 4],
    /// 阴影模糊半径
    pub shadow_blur: f32,
}

impl_default!(TextStyle {
    font_size: 50.0,
    fill_color: [1.0, 1.0, 1.0, 1.0],
    shadow_color: [0.0, 0.0, 0.0, 0.5],
    shadow_blur: 0.0,
});

impl TextStyle {
    /// 根据设备类和文字配置生成样式
    ///
    /// 颜色串已在配置校验阶段检查过，这里解析失败时回退为白色。
    pub fn from_config(config: &TextConfig, device_class: DeviceClass) -> Self {
        let font_size = if device_class.is_compact() {
            config.font_size_compact
        } else {
            config.font_size_standard
        };
        Self {
            font_size,
            fill_color: hex_color(&config.fill_color).unwrap_or([1.0, 1.0, 1.0, 1.0]),
            shadow_color: hex_color(&config.shadow_color).unwrap_or([1.0, 1.0, 1.0, 1.0]),
            shadow_blur: config.shadow_blur,
        }
    }
}

/// 离屏画布规格
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSpec {
    /// 画布宽度（像素）
    pub width: u32,
    /// 画布高度（像素）
    pub height: u32,
}

impl_default!(CanvasSpec {
    width: 1024,
    height: 256,
});

impl CanvasSpec {
    pub fn from_config(config: &TextConfig) -> Self {
        Self {
            width: config.canvas_width,
            height: config.canvas_height,
        }
    }
}

/// 文字光栅化协作者
pub trait TextRasterizer {
    /// 将消息光栅化为纹理并返回句柄
    fn rasterize(&mut self, message: &str, style: &TextStyle) -> TextureHandle;
}

/// 记录式光栅化器
///
/// 实际像素生成属于外部渲染栈；默认实现分配句柄并记录请求，
/// 供场景在无渲染后端的环境下运行和测试。
#[derive(Debug)]
pub struct CanvasRasterizer {
    canvas: CanvasSpec,
    next_handle: u32,
}

impl CanvasRasterizer {
    pub fn new(canvas: CanvasSpec) -> Self {
        Self {
            canvas,
            next_handle: 0,
        }
    }

    pub fn canvas(&self) -> CanvasSpec {
        self.canvas
    }

    /// 已光栅化的消息数量
    pub fn rasterized(&self) -> u32 {
        self.next_handle
    }
}

impl TextRasterizer for CanvasRasterizer {
    fn rasterize(&mut self, message: &str, style: &TextStyle) -> TextureHandle {
        let handle = TextureHandle(self.next_handle);
        self.next_handle += 1;
        tracing::debug!(
            target: "render",
            texture = handle.0,
            message,
            font_size = style.font_size,
            canvas_width = self.canvas.width,
            canvas_height = self.canvas.height,
            "Text rasterized"
        );
        handle
    }
}

/// 解析十六进制颜色串（"#rrggbb" 或 "#rrggbbaa"）为归一化RGBA
pub fn hex_color(hex: &str) -> Option<[f32; 4]> {
    let digits = hex.strip_prefix('#')?;
    if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
        return None;
    }
    let channel = |i: usize| -> Option<f32> {
        let byte = u8::from_str_radix(&digits[i..i + 2], 16).ok()?;
        Some(byte as f32 / 255.0)
    };
    let r = channel(0)?;
    let g = channel(2)?;
    let b = channel(4)?;
    let a = if digits.len() == 8 { channel(6)? } else { 1.0 };
    Some([r, g, b, a])
}
