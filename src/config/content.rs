use super::{ConfigError, ConfigResult};
use crate::impl_default;
use crate::render::text::hex_color;
use serde::{Deserialize, Serialize};

/// 场景内容配置
///
/// 图片引用池、祝福语列表以及面板/文字的尺寸参数。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// 图片目录
    pub image_dir: String,

    /// 图片引用池（每个图片粒子随机取一张）
    pub images: Vec<String>,

    /// 图片粒子数量
    pub image_count: u32,

    /// 祝福语列表（每条生成一个文字粒子）
    pub wishes: Vec<String>,

    /// 文字光栅化参数
    pub text: TextConfig,

    /// 面板尺寸参数
    pub panel: PanelConfig,
}

impl_default!(ContentConfig {
    image_dir: "images".to_string(),
    images: vec![
        "img1.jpg".to_string(),
        "img2.jpg".to_string(),
        "img3.jpg".to_string(),
        "img4.jpg".to_string(),
    ],
    image_count: 25,
    wishes: vec![
        "Hey Shravani 💖".to_string(),
        "Happy Birthday 🎂".to_string(),
        "You Are My Favorite ✨".to_string(),
        "Stay Happy Always 😊".to_string(),
        "Forever Special 💕".to_string(),
        "Smile More 🌸".to_string(),
    ],
    text: TextConfig::default(),
    panel: PanelConfig::default(),
});

impl ContentConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.images.is_empty() {
            return Err(ConfigError::ValidationError(
                "image list must not be empty".to_string(),
            ));
        }
        if self.image_count == 0 {
            return Err(ConfigError::ValidationError(
                "image_count must be positive".to_string(),
            ));
        }
        self.text.validate()
    }

    /// 粒子池总容量（图片数 + 祝福语数），启动后固定
    pub fn pool_size(&self) -> usize {
        self.image_count as usize + self.wishes.len()
    }
}

/// 文字光栅化配置
///
/// 对应离屏画布光栅化的全部样式参数。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextConfig {
    /// 紧凑设备字号（像素）
    pub font_size_compact: f32,
    /// 标准设备字号（像素）
    pub font_size_standard: f32,
    /// 填充颜色（十六进制，如 "#ff69b4"）
    pub fill_color: String,
    /// 阴影颜色
    pub shadow_color: String,
    /// 阴影模糊半径
    pub shadow_blur: f32,
    /// 画布宽度（像素）
    pub canvas_width: u32,
    /// 画布高度（像素）
    pub canvas_height: u32,
}

impl_default!(TextConfig {
    font_size_compact: 70.0,
    font_size_standard: 50.0,
    fill_color: "#ff69b4".to_string(),
    shadow_color: "#ff1493".to_string(),
    shadow_blur: 30.0,
    canvas_width: 1024,
    canvas_height: 256,
});

impl TextConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.font_size_compact <= 0.0 || self.font_size_standard <= 0.0 {
            return Err(ConfigError::ValidationError(
                "font sizes must be positive".to_string(),
            ));
        }
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ConfigError::ValidationError(
                "canvas dimensions must be non-zero".to_string(),
            ));
        }
        for color in [&self.fill_color, &self.shadow_color] {
            if hex_color(color).is_none() {
                return Err(ConfigError::ValidationError(format!(
                    "invalid hex color: {}",
                    color
                )));
            }
        }
        Ok(())
    }
}

/// 面板尺寸配置
///
/// 图片面板为世界单位的矩形尺寸，文字面板为公告板缩放。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    /// 紧凑设备图片面板尺寸 [宽, 高]
    pub image_size_compact: [f32; 2],
    /// 标准设备图片面板尺寸
    pub image_size_standard: [f32; 2],
    /// 紧凑设备文字面板缩放 [x, y]
    pub text_scale_compact: [f32; 2],
    /// 标准设备文字面板缩放
    pub text_scale_standard: [f32; 2],
}

impl_default!(PanelConfig {
    image_size_compact: [7.0, 10.0],
    image_size_standard: [9.0, 13.0],
    text_scale_compact: [35.0, 9.0],
    text_scale_standard: [25.0, 6.0],
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content() {
        let content = ContentConfig::default();
        assert_eq!(content.images.len(), 4);
        assert_eq!(content.image_count, 25);
        assert_eq!(content.wishes.len(), 6);
        assert_eq!(content.pool_size(), 31);
        assert!(content.validate().is_ok());
    }

    #[test]
    fn test_bad_color_rejected() {
        let mut content = ContentConfig::default();
        content.text.fill_color = "hotpink".to_string();
        assert!(content.validate().is_err());
    }
}
