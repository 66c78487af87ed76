//! 纹理加载协作者
//!
//! 纹理解码是惰性的：`load`立即返回句柄，解码推迟到之后的帧。
//! 解码失败只降级为空白面板并记录警告，不向核心传播错误。

use std::collections::HashMap;
use std::path::PathBuf;

/// 纹理句柄
///
/// 由协作者分配的不透明id，核心从不解引用它。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// 纹理加载协作者
pub trait TextureLoader {
    /// 为图片引用分配句柄，解码可以延后进行
    fn load(&mut self, image_ref: &str) -> TextureHandle;
}

/// 基于文件的纹理加载器
///
/// `load`只登记路径；`resolve_next`每次解码一个待处理文件，
/// 由帧调度器在帧间隙调用，未解码的面板显示为空白。
pub struct FileTextureLoader {
    root: PathBuf,
    pending: Vec<(TextureHandle, PathBuf)>,
    resolved: HashMap<u32, image::DynamicImage>,
    failed: u32,
    next_handle: u32,
}

impl FileTextureLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            pending: Vec::new(),
            resolved: HashMap::new(),
            failed: 0,
            next_handle: 0,
        }
    }

    /// 解码一个待处理纹理
    ///
    /// 返回是否还有剩余工作。失败的文件记为降级，不再重试。
    pub fn resolve_next(&mut self) -> bool {
        if let Some((handle, path)) = self.pending.pop() {
            match image::open(&path) {
                Ok(img) => {
                    tracing::debug!(
                        target: "render",
                        texture = handle.0,
                        path = %path.display(),
                        width = img.width(),
                        height = img.height(),
                        "Texture decoded"
                    );
                    self.resolved.insert(handle.0, img);
                }
                Err(e) => {
                    self.failed += 1;
                    tracing::warn!(
                        target: "render",
                        texture = handle.0,
                        path = %path.display(),
                        "Texture decode failed, panel stays blank: {}",
                        e
                    );
                }
            }
        }
        !self.pending.is_empty()
    }

    /// 查询已解码的纹理数据
    pub fn texture(&self, handle: TextureHandle) -> Option<&image::DynamicImage> {
        self.resolved.get(&handle.0)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn failed_count(&self) -> u32 {
        self.failed
    }
}

impl TextureLoader for FileTextureLoader {
    fn load(&mut self, image_ref: &str) -> TextureHandle {
        let handle = TextureHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push((handle, self.root.join(image_ref)));
        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_is_lazy() {
        let mut loader = FileTextureLoader::new("images");
        let a = loader.load("img1.jpg");
        let b = loader.load("img2.jpg");
        assert_ne!(a, b);
        assert_eq!(loader.pending_count(), 2);
        assert!(loader.texture(a).is_none());
    }

    #[test]
    fn test_missing_file_degrades() {
        let mut loader = FileTextureLoader::new("no_such_dir");
        let handle = loader.load("missing.png");
        let more = loader.resolve_next();
        assert!(!more);
        assert_eq!(loader.failed_count(), 1);
        assert!(loader.texture(handle).is_none());
    }
}
