//! 粒子模拟器
//!
//! 独占粒子池并逐帧推进它。粒子之间互不影响，更新顺序无关；
//! 整批变更完成后才向场景图请求一次重绘，渲染器不会观察到半帧。

use crate::render::{CameraState, SceneGraph, TextRasterizer, TextureLoader};
use crate::scene::{ObjectFactory, Particle};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// 每帧沿+Z的推进量，唯一的运动来源
pub const DRIFT_PER_FRAME: f32 = 0.8;
/// 远处（z低于[`FADE_IN_BELOW_Z`]）的每帧淡入量
pub const FADE_IN_PER_FRAME: f32 = 0.02;
/// 近处（z高于[`FADE_OUT_ABOVE_Z`]）的每帧淡出量
pub const FADE_OUT_PER_FRAME: f32 = 0.05;
/// 淡入区间上界
pub const FADE_IN_BELOW_Z: f32 = -30.0;
/// 淡出区间下界
pub const FADE_OUT_ABOVE_Z: f32 = 5.0;
/// 回收阈值：越过相机平面
pub const RECYCLE_BEYOND_Z: f32 = 20.0;
/// 每帧的装饰性旋转增量（弧度）
pub const SPIN_PER_FRAME: f32 = 0.002;
/// 重置时x、y的均匀分布区间
pub const SPAWN_XY: RangeInclusive<f32> = -20.0..=20.0;
/// 重置时z的均匀分布区间
pub const SPAWN_Z: RangeInclusive<f32> = -250.0..=-50.0;

/// 粒子模拟器
///
/// 池在启动时填充一次，容量固定；之后粒子只被原地回收，
/// 从不创建或销毁。模拟器是构造之后粒子状态的唯一修改者。
pub struct ParticleSimulator {
    /// 粒子池
    pool: Vec<Particle>,
    /// 重置用随机数源
    rng: StdRng,
    /// 已推进的帧数
    frame: u64,
}

impl ParticleSimulator {
    /// 创建空的模拟器
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// 用固定种子创建模拟器，供确定性测试使用
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            pool: Vec::new(),
            rng,
            frame: 0,
        }
    }

    /// 填充粒子池
    ///
    /// 按配置创建`image_count`个图片粒子（图片引用从池中均匀抽取）
    /// 和每条祝福语一个文字粒子。池容量启动后固定，重复填充是
    /// 调用方错误。
    pub fn populate(
        &mut self,
        factory: &ObjectFactory,
        textures: &mut dyn TextureLoader,
        rasterizer: &mut dyn TextRasterizer,
        scene: &mut dyn SceneGraph,
    ) {
        debug_assert!(
            self.pool.is_empty(),
            "particle pool is populated exactly once at startup"
        );
        let content = factory.content();
        self.pool.reserve(content.pool_size());

        for _ in 0..content.image_count {
            // 对应池只有一个元素时choose仍然成立；配置校验保证非空
            let image_ref = content
                .images
                .choose(&mut self.rng)
                .cloned()
                .unwrap_or_default();
            let particle =
                factory.create_image_panel(&image_ref, textures, scene, &mut self.rng);
            self.pool.push(particle);
        }

        for wish in &content.wishes {
            let particle = factory.create_text_panel(wish, rasterizer, scene, &mut self.rng);
            self.pool.push(particle);
        }

        tracing::info!(
            target: "scene",
            images = content.image_count,
            wishes = content.wishes.len(),
            pool = self.pool.len(),
            "Particle pool populated"
        );
    }

    /// 原地重置一个粒子
    ///
    /// 位置重新均匀随机（三轴独立抽取），不透明度归零。对视觉状态
    /// 幂等：调用它与从未显示过该粒子不可区分。旋转保持不变。
    pub fn reset_particle(particle: &mut Particle, rng: &mut impl Rng) {
        particle.position.x = rng.gen_range(SPAWN_XY);
        particle.position.y = rng.gen_range(SPAWN_XY);
        particle.position.z = rng.gen_range(SPAWN_Z);
        particle.set_opacity(0.0);
    }

    /// 推进一帧
    ///
    /// 对池中每个粒子：
    /// 1. z前进[`DRIFT_PER_FRAME`]（x、y在两次重置之间不变）
    /// 2. 远处淡入，钳制在[0,1]
    /// 3. 近处淡出，下界钳制在0
    /// 4. 越过回收阈值则重置（覆盖本帧淡出的结果）
    /// 5. 旋转无条件累加，从不重置
    ///
    /// 全部变更完成后向场景图请求恰好一次重绘。
    pub fn step(&mut self, scene: &mut dyn SceneGraph, camera: &CameraState) {
        for particle in &mut self.pool {
            particle.position.z += DRIFT_PER_FRAME;

            if particle.position.z < FADE_IN_BELOW_Z {
                let opacity = (particle.opacity() + FADE_IN_PER_FRAME).clamp(0.0, 1.0);
                particle.set_opacity(opacity);
            }

            if particle.position.z > FADE_OUT_ABOVE_Z {
                let opacity = (particle.opacity() - FADE_OUT_PER_FRAME).max(0.0);
                particle.set_opacity(opacity);
            }

            if particle.position.z > RECYCLE_BEYOND_Z {
                Self::reset_particle(particle, &mut self.rng);
            }

            particle.rotation_z += SPIN_PER_FRAME;
        }

        self.frame += 1;
        scene.request_redraw(camera);
    }

    /// 粒子池只读视图
    ///
    /// 构造之后模拟器是粒子状态的唯一修改者，对外不暴露可变访问。
    pub fn pool(&self) -> &[Particle] {
        &self.pool
    }

    /// 池中粒子数量
    pub fn particle_count(&self) -> usize {
        self.pool.len()
    }

    /// 已推进的帧数
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl Default for ParticleSimulator {
    fn default() -> Self {
        Self::new()
    }
}
