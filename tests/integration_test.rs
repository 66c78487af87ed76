use wish_drift::config::{CameraConfig, ContentConfig, DeviceClass, SceneConfig};
use wish_drift::render::{
    CameraState, CanvasRasterizer, CanvasSpec, FileTextureLoader, PanelKind, SceneGraph,
    TraceSceneGraph,
};
use wish_drift::scene::simulator::{DRIFT_PER_FRAME, RECYCLE_BEYOND_Z, SPAWN_XY, SPAWN_Z};
use wish_drift::scene::{ObjectFactory, ParticleSimulator};

fn build_pool(device_class: DeviceClass, seed: u64) -> (ParticleSimulator, TraceSceneGraph) {
    let content = ContentConfig::default();
    let factory = ObjectFactory::new(device_class, content);
    let mut scene = TraceSceneGraph::new();
    let mut textures = FileTextureLoader::new("images");
    let mut rasterizer = CanvasRasterizer::new(CanvasSpec::default());
    let mut simulator = ParticleSimulator::with_seed(seed);
    simulator.populate(&factory, &mut textures, &mut rasterizer, &mut scene);
    (simulator, scene)
}

fn standard_camera() -> CameraState {
    CameraState::new(DeviceClass::Standard, &CameraConfig::default(), 16.0 / 9.0)
}

#[test]
fn test_initial_pool() {
    // 默认配置：25个图片粒子 + 6条祝福语 = 31个粒子
    let (simulator, scene) = build_pool(DeviceClass::Standard, 1);
    assert_eq!(simulator.particle_count(), 31);
    assert_eq!(scene.registered(), 31);

    let images = simulator
        .pool()
        .iter()
        .filter(|p| p.payload.kind() == PanelKind::Image)
        .count();
    let texts = simulator
        .pool()
        .iter()
        .filter(|p| p.payload.kind() == PanelKind::Text)
        .count();
    assert_eq!(images, 25);
    assert_eq!(texts, 6);

    // 全部不可见且位于生成区间内
    for p in simulator.pool() {
        assert_eq!(p.opacity(), 0.0);
        assert!(SPAWN_XY.contains(&p.position.x));
        assert!(SPAWN_XY.contains(&p.position.y));
        assert!(SPAWN_Z.contains(&p.position.z));
        assert_eq!(p.rotation_z, 0.0);
    }
}

#[test]
fn test_pool_size_follows_config() {
    let mut config = SceneConfig::default();
    config.content.image_count = 3;
    config.content.wishes = vec!["Hi".to_string(), "There".to_string()];
    let factory = ObjectFactory::new(DeviceClass::Standard, config.content.clone());
    let mut scene = TraceSceneGraph::new();
    let mut textures = FileTextureLoader::new("images");
    let mut rasterizer = CanvasRasterizer::new(CanvasSpec::default());
    let mut simulator = ParticleSimulator::with_seed(2);
    simulator.populate(&factory, &mut textures, &mut rasterizer, &mut scene);
    assert_eq!(simulator.particle_count(), 5);
}

#[test]
fn test_long_run_invariants() {
    // 跑足够多帧让每个粒子至少回收一次（最远-250，每帧0.8）
    let (mut simulator, mut scene) = build_pool(DeviceClass::Standard, 3);
    let camera = standard_camera();
    let frames = 800;
    for _ in 0..frames {
        simulator.step(&mut scene, &camera);
        for p in simulator.pool() {
            assert!(p.opacity() >= 0.0 && p.opacity() <= 1.0);
            assert!(p.position.z >= -250.0 && p.position.z <= 25.0);
        }
    }

    // 池容量固定，每帧恰好一次重绘，句柄保持唯一
    assert_eq!(simulator.particle_count(), 31);
    assert_eq!(scene.redraw_requests(), frames);
    assert_eq!(scene.registered(), 31);

    // 旋转始终为正且在持续累积
    for p in simulator.pool() {
        assert!(p.rotation_z > 0.0);
    }
}

#[test]
fn test_recycled_particle_fades_back_in() {
    let (mut simulator, mut scene) = build_pool(DeviceClass::Standard, 4);
    let camera = standard_camera();

    // 选最靠近相机的粒子，推进到它恰好越过回收阈值的那一帧。
    // 预测循环与模拟器做同样的逐帧加法，f32结果逐位一致。
    let (index, z0) = simulator
        .pool()
        .iter()
        .enumerate()
        .map(|(i, p)| (i, p.position.z))
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap())
        .unwrap();
    let mut frames = 0u32;
    let mut z = z0;
    while z <= RECYCLE_BEYOND_Z {
        z += DRIFT_PER_FRAME;
        frames += 1;
    }

    for _ in 0..frames {
        simulator.step(&mut scene, &camera);
    }

    // 回收帧：位置回到生成区间，不透明度归零（回收覆盖淡出）
    let p = &simulator.pool()[index];
    assert!(SPAWN_Z.contains(&p.position.z));
    assert_eq!(p.opacity(), 0.0);

    // 回收后继续推进，粒子在远处重新淡入
    for _ in 0..5 {
        simulator.step(&mut scene, &camera);
    }
    assert!(simulator.pool()[index].opacity() > 0.0);
}

#[test]
fn test_compact_pool_matches_device_class() {
    let (simulator, _) = build_pool(DeviceClass::Compact, 5);
    for p in simulator.pool() {
        match &p.payload {
            wish_drift::scene::VisualPayload::Image(panel) => {
                assert_eq!(panel.size.x, 7.0);
                assert_eq!(panel.size.y, 10.0);
            }
            wish_drift::scene::VisualPayload::Text(panel) => {
                assert_eq!(panel.scale.x, 35.0);
                assert_eq!(panel.scale.y, 9.0);
            }
        }
    }
}

#[test]
fn test_redraw_carries_camera_state() {
    // 模拟器对相机状态只读；重绘请求携带当前投影参数
    let (mut simulator, _) = build_pool(DeviceClass::Compact, 6);

    struct RecordingScene {
        last_fov: Option<f32>,
    }
    impl SceneGraph for RecordingScene {
        fn insert(
            &mut self,
            _kind: PanelKind,
            _texture: wish_drift::render::TextureHandle,
        ) -> wish_drift::render::SceneHandle {
            wish_drift::render::SceneHandle(0)
        }
        fn request_redraw(&mut self, camera: &CameraState) {
            self.last_fov = Some(camera.fov_y_degrees);
        }
    }

    let mut scene = RecordingScene { last_fov: None };
    let camera = CameraState::new(DeviceClass::Compact, &CameraConfig::default(), 0.75);
    simulator.step(&mut scene, &camera);
    assert_eq!(scene.last_fov, Some(85.0));
}
