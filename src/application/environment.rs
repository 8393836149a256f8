//! シーン内の情報 (カメラやライトなど) を格納する `Environment` 関連のモジュール。

use glium::{uniform, uniforms::Uniforms};
use ultraviolet::{projection::perspective_gl, Mat4, Vec3};

/// シーン唯一の点光源
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLight {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub position: Vec3,
}

impl SceneLight {
    pub fn to_uniforms(&self) -> impl Uniforms {
        let ambient: [f32; 3] = self.ambient.into();
        let diffuse: [f32; 3] = self.diffuse.into();
        let specular: [f32; 3] = self.specular.into();
        let position: [f32; 3] = self.position.into();
        uniform! {
            light_ambient: ambient,
            light_diffuse: diffuse,
            light_specular: specular,
            light_position: position,
        }
    }
}

/// シーンの状態を表す。
#[derive(Debug, Clone)]
pub struct Environment {
    camera_position: Vec3,
    projection_matrix: Mat4,
    global_ambient: Vec3,
    light: SceneLight,
}

impl Environment {
    pub fn new() -> Environment {
        Environment {
            camera_position: Vec3::new(0.0, 0.0, 0.0),
            projection_matrix: perspective_gl(45f32.to_radians(), 800.0 / 600.0, 1.0, 50.0),
            global_ambient: Vec3::new(0.05, 0.05, 0.05),
            light: SceneLight {
                ambient: Vec3::new(0.15, 0.15, 0.15),
                diffuse: Vec3::new(1.0, 1.0, 1.0),
                specular: Vec3::new(1.0, 1.0, 1.0),
                position: Vec3::new(2.0, 2.0, 2.0),
            },
        }
    }

    /// カメラ位置を設定する。原点を向く。
    pub fn set_camera(&mut self, position: Vec3) {
        self.camera_position = position;
    }

    pub fn light(&self) -> SceneLight {
        self.light
    }

    /// uniforms を追加する。
    pub fn get_uniforms(&self) -> impl Uniforms {
        let view: [[f32; 4]; 4] = Mat4::from_translation(-self.camera_position).into();
        let projection: [[f32; 4]; 4] = self.projection_matrix.into();
        let camera: [f32; 3] = self.camera_position.into();
        let global_ambient: [f32; 3] = self.global_ambient.into();

        uniform! {
            env_view_matrix: view,
            env_projection_matrix: projection,
            env_camera_position: camera,
            env_global_ambient: global_ambient,
        }
    }
}
