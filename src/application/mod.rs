//! 実際のアプリケーション挙動を記述する。

mod environment;
mod material;
mod model;

use environment::Environment;
use material::ShadingParameters;
use model::Model;

use crate::rendering::{load_program, UniformsSet};
use std::time::Duration;

use anyhow::Result;
use glium::{
    uniform, uniforms::Uniforms, Depth, DepthTest, Display, DrawParameters, Frame, Program,
    Surface,
};
use ultraviolet::{Mat4, Vec3};

// glutSolidSphere(1.0, 48, 48) 相当
const SPHERE_RADIUS: f32 = 1.0;
const SPHERE_SLICES: u32 = 48;
const SPHERE_STACKS: u32 = 48;

/// 球の左右オフセット
const SPHERE_OFFSET_X: f32 = 1.6;

/// キー入力で発生するパラメーター操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterAction {
    IncreaseDiffuse,
    DecreaseDiffuse,
    IncreaseShininess,
    DecreaseShininess,
    Reset,
}

pub struct Application {
    environment: Environment,
    parameters: ShadingParameters,
    elapsed_time: Duration,
    program_lambert: Program,
    program_phong: Program,
    sphere: Model,
}

impl Application {
    pub fn new(display: &Display) -> Result<Application> {
        let sphere = Model::sphere(display, SPHERE_RADIUS, SPHERE_SLICES, SPHERE_STACKS)?;

        let program_lambert = load_program(display, "lambert")?;
        let program_phong = load_program(display, "phong")?;

        let mut environment = Environment::new();
        environment.set_camera(Vec3::new(0.0, 0.0, 6.0));

        Ok(Application {
            environment,
            parameters: ShadingParameters::new(),
            elapsed_time: Duration::new(0, 0),
            program_lambert,
            program_phong,
            sphere,
        })
    }

    /// 毎フレーム呼び出される。シーン内の情報を更新する。
    pub fn tick(&mut self, delta: Duration) {
        self.elapsed_time += delta;
    }

    /// パラメーター操作を適用し、新しい値を標準出力に報告する。
    pub fn apply_action(&mut self, action: ParameterAction) {
        match action {
            ParameterAction::IncreaseDiffuse => {
                let value = self.parameters.lambert.increase_diffuse();
                println!("Lambert diffuse coefficient: {:.2}", value);
            }
            ParameterAction::DecreaseDiffuse => {
                let value = self.parameters.lambert.decrease_diffuse();
                println!("Lambert diffuse coefficient: {:.2}", value);
            }
            ParameterAction::IncreaseShininess => {
                let value = self.parameters.phong.increase_shininess();
                println!("Phong shininess increased: {:.1} (sharper highlight)", value);
            }
            ParameterAction::DecreaseShininess => {
                let value = self.parameters.phong.decrease_shininess();
                println!("Phong shininess decreased: {:.1} (duller highlight)", value);
            }
            ParameterAction::Reset => {
                self.parameters.reset();
                println!("Parameters reset to defaults.");
            }
        }
    }

    /// 左に Lambert 球、右に Phong 球を描画する。
    pub fn draw(&self, frame: &mut Frame) -> Result<()> {
        let params = DrawParameters {
            depth: Depth {
                test: DepthTest::IfLess,
                write: true,
                ..Default::default()
            },
            ..Default::default()
        };

        self.draw_sphere(
            frame,
            &self.program_lambert,
            self.parameters.lambert.to_uniforms(),
            -SPHERE_OFFSET_X,
            &params,
        )?;
        self.draw_sphere(
            frame,
            &self.program_phong,
            self.parameters.phong.to_uniforms(),
            SPHERE_OFFSET_X,
            &params,
        )?;

        Ok(())
    }

    /// マテリアルの uniforms を束ねて球を 1 つ描画する。
    fn draw_sphere(
        &self,
        frame: &mut Frame,
        program: &Program,
        material_uniforms: impl Uniforms,
        offset_x: f32,
        params: &DrawParameters,
    ) -> Result<()> {
        let model_matrix: [[f32; 4]; 4] =
            Mat4::from_translation(Vec3::new(offset_x, 0.0, 0.0)).into();
        let uniforms = UniformsSet::new(self.environment.get_uniforms())
            .add(self.environment.light().to_uniforms())
            .add(material_uniforms)
            .add(uniform! {
                mat_model: model_matrix,
            });

        frame.draw(
            self.sphere.vertex_buffer(),
            self.sphere.index_buffer(),
            program,
            &uniforms,
            params,
        )?;

        Ok(())
    }
}
