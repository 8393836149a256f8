//! 描画に共通して使う補助構造のモジュール。

use std::fs::read_to_string;

use anyhow::Result;
use glium::{
    backend::Facade,
    uniforms::{EmptyUniforms, UniformValue, Uniforms},
    Program,
};
use log::error;

/// 複数の Uniforms を連結して 1 つの Uniforms として扱えるようにする。
pub struct UniformsSet<H, T>(H, T);

impl<H: Uniforms> UniformsSet<H, EmptyUniforms> {
    /// 先頭の Uniforms から UniformsSet を作る。
    pub fn new(head: H) -> Self {
        UniformsSet(head, EmptyUniforms)
    }
}

impl<H: Uniforms, T: Uniforms> UniformsSet<H, T> {
    /// 新しい Uniforms を先頭に追加する。
    pub fn add<NH: Uniforms>(self, new_head: NH) -> UniformsSet<NH, UniformsSet<H, T>> {
        UniformsSet(new_head, self)
    }
}

impl<H: Uniforms, T: Uniforms> Uniforms for UniformsSet<H, T> {
    fn visit_values<'a, F: FnMut(&str, UniformValue<'a>)>(&'a self, mut callback: F) {
        self.0.visit_values(&mut callback);
        self.1.visit_values(&mut callback);
    }
}

/// shaders/ 以下の頂点・フラグメントシェーダーを読み込んでコンパイルする。
pub fn load_program(display: &impl Facade, basename: &str) -> Result<Program> {
    let vertex_shader = read_to_string(format!("shaders/{}.vert", basename))?;
    let fragment_shader = read_to_string(format!("shaders/{}.frag", basename))?;

    let program =
        Program::from_source(display, &vertex_shader, &fragment_shader, None).map_err(|e| {
            error!("Failed to compile the shader \"{}\": {}", basename, e);
            e
        })?;
    Ok(program)
}
