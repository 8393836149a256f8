//! 描画用モデルに関係するモジュール。

use std::f32::consts::PI;

use anyhow::Result;
use glium::{backend::Facade, implement_vertex, index::PrimitiveType, IndexBuffer, VertexBuffer};
use log::info;

/// 頂点シェーダーに渡る頂点情報を表す。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    position: [f32; 3],
    normal: [f32; 3],
    uv: [f32; 2],
}
implement_vertex!(Vertex, position, normal, uv);

/// VBO/IBO 化したモデルの情報を表す。
#[derive(Debug)]
pub struct Model {
    vertex_buffer: VertexBuffer<Vertex>,
    index_buffer: IndexBuffer<u32>,
}

impl Model {
    /// UV 球のモデルを生成する。
    pub fn sphere(facade: &impl Facade, radius: f32, slices: u32, stacks: u32) -> Result<Model> {
        let (vertices, indices) = sphere_mesh(radius, slices, stacks);
        Model::from_buffers(facade, &vertices, &indices)
    }

    /// VBO を返す。
    pub fn vertex_buffer(&self) -> &VertexBuffer<Vertex> {
        &self.vertex_buffer
    }

    /// IBO を返す。
    pub fn index_buffer(&self) -> &IndexBuffer<u32> {
        &self.index_buffer
    }

    fn from_buffers(facade: &impl Facade, vertices: &[Vertex], indices: &[u32]) -> Result<Model> {
        let vertex_buffer = VertexBuffer::new(facade, vertices)?;
        let index_buffer = IndexBuffer::new(facade, PrimitiveType::TrianglesList, indices)?;

        info!("Sphere mesh uploaded; {} vertices", vertices.len());

        Ok(Model {
            vertex_buffer,
            index_buffer,
        })
    }
}

/// 緯線・経線分割の球メッシュを生成する。
/// 頂点は (stacks + 1) * (slices + 1) 個、上下の極は slices + 1 個に複製される。
fn sphere_mesh(radius: f32, slices: u32, stacks: u32) -> (Vec<Vertex>, Vec<u32>) {
    let mut vertices = Vec::with_capacity(((stacks + 1) * (slices + 1)) as usize);
    for stack in 0..=stacks {
        let theta = PI * stack as f32 / stacks as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();
        for slice in 0..=slices {
            let phi = 2.0 * PI * slice as f32 / slices as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();
            let normal = [sin_theta * cos_phi, cos_theta, sin_theta * sin_phi];
            vertices.push(Vertex {
                position: [normal[0] * radius, normal[1] * radius, normal[2] * radius],
                normal,
                uv: [
                    slice as f32 / slices as f32,
                    stack as f32 / stacks as f32,
                ],
            });
        }
    }

    let mut indices = Vec::with_capacity((stacks * slices * 6) as usize);
    for stack in 0..stacks {
        for slice in 0..slices {
            let i0 = stack * (slices + 1) + slice;
            let i1 = i0 + slices + 1;
            indices.extend_from_slice(&[i0, i1, i0 + 1, i0 + 1, i1, i1 + 1]);
        }
    }

    (vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_mesh_has_expected_counts() {
        let (vertices, indices) = sphere_mesh(1.0, 48, 48);
        assert_eq!(vertices.len(), 49 * 49);
        assert_eq!(indices.len(), 48 * 48 * 6);
    }

    #[test]
    fn sphere_mesh_normals_are_unit_length() {
        let (vertices, _) = sphere_mesh(2.0, 16, 12);
        for vertex in &vertices {
            let [x, y, z] = vertex.normal;
            let length = (x * x + y * y + z * z).sqrt();
            assert!((length - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn sphere_mesh_positions_lie_on_radius() {
        let radius = 2.0;
        let (vertices, _) = sphere_mesh(radius, 16, 12);
        for vertex in &vertices {
            let [x, y, z] = vertex.position;
            let length = (x * x + y * y + z * z).sqrt();
            assert!((length - radius).abs() < 1e-4);
        }
    }

    #[test]
    fn sphere_mesh_indices_are_in_range() {
        let (vertices, indices) = sphere_mesh(1.0, 8, 6);
        for &index in &indices {
            assert!((index as usize) < vertices.len());
        }
    }
}
