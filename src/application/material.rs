//! マテリアル内容と調整可能なパラメーターを記述するモジュール。

use glium::{uniform, uniforms::Uniforms};
use ultraviolet::{Vec3, Vec4};

const DIFFUSE_COEFFICIENT_DEFAULT: f32 = 1.0;
const DIFFUSE_COEFFICIENT_STEP: f32 = 0.1;
const DIFFUSE_COEFFICIENT_MIN: f32 = 0.0;
const DIFFUSE_COEFFICIENT_MAX: f32 = 1.5;

const SHININESS_DEFAULT: f32 = 32.0;
const SHININESS_STEP: f32 = 8.0;
const SHININESS_MIN: f32 = 0.0;
const SHININESS_MAX: f32 = 128.0;

/// Lambert モデル (拡散反射のみ) のマテリアル
#[derive(Debug, Clone, PartialEq)]
pub struct LambertMaterial {
    ambient: Vec3,
    diffuse_base: Vec3,
    diffuse_coefficient: f32,
}

impl LambertMaterial {
    pub fn new(ambient: Vec3, diffuse_base: Vec3) -> LambertMaterial {
        LambertMaterial {
            ambient,
            diffuse_base,
            diffuse_coefficient: DIFFUSE_COEFFICIENT_DEFAULT,
        }
    }

    /// 拡散係数を 1 段階上げる。上限でクランプされる。
    pub fn increase_diffuse(&mut self) -> f32 {
        self.diffuse_coefficient =
            (self.diffuse_coefficient + DIFFUSE_COEFFICIENT_STEP).min(DIFFUSE_COEFFICIENT_MAX);
        self.diffuse_coefficient
    }

    /// 拡散係数を 1 段階下げる。下限でクランプされる。
    pub fn decrease_diffuse(&mut self) -> f32 {
        self.diffuse_coefficient =
            (self.diffuse_coefficient - DIFFUSE_COEFFICIENT_STEP).max(DIFFUSE_COEFFICIENT_MIN);
        self.diffuse_coefficient
    }

    pub fn reset(&mut self) {
        self.diffuse_coefficient = DIFFUSE_COEFFICIENT_DEFAULT;
    }

    pub fn diffuse_coefficient(&self) -> f32 {
        self.diffuse_coefficient
    }

    /// 実効拡散色を返す。alpha は常に 1.0 になる。
    pub fn effective_diffuse(&self) -> Vec4 {
        let rgb = self.diffuse_base * self.diffuse_coefficient;
        Vec4::new(rgb.x, rgb.y, rgb.z, 1.0)
    }

    pub fn to_uniforms(&self) -> impl Uniforms {
        let ambient: [f32; 3] = self.ambient.into();
        let diffuse: [f32; 4] = self.effective_diffuse().into();
        uniform! {
            material_ambient: ambient,
            material_diffuse: diffuse,
        }
    }
}

/// Phong モデル (環境光 + 拡散 + 鏡面反射) のマテリアル
#[derive(Debug, Clone, PartialEq)]
pub struct PhongMaterial {
    ambient: Vec3,
    diffuse: Vec3,
    specular: Vec3,
    shininess: f32,
}

impl PhongMaterial {
    pub fn new(ambient: Vec3, diffuse: Vec3, specular: Vec3) -> PhongMaterial {
        PhongMaterial {
            ambient,
            diffuse,
            specular,
            shininess: SHININESS_DEFAULT,
        }
    }

    /// shininess を 1 段階上げる。ハイライトが鋭くなる。
    pub fn increase_shininess(&mut self) -> f32 {
        self.shininess = (self.shininess + SHININESS_STEP).min(SHININESS_MAX);
        self.shininess
    }

    /// shininess を 1 段階下げる。ハイライトが鈍くなる。
    pub fn decrease_shininess(&mut self) -> f32 {
        self.shininess = (self.shininess - SHININESS_STEP).max(SHININESS_MIN);
        self.shininess
    }

    pub fn reset(&mut self) {
        self.shininess = SHININESS_DEFAULT;
    }

    pub fn shininess(&self) -> f32 {
        self.shininess
    }

    pub fn to_uniforms(&self) -> impl Uniforms {
        let ambient: [f32; 3] = self.ambient.into();
        let diffuse: [f32; 3] = self.diffuse.into();
        let specular: [f32; 3] = self.specular.into();
        // 送出前にもう一度クランプしておく
        let shininess = self.shininess.min(SHININESS_MAX).max(SHININESS_MIN);
        uniform! {
            material_ambient: ambient,
            material_diffuse: diffuse,
            material_specular: specular,
            material_shininess: shininess,
        }
    }
}

/// キー入力で調整される 2 つのマテリアルを保持する。
#[derive(Debug, Clone, PartialEq)]
pub struct ShadingParameters {
    pub lambert: LambertMaterial,
    pub phong: PhongMaterial,
}

impl ShadingParameters {
    pub fn new() -> ShadingParameters {
        ShadingParameters {
            lambert: LambertMaterial::new(
                Vec3::new(0.05, 0.05, 0.1),
                Vec3::new(0.0, 0.0, 1.0),
            ),
            phong: PhongMaterial::new(
                Vec3::new(0.05, 0.05, 0.05),
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(1.0, 1.0, 1.0),
            ),
        }
    }

    /// 両方のパラメーターをデフォルト値に戻す。
    pub fn reset(&mut self) {
        self.lambert.reset();
        self.phong.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glium::uniforms::UniformValue;

    fn uploaded_shininess(material: &PhongMaterial) -> f32 {
        let mut shininess = None;
        material.to_uniforms().visit_values(|name, value| {
            if name == "material_shininess" {
                if let UniformValue::Float(v) = value {
                    shininess = Some(v);
                }
            }
        });
        shininess.expect("material_shininess was not uploaded")
    }

    #[test]
    fn diffuse_coefficient_never_exceeds_upper_bound() {
        let mut parameters = ShadingParameters::new();
        for _ in 0..100 {
            let value = parameters.lambert.increase_diffuse();
            assert!(value <= DIFFUSE_COEFFICIENT_MAX);
        }
        assert_eq!(
            parameters.lambert.diffuse_coefficient(),
            DIFFUSE_COEFFICIENT_MAX
        );
    }

    #[test]
    fn diffuse_coefficient_never_goes_below_zero() {
        let mut parameters = ShadingParameters::new();
        for _ in 0..100 {
            let value = parameters.lambert.decrease_diffuse();
            assert!(value >= DIFFUSE_COEFFICIENT_MIN);
        }
        assert_eq!(
            parameters.lambert.diffuse_coefficient(),
            DIFFUSE_COEFFICIENT_MIN
        );
    }

    #[test]
    fn shininess_stays_within_range() {
        let mut parameters = ShadingParameters::new();
        for _ in 0..50 {
            let value = parameters.phong.increase_shininess();
            assert!(value <= SHININESS_MAX);
        }
        for _ in 0..50 {
            let value = parameters.phong.decrease_shininess();
            assert!(value >= SHININESS_MIN);
        }
    }

    #[test]
    fn six_diffuse_increases_clamp_to_max() {
        let mut parameters = ShadingParameters::new();
        for _ in 0..6 {
            parameters.lambert.increase_diffuse();
        }
        assert_eq!(parameters.lambert.diffuse_coefficient(), 1.5);
    }

    #[test]
    fn five_shininess_decreases_clamp_to_zero() {
        let mut parameters = ShadingParameters::new();
        for _ in 0..5 {
            parameters.phong.decrease_shininess();
        }
        assert_eq!(parameters.phong.shininess(), 0.0);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut parameters = ShadingParameters::new();
        for _ in 0..3 {
            parameters.lambert.decrease_diffuse();
            parameters.phong.increase_shininess();
        }
        parameters.reset();
        assert_eq!(parameters.lambert.diffuse_coefficient(), 1.0);
        assert_eq!(parameters.phong.shininess(), 32.0);
    }

    #[test]
    fn to_uniforms_reclamps_out_of_range_shininess() {
        let mut phong = PhongMaterial {
            ambient: Vec3::new(0.05, 0.05, 0.05),
            diffuse: Vec3::new(0.0, 0.0, 1.0),
            specular: Vec3::new(1.0, 1.0, 1.0),
            shininess: 999.0,
        };
        assert_eq!(uploaded_shininess(&phong), SHININESS_MAX);

        phong.shininess = -5.0;
        assert_eq!(uploaded_shininess(&phong), SHININESS_MIN);
    }

    #[test]
    fn effective_diffuse_scales_base_color() {
        let lambert = LambertMaterial {
            ambient: Vec3::new(0.05, 0.05, 0.1),
            diffuse_base: Vec3::new(0.0, 0.0, 1.0),
            diffuse_coefficient: 0.5,
        };
        assert_eq!(lambert.effective_diffuse(), Vec4::new(0.0, 0.0, 0.5, 1.0));
    }
}
