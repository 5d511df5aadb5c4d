//! Fixed material and directional light for the letter.
//!
//! The shading itself runs per vertex in `shaders/letter.wgsl`; these types
//! only carry the values uploaded with each frame.

use glam::Vec3;

/// Surface colors of the letter. Alpha lives in the last component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub diffuse: [f32; 4],
    pub ambient: [f32; 4],
}

impl Default for Material {
    fn default() -> Self {
        let green = [0.2, 0.8, 0.2, 1.0];
        Self {
            diffuse: green,
            ambient: green,
        }
    }
}

/// A white directional light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    /// Unit vector the light travels along.
    pub direction: Vec3,
    pub diffuse: [f32; 3],
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, -0.2, -1.0), [1.0, 1.0, 1.0])
    }
}

impl DirectionalLight {
    /// Creates a light shining along `direction`, which is normalized here.
    pub fn new(direction: Vec3, diffuse: [f32; 3]) -> Self {
        Self {
            direction: direction.normalize_or_zero(),
            diffuse,
        }
    }
}

/// Material, light and global ambient term for one draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    pub material: Material,
    pub light: DirectionalLight,
    pub ambient: [f32; 3],
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            material: Material::default(),
            light: DirectionalLight::default(),
            ambient: rgb_from_hex(0x20_20_20),
        }
    }
}

/// Splits a `0xRRGGBB` value into normalized channels.
pub fn rgb_from_hex(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_direction_is_normalized() {
        let light = DirectionalLight::default();
        assert!((light.direction.length() - 1.0).abs() < 1e-6);
        assert!(light.direction.z < 0.0);
        assert!(light.direction.y < 0.0);
    }

    #[test]
    fn hex_channels() {
        assert_eq!(rgb_from_hex(0xff_00_80)[0], 1.0);
        assert_eq!(rgb_from_hex(0xff_00_80)[1], 0.0);
        assert!((rgb_from_hex(0x20_20_20)[2] - 32.0 / 255.0).abs() < 1e-6);
    }
}
