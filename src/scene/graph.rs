use glam::{Affine3A, EulerRot, Mat3, Vec3};

/// Placement from a translation, an XYZ Euler rotation and a uniform scale.
pub fn placement(translation: Vec3, rotation: Vec3, scale: f32) -> Affine3A {
    let basis = Mat3::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z) * scale;
    Affine3A::from_mat3_translation(basis, translation)
}

/// Uniform scale of a placement, taken from the length of its first axis.
pub fn scale_factor(transform: &Affine3A) -> f32 {
    transform.matrix3.x_axis.length()
}

/// Point on a sphere of radius `r` at polar angle `phi` (from +y) and
/// azimuth `theta`.
pub fn from_spherical(r: f32, phi: f32, theta: f32) -> Vec3 {
    let (sin_phi, cos_phi) = phi.sin_cos();
    Vec3::new(r * sin_phi * theta.sin(), r * cos_phi, r * sin_phi * theta.cos())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::hex(0x000000);
    pub const WHITE: Rgb = Rgb::hex(0xffffff);

    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    /// `hue` in degrees, `saturation` and `lightness` in [0,1].
    pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = lightness - c / 2.0;
        let to_u8 = |v: f32| ((v + m).clamp(0.0, 1.0) * 255.0).round() as u8;
        Self {
            r: to_u8(r),
            g: to_u8(g),
            b: to_u8(b),
        }
    }

    pub fn to_unit(self) -> Vec3 {
        Vec3::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }

    pub fn from_unit(v: Vec3) -> Self {
        let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self {
            r: to_u8(v.x),
            g: to_u8(v.y),
            b: to_u8(v.z),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Rgb,
    pub emissive: Rgb,
    pub emissive_intensity: f32,
    pub opacity: f32,
    pub wireframe: bool,
}

impl Material {
    pub fn standard(color: Rgb) -> Self {
        Self {
            color,
            emissive: Rgb::BLACK,
            emissive_intensity: 1.0,
            opacity: 1.0,
            wireframe: false,
        }
    }

    pub fn emissive(mut self, emissive: Rgb, intensity: f32) -> Self {
        self.emissive = emissive;
        self.emissive_intensity = intensity;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn wireframe(mut self) -> Self {
        self.wireframe = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Cuboid { size: Vec3 },
    Sphere { radius: f32, segments: u16 },
    Line { from: Vec3, to: Vec3 },
    Label { text: &'static str, size: f32 },
    Point { size: f32 },
}

/// A primitive placed in world space, ready for projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub shape: Shape,
    pub material: Material,
    pub transform: Affine3A,
}

impl Node {
    pub fn new(shape: Shape, material: Material, transform: Affine3A) -> Self {
        Self {
            shape,
            material,
            transform,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.transform.translation.into()
    }

    pub fn scale_factor(&self) -> f32 {
        scale_factor(&self.transform)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Ambient { color: Rgb, intensity: f32 },
    Point { position: Vec3, color: Rgb, intensity: f32 },
    Directional { position: Vec3, color: Rgb, intensity: f32 },
}
