use glam::{Mat4, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        if self.height <= 0.0 {
            1.0
        } else {
            self.width / self.height
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A point mapped to canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    /// Distance in front of the camera along its view axis.
    pub depth: f32,
    /// How many pixels one world unit covers at this depth.
    pub pixels_per_unit: f32,
}

/// Perspective camera looking down -z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 10.0),
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    fn projection(&self, viewport: Viewport) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            viewport.aspect(),
            self.near,
            self.far,
        )
    }

    fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position - Vec3::Z, Vec3::Y)
    }

    /// Projects a world point, or `None` when it is behind the near plane.
    pub fn project(&self, p: Vec3, viewport: Viewport) -> Option<Projected> {
        if viewport.is_empty() {
            return None;
        }
        let proj = self.projection(viewport);
        let clip = proj * self.view() * p.extend(1.0);
        // clip w is the distance along the view axis
        let depth = clip.w;
        if depth < self.near {
            return None;
        }
        let ndc_x = clip.x / depth;
        let ndc_y = clip.y / depth;
        Some(Projected {
            x: (ndc_x + 1.0) * 0.5 * viewport.width,
            y: (1.0 - ndc_y) * 0.5 * viewport.height,
            depth,
            pixels_per_unit: proj.y_axis.y * viewport.height * 0.5 / depth,
        })
    }
}
