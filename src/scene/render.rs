//! Flattens world-space nodes into depth-sorted 2D draw commands.

use std::f32::consts::{PI, TAU};

use super::camera::{Camera, Projected, Viewport};
use glam::{Affine3A, Vec3};

use super::graph::{from_spherical, Light, Material, Node, Rgb, Shape};

const MIN_DISC_RADIUS: f32 = 0.5;
const MAX_STAR_RADIUS: f32 = 2.5;
const RING_SAMPLES: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f32,
}

impl Rgba {
    pub fn new(rgb: Rgb, alpha: f32) -> Self {
        Self {
            rgb,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    pub fn css(&self) -> String {
        format!(
            "rgba({},{},{},{:.3})",
            self.rgb.r, self.rgb.g, self.rgb.b, self.alpha
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Polygon {
        points: Vec<(f32, f32)>,
        fill: Rgba,
    },
    Polyline {
        points: Vec<(f32, f32)>,
        stroke: Rgba,
        width: f32,
    },
    Disc {
        center: (f32, f32),
        radius: f32,
        fill: Rgba,
    },
    Text {
        at: (f32, f32),
        text: &'static str,
        size: f32,
        fill: Rgba,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Draw {
    pub depth: f32,
    pub command: DrawCommand,
}

/// Lambert shading of `material` at `position` with surface `normal`.
pub fn shade(material: &Material, position: Vec3, normal: Vec3, lights: &[Light]) -> Rgb {
    let mut light = Vec3::ZERO;
    for l in lights {
        match *l {
            Light::Ambient { color, intensity } => {
                light += color.to_unit() * intensity;
            }
            Light::Point {
                position: from,
                color,
                intensity,
            } => {
                let dir = (from - position).normalize_or_zero();
                light += color.to_unit() * (normal.dot(dir).max(0.0) * intensity);
            }
            Light::Directional {
                position: from,
                color,
                intensity,
            } => {
                let dir = from.normalize_or_zero();
                light += color.to_unit() * (normal.dot(dir).max(0.0) * intensity);
            }
        }
    }
    let lit = material.color.to_unit() * light;
    Rgb::from_unit(lit + material.emissive.to_unit() * material.emissive_intensity)
}

fn at(p: &Projected) -> (f32, f32) {
    (p.x, p.y)
}

const CUBE_FACES: [([usize; 4], Vec3); 6] = [
    ([1, 3, 7, 5], Vec3::new(1.0, 0.0, 0.0)),
    ([0, 4, 6, 2], Vec3::new(-1.0, 0.0, 0.0)),
    ([2, 6, 7, 3], Vec3::new(0.0, 1.0, 0.0)),
    ([0, 1, 5, 4], Vec3::new(0.0, -1.0, 0.0)),
    ([4, 5, 7, 6], Vec3::new(0.0, 0.0, 1.0)),
    ([0, 2, 3, 1], Vec3::new(0.0, 0.0, -1.0)),
];

fn cuboid(
    out: &mut Vec<Draw>,
    node: &Node,
    size: Vec3,
    lights: &[Light],
    camera: &Camera,
    viewport: Viewport,
) {
    let half = size * 0.5;
    let corners: Vec<Vec3> = (0..8)
        .map(|i| {
            let local = Vec3::new(
                if i & 1 == 0 { -half.x } else { half.x },
                if i & 2 == 0 { -half.y } else { half.y },
                if i & 4 == 0 { -half.z } else { half.z },
            );
            node.transform.transform_point3(local)
        })
        .collect();

    for (indices, local_normal) in CUBE_FACES {
        let normal = node.transform.transform_vector3(local_normal).normalize_or_zero();
        let center = indices
            .iter()
            .fold(Vec3::ZERO, |acc, &i| acc + corners[i])
            * 0.25;
        if normal.dot(camera.position - center) <= 0.0 {
            continue;
        }
        let projected: Option<Vec<Projected>> = indices
            .iter()
            .map(|&i| camera.project(corners[i], viewport))
            .collect();
        let Some(projected) = projected else {
            continue;
        };
        let depth = projected.iter().map(|p| p.depth).sum::<f32>() / 4.0;
        let color = if node.material.wireframe {
            node.material.color
        } else {
            shade(&node.material, center, normal, lights)
        };
        let points = projected.iter().map(at).collect();
        let command = if node.material.wireframe {
            DrawCommand::Polyline {
                points,
                stroke: Rgba::new(color, node.material.opacity),
                width: 1.0,
            }
        } else {
            DrawCommand::Polygon {
                points,
                fill: Rgba::new(color, node.material.opacity),
            }
        };
        out.push(Draw { depth, command });
    }
}

/// Latitude and longitude rings of a unit sphere, in local space.
fn sphere_rings(segments: u16) -> Vec<Vec<Vec3>> {
    let rings = (segments as usize / 4).max(4);
    let mut out = Vec::with_capacity(rings * 2);
    for j in 1..rings {
        let phi = PI * j as f32 / rings as f32;
        out.push(
            (0..=RING_SAMPLES)
                .map(|k| from_spherical(1.0, phi, TAU * k as f32 / RING_SAMPLES as f32))
                .collect(),
        );
    }
    for i in 0..rings {
        let theta = PI * i as f32 / rings as f32;
        out.push(
            (0..=RING_SAMPLES)
                .map(|k| from_spherical(1.0, TAU * k as f32 / RING_SAMPLES as f32, theta))
                .collect(),
        );
    }
    out
}

fn sphere(
    out: &mut Vec<Draw>,
    node: &Node,
    radius: f32,
    segments: u16,
    lights: &[Light],
    camera: &Camera,
    viewport: Viewport,
) {
    let center = node.center();
    let Some(c) = camera.project(center, viewport) else {
        return;
    };
    let facing = (camera.position - center).normalize_or_zero();
    let color = shade(&node.material, center + facing * radius, facing, lights);
    let fill = Rgba::new(color, node.material.opacity);

    if !node.material.wireframe {
        let r = radius * node.scale_factor() * c.pixels_per_unit;
        out.push(Draw {
            depth: c.depth,
            command: DrawCommand::Disc {
                center: at(&c),
                radius: r.max(MIN_DISC_RADIUS),
                fill,
            },
        });
        return;
    }

    let local = node.transform * Affine3A::from_scale(Vec3::splat(radius));
    for ring in sphere_rings(segments) {
        let points: Option<Vec<(f32, f32)>> = ring
            .iter()
            .map(|p| camera.project(local.transform_point3(*p), viewport).map(|p| at(&p)))
            .collect();
        if let Some(points) = points {
            out.push(Draw {
                depth: c.depth,
                command: DrawCommand::Polyline {
                    points,
                    stroke: fill,
                    width: 1.0,
                },
            });
        }
    }
}

/// Converts nodes into 2D draw commands ordered back to front.
pub fn build_draw_list(
    nodes: &[Node],
    lights: &[Light],
    camera: &Camera,
    viewport: Viewport,
) -> Vec<Draw> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node.shape {
            Shape::Cuboid { size } => cuboid(&mut out, node, size, lights, camera, viewport),
            Shape::Sphere { radius, segments } => {
                sphere(&mut out, node, radius, segments, lights, camera, viewport)
            }
            Shape::Line { from, to } => {
                let a = camera.project(node.transform.transform_point3(from), viewport);
                let b = camera.project(node.transform.transform_point3(to), viewport);
                if let (Some(a), Some(b)) = (a, b) {
                    out.push(Draw {
                        depth: (a.depth + b.depth) / 2.0,
                        command: DrawCommand::Polyline {
                            points: vec![at(&a), at(&b)],
                            stroke: Rgba::new(node.material.color, node.material.opacity),
                            width: 1.0,
                        },
                    });
                }
            }
            Shape::Label { text, size } => {
                if let Some(p) = camera.project(node.center(), viewport) {
                    out.push(Draw {
                        depth: p.depth,
                        command: DrawCommand::Text {
                            at: at(&p),
                            text,
                            size: size * node.scale_factor() * p.pixels_per_unit,
                            fill: Rgba::new(node.material.color, node.material.opacity),
                        },
                    });
                }
            }
            Shape::Point { size } => {
                if let Some(p) = camera.project(node.center(), viewport) {
                    // far stars fade out
                    let fade = 1.0 - ((p.depth - 60.0) / 100.0).clamp(0.0, 0.6);
                    out.push(Draw {
                        depth: p.depth,
                        command: DrawCommand::Disc {
                            center: at(&p),
                            radius: (size * p.pixels_per_unit)
                                .clamp(MIN_DISC_RADIUS, MAX_STAR_RADIUS),
                            fill: Rgba::new(node.material.color, node.material.opacity * fade),
                        },
                    });
                }
            }
        }
    }
    out.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::graph::placement;

    const VIEW: Viewport = Viewport {
        width: 1280.0,
        height: 720.0,
    };

    fn white_ambient(intensity: f32) -> Light {
        Light::Ambient {
            color: Rgb::WHITE,
            intensity,
        }
    }

    #[test]
    fn test_shade_ambient_only() {
        let m = Material::standard(Rgb::hex(0x808080));
        let c = shade(&m, Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), &[white_ambient(1.0)]);
        assert_eq!(c, Rgb::hex(0x808080));
        let dark = shade(&m, Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), &[]);
        assert_eq!(dark, Rgb::BLACK);
    }

    #[test]
    fn test_shade_emissive_and_backlight() {
        let m = Material::standard(Rgb::WHITE).emissive(Rgb::hex(0x330000), 1.0);
        let behind = Light::Point {
            position: Vec3::new(0.0, 0.0, -10.0),
            color: Rgb::WHITE,
            intensity: 1.0,
        };
        let c = shade(&m, Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), &[behind]);
        assert_eq!(c, Rgb::hex(0x330000));
    }

    #[test]
    fn test_cube_shows_only_front_face() {
        let node = Node::new(
            Shape::Cuboid {
                size: Vec3::splat(1.0),
            },
            Material::standard(Rgb::WHITE),
            Affine3A::IDENTITY,
        );
        let draws = build_draw_list(&[node], &[white_ambient(1.0)], &Camera::default(), VIEW);
        assert_eq!(draws.len(), 1);
        assert!(matches!(&draws[0].command, DrawCommand::Polygon { points, .. } if points.len() == 4));
    }

    #[test]
    fn test_back_to_front_order() {
        let near = Node::new(
            Shape::Point { size: 0.1 },
            Material::standard(Rgb::WHITE),
            Affine3A::from_translation(Vec3::new(0.0, 0.0, 2.0)),
        );
        let far = Node::new(
            Shape::Point { size: 0.1 },
            Material::standard(Rgb::WHITE),
            Affine3A::from_translation(Vec3::new(0.0, 0.0, -30.0)),
        );
        let draws = build_draw_list(&[near, far], &[], &Camera::default(), VIEW);
        assert_eq!(draws.len(), 2);
        assert!(draws[0].depth > draws[1].depth);
    }

    #[test]
    fn test_hidden_nodes_produce_nothing() {
        let behind = Node::new(
            Shape::Label {
                text: "hidden",
                size: 0.3,
            },
            Material::standard(Rgb::WHITE),
            Affine3A::from_translation(Vec3::new(0.0, 0.0, 50.0)),
        );
        let draws = build_draw_list(&[behind], &[], &Camera::default(), VIEW);
        assert!(draws.is_empty());
    }

    #[test]
    fn test_wireframe_sphere_draws_rings() {
        let node = Node::new(
            Shape::Sphere {
                radius: 2.0,
                segments: 32,
            },
            Material::standard(Rgb::hex(0x1a1a2e)).opacity(0.1).wireframe(),
            Affine3A::IDENTITY,
        );
        let draws = build_draw_list(&[node], &[white_ambient(1.0)], &Camera::default(), VIEW);
        // 7 parallels and 8 meridians
        assert_eq!(draws.len(), 15);
        assert!(draws
            .iter()
            .all(|d| matches!(d.command, DrawCommand::Polyline { .. })));
    }

    #[test]
    fn test_solid_sphere_is_disc_scaled_by_transform() {
        let node = Node::new(
            Shape::Sphere {
                radius: 0.1,
                segments: 8,
            },
            Material::standard(Rgb::WHITE),
            placement(Vec3::ZERO, Vec3::ZERO, 3.0),
        );
        let camera = Camera::default();
        let draws = build_draw_list(&[node], &[white_ambient(1.0)], &camera, VIEW);
        let ppu = camera
            .project(Vec3::ZERO, VIEW)
            .map(|p| p.pixels_per_unit)
            .unwrap_or_default();
        match &draws[0].command {
            DrawCommand::Disc { radius, .. } => assert!((radius - 0.3 * ppu).abs() < 1e-3),
            other => panic!("expected disc, got {other:?}"),
        }
    }

    #[test]
    fn test_rgba_css() {
        assert_eq!(
            Rgba::new(Rgb::hex(0x00ffff), 0.5).css(),
            "rgba(0,255,255,0.500)"
        );
        assert_eq!(Rgba::new(Rgb::WHITE, 3.0).alpha, 1.0);
    }
}
