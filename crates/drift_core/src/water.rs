//! Water surface heightfield simulation
//!
//! A fixed-resolution grid over a square plane whose per-vertex rest
//! coordinates are captured once at construction. Every frame the full grid
//! is recomputed as a superposition of three traveling waves, then vertex
//! normals are rebuilt from the new heights. The normal pass is a
//! correctness requirement for the lighting collaborator, not an
//! optimization: stale normals are an observable defect.

use crate::foundation::math::Vec3;

/// Height of the water surface at rest coordinates `(x, z)` and time `t`
///
/// Three low-frequency sinusoids at different spatial and temporal scales;
/// the superposition avoids visible periodicity over a multi-minute session
/// while staying a pure, stateless function.
pub fn height_at(x: f32, z: f32, t: f32) -> f32 {
    let wave1 = 0.25 * (x * 0.25 + t * 0.3).sin() * (z * 0.25 + t * 0.3).cos();
    let wave2 = 0.15 * (x * 0.4 + t * 0.5).sin() * (z * 0.4 + t * 0.4).cos();
    let wave3 = 0.08 * ((x + z) * 0.3 + t * 0.35).sin();
    wave1 + wave2 + wave3
}

/// Animated heightfield over a fixed grid
///
/// Vertices are stored row-major: index `row * vertices_per_side + col`,
/// where rows advance along +Z and columns along +X.
pub struct WaterSurface {
    size: f32,
    vertices_per_side: usize,
    spacing: f32,
    rest: Vec<(f32, f32)>,
    heights: Vec<f32>,
    normals: Vec<Vec3>,
}

impl WaterSurface {
    /// Create a surface of `size`×`size` units with `subdivisions` cells per side
    pub fn new(size: f32, subdivisions: usize) -> Self {
        let subdivisions = subdivisions.max(1);
        let vertices_per_side = subdivisions + 1;
        let spacing = size / subdivisions as f32;
        let half = size / 2.0;

        let mut rest = Vec::with_capacity(vertices_per_side * vertices_per_side);
        for row in 0..vertices_per_side {
            for col in 0..vertices_per_side {
                let x = -half + col as f32 * spacing;
                let z = -half + row as f32 * spacing;
                rest.push((x, z));
            }
        }

        let vertex_count = rest.len();
        Self {
            size,
            vertices_per_side,
            spacing,
            rest,
            heights: vec![0.0; vertex_count],
            normals: vec![Vec3::new(0.0, 1.0, 0.0); vertex_count],
        }
    }

    /// Recompute every vertex height and normal for elapsed time `t`
    ///
    /// Full O(vertex count) pass; no incremental computation.
    pub fn update(&mut self, t: f32) {
        for (i, &(x, z)) in self.rest.iter().enumerate() {
            self.heights[i] = height_at(x, z, t);
        }
        self.recompute_normals();
    }

    /// Rebuild vertex normals from the current heights
    ///
    /// Central differences on interior vertices, one-sided at the grid edges.
    fn recompute_normals(&mut self) {
        let n = self.vertices_per_side;
        for row in 0..n {
            for col in 0..n {
                let h = |r: usize, c: usize| self.heights[r * n + c];

                let (dx, span_x) = if col == 0 {
                    (h(row, 1) - h(row, 0), self.spacing)
                } else if col == n - 1 {
                    (h(row, n - 1) - h(row, n - 2), self.spacing)
                } else {
                    (h(row, col + 1) - h(row, col - 1), 2.0 * self.spacing)
                };

                let (dz, span_z) = if row == 0 {
                    (h(1, col) - h(0, col), self.spacing)
                } else if row == n - 1 {
                    (h(n - 1, col) - h(n - 2, col), self.spacing)
                } else {
                    (h(row + 1, col) - h(row - 1, col), 2.0 * self.spacing)
                };

                let normal = Vec3::new(-dx / span_x, 1.0, -dz / span_z).normalize();
                self.normals[row * n + col] = normal;
            }
        }
    }

    /// Side length of the plane in world units
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Number of vertices along one side of the grid
    pub fn vertices_per_side(&self) -> usize {
        self.vertices_per_side
    }

    /// Total number of vertices
    pub fn vertex_count(&self) -> usize {
        self.rest.len()
    }

    /// Rest `(x, z)` coordinates per vertex, row-major
    pub fn rest_positions(&self) -> &[(f32, f32)] {
        &self.rest
    }

    /// Current vertex heights, row-major
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// Current vertex normals, row-major
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }
}
