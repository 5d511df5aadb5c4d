//! Vertex format and the static letter mesh.
//!
//! The letter is a flat "T": a top bar with two small notches below it and a
//! long stem, extruded 0.25 units along -Z. Only the front face, the back face,
//! the right side of the stem and the top of the bar are closed.
//!
//! # Vertex Layout
//!
//! [`Vertex`] uses the following GPU layout (24 bytes per vertex):
//!
//! | Attribute | Format    | Offset | Shader Location |
//! |-----------|-----------|--------|-----------------|
//! | position  | Float32x3 | 0      | 0               |
//! | normal    | Float32x3 | 12     | 1               |
//!
//! Vertices are consumed three at a time as an unindexed triangle list.

use crate::gpu::GpuContext;

/// A vertex with a model-space position and a surface normal.
///
/// Uses `#[repr(C)]` so the struct can be cast to bytes with
/// [`bytemuck::cast_slice`] and uploaded as-is.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position in model space.
    pub position: [f32; 3],
    /// Unit surface normal.
    pub normal: [f32; 3],
}

impl Vertex {
    /// The wgpu vertex buffer layout for [`Vertex`].
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            },
            // normal
            wgpu::VertexAttribute {
                offset: 12,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x3,
            },
        ],
    };

    /// Creates a vertex from a position and a normal.
    ///
    /// ```
    /// use letter3d::Vertex;
    ///
    /// let v = Vertex::new([0.0, 1.0, 0.0], [0.0, 0.0, 1.0]);
    /// assert_eq!(v.normal, [0.0, 0.0, 1.0]);
    /// ```
    pub const fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }
}

const FRONT: [f32; 3] = [0.0, 0.0, 1.0];
const BACK: [f32; 3] = [0.0, 0.0, -1.0];
const RIGHT: [f32; 3] = [1.0, 0.0, 0.0];
const UP: [f32; 3] = [0.0, 1.0, 0.0];

/// Depth of the back face.
const DEPTH: f32 = -0.25;

const fn v(x: f32, y: f32, z: f32, normal: [f32; 3]) -> Vertex {
    Vertex::new([x, y, z], normal)
}

/// The letter geometry, in upload order.
#[rustfmt::skip]
pub const LETTER_VERTICES: [Vertex; 60] = [
    // Front face (z = 0)
    // top bar
    v(-1.0,   1.0,  0.0, FRONT), v( 1.0,   1.0,  0.0, FRONT), v(-1.0,   0.5,  0.0, FRONT),
    v( 1.0,   1.0,  0.0, FRONT), v( 1.0,   0.5,  0.0, FRONT), v(-1.0,   0.5,  0.0, FRONT),
    // left notch
    v(-1.0,   0.5,  0.0, FRONT), v(-1.0,   0.25, 0.0, FRONT), v(-0.75,  0.25, 0.0, FRONT),
    v(-1.0,   0.5,  0.0, FRONT), v(-0.75,  0.5,  0.0, FRONT), v(-0.75,  0.25, 0.0, FRONT),
    // right notch
    v( 1.0,   0.5,  0.0, FRONT), v( 1.0,   0.25, 0.0, FRONT), v( 0.75,  0.5,  0.0, FRONT),
    v( 1.0,   0.25, 0.0, FRONT), v( 0.75,  0.5,  0.0, FRONT), v( 0.75,  0.25, 0.0, FRONT),
    // stem
    v(-0.15,  0.5,  0.0, FRONT), v( 0.15,  0.5,  0.0, FRONT), v(-0.15, -2.0,  0.0, FRONT),
    v( 0.15,  0.5,  0.0, FRONT), v( 0.15, -2.0,  0.0, FRONT), v(-0.15, -2.0,  0.0, FRONT),

    // Back face (z = DEPTH)
    // top bar
    v(-1.0,   1.0,  DEPTH, BACK), v( 1.0,   1.0,  DEPTH, BACK), v(-1.0,   0.5,  DEPTH, BACK),
    v( 1.0,   1.0,  DEPTH, BACK), v( 1.0,   0.5,  DEPTH, BACK), v(-1.0,   0.5,  DEPTH, BACK),
    // left notch
    v(-1.0,   0.5,  DEPTH, BACK), v(-1.0,   0.25, DEPTH, BACK), v(-0.75,  0.25, DEPTH, BACK),
    v(-1.0,   0.5,  DEPTH, BACK), v(-0.75,  0.5,  DEPTH, BACK), v(-0.75,  0.25, DEPTH, BACK),
    // right notch
    v( 1.0,   0.5,  DEPTH, BACK), v( 1.0,   0.25, DEPTH, BACK), v( 0.75,  0.5,  DEPTH, BACK),
    v( 1.0,   0.25, DEPTH, BACK), v( 0.75,  0.5,  DEPTH, BACK), v( 0.75,  0.25, DEPTH, BACK),
    // stem
    v(-0.15,  0.5,  DEPTH, BACK), v( 0.15,  0.5,  DEPTH, BACK), v(-0.15, -2.0,  DEPTH, BACK),
    v( 0.15,  0.5,  DEPTH, BACK), v( 0.15, -2.0,  DEPTH, BACK), v(-0.15, -2.0,  DEPTH, BACK),

    // Right side of the stem (x = 0.15)
    v( 0.15, -2.0,  0.0,   RIGHT), v( 0.15, -2.0,  DEPTH, RIGHT), v( 0.15,  0.5,  DEPTH, RIGHT),
    v( 0.15, -2.0,  0.0,   RIGHT), v( 0.15,  0.5,  DEPTH, RIGHT), v( 0.15,  0.5,  0.0,   RIGHT),

    // Top of the bar (y = 1)
    v(-1.0,   1.0,  0.0,   UP), v(-1.0,   1.0,  DEPTH, UP), v( 1.0,   1.0,  DEPTH, UP),
    v(-1.0,   1.0,  0.0,   UP), v( 1.0,   1.0,  0.0,   UP), v( 1.0,   1.0,  DEPTH, UP),
];

const _: () = assert!(LETTER_VERTICES.len() % 3 == 0);

/// Number of triangles in [`LETTER_VERTICES`].
pub const TRIANGLE_COUNT: usize = LETTER_VERTICES.len() / 3;

/// Size in bytes of a vertex buffer holding `triangles` triangles.
pub const fn buffer_size(triangles: usize) -> usize {
    3 * triangles * std::mem::size_of::<Vertex>()
}

/// GPU-resident, unindexed triangle list.
///
/// The buffer is written once at creation and released when the mesh is dropped.
#[derive(Debug)]
pub struct Mesh {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) vertex_count: u32,
}

impl Mesh {
    /// Uploads `vertices` into a new vertex buffer.
    ///
    /// wgpu reports allocation and validation failures here through the
    /// device's uncaptured-error handler, not through a return value.
    pub fn new(gpu: &GpuContext, vertices: &[Vertex]) -> Self {
        use wgpu::util::DeviceExt;

        let vertex_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Letter Vertex Buffer"),
                contents: bytemuck::cast_slice(vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });

        Self {
            vertex_buffer,
            vertex_count: vertices.len() as u32,
        }
    }

    /// Uploads the letter geometry.
    pub fn letter(gpu: &GpuContext) -> Self {
        Self::new(gpu, &LETTER_VERTICES)
    }

    /// Number of vertices in the buffer.
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Number of triangles drawn from the buffer.
    pub fn triangle_count(&self) -> u32 {
        self.vertex_count / 3
    }

    /// Size of the vertex buffer in bytes.
    pub fn size(&self) -> u64 {
        self.vertex_buffer.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_has_twenty_triangles() {
        assert_eq!(LETTER_VERTICES.len(), 60);
        assert_eq!(TRIANGLE_COUNT, 20);
    }

    #[test]
    fn vertex_is_six_floats() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        assert_eq!(Vertex::LAYOUT.array_stride, 24);
    }

    #[test]
    fn buffer_size_matches_table() {
        assert_eq!(buffer_size(TRIANGLE_COUNT), 1440);
        let bytes: &[u8] = bytemuck::cast_slice(&LETTER_VERTICES);
        assert_eq!(bytes.len(), buffer_size(TRIANGLE_COUNT));
    }

    #[test]
    fn normals_are_unit_length() {
        for v in &LETTER_VERTICES {
            let [x, y, z] = v.normal;
            let len = (x * x + y * y + z * z).sqrt();
            assert!((len - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn triangles_share_one_normal() {
        for tri in LETTER_VERTICES.chunks(3) {
            assert_eq!(tri[0].normal, tri[1].normal);
            assert_eq!(tri[1].normal, tri[2].normal);
        }
    }

    #[test]
    fn faces_lie_in_their_planes() {
        for v in &LETTER_VERTICES {
            let [x, y, z] = v.position;
            if v.normal == FRONT {
                assert_eq!(z, 0.0);
            } else if v.normal == BACK {
                assert_eq!(z, DEPTH);
            } else if v.normal == RIGHT {
                assert_eq!(x, 0.15);
            } else if v.normal == UP {
                assert_eq!(y, 1.0);
            } else {
                panic!("unexpected normal {:?}", v.normal);
            }
        }
    }

    #[test]
    fn back_face_mirrors_front_face() {
        let all: &[Vertex] = &LETTER_VERTICES;
        let (front, rest) = all.split_at(24);
        for (f, b) in front.iter().zip(&rest[..24]) {
            assert_eq!(f.position[0], b.position[0]);
            assert_eq!(f.position[1], b.position[1]);
        }
    }
}
