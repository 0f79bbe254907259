/// Half extents of the rectangle in its local xy plane
const HALF_WIDTH: f32 = 0.8;
const HALF_HEIGHT: f32 = 0.6;

/// Axis-aligned rectangle at z = 0, two CCW triangles facing +Z
#[derive(Debug, Clone)]
pub struct RectMesh {
    positions: [f32; 12],
    indices: [u16; 6],
}

impl RectMesh {
    pub fn new() -> Self {
        Self {
            positions: [
                -HALF_WIDTH, -HALF_HEIGHT, 0.0,
                HALF_WIDTH, -HALF_HEIGHT, 0.0,
                -HALF_WIDTH, HALF_HEIGHT, 0.0,
                HALF_WIDTH, HALF_HEIGHT, 0.0,
            ],
            indices: [
                0, 1, 2,
                3, 2, 1,
            ],
        }
    }

    /// Flat xyz positions for the vertex buffer
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    pub fn index_count(&self) -> i32 {
        self.indices.len() as i32
    }
}

impl Default for RectMesh {
    fn default() -> Self {
        Self::new()
    }
}
