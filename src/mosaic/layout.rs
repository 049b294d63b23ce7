/// Fixed-grid layout for a mosaic
///
/// A mosaic canvas is tiled with equally sized slots in row-major order.
/// Leftover space on the right and bottom edges (canvas not a multiple of the
/// tile size) is left unused.

/// A rectangle in canvas coordinates (pixels, origin top-left)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl Slot {
    pub const fn new(left: u32, top: u32, width: u32, height: u32) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> u32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }

    /// Half-open containment: the right and bottom edges belong to the
    /// neighbouring slot
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left as f32
            && x < self.right() as f32
            && y >= self.top as f32
            && y < self.bottom() as f32
    }
}

/// Generate the slots tiling a `canvas_width` x `canvas_height` canvas with
/// `tile_width` x `tile_height` tiles
///
/// Returns `floor(W/w) * floor(H/h)` slots, row 0 left to right first.
/// A zero tile dimension yields no slots.
pub fn generate(canvas_width: u32, canvas_height: u32, tile_width: u32, tile_height: u32) -> Vec<Slot> {
    if tile_width == 0 || tile_height == 0 {
        return Vec::new();
    }

    let cols = canvas_width / tile_width;
    let rows = canvas_height / tile_height;

    (0..rows)
        .flat_map(|row| {
            (0..cols).map(move |col| {
                Slot::new(col * tile_width, row * tile_height, tile_width, tile_height)
            })
        })
        .collect()
}
