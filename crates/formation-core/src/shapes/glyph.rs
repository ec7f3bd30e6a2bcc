//! 5x7 bitmap glyphs and text lattice layout.
//!
//! Covers digits, dash, comma and space. Unknown characters advance the pen
//! like a space so lattice width stays predictable.

use glam::Vec3;
use rand::Rng;

pub const GLYPH_ROWS: usize = 7;
pub const GLYPH_COLS: usize = 5;

type Bitmap = [[u8; GLYPH_COLS]; GLYPH_ROWS];

#[rustfmt::skip]
fn glyph(c: char) -> Option<&'static Bitmap> {
    match c {
        '0' => Some(&[
            [0,1,1,1,0],
            [1,0,0,0,1],
            [1,0,0,1,1],
            [1,0,1,0,1],
            [1,1,0,0,1],
            [1,0,0,0,1],
            [0,1,1,1,0],
        ]),
        '1' => Some(&[
            [0,0,1,0,0],
            [0,1,1,0,0],
            [0,0,1,0,0],
            [0,0,1,0,0],
            [0,0,1,0,0],
            [0,0,1,0,0],
            [0,1,1,1,0],
        ]),
        '2' => Some(&[
            [0,1,1,1,0],
            [1,0,0,0,1],
            [0,0,0,0,1],
            [0,0,1,1,0],
            [0,1,0,0,0],
            [1,0,0,0,0],
            [1,1,1,1,1],
        ]),
        '3' => Some(&[
            [0,1,1,1,0],
            [1,0,0,0,1],
            [0,0,0,0,1],
            [0,0,1,1,0],
            [0,0,0,0,1],
            [1,0,0,0,1],
            [0,1,1,1,0],
        ]),
        '4' => Some(&[
            [0,0,0,1,0],
            [0,0,1,1,0],
            [0,1,0,1,0],
            [1,0,0,1,0],
            [1,1,1,1,1],
            [0,0,0,1,0],
            [0,0,0,1,0],
        ]),
        '5' => Some(&[
            [1,1,1,1,1],
            [1,0,0,0,0],
            [1,1,1,1,0],
            [0,0,0,0,1],
            [0,0,0,0,1],
            [1,0,0,0,1],
            [0,1,1,1,0],
        ]),
        '6' => Some(&[
            [0,0,1,1,0],
            [0,1,0,0,0],
            [1,0,0,0,0],
            [1,1,1,1,0],
            [1,0,0,0,1],
            [1,0,0,0,1],
            [0,1,1,1,0],
        ]),
        '7' => Some(&[
            [1,1,1,1,1],
            [0,0,0,0,1],
            [0,0,0,1,0],
            [0,0,1,0,0],
            [0,0,1,0,0],
            [0,0,1,0,0],
            [0,0,1,0,0],
        ]),
        '8' => Some(&[
            [0,1,1,1,0],
            [1,0,0,0,1],
            [1,0,0,0,1],
            [0,1,1,1,0],
            [1,0,0,0,1],
            [1,0,0,0,1],
            [0,1,1,1,0],
        ]),
        '9' => Some(&[
            [0,1,1,1,0],
            [1,0,0,0,1],
            [1,0,0,0,1],
            [0,1,1,1,1],
            [0,0,0,0,1],
            [0,0,0,1,0],
            [0,1,1,0,0],
        ]),
        '-' => Some(&[
            [0,0,0,0,0],
            [0,0,0,0,0],
            [0,0,0,0,0],
            [1,1,1,1,1],
            [0,0,0,0,0],
            [0,0,0,0,0],
            [0,0,0,0,0],
        ]),
        ',' => Some(&[
            [0,0,0,0,0],
            [0,0,0,0,0],
            [0,0,0,0,0],
            [0,0,0,0,0],
            [0,0,0,0,0],
            [0,0,1,0,0],
            [0,1,0,0,0],
        ]),
        _ => None,
    }
}

/// Cell sizing for laying glyphs out in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphMetrics {
    pub char_width: f32,
    pub char_height: f32,
    /// Pen advance per character, including the gap.
    pub advance: f32,
}

impl Default for GlyphMetrics {
    fn default() -> Self {
        Self {
            char_width: 4.0,
            char_height: 6.0,
            advance: 4.5,
        }
    }
}

/// Positions of all set cells, as `(x, down)` offsets from the pen origin
/// (top-left of the first character, rows increasing downward).
pub fn stroke_cells(text: &str, m: &GlyphMetrics) -> Vec<(f32, f32)> {
    let cell_w = m.char_width / GLYPH_COLS as f32;
    let cell_h = m.char_height / GLYPH_ROWS as f32;
    let mut cells = Vec::new();
    let mut pen_x = 0.0;
    for c in text.chars() {
        if let Some(bitmap) = glyph(c) {
            for (row, cols) in bitmap.iter().enumerate() {
                for (col, &bit) in cols.iter().enumerate() {
                    if bit == 1 {
                        cells.push((pen_x + col as f32 * cell_w, row as f32 * cell_h));
                    }
                }
            }
        }
        pen_x += m.advance;
    }
    cells
}

#[derive(Clone, Debug, PartialEq)]
pub struct LetteringParams {
    pub text: String,
    /// Multiplies the glyph metrics into world units.
    pub scale: f32,
    /// Depth of the z jitter band.
    pub depth_jitter: f32,
    pub metrics: GlyphMetrics,
}

impl LetteringParams {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            scale: 1.0,
            depth_jitter: 0.5,
            metrics: GlyphMetrics::default(),
        }
    }
}

/// Precomputed text lattice in the x-y plane, centered at the origin.
#[derive(Clone, Debug)]
pub struct LetteringLayout {
    points: Vec<(f32, f32)>,
    depth_jitter: f32,
}

impl LetteringLayout {
    pub fn new(params: &LetteringParams) -> Self {
        let cells = stroke_cells(&params.text, &params.metrics);
        let char_count = params.text.chars().count();
        let width = char_count as f32 * params.metrics.advance;
        let mid_row = (GLYPH_ROWS - 1) as f32 * 0.5 * params.metrics.char_height
            / GLYPH_ROWS as f32;
        let points = cells
            .into_iter()
            .map(|(x, down)| {
                (
                    (x - width * 0.5) * params.scale,
                    (mid_row - down) * params.scale,
                )
            })
            .collect();
        Self {
            points,
            depth_jitter: params.depth_jitter,
        }
    }

    /// Number of lattice points; the natural particle count for the text.
    pub fn preferred_count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Target for slot `index`, cycling the lattice so any count is valid.
    pub fn generate(&self, index: usize, rng: &mut impl Rng) -> Vec3 {
        if self.points.is_empty() {
            return Vec3::ZERO;
        }
        let (x, y) = self.points[index % self.points.len()];
        Vec3::new(x, y, (rng.gen::<f32>() - 0.5) * self.depth_jitter)
    }
}
