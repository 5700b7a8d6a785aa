// viewport.rs - Visible part of the polygon and arrow-key panning

/// Cells moved per arrow key press.
pub const SHIFT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Moving {
    Down,
    Right,
    Left,
    Up,
}

impl Moving {
    pub fn from_key(key: egui::Key) -> Option<Self> {
        match key {
            egui::Key::ArrowDown => Some(Self::Down),
            egui::Key::ArrowRight => Some(Self::Right),
            egui::Key::ArrowLeft => Some(Self::Left),
            egui::Key::ArrowUp => Some(Self::Up),
            _ => None,
        }
    }
}

/// A window of `width` × `height` cells whose top-left corner sits at
/// (`left`, `top`) inside a polygon of `poly_width` × `poly_height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub left: usize,
    pub top: usize,
    pub width: usize,
    pub height: usize,
    poly_width: usize,
    poly_height: usize,
}

impl Viewport {
    /// Starts at the top-left corner, clipped to the polygon.
    pub fn new(window: [usize; 2], poly_width: usize, poly_height: usize) -> Self {
        Self {
            left: 0,
            top: 0,
            width: window[0].min(poly_width),
            height: window[1].min(poly_height),
            poly_width,
            poly_height,
        }
    }

    /// Moves by [`SHIFT`] cells unless that would leave the polygon.
    pub fn shift(&mut self, side: Moving) {
        match side {
            Moving::Down => {
                if self.top + SHIFT + self.height <= self.poly_height {
                    self.top += SHIFT;
                }
            }
            Moving::Right => {
                if self.left + SHIFT + self.width <= self.poly_width {
                    self.left += SHIFT;
                }
            }
            Moving::Left => {
                if self.left >= SHIFT {
                    self.left -= SHIFT;
                }
            }
            Moving::Up => {
                if self.top >= SHIFT {
                    self.top -= SHIFT;
                }
            }
        }
    }

    pub fn columns(&self) -> std::ops::Range<usize> {
        self.left..self.left + self.width
    }

    pub fn rows(&self) -> std::ops::Range<usize> {
        self.top..self.top + self.height
    }
}
