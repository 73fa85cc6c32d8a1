//! Positions for the synthetic cursor: a dot pinned to the pointer and a ring
//! that trails it through a CSS transition.

pub const DOT_SIZE: f64 = 8.0;
pub const RING_SIZE: f64 = 30.0;

#[derive(Clone, Debug, PartialEq)]
pub struct CursorFrame {
    pub dot: String,
    pub ring: String,
    /// Set on the first move; the overlay stays hidden until then.
    pub first: bool,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CursorOverlay {
    last: Option<(f64, f64)>,
}

impl CursorOverlay {
    pub fn moved(&mut self, client_x: f64, client_y: f64) -> CursorFrame {
        let first = self.last.is_none();
        self.last = Some((client_x, client_y));

        CursorFrame {
            dot: centred_transform(client_x, client_y, DOT_SIZE),
            ring: centred_transform(client_x, client_y, RING_SIZE),
            first,
        }
    }

    #[cfg(test)]
    pub fn position(&self) -> Option<(f64, f64)> {
        self.last
    }
}

fn centred_transform(x: f64, y: f64, size: f64) -> String {
    let half = size / 2.0;
    format!("translate3d({:.1}px, {:.1}px, 0)", x - half, y - half)
}
