//! Dark/light theme flag and the colors each theme asks the canvas for.

/// Share of the remaining distance a color covers each frame.
pub const COLOR_DAMPING: f32 = 0.05;
/// Below this distance (in 0-255 channel units) a transition lands on its target.
pub const SNAP_EPSILON: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "◐",
            Self::Dark => "◑",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette {
                backdrop: Rgb::new(10.0, 10.0, 10.0),
                particles: Rgb::new(6.0, 182.0, 212.0),
                wireframe: Rgb::new(168.0, 85.0, 247.0),
                additive: true,
            },
            Self::Light => Palette {
                backdrop: Rgb::new(245.0, 247.0, 250.0),
                particles: Rgb::new(14.0, 116.0, 144.0),
                wireframe: Rgb::new(124.0, 58.0, 237.0),
                additive: false,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn distance(self, other: Self) -> f32 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Moves `factor` of the way toward `target`; `factor` in `[0, 1]`.
    pub fn approach(self, target: Self, factor: f32) -> Self {
        Self {
            r: self.r + factor * (target.r - self.r),
            g: self.g + factor * (target.g - self.g),
            b: self.b + factor * (target.b - self.b),
        }
    }

    pub fn css(self) -> String {
        format!(
            "rgb({}, {}, {})",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

fn channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub backdrop: Rgb,
    pub particles: Rgb,
    pub wireframe: Rgb,
    /// Particles blend additively ("lighter") on dark backdrops.
    pub additive: bool,
}

/// A color easing toward its target one frame at a time.
#[derive(Clone, Copy, Debug)]
pub struct ColorTransition {
    current: Rgb,
    target: Rgb,
}

impl ColorTransition {
    pub fn settled(color: Rgb) -> Self {
        Self {
            current: color,
            target: color,
        }
    }

    pub fn retarget(&mut self, target: Rgb) {
        self.target = target;
    }

    #[cfg(test)]
    pub fn current(&self) -> Rgb {
        self.current
    }

    #[cfg(test)]
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    pub fn step(&mut self) -> Rgb {
        if self.current.distance(self.target) <= SNAP_EPSILON {
            self.current = self.target;
        } else {
            self.current = self.current.approach(self.target, COLOR_DAMPING);
        }
        self.current
    }
}
