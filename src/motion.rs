//! Geometry and per-frame motion for the background scene.
//!
//! Nothing here touches the DOM: the canvas component feeds pointer, resize
//! and theme events into a [`FrameContext`] and asks it for one frame at a
//! time.

use glam::{EulerRot, Mat4, Vec3};

use crate::theme::{ColorTransition, Rgb, Theme};

pub const PARTICLE_COUNT: usize = 2000;
pub const SHELL_RADIUS: f32 = 600.0;
pub const SHELL_JITTER: f32 = 15.0;
pub const WIREFRAME_RADIUS: f32 = 320.0;

pub const POINTER_SENSITIVITY: f32 = 0.0005;
pub const FIELD_SPIN: f32 = 0.001;
pub const WIREFRAME_SPIN: f32 = -0.0006;
pub const ROTATION_DAMPING: f32 = 0.05;

pub const PARTICLE_SIZE: f32 = 3.0;
pub const PARTICLE_OPACITY: f32 = 0.8;
pub const WIREFRAME_OPACITY: f32 = 0.22;

const FIELD_OF_VIEW_DEGREES: f32 = 75.0;
const NEAR_PLANE: f32 = 1.0;
const FAR_PLANE: f32 = 2000.0;
const CAMERA_DISTANCE: f32 = 1000.0;

/// Points spread evenly over a sphere along a golden-angle style spiral.
///
/// `noise` yields values in `[0, 1)`; each point's radius is pushed by up to
/// `jitter` in either direction.
pub fn particle_shell(
    count: usize,
    radius: f32,
    jitter: f32,
    mut noise: impl FnMut() -> f32,
) -> Vec<Vec3> {
    let n = count as f32;
    let spiral = (n * std::f32::consts::PI).sqrt();

    (0..count)
        .map(|i| {
            let phi = (-1.0 + (2.0 * i as f32) / n).acos();
            let theta = spiral * phi;
            let r = radius + (noise().clamp(0.0, 1.0) * 2.0 - 1.0) * jitter;

            Vec3::new(
                r * theta.cos() * phi.sin(),
                r * theta.sin() * phi.sin(),
                r * phi.cos(),
            )
        })
        .collect()
}

/// The 30 edges of a regular icosahedron with the given circumradius.
pub fn icosahedron_edges(radius: f32) -> Vec<(Vec3, Vec3)> {
    let golden = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let raw = [
        Vec3::new(-1.0, golden, 0.0),
        Vec3::new(1.0, golden, 0.0),
        Vec3::new(-1.0, -golden, 0.0),
        Vec3::new(1.0, -golden, 0.0),
        Vec3::new(0.0, -1.0, golden),
        Vec3::new(0.0, 1.0, golden),
        Vec3::new(0.0, -1.0, -golden),
        Vec3::new(0.0, 1.0, -golden),
        Vec3::new(golden, 0.0, -1.0),
        Vec3::new(golden, 0.0, 1.0),
        Vec3::new(-golden, 0.0, -1.0),
        Vec3::new(-golden, 0.0, 1.0),
    ];

    // Unscaled, neighbours sit exactly 2 apart; the next-nearest pair is ~3.2.
    let mut edges = Vec::with_capacity(30);
    for (i, a) in raw.iter().enumerate() {
        for b in &raw[i + 1..] {
            if (a.distance(*b) - 2.0).abs() < 1e-3 {
                edges.push((a.normalize() * radius, b.normalize() * radius));
            }
        }
    }
    edges
}

/// Everything the renderer draws, built once per mount.
pub struct SceneGeometry {
    pub particles: Vec<Vec3>,
    pub wireframe: Vec<(Vec3, Vec3)>,
}

impl SceneGeometry {
    pub fn build(noise: impl FnMut() -> f32) -> Self {
        Self {
            particles: particle_shell(PARTICLE_COUNT, SHELL_RADIUS, SHELL_JITTER, noise),
            wireframe: icosahedron_edges(WIREFRAME_RADIUS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn aspect(self) -> f32 {
        if self.width > 0.0 && self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// Rotation the scene leans toward, derived from the pointer's offset from
/// the viewport centre.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerTarget {
    pub pitch: f32,
    pub yaw: f32,
}

impl PointerTarget {
    pub fn from_client(client_x: f32, client_y: f32, viewport: Viewport) -> Self {
        Self {
            pitch: (client_y - viewport.height / 2.0) * POINTER_SENSITIVITY,
            yaw: (client_x - viewport.width / 2.0) * POINTER_SENSITIVITY,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
}

impl Rotation {
    /// Constant spin about Y, then exponential smoothing toward `target`.
    pub fn advance(&mut self, spin: f32, target: PointerTarget, damping: f32) {
        self.y += spin;
        self.y += damping * (target.yaw - self.y);
        self.x += damping * (target.pitch - self.x);
    }

    pub fn matrix(self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.x, self.y, 0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    /// Distance from the camera along its view axis.
    pub depth: f32,
}

/// Perspective camera on the +Z axis looking at the origin.
#[derive(Clone, Debug)]
pub struct Camera {
    viewport: Viewport,
    view_projection: Mat4,
}

impl Camera {
    pub fn new(viewport: Viewport) -> Self {
        let mut camera = Self {
            viewport,
            view_projection: Mat4::IDENTITY,
        };
        camera.rebuild();
        camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let projection = Mat4::perspective_rh_gl(
            FIELD_OF_VIEW_DEGREES.to_radians(),
            self.viewport.aspect(),
            NEAR_PLANE,
            FAR_PLANE,
        );
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -CAMERA_DISTANCE));
        self.view_projection = projection * view;
    }

    /// Screen position of `point` under `model`, or `None` outside the
    /// near/far range.
    pub fn project(&self, model: &Mat4, point: Vec3) -> Option<ScreenPoint> {
        let clip = self.view_projection * (*model * point.extend(1.0));
        if clip.w <= 0.0 {
            return None;
        }

        let ndc = clip.truncate() / clip.w;
        if !(-1.0..=1.0).contains(&ndc.z) {
            return None;
        }

        Some(ScreenPoint {
            x: (ndc.x + 1.0) * 0.5 * self.viewport.width,
            y: (1.0 - ndc.y) * 0.5 * self.viewport.height,
            depth: clip.w,
        })
    }

    /// Size of a perspective point sprite at `depth`, in CSS pixels.
    pub fn point_size(&self, depth: f32) -> f32 {
        if depth <= 0.0 {
            return 0.0;
        }
        PARTICLE_SIZE * (self.viewport.height / 2.0) / depth
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameColors {
    pub backdrop: Rgb,
    pub particles: Rgb,
    pub wireframe: Rgb,
    pub additive: bool,
}

/// Mutable state shared by the event handlers and the frame callback of one
/// background instance.
pub struct FrameContext {
    camera: Camera,
    pointer: PointerTarget,
    field: Rotation,
    shell: Rotation,
    spin_scale: f32,
    backdrop: ColorTransition,
    particles: ColorTransition,
    wireframe: ColorTransition,
    additive: bool,
}

impl FrameContext {
    pub fn new(viewport: Viewport, theme: Theme, reduced_motion: bool) -> Self {
        let palette = theme.palette();
        Self {
            camera: Camera::new(viewport),
            pointer: PointerTarget::default(),
            field: Rotation::default(),
            shell: Rotation::default(),
            spin_scale: if reduced_motion { 0.0 } else { 1.0 },
            backdrop: ColorTransition::settled(palette.backdrop),
            particles: ColorTransition::settled(palette.particles),
            wireframe: ColorTransition::settled(palette.wireframe),
            additive: palette.additive,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn pointer_moved(&mut self, client_x: f32, client_y: f32) {
        self.pointer = PointerTarget::from_client(client_x, client_y, self.camera.viewport());
    }

    pub fn resized(&mut self, viewport: Viewport) {
        self.camera.resize(viewport);
    }

    /// Retargets colors only; geometry and rotation carry on.
    pub fn theme_changed(&mut self, theme: Theme) {
        let palette = theme.palette();
        self.backdrop.retarget(palette.backdrop);
        self.particles.retarget(palette.particles);
        self.wireframe.retarget(palette.wireframe);
        self.additive = palette.additive;
    }

    pub fn advance(&mut self) -> FrameColors {
        self.field.advance(
            FIELD_SPIN * self.spin_scale,
            self.pointer,
            ROTATION_DAMPING,
        );
        self.shell.advance(
            WIREFRAME_SPIN * self.spin_scale,
            self.pointer,
            ROTATION_DAMPING,
        );

        FrameColors {
            backdrop: self.backdrop.step(),
            particles: self.particles.step(),
            wireframe: self.wireframe.step(),
            additive: self.additive,
        }
    }

    pub fn field_rotation(&self) -> Rotation {
        self.field
    }

    pub fn shell_rotation(&self) -> Rotation {
        self.shell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32, tolerance: f32) -> bool {
        (a - b).abs() <= tolerance
    }

    #[test]
    fn shell_points_stay_within_jitter_band() {
        let mut seed = 0.0_f32;
        let points = particle_shell(500, SHELL_RADIUS, SHELL_JITTER, || {
            seed = (seed + 0.618_034) % 1.0;
            seed
        });

        assert_eq!(points.len(), 500);
        for point in points {
            let r = point.length();
            assert!(r >= SHELL_RADIUS - SHELL_JITTER - 0.01, "radius {r}");
            assert!(r <= SHELL_RADIUS + SHELL_JITTER + 0.01, "radius {r}");
        }
    }

    #[test]
    fn shell_distribution_is_deterministic_without_noise() {
        let points = particle_shell(8, 100.0, SHELL_JITTER, || 0.5);

        // First point sits on the south pole.
        assert!(approx(points[0].z, -100.0, 1e-3));
        assert!(approx(points[0].x, 0.0, 1e-3));
        assert_eq!(points, particle_shell(8, 100.0, SHELL_JITTER, || 0.5));
    }

    #[test]
    fn empty_shell_has_no_points() {
        assert!(particle_shell(0, SHELL_RADIUS, SHELL_JITTER, || 0.5).is_empty());
    }

    #[test]
    fn icosahedron_has_thirty_equal_edges() {
        let edges = icosahedron_edges(WIREFRAME_RADIUS);
        assert_eq!(edges.len(), 30);

        let first = edges[0].0.distance(edges[0].1);
        for (a, b) in &edges {
            assert!(approx(a.length(), WIREFRAME_RADIUS, 1e-2));
            assert!(approx(a.distance(*b), first, 1e-2));
        }
    }

    #[test]
    fn rotation_takes_damped_step_toward_target() {
        let mut rotation = Rotation { x: 0.2, y: 0.0 };
        let target = PointerTarget {
            pitch: 1.2,
            yaw: 0.5,
        };

        rotation.advance(0.0, target, ROTATION_DAMPING);

        assert!(approx(rotation.x, 0.2 + 0.05 * (1.2 - 0.2), 1e-6));
        assert!(approx(rotation.y, 0.05 * 0.5, 1e-6));
    }

    #[test]
    fn rotation_settles_just_ahead_of_target_under_spin() {
        let target = PointerTarget {
            pitch: -0.1,
            yaw: 0.3,
        };
        let mut rotation = Rotation::default();
        for _ in 0..2_000 {
            rotation.advance(FIELD_SPIN, target, ROTATION_DAMPING);
        }

        let lead = FIELD_SPIN * (1.0 - ROTATION_DAMPING) / ROTATION_DAMPING;
        assert!(approx(rotation.y, target.yaw + lead, 1e-4));
        assert!(approx(rotation.x, target.pitch, 1e-4));
    }

    #[test]
    fn pointer_target_is_centred_on_viewport() {
        let viewport = Viewport::new(1280.0, 720.0);
        assert_eq!(
            PointerTarget::from_client(640.0, 360.0, viewport),
            PointerTarget::default()
        );

        let corner = PointerTarget::from_client(0.0, 0.0, viewport);
        assert!(approx(corner.yaw, -640.0 * POINTER_SENSITIVITY, 1e-6));
        assert!(approx(corner.pitch, -360.0 * POINTER_SENSITIVITY, 1e-6));
    }

    #[test]
    fn origin_projects_to_screen_centre() {
        let camera = Camera::new(Viewport::new(1280.0, 720.0));
        let point = camera
            .project(&Mat4::IDENTITY, Vec3::ZERO)
            .expect("origin is visible");

        assert!(approx(point.x, 640.0, 1e-2));
        assert!(approx(point.y, 360.0, 1e-2));
        assert!(approx(point.depth, CAMERA_DISTANCE, 1e-2));
        assert!(approx(camera.point_size(point.depth), 3.0 * 360.0 / 1000.0, 1e-4));
    }

    #[test]
    fn points_behind_camera_are_culled() {
        let camera = Camera::new(Viewport::new(800.0, 600.0));
        assert!(camera
            .project(&Mat4::IDENTITY, Vec3::new(0.0, 0.0, CAMERA_DISTANCE + 50.0))
            .is_none());
        assert!(camera
            .project(&Mat4::IDENTITY, Vec3::new(0.0, 0.0, -1_500.0))
            .is_none());
    }

    #[test]
    fn nearer_points_draw_larger() {
        let camera = Camera::new(Viewport::new(800.0, 600.0));
        let near = camera
            .project(&Mat4::IDENTITY, Vec3::new(0.0, 0.0, 500.0))
            .expect("visible");
        let far = camera
            .project(&Mat4::IDENTITY, Vec3::new(0.0, 0.0, -500.0))
            .expect("visible");

        assert!(camera.point_size(near.depth) > camera.point_size(far.depth));
    }

    #[test]
    fn resize_moves_projection_centre_without_resetting_motion() {
        let mut context = FrameContext::new(Viewport::new(800.0, 600.0), Theme::Dark, false);
        context.pointer_moved(800.0, 600.0);
        for _ in 0..30 {
            context.advance();
        }
        let before = context.field_rotation();

        context.resized(Viewport::new(400.0, 900.0));
        let centre = context
            .camera()
            .project(&Mat4::IDENTITY, Vec3::ZERO)
            .expect("visible");

        assert_eq!(context.field_rotation(), before);
        assert!(approx(centre.x, 200.0, 1e-2));
        assert!(approx(centre.y, 450.0, 1e-2));
    }

    #[test]
    fn theme_change_eases_colors_and_keeps_rotation() {
        let mut context = FrameContext::new(Viewport::new(800.0, 600.0), Theme::Dark, false);
        for _ in 0..10 {
            context.advance();
        }
        let rotation = context.field_rotation();

        context.theme_changed(Theme::Light);
        let target = Theme::Light.palette();
        let start = Theme::Dark.palette().backdrop.distance(target.backdrop);
        let colors = context.advance();

        assert!(colors.backdrop.distance(target.backdrop) < start);
        assert_ne!(colors.backdrop, target.backdrop);
        assert!(!colors.additive);
        assert_ne!(context.field_rotation(), rotation);
    }

    #[test]
    fn reduced_motion_drops_constant_spin() {
        let mut context = FrameContext::new(Viewport::new(800.0, 600.0), Theme::Dark, true);
        context.pointer_moved(400.0, 300.0);
        for _ in 0..100 {
            context.advance();
        }

        assert_eq!(context.field_rotation(), Rotation::default());
        assert_eq!(context.shell_rotation(), Rotation::default());
    }
}
