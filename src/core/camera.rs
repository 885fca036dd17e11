//! Orbit-Kamera (Arc-Rotate) mit Projektion und Screen-Ray.

use super::mesh::Aabb;
use super::picking::Ray;
use crate::shared::EditorOptions;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Orbit-Kamera um einen Zielpunkt.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Horizontaler Winkel (Radiant)
    pub alpha: f32,
    /// Vertikaler Winkel von der +Y-Achse (Radiant)
    pub beta: f32,
    /// Abstand zum Ziel
    pub radius: f32,
    /// Zielpunkt
    pub target: Vec3,
    /// Vertikales Sichtfeld (Radiant)
    pub fov: f32,
    /// Minimaler Abstand zum Ziel
    pub lower_radius_limit: f32,
    /// Ob Benutzereingaben die Kamera steuern
    pub controls_attached: bool,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}

impl OrbitCamera {
    const NEAR: f32 = 0.1;
    const FAR: f32 = 1000.0;
    const BETA_EPSILON: f32 = 0.01;

    /// Erstellt eine Kamera mit den Startwerten aus den Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            alpha: options.camera_alpha,
            beta: options.camera_beta,
            radius: options.camera_radius.max(options.camera_lower_radius_limit),
            target: Vec3::ZERO,
            fov: options.camera_fov,
            lower_radius_limit: options.camera_lower_radius_limit,
            controls_attached: true,
        }
    }

    /// Setzt Winkel, Abstand und Ziel zurück. Der Steuerungszustand bleibt erhalten.
    pub fn reset(&mut self, options: &EditorOptions) {
        let attached = self.controls_attached;
        *self = Self::from_options(options);
        self.controls_attached = attached;
    }

    /// Kameraposition in Welt-Koordinaten.
    pub fn eye_position(&self) -> Vec3 {
        let (sa, ca) = self.alpha.sin_cos();
        let (sb, cb) = self.beta.sin_cos();
        self.target + self.radius * Vec3::new(ca * sb, cb, sa * sb)
    }

    /// View-Matrix (Welt → Kamera).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), self.target, Vec3::Y)
    }

    /// Projektionsmatrix (Kamera → Clip).
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov, aspect, Self::NEAR, Self::FAR)
    }

    /// Kombinierte View-Projection-Matrix.
    pub fn view_projection(&self, viewport: Vec2) -> Mat4 {
        let aspect = if viewport.y > 0.0 {
            viewport.x / viewport.y
        } else {
            1.0
        };
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// Projiziert einen Weltpunkt in Screen-Pixel (Ursprung oben links, y nach unten).
    ///
    /// `None` für Punkte hinter der Kamera oder einen leeren Viewport.
    pub fn project(&self, world: Vec3, viewport: Vec2) -> Option<Vec2> {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return None;
        }
        let clip = self.view_projection(viewport) * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * viewport.x,
            (1.0 - ndc.y) * 0.5 * viewport.y,
        ))
    }

    /// Strahl vom Near-Plane-Punkt unter dem Zeiger in die Szene.
    pub fn screen_ray(&self, pointer: Vec2, viewport: Vec2) -> Option<Ray> {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return None;
        }
        let ndc_x = pointer.x / viewport.x * 2.0 - 1.0;
        let ndc_y = 1.0 - pointer.y / viewport.y * 2.0;

        let inverse = self.view_projection(viewport).inverse();
        let near = inverse * Vec4::new(ndc_x, ndc_y, -1.0, 1.0);
        let far = inverse * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let near = near.truncate() / near.w;
        let far = far.truncate() / far.w;

        let direction = (far - near).normalize_or_zero();
        if direction == Vec3::ZERO {
            return None;
        }
        Some(Ray {
            origin: near,
            direction,
        })
    }

    /// Dreht die Kamera um das Ziel (Pixel-Delta × Empfindlichkeit).
    pub fn orbit(&mut self, delta_px: Vec2, sensitivity: f32) {
        self.alpha -= delta_px.x * sensitivity;
        self.beta = (self.beta - delta_px.y * sensitivity).clamp(
            Self::BETA_EPSILON,
            std::f32::consts::PI - Self::BETA_EPSILON,
        );
    }

    /// Verbindet die Benutzersteuerung.
    pub fn attach_control(&mut self) {
        self.controls_attached = true;
    }

    /// Trennt die Benutzersteuerung.
    pub fn detach_control(&mut self) {
        self.controls_attached = false;
    }

    /// Richtet die Kamera auf eine Bounding-Box aus.
    ///
    /// Ziel = Mittelpunkt, Abstand = doppelte Länge der halben Ausdehnung.
    pub fn frame_bounds(&mut self, bounds: &Aabb) {
        self.target = bounds.center();
        self.radius = (bounds.half_extent().length() * 2.0).max(self.lower_radius_limit);
    }
}
