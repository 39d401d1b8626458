//! Orthografische Kamera über der Bodenebene und Zeiger-Projektion.

use glam::{Vec2, Vec3};

/// Strahl in Weltkoordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Startpunkt
    pub origin: Vec3,
    /// Richtung (muss nicht normiert sein)
    pub direction: Vec3,
}

impl Ray {
    /// Unterhalb dieses Betrags gilt der Strahl als parallel zur Ebene.
    const PARALLEL_EPSILON: f32 = 1.0e-6;

    /// Schneidet den Strahl mit der Bodenebene y = 0.
    ///
    /// `None`, wenn der Strahl parallel zur Ebene läuft oder von ihr weg zeigt.
    /// Das Ergebnis ist (Welt-x, Welt-z).
    pub fn intersect_ground(&self) -> Option<Vec2> {
        let denom = self.direction.y;
        if !denom.is_finite() || denom.abs() < Self::PARALLEL_EPSILON {
            return None;
        }
        let t = -self.origin.y / denom;
        if !t.is_finite() || t < 0.0 {
            return None;
        }
        let hit = self.origin + self.direction * t;
        Some(Vec2::new(hit.x, hit.z))
    }
}

/// Orthografische Kamera, standardmäßig senkrecht von oben auf die Bodenebene.
#[derive(Debug, Clone)]
pub struct GroundCamera {
    /// Kameraposition in Weltkoordinaten
    pub position: Vec3,
    /// Blickrichtung
    pub direction: Vec3,
    /// Zoom in Pixeln pro Welteinheit
    pub zoom: f32,
}

impl GroundCamera {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 5.0;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 500.0;

    /// Erstellt die Standardkamera: 100 Einheiten über dem Ursprung, Zoom 50.
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 100.0, 0.0),
            direction: Vec3::NEG_Y,
            zoom: 50.0,
        }
    }

    /// Verschiebt die Kamera parallel zur Bodenebene.
    pub fn pan(&mut self, delta: Vec2) {
        self.position.x += delta.x;
        self.position.z += delta.y;
    }

    /// Ändert den Zoom-Level
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Strahl durch eine Bildschirmposition (Pixel, Ursprung oben links).
    ///
    /// Bildschirm-rechts entspricht Welt +x; Bildschirm-unten ergibt sich aus
    /// Blickrichtung × x (bei Blick nach unten: Welt +z).
    pub fn pointer_ray(&self, screen_pos: Vec2, viewport_size: Vec2) -> Ray {
        let offset = (screen_pos - viewport_size * 0.5) / self.zoom.max(f32::EPSILON);
        let right = Vec3::X;
        let down = self.direction.cross(right).normalize_or_zero();
        Ray {
            origin: self.position + right * offset.x + down * offset.y,
            direction: self.direction,
        }
    }

    /// Projiziert eine Bildschirmposition auf die Bodenebene.
    pub fn screen_to_ground(&self, screen_pos: Vec2, viewport_size: Vec2) -> Option<Vec2> {
        self.pointer_ray(screen_pos, viewport_size).intersect_ground()
    }
}

impl Default for GroundCamera {
    fn default() -> Self {
        Self::new()
    }
}
