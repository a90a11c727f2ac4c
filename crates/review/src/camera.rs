//! Orbit-style viewport camera.
//!
//! The camera is described the way 3D editors store their viewports: a
//! rotation, the point the view orbits around and the distance from that
//! point. Eye position and view matrix are derived from those three values.

use glam::{Mat4, Quat, Vec3};
use review_core::ViewSample;

/// A viewport camera orbiting around a pivot.
#[derive(Debug, Clone)]
pub struct ViewportCamera {
    /// View orientation.
    pub rotation: Quat,
    /// Orbit pivot in world space.
    pub location: Vec3,
    /// Distance from the pivot to the eye.
    pub distance: f32,
}

impl Default for ViewportCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportCamera {
    /// Smallest distance zooming can reach.
    pub const MIN_DISTANCE: f32 = 0.001;

    /// Creates a camera looking down -Z at the origin from 10 units away.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rotation: Quat::IDENTITY,
            location: Vec3::ZERO,
            distance: 10.0,
        }
    }

    /// Eye position in world space.
    #[must_use]
    pub fn eye_position(&self) -> Vec3 {
        self.location + self.rotation * Vec3::new(0.0, 0.0, self.distance)
    }

    /// Returns the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.eye_position()).inverse()
    }

    /// Turntable orbit: `yaw` around world Z, `pitch` around the view's X axis.
    pub fn orbit(&mut self, yaw: f32, pitch: f32) {
        self.rotation =
            (Quat::from_rotation_z(yaw) * self.rotation * Quat::from_rotation_x(pitch)).normalize();
    }

    /// Moves the pivot by `delta` given in view space.
    pub fn pan(&mut self, delta: Vec3) {
        self.location += self.rotation * delta;
    }

    /// Multiplies the orbit distance by `factor`.
    pub fn zoom(&mut self, factor: f32) {
        self.distance = (self.distance * factor).max(Self::MIN_DISTANCE);
    }

    /// Snapshot of the current view.
    #[must_use]
    pub fn sample(&self) -> ViewSample {
        ViewSample::new(self.rotation, self.location, self.distance)
    }

    /// Moves the camera to a recorded view.
    pub fn apply(&mut self, view: &ViewSample) {
        self.rotation = view.rotation;
        self.location = view.location;
        self.distance = view.distance;
    }
}
