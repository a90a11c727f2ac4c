//! Screen layout made of editor areas.
//!
//! A [`Screen`] stands in for the host window: a list of areas, some of which
//! are 3D viewports. View tracking always uses the first 3D viewport.

use review_core::{ViewSample, ViewportHost};

use crate::camera::ViewportCamera;

/// What an area shows.
#[derive(Debug, Clone)]
pub enum Area {
    /// A 3D viewport.
    View3D(ViewportCamera),
    /// Any other editor (outliner, properties, timeline, ...).
    Other(String),
}

/// The areas of a window, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct Screen {
    areas: Vec<Area>,
}

impl Screen {
    /// Creates a screen without areas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a screen with a single 3D viewport.
    pub fn with_viewport(camera: ViewportCamera) -> Self {
        Self {
            areas: vec![Area::View3D(camera)],
        }
    }

    /// Appends an area.
    pub fn push(&mut self, area: Area) -> &mut Self {
        self.areas.push(area);
        self
    }

    /// Removes every area.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Returns the areas.
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    /// The first 3D viewport's camera.
    pub fn viewport(&self) -> Option<&ViewportCamera> {
        self.areas.iter().find_map(|area| match area {
            Area::View3D(camera) => Some(camera),
            Area::Other(_) => None,
        })
    }

    /// Mutable access to the first 3D viewport's camera.
    pub fn viewport_mut(&mut self) -> Option<&mut ViewportCamera> {
        self.areas.iter_mut().find_map(|area| match area {
            Area::View3D(camera) => Some(camera),
            Area::Other(_) => None,
        })
    }
}

impl ViewportHost for Screen {
    fn read_view(&self) -> Option<ViewSample> {
        self.viewport().map(ViewportCamera::sample)
    }

    fn write_view(&mut self, view: &ViewSample) -> bool {
        match self.viewport_mut() {
            Some(camera) => {
                camera.apply(view);
                true
            }
            None => false,
        }
    }
}
