use anyhow::Result;
use std::path::PathBuf;

use crate::config::ViewerConfig;
use crate::loaders::load_stl_file;
use crate::math::facet_color;
use crate::scenes::room::{fallback_room, Quad};
use crate::types::{ColoredVertex, Triangle};

/// What the viewer was asked to show, resolved once before the loop starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    Mesh(PathBuf),
    FallbackRoom,
}

/// Precomputed flat-shaded vertex list for a loaded mesh
#[derive(Debug, Clone)]
pub struct MeshGeometry {
    vertices: Vec<ColoredVertex>,
}

impl MeshGeometry {
    /// Color every facet by its normal and scale positions for display
    pub fn from_triangles(triangles: &[Triangle], scale: f32) -> Self {
        let vertices = triangles
            .iter()
            .flat_map(|triangle| {
                let color = facet_color(triangle);
                triangle
                    .vertices
                    .map(|v| ColoredVertex::new((v * scale).to_array(), color))
            })
            .collect();
        Self { vertices }
    }

    pub fn vertices(&self) -> &[ColoredVertex] {
        &self.vertices
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

/// The single thing drawn every frame for the lifetime of the process
#[derive(Debug, Clone)]
pub enum Renderable {
    Mesh(MeshGeometry),
    FallbackRoom { size: f32 },
}

impl Renderable {
    /// Build the renderable for a resolved source
    ///
    /// Unreadable or malformed model files are returned as errors.
    pub fn load(source: &ModelSource, config: &ViewerConfig) -> Result<Self> {
        match source {
            ModelSource::Mesh(path) => {
                let mesh = load_stl_file(path)?;
                if mesh.triangles.is_empty() {
                    log::warn!("STL file {:?} contains no triangles", path);
                }
                Ok(Renderable::Mesh(MeshGeometry::from_triangles(
                    &mesh.triangles,
                    config.model_scale,
                )))
            }
            ModelSource::FallbackRoom => Ok(Renderable::FallbackRoom {
                size: config.room_size,
            }),
        }
    }

    /// Room faces, when this is the fallback room
    pub fn quads(&self) -> Option<[Quad; 6]> {
        match self {
            Renderable::Mesh(_) => None,
            Renderable::FallbackRoom { size } => Some(fallback_room(*size)),
        }
    }

    /// Triangle-list vertices uploaded once to the GPU
    pub fn vertices(&self) -> Vec<ColoredVertex> {
        match self {
            Renderable::Mesh(mesh) => mesh.vertices().to_vec(),
            Renderable::FallbackRoom { size } => fallback_room(*size)
                .iter()
                .flat_map(|quad| quad.vertices())
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Renderable::Mesh(_) => "STL mesh",
            Renderable::FallbackRoom { .. } => "Fallback room",
        }
    }
}
