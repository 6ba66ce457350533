use crate::foundation::core::{DVec3, Size};

/// Axis-aligned bounding box in host world units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl BoundingBox {
    /// Bounding box from two corners.
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Per-axis extent (`max - min`).
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Midpoint of the box.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }
}

/// What the host loader reports about a subject before fitting.
///
/// Decoding images and importing meshes happens outside this crate; only the resulting
/// dimensions are handed in.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubjectProbe {
    /// A still image, in pixels.
    Image {
        /// Pixel width and height.
        pixels: Size,
    },
    /// An imported mesh (all objects combined), in world units.
    Mesh {
        /// World-space bounds of every vertex.
        bounds: BoundingBox,
    },
}

impl SubjectProbe {
    /// Probe for an image of `width` x `height` pixels.
    pub fn image(width: f64, height: f64) -> Self {
        Self::Image {
            pixels: Size::new(width, height),
        }
    }

    /// Probe for a mesh with the given bounding corners.
    pub fn mesh(min: DVec3, max: DVec3) -> Self {
        Self::Mesh {
            bounds: BoundingBox::new(min, max),
        }
    }

    /// Kind of subject this probe describes.
    pub fn kind(&self) -> SubjectKind {
        match self {
            Self::Image { .. } => SubjectKind::Image,
            Self::Mesh { .. } => SubjectKind::Mesh,
        }
    }
}

/// Flat image plane or 3-D mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectKind {
    /// Image plane (depth 0), animated with a top-to-bottom scroll.
    Image,
    /// Mesh, animated with a turntable.
    Mesh,
}
