//! Normal generation algorithms.

pub mod bent;
pub mod default;
pub mod flat;
pub mod flip;
pub mod smooth;
pub mod traits;

pub use bent::BentNormals;
pub use default::DefaultNormals;
pub use flat::FlatNormals;
pub use flip::FlipNormals;
pub use smooth::{FaceWeighting, SmoothNormals};
pub use traits::NormalGenerator;

/// The available generators, for callers that pick one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Generator {
    /// Recalculated geometric normals
    Default,
    /// Bent away from the cursor
    Bent,
    /// Averaged incident face normals
    Smooth,
    /// Area-weighted incident face normals
    WeightedArea,
    /// Own face normal per corner (split mode only)
    Flat,
    /// Negated normals
    Flip,
}

impl Generator {
    pub const ALL: [Generator; 6] = [
        Generator::Default,
        Generator::Bent,
        Generator::Smooth,
        Generator::WeightedArea,
        Generator::Flat,
        Generator::Flip,
    ];

    pub fn as_generator(&self) -> &'static dyn NormalGenerator {
        match self {
            Generator::Default => &DefaultNormals,
            Generator::Bent => &BentNormals,
            Generator::Smooth => &SmoothNormals {
                weighting: FaceWeighting::Uniform,
            },
            Generator::WeightedArea => &SmoothNormals {
                weighting: FaceWeighting::Area,
            },
            Generator::Flat => &FlatNormals,
            Generator::Flip => &FlipNormals,
        }
    }
}
