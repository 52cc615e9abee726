use crate::shape::FeatureId;

/// The identity of one contact point, stable across frames.
///
/// A contact id packs the feature of each shape the point was generated
/// from into a single integer key. Two manifolds computed on consecutive
/// frames describe the same physical contact point exactly when their ids
/// compare equal, which is what [`point_states`](crate::query::point_states)
/// relies on to warm-start a solver.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ContactId(u64);

impl ContactId {
    /// The contact id of a point whose generating features are unknown.
    pub const UNKNOWN: Self = Self(0);

    const CODE_MASK: u32 = 0x3fff_ffff;
    const HEADER_MASK: u32 = !Self::CODE_MASK;
    const HEADER_VERTEX: u32 = 0b01 << 30;
    const HEADER_FACE: u32 = 0b11 << 30;

    /// Creates a contact id from the features of both shapes.
    pub fn new(feature1: FeatureId, feature2: FeatureId) -> Self {
        Self(((Self::pack(feature1) as u64) << 32) | Self::pack(feature2) as u64)
    }

    /// The feature of the first shape this contact point was generated from.
    pub fn feature1(self) -> FeatureId {
        Self::unpack((self.0 >> 32) as u32)
    }

    /// The feature of the second shape this contact point was generated from.
    pub fn feature2(self) -> FeatureId {
        Self::unpack(self.0 as u32)
    }

    /// This contact id with the roles of the two shapes exchanged.
    #[must_use]
    pub fn swapped(self) -> Self {
        Self(self.0.rotate_left(32))
    }

    fn pack(feature: FeatureId) -> u32 {
        match feature {
            FeatureId::Vertex(code) => {
                assert_eq!(code & Self::HEADER_MASK, 0);
                code | Self::HEADER_VERTEX
            }
            FeatureId::Face(code) => {
                assert_eq!(code & Self::HEADER_MASK, 0);
                code | Self::HEADER_FACE
            }
            FeatureId::Unknown => 0,
        }
    }

    fn unpack(packed: u32) -> FeatureId {
        let code = packed & Self::CODE_MASK;
        match packed & Self::HEADER_MASK {
            Self::HEADER_VERTEX => FeatureId::Vertex(code),
            Self::HEADER_FACE => FeatureId::Face(code),
            _ => FeatureId::Unknown,
        }
    }
}
