use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Question dimension a recommendation tag belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Size,
    Energy,
    TravelDistance,
    PlaceType,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Size,
        Dimension::Energy,
        Dimension::TravelDistance,
        Dimension::PlaceType,
    ];

    /// Tags that belong to this dimension
    pub fn tags(self) -> impl Iterator<Item = Tag> {
        Tag::ALL.into_iter().filter(move |tag| tag.dimension() == self)
    }
}

/// Recommendation tag carried by wizard answers and places
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tag {
    SizeSmall,
    SizeMedium,
    SizeLarge,
    EnergyHigh,
    EnergyLow,
    DistNear,
    DistMid,
    DistFar,
    TypeNature,
    TypeCity,
    TypePrivate,
}

impl Tag {
    pub const ALL: [Tag; 11] = [
        Tag::SizeSmall,
        Tag::SizeMedium,
        Tag::SizeLarge,
        Tag::EnergyHigh,
        Tag::EnergyLow,
        Tag::DistNear,
        Tag::DistMid,
        Tag::DistFar,
        Tag::TypeNature,
        Tag::TypeCity,
        Tag::TypePrivate,
    ];

    #[inline]
    pub fn dimension(self) -> Dimension {
        match self {
            Tag::SizeSmall | Tag::SizeMedium | Tag::SizeLarge => Dimension::Size,
            Tag::EnergyHigh | Tag::EnergyLow => Dimension::Energy,
            Tag::DistNear | Tag::DistMid | Tag::DistFar => Dimension::TravelDistance,
            Tag::TypeNature | Tag::TypeCity | Tag::TypePrivate => Dimension::PlaceType,
        }
    }

    /// Stored/wire name, e.g. `SIZE_SMALL`
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::SizeSmall => "SIZE_SMALL",
            Tag::SizeMedium => "SIZE_MEDIUM",
            Tag::SizeLarge => "SIZE_LARGE",
            Tag::EnergyHigh => "ENERGY_HIGH",
            Tag::EnergyLow => "ENERGY_LOW",
            Tag::DistNear => "DIST_NEAR",
            Tag::DistMid => "DIST_MID",
            Tag::DistFar => "DIST_FAR",
            Tag::TypeNature => "TYPE_NATURE",
            Tag::TypeCity => "TYPE_CITY",
            Tag::TypePrivate => "TYPE_PRIVATE",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown recommendation tag: {0}")]
pub struct UnknownTag(pub String);

impl FromStr for Tag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}
