//! Delivery request input type.

use courier_core::GeoCoord;

/// One requested delivery: an item to drop off at a street coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryRequest {
    pub location: GeoCoord,
    pub item: String,
}

impl DeliveryRequest {
    pub fn new(location: GeoCoord, item: impl Into<String>) -> Self {
        Self {
            location,
            item: item.into(),
        }
    }
}
