#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
/// One product row extracted from a listing page.
///
/// Every field is optional: a marker the page does not carry becomes
/// an explicit absent value, serialized as `null` rather than a
/// dropped key. `Stars` and the two counts are page-level and repeat
/// on every row of the page they were read from.
pub struct ProductRecord {
    /// Product name as shown in the listing.
    #[cfg_attr(feature = "serde", serde(rename = "PhoneName"))]
    pub phone_name: Option<String>,
    /// Listed price, currency symbol included.
    #[cfg_attr(feature = "serde", serde(rename = "Price"))]
    pub price: Option<String>,
    /// Memory and storage line of the spec list.
    #[cfg_attr(feature = "serde", serde(rename = "RAM_ROM"))]
    pub ram_rom: Option<String>,
    /// Display line of the spec list.
    #[cfg_attr(feature = "serde", serde(rename = "Display"))]
    pub display: Option<String>,
    /// Battery line of the spec list.
    #[cfg_attr(feature = "serde", serde(rename = "Battery"))]
    pub battery: Option<String>,
    /// Processor line of the spec list.
    #[cfg_attr(feature = "serde", serde(rename = "Processor"))]
    pub processor: Option<String>,
    /// Star rating shown on the page.
    #[cfg_attr(feature = "serde", serde(rename = "Stars"))]
    pub stars: Option<String>,
    /// Ratings count from the page summary.
    #[cfg_attr(feature = "serde", serde(rename = "Ratings Count"))]
    pub ratings_count: Option<String>,
    /// Reviews count from the page summary.
    #[cfg_attr(feature = "serde", serde(rename = "Reviews Count"))]
    pub reviews_count: Option<String>,
}

impl ProductRecord {
    /// Field values in export column order.
    pub fn fields(&self) -> [Option<&str>; 9] {
        [
            self.phone_name.as_deref(),
            self.price.as_deref(),
            self.ram_rom.as_deref(),
            self.display.as_deref(),
            self.battery.as_deref(),
            self.processor.as_deref(),
            self.stars.as_deref(),
            self.ratings_count.as_deref(),
            self.reviews_count.as_deref(),
        ]
    }
}
