use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Video format assumed for events that do not list any.
pub const DEFAULT_VIDEO_FORMAT: &str = "2D";

pub const MOVIE_TICKET_OFFER_ID_PREFIX: &str = "Offer-by-movieticket-";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultilingualString {
    #[serde(default)]
    pub ja: String,
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub kr: String,
}

impl MultilingualString {
    pub fn new(ja: impl Into<String>, en: impl Into<String>, kr: impl Into<String>) -> Self {
        Self {
            ja: ja.into(),
            en: en.into(),
            kr: kr.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceCurrency {
    #[default]
    JPY,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemAvailability {
    #[default]
    InStock,
}

/// UN/CEFACT unit codes. C62 is "one" (a unit count).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitCode {
    #[default]
    C62,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    ScreeningEvent,
    ScreeningEventSeries,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventType::ScreeningEvent => write!(f, "ScreeningEvent"),
            EventType::ScreeningEventSeries => write!(f, "ScreeningEventSeries"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OfferType {
    #[default]
    Offer,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantitativeValueType {
    #[default]
    QuantitativeValue,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompoundPriceSpecificationType {
    #[default]
    CompoundPriceSpecification,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatDescriptor {
    pub type_of: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl FormatDescriptor {
    pub fn new(type_of: impl Into<String>) -> Self {
        Self {
            type_of: type_of.into(),
            name: None,
        }
    }
}

/// The series a screening belongs to. Formats are denormalized here and are
/// the ones consulted when matching charges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<MultilingualString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound_format: Option<Vec<FormatDescriptor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_format: Option<Vec<FormatDescriptor>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub type_of: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<MultilingualString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub door_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub super_event: SuperEvent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound_format: Option<Vec<FormatDescriptor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_format: Option<Vec<FormatDescriptor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_type_group: Option<String>,
}

impl Event {
    /// Sound format codes of the super event, empty when none are listed.
    pub fn sound_format_types(&self) -> Vec<String> {
        self.super_event
            .sound_format
            .iter()
            .flatten()
            .map(|f| f.type_of.clone())
            .collect()
    }

    /// Video format codes of the super event. Falls back to `["2D"]` when
    /// the list is missing or empty.
    pub fn video_format_types(&self) -> Vec<String> {
        match &self.super_event.video_format {
            Some(formats) if !formats.is_empty() => {
                formats.iter().map(|f| f.type_of.clone()).collect()
            }
            _ => vec![DEFAULT_VIDEO_FORMAT.to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketType {
    pub id: String,
    #[serde(default)]
    pub name: MultilingualString,
    #[serde(default)]
    pub description: MultilingualString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_name: Option<MultilingualString>,
    pub price: u64,
    #[serde(default)]
    pub price_currency: PriceCurrency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<ItemAvailability>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketTypeGroup {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<MultilingualString>,
    #[serde(default)]
    pub ticket_types: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceSpecificationType {
    UnitPriceSpecification,
    SoundFormatChargeSpecification,
    VideoFormatChargeSpecification,
    MovieTicketTypeChargeSpecification,
    CompoundPriceSpecification,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantitativeValue {
    #[serde(default)]
    pub type_of: QuantitativeValueType,
    pub unit_code: UnitCode,
    pub value: u32,
}

impl QuantitativeValue {
    pub fn one() -> Self {
        Self {
            type_of: QuantitativeValueType::QuantitativeValue,
            unit_code: UnitCode::C62,
            value: 1,
        }
    }
}

fn tax_included() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitPriceSpecification {
    pub price: u64,
    #[serde(default)]
    pub price_currency: PriceCurrency,
    #[serde(default)]
    pub name: MultilingualString,
    #[serde(default)]
    pub description: MultilingualString,
    #[serde(default = "tax_included")]
    pub value_added_tax_included: bool,
    pub reference_quantity: QuantitativeValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundFormatChargeSpecification {
    pub price: u64,
    #[serde(default)]
    pub price_currency: PriceCurrency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<MultilingualString>,
    #[serde(default = "tax_included")]
    pub value_added_tax_included: bool,
    pub applies_to_sound_format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoFormatChargeSpecification {
    pub price: u64,
    #[serde(default)]
    pub price_currency: PriceCurrency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<MultilingualString>,
    #[serde(default = "tax_included")]
    pub value_added_tax_included: bool,
    pub applies_to_video_format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieTicketTypeChargeSpecification {
    pub price: u64,
    #[serde(default)]
    pub price_currency: PriceCurrency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<MultilingualString>,
    #[serde(default = "tax_included")]
    pub value_added_tax_included: bool,
    pub applies_to_movie_ticket_type: String,
    pub applies_to_video_format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundPriceSpecification {
    #[serde(default)]
    pub type_of: CompoundPriceSpecificationType,
    #[serde(default)]
    pub price_currency: PriceCurrency,
    #[serde(default = "tax_included")]
    pub value_added_tax_included: bool,
    #[serde(default)]
    pub price_component: Vec<PriceSpecification>,
}

impl CompoundPriceSpecification {
    pub fn contains_component(&self, type_of: PriceSpecificationType) -> bool {
        self.price_component.iter().any(|c| c.type_of() == type_of)
    }

    pub fn new(value_added_tax_included: bool, price_component: Vec<PriceSpecification>) -> Self {
        Self {
            type_of: CompoundPriceSpecificationType::CompoundPriceSpecification,
            price_currency: PriceCurrency::JPY,
            value_added_tax_included,
            price_component,
        }
    }

    /// Sum of all components' prices, saturating at `u64::MAX`.
    pub fn total_price(&self) -> u64 {
        self.price_component
            .iter()
            .fold(0u64, |total, c| total.saturating_add(c.price()))
    }
}

/// A compound nested in `priceComponent` gets its `typeOf` from the enum tag.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NestedCompoundPriceSpecification<'a> {
    price_currency: PriceCurrency,
    value_added_tax_included: bool,
    price_component: &'a [PriceSpecification],
}

fn serialize_nested_compound<S>(
    compound: &CompoundPriceSpecification,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    NestedCompoundPriceSpecification {
        price_currency: compound.price_currency,
        value_added_tax_included: compound.value_added_tax_included,
        price_component: &compound.price_component,
    }
    .serialize(serializer)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "typeOf")]
pub enum PriceSpecification {
    UnitPriceSpecification(UnitPriceSpecification),
    SoundFormatChargeSpecification(SoundFormatChargeSpecification),
    VideoFormatChargeSpecification(VideoFormatChargeSpecification),
    MovieTicketTypeChargeSpecification(MovieTicketTypeChargeSpecification),
    #[serde(serialize_with = "serialize_nested_compound")]
    CompoundPriceSpecification(CompoundPriceSpecification),
}

impl PriceSpecification {
    pub fn type_of(&self) -> PriceSpecificationType {
        match self {
            Self::UnitPriceSpecification(_) => PriceSpecificationType::UnitPriceSpecification,
            Self::SoundFormatChargeSpecification(_) => {
                PriceSpecificationType::SoundFormatChargeSpecification
            }
            Self::VideoFormatChargeSpecification(_) => {
                PriceSpecificationType::VideoFormatChargeSpecification
            }
            Self::MovieTicketTypeChargeSpecification(_) => {
                PriceSpecificationType::MovieTicketTypeChargeSpecification
            }
            Self::CompoundPriceSpecification(_) => PriceSpecificationType::CompoundPriceSpecification,
        }
    }

    pub fn price(&self) -> u64 {
        match self {
            Self::UnitPriceSpecification(s) => s.price,
            Self::SoundFormatChargeSpecification(s) => s.price,
            Self::VideoFormatChargeSpecification(s) => s.price,
            Self::MovieTicketTypeChargeSpecification(s) => s.price,
            Self::CompoundPriceSpecification(s) => s.total_price(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub type_of: OfferType,
    pub id: String,
    pub name: MultilingualString,
    pub description: MultilingualString,
    pub price_currency: PriceCurrency,
    pub value_added_tax_included: bool,
    pub price_specification: CompoundPriceSpecification,
    pub availability: ItemAvailability,
}

impl Offer {
    pub fn total_price(&self) -> u64 {
        self.price_specification.total_price()
    }

    pub fn is_movie_ticket_offer(&self) -> bool {
        self.id.starts_with(MOVIE_TICKET_OFFER_ID_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event_with_formats(sound: Option<Vec<&str>>, video: Option<Vec<&str>>) -> Event {
        Event {
            id: "ev-1".to_string(),
            type_of: EventType::ScreeningEvent,
            name: None,
            door_time: None,
            start_date: None,
            end_date: None,
            super_event: SuperEvent {
                sound_format: sound
                    .map(|codes| codes.into_iter().map(FormatDescriptor::new).collect()),
                video_format: video
                    .map(|codes| codes.into_iter().map(FormatDescriptor::new).collect()),
                ..Default::default()
            },
            sound_format: None,
            video_format: None,
            ticket_type_group: None,
        }
    }

    #[test]
    fn test_video_formats_default_to_2d() {
        assert_eq!(event_with_formats(None, None).video_format_types(), vec!["2D"]);
        assert_eq!(
            event_with_formats(None, Some(vec![])).video_format_types(),
            vec!["2D"]
        );
        assert_eq!(
            event_with_formats(None, Some(vec!["IMAX", "3D"])).video_format_types(),
            vec!["IMAX", "3D"]
        );
    }

    #[test]
    fn test_sound_formats_default_to_empty() {
        assert!(event_with_formats(None, None).sound_format_types().is_empty());
        assert!(event_with_formats(Some(vec![]), None)
            .sound_format_types()
            .is_empty());
        assert_eq!(
            event_with_formats(Some(vec!["4DX", "DolbyAtmos"]), None).sound_format_types(),
            vec!["4DX", "DolbyAtmos"]
        );
    }

    #[test]
    fn test_price_specification_is_tagged_by_type_of() {
        let spec: PriceSpecification = serde_json::from_value(json!({
            "typeOf": "VideoFormatChargeSpecification",
            "price": 500,
            "priceCurrency": "JPY",
            "appliesToVideoFormat": "IMAX"
        }))
        .unwrap();

        assert_eq!(spec.type_of(), PriceSpecificationType::VideoFormatChargeSpecification);
        assert_eq!(spec.price(), 500);
        match spec {
            PriceSpecification::VideoFormatChargeSpecification(s) => {
                assert_eq!(s.applies_to_video_format, "IMAX");
                assert!(s.value_added_tax_included);
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_nested_compound_specification() {
        let compound: CompoundPriceSpecification = serde_json::from_value(json!({
            "priceCurrency": "JPY",
            "valueAddedTaxIncluded": true,
            "priceComponent": [
                {
                    "typeOf": "SoundFormatChargeSpecification",
                    "price": 300,
                    "appliesToSoundFormat": "4DX"
                },
                {
                    "typeOf": "MovieTicketTypeChargeSpecification",
                    "price": 400,
                    "appliesToMovieTicketType": "01",
                    "appliesToVideoFormat": "3D"
                }
            ]
        }))
        .unwrap();

        assert!(compound.contains_component(PriceSpecificationType::SoundFormatChargeSpecification));
        assert!(!compound.contains_component(PriceSpecificationType::VideoFormatChargeSpecification));
        assert_eq!(compound.total_price(), 700);
    }

    #[test]
    fn test_compound_carries_type_of_at_top_level() {
        let compound = CompoundPriceSpecification::new(true, vec![]);
        let value = serde_json::to_value(&compound).unwrap();
        assert_eq!(value["typeOf"], "CompoundPriceSpecification");

        let stored: CompoundPriceSpecification = serde_json::from_value(json!({
            "typeOf": "CompoundPriceSpecification",
            "priceComponent": []
        }))
        .unwrap();
        assert_eq!(stored, compound);

        let wrong = serde_json::from_value::<CompoundPriceSpecification>(json!({
            "typeOf": "UnitPriceSpecification"
        }));
        assert!(wrong.is_err());
    }

    #[test]
    fn test_nested_compound_writes_type_of_once() {
        let inner = CompoundPriceSpecification::new(
            true,
            vec![PriceSpecification::VideoFormatChargeSpecification(
                VideoFormatChargeSpecification {
                    price: 500,
                    price_currency: PriceCurrency::JPY,
                    name: None,
                    value_added_tax_included: true,
                    applies_to_video_format: "IMAX".to_string(),
                },
            )],
        );
        let outer = CompoundPriceSpecification::new(
            true,
            vec![PriceSpecification::CompoundPriceSpecification(inner)],
        );

        let text = serde_json::to_string(&outer).unwrap();
        assert_eq!(text.matches(r#""typeOf":"CompoundPriceSpecification""#).count(), 2);
        assert!(!text.contains(r#""typeOf":"CompoundPriceSpecification","typeOf""#));

        let parsed: CompoundPriceSpecification = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, outer);
        assert_eq!(parsed.total_price(), 500);
    }

    #[test]
    fn test_total_price_saturates() {
        let unit = |price| {
            PriceSpecification::UnitPriceSpecification(UnitPriceSpecification {
                price,
                price_currency: PriceCurrency::JPY,
                name: MultilingualString::default(),
                description: MultilingualString::default(),
                value_added_tax_included: true,
                reference_quantity: QuantitativeValue::one(),
            })
        };
        let compound = CompoundPriceSpecification::new(true, vec![unit(u64::MAX), unit(1800)]);

        assert_eq!(compound.total_price(), u64::MAX);
    }

    #[test]
    fn test_event_deserializes_camel_case() {
        let event: Event = serde_json::from_value(json!({
            "id": "ev-1",
            "typeOf": "ScreeningEvent",
            "startDate": "2026-10-17T10:00:00Z",
            "superEvent": {
                "videoFormat": [{ "typeOf": "IMAX", "name": "IMAX" }]
            },
            "ticketTypeGroup": "group-1"
        }))
        .unwrap();

        assert_eq!(event.ticket_type_group.as_deref(), Some("group-1"));
        assert_eq!(event.video_format_types(), vec!["IMAX"]);
        assert!(event.start_date.is_some());
    }
}
