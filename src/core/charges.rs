use crate::domain::model::{
    CompoundPriceSpecification, MovieTicketTypeChargeSpecification, PriceSpecification,
    SoundFormatChargeSpecification, VideoFormatChargeSpecification,
};
use std::collections::HashSet;

fn flatten(compounds: &[CompoundPriceSpecification]) -> impl Iterator<Item = &PriceSpecification> {
    compounds.iter().flat_map(|c| c.price_component.iter())
}

/// Sound format charges from all compounds whose target format is screened.
pub fn sound_format_charges(
    compounds: &[CompoundPriceSpecification],
    sound_formats: &[String],
) -> Vec<SoundFormatChargeSpecification> {
    flatten(compounds)
        .filter_map(|spec| match spec {
            PriceSpecification::SoundFormatChargeSpecification(s) => Some(s),
            _ => None,
        })
        .filter(|s| sound_formats.contains(&s.applies_to_sound_format))
        .cloned()
        .collect()
}

pub fn video_format_charges(
    compounds: &[CompoundPriceSpecification],
    video_formats: &[String],
) -> Vec<VideoFormatChargeSpecification> {
    flatten(compounds)
        .filter_map(|spec| match spec {
            PriceSpecification::VideoFormatChargeSpecification(s) => Some(s),
            _ => None,
        })
        .filter(|s| video_formats.contains(&s.applies_to_video_format))
        .cloned()
        .collect()
}

/// Movie ticket charges are matched on the screening's video format only.
pub fn movie_ticket_type_charges(
    compounds: &[CompoundPriceSpecification],
    video_formats: &[String],
) -> Vec<MovieTicketTypeChargeSpecification> {
    flatten(compounds)
        .filter_map(|spec| match spec {
            PriceSpecification::MovieTicketTypeChargeSpecification(s) => Some(s),
            _ => None,
        })
        .filter(|s| video_formats.contains(&s.applies_to_video_format))
        .cloned()
        .collect()
}

/// Distinct movie ticket type codes in first-occurrence order.
pub fn distinct_movie_ticket_types(charges: &[MovieTicketTypeChargeSpecification]) -> Vec<String> {
    let mut seen = HashSet::new();
    charges
        .iter()
        .filter(|c| seen.insert(c.applies_to_movie_ticket_type.as_str()))
        .map(|c| c.applies_to_movie_ticket_type.clone())
        .collect()
}
