use crate::core::charges::{
    distinct_movie_ticket_types, movie_ticket_type_charges, sound_format_charges,
    video_format_charges,
};
use crate::core::factory::{
    build_offer, movie_ticket_label, movie_ticket_offer_id, movie_ticket_unit_price,
    ticket_type_unit_price,
};
use crate::domain::model::{EventType, Offer, PriceSpecification, PriceSpecificationType};
use crate::domain::ports::{
    EventRepository, PriceSpecificationRepository, SearchCompoundPriceSpecificationsConditions,
    TicketTypeRepository, VoucherCatalog,
};
use crate::utils::error::{OfferError, Result};

/// Assembles the ticket offers of a screening event from the catalog and the
/// stored price specifications. Read-only: nothing is written back.
pub struct OfferComposer<E, T, P, V>
where
    E: EventRepository,
    T: TicketTypeRepository,
    P: PriceSpecificationRepository,
    V: VoucherCatalog,
{
    events: E,
    ticket_types: T,
    price_specifications: P,
    vouchers: V,
}

impl<E, T, P, V> OfferComposer<E, T, P, V>
where
    E: EventRepository,
    T: TicketTypeRepository,
    P: PriceSpecificationRepository,
    V: VoucherCatalog,
{
    pub fn new(events: E, ticket_types: T, price_specifications: P, vouchers: V) -> Self {
        Self {
            events,
            ticket_types,
            price_specifications,
            vouchers,
        }
    }

    /// Ticket type offers in catalog order, followed by one movie ticket
    /// offer per distinct movie ticket type that applies to the event.
    #[tracing::instrument(skip(self))]
    pub async fn compose_offers(&self, event_id: &str) -> Result<Vec<Offer>> {
        let sound_conditions = SearchCompoundPriceSpecificationsConditions::containing(
            PriceSpecificationType::SoundFormatChargeSpecification,
        );
        let video_conditions = SearchCompoundPriceSpecificationsConditions::containing(
            PriceSpecificationType::VideoFormatChargeSpecification,
        );
        let movie_ticket_conditions = SearchCompoundPriceSpecificationsConditions::containing(
            PriceSpecificationType::MovieTicketTypeChargeSpecification,
        );

        // Ticket types depend on the event's group; the price specification
        // searches run alongside that chain.
        let event_and_ticket_types = async {
            let event = self
                .events
                .find_by_id(EventType::ScreeningEvent, event_id)
                .await?;
            let ticket_types = self
                .ticket_types
                .find_by_ticket_group_id(event.ticket_type_group.as_deref())
                .await?;
            Ok::<_, OfferError>((event, ticket_types))
        };

        let ((event, ticket_types), sound_compounds, video_compounds, movie_ticket_compounds) = tokio::try_join!(
            event_and_ticket_types,
            self.price_specifications
                .search_compound_price_specifications(&sound_conditions),
            self.price_specifications
                .search_compound_price_specifications(&video_conditions),
            self.price_specifications
                .search_compound_price_specifications(&movie_ticket_conditions),
        )?;

        let event_sound_formats = event.sound_format_types();
        let event_video_formats = event.video_format_types();
        tracing::debug!(
            "Event formats - sound: {:?}, video: {:?}, ticket types: {}",
            event_sound_formats,
            event_video_formats,
            ticket_types.len()
        );

        let sound_charges = sound_format_charges(&sound_compounds, &event_sound_formats);
        let video_charges = video_format_charges(&video_compounds, &event_video_formats);
        let movie_ticket_charges =
            movie_ticket_type_charges(&movie_ticket_compounds, &event_video_formats);
        tracing::debug!(
            "Applicable charges - sound: {}, video: {}, movie ticket: {}",
            sound_charges.len(),
            video_charges.len(),
            movie_ticket_charges.len()
        );

        let format_charges: Vec<PriceSpecification> = video_charges
            .into_iter()
            .map(PriceSpecification::VideoFormatChargeSpecification)
            .chain(
                sound_charges
                    .into_iter()
                    .map(PriceSpecification::SoundFormatChargeSpecification),
            )
            .collect();

        let mut offers: Vec<Offer> = ticket_types
            .iter()
            .map(|ticket_type| {
                build_offer(
                    ticket_type.id.clone(),
                    ticket_type.name.clone(),
                    ticket_type.description.clone(),
                    ticket_type_unit_price(ticket_type),
                    format_charges.iter().cloned(),
                )
            })
            .collect();

        let movie_ticket_offers = distinct_movie_ticket_types(&movie_ticket_charges)
            .into_iter()
            .map(|movie_ticket_type| {
                let display_name = self.vouchers.display_name(&movie_ticket_type);
                if display_name.is_none() {
                    tracing::warn!("No display name for movie ticket type {}", movie_ticket_type);
                }
                let label = movie_ticket_label(display_name.as_deref());
                let charges = movie_ticket_charges
                    .iter()
                    .filter(|c| c.applies_to_movie_ticket_type == movie_ticket_type)
                    .cloned()
                    .map(PriceSpecification::MovieTicketTypeChargeSpecification);

                build_offer(
                    movie_ticket_offer_id(&movie_ticket_type),
                    label.clone(),
                    label.clone(),
                    movie_ticket_unit_price(&label),
                    charges,
                )
            });
        offers.extend(movie_ticket_offers);

        tracing::info!(
            "Composed {} offers ({} ticket types) for event {}",
            offers.len(),
            ticket_types.len(),
            event.id
        );

        Ok(offers)
    }
}
