use crate::domain::model::{
    CompoundPriceSpecification, ItemAvailability, MultilingualString, Offer, OfferType,
    PriceCurrency, PriceSpecification, QuantitativeValue, TicketType, UnitPriceSpecification,
    MOVIE_TICKET_OFFER_ID_PREFIX,
};

const MOVIE_TICKET_LABEL_JA: &str = "ムビチケ";
const MOVIE_TICKET_LABEL: &str = "Movie Ticket";

pub fn ticket_type_unit_price(ticket_type: &TicketType) -> UnitPriceSpecification {
    UnitPriceSpecification {
        price: ticket_type.price,
        price_currency: PriceCurrency::JPY,
        name: ticket_type.name.clone(),
        description: ticket_type.description.clone(),
        value_added_tax_included: true,
        reference_quantity: QuantitativeValue::one(),
    }
}

/// Label for a movie ticket offer. An unknown type still gets the generic label.
pub fn movie_ticket_label(display_name: Option<&str>) -> MultilingualString {
    MultilingualString::new(
        format!("{}{}", MOVIE_TICKET_LABEL_JA, display_name.unwrap_or("")),
        MOVIE_TICKET_LABEL,
        MOVIE_TICKET_LABEL,
    )
}

/// The voucher itself is prepaid, so the base price is zero.
pub fn movie_ticket_unit_price(label: &MultilingualString) -> UnitPriceSpecification {
    UnitPriceSpecification {
        price: 0,
        price_currency: PriceCurrency::JPY,
        name: label.clone(),
        description: label.clone(),
        value_added_tax_included: true,
        reference_quantity: QuantitativeValue::one(),
    }
}

pub fn movie_ticket_offer_id(movie_ticket_type: &str) -> String {
    format!("{}{}", MOVIE_TICKET_OFFER_ID_PREFIX, movie_ticket_type)
}

/// Builds an offer whose price is `[unit, ...charges]` as one compound.
pub fn build_offer(
    id: String,
    name: MultilingualString,
    description: MultilingualString,
    unit_price: UnitPriceSpecification,
    charges: impl IntoIterator<Item = PriceSpecification>,
) -> Offer {
    let mut price_component = vec![PriceSpecification::UnitPriceSpecification(unit_price)];
    price_component.extend(charges);

    Offer {
        type_of: OfferType::Offer,
        id,
        name,
        description,
        price_currency: PriceCurrency::JPY,
        value_added_tax_included: true,
        price_specification: CompoundPriceSpecification::new(true, price_component),
        availability: ItemAvailability::InStock,
    }
}
