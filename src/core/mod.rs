pub mod charges;
pub mod composer;
pub mod factory;

pub use crate::domain::model::{CompoundPriceSpecification, Event, Offer, TicketType};
pub use crate::domain::ports::{
    EventRepository, PriceSpecificationRepository, Storage, TicketTypeRepository, VoucherCatalog,
};
pub use crate::utils::error::Result;
