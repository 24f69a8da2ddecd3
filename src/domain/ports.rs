use crate::domain::model::{
    CompoundPriceSpecification, Event, EventType, PriceSpecificationType, TicketType,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Fails with `NotFound` when no event of `type_of` has this id.
    async fn find_by_id(&self, type_of: EventType, id: &str) -> Result<Event>;
}

#[async_trait]
pub trait TicketTypeRepository: Send + Sync {
    /// Members of the group in group order. Empty for an unknown or missing group.
    async fn find_by_ticket_group_id(&self, ticket_group_id: Option<&str>)
        -> Result<Vec<TicketType>>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceComponentCondition {
    pub type_of: PriceSpecificationType,
}

/// `{ typeOf: CompoundPriceSpecification, priceComponent: { typeOf: <kind> } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCompoundPriceSpecificationsConditions {
    pub type_of: PriceSpecificationType,
    pub price_component: PriceComponentCondition,
}

impl SearchCompoundPriceSpecificationsConditions {
    pub fn containing(component_type: PriceSpecificationType) -> Self {
        Self {
            type_of: PriceSpecificationType::CompoundPriceSpecification,
            price_component: PriceComponentCondition {
                type_of: component_type,
            },
        }
    }
}

#[async_trait]
pub trait PriceSpecificationRepository: Send + Sync {
    async fn search_compound_price_specifications(
        &self,
        conditions: &SearchCompoundPriceSpecificationsConditions,
    ) -> Result<Vec<CompoundPriceSpecification>>;
}

/// Static reference table of movie-ticket (voucher) type names.
pub trait VoucherCatalog: Send + Sync {
    fn display_name(&self, movie_ticket_type: &str) -> Option<String>;
}
