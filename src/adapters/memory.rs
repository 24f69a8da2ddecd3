use crate::domain::model::{
    CompoundPriceSpecification, Event, EventType, PriceSpecificationType, TicketType,
    TicketTypeGroup,
};
use crate::domain::ports::{
    EventRepository, PriceSpecificationRepository, SearchCompoundPriceSpecificationsConditions,
    Storage, TicketTypeRepository,
};
use crate::utils::error::{OfferError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A snapshot of the catalog and price specification collections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDataset {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub ticket_types: Vec<TicketType>,
    #[serde(default)]
    pub ticket_type_groups: Vec<TicketTypeGroup>,
    #[serde(default)]
    pub price_specifications: Vec<CompoundPriceSpecification>,
}

/// Read-only repositories over a [`CatalogDataset`]. Cloning shares the data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    dataset: Arc<CatalogDataset>,
}

impl InMemoryCatalog {
    pub fn new(dataset: CatalogDataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }

    pub fn from_json_slice(data: &[u8]) -> Result<Self> {
        let dataset: CatalogDataset = serde_json::from_slice(data)?;
        Ok(Self::new(dataset))
    }

    pub async fn load<S: Storage>(storage: &S, path: &str) -> Result<Self> {
        tracing::debug!("Loading catalog from {}", path);
        let data = storage.read_file(path).await?;
        let catalog = Self::from_json_slice(&data)?;
        tracing::info!(
            "Loaded catalog: {} events, {} ticket types, {} groups, {} price specifications",
            catalog.dataset.events.len(),
            catalog.dataset.ticket_types.len(),
            catalog.dataset.ticket_type_groups.len(),
            catalog.dataset.price_specifications.len()
        );
        Ok(catalog)
    }
}

#[async_trait]
impl EventRepository for InMemoryCatalog {
    async fn find_by_id(&self, type_of: EventType, id: &str) -> Result<Event> {
        self.dataset
            .events
            .iter()
            .find(|e| e.id == id && e.type_of == type_of)
            .cloned()
            .ok_or_else(|| OfferError::not_found(type_of.to_string(), id))
    }
}

#[async_trait]
impl TicketTypeRepository for InMemoryCatalog {
    async fn find_by_ticket_group_id(
        &self,
        ticket_group_id: Option<&str>,
    ) -> Result<Vec<TicketType>> {
        let Some(group) = ticket_group_id
            .and_then(|id| self.dataset.ticket_type_groups.iter().find(|g| g.id == id))
        else {
            return Ok(Vec::new());
        };

        // Members missing from the ticket type collection are skipped.
        Ok(group
            .ticket_types
            .iter()
            .filter_map(|id| self.dataset.ticket_types.iter().find(|t| &t.id == id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl PriceSpecificationRepository for InMemoryCatalog {
    async fn search_compound_price_specifications(
        &self,
        conditions: &SearchCompoundPriceSpecificationsConditions,
    ) -> Result<Vec<CompoundPriceSpecification>> {
        if conditions.type_of != PriceSpecificationType::CompoundPriceSpecification {
            return Ok(Vec::new());
        }

        Ok(self
            .dataset
            .price_specifications
            .iter()
            .filter(|c| c.contains_component(conditions.price_component.type_of))
            .cloned()
            .collect())
    }
}
