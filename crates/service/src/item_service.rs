//! Item reads for the page surfaces.

use std::sync::Arc;

use serde::Serialize;

use portal_core::{ItemOrder, MAX_LISTING_ITEMS, PortalItem, Vertical};
use portal_render::{TileSpec, select_tiles};
use portal_storage::traits::{ItemStore as _, PortalStore, VerticalStore as _};

use crate::ServiceError;

/// Everything one item page needs: the item plus its selected tiles.
#[derive(Debug, Clone, Serialize)]
pub struct ItemPage {
    pub vertical: Vertical,
    pub item: PortalItem,
    pub tiles: Vec<TileSpec>,
}

pub struct ItemService {
    storage: Arc<dyn PortalStore>,
}

impl ItemService {
    #[must_use]
    pub fn new(storage: Arc<dyn PortalStore>) -> Self {
        Self { storage }
    }

    pub async fn list_verticals(&self) -> Result<Vec<Vertical>, ServiceError> {
        Ok(self.storage.list_verticals().await?)
    }

    async fn require_vertical(&self, slug: &str) -> Result<Vertical, ServiceError> {
        self.storage
            .get_vertical_by_slug(slug)
            .await?
            .ok_or_else(|| ServiceError::NotFound { entity: "vertical", id: slug.to_owned() })
    }

    /// One item page: the item under its vertical, with tiles selected from
    /// the vertical's capability list. Unknown vertical or slug both map to
    /// `NotFound`.
    pub async fn get_item_page(
        &self,
        vertical_slug: &str,
        slug: &str,
    ) -> Result<ItemPage, ServiceError> {
        let vertical = self.require_vertical(vertical_slug).await?;
        let item = self
            .storage
            .get_item_by_slug(Some(vertical_slug), slug)
            .await?
            .ok_or_else(|| ServiceError::NotFound { entity: "item", id: slug.to_owned() })?;
        let tiles = select_tiles(&item, &vertical.capabilities);
        Ok(ItemPage { vertical, item, tiles })
    }

    /// Items of one vertical. Zero items is a valid, displayable state;
    /// an unknown vertical is `NotFound`.
    pub async fn list_items(
        &self,
        vertical_slug: &str,
        limit: usize,
        order: ItemOrder,
    ) -> Result<Vec<PortalItem>, ServiceError> {
        self.require_vertical(vertical_slug).await?;
        let capped = limit.min(MAX_LISTING_ITEMS);
        Ok(self.storage.list_items(vertical_slug, capped, order).await?)
    }
}
