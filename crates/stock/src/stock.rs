//! The stock container.

use thiserror::Error;

use storestock_core::{HandleId, StockError, StockOperation, StockResult};
use storestock_products::{Product, ProductHandle};

use crate::summary::StockSummary;

/// Add was refused; the caller keeps the handle it offered.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct AddRejected {
    error: StockError,
    handle: Option<ProductHandle>,
}

impl AddRejected {
    fn new(error: StockError, handle: Option<ProductHandle>) -> Self {
        Self { error, handle }
    }

    pub fn error(&self) -> &StockError {
        &self.error
    }

    /// The handle that was offered (`None` when none was).
    pub fn into_handle(self) -> Option<ProductHandle> {
        self.handle
    }

    pub fn into_parts(self) -> (StockError, Option<ProductHandle>) {
        (self.error, self.handle)
    }
}

/// Owns an unordered collection of products.
///
/// - Every owned product is destroyed exactly once: on teardown, or when
///   replaced by `clone_from`.
/// - No two entries share a handle identity.
/// - Copies are deep: each product is cloned into a new handle.
///
/// Not synchronized; wrap it in a lock to share it between threads.
#[derive(Debug, Default)]
pub struct StoreStock {
    items: Vec<ProductHandle>,
}

impl StoreStock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of products currently owned.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the prices of all owned products (zero when empty).
    pub fn total_cost(&self) -> f64 {
        self.items.iter().map(ProductHandle::price).sum()
    }

    /// Sum of the storage volumes of all owned products (zero when empty).
    pub fn required_storage_volume(&self) -> f64 {
        self.items.iter().map(ProductHandle::storage_volume).sum()
    }

    pub fn summary(&self) -> StockSummary {
        StockSummary {
            size: self.size(),
            total_cost: self.total_cost(),
            required_storage_volume: self.required_storage_volume(),
        }
    }

    pub fn contains(&self, id: HandleId) -> bool {
        self.position(id).is_some()
    }

    /// Identity lookup.
    pub fn get(&self, id: HandleId) -> Option<&dyn Product> {
        self.position(id).map(|i| self.items[i].product())
    }

    /// Owned products with their handle identities. Order carries no meaning.
    pub fn iter(&self) -> impl Iterator<Item = (HandleId, &dyn Product)> + '_ {
        self.items.iter().map(|h| (h.handle_id(), h.product()))
    }

    pub fn ids(&self) -> impl Iterator<Item = HandleId> + '_ {
        self.items.iter().map(ProductHandle::handle_id)
    }

    /// Take ownership of `handle`.
    ///
    /// Fails without taking ownership when no handle is given or when this
    /// stock already owns a handle with the same identity. The rejected handle
    /// travels back inside the error.
    pub fn add(&mut self, handle: Option<ProductHandle>) -> Result<HandleId, AddRejected> {
        let Some(handle) = handle else {
            tracing::debug!("add rejected: no handle supplied");
            return Err(AddRejected::new(
                StockError::null_handle(StockOperation::Add),
                None,
            ));
        };

        let id = handle.handle_id();
        if self.contains(id) {
            tracing::debug!(handle_id = %id, "add rejected: handle already owned");
            return Err(AddRejected::new(StockError::duplicate(id), Some(handle)));
        }

        self.items.push(handle);
        tracing::trace!(handle_id = %id, size = self.items.len(), "product added");
        Ok(id)
    }

    /// Add every handle, handing back the ones that were refused.
    pub fn add_all<I>(&mut self, handles: I) -> Vec<AddRejected>
    where
        I: IntoIterator<Item = ProductHandle>,
    {
        handles
            .into_iter()
            .filter_map(|h| self.add(Some(h)).err())
            .collect()
    }

    /// Give up ownership of the product with identity `id` without destroying
    /// it. The caller becomes responsible for the returned handle.
    pub fn release(&mut self, id: Option<HandleId>) -> StockResult<ProductHandle> {
        let Some(id) = id else {
            tracing::debug!("release rejected: no handle supplied");
            return Err(StockError::null_handle(StockOperation::Release));
        };

        let Some(index) = self.position(id) else {
            tracing::debug!(handle_id = %id, "release rejected: handle not owned");
            return Err(StockError::unknown(id));
        };

        let handle = self.items.remove(index);
        tracing::trace!(handle_id = %id, size = self.items.len(), "product released");
        Ok(handle)
    }

    /// Release every owned product at once, leaving the stock empty.
    pub fn release_all(&mut self) -> Vec<ProductHandle> {
        let released = core::mem::take(&mut self.items);
        tracing::trace!(count = released.len(), "all products released");
        released
    }

    /// Become a deep copy of `other`.
    ///
    /// The clones are made before anything owned by `self` is dropped, so a
    /// panic inside `Product::clone_product` leaves `self` as it was.
    pub fn assign_from(&mut self, other: &Self) {
        let replacement = other.cloned_items();
        let previous = core::mem::replace(&mut self.items, replacement);
        tracing::trace!(
            dropped = previous.len(),
            size = self.items.len(),
            "stock reassigned"
        );
        drop(previous);
    }

    fn cloned_items(&self) -> Vec<ProductHandle> {
        self.items.iter().map(ProductHandle::duplicate).collect()
    }

    fn position(&self, id: HandleId) -> Option<usize> {
        self.items.iter().position(|h| h.handle_id() == id)
    }
}

impl Clone for StoreStock {
    fn clone(&self) -> Self {
        tracing::trace!(size = self.items.len(), "stock copied");
        Self {
            items: self.cloned_items(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_from(source);
    }
}

impl Drop for StoreStock {
    fn drop(&mut self) {
        tracing::trace!(size = self.items.len(), "stock dropped");
    }
}
