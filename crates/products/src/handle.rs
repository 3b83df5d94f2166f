//! Owning product handles.

use storestock_core::{Entity, HandleId};

use crate::product::Product;

/// Exclusive owner of one product value.
///
/// Whoever holds the handle is responsible for the product; dropping the
/// handle destroys it. Handles are moved, never copied: `duplicate` makes a
/// deep copy under a fresh identity.
#[derive(Debug)]
pub struct ProductHandle {
    id: HandleId,
    product: Box<dyn Product>,
}

impl ProductHandle {
    /// Take ownership of `product` under a freshly minted identity.
    pub fn new<P: Product + 'static>(product: P) -> Self {
        Self::from_box(Box::new(product))
    }

    pub fn from_box(product: Box<dyn Product>) -> Self {
        Self::from_parts(HandleId::new(), product)
    }

    /// Rebuild a handle with a known identity.
    ///
    /// This is the only way two live handles can share an identity, so a
    /// container receiving such a handle has to check for it.
    pub fn from_parts(id: HandleId, product: Box<dyn Product>) -> Self {
        Self { id, product }
    }

    pub fn handle_id(&self) -> HandleId {
        self.id
    }

    pub fn product(&self) -> &dyn Product {
        self.product.as_ref()
    }

    pub fn price(&self) -> f64 {
        self.product.price()
    }

    pub fn storage_volume(&self) -> f64 {
        self.product.storage_volume()
    }

    /// Deep copy under a new identity.
    pub fn duplicate(&self) -> Self {
        Self::from_box(self.product.clone_product())
    }

    pub fn into_inner(self) -> Box<dyn Product> {
        self.product
    }

    pub fn into_parts(self) -> (HandleId, Box<dyn Product>) {
        (self.id, self.product)
    }
}

impl Entity for ProductHandle {
    type Id = HandleId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
