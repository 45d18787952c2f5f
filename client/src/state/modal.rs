//! Product modal state: which dialog is open and the draft it edits.
//!
//! DESIGN
//! ======
//! One dialog serves create, edit and delete. Each mode is a variant that
//! carries exactly what it needs: create/edit own a `ProductDraft`, delete
//! only needs the product it will remove. Presentation per mode comes from
//! `ModalKind`. A closed modal presents as `Create`.
//!
//! The draft is a value copy of the list's product. Edits never reach the
//! product list; the list only changes after the backend round trip and
//! re-fetch that follow `ProductModal::confirm`.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::net::error::ApiError;
use crate::net::types::Product;

// =============================================================================
// DRAFT
// =============================================================================

/// Text-like product fields editable from the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Category,
    Unit,
    Description,
    Content,
    ImageUrl,
    OriginPrice,
    Price,
}

impl DraftField {
    /// Current form value of this field.
    pub fn read(self, product: &Product) -> String {
        match self {
            Self::Title => product.title.clone(),
            Self::Category => product.category.clone(),
            Self::Unit => product.unit.clone(),
            Self::Description => product.description.clone(),
            Self::Content => product.content.clone(),
            Self::ImageUrl => product.image_url.clone(),
            Self::OriginPrice => product.origin_price.to_string(),
            Self::Price => product.price.to_string(),
        }
    }

    pub fn input_id(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Category => "category",
            Self::Unit => "unit",
            Self::Description => "description",
            Self::Content => "content",
            Self::ImageUrl => "imageUrl",
            Self::OriginPrice => "origin_price",
            Self::Price => "price",
        }
    }
}

/// The modal's working copy of a product.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductDraft {
    product: Product,
}

impl ProductDraft {
    /// All-empty template used for creation.
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn from_product(product: &Product) -> Self {
        Self { product: product.clone() }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn images(&self) -> &[String] {
        &self.product.images_url
    }

    /// Apply raw form input to `field`. Price fields parse as numbers; empty
    /// or unparsable input becomes `0`.
    pub fn set_field(&mut self, field: DraftField, raw: &str) {
        let p = &mut self.product;
        match field {
            DraftField::Title => p.title = raw.to_owned(),
            DraftField::Category => p.category = raw.to_owned(),
            DraftField::Unit => p.unit = raw.to_owned(),
            DraftField::Description => p.description = raw.to_owned(),
            DraftField::Content => p.content = raw.to_owned(),
            DraftField::ImageUrl => p.image_url = raw.to_owned(),
            DraftField::OriginPrice => p.origin_price = parse_price(raw),
            DraftField::Price => p.price = parse_price(raw),
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.product.is_enabled = enabled;
    }

    /// Append an empty secondary-image slot.
    ///
    /// Returns `false` without changing anything when the last slot is
    /// already empty.
    pub fn append_image(&mut self) -> bool {
        if self.product.images_url.last().is_some_and(String::is_empty) {
            return false;
        }
        self.product.images_url.push(String::new());
        true
    }

    /// Replace the secondary image at `index`; out-of-range is ignored.
    pub fn set_image(&mut self, index: usize, url: &str) {
        if let Some(slot) = self.product.images_url.get_mut(index) {
            *slot = url.to_owned();
        }
    }

    /// Remove the secondary image at `index`, shifting later entries down.
    pub fn remove_image(&mut self, index: usize) {
        if index < self.product.images_url.len() {
            self.product.images_url.remove(index);
        }
    }

    /// Take the result of a primary-image upload. Failure keeps the current
    /// image and is logged.
    pub fn apply_upload(&mut self, result: Result<String, ApiError>) {
        match result {
            Ok(url) => self.product.image_url = url,
            Err(e) => log::error!("image upload failed: {e}"),
        }
    }

    /// Payload to send: the draft with every empty secondary image removed.
    pub fn finish(&self) -> Product {
        let mut product = self.product.clone();
        product.images_url.retain(|url| !url.is_empty());
        product
    }
}

fn parse_price(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

// =============================================================================
// MODAL
// =============================================================================

/// Presentation selector for the shared dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Create,
    Edit,
    Delete,
}

impl ModalKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Create => "New Product",
            Self::Edit => "Edit Product",
            Self::Delete => "Delete Product",
        }
    }

    /// Modifier class for the dialog header color.
    pub fn header_class(self) -> &'static str {
        match self {
            Self::Create | Self::Edit => "product-modal__header--dark",
            Self::Delete => "product-modal__header--danger",
        }
    }

    /// Modifier class for the dialog width.
    pub fn size_class(self) -> &'static str {
        match self {
            Self::Create | Self::Edit => "product-modal--wide",
            Self::Delete => "product-modal--narrow",
        }
    }

    pub fn confirm_label(self) -> &'static str {
        match self {
            Self::Create | Self::Edit => "Confirm",
            Self::Delete => "Delete",
        }
    }

    pub fn confirm_class(self) -> &'static str {
        match self {
            Self::Create | Self::Edit => "btn btn--primary",
            Self::Delete => "btn btn--danger",
        }
    }
}

/// Backend mutation produced by confirming the modal.
#[derive(Clone, Debug, PartialEq)]
pub enum ProductAction {
    Create(Product),
    Update { id: String, product: Product },
    Delete { id: String },
}

/// Open/closed state of the product dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ProductModal {
    #[default]
    Closed,
    Create(ProductDraft),
    Edit(ProductDraft),
    Delete(Product),
}

impl ProductModal {
    pub fn create() -> Self {
        Self::Create(ProductDraft::blank())
    }

    pub fn edit(product: &Product) -> Self {
        Self::Edit(ProductDraft::from_product(product))
    }

    pub fn delete(product: &Product) -> Self {
        Self::Delete(product.clone())
    }

    pub fn kind(&self) -> ModalKind {
        match self {
            Self::Closed | Self::Create(_) => ModalKind::Create,
            Self::Edit(_) => ModalKind::Edit,
            Self::Delete(_) => ModalKind::Delete,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn draft(&self) -> Option<&ProductDraft> {
        match self {
            Self::Create(draft) | Self::Edit(draft) => Some(draft),
            Self::Closed | Self::Delete(_) => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut ProductDraft> {
        match self {
            Self::Create(draft) | Self::Edit(draft) => Some(draft),
            Self::Closed | Self::Delete(_) => None,
        }
    }

    /// Product the dialog is about, draft or delete target.
    pub fn subject(&self) -> Option<&Product> {
        match self {
            Self::Create(draft) | Self::Edit(draft) => Some(draft.product()),
            Self::Delete(product) => Some(product),
            Self::Closed => None,
        }
    }

    /// Identity of the open draft (mode and product id), used to match an
    /// upload's result to the draft it was started from.
    pub fn draft_key(&self) -> Option<(ModalKind, String)> {
        self.draft().map(|draft| (self.kind(), draft.product().id.clone()))
    }

    /// Deliver an upload result started while `key` was the open draft.
    /// If the dialog has since closed or moved to another draft the result
    /// is dropped.
    pub fn apply_upload_to(&mut self, key: &(ModalKind, String), result: Result<String, ApiError>) {
        if self.draft_key().as_ref() != Some(key) {
            log::warn!("image upload discarded: dialog no longer shows {:?} {:?}", key.0, key.1);
            return;
        }
        if let Some(draft) = self.draft_mut() {
            draft.apply_upload(result);
        }
    }

    /// Discard any draft.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Close the dialog and return the mutation it stood for.
    pub fn confirm(&mut self) -> Option<ProductAction> {
        match std::mem::take(self) {
            Self::Closed => None,
            Self::Create(draft) => Some(ProductAction::Create(draft.finish())),
            Self::Edit(draft) => {
                let product = draft.finish();
                Some(ProductAction::Update { id: product.id.clone(), product })
            }
            Self::Delete(product) => Some(ProductAction::Delete { id: product.id }),
        }
    }
}
