//! The in-memory catalog store.
//!
//! This module provides [`CatalogStore`], the owner of the session's
//! product collection.
//!
//! # Lifecycle
//!
//! 1. **Creation**: `CatalogStore::new()` wraps a [`StoreClient`] and an
//!    empty collection in the [`Idle`](LoadState::Idle) state.
//! 2. **Load**: `load()` fetches the product list (fatal on failure) and
//!    the category list (non-fatal; a failure logs and leaves it empty),
//!    then replaces the collection wholesale.
//! 3. **Mutation**: `create`/`edit`/`delete` operate on the in-memory
//!    collection only - nothing is written back to the store API - and
//!    each success emits a [`Notification`].
//! 4. **Reads**: `snapshot()` and `visible()` hand out owned copies, never
//!    a live view.
//!
//! # Id Allocation
//!
//! Locally created products need ids that cannot collide with server ids.
//! Wall-clock-derived ids cannot promise that, so the store keeps a
//! monotonic counter seeded strictly above the largest id observed at load
//! time: local ids are disjoint from the loaded id space and from each
//! other regardless of clock resolution.

use smallvec::SmallVec;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use sf_client::StoreClient;
use sf_core::hash::fx_hash_set_with_capacity;
use sf_core::{
    Notification, NotificationKind, Product, ProductDraft, ProductId, SearchState, StoreConfig,
    WILDCARD_CATEGORY,
};

use crate::error::CatalogError;
use crate::filter::ProductFilter;
use crate::state::LoadState;

/// The in-memory product collection and its mutation API.
///
/// All reads hand out owned data; all mutations take `&mut self` and apply
/// atomically with respect to the single logical thread driving the store.
///
/// # Examples
///
/// ```no_run
/// use sf_catalog::CatalogStore;
/// use sf_client::StoreClient;
/// use sf_core::{Config, ProductDraft};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config::default();
/// let client = StoreClient::new(&config.client)?;
/// let mut store = CatalogStore::new(client, &config.store);
///
/// store.load().await?;
///
/// let created = store.create(ProductDraft {
///     title: "Widget".to_owned(),
///     description: "A thoroughly adequate widget.".to_owned(),
///     price: 9.99,
///     category: "tools".to_owned(),
///     image: "https://img.example/widget.png".to_owned(),
/// });
///
/// store.delete(created.id)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CatalogStore {
    /// Client for the remote store API.
    client: StoreClient,

    /// The product collection, in display order.
    ///
    /// Load order from the API, with locally created products appended.
    products: Vec<Product>,

    /// Category names as fetched from the API, without the wildcard.
    ///
    /// Store catalogs carry a handful of categories, so these stay inline.
    categories: SmallVec<[String; 8]>,

    /// Where the initial load currently stands.
    state: LoadState,

    /// Next id for a locally created product.
    ///
    /// Strictly greater than every id currently in the collection.
    next_local_id: u64,

    /// Notification sender; emission never blocks a mutation.
    notification_tx: mpsc::Sender<Notification>,

    /// Notification receiver, held until the presentation layer takes it.
    notification_rx: Option<mpsc::Receiver<Notification>>,
}

impl CatalogStore {
    /// Creates an empty store in the [`Idle`](LoadState::Idle) state.
    #[must_use]
    pub fn new(client: StoreClient, config: &StoreConfig) -> Self {
        let (notification_tx, notification_rx) = mpsc::channel(config.notification_capacity);
        Self {
            client,
            products: Vec::new(),
            categories: SmallVec::new(),
            state: LoadState::default(),
            next_local_id: 1,
            notification_tx,
            notification_rx: Some(notification_rx),
        }
    }

    /// Loads the catalog from the store API, replacing the collection.
    ///
    /// The product fetch is decisive: on failure the store enters
    /// [`LoadState::Errored`] with a descriptive message and keeps no
    /// products. The category fetch is best-effort - a failure is logged
    /// and the category list stays empty, matching how little the rest of
    /// the engine depends on it.
    ///
    /// There is no automatic retry. Calling `load()` again on an errored
    /// store is the retry.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Load`] when the product fetch fails.
    pub async fn load(&mut self) -> Result<&[Product], CatalogError> {
        self.state = LoadState::Loading;
        info!(base_url = %self.client.base_url(), "Loading catalog");

        let products = match self.client.fetch_products().await {
            Ok(products) => products,
            Err(error) => {
                warn!(%error, "Catalog load failed");
                self.state = LoadState::Errored(error.to_string());
                return Err(CatalogError::Load(error));
            }
        };

        let categories = match self.client.fetch_categories().await {
            Ok(categories) => categories,
            Err(error) => {
                warn!(%error, "Failed to fetch categories, continuing without them");
                Vec::new()
            }
        };

        self.apply_loaded(products, categories);
        Ok(&self.products)
    }

    /// Installs a fetched payload as the new collection.
    ///
    /// Duplicate ids would break the uniqueness invariant, so later
    /// duplicates are skipped with a warning rather than trusted.
    fn apply_loaded(&mut self, products: Vec<Product>, categories: Vec<String>) {
        let mut seen = fx_hash_set_with_capacity(products.len());
        self.products.clear();
        for product in products {
            if !seen.insert(product.id) {
                warn!(id = %product.id, "Skipping product with duplicate id from store API");
                continue;
            }
            self.products.push(product);
        }

        self.next_local_id = self
            .products
            .iter()
            .map(|product| product.id.as_u64())
            .max()
            .unwrap_or(0)
            + 1;
        self.categories = SmallVec::from_vec(categories);
        self.state = LoadState::Ready;

        info!(
            products = self.products.len(),
            categories = self.categories.len(),
            "Catalog loaded"
        );
    }

    /// Creates a product from a validated draft and appends it.
    ///
    /// The store assigns an id guaranteed not to collide with any id it
    /// currently holds, emits a [`NotificationKind::Created`] notification,
    /// and returns the stored product.
    pub fn create(&mut self, draft: ProductDraft) -> Product {
        let id = self.allocate_id();
        let product = draft.into_product(id);
        self.products.push(product.clone());
        debug!(%id, title = %product.title, "Created product");
        self.notify(NotificationKind::Created, &product.title);
        product
    }

    /// Replaces the product with the given id using the draft's fields.
    ///
    /// The id is preserved; every other field comes from the draft. Emits a
    /// [`NotificationKind::Updated`] notification on success. Field
    /// validation is the caller's concern and happens before this call.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no product has this id; the
    /// collection is left untouched.
    pub fn edit(&mut self, id: ProductId, draft: ProductDraft) -> Result<Product, CatalogError> {
        let Some(slot) = self.products.iter_mut().find(|product| product.id == id) else {
            return Err(CatalogError::not_found(id));
        };
        *slot = draft.into_product(id);
        let product = slot.clone();
        debug!(%id, title = %product.title, "Edited product");
        self.notify(NotificationKind::Updated, &product.title);
        Ok(product)
    }

    /// Removes the product with the given id.
    ///
    /// Emits a [`NotificationKind::Deleted`] notification carrying the
    /// removed product's title, and returns the removed product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no product has this id; the
    /// collection is left untouched.
    pub fn delete(&mut self, id: ProductId) -> Result<Product, CatalogError> {
        let Some(index) = self.products.iter().position(|product| product.id == id) else {
            return Err(CatalogError::not_found(id));
        };
        let product = self.products.remove(index);
        debug!(%id, title = %product.title, "Deleted product");
        self.notify(NotificationKind::Deleted, &product.title);
        Ok(product)
    }

    /// Returns the product with the given id, if present.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Returns an owned copy of the whole collection, in display order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Product> {
        self.products.clone()
    }

    /// Derives the visible subset for a search state snapshot.
    ///
    /// Pure with respect to the current collection: no side effects, and
    /// the result preserves display order.
    #[must_use]
    pub fn visible(&self, search: &SearchState) -> Vec<Product> {
        let filter = ProductFilter::from_state(search);
        self.products
            .iter()
            .filter(|product| filter.matches(product))
            .cloned()
            .collect()
    }

    /// Returns where the initial load currently stands.
    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Returns the category names fetched from the store API.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Returns the category selector feed: the wildcard first, then the
    /// fetched categories in API order.
    #[must_use]
    pub fn selector_categories(&self) -> Vec<String> {
        let mut feed = Vec::with_capacity(self.categories.len() + 1);
        feed.push(WILDCARD_CATEGORY.to_owned());
        feed.extend(self.categories.iter().cloned());
        feed
    }

    /// Returns the number of products in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` if the collection holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Takes the notification receiver.
    ///
    /// The presentation layer calls this once and listens for mutation
    /// alerts; subsequent calls return `None`.
    pub fn take_notifications(&mut self) -> Option<mpsc::Receiver<Notification>> {
        self.notification_rx.take()
    }

    /// Allocates an id for a locally created product.
    fn allocate_id(&mut self) -> ProductId {
        let id = ProductId::new(self.next_local_id);
        self.next_local_id += 1;
        id
    }

    /// Emits a mutation notification without ever blocking the mutation.
    ///
    /// A full or closed channel drops the notification; it is an
    /// observable effect, not part of the data contract.
    fn notify(&self, kind: NotificationKind, title: &str) {
        let notification = Notification::new(kind, title);
        if let Err(error) = self.notification_tx.try_send(notification) {
            debug!(%error, "Dropping notification");
        }
    }
}
