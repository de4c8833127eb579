//! The state owner for a shopping session.

use tracing::{debug, warn};

use crate::cart::{Cart, CartPricing, Customization, QuantityUpdate};
use crate::catalog::{Catalog, CategoryFilter, Product, Size};
use crate::checkout::{CheckoutForm, CheckoutStep, OrderConfirmation};
use crate::config::StoreConfig;
use crate::error::CommerceError;
use crate::ids::{CartLineId, OrderId, ProductId};
use crate::money::Money;
use crate::search::ShopFilter;
use crate::store::breadcrumb::{self, Breadcrumb, MAX_VISIBLE_CRUMBS};
use crate::store::{Navigation, Page, Wishlist};

/// Navigation and shopping state for one session.
///
/// Every write goes through a method here so the derived totals always
/// agree with the cart. Mutations never fail: operations on unknown IDs
/// are no-ops.
#[derive(Debug, Clone)]
pub struct Store {
    config: StoreConfig,
    current_page: Page,
    /// Last product navigated to. Left in place after leaving the product
    /// page; only meaningful while `current_page` is `Page::Product`.
    current_product: Option<Product>,
    active_category: CategoryFilter,
    cart: Cart,
    wishlist: Wishlist,
    checkout_step: CheckoutStep,
    last_order: Option<OrderConfirmation>,
}

impl Store {
    /// A fresh session on the home page with the default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            cart: Cart::with_surcharge(config.customization_surcharge),
            config,
            current_page: Page::Home,
            current_product: None,
            active_category: CategoryFilter::All,
            wishlist: Wishlist::new(),
            checkout_step: CheckoutStep::Bag,
            last_order: None,
        }
    }

    // ---- Navigation ----

    /// Move to another page.
    ///
    /// Navigating to a product makes it the current product. The checkout
    /// step always returns to the bag.
    pub fn navigate_to(&mut self, navigation: Navigation) {
        let page = navigation.page();
        if let Navigation::Product(product) = navigation {
            debug!(page = %page, product_id = %product.id, "navigate");
            self.current_product = Some(product);
        } else {
            debug!(page = %page, "navigate");
        }
        self.current_page = page;
        self.checkout_step = CheckoutStep::Bag;
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        debug!(category = %category, "set category");
        self.active_category = category;
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn current_product(&self) -> Option<&Product> {
        self.current_product.as_ref()
    }

    pub fn is_on_product_page(&self) -> bool {
        self.current_page == Page::Product
    }

    pub fn active_category(&self) -> CategoryFilter {
        self.active_category
    }

    /// Breadcrumb trail for the current page, collapsed for display.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        let trail = match self.current_page {
            Page::Shop => breadcrumb::shop_trail(self.active_category),
            Page::Product => match &self.current_product {
                Some(product) => breadcrumb::product_trail(product),
                None => Vec::new(),
            },
            Page::Cart => breadcrumb::bag_trail(self.checkout_step),
            Page::Wishlist => vec![Breadcrumb::here("Wishlist")],
            Page::Home | Page::CheckoutSuccess => Vec::new(),
        };
        breadcrumb::collapse(trail, MAX_VISIBLE_CRUMBS)
    }

    // ---- Cart ----

    /// Add one unit of a product in a size, optionally customized.
    pub fn add_to_cart(
        &mut self,
        product: &Product,
        size: Size,
        customization: Option<Customization>,
    ) -> CartLineId {
        let customized = customization.is_some();
        let line_id = self.cart.add(product, size, customization);
        debug!(
            product_id = %product.id,
            size = %size,
            customized,
            line_id = %line_id,
            "add to cart"
        );
        line_id
    }

    pub fn remove_from_cart(&mut self, line_id: &CartLineId) {
        if self.cart.remove(line_id) {
            debug!(line_id = %line_id, "remove from cart");
        } else {
            debug!(line_id = %line_id, "remove from cart: no such line");
        }
    }

    /// Adjust a line's quantity. A result of zero or less removes the line.
    pub fn update_quantity(&mut self, line_id: &CartLineId, delta: i64) -> QuantityUpdate {
        let outcome = self.cart.update_quantity(line_id, delta);
        match outcome {
            QuantityUpdate::Updated(quantity) => {
                debug!(line_id = %line_id, delta, quantity, "update quantity")
            }
            QuantityUpdate::Removed => debug!(line_id = %line_id, delta, "line removed"),
            QuantityUpdate::NotFound => {
                debug!(line_id = %line_id, delta, "update quantity: no such line")
            }
        }
        outcome
    }

    pub fn clear_cart(&mut self) {
        debug!(lines = self.cart.len(), "clear cart");
        self.cart.clear();
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Units across all lines.
    pub fn cart_count(&self) -> u64 {
        self.cart.count()
    }

    /// Sum of line totals, surcharges included.
    pub fn cart_total(&self) -> Money {
        self.cart.subtotal()
    }

    pub fn shipping_cost(&self) -> Money {
        self.config.shipping.cost_for(self.cart_total())
    }

    pub fn grand_total(&self) -> Money {
        self.cart_total() + self.shipping_cost()
    }

    pub fn amount_until_free_shipping(&self) -> Money {
        self.config.shipping.amount_until_free(self.cart_total())
    }

    /// Full breakdown with overflow checking.
    pub fn pricing(&self) -> Result<CartPricing, CommerceError> {
        self.cart.calculate_pricing(&self.config.shipping)
    }

    // ---- Wishlist ----

    /// Returns true when the product is wishlisted afterwards.
    pub fn toggle_wishlist(&mut self, product_id: &ProductId) -> bool {
        let liked = self.wishlist.toggle(product_id);
        debug!(product_id = %product_id, liked, "toggle wishlist");
        liked
    }

    pub fn is_wishlisted(&self, product_id: &ProductId) -> bool {
        self.wishlist.contains(product_id)
    }

    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    // ---- Listing ----

    /// Filter for the shop grid from the active category and config.
    pub fn shop_filter(&self) -> ShopFilter {
        ShopFilter::new(self.active_category).with_max_price(self.config.shop.max_price)
    }

    pub fn shop_products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        self.shop_filter().apply(catalog)
    }

    /// Products for the home page strip.
    pub fn featured<'a>(&self, catalog: &'a Catalog) -> &'a [Product] {
        catalog.featured(self.config.shop.featured_count)
    }

    // ---- Checkout ----

    pub fn checkout_step(&self) -> CheckoutStep {
        self.checkout_step
    }

    /// Move from the bag to the details form. Does nothing with an empty bag.
    pub fn proceed_to_checkout(&mut self) {
        if self.cart.is_empty() {
            debug!("proceed to checkout: bag is empty");
            return;
        }
        self.checkout_step = self.checkout_step.advance();
        debug!(step = self.checkout_step.as_str(), "proceed to checkout");
    }

    pub fn back_to_bag(&mut self) {
        self.checkout_step = self.checkout_step.back();
    }

    /// Confirm the order.
    ///
    /// On success the bag is emptied, the session lands on the success
    /// page, and the confirmation is kept as [`Store::last_order`].
    pub fn place_order(&mut self, form: &CheckoutForm) -> Result<OrderConfirmation, CommerceError> {
        if self.cart.is_empty() {
            warn!("order rejected: bag is empty");
            return Err(CommerceError::EmptyCart);
        }
        if let Err(err) = form.validate() {
            warn!(error = %err, "order rejected");
            return Err(err);
        }
        let pricing = self.pricing()?;

        let confirmation = OrderConfirmation {
            reference: OrderId::reference(),
            lines: self.cart.lines().to_vec(),
            pricing,
            payment: form.payment,
            district: form.district,
            placed_at: chrono::Utc::now(),
        };
        debug!(
            reference = %confirmation.reference,
            total = %confirmation.pricing.grand_total,
            payment = confirmation.payment.code(),
            "order placed"
        );

        self.clear_cart();
        self.navigate_to(Navigation::CheckoutSuccess);
        self.last_order = Some(confirmation.clone());
        Ok(confirmation)
    }

    pub fn last_order(&self) -> Option<&OrderConfirmation> {
        self.last_order.as_ref()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::FontStyle;
    use crate::catalog::League;
    use crate::checkout::PaymentMethod;

    fn kit(id: &str, price: i64) -> Product {
        Product::new(
            id,
            format!("{} Kit", id),
            "Team",
            League::PremierLeague,
            "25/26",
            Money::new(price),
            "kit.jpg",
        )
    }

    fn form() -> CheckoutForm {
        CheckoutForm {
            full_name: "Rahim Uddin".to_string(),
            phone: "01700000000".to_string(),
            address: "House 12, Road 4, Dhanmondi".to_string(),
            payment: PaymentMethod::Nagad,
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_state() {
        let store = Store::new();
        assert_eq!(store.current_page(), Page::Home);
        assert_eq!(store.current_product(), None);
        assert_eq!(store.active_category(), CategoryFilter::All);
        assert_eq!(store.cart_count(), 0);
        assert_eq!(store.cart_total(), Money::zero());
        assert!(store.wishlist().is_empty());
        assert_eq!(store.checkout_step(), CheckoutStep::Bag);
    }

    #[test]
    fn test_set_category_leaves_cart_alone() {
        let mut store = Store::new();
        let product = kit("a", 1500);
        store.add_to_cart(&product, Size::M, None);
        store.set_category(League::Bundesliga.into());
        assert_eq!(store.active_category(), CategoryFilter::League(League::Bundesliga));
        assert_eq!(store.cart_count(), 1);
    }

    #[test]
    fn test_configured_surcharge_applies() {
        let mut config = StoreConfig::default();
        config.customization_surcharge = Money::new(500);
        let mut store = Store::with_config(config);
        let custom = Customization::new("ALI", "9", FontStyle::Classic).unwrap();
        store.add_to_cart(&kit("a", 1000), Size::L, Some(custom));
        assert_eq!(store.cart_total(), Money::new(1500));
    }

    #[test]
    fn test_checkout_step_requires_items() {
        let mut store = Store::new();
        store.proceed_to_checkout();
        assert_eq!(store.checkout_step(), CheckoutStep::Bag);

        store.add_to_cart(&kit("a", 1500), Size::M, None);
        store.navigate_to(Navigation::Cart);
        store.proceed_to_checkout();
        assert_eq!(store.checkout_step(), CheckoutStep::Details);

        store.back_to_bag();
        assert_eq!(store.checkout_step(), CheckoutStep::Bag);
    }

    #[test]
    fn test_navigation_resets_checkout_step() {
        let mut store = Store::new();
        store.add_to_cart(&kit("a", 1500), Size::M, None);
        store.proceed_to_checkout();
        store.navigate_to(Navigation::Shop);
        assert_eq!(store.checkout_step(), CheckoutStep::Bag);
    }

    #[test]
    fn test_place_order_on_empty_bag() {
        let mut store = Store::new();
        assert_eq!(store.place_order(&form()), Err(CommerceError::EmptyCart));
        assert_eq!(store.current_page(), Page::Home);
    }

    #[test]
    fn test_place_order_with_incomplete_form_keeps_bag() {
        let mut store = Store::new();
        store.add_to_cart(&kit("a", 1500), Size::M, None);
        let mut incomplete = form();
        incomplete.phone = "  ".to_string();

        assert_eq!(
            store.place_order(&incomplete),
            Err(CommerceError::CheckoutIncomplete("phone number"))
        );
        assert_eq!(store.cart_count(), 1);
        assert!(store.last_order().is_none());
    }

    #[test]
    fn test_place_order() {
        let mut store = Store::new();
        let product = kit("a", 1500);
        store.add_to_cart(&product, Size::M, None);
        store.add_to_cart(&product, Size::M, None);

        let order = store.place_order(&form()).unwrap();
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.pricing.subtotal, Money::new(3000));
        assert_eq!(order.pricing.shipping, Money::zero());
        assert_eq!(order.payment, PaymentMethod::Nagad);

        assert_eq!(store.cart_count(), 0);
        assert_eq!(store.current_page(), Page::CheckoutSuccess);
        assert_eq!(store.last_order(), Some(&order));
    }

    #[test]
    fn test_shop_products_follow_category() {
        let catalog = Catalog::builtin();
        let mut store = Store::new();
        store.set_category(League::LaLiga.into());
        let products = store.shop_products(catalog);
        assert!(!products.is_empty());
        assert!(products.iter().all(|p| p.league == League::LaLiga));
    }

    #[test]
    fn test_breadcrumbs_per_page() {
        let mut store = Store::new();
        assert!(store.breadcrumbs().is_empty());

        store.set_category(League::SerieA.into());
        store.navigate_to(Navigation::Shop);
        let labels: Vec<_> = store
            .breadcrumbs()
            .iter()
            .map(|c| c.label().to_string())
            .collect();
        assert_eq!(labels, vec!["Shop All", "Serie A"]);

        store.add_to_cart(&kit("a", 1500), Size::M, None);
        store.navigate_to(Navigation::Cart);
        store.proceed_to_checkout();
        let labels: Vec<_> = store
            .breadcrumbs()
            .iter()
            .map(|c| c.label().to_string())
            .collect();
        assert_eq!(labels, vec!["Bag", "Checkout"]);
    }

    #[test]
    fn test_amount_until_free_shipping() {
        let mut store = Store::new();
        store.add_to_cart(&kit("a", 1500), Size::M, None);
        assert_eq!(store.amount_until_free_shipping(), Money::new(500));
        store.add_to_cart(&kit("b", 500), Size::M, None);
        assert_eq!(store.amount_until_free_shipping(), Money::zero());
    }
}
