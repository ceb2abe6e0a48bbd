//! Views
//!
//! Display projections of the cart and of catalog products. Every projection is a pure
//! function of its input, so rendering unchanged state always produces identical output.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{
    cart::{Cart, CartLine},
    products::{Product, ProductId},
};

/// Shown in place of cart lines when the cart is empty.
pub const EMPTY_CART_MESSAGE: &str = "El carrito está vacío.";

/// Shown in place of product cards when the catalog could not be loaded.
pub const CATALOG_UNAVAILABLE_MESSAGE: &str = "No se pudieron cargar los productos.";

/// Display name for products without one.
pub const UNNAMED_PRODUCT: &str = "Sin nombre";

/// Image shown for products without one.
pub const PLACEHOLDER_IMAGE: &str = "images/placeholder.png";

/// A rendered cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    /// Product the line controls act on
    pub product_id: ProductId,

    /// `"{name} — ${unit price} x {quantity}"`
    pub label: String,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id(),
            label: format!(
                "{} — ${} x {}",
                line.name(),
                line.unit_price(),
                line.quantity()
            ),
        }
    }
}

/// Body of the cart view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartItems {
    /// The cart is empty; a single message stands in for the list.
    Placeholder(&'static str),

    /// One entry per cart line, in cart order.
    Lines(Vec<CartLineView>),
}

/// Cart View
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// Rendered lines or the empty-cart placeholder
    pub items: CartItems,

    /// Cart total with two decimal places
    pub total: String,
}

impl CartView {
    /// Rendered line labels; empty for an empty cart.
    pub fn labels(&self) -> Vec<&str> {
        match &self.items {
            CartItems::Placeholder(_) => Vec::new(),
            CartItems::Lines(lines) => lines.iter().map(|line| line.label.as_str()).collect(),
        }
    }

    /// Whether the view shows the empty-cart placeholder.
    pub fn is_placeholder(&self) -> bool {
        matches!(self.items, CartItems::Placeholder(_))
    }
}

impl Display for CartView {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.items {
            CartItems::Placeholder(message) => writeln!(f, "{message}")?,
            CartItems::Lines(lines) => {
                for line in lines {
                    writeln!(f, "[{}] {}", line.product_id, line.label)?;
                }
            }
        }

        write!(f, "Total: ${}", self.total)
    }
}

/// Render the cart.
pub fn render(cart: &Cart) -> CartView {
    let items = if cart.is_empty() {
        CartItems::Placeholder(EMPTY_CART_MESSAGE)
    } else {
        CartItems::Lines(cart.iter().map(CartLineView::from).collect())
    };

    CartView {
        items,
        total: cart.total().to_string(),
    }
}

/// A rendered product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    /// Identifier used to add the product to the cart
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Price with currency sign, e.g. `$18.50`
    pub price: String,

    /// Image path
    pub image: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        let name = if product.name.is_empty() {
            UNNAMED_PRODUCT.to_string()
        } else {
            product.name.clone()
        };

        let image = product
            .image
            .as_deref()
            .filter(|image| !image.is_empty())
            .map_or_else(|| PLACEHOLDER_IMAGE.to_string(), |image| format!("images/{image}"));

        Self {
            id: product.id,
            name,
            price: format!("${}", product.price),
            image,
        }
    }
}

/// Render product cards in catalog order.
pub fn product_cards(products: &[Product]) -> Vec<ProductCard> {
    products.iter().map(ProductCard::from).collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn cart_with_lines() -> Cart {
        let mut cart = Cart::new();

        cart.add_item(&Product::new(1, "Arroz 1kg", Decimal::new(185, 1)));
        cart.add_item(&Product::new(1, "Arroz 1kg", Decimal::new(185, 1)));
        cart.add_item(&Product::new(2, "Aceite 1L", Decimal::new(45, 0)));

        cart
    }

    #[test]
    fn renders_lines_and_total() {
        let view = render(&cart_with_lines());

        assert_eq!(
            view.labels(),
            vec!["Arroz 1kg — $18.50 x 2", "Aceite 1L — $45.00 x 1"]
        );
        assert_eq!(view.total, "82.00");
        assert!(!view.is_placeholder());
    }

    #[test]
    fn empty_cart_renders_placeholder() {
        let view = render(&Cart::new());

        assert_eq!(view.items, CartItems::Placeholder(EMPTY_CART_MESSAGE));
        assert_eq!(view.total, "0.00");
        assert!(view.labels().is_empty());
    }

    #[test]
    fn rendering_is_idempotent() {
        let cart = cart_with_lines();

        assert_eq!(render(&cart), render(&cart));
        assert_eq!(render(&cart).to_string(), render(&cart).to_string());
    }

    #[test]
    fn display_lists_lines_then_total() {
        assert_eq!(
            render(&cart_with_lines()).to_string(),
            "[1] Arroz 1kg — $18.50 x 2\n[2] Aceite 1L — $45.00 x 1\nTotal: $82.00"
        );
        assert_eq!(
            render(&Cart::new()).to_string(),
            "El carrito está vacío.\nTotal: $0.00"
        );
    }

    #[test]
    fn product_card_formats_price_and_image() {
        let card =
            ProductCard::from(&Product::new(1, "Arroz 1kg", Decimal::new(185, 1)).with_image("arroz.jpg"));

        assert_eq!(card.name, "Arroz 1kg");
        assert_eq!(card.price, "$18.50");
        assert_eq!(card.image, "images/arroz.jpg");
    }

    #[test]
    fn product_card_falls_back_for_missing_fields() {
        let card = ProductCard::from(&Product::new(4, "", Decimal::ZERO));

        assert_eq!(card.name, UNNAMED_PRODUCT);
        assert_eq!(card.price, "$0.00");
        assert_eq!(card.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn product_cards_keep_catalog_order() {
        let cards = product_cards(&[
            Product::new(3, "Azúcar 1kg", Decimal::new(20, 0)),
            Product::new(1, "Arroz 1kg", Decimal::new(185, 1)),
        ]);

        let ids: Vec<i64> = cards.iter().map(|card| card.id.get()).collect();

        assert_eq!(ids, vec![3, 1]);
    }
}
