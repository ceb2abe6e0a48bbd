//! Product card table.

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use tienda::view::ProductCard;

/// Render product cards as a table, one row per card.
pub(crate) fn product_table(cards: &[ProductCard]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["ID", "Producto", "Precio", "Imagen"]);

    for card in cards {
        builder.push_record([
            card.id.to_string(),
            card.name.clone(),
            card.price.clone(),
            card.image.clone(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(0..1), Alignment::right());
    table.modify(Columns::new(2..3), Alignment::right());

    table.to_string()
}
