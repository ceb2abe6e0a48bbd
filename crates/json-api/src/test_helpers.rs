//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use tienda_app::{
    context::AppContext,
    domain::products::{
        MockProductsService,
        records::{ProductId, ProductRecord},
    },
};

use crate::{errors, state::State};

pub(crate) fn make_product(id: i64) -> ProductRecord {
    ProductRecord {
        id: ProductId::from_i64(id),
        name: "Arroz 1kg".to_string(),
        price: 18.5,
        image: Some("arroz.png".to_string()),
    }
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    State::from_app_context(AppContext {
        products: Arc::new(products),
    })
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
    .catcher(errors::catcher())
}
