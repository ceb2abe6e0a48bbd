//! App Router

use salvo::Router;

use crate::products;

pub(crate) fn app_router() -> Router {
    Router::with_path("api")
        .push(Router::with_path("productos").get(products::index::handler))
        .push(Router::with_path("producto/{id}").get(products::get::handler))
        .push(Router::with_path("agregar-producto").post(products::create::handler))
        .push(Router::with_path("eliminar-producto/{id}").delete(products::delete::handler))
}
