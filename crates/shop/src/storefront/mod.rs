//! Storefront
//!
//! Line-oriented terminal storefront. Each input line is handled to completion before the
//! next one is read; cart commands go through the Cart Engine and are followed by the
//! re-rendered cart.

use std::io::{self, Write};

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt as _};
use tracing::{debug, warn};

use tienda::{
    engine::{CartEngine, Intent, Outcome},
    products::ProductId,
    view::{CATALOG_UNAVAILABLE_MESSAGE, ProductCard, product_cards},
};

use crate::{
    catalog::{Catalog, CatalogError, NewProduct},
    snapshot::Snapshot,
};

mod action;
mod table;

pub use action::{Action, ActionError};

const PROMPT: &str = "> ";

const CONNECTION_ERROR_MESSAGE: &str = "Error al conectar con el servidor";

const EMPTY_CHECKOUT_MESSAGE: &str = "El carrito está vacío";

const DELETE_CANCELLED_MESSAGE: &str = "Eliminación cancelada";

const HELP: &str = "\
Comandos:
  products                          ver productos
  show <id>                         ver un producto del catálogo
  cart                              ver el carrito
  add <id>                          agregar al carrito
  incr <id> | + <id>                una unidad más
  decr <id> | - <id>                una unidad menos
  remove <id>                       quitar del carrito
  checkout                          comprar
  refresh                           recargar productos
  new <precio> <nombre> [--image <archivo>]
                                    agregar producto al catálogo
  delete <id>                       eliminar producto del catálogo (pide confirmación)
  help                              esta ayuda
  quit                              salir";

/// Errors that stop the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Reading input failed.
    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),

    /// Writing output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Whether to keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,

    /// Stop.
    Quit,
}

/// Terminal storefront over a catalog.
#[derive(Debug)]
pub struct Storefront<C> {
    catalog: C,
    snapshot: Snapshot,
    engine: CartEngine,
    pending_delete: Option<ProductId>,
}

impl<C: Catalog> Storefront<C> {
    /// Open the storefront, loading the first catalog snapshot.
    pub async fn open(catalog: C) -> Self {
        let snapshot = Snapshot::load(&catalog).await;

        Self {
            catalog,
            snapshot,
            engine: CartEngine::new(),
            pending_delete: None,
        }
    }

    /// The current catalog snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// The Cart Engine.
    pub fn engine(&self) -> &CartEngine {
        &self.engine
    }

    /// Serve input lines until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error when input cannot be read or output cannot be written.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<(), StorefrontError>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        self.write_products(out)?;
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let mut lines = input.lines();

        while let Some(line) = lines.next_line().await.map_err(StorefrontError::Input)? {
            if line.trim().is_empty() {
                write!(out, "{PROMPT}")?;
                out.flush()?;

                continue;
            }

            if self.handle(&line, out).await? == Flow::Quit {
                break;
            }

            write!(out, "{PROMPT}")?;
            out.flush()?;
        }

        Ok(())
    }

    /// Handle one input line.
    ///
    /// # Errors
    ///
    /// Returns an error when output cannot be written.
    pub async fn handle<W: Write>(
        &mut self,
        line: &str,
        out: &mut W,
    ) -> Result<Flow, StorefrontError> {
        // A pending delete takes the line as its answer
        if let Some(id) = self.pending_delete.take() {
            if is_yes(line) {
                self.delete_product(id, out).await?;
            } else {
                writeln!(out, "{DELETE_CANCELLED_MESSAGE}")?;
            }

            return Ok(Flow::Continue);
        }

        let action = match line.parse::<Action>() {
            Ok(action) => action,
            Err(error) => {
                debug!(line, "unparseable input: {error}");

                writeln!(out, "{error}. Escribe \"help\" para ver los comandos.")?;

                return Ok(Flow::Continue);
            }
        };

        match action {
            Action::ListProducts => self.write_products(out)?,
            Action::ShowProduct(id) => self.show_product(id, out).await?,
            Action::ShowCart => writeln!(out, "{}", self.engine.view())?,
            Action::Cart(command) => {
                let intent = match Intent::resolve(command, self.snapshot.products()) {
                    Ok(intent) => intent,
                    Err(error) => {
                        writeln!(out, "{error}")?;

                        return Ok(Flow::Continue);
                    }
                };

                let dispatch = self.engine.dispatch(intent);

                match dispatch.outcome {
                    Outcome::Updated => {}
                    Outcome::CheckedOut(receipt) => writeln!(out, "{receipt}")?,
                    Outcome::Rejected(_) => writeln!(out, "{EMPTY_CHECKOUT_MESSAGE}")?,
                }

                writeln!(out, "{}", dispatch.view)?;
            }
            Action::Refresh => {
                self.refresh().await;
                self.write_products(out)?;
            }
            Action::CreateProduct(product) => self.create_product(product, out).await?,
            Action::DeleteProduct(id) => {
                writeln!(out, "¿Eliminar producto con ID {id}? (s/n)")?;

                self.pending_delete = Some(id);
            }
            Action::Help => writeln!(out, "{HELP}")?,
            Action::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    async fn refresh(&mut self) {
        self.snapshot = Snapshot::load(&self.catalog).await;
    }

    fn write_products<W: Write>(&self, out: &mut W) -> Result<(), StorefrontError> {
        if self.snapshot.is_degraded() {
            writeln!(out, "{CATALOG_UNAVAILABLE_MESSAGE}")?;
        } else {
            writeln!(out, "{}", table::product_table(&product_cards(self.snapshot.products())))?;
        }

        Ok(())
    }

    async fn show_product<W: Write>(
        &self,
        id: ProductId,
        out: &mut W,
    ) -> Result<(), StorefrontError> {
        match self.catalog.get_product(id).await {
            Ok(product) => writeln!(
                out,
                "{}",
                table::product_table(&[ProductCard::from(&product)])
            )?,
            Err(error) => write_catalog_error(out, None, &error)?,
        }

        Ok(())
    }

    async fn create_product<W: Write>(
        &mut self,
        product: NewProduct,
        out: &mut W,
    ) -> Result<(), StorefrontError> {
        match self.catalog.create_product(product).await {
            Ok(id) => {
                writeln!(out, "Producto agregado (ID {id})")?;

                self.refresh().await;
            }
            Err(error) => write_catalog_error(out, Some("Error al agregar"), &error)?,
        }

        Ok(())
    }

    async fn delete_product<W: Write>(
        &mut self,
        id: ProductId,
        out: &mut W,
    ) -> Result<(), StorefrontError> {
        match self.catalog.delete_product(id).await {
            Ok(()) => {
                writeln!(out, "Producto eliminado correctamente")?;

                self.refresh().await;
            }
            Err(error) => write_catalog_error(out, Some("Error al eliminar"), &error)?,
        }

        Ok(())
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "si" | "sí" | "y" | "yes"
    )
}

fn write_catalog_error<W: Write>(
    out: &mut W,
    context: Option<&str>,
    error: &CatalogError,
) -> Result<(), StorefrontError> {
    match (error, context) {
        (CatalogError::Unavailable(reason), _) => {
            warn!("catalog request failed: {reason}");

            writeln!(out, "{CONNECTION_ERROR_MESSAGE}")?;
        }
        (error, Some(context)) => writeln!(out, "{context}: {error}")?,
        (error, None) => writeln!(out, "{error}")?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use tienda::{products::Product, view::EMPTY_CART_MESSAGE};

    use crate::catalog::MockCatalog;

    use super::*;

    fn catalog_products() -> Vec<Product> {
        vec![
            Product::new(1, "Arroz 1kg", Decimal::new(185, 1)).with_image("arroz.png"),
            Product::new(2, "Aceite", Decimal::from(45)),
        ]
    }

    fn loaded_catalog() -> MockCatalog {
        let mut catalog = MockCatalog::new();

        catalog
            .expect_list_products()
            .returning(|| Ok(catalog_products()));

        catalog
    }

    async fn run_script(catalog: MockCatalog, script: &str) -> Result<String, StorefrontError> {
        let mut storefront = Storefront::open(catalog).await;
        let mut out = Vec::new();

        storefront.run(script.as_bytes(), &mut out).await?;

        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    #[tokio::test]
    async fn shopping_session_checks_out_the_cart_total() -> TestResult {
        let output = run_script(
            loaded_catalog(),
            "add 1\nadd 1\nadd 2\ncart\ncheckout\ncart\nquit\n",
        )
        .await?;

        assert!(output.contains("Arroz 1kg — $18.50 x 2"), "{output}");
        assert!(output.contains("Aceite — $45.00 x 1"), "{output}");
        assert!(output.contains("Compra realizada. Total: $82.00"), "{output}");
        assert!(output.ends_with(&format!("{EMPTY_CART_MESSAGE}\nTotal: $0.00\n> ")), "{output}");

        Ok(())
    }

    #[tokio::test]
    async fn empty_checkout_is_reported() -> TestResult {
        let mut storefront = Storefront::open(loaded_catalog()).await;
        let mut out = Vec::new();

        storefront.handle("checkout", &mut out).await?;

        let output = String::from_utf8(out)?;

        assert!(output.starts_with("El carrito está vacío\n"), "{output}");
        assert!(storefront.engine().cart().is_empty(), "cart must stay empty");

        Ok(())
    }

    #[tokio::test]
    async fn adding_unknown_product_changes_nothing() -> TestResult {
        let mut storefront = Storefront::open(loaded_catalog()).await;
        let mut out = Vec::new();

        storefront.handle("add 42", &mut out).await?;

        assert_eq!(String::from_utf8(out)?, "product 42 is not in the catalog\n");
        assert!(storefront.engine().cart().is_empty(), "cart must stay empty");

        Ok(())
    }

    #[tokio::test]
    async fn degraded_catalog_shows_message_and_keeps_cart() -> TestResult {
        let mut catalog = MockCatalog::new();
        let mut loads = 0;

        catalog.expect_list_products().times(2).returning(move || {
            loads += 1;

            if loads == 1 {
                Ok(catalog_products())
            } else {
                Err(CatalogError::Unavailable("connection refused".to_string()))
            }
        });

        let output = run_script(catalog, "add 1\nrefresh\nincr 1\nquit\n").await?;

        assert!(output.contains(CATALOG_UNAVAILABLE_MESSAGE), "{output}");
        assert!(output.contains("Arroz 1kg — $18.50 x 2"), "{output}");

        Ok(())
    }

    #[tokio::test]
    async fn decrementing_last_unit_shows_placeholder() -> TestResult {
        let mut storefront = Storefront::open(loaded_catalog()).await;
        let mut out = Vec::new();

        storefront.handle("add 2", &mut out).await?;
        storefront.handle("decr 2", &mut out).await?;

        let output = String::from_utf8(out)?;

        assert!(output.ends_with(&format!("{EMPTY_CART_MESSAGE}\nTotal: $0.00\n")), "{output}");
        assert!(storefront.engine().view().is_placeholder(), "expected placeholder");

        Ok(())
    }

    #[tokio::test]
    async fn delete_refreshes_snapshot() -> TestResult {
        let mut catalog = MockCatalog::new();
        let mut loads = 0;

        catalog.expect_list_products().times(2).returning(move || {
            loads += 1;

            let mut products = catalog_products();

            if loads > 1 {
                products.retain(|product| product.id != ProductId::new(2));
            }

            Ok(products)
        });

        catalog
            .expect_delete_product()
            .once()
            .withf(|id| *id == ProductId::new(2))
            .return_once(|_| Ok(()));

        let mut storefront = Storefront::open(catalog).await;
        let mut out = Vec::new();

        storefront.handle("delete 2", &mut out).await?;
        storefront.handle("s", &mut out).await?;

        assert_eq!(
            String::from_utf8(out)?,
            "¿Eliminar producto con ID 2? (s/n)\nProducto eliminado correctamente\n"
        );
        assert!(
            storefront.snapshot().product(ProductId::new(2)).is_none(),
            "deleted product should be gone after refresh"
        );

        Ok(())
    }

    #[tokio::test]
    async fn failed_delete_reports_server_message() -> TestResult {
        let mut catalog = loaded_catalog();

        catalog
            .expect_delete_product()
            .once()
            .return_once(|_| Err(CatalogError::NotFound));

        let mut storefront = Storefront::open(catalog).await;
        let mut out = Vec::new();

        storefront.handle("delete 77", &mut out).await?;
        storefront.handle("sí", &mut out).await?;

        assert_eq!(
            String::from_utf8(out)?,
            "¿Eliminar producto con ID 77? (s/n)\nError al eliminar: Producto no encontrado\n"
        );

        Ok(())
    }

    #[tokio::test]
    async fn declined_delete_keeps_product() -> TestResult {
        let mut catalog = loaded_catalog();

        catalog.expect_delete_product().never();

        let output = run_script(catalog, "delete 1\nn\nadd 1\nquit\n").await?;

        assert!(output.contains("¿Eliminar producto con ID 1? (s/n)\n"), "{output}");
        assert!(output.contains("Eliminación cancelada\n"), "{output}");
        assert!(output.contains("Arroz 1kg — $18.50 x 1"), "{output}");

        Ok(())
    }

    #[test]
    fn confirmation_answers() {
        for answer in ["s", "SI", " sí ", "y", "yes"] {
            assert!(is_yes(answer), "{answer:?} should confirm");
        }

        for answer in ["n", "no", "", "delete 1"] {
            assert!(!is_yes(answer), "{answer:?} should not confirm");
        }
    }

    #[tokio::test]
    async fn create_product_posts_and_refreshes() -> TestResult {
        let mut catalog = loaded_catalog();

        catalog
            .expect_create_product()
            .once()
            .withf(|product| {
                *product
                    == NewProduct {
                        name: "Leche entera".to_string(),
                        price: Decimal::new(225, 1),
                        image: None,
                    }
            })
            .return_once(|_| Ok(ProductId::new(3)));

        let mut storefront = Storefront::open(catalog).await;
        let mut out = Vec::new();

        storefront.handle("new 22.5 Leche entera", &mut out).await?;

        assert_eq!(String::from_utf8(out)?, "Producto agregado (ID 3)\n");

        Ok(())
    }

    #[tokio::test]
    async fn unreachable_catalog_reports_connection_error() -> TestResult {
        let mut catalog = loaded_catalog();

        catalog
            .expect_get_product()
            .once()
            .return_once(|_| Err(CatalogError::Unavailable("timed out".to_string())));

        let mut storefront = Storefront::open(catalog).await;
        let mut out = Vec::new();

        storefront.handle("show 1", &mut out).await?;

        assert_eq!(String::from_utf8(out)?, "Error al conectar con el servidor\n");

        Ok(())
    }

    #[tokio::test]
    async fn bad_input_points_to_help() -> TestResult {
        let mut storefront = Storefront::open(loaded_catalog()).await;
        let mut out = Vec::new();

        let flow = storefront.handle("add", &mut out).await?;

        assert_eq!(flow, Flow::Continue);
        assert!(
            String::from_utf8(out)?.contains("Escribe \"help\""),
            "expected help hint"
        );

        Ok(())
    }
}
