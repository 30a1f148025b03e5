use product_inventory::clients::ActorClient;
use product_inventory::config::InventoryConfig;
use product_inventory::lifecycle::{setup_tracing, InventorySystem};
use product_inventory::model::ProductUpsert;
use product_inventory::product_actor::ProductError;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = InventoryConfig::from_env().map_err(|e| e.to_string())?;
    let system = InventorySystem::new(&config).map_err(|e| e.to_string())?;
    let products = &system.product_client;

    let span = tracing::info_span!("catalogue_setup");
    let (camera, lens) = async {
        let camera = products
            .create_product(
                ProductUpsert::new("Mirrorless camera", 1299.0, 5)
                    .with_description("24MP full-frame body"),
            )
            .await?;
        let lens = products
            .create_product(ProductUpsert::new("50mm lens", 349.0, 12))
            .await?;
        Ok::<_, ProductError>((camera, lens))
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    info!(%camera, %lens, "Products created");

    let span = tracing::info_span!("stock_moves");
    async {
        let left = products.decrement_stock(camera, 2).await?;
        info!(%camera, left, "Sold cameras");

        match products.decrement_stock(lens, 50).await {
            Err(e @ ProductError::InsufficientStock { .. }) => {
                warn!(%lens, error = %e, "Order rejected")
            }
            other => info!(%lens, ?other, "Unexpected outcome"),
        }

        let level = products.add_to_stock(lens, 8).await?;
        info!(%lens, level, "Restocked lenses");
        Ok::<_, ProductError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    for product in products.list_products().await.map_err(|e| e.to_string())? {
        info!(
            id = %product.id,
            product_id = %product.product_id,
            name = %product.name,
            stock = product.stock_available,
            "Inventory"
        );
    }

    products.delete(lens).await.map_err(|e| e.to_string())?;
    let remaining = products.list().await.map_err(|e| e.to_string())?.len();
    info!(remaining, "Lens discontinued");

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
