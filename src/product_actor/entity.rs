//! [`ActorEntity`] implementation for [`Product`].
//!
//! Creation and full-replacement updates both validate the [`ProductUpsert`] payload
//! first. The external [`ProductId`] is minted in `on_create` from the injected
//! [`IdSource`], so a clock failure discards the product before it is stored.
//! Stock actions reject a zero quantity and never leave the counter partially
//! changed.

use std::sync::Arc;

use actor_framework::ActorEntity;
use async_trait::async_trait;

use super::actions::ProductAction;
use super::error::ProductError;
use crate::id_gen::IdSource;
use crate::model::{Product, ProductId, ProductUpsert, RecordId};

#[async_trait]
impl ActorEntity for Product {
    type Id = RecordId;
    type Create = ProductUpsert;
    type Update = ProductUpsert;
    type Action = ProductAction;
    type ActionResult = u32;
    type Context = Arc<dyn IdSource>;
    type Error = ProductError;

    /// The product id is left at its default until `on_create` mints it.
    fn from_create_params(id: RecordId, params: ProductUpsert) -> Result<Self, Self::Error> {
        params.validate().map_err(ProductError::Validation)?;
        Ok(Product::new(id, ProductId::default(), params))
    }

    async fn on_create(&mut self, ids: &Arc<dyn IdSource>) -> Result<(), Self::Error> {
        self.product_id = ProductId(ids.next_id()?);
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: ProductUpsert,
        _ctx: &Arc<dyn IdSource>,
    ) -> Result<(), Self::Error> {
        update.validate().map_err(ProductError::Validation)?;
        self.apply(update);
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &Arc<dyn IdSource>,
    ) -> Result<u32, Self::Error> {
        match action {
            ProductAction::CheckStock => Ok(self.stock_available),
            ProductAction::AddStock(0) | ProductAction::DecrementStock(0) => {
                Err(ProductError::InvalidQuantity(0))
            }
            ProductAction::AddStock(quantity) => {
                self.stock_available = self
                    .stock_available
                    .checked_add(quantity)
                    .ok_or(ProductError::InvalidQuantity(quantity))?;
                Ok(self.stock_available)
            }
            ProductAction::DecrementStock(quantity) => {
                if self.stock_available < quantity {
                    return Err(ProductError::InsufficientStock {
                        requested: quantity,
                        available: self.stock_available,
                    });
                }
                self.stock_available -= quantity;
                Ok(self.stock_available)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id_gen::{ClockError, IdGenerator, ManualClock, BASE_ID, EPOCH_MILLIS};

    fn ids(millis: i64) -> (Arc<IdGenerator<ManualClock>>, Arc<dyn IdSource>) {
        let generator = Arc::new(IdGenerator::with_clock(0, ManualClock::new(millis)).unwrap());
        let source: Arc<dyn IdSource> = generator.clone();
        (generator, source)
    }

    fn product(stock: u32) -> Product {
        Product::new(
            RecordId(1),
            ProductId(100_001),
            ProductUpsert::new("Loupe", 12.0, stock),
        )
    }

    #[tokio::test]
    async fn on_create_mints_the_product_id() {
        let (_, source) = ids(EPOCH_MILLIS + 25);
        let mut p = Product::from_create_params(RecordId(1), ProductUpsert::new("Loupe", 12.0, 1))
            .unwrap();
        assert_eq!(p.product_id, ProductId::default());

        p.on_create(&source).await.unwrap();
        assert_eq!(p.product_id, ProductId(BASE_ID + 25));
    }

    #[tokio::test]
    async fn clock_regression_fails_creation() {
        let (generator, source) = ids(EPOCH_MILLIS + 25);
        generator.generate_id().unwrap();
        generator.clock().set(EPOCH_MILLIS + 20);

        let mut p = product(1);
        let err = p.on_create(&source).await.unwrap_err();
        assert_eq!(
            err,
            ProductError::IdGeneration(ClockError {
                now: EPOCH_MILLIS + 20,
                last: EPOCH_MILLIS + 25
            })
        );
    }

    #[tokio::test]
    async fn stock_actions_report_the_new_level() {
        let (_, source) = ids(EPOCH_MILLIS);
        let mut p = product(10);

        assert_eq!(p.handle_action(ProductAction::CheckStock, &source).await, Ok(10));
        assert_eq!(p.handle_action(ProductAction::AddStock(5), &source).await, Ok(15));
        assert_eq!(
            p.handle_action(ProductAction::DecrementStock(15), &source).await,
            Ok(0)
        );
    }

    #[tokio::test]
    async fn decrement_beyond_stock_changes_nothing() {
        let (_, source) = ids(EPOCH_MILLIS);
        let mut p = product(3);

        let err = p.handle_action(ProductAction::DecrementStock(4), &source).await;
        assert_eq!(
            err,
            Err(ProductError::InsufficientStock {
                requested: 4,
                available: 3
            })
        );
        assert_eq!(p.stock_available, 3);
    }

    #[tokio::test]
    async fn zero_and_overflowing_quantities_are_invalid() {
        let (_, source) = ids(EPOCH_MILLIS);
        let mut p = product(u32::MAX - 1);

        assert_eq!(
            p.handle_action(ProductAction::DecrementStock(0), &source).await,
            Err(ProductError::InvalidQuantity(0))
        );
        assert_eq!(
            p.handle_action(ProductAction::AddStock(2), &source).await,
            Err(ProductError::InvalidQuantity(2))
        );
        assert_eq!(p.stock_available, u32::MAX - 1);
    }

    #[test]
    fn create_validates_the_payload() {
        let rejected = Product::from_create_params(RecordId(1), ProductUpsert::new("", 1.0, 0));
        assert!(matches!(rejected, Err(ProductError::Validation(_))));
    }
}
