//! Generic CRUD over the admin panel's entities

use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use shared::models::{
    Customer, CustomerCreate, CustomerGroup, CustomerGroupCreate, CustomerGroupUpdate,
    CustomerUpdate, Ingredient, IngredientCreate, IngredientUpdate, LoyaltyProgram,
    LoyaltyProgramCreate, LoyaltyProgramUpdate, Promotion, PromotionCreate, PromotionUpdate,
    Supplier, SupplierCreate, SupplierUpdate, TechnicalCard, TechnicalCardCreate,
    TechnicalCardUpdate, Transaction, TransactionCreate, TransactionUpdate, Warehouse,
    WarehouseCreate, WarehouseUpdate,
};

use super::PosClient;
use crate::{ClientResult, HttpClient};

/// An entity with a REST collection: `GET/POST {PATH}`, `GET/PUT/DELETE {PATH}/{id}`
pub trait Resource: DeserializeOwned + Send + Sync {
    /// Collection path, relative to the API root
    const PATH: &'static str;
    /// Human-readable singular name, for logs
    const NAME: &'static str;

    type Create: Serialize + Send + Sync;
    type Update: Serialize + Send + Sync;

    fn id(&self) -> i64;
}

macro_rules! impl_resource {
    ($ty:ty, $path:literal, $name:literal, $create:ty, $update:ty) => {
        impl Resource for $ty {
            const PATH: &'static str = $path;
            const NAME: &'static str = $name;
            type Create = $create;
            type Update = $update;

            fn id(&self) -> i64 {
                self.id
            }
        }
    };
}

impl_resource!(Customer, "customers", "customer", CustomerCreate, CustomerUpdate);
impl_resource!(CustomerGroup, "customer-groups", "customer group", CustomerGroupCreate, CustomerGroupUpdate);
impl_resource!(Ingredient, "ingredients", "ingredient", IngredientCreate, IngredientUpdate);
impl_resource!(Supplier, "suppliers", "supplier", SupplierCreate, SupplierUpdate);
impl_resource!(Warehouse, "warehouses", "warehouse", WarehouseCreate, WarehouseUpdate);
impl_resource!(LoyaltyProgram, "loyalty-programs", "loyalty program", LoyaltyProgramCreate, LoyaltyProgramUpdate);
impl_resource!(Promotion, "promotions", "promotion", PromotionCreate, PromotionUpdate);
impl_resource!(TechnicalCard, "technical-cards", "technical card", TechnicalCardCreate, TechnicalCardUpdate);
impl_resource!(Transaction, "transactions", "transaction", TransactionCreate, TransactionUpdate);

impl<H: HttpClient> PosClient<H> {
    /// Whole collection; list screens filter it locally
    pub async fn list<R: Resource>(&self) -> ClientResult<Vec<R>> {
        self.http.get(R::PATH).await
    }

    pub async fn get<R: Resource>(&self, id: i64) -> ClientResult<R> {
        self.http.get(&format!("{}/{id}", R::PATH)).await
    }

    pub async fn create<R: Resource>(&self, data: &R::Create) -> ClientResult<R> {
        let created: R = self.http.post(R::PATH, data).await?;
        tracing::info!(resource = R::NAME, id = created.id(), "Record created");
        Ok(created)
    }

    pub async fn update<R: Resource>(&self, id: i64, data: &R::Update) -> ClientResult<R> {
        let updated: R = self.http.put(&format!("{}/{id}", R::PATH), data).await?;
        tracing::info!(resource = R::NAME, id, "Record updated");
        Ok(updated)
    }

    pub async fn delete<R: Resource>(&self, id: i64) -> ClientResult<()> {
        let _: IgnoredAny = self.http.delete(&format!("{}/{id}", R::PATH)).await?;
        tracing::info!(resource = R::NAME, id, "Record deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Customer::PATH, "customers");
        assert_eq!(CustomerGroup::PATH, "customer-groups");
        assert_eq!(LoyaltyProgram::PATH, "loyalty-programs");
        assert_eq!(TechnicalCard::PATH, "technical-cards");
    }
}
