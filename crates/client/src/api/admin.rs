//! Back-office endpoints, admin role required server-side.
//!
//! Catalog mutations invalidate the client's catalog cache so the
//! storefront views read fresh data on their next fetch.

use tracing::instrument;

use greenbasket_core::{
    Category, CategoryCreateRequest, CategoryId, MessageResponse, Product, ProductCreateRequest,
    ProductId, ProductUpdateRequest, Recipe, RecipeCreateRequest, RecipeId, Role,
    RoleUpdateRequest, User, UserId,
};

use super::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    // =========================================================================
    // Users
    // =========================================================================

    /// List all user accounts. `GET /admin/users`
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is not an admin or the request
    /// fails.
    #[instrument(skip(self))]
    pub async fn admin_users(&self) -> Result<Vec<User>, ApiError> {
        self.get("/admin/users").await
    }

    /// Change a user's role. `PATCH /admin/users/{id}/role`
    ///
    /// # Errors
    ///
    /// Returns an error if the user is unknown or the request fails.
    #[instrument(skip(self), fields(user_id = %id, role = %role))]
    pub async fn update_user_role(&self, id: UserId, role: Role) -> Result<User, ApiError> {
        let request = RoleUpdateRequest { role };
        self.patch(&format!("/admin/users/{id}/role"), &request)
            .await
    }

    /// Delete a user account. `DELETE /admin/users/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the user is unknown or the request fails.
    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn delete_user(&self, id: UserId) -> Result<MessageResponse, ApiError> {
        self.delete(&format!("/admin/users/{id}")).await
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Create a product. `POST /admin/products`
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the product or the request
    /// fails.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_product(
        &self,
        request: &ProductCreateRequest,
    ) -> Result<Product, ApiError> {
        let product = self.post("/admin/products", request).await?;
        self.invalidate_catalog().await;
        Ok(product)
    }

    /// Update a product. `PUT /admin/products/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the product is unknown or the request fails.
    #[instrument(skip(self, request), fields(product_id = %id))]
    pub async fn update_product(
        &self,
        id: ProductId,
        request: &ProductUpdateRequest,
    ) -> Result<Product, ApiError> {
        let product = self
            .put(&format!("/admin/products/{id}"), request)
            .await?;
        self.invalidate_catalog().await;
        Ok(product)
    }

    /// Delete a product. `DELETE /admin/products/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the product is unknown or the request fails.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete_product(&self, id: ProductId) -> Result<MessageResponse, ApiError> {
        let response = self.delete(&format!("/admin/products/{id}")).await?;
        self.invalidate_catalog().await;
        Ok(response)
    }

    // =========================================================================
    // Categories
    // =========================================================================

    /// Create a category. `POST /admin/categories`
    ///
    /// # Errors
    ///
    /// Returns an error if the name collides or the request fails.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_category(
        &self,
        request: &CategoryCreateRequest,
    ) -> Result<Category, ApiError> {
        let category = self.post("/admin/categories", request).await?;
        self.invalidate_catalog().await;
        Ok(category)
    }

    /// Rename a category. `PUT /admin/categories/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the category is unknown or the request fails.
    #[instrument(skip(self), fields(category_id = %id))]
    pub async fn update_category(&self, id: CategoryId, name: &str) -> Result<Category, ApiError> {
        let request = CategoryCreateRequest {
            name: name.to_string(),
        };
        let category = self
            .put(&format!("/admin/categories/{id}"), &request)
            .await?;
        self.invalidate_catalog().await;
        Ok(category)
    }

    /// Delete a category. `DELETE /admin/categories/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the category is unknown or the request fails.
    #[instrument(skip(self), fields(category_id = %id))]
    pub async fn delete_category(&self, id: CategoryId) -> Result<MessageResponse, ApiError> {
        let response = self.delete(&format!("/admin/categories/{id}")).await?;
        self.invalidate_catalog().await;
        Ok(response)
    }

    // =========================================================================
    // Recipes
    // =========================================================================

    /// Create a recipe. `POST /admin/recipes`
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the recipe or the request
    /// fails.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_recipe(&self, request: &RecipeCreateRequest) -> Result<Recipe, ApiError> {
        self.post("/admin/recipes", request).await
    }

    /// Update a recipe. `PUT /admin/recipes/{id}`
    ///
    /// Part of the library surface only; the bundled CLI creates and
    /// deletes recipes but has no update form.
    ///
    /// # Errors
    ///
    /// Returns an error if the recipe is unknown or the request fails.
    #[instrument(skip(self, request), fields(recipe_id = %id))]
    pub async fn update_recipe(
        &self,
        id: RecipeId,
        request: &RecipeCreateRequest,
    ) -> Result<Recipe, ApiError> {
        self.put(&format!("/admin/recipes/{id}"), request).await
    }

    /// Delete a recipe. `DELETE /admin/recipes/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the recipe is unknown or the request fails.
    #[instrument(skip(self), fields(recipe_id = %id))]
    pub async fn delete_recipe(&self, id: RecipeId) -> Result<MessageResponse, ApiError> {
        self.delete(&format!("/admin/recipes/{id}")).await
    }
}
