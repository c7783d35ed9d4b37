//! Products repository for database operations

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::product::{BathLine, BathType, CreateProduct, MassageType, Product, ProductBath, UpdateProduct},
};

#[derive(Clone)]
pub struct ProductsRepository {
    pool: Pool<Postgres>,
}

impl ProductsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List products; hidden (auto-created) products are excluded unless asked for
    pub async fn list(&self, include_hidden: bool) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE visible OR $1 ORDER BY name"
        )
        .bind(include_hidden)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get product by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Product> {
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(ErrorCode::NoSuchProduct, format!("Product {} not found", id)))
    }

    /// Bath composition of a product.
    ///
    /// This is the input of the schedule engine's massage-minute lookup.
    pub async fn baths_for_product(&self, product_id: i32) -> AppResult<Vec<ProductBath>> {
        let rows = sqlx::query_as::<_, ProductBath>(
            r#"
            SELECT bt.massage_type, bt.massage_duration, pb.quantity, bt.name, bt.price
            FROM product_baths pb
            JOIN bath_types bt ON pb.bath_type_id = bt.id
            WHERE pb.product_id = $1
            ORDER BY bt.massage_duration DESC, bt.name
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Find a bath type by massage type and duration, creating it if absent
    pub async fn get_or_create_bath_type(
        &self,
        massage_type: MassageType,
        massage_duration: i16,
        name: &str,
        price: Decimal,
    ) -> AppResult<BathType> {
        if let Some(existing) = sqlx::query_as::<_, BathType>(
            "SELECT * FROM bath_types WHERE massage_type = $1 AND massage_duration = $2",
        )
        .bind(massage_type)
        .bind(massage_duration)
        .fetch_optional(&self.pool)
        .await?
        {
            return Ok(existing);
        }

        let row = sqlx::query_as::<_, BathType>(
            r#"
            INSERT INTO bath_types (name, massage_type, massage_duration, baths_duration, price)
            VALUES ($1, $2, $3, '02:00:00', $4)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(massage_type)
        .bind(massage_duration)
        .bind(price)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Create a product with its bath composition
    pub async fn create(&self, data: &CreateProduct) -> AppResult<Product> {
        // bath types are shared reference data, resolved before the product tx
        let mut bath_type_ids = Vec::with_capacity(data.baths.len());
        for line in &data.baths {
            let bt = self
                .get_or_create_bath_type(
                    line.massage_type,
                    line.massage_duration,
                    &bath_type_name(line),
                    Decimal::ZERO,
                )
                .await?;
            bath_type_ids.push((bt.id, line.quantity));
        }

        let mut tx = self.pool.begin().await?;

        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, observation, description, price, uses_capacity, uses_massagist, visible)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.observation)
        .bind(&data.description)
        .bind(data.price)
        .bind(data.uses_capacity)
        .bind(data.uses_massagist)
        .bind(data.visible)
        .fetch_one(&mut *tx)
        .await?;

        for (bath_type_id, quantity) in bath_type_ids {
            sqlx::query(
                "INSERT INTO product_baths (product_id, bath_type_id, quantity) VALUES ($1, $2, $3)",
            )
            .bind(product.id)
            .bind(bath_type_id)
            .bind(quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(product)
    }

    /// Update a product; a provided bath list replaces the whole composition
    pub async fn update(&self, id: i32, data: &UpdateProduct) -> AppResult<Product> {
        let now = Utc::now();
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.name, "name");
        add_field!(data.observation, "observation");
        add_field!(data.description, "description");
        add_field!(data.price, "price");
        add_field!(data.uses_capacity, "uses_capacity");
        add_field!(data.uses_massagist, "uses_massagist");
        add_field!(data.visible, "visible");

        let query = format!("UPDATE products SET {} WHERE id = {} RETURNING *", sets.join(", "), id);

        let mut builder = sqlx::query_as::<_, Product>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.name);
        bind_field!(data.observation);
        bind_field!(data.description);
        bind_field!(data.price);
        bind_field!(data.uses_capacity);
        bind_field!(data.uses_massagist);
        bind_field!(data.visible);

        let product = builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(ErrorCode::NoSuchProduct, format!("Product {} not found", id)))?;

        if let Some(ref baths) = data.baths {
            self.replace_baths(id, baths).await?;
        }

        Ok(product)
    }

    /// Replace the bath composition of a product
    async fn replace_baths(&self, product_id: i32, baths: &[BathLine]) -> AppResult<()> {
        let mut bath_type_ids = Vec::with_capacity(baths.len());
        for line in baths {
            let bt = self
                .get_or_create_bath_type(
                    line.massage_type,
                    line.massage_duration,
                    &bath_type_name(line),
                    Decimal::ZERO,
                )
                .await?;
            bath_type_ids.push((bt.id, line.quantity));
        }

        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM product_baths WHERE product_id = $1")
            .bind(product_id)
            .execute(&mut *tx)
            .await?;
        for (bath_type_id, quantity) in bath_type_ids {
            sqlx::query(
                "INSERT INTO product_baths (product_id, bath_type_id, quantity) VALUES ($1, $2, $3)",
            )
            .bind(product_id)
            .bind(bath_type_id)
            .bind(quantity)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    /// Delete a product
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(ErrorCode::NoSuchProduct, format!("Product {} not found", id)));
        }
        Ok(())
    }
}

/// Display name of an auto-created bath type, e.g. "Relax 60'"
pub fn bath_type_name(line: &BathLine) -> String {
    let kind = match line.massage_type {
        MassageType::Relax => "Relax",
        MassageType::Rock => "Rock",
        MassageType::Exfoliation => "Exfoliation",
        MassageType::None => "Bath only",
    };
    if line.massage_duration == 0 {
        kind.to_string()
    } else {
        format!("{} {}'", kind, line.massage_duration)
    }
}
