//! Gift vouchers repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::gift_voucher::{CreateGiftVoucher, GiftVoucher, UpdateGiftVoucher},
};

#[derive(Clone)]
pub struct GiftVouchersRepository {
    pool: Pool<Postgres>,
}

impl GiftVouchersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all vouchers, newest first
    pub async fn list(&self) -> AppResult<Vec<GiftVoucher>> {
        let rows = sqlx::query_as::<_, GiftVoucher>(
            "SELECT * FROM gift_vouchers ORDER BY created_at DESC"
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get voucher by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<GiftVoucher> {
        sqlx::query_as::<_, GiftVoucher>("SELECT * FROM gift_vouchers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(ErrorCode::NoSuchVoucher, format!("Gift voucher {} not found", id)))
    }

    /// Whether a voucher code is already taken
    pub async fn code_exists(&self, code: &str) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM gift_vouchers WHERE code = $1"
        )
        .bind(code)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    /// Create a voucher with an already-resolved unique code
    pub async fn create(&self, code: &str, data: &CreateGiftVoucher) -> AppResult<GiftVoucher> {
        let row = sqlx::query_as::<_, GiftVoucher>(
            r#"
            INSERT INTO gift_vouchers
                (code, price, recipient_email, recipient_name, recipient_surname,
                 gift_name, gift_description, buyer_client_id, product_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(code)
        .bind(data.price)
        .bind(&data.recipient_email)
        .bind(&data.recipient_name)
        .bind(&data.recipient_surname)
        .bind(&data.gift_name)
        .bind(&data.gift_description)
        .bind(data.buyer_client_id)
        .bind(data.product_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a voucher (only provided fields)
    pub async fn update(&self, id: i32, data: &UpdateGiftVoucher) -> AppResult<GiftVoucher> {
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

        add_field!(data.price, "price");
        add_field!(data.recipient_email, "recipient_email");
        add_field!(data.recipient_name, "recipient_name");
        add_field!(data.recipient_surname, "recipient_surname");
        add_field!(data.gift_name, "gift_name");
        add_field!(data.gift_description, "gift_description");
        add_field!(data.product_id, "product_id");

        let query = format!(
            "UPDATE gift_vouchers SET {} WHERE id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, GiftVoucher>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.price);
        bind_field!(data.recipient_email);
        bind_field!(data.recipient_name);
        bind_field!(data.recipient_surname);
        bind_field!(data.gift_name);
        bind_field!(data.gift_description);
        bind_field!(data.product_id);

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(ErrorCode::NoSuchVoucher, format!("Gift voucher {} not found", id)))
    }

    /// Mark a voucher as used
    pub async fn mark_used(&self, id: i32) -> AppResult<GiftVoucher> {
        sqlx::query_as::<_, GiftVoucher>(
            "UPDATE gift_vouchers SET used = TRUE, updated_at = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(ErrorCode::NoSuchVoucher, format!("Gift voucher {} not found", id)))
    }

    /// Delete a voucher
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM gift_vouchers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(ErrorCode::NoSuchVoucher, format!("Gift voucher {} not found", id)));
        }
        Ok(())
    }
}
