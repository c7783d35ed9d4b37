//! Gift vouchers service

use rand::Rng;
use validator::Validate;

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::gift_voucher::{CreateGiftVoucher, GiftVoucher, UpdateGiftVoucher},
    repository::Repository,
};

/// Characters used in generated voucher codes (no 0/O or 1/I, staff read
/// these over the phone)
const CODE_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const CODE_LENGTH: usize = 10;

#[derive(Clone)]
pub struct GiftVouchersService {
    repository: Repository,
}

impl GiftVouchersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<GiftVoucher>> {
        self.repository.gift_vouchers.list().await
    }

    pub async fn get(&self, id: i32) -> AppResult<GiftVoucher> {
        self.repository.gift_vouchers.get_by_id(id).await
    }

    pub async fn create(&self, data: CreateGiftVoucher) -> AppResult<GiftVoucher> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let code = match data.code {
            Some(ref code) => {
                if self.repository.gift_vouchers.code_exists(code).await? {
                    return Err(AppError::Conflict(format!(
                        "Voucher code '{}' already exists",
                        code
                    )));
                }
                code.clone()
            }
            None => self.generate_code().await?,
        };

        self.repository.gift_vouchers.create(&code, &data).await
    }

    pub async fn update(&self, id: i32, data: UpdateGiftVoucher) -> AppResult<GiftVoucher> {
        self.repository.gift_vouchers.update(id, &data).await
    }

    /// Redeem a voucher; a voucher can only be used once
    pub async fn use_voucher(&self, id: i32) -> AppResult<GiftVoucher> {
        let voucher = self.repository.gift_vouchers.get_by_id(id).await?;
        if voucher.used {
            return Err(AppError::BusinessRule(
                ErrorCode::VoucherAlreadyUsed,
                format!("Voucher '{}' has already been used", voucher.code),
            ));
        }
        self.repository.gift_vouchers.mark_used(id).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.gift_vouchers.delete(id).await
    }

    async fn generate_code(&self) -> AppResult<String> {
        loop {
            let code: String = {
                let mut rng = rand::thread_rng();
                (0..CODE_LENGTH)
                    .map(|_| CODE_CHARSET[rng.gen_range(0..CODE_CHARSET.len())] as char)
                    .collect()
            };
            if !self.repository.gift_vouchers.code_exists(&code).await? {
                return Ok(code);
            }
        }
    }
}
