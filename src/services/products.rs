//! Products service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::product::{CreateProduct, Product, ProductBath, UpdateProduct},
    repository::Repository,
};

#[derive(Clone)]
pub struct ProductsService {
    repository: Repository,
}

impl ProductsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, include_hidden: bool) -> AppResult<Vec<Product>> {
        self.repository.products.list(include_hidden).await
    }

    pub async fn get(&self, id: i32) -> AppResult<Product> {
        self.repository.products.get_by_id(id).await
    }

    pub async fn baths(&self, id: i32) -> AppResult<Vec<ProductBath>> {
        // 404 on a missing product rather than an empty composition
        self.repository.products.get_by_id(id).await?;
        self.repository.products.baths_for_product(id).await
    }

    pub async fn create(&self, data: CreateProduct) -> AppResult<Product> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        validate_bath_lines(&data.baths)?;
        self.repository.products.create(&data).await
    }

    pub async fn update(&self, id: i32, data: UpdateProduct) -> AppResult<Product> {
        if let Some(ref baths) = data.baths {
            validate_bath_lines(baths)?;
        }
        self.repository.products.update(id, &data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.products.delete(id).await
    }
}

fn validate_bath_lines(baths: &[crate::models::product::BathLine]) -> AppResult<()> {
    for line in baths {
        if !line.validate_duration() {
            return Err(AppError::Validation(format!(
                "invalid massage duration {} (allowed: 0, 15, 30, 60)",
                line.massage_duration
            )));
        }
        if line.quantity < 1 {
            return Err(AppError::Validation(
                "bath quantity must be at least 1".to_string(),
            ));
        }
    }
    Ok(())
}

/// Massage minutes of a product's bath composition.
///
/// Each line with an actual massage contributes its duration once; the line's
/// `quantity` does not multiply the minutes. Two simultaneous 60' massages on
/// one line still consume 60 minutes of massagist time in the grid.
pub fn massage_minutes(baths: &[ProductBath]) -> i32 {
    baths
        .iter()
        .filter(|b| b.massage_duration > 0)
        .map(|b| i32::from(b.massage_duration))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::MassageType;
    use rust_decimal::Decimal;

    fn bath(massage_type: MassageType, duration: i16, quantity: i32) -> ProductBath {
        ProductBath {
            massage_type,
            massage_duration: duration,
            quantity,
            name: "test".to_string(),
            price: Decimal::ZERO,
        }
    }

    #[test]
    fn minutes_count_once_per_line_regardless_of_quantity() {
        let baths = vec![
            bath(MassageType::Relax, 60, 2),
            bath(MassageType::Rock, 15, 1),
        ];
        assert_eq!(massage_minutes(&baths), 75);
    }

    #[test]
    fn bath_only_lines_contribute_no_minutes() {
        let baths = vec![bath(MassageType::None, 0, 4)];
        assert_eq!(massage_minutes(&baths), 0);
    }

    #[test]
    fn empty_composition_is_zero() {
        assert_eq!(massage_minutes(&[]), 0);
    }
}
