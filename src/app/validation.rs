use rust_decimal::Decimal;

use crate::{
    app::resource::beer::BeerDto,
    error::resource::{ValidationError, ValidationErrorKind, ValidationFieldError},
};

pub const BEER_NAME_MAX_LENGTH: usize = 100;

/// Checks the client supplied fields of a beer before it reaches the service.
///
/// Every violation is collected, so a single response lists all invalid fields.
pub fn beer(dto: &BeerDto) -> Result<(), ValidationError<BeerDto>> {
    let mut errors = Vec::new();

    let name = dto.beer_name.trim();
    if name.is_empty() {
        errors.push(ValidationFieldError::new(
            "base::string",
            dto.beer_name.clone(),
            "/beerName".into(),
            vec![ValidationErrorKind::MinLength(1)],
        ));
    } else if dto.beer_name.chars().count() > BEER_NAME_MAX_LENGTH {
        errors.push(ValidationFieldError::new(
            "base::string",
            dto.beer_name.clone(),
            "/beerName".into(),
            vec![ValidationErrorKind::MaxLength(BEER_NAME_MAX_LENGTH as u64)],
        ));
    }

    if dto.upc <= 0 {
        errors.push(ValidationFieldError::new(
            "base::i64",
            dto.upc.to_string(),
            "/upc".into(),
            vec![ValidationErrorKind::Positive],
        ));
    }

    if dto.price <= Decimal::ZERO {
        errors.push(ValidationFieldError::new(
            "base::decimal",
            dto.price.to_string(),
            "/price".into(),
            vec![ValidationErrorKind::Positive],
        ));
    }

    if !errors.is_empty() {
        return Err(ValidationError::from_resource(dto.clone(), errors));
    }

    Ok(())
}
