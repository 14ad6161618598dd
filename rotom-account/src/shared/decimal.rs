use rust_decimal::Decimal;

use crate::error::NormaliseError;

// Parse a decimal string exactly, keeping the scale the exchange sent.
pub fn parse_decimal(field: &'static str, value: &str) -> Result<Decimal, NormaliseError> {
    value
        .parse::<Decimal>()
        .map_err(|_| NormaliseError::InvalidDecimal {
            field,
            value: value.to_owned(),
        })
}

// Parse a decimal that must be strictly positive, e.g. an order volume.
pub fn parse_positive_amount(
    id: &str,
    field: &'static str,
    value: &str,
) -> Result<Decimal, NormaliseError> {
    let amount = parse_decimal(field, value)?;
    if amount <= Decimal::ZERO {
        return Err(NormaliseError::NonPositiveAmount {
            id: id.to_owned(),
            amount: value.to_owned(),
        });
    }

    Ok(amount)
}

// Parse a decimal where zero means "not available".
pub fn parse_non_zero(field: &'static str, value: &str) -> Result<Option<Decimal>, NormaliseError> {
    let decimal = parse_decimal(field, value)?;
    Ok((!decimal.is_zero()).then_some(decimal))
}
