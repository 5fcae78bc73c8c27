use crate::core::constants::MAX_EXPENSE_AMOUNT;
use crate::core::errors::SplitwiseError;
use crate::core::models::Money;

pub fn validate_string_input(field: &str, value: &str, max_length: usize) -> Result<(), SplitwiseError> {
    if value.trim().is_empty() {
        return Err(SplitwiseError::invalid_input(
            field,
            format!("Invalid {}", field),
            format!("{} cannot be empty", field),
        ));
    }
    if value.chars().count() > max_length {
        return Err(SplitwiseError::invalid_input(
            field,
            format!("{} Too Long", field),
            format!("{} cannot exceed {} characters", field, max_length),
        ));
    }
    if value.chars().any(|c| c.is_control() || "<>{}[]".contains(c)) {
        return Err(SplitwiseError::invalid_input(
            field,
            format!("Invalid {}", field),
            format!("{} contains invalid characters", field),
        ));
    }
    Ok(())
}

/// Checks a caller-supplied amount and converts it to minor units.
pub fn validate_amount_input(field: &str, amount: f64) -> Result<Money, SplitwiseError> {
    if !amount.is_finite() {
        return Err(SplitwiseError::invalid_input(
            field,
            "Invalid Amount",
            "Amount must be a finite number",
        ));
    }
    if amount <= 0.0 {
        return Err(SplitwiseError::invalid_input(
            field,
            "Invalid Amount",
            "Amount must be greater than 0",
        ));
    }
    if amount > MAX_EXPENSE_AMOUNT {
        return Err(SplitwiseError::invalid_input(
            field,
            "Amount Too Large",
            "Amount cannot exceed 1,000,000",
        ));
    }
    let money = Money::from_decimal(amount).ok_or_else(|| {
        SplitwiseError::invalid_input(
            field,
            "Invalid Amount",
            "Amount cannot have more than 2 decimal places",
        )
    })?;
    // Values far below a cent round to zero inside the sub-cent tolerance.
    if !money.is_positive() {
        return Err(SplitwiseError::invalid_input(
            field,
            "Invalid Amount",
            "Amount must be greater than 0",
        ));
    }
    Ok(money)
}
