use serde::Deserialize;

use crate::error::{AppError, BLESSING_FIELDS_REQUIRED};

/// Request body for leaving a blessing.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateBlessingRequest {
    #[schema(example = "Alice")]
    pub name: Option<String>,
    #[schema(example = "Congrats!")]
    pub message: Option<String>,
}

impl CreateBlessingRequest {
    /// Trimmed `(name, message)`, both required to be non-empty.
    pub fn validate(&self) -> Result<(&str, &str), AppError> {
        let name = self.name.as_deref().map(str::trim).unwrap_or_default();
        let message = self.message.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() || message.is_empty() {
            return Err(AppError::Validation(BLESSING_FIELDS_REQUIRED.into()));
        }
        Ok((name, message))
    }
}
