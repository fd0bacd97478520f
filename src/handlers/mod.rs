//! HTTP handlers, one module per resource area.

pub mod author;
pub mod book;
pub mod pages;

use mongodb::bson::oid::ObjectId;

use crate::error::AppError;

/// Parse a path or form identifier into a document id.
pub(crate) fn parse_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw.trim())
        .map_err(|_| AppError::BadRequest(format!("invalid id '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_trims_and_accepts_hex() {
        let id = ObjectId::new();
        assert_eq!(parse_id(&format!(" {} ", id.to_hex())).unwrap(), id);
    }

    #[test]
    fn parse_id_rejects_garbage() {
        assert!(matches!(parse_id("not-an-id"), Err(AppError::BadRequest(_))));
    }
}
