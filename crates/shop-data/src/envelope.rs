//! The `{success, data, message, error}` wrapper most endpoints reply with.

use crate::FetchError;
use serde::de::DeserializeOwned;
use serde::Deserialize;

const UNKNOWN_ERROR: &str = "Unknown error";

/// Response wrapper. Every field may be missing on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: String,
    pub error: Option<String>,
}

impl<T> Default for ApiEnvelope<T> {
    fn default() -> Self {
        Self {
            success: false,
            data: None,
            message: String::new(),
            error: None,
        }
    }
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload, or turn `success: false` into `FetchError::Api`.
    ///
    /// A successful envelope with no `data` yields `None`; list callers map
    /// that to an empty list.
    pub fn into_result(self) -> Result<Option<T>, FetchError> {
        if self.success {
            return Ok(self.data);
        }

        let reason = self
            .error
            .filter(|e| !e.trim().is_empty())
            .or_else(|| Some(self.message).filter(|m| !m.trim().is_empty()))
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
        Err(FetchError::Api(reason))
    }
}

impl<T> ApiEnvelope<Vec<T>> {
    pub fn into_list(self) -> Result<Vec<T>, FetchError> {
        Ok(self.into_result()?.unwrap_or_default())
    }
}

/// Decode a single-record body that may or may not be enveloped.
///
/// Detail endpoints answer with the bare record, list endpoints with the
/// envelope; a body with a top-level `success` key is treated as enveloped.
pub fn decode_record<T: DeserializeOwned>(body: &[u8]) -> Result<T, FetchError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| FetchError::ParseError(e.to_string()))?;

    let enveloped = value.get("success").is_some();
    if enveloped {
        let envelope: ApiEnvelope<T> =
            serde_json::from_value(value).map_err(|e| FetchError::ParseError(e.to_string()))?;
        envelope
            .into_result()?
            .ok_or_else(|| FetchError::ParseError("envelope has no data".to_string()))
    } else {
        serde_json::from_value(value).map_err(|e| FetchError::ParseError(e.to_string()))
    }
}

/// Decode a list body that may be a bare JSON array or an envelope.
pub fn decode_list<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, FetchError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| FetchError::ParseError(e.to_string()))?;

    if value.is_array() {
        serde_json::from_value(value).map_err(|e| FetchError::ParseError(e.to_string()))
    } else {
        let envelope: ApiEnvelope<Vec<T>> =
            serde_json::from_value(value).map_err(|e| FetchError::ParseError(e.to_string()))?;
        envelope.into_list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_commerce::catalog::Product;

    fn parse(body: &str) -> ApiEnvelope<Vec<Product>> {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_success_with_data() {
        let products = parse(
            r#"{"success":true,"data":[{"id":"p1","productName":"Runner","price":1250000}],"message":"ok"}"#,
        )
        .into_list()
        .unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Runner");
        assert_eq!(products[0].price.amount(), 1_250_000);
    }

    #[test]
    fn test_success_without_data_is_empty() {
        assert_eq!(parse(r#"{"success":true}"#).into_list().unwrap(), vec![]);
    }

    #[test]
    fn test_failure_prefers_error_field() {
        let err = parse(r#"{"success":false,"message":"nope","error":"token expired"}"#)
            .into_list()
            .unwrap_err();
        assert_eq!(err, FetchError::Api("token expired".to_string()));
    }

    #[test]
    fn test_failure_falls_back_to_message() {
        let err = parse(r#"{"success":false,"message":"nope","error":null}"#)
            .into_list()
            .unwrap_err();
        assert_eq!(err, FetchError::Api("nope".to_string()));
    }

    #[test]
    fn test_missing_fields_default_to_failure() {
        let err = parse("{}").into_list().unwrap_err();
        assert_eq!(err, FetchError::Api(UNKNOWN_ERROR.to_string()));
    }

    #[test]
    fn test_decode_record_bare_and_enveloped() {
        let bare: Product = decode_record(br#"{"id":"p1","productName":"Runner","price":"99000"}"#).unwrap();
        assert_eq!(bare.price.amount(), 99_000);

        let wrapped: Product =
            decode_record(br#"{"success":true,"data":{"id":"p2","productName":"Boot","price":5}}"#).unwrap();
        assert_eq!(wrapped.id.as_str(), "p2");

        let failed = decode_record::<Product>(br#"{"success":false,"message":"Product not found"}"#);
        assert_eq!(failed, Err(FetchError::Api("Product not found".to_string())));
    }

    #[test]
    fn test_decode_list_accepts_both_shapes() {
        let bare: Vec<Product> = decode_list(br#"[{"id":"p1"},{"id":"p2"}]"#).unwrap();
        assert_eq!(bare.len(), 2);

        let wrapped: Vec<Product> = decode_list(br#"{"success":true,"data":[{"id":"p1"}]}"#).unwrap();
        assert_eq!(wrapped.len(), 1);

        assert!(matches!(decode_list::<Product>(b"42"), Err(FetchError::ParseError(_))));
    }

    #[test]
    fn test_decode_record_invalid_json() {
        assert!(matches!(decode_record::<Product>(b"oops"), Err(FetchError::ParseError(_))));
    }
}
