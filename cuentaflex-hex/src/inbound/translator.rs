//! Outcome to DIN response translation.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use cuentaflex_types::{DinError, DinHeader, DinResponse, DomainError, Outcome, TransactionRequest};

use super::enricher::DetailEnricher;
use super::registry::{ErrorStatusMap, StatusCategory};

/// Status plus envelope produced for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatedResponse<T> {
    pub status: StatusCategory,
    pub envelope: DinResponse<T>,
}

/// Code sent when the envelope header decoded but the body did not.
pub const INVALID_REQUEST: &str = "INVALID_REQUEST";

impl<T> TranslatedResponse<T> {
    /// Bad request answered inside a DIN envelope, echoing `header`.
    pub fn invalid_request(header: DinHeader, message: impl Into<String>) -> Self {
        Self {
            status: StatusCategory::BadRequest,
            envelope: DinResponse::failure(
                header,
                DinError {
                    code: INVALID_REQUEST.to_string(),
                    message: message.into(),
                    details: Vec::new(),
                },
            ),
        }
    }
}

impl<T: Serialize> IntoResponse for TranslatedResponse<T> {
    fn into_response(self) -> Response {
        (self.status.status_code(), Json(self.envelope)).into_response()
    }
}

/// Builds the response envelope for a use case outcome.
///
/// Translation never fails: if the error details cannot be computed the
/// response is still sent, with the resolved status and empty details.
#[derive(Clone)]
pub struct ResponseTranslator {
    registry: ErrorStatusMap,
    enricher: DetailEnricher,
}

impl ResponseTranslator {
    pub fn new(registry: ErrorStatusMap, enricher: DetailEnricher) -> Self {
        Self { registry, enricher }
    }

    pub fn translate<T>(
        &self,
        header: DinHeader,
        outcome: Outcome<T>,
        request: &TransactionRequest,
    ) -> TranslatedResponse<T> {
        match outcome {
            Outcome::Success(value) => TranslatedResponse {
                status: StatusCategory::Ok,
                envelope: DinResponse::success(header, value),
            },
            Outcome::Failure(error) => self.translate_failure(header, error, request),
        }
    }

    fn translate_failure<T>(
        &self,
        header: DinHeader,
        error: DomainError,
        request: &TransactionRequest,
    ) -> TranslatedResponse<T> {
        let status = self.registry.status_for(&error.code);

        if status == StatusCategory::Internal {
            tracing::error!(
                code = %error.code,
                registered = self.registry.is_registered(&error.code),
                message = %error.message,
                "use case failed with an internal error"
            );
        } else {
            tracing::info!(code = %error.code, ?status, "use case rejected the request");
        }

        let details = self
            .enricher
            .details_for_error(&error, request)
            .unwrap_or_else(|err| {
                tracing::warn!(code = %error.code, error = %err, "dropping error details");
                Vec::new()
            });

        TranslatedResponse {
            status,
            envelope: DinResponse::failure(
                header,
                DinError {
                    code: error.code.to_string(),
                    message: error.message,
                    details,
                },
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;
    use serde_json::json;

    use cuentaflex_types::{AccountId, FeesValues};

    use super::*;

    fn translator(fees: FeesValues) -> ResponseTranslator {
        ResponseTranslator::new(
            ErrorStatusMap::for_deposits(),
            DetailEnricher::new(Arc::new(fees)),
        )
    }

    fn configured() -> ResponseTranslator {
        translator(FeesValues::new().with_deposit_from_atm(Decimal::new(250, 2)))
    }

    fn header() -> DinHeader {
        DinHeader {
            device: Some("ATM-0042".into()),
            language: Some("es".into()),
            uuid: Some("7d1c3a52-0f9e-4c11-9a57-1b1c1d1e1f10".into()),
            ip: Some("10.0.0.12".into()),
            transaction_time: Some("2024-05-01T10:15:30Z".into()),
        }
    }

    fn request(account_id: &str, amount: i64) -> TransactionRequest {
        TransactionRequest::new(AccountId::from(account_id), Decimal::new(amount, 0))
    }

    #[test]
    fn test_success_carries_value_and_header() {
        let response = configured().translate(
            header(),
            Outcome::success(json!({ "newBalance": 600 })),
            &request("A1", 100),
        );

        assert_eq!(response.status, StatusCategory::Ok);
        assert_eq!(response.envelope.header(), &header());
        assert_eq!(response.envelope.body(), Some(&json!({ "newBalance": 600 })));
        assert!(response.envelope.error().is_none());
    }

    #[test]
    fn test_invalid_amount() {
        let outcome: Outcome<()> =
            Outcome::failure(DomainError::invalid_amount("Amount must be positive"));
        let response = configured().translate(header(), outcome, &request("A1", -5));

        assert_eq!(response.status, StatusCategory::BadRequest);
        let error = response.envelope.error().unwrap();
        assert_eq!(error.code, "INVALID_AMOUNT");
        assert_eq!(error.message, "Amount must be positive");
        assert_eq!(error.details, ["2.50"]);
        assert_eq!(response.envelope.header(), &header());
    }

    #[test]
    fn test_account_not_found() {
        let outcome: Outcome<()> = Outcome::failure(DomainError::account_not_found());
        let response = configured().translate(header(), outcome, &request("ZZZ", 50));

        assert_eq!(response.status, StatusCategory::NotFound);
        assert_eq!(response.envelope.error().unwrap().details, ["ZZZ"]);
    }

    #[test]
    fn test_unregistered_code_is_internal() {
        let outcome: Outcome<()> =
            Outcome::failure(DomainError::new("UNEXPECTED_DB_ERROR", "connection reset"));
        let response = configured().translate(header(), outcome, &request("A1", 10));

        assert_eq!(response.status, StatusCategory::Internal);
        let error = response.envelope.error().unwrap();
        assert_eq!(error.code, "UNEXPECTED_DB_ERROR");
        assert!(error.details.is_empty());
    }

    #[test]
    fn test_unknown_code_keeps_its_wire_form() {
        let outcome: Outcome<()> = Outcome::failure(DomainError::new("VELOCITY_CHECK", "held"));
        let response = configured().translate(header(), outcome, &request("A1", 10));

        assert_eq!(response.status, StatusCategory::Internal);
        assert_eq!(response.envelope.error().unwrap().code, "VELOCITY_CHECK");
    }

    #[test]
    fn test_enrichment_failure_keeps_status_and_drops_details() {
        let outcome: Outcome<()> = Outcome::failure(DomainError::invalid_amount("too low"));
        let response = translator(FeesValues::default()).translate(
            header(),
            outcome,
            &request("A1", 1),
        );

        assert_eq!(response.status, StatusCategory::BadRequest);
        let error = response.envelope.error().unwrap();
        assert_eq!(error.code, "INVALID_AMOUNT");
        assert!(error.details.is_empty());
        assert_eq!(response.envelope.header(), &header());
    }

    #[test]
    fn test_translation_is_deterministic() {
        let translator = configured();
        let outcome: Outcome<()> = Outcome::failure(DomainError::account_not_found());
        let req = request("ZZZ", 50);

        let first = translator.translate(header(), outcome.clone(), &req);
        let second = translator.translate(header(), outcome, &req);

        assert_eq!(
            serde_json::to_vec(&first.envelope).unwrap(),
            serde_json::to_vec(&second.envelope).unwrap()
        );
        assert_eq!(first.status, second.status);
    }

    #[test]
    fn test_empty_header_is_echoed() {
        let outcome: Outcome<()> = Outcome::failure(DomainError::account_not_found());
        let response = configured().translate(DinHeader::default(), outcome, &request("ZZZ", 1));

        let json = serde_json::to_value(&response.envelope).unwrap();
        assert_eq!(json["dinHeader"], json!({}));
    }
}
