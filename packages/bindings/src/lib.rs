use napi::Result as NapiResult;
use napi_derive::napi;

use mortgage_estimator_core::mortgage::{self, RawMortgageInput};
use mortgage_estimator_core::MortgageInput;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Mortgage
// ---------------------------------------------------------------------------

#[napi]
pub fn validate_mortgage(input_json: String) -> NapiResult<String> {
    let raw: RawMortgageInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    serde_json::to_string(&mortgage::validation::outcome(&raw)).map_err(to_napi_error)
}

#[napi]
pub fn calculate_mortgage(input_json: String) -> NapiResult<String> {
    let input: MortgageInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = mortgage::calculate(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn estimate_mortgage(input_json: String) -> NapiResult<String> {
    let raw: RawMortgageInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = mortgage::estimate(&raw).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
