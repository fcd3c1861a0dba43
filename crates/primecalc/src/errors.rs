//! Error handling and exit codes.

use primecalc_core::constants::exit_codes;
use primecalc_core::PrimeError;

/// Map a search error to its process exit code.
pub fn handle_error(err: &PrimeError) -> i32 {
    match err {
        PrimeError::Config(_) => exit_codes::ERROR_USAGE,
        PrimeError::Mismatch { .. } => exit_codes::ERROR_MISMATCH,
    }
}

/// Exit code for an application error. Errors without a `PrimeError` in
/// their chain are generic failures.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let code = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<PrimeError>())
        .map_or(exit_codes::ERROR_GENERIC, handle_error);
    u8::try_from(code).unwrap_or(1)
}
