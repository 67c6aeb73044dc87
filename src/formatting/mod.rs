pub mod utils;
pub mod views;

pub use utils::{format_expiry, sanitize, truncate};
pub use views::{print_generated_codes, print_import_outcome, print_result_view};
