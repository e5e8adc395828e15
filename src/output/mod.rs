mod response;

pub use response::{exit_code_for_error, print_error_text, print_result, print_success};
