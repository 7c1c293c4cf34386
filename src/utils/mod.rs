// Start of file: /src/utils/mod.rs

/*
    * Error taxonomy and the response envelope shared by every handler.
*/

pub mod error_handler;
pub mod response_handler;

// End of file: /src/utils/mod.rs
