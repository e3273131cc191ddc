//----------------------------------------
// partition mod
//----------------------------------------
pub mod equal_width;
pub mod error;
pub mod types;
