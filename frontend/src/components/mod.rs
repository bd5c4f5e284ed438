mod header;
pub use header::{Header, HEADER_TEMPLATE};
