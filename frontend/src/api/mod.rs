use std::future::Future;

use common::TemplateSet;

pub mod dummy;
pub mod error;
pub mod real;

pub use error::RpcError;
pub use real::RealApi;

/// Seam between the bootstrap and the backend transport.
pub trait Api: Clone + 'static {
    /// Requests the template set from the backend with an empty payload.
    fn load_templates(&self) -> impl Future<Output = Result<TemplateSet, RpcError>>;
}
