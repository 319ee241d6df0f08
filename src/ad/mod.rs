//! Ad composition: parameters, prompt and request assembly.

mod creative;
mod params;
mod prompt;
mod request;

pub use creative::GeneratedCreative;
pub use params::{AdParameters, AspectRatio, ResolutionTier};
pub use prompt::compose;
pub use request::{CreativeRequest, ModelSpec, RequestPart};
