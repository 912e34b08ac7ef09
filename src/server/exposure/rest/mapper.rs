//! Conversion between HTTP payloads and domain values

use crate::core::resource::Resource;
use serde::{Serialize, de::DeserializeOwned};
use validator::Validate;

/// Maps a resource to and from its REST representation
///
/// Request payloads are validated before they reach the mapper, so
/// implementations only copy fields.
pub trait ResourceMapper: Resource {
    /// Body accepted by create and update
    type Request: DeserializeOwned + Validate + Send + 'static;

    /// Body returned for a single resource
    type Response: Serialize + Send + 'static;

    /// Build an unsaved value from a create request
    fn from_request(request: Self::Request) -> Self;

    /// Apply an update request onto the currently stored value
    fn merge_request(&mut self, request: Self::Request);

    fn to_response(&self) -> Self::Response;
}
