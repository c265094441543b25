/// Shared types and services for the VideoGrab system.
///
/// Holds everything both the API server and the CLI client need to agree
/// on: wire models, the error taxonomy, platform detection, the sample
/// catalog, the URL resolver, and the download session store.
pub mod catalog;
pub mod errors;
pub mod models;
pub mod platform;
pub mod resolver;
pub mod session;
