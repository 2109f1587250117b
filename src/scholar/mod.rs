// Google Scholar lookups via SerpApi.
//
// `client` does the single HTTP round trip, `citations` turns the untyped
// JSON body into a validated count (or a specific reason it couldn't).

pub mod citations;
pub mod client;
