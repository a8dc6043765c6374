// Sponsor listers: the capability trait and its implementations
pub mod lister_trait;
pub mod api_client;
pub mod graphql_lister;
pub mod mock_lister;

pub use lister_trait::*;
pub use api_client::*;
pub use graphql_lister::*;
pub use mock_lister::*;
