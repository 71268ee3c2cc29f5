// Browse + detail views over the profile store.
// Filtering and sorting are pure; handlers only load data and serialize view models.

pub mod filter;
pub mod handlers;
pub mod query;
pub mod selection;
pub mod session;

pub use filter::TagVocabulary;
pub use query::{QueryState, SortDirection};
pub use session::BrowseSession;
