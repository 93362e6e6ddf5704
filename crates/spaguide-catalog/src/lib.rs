pub mod engine;
pub mod facets;
pub mod store;

pub use engine::{query, ResultPage};
pub use facets::{facets, FacetOptions};
pub use store::{Catalog, CatalogStore};
