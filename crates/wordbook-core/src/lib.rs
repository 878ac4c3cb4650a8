pub mod camera;
pub mod error;
pub mod locale;
pub mod photo;
pub mod state;
pub mod store;

pub use camera::CameraController;
pub use error::{CatalogError, PhotoDecodeError, StoreError};
pub use locale::Catalog;
pub use state::AppState;
pub use store::{LanguageStore, PhotoStore};
