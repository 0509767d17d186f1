pub mod model;
pub mod traits;
pub mod view_model;
