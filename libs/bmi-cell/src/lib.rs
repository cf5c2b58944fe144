pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{BmiRequest, BmiResponse, Citation};

pub use router::bmi_routes;

pub use handlers::*;

pub mod api {
    pub use crate::services::classifier::{compute_bmi, BmiClassification};
    pub use crate::services::tips::{TipError, TipService, WellnessTip};
}
