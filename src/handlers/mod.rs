pub mod analyze_handler;
pub mod health_handler;
pub mod quiz_handler;

pub use analyze_handler::analyze;
pub use health_handler::health_check;
pub use quiz_handler::generate_quiz;
