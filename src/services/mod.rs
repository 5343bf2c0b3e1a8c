pub mod completion_client;
pub mod feedback_service;
pub mod response_extractor;
