pub mod ad_service;
pub mod category_service;
pub mod content_service;
pub mod exam_service;
pub mod home_service;
pub mod scoring_service;
pub mod session_service;
pub mod test_service;
