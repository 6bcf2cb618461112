pub mod auth_dto;
pub mod category_dto;
pub mod exam_dto;
pub mod home_dto;
pub mod test_dto;
