pub mod advertisement;
pub mod category;
pub mod exam;
pub mod gallery;
pub mod membership;
pub mod news;
pub mod review;
pub mod session;
pub mod slideshow;
pub mod static_page;
pub mod test_answer;
pub mod test_category;
pub mod test_history;
pub mod test_level;
pub mod test_question;
