pub mod layout;
mod quiz;
mod result;
mod splash;

pub use layout::{calculate_quiz_chunks, calculate_result_chunks};
pub use quiz::{draw_quit_confirmation, draw_quiz};
pub use result::draw_result;
pub use splash::draw_splash;
