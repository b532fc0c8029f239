mod user_search_result;

pub use user_search_result::*;
