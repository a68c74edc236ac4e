pub mod cms;
pub mod utils;
