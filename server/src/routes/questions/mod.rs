mod get_all;

pub use self::get_all::*;
