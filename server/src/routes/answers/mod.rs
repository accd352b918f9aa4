mod create;
mod delete;
mod get_one;

pub use self::create::*;
pub use self::delete::*;
pub use self::get_one::*;
