mod answer;
mod question;

pub use self::answer::*;
pub use self::question::*;
