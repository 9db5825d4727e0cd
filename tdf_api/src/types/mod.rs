mod security;
pub use self::security::{Securities, Security};

mod select;
pub use self::select::Select;
