mod matcher;
mod method;
mod request;

pub use matcher::{MapMatcher, Matcher};
pub use method::Method;
pub use request::Request;
