pub mod text;
pub mod validator;

pub use text::TextConnector;
pub use validator::TriangleValidator;
