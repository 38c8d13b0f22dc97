mod store;
mod token;

pub use store::S3TokenStore;
pub use store::TokenStore;
pub use token::TokenManager;
pub use token::decode as decode_token;
pub use token::encode as encode_token;
