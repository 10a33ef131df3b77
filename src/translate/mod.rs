pub mod interface;
pub mod aws_client;
pub mod http_client;
pub mod factory;

pub use interface::TranslateInterface;
pub use factory::TranslatorFactory;
