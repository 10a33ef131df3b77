pub mod interface;
pub mod s3;

pub use interface::StorageInterface;
pub use s3::S3Storage;
