pub mod client;
pub mod upload;

pub use client::{JsonClient, RequestBody, RequestOptions};
pub use upload::FileUpload;
