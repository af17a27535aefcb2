pub mod item;
pub mod parameter;
pub mod recovery;
pub mod request;
pub mod response;
