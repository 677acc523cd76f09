mod config_file;
mod subscription;
mod version;

pub use self::{config_file::load_config_file, subscription::Subscription};
