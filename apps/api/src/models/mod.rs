pub mod career;
pub mod record;
pub mod timeline;
