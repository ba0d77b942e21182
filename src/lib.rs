pub mod args;
pub mod error;
pub mod model;
pub mod storage;
pub mod controller {
    pub mod profile;
    pub mod supabase;
}
pub mod view {
    pub mod error_page;
    pub mod profile;
}

pub const MAP_URL_BASE: &str = "https://www.google.com/maps?q=";

pub use storage::LookupGateway;
