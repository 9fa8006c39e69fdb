pub mod client;
pub mod credentials;
pub mod error;
pub mod google;
pub mod memory;

pub use client::{SpreadsheetClient, ASSETS_RANGE, CONFIG_RANGE, READONLY_SCOPE};
pub use credentials::ServiceAccountKey;
pub use error::SheetsError;
pub use google::{GoogleSheetsClient, DEFAULT_API_BASE};
pub use memory::InMemorySheetClient;

pub fn module_ready() -> bool {
    true
}
