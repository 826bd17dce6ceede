mod error;
mod http_client;
mod model;

pub use error::CalendarClientError;
pub use http_client::CalendarClient;
pub use model::{ContentItem, ContentType, Status};
