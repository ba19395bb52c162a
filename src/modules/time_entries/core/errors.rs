#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum EntryError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid hours or date format")]
    InvalidFormat,
}
