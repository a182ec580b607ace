use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No CSV file selected")]
    MissingFile,
    #[error("The column '{0}' is missing in the CSV file")]
    MissingColumn(&'static str),
}
