use geocsv_core::usecases::Error as UsecaseError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Usecase(#[from] UsecaseError),
    #[error("Could not load CSV file '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Could not save the normalized CSV file '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("The CSV file '{}' is not a valid address layer", path.display())]
    LayerInvalid {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("The host application rejected the layer")]
    Register(#[source] anyhow::Error),
}

impl Error {
    /// Nothing was selected, i.e. the run was cancelled on purpose.
    pub fn is_missing_file(&self) -> bool {
        matches!(self, Self::Usecase(UsecaseError::MissingFile))
    }
}
