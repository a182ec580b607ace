use geocsv_entities::layer::OutputLayer;
use std::path::PathBuf;

/// The application that selects the input and displays the result.
pub trait HostApplication {
    /// Acquire the resources of the host session.
    fn init(&mut self) {}

    /// Returns `None` if the user did not select anything.
    fn select_input_file(&mut self) -> Option<PathBuf>;

    /// Takes over the ownership of a fully built layer.
    fn register_layer(&mut self, layer: OutputLayer) -> anyhow::Result<()>;

    /// Release the resources of the host session.
    fn exit(&mut self);
}
