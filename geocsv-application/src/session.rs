use geocsv_core::gateways::host::HostApplication;
use std::ops::{Deref, DerefMut};

/// Scoped access to the host application.
///
/// The session is initialized on creation and released
/// exactly once when the guard goes out of scope.
pub struct HostSession<'h, H: HostApplication> {
    host: &'h mut H,
}

impl<'h, H: HostApplication> HostSession<'h, H> {
    pub fn start(host: &'h mut H) -> Self {
        log::debug!("Initializing host session");
        host.init();
        Self { host }
    }
}

impl<H: HostApplication> Deref for HostSession<'_, H> {
    type Target = H;
    fn deref(&self) -> &H {
        self.host
    }
}

impl<H: HostApplication> DerefMut for HostSession<'_, H> {
    fn deref_mut(&mut self) -> &mut H {
        self.host
    }
}

impl<H: HostApplication> Drop for HostSession<'_, H> {
    fn drop(&mut self) {
        log::debug!("Releasing host session");
        self.host.exit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use std::path::PathBuf;

    #[derive(Default)]
    struct CountingHost {
        inits: usize,
        exits: usize,
    }

    impl HostApplication for CountingHost {
        fn init(&mut self) {
            self.inits += 1;
        }
        fn select_input_file(&mut self) -> Option<PathBuf> {
            None
        }
        fn register_layer(&mut self, _: OutputLayer) -> anyhow::Result<()> {
            Ok(())
        }
        fn exit(&mut self) {
            self.exits += 1;
        }
    }

    fn fail_early(host: &mut CountingHost) -> Result<()> {
        let mut session = HostSession::start(host);
        usecases::require_input_file(session.select_input_file())?;
        unreachable!()
    }

    #[test]
    fn release_on_early_return() {
        let mut host = CountingHost::default();
        assert!(fail_early(&mut host).is_err());
        assert_eq!(host.inits, 1);
        assert_eq!(host.exits, 1);
    }

    #[test]
    fn release_once_at_end_of_scope() {
        let mut host = CountingHost::default();
        {
            let session = HostSession::start(&mut host);
            assert_eq!(session.inits, 1);
            assert_eq!(session.exits, 0);
        }
        assert_eq!(host.exits, 1);
    }
}
