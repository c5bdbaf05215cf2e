//! User-facing notification seam.
//!
//! Toast rendering belongs to the host page; this layer only decides *when*
//! a message is shown. The default implementation forwards to the `log`
//! crate, which `console_log` surfaces in the browser console.

/// Sink for success/error messages produced by session actions.
pub trait Notify {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

impl<T: Notify + ?Sized> Notify for &T {
    fn success(&self, message: &str) {
        (**self).success(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }
}

/// Log-backed notifier used until a toast component takes over.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotify;

impl Notify for LogNotify {
    fn success(&self, message: &str) {
        log::info!("{message}");
    }

    fn error(&self, message: &str) {
        log::error!("{message}");
    }
}
