use std::future::Future;

use crate::error::NotifyError;

/// Outbound delivery of a status message.
///
/// Implementations make exactly one attempt per call; the endpoint is read
/// from the state store by the caller at action time.
pub trait Notifier {
    /// Post `text` to `endpoint`. `Ok` means the endpoint accepted it.
    fn send(
        &self,
        endpoint: &str,
        text: &str,
    ) -> impl Future<Output = Result<(), NotifyError>> + Send;
}
