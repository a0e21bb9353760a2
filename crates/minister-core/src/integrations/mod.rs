pub mod slack;
pub mod traits;

pub use slack::SlackWebhook;
pub use traits::Notifier;
