mod counter;
mod message;
mod sender;

pub use counter::RunCounter;
pub use message::{render_report, NotificationMessage, SIGN_OFF};
pub use sender::{DeliveryResult, NotificationSender};
