pub mod carousel;
pub mod chat;
pub mod controller;
pub mod error;
pub mod estimator;
pub mod format;
pub mod forms;
pub mod geofence;
pub mod payments;
pub mod props;
pub mod seed;
pub mod session;
pub mod store;
pub mod summary;
pub mod timeline;
pub mod toast;
pub mod view;
pub mod wallet;

pub use controller::{Intent, Navigation, ViewController};
pub use error::AppError;
pub use props::ScreenProps;
pub use session::{AdminRole, Session};
pub use store::MockStore;
pub use toast::{Toast, ToastLevel};
pub use view::{MainView, View};
