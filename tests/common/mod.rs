mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from safeclue for tests
pub use safeclue::core::{
    AdminRole, AppError, Intent, MainView, MockStore, ScreenProps, Session, Toast, ToastLevel, View,
    ViewController,
};
pub use safeclue::models::{Coordinates, Project, Role, TimelineStage, TransactionStatus};
