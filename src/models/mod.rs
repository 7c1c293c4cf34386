// Start of file: /src/models/mod.rs

/*
    * Row types for the two tables the gateway reads, plus the
    * status-update payload.
*/

pub mod entrance;
pub mod notification;

pub use entrance::{Entrance, EntranceSummary};
pub use notification::{Notification, NotificationWithEntrance, StatusUpdate, UpdateStatusRequest};

// End of file: /src/models/mod.rs
