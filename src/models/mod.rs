pub mod ambassadors;
pub mod events;
pub mod participants;
pub mod point_adjustments;
pub mod registrants;

pub use ambassadors::{CampusAmbassadorRow, ReferralRow};
pub use events::EventsRow;
pub use participants::{EventSelection, ParticipantEvent, ParticipantRow};
pub use point_adjustments::PointAdjustmentRow;
pub use registrants::RegistrantRow;
