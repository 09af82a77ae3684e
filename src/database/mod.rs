pub mod ambassador_repo;
pub mod counter_repo;
pub mod credential_repo;
pub mod event_repo;
pub mod participant_repo;
pub mod registrant_repo;
