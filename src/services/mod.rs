pub mod auth_service;
pub mod catalog_service;
pub mod fee_service;
pub mod id_service;
pub mod referral_service;
pub mod registration_service;
