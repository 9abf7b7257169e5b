//! Pages module
//! Full-page views for the stats client

pub mod home;
pub mod player;
