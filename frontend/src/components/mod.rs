pub mod empty_state;
pub mod guard;
pub mod icons;
pub mod layout;
pub mod messages;
pub mod nav_pills;
