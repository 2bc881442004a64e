pub mod division;
pub mod event;
pub mod event_attendance;
pub mod event_comment;
pub mod event_division;
pub mod event_type;
pub mod hotel;
pub mod hotel_room_image;
pub mod media_item;
pub mod stripe_event_checkout;
