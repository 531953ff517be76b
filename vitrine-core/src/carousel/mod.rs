mod controller;
mod messages;

pub use controller::CarouselController;
pub use messages::CarouselMessage;
