mod badge;
mod button;
mod input;
mod textarea;

pub use badge::Badge;
pub use button::Button;
pub use input::Input;
pub use textarea::Textarea;
