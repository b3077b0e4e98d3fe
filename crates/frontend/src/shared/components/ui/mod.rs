pub mod button;
pub mod input;
pub mod select;
pub mod toggle;

pub use button::Button;
pub use input::Input;
pub use select::Select;
pub use toggle::Toggle;
