pub mod button;
pub mod checkbox;
pub mod input;
pub mod module_selector;

pub use button::Button;
pub use checkbox::Checkbox;
pub use input::Input;
pub use module_selector::ModuleSelector;
