// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod page_header;
pub mod stat_tile;

// Primitive wrappers
pub mod dialog;
pub mod label;
pub mod progress;
pub mod toast;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use dialog::*;
pub use input::*;
pub use label::*;
pub use page_header::*;
pub use progress::*;
pub use stat_tile::*;
pub use toast::*;
