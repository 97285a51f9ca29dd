pub mod account_menu;
pub mod avatar;
pub mod badge;
pub mod button;
pub mod common;

pub use account_menu::AccountMenu;
pub use avatar::{initials, Avatar};
pub use badge::RoleBadge;
pub use button::{Button, ButtonSize};
pub use common::{Logo, NavActionList, Separator, LOGO};
