/// Actions reachable from the header. All of them are placeholders for now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Dashboard,
    Feedback,
    Help,
    Settings,
    LogOut,
}

impl NavAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavAction::Dashboard => "dashboard",
            NavAction::Feedback => "feedback",
            NavAction::Help => "help",
            NavAction::Settings => "settings",
            NavAction::LogOut => "log_out",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavAction::Dashboard => "Dashboard",
            NavAction::Feedback => "Feedback",
            NavAction::Help => "Help",
            NavAction::Settings => "Settings",
            NavAction::LogOut => "Log out",
        }
    }

    pub fn icon(&self) -> Option<&'static str> {
        match self {
            NavAction::Dashboard => Some("📊"),
            NavAction::Settings => Some("⚙️"),
            NavAction::Feedback | NavAction::Help | NavAction::LogOut => None,
        }
    }
}

/// Places in the header where actions are listed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSurface {
    /// Inline buttons in the right section, md and up
    DesktopNav,
    /// Body of the mobile drawer
    Drawer,
    /// Drawer footer
    DrawerFooter,
    /// Avatar dropdown
    AccountMenu,
}

/// A row in a navigation surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEntry {
    Action(NavAction),
    Separator,
}

const DESKTOP_NAV: &[NavEntry] = &[
    NavEntry::Action(NavAction::Feedback),
    NavEntry::Action(NavAction::Help),
];

const DRAWER: &[NavEntry] = &[
    NavEntry::Action(NavAction::Dashboard),
    NavEntry::Action(NavAction::Feedback),
    NavEntry::Action(NavAction::Help),
    NavEntry::Action(NavAction::Settings),
];

const DRAWER_FOOTER: &[NavEntry] = &[NavEntry::Action(NavAction::LogOut)];

const ACCOUNT_MENU: &[NavEntry] = &[
    NavEntry::Action(NavAction::Dashboard),
    NavEntry::Action(NavAction::Settings),
    NavEntry::Separator,
    NavEntry::Action(NavAction::LogOut),
];

impl NavSurface {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavSurface::DesktopNav => "desktop_nav",
            NavSurface::Drawer => "drawer",
            NavSurface::DrawerFooter => "drawer_footer",
            NavSurface::AccountMenu => "account_menu",
        }
    }

    pub fn entries(&self) -> &'static [NavEntry] {
        match self {
            NavSurface::DesktopNav => DESKTOP_NAV,
            NavSurface::Drawer => DRAWER,
            NavSurface::DrawerFooter => DRAWER_FOOTER,
            NavSurface::AccountMenu => ACCOUNT_MENU,
        }
    }

    pub fn actions(self) -> impl Iterator<Item = NavAction> + 'static {
        self.entries().iter().filter_map(|entry| match entry {
            NavEntry::Action(action) => Some(*action),
            NavEntry::Separator => None,
        })
    }
}
