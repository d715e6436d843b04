use campus_events_client::Role;

/// Which main screen a signed-in profile gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleView {
    Admin,
    Student,
}

impl RoleView {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => RoleView::Admin,
            Role::Student => RoleView::Student,
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            RoleView::Admin => "Admin Mode",
            RoleView::Student => "Student View",
        }
    }
}
