use serde::{Deserialize, Serialize};

/// Access profile selected on the login screen.
///
/// Serialized through the Portuguese display names so the persisted
/// `user` record matches what the UI shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Administrador")]
    Administrador,
    #[serde(rename = "Síndico")]
    Sindico,
    #[serde(rename = "Operacional")]
    Operacional,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrador => "Administrador",
            Role::Sindico => "Síndico",
            Role::Operacional => "Operacional",
        }
    }

    pub fn all() -> [Role; 3] {
        [Role::Administrador, Role::Sindico, Role::Operacional]
    }

    /// Condominium records are only mutable by the administrator, even if
    /// another role somehow reaches the management screen.
    pub fn can_manage_condos(&self) -> bool {
        matches!(self, Role::Administrador)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Administrador
    }

    pub fn is_operacional(&self) -> bool {
        self.role == Role::Operacional
    }
}

/// Role selection stub: always succeeds, display name comes from the
/// fixture mapping. There is no password and no server validation.
pub fn login_user(role: Role) -> User {
    let name = match role {
        Role::Administrador => "Admin Master",
        Role::Sindico => "Síndica Ana",
        Role::Operacional => "Zelador Ricardo",
    };
    User {
        id: "u1".to_string(),
        name: name.to_string(),
        role,
    }
}

/// The navigable surface of the application.
///
/// Authorization lives here, in one table, consulted by the router guard
/// and by the sidebar. Views never re-derive role rules on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Dashboard,
    Condos,
    QrScan,
    ChecklistRun,
    Maintenance,
    Reports,
}

impl AppRoute {
    /// Route path as registered with the router. `ChecklistRun` carries a
    /// `:condo_id` parameter.
    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Dashboard => "/",
            AppRoute::Condos => "/condos",
            AppRoute::QrScan => "/qr-scan",
            AppRoute::ChecklistRun => "/checklist/run/:condo_id",
            AppRoute::Maintenance => "/maintenance",
            AppRoute::Reports => "/reports",
        }
    }

    /// Whether `role` may load this route at all.
    ///
    /// Operacional is hard-blocked from everything except the QR check-in
    /// module, not merely hidden from navigation.
    pub fn allows(&self, role: Role) -> bool {
        match self {
            AppRoute::QrScan => true,
            AppRoute::Condos => role == Role::Administrador,
            AppRoute::Dashboard
            | AppRoute::ChecklistRun
            | AppRoute::Maintenance
            | AppRoute::Reports => role != Role::Operacional,
        }
    }

    /// Where a disallowed access lands.
    pub fn fallback_for(role: Role) -> &'static str {
        match role {
            Role::Operacional => "/qr-scan",
            _ => "/",
        }
    }

    /// Entries the sidebar offers to `role`, in menu order.
    pub fn nav_entries(role: Role) -> Vec<AppRoute> {
        [
            AppRoute::Dashboard,
            AppRoute::QrScan,
            AppRoute::Condos,
            AppRoute::Maintenance,
            AppRoute::Reports,
        ]
        .into_iter()
        .filter(|r| r.allows(role))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_assigns_fixture_names() {
        assert_eq!(login_user(Role::Administrador).name, "Admin Master");
        assert_eq!(login_user(Role::Sindico).name, "Síndica Ana");
        assert_eq!(login_user(Role::Operacional).name, "Zelador Ricardo");
        assert_eq!(login_user(Role::Sindico).id, "u1");
    }

    #[test]
    fn role_serde_uses_display_names() {
        let json = serde_json::to_string(&Role::Sindico).unwrap();
        assert_eq!(json, "\"Síndico\"");
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Role::Sindico);
    }

    #[test]
    fn user_round_trips_through_json() {
        let user = login_user(Role::Operacional);
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn operacional_only_reaches_qr_scan() {
        let role = Role::Operacional;
        assert!(AppRoute::QrScan.allows(role));
        assert!(!AppRoute::Dashboard.allows(role));
        assert!(!AppRoute::Condos.allows(role));
        assert!(!AppRoute::ChecklistRun.allows(role));
        assert!(!AppRoute::Maintenance.allows(role));
        assert!(!AppRoute::Reports.allows(role));
        assert_eq!(AppRoute::fallback_for(role), "/qr-scan");
    }

    #[test]
    fn condos_is_admin_only() {
        assert!(AppRoute::Condos.allows(Role::Administrador));
        assert!(!AppRoute::Condos.allows(Role::Sindico));
        assert_eq!(AppRoute::fallback_for(Role::Sindico), "/");
    }

    #[test]
    fn only_admin_mutates_condos() {
        assert!(Role::Administrador.can_manage_condos());
        assert!(!Role::Sindico.can_manage_condos());
        assert!(!Role::Operacional.can_manage_condos());
    }

    #[test]
    fn sindico_sees_all_but_condos_in_nav() {
        let entries = AppRoute::nav_entries(Role::Sindico);
        assert_eq!(
            entries,
            vec![
                AppRoute::Dashboard,
                AppRoute::QrScan,
                AppRoute::Maintenance,
                AppRoute::Reports
            ]
        );
        assert_eq!(AppRoute::nav_entries(Role::Operacional), vec![AppRoute::QrScan]);
    }
}
