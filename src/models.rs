//! Wire types for the salon management API.
//!
//! The server is the sole source of truth: records are fetched, displayed
//! and submitted verbatim. Each resource gets a read type (what the server
//! returns) and a payload type (what forms submit), so required fields are
//! encoded in the types instead of checked ad hoc at submit time.

use serde::{Deserialize, Serialize};

/// Access tier attached to an identity.
///
/// Owners see everything; staff are restricted from the Employees and
/// Reports views.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    #[default]
    Staff,
}

impl Role {
    /// Human-readable label for badges and the sidebar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Staff => "Staff",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Owner => write!(f, "owner"),
            Self::Staff => write!(f, "staff"),
        }
    }
}

/// The authenticated user's profile attached to a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Identity {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

impl Identity {
    /// Initials for the sidebar avatar, e.g. "SM" for Sophie Martin.
    pub fn initials(&self) -> String {
        let mut out = String::new();
        out.extend(self.first_name.chars().next());
        out.extend(self.last_name.chars().next());
        out
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// =============================================================================
// Authentication
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Success response from `POST /auth/login/`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub user: Identity,
}

/// Error body the API returns on failed requests.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

// =============================================================================
// Clients
// =============================================================================

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Client {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub preferences: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Server-computed appointment total for the list view.
    #[serde(default)]
    pub appointments_count: u32,
}

impl Client {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive match against the search box (full name or phone).
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        self.full_name()
            .to_lowercase()
            .contains(&term.to_lowercase())
            || self.phone.contains(term)
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ClientPayload {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub preferences: String,
    pub notes: String,
}

// =============================================================================
// Services
// =============================================================================

/// Service category offered by the salon.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    #[default]
    Cut,
    Color,
    Highlights,
    Blowout,
    Treatment,
    Other,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 6] = [
        Self::Cut,
        Self::Color,
        Self::Highlights,
        Self::Blowout,
        Self::Treatment,
        Self::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cut => "Cut",
            Self::Color => "Color",
            Self::Highlights => "Highlights",
            Self::Blowout => "Blowout",
            Self::Treatment => "Treatment",
            Self::Other => "Other",
        }
    }

    /// Wire value used in form selects.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cut => "cut",
            Self::Color => "color",
            Self::Highlights => "highlights",
            Self::Blowout => "blowout",
            Self::Treatment => "treatment",
            Self::Other => "other",
        }
    }
}

impl std::str::FromStr for ServiceKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cut" => Ok(Self::Cut),
            "color" => Ok(Self::Color),
            "highlights" => Ok(Self::Highlights),
            "blowout" => Ok(Self::Blowout),
            "treatment" => Ok(Self::Treatment),
            "other" => Ok(Self::Other),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Service {
    pub id: i64,
    pub name: String,
    #[serde(rename = "service_type")]
    pub kind: ServiceKind,
    pub price: f64,
    pub duration_minutes: u32,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ServicePayload {
    pub name: String,
    #[serde(rename = "service_type")]
    pub kind: ServiceKind,
    pub price: f64,
    pub duration_minutes: u32,
    pub description: String,
}

// =============================================================================
// Appointments
// =============================================================================

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 3] = [Self::Confirmed, Self::Completed, Self::Cancelled];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Confirmed => "badge badge-info",
            Self::Completed => "badge badge-success",
            Self::Cancelled => "badge badge-danger",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::str::FromStr for AppointmentStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirmed" => Ok(Self::Confirmed),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: i64,
    /// ISO-8601 timestamp as sent by the server.
    pub date_time: String,
    pub client: i64,
    pub employee: i64,
    pub service: i64,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
    /// Denormalized display names computed server-side.
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub employee_name: String,
    #[serde(default)]
    pub service_name: String,
}

impl Appointment {
    /// Timestamp truncated to minute precision for `datetime-local` inputs.
    pub fn date_time_local(&self) -> String {
        let mut s = self.date_time.clone();
        s.truncate(16);
        s
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AppointmentPayload {
    pub date_time: String,
    pub client: i64,
    pub employee: i64,
    pub service: i64,
    pub status: AppointmentStatus,
    pub notes: String,
}

/// Render "2026-08-29T14:30:00" as "29/08/2026 14:30"; falls back to the
/// raw value if the server sends something unparseable.
pub fn format_date_time(raw: &str) -> String {
    let trimmed = raw.get(..16).unwrap_or(raw);
    match chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M") {
        Ok(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

// =============================================================================
// Products
// =============================================================================

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub quantity: i32,
    pub purchase_price: f64,
    pub low_stock_alert: i32,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Product {
    /// Stock at or below the alert threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.low_stock_alert
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductPayload {
    pub name: String,
    pub quantity: i32,
    pub purchase_price: f64,
    pub low_stock_alert: i32,
    pub notes: String,
}

// =============================================================================
// Employees
// =============================================================================

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub specialties: Option<String>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn initials(&self) -> String {
        let mut out = String::new();
        out.extend(self.first_name.chars().next());
        out.extend(self.last_name.chars().next());
        out
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EmployeePayload {
    pub username: String,
    pub email: String,
    /// Omitted when editing with a blank password field, which keeps the
    /// current password server-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub phone: String,
    pub specialties: String,
}

// =============================================================================
// Dashboard and reports
// =============================================================================

/// Aggregate counters from `GET /dashboard/`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub today_appointments: u32,
    pub today_revenue: f64,
    pub low_stock_count: u32,
    pub total_clients: u32,
}

/// Aggregate report from `GET /reports/?start_date=&end_date=`.
///
/// The double-underscore field names come from the server's ORM
/// aggregation and are kept on the wire as-is.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Report {
    pub total_revenue: f64,
    pub total_appointments: u32,
    pub top_services: Vec<TopService>,
    pub employee_performance: Vec<EmployeePerformance>,
}

impl Report {
    /// Average revenue per appointment, zero when there were none.
    pub fn average_revenue(&self) -> f64 {
        if self.total_appointments == 0 {
            0.0
        } else {
            self.total_revenue / self.total_appointments as f64
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TopService {
    #[serde(rename = "service__name")]
    pub service_name: String,
    pub count: u32,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EmployeePerformance {
    #[serde(rename = "employee__first_name")]
    pub first_name: String,
    #[serde(rename = "employee__last_name")]
    pub last_name: String,
    pub appointments_count: u32,
    pub revenue: f64,
}

impl EmployeePerformance {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_casing() {
        assert_eq!(serde_json::to_string(&Role::Owner).unwrap(), "\"owner\"");
        let role: Role = serde_json::from_str("\"staff\"").unwrap();
        assert_eq!(role, Role::Staff);
    }

    #[test]
    fn test_login_response_deserialization() {
        let json = r#"{
            "access": "tok-a",
            "refresh": "tok-r",
            "user": {"id": 1, "first_name": "Sophie", "last_name": "Martin", "role": "owner"}
        }"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.access, "tok-a");
        assert_eq!(resp.user.role, Role::Owner);
        assert_eq!(resp.user.initials(), "SM");
    }

    #[test]
    fn test_identity_ignores_unknown_wire_fields() {
        let json = r#"{"id": 2, "username": "marie", "email": "m@x.fr",
                       "first_name": "Marie", "last_name": "Dupont", "role": "staff"}"#;
        let identity: Identity = serde_json::from_str(json).unwrap();
        assert_eq!(identity.full_name(), "Marie Dupont");
        assert_eq!(identity.role, Role::Staff);
    }

    #[test]
    fn test_client_search_matches_name_or_phone() {
        let client = Client {
            id: 1,
            first_name: "Anna".into(),
            last_name: "Leroy".into(),
            phone: "0612345678".into(),
            email: None,
            preferences: None,
            notes: None,
            appointments_count: 0,
        };
        assert!(client.matches(""));
        assert!(client.matches("anna le"));
        assert!(client.matches("1234"));
        assert!(!client.matches("bernard"));
    }

    #[test]
    fn test_service_kind_wire_name() {
        let json = r#"{"id": 3, "name": "Balayage", "service_type": "highlights",
                       "price": 75.0, "duration_minutes": 90}"#;
        let service: Service = serde_json::from_str(json).unwrap();
        assert_eq!(service.kind, ServiceKind::Highlights);

        let payload = ServicePayload {
            name: "Balayage".into(),
            kind: ServiceKind::Highlights,
            price: 75.0,
            duration_minutes: 90,
            description: String::new(),
        };
        let out = serde_json::to_value(&payload).unwrap();
        assert_eq!(out["service_type"], "highlights");
    }

    #[test]
    fn test_appointment_status_badges() {
        assert_eq!(AppointmentStatus::Completed.label(), "Completed");
        assert_eq!(AppointmentStatus::Cancelled.badge_class(), "badge badge-danger");
        assert_eq!("confirmed".parse(), Ok(AppointmentStatus::Confirmed));
        assert!("unknown".parse::<AppointmentStatus>().is_err());
    }

    #[test]
    fn test_appointment_datetime_local_truncation() {
        let apt = Appointment {
            id: 1,
            date_time: "2026-08-29T14:30:00".into(),
            client: 1,
            employee: 2,
            service: 3,
            status: AppointmentStatus::Confirmed,
            notes: None,
            client_name: String::new(),
            employee_name: String::new(),
            service_name: String::new(),
        };
        assert_eq!(apt.date_time_local(), "2026-08-29T14:30");
    }

    #[test]
    fn test_format_date_time() {
        assert_eq!(format_date_time("2026-08-29T14:30:00"), "29/08/2026 14:30");
        assert_eq!(format_date_time("not a date"), "not a date");
    }

    #[test]
    fn test_product_low_stock() {
        let mut product = Product {
            id: 1,
            name: "Shampoo".into(),
            quantity: 5,
            purchase_price: 8.5,
            low_stock_alert: 5,
            notes: None,
        };
        assert!(product.is_low_stock());
        product.quantity = 6;
        assert!(!product.is_low_stock());
    }

    #[test]
    fn test_employee_payload_omits_blank_password() {
        let payload = EmployeePayload {
            username: "marie".into(),
            email: "marie@salon.fr".into(),
            password: None,
            first_name: "Marie".into(),
            last_name: "Dupont".into(),
            role: Role::Staff,
            phone: String::new(),
            specialties: String::new(),
        };
        let out = serde_json::to_value(&payload).unwrap();
        assert!(out.get("password").is_none());

        let with_password = EmployeePayload {
            password: Some("secret".into()),
            ..payload
        };
        let out = serde_json::to_value(&with_password).unwrap();
        assert_eq!(out["password"], "secret");
    }

    #[test]
    fn test_report_aggregate_field_names() {
        let json = r#"{
            "total_revenue": 420.5,
            "total_appointments": 12,
            "top_services": [{"service__name": "Cut", "count": 7}],
            "employee_performance": [{
                "employee__first_name": "Marie",
                "employee__last_name": "Dupont",
                "appointments_count": 8,
                "revenue": 310.0
            }]
        }"#;
        let report: Report = serde_json::from_str(json).unwrap();
        assert_eq!(report.top_services[0].service_name, "Cut");
        assert_eq!(report.employee_performance[0].full_name(), "Marie Dupont");
        assert!((report.average_revenue() - 35.041_666).abs() < 1e-3);
    }

    #[test]
    fn test_report_average_revenue_empty() {
        let report = Report {
            total_revenue: 0.0,
            total_appointments: 0,
            top_services: vec![],
            employee_performance: vec![],
        };
        assert_eq!(report.average_revenue(), 0.0);
    }
}
