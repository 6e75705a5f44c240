//! Demo Users
//!
//! Sample records and column definitions for the demo's user table.

use chrono::NaiveDate;
use gpui::{div, prelude::*, rgb, AnyElement, App, FontWeight, IntoElement, ParentElement, Rgba, SharedString, Styled};
use serde::{Deserialize, Serialize};

use crate::components::composite::data_table::{CellValue, Column, TableRecord};
use crate::states::i18n_demo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }
}

/// A user account shown in the demo table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
    pub last_login: NaiveDate,
    pub join_date: NaiveDate,
}

impl TableRecord for User {
    fn field(&self, name: &str) -> CellValue {
        match name {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "email" => self.email.as_str().into(),
            "role" => self.role.as_str().into(),
            "status" => self.status.as_str().into(),
            "lastLogin" => self.last_login.into(),
            "joinDate" => self.join_date.into(),
            _ => CellValue::Null,
        }
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn user(
    id: i64,
    name: &str,
    role: &str,
    status: UserStatus,
    last_login: NaiveDate,
    join_date: NaiveDate,
) -> User {
    let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
    User {
        id,
        name: name.to_string(),
        email,
        role: role.to_string(),
        status,
        last_login,
        join_date,
    }
}

/// The five users of the demo table
pub fn sample_users() -> Vec<User> {
    use UserStatus::*;
    vec![
        user(1, "John Doe", "Admin", Active, ymd(2025, 9, 2), ymd(2023, 1, 15)),
        user(2, "Jane Smith", "Editor", Active, ymd(2025, 9, 1), ymd(2023, 3, 22)),
        user(3, "Bob Johnson", "Viewer", Inactive, ymd(2025, 8, 28), ymd(2023, 6, 10)),
        user(4, "Alice Williams", "Editor", Active, ymd(2025, 9, 3), ymd(2023, 2, 14)),
        user(5, "Charlie Brown", "Admin", Active, ymd(2025, 9, 2), ymd(2022, 11, 5)),
    ]
}

/// Background and text colors of a role badge
pub fn role_badge_colors(role: &str, dark: bool) -> (Rgba, Rgba) {
    match (role, dark) {
        ("Admin", false) => (rgb(0xf3e8ff), rgb(0x6b21a8)),
        ("Admin", true) => (rgb(0x581c87), rgb(0xe9d5ff)),
        ("Editor", false) => (rgb(0xdbeafe), rgb(0x1e40af)),
        ("Editor", true) => (rgb(0x1e3a8a), rgb(0xbfdbfe)),
        (_, false) => (rgb(0xf3f4f6), rgb(0x1f2937)),
        (_, true) => (rgb(0x374151), rgb(0xe5e7eb)),
    }
}

/// Background and text colors of a status badge
pub fn status_badge_colors(active: bool, dark: bool) -> (Rgba, Rgba) {
    match (active, dark) {
        (true, false) => (rgb(0xdcfce7), rgb(0x166534)),
        (true, true) => (rgb(0x14532d), rgb(0xbbf7d0)),
        (false, false) => (rgb(0xfee2e2), rgb(0x991b1b)),
        (false, true) => (rgb(0x7f1d1d), rgb(0xfecaca)),
    }
}

fn badge(text: SharedString, (bg, fg): (Rgba, Rgba)) -> AnyElement {
    div()
        .px_2()
        .py_1()
        .rounded_full()
        .text_xs()
        .font_weight(FontWeight::SEMIBOLD)
        .bg(bg)
        .text_color(fg)
        .child(text)
        .into_any_element()
}

/// Dates as month/day/year
pub fn format_date(value: &CellValue) -> String {
    match value {
        CellValue::Date(date) => date.format("%-m/%-d/%Y").to_string(),
        other => other.to_string(),
    }
}

/// Columns of the user table; every column sorts
pub fn user_columns(dark: bool, cx: &App) -> Vec<Column<User>> {
    let active = i18n_demo(cx, "status_active");
    let inactive = i18n_demo(cx, "status_inactive");

    vec![
        Column::new("name", i18n_demo(cx, "column_name")).sortable(),
        Column::new("email", i18n_demo(cx, "column_email"))
            .sortable()
            .flex_width(Some(220.0), None),
        Column::new("role", i18n_demo(cx, "column_role"))
            .sortable()
            .render(move |value, _, _| {
                let role = value.to_string();
                let colors = role_badge_colors(&role, dark);
                badge(role.into(), colors)
            }),
        Column::new("status", i18n_demo(cx, "column_status"))
            .sortable()
            .render(move |_, user, _| {
                let is_active = user.status == UserStatus::Active;
                let text = if is_active { active.clone() } else { inactive.clone() };
                badge(text, status_badge_colors(is_active, dark))
            }),
        Column::new("lastLogin", i18n_demo(cx, "column_last_login"))
            .sortable()
            .render(|value, _, _| SharedString::from(format_date(value)).into_any_element()),
        Column::new("joinDate", i18n_demo(cx, "column_join_date"))
            .sortable()
            .render(|value, _, _| SharedString::from(format_date(value)).into_any_element()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::data_table::{TableModel, VisibleRow};

    fn names(model: &TableModel<User>) -> Vec<String> {
        model
            .visible_rows()
            .map(|row: VisibleRow<'_, User>| row.record.name.clone())
            .collect()
    }

    #[test]
    fn sample_emails_follow_names() {
        let users = sample_users();
        assert_eq!(users.len(), 5);
        assert_eq!(users[0].email, "john.doe@example.com");
        assert_eq!(users[3].email, "alice.williams@example.com");
        assert_eq!(users[2].status, UserStatus::Inactive);
    }

    #[test]
    fn fields_map_to_cells() {
        let user = &sample_users()[1];
        assert_eq!(user.field("id"), CellValue::Int(2));
        assert_eq!(user.field("status"), CellValue::Text("active".into()));
        assert_eq!(user.field("joinDate"), CellValue::Date(ymd(2023, 3, 22)));
        assert_eq!(user.field("missing"), CellValue::Null);
    }

    #[test]
    fn join_date_sorts_chronologically() {
        let columns = vec![Column::new("joinDate", "Join Date").sortable()];
        let mut model = TableModel::new(columns, sample_users());
        assert!(model.click_header("joinDate"));
        assert_eq!(
            names(&model),
            ["Charlie Brown", "John Doe", "Alice Williams", "Jane Smith", "Bob Johnson"]
        );
    }

    #[test]
    fn dates_render_month_first() {
        assert_eq!(format_date(&CellValue::Date(ymd(2025, 9, 2))), "9/2/2025");
        assert_eq!(format_date(&CellValue::Null), "");
    }

    #[test]
    fn badge_colors_by_role() {
        assert_eq!(role_badge_colors("Admin", false).1, rgb(0x6b21a8));
        assert_eq!(role_badge_colors("Viewer", false), role_badge_colors("Guest", false));
        assert_ne!(status_badge_colors(true, true), status_badge_colors(false, true));
    }
}
