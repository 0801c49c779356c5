//! The users table: a sortable name header plus one row per user.

use egui::{Button, Hyperlink, RichText, Ui};
use roster_business::{SortMode, User};

use crate::utils::colors::COLOR_SORT_ACTIVE;

/// Header labels after the sortable name column.
const HEADERS: [&str; 3] = ["Email", "Phone", "Website"];

/// Label of the sortable name header for `sort`.
pub fn name_header_label(sort: SortMode) -> String {
    format!("Name{}", sort.arrow())
}

/// Renders the table. Returns `true` if the name header was clicked.
pub fn users_table(ui: &mut Ui, rows: &[&User], sort: SortMode) -> bool {
    let mut header_clicked = false;

    egui::Grid::new("users_table")
        .num_columns(1 + HEADERS.len())
        .striped(true)
        .spacing([16.0, 6.0])
        .show(ui, |ui| {
            header_clicked = name_header(ui, sort);
            for label in HEADERS {
                ui.strong(label);
            }
            ui.end_row();

            for user in rows {
                user_row(ui, user);
                ui.end_row();
            }
        });

    header_clicked
}

fn name_header(ui: &mut Ui, sort: SortMode) -> bool {
    let fill = if sort.is_active() {
        COLOR_SORT_ACTIVE
    } else {
        egui::Color32::TRANSPARENT
    };

    ui.add(Button::new(RichText::new(name_header_label(sort)).strong()).fill(fill))
        .on_hover_text("Sort by name")
        .clicked()
}

fn user_row(ui: &mut Ui, user: &User) {
    ui.label(user.name.as_str());
    ui.label(user.email.as_str());
    ui.label(user.phone.as_str());
    ui.add(
        Hyperlink::from_label_and_url(user.website.as_str(), user.website_url())
            .open_in_new_tab(true),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_label_shows_direction() {
        assert_eq!(name_header_label(SortMode::Unsorted), "Name");
        assert_eq!(name_header_label(SortMode::Ascending), "Name ↑");
        assert_eq!(name_header_label(SortMode::Descending), "Name ↓");
    }
}
