//! Central dashboard content: welcome banner, summary cards, announcements.

use eframe::egui::{self, RichText, Stroke};

use crate::ui::theme::{self, DashboardTheme};

/// A headline figure on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: &'static str,
    pub caption: &'static str,
}

pub const SUMMARY_CARDS: [SummaryCard; 4] = [
    SummaryCard {
        title: "Attendance",
        value: "92%",
        caption: "Across all enrolled courses",
    },
    SummaryCard {
        title: "CGPA",
        value: "8.4",
        caption: "Updated after last semester",
    },
    SummaryCard {
        title: "Upcoming Exams",
        value: "3",
        caption: "Within the next two weeks",
    },
    SummaryCard {
        title: "Pending Fees",
        value: "₹12,500",
        caption: "Due by the end of the month",
    },
];

pub const ANNOUNCEMENTS: [&str; 3] = [
    "End-semester exam timetable has been published.",
    "Library will remain open until 10 PM during exam week.",
    "Elective registration closes this Friday.",
];

/// Cards per row for the available width.
pub fn card_columns(available_width: f32, narrow: bool) -> usize {
    if narrow {
        1
    } else if available_width >= 900.0 {
        4
    } else {
        2
    }
}

/// Render the main content region.
pub fn render_main_content(ctx: &egui::Context, theme: &DashboardTheme, narrow: bool) {
    egui::CentralPanel::default()
        .frame(
            egui::Frame::new()
                .fill(theme.background)
                .inner_margin(egui::Margin::same(if narrow { 12 } else { 24 })),
        )
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("dashboard_content")
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.label(
                        RichText::new("Welcome back!")
                            .heading()
                            .strong()
                            .color(theme.text_primary),
                    );
                    ui.label(
                        RichText::new("Here is what is happening with your studies today.")
                            .color(theme.text_muted),
                    );
                    ui.add_space(16.0);

                    let columns = card_columns(ui.available_width(), narrow);
                    for row in SUMMARY_CARDS.chunks(columns) {
                        ui.columns(columns, |cols| {
                            for (col, card) in cols.iter_mut().zip(row) {
                                render_summary_card(col, card, theme);
                            }
                        });
                        ui.add_space(8.0);
                    }

                    ui.add_space(16.0);
                    card_frame(theme).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(
                            RichText::new("Announcements")
                                .size(16.0)
                                .strong()
                                .color(theme.text_primary),
                        );
                        ui.add_space(6.0);
                        for note in ANNOUNCEMENTS {
                            ui.label(RichText::new(format!("• {}", note)).color(theme.text_muted));
                        }
                    });
                });
        });
}

fn card_frame(theme: &DashboardTheme) -> egui::Frame {
    egui::Frame::new()
        .fill(theme.card)
        .corner_radius(12.0)
        .inner_margin(egui::Margin::same(16))
        .stroke(Stroke::new(1.0, theme.border))
}

fn render_summary_card(ui: &mut egui::Ui, card: &SummaryCard, theme: &DashboardTheme) {
    card_frame(theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(card.title).color(theme.text_muted));
        ui.label(
            RichText::new(card.value)
                .font(theme::named_font(ui.style(), theme::CARD_VALUE, 24.0))
                .strong()
                .color(theme.text_primary),
        );
        ui.label(RichText::new(card.caption).small().color(theme.text_muted));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_columns() {
        assert_eq!(card_columns(1200.0, true), 1);
        assert_eq!(card_columns(1200.0, false), 4);
        assert_eq!(card_columns(700.0, false), 2);
    }

    #[test]
    fn test_summary_cards_fill_rows() {
        for columns in [1, 2, 4] {
            assert_eq!(SUMMARY_CARDS.len() % columns, 0);
        }
    }
}
