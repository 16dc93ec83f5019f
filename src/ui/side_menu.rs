//! Navigation side menu
//!
//! A left-anchored drawer with the app badge, the navigation links and the
//! SEO starter template links. On narrow windows a dimmed overlay covers the
//! page and closes the menu when clicked.

use crate::project::TemplateKind;
use crate::routes::Route;
use crate::theme::ThemeColors;
use eframe::egui::{self, Color32, RichText, Ui};

/// Widest the drawer gets.
const MAX_MENU_WIDTH: f32 = 320.0;

/// Share of the window width the drawer takes on small windows.
const MENU_WIDTH_FRACTION: f32 = 0.85;

/// A link in the side menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub path: String,
}

impl MenuLink {
    fn new(icon: &'static str, label: &'static str, path: impl Into<String>) -> Self {
        Self {
            icon,
            label,
            path: path.into(),
        }
    }
}

/// Links of the "Navigation" section.
pub fn navigation_links() -> Vec<MenuLink> {
    vec![
        MenuLink::new("🏠", "Home", "/"),
        MenuLink::new("⚙", "Settings", "/settings"),
        MenuLink::new("🗀", "Project Files", "/files"),
        MenuLink::new("🔌", "API Integrations", "/api"),
    ]
}

fn template_icon(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::KeywordResearch => "🔍",
        TemplateKind::BacklinkAnalyzer => "📈",
        TemplateKind::OnPageSeo | TemplateKind::SchemaGenerator => "</>",
        TemplateKind::SerpAnalyzer => "🌐",
    }
}

/// Links of the "SEO Starter Templates" section, one per template.
pub fn template_links() -> Vec<MenuLink> {
    TemplateKind::all()
        .into_iter()
        .map(|kind| {
            MenuLink::new(
                template_icon(kind),
                kind.menu_label(),
                Route::Template(kind).path(),
            )
        })
        .collect()
}

/// Width of the drawer for a window of `screen_width`.
pub fn menu_width(screen_width: f32) -> f32 {
    (screen_width * MENU_WIDTH_FRACTION).min(MAX_MENU_WIDTH)
}

/// Output from the side menu.
#[derive(Debug, Default)]
pub struct SideMenuOutput {
    /// Path of the link that was clicked
    pub navigate_to: Option<String>,
    /// Whether the menu asked to be closed
    pub close_requested: bool,
}

/// The navigation drawer.
pub struct SideMenu {
    narrow: bool,
}

impl SideMenu {
    pub fn new(narrow: bool) -> Self {
        Self { narrow }
    }

    pub fn show(&self, ctx: &egui::Context, colors: &ThemeColors) -> SideMenuOutput {
        let mut output = SideMenuOutput::default();
        let screen_rect = ctx.screen_rect();

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            output.close_requested = true;
        }

        if self.narrow {
            egui::Area::new(egui::Id::new("side_menu_overlay"))
                .order(egui::Order::Middle)
                .fixed_pos(screen_rect.min)
                .show(ctx, |ui| {
                    let response = ui.allocate_response(screen_rect.size(), egui::Sense::click());
                    ui.painter()
                        .rect_filled(screen_rect, 0.0, colors.ui.overlay);
                    if response.clicked() {
                        output.close_requested = true;
                    }
                });
        }

        let width = menu_width(screen_rect.width());
        egui::Area::new(egui::Id::new("side_menu"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen_rect.min)
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(colors.base.background)
                    .stroke(egui::Stroke::new(1.0, colors.base.border))
                    .shadow(ui.style().visuals.popup_shadow)
                    .show(ui, |ui| {
                        ui.set_width(width);
                        ui.set_min_height(screen_rect.height());

                        self.show_header(ui, colors, &mut output);
                        ui.separator();

                        section(ui, "Navigation", colors);
                        for link in navigation_links() {
                            if link_row(ui, link.icon, link.label, colors) {
                                output.navigate_to = Some(link.path);
                            }
                        }

                        ui.add_space(8.0);
                        ui.separator();

                        section(ui, "SEO Starter Templates", colors);
                        for link in template_links() {
                            if link_row(ui, link.icon, link.label, colors) {
                                output.navigate_to = Some(link.path);
                            }
                        }
                    });
            });

        output
    }

    fn show_header(&self, ui: &mut Ui, colors: &ThemeColors, output: &mut SideMenuOutput) {
        egui::Frame::none()
            .inner_margin(egui::Margin::same(12.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(40.0, 40.0), egui::Sense::hover());
                    ui.painter().rect_filled(rect, 6.0, colors.ui.accent);
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "CE",
                        egui::FontId::proportional(20.0),
                        Color32::WHITE,
                    );
                    ui.label(RichText::new("Chrome Extensions").size(17.0).strong());

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .add(egui::Button::new(RichText::new("✕").size(16.0)).frame(false))
                            .on_hover_text("Close menu")
                            .clicked()
                        {
                            output.close_requested = true;
                        }
                    });
                });
            });
    }
}

fn section(ui: &mut Ui, title: &str, colors: &ThemeColors) {
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.add_space(12.0);
        ui.label(RichText::new(title).size(13.0).color(colors.text.muted));
    });
    ui.add_space(4.0);
}

/// Draw one link row. Returns `true` when clicked.
fn link_row(ui: &mut Ui, icon: &str, label: &str, colors: &ThemeColors) -> bool {
    let width = ui.available_width();
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(width, 34.0), egui::Sense::click());

    if response.hovered() {
        ui.painter()
            .rect_filled(rect.shrink2(egui::vec2(8.0, 1.0)), 6.0, colors.base.hover);
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    let y = rect.center().y;
    ui.painter().text(
        egui::pos2(rect.left() + 20.0, y),
        egui::Align2::LEFT_CENTER,
        icon,
        egui::FontId::proportional(15.0),
        colors.ui.accent,
    );
    ui.painter().text(
        egui::pos2(rect.left() + 52.0, y),
        egui::Align2::LEFT_CENTER,
        label,
        egui::FontId::proportional(14.0),
        colors.text.primary,
    );

    response.clicked()
}
