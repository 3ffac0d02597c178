use crate::slider::FovSlider;

const TRACK_RGBA: [u8; 4] = [180, 180, 180, 200];
const HANDLE_RADIUS: f32 = 8.0;
const LABEL_OFFSET: f32 = 20.0;
const LABEL_SIZE: f32 = 16.0;

/// Text shown above the slider track
pub fn fov_label(fov: f32) -> String {
    format!("FOV: {}", fov as i32)
}

/// Paint the fov slider on the foreground layer
pub fn draw_fov_slider(ctx: &egui::Context, slider: &FovSlider) {
    let rect = slider.rect();
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("fov_slider"),
    ));

    let track = egui::Rect::from_min_size(
        egui::pos2(rect.left, rect.top),
        egui::vec2(rect.width, rect.height),
    );
    let [r, g, b, a] = TRACK_RGBA;
    painter.rect_filled(track, 0.0, egui::Color32::from_rgba_unmultiplied(r, g, b, a));

    painter.circle_filled(
        egui::pos2(slider.handle_x(), rect.center_y()),
        HANDLE_RADIUS,
        egui::Color32::WHITE,
    );

    painter.text(
        egui::pos2(rect.left, rect.top - LABEL_OFFSET),
        egui::Align2::LEFT_TOP,
        fov_label(slider.fov()),
        egui::FontId::proportional(LABEL_SIZE),
        egui::Color32::WHITE,
    );
}
