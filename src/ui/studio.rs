//! egui drawing for the studio panel, HUD, crosshair and alerts

use std::ops::RangeInclusive;

use egui::{Align2, Color32, RichText, Stroke};
use sandbox_core::{EditTab, ObjectKind, World, POSITION_RANGE, ROTATION_RANGE, SCALE_RANGE};
use sandbox_math::Vec3;

use super::state::{StudioState, UiCommand};
use crate::i18n::Language;

const PANEL_WIDTH: f32 = 260.0;
const ACCENT: Color32 = Color32::from_rgb(0x00, 0xaa, 0xff);

/// Per-frame values shown by the HUD
#[derive(Clone, Copy, Debug)]
pub struct HudInfo {
    pub camera_position: Vec3,
    pub show_coordinates: bool,
}

/// Draw the whole interface, returning the commands the user issued
pub fn draw(ctx: &egui::Context, state: &mut StudioState, world: &World, hud: &HudInfo) -> Vec<UiCommand> {
    let mut commands = Vec::new();

    draw_overlay(ctx, state, hud);

    if state.edit_mode {
        draw_crosshair(ctx);
        draw_panel(ctx, state, world, &mut commands);
    }

    if let Some(message) = state.alert().map(str::to_owned) {
        draw_alert(ctx, state, &message, &mut commands);
    }

    commands
}

/// Mode indicator, key hints, language switch and camera coordinates
fn draw_overlay(ctx: &egui::Context, state: &mut StudioState, hud: &HudInfo) {
    let s = state.strings();

    egui::Area::new(egui::Id::new("mode_indicator"))
        .anchor(Align2::LEFT_TOP, [12.0, 12.0])
        .show(ctx, |ui| {
            let color = if state.edit_mode { ACCENT } else { Color32::WHITE };
            ui.label(RichText::new(s.mode(state.edit_mode)).strong().size(18.0).color(color));

            for (key, action) in [
                ("Q", s.edit_mode_key),
                ("WASD", s.move_key),
                ("RMB", s.rotate_key),
                ("LMB", s.action_key),
            ] {
                ui.label(RichText::new(format!("[{}] {}", key, action)).small().color(Color32::LIGHT_GRAY));
            }

            ui.horizontal(|ui| {
                for lang in Language::ALL {
                    let active = state.language == lang;
                    if ui.selectable_label(active, lang.code()).clicked() {
                        state.language = lang;
                    }
                }
            });
        });

    if hud.show_coordinates {
        let p = hud.camera_position;
        egui::Area::new(egui::Id::new("coords"))
            .anchor(Align2::LEFT_BOTTOM, [12.0, -12.0])
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(format!("{}, {}, {}", p.x.round(), p.y.round(), p.z.round()))
                        .monospace()
                        .color(Color32::WHITE),
                );
            });
    }
}

fn draw_crosshair(ctx: &egui::Context) {
    let painter = ctx.layer_painter(egui::LayerId::new(egui::Order::Foreground, egui::Id::new("crosshair")));
    let center = ctx.screen_rect().center();
    let size = 8.0;
    let stroke = Stroke::new(1.5, Color32::WHITE);
    painter.line_segment([egui::pos2(center.x - size, center.y), egui::pos2(center.x + size, center.y)], stroke);
    painter.line_segment([egui::pos2(center.x, center.y - size), egui::pos2(center.x, center.y + size)], stroke);
}

fn draw_panel(ctx: &egui::Context, state: &mut StudioState, world: &World, commands: &mut Vec<UiCommand>) {
    let s = state.strings();

    egui::SidePanel::right("studio_panel")
        .resizable(false)
        .exact_width(PANEL_WIDTH)
        .show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading(RichText::new(s.studio_title).strong());
            ui.separator();

            ui.horizontal_wrapped(|ui| {
                for kind in ObjectKind::ALL {
                    ui.selectable_value(&mut state.spawn_kind, kind, s.kind_label(kind));
                }
            });

            ui.horizontal(|ui| {
                ui.label(s.color);
                let mut rgb = state.spawn_color.to_array();
                if ui.color_edit_button_srgb(&mut rgb).changed() {
                    state.spawn_color = rgb.into();
                }
                ui.monospace(state.spawn_color.to_hex());
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.selectable_value(&mut state.tab, EditTab::Move, s.move_tab);
                ui.selectable_value(&mut state.tab, EditTab::Scale, s.scale_tab);
                ui.selectable_value(&mut state.tab, EditTab::Rotate, s.rotate_tab);
            });

            let tab = state.tab;
            match state.edit_fields_mut() {
                Some(fields) => {
                    match tab {
                        EditTab::Move => {
                            ui.add(field_slider(&mut fields.position.x, POSITION_RANGE, s.pos_x));
                            ui.add(field_slider(&mut fields.position.y, POSITION_RANGE, s.pos_y));
                            ui.add(field_slider(&mut fields.position.z, POSITION_RANGE, s.pos_z));
                        }
                        EditTab::Scale => {
                            ui.add(field_slider(&mut fields.scale.x, SCALE_RANGE, s.scale_x));
                            ui.add(field_slider(&mut fields.scale.y, SCALE_RANGE, s.scale_y));
                            ui.add(field_slider(&mut fields.scale.z, SCALE_RANGE, s.scale_z));
                        }
                        EditTab::Rotate => {
                            ui.add(field_slider(&mut fields.rotation_y, ROTATION_RANGE, s.rot_y));
                        }
                    }

                    ui.add_space(6.0);
                    let delete = egui::Button::new(RichText::new(s.delete_btn).color(Color32::WHITE))
                        .fill(Color32::from_rgb(0x99, 0x22, 0x22));
                    if ui.add(delete).clicked() {
                        commands.push(UiCommand::DeleteSelected);
                    }
                }
                None => {
                    ui.label(RichText::new(s.no_selection).italics().color(Color32::GRAY));
                }
            }

            ui.separator();

            ui.label(s.scene_file);
            ui.text_edit_singleline(&mut state.scene_path);
            ui.horizontal(|ui| {
                if ui.button(s.save_btn).clicked() {
                    commands.push(UiCommand::SaveScene);
                }
                if ui.button(s.load_btn).clicked() {
                    commands.push(UiCommand::LoadScene);
                }
            });
            if let Some(status) = &state.status {
                ui.label(RichText::new(status).small());
            }

            ui.separator();
            let count = if world.max_objects() > 0 {
                format!("{}: {} / {}", s.objects, world.len(), world.max_objects())
            } else {
                format!("{}: {}", s.objects, world.len())
            };
            ui.label(RichText::new(count).small());
        });
}

/// Slider over the usual range that shows out-of-range values as they are
///
/// Only dragging changes the value, so a fallen object or a loaded scale of
/// 50 survives being selected.
fn field_slider<'a>(value: &'a mut f32, range: RangeInclusive<f32>, label: &str) -> egui::Slider<'a> {
    egui::Slider::new(value, range)
        .clamping(egui::SliderClamping::Never)
        .text(label)
}

/// Modal message; the scene behind it ignores clicks until it is closed
fn draw_alert(ctx: &egui::Context, state: &StudioState, message: &str, commands: &mut Vec<UiCommand>) {
    let s = state.strings();

    // Dim the scene and swallow pointer input behind the dialog
    egui::Area::new(egui::Id::new("alert_backdrop"))
        .order(egui::Order::Middle)
        .fixed_pos(egui::Pos2::ZERO)
        .show(ctx, |ui| {
            let rect = ctx.screen_rect();
            ui.painter().rect_filled(rect, 0.0, Color32::from_black_alpha(160));
            ui.allocate_rect(rect, egui::Sense::click());
        });

    egui::Window::new(s.alert_title)
        .order(egui::Order::Foreground)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(message);
            ui.add_space(8.0);
            if ui.button(s.ok_btn).clicked() {
                commands.push(UiCommand::CloseAlert);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandbox_core::Color;

    fn run(state: &mut StudioState, world: &World) -> Vec<UiCommand> {
        let ctx = egui::Context::default();
        let hud = HudInfo {
            camera_position: Vec3::new(100.4, 99.6, -0.2),
            show_coordinates: true,
        };
        let mut commands = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            commands = draw(ctx, state, world, &hud);
        });
        commands
    }

    #[test]
    fn test_draw_view_mode_issues_nothing() {
        let mut state = StudioState::default();
        assert!(run(&mut state, &World::new()).is_empty());
    }

    #[test]
    fn test_draw_edit_mode_with_selection_and_alert() {
        let mut world = World::new();
        let key = world.spawn(ObjectKind::Wall, Color::WHITE, Vec3::ZERO).unwrap();
        world.select(key);

        let mut state = StudioState::default();
        state.edit_mode = true;
        state.sync_selection(&world);
        state.show_alert("limit");
        for tab in [EditTab::Move, EditTab::Scale, EditTab::Rotate] {
            state.tab = tab;
            assert!(run(&mut state, &world).is_empty());
        }
        // Drawing alone never changes the selection's fields
        assert_eq!(state.edit_fields().unwrap().position, Vec3::ZERO);
    }

    #[test]
    fn test_out_of_range_fields_survive_drawing() {
        let mut world = World::new();
        let key = world
            .spawn_scaled(ObjectKind::Cube, Color::WHITE, Vec3::new(0.0, -1500.0, 0.0), Vec3::splat(50.0))
            .unwrap();
        world.select(key);

        let mut state = StudioState::default();
        state.edit_mode = true;
        state.sync_selection(&world);
        let before = *state.edit_fields().unwrap();

        for tab in [EditTab::Move, EditTab::Scale, EditTab::Rotate] {
            state.tab = tab;
            run(&mut state, &world);
            run(&mut state, &world);
        }
        let after = *state.edit_fields().unwrap();
        assert_eq!(after, before);
        assert_eq!(after.position.y, -1500.0);
        assert_eq!(after.scale, Vec3::splat(50.0));

        // Pushing the shown values back leaves the object where it was
        assert!(world.apply_edit(key, &after));
        let object = world.get(key).unwrap();
        assert_eq!(object.transform.position.y, -1500.0);
        assert_eq!(object.transform.scale, Vec3::splat(50.0));
    }
}
