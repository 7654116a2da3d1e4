//! Interface strings in Russian and English

use serde::{Deserialize, Serialize};

/// Interface language
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "en")]
    English,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Russian, Language::English];

    /// Label of the switch button
    pub fn code(&self) -> &'static str {
        match self {
            Language::Russian => "RU",
            Language::English => "EN",
        }
    }

    pub fn strings(&self) -> &'static Strings {
        match self {
            Language::Russian => &RU,
            Language::English => &EN,
        }
    }
}

/// Every label shown by the interface
#[derive(Debug)]
pub struct Strings {
    pub view_mode: &'static str,
    pub edit_mode: &'static str,

    pub edit_mode_key: &'static str,
    pub move_key: &'static str,
    pub rotate_key: &'static str,
    pub action_key: &'static str,

    pub studio_title: &'static str,
    pub block: &'static str,
    pub sphere: &'static str,
    pub part: &'static str,
    pub color: &'static str,

    pub move_tab: &'static str,
    pub scale_tab: &'static str,
    pub rotate_tab: &'static str,

    pub pos_x: &'static str,
    pub pos_y: &'static str,
    pub pos_z: &'static str,
    pub scale_x: &'static str,
    pub scale_y: &'static str,
    pub scale_z: &'static str,
    pub rot_y: &'static str,
    pub no_selection: &'static str,

    pub delete_btn: &'static str,

    pub scene_file: &'static str,
    pub save_btn: &'static str,
    pub load_btn: &'static str,
    pub saved: &'static str,
    pub loaded: &'static str,

    pub alert_title: &'static str,
    pub limit_reached: &'static str,
    pub save_failed: &'static str,
    pub load_failed: &'static str,
    pub ok_btn: &'static str,

    pub objects: &'static str,
}

pub static RU: Strings = Strings {
    view_mode: "ОБЫЧНЫЙ РЕЖИМ",
    edit_mode: "РЕЖИМ СТУДИИ",

    edit_mode_key: "Меню",
    move_key: "Полет",
    rotate_key: "Камера",
    action_key: "Выбор / Спавн",

    studio_title: "СТУДИЯ",
    block: "КУБ",
    sphere: "ШАР",
    part: "СТЕНА (Статика)",
    color: "Цвет",

    move_tab: "ДВИГАТЬ",
    scale_tab: "РАЗМЕР",
    rotate_tab: "ПОВОРОТ",

    pos_x: "Позиция X",
    pos_y: "Позиция Y",
    pos_z: "Позиция Z",
    scale_x: "Ширина X",
    scale_y: "Высота Y",
    scale_z: "Длина Z",
    rot_y: "Поворот Y",
    no_selection: "Ничего не выбрано",

    delete_btn: "УДАЛИТЬ",

    scene_file: "Файл сцены",
    save_btn: "СОХРАНИТЬ",
    load_btn: "ЗАГРУЗИТЬ",
    saved: "Сохранено объектов",
    loaded: "Загружено объектов",

    alert_title: "Внимание",
    limit_reached: "Достигнут лимит объектов",
    save_failed: "Не удалось сохранить сцену",
    load_failed: "Не удалось загрузить сцену",
    ok_btn: "ОК",

    objects: "Объекты",
};

pub static EN: Strings = Strings {
    view_mode: "VIEW MODE",
    edit_mode: "STUDIO MODE",

    edit_mode_key: "Menu",
    move_key: "Fly",
    rotate_key: "Camera",
    action_key: "Select / Spawn",

    studio_title: "STUDIO",
    block: "BLOCK",
    sphere: "SPHERE",
    part: "PART (Static)",
    color: "Color",

    move_tab: "MOVE",
    scale_tab: "SCALE",
    rotate_tab: "ROTATE",

    pos_x: "Position X",
    pos_y: "Position Y",
    pos_z: "Position Z",
    scale_x: "Scale X",
    scale_y: "Scale Y",
    scale_z: "Scale Z",
    rot_y: "Rotation Y",
    no_selection: "Nothing selected",

    delete_btn: "DELETE",

    scene_file: "Scene file",
    save_btn: "SAVE",
    load_btn: "LOAD",
    saved: "Objects saved",
    loaded: "Objects loaded",

    alert_title: "Notice",
    limit_reached: "Object limit reached",
    save_failed: "Could not save the scene",
    load_failed: "Could not load the scene",
    ok_btn: "OK",

    objects: "Objects",
};

impl Strings {
    /// Mode indicator text
    pub fn mode(&self, edit_mode: bool) -> &'static str {
        if edit_mode {
            self.edit_mode
        } else {
            self.view_mode
        }
    }

    /// Button label for an object kind
    pub fn kind_label(&self, kind: sandbox_core::ObjectKind) -> &'static str {
        match kind {
            sandbox_core::ObjectKind::Cube => self.block,
            sandbox_core::ObjectKind::Sphere => self.sphere,
            sandbox_core::ObjectKind::Wall => self.part,
        }
    }
}
