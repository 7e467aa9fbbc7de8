use std::fs;
use std::path::Path;

use macroquad::prelude::Conf;
use serde::Deserialize;

use crate::actors::bomb::MAX_RADIUS;
use crate::geometry::Rect;

pub const SCREEN_W: i32 = 1600;
pub const SCREEN_H: i32 = 900;

// 开局生成的炸弹数量
pub const NUM_OF_BOMBS: usize = 5;

pub const CONFIG_PATH: &str = "data/config.json";

// 游戏参数（数据驱动，缺省字段使用默认值）
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    pub window_title: String,
    pub asset_dir: String,
    // 每秒模拟步数
    pub tick_rate: u32,
    pub max_steps_per_frame: u32,
    pub explosion_life: i32,
    pub game_over_hold_secs: f32,
    pub player_start: (i32, i32),
    pub player_sprite: u32,
    pub victory_sprite: u32,
    pub hit_sprite: u32,
    pub sprite_zoom: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_W,
            screen_height: SCREEN_H,
            window_title: "たたかえ！こうかとん".to_string(),
            asset_dir: "fig".to_string(),
            tick_rate: 1000,
            max_steps_per_frame: 50,
            explosion_life: 120,
            game_over_hold_secs: 2.0,
            player_start: (900, 400),
            player_sprite: 3,
            victory_sprite: 6,
            hit_sprite: 8,
            sprite_zoom: 2,
        }
    }
}

impl GameConfig {
    // 从JSON文件加载配置
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let text = fs::read_to_string(path).map_err(|e| e.to_string())?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, String> {
        let config: GameConfig = serde_json::from_str(text).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    // 读取默认路径，失败时回退到内置默认值
    pub fn load_or_default() -> Self {
        Self::load_from_file(CONFIG_PATH).unwrap_or_else(|err| {
            log::warn!("using default config, {CONFIG_PATH} unavailable: {err}");
            Self::default()
        })
    }

    fn validate(&self) -> Result<(), String> {
        // 画面至少要放得下最大的炸弹
        let min_side = 2 * MAX_RADIUS;
        if self.screen_width < min_side || self.screen_height < min_side {
            return Err(format!(
                "screen must be at least {min_side}x{min_side}, got {}x{}",
                self.screen_width, self.screen_height
            ));
        }
        if self.tick_rate == 0 || self.max_steps_per_frame == 0 {
            return Err("tick_rate and max_steps_per_frame must be non-zero".to_string());
        }
        if self.explosion_life <= 0 {
            return Err(format!("explosion_life must be positive, got {}", self.explosion_life));
        }
        if self.sprite_zoom == 0 {
            return Err("sprite_zoom must be non-zero".to_string());
        }
        Ok(())
    }

    // 画面矩形，即游戏区域
    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.screen_width, self.screen_height)
    }
}

// 配置窗口标题与尺寸
pub fn window_conf() -> Conf {
    let config = GameConfig::load_or_default();
    Conf {
        window_title: config.window_title.clone(),
        window_width: config.screen_width,
        window_height: config.screen_height,
        high_dpi: true,
        window_resizable: true,
        ..Default::default()
    }
}
