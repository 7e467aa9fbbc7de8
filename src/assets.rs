use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::RgbaImage;
use macroquad::prelude::*;

use kokaton::config::GameConfig;
use kokaton::error::AssetError;
use kokaton::world::SpriteMetrics;

// 所有贴图，启动时一次性加载
pub struct Assets {
    pub background: Texture2D,
    // 玩家原图（朝左）及其水平镜像
    pub bird: Texture2D,
    pub bird_mirrored: Texture2D,
    pub victory: Texture2D,
    pub hit: Texture2D,
    pub beam: Texture2D,
    pub explosion: [Texture2D; 2],
    metrics: SpriteMetrics,
}

impl Assets {
    pub fn load(config: &GameConfig) -> Result<Self, AssetError> {
        let dir = Path::new(&config.asset_dir);
        let zoom = config.sprite_zoom;

        let background = load_rgba(&dir.join("pg_bg.jpg"), 1)?;
        let bird = load_rgba(&sprite_path(dir, config.player_sprite), zoom)?;
        let victory = load_rgba(&sprite_path(dir, config.victory_sprite), zoom)?;
        let hit = load_rgba(&sprite_path(dir, config.hit_sprite), zoom)?;
        let beam = load_rgba(&dir.join("beam.png"), zoom)?;
        let explosion = load_rgba(&dir.join("explosion.gif"), 1)?;

        let metrics = SpriteMetrics {
            bird: image_size(&bird),
            beam: image_size(&beam),
            explosion: image_size(&explosion),
        };
        log::debug!("sprite metrics: {metrics:?}");

        Ok(Self {
            background: to_texture(&background),
            bird_mirrored: to_texture(&imageops::flip_horizontal(&bird)),
            bird: to_texture(&bird),
            victory: to_texture(&victory),
            hit: to_texture(&hit),
            beam: to_texture(&beam),
            // 第二帧为上下左右同时翻转
            explosion: [to_texture(&explosion), to_texture(&imageops::rotate180(&explosion))],
            metrics,
        })
    }

    pub fn metrics(&self) -> SpriteMetrics {
        self.metrics
    }
}

fn sprite_path(dir: &Path, num: u32) -> PathBuf {
    dir.join(format!("{num}.png"))
}

// 解码图片并按整数倍放大
fn load_rgba(path: &Path, zoom: u32) -> Result<RgbaImage, AssetError> {
    let img = image::open(path)
        .map_err(|e| AssetError::new(path, e))?
        .to_rgba8();
    if zoom <= 1 {
        return Ok(img);
    }
    Ok(imageops::resize(
        &img,
        img.width() * zoom,
        img.height() * zoom,
        FilterType::Nearest,
    ))
}

fn image_size(img: &RgbaImage) -> (i32, i32) {
    (img.width() as i32, img.height() as i32)
}

fn to_texture(img: &RgbaImage) -> Texture2D {
    let texture = Texture2D::from_rgba8(img.width() as u16, img.height() as u16, img.as_raw());
    texture.set_filter(FilterMode::Nearest);
    texture
}

// 加载UI字体，优先使用资源目录中的字体，其次尝试系统字体
pub async fn load_ui_font(asset_dir: &str) -> Option<Font> {
    let bundled = Path::new(asset_dir).join("font.ttf");
    let candidates = [
        bundled.to_string_lossy().into_owned(),
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf".to_string(),
        "/System/Library/Fonts/Helvetica.ttc".to_string(),
        "C:/Windows/Fonts/arial.ttf".to_string(),
    ];

    for path in &candidates {
        if !Path::new(path).exists() {
            continue;
        }
        match load_ttf_font(path).await {
            Ok(font) => return Some(font),
            Err(err) => log::warn!("font {path} unusable: {err}"),
        }
    }

    None
}
