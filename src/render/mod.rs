use macroquad::prelude::*;

use kokaton::actors::{Beam, Bird, Bomb, Explosion, Pose};
use kokaton::geometry::Rect as GameRect;
use kokaton::world::World;

use crate::assets::Assets;
use crate::ui::Ui;

// 固定逻辑分辨率的画布，窗口缩放时等比放大并居中
pub struct Screen {
    width: f32,
    height: f32,
    target: RenderTarget,
}

impl Screen {
    pub fn new(area: &GameRect) -> Self {
        let target = render_target(area.width.max(1) as u32, area.height.max(1) as u32);
        target.texture.set_filter(FilterMode::Linear);
        Self {
            width: area.width as f32,
            height: area.height as f32,
            target,
        }
    }

    // 绘制一帧：先画到离屏目标，再缩放到窗口
    pub fn draw_world(&self, ui: &Ui, assets: &Assets, world: &World) {
        let mut camera = Camera2D::from_display_rect(Rect::new(0.0, 0.0, self.width, self.height));
        camera.render_target = Some(self.target.clone());
        set_camera(&camera);

        draw_background(assets);
        for beam in &world.beams {
            draw_beam(assets, beam);
        }
        for bomb in &world.bombs {
            draw_bomb(bomb);
        }
        for explosion in &world.explosions {
            draw_explosion(assets, explosion);
        }
        draw_bird(assets, &world.bird);
        ui.score(&world.score, self.height);

        set_default_camera();
        clear_background(BLACK);
        let (scale, offset_x, offset_y) = self.compute_viewport();
        draw_texture_ex(
            &self.target.texture,
            offset_x,
            offset_y,
            WHITE,
            DrawTextureParams {
                // RenderTarget 在纹理坐标系中是倒置的，这里做一次垂直翻转
                source: Some(Rect::new(0.0, self.height, self.width, -self.height)),
                dest_size: Some(vec2(self.width * scale, self.height * scale)),
                ..Default::default()
            },
        );
    }

    // 根据窗口尺寸计算缩放比例与居中偏移
    fn compute_viewport(&self) -> (f32, f32, f32) {
        let sw = screen_width();
        let sh = screen_height();
        let scale = (sw / self.width).min(sh / self.height).max(0.1);
        let offset_x = (sw - self.width * scale) * 0.5;
        let offset_y = (sh - self.height * scale) * 0.5;
        (scale, offset_x, offset_y)
    }
}

fn draw_background(assets: &Assets) {
    clear_background(BLACK);
    draw_texture(&assets.background, 0.0, 0.0, WHITE);
}

// 以矩形中心为锚点绘制贴图，角度为逆时针度数
fn draw_sprite(texture: &Texture2D, rect: &GameRect, degrees: f32) {
    let (cx, cy) = rect.center();
    let w = texture.width();
    let h = texture.height();
    draw_texture_ex(
        texture,
        cx as f32 - w * 0.5,
        cy as f32 - h * 0.5,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(w, h)),
            rotation: -degrees.to_radians(),
            ..Default::default()
        },
    );
}

fn draw_beam(assets: &Assets, beam: &Beam) {
    draw_sprite(&assets.beam, &beam.rect(), beam.angle_degrees());
}

fn draw_bomb(bomb: &Bomb) {
    let (cx, cy) = bomb.center();
    let [r, g, b] = bomb.color;
    draw_circle(cx as f32, cy as f32, bomb.radius as f32, Color::from_rgba(r, g, b, 255));
}

fn draw_explosion(assets: &Assets, explosion: &Explosion) {
    draw_sprite(&assets.explosion[explosion.frame()], &explosion.rect, 0.0);
}

// 按形象与朝向选择玩家贴图
fn draw_bird(assets: &Assets, bird: &Bird) {
    match bird.pose {
        Pose::Facing => {
            let orientation = bird.facing.orientation();
            let texture = if orientation.mirrored {
                &assets.bird_mirrored
            } else {
                &assets.bird
            };
            draw_sprite(texture, &bird.rect(), orientation.degrees);
        }
        Pose::Victory => draw_sprite(&assets.victory, &bird.rect(), 0.0),
        Pose::Hit => draw_sprite(&assets.hit, &bird.rect(), 0.0),
    }
}
