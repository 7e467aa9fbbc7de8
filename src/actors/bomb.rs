use rand::seq::SliceRandom;
use rand::Rng;

use crate::geometry::Rect;

pub const BOMB_COLORS: [[u8; 3]; 6] = [
    [255, 0, 0],
    [0, 255, 0],
    [0, 0, 255],
    [255, 255, 0],
    [255, 0, 255],
    [0, 255, 255],
];

pub const MIN_RADIUS: i32 = 10;
pub const MAX_RADIUS: i32 = 50;

// 生成位置的最大重试次数
pub const SPAWN_ATTEMPTS: usize = 100;

// 炸弹：匀速运动的圆，碰到边界反弹
#[derive(Clone, Debug, PartialEq)]
pub struct Bomb {
    pub rect: Rect,
    pub radius: i32,
    pub vel: (i32, i32),
    pub color: [u8; 3],
}

impl Bomb {
    pub fn new(center: (i32, i32), radius: i32, vel: (i32, i32), color: [u8; 3]) -> Self {
        Self {
            rect: Rect::from_center(center, radius * 2, radius * 2),
            radius,
            vel,
            color,
        }
    }

    // 随机生成完全在区域内、且尽量不与 keep_clear 重叠的炸弹；
    // 区域需至少容纳最大直径，多次重试仍重叠时接受最后一次结果
    pub fn random(area: &Rect, keep_clear: &Rect, rng: &mut impl Rng) -> Self {
        let radius = rng.gen_range(MIN_RADIUS..=MAX_RADIUS);
        let color = *BOMB_COLORS.choose(rng).unwrap_or(&BOMB_COLORS[0]);
        let vel = (
            if rng.gen_bool(0.5) { 1 } else { -1 },
            if rng.gen_bool(0.5) { 1 } else { -1 },
        );
        let mut place = || {
            let center = (
                rng.gen_range(area.left + radius..=area.right() - radius),
                rng.gen_range(area.top + radius..=area.bottom() - radius),
            );
            Self::new(center, radius, vel, color)
        };
        let mut bomb = place();
        for _ in 1..SPAWN_ATTEMPTS {
            if !bomb.rect.intersects(keep_clear) {
                break;
            }
            bomb = place();
        }
        if bomb.rect.intersects(keep_clear) {
            log::warn!("bomb spawned over the keep-clear area after {SPAWN_ATTEMPTS} attempts");
        }
        bomb
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn center(&self) -> (i32, i32) {
        self.rect.center()
    }

    // 预判反弹：下一步将越过前进方向的边界时先反转该轴速度再移动。
    // 与“越界后再反转”的做法不同，炸弹不会超出边界，每次反弹少走 1 像素
    pub fn update(&mut self, area: &Rect) {
        let next = self.rect.moved(self.vel.0, self.vel.1);
        let (vx, vy) = self.vel;
        if (vx < 0 && next.left < area.left) || (vx > 0 && next.right() > area.right()) {
            self.vel.0 = -vx;
        }
        if (vy < 0 && next.top < area.top) || (vy > 0 && next.bottom() > area.bottom()) {
            self.vel.1 = -vy;
        }
        self.rect.move_by(self.vel.0, self.vel.1);
    }
}
