use crate::actors::bird::{Bird, Direction};
use crate::geometry::{check_bound, rotated_extent, Rect};

// 光束：沿发射时的朝向直线飞行，离开画面即消失
#[derive(Clone, Debug, PartialEq)]
pub struct Beam {
    pub rect: Rect,
    pub direction: Direction,
}

impl Beam {
    // 从玩家朝向一侧的边缘发射，sprite 为未旋转的光束图片尺寸
    pub fn fire(bird: &Bird, sprite: (i32, i32)) -> Self {
        let direction = bird.facing;
        let (w, h) = rotated_extent(sprite.0, sprite.1, direction.angle_degrees());
        let (dx, dy) = direction.delta();
        let from = bird.rect();
        let (cx, cy) = from.center();
        let center = (cx + dx * from.width / 2, cy + dy * from.height / 2);
        Self {
            rect: Rect::from_center(center, w, h),
            direction,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn vel(&self) -> (i32, i32) {
        self.direction.delta()
    }

    pub fn angle_degrees(&self) -> f32 {
        self.direction.angle_degrees()
    }

    // 移动一步，返回是否仍在画面内
    pub fn update(&mut self, area: &Rect) -> bool {
        let (vx, vy) = self.vel();
        self.rect.move_by(vx, vy);
        check_bound(area, &self.rect) == (true, true)
    }
}
