use crate::geometry::Rect;

// 爆炸特效帧数，两张图片交替闪烁的间隔
pub const BLINK_FRAMES: i32 = 10;

// 炸弹被击毁处的爆炸特效，不移动也不参与碰撞
#[derive(Clone, Debug, PartialEq)]
pub struct Explosion {
    pub rect: Rect,
    pub life: i32,
}

impl Explosion {
    pub fn new(center: (i32, i32), size: (i32, i32), life: i32) -> Self {
        Self {
            rect: Rect::from_center(center, size.0, size.1),
            life,
        }
    }

    pub fn update(&mut self) {
        self.life -= 1;
    }

    // 当前显示第几张图片（0 或 1）
    pub fn frame(&self) -> usize {
        (self.life.div_euclid(BLINK_FRAMES)).rem_euclid(2) as usize
    }

    pub fn is_finished(&self) -> bool {
        self.life <= 0
    }
}
