// 整数坐标的轴对齐矩形，所有边界与碰撞判定共用
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    // 以中心点构造矩形
    pub fn from_center(center: (i32, i32), width: i32, height: i32) -> Self {
        let mut rect = Self::new(0, 0, width, height);
        rect.set_center(center);
        rect
    }

    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    pub fn center(&self) -> (i32, i32) {
        (self.left + self.width / 2, self.top + self.height / 2)
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn set_center(&mut self, (cx, cy): (i32, i32)) {
        self.left = cx - self.width / 2;
        self.top = cy - self.height / 2;
    }

    // 返回平移后的副本
    pub fn moved(&self, dx: i32, dy: i32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            ..*self
        }
    }

    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.left += dx;
        self.top += dy;
    }

    // 严格重叠判定：共边不算，空矩形永不相交
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.width <= 0 || self.height <= 0 || other.width <= 0 || other.height <= 0 {
            return false;
        }
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }

    // 判断是否完全包含另一个矩形
    pub fn contains(&self, other: &Rect) -> bool {
        check_bound(self, other) == (true, true)
    }
}

// 分轴判断 obj 是否在 area 内，返回 (横向, 纵向)；贴边仍算在内
pub fn check_bound(area: &Rect, obj: &Rect) -> (bool, bool) {
    let in_x = obj.left >= area.left && obj.right() <= area.right();
    let in_y = obj.top >= area.top && obj.bottom() <= area.bottom();
    (in_x, in_y)
}

// 两个矩形是否重叠（对称）
pub fn check_collide(a: &Rect, b: &Rect) -> bool {
    a.intersects(b)
}

// 图片旋转 degrees 度后的外接矩形尺寸
pub fn rotated_extent(width: i32, height: i32, degrees: f32) -> (i32, i32) {
    let rad = degrees.to_radians();
    let (sin, cos) = (rad.sin().abs(), rad.cos().abs());
    let w = width as f32 * cos + height as f32 * sin;
    let h = width as f32 * sin + height as f32 * cos;
    (w.round() as i32, h.round() as i32)
}
