use crate::geometry::{check_bound, Rect};

// 八方向朝向
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::UpRight,
        Direction::Up,
        Direction::UpLeft,
        Direction::Left,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    // 由净位移换算朝向，零位移没有朝向
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx.signum(), dy.signum()) {
            (1, 0) => Some(Direction::Right),
            (1, -1) => Some(Direction::UpRight),
            (0, -1) => Some(Direction::Up),
            (-1, -1) => Some(Direction::UpLeft),
            (-1, 0) => Some(Direction::Left),
            (-1, 1) => Some(Direction::DownLeft),
            (0, 1) => Some(Direction::Down),
            (1, 1) => Some(Direction::DownRight),
            _ => None,
        }
    }

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::UpRight => (1, -1),
            Direction::Up => (0, -1),
            Direction::UpLeft => (-1, -1),
            Direction::Left => (-1, 0),
            Direction::DownLeft => (-1, 1),
            Direction::Down => (0, 1),
            Direction::DownRight => (1, 1),
        }
    }

    // 朝向对应的贴图姿态，原图朝左
    pub fn orientation(self) -> Orientation {
        let (mirrored, degrees) = match self {
            Direction::Right => (true, 0.0),
            Direction::UpRight => (true, 45.0),
            Direction::Up => (true, 90.0),
            Direction::UpLeft => (false, -45.0),
            Direction::Left => (false, 0.0),
            Direction::DownLeft => (false, 45.0),
            Direction::Down => (true, -90.0),
            Direction::DownRight => (true, -45.0),
        };
        Orientation { mirrored, degrees }
    }

    // 射击角度（逆时针，度）
    pub fn angle_degrees(self) -> f32 {
        let (dx, dy) = self.delta();
        (-dy as f32).atan2(dx as f32).to_degrees()
    }
}

// 贴图绘制方式：是否水平翻转，再逆时针旋转 degrees 度
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    pub mirrored: bool,
    pub degrees: f32,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    // 所有按下方向键的位移之和
    pub fn net_delta(&self) -> (i32, i32) {
        let mut sum = (0, 0);
        for (held, (dx, dy)) in [
            (self.up, (0, -1)),
            (self.down, (0, 1)),
            (self.left, (-1, 0)),
            (self.right, (1, 0)),
        ] {
            if held {
                sum.0 += dx;
                sum.1 += dy;
            }
        }
        sum
    }
}

// 当前显示的形象
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pose {
    Facing,
    Victory,
    Hit,
}

// 玩家角色：位置矩形、朝向与形象
#[derive(Clone, Debug)]
pub struct Bird {
    pub rect: Rect,
    pub facing: Direction,
    pub pose: Pose,
}

impl Bird {
    pub fn new(center: (i32, i32), size: (i32, i32)) -> Self {
        Self {
            rect: Rect::from_center(center, size.0, size.1),
            facing: Direction::Right,
            pose: Pose::Facing,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    // 按净位移移动，越界则整体撤销；只要净位移非零就更新朝向
    pub fn update(&mut self, keys: &HeldKeys, area: &Rect) {
        let (dx, dy) = keys.net_delta();
        self.rect.move_by(dx, dy);
        if check_bound(area, &self.rect) != (true, true) {
            self.rect.move_by(-dx, -dy);
        }
        if let Some(dir) = Direction::from_delta(dx, dy) {
            self.facing = dir;
            self.pose = Pose::Facing;
        }
    }

    pub fn celebrate(&mut self) {
        self.pose = Pose::Victory;
    }

    pub fn hit(&mut self) {
        self.pose = Pose::Hit;
    }
}
